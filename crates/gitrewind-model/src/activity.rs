//! Activity model: the normalized yearly summary of a user's code activity.
//!
//! The activity model is produced upstream (API fetch + aggregation) and is
//! treated as a read-only value by every generation stage.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Number of monthly buckets in a well-formed activity model.
pub const MONTHS_PER_YEAR: usize = 12;

/// Identity of the user the summary belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    /// ISO-8601 account creation date, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_since: Option<String>,
}

/// Aggregate totals for the year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityTotals {
    pub commits: u32,
    pub pull_requests: u32,
    pub reviews: u32,
    pub additions: u64,
    pub deletions: u64,
    pub active_days: u32,
    pub longest_streak: u32,
    pub repositories: u32,
}

/// Behavioral patterns derived from the contribution calendar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityPatterns {
    /// 0 = Sunday.
    pub busiest_day_of_week: u8,
    pub busiest_hour: u8,
    /// 0 = January.
    pub busiest_month: u8,
    /// Fraction of days with activity, in [0, 1].
    pub consistency_score: f64,
    /// Weekday commits divided by weekend commits.
    pub weekday_vs_weekend: f64,
}

/// Share of repositories written in a language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStats {
    pub name: String,
    /// Display color as `#rrggbb`.
    #[serde(default)]
    pub color: String,
    /// Percentage of repositories, 0-100.
    pub percentage: f64,
    #[serde(default)]
    pub commits: u32,
}

/// A user the subject interacted with during the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorStats {
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
    pub interactions: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shared_repos: Vec<String>,
}

/// Commit count for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayActivity {
    pub date: String,
    pub commits: u32,
    /// Contribution quartile, 0-4.
    pub level: u8,
}

/// Commit count for one month, with activity normalized to the peak month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyActivity {
    /// 0 = January.
    pub month: u8,
    pub commits: u32,
    /// Commits relative to the busiest month, in [0, 1].
    pub normalized_activity: f64,
}

/// The per-user yearly activity summary consumed by parameter synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityModel {
    pub user: UserIdentity,
    pub year: i32,
    #[serde(default)]
    pub totals: ActivityTotals,
    #[serde(default)]
    pub patterns: ActivityPatterns,
    /// Sorted descending by percentage.
    #[serde(default)]
    pub languages: Vec<LanguageStats>,
    #[serde(default)]
    pub collaborators: Vec<CollaboratorStats>,
    #[serde(default)]
    pub daily_activity: BTreeMap<String, DayActivity>,
    /// Exactly 12 entries, indexed 0-11.
    #[serde(default)]
    pub monthly_activity: Vec<MonthlyActivity>,
}

impl ActivityModel {
    /// Creates a builder for an activity model.
    pub fn builder(login: impl Into<String>, year: i32) -> ActivityModelBuilder {
        ActivityModelBuilder::new(login, year)
    }

    /// Builds a 12-entry monthly series, normalizing each month to the peak.
    pub fn monthly_series(commits: [u32; MONTHS_PER_YEAR]) -> Vec<MonthlyActivity> {
        let peak = commits.iter().copied().max().unwrap_or(0);
        commits
            .iter()
            .enumerate()
            .map(|(month, &count)| MonthlyActivity {
                month: month as u8,
                commits: count,
                normalized_activity: if peak == 0 {
                    0.0
                } else {
                    count as f64 / peak as f64
                },
            })
            .collect()
    }

    /// Top language by percentage, if any.
    pub fn top_language(&self) -> Option<&LanguageStats> {
        self.languages.first()
    }
}

/// Builder for [`ActivityModel`], used by fixtures and tests.
#[derive(Debug, Clone)]
pub struct ActivityModelBuilder {
    model: ActivityModel,
}

impl ActivityModelBuilder {
    /// Creates a builder with an empty year: no languages, no collaborators
    /// and twelve silent months.
    pub fn new(login: impl Into<String>, year: i32) -> Self {
        let login = login.into();
        Self {
            model: ActivityModel {
                user: UserIdentity {
                    avatar_url: format!("https://avatars.example.com/{}", login),
                    login,
                    name: None,
                    member_since: None,
                },
                year,
                totals: ActivityTotals::default(),
                patterns: ActivityPatterns::default(),
                languages: Vec::new(),
                collaborators: Vec::new(),
                daily_activity: BTreeMap::new(),
                monthly_activity: ActivityModel::monthly_series([0; MONTHS_PER_YEAR]),
            },
        }
    }

    pub fn commits(mut self, commits: u32) -> Self {
        self.model.totals.commits = commits;
        self
    }

    pub fn pull_requests(mut self, pull_requests: u32) -> Self {
        self.model.totals.pull_requests = pull_requests;
        self
    }

    pub fn active_days(mut self, active_days: u32) -> Self {
        self.model.totals.active_days = active_days;
        self
    }

    pub fn longest_streak(mut self, longest_streak: u32) -> Self {
        self.model.totals.longest_streak = longest_streak;
        self
    }

    pub fn consistency(mut self, score: f64) -> Self {
        self.model.patterns.consistency_score = score;
        self
    }

    /// Adds a language. Languages are kept sorted descending by percentage.
    pub fn language(
        mut self,
        name: impl Into<String>,
        color: impl Into<String>,
        percentage: f64,
    ) -> Self {
        self.model.languages.push(LanguageStats {
            name: name.into(),
            color: color.into(),
            percentage,
            commits: 0,
        });
        self.model
            .languages
            .sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        self
    }

    pub fn collaborator(mut self, login: impl Into<String>, interactions: u32) -> Self {
        let login = login.into();
        self.model.collaborators.push(CollaboratorStats {
            avatar_url: format!("https://avatars.example.com/{}", login),
            login,
            interactions,
            shared_repos: Vec::new(),
        });
        self
    }

    /// Sets the monthly series from raw per-month commit counts.
    pub fn monthly_commits(mut self, commits: [u32; MONTHS_PER_YEAR]) -> Self {
        self.model.monthly_activity = ActivityModel::monthly_series(commits);
        self
    }

    pub fn day(mut self, date: impl Into<String>, commits: u32, level: u8) -> Self {
        let date = date.into();
        self.model.daily_activity.insert(
            date.clone(),
            DayActivity {
                date,
                commits,
                level,
            },
        );
        self
    }

    pub fn build(self) -> ActivityModel {
        self.model
    }
}
