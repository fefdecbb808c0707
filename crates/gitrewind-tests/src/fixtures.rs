//! Named activity models and on-disk fixtures.

use gitrewind_model::ActivityModel;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An activity model with a short name for test output.
pub struct NamedFixture {
    pub name: &'static str,
    pub model: ActivityModel,
}

/// Nothing at all: no commits, languages or collaborators.
pub fn empty_year() -> ActivityModel {
    ActivityModel::builder("ghost", 2024).build()
}

/// A handful of commits in one language, all in spring.
pub fn quiet_year() -> ActivityModel {
    ActivityModel::builder("quiet-dev", 2024)
        .commits(42)
        .active_days(20)
        .consistency(0.1)
        .language("Python", "#3572A5", 100.0)
        .monthly_commits([0, 0, 10, 20, 12, 0, 0, 0, 0, 0, 0, 0])
        .build()
}

/// A steady year with a few regular collaborators.
pub fn typical_year() -> ActivityModel {
    ActivityModel::builder("octocat", 2024)
        .commits(850)
        .pull_requests(64)
        .active_days(190)
        .longest_streak(21)
        .consistency(0.55)
        .language("Rust", "#dea584", 62.0)
        .language("TypeScript", "#3178c6", 25.0)
        .language("Python", "#3572A5", 13.0)
        .collaborator("hubot", 30)
        .collaborator("monalisa", 12)
        .monthly_commits([40, 55, 70, 60, 80, 90, 75, 65, 85, 100, 70, 60])
        .build()
}

/// High volume, very consistent and back-loaded.
pub fn prolific_year() -> ActivityModel {
    let mut builder = ActivityModel::builder("prolific", 2024)
        .commits(2000)
        .pull_requests(310)
        .active_days(340)
        .longest_streak(120)
        .consistency(0.8)
        .language("Go", "#00ADD8", 70.0)
        .language("Shell", "#89e051", 30.0)
        .monthly_commits([90, 100, 110, 120, 130, 150, 170, 190, 200, 230, 250, 260]);
    for i in 0..8 {
        builder = builder.collaborator(format!("teammate-{}", i), 40 - i * 4);
    }
    builder.build()
}

/// Many languages and more collaborators than the graph draws.
pub fn polyglot_year() -> ActivityModel {
    let mut builder = ActivityModel::builder("polyglot", 2023)
        .commits(1200)
        .active_days(250)
        .consistency(0.45);
    for (name, share) in [
        ("TypeScript", 22.0),
        ("Rust", 18.0),
        ("Go", 15.0),
        ("Python", 12.0),
        ("Java", 10.0),
        ("Kotlin", 9.0),
        ("Zig", 8.0),
        ("Haskell", 6.0),
    ] {
        builder = builder.language(name, "", share);
    }
    for i in 0..60u32 {
        builder = builder.collaborator(format!("contributor-{:02}", i), 60 - i);
    }
    builder
        .monthly_commits([120, 90, 80, 100, 110, 95, 70, 85, 105, 115, 130, 100])
        .build()
}

/// Every named fixture.
pub fn all() -> Vec<NamedFixture> {
    vec![
        NamedFixture {
            name: "empty",
            model: empty_year(),
        },
        NamedFixture {
            name: "quiet",
            model: quiet_year(),
        },
        NamedFixture {
            name: "typical",
            model: typical_year(),
        },
        NamedFixture {
            name: "prolific",
            model: prolific_year(),
        },
        NamedFixture {
            name: "polyglot",
            model: polyglot_year(),
        },
    ]
}

/// A temporary directory holding activity model files.
pub struct ActivityFixture {
    pub root: TempDir,
}

impl ActivityFixture {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Writes `model` as `{name}.json` and returns its path.
    pub fn write(&self, name: &str, model: &ActivityModel) -> PathBuf {
        let path = self.root.path().join(format!("{}.json", name));
        let json = serde_json::to_string_pretty(model).expect("Failed to serialize model");
        fs::write(&path, json).expect("Failed to write activity file");
        path
    }

    /// A fresh output directory inside the fixture.
    pub fn out_dir(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).expect("Failed to create output dir");
        dir
    }
}

impl Default for ActivityFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitrewind_model::validate_activity;

    #[test]
    fn test_all_fixtures_are_valid() {
        for fixture in all() {
            let result = validate_activity(&fixture.model);
            assert!(result.is_ok(), "{}: {:?}", fixture.name, result.errors);
        }
    }

    #[test]
    fn test_polyglot_warns_about_truncation() {
        let result = validate_activity(&polyglot_year());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code.code(), "W002");
    }

    #[test]
    fn test_fixture_writes_readable_json() {
        let fixture = ActivityFixture::new();
        let path = fixture.write("typical", &typical_year());
        let back: ActivityModel =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(back, typical_year());
    }
}
