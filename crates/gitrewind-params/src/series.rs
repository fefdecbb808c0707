//! Time series echo, graph sizing and display stats.

use gitrewind_model::{ActivityModel, DisplayStats, GraphSizing, Peak, TimeSeries};

/// Normalized activity above which a month counts as a peak.
pub const PEAK_THRESHOLD: f64 = 0.7;

/// Upper bound on graph nodes, user included.
pub const MAX_GRAPH_NODES: usize = 100;

/// Months whose normalized activity exceeds [`PEAK_THRESHOLD`], dated the
/// 15th of the month.
pub fn detect_peaks(model: &ActivityModel) -> Vec<Peak> {
    model
        .monthly_activity
        .iter()
        .filter(|m| m.normalized_activity > PEAK_THRESHOLD)
        .map(|m| Peak {
            date: format!("{}-{:02}-15", model.year, m.month as u32 + 1),
            commits: m.commits,
            significance: m.normalized_activity,
        })
        .collect()
}

pub fn compute_time_series(model: &ActivityModel) -> TimeSeries {
    TimeSeries {
        monthly: model.monthly_activity.clone(),
        peaks: detect_peaks(model),
    }
}

pub fn compute_graph_sizing(model: &ActivityModel) -> GraphSizing {
    let edge_count = model
        .collaborators
        .iter()
        .fold(0u32, |acc, c| acc.saturating_add(c.interactions));

    GraphSizing {
        node_count: (model.collaborators.len() + 1).min(MAX_GRAPH_NODES) as u32,
        edge_count,
        cluster_count: model.languages.len().div_ceil(2) as u32,
    }
}

pub fn compute_stats(model: &ActivityModel) -> DisplayStats {
    DisplayStats {
        total_commits: model.totals.commits,
        total_prs: model.totals.pull_requests,
        active_days: model.totals.active_days,
        longest_streak: model.totals.longest_streak,
        top_language: model
            .top_language()
            .map(|l| l.name.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
        top_collaborator: model.collaborators.first().map(|c| c.login.clone()),
    }
}
