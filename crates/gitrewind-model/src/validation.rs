//! Contract validation for activity models and graphs.
//!
//! Generation stages assume a well-formed activity model and never
//! re-check it. Callers that load models from outside (the CLI, the data
//! stage) run [`validate_activity`] first and reject models with errors.

use std::collections::HashSet;

use crate::activity::{ActivityModel, MONTHS_PER_YEAR};
use crate::error::{
    ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
use crate::graph::{GraphData, NodeKind, MAX_GRAPH_COLLABORATORS};

/// Validates an activity model against the generation contract.
pub fn validate_activity(model: &ActivityModel) -> ValidationResult {
    let mut result = ValidationResult::success();

    if model.user.login.trim().is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyLogin,
            "user login must not be empty",
            "user.login",
        ));
    }

    validate_monthly(model, &mut result);
    validate_languages(model, &mut result);

    let consistency = model.patterns.consistency_score;
    if !(0.0..=1.0).contains(&consistency) {
        result.add_error(ValidationError::with_path(
            ErrorCode::ConsistencyOutOfRange,
            format!("consistency score {} is outside [0, 1]", consistency),
            "patterns.consistencyScore",
        ));
    }

    let ratio = model.patterns.weekday_vs_weekend;
    if !ratio.is_finite() || ratio < 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidNumber,
            format!("weekday/weekend ratio {} must be finite and >= 0", ratio),
            "patterns.weekdayVsWeekend",
        ));
    }

    if model.totals.active_days > 366 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::ActiveDaysExceedYear,
            format!("{} active days exceeds days in a year", model.totals.active_days),
            "totals.activeDays",
        ));
    }

    if model.collaborators.len() > MAX_GRAPH_COLLABORATORS {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::CollaboratorsTruncated,
            format!(
                "{} collaborators; only the first {} are drawn",
                model.collaborators.len(),
                MAX_GRAPH_COLLABORATORS
            ),
            "collaborators",
        ));
    }

    result
}

fn validate_monthly(model: &ActivityModel, result: &mut ValidationResult) {
    if model.monthly_activity.len() != MONTHS_PER_YEAR {
        result.add_error(ValidationError::with_path(
            ErrorCode::MonthlySeriesLength,
            format!(
                "expected {} months, found {}",
                MONTHS_PER_YEAR,
                model.monthly_activity.len()
            ),
            "monthlyActivity",
        ));
    }

    for (i, month) in model.monthly_activity.iter().enumerate() {
        if month.month as usize != i {
            result.add_error(ValidationError::with_path(
                ErrorCode::MonthIndexMismatch,
                format!("entry {} is labelled month {}", i, month.month),
                format!("monthlyActivity[{}].month", i),
            ));
        }
        if !(0.0..=1.0).contains(&month.normalized_activity) {
            result.add_error(ValidationError::with_path(
                ErrorCode::NormalizedActivityOutOfRange,
                format!(
                    "normalized activity {} is outside [0, 1]",
                    month.normalized_activity
                ),
                format!("monthlyActivity[{}].normalizedActivity", i),
            ));
        }
    }
}

fn validate_languages(model: &ActivityModel, result: &mut ValidationResult) {
    for (i, lang) in model.languages.iter().enumerate() {
        if !lang.percentage.is_finite() || lang.percentage < 0.0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidNumber,
                format!(
                    "language '{}' has invalid percentage {}",
                    lang.name, lang.percentage
                ),
                format!("languages[{}].percentage", i),
            ));
        }
    }

    for (i, pair) in model.languages.windows(2).enumerate() {
        if pair[0].percentage < pair[1].percentage {
            result.add_error(ValidationError::with_path(
                ErrorCode::LanguagesNotSorted,
                format!(
                    "'{}' ({}%) is listed before '{}' ({}%)",
                    pair[0].name, pair[0].percentage, pair[1].name, pair[1].percentage
                ),
                format!("languages[{}]", i + 1),
            ));
        }
    }
}

/// Validates graph well-formedness: unique ids, exactly one user node,
/// resolvable edge endpoints, and non-negative weights.
pub fn validate_graph(graph: &GraphData) -> ValidationResult {
    let mut result = ValidationResult::success();

    let mut ids = HashSet::with_capacity(graph.nodes.len());
    for (i, node) in graph.nodes.iter().enumerate() {
        if !ids.insert(node.id.as_str()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateNodeId,
                format!("node id '{}' appears more than once", node.id),
                format!("nodes[{}].id", i),
            ));
        }
    }

    let users = graph
        .nodes
        .iter()
        .filter(|n| n.kind == NodeKind::User)
        .count();
    match users {
        0 => result.add_error(ValidationError::with_path(
            ErrorCode::MissingUserNode,
            "graph has no user node",
            "nodes",
        )),
        1 => {}
        n => result.add_error(ValidationError::with_path(
            ErrorCode::MultipleUserNodes,
            format!("graph has {} user nodes", n),
            "nodes",
        )),
    }

    for (i, edge) in graph.edges.iter().enumerate() {
        for (field, id) in [("source", &edge.source), ("target", &edge.target)] {
            if !ids.contains(id.as_str()) {
                result.add_error(ValidationError::with_path(
                    ErrorCode::DanglingEdge,
                    format!("edge {} references unknown node '{}'", field, id),
                    format!("edges[{}].{}", i, field),
                ));
            }
        }
        if !edge.weight.is_finite() || edge.weight < 0.0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidEdgeWeight,
                format!("edge weight {} must be finite and >= 0", edge.weight),
                format!("edges[{}].weight", i),
            ));
        }
    }

    result
}
