//! Validate command implementation
//!
//! Checks an activity model against the generation contract.

use anyhow::Result;
use colored::Colorize;
use gitrewind_model::{validate_activity, ValidationResult};
use serde_json::json;
use std::path::Path;
use std::process::ExitCode;

use crate::input::load_activity;

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid or unreadable
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

fn run_human(input: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), input);

    let model = load_activity(Path::new(input))?;
    let result = validate_activity(&model);
    print_validation_results(&result);

    if result.is_ok() {
        println!(
            "\n{} {} ({})",
            "SUCCESS".green().bold(),
            model.user.login,
            model.year
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Activity model has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(1))
    }
}

fn run_json(input: &str) -> Result<ExitCode> {
    let output = match load_activity(Path::new(input)) {
        Ok(model) => validation_to_json(&validate_activity(&model)),
        Err(e) => json!({
            "ok": false,
            "errors": [{ "code": "INPUT", "message": format!("{:#}", e) }],
            "warnings": [],
        }),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    if output["ok"] == true {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// JSON diagnostics for a validation result.
pub fn validation_to_json(result: &ValidationResult) -> serde_json::Value {
    let errors: Vec<_> = result
        .errors
        .iter()
        .map(|e| json!({ "code": e.code.code(), "message": e.message, "path": e.path }))
        .collect();
    let warnings: Vec<_> = result
        .warnings
        .iter()
        .map(|w| json!({ "code": w.code.code(), "message": w.message, "path": w.path }))
        .collect();

    json!({ "ok": result.is_ok(), "errors": errors, "warnings": warnings })
}

fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}
