//! Loading activity models and JSON options, and writing JSON output.

use anyhow::{bail, Context, Result};
use gitrewind_graph::SimulationConfig;
use gitrewind_model::{validate_activity, ActivityModel, ParameterOverrides};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Reads an activity model from a JSON file.
pub fn load_activity(path: &Path) -> Result<ActivityModel> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read activity file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse activity file: {}", path.display()))
}

/// Reads an activity model and refuses it if validation reports errors.
///
/// Warnings are logged and otherwise ignored.
pub fn load_valid_activity(path: &Path) -> Result<ActivityModel> {
    let model = load_activity(path)?;
    let result = validate_activity(&model);

    for warning in &result.warnings {
        warn!(%warning, "activity model warning");
    }
    if !result.is_ok() {
        let details: Vec<String> = result.errors.iter().map(|e| e.to_string()).collect();
        bail!(
            "{} is not a valid activity model:\n  {}",
            path.display(),
            details.join("\n  ")
        );
    }
    Ok(model)
}

/// Returns `arg` itself when it is an inline JSON object, else the contents
/// of the file it names.
fn read_json_arg(arg: &str) -> Result<String> {
    if arg.trim_start().starts_with('{') {
        Ok(arg.to_string())
    } else {
        fs::read_to_string(arg).with_context(|| format!("Failed to read JSON file: {}", arg))
    }
}

/// Parses parameter overrides; no argument means no overrides.
pub fn load_overrides(arg: Option<&str>) -> Result<ParameterOverrides> {
    match arg {
        None => Ok(ParameterOverrides::default()),
        Some(arg) => {
            let json = read_json_arg(arg)?;
            serde_json::from_str(&json).context("Invalid parameter overrides")
        }
    }
}

/// Parses a simulation config; no argument means the defaults.
pub fn load_sim_config(arg: Option<&str>) -> Result<SimulationConfig> {
    match arg {
        None => Ok(SimulationConfig::default()),
        Some(arg) => {
            let json = read_json_arg(arg)?;
            SimulationConfig::from_json(&json).context("Invalid simulation config")
        }
    }
}

/// Serializes `value` to JSON.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize output")
}

/// Writes `value` as JSON to `output`, or to stdout when no path is given.
pub fn write_json<T: Serialize>(value: &T, output: Option<&str>, pretty: bool) -> Result<()> {
    let json = to_json(value, pretty)?;
    match output {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write output file: {}", path)),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}
