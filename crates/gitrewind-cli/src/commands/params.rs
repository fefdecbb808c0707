//! Params command implementation

use anyhow::Result;
use gitrewind_params::{apply_overrides, compute_parameters};
use std::path::Path;
use std::process::ExitCode;

use crate::input::{load_overrides, load_valid_activity, write_json};

/// Computes unified parameters, applies any overrides and writes them as
/// JSON.
pub fn run(
    input: &str,
    overrides: Option<&str>,
    output: Option<&str>,
    pretty: bool,
) -> Result<ExitCode> {
    let model = load_valid_activity(Path::new(input))?;
    let overrides = load_overrides(overrides)?;

    let params = apply_overrides(&compute_parameters(&model), &overrides);
    write_json(&params, output, pretty)?;
    Ok(ExitCode::SUCCESS)
}
