//! Compose command implementation

use anyhow::Result;
use gitrewind_music::compose;
use gitrewind_params::compute_parameters;
use std::path::Path;
use std::process::ExitCode;

use crate::input::{load_valid_activity, write_json};

/// Composes the soundtrack for an activity model and writes it as JSON.
pub fn run(input: &str, output: Option<&str>, pretty: bool) -> Result<ExitCode> {
    let model = load_valid_activity(Path::new(input))?;
    let composition = compose(&compute_parameters(&model));
    write_json(&composition, output, pretty)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::write_sample;
    use gitrewind_model::Composition;

    #[test]
    fn test_writes_composition() {
        let tmp = tempfile::tempdir().unwrap();
        let input = write_sample(tmp.path());
        let out = tmp.path().join("composition.json");

        let code = run(input.to_str().unwrap(), out.to_str(), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let written: Composition =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written.sections.len(), 5);
        assert!(written.note_count() > 0);
    }
}
