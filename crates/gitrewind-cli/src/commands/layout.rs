//! Layout command implementation

use anyhow::{Context, Result};
use gitrewind_graph::layout;
use gitrewind_params::compute_parameters;
use std::path::Path;
use std::process::ExitCode;

use crate::input::{load_sim_config, load_valid_activity, write_json};

/// Builds and lays out the collaboration graph, writing positioned graph
/// JSON.
pub fn run(
    input: &str,
    ticks: usize,
    sim_config: Option<&str>,
    output: Option<&str>,
    pretty: bool,
) -> Result<ExitCode> {
    let model = load_valid_activity(Path::new(input))?;
    let config = load_sim_config(sim_config)?;
    let params = compute_parameters(&model);

    let graph = layout(&model, &params, config, ticks).context("Graph layout failed")?;
    write_json(&graph, output, pretty)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::write_sample;
    use gitrewind_model::{validate_graph, GraphData};

    fn read_graph(path: &Path) -> GraphData {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_writes_positioned_graph() {
        let tmp = tempfile::tempdir().unwrap();
        let input = write_sample(tmp.path());
        let out = tmp.path().join("graph.json");

        let code = run(input.to_str().unwrap(), 50, None, out.to_str(), true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let graph = read_graph(&out);
        assert!(validate_graph(&graph).is_ok());
        // user + two collaborators
        assert_eq!(graph.nodes.len(), 3);
        assert!(graph.nodes.iter().all(|n| n.position.is_some()));
    }

    #[test]
    fn test_zero_ticks_keeps_user_at_origin() {
        let tmp = tempfile::tempdir().unwrap();
        let input = write_sample(tmp.path());
        let out = tmp.path().join("graph.json");

        run(input.to_str().unwrap(), 0, None, out.to_str(), false).unwrap();
        let graph = read_graph(&out);
        let user = graph.user_node().unwrap();
        assert_eq!(user.position, Some(gitrewind_model::Vec3::ZERO));
    }

    #[test]
    fn test_rejects_bad_sim_config() {
        let tmp = tempfile::tempdir().unwrap();
        let input = write_sample(tmp.path());
        let result = run(
            input.to_str().unwrap(),
            10,
            Some(r#"{"restLength": -1}"#),
            None,
            false,
        );
        assert!(result.is_err());
    }
}
