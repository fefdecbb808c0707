//! Generate command implementation
//!
//! Runs the whole pipeline for one activity model and writes every output
//! plus a report of their canonical hashes.

use anyhow::{Context, Result};
use colored::Colorize;
use gitrewind_graph::{layout, SimulationConfig};
use gitrewind_model::{canonical_hash, validate_activity, ActivityModel};
use gitrewind_music::compose;
use gitrewind_params::compute_parameters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use crate::input::{load_sim_config, load_valid_activity, to_json};

pub const PARAMS_FILE: &str = "params.json";
pub const COMPOSITION_FILE: &str = "composition.json";
pub const GRAPH_FILE: &str = "graph.json";
pub const REPORT_FILE: &str = "report.json";

/// Summary written next to the generated outputs.
///
/// Contains no timestamps or durations, so identical inputs give identical
/// reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReport {
    pub generator: String,
    pub username: String,
    pub year: i32,
    pub seed: u32,
    pub ticks: usize,
    pub note_count: usize,
    pub node_count: usize,
    pub edge_count: usize,
    /// Output file name to BLAKE3 hash of its canonical JSON.
    pub outputs: BTreeMap<String, String>,
    pub warnings: Vec<String>,
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 on success
pub fn run(
    input: &str,
    out_dir: &str,
    ticks: usize,
    sim_config: Option<&str>,
) -> Result<ExitCode> {
    let start = Instant::now();
    println!("{} {}", "Generating:".cyan().bold(), input);

    let model = load_valid_activity(Path::new(input))?;
    let config = load_sim_config(sim_config)?;
    let out_dir = Path::new(out_dir);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let report = generate(&model, out_dir, ticks, config)?;
    write_file(out_dir, REPORT_FILE, &to_json(&report, true)?)?;

    print_summary(&report, out_dir);
    println!(
        "\n{} Generated {} files ({}ms)",
        "SUCCESS".green().bold(),
        report.outputs.len() + 1,
        start.elapsed().as_millis()
    );
    Ok(ExitCode::SUCCESS)
}

/// Computes every output for `model`, writes them into `out_dir` and
/// returns the report. The report itself is not written.
pub fn generate(
    model: &ActivityModel,
    out_dir: &Path,
    ticks: usize,
    config: SimulationConfig,
) -> Result<GenerateReport> {
    let params = compute_parameters(model);
    let composition = compose(&params);
    let graph = layout(model, &params, config, ticks).context("Graph layout failed")?;

    let mut outputs = BTreeMap::new();
    outputs.insert(PARAMS_FILE.to_string(), canonical_hash(&params)?);
    outputs.insert(COMPOSITION_FILE.to_string(), canonical_hash(&composition)?);
    outputs.insert(GRAPH_FILE.to_string(), canonical_hash(&graph)?);

    write_file(out_dir, PARAMS_FILE, &to_json(&params, true)?)?;
    write_file(out_dir, COMPOSITION_FILE, &to_json(&composition, true)?)?;
    write_file(out_dir, GRAPH_FILE, &to_json(&graph, true)?)?;

    let warnings = validate_activity(model)
        .warnings
        .iter()
        .map(|w| w.to_string())
        .collect();

    Ok(GenerateReport {
        generator: format!("gitrewind-cli v{}", env!("CARGO_PKG_VERSION")),
        username: params.username.clone(),
        year: params.year,
        seed: params.seed,
        ticks,
        note_count: composition.note_count(),
        node_count: graph.nodes.len(),
        edge_count: graph.edges.len(),
        outputs,
        warnings,
    })
}

fn write_file(dir: &Path, name: &str, contents: &str) -> Result<()> {
    let path = dir.join(name);
    fs::write(&path, format!("{}\n", contents))
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}

fn print_summary(report: &GenerateReport, out_dir: &Path) {
    println!(
        "{} {} ({}) seed {}",
        "User:".dimmed(),
        report.username,
        report.year,
        report.seed
    );
    println!(
        "{} {} notes, {} nodes, {} edges after {} ticks",
        "Output:".dimmed(),
        report.note_count,
        report.node_count,
        report.edge_count,
        report.ticks
    );

    for (name, hash) in &report.outputs {
        println!("  {} {} {}", "+".green(), name, hash[..16].dimmed());
    }
    for warning in &report.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }

    println!(
        "\n{} {}",
        "Report written to:".dimmed(),
        out_dir.join(REPORT_FILE).display()
    );
}
