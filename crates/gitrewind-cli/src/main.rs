//! Git Rewind CLI - turns a year of code activity into music and a graph
//!
//! This binary reads an activity model as JSON and writes the derived
//! parameters, composition and laid-out collaboration graph.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use gitrewind_cli::commands;
use gitrewind_graph::DEFAULT_TICKS;

/// Git Rewind - Deterministic year-in-review generation
#[derive(Parser)]
#[command(name = "gitrewind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an activity model without generating anything
    Validate {
        /// Path to the activity model JSON
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Compute unified parameters
    Params {
        /// Path to the activity model JSON
        #[arg(short, long)]
        input: String,

        /// Parameter overrides as inline JSON or a path to a JSON file
        #[arg(long)]
        overrides: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the output JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Compose the soundtrack as a schedule of notes
    Compose {
        /// Path to the activity model JSON
        #[arg(short, long)]
        input: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the output JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Build and lay out the collaboration graph
    Layout {
        /// Path to the activity model JSON
        #[arg(short, long)]
        input: String,

        /// Number of simulation ticks
        #[arg(long, default_value_t = DEFAULT_TICKS)]
        ticks: usize,

        /// Simulation config as inline JSON or a path to a JSON file
        #[arg(long)]
        sim_config: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the output JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Write parameters, composition, graph and a hash report to a directory
    Generate {
        /// Path to the activity model JSON
        #[arg(short, long)]
        input: String,

        /// Output directory
        #[arg(long)]
        out_dir: String,

        /// Number of simulation ticks
        #[arg(long, default_value_t = DEFAULT_TICKS)]
        ticks: usize,

        /// Simulation config as inline JSON or a path to a JSON file
        #[arg(long)]
        sim_config: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Validate { input, json } => commands::validate::run(&input, json),
        Commands::Params {
            input,
            overrides,
            output,
            pretty,
        } => commands::params::run(&input, overrides.as_deref(), output.as_deref(), pretty),
        Commands::Compose {
            input,
            output,
            pretty,
        } => commands::compose::run(&input, output.as_deref(), pretty),
        Commands::Layout {
            input,
            ticks,
            sim_config,
            output,
            pretty,
        } => commands::layout::run(
            &input,
            ticks,
            sim_config.as_deref(),
            output.as_deref(),
            pretty,
        ),
        Commands::Generate {
            input,
            out_dir,
            ticks,
            sim_config,
        } => commands::generate::run(&input, &out_dir, ticks, sim_config.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
