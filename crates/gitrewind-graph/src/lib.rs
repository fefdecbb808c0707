//! Git Rewind Collaboration Graph
//!
//! Builds the user's collaboration graph and lays it out in 3D with a
//! damped force simulation.
//!
//! # Example
//!
//! ```
//! use gitrewind_graph::{build_graph, ForceSimulation, SimulationConfig};
//! use gitrewind_model::ActivityModel;
//! use gitrewind_params::compute_parameters;
//!
//! let model = ActivityModel::builder("octocat", 2024)
//!     .commits(300)
//!     .collaborator("hubot", 12)
//!     .build();
//! let params = compute_parameters(&model);
//!
//! let mut sim = ForceSimulation::new(params.seed, SimulationConfig::default());
//! sim.set_data(build_graph(&model, &params));
//! sim.run(100);
//!
//! let graph = sim.positioned_graph();
//! assert!(graph.nodes.iter().all(|n| n.position.is_some()));
//! ```
//!
//! # Modules
//!
//! - [`build`]: Graph construction from the activity model
//! - [`physics`]: Force passes and the pure step function
//! - [`simulation`]: Stateful tick-by-tick simulation
//! - [`config`]: Simulation constants
//! - [`error`]: Error types

pub mod build;
pub mod config;
pub mod error;
pub mod physics;
pub mod simulation;

use gitrewind_model::{ActivityModel, GraphData, UnifiedParameters};
use tracing::debug;

pub use build::{build_graph, placeholder_count};
pub use config::SimulationConfig;
pub use error::LayoutError;
pub use physics::{step, Link};
pub use simulation::{ForceSimulation, LAYOUT_STREAM};

/// Ticks used for the initial layout.
pub const DEFAULT_TICKS: usize = 100;

/// Builds the graph and runs `ticks` ticks of layout in one call.
pub fn layout(
    model: &ActivityModel,
    params: &UnifiedParameters,
    config: SimulationConfig,
    ticks: usize,
) -> Result<GraphData, LayoutError> {
    config.validate()?;

    let mut sim = ForceSimulation::new(params.seed, config);
    sim.set_data(build_graph(model, params));
    sim.run(ticks);

    debug!(ticks, nodes = sim.nodes().len(), "laid out graph");
    Ok(sim.positioned_graph())
}
