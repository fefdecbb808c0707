//! Force simulation configuration.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Tunable constants of the force simulation.
///
/// Missing fields take their defaults when deserialized, so a partial JSON
/// object such as `{"damping": 0.8}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Pull of non-user nodes toward the origin, per unit of offset.
    pub center_force: f64,
    /// Inverse-square repulsion strength.
    pub repulsion_force: f64,
    /// Spring stiffness of edges, scaled by edge weight.
    pub link_force: f64,
    /// Velocity multiplier applied every tick.
    pub damping: f64,
    /// Repulsion only acts between nodes closer than this.
    pub min_distance: f64,
    /// Length at which an edge spring is relaxed.
    pub rest_length: f64,
    /// Side of the cube that unplaced nodes start in.
    pub initial_spread: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            center_force: 0.01,
            repulsion_force: 500.0,
            link_force: 0.1,
            damping: 0.9,
            min_distance: 30.0,
            rest_length: 50.0,
            initial_spread: 200.0,
        }
    }
}

impl SimulationConfig {
    /// Parses a (possibly partial) config from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every constant is finite and in range.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            ("centerForce", self.center_force),
            ("repulsionForce", self.repulsion_force),
            ("linkForce", self.link_force),
            ("damping", self.damping),
            ("minDistance", self.min_distance),
            ("restLength", self.rest_length),
            ("initialSpread", self.initial_spread),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(LayoutError::invalid(field, "must be finite"));
            }
            if value < 0.0 {
                return Err(LayoutError::invalid(
                    field,
                    format!("must not be negative, got {}", value),
                ));
            }
        }

        if self.damping > 1.0 {
            return Err(LayoutError::invalid(
                "damping",
                format!("must be within [0, 1], got {}", self.damping),
            ));
        }
        if self.rest_length == 0.0 {
            return Err(LayoutError::invalid("restLength", "must be positive"));
        }
        Ok(())
    }
}
