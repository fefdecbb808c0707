//! Error types for graph layout.

use gitrewind_model::CoreError;
use thiserror::Error;

/// Errors raised while configuring a layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A simulation parameter is out of range.
    #[error("invalid simulation config: {field} {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },

    /// Simulation config JSON could not be parsed.
    #[error("failed to parse simulation config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl LayoutError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        LayoutError::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}

impl CoreError for LayoutError {
    fn code(&self) -> &'static str {
        match self {
            LayoutError::InvalidConfig { .. } => "LAYOUT_001",
            LayoutError::ConfigParse(_) => "LAYOUT_002",
        }
    }

    fn category(&self) -> &'static str {
        "layout"
    }
}
