//! Git Rewind Data Model
//!
//! This crate provides the types shared by every Git Rewind generation
//! stage, along with validation, seeded randomness, and canonical hashing.
//!
//! # Overview
//!
//! The pipeline is:
//!
//! ```text
//! ActivityModel -> UnifiedParameters -> { Composition, GraphData }
//! ```
//!
//! Every stage is a pure function of its input. Identical `(username, year)`
//! pairs derive identical seeds and therefore byte-identical outputs.
//!
//! # Example
//!
//! ```
//! use gitrewind_model::{ActivityModel, validate_activity, derive_user_seed};
//!
//! let model = ActivityModel::builder("octocat", 2024)
//!     .commits(850)
//!     .active_days(190)
//!     .consistency(0.55)
//!     .language("Rust", "#dea584", 62.0)
//!     .monthly_commits([40, 55, 70, 60, 80, 90, 75, 65, 85, 100, 70, 60])
//!     .build();
//!
//! assert!(validate_activity(&model).is_ok());
//! let seed = derive_user_seed(&model.user.login, model.year);
//! assert_eq!(seed, derive_user_seed("octocat", 2024));
//! ```
//!
//! # Modules
//!
//! - [`activity`]: Activity model input types
//! - [`parameters`]: Unified parameters and overrides
//! - [`composition`]: Scheduled notes and sections
//! - [`graph`]: Graph nodes, edges and simulation state
//! - [`color`]: HSL colors and hex conversion
//! - [`rng`]: Seeded random streams
//! - [`hash`]: Seed derivation and canonical output hashing
//! - [`validation`]: Activity model and graph contract checks
//! - [`error`]: Error and warning types

pub mod activity;
pub mod color;
pub mod composition;
pub mod error;
pub mod graph;
pub mod hash;
pub mod parameters;
pub mod rng;
pub mod validation;

// Re-export commonly used types at the crate root
pub use activity::{
    ActivityModel, ActivityModelBuilder, ActivityPatterns, ActivityTotals, CollaboratorStats,
    DayActivity, LanguageStats, MonthlyActivity, UserIdentity, MONTHS_PER_YEAR,
};
pub use color::{hex_to_hsl, hsl_to_hex, Hsl};
pub use composition::{
    total_section_duration, Composition, MusicSection, ScheduledNote, SectionName,
};
pub use error::{
    CoreError, ErrorCode, ModelError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use graph::{
    GraphData, GraphEdge, GraphNode, NodeKind, SimulationNode, Vec3, MAX_GRAPH_COLLABORATORS,
};
pub use hash::{canonical_hash, derive_stream_seed, derive_user_seed};
pub use parameters::{
    ArtParameters, ArtStyle, Chord, ChordType, ColorPalette, DisplayStats, GraphSizing,
    InstrumentAssignment, InstrumentType, Mood, MusicKey, MusicParameters, MusicalMode,
    MusicalNote, ParameterOverrides, Peak, Tempo, TimeSeries, UnifiedParameters,
};
pub use rng::SeededRandom;
pub use validation::{validate_activity, validate_graph};

/// Crate version for report provenance.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
