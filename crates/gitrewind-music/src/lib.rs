//! Git Rewind Music
//!
//! Music theory helpers and the composer that turns
//! [`UnifiedParameters`](gitrewind_model::UnifiedParameters) into a
//! ninety-second [`Composition`](gitrewind_model::Composition) of scheduled
//! notes.
//!
//! Everything here is pure and deterministic: the composer draws all of its
//! random choices from the seed's `"compose"` stream.
//!
//! # Example
//!
//! ```
//! use gitrewind_model::ActivityModel;
//! use gitrewind_music::compose;
//! use gitrewind_params::compute_parameters;
//!
//! let model = ActivityModel::builder("octocat", 2024)
//!     .commits(420)
//!     .consistency(0.4)
//!     .build();
//! let composition = compose(&compute_parameters(&model));
//!
//! assert_eq!(composition.sections.len(), 5);
//! assert_eq!(composition.total_duration, 90.0);
//! ```
//!
//! # Modules
//!
//! - [`note`]: Note names, MIDI numbers and frequencies
//! - [`theory`]: Scales, chords and quantization
//! - [`melody`]: Seeded melody generation
//! - [`compose`]: The five-section composer

pub mod compose;
pub mod melody;
pub mod note;
pub mod theory;

pub use compose::{compose, COMPOSE_STREAM};
pub use melody::{generate_melody, Contour};
pub use note::{
    frequency_to_midi, midi_to_frequency, midi_to_note, midi_to_note_name, note_to_midi,
    parse_note_name,
};
pub use theory::{chord_notes, quantize_to_scale, scale_notes};
