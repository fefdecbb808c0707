//! Note name, MIDI number and frequency conversion.
//!
//! MIDI numbers are `i32` so that octave arithmetic never wraps; C4 is 60
//! and A4 is 69.

mod conversion;
mod frequency;


pub use conversion::{midi_to_note, midi_to_note_name, note_to_midi, parse_note_name};
pub use frequency::{frequency_to_midi, midi_to_frequency};

/// Lowest valid MIDI note.
pub const MIDI_MIN: i32 = 0;

/// Highest valid MIDI note.
pub const MIDI_MAX: i32 = 127;
