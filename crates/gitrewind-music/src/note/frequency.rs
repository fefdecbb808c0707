//! MIDI number and frequency conversion.

use super::{MIDI_MAX, MIDI_MIN};

/// Frequency in Hz of a MIDI note, tuned to A4 = 440 Hz.
///
/// # Examples
/// ```
/// use gitrewind_music::note::midi_to_frequency;
///
/// assert!((midi_to_frequency(69) - 440.0).abs() < 1e-9);
/// assert!((midi_to_frequency(60) - 261.626).abs() < 0.01);
/// ```
pub fn midi_to_frequency(midi: i32) -> f64 {
    440.0 * 2.0_f64.powf((midi as f64 - 69.0) / 12.0)
}

/// Nearest MIDI note to a frequency, clamped to 0-127.
pub fn frequency_to_midi(freq: f64) -> i32 {
    if freq.is_nan() || freq <= 0.0 {
        return MIDI_MIN;
    }
    let note = 69.0 + 12.0 * (freq / 440.0).log2();
    note.round().clamp(MIDI_MIN as f64, MIDI_MAX as f64) as i32
}
