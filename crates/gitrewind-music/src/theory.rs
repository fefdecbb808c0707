//! Scale and chord construction, and pitch quantization.

use gitrewind_model::{ChordType, MusicalMode, MusicalNote};

use crate::note::note_to_midi;

/// MIDI numbers of one octave of `mode` starting at `root` in `octave`.
///
/// Never empty: every mode has at least five degrees.
///
/// # Examples
/// ```
/// use gitrewind_model::{MusicalMode, MusicalNote};
/// use gitrewind_music::theory::scale_notes;
///
/// assert_eq!(
///     scale_notes(MusicalNote::C, MusicalMode::Major, 4),
///     vec![60, 62, 64, 65, 67, 69, 71]
/// );
/// ```
pub fn scale_notes(root: MusicalNote, mode: MusicalMode, octave: i32) -> Vec<i32> {
    let root_midi = note_to_midi(root, octave);
    mode.intervals()
        .iter()
        .map(|&interval| root_midi + interval as i32)
        .collect()
}

/// MIDI numbers of a chord voiced upward from `root` in `octave`.
pub fn chord_notes(root: MusicalNote, chord_type: ChordType, octave: i32) -> Vec<i32> {
    let root_midi = note_to_midi(root, octave);
    chord_type
        .intervals()
        .iter()
        .map(|&interval| root_midi + interval as i32)
        .collect()
}

/// Snaps `midi` to the nearest pitch class of `scale`, keeping its octave.
///
/// Distance is measured around the pitch-class circle. On a tie the scale
/// tone listed first wins. An empty scale leaves the note unchanged.
pub fn quantize_to_scale(midi: i32, scale: &[i32]) -> i32 {
    let Some(&first) = scale.first() else {
        return midi;
    };

    let octave = midi.div_euclid(12);
    let pitch_class = midi.rem_euclid(12);

    let mut closest = first.rem_euclid(12);
    let mut min_distance = 12;
    for tone in scale.iter().map(|n| n.rem_euclid(12)) {
        let diff = pitch_class - tone;
        let distance = diff.abs().min((diff + 12).abs()).min((diff - 12).abs());
        if distance < min_distance {
            min_distance = distance;
            closest = tone;
        }
    }

    octave * 12 + closest
}
