//! Conversion between pitch classes, MIDI numbers and note names.

use gitrewind_model::MusicalNote;

use super::{MIDI_MAX, MIDI_MIN};

/// MIDI number of `note` in `octave`.
///
/// # Examples
/// ```
/// use gitrewind_model::MusicalNote;
/// use gitrewind_music::note::note_to_midi;
///
/// assert_eq!(note_to_midi(MusicalNote::C, 4), 60);
/// assert_eq!(note_to_midi(MusicalNote::A, 4), 69);
/// assert_eq!(note_to_midi(MusicalNote::C, -1), 0);
/// ```
pub fn note_to_midi(note: MusicalNote, octave: i32) -> i32 {
    note.pitch_class() as i32 + (octave + 1) * 12
}

/// Pitch class and octave of a MIDI number.
pub fn midi_to_note(midi: i32) -> (MusicalNote, i32) {
    let octave = midi.div_euclid(12) - 1;
    let pc = midi.rem_euclid(12) as u8;
    (MusicalNote::from_pitch_class(pc), octave)
}

/// Note name with octave, e.g. "C4" or "F#2".
///
/// # Examples
/// ```
/// use gitrewind_music::note::midi_to_note_name;
///
/// assert_eq!(midi_to_note_name(60), "C4");
/// assert_eq!(midi_to_note_name(70), "A#4");
/// ```
pub fn midi_to_note_name(midi: i32) -> String {
    let (note, octave) = midi_to_note(midi);
    format!("{}{}", note, octave)
}

/// Parses a note name (e.g. "C4", "A#3", "Bb5") to a MIDI number.
///
/// Accepts `#` or `s` for sharp and `b` for flat. Returns `None` for
/// malformed names and notes outside 0-127.
pub fn parse_note_name(name: &str) -> Option<i32> {
    let name = name.trim();
    let mut chars = name.chars();
    let letter = chars.next()?.to_ascii_uppercase();

    let base_semitone = match letter {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let rest = chars.as_str();
    let (accidental, octave_str) = if let Some(stripped) = rest.strip_prefix('#') {
        (1, stripped)
    } else if let Some(stripped) = rest.strip_prefix('s') {
        (1, stripped)
    } else if let Some(stripped) = rest.strip_prefix('b') {
        (-1, stripped)
    } else {
        (0, rest)
    };

    let octave: i32 = octave_str.parse().ok()?;
    let midi = (octave + 1) * 12 + base_semitone + accidental;

    (MIDI_MIN..=MIDI_MAX).contains(&midi).then_some(midi)
}
