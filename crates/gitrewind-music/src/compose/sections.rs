//! Builders for the five sections.
//!
//! Each builder takes the section's start time and length and returns its
//! notes with absolute times.

use gitrewind_model::{ChordType, InstrumentType, ScheduledNote};

use crate::melody::{generate_melody, Contour};
use crate::theory::chord_notes;

use super::context::{note, ComposeContext};

/// Months in the verse.
const VERSE_MONTHS: usize = 12;

/// Scale-degree offsets of the bridge arpeggio.
const BRIDGE_PATTERN: [usize; 4] = [0, 2, 4, 2];

/// Bridge intensity above which the bell octave joins.
const BRIDGE_CLIMAX: f64 = 0.7;

/// Sustained maj7 pad on the key root with sparse high bells.
pub(super) fn intro(ctx: &mut ComposeContext<'_>, start: f64, duration: f64) -> Vec<ScheduledNote> {
    let mut notes = Vec::new();

    for midi in chord_notes(ctx.params.music.key.root, ChordType::Maj7, 3) {
        notes.push(note(start, midi, duration * 0.8, 0.3, InstrumentType::Pad));
    }

    let bells = (duration / 2.0).floor() as usize;
    for i in 0..bells {
        let time = start + i as f64 * 2.0 + ctx.rng.next_f64() * 0.5;
        let midi = ctx.random_scale_note() + 12;
        let velocity = 0.2 + ctx.rng.next_f64() * 0.2;
        notes.push(note(time, midi, 1.5, velocity, InstrumentType::Bells));
    }

    notes
}

/// One slice per month; busier months get more melody notes and louder
/// playing. A bass note anchors each month.
pub(super) fn verse(ctx: &mut ComposeContext<'_>, start: f64, duration: f64) -> Vec<ScheduledNote> {
    let mut notes = Vec::new();
    let month_duration = duration / VERSE_MONTHS as f64;

    for month in 0..VERSE_MONTHS {
        let activity = ctx
            .params
            .time_series
            .monthly
            .get(month)
            .map(|m| m.normalized_activity)
            .unwrap_or(0.0);
        let month_start = start + month as f64 * month_duration;

        let count = (2.0 + activity * 6.0).floor() as usize;
        let melody = generate_melody(&ctx.scale, count, &mut ctx.rng, Contour::Wave);
        for (i, &midi) in melody.iter().enumerate() {
            let time = month_start + (i as f64 / melody.len() as f64) * month_duration;
            notes.push(note(
                time,
                midi,
                ctx.beat * 0.8,
                0.4 + activity * 0.3,
                ctx.lead,
            ));
        }

        let bass = ctx.bass_scale[month % ctx.bass_scale.len()];
        notes.push(note(
            month_start,
            bass,
            month_duration * 0.9,
            0.5,
            InstrumentType::Bass,
        ));
    }

    notes
}

/// The chord progression: pad, arpeggio an octave up and a bass hit per
/// chord, with a melody at beat resolution underneath.
pub(super) fn chorus(
    ctx: &mut ComposeContext<'_>,
    start: f64,
    duration: f64,
) -> Vec<ScheduledNote> {
    let mut notes = Vec::new();
    let progression = &ctx.params.music.chord_progression;

    if !progression.is_empty() {
        let chord_duration = duration / progression.len() as f64;

        for (i, chord) in progression.iter().enumerate() {
            let chord_start = start + i as f64 * chord_duration;
            let voicing = chord_notes(chord.root, chord.chord_type, 4);

            for &midi in &voicing {
                notes.push(note(
                    chord_start,
                    midi,
                    chord_duration * 0.95,
                    0.5,
                    InstrumentType::Pad,
                ));
            }

            for step in 0..4 {
                let midi = voicing[step % voicing.len()] + 12;
                let time = chord_start + step as f64 * (chord_duration / 4.0);
                notes.push(note(
                    time,
                    midi,
                    ctx.beat * 0.5,
                    0.4,
                    InstrumentType::Bells,
                ));
            }

            let bass = ctx.bass_scale[i % ctx.bass_scale.len()];
            notes.push(note(
                chord_start,
                bass,
                chord_duration * 0.9,
                0.6,
                InstrumentType::Bass,
            ));
        }
    }

    let count = (duration / ctx.beat).floor() as usize;
    let melody = generate_melody(&ctx.scale, count, &mut ctx.rng, Contour::Wave);
    for (i, &midi) in melody.iter().enumerate() {
        notes.push(note(
            start + i as f64 * ctx.beat,
            midi,
            ctx.beat * 0.6,
            0.5,
            ctx.lead,
        ));
    }

    notes
}

/// A repeating four-note arpeggio that climbs the scale and swells; bells
/// double it an octave up near the climax.
pub(super) fn bridge(ctx: &ComposeContext<'_>, start: f64, duration: f64) -> Vec<ScheduledNote> {
    let mut notes = Vec::new();
    let scale = &ctx.scale;
    let repetitions = (duration / (ctx.beat * 4.0)).floor() as usize;

    for i in 0..repetitions {
        let base = i % scale.len();
        let intensity = i as f64 / repetitions as f64;

        for (j, offset) in BRIDGE_PATTERN.iter().enumerate() {
            let midi = scale[(base + offset) % scale.len()];
            let time = start + i as f64 * ctx.beat * 4.0 + j as f64 * ctx.beat;

            notes.push(note(
                time,
                midi,
                ctx.beat * 0.7,
                0.3 + intensity * 0.4,
                InstrumentType::Synth,
            ));

            if intensity > BRIDGE_CLIMAX {
                notes.push(note(
                    time,
                    midi + 12,
                    ctx.beat * 0.5,
                    0.2 + intensity * 0.3,
                    InstrumentType::Bells,
                ));
            }
        }
    }

    notes
}

/// Tonic major pad with bells fading to silence.
pub(super) fn outro(ctx: &mut ComposeContext<'_>, start: f64, duration: f64) -> Vec<ScheduledNote> {
    let mut notes = Vec::new();

    for midi in chord_notes(ctx.params.music.key.root, ChordType::Maj, 3) {
        notes.push(note(start, midi, duration * 0.9, 0.4, InstrumentType::Pad));
    }

    let bells = (duration / 1.5).floor() as usize;
    for i in 0..bells {
        let fade = 1.0 - i as f64 / bells as f64;
        let midi = ctx.random_scale_note() + 12;
        notes.push(note(
            start + i as f64 * 1.5,
            midi,
            2.0,
            0.3 * fade,
            InstrumentType::Bells,
        ));
    }

    notes
}
