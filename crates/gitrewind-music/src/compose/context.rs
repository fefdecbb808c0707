//! Shared state threaded through the section builders.

use gitrewind_model::{InstrumentType, ScheduledNote, SeededRandom, UnifiedParameters};

use crate::note::midi_to_note_name;
use crate::theory::scale_notes;

use super::COMPOSE_STREAM;

/// Octave of the melody scale.
const MELODY_OCTAVE: i32 = 4;

/// Octave of the bass scale.
const BASS_OCTAVE: i32 = 2;

pub(super) struct ComposeContext<'a> {
    pub params: &'a UnifiedParameters,
    pub scale: Vec<i32>,
    pub bass_scale: Vec<i32>,
    /// Seconds per beat.
    pub beat: f64,
    /// Voice of the top language; carries the melodies.
    pub lead: InstrumentType,
    pub rng: SeededRandom,
}

impl<'a> ComposeContext<'a> {
    pub fn new(params: &'a UnifiedParameters) -> Self {
        let key = params.music.key;
        Self {
            params,
            scale: scale_notes(key.root, key.mode, MELODY_OCTAVE),
            bass_scale: scale_notes(key.root, key.mode, BASS_OCTAVE),
            beat: params.tempo.beat_duration(),
            lead: params
                .music
                .instruments
                .first()
                .map(|i| i.instrument)
                .unwrap_or(InstrumentType::Synth),
            rng: SeededRandom::for_stream(params.seed, COMPOSE_STREAM),
        }
    }

    /// A random degree of the melody scale.
    pub fn random_scale_note(&mut self) -> i32 {
        let idx = self.rng.index(self.scale.len());
        self.scale[idx]
    }
}

pub(super) fn note(
    time: f64,
    midi: i32,
    duration: f64,
    velocity: f64,
    instrument: InstrumentType,
) -> ScheduledNote {
    ScheduledNote {
        time,
        note: midi_to_note_name(midi),
        duration,
        velocity,
        instrument,
    }
}
