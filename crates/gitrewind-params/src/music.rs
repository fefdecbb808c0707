//! Musical parameters: key, mood, chord progression and instrumentation.

use gitrewind_model::{
    ActivityModel, Chord, ChordType, InstrumentAssignment, InstrumentType, LanguageStats, Mood,
    MusicKey, MusicParameters, MusicalMode, MusicalNote,
};

/// Number of languages that get their own voice.
pub const MAX_INSTRUMENTS: usize = 4;

/// Length in beats of every chord in a progression.
pub const CHORD_BEATS: f64 = 2.0;

/// Selects the key from yearly volume and consistency.
///
/// | commits | consistency | key |
/// |---|---|---|
/// | > 500 | > 0.5 | C major |
/// | > 300 | > 0.3 | G mixolydian |
/// | > 100 | any | D dorian |
/// | otherwise | | A minor |
pub fn select_key(model: &ActivityModel) -> MusicKey {
    let commits = model.totals.commits;
    let consistency = model.patterns.consistency_score;

    let (root, mode) = if commits > 500 && consistency > 0.5 {
        (MusicalNote::C, MusicalMode::Major)
    } else if commits > 300 && consistency > 0.3 {
        (MusicalNote::G, MusicalMode::Mixolydian)
    } else if commits > 100 {
        (MusicalNote::D, MusicalMode::Dorian)
    } else {
        (MusicalNote::A, MusicalMode::Minor)
    };

    MusicKey { root, mode }
}

/// Selects the mood. The first matching rule wins.
pub fn select_mood(intensity: f64, complexity: f64, momentum: f64) -> Mood {
    if intensity > 0.7 && momentum > 0.6 {
        Mood::Uplifting
    } else if intensity < 0.3 || momentum < 0.3 {
        Mood::Contemplative
    } else if complexity > 0.7 {
        Mood::Dramatic
    } else {
        Mood::Dreamy
    }
}

/// Four-chord progression for a mood.
pub fn chord_progression(mood: Mood) -> Vec<Chord> {
    use ChordType::*;
    use MusicalNote::*;

    let chords: [(MusicalNote, ChordType); 4] = match mood {
        Mood::Uplifting => [(C, Maj), (G, Maj), (A, Min), (F, Maj)],
        Mood::Contemplative => [(A, Min), (F, Maj), (C, Maj), (G, Maj)],
        Mood::Dramatic => [(A, Min), (D, Min), (E, Maj), (A, Min)],
        Mood::Dreamy => [(C, Maj7), (A, Min7), (F, Maj7), (G, Dom7)],
    };

    chords
        .into_iter()
        .map(|(root, chord_type)| Chord {
            root,
            chord_type,
            duration: CHORD_BEATS,
        })
        .collect()
}

/// Fixed voice for a language; unknown languages play the synth.
pub fn instrument_for_language(language: &str) -> InstrumentType {
    match language {
        "TypeScript" | "C++" | "C" => InstrumentType::Synth,
        "JavaScript" | "PHP" => InstrumentType::ElectricPiano,
        "Python" => InstrumentType::Piano,
        "Rust" => InstrumentType::Strings,
        "Go" | "Shell" => InstrumentType::Bass,
        "Java" | "C#" => InstrumentType::Pad,
        "Ruby" => InstrumentType::Guitar,
        "Swift" | "Kotlin" => InstrumentType::Bells,
        _ => InstrumentType::Synth,
    }
}

/// Assigns voices to the top languages.
///
/// Volume falls by 0.2 per rank down to 0.3; pan alternates left and right
/// and widens by 0.1 per rank. Always returns at least one assignment.
pub fn assign_instruments(languages: &[LanguageStats]) -> Vec<InstrumentAssignment> {
    if languages.is_empty() {
        return vec![InstrumentAssignment {
            language: "default".to_string(),
            instrument: InstrumentType::Synth,
            volume: 0.8,
            pan: 0.0,
        }];
    }

    languages
        .iter()
        .take(MAX_INSTRUMENTS)
        .enumerate()
        .map(|(rank, lang)| {
            let side = if rank % 2 == 0 { -1.0 } else { 1.0 };
            InstrumentAssignment {
                language: lang.name.clone(),
                instrument: instrument_for_language(&lang.name),
                volume: (1.0 - rank as f64 * 0.2).max(0.3),
                pan: side * (0.2 + rank as f64 * 0.1),
            }
        })
        .collect()
}

/// Builds the full musical parameter group.
pub fn compute_music(
    model: &ActivityModel,
    intensity: f64,
    complexity: f64,
    momentum: f64,
) -> MusicParameters {
    let key = select_key(model);
    let mood = select_mood(intensity, complexity, momentum);

    MusicParameters {
        key,
        scale: key.mode.intervals().to_vec(),
        chord_progression: chord_progression(mood),
        instruments: assign_instruments(&model.languages),
        mood,
    }
}
