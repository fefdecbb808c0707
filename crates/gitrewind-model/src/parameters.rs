//! Unified parameters: the cross-modal record that drives music, color,
//! art and graph generation.
//!
//! Parameters are computed once per (user, year, activity snapshot) and are
//! immutable afterwards. User-chosen [`ParameterOverrides`] are applied as a
//! shallow top-level merge.

use serde::{Deserialize, Serialize};

use crate::activity::MonthlyActivity;
use crate::color::Hsl;

/// Twelve pitch classes, spelled with sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MusicalNote {
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
}

impl MusicalNote {
    /// All pitch classes in chromatic order starting from C.
    pub const ALL: [MusicalNote; 12] = [
        MusicalNote::C,
        MusicalNote::CSharp,
        MusicalNote::D,
        MusicalNote::DSharp,
        MusicalNote::E,
        MusicalNote::F,
        MusicalNote::FSharp,
        MusicalNote::G,
        MusicalNote::GSharp,
        MusicalNote::A,
        MusicalNote::ASharp,
        MusicalNote::B,
    ];

    /// Semitones above C (0-11).
    pub fn pitch_class(self) -> u8 {
        self as u8
    }

    /// Pitch class for a semitone value, wrapping modulo 12.
    pub fn from_pitch_class(pc: u8) -> MusicalNote {
        Self::ALL[(pc % 12) as usize]
    }

    /// Note name as written in note strings (e.g. "C#").
    pub fn name(self) -> &'static str {
        match self {
            MusicalNote::C => "C",
            MusicalNote::CSharp => "C#",
            MusicalNote::D => "D",
            MusicalNote::DSharp => "D#",
            MusicalNote::E => "E",
            MusicalNote::F => "F",
            MusicalNote::FSharp => "F#",
            MusicalNote::G => "G",
            MusicalNote::GSharp => "G#",
            MusicalNote::A => "A",
            MusicalNote::ASharp => "A#",
            MusicalNote::B => "B",
        }
    }
}

impl std::fmt::Display for MusicalNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Scale mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MusicalMode {
    Major,
    Minor,
    Dorian,
    Mixolydian,
    Pentatonic,
}

impl MusicalMode {
    /// Semitone intervals from the root for each scale degree.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            MusicalMode::Major => &[0, 2, 4, 5, 7, 9, 11],
            MusicalMode::Minor => &[0, 2, 3, 5, 7, 8, 10],
            MusicalMode::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            MusicalMode::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            MusicalMode::Pentatonic => &[0, 2, 4, 7, 9],
        }
    }
}

/// Chord quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordType {
    Maj,
    Min,
    Dim,
    Maj7,
    Min7,
    Dom7,
}

impl ChordType {
    /// Semitone intervals from the chord root.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordType::Maj => &[0, 4, 7],
            ChordType::Min => &[0, 3, 7],
            ChordType::Dim => &[0, 3, 6],
            ChordType::Maj7 => &[0, 4, 7, 11],
            ChordType::Min7 => &[0, 3, 7, 10],
            ChordType::Dom7 => &[0, 4, 7, 10],
        }
    }
}

/// A chord in a progression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    pub root: MusicalNote,
    #[serde(rename = "type")]
    pub chord_type: ChordType,
    /// Length in beats.
    pub duration: f64,
}

/// Instrument voices available to the audio engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InstrumentType {
    Synth,
    Piano,
    ElectricPiano,
    Pad,
    Bass,
    Strings,
    Bells,
    Guitar,
}

/// A language's voice in the arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentAssignment {
    pub language: String,
    pub instrument: InstrumentType,
    /// 0-1.
    pub volume: f64,
    /// -1 (left) to 1 (right).
    pub pan: f64,
}

/// Overall character of the piece; selects the chord progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Uplifting,
    Contemplative,
    Dramatic,
    Dreamy,
}

/// Tonal center of the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicKey {
    pub root: MusicalNote,
    pub mode: MusicalMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicParameters {
    pub key: MusicKey,
    /// Interval set of `key.mode`.
    pub scale: Vec<u8>,
    pub chord_progression: Vec<Chord>,
    pub instruments: Vec<InstrumentAssignment>,
    pub mood: Mood,
}

/// Visual style of the generative art layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArtStyle {
    Constellation,
    FlowField,
    Circuit,
    Nebula,
}

impl ArtStyle {
    pub const ALL: [ArtStyle; 4] = [
        ArtStyle::Constellation,
        ArtStyle::FlowField,
        ArtStyle::Circuit,
        ArtStyle::Nebula,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtParameters {
    pub style: ArtStyle,
    pub particle_count: u32,
    pub noise_scale: f64,
    pub glow_intensity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: Hsl,
    pub secondary: Hsl,
    pub accent: Hsl,
    pub background: Hsl,
    /// At most five entries, one per top language.
    pub gradient: Vec<Hsl>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tempo {
    /// Beats per minute, 60-180.
    pub bpm: u32,
    /// 0-0.3.
    pub swing: f64,
    pub signature: [u8; 2],
}

impl Tempo {
    /// Length of one beat in seconds.
    pub fn beat_duration(&self) -> f64 {
        60.0 / self.bpm.max(1) as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSizing {
    pub node_count: u32,
    pub edge_count: u32,
    pub cluster_count: u32,
}

/// A month whose normalized activity stands out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    /// `YYYY-MM-15`.
    pub date: String,
    pub commits: u32,
    pub significance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub monthly: Vec<MonthlyActivity>,
    pub peaks: Vec<Peak>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayStats {
    pub total_commits: u32,
    #[serde(rename = "totalPRs")]
    pub total_prs: u32,
    pub active_days: u32,
    pub longest_streak: u32,
    pub top_language: String,
    pub top_collaborator: Option<String>,
}

/// The complete synthesized parameter set for one user and year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedParameters {
    pub seed: u32,
    pub username: String,
    pub year: i32,
    pub avatar_url: String,

    pub tempo: Tempo,

    pub intensity: f64,
    pub complexity: f64,
    pub density: f64,
    pub momentum: f64,

    pub colors: ColorPalette,
    pub graph: GraphSizing,
    pub music: MusicParameters,
    pub art: ArtParameters,
    pub time_series: TimeSeries,
    pub stats: DisplayStats,
}

/// User-chosen replacements for top-level parameter groups.
///
/// Identity, time series and stats always come from the computed set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ParameterOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo: Option<Tempo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub momentum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorPalette>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphSizing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music: Option<MusicParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub art: Option<ArtParameters>,
}

impl ParameterOverrides {
    /// Returns true if no group is overridden.
    pub fn is_empty(&self) -> bool {
        *self == ParameterOverrides::default()
    }
}

impl UnifiedParameters {
    /// Returns a copy with every present override replacing its group.
    pub fn with_overrides(&self, overrides: &ParameterOverrides) -> UnifiedParameters {
        let mut merged = self.clone();
        if let Some(tempo) = &overrides.tempo {
            merged.tempo = tempo.clone();
        }
        if let Some(v) = overrides.intensity {
            merged.intensity = v;
        }
        if let Some(v) = overrides.complexity {
            merged.complexity = v;
        }
        if let Some(v) = overrides.density {
            merged.density = v;
        }
        if let Some(v) = overrides.momentum {
            merged.momentum = v;
        }
        if let Some(colors) = &overrides.colors {
            merged.colors = colors.clone();
        }
        if let Some(graph) = &overrides.graph {
            merged.graph = graph.clone();
        }
        if let Some(music) = &overrides.music {
            merged.music = music.clone();
        }
        if let Some(art) = &overrides.art {
            merged.art = art.clone();
        }
        merged
    }
}
