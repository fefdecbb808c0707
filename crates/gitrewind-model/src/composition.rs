//! Composition: a fixed-length, multi-section arrangement of scheduled notes.

use serde::{Deserialize, Serialize};

use crate::parameters::InstrumentType;

/// Section of the arrangement, in playback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionName {
    Intro,
    Verse,
    Chorus,
    Bridge,
    Outro,
}

impl SectionName {
    /// Sections in playback order.
    pub const ORDER: [SectionName; 5] = [
        SectionName::Intro,
        SectionName::Verse,
        SectionName::Chorus,
        SectionName::Bridge,
        SectionName::Outro,
    ];

    /// Fixed length of the section in seconds.
    pub fn duration_seconds(self) -> f64 {
        match self {
            SectionName::Intro => 15.0,
            SectionName::Verse => 30.0,
            SectionName::Chorus => 20.0,
            SectionName::Bridge => 15.0,
            SectionName::Outro => 10.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionName::Intro => "intro",
            SectionName::Verse => "verse",
            SectionName::Chorus => "chorus",
            SectionName::Bridge => "bridge",
            SectionName::Outro => "outro",
        }
    }
}

/// Total length of a composition in seconds: the sum of all section lengths.
pub fn total_section_duration() -> f64 {
    SectionName::ORDER
        .iter()
        .map(|s| s.duration_seconds())
        .sum()
}

/// A single note to be triggered by the audio engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledNote {
    /// Seconds from the start of the composition.
    pub time: f64,
    /// Note name with octave, e.g. "C4".
    pub note: String,
    /// Seconds.
    pub duration: f64,
    /// 0-1.
    pub velocity: f64,
    pub instrument: InstrumentType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicSection {
    pub name: SectionName,
    pub start_time: f64,
    pub duration: f64,
    pub notes: Vec<ScheduledNote>,
}

impl MusicSection {
    /// End of the section window (exclusive).
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// True if `time` falls inside `[start_time, end_time)`.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time < self.end_time()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub sections: Vec<MusicSection>,
    pub total_duration: f64,
    pub bpm: u32,
}

impl Composition {
    /// All notes across sections, in section order.
    pub fn notes(&self) -> impl Iterator<Item = &ScheduledNote> {
        self.sections.iter().flat_map(|s| s.notes.iter())
    }

    pub fn note_count(&self) -> usize {
        self.sections.iter().map(|s| s.notes.len()).sum()
    }

    pub fn section(&self, name: SectionName) -> Option<&MusicSection> {
        self.sections.iter().find(|s| s.name == name)
    }
}
