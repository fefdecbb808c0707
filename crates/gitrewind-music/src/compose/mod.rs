//! Five-section composition from unified parameters.
//!
//! Every section has a fixed length, so a composition always lasts the
//! same ninety seconds. Parameters only change what is played inside each
//! section: note density, velocity, pitch and voice.

mod context;
mod sections;


use gitrewind_model::{Composition, MusicSection, SectionName, UnifiedParameters};
use tracing::debug;

use context::ComposeContext;

/// Stream salt for every random choice made while composing.
pub const COMPOSE_STREAM: &str = "compose";

/// Composes the arrangement for a parameter set.
///
/// Sections are laid end to end in [`SectionName::ORDER`]; each note's time
/// lies inside its own section.
pub fn compose(params: &UnifiedParameters) -> Composition {
    let mut ctx = ComposeContext::new(params);
    let mut sections = Vec::with_capacity(SectionName::ORDER.len());
    let mut current_time = 0.0;

    for name in SectionName::ORDER {
        let duration = name.duration_seconds();
        let notes = match name {
            SectionName::Intro => sections::intro(&mut ctx, current_time, duration),
            SectionName::Verse => sections::verse(&mut ctx, current_time, duration),
            SectionName::Chorus => sections::chorus(&mut ctx, current_time, duration),
            SectionName::Bridge => sections::bridge(&ctx, current_time, duration),
            SectionName::Outro => sections::outro(&mut ctx, current_time, duration),
        };

        sections.push(MusicSection {
            name,
            start_time: current_time,
            duration,
            notes,
        });
        current_time += duration;
    }

    let composition = Composition {
        sections,
        total_duration: current_time,
        bpm: params.tempo.bpm,
    };

    debug!(
        seed = params.seed,
        bpm = composition.bpm,
        notes = composition.note_count(),
        duration = composition.total_duration,
        "composed arrangement"
    );

    composition
}
