//! Tempo derivation.

use gitrewind_model::{ActivityModel, Tempo};

pub const MIN_BPM: u32 = 60;
pub const MAX_BPM: u32 = 180;
pub const MAX_SWING: f64 = 0.3;

/// Computes tempo from average daily commits and consistency.
///
/// BPM grows logarithmically with commits per day so that differences stay
/// audible across orders of magnitude:
///
/// ```text
/// bpm = 70 + 90 * log10(1 + 2 * commits_per_day) / log10(50)
/// ```
///
/// No activity gives 70 bpm, 1/day about 95 bpm, 5/day about 125 bpm and
/// 20/day about 155 bpm. The result is rounded and clamped to [60, 180]. Swing is
/// `consistency * 0.2`, clamped to [0, 0.3].
pub fn compute_tempo(model: &ActivityModel) -> Tempo {
    let per_day = model.totals.commits as f64 / 365.0;
    let bpm = 70.0 + 90.0 * (1.0 + per_day * 2.0).log10() / 50f64.log10();
    let swing = model.patterns.consistency_score * 0.2;

    Tempo {
        bpm: (bpm.round() as u32).clamp(MIN_BPM, MAX_BPM),
        swing: clamp_unit(swing, MAX_SWING),
        signature: [4, 4],
    }
}

/// Pulls an externally supplied tempo back into the derived ranges.
pub fn clamp_tempo(tempo: &Tempo) -> Tempo {
    Tempo {
        bpm: tempo.bpm.clamp(MIN_BPM, MAX_BPM),
        swing: clamp_unit(tempo.swing, MAX_SWING),
        signature: tempo.signature,
    }
}

/// Clamps into [0, max], mapping NaN to 0.
fn clamp_unit(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}
