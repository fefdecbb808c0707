//! Seeded melody generation by scale walk.

use std::f64::consts::PI;

use gitrewind_model::SeededRandom;

/// Overall shape of a generated melody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Contour {
    /// Steps up 70% of the time.
    Ascending,
    /// Steps down 70% of the time.
    Descending,
    /// Follows one sine period over the melody, with 30% random flips.
    #[default]
    Wave,
}

/// Walks `scale` from its middle degree, emitting `length` notes.
///
/// Each step moves one degree (70%) or two, in the direction chosen by
/// `contour`, and stops at the ends of the scale. Every note returned is an
/// element of `scale`. Each step draws exactly two values from `rng`.
pub fn generate_melody(
    scale: &[i32],
    length: usize,
    rng: &mut SeededRandom,
    contour: Contour,
) -> Vec<i32> {
    if scale.is_empty() {
        return Vec::new();
    }

    let last = scale.len() as i64 - 1;
    let mut index = (scale.len() / 2) as i64;
    let mut melody = Vec::with_capacity(length);

    for i in 0..length {
        melody.push(scale[index as usize]);

        let direction: i64 = match contour {
            Contour::Ascending => {
                if rng.chance(0.7) {
                    1
                } else {
                    -1
                }
            }
            Contour::Descending => {
                if rng.chance(0.7) {
                    -1
                } else {
                    1
                }
            }
            Contour::Wave => {
                let phase = (i as f64 / length as f64) * PI * 2.0;
                let along = if phase.sin() > 0.0 { 1 } else { -1 };
                if rng.chance(0.3) {
                    -along
                } else {
                    along
                }
            }
        };

        let interval = if rng.chance(0.7) { 1 } else { 2 };
        index = (index + direction * interval).clamp(0, last);
    }

    melody
}
