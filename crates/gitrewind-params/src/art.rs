//! Generative art parameters.

use gitrewind_model::{ArtParameters, ArtStyle, SeededRandom};

/// Stream salt for the art style draw.
pub const ART_STREAM: &str = "art";

/// Picks a style from the seeded "art" stream and scales the particle
/// field by intensity and complexity.
pub fn compute_art(seed: u32, intensity: f64, complexity: f64) -> ArtParameters {
    let mut rng = SeededRandom::for_stream(seed, ART_STREAM);
    let style = ArtStyle::ALL[rng.index(ArtStyle::ALL.len())];

    ArtParameters {
        style,
        particle_count: (500.0 + intensity * 1500.0).round() as u32,
        noise_scale: 0.5 + complexity * 0.5,
        glow_intensity: 0.3 + intensity * 0.4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_art_is_seeded() {
        let a = compute_art(1234, 0.5, 0.5);
        let b = compute_art(1234, 0.5, 0.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_style_does_not_depend_on_magnitudes() {
        let a = compute_art(99, 0.0, 0.0);
        let b = compute_art(99, 1.0, 1.0);
        assert_eq!(a.style, b.style);
    }

    #[test]
    fn test_every_style_reachable() {
        let styles: std::collections::HashSet<ArtStyle> =
            (0..200).map(|seed| compute_art(seed, 0.0, 0.0).style).collect();
        assert_eq!(styles.len(), ArtStyle::ALL.len());
    }

    #[test]
    fn test_linear_ranges() {
        let low = compute_art(7, 0.0, 0.0);
        assert_eq!(low.particle_count, 500);
        assert_eq!(low.noise_scale, 0.5);
        assert_eq!(low.glow_intensity, 0.3);

        let high = compute_art(7, 1.0, 1.0);
        assert_eq!(high.particle_count, 2000);
        assert_eq!(high.noise_scale, 1.0);
        assert!((high.glow_intensity - 0.7).abs() < 1e-12);
    }
}
