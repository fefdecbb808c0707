//! Git Rewind Parameter Synthesis
//!
//! Turns a yearly [`ActivityModel`] into [`UnifiedParameters`]: the single
//! record that drives music, color, art and graph generation.
//!
//! Synthesis is a pure function. It performs no I/O, never mutates the
//! model, and has an explicit fallback for every empty input (no languages,
//! no collaborators, zero active days), so it is total over any model that
//! passes [`gitrewind_model::validate_activity`].
//!
//! # Example
//!
//! ```
//! use gitrewind_model::{ActivityModel, MusicalMode, MusicalNote};
//! use gitrewind_params::compute_parameters;
//!
//! let model = ActivityModel::builder("octocat", 2024)
//!     .commits(2000)
//!     .active_days(250)
//!     .consistency(0.8)
//!     .language("Rust", "#dea584", 70.0)
//!     .language("Go", "#00ADD8", 30.0)
//!     .build();
//!
//! let params = compute_parameters(&model);
//! assert_eq!(params.music.key.root, MusicalNote::C);
//! assert_eq!(params.music.key.mode, MusicalMode::Major);
//! assert!(params.intensity > 0.85 && params.intensity < 1.0);
//! ```

pub mod art;
pub mod magnitude;
pub mod music;
pub mod palette;
pub mod series;
pub mod tempo;

use gitrewind_model::{derive_user_seed, ActivityModel, ParameterOverrides, UnifiedParameters};
use tracing::debug;

pub use art::compute_art;
pub use magnitude::{compute_complexity, compute_density, compute_intensity, compute_momentum};
pub use music::{
    assign_instruments, chord_progression, compute_music, instrument_for_language, select_key,
    select_mood,
};
pub use palette::{compute_palette, language_color};
pub use series::{compute_graph_sizing, compute_stats, compute_time_series, detect_peaks};
pub use tempo::{clamp_tempo, compute_tempo};

/// Computes the unified parameters for a user's year.
pub fn compute_parameters(model: &ActivityModel) -> UnifiedParameters {
    let seed = derive_user_seed(&model.user.login, model.year);

    let intensity = compute_intensity(model);
    let complexity = compute_complexity(model);
    let density = compute_density(model);
    let momentum = compute_momentum(model);

    let params = UnifiedParameters {
        seed,
        username: model.user.login.clone(),
        year: model.year,
        avatar_url: model.user.avatar_url.clone(),
        tempo: compute_tempo(model),
        intensity,
        complexity,
        density,
        momentum,
        colors: compute_palette(model),
        graph: compute_graph_sizing(model),
        music: compute_music(model, intensity, complexity, momentum),
        art: compute_art(seed, intensity, complexity),
        time_series: compute_time_series(model),
        stats: compute_stats(model),
    };

    debug!(
        login = %params.username,
        year = params.year,
        seed = params.seed,
        bpm = params.tempo.bpm,
        mood = ?params.music.mood,
        style = ?params.art.style,
        "computed parameters"
    );

    params
}

/// Applies user overrides on top of computed parameters.
///
/// Overridden values are clamped to the same ranges synthesis produces:
/// bpm to [60, 180], swing to [0, 0.3] and the four magnitudes to [0, 1],
/// with NaN mapped to 0.
pub fn apply_overrides(
    params: &UnifiedParameters,
    overrides: &ParameterOverrides,
) -> UnifiedParameters {
    if overrides.is_empty() {
        return params.clone();
    }
    debug!(login = %params.username, "applying parameter overrides");
    let mut merged = params.with_overrides(overrides);
    merged.tempo = clamp_tempo(&merged.tempo);
    merged.intensity = magnitude::clamp01(merged.intensity);
    merged.complexity = magnitude::clamp01(merged.complexity);
    merged.density = magnitude::clamp01(merged.density);
    merged.momentum = magnitude::clamp01(merged.momentum);
    merged
}
