//! Color palette derivation from the language mix.

use gitrewind_model::color::is_hex_color;
use gitrewind_model::{ActivityModel, ColorPalette, Hsl, LanguageStats};

/// Primary color when the user has no languages.
pub const DEFAULT_PRIMARY: &str = "#3178c6";

/// Color for languages with no known or valid color.
pub const NEUTRAL_LANGUAGE_COLOR: &str = "#8b949e";

/// Maximum number of gradient stops.
pub const MAX_GRADIENT: usize = 5;

/// Canonical display colors for common languages.
const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("TypeScript", "#3178c6"),
    ("JavaScript", "#f1e05a"),
    ("Python", "#3572A5"),
    ("Rust", "#dea584"),
    ("Go", "#00ADD8"),
    ("Java", "#b07219"),
    ("C++", "#f34b7d"),
    ("C", "#555555"),
    ("C#", "#178600"),
    ("Ruby", "#701516"),
    ("Swift", "#F05138"),
    ("Kotlin", "#A97BFF"),
    ("PHP", "#4F5D95"),
    ("Shell", "#89e051"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("Scala", "#c22d40"),
    ("Dart", "#00B4AB"),
    ("Haskell", "#5e5086"),
    ("Lua", "#000080"),
    ("Elixir", "#6e4a7e"),
    ("Vue", "#41b883"),
];

/// Display color for a language.
///
/// Known languages use their canonical color. Others use `own_color` when
/// it is a valid hex color, else [`NEUTRAL_LANGUAGE_COLOR`].
pub fn language_color<'a>(name: &str, own_color: &'a str) -> &'a str {
    if let Some((_, color)) = LANGUAGE_COLORS.iter().find(|(lang, _)| *lang == name) {
        return *color;
    }
    if is_hex_color(own_color) {
        own_color
    } else {
        NEUTRAL_LANGUAGE_COLOR
    }
}

fn language_hsl(language: &LanguageStats) -> Hsl {
    hex_or_neutral(language_color(&language.name, &language.color))
}

fn hex_or_neutral(hex: &str) -> Hsl {
    Hsl::from_hex(hex).unwrap_or(Hsl::new(212.0, 9.0, 58.0))
}

/// Builds the palette: primary from the top language, secondary from the
/// second (or a 60 degree rotation), accent opposite the primary, and a dark
/// low-saturation background in the primary's hue.
pub fn compute_palette(model: &ActivityModel) -> ColorPalette {
    let primary = model
        .languages
        .first()
        .map(language_hsl)
        .unwrap_or_else(|| hex_or_neutral(DEFAULT_PRIMARY));

    let secondary = model
        .languages
        .get(1)
        .map(language_hsl)
        .unwrap_or_else(|| primary.rotate(60.0));

    let mut gradient: Vec<Hsl> = model
        .languages
        .iter()
        .take(MAX_GRADIENT)
        .map(language_hsl)
        .collect();
    if gradient.is_empty() {
        gradient.push(primary);
    }

    ColorPalette {
        primary,
        secondary,
        accent: primary.rotate(180.0),
        background: Hsl::new(primary.h, 15.0, 8.0),
        gradient,
    }
}
