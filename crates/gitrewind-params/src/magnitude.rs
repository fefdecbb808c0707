//! The four magnitude scalars: intensity, complexity, density, momentum.
//!
//! Each is a pure function of the activity model and lies in [0, 1].

use gitrewind_model::{ActivityModel, LanguageStats, MONTHS_PER_YEAR};

/// Commits per year at which intensity saturates.
pub const INTENSITY_SATURATION: f64 = 5000.0;

/// Log-scaled commit volume, saturating at [`INTENSITY_SATURATION`].
pub fn compute_intensity(model: &ActivityModel) -> f64 {
    let commits = model.totals.commits as f64;
    clamp01((commits + 1.0).log10() / INTENSITY_SATURATION.log10())
}

/// Normalized Shannon entropy of the language distribution.
///
/// Zero when there are fewer than two languages or the percentages sum to
/// zero; one when every language has the same share.
pub fn compute_complexity(model: &ActivityModel) -> f64 {
    language_entropy(&model.languages)
}

fn language_entropy(languages: &[LanguageStats]) -> f64 {
    if languages.len() <= 1 {
        return 0.0;
    }

    let total: f64 = languages.iter().map(|l| l.percentage).sum();
    if total <= 0.0 || !total.is_finite() {
        return 0.0;
    }

    let entropy: f64 = languages
        .iter()
        .map(|l| l.percentage / total)
        .filter(|&p| p > 0.0)
        .map(|p| -p * p.log2())
        .sum();

    clamp01(entropy / (languages.len() as f64).log2())
}

/// Average commits per active day, scaled so ten per day saturates.
pub fn compute_density(model: &ActivityModel) -> f64 {
    let active_days = model.totals.active_days;
    if active_days == 0 {
        return 0.0;
    }
    clamp01(model.totals.commits as f64 / active_days as f64 / 10.0)
}

/// Share of the year's commits made in July through December.
///
/// Falls back to 0.5 when the monthly series is short or empty of commits.
pub fn compute_momentum(model: &ActivityModel) -> f64 {
    let monthly = &model.monthly_activity;
    if monthly.len() < MONTHS_PER_YEAR {
        return 0.5;
    }

    let total: u64 = monthly.iter().map(|m| m.commits as u64).sum();
    if total == 0 {
        return 0.5;
    }

    let second_half: u64 = monthly[MONTHS_PER_YEAR / 2..]
        .iter()
        .map(|m| m.commits as u64)
        .sum();
    clamp01(second_half as f64 / total as f64)
}

/// Clamps into [0, 1], mapping NaN to 0.
pub(crate) fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_intensity() {
        let zero = ActivityModel::builder("t", 2024).build();
        assert_eq!(compute_intensity(&zero), 0.0);

        let saturated = ActivityModel::builder("t", 2024).commits(4999).build();
        assert!(approx(compute_intensity(&saturated), 1.0));

        let over = ActivityModel::builder("t", 2024).commits(100_000).build();
        assert_eq!(compute_intensity(&over), 1.0);

        let mid = ActivityModel::builder("t", 2024).commits(2000).build();
        let expected = 2001f64.log10() / 5000f64.log10();
        assert!(approx(compute_intensity(&mid), expected));
    }

    #[test]
    fn test_complexity_single_language_is_zero() {
        let model = ActivityModel::builder("t", 2024)
            .language("Rust", "#dea584", 100.0)
            .build();
        assert_eq!(compute_complexity(&model), 0.0);
        assert_eq!(compute_complexity(&ActivityModel::builder("t", 2024).build()), 0.0);
    }

    #[test]
    fn test_complexity_even_split_is_one() {
        let model = ActivityModel::builder("t", 2024)
            .language("Rust", "#dea584", 25.0)
            .language("Go", "#00ADD8", 25.0)
            .language("Python", "#3572A5", 25.0)
            .language("C", "#555555", 25.0)
            .build();
        assert!(approx(compute_complexity(&model), 1.0));
    }

    #[test]
    fn test_complexity_skewed() {
        let model = ActivityModel::builder("t", 2024)
            .language("Rust", "#dea584", 90.0)
            .language("Go", "#00ADD8", 10.0)
            .build();
        // H(0.9, 0.1) in bits
        let expected = -(0.9f64 * 0.9f64.log2() + 0.1 * 0.1f64.log2());
        assert!(approx(compute_complexity(&model), expected));
    }

    #[test]
    fn test_complexity_zero_total() {
        let model = ActivityModel::builder("t", 2024)
            .language("Rust", "", 0.0)
            .language("Go", "", 0.0)
            .build();
        assert_eq!(compute_complexity(&model), 0.0);
    }

    #[test]
    fn test_density() {
        let none = ActivityModel::builder("t", 2024).commits(50).build();
        assert_eq!(compute_density(&none), 0.0);

        let half = ActivityModel::builder("t", 2024)
            .commits(500)
            .active_days(100)
            .build();
        assert!(approx(compute_density(&half), 0.5));

        let capped = ActivityModel::builder("t", 2024)
            .commits(500)
            .active_days(10)
            .build();
        assert_eq!(compute_density(&capped), 1.0);
    }

    #[test]
    fn test_momentum() {
        let back_loaded = ActivityModel::builder("t", 2024)
            .monthly_commits([0, 0, 0, 0, 0, 0, 10, 10, 10, 10, 10, 10])
            .build();
        assert_eq!(compute_momentum(&back_loaded), 1.0);

        let even = ActivityModel::builder("t", 2024)
            .monthly_commits([5; 12])
            .build();
        assert!(approx(compute_momentum(&even), 0.5));

        let front_loaded = ActivityModel::builder("t", 2024)
            .monthly_commits([30, 0, 0, 0, 0, 0, 10, 0, 0, 0, 0, 0])
            .build();
        assert!(approx(compute_momentum(&front_loaded), 0.25));
    }

    #[test]
    fn test_momentum_fallbacks() {
        let silent = ActivityModel::builder("t", 2024).build();
        assert_eq!(compute_momentum(&silent), 0.5);

        let mut short = ActivityModel::builder("t", 2024)
            .monthly_commits([1; 12])
            .build();
        short.monthly_activity.truncate(6);
        assert_eq!(compute_momentum(&short), 0.5);
    }

    #[test]
    fn test_clamp01_nan() {
        assert_eq!(clamp01(f64::NAN), 0.0);
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(2.0), 1.0);
    }
}
