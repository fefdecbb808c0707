//! Property-based invariant tests for Git Rewind using proptest.
//!
//! These tests generate arbitrary (valid) activity models and check the
//! range, containment and well-formedness properties every stage promises.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gitrewind-tests --test proptest_invariants
//! ```

use proptest::prelude::*;

use gitrewind_graph::{layout, SimulationConfig};
use gitrewind_model::{
    validate_activity, validate_graph, ActivityModel, NodeKind, SeededRandom, MONTHS_PER_YEAR,
};
use gitrewind_music::{compose, generate_melody, parse_note_name, scale_notes, Contour};
use gitrewind_params::compute_parameters;

const LANGUAGES: &[&str] = &[
    "Rust", "TypeScript", "Python", "Go", "Java", "Ruby", "Zig", "Elm", "Nim",
];

/// Strategy for activity models that pass contract validation.
fn arbitrary_model() -> impl Strategy<Value = ActivityModel> {
    (
        "[a-z][a-z0-9-]{0,15}",
        2008i32..2030,
        0u32..20_000,
        0u32..=366,
        0.0f64..=1.0,
        prop::array::uniform12(0u32..400),
        prop::collection::vec((0..LANGUAGES.len(), 0.0f64..100.0), 0..6),
        prop::collection::vec(1u32..80, 0..12),
    )
        .prop_map(
            |(login, year, commits, active_days, consistency, monthly, langs, collabs)| {
                let mut builder = ActivityModel::builder(login, year)
                    .commits(commits)
                    .active_days(active_days)
                    .consistency(consistency)
                    .monthly_commits(monthly);
                for (index, share) in langs {
                    builder = builder.language(LANGUAGES[index], "", share);
                }
                for (i, interactions) in collabs.into_iter().enumerate() {
                    builder = builder.collaborator(format!("friend-{}", i), interactions);
                }
                builder.build()
            },
        )
}

// ============================================================================
// 1. Parameter ranges
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Generated models satisfy the contract the core relies on.
    #[test]
    fn generated_models_are_valid(model in arbitrary_model()) {
        prop_assert!(validate_activity(&model).is_ok());
        prop_assert_eq!(model.monthly_activity.len(), MONTHS_PER_YEAR);
    }

    /// Tempo and magnitudes always lie within their ranges.
    #[test]
    fn parameters_stay_in_range(model in arbitrary_model()) {
        let params = compute_parameters(&model);

        prop_assert!((60..=180).contains(&params.tempo.bpm));
        prop_assert!((0.0..=0.3).contains(&params.tempo.swing));
        for value in [params.intensity, params.complexity, params.density, params.momentum] {
            prop_assert!((0.0..=1.0).contains(&value), "magnitude {} out of range", value);
        }
        prop_assert!(!params.music.instruments.is_empty());
        prop_assert!(params.music.instruments.len() <= 4);
        prop_assert!(!params.colors.gradient.is_empty());
        prop_assert!(params.graph.node_count <= 100);
    }
}

// ============================================================================
// 2. Composition
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Sections are contiguous and every note falls inside its section.
    #[test]
    fn composition_notes_are_contained(model in arbitrary_model()) {
        let composition = compose(&compute_parameters(&model));

        prop_assert_eq!(composition.total_duration, 90.0);
        let mut cursor = 0.0;
        for section in &composition.sections {
            prop_assert!((section.start_time - cursor).abs() < 1e-9);
            cursor = section.end_time();
            for note in &section.notes {
                prop_assert!(section.contains(note.time));
                prop_assert!(parse_note_name(&note.note).is_some());
            }
        }
    }

    /// Melodies have the requested length and only use scale tones.
    #[test]
    fn melody_uses_scale_tones(seed in any::<u32>(), length in 1usize..64) {
        let scale = scale_notes(
            gitrewind_model::MusicalNote::D,
            gitrewind_model::MusicalMode::Dorian,
            4,
        );
        let mut rng = SeededRandom::new(seed);
        let melody = generate_melody(&scale, length, &mut rng, Contour::Wave);

        prop_assert_eq!(melody.len(), length);
        for midi in melody {
            prop_assert!(scale.contains(&midi));
        }
    }
}

// ============================================================================
// 3. Graph
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Layouts have one user node, resolvable edges and finite positions.
    #[test]
    fn layout_is_well_formed(model in arbitrary_model(), ticks in 0usize..60) {
        let params = compute_parameters(&model);
        let graph = layout(&model, &params, SimulationConfig::default(), ticks).unwrap();

        prop_assert!(validate_graph(&graph).is_ok());
        prop_assert_eq!(
            graph.nodes.iter().filter(|n| n.kind == NodeKind::User).count(),
            1
        );
        for node in &graph.nodes {
            let p = node.position.unwrap();
            prop_assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
        }
    }
}
