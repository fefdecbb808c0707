//! Git Rewind End-to-End Test Infrastructure
//!
//! This crate hosts tests that cross crate boundaries:
//!
//! - **Determinism**: identical input gives byte-identical JSON output
//! - **Scenarios**: behavior on fixed, named activity models
//! - **Invariants**: range and containment properties over arbitrary models
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gitrewind-tests
//! ```
//!
//! ## Determinism Testing
//!
//! ```rust,ignore
//! use gitrewind_tests::determinism::verify_json_determinism;
//!
//! let result = verify_json_determinism(|| compute_parameters(&model), 3);
//! result.assert_deterministic();
//! ```

pub mod determinism;
pub mod fixtures;

pub use determinism::{verify_determinism, verify_json_determinism, DeterminismResult};
pub use fixtures::{ActivityFixture, NamedFixture};
