//! Determinism verification.
//!
//! Runs a generation closure several times and compares the outputs byte by
//! byte.

use serde::Serialize;
use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the first run's output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// First difference found, if any.
    pub diff: Option<DiffInfo>,
}

/// Location of the first difference between two runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the first differing byte, or the shorter length.
    pub offset: usize,
    /// Which run (0-indexed) differed from run 0.
    pub run_index: usize,
    /// Text around the difference in the first run's output.
    pub context: String,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at byte {} (run {}): ...{}...",
            self.offset, self.run_index, self.context
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Run `generate_fn` `runs` times and verify all outputs are identical.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference = reference.as_ref();
    let hash = blake3::hash(reference).to_hex().to_string();

    let diff = (1..runs).find_map(|run_index| {
        let output = generate_fn();
        first_difference(reference, output.as_ref()).map(|offset| DiffInfo {
            offset,
            run_index,
            context: context_at(reference, offset),
        })
    });

    DeterminismResult {
        is_deterministic: diff.is_none(),
        runs,
        output_size: reference.len(),
        hash,
        diff,
    }
}

/// Like [`verify_determinism`], comparing the JSON serialization of each
/// run's output.
pub fn verify_json_determinism<F, T>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> T,
    T: Serialize,
{
    verify_determinism(
        || serde_json::to_vec(&generate_fn()).expect("output should serialize"),
        runs,
    )
}

fn first_difference(expected: &[u8], actual: &[u8]) -> Option<usize> {
    expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())))
}

fn context_at(bytes: &[u8], offset: usize) -> String {
    let start = offset.saturating_sub(24);
    let end = (offset + 24).min(bytes.len());
    String::from_utf8_lossy(&bytes[start..end]).into_owned()
}
