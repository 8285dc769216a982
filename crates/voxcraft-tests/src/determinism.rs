//! Determinism checks for encoder output.
//!
//! WAV export must be a pure function of the PCM payload and format: the same
//! input always yields the same bytes. These helpers run an encoder several
//! times and report the first differing byte.

use std::fmt;

/// Outcome of [`verify_determinism`].
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether every run matched the first.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the first run's output.
    pub output_size: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// First mismatch, if any.
    pub diff_info: Option<DiffInfo>,
}

/// First mismatch between the reference run and a later one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the mismatch (or the shorter length on a size mismatch).
    pub offset: usize,
    /// Byte in the reference run, if it has one at `offset`.
    pub expected: Option<u8>,
    /// Byte in the differing run, if it has one at `offset`.
    pub actual: Option<u8>,
    /// Which run (0-indexed) differed.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |b: Option<u8>| match b {
            Some(b) => format!("0x{:02X}", b),
            None => "EOF".to_string(),
        };
        write!(
            f,
            "run {} differs at byte {}: expected {}, got {}",
            self.run_index,
            self.offset,
            show(self.expected),
            show(self.actual)
        )
    }
}

impl DeterminismResult {
    /// Panics with the mismatch details if the runs differed.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output ({} runs, {} bytes, hash {}): {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// BLAKE3 hex digest of `data`.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Runs `generate` `runs` times and compares every output with the first.
///
/// # Panics
/// If `runs < 2`.
pub fn verify_determinism<F, O>(generate: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate();
    let reference = reference.as_ref();
    let hash = compute_hash(reference);

    for run_index in 1..runs {
        let output = generate();
        if let Some(diff) = first_difference(reference, output.as_ref(), run_index) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                output_size: reference.len(),
                hash,
                diff_info: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        output_size: reference.len(),
        hash,
        diff_info: None,
    }
}

/// Shorthand for `verify_determinism(generate, runs).assert_deterministic()`.
pub fn assert_deterministic<F, O>(generate: F, runs: usize)
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    verify_determinism(generate, runs).assert_deterministic();
}

fn first_difference(expected: &[u8], actual: &[u8], run_index: usize) -> Option<DiffInfo> {
    let offset = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())))?;

    Some(DiffInfo {
        offset,
        expected: expected.get(offset).copied(),
        actual: actual.get(offset).copied(),
        run_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_identical_runs() {
        let result = verify_determinism(|| vec![1u8, 2, 3], 3);
        assert!(result.is_deterministic);
        assert_eq!(result.output_size, 3);
        assert_eq!(result.hash, compute_hash(&[1, 2, 3]));
    }

    #[test]
    fn test_byte_mismatch() {
        let counter = Cell::new(0u8);
        let result = verify_determinism(
            || {
                counter.set(counter.get() + 1);
                vec![0, 0, counter.get()]
            },
            2,
        );
        assert!(!result.is_deterministic);
        assert_eq!(
            result.diff_info,
            Some(DiffInfo {
                offset: 2,
                expected: Some(1),
                actual: Some(2),
                run_index: 1,
            })
        );
    }

    #[test]
    fn test_length_mismatch() {
        let counter = Cell::new(0usize);
        let result = verify_determinism(
            || {
                counter.set(counter.get() + 1);
                vec![7u8; counter.get()]
            },
            2,
        );
        let diff = result.diff_info.unwrap();
        assert_eq!(diff.offset, 1);
        assert_eq!(diff.expected, None);
        assert_eq!(diff.actual, Some(7));
    }

    #[test]
    #[should_panic(expected = "at least 2")]
    fn test_requires_two_runs() {
        verify_determinism(Vec::<u8>::new, 1);
    }
}
