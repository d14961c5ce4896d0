//! Determinism testing framework for Glyphseed.
//!
//! Generated markup is part of the output contract: the same seed and
//! options must produce byte-identical text on every run. This module runs a
//! generator repeatedly and reports the first divergence, either for one
//! closure or for a whole corpus of seeds.

use std::fmt;

/// Characters of context shown on each side of a difference.
const CONTEXT_CHARS: usize = 24;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// If non-deterministic, information about the first difference found.
    pub diff_info: Option<DiffInfo>,
}

/// The first difference found between runs.
#[derive(Debug, Clone)]
pub struct DiffInfo {
    /// Byte offset where the difference was found.
    pub offset: usize,
    /// Which run (0-indexed) produced the differing output.
    pub run_index: usize,
    /// Text around the offset in the first run.
    pub expected: String,
    /// Text around the offset in the differing run.
    pub actual: String,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at byte {} (run {})\n  expected: ...{}...\n  actual:   ...{}...",
            self.offset, self.run_index, self.expected, self.actual
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
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

/// Run generation N times and verify all outputs are identical.
///
/// # Arguments
///
/// * `generate_fn` - A function that generates output
/// * `runs` - Number of times to run the generation (minimum 2)
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference_bytes = reference.as_ref();
    let hash = compute_hash(reference_bytes);

    for run_index in 1..runs {
        let output = generate_fn();
        if let Some(diff) = find_first_difference(reference_bytes, output.as_ref(), run_index) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                output_size: reference_bytes.len(),
                hash,
                diff_info: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        output_size: reference_bytes.len(),
        hash,
        diff_info: None,
    }
}

fn find_first_difference(expected: &[u8], actual: &[u8], run_index: usize) -> Option<DiffInfo> {
    let offset = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())))?;

    Some(DiffInfo {
        offset,
        run_index,
        expected: context(expected, offset),
        actual: context(actual, offset),
    })
}

fn context(data: &[u8], offset: usize) -> String {
    let start = offset.saturating_sub(CONTEXT_CHARS);
    let end = (offset + CONTEXT_CHARS).min(data.len());
    String::from_utf8_lossy(&data[start.min(end)..end]).into_owned()
}

/// Compute the BLAKE3 hash of data.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Compare hashes from multiple runs.
pub fn verify_hash_determinism(hashes: &[String]) -> bool {
    match hashes.first() {
        Some(reference) => hashes.iter().all(|h| h == reference),
        None => true,
    }
}

/// Determinism check over a corpus of seeds.
#[derive(Debug, Clone)]
pub struct DeterminismFixture {
    /// Seeds to test.
    pub seeds: Vec<String>,
    /// Number of runs per seed.
    pub runs: usize,
}

impl Default for DeterminismFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl DeterminismFixture {
    /// Create a new empty fixture.
    pub fn new() -> Self {
        Self {
            seeds: Vec::new(),
            runs: 3,
        }
    }

    /// Add one seed.
    pub fn add_seed(mut self, seed: impl Into<String>) -> Self {
        self.seeds.push(seed.into());
        self
    }

    /// Add many seeds.
    pub fn add_seeds<I, S>(mut self, seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seeds.extend(seeds.into_iter().map(Into::into));
        self
    }

    /// Set the number of runs per seed.
    pub fn runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Run `generate` for every seed.
    pub fn run<F>(&self, generate: F) -> DeterminismReport
    where
        F: Fn(&str) -> String,
    {
        let entries = self
            .seeds
            .iter()
            .map(|seed| DeterminismReportEntry {
                seed: seed.clone(),
                result: verify_determinism(|| generate(seed), self.runs),
            })
            .collect();
        DeterminismReport { entries }
    }
}

/// Entry in a determinism report for a single seed.
#[derive(Debug)]
pub struct DeterminismReportEntry {
    /// The seed tested.
    pub seed: String,
    /// Result of the determinism test.
    pub result: DeterminismResult,
}

/// Report of determinism tests across a corpus.
#[derive(Debug, Default)]
pub struct DeterminismReport {
    /// Individual seed entries.
    pub entries: Vec<DeterminismReportEntry>,
}

impl DeterminismReport {
    /// Check if every seed passed.
    pub fn all_deterministic(&self) -> bool {
        self.entries.iter().all(|e| e.result.is_deterministic)
    }

    /// Entries that failed.
    pub fn failures(&self) -> impl Iterator<Item = &DeterminismReportEntry> {
        self.entries.iter().filter(|e| !e.result.is_deterministic)
    }
}

impl fmt::Display for DeterminismReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failed = self.failures().count();
        writeln!(
            f,
            "Determinism report: {}/{} seeds passed",
            self.entries.len() - failed,
            self.entries.len()
        )?;
        for entry in self.failures() {
            writeln!(f, "  [FAIL] {:?}", entry.seed)?;
            if let Some(diff) = &entry.result.diff_info {
                writeln!(f, "    {}", diff)?;
            }
        }
        Ok(())
    }
}

/// Macro for easy determinism testing.
///
/// Generates a test that runs an expression three times (or `runs = N`
/// times) and asserts byte-identical output.
///
/// ```rust,ignore
/// use glyphseed_tests::test_determinism;
///
/// test_determinism!(crystal_jaskier, {
///     crystal::generate("jaskier", &CrystalOptions::default())
/// });
/// ```
#[macro_export]
macro_rules! test_determinism {
    ($name:ident, $generate:expr) => {
        $crate::test_determinism!($name, runs = 3, $generate);
    };

    ($name:ident, runs = $runs:expr, $generate:expr) => {
        #[test]
        fn $name() {
            $crate::determinism::verify_determinism(|| $generate, $runs).assert_deterministic();
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_identical_runs_pass() {
        let result = verify_determinism(|| "<svg/>".to_string(), 3);
        assert!(result.is_deterministic);
        assert_eq!(result.output_size, 6);
        assert_eq!(result.hash, compute_hash(b"<svg/>"));
    }

    #[test]
    fn test_detects_difference() {
        let counter = Cell::new(0);
        let result = verify_determinism(
            || {
                counter.set(counter.get() + 1);
                format!("<circle r=\"{}\"/>", counter.get())
            },
            3,
        );
        assert!(!result.is_deterministic);
        let diff = result.diff_info.unwrap();
        assert_eq!(diff.offset, 11);
        assert_eq!(diff.run_index, 1);
    }

    #[test]
    fn test_detects_length_difference() {
        let counter = Cell::new(0);
        let result = verify_determinism(
            || {
                counter.set(counter.get() + 1);
                "a".repeat(counter.get())
            },
            2,
        );
        assert_eq!(result.diff_info.unwrap().offset, 1);
    }

    #[test]
    fn test_hash_determinism() {
        assert!(verify_hash_determinism(&[]));
        assert!(verify_hash_determinism(&["a".into(), "a".into()]));
        assert!(!verify_hash_determinism(&["a".into(), "b".into()]));
    }

    #[test]
    fn test_fixture_report() {
        let report = DeterminismFixture::new()
            .add_seed("a")
            .add_seeds(["b", "c"])
            .runs(2)
            .run(|seed| seed.repeat(2));
        assert_eq!(report.entries.len(), 3);
        assert!(report.all_deterministic());
        assert!(report.to_string().contains("3/3"));
    }
}
