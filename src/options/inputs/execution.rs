//! Inputs controlling how mutants are compiled and executed.

use crate::options::error::OptionsError;
use crate::options::inputs::keyword::match_keyword;
use crate::options::values::{CoverageAnalysis, Edition, TestRunner};

const EDITION_KEYWORDS: &[(&str, Edition)] = &[
    ("2015", Edition::Rust2015),
    ("2018", Edition::Rust2018),
    ("2021", Edition::Rust2021),
    ("2024", Edition::Rust2024),
    ("latest", Edition::Latest),
];

const TEST_RUNNER_KEYWORDS: &[(&str, TestRunner)] = &[
    ("cargo-test", TestRunner::CargoTest),
    ("nextest", TestRunner::Nextest),
];

const COVERAGE_KEYWORDS: &[(&str, CoverageAnalysis)] = &[
    ("off", CoverageAnalysis::Off),
    ("all", CoverageAnalysis::All),
    ("per-test", CoverageAnalysis::PerTest),
    ("per-test-isolated", CoverageAnalysis::PerTestIsolated),
];

/// Rust edition the sources under test target.
pub struct EditionInput;

impl EditionInput {
    /// Canonical field name.
    pub const NAME: &'static str = "edition";
    /// Help text shown for the field.
    pub const HELP: &'static str =
        "Rust edition of the project under test. One of: 2015, 2018, 2021, 2024, latest. \
        Default: latest.";
    /// Edition applied when no raw value is given.
    pub const DEFAULT: Edition = Edition::Latest;

    /// Resolve the edition keyword.
    pub fn resolve(raw: Option<&str>) -> Result<Edition, OptionsError> {
        match raw {
            None => Ok(Self::DEFAULT),
            Some(value) => match_keyword(Self::NAME, value, EDITION_KEYWORDS),
        }
    }
}

/// Test harness used to execute mutants.
pub struct TestRunnerInput;

impl TestRunnerInput {
    /// Canonical field name.
    pub const NAME: &'static str = "test-runner";
    /// Help text shown for the field.
    pub const HELP: &'static str =
        "Harness used to run the test suite against each mutant. One of: cargo-test, nextest. \
        Default: cargo-test.";
    /// Runner applied when no raw value is given.
    pub const DEFAULT: TestRunner = TestRunner::CargoTest;

    /// Resolve the test runner keyword.
    pub fn resolve(raw: Option<&str>) -> Result<TestRunner, OptionsError> {
        match raw {
            None => Ok(Self::DEFAULT),
            Some(value) => match_keyword(Self::NAME, value, TEST_RUNNER_KEYWORDS),
        }
    }
}

/// Number of test sessions allowed to run at once.
pub struct ConcurrencyInput;

impl ConcurrencyInput {
    /// Canonical field name.
    pub const NAME: &'static str = "concurrency";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Maximum number of concurrent test sessions. Values above \
        the machine's logical CPU count are clamped. Default: the logical CPU count.";

    /// Resolve the concurrency limit against available parallelism.
    pub fn resolve(raw: Option<usize>) -> Result<usize, OptionsError> {
        let available = std::thread::available_parallelism()
            .map(std::num::NonZeroUsize::get)
            .unwrap_or(1);
        match raw {
            None => Ok(available),
            Some(0) => Err(OptionsError::invalid(Self::NAME, 0, "must be at least 1")),
            Some(requested) if requested > available => {
                tracing::warn!(
                    requested,
                    available,
                    "requested concurrency exceeds available parallelism, clamping"
                );
                Ok(available)
            }
            Some(requested) => Ok(requested),
        }
    }
}

/// Coverage-based test selection strategy.
pub struct CoverageAnalysisInput;

impl CoverageAnalysisInput {
    /// Canonical field name.
    pub const NAME: &'static str = "coverage-analysis";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Coverage strategy used to skip tests that cannot kill a \
        mutant. One of: off, all, per-test, per-test-isolated. Default: per-test.";
    /// Strategy applied when no raw value is given.
    pub const DEFAULT: CoverageAnalysis = CoverageAnalysis::PerTest;

    /// Resolve the coverage analysis keyword.
    pub fn resolve(raw: Option<&str>) -> Result<CoverageAnalysis, OptionsError> {
        match raw {
            None => Ok(Self::DEFAULT),
            Some(value) => match_keyword(Self::NAME, value, COVERAGE_KEYWORDS),
        }
    }
}

/// Names of the test packages to run against mutants.
pub struct TestPackagesInput;

impl TestPackagesInput {
    /// Canonical field name.
    pub const NAME: &'static str = "test-packages";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Workspace packages whose tests are executed against each \
        mutant. Default: every package with tests.";

    /// Validate the package list; entries are trimmed and must be non-empty.
    pub fn resolve(raw: Option<Vec<String>>) -> Result<Vec<String>, OptionsError> {
        let mut packages = Vec::new();
        for entry in raw.unwrap_or_default() {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                return Err(OptionsError::invalid(
                    Self::NAME,
                    entry.as_str(),
                    "package name must not be empty",
                ));
            }
            packages.push(trimmed.to_string());
        }
        Ok(packages)
    }
}
