//! Resolved value types shared across the options snapshot.

use serde::{Deserialize, Serialize};

/// Verbosity of run logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Errors and warnings.
    Warn,
    /// Normal progress output.
    Info,
    /// Verbose diagnostics.
    Debug,
    /// Everything, including per-mutant detail.
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// How many mutation operators a run applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MutationLevel {
    /// Smallest useful operator set.
    Basic,
    /// Default operator set.
    Standard,
    /// Standard plus operators that tend to produce many mutants.
    Aggressive,
    /// Every operator the engine knows.
    Complete,
}

/// Rust edition the sources under test are compiled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edition {
    /// Rust 2015.
    #[serde(rename = "2015")]
    Rust2015,
    /// Rust 2018.
    #[serde(rename = "2018")]
    Rust2018,
    /// Rust 2021.
    #[serde(rename = "2021")]
    Rust2021,
    /// Rust 2024.
    #[serde(rename = "2024")]
    Rust2024,
    /// Whatever the installed toolchain defaults to.
    #[serde(rename = "latest")]
    Latest,
}

/// Test harness used to execute mutants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestRunner {
    /// Plain `cargo test`.
    CargoTest,
    /// `cargo nextest`.
    Nextest,
}

/// Output reporter activated for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reporter {
    /// Plain-text summary on stdout.
    ClearText,
    /// Live progress bar.
    Progress,
    /// One character per mutant.
    Dots,
    /// Machine-readable JSON report file.
    Json,
    /// Interactive HTML report.
    Html,
    /// Uploads results to the hosted dashboard.
    Dashboard,
}

/// Storage location for baseline comparison data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaselineProvider {
    /// Baseline stored on the local disk.
    Disk,
    /// Baseline fetched from the hosted dashboard.
    Dashboard,
    /// Baseline stored in an Azure file share.
    AzureFileStorage,
}

/// Mutation operator family that can be excluded from a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MutationOperator {
    /// `+` `-` `*` `/` `%` replacements.
    Arithmetic,
    /// `<` `<=` `>` `>=` `==` `!=` replacements.
    Comparison,
    /// `&&`/`||` swaps and condition negation.
    Boolean,
    /// Compound-assignment operator replacements.
    Assignment,
    /// String literal replacements.
    StringLiteral,
    /// Unary operator removal.
    Unary,
}

/// Coverage-based test selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverageAnalysis {
    /// No coverage analysis, run everything against every mutant.
    Off,
    /// Capture coverage once, skip mutants no test covers.
    All,
    /// Run only the tests covering each mutant.
    PerTest,
    /// Like per-test, but coverage is captured in isolated runs.
    PerTestIsolated,
}

/// Mutation-score thresholds. `high` and `low` color reporting, `break_at`
/// fails the run when the final score drops below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Score at or above which the run is considered good.
    pub high: u8,
    /// Score below which the run is considered in danger.
    pub low: u8,
    /// Score below which the run exits with failure.
    pub break_at: u8,
}

/// A file glob with an optional `!` exclusion marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePattern {
    /// Glob with the `!` marker stripped.
    pub glob: String,
    /// True if the pattern excludes matching files instead of including them.
    pub exclude: bool,
}
