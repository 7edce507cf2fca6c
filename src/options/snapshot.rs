//! The immutable configuration snapshot.

use std::path::PathBuf;

use regex::Regex;

use crate::options::values::{
    BaselineProvider, CoverageAnalysis, Edition, FilePattern, LogLevel, MutationLevel,
    MutationOperator, Reporter, TestRunner, Thresholds,
};

/// Every resolved option for one mutation-testing run.
///
/// Produced only by [`resolve`](crate::options::resolve); every field is
/// consistent with every other field at the moment the value is returned, and
/// nothing mutates it afterwards. Downstream components (mutation engine,
/// test-runner orchestration, reporters, baseline clients) consume it as
/// read-only input.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    /// Extra diagnostics for debugging the tool itself.
    pub dev_mode: bool,
    /// Directory the run operates from.
    pub base_path: PathBuf,
    /// Workspace manifest of the project under test, when supplied.
    pub manifest_path: Option<PathBuf>,
    /// Directory reports and logs are written to.
    pub output_path: PathBuf,
    /// Verbosity of run logging.
    pub log_level: LogLevel,
    /// Mirror the log to a file under the output directory.
    pub log_to_file: bool,
    /// How many mutation operators the run applies.
    pub mutation_level: MutationLevel,
    /// Mutation-score thresholds.
    pub thresholds: Thresholds,
    /// Extra per-mutant timeout on top of the measured baseline, in ms.
    pub additional_timeout_ms: u64,
    /// Rust edition of the project under test.
    pub edition: Edition,
    /// Harness used to run tests against mutants.
    pub test_runner: TestRunner,
    /// Maximum concurrent test sessions.
    pub concurrency: usize,
    /// Substring filter selecting the package under test.
    pub project_filter: String,
    /// Workspace packages whose tests run against mutants.
    pub test_packages: Vec<String>,
    /// Compare this run against a stored baseline.
    pub compare_to_baseline: bool,
    /// Active reporters.
    pub reporters: Vec<Reporter>,
    /// Where baseline comparison data is stored.
    pub baseline_provider: BaselineProvider,
    /// Azure file share URL, present only for the azure provider.
    pub azure_storage_url: Option<String>,
    /// Azure shared access signature, present only for the azure provider.
    pub azure_sas_token: Option<String>,
    /// Dashboard endpoint.
    pub dashboard_url: String,
    /// Dashboard API key, present whenever dashboard mode is enabled.
    pub dashboard_api_key: Option<String>,
    /// Dashboard project name, present whenever dashboard mode is enabled.
    pub project_name: Option<String>,
    /// Dashboard module name for multi-module projects.
    pub module_name: Option<String>,
    /// Version the run reports under.
    pub project_version: Option<String>,
    /// Baseline version used when the current version has no report.
    pub fallback_version: String,
    /// Mutate only code changed relative to the diff target.
    pub diff_enabled: bool,
    /// Commitish the codebase is diffed against.
    pub git_diff_target: String,
    /// Patterns whose changes never trigger a full re-run.
    pub diff_ignore_patterns: Vec<FilePattern>,
    /// Glob patterns selecting files to mutate.
    pub mutate: Vec<FilePattern>,
    /// Compiled function-name patterns never mutated.
    pub ignored_functions: Vec<Regex>,
    /// Mutation operator families left out of the run.
    pub excluded_operators: Vec<MutationOperator>,
    /// Coverage-based test selection strategy.
    pub coverage_analysis: CoverageAnalysis,
    /// Stop the test session at the first failing test.
    pub abort_test_on_fail: bool,
    /// Force test sessions to run one at a time.
    pub parallel_testing_disabled: bool,
}

impl ResolvedOptions {
    /// True when any dashboard-oriented feature is active: either an explicit
    /// baseline comparison or the dashboard reporter.
    pub fn dashboard_enabled(&self) -> bool {
        self.compare_to_baseline || self.reporters.contains(&Reporter::Dashboard)
    }
}
