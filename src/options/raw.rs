//! Raw, unvalidated inputs to a resolution pass.

use serde::{Deserialize, Serialize};

/// The full set of raw option values, exactly as supplied by the CLI or a
/// config file layer.
///
/// Every field is optional: `None` means "not supplied", which is distinct
/// from an explicitly empty value. Nothing here is validated; validation
/// happens in one pass in [`resolve`](crate::options::resolve).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RawOptions {
    /// Extra diagnostics for debugging the tool itself.
    pub dev_mode: Option<bool>,
    /// Directory the run operates from.
    pub base_path: Option<String>,
    /// Path to the Cargo.toml of the workspace under test.
    pub manifest_path: Option<String>,
    /// Verbosity keyword.
    pub log_level: Option<String>,
    /// Mirror the log to a file under the output directory.
    pub log_to_file: Option<bool>,
    /// Mutation level keyword.
    pub mutation_level: Option<String>,
    /// Good-score threshold, 0-100.
    pub threshold_high: Option<u8>,
    /// Danger-score threshold, 0-100.
    pub threshold_low: Option<u8>,
    /// Failing-score threshold, 0-100.
    pub threshold_break: Option<u8>,
    /// Extra per-mutant timeout on top of the measured baseline, in ms.
    pub additional_timeout_ms: Option<u64>,
    /// Rust edition keyword.
    pub edition: Option<String>,
    /// Test runner keyword.
    pub test_runner: Option<String>,
    /// Maximum concurrent test sessions.
    pub concurrency: Option<usize>,
    /// Substring filter selecting the package under test.
    pub project_filter: Option<String>,
    /// Workspace packages whose tests run against mutants.
    pub test_packages: Option<Vec<String>>,
    /// Compare this run against a stored baseline.
    pub compare_to_baseline: Option<bool>,
    /// Reporter keywords.
    pub reporters: Option<Vec<String>>,
    /// Baseline provider keyword.
    pub baseline_provider: Option<String>,
    /// Azure file share URL for baselines.
    pub azure_storage_url: Option<String>,
    /// Azure shared access signature.
    pub azure_sas_token: Option<String>,
    /// Self-hosted dashboard endpoint.
    pub dashboard_url: Option<String>,
    /// Dashboard API key.
    pub dashboard_api_key: Option<String>,
    /// Dashboard project name.
    pub project_name: Option<String>,
    /// Dashboard module name for multi-module projects.
    pub module_name: Option<String>,
    /// Version the run reports under.
    pub project_version: Option<String>,
    /// Baseline version used when the current version has no report.
    pub fallback_version: Option<String>,
    /// Mutate only code changed relative to the diff target.
    pub diff: Option<bool>,
    /// Commitish to diff against.
    pub git_diff_target: Option<String>,
    /// Patterns whose changes never trigger a full re-run.
    pub diff_ignore_patterns: Option<Vec<String>>,
    /// Glob patterns selecting files to mutate.
    pub mutate: Option<Vec<String>>,
    /// Function-name wildcards never mutated.
    pub ignored_functions: Option<Vec<String>>,
    /// Mutation operator families to leave out.
    pub excluded_operators: Option<Vec<String>>,
    /// Coverage analysis keyword.
    pub coverage_analysis: Option<String>,
    /// Stop the test session at the first failing test.
    pub abort_test_on_fail: Option<bool>,
    /// Force test sessions to run one at a time.
    pub disable_parallel_testing: Option<bool>,
}
