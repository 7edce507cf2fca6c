//! The resolver: one sequential pass over every input in dependency order.

use crate::fs::FileExistence;
use crate::options::error::OptionsError;
use crate::options::inputs::{
    AzureSasTokenInput, AzureStorageUrlInput, BasePathInput, BaselineProviderInput,
    ConcurrencyInput, CoverageAnalysisInput, DashboardApiKeyInput, DashboardUrlInput,
    DiffIgnorePatternsInput, EditionInput, ExcludedOperatorsInput, FallbackVersionInput,
    GitDiffTargetInput, IgnoredFunctionsInput, LogLevelInput, ManifestPathInput, MutateInput,
    MutationLevelInput, OutputPathInput, ProjectNameInput, ProjectVersionInput, ReportersInput,
    TestPackagesInput, TestRunnerInput, ThresholdsInput,
};
use crate::options::raw::RawOptions;
use crate::options::snapshot::ResolvedOptions;
use crate::options::values::Reporter;

/// Default extra per-mutant timeout in milliseconds.
pub const DEFAULT_ADDITIONAL_TIMEOUT_MS: u64 = 5000;

/// Resolve every raw option into one immutable snapshot.
///
/// Inputs are resolved in a fixed total order in which every cross-field
/// dependency points at an already-resolved value; each newly resolved value
/// is threaded into the rules that read it. The first failure aborts the
/// pass, so a caller never observes a half-built snapshot. A rejected pass
/// carries no retry state: fix the raw inputs and resolve again.
pub fn resolve(
    raw: RawOptions,
    fs: &dyn FileExistence,
) -> Result<ResolvedOptions, OptionsError> {
    tracing::debug!("resolving run options");

    let dev_mode = raw.dev_mode.unwrap_or(false);

    let base_path = BasePathInput::resolve(raw.base_path.as_deref(), fs)?;
    let manifest_path = ManifestPathInput::resolve(raw.manifest_path.as_deref(), fs)?;
    let output_path = OutputPathInput::resolve(&base_path);

    let log_level = LogLevelInput::resolve(raw.log_level.as_deref())?;
    let log_to_file = raw.log_to_file.unwrap_or(false);

    let mutation_level = MutationLevelInput::resolve(raw.mutation_level.as_deref())?;
    let thresholds =
        ThresholdsInput::resolve(raw.threshold_high, raw.threshold_low, raw.threshold_break)?;

    let additional_timeout_ms = raw
        .additional_timeout_ms
        .unwrap_or(DEFAULT_ADDITIONAL_TIMEOUT_MS);
    let edition = EditionInput::resolve(raw.edition.as_deref())?;
    let test_runner = TestRunnerInput::resolve(raw.test_runner.as_deref())?;
    let concurrency = ConcurrencyInput::resolve(raw.concurrency)?;

    let project_filter = raw
        .project_filter
        .map(|filter| filter.trim().to_string())
        .unwrap_or_default();
    let test_packages = TestPackagesInput::resolve(raw.test_packages)?;

    let compare_to_baseline = raw.compare_to_baseline.unwrap_or(false);
    let reporters = ReportersInput::resolve(raw.reporters, compare_to_baseline)?;
    let dashboard_reporter = reporters.contains(&Reporter::Dashboard);

    let baseline_provider =
        BaselineProviderInput::resolve(raw.baseline_provider.as_deref(), dashboard_reporter)?;
    let azure_storage_url = AzureStorageUrlInput::resolve(raw.azure_storage_url, baseline_provider)?;
    let azure_sas_token = AzureSasTokenInput::resolve(raw.azure_sas_token, baseline_provider)?;

    let dashboard_enabled = compare_to_baseline || dashboard_reporter;
    let dashboard_url = DashboardUrlInput::resolve(raw.dashboard_url.as_deref())?;
    let dashboard_api_key = DashboardApiKeyInput::resolve(raw.dashboard_api_key, dashboard_enabled)?;
    let project_name = ProjectNameInput::resolve(raw.project_name, dashboard_enabled)?;

    let diff_enabled = raw.diff.unwrap_or(false);
    let git_diff_target = GitDiffTargetInput::resolve(raw.git_diff_target.as_deref(), diff_enabled)?;
    let diff_ignore_patterns = DiffIgnorePatternsInput::resolve(raw.diff_ignore_patterns)?;

    // The fallback reads the resolved diff target, not the raw one, so a
    // defaulted target flows through to baseline versioning as well.
    let fallback_version = FallbackVersionInput::resolve(raw.fallback_version, &git_diff_target);
    let project_version = ProjectVersionInput::resolve(
        raw.project_version,
        &fallback_version,
        dashboard_enabled,
        compare_to_baseline,
    )?;
    let module_name = raw.module_name;

    let mutate = MutateInput::resolve(raw.mutate)?;
    let ignored_functions = IgnoredFunctionsInput::resolve(raw.ignored_functions)?;
    let excluded_operators = ExcludedOperatorsInput::resolve(raw.excluded_operators)?;

    let coverage_analysis = CoverageAnalysisInput::resolve(raw.coverage_analysis.as_deref())?;
    let abort_test_on_fail = raw.abort_test_on_fail.unwrap_or(true);
    let parallel_testing_disabled = raw.disable_parallel_testing.unwrap_or(false);

    tracing::debug!(
        ?mutation_level,
        ?baseline_provider,
        dashboard_enabled,
        diff_enabled,
        "run options resolved"
    );

    Ok(ResolvedOptions {
        dev_mode,
        base_path,
        manifest_path,
        output_path,
        log_level,
        log_to_file,
        mutation_level,
        thresholds,
        additional_timeout_ms,
        edition,
        test_runner,
        concurrency,
        project_filter,
        test_packages,
        compare_to_baseline,
        reporters,
        baseline_provider,
        azure_storage_url,
        azure_sas_token,
        dashboard_url,
        dashboard_api_key,
        project_name,
        module_name,
        project_version,
        fallback_version,
        diff_enabled,
        git_diff_target,
        diff_ignore_patterns,
        mutate,
        ignored_functions,
        excluded_operators,
        coverage_analysis,
        abort_test_on_fail,
        parallel_testing_disabled,
    })
}
