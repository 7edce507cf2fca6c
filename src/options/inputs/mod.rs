//! Per-field validation and defaulting rules.
//!
//! Each input is a unit struct with a canonical `NAME` (used verbatim in
//! error messages), `HELP` text, and a `resolve` function taking the raw
//! value plus any already-resolved sibling values its rule reads. Raw values
//! arrive as `Option`s so absence and an explicit empty value stay
//! distinguishable; defaults apply only to absence, never to invalid
//! presence.

pub mod baseline;
pub mod diff;
pub mod execution;
pub(crate) mod keyword;
pub mod logging;
pub mod mutation;
pub mod paths;
pub mod reporting;
pub mod thresholds;

pub use baseline::{AzureSasTokenInput, AzureStorageUrlInput, BaselineProviderInput};
pub use diff::GitDiffTargetInput;
pub use execution::{
    ConcurrencyInput, CoverageAnalysisInput, EditionInput, TestPackagesInput, TestRunnerInput,
};
pub use logging::LogLevelInput;
pub use mutation::{
    DiffIgnorePatternsInput, ExcludedOperatorsInput, IgnoredFunctionsInput, MutateInput,
    MutationLevelInput,
};
pub use paths::{BasePathInput, ManifestPathInput, OutputPathInput};
pub use reporting::{
    DashboardApiKeyInput, DashboardUrlInput, FallbackVersionInput, ProjectNameInput,
    ProjectVersionInput, ReportersInput,
};
pub use thresholds::ThresholdsInput;
