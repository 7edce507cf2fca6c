//! Resolution of raw option values into one immutable run configuration.

pub mod error;
pub mod inputs;
pub mod raw;
pub mod resolve;
pub mod snapshot;
pub mod values;

pub use error::OptionsError;
pub use raw::RawOptions;
pub use resolve::{DEFAULT_ADDITIONAL_TIMEOUT_MS, resolve};
pub use snapshot::ResolvedOptions;
pub use values::{
    BaselineProvider, CoverageAnalysis, Edition, FilePattern, LogLevel, MutationLevel,
    MutationOperator, Reporter, TestRunner, Thresholds,
};
