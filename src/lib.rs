//! # mutiny-options
//!
//! Configuration resolution core for the Mutiny mutation-testing
//! orchestrator. Raw, loosely-typed option values go in; one immutable,
//! internally consistent [`ResolvedOptions`] snapshot comes out, or a
//! structured [`OptionsError`] naming exactly which field was wrong and why.
//!
//! Cross-field rules (a field's default or validity depending on another
//! field's resolved value) are encoded as a fixed resolution order inside
//! [`options::resolve`]. Filesystem existence checks go through the
//! [`fs::FileExistence`] capability so tests can substitute
//! [`fs::FakeFileSystem`].
//!
//! ```
//! use mutiny_options::fs::OsFileSystem;
//! use mutiny_options::{RawOptions, resolve};
//!
//! let raw = RawOptions {
//!     mutation_level: Some("aggressive".into()),
//!     ..RawOptions::default()
//! };
//! let options = resolve(raw, &OsFileSystem)?;
//! assert_eq!(options.git_diff_target, "master");
//! # Ok::<(), mutiny_options::OptionsError>(())
//! ```

#![warn(missing_docs)]

pub mod fs;
pub mod options;

pub use fs::{FakeFileSystem, FileExistence, OsFileSystem};
pub use options::{
    BaselineProvider, CoverageAnalysis, Edition, FilePattern, LogLevel, MutationLevel,
    MutationOperator, OptionsError, RawOptions, Reporter, ResolvedOptions, TestRunner, Thresholds,
    resolve,
};
