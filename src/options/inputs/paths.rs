//! Path-valued inputs, validated through the filesystem oracle.

use std::path::{Path, PathBuf};

use crate::fs::FileExistence;
use crate::options::error::OptionsError;

/// Directory the run operates from.
pub struct BasePathInput;

impl BasePathInput {
    /// Canonical field name.
    pub const NAME: &'static str = "base-path";
    /// Help text shown for the field.
    pub const HELP: &'static str =
        "Directory the run operates from. Must exist. Default: the current directory.";

    /// Validate the base path, defaulting to the current directory.
    pub fn resolve(raw: Option<&str>, fs: &dyn FileExistence) -> Result<PathBuf, OptionsError> {
        let path = match raw {
            Some(value) if value.trim().is_empty() => {
                return Err(OptionsError::invalid(Self::NAME, value, "path must not be empty"));
            }
            Some(value) => PathBuf::from(value),
            None => PathBuf::from("."),
        };
        if !fs.dir_exists(&path) {
            return Err(OptionsError::invalid(
                Self::NAME,
                path.display(),
                "directory does not exist",
            ));
        }
        Ok(path)
    }
}

/// Optional path to the workspace manifest of the project under test.
pub struct ManifestPathInput;

impl ManifestPathInput {
    /// Canonical field name.
    pub const NAME: &'static str = "manifest-path";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Path to the Cargo.toml of the workspace under test. \
        Optional; when given it must reference an existing file. Relative paths are \
        resolved by the shell, not by this tool.";

    /// Validate the manifest path if one was supplied.
    pub fn resolve(
        raw: Option<&str>,
        fs: &dyn FileExistence,
    ) -> Result<Option<PathBuf>, OptionsError> {
        match raw {
            None => Ok(None),
            Some(value) => {
                let path = PathBuf::from(value);
                if !fs.file_exists(&path) {
                    return Err(OptionsError::invalid(
                        Self::NAME,
                        value,
                        "manifest file does not exist",
                    ));
                }
                Ok(Some(path))
            }
        }
    }
}

/// Output directory, derived from the resolved base path.
pub struct OutputPathInput;

impl OutputPathInput {
    /// Canonical field name.
    pub const NAME: &'static str = "output-path";
    /// Directory name appended to the base path.
    pub const DIR_NAME: &'static str = "mutiny-output";

    /// Derive the output directory. Never created here; the run does that.
    pub fn resolve(base_path: &Path) -> PathBuf {
        base_path.join(Self::DIR_NAME)
    }
}
