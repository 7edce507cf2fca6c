//! Diff-feature inputs.

use crate::options::error::OptionsError;
use crate::options::inputs::keyword::is_blank;

/// Commitish the current codebase is compared against when the diff feature
/// is enabled.
pub struct GitDiffTargetInput;

impl GitDiffTargetInput {
    /// Canonical field name.
    pub const NAME: &'static str = "git-diff-target";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Source branch or commit to diff against when the diff \
        feature is enabled. Default: master.";
    /// Target applied when no raw value is given and diff is disabled.
    pub const DEFAULT: &'static str = "master";

    /// Resolve the diff target. The default applies only to absence; with the
    /// diff feature enabled an absent or empty target is a hard error.
    pub fn resolve(raw: Option<&str>, diff_enabled: bool) -> Result<String, OptionsError> {
        if diff_enabled && is_blank(raw) {
            return Err(OptionsError::missing(
                Self::NAME,
                "when the diff feature is enabled",
            ));
        }
        Ok(raw.unwrap_or(Self::DEFAULT).to_string())
    }
}
