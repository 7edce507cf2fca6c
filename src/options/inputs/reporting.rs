//! Reporter selection and dashboard-related inputs.
//!
//! "Dashboard mode" is the derived boolean `compare_to_baseline OR the
//! dashboard reporter is active`; several fields here are only required when
//! it is true.

use crate::options::error::OptionsError;
use crate::options::inputs::keyword::{is_blank, match_keyword};
use crate::options::values::Reporter;

const REPORTER_KEYWORDS: &[(&str, Reporter)] = &[
    ("clear-text", Reporter::ClearText),
    ("progress", Reporter::Progress),
    ("dots", Reporter::Dots),
    ("json", Reporter::Json),
    ("html", Reporter::Html),
    ("dashboard", Reporter::Dashboard),
];

/// Reporters activated for the run.
pub struct ReportersInput;

impl ReportersInput {
    /// Canonical field name.
    pub const NAME: &'static str = "reporters";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Reporters to activate. Any of: clear-text, progress, dots, \
        json, html, dashboard. Default: clear-text, progress. The dashboard reporter is forced \
        on when baseline comparison is enabled.";
    /// Reporters applied when no raw value is given.
    pub const DEFAULT: &'static [Reporter] = &[Reporter::ClearText, Reporter::Progress];

    /// Resolve the reporter keywords, deduplicating and honoring the
    /// baseline-comparison flag.
    pub fn resolve(
        raw: Option<Vec<String>>,
        compare_to_baseline: bool,
    ) -> Result<Vec<Reporter>, OptionsError> {
        let mut reporters = match raw {
            None => Self::DEFAULT.to_vec(),
            Some(tokens) => {
                let mut reporters = Vec::new();
                for token in tokens {
                    let reporter = match_keyword(Self::NAME, &token, REPORTER_KEYWORDS)?;
                    if !reporters.contains(&reporter) {
                        reporters.push(reporter);
                    }
                }
                reporters
            }
        };
        if compare_to_baseline && !reporters.contains(&Reporter::Dashboard) {
            reporters.push(Reporter::Dashboard);
        }
        Ok(reporters)
    }
}

/// Endpoint of the hosted dashboard.
pub struct DashboardUrlInput;

impl DashboardUrlInput {
    /// Canonical field name.
    pub const NAME: &'static str = "dashboard-url";
    /// Endpoint used when no raw value is given.
    pub const DEFAULT: &'static str = "https://dashboard.mutiny-rs.io";
    /// Help text shown for the field.
    pub const HELP: &'static str =
        "Alternative dashboard endpoint for self-hosted installations. \
        Default: https://dashboard.mutiny-rs.io";

    /// Resolve the dashboard endpoint.
    pub fn resolve(raw: Option<&str>) -> Result<String, OptionsError> {
        match raw {
            None => Ok(Self::DEFAULT.to_string()),
            Some(value) => {
                let trimmed = value.trim();
                if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
                    return Err(OptionsError::invalid(
                        Self::NAME,
                        value,
                        "must be an absolute http(s) URL",
                    ));
                }
                Ok(trimmed.to_string())
            }
        }
    }
}

/// API key authenticating dashboard uploads.
pub struct DashboardApiKeyInput;

impl DashboardApiKeyInput {
    /// Canonical field name.
    pub const NAME: &'static str = "dashboard-api-key";
    /// Help text shown for the field.
    pub const HELP: &'static str =
        "API key for the dashboard. Required when dashboard mode is enabled.";

    /// Require the key in dashboard mode; pass it through otherwise.
    pub fn resolve(
        raw: Option<String>,
        dashboard_enabled: bool,
    ) -> Result<Option<String>, OptionsError> {
        if dashboard_enabled && is_blank(raw.as_deref()) {
            return Err(OptionsError::missing(Self::NAME, "when dashboard mode is enabled"));
        }
        Ok(raw)
    }
}

/// Name the project reports under on the dashboard.
pub struct ProjectNameInput;

impl ProjectNameInput {
    /// Canonical field name.
    pub const NAME: &'static str = "project-name";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Project name used on the dashboard, usually the repository \
        slug. Required when dashboard mode is enabled.";

    /// Require the name in dashboard mode; pass it through otherwise.
    pub fn resolve(
        raw: Option<String>,
        dashboard_enabled: bool,
    ) -> Result<Option<String>, OptionsError> {
        if dashboard_enabled && is_blank(raw.as_deref()) {
            return Err(OptionsError::missing(Self::NAME, "when dashboard mode is enabled"));
        }
        Ok(raw)
    }
}

/// Version used as the baseline when no explicit project version is known.
pub struct FallbackVersionInput;

impl FallbackVersionInput {
    /// Canonical field name.
    pub const NAME: &'static str = "fallback-version";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Version whose baseline report is used when the report for \
        the current version is missing. Default: the resolved git diff target.";

    /// Default from the resolved diff target. Infallible.
    pub fn resolve(raw: Option<String>, git_diff_target: &str) -> String {
        match raw {
            Some(value) if !value.trim().is_empty() => value,
            _ => git_diff_target.to_string(),
        }
    }
}

/// Version the current run reports as.
pub struct ProjectVersionInput;

impl ProjectVersionInput {
    /// Canonical field name.
    pub const NAME: &'static str = "project-version";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Version the run reports under on the dashboard. Defaults to \
        the fallback version. When comparing against a baseline it must differ from the \
        fallback version.";

    /// Resolve the project version against dashboard mode and the fallback.
    pub fn resolve(
        raw: Option<String>,
        fallback_version: &str,
        dashboard_enabled: bool,
        compare_to_baseline: bool,
    ) -> Result<Option<String>, OptionsError> {
        if !dashboard_enabled {
            return Ok(raw);
        }
        let version = match raw {
            Some(value) if !value.trim().is_empty() => value,
            _ => fallback_version.to_string(),
        };
        if compare_to_baseline && version == fallback_version {
            return Err(OptionsError::inconsistent(format!(
                "project-version ('{version}') must differ from fallback-version when comparing \
                 against a baseline"
            )));
        }
        Ok(Some(version))
    }
}
