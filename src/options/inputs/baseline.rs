//! Baseline storage provider selection and its azure-file-storage settings.

use crate::options::error::OptionsError;
use crate::options::inputs::keyword::{is_blank, match_keyword};
use crate::options::values::BaselineProvider;

const PROVIDER_KEYWORDS: &[(&str, BaselineProvider)] = &[
    ("disk", BaselineProvider::Disk),
    ("dashboard", BaselineProvider::Dashboard),
    ("azure-file-storage", BaselineProvider::AzureFileStorage),
];

/// Where baseline comparison data is stored.
pub struct BaselineProviderInput;

impl BaselineProviderInput {
    /// Canonical field name.
    pub const NAME: &'static str = "baseline-provider";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Storage location for baseline comparison data. One of: \
        disk, dashboard, azure-file-storage. Default: disk, or dashboard when the dashboard \
        reporter is enabled.";

    /// Resolve the provider keyword. The default depends on whether the
    /// dashboard reporter ended up in the resolved reporters list.
    pub fn resolve(
        raw: Option<&str>,
        dashboard_reporter_enabled: bool,
    ) -> Result<BaselineProvider, OptionsError> {
        match raw {
            None if dashboard_reporter_enabled => Ok(BaselineProvider::Dashboard),
            None => Ok(BaselineProvider::Disk),
            Some(value) => match_keyword(Self::NAME, value, PROVIDER_KEYWORDS),
        }
    }
}

/// URL of the azure file share holding baselines.
pub struct AzureStorageUrlInput;

impl AzureStorageUrlInput {
    /// Canonical field name.
    pub const NAME: &'static str = "azure-storage-url";
    /// Help text shown for the field.
    pub const HELP: &'static str = "URL of the azure file share storing baselines. Required \
        when the azure-file-storage baseline provider is selected; ignored otherwise.";

    /// Require and validate the URL only for the azure provider.
    pub fn resolve(
        raw: Option<String>,
        provider: BaselineProvider,
    ) -> Result<Option<String>, OptionsError> {
        if provider != BaselineProvider::AzureFileStorage {
            return Ok(None);
        }
        let Some(value) = raw else {
            return Err(OptionsError::missing(
                Self::NAME,
                "when the azure-file-storage baseline provider is selected",
            ));
        };
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(OptionsError::missing(
                Self::NAME,
                "when the azure-file-storage baseline provider is selected",
            ));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(OptionsError::invalid(
                Self::NAME,
                value.as_str(),
                "must be an absolute http(s) URL",
            ));
        }
        Ok(Some(trimmed.to_string()))
    }
}

/// Shared access signature authenticating against the azure file share.
pub struct AzureSasTokenInput;

impl AzureSasTokenInput {
    /// Canonical field name.
    pub const NAME: &'static str = "azure-sas-token";
    /// Help text shown for the field.
    pub const HELP: &'static str = "Shared access signature for the azure file share. Required \
        when the azure-file-storage baseline provider is selected; ignored otherwise.";

    /// Require the token only for the azure provider.
    pub fn resolve(
        raw: Option<String>,
        provider: BaselineProvider,
    ) -> Result<Option<String>, OptionsError> {
        if provider != BaselineProvider::AzureFileStorage {
            return Ok(None);
        }
        if is_blank(raw.as_deref()) {
            return Err(OptionsError::missing(
                Self::NAME,
                "when the azure-file-storage baseline provider is selected",
            ));
        }
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_defaults_follow_the_dashboard_reporter() {
        assert_eq!(
            BaselineProviderInput::resolve(None, false).unwrap(),
            BaselineProvider::Disk
        );
        assert_eq!(
            BaselineProviderInput::resolve(None, true).unwrap(),
            BaselineProvider::Dashboard
        );
    }

    #[test]
    fn explicit_provider_wins_over_the_dashboard_default() {
        assert_eq!(
            BaselineProviderInput::resolve(Some("disk"), true).unwrap(),
            BaselineProvider::Disk
        );
        assert_eq!(
            BaselineProviderInput::resolve(Some("Azure-File-Storage"), false).unwrap(),
            BaselineProvider::AzureFileStorage
        );
    }

    #[test]
    fn unknown_provider_keyword_never_falls_back() {
        let err = BaselineProviderInput::resolve(Some("s3"), true).unwrap_err();
        assert_eq!(
            err,
            OptionsError::invalid(
                "baseline-provider",
                "s3",
                "expected one of: disk, dashboard, azure-file-storage"
            )
        );
    }

    #[test]
    fn azure_settings_are_required_only_for_the_azure_provider() {
        assert_eq!(
            AzureStorageUrlInput::resolve(Some("https://x".into()), BaselineProvider::Disk)
                .unwrap(),
            None
        );
        assert_eq!(
            AzureSasTokenInput::resolve(None, BaselineProvider::Dashboard).unwrap(),
            None
        );

        let err =
            AzureStorageUrlInput::resolve(None, BaselineProvider::AzureFileStorage).unwrap_err();
        assert!(matches!(err, OptionsError::MissingRequired { field: "azure-storage-url", .. }));
        let err =
            AzureSasTokenInput::resolve(Some("".into()), BaselineProvider::AzureFileStorage)
                .unwrap_err();
        assert!(matches!(err, OptionsError::MissingRequired { field: "azure-sas-token", .. }));
    }

    #[test]
    fn azure_url_must_be_absolute() {
        let err = AzureStorageUrlInput::resolve(
            Some("share.core.windows.net".into()),
            BaselineProvider::AzureFileStorage,
        )
        .unwrap_err();
        assert!(err.to_string().contains("'share.core.windows.net'"));

        assert_eq!(
            AzureStorageUrlInput::resolve(
                Some("https://share.core.windows.net/baselines".into()),
                BaselineProvider::AzureFileStorage,
            )
            .unwrap(),
            Some("https://share.core.windows.net/baselines".to_string())
        );
    }
}
