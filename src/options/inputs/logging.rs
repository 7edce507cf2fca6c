//! Logging-related inputs.

use crate::options::error::OptionsError;
use crate::options::inputs::keyword::match_keyword;
use crate::options::values::LogLevel;

const LOG_LEVEL_KEYWORDS: &[(&str, LogLevel)] = &[
    ("error", LogLevel::Error),
    ("warn", LogLevel::Warn),
    ("info", LogLevel::Info),
    ("debug", LogLevel::Debug),
    ("trace", LogLevel::Trace),
];

/// Verbosity of run logging.
pub struct LogLevelInput;

impl LogLevelInput {
    /// Canonical field name.
    pub const NAME: &'static str = "log-level";
    /// Help text shown for the field.
    pub const HELP: &'static str =
        "Verbosity of run logging. One of: error, warn, info, debug, trace. Default: info.";
    /// Level applied when no raw value is given.
    pub const DEFAULT: LogLevel = LogLevel::Info;

    /// Resolve the log level keyword.
    pub fn resolve(raw: Option<&str>) -> Result<LogLevel, OptionsError> {
        match raw {
            None => Ok(Self::DEFAULT),
            Some(value) => match_keyword(Self::NAME, value, LOG_LEVEL_KEYWORDS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_level_defaults_to_info() {
        assert_eq!(LogLevelInput::resolve(None).unwrap(), LogLevel::Info);
    }

    #[test]
    fn keywords_match_case_insensitively() {
        assert_eq!(LogLevelInput::resolve(Some("TRACE")).unwrap(), LogLevel::Trace);
        assert_eq!(LogLevelInput::resolve(Some("Warn")).unwrap(), LogLevel::Warn);
    }

    #[test]
    fn unknown_level_is_rejected_not_defaulted() {
        let err = LogLevelInput::resolve(Some("loud")).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidValue { field: "log-level", .. }));
    }
}
