//! Shared helpers for keyword-table and collection validation.

use crate::options::error::OptionsError;

/// Resolve a raw token against a fixed keyword table, case-insensitively.
///
/// Defaults never apply here: an unmatched token is always an error naming
/// the raw value and the full allowed set.
pub(crate) fn match_keyword<T: Copy>(
    field: &'static str,
    raw: &str,
    table: &[(&'static str, T)],
) -> Result<T, OptionsError> {
    let token = raw.trim();
    for (keyword, value) in table {
        if keyword.eq_ignore_ascii_case(token) {
            return Ok(*value);
        }
    }
    Err(OptionsError::invalid(
        field,
        raw,
        format!("expected one of: {}", allowed_keywords(table)),
    ))
}

/// Comma-separated list of the keywords a table accepts.
pub(crate) fn allowed_keywords<T>(table: &[(&'static str, T)]) -> String {
    table
        .iter()
        .map(|(keyword, _)| *keyword)
        .collect::<Vec<_>>()
        .join(", ")
}

/// True for an absent value or one that trims to nothing.
pub(crate) fn is_blank(raw: Option<&str>) -> bool {
    raw.map(str::trim).is_none_or(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(&str, u8)] = &[("alpha", 1), ("beta", 2)];

    #[test]
    fn matching_ignores_case_and_surrounding_whitespace() {
        assert_eq!(match_keyword("f", "ALPHA", TABLE).unwrap(), 1);
        assert_eq!(match_keyword("f", "  Beta ", TABLE).unwrap(), 2);
    }

    #[test]
    fn unmatched_token_reports_raw_value_and_allowed_set() {
        let err = match_keyword("f", "gamma", TABLE).unwrap_err();
        assert_eq!(
            err,
            OptionsError::invalid("f", "gamma", "expected one of: alpha, beta")
        );
    }

    #[test]
    fn blank_detection_covers_absent_and_whitespace() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("   ")));
        assert!(!is_blank(Some("x")));
    }
}
