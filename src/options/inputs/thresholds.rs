//! Mutation-score threshold inputs and their cross-field ordering rule.

use crate::options::error::OptionsError;
use crate::options::values::Thresholds;

/// The three score thresholds, validated together.
pub struct ThresholdsInput;

impl ThresholdsInput {
    /// Canonical field names, used in error messages.
    pub const NAME_HIGH: &'static str = "threshold-high";
    /// See [`Self::NAME_HIGH`].
    pub const NAME_LOW: &'static str = "threshold-low";
    /// See [`Self::NAME_HIGH`].
    pub const NAME_BREAK: &'static str = "threshold-break";
    /// Help text shown for the fields.
    pub const HELP: &'static str = "Mutation score thresholds, each 0-100. Scores at or above \
        'high' are good, scores below 'low' are in danger, and scores below 'break' fail the \
        run. Defaults: high 80, low 60, break 0.";
    /// Defaults applied to absent raw values.
    pub const DEFAULT: Thresholds = Thresholds { high: 80, low: 60, break_at: 0 };

    /// Validate ranges per field, then the ordering rule across the raw pair.
    ///
    /// The ordering check runs with both raw values in hand, so it does not
    /// depend on which threshold resolves first.
    pub fn resolve(
        high: Option<u8>,
        low: Option<u8>,
        break_at: Option<u8>,
    ) -> Result<Thresholds, OptionsError> {
        let high = in_range(Self::NAME_HIGH, high.unwrap_or(Self::DEFAULT.high))?;
        let low = in_range(Self::NAME_LOW, low.unwrap_or(Self::DEFAULT.low))?;
        let break_at = in_range(Self::NAME_BREAK, break_at.unwrap_or(Self::DEFAULT.break_at))?;

        if low > high {
            return Err(OptionsError::inconsistent(format!(
                "threshold-low ({low}) must not exceed threshold-high ({high})"
            )));
        }
        Ok(Thresholds { high, low, break_at })
    }
}

fn in_range(field: &'static str, value: u8) -> Result<u8, OptionsError> {
    if value > 100 {
        return Err(OptionsError::invalid(field, value, "must be between 0 and 100"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_thresholds_take_their_defaults() {
        assert_eq!(
            ThresholdsInput::resolve(None, None, None).unwrap(),
            Thresholds { high: 80, low: 60, break_at: 0 }
        );
    }

    #[test]
    fn each_threshold_must_stay_in_percentage_range() {
        let err = ThresholdsInput::resolve(Some(120), None, None).unwrap_err();
        assert_eq!(
            err,
            OptionsError::invalid("threshold-high", 120, "must be between 0 and 100")
        );
    }

    #[test]
    fn low_above_high_is_an_inconsistent_combination() {
        let err = ThresholdsInput::resolve(Some(50), Some(70), None).unwrap_err();
        assert!(matches!(err, OptionsError::InconsistentCombination { .. }));
        assert!(err.to_string().contains("threshold-low (70)"));
    }

    #[test]
    fn ordering_rule_sees_mixed_raw_and_defaulted_values() {
        // Explicit low above the defaulted high of 80.
        let err = ThresholdsInput::resolve(None, Some(90), None).unwrap_err();
        assert!(matches!(err, OptionsError::InconsistentCombination { .. }));

        let thresholds = ThresholdsInput::resolve(Some(90), None, Some(30)).unwrap();
        assert_eq!(thresholds, Thresholds { high: 90, low: 60, break_at: 30 });
    }
}
