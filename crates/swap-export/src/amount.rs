//! Base-unit amount normalization.

use crate::error::{ExportError, Result};
use crate::options::ExportOptions;

/// Scale a base-unit amount string to a display string.
///
/// The value is divided by `10^base_unit_decimals`, rounded to
/// `significant_digits` significant figures, then formatted with exactly two
/// decimal places. Both rounding stages are kept on purpose: for magnitudes
/// below 0.01 the fixed two-decimal stage discards precision the significant
/// stage preserved, so such amounts print as `0.00`.
///
/// # Errors
///
/// Returns [`ExportError::Parse`] when `raw` is not a decimal number.
pub fn normalize_amount(raw: &str, options: &ExportOptions) -> Result<String> {
    let base: f64 = raw.parse().map_err(|_| ExportError::Parse {
        field: "amount",
        value: raw.to_string(),
    })?;
    let scaled = base / 10f64.powi(options.base_unit_decimals);
    let rounded = round_significant(scaled, options.significant_digits);
    Ok(format!("{rounded:.2}"))
}

/// Round to `digits` significant figures, half away from zero.
fn round_significant(value: f64, digits: i32) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    let shift = f64::from(digits) - value.abs().log10().floor() - 1.0;
    let factor = 10f64.powf(shift);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::{normalize_amount, round_significant};
    use crate::error::ExportError;
    use crate::options::ExportOptions;

    fn normalize(raw: &str) -> String {
        normalize_amount(raw, &ExportOptions::default()).unwrap()
    }

    #[test]
    fn scales_one_token() {
        assert_eq!(normalize("1000000000000000000"), "1.00");
    }

    #[test]
    fn rounds_to_six_significant_digits() {
        // 1234.567 rounds to 1234.57 at six significant figures.
        assert_eq!(normalize("1234567000000000000000"), "1234.57");
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(normalize("0"), "0.00");
    }

    #[test]
    fn two_tokens() {
        assert_eq!(normalize("2000000000000000000"), "2.00");
        assert_eq!(normalize("4000000000000000000"), "4.00");
    }

    #[test]
    fn sub_cent_amounts_format_to_zero() {
        // 0.0000012345 survives significant rounding intact, then the fixed
        // two-decimal format collapses it.
        assert_eq!(normalize("1234500000000"), "0.00");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(normalize("-2000000000000000000"), "-2.00");
    }

    #[test]
    fn honors_custom_decimals() {
        let options = ExportOptions::default().with_base_unit_decimals(6);
        assert_eq!(normalize_amount("1500000", &options).unwrap(), "1.50");
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let err = normalize_amount("not-a-number", &ExportOptions::default()).unwrap_err();
        match err {
            ExportError::Parse { field, value } => {
                assert_eq!(field, "amount");
                assert_eq!(value, "not-a-number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_empty_amount() {
        assert!(normalize_amount("", &ExportOptions::default()).is_err());
    }

    #[test]
    fn significant_rounding_is_half_away_from_zero() {
        // 2.5 is exactly representable, so the tie is real.
        assert_eq!(round_significant(2.5, 1), 3.0);
        assert_eq!(round_significant(-2.5, 1), -3.0);
        assert_eq!(round_significant(0.0, 6), 0.0);
    }

    #[test]
    fn significant_rounding_trims_extra_digits() {
        assert_eq!(round_significant(1234.567, 6), 1234.57);
    }

    #[test]
    fn significant_rounding_keeps_small_magnitudes() {
        let rounded = round_significant(0.000_001_234_5, 6);
        assert!((rounded - 0.000_001_234_5).abs() < 1e-15);
    }
}
