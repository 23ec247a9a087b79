//! Attribute text for floating-point values.
//!
//! SVG output writes numbers in the general (`%g`) notation with six
//! significant digits: integral values have no fractional part, trailing
//! zeros are removed, and very small or very large magnitudes switch to
//! scientific notation with an explicitly signed, two-digit exponent.
//!
//! | Value | Text |
//! |-------|------|
//! | `10.0` | `10` |
//! | `0.1 + 0.2` | `0.3` |
//! | `1234567.0` | `1.23457e+06` |
//! | `0.00001` | `1e-05` |

use std::fmt;

/// Number of significant digits kept when writing a value.
const SIGNIFICANT_DIGITS: i32 = 6;

/// Smallest decimal exponent still written in fixed notation.
const MIN_FIXED_EXPONENT: i32 = -4;

/// A floating-point value that displays in SVG attribute notation.
///
/// # Examples
///
/// ```
/// use svgscene_core::number::Number;
///
/// assert_eq!(Number(5.0).to_string(), "5");
/// assert_eq!(Number(2.5).to_string(), "2.5");
/// assert_eq!(Number(1e7).to_string(), "1e+07");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // The exponent is taken after rounding, so 999999.7 becomes 1e+06.
        let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return f.write_str(&scientific);
        };
        let Ok(exponent) = exponent.parse::<i32>() else {
            return f.write_str(&scientific);
        };

        if (MIN_FIXED_EXPONENT..SIGNIFICANT_DIGITS).contains(&exponent) {
            let precision = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
            let fixed = format!("{value:.precision$}");
            f.write_str(trim_fraction(&fixed))
        } else {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{sign}{:02}",
                trim_fraction(mantissa),
                exponent.unsigned_abs()
            )
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// Removes trailing zeros of a fractional part, and the decimal point if
/// nothing is left after it.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
