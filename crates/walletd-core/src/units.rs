//! Conversion between the major units callers work in and the integer minor
//! units the daemon puts on the wire.
//!
//! Nothing else in the crate multiplies or divides by 100.

use crate::error::WalletError;

/// Minor units per major unit (the daemon counts hundredths).
pub const MINOR_PER_MAJOR: i64 = 100;

/// Convert a wire amount to major units.
pub fn to_major(minor: i64) -> f64 {
    minor as f64 / MINOR_PER_MAJOR as f64
}

/// Convert a caller amount to minor units, truncating toward zero.
///
/// `0.29` therefore becomes `28`: the daemon never receives more than the
/// caller asked for.
pub fn to_minor(major: f64) -> Result<i64, WalletError> {
    if !major.is_finite() {
        return Err(WalletError::InvalidAmount(format!("{major} is not finite")));
    }
    let scaled = major * MINOR_PER_MAJOR as f64;
    // i64::MAX is not representable as f64; the cast rounds up to 2^63.
    if scaled >= i64::MAX as f64 || scaled < i64::MIN as f64 {
        return Err(WalletError::InvalidAmount(format!("{major} is out of range")));
    }
    Ok(scaled as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_minor_scales_by_hundred() {
        assert_eq!(to_minor(12.5).expect("finite"), 1250);
        assert_eq!(to_minor(0.1).expect("finite"), 10);
        assert_eq!(to_minor(0.0).expect("finite"), 0);
    }

    #[test]
    fn to_minor_truncates() {
        assert_eq!(to_minor(0.29).expect("finite"), 28);
        assert_eq!(to_minor(1.999).expect("finite"), 199);
        assert_eq!(to_minor(-1.999).expect("finite"), -199);
    }

    #[test]
    fn to_minor_rejects_non_finite_and_huge() {
        assert!(to_minor(f64::NAN).is_err());
        assert!(to_minor(f64::INFINITY).is_err());
        assert!(to_minor(1e300).is_err());
    }

    #[test]
    fn to_major_recovers_sent_value() {
        for major in [12.5, 0.1, 3.0, 0.25, 1234.5] {
            let minor = to_minor(major).expect("finite");
            assert!((to_major(minor) - major).abs() < 1e-9, "{major} -> {minor}");
        }
        assert_eq!(to_major(-250), -2.5);
    }
}
