//! Error types for structured error handling.
//!
//! The value utilities are total functions under correct usage; the only
//! reportable failure is a caller-supplied range that cannot be sampled.

use thiserror::Error;

use super::bounds::SampleBounds;

/// Errors from the checked random fill operations.
///
/// Bounds are captured in their `Debug` rendering so the error stays
/// independent of the element type.
///
/// # Variants
/// - `InvertedBounds`: lower bound greater than upper bound
/// - `Incomparable`: bounds have no ordering (e.g. a NaN float bound)
/// - `Unsamplable`: ordered bounds the uniform sampler cannot handle
///   (a non-finite float bound, or a float span whose width overflows)
///
/// # Examples
/// ```
/// use valuekit_core::types::RangeError;
///
/// let err = RangeError::InvertedBounds { lo: "9".to_string(), hi: "0".to_string() };
/// assert_eq!(format!("{}", err), "Inverted bounds: lo 9 is greater than hi 0");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// Lower bound exceeds the upper bound.
    #[error("Inverted bounds: lo {lo} is greater than hi {hi}")]
    InvertedBounds {
        /// Rendered lower bound
        lo: String,
        /// Rendered upper bound
        hi: String,
    },

    /// Bounds cannot be ordered.
    #[error("Incomparable bounds: lo {lo}, hi {hi}")]
    Incomparable {
        /// Rendered lower bound
        lo: String,
        /// Rendered upper bound
        hi: String,
    },

    /// Bounds are ordered but cannot be sampled uniformly.
    #[error("Unsamplable bounds: lo {lo}, hi {hi}")]
    Unsamplable {
        /// Rendered lower bound
        lo: String,
        /// Rendered upper bound
        hi: String,
    },
}

impl RangeError {
    /// Checks that `[lo, hi]` is a samplable inclusive range.
    ///
    /// Ordering is checked first, then [`SampleBounds::is_samplable`].
    ///
    /// # Errors
    ///
    /// - [`RangeError::Incomparable`] when the bounds have no ordering
    /// - [`RangeError::InvertedBounds`] when `lo > hi`
    /// - [`RangeError::Unsamplable`] when the ordered range cannot be sampled
    ///
    /// # Examples
    /// ```
    /// use valuekit_core::types::RangeError;
    ///
    /// assert!(RangeError::check(&0, &9).is_ok());
    /// assert!(RangeError::check(&3, &3).is_ok());
    /// assert!(RangeError::check(&9, &0).is_err());
    /// assert!(RangeError::check(&f64::NAN, &1.0).is_err());
    /// assert!(RangeError::check(&0.0, &f64::INFINITY).is_err());
    /// ```
    pub fn check<T>(lo: &T, hi: &T) -> Result<(), RangeError>
    where
        T: PartialOrd + SampleBounds + std::fmt::Debug,
    {
        match lo.partial_cmp(hi) {
            Some(std::cmp::Ordering::Greater) => Err(RangeError::InvertedBounds {
                lo: format!("{:?}", lo),
                hi: format!("{:?}", hi),
            }),
            Some(_) if !T::is_samplable(lo, hi) => Err(RangeError::Unsamplable {
                lo: format!("{:?}", lo),
                hi: format!("{:?}", hi),
            }),
            Some(_) => Ok(()),
            None => Err(RangeError::Incomparable {
                lo: format!("{:?}", lo),
                hi: format!("{:?}", hi),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_bounds_display() {
        let err = RangeError::InvertedBounds {
            lo: "5".to_string(),
            hi: "1".to_string(),
        };
        assert_eq!(format!("{}", err), "Inverted bounds: lo 5 is greater than hi 1");
    }

    #[test]
    fn test_incomparable_display() {
        let err = RangeError::check(&f64::NAN, &2.0).unwrap_err();
        assert_eq!(format!("{}", err), "Incomparable bounds: lo NaN, hi 2.0");
    }

    #[test]
    fn test_check_accepts_degenerate_range() {
        assert!(RangeError::check(&7_u8, &7_u8).is_ok());
    }

    #[test]
    fn test_check_rejects_inverted_range() {
        let err = RangeError::check(&10_i64, &-10_i64).unwrap_err();
        assert_eq!(
            err,
            RangeError::InvertedBounds {
                lo: "10".to_string(),
                hi: "-10".to_string(),
            }
        );
    }

    #[test]
    fn test_check_rejects_non_finite_bound() {
        let err = RangeError::check(&0.0_f64, &f64::INFINITY).unwrap_err();
        assert_eq!(
            err,
            RangeError::Unsamplable {
                lo: "0.0".to_string(),
                hi: "inf".to_string(),
            }
        );
        assert_eq!(format!("{}", err), "Unsamplable bounds: lo 0.0, hi inf");
    }

    #[test]
    fn test_check_rejects_overflowing_float_span() {
        assert!(matches!(
            RangeError::check(&-f64::MAX, &f64::MAX),
            Err(RangeError::Unsamplable { .. })
        ));
        assert!(matches!(
            RangeError::check(&-f32::MAX, &f32::MAX),
            Err(RangeError::Unsamplable { .. })
        ));
    }

    #[test]
    fn test_check_prefers_inverted_over_unsamplable() {
        assert!(matches!(
            RangeError::check(&f64::INFINITY, &0.0),
            Err(RangeError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = RangeError::check(&1, &0).unwrap_err();
        let _: &dyn std::error::Error = &err;
    }
}
