//! Sampling validity of inclusive bounds.
//!
//! An ordered pair of bounds is not always samplable: float ranges need
//! finite endpoints and a width the uniform sampler can scale without
//! overflowing. [`SampleBounds`] captures that per element type so the
//! checked fills can reject such ranges instead of panicking inside `rand`.

/// Element types whose ordered bounds can be checked for samplability.
///
/// Integer ranges are always samplable once ordered. Float ranges must have
/// finite endpoints, and `(hi - lo) / (1 - EPSILON)` must stay finite, which
/// mirrors the scale computed by `rand`'s uniform float sampler.
///
/// # Examples
/// ```
/// use valuekit_core::types::SampleBounds;
///
/// assert!(i32::is_samplable(&i32::MIN, &i32::MAX));
/// assert!(f64::is_samplable(&-1.0, &1.0));
/// assert!(!f64::is_samplable(&0.0, &f64::INFINITY));
/// assert!(!f64::is_samplable(&-f64::MAX, &f64::MAX));
/// ```
pub trait SampleBounds {
    /// Whether the ordered range `[lo, hi]` can be sampled uniformly.
    fn is_samplable(lo: &Self, hi: &Self) -> bool;
}

macro_rules! impl_integer_bounds {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SampleBounds for $ty {
                #[inline]
                fn is_samplable(_lo: &Self, _hi: &Self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_integer_bounds!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_bounds {
    ($($ty:ident),* $(,)?) => {
        $(
            impl SampleBounds for $ty {
                #[inline]
                fn is_samplable(lo: &Self, hi: &Self) -> bool {
                    lo.is_finite()
                        && hi.is_finite()
                        && ((hi - lo) / (1.0 - $ty::EPSILON)).is_finite()
                }
            }
        )*
    };
}

impl_float_bounds!(f32, f64);
