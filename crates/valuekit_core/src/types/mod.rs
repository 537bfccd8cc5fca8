//! Shared sequence and error types.
//!
//! This module provides:
//! - [`FixedSequence`]: the fixed-length container filled by the `rng` module
//! - `bounds`: [`SampleBounds`], per-type samplability of ordered bounds
//! - `error`: Structured error types for the checked fill operations
//!
//! # Re-exports
//!
//! - [`SampleBounds`] from `bounds`
//! - [`RangeError`] from `error`

pub mod bounds;
pub mod error;

pub use bounds::SampleBounds;
pub use error::RangeError;

/// A fixed-length ordered sequence of `N` elements of type `T`.
///
/// Plain arrays already give the required properties: stack allocation,
/// value semantics, and a length fixed at compile time.
///
/// # Examples
/// ```
/// use valuekit_core::types::FixedSequence;
///
/// let a: FixedSequence<i32, 3> = [1, 2, 3];
/// let mut b = a;
/// b[0] = 10;
/// assert_eq!(a[0], 1);
/// assert_eq!(b.len(), 3);
/// ```
pub type FixedSequence<T, const N: usize> = [T; N];
