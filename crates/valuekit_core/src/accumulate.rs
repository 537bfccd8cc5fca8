//! Generic summation over any type with an addition operator.
//!
//! This module provides:
//! - [`Adder`]: pairwise sum captured at construction
//! - [`calc_sum!`](crate::calc_sum): variadic left fold over one or more values
//! - [`add`]: mixed-type pairwise addition
//! - [`fold_sum`] / [`sum_all`]: left folds over runtime sequences
//!
//! Addition compatibility is checked by the compiler through `Add` bounds;
//! none of these operations can fail at runtime.

use num_traits::Zero;
use std::ops::Add;

/// Sum of two values, fixed at construction.
///
/// The right operand may be any type the left one can add, so both
/// `Adder::new(2, 4)` and `Adder::new(String::from("Barry"), " Allen")` work.
/// `Adder::default()` holds the additive identity (`0`, `""`, ...).
///
/// # Examples
/// ```
/// use valuekit_core::accumulate::Adder;
///
/// let ints = Adder::new(2, 4);
/// assert_eq!(*ints.result(), 6);
///
/// let name = Adder::new(String::from("Barry"), " Allen");
/// assert_eq!(name.result(), "Barry Allen");
///
/// let empty: Adder<f64> = Adder::default();
/// assert_eq!(*empty.result(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Adder<T> {
    result: T,
}

impl<T> Adder<T> {
    /// Stores `a + b`.
    #[inline]
    pub fn new<U>(a: T, b: U) -> Self
    where
        T: Add<U, Output = T>,
    {
        Self { result: a + b }
    }

    /// Returns the stored sum.
    #[inline]
    pub fn result(&self) -> &T {
        &self.result
    }

    /// Consumes the adder, returning the stored sum.
    #[inline]
    pub fn into_result(self) -> T {
        self.result
    }
}

/// Adds two values of possibly different types.
///
/// The result type is whatever `X + Y` produces.
///
/// # Examples
/// ```
/// use std::time::{Duration, Instant};
/// use valuekit_core::accumulate::add;
///
/// assert_eq!(add(1.5, 2.0), 3.5);
/// let now = Instant::now();
/// let later: Instant = add(now, Duration::from_secs(1));
/// assert!(later > now);
/// ```
#[inline]
pub fn add<X, Y>(x: X, y: Y) -> X::Output
where
    X: Add<Y>,
{
    x + y
}

/// Folds `first` with every item of `rest`, left to right.
///
/// This is the runtime counterpart of [`calc_sum!`](crate::calc_sum): at
/// least one value is always present, so no identity element is needed.
///
/// # Examples
/// ```
/// use valuekit_core::accumulate::fold_sum;
///
/// assert_eq!(fold_sum(String::from("a"), ["b", "c"]), "abc");
/// assert_eq!(fold_sum(7, Vec::<i32>::new()), 7);
/// ```
pub fn fold_sum<T, I>(first: T, rest: I) -> T
where
    I: IntoIterator,
    T: Add<I::Item, Output = T>,
{
    rest.into_iter().fold(first, |acc, value| acc + value)
}

/// Sums a sequence starting from the additive identity.
///
/// An empty sequence yields zero.
///
/// # Examples
/// ```
/// use valuekit_core::accumulate::sum_all;
///
/// assert_eq!(sum_all([1, 2, 3, 4]), 10);
/// assert_eq!(sum_all(Vec::<u64>::new()), 0);
/// ```
pub fn sum_all<T, I>(values: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Zero,
{
    values.into_iter().fold(T::zero(), |acc, value| acc + value)
}

/// Sums one or more expressions with a left fold: `((a + b) + c) + ...`.
///
/// Operands may have different types as long as each step of the chain
/// implements `Add`; the result has the type the chain produces.
///
/// # Examples
/// ```
/// use valuekit_core::calc_sum;
///
/// assert_eq!(calc_sum!(1, 2, 3), 6);
/// assert_eq!(calc_sum!(42), 42);
/// assert_eq!(calc_sum!(String::from("Bob"), " ", "Danger"), "Bob Danger");
/// ```
#[macro_export]
macro_rules! calc_sum {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let acc = $first;
        $(let acc = acc + $rest;)*
        acc
    }};
}
