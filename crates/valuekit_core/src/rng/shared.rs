//! Thread-safe generator handle and the process-wide instance.
//!
//! [`SharedRng`] serialises every operation through a mutex, so draws from
//! several threads never interleave inside a single fill. [`process_rng`]
//! hands out one entropy-seeded handle per process, created on first use.

use rand::distributions::uniform::SampleUniform;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use super::prng::SequenceRng;
use crate::types::{FixedSequence, RangeError, SampleBounds};

/// Cloneable, thread-safe handle to a [`SequenceRng`].
///
/// Clones share the same generator state.
///
/// # Examples
///
/// ```rust
/// use valuekit_core::rng::SharedRng;
///
/// let rng = SharedRng::from_seed(99);
/// let other = rng.clone();
/// let a: [i32; 3] = rng.fill_array(0, 9);
/// let b: [i32; 3] = other.fill_array(0, 9);
/// assert!(a.iter().chain(b.iter()).all(|v| (0..=9).contains(v)));
/// assert_eq!(rng.seed(), 99);
/// ```
#[derive(Debug, Clone)]
pub struct SharedRng {
    inner: Arc<Mutex<SequenceRng>>,
}

impl SharedRng {
    /// Wraps an existing generator.
    pub fn new(rng: SequenceRng) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    /// Creates a shared generator from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SequenceRng::from_seed(seed))
    }

    /// Creates a shared generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(SequenceRng::from_entropy())
    }

    /// Runs `f` with exclusive access to the generator.
    ///
    /// A lock poisoned by a panicking caller is recovered: the generator
    /// state is only ever replaced whole by a draw.
    pub fn with<R>(&self, f: impl FnOnce(&mut SequenceRng) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Returns the seed of the underlying generator.
    pub fn seed(&self) -> u64 {
        self.with(|rng| rng.seed())
    }

    /// Draws a single value from `[lo, hi]`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or the bounds cannot be ordered.
    pub fn gen_inclusive<T>(&self, lo: T, hi: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.with(|rng| rng.gen_inclusive(lo, hi))
    }

    /// Fills an `N`-element array under a single lock acquisition.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or the bounds cannot be ordered.
    pub fn fill_array<T, const N: usize>(&self, lo: T, hi: T) -> FixedSequence<T, N>
    where
        T: SampleUniform + Copy,
    {
        self.with(|rng| rng.fill_array(lo, hi))
    }

    /// Checked variant of [`SharedRng::fill_array`].
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] when `[lo, hi]` is empty, unordered, or not
    /// samplable. The lock is not taken in that case.
    pub fn try_fill_array<T, const N: usize>(
        &self,
        lo: T,
        hi: T,
    ) -> Result<FixedSequence<T, N>, RangeError>
    where
        T: SampleUniform + SampleBounds + PartialOrd + Copy + Debug,
    {
        RangeError::check(&lo, &hi)?;
        Ok(self.fill_array(lo, hi))
    }
}

impl From<SequenceRng> for SharedRng {
    fn from(rng: SequenceRng) -> Self {
        Self::new(rng)
    }
}

/// Returns the process-wide generator, seeding it from entropy on first use.
///
/// Initialisation runs exactly once even under concurrent first calls.
///
/// # Examples
///
/// ```rust
/// use valuekit_core::rng::process_rng;
///
/// let first = process_rng().seed();
/// let second = process_rng().seed();
/// assert_eq!(first, second);
/// ```
pub fn process_rng() -> &'static SharedRng {
    static PROCESS_RNG: OnceLock<SharedRng> = OnceLock::new();
    PROCESS_RNG.get_or_init(SharedRng::from_entropy)
}
