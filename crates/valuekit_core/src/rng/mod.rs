//! # Random Sequence Generation
//!
//! This module fills fixed-size arrays with independent uniform draws from
//! an inclusive range.
//!
//! ## Design
//!
//! - **Explicit context**: generators are values passed to the code that
//!   draws from them; there is no hidden global state in the fill path
//! - **Reproducibility**: every generator records its seed, and equal seeds
//!   give equal sequences
//! - **Thread safety on request**: [`SharedRng`] serialises draws behind a
//!   mutex, and [`process_rng`] provides one lazily created instance per process
//!
//! ## Module Structure
//!
//! - [`prng`]: [`SequenceRng`] and the generic [`fill_array`]
//! - [`shared`]: [`SharedRng`] and [`process_rng`]
//!
//! ## Usage Example
//!
//! ```rust
//! use valuekit_core::rng::{get_array_of_ints, SequenceRng};
//!
//! let mut rng = SequenceRng::from_seed(12345);
//! let numbers = get_array_of_ints(&mut rng);
//! assert_eq!(numbers.len(), 5);
//! assert!(numbers.iter().all(|n| (0..=9).contains(n)));
//!
//! let mut buffer = [0.0_f64; 16];
//! rng.fill_slice(&mut buffer, 0.0, 1.0);
//! ```

pub mod prng;
pub mod shared;

pub use prng::{fill_array, get_array_of_ints, SequenceRng, DEMO_HIGH, DEMO_LEN, DEMO_LOW};
pub use shared::{process_rng, SharedRng};

#[cfg(test)]
mod tests;
