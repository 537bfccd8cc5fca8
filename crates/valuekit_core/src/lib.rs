//! # valuekit_core: Generic Value Utilities
//!
//! ## Role
//!
//! valuekit_core is the bottom layer of the workspace, providing three
//! independent leaves:
//! - Seedable random sequence generation into fixed-size arrays (`rng`)
//! - Generic pairwise and variadic summation (`accumulate`, [`calc_sum!`])
//! - Brace-delimited and reverse-order sequence display (`format`)
//! - Error and sequence types shared by the above (`types`)
//!
//! None of the leaves depends on another.
//!
//! ## Usage Examples
//!
//! ```rust
//! use valuekit_core::accumulate::Adder;
//! use valuekit_core::calc_sum;
//! use valuekit_core::format::format_braced;
//! use valuekit_core::rng::SequenceRng;
//!
//! // Random fill into a fixed-size array
//! let mut rng = SequenceRng::from_seed(42);
//! let numbers: [i32; 5] = rng.fill_array(0, 9);
//! assert!(numbers.iter().all(|n| (0..=9).contains(n)));
//!
//! // Summation
//! assert_eq!(*Adder::new(2, 4).result(), 6);
//! assert_eq!(calc_sum!(1, 2, 3, 4), 10);
//!
//! // Formatting
//! assert_eq!(format_braced(["a", "b"]), "{a, b}");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod accumulate;
pub mod format;
pub mod rng;
pub mod types;
