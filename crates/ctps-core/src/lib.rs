//! # ctps-core
//!
//! Low-level arithmetic for Cross-derivative Taylor Polynomial Series (CTPS),
//! truncated expansions in the factor ring
//!
//! ```text
//! R[t1, ..., tK] / <t1², ..., tK²>
//! ```
//!
//! A CTPS over K variables has one coefficient per subset of {t1, ..., tK},
//! stored densely in an array of length 2^K.
//!
//! This crate provides:
//! - The multi-index ↔ offset codec, including masked decoding for
//!   enumerating sub-multi-indices
//! - Structured convolution by enumeration and by divide-and-conquer
//! - A rayon-parallel form of the divide-and-conquer kernel
//!
//! ## Algorithm Selection
//!
//! [`convolve`] is the O(3^K) recursion. [`convolve_parallel`] forks the
//! recursion once blocks exceed [`ConvolveConfig::parallel_threshold`].
//! [`convolve_enumerate`] is the O(4^K) reference.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod coeff;
pub mod config;
pub mod error;
pub mod index;

#[cfg(test)]
mod proptests;

pub use algorithms::convolution::{check_operands, convolve_enumerate, convolve_recursive};
pub use algorithms::parallel::convolve_parallel;
pub use coeff::Coeff;
pub use config::ConvolveConfig;
pub use error::{CtpsError, Result};
pub use index::{
    coeff_len, coeff_len_for, decode_index, decode_index_masked, decode_index_unpadded,
    encode_index, max_vars_for, num_vars, MAX_VARS,
};

/// Accumulates `x * y` into `z` with the divide-and-conquer kernel.
///
/// # Errors
///
/// Fails if the operands are not all of one power-of-two length.
pub fn convolve<F: Coeff>(x: &[F], y: &[F], z: &mut [F]) -> Result<()> {
    convolve_recursive(x, y, z)
}
