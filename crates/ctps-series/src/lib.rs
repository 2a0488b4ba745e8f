//! Cross-derivative Taylor polynomial series for Ctps.
//!
//! This crate provides:
//! - [`Ctps`]: a value in R[t1,...,tK]/<t1²,...,tK²> backed by 2^K
//!   coefficients
//! - Ring arithmetic (`+`, `-`, `*`, powers, scaling)
//! - Evaluation at a point and seeding for mixed partial derivatives
//!
//! # Key algorithms
//!
//! - Multiplication: divide-and-conquer convolution, O(3^K), parallel above a
//!   configurable block size

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ctps;
pub mod ops;

#[cfg(test)]
mod proptests;

pub use crate::ctps::Ctps;
