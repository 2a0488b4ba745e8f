//! Convolution kernels.
//!
//! - Enumeration over multi-indices, O(4^K), the reference semantics
//! - Divide-and-conquer on the top variable, O(3^K)
//! - The same recursion forked across rayon workers

pub mod convolution;
pub mod parallel;
