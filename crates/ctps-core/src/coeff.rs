//! Coefficient trait for the convolution kernels.

use std::fmt::{Debug, Display};
use std::ops::AddAssign;

use num_traits::Float;

/// A fixed-precision real coefficient.
///
/// Blanket-implemented for every float that can be shared across rayon
/// workers, so `f32` and `f64` both qualify.
pub trait Coeff: Float + AddAssign + Send + Sync + Debug + Display + 'static {}

impl<T> Coeff for T where T: Float + AddAssign + Send + Sync + Debug + Display + 'static {}
