//! Structured convolution over square-free multi-indices.
//!
//! Both kernels compute `z += x * y` in R[t1,...,tK]/<t1²,...,tK²>:
//!
//! ```text
//! z[j] += Σ_{k ⊆ j} x[k] · y[j \ k]
//! ```
//!
//! [`convolve_enumerate`] walks the sum literally through the multi-index
//! codec in O(4^K). [`convolve_recursive`] halves on the top variable and
//! skips the upper×upper block, whose product would contain t_K², for
//! O(3^K) multiply-adds. For every target both visit the splittings k in the
//! same order, so they agree bit for bit.

use crate::coeff::Coeff;
use crate::error::{CtpsError, Result};
use crate::index::{decode_index, decode_index_masked, encode_index, num_vars};

/// Validates convolution operands and returns K.
///
/// # Errors
///
/// - [`CtpsError::InvalidLength`] if `x` is not of length 2^K.
/// - [`CtpsError::LengthMismatch`] if `y` or `z` differ in length from `x`.
pub fn check_operands<F>(x: &[F], y: &[F], z: &[F]) -> Result<usize> {
    let k = num_vars(x.len())?;
    for other in [y.len(), z.len()] {
        if other != x.len() {
            return Err(CtpsError::LengthMismatch {
                left: x.len(),
                right: other,
            });
        }
    }
    Ok(k)
}

/// Enumeration form: accumulates `x * y` into `z` one multi-index at a time.
///
/// Every target j is decoded, every k ⊆ j is generated by masked decode, and
/// the complement j \ k picks the `y` coefficient.
///
/// # Errors
///
/// See [`check_operands`].
pub fn convolve_enumerate<F: Coeff>(x: &[F], y: &[F], z: &mut [F]) -> Result<()> {
    let k = check_operands(x, y, z)?;

    for (offset, acc) in z.iter_mut().enumerate() {
        let j = decode_index(offset, k)?;
        let active = j.iter().filter(|&&present| present).count();

        for m in 0..(1usize << active) {
            let sub = decode_index_masked(m, &j)?;
            let rest: Vec<bool> = j.iter().zip(&sub).map(|(&a, &b)| a ^ b).collect();
            *acc += x[encode_index(&sub)?] * y[encode_index(&rest)?];
        }
    }

    Ok(())
}

/// Divide-and-conquer form: accumulates `x * y` into `z` in O(3^K).
///
/// # Errors
///
/// See [`check_operands`].
pub fn convolve_recursive<F: Coeff>(x: &[F], y: &[F], z: &mut [F]) -> Result<()> {
    check_operands(x, y, z)?;
    convolve_block(x, y, z);
    Ok(())
}

/// Unchecked recursion behind [`convolve_recursive`].
///
/// All three slices must share one power-of-two length.
pub(crate) fn convolve_block<F: Coeff>(x: &[F], y: &[F], z: &mut [F]) {
    let n = x.len();
    if n == 1 {
        z[0] += x[0] * y[0];
        return;
    }

    let half = n / 2;
    let (x_lo, x_hi) = x.split_at(half);
    let (y_lo, y_hi) = y.split_at(half);
    let (z_lo, z_hi) = z.split_at_mut(half);

    convolve_block(x_lo, y_lo, z_lo);
    // Top variable from y, then from x. x_hi * y_hi would carry its square.
    convolve_block(x_lo, y_hi, z_hi);
    convolve_block(x_hi, y_lo, z_hi);
}
