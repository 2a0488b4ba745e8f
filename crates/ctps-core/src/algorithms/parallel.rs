//! Parallel divide-and-conquer convolution.
//!
//! The lower and upper halves of the output are disjoint, so they are filled
//! on separate rayon workers. The upper half still receives its two
//! contributions in sequence, which keeps the summation order, and therefore
//! the result, identical to [`convolve_recursive`](super::convolution::convolve_recursive).

use tracing::debug;

use super::convolution::{check_operands, convolve_block};
use crate::coeff::Coeff;
use crate::config::ConvolveConfig;
use crate::error::Result;

/// Accumulates `x * y` into `z`, forking above `config.parallel_threshold`.
///
/// # Errors
///
/// See [`check_operands`].
pub fn convolve_parallel<F: Coeff>(
    x: &[F],
    y: &[F],
    z: &mut [F],
    config: &ConvolveConfig,
) -> Result<()> {
    let num_vars = check_operands(x, y, z)?;
    let threshold = config.parallel_threshold.max(1);

    if x.len() <= threshold {
        debug!(num_vars, threshold, "convolving sequentially");
        convolve_block(x, y, z);
    } else {
        debug!(num_vars, threshold, "convolving in parallel");
        convolve_block_parallel(x, y, z, threshold);
    }

    Ok(())
}

fn convolve_block_parallel<F: Coeff>(x: &[F], y: &[F], z: &mut [F], threshold: usize) {
    if x.len() <= threshold {
        convolve_block(x, y, z);
        return;
    }

    let half = x.len() / 2;
    let (x_lo, x_hi) = x.split_at(half);
    let (y_lo, y_hi) = y.split_at(half);
    let (z_lo, z_hi) = z.split_at_mut(half);

    rayon::join(
        || convolve_block_parallel(x_lo, y_lo, z_lo, threshold),
        || {
            convolve_block_parallel(x_lo, y_hi, z_hi, threshold);
            convolve_block_parallel(x_hi, y_lo, z_hi, threshold);
        },
    );
}
