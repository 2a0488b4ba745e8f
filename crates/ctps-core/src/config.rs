//! Tuning knobs for the convolution kernels.

/// Configuration for [`convolve_parallel`](crate::algorithms::parallel::convolve_parallel).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvolveConfig {
    /// Blocks with at most this many coefficients run sequentially.
    pub parallel_threshold: usize,
}

impl Default for ConvolveConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 1024,
        }
    }
}

impl ConvolveConfig {
    /// A configuration that never leaves the calling thread.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Sets the block size at which the recursion stops forking.
    #[must_use]
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }
}
