//! # Ctps
//!
//! Arithmetic over Cross-derivative Taylor Polynomial Series: truncated
//! multivariate Taylor expansions in the factor ring
//! R[t1,...,tK]/<t1²,...,tK²>.
//!
//! ## Features
//!
//! - **Dense storage**: 2^K coefficients addressed by multi-index offsets
//! - **Fast multiplication**: O(3^K) divide-and-conquer convolution
//! - **Parallelism**: rayon fork/join above a configurable block size
//! - **Cross derivatives**: seeded variables carry mixed partials through
//!   products
//!
//! ## Quick Start
//!
//! ```rust
//! use ctps::prelude::*;
//!
//! let x: Ctps = Ctps::variable_at(2.0, 0, 2)?;
//! let y: Ctps = Ctps::variable_at(3.0, 1, 2)?;
//! let f = (&x * &y)?;
//! assert_eq!(f.to_string(), "[6, 3, 2, 1]");
//! # Ok::<(), CtpsError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ctps_core as core;
pub use ctps_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ctps_core::{
        convolve, convolve_enumerate, convolve_parallel, convolve_recursive, decode_index,
        decode_index_masked, decode_index_unpadded, encode_index, Coeff, ConvolveConfig,
        CtpsError,
    };
    pub use ctps_series::Ctps;
}
