//! Error type shared by the codec, the convolution kernels and CTPS values.

use thiserror::Error;

/// Errors reported for caller misuse of the CTPS primitives.
///
/// None of these are transient: every variant describes an input that can
/// never succeed as given.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CtpsError {
    /// A coefficient array whose length is not a nonzero power of two.
    #[error("coefficient array length {len} is not a power of two")]
    InvalidLength {
        /// The offending length.
        len: usize,
    },

    /// Two operands (or an operand and an output buffer) of different lengths.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// A masked decode whose offset does not fit in the active positions.
    #[error("offset {offset} needs more than the {active} active positions of the reference multi-index")]
    IndexOverflow {
        /// The offset being decoded.
        offset: usize,
        /// Number of `true` entries in the reference multi-index.
        active: usize,
    },

    /// A decode offset outside `[0, 2^num_vars)`.
    #[error("offset {offset} is out of range for {num_vars} variables")]
    OffsetOutOfRange {
        /// The offset being decoded.
        offset: usize,
        /// Number of variables K.
        num_vars: usize,
    },

    /// More variables than a `usize` offset can address.
    #[error("{num_vars} variables exceed the supported maximum of {max}")]
    TooManyVariables {
        /// Requested number of variables.
        num_vars: usize,
        /// Largest supported number of variables.
        max: usize,
    },

    /// A variable index that does not exist in a K-variable ring.
    #[error("variable index {index} is out of range for {num_vars} variables")]
    VariableOutOfRange {
        /// Requested variable index (zero-based).
        index: usize,
        /// Number of variables K.
        num_vars: usize,
    },
}

/// Result alias for CTPS operations.
pub type Result<T> = std::result::Result<T, CtpsError>;
