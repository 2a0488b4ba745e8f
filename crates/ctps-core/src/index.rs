//! Multi-index ↔ memory offset codec.
//!
//! A multi-index over K variables is a boolean vector whose entry `n` says
//! whether t_(n+1) appears in the monomial. Its offset in the coefficient
//! array is the multi-index read as a binary number, least-significant bit
//! first:
//!
//! ```text
//! m(i) = Σₙ i[n] · 2ⁿ
//! ```
//!
//! With K = 2 the storage order is `[1, t1, t2, t1·t2]`.

use crate::error::{CtpsError, Result};

/// Largest number of variables whose offsets fit in a `usize`.
pub const MAX_VARS: usize = (usize::BITS - 1) as usize;

/// Returns K for a coefficient array of length 2^K.
///
/// # Errors
///
/// [`CtpsError::InvalidLength`] if `len` is zero or not a power of two.
pub fn num_vars(len: usize) -> Result<usize> {
    if !len.is_power_of_two() {
        return Err(CtpsError::InvalidLength { len });
    }
    Ok(len.trailing_zeros() as usize)
}

/// Returns the coefficient array length 2^K for K variables.
///
/// # Errors
///
/// [`CtpsError::TooManyVariables`] if K exceeds [`MAX_VARS`].
pub fn coeff_len(num_vars: usize) -> Result<usize> {
    check_num_vars(num_vars)?;
    Ok(1 << num_vars)
}

/// Largest K whose 2^K coefficients of type `F` fit in one allocation.
///
/// Rust caps any allocation at `isize::MAX` bytes, which is tighter than
/// [`MAX_VARS`] for every coefficient wider than a byte.
#[must_use]
pub fn max_vars_for<F>() -> usize {
    let max_len = isize::MAX.unsigned_abs() / std::mem::size_of::<F>().max(1);
    (max_len.ilog2() as usize).min(MAX_VARS)
}

/// Returns the allocatable coefficient array length 2^K for type `F`.
///
/// # Errors
///
/// [`CtpsError::TooManyVariables`] if K exceeds [`max_vars_for::<F>`].
pub fn coeff_len_for<F>(num_vars: usize) -> Result<usize> {
    let max = max_vars_for::<F>();
    if num_vars > max {
        return Err(CtpsError::TooManyVariables { num_vars, max });
    }
    Ok(1 << num_vars)
}

fn check_num_vars(num_vars: usize) -> Result<()> {
    if num_vars > MAX_VARS {
        return Err(CtpsError::TooManyVariables {
            num_vars,
            max: MAX_VARS,
        });
    }
    Ok(())
}

/// Encodes a multi-index as its memory offset.
///
/// The empty multi-index encodes to 0. Trailing `false` entries do not change
/// the result.
///
/// # Errors
///
/// [`CtpsError::TooManyVariables`] if a `true` entry sits at a position the
/// offset cannot represent.
pub fn encode_index(multi_index: &[bool]) -> Result<usize> {
    let mut offset = 0usize;
    for (n, &present) in multi_index.iter().enumerate() {
        if !present {
            continue;
        }
        if n >= MAX_VARS {
            return Err(CtpsError::TooManyVariables {
                num_vars: multi_index.len(),
                max: MAX_VARS,
            });
        }
        offset |= 1 << n;
    }
    Ok(offset)
}

/// Decodes an offset into a multi-index of exactly `num_vars` entries.
///
/// The result is zero-padded, so decoded multi-indices always share the
/// caller's K.
///
/// # Errors
///
/// - [`CtpsError::TooManyVariables`] if `num_vars` exceeds [`MAX_VARS`].
/// - [`CtpsError::OffsetOutOfRange`] if `offset >= 2^num_vars`.
pub fn decode_index(offset: usize, num_vars: usize) -> Result<Vec<bool>> {
    check_num_vars(num_vars)?;
    if offset >> num_vars != 0 {
        return Err(CtpsError::OffsetOutOfRange { offset, num_vars });
    }
    Ok((0..num_vars).map(|n| (offset >> n) & 1 == 1).collect())
}

/// Decodes an offset into its shortest multi-index.
///
/// The length is the bit length of `offset`, so `0` decodes to the empty
/// multi-index and `4` decodes to `[false, false, true]`. Prefer
/// [`decode_index`] whenever K is known.
#[must_use]
pub fn decode_index_unpadded(offset: usize) -> Vec<bool> {
    let bit_len = (usize::BITS - offset.leading_zeros()) as usize;
    (0..bit_len).map(|n| (offset >> n) & 1 == 1).collect()
}

/// Decodes an offset into a sub-multi-index of `reference`.
///
/// The result has the length of `reference` and is `false` wherever
/// `reference` is `false`. The active positions of `reference` receive the
/// binary digits of `offset`, least-significant first, in increasing position
/// order. Letting `offset` run over `0..2^popcount(reference)` enumerates
/// every k ⊆ `reference` exactly once.
///
/// # Errors
///
/// [`CtpsError::IndexOverflow`] if `offset` has more binary digits than
/// `reference` has active positions.
pub fn decode_index_masked(offset: usize, reference: &[bool]) -> Result<Vec<bool>> {
    let active = reference.iter().filter(|&&present| present).count();
    if active < usize::BITS as usize && offset >> active != 0 {
        return Err(CtpsError::IndexOverflow { offset, active });
    }

    let mut remaining = offset;
    Ok(reference
        .iter()
        .map(|&present| {
            if !present {
                return false;
            }
            let bit = remaining & 1 == 1;
            remaining >>= 1;
            bit
        })
        .collect())
}
