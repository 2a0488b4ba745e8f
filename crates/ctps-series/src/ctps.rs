//! The CTPS value type.
//!
//! A `Ctps` over K variables owns 2^K coefficients. The coefficient at offset
//! `m` belongs to the monomial whose multi-index is the binary expansion of
//! `m`, so for K = 2 the layout is `[c, c·t1, c·t2, c·t1·t2]`.

use std::fmt;

use ctps_core::{
    coeff_len_for, encode_index, max_vars_for, num_vars, Coeff, CtpsError, Result,
};

/// A cross-derivative Taylor polynomial in R[t1,...,tK]/<t1²,...,tK²>.
///
/// Arithmetic never mutates its operands; every operation returns a fresh
/// value of the same length.
#[derive(Clone, PartialEq, Debug)]
pub struct Ctps<F: Coeff = f64> {
    /// Coefficients indexed by memory offset. Length is always 2^K.
    coeffs: Vec<F>,
}

impl<F: Coeff> Ctps<F> {
    /// Wraps a coefficient array.
    ///
    /// # Errors
    ///
    /// [`CtpsError::InvalidLength`] unless `coeffs.len()` is a power of two.
    pub fn new(coeffs: Vec<F>) -> Result<Self> {
        num_vars(coeffs.len())?;
        Ok(Self { coeffs })
    }

    /// Wraps coefficients already known to have a power-of-two length.
    pub(crate) fn from_coeffs_unchecked(coeffs: Vec<F>) -> Self {
        debug_assert!(coeffs.len().is_power_of_two());
        Self { coeffs }
    }

    /// The zero element over `num_vars` variables.
    ///
    /// # Errors
    ///
    /// [`CtpsError::TooManyVariables`] if 2^K coefficients of type `F`
    /// exceed the largest possible allocation, or the allocator refuses them.
    pub fn zero(num_vars: usize) -> Result<Self> {
        let len = coeff_len_for::<F>(num_vars)?;
        let mut coeffs = Vec::new();
        coeffs
            .try_reserve_exact(len)
            .map_err(|_| CtpsError::TooManyVariables {
                num_vars,
                max: max_vars_for::<F>(),
            })?;
        coeffs.resize(len, F::zero());
        Ok(Self { coeffs })
    }

    /// The multiplicative identity `[1, 0, ..., 0]`.
    ///
    /// # Errors
    ///
    /// See [`Ctps::zero`].
    pub fn one(num_vars: usize) -> Result<Self> {
        Self::constant(F::one(), num_vars)
    }

    /// The constant `c`.
    ///
    /// # Errors
    ///
    /// See [`Ctps::zero`].
    pub fn constant(c: F, num_vars: usize) -> Result<Self> {
        let mut result = Self::zero(num_vars)?;
        result.coeffs[0] = c;
        Ok(result)
    }

    /// The variable t_(index+1).
    ///
    /// # Errors
    ///
    /// [`CtpsError::VariableOutOfRange`] if `index >= num_vars`.
    pub fn variable(index: usize, num_vars: usize) -> Result<Self> {
        Self::variable_at(F::zero(), index, num_vars)
    }

    /// The seed `value + t_(index+1)`.
    ///
    /// Propagating seeds like this through products yields the mixed partial
    /// derivatives of the product in the cross terms.
    ///
    /// # Errors
    ///
    /// [`CtpsError::VariableOutOfRange`] if `index >= num_vars`.
    pub fn variable_at(value: F, index: usize, num_vars: usize) -> Result<Self> {
        if index >= num_vars {
            return Err(CtpsError::VariableOutOfRange { index, num_vars });
        }
        let mut result = Self::constant(value, num_vars)?;
        result.coeffs[1 << index] = F::one();
        Ok(result)
    }

    /// Number of variables K.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.coeffs.len().trailing_zeros() as usize
    }

    /// Number of coefficients, 2^K.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Always false: even K = 0 stores the constant term.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    /// The coefficients in offset order.
    #[must_use]
    pub fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    /// Consumes the value and returns its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<F> {
        self.coeffs
    }

    /// The constant term.
    #[must_use]
    pub fn constant_term(&self) -> F {
        self.coeffs[0]
    }

    /// The coefficient at a memory offset, if in range.
    #[must_use]
    pub fn coeff_at(&self, offset: usize) -> Option<F> {
        self.coeffs.get(offset).copied()
    }

    /// The coefficient of the monomial named by `multi_index`.
    ///
    /// # Errors
    ///
    /// [`CtpsError::LengthMismatch`] unless `multi_index` has K entries.
    pub fn coeff(&self, multi_index: &[bool]) -> Result<F> {
        if multi_index.len() != self.num_vars() {
            return Err(CtpsError::LengthMismatch {
                left: self.num_vars(),
                right: multi_index.len(),
            });
        }
        Ok(self.coeffs[encode_index(multi_index)?])
    }

    /// Evaluates the polynomial at real values of t1..tK.
    ///
    /// Folds out the top variable first: `lo + t_K · hi` halves the array
    /// until only the value remains.
    ///
    /// # Errors
    ///
    /// [`CtpsError::LengthMismatch`] unless `point` has K entries.
    pub fn eval(&self, point: &[F]) -> Result<F> {
        if point.len() != self.num_vars() {
            return Err(CtpsError::LengthMismatch {
                left: self.num_vars(),
                right: point.len(),
            });
        }

        let mut acc = self.coeffs.clone();
        for &t in point.iter().rev() {
            let half = acc.len() / 2;
            let (lo, hi) = acc.split_at_mut(half);
            for (l, &h) in lo.iter_mut().zip(hi.iter()) {
                *l += t * h;
            }
            acc.truncate(half);
        }
        Ok(acc[0])
    }
}

impl<F: Coeff> TryFrom<Vec<F>> for Ctps<F> {
    type Error = CtpsError;

    fn try_from(coeffs: Vec<F>) -> Result<Self> {
        Self::new(coeffs)
    }
}

impl<F: Coeff> From<Ctps<F>> for Vec<F> {
    fn from(value: Ctps<F>) -> Self {
        value.coeffs
    }
}

impl<F: Coeff> fmt::Display for Ctps<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}
