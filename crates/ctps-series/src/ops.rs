//! Ring operations on CTPS values.
//!
//! Binary operators on references return `Result<Ctps>` because operands
//! over different numbers of variables cannot be combined.

use std::ops::{Add, Mul, Neg, Sub};

use ctps_core::{convolve_parallel, Coeff, ConvolveConfig, CtpsError, Result};
use tracing::trace;

use crate::ctps::Ctps;

impl<F: Coeff> Ctps<F> {
    fn check_same_len(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            return Err(CtpsError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, op: impl Fn(F, F) -> F) -> Result<Self> {
        self.check_same_len(other)?;
        let coeffs = self
            .coeffs()
            .iter()
            .zip(other.coeffs())
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(Self::from_coeffs_unchecked(coeffs))
    }

    /// Adds two values coefficient-wise.
    ///
    /// # Errors
    ///
    /// [`CtpsError::LengthMismatch`] if the operands differ in K.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtracts two values coefficient-wise.
    ///
    /// # Errors
    ///
    /// [`CtpsError::LengthMismatch`] if the operands differ in K.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiplies two values in the truncated ring.
    ///
    /// # Errors
    ///
    /// [`CtpsError::LengthMismatch`] if the operands differ in K.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.mul_with(other, &ConvolveConfig::default())
    }

    /// Multiplies two values with an explicit convolution configuration.
    ///
    /// # Errors
    ///
    /// [`CtpsError::LengthMismatch`] if the operands differ in K.
    pub fn mul_with(&self, other: &Self, config: &ConvolveConfig) -> Result<Self> {
        self.check_same_len(other)?;
        trace!(num_vars = self.num_vars(), "multiplying ctps");

        let mut product = vec![F::zero(); self.len()];
        convolve_parallel(self.coeffs(), other.coeffs(), &mut product, config)?;
        Ok(Self::from_coeffs_unchecked(product))
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: F) -> Self {
        self.map(|a| a * c)
    }

    /// Raises to a non-negative integer power by repeated squaring.
    ///
    /// # Errors
    ///
    /// Only propagates construction errors, which cannot occur for a valid
    /// value.
    pub fn pow(&self, n: u32) -> Result<Self> {
        let config = ConvolveConfig::sequential();
        let mut result = Self::one(self.num_vars())?;
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul_with(&base, &config)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul_with(&base, &config)?;
            }
        }
        Ok(result)
    }

    fn map(&self, op: impl Fn(F) -> F) -> Self {
        Self::from_coeffs_unchecked(self.coeffs().iter().map(|&a| op(a)).collect())
    }
}

impl<F: Coeff> Add for &Ctps<F> {
    type Output = Result<Ctps<F>>;

    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<F: Coeff> Sub for &Ctps<F> {
    type Output = Result<Ctps<F>>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl<F: Coeff> Mul for &Ctps<F> {
    type Output = Result<Ctps<F>>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.try_mul(rhs)
    }
}

impl<F: Coeff> Neg for &Ctps<F> {
    type Output = Ctps<F>;

    fn neg(self) -> Ctps<F> {
        self.map(|a| -a)
    }
}

impl<F: Coeff> Neg for Ctps<F> {
    type Output = Ctps<F>;

    fn neg(self) -> Ctps<F> {
        -&self
    }
}
