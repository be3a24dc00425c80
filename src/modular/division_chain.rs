//! The division chain of the Euclidean algorithm.
//!
//! Every step is written as `q = k·p + r`. Dividing the previous divisor by the
//! previous remainder over and over eventually gives a remainder of zero, and
//! the last non-zero remainder is the greatest common divisor.

use crate::error::AffineError;

use log::trace;

/// One division of the Euclidean algorithm, `q = k·p + r`.
///
/// `p <= q` always holds, `k` is the quotient and `r` the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuloStep {
    /// The divisor, never larger than `q`
    pub p: i64,
    /// The dividend
    pub q: i64,
    /// The quotient `q div p`
    pub k: i64,
    /// The remainder `q mod p`
    pub r: i64,
}

impl ModuloStep {
    /// Divides the larger of the two numbers by the smaller one.
    ///
    /// The arguments are swapped when `p > q` so that the step always reads
    /// `q = k·p + r`.
    ///
    /// # Errors
    /// Returns [`AffineError::InvalidDomain`] if the smaller number is not
    /// positive, as there is nothing to divide by.
    pub fn new(p: i64, q: i64) -> Result<Self, AffineError> {
        let (p, q) = if p > q { (q, p) } else { (p, q) };
        if p <= 0 {
            return Err(AffineError::InvalidDomain { m: p, n: q });
        }
        Ok(ModuloStep {
            p,
            q,
            k: q / p,
            r: q % p,
        })
    }
}

/// All the divisions performed to find `gcd(m, n)`.
///
/// The last step is the only one with a zero remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionChain {
    /// The steps, in the order they were computed
    steps: Vec<ModuloStep>,
}

impl DivisionChain {
    /// Builds the chain for `0 < m < n`.
    ///
    /// # Errors
    /// Returns [`AffineError::InvalidDomain`] when `m` is not strictly between
    /// zero and `n`.
    pub fn build(m: i64, n: i64) -> Result<Self, AffineError> {
        if m <= 0 || m >= n {
            return Err(AffineError::InvalidDomain { m, n });
        }

        let mut last = ModuloStep::new(m, n)?;
        trace!("division chain for ({}, {}): {:?}", m, n, last);
        let mut steps = vec![last];
        while last.r != 0 {
            last = ModuloStep::new(last.r, last.p)?;
            trace!("division chain for ({}, {}): {:?}", m, n, last);
            steps.push(last);
        }

        Ok(DivisionChain { steps })
    }

    /// The greatest common divisor of the two numbers the chain was built from.
    ///
    /// This is the remainder of the step before the final one, which is also
    /// the divisor of the final step.
    pub fn gcd(&self) -> i64 {
        // A chain always holds at least the step it was built from
        self.steps.last().map_or(0, |step| step.p)
    }

    /// The steps of the chain in computation order.
    pub fn steps(&self) -> &[ModuloStep] {
        &self.steps
    }
}
