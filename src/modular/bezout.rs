//! Back substitution through a division chain.
//!
//! Starting from the last non-zero remainder `r = q - k·p` we substitute the
//! earlier steps one at a time until the identity is expressed in terms of the
//! two numbers the chain was built from.

use super::division_chain::{DivisionChain, ModuloStep};

/// `m·x + n·y = gcd(m, n)`
///
/// `n` always holds the larger of the two moduli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BezoutIdentity {
    /// The smaller modulus
    pub m: i64,
    /// Coefficient of `m`
    pub x: i64,
    /// The larger modulus
    pub n: i64,
    /// Coefficient of `n`
    pub y: i64,
}

impl BezoutIdentity {
    /// The identity given by a single step, `r = 1·q + (-k)·p`.
    pub fn from_step(step: &ModuloStep) -> Self {
        BezoutIdentity {
            m: step.p,
            x: -step.k,
            n: step.q,
            y: 1,
        }
    }

    /// Replaces the remainder of `step` (currently sitting in `m`) with
    /// `q - k·p`, then swaps the sides so `n` stays the larger modulus.
    pub fn back_substitute(self, step: &ModuloStep) -> Self {
        // (q - k·p)·x + p·y = q·x + p·(y - k·x)
        BezoutIdentity {
            m: self.n,
            x: self.y - step.k * self.x,
            n: step.q,
            y: self.x,
        }
    }

    /// The left hand side, `m·x + n·y`.
    pub fn evaluate(&self) -> i64 {
        self.m * self.x + self.n * self.y
    }
}

/// Every intermediate identity produced while backtracking `chain`.
///
/// The zero remainder step is skipped, the first identity comes from the step
/// holding the gcd and the last one is expressed in the chain's original
/// numbers. Each identity evaluates to the gcd of the chain.
pub fn backtrack(chain: &DivisionChain) -> Vec<BezoutIdentity> {
    let mut remaining = chain.steps().iter().rev().filter(|step| step.r != 0);

    let Some(seed) = remaining.next().map(BezoutIdentity::from_step) else {
        return Vec::new();
    };

    std::iter::once(seed)
        .chain(remaining.scan(seed, |identity, step| {
            *identity = identity.back_substitute(step);
            Some(*identity)
        }))
        .collect()
}

/// Folds `chain` into the Bézout identity of its original numbers.
///
/// A chain of a single step (the smaller number divides the larger one) has
/// the trivial identity `m·1 + n·0 = m`.
pub fn bezout_identity(chain: &DivisionChain) -> BezoutIdentity {
    let mut remaining = chain.steps().iter().rev().filter(|step| step.r != 0);

    match remaining.next() {
        Some(first) => remaining.fold(BezoutIdentity::from_step(first), |identity, step| {
            identity.back_substitute(step)
        }),
        None => {
            let only = chain.steps()[0];
            BezoutIdentity {
                m: only.p,
                x: 1,
                n: only.q,
                y: 0,
            }
        }
    }
}
