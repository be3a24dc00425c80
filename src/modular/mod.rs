//! Modular inverses through the extended Euclidean algorithm.
//!
//! `m` has an inverse modulo `n` only when `gcd(m, n) = 1`. We find it by
//! building the Euclidean division chain of `(m, n)` and backtracking it into
//! a Bézout identity `m·x + n·y = 1`, which makes `x` the inverse.
//! ```rust
//! use affinecrack::modular::inverse;
//! assert_eq!(inverse(3, 256).unwrap(), 171);
//! ```

/// Backtracking a division chain into a Bézout identity
pub mod bezout;
/// The chain of divisions performed by the Euclidean algorithm
pub mod division_chain;

use crate::error::AffineError;

use self::bezout::bezout_identity;
use self::division_chain::DivisionChain;

use log::trace;

/// Result of attempting to invert `m` modulo `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inversion {
    /// `m` and `n` are coprime, this is the inverse in `[0, n)`
    Inverse(i64),
    /// `m` and `n` share a factor, the chain holds their gcd
    NotCoprime(DivisionChain),
}

/// Inverts `m` modulo `n`, telling the caller when the two are not coprime
/// instead of treating it as an error.
///
/// # Errors
/// Returns [`AffineError::InvalidDomain`] unless `0 < m < n`.
pub fn try_inverse(m: i64, n: i64) -> Result<Inversion, AffineError> {
    let chain = DivisionChain::build(m, n)?;
    if chain.gcd() != 1 {
        trace!("{} and {} are not coprime, gcd is {}", m, n, chain.gcd());
        return Ok(Inversion::NotCoprime(chain));
    }

    let identity = bezout_identity(&chain);
    trace!("Bezout identity for ({}, {}): {:?}", m, n, identity);

    // Affine positions are never negative
    let x = if identity.x < 0 {
        identity.x + n
    } else {
        identity.x
    };
    Ok(Inversion::Inverse(x))
}

/// The inverse of `m` modulo `n`, in `[0, n)`.
///
/// # Errors
/// Returns [`AffineError::InvalidDomain`] unless `0 < m < n`, and
/// [`AffineError::NotCoprime`] with the division chain when `gcd(m, n) != 1`.
pub fn inverse(m: i64, n: i64) -> Result<i64, AffineError> {
    match try_inverse(m, n)? {
        Inversion::Inverse(x) => Ok(x),
        Inversion::NotCoprime(chain) => Err(AffineError::NotCoprime {
            gcd: chain.gcd(),
            chain,
        }),
    }
}
