//! Unified error types for affinecrack.
//!
//! [`AffineError`] covers everything that can go wrong while recovering a key,
//! [`CrackerError`] wraps it together with the errors of the surrounding
//! program (files, configuration) so the binary can propagate with `?`.

use std::fmt;

use crate::modular::division_chain::DivisionChain;

/// Errors raised by the key recovery engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AffineError {
    /// A modular operation was asked for `m` outside of `0 < m < n`.
    InvalidDomain {
        /// The number to invert
        m: i64,
        /// The modulus
        n: i64,
    },
    /// `m` and `n` share a factor so `m` has no inverse.
    NotCoprime {
        /// The shared factor
        gcd: i64,
        /// Every division performed while looking for the gcd
        chain: DivisionChain,
    },
    /// The known plaintext and known ciphertext differ in length.
    LengthMismatch {
        /// Number of known plaintext bytes
        plaintext: usize,
        /// Number of known ciphertext bytes
        ciphertext: usize,
    },
    /// Fewer than two known plaintext/ciphertext pairs were given.
    InsufficientSamples(usize),
    /// The congruence built from the sampled pairs has no solution.
    NoSolution,
}

impl fmt::Display for AffineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AffineError::InvalidDomain { m, n } => {
                write!(f, "m must be positive and smaller than n (m={}, n={})", m, n)
            }
            AffineError::NotCoprime { gcd, .. } => write!(
                f,
                "m and n are not relatively prime to each other (gcd={})",
                gcd
            ),
            AffineError::LengthMismatch {
                plaintext,
                ciphertext,
            } => write!(
                f,
                "Known plaintext ({} bytes) and known ciphertext ({} bytes) have different sizes",
                plaintext, ciphertext
            ),
            AffineError::InsufficientSamples(found) => write!(
                f,
                "Need at least two known plaintext bytes, got {}",
                found
            ),
            AffineError::NoSolution => write!(f, "No solution exists from the known plaintext"),
        }
    }
}

impl std::error::Error for AffineError {}

/// Central error type for the affinecrack program.
#[derive(Debug)]
pub enum CrackerError {
    /// I/O errors (reading inputs, writing the plaintext).
    Io(std::io::Error),
    /// Configuration errors (bad values, missing arguments).
    Config(String),
    /// TOML (de)serialization errors.
    Serialization(String),
    /// Key recovery errors.
    Affine(AffineError),
}

impl fmt::Display for CrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrackerError::Io(e) => write!(f, "I/O error: {}", e),
            CrackerError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CrackerError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            CrackerError::Affine(e) => write!(f, "Cryptanalysis error: {}", e),
        }
    }
}

impl std::error::Error for CrackerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CrackerError::Io(e) => Some(e),
            CrackerError::Affine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CrackerError {
    fn from(e: std::io::Error) -> Self {
        CrackerError::Io(e)
    }
}

impl From<AffineError> for CrackerError {
    fn from(e: AffineError) -> Self {
        CrackerError::Affine(e)
    }
}

impl From<toml::ser::Error> for CrackerError {
    fn from(e: toml::ser::Error) -> Self {
        CrackerError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CrackerError {
    fn from(e: toml::de::Error) -> Self {
        CrackerError::Config(e.to_string())
    }
}
