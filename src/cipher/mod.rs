//! The byte-wise affine cipher.
//!
//! Encryption is `C = (m·P + b) mod n` and decryption `P = m⁻¹·(C − b) mod n`.
//! We work on raw bytes so `n` is always [`MODULUS`].
//! ```rust
//! use affinecrack::cipher::{decrypt_affine, encrypt_affine, MODULUS};
//! let c = encrypt_affine(3, MODULUS, 7, 0xFF);
//! assert_eq!(c, 4);
//! assert_eq!(decrypt_affine(171, MODULUS, 7, c), 0xFF);
//! ```

use std::fmt;

/// Bytes take 256 values.
pub const MODULUS: i64 = 256;

/// `P = m⁻¹·(C − b) mod n`
///
/// Total over the integers, the result is always in `[0, n)`.
///
/// # Panics
/// Panics if `n` is zero.
pub fn decrypt_affine(m_inverse: i64, n: i64, b: i64, c: i64) -> i64 {
    let product = i128::from(m_inverse) * (i128::from(c) - i128::from(b));
    // The remainder is smaller than n so it fits back in an i64
    product.rem_euclid(i128::from(n)) as i64
}

/// `C = (m·P + b) mod n`
///
/// # Panics
/// Panics if `n` is zero.
pub fn encrypt_affine(m: i64, n: i64, b: i64, p: i64) -> i64 {
    let sum = i128::from(m) * i128::from(p) + i128::from(b);
    sum.rem_euclid(i128::from(n)) as i64
}

/// Only multipliers coprime with the modulus can be inverted, for bytes this
/// means odd ones.
pub fn is_valid_multiplier(m: u8) -> bool {
    num::integer::gcd(i64::from(m), MODULUS) == 1
}

/// An affine decryption key, `m⁻¹` and `b`, for the modulus [`MODULUS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCandidate {
    /// Inverse of the multiplier
    pub m_inverse: u8,
    /// The offset
    pub b: u8,
}

impl KeyCandidate {
    /// Creates a new key candidate
    pub fn new(m_inverse: u8, b: u8) -> Self {
        KeyCandidate { m_inverse, b }
    }

    /// Decrypts a single byte with this key.
    pub fn decrypt_byte(&self, c: u8) -> u8 {
        // Always in [0, 256)
        decrypt_affine(
            i64::from(self.m_inverse),
            MODULUS,
            i64::from(self.b),
            i64::from(c),
        ) as u8
    }

    /// Decrypts a whole buffer, the output has the same length as the input.
    pub fn decrypt_bytes(&self, ciphertext: &[u8]) -> Vec<u8> {
        ciphertext.iter().map(|&c| self.decrypt_byte(c)).collect()
    }
}

impl fmt::Display for KeyCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m^-1={}, b={}", self.m_inverse, self.b)
    }
}

/// Encrypts a buffer with multiplier `m` and offset `b`.
///
/// Only used to build test data and benchmarks, nothing in the cracking path
/// encrypts.
pub fn encrypt_bytes(m: u8, b: u8, plaintext: &[u8]) -> Vec<u8> {
    plaintext
        .iter()
        .map(|&p| encrypt_affine(i64::from(m), MODULUS, i64::from(b), i64::from(p)) as u8)
        .collect()
}
