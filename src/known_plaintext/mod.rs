//! Known plaintext attack.
//!
//! Two bytes encrypted with the same key give
//! ```text
//! c₁ ≡ m·p₁ + b (mod n)
//! c₂ ≡ m·p₂ + b (mod n)
//! ```
//! and subtracting them gets rid of `b`, leaving `Δc ≡ m·Δp (mod n)`.
//!
//! When `Δp` is coprime with `n` the multiplier is `m = Δc·Δp⁻¹`. Otherwise
//! `g = gcd(Δp, n)` must divide `Δc` for a solution to exist, and dividing
//! the whole congruence by `g` brings us back to the coprime case, at the price
//! of only knowing `m` modulo `n / g`.

use std::fmt;

use log::{debug, trace, warn};
use rand::seq::index::sample;
use serde::{Deserialize, Serialize};

use crate::cipher::{KeyCandidate, MODULUS};
use crate::error::AffineError;
use crate::modular::{inverse, try_inverse, Inversion};

/// How the two known pairs used to build the congruence are picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SampleSelection {
    /// The first pair, and the first later pair with a different plaintext byte
    #[default]
    Sequential,
    /// Two distinct pairs picked at random
    Random,
}

/// The key derived from known plaintext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownPlaintextKey {
    /// The multiplier
    pub m: i64,
    /// Inverse of the multiplier modulo 256
    pub m_inverse: i64,
    /// The offset
    pub b: i64,
    /// `m` is only known modulo `256 / reduction`.
    /// This is 1 when the sampled plaintext difference was coprime with 256.
    pub reduction: i64,
}

impl KnownPlaintextKey {
    /// The decryption half of the key
    pub fn key(&self) -> KeyCandidate {
        // Both are reduced modulo 256
        KeyCandidate::new(self.m_inverse as u8, self.b as u8)
    }

    /// Whether the sampled pairs pinned `m` down modulo 256
    pub fn is_exact(&self) -> bool {
        self.reduction == 1
    }
}

impl fmt::Display for KnownPlaintextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m={} and b={}", self.m, self.b)
    }
}

/// One attempt at solving `Δc ≡ m·Δp (mod modulus)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Congruence {
    /// `m` modulo the current modulus
    Solved(i64),
    /// Divide everything by this factor and try again
    Reduce(i64),
    /// This factor, shared by `Δp` and the modulus, does not divide `Δc`
    Unsolvable(i64),
}

/// Single step of the congruence solver.
fn solve_step(dp: i64, dc: i64, modulus: i64) -> Result<Congruence, AffineError> {
    match try_inverse(dp, modulus)? {
        Inversion::Inverse(dp_inverse) => Ok(Congruence::Solved(
            (dc * dp_inverse).rem_euclid(modulus),
        )),
        Inversion::NotCoprime(chain) => {
            let g = chain.gcd();
            if dc % g == 0 {
                Ok(Congruence::Reduce(g))
            } else {
                Ok(Congruence::Unsolvable(g))
            }
        }
    }
}

/// Solves `Δc ≡ m·Δp (mod n)` for `m`.
///
/// Returns `m` together with the factor the congruence had to be divided by.
///
/// # Errors
/// Returns [`AffineError::NoSolution`] when there is no such `m`.
pub fn solve_congruence(dp: i64, dc: i64, n: i64) -> Result<(i64, i64), AffineError> {
    let (mut dp, mut dc, mut modulus) = (dp.rem_euclid(n), dc.rem_euclid(n), n);
    let mut reduction = 1;

    if dp == 0 {
        // Same plaintext byte twice, nothing to learn about m
        return Err(AffineError::NoSolution);
    }

    loop {
        match solve_step(dp, dc, modulus)? {
            Congruence::Solved(m) => {
                trace!("solved m={} modulo {}", m, modulus);
                return Ok((m, reduction));
            }
            Congruence::Reduce(g) => {
                trace!("({}, {}) share factor {}, reducing", dp, modulus, g);
                dp /= g;
                dc /= g;
                modulus /= g;
                reduction *= g;
            }
            Congruence::Unsolvable(g) => {
                trace!("{} does not divide {}, no solution", g, dc);
                return Err(AffineError::NoSolution);
            }
        }
    }
}

/// Picks the indices of the two pairs to use.
fn select_samples(plaintext: &[u8], selection: SampleSelection) -> (usize, usize) {
    match selection {
        SampleSelection::Sequential => {
            let second = plaintext
                .iter()
                .skip(1)
                .position(|&p| p != plaintext[0])
                .map_or(1, |offset| offset + 1);
            (0, second)
        }
        SampleSelection::Random => {
            let picked = sample(&mut rand::thread_rng(), plaintext.len(), 2);
            (picked.index(0), picked.index(1))
        }
    }
}

/// Derives the affine key from bytes known in both plaintext and ciphertext.
///
/// The two slices must line up, `ciphertext[i]` being the encryption of
/// `plaintext[i]`.
/// ```rust
/// use affinecrack::known_plaintext::{analyze_known_plaintext, SampleSelection};
/// let key = analyze_known_plaintext(&[5, 2], &[22, 13], SampleSelection::Sequential).unwrap();
/// assert_eq!((key.m, key.m_inverse, key.b), (3, 171, 7));
/// ```
///
/// # Errors
/// * [`AffineError::LengthMismatch`] if the slices differ in length
/// * [`AffineError::InsufficientSamples`] if fewer than two pairs are given
/// * [`AffineError::NoSolution`] if the sampled pairs admit no multiplier
/// * [`AffineError::InvalidDomain`] or [`AffineError::NotCoprime`] if the
///   derived multiplier cannot be inverted
pub fn analyze_known_plaintext(
    plaintext: &[u8],
    ciphertext: &[u8],
    selection: SampleSelection,
) -> Result<KnownPlaintextKey, AffineError> {
    if plaintext.len() != ciphertext.len() {
        return Err(AffineError::LengthMismatch {
            plaintext: plaintext.len(),
            ciphertext: ciphertext.len(),
        });
    }
    if plaintext.len() < 2 {
        return Err(AffineError::InsufficientSamples(plaintext.len()));
    }

    let (first, second) = select_samples(plaintext, selection);
    let (mut p1, mut c1) = (i64::from(plaintext[first]), i64::from(ciphertext[first]));
    let (mut p2, mut c2) = (i64::from(plaintext[second]), i64::from(ciphertext[second]));

    // Keeps the larger plaintext first, easier to follow in the logs
    if p1 < p2 {
        std::mem::swap(&mut p1, &mut p2);
        std::mem::swap(&mut c1, &mut c2);
    }
    debug!(
        "known plaintext pairs (p1, c1, p2, c2): {}, {}, {}, {}",
        p1, c1, p2, c2
    );

    let dp = (p1 - p2).rem_euclid(MODULUS);
    let dc = (c1 - c2).rem_euclid(MODULUS);
    debug!("after subtraction (p, c): {}, {}", dp, dc);

    let (m, reduction) = solve_congruence(dp, dc, MODULUS)?;
    if reduction != 1 {
        warn!(
            "m={} is only determined modulo {}, the sampled plaintext difference shares factor {} with {}",
            m,
            MODULUS / reduction,
            reduction,
            MODULUS
        );
    }

    let b = (c1 - p1 * m).rem_euclid(MODULUS);
    let m_inverse = inverse(m, MODULUS)?;

    Ok(KnownPlaintextKey {
        m,
        m_inverse,
        b,
        reduction,
    })
}
