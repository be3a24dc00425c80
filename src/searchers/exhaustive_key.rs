//! Exhaustive key search
//! Same walk as the brute force, but only over the m⁻¹ values that can
//! actually be the inverse of an affine multiplier, the ones coprime with 256.

use super::interface::{Search, Searcher};
use super::first_matching_key;
use crate::checkers::signature::Signature;
use crate::cipher::{is_valid_multiplier, KeyCandidate, MODULUS};

use log::{debug, trace};
use once_cell::sync::Lazy;

/// The m⁻¹ values coprime with 256, in search order
static VALID_MULTIPLIERS: Lazy<Vec<u8>> = Lazy::new(|| {
    (1..=u8::MAX)
        .filter(|&m_inverse| {
            let valid = is_valid_multiplier(m_inverse);
            if !valid {
                trace!(
                    "Skipping m^-1={}: {}%{}={}",
                    m_inverse,
                    MODULUS,
                    m_inverse,
                    MODULUS % i64::from(m_inverse)
                );
            }
            valid
        })
        .collect()
});

/// The Exhaustive Key searcher.
/// ```rust
/// use affinecrack::searchers::exhaustive_key::ExhaustiveKey;
/// use affinecrack::searchers::interface::{Search, Searcher};
/// use affinecrack::checkers::signature::Signature;
///
/// let searcher = Searcher::<ExhaustiveKey>::new();
/// let key = searcher.search(&[4, 143], &Signature::JPEG).unwrap();
/// assert_eq!((key.m_inverse, key.b), (171, 7));
/// ```
pub struct ExhaustiveKey;

impl Search for Searcher<ExhaustiveKey> {
    fn new() -> Searcher<ExhaustiveKey> {
        Searcher {
            name: "exhaustive key",
            phantom: std::marker::PhantomData,
        }
    }

    fn search(&self, ciphertext: &[u8], signature: &Signature) -> Option<KeyCandidate> {
        trace!("Affine exhaustive key looking for signature {}", signature);
        let found = first_matching_key(ciphertext, signature, VALID_MULTIPLIERS.iter().copied());
        match found {
            Some(key) => debug!("Affine exhaustive key success: {}", key),
            None => debug!("Affine exhaustive key failed: key unknown after trying."),
        }
        found
    }

    fn get_name(&self) -> &str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::encrypt_bytes;
    use crate::modular::inverse;
    use crate::searchers::brute_force::BruteForce;

    #[test]
    fn finds_key_of_jpeg_header() {
        let searcher = Searcher::<ExhaustiveKey>::new();
        let key = searcher.search(&[4, 143, 1, 2, 3], &Signature::JPEG);
        assert_eq!(key, Some(KeyCandidate::new(171, 7)));
    }

    #[test]
    fn agrees_with_brute_force_on_valid_keys() {
        let brute_force = Searcher::<BruteForce>::new();
        let exhaustive = Searcher::<ExhaustiveKey>::new();
        for m in [1u8, 3, 5, 7, 101, 171, 255] {
            for b in [0u8, 7, 200, 255] {
                let ciphertext = encrypt_bytes(m, b, &[0xFF, 0xD8, 0xFF, 0xE1]);
                let expected = KeyCandidate::new(
                    inverse(i64::from(m), MODULUS).unwrap() as u8,
                    b,
                );
                let found = brute_force.search(&ciphertext, &Signature::JPEG);
                assert_eq!(found, Some(expected), "m = {}, b = {}", m, b);
                assert_eq!(exhaustive.search(&ciphertext, &Signature::JPEG), found);
            }
        }
    }

    #[test]
    fn skips_even_multipliers() {
        // Brute force finds (2, 0) here, which is not a valid affine key
        let searcher = Searcher::<ExhaustiveKey>::new();
        assert_eq!(searcher.search(&[0, 8], &Signature::new(0x00, 0x10)), None);
    }

    #[test]
    fn valid_multipliers_are_the_odd_bytes() {
        assert_eq!(VALID_MULTIPLIERS.len(), 128);
        assert!(VALID_MULTIPLIERS.iter().all(|m_inverse| m_inverse % 2 == 1));
        assert_eq!(VALID_MULTIPLIERS.first(), Some(&1));
        assert_eq!(VALID_MULTIPLIERS.last(), Some(&255));
    }

    #[test]
    fn not_found_for_short_ciphertext() {
        let searcher = Searcher::<ExhaustiveKey>::new();
        assert_eq!(searcher.search(&[4], &Signature::JPEG), None);
    }
}
