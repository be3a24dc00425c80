//! Brute force every (m⁻¹, b) pair
//! Tries every m⁻¹ from 1 to 255 and every b from 0 to 255, without assuming
//! anything about which multipliers are valid.

use super::interface::{Search, Searcher};
use super::first_matching_key;
use crate::checkers::signature::Signature;
use crate::cipher::KeyCandidate;

use log::{debug, trace};

/// The Brute Force searcher.
/// ```rust
/// use affinecrack::searchers::brute_force::BruteForce;
/// use affinecrack::searchers::interface::{Search, Searcher};
/// use affinecrack::checkers::signature::Signature;
///
/// let searcher = Searcher::<BruteForce>::new();
/// let key = searcher.search(&[4, 143, 12], &Signature::JPEG).unwrap();
/// assert_eq!((key.m_inverse, key.b), (171, 7));
/// ```
pub struct BruteForce;

impl Search for Searcher<BruteForce> {
    fn new() -> Searcher<BruteForce> {
        Searcher {
            name: "brute force",
            phantom: std::marker::PhantomData,
        }
    }

    fn search(&self, ciphertext: &[u8], signature: &Signature) -> Option<KeyCandidate> {
        trace!("Affine brute force looking for signature {}", signature);
        let found = first_matching_key(ciphertext, signature, 1..=u8::MAX);
        match found {
            Some(key) => debug!("Affine brute force success: {}", key),
            None => debug!("Affine brute force failed: key unknown after trying."),
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

    #[test]
    fn finds_key_of_jpeg_header() {
        let searcher = Searcher::<BruteForce>::new();
        let key = searcher.search(&[4, 143, 99, 100], &Signature::JPEG);
        assert_eq!(key, Some(KeyCandidate::new(171, 7)));
    }

    #[test]
    fn same_answer_every_time() {
        let searcher = Searcher::<BruteForce>::new();
        let ciphertext = encrypt_bytes(101, 42, &[0xFF, 0xD8, 0xFF, 0xE0]);
        let first = searcher.search(&ciphertext, &Signature::JPEG);
        assert!(first.is_some());
        for _ in 0..3 {
            assert_eq!(searcher.search(&ciphertext, &Signature::JPEG), first);
        }
    }

    #[test]
    fn returns_lexicographically_smallest_key() {
        // With header [0, 8] and signature [0x00, 0x10] both (2, 0) and many
        // larger pairs work, the even multiplier comes first.
        let searcher = Searcher::<BruteForce>::new();
        let key = searcher.search(&[0, 8], &Signature::new(0x00, 0x10));
        assert_eq!(key, Some(KeyCandidate::new(2, 0)));
    }

    #[test]
    fn not_found_for_short_ciphertext() {
        let searcher = Searcher::<BruteForce>::new();
        assert_eq!(searcher.search(&[4], &Signature::JPEG), None);
        assert_eq!(searcher.search(&[], &Signature::JPEG), None);
    }

    #[test]
    fn not_found_when_no_key_fits() {
        // Equal header bytes can never decrypt to two different signature bytes
        let searcher = Searcher::<BruteForce>::new();
        assert_eq!(searcher.search(&[9, 9, 9], &Signature::JPEG), None);
    }

    #[test]
    fn metadata() {
        let searcher = Searcher::<BruteForce>::new();
        assert_eq!(searcher.get_name(), "brute force");
    }
}
