//! The searchers walk the key space looking for the first key that turns the
//! ciphertext header into the expected file signature.
//!
//! Both walk m⁻¹ in ascending order on the outside and b in ascending order on
//! the inside, and stop at the first hit. Given the same ciphertext they
//! always return the same key.

/// Tries every (m⁻¹, b) pair
pub mod brute_force;
/// Tries only the (m⁻¹, b) pairs with m⁻¹ coprime with the modulus
pub mod exhaustive_key;
/// The Searcher struct and the Search trait
pub mod interface;

use crate::checkers::{check, signature::Signature};
use crate::cipher::KeyCandidate;

use self::brute_force::BruteForce;
use self::exhaustive_key::ExhaustiveKey;
use self::interface::{Search, Searcher};

/// SearcherTypes is a wrapper enum for Searcher
pub enum SearcherTypes {
    /// Wrapper for the Brute Force searcher
    SearchBruteForce(Searcher<BruteForce>),
    /// Wrapper for the Exhaustive Key searcher
    SearchExhaustiveKey(Searcher<ExhaustiveKey>),
}

impl SearcherTypes {
    /// This functions calls appropriate search function of Searcher
    pub fn search(&self, ciphertext: &[u8], signature: &Signature) -> Option<KeyCandidate> {
        match self {
            SearcherTypes::SearchBruteForce(searcher) => searcher.search(ciphertext, signature),
            SearcherTypes::SearchExhaustiveKey(searcher) => {
                searcher.search(ciphertext, signature)
            }
        }
    }

    /// The name of the wrapped searcher
    pub fn get_name(&self) -> &str {
        match self {
            SearcherTypes::SearchBruteForce(searcher) => searcher.get_name(),
            SearcherTypes::SearchExhaustiveKey(searcher) => searcher.get_name(),
        }
    }
}

/// Walks `multipliers` (outer) and every `b` (inner), returning the first key
/// accepted by the signature checker.
fn first_matching_key(
    ciphertext: &[u8],
    signature: &Signature,
    multipliers: impl Iterator<Item = u8>,
) -> Option<KeyCandidate> {
    if ciphertext.len() < 2 {
        log::warn!(
            "Ciphertext is {} byte(s) long, a two byte header is needed to search",
            ciphertext.len()
        );
        return None;
    }

    for m_inverse in multipliers {
        for b in 0..=u8::MAX {
            let key = KeyCandidate::new(m_inverse, b);
            if check(signature, &key, ciphertext) {
                return Some(key);
            }
        }
    }
    None
}
