//! Checkers decide whether a candidate key is the right one.
//!
//! We never look at the whole plaintext while searching, only at whether the
//! first bytes decrypt into the magic header of the expected file format.

/// The two byte file signature used as an oracle while searching
pub mod signature;

use crate::cipher::KeyCandidate;

use self::signature::Signature;

/// Checks a candidate key against `signature`, logging the hit.
/// ```rust
/// use affinecrack::checkers::{check, signature::Signature};
/// use affinecrack::cipher::KeyCandidate;
/// assert!(check(&Signature::JPEG, &KeyCandidate::new(171, 7), &[4, 143]));
/// ```
pub fn check(signature: &Signature, key: &KeyCandidate, ciphertext: &[u8]) -> bool {
    let identified = signature.matches(key, ciphertext);
    if identified {
        log::debug!("{} turns the header into signature {}", key, signature);
    }
    identified
}
