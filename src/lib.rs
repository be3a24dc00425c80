//! affinecrack recovers the key of a byte-wise affine cipher.
//!
//! Three attacks are available, see [`Strategy`]. The two searches need to know
//! the first two bytes of the plaintext (the file signature), the known
//! plaintext attack solves for the key directly.
// Warns in case we forget to include documentation
#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

/// Checkers validate candidate keys against a file signature
pub mod checkers;
/// The affine cipher itself
pub mod cipher;
/// The CLI parses arguments into a Config and the inputs to crack
pub mod cli;
/// The CLI Pretty Printing module contains the functions that print the results
pub mod cli_pretty_printing;
/// The Config module holds the settings of a run and loads them from TOML
pub mod config;
/// Error types
pub mod error;
/// Solves for the key from known plaintext
pub mod known_plaintext;
/// Modular inverses, gcd and Bézout identities
pub mod modular;
/// The searchers walk the key space looking for the signature
pub mod searchers;
/// Reading and writing files
pub mod storage;
/// Timing of the key recovery
pub mod timer;

use std::time::Duration;

use log::{debug, info};

use crate::cipher::KeyCandidate;
use crate::config::Config;
use crate::error::AffineError;
use crate::known_plaintext::{analyze_known_plaintext, KnownPlaintextKey};
use crate::searchers::brute_force::BruteForce;
use crate::searchers::exhaustive_key::ExhaustiveKey;
use crate::searchers::interface::{Search, Searcher};
use crate::searchers::SearcherTypes;

/// Which attack to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Try every (m⁻¹, b) pair
    BruteForce,
    /// Try every (m⁻¹, b) pair with m⁻¹ coprime with 256
    ExhaustiveKey,
    /// Solve for the key from aligned plaintext and ciphertext bytes
    KnownPlaintext {
        /// The known plaintext bytes
        plaintext: Vec<u8>,
        /// Their encryption, byte for byte
        ciphertext: Vec<u8>,
    },
}

impl Strategy {
    /// The human name of the attack
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute force",
            Strategy::ExhaustiveKey => "exhaustive key",
            Strategy::KnownPlaintext { .. } => "known plaintext",
        }
    }
}

/// A successful key recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrackResult {
    /// The attack that found the key
    pub strategy: &'static str,
    /// The decryption key
    pub key: KeyCandidate,
    /// The full solution when the known plaintext attack was used
    pub known_plaintext: Option<KnownPlaintextKey>,
    /// The decrypted ciphertext
    pub plaintext: Vec<u8>,
    /// How long it took to find the key, decryption excluded
    pub elapsed: Duration,
}

/// The main function to call which performs the cracking.
///
/// Returns `Ok(None)` when a search runs out of keys. Every call reads its
/// own `config`, nothing is kept between calls.
/// ```rust
/// use affinecrack::{perform_cracking, Strategy};
/// use affinecrack::cipher::encrypt_bytes;
/// use affinecrack::config::Config;
///
/// let mut config = Config::default();
/// config.api_mode = true;
/// let ciphertext = encrypt_bytes(3, 7, &[0xFF, 0xD8, 0xFF, 0xE0]);
/// let result = perform_cracking(&ciphertext, &Strategy::ExhaustiveKey, &config).unwrap();
/// let result = result.unwrap();
/// assert_eq!(result.plaintext, vec![0xFF, 0xD8, 0xFF, 0xE0]);
/// assert_eq!((result.key.m_inverse, result.key.b), (171, 7));
/// ```
///
/// # Errors
/// Only the known plaintext attack can fail, see
/// [`known_plaintext::analyze_known_plaintext`].
pub fn perform_cracking(
    ciphertext: &[u8],
    strategy: &Strategy,
    config: &Config,
) -> Result<Option<CrackResult>, AffineError> {
    info!("Cracking {} bytes with {}", ciphertext.len(), strategy.name());

    let (key, known_plaintext, elapsed) = match strategy {
        Strategy::BruteForce | Strategy::ExhaustiveKey => {
            let searcher = if *strategy == Strategy::BruteForce {
                SearcherTypes::SearchBruteForce(Searcher::<BruteForce>::new())
            } else {
                SearcherTypes::SearchExhaustiveKey(Searcher::<ExhaustiveKey>::new())
            };
            let (found, elapsed) = timer::time(|| searcher.search(ciphertext, &config.signature));
            cli_pretty_printing::search_finished(config, searcher.get_name(), elapsed, None);

            match found {
                Some(key) => (key, None, elapsed),
                None => {
                    cli_pretty_printing::key_unknown(config, searcher.get_name());
                    return Ok(None);
                }
            }
        }
        Strategy::KnownPlaintext {
            plaintext,
            ciphertext: known_ciphertext,
        } => {
            let (solved, elapsed) = timer::time(|| {
                analyze_known_plaintext(plaintext, known_ciphertext, config.sample_selection)
            });
            let solved = solved?;
            cli_pretty_printing::search_finished(config, strategy.name(), elapsed, Some(&solved));
            if !solved.is_exact() {
                cli_pretty_printing::multiplier_is_ambiguous(config, &solved);
            }
            (solved.key(), Some(solved), elapsed)
        }
    };

    debug!("Decrypting with {}", key);
    Ok(Some(CrackResult {
        strategy: strategy.name(),
        key,
        known_plaintext,
        plaintext: key.decrypt_bytes(ciphertext),
        elapsed,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::signature::Signature;
    use crate::cipher::encrypt_bytes;

    fn quiet_config() -> Config {
        Config {
            api_mode: true,
            ..Config::default()
        }
    }

    #[test]
    fn brute_force_decrypts_whole_buffer() {
        let plaintext = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
        let ciphertext = encrypt_bytes(3, 7, &plaintext);
        let result = perform_cracking(&ciphertext, &Strategy::BruteForce, &quiet_config())
            .unwrap()
            .unwrap();
        assert_eq!(result.key, KeyCandidate::new(171, 7));
        assert_eq!(result.plaintext, plaintext);
        assert_eq!(result.strategy, "brute force");
        assert!(result.known_plaintext.is_none());
    }

    #[test]
    fn search_without_key_returns_none() {
        let result = perform_cracking(&[1, 1, 1], &Strategy::ExhaustiveKey, &quiet_config());
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn known_plaintext_decrypts() {
        let plaintext = b"known header bytes".to_vec();
        let known_ciphertext = encrypt_bytes(45, 200, &plaintext);
        let ciphertext = encrypt_bytes(45, 200, b"the secret message");
        let strategy = Strategy::KnownPlaintext {
            plaintext,
            ciphertext: known_ciphertext,
        };
        let result = perform_cracking(&ciphertext, &strategy, &quiet_config())
            .unwrap()
            .unwrap();
        assert_eq!(result.plaintext, b"the secret message");
        let solved = result.known_plaintext.unwrap();
        assert_eq!((solved.m, solved.b), (45, 200));
    }

    #[test]
    fn known_plaintext_errors_propagate() {
        let strategy = Strategy::KnownPlaintext {
            plaintext: vec![1, 2, 3],
            ciphertext: vec![1],
        };
        let result = perform_cracking(&[0, 0], &strategy, &quiet_config());
        assert!(matches!(result, Err(AffineError::LengthMismatch { .. })));
    }

    #[test]
    fn each_call_uses_its_own_config() {
        let ciphertext = encrypt_bytes(3, 7, &[0xFF, 0xD8, 0x89, 0x50]);
        let first = perform_cracking(&ciphertext, &Strategy::BruteForce, &quiet_config())
            .unwrap()
            .unwrap();
        assert_eq!(first.key, KeyCandidate::new(171, 7));

        let png = Config {
            api_mode: false,
            signature: Signature::new(0x89, 0x50),
            ..Config::default()
        };
        let second = perform_cracking(&ciphertext[2..], &Strategy::BruteForce, &png)
            .unwrap()
            .unwrap();
        assert_eq!(&second.plaintext[..], &[0x89, 0x50][..]);
    }

    #[test]
    fn empty_ciphertext_is_not_found() {
        let result = perform_cracking(&[], &Strategy::BruteForce, &quiet_config());
        assert_eq!(result, Ok(None));
    }
}
