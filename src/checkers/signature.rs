use std::fmt;

use data_encoding::HEXUPPER_PERMISSIVE;
use serde::{Deserialize, Serialize};

use crate::cipher::KeyCandidate;
use crate::error::CrackerError;

/// A two byte magic header, the first bytes every file of some format starts with.
///
/// We know what kind of file was encrypted, so a key is accepted as soon as it
/// decrypts the ciphertext header into this signature.
/// ```rust
/// use affinecrack::checkers::signature::Signature;
/// let jpeg: Signature = "ffd8".parse().unwrap();
/// assert_eq!(jpeg, Signature::JPEG);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Signature {
    /// The magic bytes
    pub bytes: [u8; 2],
}

impl Signature {
    /// JPEG files start with `FF D8`.
    /// See <https://www.garykessler.net/library/file_sigs.html>
    pub const JPEG: Signature = Signature {
        bytes: [0xFF, 0xD8],
    };

    /// Creates a signature from its two bytes
    pub fn new(first: u8, second: u8) -> Self {
        Signature {
            bytes: [first, second],
        }
    }

    /// Does `key` turn the first two bytes of `ciphertext` into this signature?
    ///
    /// Ciphertexts shorter than the signature never match.
    pub fn matches(&self, key: &KeyCandidate, ciphertext: &[u8]) -> bool {
        match ciphertext {
            [first, second, ..] => {
                key.decrypt_byte(*first) == self.bytes[0]
                    && key.decrypt_byte(*second) == self.bytes[1]
            }
            _ => false,
        }
    }
}

impl Default for Signature {
    fn default() -> Self {
        Signature::JPEG
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", HEXUPPER_PERMISSIVE.encode(&self.bytes))
    }
}

impl std::str::FromStr for Signature {
    type Err = CrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let decoded = HEXUPPER_PERMISSIVE
            .decode(compact.as_bytes())
            .map_err(|e| CrackerError::Config(format!("Invalid signature '{}': {}", s, e)))?;
        match decoded.as_slice() {
            [first, second] => Ok(Signature::new(*first, *second)),
            _ => Err(CrackerError::Config(format!(
                "Invalid signature '{}': expected exactly 2 bytes, got {}",
                s,
                decoded.len()
            ))),
        }
    }
}

impl TryFrom<String> for Signature {
    type Error = CrackerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Signature> for String {
    fn from(signature: Signature) -> Self {
        signature.to_string()
    }
}
