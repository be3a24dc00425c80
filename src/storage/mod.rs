//! Reading the inputs and writing the recovered plaintext.
//!
//! Everything is handled as raw bytes, files are read whole.

use std::fs;
use std::path::Path;

use log::{debug, trace};

use crate::error::CrackerError;

/// Reads the whole file at `path`.
///
/// # Errors
/// Returns [`CrackerError::Io`] if the file cannot be read.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, CrackerError> {
    let bytes = fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Writes `bytes` to `path`, replacing the file if it exists.
///
/// # Errors
/// Returns [`CrackerError::Io`] if the file cannot be written.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), CrackerError> {
    trace!("Writing {} bytes to {}", bytes.len(), path.display());
    fs::write(path, bytes)?;
    Ok(())
}
