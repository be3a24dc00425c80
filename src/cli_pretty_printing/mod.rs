//! By having all of our print statements in one file it allows us to align what they look like
//! and make sure each one is up to our standards.
//! Every function here takes the config of the current run and is silent in
//! API mode, except for fatal errors.


use std::fmt::Display;
use std::path::Path;
use std::time::Duration;

use ansi_term::Colour::{Red, Yellow};

use crate::config::Config;
use crate::error::CrackerError;
use crate::known_plaintext::KnownPlaintextKey;
use crate::timer::format_seconds;
use crate::CrackResult;

/// The line reporting how long the key recovery took.
pub fn format_elapsed(strategy: &str, elapsed: Duration, key: Option<&KnownPlaintextKey>) -> String {
    match key {
        Some(key) => format!(
            "Affine cryptanalysis with {} took {}, with {}",
            strategy,
            format_seconds(elapsed),
            key
        ),
        None => format!(
            "Affine decryption with {} took {}",
            strategy,
            format_seconds(elapsed)
        ),
    }
}

/// Prints a line unless the run is in API mode. Returns whether it printed.
fn print_for_humans(config: &Config, line: impl Display) -> bool {
    if config.api_mode {
        return false;
    }
    println!("{}", line);
    true
}

/// Printed as soon as a strategy finishes, whether or not it found the key.
pub fn search_finished(
    config: &Config,
    strategy: &str,
    elapsed: Duration,
    key: Option<&KnownPlaintextKey>,
) {
    print_for_humans(config, format_elapsed(strategy, elapsed, key));
}

/// Tells the user `m` was only partly determined by the known plaintext.
pub fn multiplier_is_ambiguous(config: &Config, key: &KnownPlaintextKey) {
    let modulus = crate::cipher::MODULUS / key.reduction;
    print_for_humans(
        config,
        Yellow.paint(format!(
            "⚠️ m is only known modulo {}, other keys with m ≡ {} (mod {}) fit the samples too.",
            modulus, key.m, modulus
        )),
    );
}

/// The output function is used to print the output of the program.
/// If the API mode is on, it will not print.
pub fn program_exiting_successful_decryption(config: &Config, result: &CrackResult, output: &Path) {
    print_for_humans(
        config,
        format!(
            "The key is {} (found with {}).\nThe plaintext has been written to {}",
            Yellow.bold().paint(result.key.to_string()),
            Yellow.bold().paint(result.strategy),
            Yellow.bold().paint(output.display().to_string())
        ),
    );
}

/// When the search ran out of keys, print this message
pub fn key_unknown(config: &Config, strategy: &str) {
    print_for_humans(
        config,
        format!(
            "⛔️ Affine {} failed: key unknown after trying.\n\
             Check that the signature matches the format of the encrypted file.",
            strategy
        ),
    );
}

/// Confirms where the config was saved.
pub fn config_saved(config: &Config, path: &Path) {
    print_for_humans(
        config,
        format!("Config saved to {}", Yellow.paint(path.display().to_string())),
    );
}

/// Errors that stop the program are always printed, on stderr.
pub fn fatal_error(error: &CrackerError) {
    eprintln!("{}", Red.bold().paint(format!("Error: {}", error)));
}
