//! The Config object is the configuration for the entire program.
//!
//! The CLI builds it from its arguments (on top of an optional TOML file) and
//! hands it to [`crate::perform_cracking`], which passes it down to the
//! printing functions so they can check whether we run in API mode.
//! ```rust
//! use affinecrack::config::parse_config;
//! // Missing keys fall back to the defaults
//! let config = parse_config("api_mode = true").unwrap();
//! assert!(config.api_mode);
//! assert_eq!(config.signature.to_string(), "FFD8");
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::checkers::signature::Signature;
use crate::error::CrackerError;
use crate::known_plaintext::SampleSelection;

/// Directory in the home folder holding the config file
const CONFIG_DIRECTORY: &str = ".affinecrack";
/// Name of the config file
const CONFIG_FILE: &str = "config.toml";

/// Program wide configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// A level of verbosity to determine.
    /// How much we print in logs, set from the `-v` count.
    #[serde(skip)]
    pub verbose: u8,
    /// Run in API mode, nothing is printed for humans
    pub api_mode: bool,
    /// The file signature the plaintext starts with, as hex (`"FFD8"` for JPEG)
    pub signature: Signature,
    /// How the known plaintext attack picks its two pairs
    pub sample_selection: SampleSelection,
    /// Where the plaintext is written when no output is given
    pub default_output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose: 0,
            api_mode: false,
            signature: Signature::JPEG,
            sample_selection: SampleSelection::Sequential,
            default_output: PathBuf::from("decrypted"),
        }
    }
}

/// Path of the config file in the home directory, `~/.affinecrack/config.toml`.
///
/// `None` when the home directory cannot be found.
pub fn get_config_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIRECTORY).join(CONFIG_FILE))
}

/// Parses a config from TOML. Missing keys take their default value.
///
/// # Errors
/// Returns [`CrackerError::Config`] if the TOML is invalid.
pub fn parse_config(contents: &str) -> Result<Config, CrackerError> {
    Ok(toml::from_str(contents)?)
}

/// Serializes a config to TOML.
///
/// # Errors
/// Returns [`CrackerError::Serialization`] if it cannot be serialized.
pub fn config_to_toml(config: &Config) -> Result<String, CrackerError> {
    Ok(toml::to_string(config)?)
}

/// Writes a config as TOML, creating the directory it goes in.
///
/// # Errors
/// Returns an error if the config cannot be serialized or the file written.
pub fn save_config(config: &Config, path: &Path) -> Result<(), CrackerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, config_to_toml(config)?)?;
    debug!("Saved config to {}", path.display());
    Ok(())
}

/// Loads the config.
///
/// An explicit path must exist. Without one the file in the home directory is
/// used if there is one, otherwise the defaults.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<Config, CrackerError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match get_config_file_path() {
            Some(default_path) if default_path.exists() => default_path,
            _ => {
                trace!("No config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    debug!("Loading config from {}", path.display());
    let contents = fs::read_to_string(&path)?;
    parse_config(&contents)
}
