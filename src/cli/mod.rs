use std::path::PathBuf;

use crate::checkers::signature::Signature;
use crate::cli_pretty_printing::config_saved;
use crate::config::{get_config_file_path, load_config, save_config, Config};
use crate::error::CrackerError;
use crate::known_plaintext::SampleSelection;
use crate::storage::read_bytes;
use crate::Strategy;
/// This doc string acts as a help message when the uses run '--help' in CLI mode
/// as do all doc strings on fields
use clap::{Parser, ValueEnum};
use log::trace;

/// The attacks selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Try every (m^-1, b) pair
    BruteForce,
    /// Try every (m^-1, b) pair with m^-1 coprime with 256
    ExhaustiveKey,
    /// Solve for the key from a known plaintext/ciphertext pair of files
    KnownPlaintext,
}

/// The struct for Clap CLI arguments
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
pub struct Opts {
    /// The encrypted file
    #[arg(short, long)]
    ciphertext: PathBuf,

    /// Where to write the decrypted file.
    /// Defaults to `default_output` from the config, `decrypted` otherwise.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Which attack to run
    #[arg(short, long, value_enum, default_value_t = StrategyArg::BruteForce)]
    strategy: StrategyArg,

    /// File holding plaintext known to be encrypted in `--known-ciphertext`
    #[arg(long, requires = "known_ciphertext")]
    known_plaintext: Option<PathBuf>,

    /// The encryption of `--known-plaintext`, byte for byte
    #[arg(long, requires = "known_plaintext")]
    known_ciphertext: Option<PathBuf>,

    /// The two first bytes of the plaintext as hex. Default is FFD8 (JPEG)
    #[arg(long)]
    signature: Option<String>,

    /// Pick the known plaintext samples at random instead of in order
    #[arg(long)]
    random_samples: bool,

    /// Run in API mode, this will not print the results for humans.
    #[arg(short, long)]
    api_mode: bool,

    /// A TOML config file. Default is ~/.affinecrack/config.toml if it exists
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the resulting settings to the config file (`--config` or the default one)
    #[arg(long)]
    save_config: bool,

    /// A level of verbosity, and can be used multiple times
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// What the binary needs besides the config: the files and the attack
#[derive(Debug)]
pub struct CliInput {
    /// The encrypted file
    pub ciphertext: PathBuf,
    /// Where the plaintext goes
    pub output: PathBuf,
    /// The attack, with the known plaintext already loaded
    pub strategy: Strategy,
}

/// Parse CLI Arguments turns a Clap Opts struct, seen above
/// Into a library Struct for use within the program
/// The library struct can be found in the [config](../config) folder.
///
/// # Errors
/// Returns an error if the config file or the known plaintext files cannot be
/// read, or if the arguments do not make sense together.
pub fn parse_cli_args() -> Result<(CliInput, Config), CrackerError> {
    let opts: Opts = Opts::parse();
    let min_log_level = match opts.verbose {
        0 => "Warn",
        1 => "Info",
        2 => "Debug",
        _ => "Trace",
    };
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, min_log_level),
    );

    trace!("Program was called with CLI 😉");
    trace!("Parsed the arguments {:?}", opts);

    let file_config = load_config(opts.config.as_deref())?;
    let config = cli_args_into_config_struct(&opts, file_config)?;
    if opts.save_config {
        let path = config_save_path(&opts)?;
        save_config(&config, &path)?;
        config_saved(&config, &path);
    }
    let strategy = load_strategy(&opts)?;
    let output = opts
        .output
        .clone()
        .unwrap_or_else(|| config.default_output.clone());

    Ok((
        CliInput {
            ciphertext: opts.ciphertext,
            output,
            strategy,
        },
        config,
    ))
}

/// Turns our CLI arguments into a config struct, flags win over the file
fn cli_args_into_config_struct(opts: &Opts, file_config: Config) -> Result<Config, CrackerError> {
    let signature = match &opts.signature {
        Some(hex) => hex.parse::<Signature>()?,
        None => file_config.signature,
    };

    Ok(Config {
        // The logger is already running by the time the file is read
        verbose: opts.verbose,
        api_mode: opts.api_mode || file_config.api_mode,
        signature,
        sample_selection: if opts.random_samples {
            SampleSelection::Random
        } else {
            file_config.sample_selection
        },
        default_output: file_config.default_output,
    })
}

/// Where `--save-config` writes to
fn config_save_path(opts: &Opts) -> Result<PathBuf, CrackerError> {
    match &opts.config {
        Some(path) => Ok(path.clone()),
        None => get_config_file_path().ok_or_else(|| {
            CrackerError::Config("no home directory to save the config in".to_string())
        }),
    }
}

/// Builds the strategy, reading the known plaintext files when needed
fn load_strategy(opts: &Opts) -> Result<Strategy, CrackerError> {
    match opts.strategy {
        StrategyArg::BruteForce => Ok(Strategy::BruteForce),
        StrategyArg::ExhaustiveKey => Ok(Strategy::ExhaustiveKey),
        StrategyArg::KnownPlaintext => match (&opts.known_plaintext, &opts.known_ciphertext) {
            (Some(plaintext), Some(ciphertext)) => Ok(Strategy::KnownPlaintext {
                plaintext: read_bytes(plaintext)?,
                ciphertext: read_bytes(ciphertext)?,
            }),
            _ => Err(CrackerError::Config(
                "the known-plaintext strategy needs both --known-plaintext and --known-ciphertext"
                    .to_string(),
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Opts {
        Opts::try_parse_from(std::iter::once("affinecrack").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_brute_force() {
        let opts = parse(&["-c", "cipher.jpeg"]);
        assert_eq!(opts.strategy, StrategyArg::BruteForce);
        assert_eq!(load_strategy(&opts).unwrap(), Strategy::BruteForce);
    }

    #[test]
    fn ciphertext_is_required() {
        assert!(Opts::try_parse_from(["affinecrack"]).is_err());
    }

    #[test]
    fn known_plaintext_files_come_in_pairs() {
        let result = Opts::try_parse_from([
            "affinecrack",
            "-c",
            "cipher.jpeg",
            "--known-plaintext",
            "known_plaintext",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn known_plaintext_strategy_without_files() {
        let opts = parse(&["-c", "cipher.jpeg", "-s", "known-plaintext"]);
        assert!(matches!(load_strategy(&opts), Err(CrackerError::Config(_))));
    }

    #[test]
    fn flags_override_config_file() {
        let opts = parse(&[
            "-c",
            "cipher.png",
            "--signature",
            "8950",
            "--random-samples",
            "-a",
            "-vv",
        ]);
        let config = cli_args_into_config_struct(&opts, Config::default()).unwrap();
        assert_eq!(config.signature, Signature::new(0x89, 0x50));
        assert_eq!(config.sample_selection, SampleSelection::Random);
        assert!(config.api_mode);
        assert_eq!(config.verbose, 2);
    }

    #[test]
    fn config_file_used_without_flags() {
        let opts = parse(&["-c", "cipher.gif"]);
        let file_config = Config {
            signature: Signature::new(0x47, 0x49),
            default_output: PathBuf::from("from_file.gif"),
            ..Config::default()
        };
        let config = cli_args_into_config_struct(&opts, file_config).unwrap();
        assert_eq!(config.signature, Signature::new(0x47, 0x49));
        assert_eq!(config.default_output, PathBuf::from("from_file.gif"));
    }

    #[test]
    fn config_is_saved_where_it_is_read() {
        let opts = parse(&["-c", "cipher.jpeg", "--config", "my.toml", "--save-config"]);
        assert!(opts.save_config);
        assert_eq!(config_save_path(&opts).unwrap(), PathBuf::from("my.toml"));
    }

    #[test]
    fn bad_signature_flag() {
        let opts = parse(&["-c", "cipher.jpeg", "--signature", "nothex"]);
        assert!(cli_args_into_config_struct(&opts, Config::default()).is_err());
    }
}
