use affinecrack::cli::parse_cli_args;
use affinecrack::cli_pretty_printing::{fatal_error, program_exiting_successful_decryption};
use affinecrack::error::CrackerError;
use affinecrack::perform_cracking;
use affinecrack::storage::{read_bytes, write_bytes};

use human_panic::setup_panic;

fn main() {
    setup_panic!();

    if let Err(error) = run() {
        fatal_error(&error);
        std::process::exit(1);
    }
}

/// Turns CLI arguments into a library call and writes the plaintext out
fn run() -> Result<(), CrackerError> {
    let (input, config) = parse_cli_args()?;
    let ciphertext = read_bytes(&input.ciphertext)?;

    // A search running out of keys has already been reported, there is nothing to write
    if let Some(result) = perform_cracking(&ciphertext, &input.strategy, &config)? {
        write_bytes(&input.output, &result.plaintext)?;
        program_exiting_successful_decryption(&config, &result, &input.output);
    }
    Ok(())
}
