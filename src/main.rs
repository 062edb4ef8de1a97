//! bip39gen CLI
//!
//! With no arguments, prints a fresh 24 word English mnemonic to stdout with
//! no trailing newline. Logs go to stderr, filtered by `RUST_LOG`.

use std::{
    io::{self, Write},
    process,
};

use bip39gen::{Bip39Error, Entropy, EntropyProvider, Mnemonic, Wordlist};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bip39gen", version, about = "Generate and verify BIP39 mnemonic sentences")]
struct Cli {
    /// Sentence length in words (a multiple of 3)
    #[arg(short, long, default_value_t = 24)]
    words: usize,

    /// Encode this hex entropy instead of drawing fresh random bytes
    #[arg(long, value_name = "HEX", conflicts_with = "words")]
    entropy: Option<String>,

    /// Verify a sentence and print the entropy it encodes as hex
    #[arg(long, value_name = "SENTENCE", conflicts_with_all = ["words", "entropy"])]
    check: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Mnemonic(#[from] Bip39Error),
    #[error("entropy is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn run(cli: &Cli) -> Result<String, CliError> {
    let wordlist = Wordlist::english();

    if let Some(sentence) = &cli.check {
        let entropy = bip39gen::decode(sentence, &wordlist)?;
        info!(bits = entropy.bit_len(), "checksum verified");
        return Ok(hex::encode(entropy.as_bytes()));
    }

    if let Some(hex_entropy) = &cli.entropy {
        let entropy = Entropy::from_vec(hex::decode(hex_entropy.trim())?)?;
        return Ok(Mnemonic::new(wordlist, &entropy).to_string());
    }

    let mut provider = EntropyProvider::os();
    let mnemonic = Mnemonic::generate(&mut provider, wordlist, cli.words)?;
    debug!(words = mnemonic.word_count(), "mnemonic generated");
    Ok(mnemonic.to_string())
}

fn write_stdout(output: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    debug!(version = bip39gen::VERSION, words = cli.words, "starting");

    if let Err(e) = run(&cli).and_then(|output| write_stdout(&output)) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests_main {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bip39gen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_args_defaults() {
        let cli = cli(&[]);
        assert_eq!(cli.words, 24);
        assert!(cli.entropy.is_none());
        assert!(cli.check.is_none());
        let sentence = run(&cli).unwrap();
        assert_eq!(sentence.split(' ').count(), 24);
        assert!(!sentence.ends_with('\n'));
    }

    #[test]
    fn test_word_count_flag() {
        let sentence = run(&cli(&["--words", "12"])).unwrap();
        assert_eq!(sentence.split(' ').count(), 12);
        assert!(matches!(
            run(&cli(&["-w", "13"])),
            Err(CliError::Mnemonic(Bip39Error::BadWordCount(13)))
        ));
    }

    #[test]
    fn test_entropy_flag() {
        let sentence = run(&cli(&["--entropy", "00000000000000000000000000000000"])).unwrap();
        assert_eq!(
            sentence,
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
        );
        assert!(matches!(run(&cli(&["--entropy", "zz"])), Err(CliError::Hex(_))));
        assert!(matches!(
            run(&cli(&["--entropy", "0000"])),
            Err(CliError::Mnemonic(Bip39Error::InvalidEntropyLength(16)))
        ));
    }

    #[test]
    fn test_check_flag() {
        let encoded = run(&cli(&[
            "--check",
            "legal winner thank year wave sausage worth useful legal winner thank yellow",
        ]))
        .unwrap();
        assert_eq!(encoded, "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f");
        assert!(matches!(
            run(&cli(&["--check", "legal winner thank year wave sausage worth useful legal winner thank year"])),
            Err(CliError::Mnemonic(Bip39Error::InvalidChecksum))
        ));
    }

    #[test]
    fn test_conflicting_flags_rejected() {
        assert!(Cli::try_parse_from(["bip39gen", "--words", "12", "--entropy", "00"]).is_err());
    }
}
