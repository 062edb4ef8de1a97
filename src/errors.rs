use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Bip39Error {
    #[error("secure random source unavailable: {0}")]
    EntropySourceUnavailable(alloc::string::String),

    #[error("entropy was not a positive multiple of 32 bits up to 8192 bits: {0} bits")]
    InvalidEntropyLength(usize),

    #[error("invalid word list: {0}")]
    InvalidWordlist(WordlistError),

    #[error("Invalid word count: {0}")]
    BadWordCount(usize),

    #[error("mnemonic contains an unknown word (word {0})")]
    UnknownWord(usize),

    #[error("the mnemonic has an invalid checksum")]
    InvalidChecksum,
}

/// Defects found while validating a caller supplied word list.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WordlistError {
    #[error("expected 2048 words, got {0}")]
    WrongSize(usize),

    #[error("word {0} duplicates an earlier entry")]
    Duplicate(usize),

    #[error("word {0} is empty or contains whitespace")]
    Malformed(usize),
}

impl From<WordlistError> for Bip39Error {
    fn from(error: WordlistError) -> Self {
        Bip39Error::InvalidWordlist(error)
    }
}
