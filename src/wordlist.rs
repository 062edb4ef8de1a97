//! The 2048 entry index → word table.

use crate::{
    english::ENGLISH_WORDS,
    errors::{Bip39Error, WordlistError},
    mnemonic::MAX_WORDS_DICT,
};
use alloc::collections::BTreeSet;

/// A validated word list: exactly 2048 unique words, none empty, none
/// containing whitespace.
///
/// `Copy` and read-only, so one list can serve any number of concurrent
/// encoders.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Wordlist<'a> {
    words: &'a [&'a str; MAX_WORDS_DICT],
    sorted: bool,
}

impl Wordlist<'static> {
    /// The standard English list.
    pub fn english() -> Self {
        Wordlist {
            words: &ENGLISH_WORDS,
            sorted: true,
        }
    }
}

impl<'a> Wordlist<'a> {
    pub fn new(words: &'a [&'a str]) -> Result<Self, Bip39Error> {
        let words: &'a [&'a str; MAX_WORDS_DICT] = words
            .try_into()
            .map_err(|_| WordlistError::WrongSize(words.len()))?;

        let mut seen = BTreeSet::new();
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(WordlistError::Malformed(i).into());
            }
            if !seen.insert(*word) {
                return Err(WordlistError::Duplicate(i).into());
            }
        }

        let sorted = words.windows(2).all(|pair| pair[0] < pair[1]);
        tracing::debug!(sorted, "word list validated");

        Ok(Wordlist { words, sorted })
    }

    /// Word at an 11-bit index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 2048`.
    #[inline]
    pub fn word(&self, index: u16) -> &'a str {
        self.words[usize::from(index)]
    }

    /// Index of `word`, if present.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        let position = if self.sorted {
            self.words.binary_search(&word).ok()
        } else {
            self.words.iter().position(|w| *w == word)
        };
        // 2048 entries, so every position fits in 11 bits.
        position.map(|i| i as u16)
    }
}

impl core::fmt::Debug for Wordlist<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Wordlist")
            .field("first", &self.words[0])
            .field("last", &self.words[MAX_WORDS_DICT - 1])
            .field("sorted", &self.sorted)
            .finish()
    }
}

#[cfg(test)]
mod tests_wordlist {
    use super::*;
    use alloc::{format, string::String, vec::Vec};

    fn numbered() -> Vec<String> {
        (0..MAX_WORDS_DICT).map(|i| format!("w{i:04}")).collect()
    }

    #[test]
    fn test_english_shape() {
        let list = Wordlist::english();
        assert_eq!(list.word(0), "abandon");
        assert_eq!(list.word(2047), "zoo");
        assert_eq!(list.index_of("art"), Some(102));
        assert_eq!(list.index_of("zoo"), Some(2047));
        assert_eq!(list.index_of("bitcoin"), None);
        assert!(Wordlist::new(&ENGLISH_WORDS).is_ok());
    }

    #[test]
    fn test_rejects_wrong_size() {
        let short = ["a"; 10];
        assert_eq!(
            Wordlist::new(&short),
            Err(Bip39Error::InvalidWordlist(WordlistError::WrongSize(10)))
        );
        let long: Vec<&str> = ENGLISH_WORDS.iter().copied().chain(["extra"]).collect();
        assert_eq!(
            Wordlist::new(&long),
            Err(Bip39Error::InvalidWordlist(WordlistError::WrongSize(2049)))
        );
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut words: Vec<&str> = ENGLISH_WORDS.to_vec();
        words[1500] = "abandon";
        assert_eq!(
            Wordlist::new(&words),
            Err(Bip39Error::InvalidWordlist(WordlistError::Duplicate(1500)))
        );
    }

    #[test]
    fn test_rejects_malformed_words() {
        let mut words: Vec<&str> = ENGLISH_WORDS.to_vec();
        words[7] = "two words";
        assert_eq!(
            Wordlist::new(&words),
            Err(Bip39Error::InvalidWordlist(WordlistError::Malformed(7)))
        );
        words[7] = "";
        assert_eq!(
            Wordlist::new(&words),
            Err(Bip39Error::InvalidWordlist(WordlistError::Malformed(7)))
        );
    }

    #[test]
    fn test_unsorted_list_lookup() {
        let owned = numbered();
        let mut words: Vec<&str> = owned.iter().map(String::as_str).collect();
        words.swap(0, 2047);
        let list = Wordlist::new(&words).unwrap();
        assert_eq!(list.word(0), "w2047");
        assert_eq!(list.index_of("w2047"), Some(0));
        assert_eq!(list.index_of("w0000"), Some(2047));
        assert_eq!(list.index_of("w0500"), Some(500));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[cfg(feature = "std")]
    #[test]
    fn test_shareable_across_threads() {
        assert_send_sync::<Wordlist<'static>>();

        let list = Wordlist::english();
        let handles: Vec<_> = (0..4u16)
            .map(|i| std::thread::spawn(move || list.word(i * 500)))
            .collect();
        let words: Vec<&str> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(words, ["abandon", "direct", "laptop", "romance"]);
    }
}
