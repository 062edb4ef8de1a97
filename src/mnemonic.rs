use crate::{
    bits::BitBuffer,
    entropy::{checksum, Entropy},
    errors::Bip39Error,
    rng::EntropyProvider,
    utils::{entropy_bits_for, is_invalid_word_count, word_count_for},
    wordlist::Wordlist,
};
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{fmt, str::FromStr};
use rand_core::TryCryptoRng;

pub const MIN_NB_WORDS: usize = 3;
pub const MAX_NB_WORDS: usize = 768;
pub const MAX_WORDS_DICT: usize = 2048;
/// Width of one word index.
pub const WORD_BITS: usize = 11;

#[derive(PartialEq, Eq, Clone)]
#[cfg_attr(feature = "zeroize", derive(zeroize::Zeroize, zeroize::ZeroizeOnDrop))]
pub struct Mnemonic<'a> {
    #[cfg_attr(feature = "zeroize", zeroize(skip))]
    wordlist: Wordlist<'a>,
    indicators: Vec<u16>,
}

pub struct MnemonicIter<'a, 'b> {
    mnemonic: &'b Mnemonic<'a>,
    position: usize,
}

impl<'a, 'b> Iterator for MnemonicIter<'a, 'b> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let word_index = *self.mnemonic.indicators.get(self.position)?;
        self.position += 1;
        Some(self.mnemonic.wordlist.word(word_index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.mnemonic.indicators.len() - self.position;
        (left, Some(left))
    }
}

impl ExactSizeIterator for MnemonicIter<'_, '_> {}

impl<'a> fmt::Display for Mnemonic<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, word) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Mnemonic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count())
            .finish_non_exhaustive()
    }
}

impl<'a> Mnemonic<'a> {
    /// Encodes validated entropy.
    ///
    /// The `entropy || checksum` string is cut into 11-bit groups from the
    /// most significant end; each group indexes one word.
    pub fn new(wordlist: Wordlist<'a>, entropy: &Entropy) -> Self {
        let bits = entropy.to_bits();
        let word_count = word_count_for(entropy.bit_len());

        let indicators = (0..word_count)
            // 11 bits always fit in a u16
            .map(|i| bits.extract_bits(i * WORD_BITS, WORD_BITS) as u16)
            .collect();

        tracing::debug!(entropy_bits = entropy.bit_len(), word_count, "entropy encoded");

        Mnemonic {
            wordlist,
            indicators,
        }
    }

    pub fn from_entropy(wordlist: Wordlist<'a>, entropy: &[u8]) -> Result<Self, Bip39Error> {
        let entropy = Entropy::from_bytes(entropy)?;
        Ok(Self::new(wordlist, &entropy))
    }

    /// Draws `word_count * 32 / 3` bits from `provider` and encodes them.
    pub fn generate<R: TryCryptoRng>(
        provider: &mut EntropyProvider<R>,
        wordlist: Wordlist<'a>,
        word_count: usize,
    ) -> Result<Self, Bip39Error> {
        if is_invalid_word_count(word_count) {
            return Err(Bip39Error::BadWordCount(word_count));
        }

        let entropy = provider.generate_bits(entropy_bits_for(word_count))?;

        Ok(Self::new(wordlist, &entropy))
    }

    /// Parses a sentence and verifies its embedded checksum.
    ///
    /// Words may be separated by any whitespace. Words are matched exactly;
    /// no case folding or Unicode normalization is applied.
    pub fn parse_in(wordlist: Wordlist<'a>, sentence: &str) -> Result<Self, Bip39Error> {
        let word_count = sentence.split_whitespace().count();
        if is_invalid_word_count(word_count) {
            return Err(Bip39Error::BadWordCount(word_count));
        }

        let indicators = sentence
            .split_whitespace()
            .enumerate()
            .map(|(i, word)| wordlist.index_of(word).ok_or(Bip39Error::UnknownWord(i)))
            .collect::<Result<Vec<u16>, _>>()?;

        let mnemonic = Mnemonic {
            wordlist,
            indicators,
        };

        let bits = mnemonic.to_bits();
        let entropy_bits = entropy_bits_for(word_count);
        let entropy = bits.prefix(entropy_bits);
        if checksum(entropy.as_bytes()) != bits.suffix(entropy_bits) {
            tracing::warn!(word_count, "mnemonic checksum mismatch");
            return Err(Bip39Error::InvalidChecksum);
        }

        tracing::debug!(entropy_bits, word_count, "mnemonic decoded");
        Ok(mnemonic)
    }

    /// Recovers the entropy the sentence encodes.
    pub fn to_entropy(&self) -> Entropy {
        let entropy_bits = entropy_bits_for(self.word_count());
        Entropy::from_validated(self.to_bits().prefix(entropy_bits).as_bytes().to_vec())
    }

    pub fn iter<'b>(&'b self) -> MnemonicIter<'a, 'b> {
        MnemonicIter {
            mnemonic: self,
            position: 0,
        }
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.indicators.len()
    }

    #[inline]
    pub fn indices(&self) -> &[u16] {
        &self.indicators
    }

    fn to_bits(&self) -> BitBuffer {
        let mut bits = BitBuffer::with_capacity(self.indicators.len() * WORD_BITS);
        for &index in &self.indicators {
            bits.append_bits(u32::from(index), WORD_BITS);
        }
        bits
    }
}

impl FromStr for Mnemonic<'static> {
    type Err = Bip39Error;

    /// Parses against the English list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mnemonic::parse_in(Wordlist::english(), s)
    }
}

/// Encodes `entropy` into a sentence of single-space separated words.
pub fn encode(entropy: &[u8], wordlist: &Wordlist<'_>) -> Result<String, Bip39Error> {
    Ok(Mnemonic::from_entropy(*wordlist, entropy)?.to_string())
}

/// Inverse of [`encode`], failing with [`Bip39Error::InvalidChecksum`] when the
/// embedded checksum does not match the recovered entropy.
pub fn decode(sentence: &str, wordlist: &Wordlist<'_>) -> Result<Entropy, Bip39Error> {
    Ok(Mnemonic::parse_in(*wordlist, sentence)?.to_entropy())
}

#[cfg(test)]
mod tests_mnemonic {
    use super::*;
    use alloc::{format, vec};
    use rand::{rngs::StdRng, SeedableRng};

    const ZERO_256: &str = "abandon abandon abandon abandon abandon abandon abandon abandon \
        abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon \
        abandon abandon abandon abandon art";

    fn numbered() -> Vec<String> {
        (0..MAX_WORDS_DICT).map(|i| format!("w{i}")).collect()
    }

    #[test]
    fn test_all_zero_256_fixture() {
        let sentence = encode(&[0u8; 32], &Wordlist::english()).unwrap();
        assert_eq!(sentence, ZERO_256);
        assert_eq!(sentence.split(' ').count(), 24);
    }

    #[test]
    fn test_all_zero_128() {
        let mnemonic = Mnemonic::from_entropy(Wordlist::english(), &[0u8; 16]).unwrap();
        assert_eq!(mnemonic.word_count(), 12);
        assert_eq!(
            mnemonic.to_string(),
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
        );
    }

    #[test]
    fn test_index_bounds_map_to_first_and_last_word() {
        let zeros = Mnemonic::from_entropy(Wordlist::english(), &[0u8; 32]).unwrap();
        assert_eq!(zeros.indices()[0], 0);
        assert_eq!(zeros.iter().next(), Some("abandon"));

        let ones = Mnemonic::from_entropy(Wordlist::english(), &[0xFF; 32]).unwrap();
        assert_eq!(ones.indices()[0], 2047);
        assert_eq!(ones.iter().next(), Some("zoo"));
    }

    #[test]
    fn test_custom_wordlist_indices() {
        let owned = numbered();
        let words: Vec<&str> = owned.iter().map(String::as_str).collect();
        let list = Wordlist::new(&words).unwrap();

        // 0x00 0x20 0x00 0x00: indices 1, 0, then 10 zero bits and one checksum bit.
        let mnemonic = Mnemonic::from_entropy(list, &[0x00, 0x20, 0x00, 0x00]).unwrap();
        assert_eq!(mnemonic.word_count(), 3);
        assert_eq!(mnemonic.indices()[0], 1);
        assert_eq!(mnemonic.indices()[1], 0);
        assert!(mnemonic.indices()[2] <= 1);
        assert!(mnemonic.to_string().starts_with("w1 w0 w"));
    }

    #[test]
    fn test_display_single_spaces() {
        let sentence = Mnemonic::from_entropy(Wordlist::english(), &[0x7F; 16])
            .unwrap()
            .to_string();
        assert!(!sentence.contains("  "));
        assert!(!sentence.ends_with(' '));
        assert!(!sentence.ends_with('\n'));
        assert_eq!(sentence.split(' ').count(), 12);
    }

    #[test]
    fn test_rejects_bad_entropy_lengths() {
        for len in [0usize, 1, 15, 17, 31, 33] {
            assert_eq!(
                encode(&vec![0u8; len], &Wordlist::english()),
                Err(Bip39Error::InvalidEntropyLength(len * 8))
            );
        }
    }

    #[test]
    fn test_extended_entropy_eleven_bit_checksum() {
        // 352 bits: the final word is exactly the 11 checksum bits.
        let mnemonic = Mnemonic::from_entropy(Wordlist::english(), &[0u8; 44]).unwrap();
        assert_eq!(mnemonic.word_count(), 33);
        assert_eq!(mnemonic.indices()[32], 1067);
        assert_eq!(mnemonic.iter().last(), Some("lyrics"));
        assert_eq!(mnemonic.to_entropy().as_bytes(), &[0u8; 44]);
    }

    #[test]
    fn test_smallest_entropy() {
        let sentence = encode(&[0u8; 4], &Wordlist::english()).unwrap();
        assert_eq!(sentence, "abandon abandon ability");
    }

    #[test]
    fn test_parse_roundtrip() {
        let mnemonic: Mnemonic = ZERO_256.parse().unwrap();
        assert_eq!(mnemonic.word_count(), 24);
        assert_eq!(mnemonic.to_entropy().as_bytes(), &[0u8; 32]);
        assert_eq!(mnemonic.to_string(), ZERO_256);
    }

    #[test]
    fn test_parse_accepts_loose_whitespace() {
        let loose = "  abandon abandon\tabandon abandon abandon abandon abandon abandon \
            abandon abandon\n abandon about ";
        let entropy = decode(loose, &Wordlist::english()).unwrap();
        assert_eq!(entropy.as_bytes(), &[0u8; 16]);
    }

    #[test]
    fn test_parse_bad_word_count() {
        assert_eq!(
            Mnemonic::from_str(""),
            Err(Bip39Error::BadWordCount(0))
        );
        assert_eq!(
            Mnemonic::from_str("abandon abandon abandon abandon"),
            Err(Bip39Error::BadWordCount(4))
        );
    }

    #[test]
    fn test_parse_unknown_word() {
        let sentence = "abandon abandon abandon abandon abandon bitcoin \
            abandon abandon abandon abandon abandon about";
        assert_eq!(Mnemonic::from_str(sentence), Err(Bip39Error::UnknownWord(5)));
        assert_eq!(
            Mnemonic::from_str("Abandon abandon ability"),
            Err(Bip39Error::UnknownWord(0))
        );
    }

    #[test]
    fn test_parse_invalid_checksum() {
        let sentence = "abandon abandon abandon abandon abandon abandon \
            abandon abandon abandon abandon abandon abandon";
        assert_eq!(Mnemonic::from_str(sentence), Err(Bip39Error::InvalidChecksum));
        assert_eq!(
            decode(&ZERO_256.replace("art", "arrow"), &Wordlist::english()),
            Err(Bip39Error::InvalidChecksum)
        );
    }

    #[test]
    fn test_generate_word_counts() {
        let mut provider = EntropyProvider::new(StdRng::seed_from_u64(7));
        for word_count in [12, 15, 18, 21, 24] {
            let mnemonic = Mnemonic::generate(&mut provider, Wordlist::english(), word_count).unwrap();
            assert_eq!(mnemonic.word_count(), word_count);
            assert_eq!(mnemonic.iter().len(), word_count);
            let reparsed: Mnemonic = mnemonic.to_string().parse().unwrap();
            assert_eq!(reparsed, mnemonic);
        }
    }

    #[test]
    fn test_generate_rejects_bad_word_count() {
        let mut provider = EntropyProvider::new(StdRng::seed_from_u64(7));
        assert_eq!(
            Mnemonic::generate(&mut provider, Wordlist::english(), 13).map(|m| m.word_count()),
            Err(Bip39Error::BadWordCount(13))
        );
    }

    #[test]
    fn test_debug_hides_words() {
        let mnemonic = Mnemonic::from_entropy(Wordlist::english(), &[0u8; 16]).unwrap();
        let shown = format!("{:?}", mnemonic);
        assert!(shown.contains("12"));
        assert!(!shown.contains("abandon"));
    }

    #[test]
    fn test_mnemonic_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Mnemonic<'static>>();
    }

    #[cfg(feature = "zeroize")]
    #[test]
    fn test_zeroize_clears_indices() {
        use zeroize::Zeroize;

        let mut mnemonic = Mnemonic::from_entropy(Wordlist::english(), &[0xFF; 32]).unwrap();
        assert_eq!(mnemonic.word_count(), 24);
        mnemonic.zeroize();
        assert!(mnemonic.indices().is_empty());
        assert_eq!(mnemonic.to_string(), "");
    }
}
