use crate::{
    entropy::MAX_ENTROPY_BITS,
    mnemonic::{MAX_NB_WORDS, MIN_NB_WORDS, WORD_BITS},
};

/// Checksum width for `entropy_bits` of entropy.
///
/// The encoder, the decoder and [`crate::entropy::Entropy`] all go through here.
#[inline]
pub const fn checksum_bit_len(entropy_bits: usize) -> usize {
    entropy_bits / 32
}

#[inline]
pub const fn word_count_for(entropy_bits: usize) -> usize {
    (entropy_bits + checksum_bit_len(entropy_bits)) / WORD_BITS
}

/// Inverse of [`word_count_for`]: `word_count * 11` bits hold 32 entropy bits per 33.
#[inline]
pub const fn entropy_bits_for(word_count: usize) -> usize {
    word_count * WORD_BITS * 32 / 33
}

#[inline]
pub fn is_invalid_entropy_bit_len(entropy_bits: usize) -> bool {
    entropy_bits == 0 || entropy_bits % 32 != 0 || entropy_bits > MAX_ENTROPY_BITS
}

#[inline]
pub fn is_invalid_word_count(word_count: usize) -> bool {
    word_count < MIN_NB_WORDS || word_count % 3 != 0 || word_count > MAX_NB_WORDS
}
