//! Validated entropy and its SHA-256 checksum.

use crate::{
    bits::BitBuffer,
    errors::Bip39Error,
    utils::{checksum_bit_len, is_invalid_entropy_bit_len},
};
use alloc::vec::Vec;
use sha2::{Digest, Sha256};

/// Entropy size produced by default: 256 bits, a 24 word sentence.
pub const DEFAULT_ENTROPY_BITS: usize = 256;
/// Largest size whose checksum still fits inside one SHA-256 output.
pub const MAX_ENTROPY_BITS: usize = 8192;

/// Entropy whose bit length is a positive multiple of 32.
///
/// The bytes never show up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "zeroize", derive(zeroize::Zeroize, zeroize::ZeroizeOnDrop))]
pub struct Entropy {
    bytes: Vec<u8>,
}

impl Entropy {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Bip39Error> {
        Self::from_vec(bytes.to_vec())
    }

    pub fn from_vec(bytes: Vec<u8>) -> Result<Self, Bip39Error> {
        let nb_bits = bytes.len() * 8;
        if is_invalid_entropy_bit_len(nb_bits) {
            return Err(Bip39Error::InvalidEntropyLength(nb_bits));
        }
        Ok(Self { bytes })
    }

    /// For bytes whose length was already checked, e.g. recovered from a parsed mnemonic.
    pub(crate) fn from_validated(bytes: Vec<u8>) -> Self {
        debug_assert!(!is_invalid_entropy_bit_len(bytes.len() * 8));
        Self { bytes }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    #[inline]
    pub fn checksum_bit_len(&self) -> usize {
        checksum_bit_len(self.bit_len())
    }

    /// Top `checksum_bit_len()` bits of SHA-256 over the raw bytes.
    pub fn checksum(&self) -> BitBuffer {
        checksum(&self.bytes)
    }

    /// `entropy || checksum`, ready to be cut into 11-bit word indices.
    pub fn to_bits(&self) -> BitBuffer {
        let mut bits = BitBuffer::with_capacity(self.bit_len() + self.checksum_bit_len());
        bits.extend(&BitBuffer::from_bytes(&self.bytes));
        bits.extend(&self.checksum());
        bits
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl core::fmt::Debug for Entropy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Entropy")
            .field("bits", &self.bit_len())
            .finish_non_exhaustive()
    }
}

/// Checksum of `entropy`, taken bit by bit from the most significant end of
/// the hash, so widths that are not a multiple of 8 are not rounded to bytes.
pub(crate) fn checksum(entropy: &[u8]) -> BitBuffer {
    let hash = Sha256::digest(entropy);
    BitBuffer::from_bytes(&hash).prefix(checksum_bit_len(entropy.len() * 8))
}
