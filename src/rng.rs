//! Entropy provider over an injected random source.
//!
//! Any [`TryCryptoRng`] can back the provider: `rand_core::OsRng` in
//! production, a seeded `StdRng` in tests. Source failures surface as
//! [`Bip39Error::EntropySourceUnavailable`]; there is no fallback to a weaker
//! generator.

use crate::{
    entropy::{Entropy, DEFAULT_ENTROPY_BITS},
    errors::Bip39Error,
    utils::is_invalid_entropy_bit_len,
};
use alloc::{string::ToString, vec};
use rand_core::TryCryptoRng;

pub struct EntropyProvider<R> {
    rng: R,
    bit_len: usize,
}

#[cfg(feature = "os_rng")]
impl EntropyProvider<rand_core::OsRng> {
    /// Provider backed by the operating system's secure random source.
    pub fn os() -> Self {
        Self::new(rand_core::OsRng)
    }
}

impl<R: TryCryptoRng> EntropyProvider<R> {
    /// Provider producing [`DEFAULT_ENTROPY_BITS`] per call.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            bit_len: DEFAULT_ENTROPY_BITS,
        }
    }

    pub fn with_bit_len(rng: R, bit_len: usize) -> Result<Self, Bip39Error> {
        if is_invalid_entropy_bit_len(bit_len) {
            return Err(Bip39Error::InvalidEntropyLength(bit_len));
        }
        Ok(Self { rng, bit_len })
    }

    #[inline]
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Draws a fresh block of the configured size.
    pub fn generate(&mut self) -> Result<Entropy, Bip39Error> {
        self.generate_bits(self.bit_len)
    }

    pub fn generate_bits(&mut self, bit_len: usize) -> Result<Entropy, Bip39Error> {
        if is_invalid_entropy_bit_len(bit_len) {
            return Err(Bip39Error::InvalidEntropyLength(bit_len));
        }

        let mut bytes = vec![0u8; bit_len / 8];
        if let Err(e) = self.rng.try_fill_bytes(&mut bytes) {
            tracing::warn!(bit_len, error = %e, "secure random source failed");
            return Err(Bip39Error::EntropySourceUnavailable(e.to_string()));
        }

        tracing::debug!(bit_len, "entropy drawn");
        Entropy::from_vec(bytes)
    }
}
