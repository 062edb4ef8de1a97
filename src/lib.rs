//! BIP39 mnemonic sentences.
//!
//! Entropy is drawn from an injected secure random source, extended with a
//! SHA-256 checksum and split into 11-bit indices into a 2048 word list:
//!
//! ```text
//! EntropyProvider → Entropy → entropy || checksum → 11-bit indices → words
//! ```
//!
//! ```
//! use bip39gen::{encode, decode, Wordlist};
//!
//! let list = Wordlist::english();
//! let sentence = encode(&[0u8; 16], &list).unwrap();
//! assert_eq!(
//!     sentence,
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
//! );
//! assert_eq!(decode(&sentence, &list).unwrap().as_bytes(), &[0u8; 16]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod bits;
pub mod english;
pub mod entropy;
pub mod errors;
pub mod mnemonic;
pub mod rng;
pub mod utils;
pub mod wordlist;

pub use entropy::{Entropy, DEFAULT_ENTROPY_BITS, MAX_ENTROPY_BITS};
pub use errors::{Bip39Error, WordlistError};
pub use mnemonic::{decode, encode, Mnemonic, MnemonicIter};
pub use rng::EntropyProvider;
pub use wordlist::Wordlist;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
