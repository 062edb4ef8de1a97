//! MSB-first bit buffer.
//!
//! Holds the combined `entropy || checksum` bit string. Bits are indexed from
//! the most significant end, so offset `0` is the top bit of the first byte.
//! Values are appended and extracted bit by bit, which keeps every fixed-width
//! field at its full width: an 11-bit index of `0` still occupies 11 zero bits.

use alloc::vec::Vec;

#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "zeroize", derive(zeroize::Zeroize, zeroize::ZeroizeOnDrop))]
pub struct BitBuffer {
    bytes: Vec<u8>,
    len: usize,
}

impl BitBuffer {
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Buffer holding every bit of `bytes`, big-endian.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_bit(&mut self, bit: bool) {
        let shift = 7 - (self.len % 8);
        if shift == 7 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 1 << shift;
            }
        }
        self.len += 1;
    }

    /// Appends the low `width` bits of `value`, most significant first.
    ///
    /// # Panics
    ///
    /// Panics if `width > 32`.
    pub fn append_bits(&mut self, value: u32, width: usize) {
        assert!(width <= 32, "cannot append {width} bits from a u32");
        for i in (0..width).rev() {
            self.push_bit((value >> i) & 1 == 1);
        }
    }

    pub fn extend(&mut self, other: &BitBuffer) {
        for offset in 0..other.len {
            self.push_bit(other.bit(offset));
        }
    }

    /// # Panics
    ///
    /// Panics if `offset` is past the end of the buffer.
    #[inline]
    pub fn bit(&self, offset: usize) -> bool {
        assert!(offset < self.len, "bit {offset} out of range ({} bits)", self.len);
        self.bytes[offset / 8] & (1 << (7 - offset % 8)) != 0
    }

    /// Reads `width` bits starting at `offset` as an unsigned big-endian value.
    ///
    /// # Panics
    ///
    /// Panics if `width > 32` or the window runs past the end of the buffer.
    pub fn extract_bits(&self, offset: usize, width: usize) -> u32 {
        assert!(width <= 32, "cannot extract {width} bits into a u32");
        assert!(
            offset + width <= self.len,
            "window {offset}..{} out of range ({} bits)",
            offset + width,
            self.len
        );
        (offset..offset + width).fold(0u32, |acc, i| (acc << 1) | u32::from(self.bit(i)))
    }

    /// The first `bits` bits as a new buffer.
    pub fn prefix(&self, bits: usize) -> BitBuffer {
        let mut out = BitBuffer::with_capacity(bits);
        for offset in 0..bits {
            out.push_bit(self.bit(offset));
        }
        out
    }

    /// Bits `offset..self.len()` as a new buffer.
    pub fn suffix(&self, offset: usize) -> BitBuffer {
        let mut out = BitBuffer::with_capacity(self.len.saturating_sub(offset));
        for i in offset..self.len {
            out.push_bit(self.bit(i));
        }
        out
    }

    /// Backing bytes. A trailing partial byte is zero-filled on the right.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl core::fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BitBuffer")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
