//! Fixed-width hexadecimal word formatting.

use meminit_common::ImageError;

/// Bits encoded by one hex digit.
pub const BITS_PER_DIGIT: u32 = 4;

/// Maps a word width in bits onto a fixed number of uppercase hex digits.
///
/// Only widths that are a positive multiple of [`BITS_PER_DIGIT`] are
/// accepted, so every formatted word is exactly `width / 4` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexWordFormat {
    width: u32,
    digits: usize,
}

impl HexWordFormat {
    /// Create a format for words of `width` bits.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidWidth`] if `width` is zero or not a
    /// multiple of 4.
    pub fn new(width: u32) -> Result<Self, ImageError> {
        if width == 0 || width % BITS_PER_DIGIT != 0 {
            return Err(ImageError::invalid_width(width));
        }

        Ok(Self {
            width,
            digits: (width / BITS_PER_DIGIT) as usize,
        })
    }

    /// Word width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of hex digits per word.
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Returns `true` if `value` can be stored in one word.
    pub fn fits(&self, value: u128) -> bool {
        self.width >= u128::BITS || value >> self.width == 0
    }

    /// Render `value` as uppercase hex, zero-padded to [`digits`](Self::digits).
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::FillOutOfRange`] if `value` does not fit.
    pub fn format(&self, value: u128) -> Result<String, ImageError> {
        if !self.fits(value) {
            return Err(ImageError::fill_out_of_range(value, self.width));
        }

        Ok(format!("{value:0digits$X}", digits = self.digits))
    }
}
