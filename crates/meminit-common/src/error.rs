//! Error types for meminit.
//!
//! [`ImageError`] covers everything that can go wrong between validating an
//! image description and finishing the write of its output file.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while building or writing a memory image.
#[derive(Error, Debug)]
pub enum ImageError {
    /// The word width is zero or not a whole number of hex digits.
    #[error("Invalid word width: {width} bits (must be a positive multiple of 4)")]
    InvalidWidth {
        /// The rejected width in bits.
        width: u32,
    },

    /// The fill value needs more bits than one word provides.
    #[error("Fill value {fill:#X} does not fit in {width} bits")]
    FillOutOfRange {
        /// The rejected fill value.
        fill: u128,
        /// The word width in bits.
        width: u32,
    },

    /// Creating, writing, or flushing the output file failed.
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        /// The output path being written.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ImageError {
    /// Create a new `InvalidWidth` error.
    pub fn invalid_width(width: u32) -> Self {
        Self::InvalidWidth { width }
    }

    /// Create a new `FillOutOfRange` error.
    pub fn fill_out_of_range(fill: u128, width: u32) -> Self {
        Self::FillOutOfRange { fill, width }
    }

    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Returns `true` if the image description itself was rejected.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidWidth { .. } | Self::FillOutOfRange { .. }
        )
    }
}
