//! Memory image generation for meminit.
//!
//! This crate turns an [`ImageConfig`](meminit_common::ImageConfig) into a
//! text file with one fixed-width hexadecimal word per line:
//! - [`HexWordFormat`]: word width to hex digit mapping
//! - [`MemoryImage`]: validated image, streamed line by line
//! - [`generate`]: writes an image to its output file
//!
//! # Output Format
//!
//! ```text
//! lines = 3, width = 8, fill = 0
//!
//! 00\n
//! 00\n
//! 00\n
//! ```
//!
//! The image is never held in memory as a whole; each record is written
//! straight into a buffered file handle.

pub mod format;
pub mod generate;
pub mod image;

pub use format::HexWordFormat;
pub use generate::{GenerateReport, generate};
pub use image::MemoryImage;
