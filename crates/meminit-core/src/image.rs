//! Memory image description and line streaming.

use std::io::{self, Write};

use meminit_common::{ImageConfig, ImageError};

use crate::format::HexWordFormat;

/// A validated memory image: `lines` words, each holding `fill`.
///
/// The image only stores one pre-rendered record. Lines are produced on
/// demand, so arbitrarily large images stream in constant memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryImage {
    format: HexWordFormat,
    lines: u64,
    fill: u128,
    /// One rendered word followed by `\n`.
    record: String,
}

impl MemoryImage {
    /// Validate `config` and prepare the record every line repeats.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidWidth`] or [`ImageError::FillOutOfRange`]
    /// if the config cannot describe a well-formed image.
    pub fn new(config: &ImageConfig) -> Result<Self, ImageError> {
        let format = HexWordFormat::new(config.width)?;
        let mut record = format.format(config.fill)?;
        record.push('\n');

        Ok(Self {
            format,
            lines: config.lines,
            fill: config.fill,
            record,
        })
    }

    /// The word format in use.
    pub fn format(&self) -> HexWordFormat {
        self.format
    }

    /// Number of lines (words) in the image.
    pub fn line_count(&self) -> u64 {
        self.lines
    }

    /// The fill value.
    pub fn fill(&self) -> u128 {
        self.fill
    }

    /// The rendered word, without its line terminator.
    pub fn word(&self) -> &str {
        &self.record[..self.format.digits()]
    }

    /// Exact size of the image in bytes once written.
    pub fn byte_len(&self) -> u64 {
        self.lines.saturating_mul(self.record.len() as u64)
    }

    /// Iterate over every line of the image, without terminators.
    pub fn iter_lines(&self) -> impl Iterator<Item = &str> + '_ {
        let word = self.word();
        (0..self.lines).map(move |_| word)
    }

    /// Write the whole image to `writer`, one record per line.
    ///
    /// The writer is not flushed; callers owning a buffered sink flush it
    /// themselves so that late write failures are still observed.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let record = self.record.as_bytes();
        for _ in 0..self.lines {
            writer.write_all(record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(lines: u64, width: u32, fill: u128) -> ImageConfig {
        ImageConfig::default()
            .with_lines(lines)
            .with_width(width)
            .with_fill(fill)
    }

    fn render(image: &MemoryImage) -> String {
        let mut buf = Vec::new();
        image.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_three_byte_words() {
        let image = MemoryImage::new(&config(3, 8, 0)).unwrap();
        assert_eq!(render(&image), "00\n00\n00\n");
    }

    #[test]
    fn test_two_64_bit_words() {
        let image = MemoryImage::new(&config(2, 64, 0)).unwrap();
        assert_eq!(render(&image), "0000000000000000\n0000000000000000\n");
    }

    #[test]
    fn test_default_image() {
        let image = MemoryImage::new(&ImageConfig::default()).unwrap();

        assert_eq!(image.line_count(), 2048);
        assert_eq!(image.word(), "0000000000000000");
        assert_eq!(image.byte_len(), 2048 * 17);

        let text = render(&image);
        assert_eq!(text.len() as u64, image.byte_len());
        assert_eq!(text.lines().count(), 2048);
        assert!(text.lines().all(|line| line == "0000000000000000"));
    }

    #[test]
    fn test_empty_image() {
        let image = MemoryImage::new(&config(0, 64, 0)).unwrap();

        assert_eq!(image.byte_len(), 0);
        assert_eq!(image.iter_lines().count(), 0);
        assert!(render(&image).is_empty());
    }

    #[test]
    fn test_non_zero_fill() {
        let image = MemoryImage::new(&config(2, 32, 0xBEEF)).unwrap();

        assert_eq!(image.fill(), 0xBEEF);
        assert_eq!(image.word(), "0000BEEF");
        assert_eq!(render(&image), "0000BEEF\n0000BEEF\n");
    }

    #[test]
    fn test_iter_lines_matches_written_output() {
        let image = MemoryImage::new(&config(5, 12, 0x7)).unwrap();

        let collected: Vec<&str> = image.iter_lines().collect();
        assert_eq!(collected, vec!["007"; 5]);

        let written = render(&image);
        assert_eq!(written.lines().collect::<Vec<_>>(), collected);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            MemoryImage::new(&config(4, 10, 0)),
            Err(ImageError::InvalidWidth { width: 10 })
        ));
        assert!(matches!(
            MemoryImage::new(&config(4, 4, 16)),
            Err(ImageError::FillOutOfRange { fill: 16, width: 4 })
        ));
    }

    #[test]
    fn test_write_error_propagates() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("disk full"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let image = MemoryImage::new(&config(1, 8, 0)).unwrap();
        let err = image.write_to(FailingWriter).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }
}
