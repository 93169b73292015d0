//! Configuration structures for meminit.
//!
//! [`ImageConfig`] describes one memory image: where it goes, how many words
//! it holds, how wide each word is, and the value every word is filled with.

use std::num::ParseIntError;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Description of a memory image to generate.
///
/// Every field has a default, so a partial TOML or JSON table is enough
/// to override a single setting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ImageConfig {
    /// Path of the generated file. Created or truncated on each run.
    #[serde(default = "defaults::output")]
    pub output: PathBuf,

    /// Number of memory words, one line each.
    #[serde(default = "defaults::lines")]
    pub lines: u64,

    /// Word width in bits.
    ///
    /// Must be a positive multiple of 4 so that each word maps onto a whole
    /// number of hex digits.
    #[serde(default = "defaults::width")]
    pub width: u32,

    /// Value written to every word.
    ///
    /// Accepts an integer or a string (`"255"`, `"0xFF"`), and is written
    /// back out as a hex string so values above `i64::MAX` survive TOML.
    #[serde(default, with = "fill_repr")]
    pub fill: u128,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            output: defaults::output(),
            lines: defaults::lines(),
            width: defaults::width(),
            fill: 0,
        }
    }
}

impl ImageConfig {
    /// Set the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the number of words.
    #[must_use]
    pub fn with_lines(mut self, lines: u64) -> Self {
        self.lines = lines;
        self
    }

    /// Set the word width in bits.
    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the fill value.
    #[must_use]
    pub fn with_fill(mut self, fill: u128) -> Self {
        self.fill = fill;
        self
    }
}

/// Parse a fill value written in decimal or with a `0x` / `0X` prefix.
///
/// Underscores are accepted as digit separators (`0xDEAD_BEEF`).
pub fn parse_fill(text: &str) -> Result<u128, ParseIntError> {
    let cleaned: String = text.trim().chars().filter(|c| *c != '_').collect();

    match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(hex) => u128::from_str_radix(hex, 16),
        None => cleaned.parse(),
    }
}

mod fill_repr {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Int(u64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(fill: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{fill:#X}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Int(value) => Ok(u128::from(value)),
            Repr::Text(text) => super::parse_fill(&text)
                .map_err(|e| D::Error::custom(format!("invalid fill value '{text}': {e}"))),
        }
    }
}

/// Default value functions for serde.
mod defaults {
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        PathBuf::from("src/reuse/init_ram_zeros.mem")
    }

    pub const fn lines() -> u64 {
        2048
    }

    pub const fn width() -> u32 {
        64
    }
}
