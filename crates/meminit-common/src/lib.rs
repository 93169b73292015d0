//! Common types, errors, and configuration for meminit.
//!
//! This crate provides shared functionality used across the meminit workspace:
//! - Error types using `thiserror` for type-safe error handling
//! - [`ImageConfig`] describing the memory image to generate
//! - [`ConfigFile`] for loading settings from TOML

pub mod config;
pub mod config_file;
pub mod error;

pub use config::ImageConfig;
pub use config_file::{ConfigFile, ConfigFileError};
pub use error::ImageError;
