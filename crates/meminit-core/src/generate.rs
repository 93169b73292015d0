//! Writing memory images to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use meminit_common::{ImageConfig, ImageError};

use crate::image::MemoryImage;

/// Summary of a completed generation run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// The file that was written.
    pub path: PathBuf,
    /// Number of lines written.
    pub lines: u64,
    /// Number of bytes written.
    pub bytes: u64,
    /// Wall-clock time spent validating and writing.
    pub duration: Duration,
}

/// Write the memory image described by `config` to `config.output`.
///
/// The config is validated before the output is touched, so an invalid
/// width or fill never creates or truncates a file. The target is created
/// or truncated, written through a buffer and flushed before returning; the
/// handle is closed on every exit path when it goes out of scope.
///
/// # Errors
///
/// - [`ImageError::InvalidWidth`] / [`ImageError::FillOutOfRange`] for a bad config
/// - [`ImageError::Io`] if the file cannot be created, written or flushed
///   (missing parent directory, permission denied, disk full)
#[instrument(
    skip(config),
    fields(path = %config.output.display(), lines = config.lines, width = config.width)
)]
pub fn generate(config: &ImageConfig) -> Result<GenerateReport, ImageError> {
    let start = Instant::now();

    let image = MemoryImage::new(config)?;
    debug!(
        digits = image.format().digits(),
        word = image.word(),
        bytes = image.byte_len(),
        "Image format resolved"
    );

    let path = &config.output;
    let file = File::create(path).map_err(|e| ImageError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    image
        .write_to(&mut writer)
        .map_err(|e| ImageError::io(path, e))?;
    writer.flush().map_err(|e| ImageError::io(path, e))?;

    let duration = start.elapsed();
    info!(
        path = %path.display(),
        lines = image.line_count(),
        bytes = image.byte_len(),
        duration_ms = duration.as_millis(),
        "Memory image written"
    );

    Ok(GenerateReport {
        path: path.clone(),
        lines: image.line_count(),
        bytes: image.byte_len(),
        duration,
    })
}
