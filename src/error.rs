// src/error.rs
use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Fatal conditions that stop a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Source file does not exist: {0}")]
    SourceOpen(io::Error),

    #[error("Cannot write to destination file: {0}")]
    DestinationOpen(io::Error),

    #[error("Unsupported track mode {0}")]
    UnsupportedMode(u8),

    #[error("Cannot determine source file size: {0}")]
    SizeUnknown(io::Error),

    #[error("Read error: {0}")]
    Read(io::Error),

    #[error("Write error: {0}")]
    Write(io::Error),

    #[error("Seek error: {0}")]
    Seek(io::Error),

    /// Only raised in strict mode; otherwise the tail is dropped with a warning.
    #[error("Image size is not a factor of sector size {sector_size}, {tail} trailing bytes")]
    TruncatedImage { sector_size: usize, tail: u64 },

    #[error("Validation failed: output size {actual} does not match expected size {expected}")]
    Validation { expected: u64, actual: u64 },
}
