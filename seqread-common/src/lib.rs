use std::io;
use thiserror::Error;

pub mod stats;

/// Error types for a sequential-read benchmark run.
///
/// Every variant is fatal for the run; the binary prints the message and
/// exits with status 1.
#[derive(Debug, Error)]
pub enum SeqReadError {
    #[error("You must set --dir.")]
    MissingDir,

    #[error("--read_size must be greater than zero.")]
    ZeroReadSize,

    #[error("TempFile: {0}")]
    TempFile(#[source] io::Error),

    #[error("Copying random bytes: {0}")]
    FillRandom(#[source] io::Error),

    #[error("Closing file: {0}")]
    CloseAfterWrite(#[source] io::Error),

    #[error("Opening file: {0}")]
    Open(#[source] io::Error),

    #[error("Reading: {0}")]
    Read(#[source] io::Error),

    #[error("Closing file after reading: {0}")]
    CloseAfterRead(#[source] io::Error),
}

/// Result type for benchmark operations
pub type Result<T> = std::result::Result<T, SeqReadError>;
