use clap::Parser;
use seqread_common::{Result, SeqReadError};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// Size of the file to create and read (1 MiB).
pub const DEFAULT_FILE_SIZE: u64 = 1 << 20;

/// Size of each call to read(2) (16 KiB).
pub const DEFAULT_READ_SIZE: usize = 1 << 14;

#[derive(Parser, Debug)]
#[command(
    name = "seqread",
    version,
    about = "Measure open-and-read-to-end latency of a file of random bytes"
)]
pub struct Args {
    /// Directory within which to write the file.
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// How long to run, e.g. 5s, 250ms, 1m
    #[arg(long, default_value = "5s", value_parser = humantime::parse_duration)]
    pub duration: Duration,

    /// Size of file to use.
    #[arg(long = "file_size", default_value_t = DEFAULT_FILE_SIZE)]
    pub file_size: u64,

    /// Size of each call to read(2).
    #[arg(long = "read_size", default_value_t = DEFAULT_READ_SIZE)]
    pub read_size: usize,
}

/// Validated settings for one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dir: PathBuf,
    pub duration: Duration,
    pub file_size: u64,
    pub read_size: usize,
}

impl Config {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Config {
            dir: dir.into(),
            duration: DEFAULT_DURATION,
            file_size: DEFAULT_FILE_SIZE,
            read_size: DEFAULT_READ_SIZE,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.dir.as_os_str().is_empty() {
            return Err(SeqReadError::MissingDir);
        }
        // A zero-length buffer reads zero bytes forever without reaching EOF.
        if self.read_size == 0 {
            return Err(SeqReadError::ZeroReadSize);
        }
        Ok(())
    }
}

impl TryFrom<Args> for Config {
    type Error = SeqReadError;

    fn try_from(args: Args) -> Result<Self> {
        let config = Config {
            dir: args.dir.unwrap_or_default(),
            duration: args.duration,
            file_size: args.file_size,
            read_size: args.read_size,
        };
        config.validate()?;
        Ok(config)
    }
}
