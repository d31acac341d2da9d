use rand::rngs::OsRng;
use rand::RngCore;
use seqread_common::{Result, SeqReadError};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempPath};
use tracing::{info, warn};

use crate::close::close_file;

const FILE_PREFIX: &str = "sequential_read";

/// Upper bound on the random buffer used while filling the file.
const FILL_CHUNK: usize = 1 << 16;

/// A temporary file full of random bytes that is deleted when dropped,
/// including on early error returns.
pub struct ScratchFile {
    path: PathBuf,
    guard: Option<TempPath>,
}

impl ScratchFile {
    /// Create a file in `dir` holding `size` bytes from the OS random source.
    /// The file is complete and closed by the time this returns.
    pub fn create(dir: &Path, size: u64) -> Result<Self> {
        info!("Creating a temporary file in {}.", dir.display());
        let mut file = Builder::new()
            .prefix(FILE_PREFIX)
            .tempfile_in(dir)
            .map_err(SeqReadError::TempFile)?;

        // From here on an early return drops the temp file or its path guard,
        // either of which removes it from disk.
        info!("Writing {size} random bytes.");
        fill_random(file.as_file_mut(), size).map_err(SeqReadError::FillRandom)?;

        let (file, guard) = file.into_parts();
        file.sync_all().map_err(SeqReadError::CloseAfterWrite)?;
        close_file(file).map_err(SeqReadError::CloseAfterWrite)?;

        Ok(ScratchFile { path: guard.to_path_buf(), guard: Some(guard) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if let Some(guard) = self.guard.take() {
            info!("Deleting {}.", self.path.display());
            if let Err(e) = guard.close() {
                warn!("Failed to delete {}: {e}", self.path.display());
            }
        }
    }
}

/// Write exactly `size` bytes from `OsRng` to `out`.
pub fn fill_random(out: &mut impl Write, size: u64) -> io::Result<()> {
    let mut chunk = vec![0u8; size.min(FILL_CHUNK as u64) as usize];
    let mut remaining = size;
    while remaining > 0 {
        let n = remaining.min(chunk.len() as u64) as usize;
        OsRng
            .try_fill_bytes(&mut chunk[..n])
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        out.write_all(&chunk[..n])?;
        remaining -= n as u64;
    }
    out.flush()
}
