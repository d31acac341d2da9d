use seqread_common::{Result, SeqReadError};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::close::close_file;
use crate::config::Config;
use crate::scratch::ScratchFile;

/// Raw latency observations from a run, in the order they were taken (unsorted).
#[derive(Debug, Default, Clone)]
pub struct Samples {
    /// One entry per open-read-to-EOF-close pass.
    pub full_file_read: Vec<Duration>,
    /// One entry per logical read(2) call, including each pass's terminal
    /// zero-byte read. Calls retried after `EINTR` count once.
    pub single_read_call: Vec<Duration>,
}

/// Create the scratch file described by `config` and read it end to end
/// repeatedly until `config.duration` has elapsed. At least one pass always
/// runs. The scratch file is gone by the time this returns.
pub fn measure(config: &Config) -> Result<Samples> {
    config.validate()?;
    let scratch = ScratchFile::create(&config.dir, config.file_size)?;

    info!("Measuring for {}...", humantime::format_duration(config.duration));

    let mut samples = Samples::default();
    let mut buf = vec![0u8; config.read_size];

    let overall_start = Instant::now();
    while samples.full_file_read.is_empty() || overall_start.elapsed() < config.duration {
        read_pass(scratch.path(), &mut buf, &mut samples)?;
    }

    info!(
        "Read the file {} times, using {} calls to read(2).",
        samples.full_file_read.len(),
        samples.single_read_call.len(),
    );
    Ok(samples)
}

/// Open `path`, read it to end-of-stream through `buf`, and close it,
/// appending one full-file sample and one sample per read call.
pub fn read_pass(path: &Path, buf: &mut [u8], samples: &mut Samples) -> Result<()> {
    let mut file = File::open(path).map_err(SeqReadError::Open)?;

    let file_start = Instant::now();
    let outcome = read_to_end(&mut file, buf, &mut samples.single_read_call);
    let elapsed = file_start.elapsed();
    samples.full_file_read.push(elapsed);
    let bytes_read = outcome.map_err(SeqReadError::Read)?;

    close_file(file).map_err(SeqReadError::CloseAfterRead)?;
    debug!(bytes_read, ?elapsed, "read pass complete");
    Ok(())
}

/// Drain `reader` through `buf`, pushing the latency of every read call onto
/// `latencies`, and return the number of bytes read.
///
/// A call that fails with `Interrupted` is retried inside the same sample, so
/// each entry corresponds to one read that returned data, EOF, or a real error.
pub fn read_to_end(
    reader: &mut impl Read,
    buf: &mut [u8],
    latencies: &mut Vec<Duration>,
) -> io::Result<u64> {
    let mut bytes_read: u64 = 0;
    loop {
        let read_start = Instant::now();
        let result = loop {
            match reader.read(buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                other => break other,
            }
        };
        latencies.push(read_start.elapsed());

        match result? {
            0 => return Ok(bytes_read),
            n => bytes_read += n as u64,
        }
    }
}
