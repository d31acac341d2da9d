use seqread_common::stats::{format_bytes, percentile};
use std::fmt;
use std::time::Duration;

use crate::driver::Samples;

/// Percentile ranks printed for each sample set.
pub const PERCENTILES: [u32; 3] = [50, 90, 98];

/// Sorted samples plus the byte counts needed to derive bandwidth.
#[derive(Debug, Clone)]
pub struct Report {
    full_file_read: Vec<Duration>,
    single_read_call: Vec<Duration>,
    file_size: u64,
    read_size: usize,
}

impl Report {
    pub fn new(samples: Samples, file_size: u64, read_size: usize) -> Self {
        let Samples { mut full_file_read, mut single_read_call } = samples;
        full_file_read.sort_unstable();
        single_read_call.sort_unstable();
        Report { full_file_read, single_read_call, file_size, read_size }
    }

    pub fn full_file_read(&self) -> &[Duration] {
        &self.full_file_read
    }

    pub fn single_read_call(&self) -> &[Duration] {
        &self.single_read_call
    }
}

/// Bytes per second implied by moving `bytes` in `elapsed`.
///
/// A zero `elapsed` yields `f64::INFINITY`, which the report prints as
/// `0ns (inf GiB/s)`.
pub fn bandwidth(bytes: u64, elapsed: Duration) -> f64 {
    bytes as f64 / elapsed.as_secs_f64()
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    bytes_per_observation: u64,
    observations: &[Duration],
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{name}:")?;
    for &ptile in &PERCENTILES {
        let d = percentile(observations, ptile);
        writeln!(
            f,
            "  {:02}th ptile: {:>10} ({}/s)",
            ptile,
            format!("{d:?}"),
            format_bytes(bandwidth(bytes_per_observation, d)),
        )?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, "Full-file read times", self.file_size, &self.full_file_read)?;
        write_section(f, "read(2) latencies", self.read_size as u64, &self.single_read_call)?;
        writeln!(f)
    }
}
