use std::time::Duration;

const KIB: f64 = (1u64 << 10) as f64;
const MIB: f64 = (1u64 << 20) as f64;
const GIB: f64 = (1u64 << 30) as f64;

/// Estimate the `p`th percentile of `sorted` using the NIST method
/// (rank = p/100 * (N+1), linear interpolation between neighbours).
///
/// Requires `sorted` to be non-empty and sorted ascending, and `p <= 100`.
/// These are checked in debug builds only. Interpolated values are truncated
/// to whole nanoseconds, not rounded.
pub fn percentile(sorted: &[Duration], p: u32) -> Duration {
    debug_assert!(!sorted.is_empty(), "percentile of an empty sample set");
    debug_assert!(p <= 100, "percentile rank {p} out of range");
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]), "samples not sorted");

    let n = sorted.len();
    let rank = (f64::from(p) / 100.0) * (n + 1) as f64;
    let k = rank.trunc() as usize;
    let d = rank.fract();

    if k == 0 {
        return sorted[0];
    }
    if k >= n {
        return sorted[n - 1];
    }

    let lo = sorted[k - 1].as_nanos() as f64;
    let hi = sorted[k].as_nanos() as f64;
    Duration::from_nanos((lo + d * (hi - lo)) as u64)
}

/// Render a byte count with the largest binary unit it reaches, e.g.
/// `"812.35 MiB"` or `"1023.00 bytes"`.
pub fn format_bytes(v: f64) -> String {
    if v >= GIB {
        format!("{:.2} GiB", v / GIB)
    } else if v >= MIB {
        format!("{:.2} MiB", v / MIB)
    } else if v >= KIB {
        format!("{:.2} KiB", v / KIB)
    } else {
        format!("{:.2} bytes", v)
    }
}
