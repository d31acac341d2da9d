use std::time::Duration;
use seqread_common::stats::{format_bytes, percentile};

fn nanos(values: &[u64]) -> Vec<Duration> {
    values.iter().copied().map(Duration::from_nanos).collect()
}

#[test]
fn test_percentile_extremes_are_min_and_max() {
    let sets = [nanos(&[7]), nanos(&[1, 2]), nanos(&[3, 3, 9, 12, 40]), nanos(&[5, 6, 7, 8, 9, 10, 11])];
    for set in &sets {
        assert_eq!(percentile(set, 0), set[0]);
        assert_eq!(percentile(set, 100), set[set.len() - 1]);
    }
}

#[test]
fn test_percentile_single_element() {
    let set = nanos(&[42]);
    for p in 0..=100 {
        assert_eq!(percentile(&set, p), Duration::from_nanos(42), "p={p}");
    }
}

#[test]
fn test_percentile_nist_interpolation() {
    // N=4, rank = 0.5 * 5 = 2.5 → k=2, d=0.5 → 20 + 0.5 * (30 - 20) = 25
    let set = nanos(&[10, 20, 30, 40]);
    assert_eq!(percentile(&set, 50), Duration::from_nanos(25));

    // rank = 0.9 * 5 = 4.5 → k=4 >= N → last sample
    assert_eq!(percentile(&set, 90), Duration::from_nanos(40));

    // rank = 0.1 * 5 = 0.5 → k=0 → first sample
    assert_eq!(percentile(&set, 10), Duration::from_nanos(10));
}

#[test]
fn test_percentile_truncates_instead_of_rounding() {
    // rank = 0.5 * 3 = 1.5 → 10 + 0.5 * 1 = 10.5 → 10
    let set = nanos(&[10, 11]);
    assert_eq!(percentile(&set, 50), Duration::from_nanos(10));

    // rank = 0.5 * 4 = 2.0 → k=2, d=0 → exactly the second sample
    let set = nanos(&[100, 200, 300]);
    assert_eq!(percentile(&set, 50), Duration::from_nanos(200));
}

#[test]
fn test_percentile_keeps_sub_second_and_seconds_parts() {
    let set = vec![Duration::from_millis(1_500), Duration::from_millis(2_500)];
    // rank = 0.5 * 3 = 1.5 → 1.5s + 0.5 * 1s = 2s
    assert_eq!(percentile(&set, 50), Duration::from_secs(2));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "empty sample set")]
fn test_percentile_empty_panics_in_debug() {
    percentile(&[], 50);
}

#[test]
fn test_format_bytes_unit_boundaries() {
    assert_eq!(format_bytes(0.0), "0.00 bytes");
    assert_eq!(format_bytes(1023.0), "1023.00 bytes");
    assert_eq!(format_bytes(1024.0), "1.00 KiB");
    assert_eq!(format_bytes((1u64 << 20) as f64), "1.00 MiB");
    assert_eq!(format_bytes((1u64 << 30) as f64), "1.00 GiB");
}

#[test]
fn test_format_bytes_fractions() {
    assert_eq!(format_bytes(1536.0), "1.50 KiB");
    assert_eq!(format_bytes(812.35 * (1u64 << 20) as f64), "812.35 MiB");
    assert_eq!(format_bytes(3.0 * (1u64 << 40) as f64), "3072.00 GiB");
}

#[test]
fn test_format_bytes_infinite_rate() {
    assert_eq!(format_bytes(f64::INFINITY), "inf GiB");
}
