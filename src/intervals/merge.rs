//! Interval merging and complement computation.
//!
//! Bad intervals from the detector may overlap each other; the selector
//! must only ever see a disjoint picture. `merge` collapses them with the
//! standard interval-union sweep, and `complement` derives the clean
//! intervals over the recording's duration.

use super::interval::{Interval, TaggedInterval};

/// Merge possibly-overlapping bad intervals into a minimal disjoint set.
///
/// Sorts by start and sweeps left to right, coalescing any interval whose
/// start is `<=` the current merged end (exact adjacency merges too).
/// Output is sorted, disjoint, and no longer than the input; re-merging
/// the output is a no-op.
#[must_use]
pub fn merge(bad: &[TaggedInterval]) -> Vec<Interval> {
    let mut intervals: Vec<Interval> = bad.iter().map(|t| t.interval).collect();
    intervals.sort_unstable();

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for iv in intervals {
        match merged.last_mut() {
            Some(current) if iv.start <= current.end => {
                *current = Interval {
                    start: current.start,
                    end: current.end.max(iv.end),
                };
            }
            _ => merged.push(iv),
        }
    }
    merged
}

/// Compute the clean intervals as the complement of `merged` within
/// `[0, total_samples)`.
///
/// `merged` must be sorted and disjoint (the output of [`merge`]). The
/// result is sorted, disjoint, and contains no empty intervals; together
/// with `merged` it partitions the recording exactly.
#[must_use]
pub fn complement(merged: &[Interval], total_samples: usize) -> Vec<Interval> {
    let mut clean = Vec::with_capacity(merged.len() + 1);
    let mut cursor = 0;

    for bad in merged {
        if let Some(gap) = Interval::new(cursor, bad.start.min(total_samples)) {
            clean.push(gap);
        }
        cursor = cursor.max(bad.end);
    }
    if let Some(tail) = Interval::new(cursor, total_samples) {
        clean.push(tail);
    }

    debug_assert!(partitions_exactly(merged, &clean, total_samples));
    clean
}

/// Post-condition check: every sample in `[0, total_samples)` belongs to
/// exactly one of the merged bad or clean intervals.
fn partitions_exactly(merged: &[Interval], clean: &[Interval], total_samples: usize) -> bool {
    let mut all: Vec<Interval> = merged
        .iter()
        .filter_map(|iv| iv.clip(total_samples))
        .chain(clean.iter().copied())
        .collect();
    all.sort_unstable();

    let mut cursor = 0;
    for iv in &all {
        if iv.start != cursor {
            return false;
        }
        cursor = iv.end;
    }
    cursor == total_samples
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::intervals::interval::IntervalSource;

    fn tagged(start: usize, end: usize) -> TaggedInterval {
        TaggedInterval::new(Interval::new(start, end).unwrap(), IntervalSource::Flat)
    }

    fn iv(start: usize, end: usize) -> Interval {
        Interval::new(start, end).unwrap()
    }

    #[test]
    fn test_merge_overlapping() {
        let merged = merge(&[tagged(100, 200), tagged(150, 300)]);
        assert_eq!(merged, vec![iv(100, 300)]);
    }

    #[test]
    fn test_merge_adjacent() {
        let merged = merge(&[tagged(0, 60), tagged(60, 120)]);
        assert_eq!(merged, vec![iv(0, 120)]);
    }

    #[test]
    fn test_merge_disjoint_stay_separate() {
        let merged = merge(&[tagged(200, 300), tagged(0, 100)]);
        assert_eq!(merged, vec![iv(0, 100), iv(200, 300)]);
    }

    #[test]
    fn test_merge_contained_interval_absorbed() {
        let merged = merge(&[tagged(0, 500), tagged(100, 200)]);
        assert_eq!(merged, vec![iv(0, 500)]);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let merged = merge(&[tagged(0, 60), tagged(50, 120), tagged(400, 500)]);
        let remerged = merge(
            &merged
                .iter()
                .map(|&i| TaggedInterval::new(i, IntervalSource::Flat))
                .collect::<Vec<_>>(),
        );
        assert_eq!(merged, remerged);
    }

    #[test]
    fn test_merge_output_no_longer_than_input() {
        let input = vec![tagged(0, 10), tagged(5, 15), tagged(20, 30), tagged(25, 40)];
        let merged = merge(&input);
        assert!(merged.len() <= input.len());
    }

    #[test]
    fn test_complement_no_bad_intervals() {
        let clean = complement(&[], 1000);
        assert_eq!(clean, vec![iv(0, 1000)]);
    }

    #[test]
    fn test_complement_leading_and_trailing_gaps() {
        let clean = complement(&[iv(100, 200)], 1000);
        assert_eq!(clean, vec![iv(0, 100), iv(200, 1000)]);
    }

    #[test]
    fn test_complement_bad_at_both_edges() {
        let clean = complement(&[iv(0, 100), iv(900, 1000)], 1000);
        assert_eq!(clean, vec![iv(100, 900)]);
    }

    #[test]
    fn test_complement_fully_bad_recording() {
        let clean = complement(&[iv(0, 1000)], 1000);
        assert!(clean.is_empty());
    }

    #[test]
    fn test_partition_property() {
        let merged = merge(&[tagged(0, 60), tagged(1000, 1100), tagged(2500, 2520)]);
        let clean = complement(&merged, 3600);
        assert!(partitions_exactly(&merged, &clean, 3600));
        assert_eq!(clean, vec![iv(60, 1000), iv(1100, 2500), iv(2520, 3600)]);
    }
}
