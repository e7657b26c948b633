//! Interval value types.

/// A half-open sample-index range `[start, end)` on a recording's timeline.
///
/// Intervals are immutable values; merging or clipping produces a new
/// `Interval` rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    /// First sample index covered by the interval.
    pub start: usize,
    /// One past the last sample index covered by the interval.
    pub end: usize,
}

impl Interval {
    /// Create an interval. Returns `None` when the range would be empty
    /// or inverted.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// Number of samples covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// An interval is never empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Clip to `[0, total_samples)`. Returns `None` when nothing remains.
    #[must_use]
    pub fn clip(&self, total_samples: usize) -> Option<Self> {
        Self::new(self.start, self.end.min(total_samples))
    }

    /// Whether `other` lies entirely within this interval.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Origin of a detected bad interval.
///
/// Raw annotation label strings never cross the detector boundary; every
/// bad interval is tagged with one of these closed variants instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalSource {
    /// Contiguous near-zero signal (equipment off or disconnected electrode).
    Flat,
    /// Annotated clinical procedure (hyperventilation, photic stimulation).
    Procedure,
    /// Mandatory exclusion window at the start of the recording.
    LeadingExclusion,
}

impl std::fmt::Display for IntervalSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Procedure => write!(f, "procedure"),
            Self::LeadingExclusion => write!(f, "leading-exclusion"),
        }
    }
}

/// A bad interval together with its detection source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedInterval {
    /// The time range.
    pub interval: Interval,
    /// What produced it.
    pub source: IntervalSource,
}

impl TaggedInterval {
    /// Create a tagged interval.
    #[must_use]
    pub fn new(interval: Interval, source: IntervalSource) -> Self {
        Self { interval, source }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_and_inverted() {
        assert!(Interval::new(5, 5).is_none());
        assert!(Interval::new(7, 3).is_none());
        assert!(Interval::new(0, 1).is_some());
    }

    #[test]
    fn test_len() {
        assert_eq!(Interval::new(10, 25).unwrap().len(), 15);
    }

    #[test]
    fn test_clip_truncates_end() {
        let iv = Interval::new(100, 500).unwrap();
        assert_eq!(iv.clip(300), Interval::new(100, 300));
    }

    #[test]
    fn test_clip_drops_out_of_range() {
        let iv = Interval::new(400, 500).unwrap();
        assert!(iv.clip(300).is_none());
        assert!(iv.clip(400).is_none());
    }

    #[test]
    fn test_contains() {
        let outer = Interval::new(10, 100).unwrap();
        assert!(outer.contains(&Interval::new(10, 100).unwrap()));
        assert!(outer.contains(&Interval::new(20, 50).unwrap()));
        assert!(!outer.contains(&Interval::new(5, 50).unwrap()));
        assert!(!outer.contains(&Interval::new(50, 101).unwrap()));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(IntervalSource::Flat.to_string(), "flat");
        assert_eq!(IntervalSource::Procedure.to_string(), "procedure");
        assert_eq!(
            IntervalSource::LeadingExclusion.to_string(),
            "leading-exclusion"
        );
    }
}
