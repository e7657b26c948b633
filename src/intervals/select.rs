//! Segment selection from clean intervals.

use tracing::debug;

use super::interval::Interval;
use crate::error::{Error, Result};

/// A selected clean window of exactly the requested length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// The sample range, `interval.len() == target_length_samples`.
    pub interval: Interval,
    /// Position of this segment in the selection order (0-based).
    pub index: usize,
}

/// Result of a selection run.
///
/// Fewer segments than requested is a first-class partial result, not an
/// error; the caller decides whether a partial selection is acceptable.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Selected segments in chronological order.
    pub segments: Vec<Segment>,
    /// Number of segments that were requested.
    pub requested: usize,
}

impl Selection {
    /// Whether the requested number of segments was achieved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.segments.len() == self.requested
    }
}

/// Select up to `target_segments` non-overlapping windows of exactly
/// `target_length_samples` from the clean intervals.
///
/// Placement is deterministic and order-preserving: clean intervals are
/// walked chronologically and each contributes `floor(len / target_length)`
/// back-to-back windows starting at its own start, until the target count
/// is reached. Intervals shorter than the target length contribute nothing.
///
/// # Errors
///
/// Returns [`Error::InvalidParameters`] when either parameter is zero.
/// Insufficient clean time is not an error; see [`Selection`].
pub fn select(
    clean: &[Interval],
    target_length_samples: usize,
    target_segments: usize,
) -> Result<Selection> {
    if target_length_samples == 0 {
        return Err(Error::InvalidParameters {
            message: "segment length must be positive".to_string(),
        });
    }
    if target_segments == 0 {
        return Err(Error::InvalidParameters {
            message: "segment count must be positive".to_string(),
        });
    }

    let mut segments = Vec::with_capacity(target_segments);

    'outer: for interval in clean {
        let fit = interval.len() / target_length_samples;
        let mut start = interval.start;
        for _ in 0..fit {
            let Some(window) = Interval::new(start, start + target_length_samples) else {
                break;
            };
            segments.push(Segment {
                interval: window,
                index: segments.len(),
            });
            if segments.len() == target_segments {
                break 'outer;
            }
            start += target_length_samples;
        }
    }

    if segments.len() < target_segments {
        debug!(
            "insufficient clean time: {} of {} segments available",
            segments.len(),
            target_segments
        );
    }

    Ok(Selection {
        segments,
        requested: target_segments,
    })
}
