//! Export planning.
//!
//! Pure mapping from selected segments to output file names; the actual
//! writing lives in [`super::writer`]. Keeping the naming logic free of
//! I/O makes the collision-avoiding suffix scheme trivially testable.

use crate::constants::output::SEGMENT_EXTENSION;
use crate::intervals::Segment;

/// One planned output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    /// File name including extension, without directory.
    pub file_name: String,
    /// The segment to write.
    pub segment: Segment,
}

/// Plan one output file per segment.
///
/// Names follow the `stem_1.edf`, `stem_2.edf`, ... scheme: the numeric
/// suffix is the 1-based segment index, so multiple segments from one
/// source file never collide and re-runs produce identical names.
#[must_use]
pub fn plan_exports(stem: &str, segments: &[Segment]) -> Vec<ExportEntry> {
    segments
        .iter()
        .map(|&segment| ExportEntry {
            file_name: format!("{stem}_{}.{SEGMENT_EXTENSION}", segment.index + 1),
            segment,
        })
        .collect()
}
