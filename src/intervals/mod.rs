//! Clean-interval extraction engine.
//!
//! The decision core of the pipeline: detect bad time ranges, merge them
//! into a disjoint set, derive the clean complement, and carve fixed-length
//! segments from it. Each stage is a pure function over the previous
//! stage's output; no state is threaded through.

mod detect;
mod interval;
mod merge;
mod select;

pub use detect::{DetectorConfig, detect};
pub use interval::{Interval, IntervalSource, TaggedInterval};
pub use merge::{complement, merge};
pub use select::{Segment, Selection, select};
