//! EDF input handling and the in-memory recording model.

mod reader;
mod recording;

pub use reader::read_recording;
pub use recording::{Annotation, ChannelInfo, Recording};
