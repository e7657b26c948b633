//! Batch coordination and the per-file pipeline.

mod coordinator;
mod processor;
pub mod progress;

pub use coordinator::{
    ProcessCheck, collect_input_files, output_dir_for, output_stem_for, should_process,
};
pub use processor::{ProcessResult, process_file};
