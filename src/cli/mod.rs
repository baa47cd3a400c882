pub mod args;
pub mod logger;
pub mod pipeline;

pub use args::Args;
pub use pipeline::{BatchPipeline, DecodeSummary, Pipeline, is_batch_pattern, is_directory, output_file_for};
