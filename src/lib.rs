pub mod cli;
pub mod commands;
pub mod config;
pub mod describe;
pub mod error;
pub mod sequence_processor;
pub mod types;
pub mod utils;

// Re-export main API
pub use describe::{describe, CollectionDescriber, CollectionSummary};
pub use error::{Error, Result};
pub use sequence_processor::{compose, Pipeline, RecordSource, SequenceRecord, TransformOptions};
