pub mod codon;
pub mod core;
pub mod options;
pub mod pipeline;
pub mod readers;
pub mod sort;
pub mod stages;
pub mod writer;

// Re-export commonly used items
pub use core::{RecordSource, RecordStage, SequenceRecord};
pub use options::TransformOptions;
pub use pipeline::{compose, Pipeline};
pub use writer::{write_records, RecordWriter, WriteOptions};
