pub(crate) mod processor;
pub(crate) mod sequence;
pub(crate) mod stats;
mod reader;

pub use processor::RecordStage;
pub use reader::{RecordLookup, RecordSource, RecordStream};
pub use sequence::{Annotation, SequenceRecord, GAP, PHRED_QUALITY};
pub use stats::ProcessingStats;
