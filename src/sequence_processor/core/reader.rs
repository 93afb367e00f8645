use super::sequence::SequenceRecord;
use crate::error::{Error, Result};
use crate::types::FileFormat;

/// A lazy, single-pass stream of parsed records.
pub type RecordStream = Box<dyn Iterator<Item = Result<SequenceRecord>>>;

/// Random access to the records of a source by id.
pub trait RecordLookup {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn fetch(&mut self, id: &str) -> Result<SequenceRecord>;
}

/// A named collection of records in a known format.
///
/// `open` starts a fresh pass each time it is called on a re-readable source.
/// Two-pass stages rely on that, or on `index`, rather than iterating one
/// stream twice.
pub trait RecordSource {
    fn name(&self) -> &str;

    fn format(&self) -> FileFormat;

    fn open(&self) -> Result<RecordStream>;

    fn is_reiterable(&self) -> bool {
        true
    }

    fn is_indexable(&self) -> bool {
        false
    }

    fn index(&self) -> Result<Box<dyn RecordLookup>> {
        Err(Error::UnsupportedOperation(format!(
            "'{}' does not support random access",
            self.name()
        )))
    }
}
