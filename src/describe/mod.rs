//! Descriptive statistics for sequence collections.
//!
//! A collection is described in a single streaming pass; nothing but a few
//! running counters is kept, so arbitrarily large files can be summarised.

mod report;

pub use report::SummaryReport;

use crate::error::Result;
use crate::sequence_processor::core::SequenceRecord;

/// Summary of one collection, as reported by `info`.
///
/// # Fields
///
/// * `name` - the collection's name, normally the path it was read from.
/// * `is_alignment` - whether every record matched the longest length seen
///   before it (see [`CollectionDescriber::observe`]).
/// * `min_length` / `max_length` - shortest and longest record; both 0 for an
///   empty collection.
/// * `avg_length` - mean record length.
/// * `count` - number of records.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSummary {
    pub name: String,
    pub is_alignment: bool,
    pub min_length: usize,
    pub max_length: usize,
    pub avg_length: f64,
    pub count: u64,
}

/// Running state for one collection.
#[derive(Debug, Clone)]
pub struct CollectionDescriber {
    count: u64,
    min_length: usize,
    max_length: usize,
    avg_length: f64,
    is_alignment: bool,
}

impl Default for CollectionDescriber {
    fn default() -> Self {
        Self {
            count: 0,
            min_length: usize::MAX,
            max_length: 0,
            avg_length: 0.0,
            is_alignment: true,
        }
    }
}

impl CollectionDescriber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one more record of `length` residues.
    ///
    /// The alignment flag compares each record only with the longest record
    /// seen before it, not with every earlier record: `[5, 5, 3]` and
    /// `[3, 5, 5]` both lose the flag, at the third and second record.
    /// The mean is updated incrementally so it cannot overflow.
    pub fn observe(&mut self, length: usize) {
        self.count += 1;
        if self.count > 1 && length != self.max_length {
            self.is_alignment = false;
        }
        self.max_length = self.max_length.max(length);
        self.min_length = self.min_length.min(length);
        self.avg_length += (length as f64 - self.avg_length) / self.count as f64;
    }

    pub fn finish(self, name: impl Into<String>) -> CollectionSummary {
        if self.count == 0 {
            return CollectionSummary {
                name: name.into(),
                is_alignment: true,
                min_length: 0,
                max_length: 0,
                avg_length: 0.0,
                count: 0,
            };
        }
        CollectionSummary {
            name: name.into(),
            is_alignment: self.is_alignment,
            min_length: self.min_length,
            max_length: self.max_length,
            avg_length: self.avg_length,
            count: self.count,
        }
    }
}

/// Describe a stream of records. The first record error aborts the pass.
pub fn describe<I>(name: impl Into<String>, records: I) -> Result<CollectionSummary>
where
    I: IntoIterator<Item = Result<SequenceRecord>>,
{
    let mut describer = CollectionDescriber::new();
    for record in records {
        describer.observe(record?.len());
    }
    Ok(describer.finish(name))
}
