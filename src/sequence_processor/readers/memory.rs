use crate::error::{Error, Result};
use crate::sequence_processor::core::{RecordLookup, RecordSource, RecordStream, SequenceRecord};
use crate::types::FileFormat;
use std::collections::HashMap;

/// Records held in memory. Re-readable and indexable; handy for tests and
/// for callers that already hold a parsed collection.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    format: FileFormat,
    records: Vec<SequenceRecord>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, format: FileFormat, records: Vec<SequenceRecord>) -> Self {
        Self {
            name: name.into(),
            format,
            records,
        }
    }
}

impl RecordSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn format(&self) -> FileFormat {
        self.format
    }

    fn open(&self) -> Result<RecordStream> {
        Ok(Box::new(self.records.clone().into_iter().map(Ok)))
    }

    fn is_indexable(&self) -> bool {
        true
    }

    fn index(&self) -> Result<Box<dyn RecordLookup>> {
        let mut by_id = HashMap::with_capacity(self.records.len());
        for record in &self.records {
            if by_id.insert(record.id.clone(), record.clone()).is_some() {
                return Err(Error::data_shape(
                    "index",
                    format!("duplicate record id '{}' in '{}'", record.id, self.name),
                ));
            }
        }
        Ok(Box::new(MemoryLookup { by_id }))
    }
}

struct MemoryLookup {
    by_id: HashMap<String, SequenceRecord>,
}

impl RecordLookup for MemoryLookup {
    fn len(&self) -> usize {
        self.by_id.len()
    }

    fn fetch(&mut self, id: &str) -> Result<SequenceRecord> {
        self.by_id
            .get(id)
            .cloned()
            .ok_or_else(|| Error::malformed(id, "not present in index"))
    }
}
