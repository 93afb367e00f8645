use crate::error::{Error, Result};
use crate::sequence_processor::core::{RecordSource, RecordStream};
use crate::types::SortOrder;
use tracing::info;

/// Records of `source` in sorted order.
///
/// Pass one reads every record to collect its sort key; pass two fetches
/// whole records through the source's random-access index in key order.
/// Length order breaks ties by id; descending order is the exact reverse
/// of ascending.
pub fn sorted_records(source: &dyn RecordSource, order: SortOrder) -> Result<RecordStream> {
    if !source.is_indexable() {
        return Err(Error::UnsupportedOperation(format!(
            "sorting needs random access, which '{}' does not support",
            source.name()
        )));
    }

    info!("Indexing sequences of {} for {:?}", source.name(), order);
    let mut ids = match order {
        SortOrder::LengthAscending | SortOrder::LengthDescending => {
            let mut keyed = Vec::new();
            for record in source.open()? {
                let record = record?;
                keyed.push((record.len(), record.id));
            }
            keyed.sort();
            keyed.into_iter().map(|(_, id)| id).collect::<Vec<_>>()
        }
        SortOrder::NameAscending | SortOrder::NameDescending => {
            let mut ids = Vec::new();
            for record in source.open()? {
                ids.push(record?.id);
            }
            ids.sort();
            ids
        }
    };
    if order.is_descending() {
        ids.reverse();
    }

    let mut index = source.index()?;
    Ok(Box::new(ids.into_iter().map(move |id| index.fetch(&id))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence_processor::core::SequenceRecord;
    use crate::sequence_processor::readers::{MemorySource, OneShotSource};
    use crate::types::FileFormat;
    use std::io::Cursor;

    fn source() -> MemorySource {
        let records = [("b", "ACG"), ("c", "A"), ("a", "ACG"), ("d", "ACGTT")]
            .iter()
            .map(|(id, seq)| SequenceRecord::new(*id, "", seq.as_bytes().to_vec()))
            .collect();
        MemorySource::new("mem", FileFormat::Fasta, records)
    }

    fn ids(order: SortOrder) -> Vec<String> {
        sorted_records(&source(), order)
            .unwrap()
            .map(|r| r.unwrap().id)
            .collect()
    }

    #[test]
    fn test_length_order_breaks_ties_by_id() {
        assert_eq!(ids(SortOrder::LengthAscending), vec!["c", "a", "b", "d"]);
        assert_eq!(ids(SortOrder::LengthDescending), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn test_name_order() {
        assert_eq!(ids(SortOrder::NameAscending), vec!["a", "b", "c", "d"]);
        assert_eq!(ids(SortOrder::NameDescending), vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn test_stream_sources_cannot_sort() {
        let stdin_like =
            OneShotSource::new("pipe", FileFormat::Fasta, Box::new(Cursor::new(">a\nA\n")));
        assert!(matches!(
            sorted_records(&stdin_like, SortOrder::NameAscending),
            Err(Error::UnsupportedOperation(_))
        ));
    }
}
