//! First-occurrence-wins deduplication. Both stages remember every key they
//! have seen for the whole run.

use crate::error::{Error, Result};
use crate::sequence_processor::core::{RecordStage, SequenceRecord};
use seahash::SeaHasher;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::hash::BuildHasherDefault;
use tracing::trace;

type DigestSet = HashSet<[u8; 32], BuildHasherDefault<SeaHasher>>;

/// Checksum of a record's residues, case-insensitive.
pub fn content_checksum(residues: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(residues.to_ascii_uppercase());
    hasher.finalize().into()
}

#[derive(Default)]
pub struct DeduplicateSequences {
    seen: DigestSet,
}

impl RecordStage for DeduplicateSequences {
    fn name(&self) -> &'static str {
        "deduplicate-sequences"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        if !self.seen.insert(content_checksum(record.residues())) {
            trace!("discarding duplicate sequence: {}", record.id);
            return Ok(None);
        }
        Ok(Some(record))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaxonKey {
    Numeric(i64),
    Name(String),
}

impl TaxonKey {
    /// The whole id, or the integer before the first `|` when there is one.
    pub fn from_id(id: &str) -> Result<Self> {
        match id.split_once('|') {
            Some((taxon, _)) => taxon.trim().parse::<i64>().map(TaxonKey::Numeric).map_err(|_| {
                Error::malformed(id, format!("taxon '{}' before '|' is not an integer", taxon))
            }),
            None => Ok(TaxonKey::Name(id.to_string())),
        }
    }
}

#[derive(Default)]
pub struct DeduplicateTaxa {
    seen: HashSet<TaxonKey>,
}

impl RecordStage for DeduplicateTaxa {
    fn name(&self) -> &'static str {
        "deduplicate-taxa"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        let key = TaxonKey::from_id(&record.id)?;
        if !self.seen.insert(key) {
            trace!("discarding duplicate taxon: {}", record.id);
            return Ok(None);
        }
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(stage: &mut dyn RecordStage, records: &[(&str, &str)]) -> Vec<String> {
        records
            .iter()
            .filter_map(|(id, seq)| {
                stage
                    .process(SequenceRecord::new(*id, "", seq.as_bytes().to_vec()))
                    .unwrap()
            })
            .map(|r| r.id)
            .collect()
    }

    #[test]
    fn test_first_sequence_wins() {
        let mut stage = DeduplicateSequences::default();
        let kept = run(&mut stage, &[("a", "ACGT"), ("b", "ACGT"), ("c", "TTTT"), ("d", "acgt")]);
        assert_eq!(kept, vec!["a", "c"]);
    }

    #[test]
    fn test_taxon_prefix_is_numeric() {
        let mut stage = DeduplicateTaxa::default();
        let kept = run(
            &mut stage,
            &[("12|x", "A"), ("12|y", "C"), ("012|z", "G"), ("12", "T"), ("12", "T")],
        );
        assert_eq!(kept, vec!["12|x", "12"]);
    }

    #[test]
    fn test_non_numeric_taxon_is_fatal() {
        let mut stage = DeduplicateTaxa::default();
        let result = stage.process(SequenceRecord::new("abc|1", "", b"A".to_vec()));
        assert!(matches!(result, Err(Error::MalformedRecord { .. })));
    }
}
