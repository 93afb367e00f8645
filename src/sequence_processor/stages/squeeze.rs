use crate::error::{Error, Result};
use crate::sequence_processor::core::{RecordStage, RecordStream, SequenceRecord, GAP};
use tracing::info;

const STAGE: &str = "squeeze";

/// First pass of squeeze: a column is removable when every record has a gap
/// there. All records must share one length.
pub fn gap_columns(records: RecordStream) -> Result<Vec<bool>> {
    let mut mask: Option<Vec<bool>> = None;
    let mut seen = 0u64;
    for record in records {
        let record = record?;
        seen += 1;
        match mask.as_mut() {
            None => mask = Some(record.residues().iter().map(|&b| b == GAP).collect()),
            Some(mask) => {
                if record.len() != mask.len() {
                    return Err(Error::data_shape(
                        STAGE,
                        format!(
                            "records must be aligned: '{}' has length {}, expected {}",
                            record.id,
                            record.len(),
                            mask.len()
                        ),
                    ));
                }
                for (column, &residue) in mask.iter_mut().zip(record.residues()) {
                    *column &= residue == GAP;
                }
            }
        }
    }
    let mask = mask.unwrap_or_default();
    info!(
        "Squeeze found {} all-gap columns across {} records",
        mask.iter().filter(|&&gap| gap).count(),
        seen
    );
    Ok(mask)
}

/// Second pass of squeeze: drop the all-gap columns from each record.
pub struct Squeeze {
    keep: Vec<bool>,
}

impl Squeeze {
    pub fn new(gap_columns: &[bool]) -> Self {
        Self {
            keep: gap_columns.iter().map(|&gap| !gap).collect(),
        }
    }
}

impl RecordStage for Squeeze {
    fn name(&self) -> &'static str {
        STAGE
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        if record.len() != self.keep.len() {
            return Err(Error::data_shape(
                STAGE,
                format!(
                    "'{}' has length {} but the alignment has {} columns",
                    record.id,
                    record.len(),
                    self.keep.len()
                ),
            ));
        }
        Ok(Some(record.retain_columns(&self.keep)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence_processor::core::{Annotation, PHRED_QUALITY};

    fn stream(seqs: &[&str]) -> RecordStream {
        let records: Vec<_> = seqs
            .iter()
            .enumerate()
            .map(|(i, s)| Ok(SequenceRecord::new(format!("r{i}"), "", s.as_bytes().to_vec())))
            .collect();
        Box::new(records.into_iter())
    }

    #[test]
    fn test_mask_requires_gap_in_every_record() {
        let mask = gap_columns(stream(&["A-C-", "A-G-", "--T-"])).unwrap();
        assert_eq!(mask, vec![false, true, false, true]);
    }

    #[test]
    fn test_unequal_lengths_rejected() {
        let result = gap_columns(stream(&["A-C", "A-"]));
        assert!(matches!(result, Err(Error::DataShape { stage: "squeeze", .. })));
    }

    #[test]
    fn test_empty_source_gives_empty_mask() {
        assert!(gap_columns(stream(&[])).unwrap().is_empty());
    }

    #[test]
    fn test_squeeze_removes_columns() {
        let mask = gap_columns(stream(&["A-C", "A-G", "A-T"])).unwrap();
        let mut squeeze = Squeeze::new(&mask);
        let out = squeeze
            .process(SequenceRecord::new("x", "", b"A-C".to_vec()))
            .unwrap()
            .unwrap();
        assert_eq!(out.residues_str(), "AC");
        assert!(squeeze
            .process(SequenceRecord::new("y", "", b"AC".to_vec()))
            .is_err());
    }

    #[test]
    fn test_squeeze_moves_annotations() {
        let mask = gap_columns(stream(&["A-C", "G-T"])).unwrap();
        let sites = Annotation::List(vec!["1".to_string(), "2".to_string(), "3".to_string()]);
        let record = SequenceRecord::new("x", "", b"A-C".to_vec())
            .with_letter_annotation(PHRED_QUALITY, vec![30, 0, 40])
            .with_annotation("sites", sites);
        let out = Squeeze::new(&mask).process(record).unwrap().unwrap();
        assert_eq!(out.residues_str(), "AC");
        assert_eq!(out.letter_annotation(PHRED_QUALITY), Some(&[30u8, 40][..]));
        assert_eq!(
            out.annotation("sites"),
            Some(&Annotation::List(vec!["1".to_string(), "3".to_string()]))
        );
    }
}
