use crate::error::Result;
use crate::sequence_processor::codon::CodonTable;
use crate::sequence_processor::core::{RecordStage, SequenceRecord, GAP};
use crate::types::{Case, Transcription, Translation};
use bio::alphabets::dna;
use tracing::trace;

/// Maps the alternative gap symbols `?` and `~` to `-`.
pub struct DashGap;

impl RecordStage for DashGap {
    fn name(&self) -> &'static str {
        "dash-gap"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        let residues = record
            .residues()
            .iter()
            .map(|&b| if b == b'?' || b == b'~' { GAP } else { b })
            .collect();
        Ok(Some(record.with_recoded_residues(residues)))
    }
}

pub struct CaseFold {
    pub case: Case,
}

impl RecordStage for CaseFold {
    fn name(&self) -> &'static str {
        match self.case {
            Case::Upper => "upper",
            Case::Lower => "lower",
        }
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        Ok(Some(match self.case {
            Case::Upper => record.to_uppercase(),
            Case::Lower => record.to_lowercase(),
        }))
    }
}

/// Drops records made only of gaps. An empty record counts as all gaps.
pub struct PruneEmpty;

impl RecordStage for PruneEmpty {
    fn name(&self) -> &'static str {
        "prune-empty"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        if record.residues().iter().all(|&b| b == GAP) {
            trace!("discarding all-gap sequence: {}", record.id);
            return Ok(None);
        }
        Ok(Some(record))
    }
}

pub struct Reverse;

impl RecordStage for Reverse {
    fn name(&self) -> &'static str {
        "reverse"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        Ok(Some(record.reversed(|residues| residues.to_vec())))
    }
}

pub struct ReverseComplement;

impl RecordStage for ReverseComplement {
    fn name(&self) -> &'static str {
        "reverse-complement"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        let rna = record.residues().iter().any(|&b| b == b'U' || b == b'u');
        Ok(Some(record.reversed(|residues| complement(residues, rna))))
    }
}

/// IUPAC complement; gaps and unknown symbols map to themselves.
pub fn complement(residues: &[u8], rna: bool) -> Vec<u8> {
    residues
        .iter()
        .map(|&b| {
            let b = match b {
                b'U' if rna => b'T',
                b'u' if rna => b't',
                other => other,
            };
            match dna::complement(b) {
                b'T' if rna => b'U',
                b't' if rna => b'u',
                other => other,
            }
        })
        .collect()
}

pub struct Ungap;

impl RecordStage for Ungap {
    fn name(&self) -> &'static str {
        "ungap"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        let keep: Vec<bool> = record.residues().iter().map(|&b| b != GAP).collect();
        Ok(Some(record.retain_columns(&keep)))
    }
}

pub struct Transcribe {
    pub direction: Transcription,
}

impl RecordStage for Transcribe {
    fn name(&self) -> &'static str {
        "transcribe"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        let (from, to) = match self.direction {
            Transcription::DnaToRna => (b'T', b'U'),
            Transcription::RnaToDna => (b'U', b'T'),
        };
        let residues = record
            .residues()
            .iter()
            .map(|&b| {
                if b == from {
                    to
                } else if b == from.to_ascii_lowercase() {
                    to.to_ascii_lowercase()
                } else {
                    b
                }
            })
            .collect();
        Ok(Some(record.with_recoded_residues(residues)))
    }
}

pub struct Translate {
    pub translation: Translation,
    pub table: CodonTable,
}

impl Translate {
    pub fn new(translation: Translation) -> Self {
        Self {
            translation,
            table: CodonTable::standard(),
        }
    }
}

impl RecordStage for Translate {
    fn name(&self) -> &'static str {
        "translate"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        let protein = self
            .table
            .translate(record.residues(), self.translation.stops_at_first_stop());
        Ok(Some(record.with_replaced_residues(protein)))
    }
}

/// Keeps residues `start..=end`, 1-based.
pub struct Cut {
    pub start: usize,
    pub end: usize,
}

impl RecordStage for Cut {
    fn name(&self) -> &'static str {
        "cut"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        Ok(Some(record.slice(self.start.saturating_sub(1)..self.end)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence_processor::core::{Annotation, PHRED_QUALITY};

    fn list(values: &[&str]) -> Annotation {
        Annotation::List(values.iter().map(|v| v.to_string()).collect())
    }

    fn rec(seq: &str) -> SequenceRecord {
        SequenceRecord::new("r", "", seq.as_bytes().to_vec())
    }

    fn apply(stage: &mut dyn RecordStage, seq: &str) -> Option<String> {
        stage
            .process(rec(seq))
            .unwrap()
            .map(|r| r.residues_str().into_owned())
    }

    #[test]
    fn test_dash_gap() {
        assert_eq!(apply(&mut DashGap, "A?C~G"), Some("A-C-G".to_string()));
    }

    #[test]
    fn test_prune_empty() {
        assert_eq!(apply(&mut PruneEmpty, "----"), None);
        assert_eq!(apply(&mut PruneEmpty, ""), None);
        assert_eq!(apply(&mut PruneEmpty, "--A-"), Some("--A-".to_string()));
    }

    #[test]
    fn test_reverse_complement_dna_and_rna() {
        assert_eq!(apply(&mut ReverseComplement, "AACG-t"), Some("a-CGTT".to_string()));
        assert_eq!(apply(&mut ReverseComplement, "AACGU"), Some("ACGUU".to_string()));
        assert_eq!(apply(&mut Reverse, "AACG"), Some("GCAA".to_string()));
    }

    #[test]
    fn test_ungap_keeps_qualities_aligned() {
        let record = rec("A-C-")
            .with_letter_annotation(PHRED_QUALITY, vec![10, 0, 20, 0])
            .with_annotation("sites", list(&["1", "2", "3", "4"]))
            .with_annotation("tags", list(&["x"]));
        let ungapped = Ungap.process(record).unwrap().unwrap();
        assert_eq!(ungapped.residues_str(), "AC");
        assert_eq!(ungapped.letter_annotation(PHRED_QUALITY), Some(&[10u8, 20][..]));
        assert_eq!(ungapped.annotation("sites"), Some(&list(&["1", "3"])));
        assert_eq!(ungapped.annotation("tags"), Some(&list(&["x"])));
    }

    #[test]
    fn test_reverse_complement_moves_annotations() {
        let record = rec("AAC")
            .with_letter_annotation(PHRED_QUALITY, vec![1, 2, 3])
            .with_annotation("sites", list(&["p", "q", "r"]));
        let out = ReverseComplement.process(record).unwrap().unwrap();
        assert_eq!(out.residues_str(), "GTT");
        assert_eq!(out.letter_annotation(PHRED_QUALITY), Some(&[3u8, 2, 1][..]));
        assert_eq!(out.annotation("sites"), Some(&list(&["r", "q", "p"])));
    }

    #[test]
    fn test_transcription_round_trip() {
        let mut forward = Transcribe {
            direction: Transcription::DnaToRna,
        };
        let mut back = Transcribe {
            direction: Transcription::RnaToDna,
        };
        assert_eq!(apply(&mut forward, "ATtg"), Some("AUug".to_string()));
        assert_eq!(apply(&mut back, "AUug"), Some("ATtg".to_string()));
    }

    #[test]
    fn test_translate_stops() {
        let mut full = Translate::new(Translation::DnaToProtein);
        let mut to_stop = Translate::new(Translation::RnaToProteinStop);
        assert_eq!(apply(&mut full, "ATGTAAGGG"), Some("M*G".to_string()));
        assert_eq!(apply(&mut to_stop, "AUGUAAGGG"), Some("M".to_string()));
    }

    #[test]
    fn test_cut_is_one_based_inclusive() {
        let mut cut = Cut { start: 2, end: 4 };
        assert_eq!(apply(&mut cut, "ACGTAC"), Some("CGT".to_string()));
        assert_eq!(apply(&mut cut, "AC"), Some("C".to_string()));
    }
}
