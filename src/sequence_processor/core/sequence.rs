use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ops::Range;

/// Name of the per-residue annotation that carries FASTQ base qualities.
pub const PHRED_QUALITY: &str = "phred_quality";

pub const GAP: u8 = b'-';

/// A whole-record annotation value. `List` values whose length equals the
/// record length are positional and move together with the residues.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Text(String),
    Integer(i64),
    List(Vec<String>),
}

impl Annotation {
    fn is_positional(&self, record_len: usize) -> bool {
        matches!(self, Annotation::List(values) if values.len() == record_len)
    }
}

/// One sequence record. Stages consume a record and hand back a rebuilt one
/// instead of editing it in place; residue-moving helpers keep per-residue
/// annotations and positional annotations in step with the residues.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SequenceRecord {
    pub id: String,
    pub description: String,
    residues: Vec<u8>,
    letter_annotations: BTreeMap<String, Vec<u8>>,
    annotations: BTreeMap<String, Annotation>,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, description: impl Into<String>, residues: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            residues,
            letter_annotations: BTreeMap::new(),
            annotations: BTreeMap::new(),
        }
    }

    /// Attach a per-residue annotation. Panics if the length does not match;
    /// readers validate lengths before calling this.
    pub fn with_letter_annotation(mut self, name: impl Into<String>, values: Vec<u8>) -> Self {
        assert_eq!(
            values.len(),
            self.residues.len(),
            "per-residue annotation must match the record length"
        );
        self.letter_annotations.insert(name.into(), values);
        self
    }

    pub fn with_annotation(mut self, name: impl Into<String>, value: Annotation) -> Self {
        self.annotations.insert(name.into(), value);
        self
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> &[u8] {
        &self.residues
    }

    /// The residues as text, independent of any file format.
    pub fn residues_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.residues)
    }

    pub fn letter_annotation(&self, name: &str) -> Option<&[u8]> {
        self.letter_annotations.get(name).map(Vec::as_slice)
    }

    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.get(name)
    }

    pub fn to_uppercase(&self) -> Self {
        self.with_recoded_residues(self.residues.to_ascii_uppercase())
    }

    pub fn to_lowercase(&self) -> Self {
        self.with_recoded_residues(self.residues.to_ascii_lowercase())
    }

    /// Same id and description, new residues of the same length. Positions
    /// still line up, so every annotation is carried over.
    pub fn with_recoded_residues(&self, residues: Vec<u8>) -> Self {
        debug_assert_eq!(residues.len(), self.residues.len());
        Self {
            residues,
            ..self.clone()
        }
    }

    /// Same id and description, residues of unrelated shape (e.g. a protein
    /// translation). Positional annotations no longer apply and are dropped.
    pub fn with_replaced_residues(&self, residues: Vec<u8>) -> Self {
        let len = self.residues.len();
        Self {
            id: self.id.clone(),
            description: self.description.clone(),
            residues,
            letter_annotations: BTreeMap::new(),
            annotations: self
                .annotations
                .iter()
                .filter(|(_, value)| !value.is_positional(len))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    pub fn renamed(&self, id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            ..self.clone()
        }
    }

    /// Half-open slice, clamped to the record like a Python slice.
    pub fn slice(&self, range: Range<usize>) -> Self {
        let len = self.residues.len();
        let end = range.end.min(len);
        let start = range.start.min(end);
        self.rebuild(
            |values| values[start..end].to_vec(),
            |values| values[start..end].to_vec(),
        )
    }

    /// Reverse residue order. `complement` maps the reversed residues, so
    /// the same call covers plain reversal and reverse complement.
    pub fn reversed(&self, complement: impl Fn(&[u8]) -> Vec<u8>) -> Self {
        let mut record = self.rebuild(
            |values| values.iter().rev().copied().collect(),
            |values| values.iter().rev().cloned().collect(),
        );
        record.residues = complement(&record.residues);
        record
    }

    /// Keep only the columns whose `keep` entry is true.
    pub fn retain_columns(&self, keep: &[bool]) -> Self {
        debug_assert_eq!(keep.len(), self.residues.len());
        self.rebuild(
            |values| {
                values
                    .iter()
                    .zip(keep)
                    .filter(|&(_, &k)| k)
                    .map(|(&v, _)| v)
                    .collect()
            },
            |values| {
                values
                    .iter()
                    .zip(keep)
                    .filter(|&(_, &k)| k)
                    .map(|(v, _)| v.clone())
                    .collect()
            },
        )
    }

    fn rebuild(
        &self,
        bytes: impl Fn(&[u8]) -> Vec<u8>,
        strings: impl Fn(&[String]) -> Vec<String>,
    ) -> Self {
        let len = self.residues.len();
        Self {
            id: self.id.clone(),
            description: self.description.clone(),
            residues: bytes(&self.residues),
            letter_annotations: self
                .letter_annotations
                .iter()
                .map(|(k, v)| (k.clone(), bytes(v)))
                .collect(),
            annotations: self
                .annotations
                .iter()
                .map(|(k, v)| {
                    let value = match v {
                        Annotation::List(values) if v.is_positional(len) => {
                            Annotation::List(strings(values))
                        }
                        other => other.clone(),
                    };
                    (k.clone(), value)
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> Annotation {
        Annotation::List(values.iter().map(|v| v.to_string()).collect())
    }

    fn annotated() -> SequenceRecord {
        SequenceRecord::new("r1", "demo", b"ACGTA".to_vec())
            .with_letter_annotation(PHRED_QUALITY, vec![1, 2, 3, 4, 5])
            .with_annotation("sites", list(&["a", "b", "c", "d", "e"]))
            .with_annotation("source", Annotation::Text("lab".to_string()))
            .with_annotation("tags", list(&["x", "y"]))
    }

    #[test]
    fn test_slice_moves_annotations() {
        let cut = annotated().slice(1..3);
        assert_eq!(cut.residues(), b"CG");
        assert_eq!(cut.letter_annotation(PHRED_QUALITY), Some(&[2u8, 3][..]));
        assert_eq!(cut.annotation("sites"), Some(&list(&["b", "c"])));
        assert_eq!(cut.annotation("tags"), Some(&list(&["x", "y"])));
        assert_eq!(cut.annotation("source"), Some(&Annotation::Text("lab".to_string())));
    }

    #[test]
    fn test_slice_clamps_past_end() {
        let cut = annotated().slice(3..40);
        assert_eq!(cut.residues(), b"TA");
        assert!(annotated().slice(10..20).is_empty());
    }

    #[test]
    fn test_reverse_moves_annotations() {
        let rev = annotated().reversed(|r| r.to_vec());
        assert_eq!(rev.residues(), b"ATGCA");
        assert_eq!(rev.letter_annotation(PHRED_QUALITY), Some(&[5u8, 4, 3, 2, 1][..]));
        assert_eq!(rev.annotation("sites"), Some(&list(&["e", "d", "c", "b", "a"])));
        assert_eq!(rev.annotation("tags"), Some(&list(&["x", "y"])));
        assert_eq!(rev.annotation("source"), Some(&Annotation::Text("lab".to_string())));
    }

    #[test]
    fn test_retain_columns_moves_annotations() {
        let kept = annotated().retain_columns(&[true, false, true, false, true]);
        assert_eq!(kept.residues(), b"AGA");
        assert_eq!(kept.letter_annotation(PHRED_QUALITY), Some(&[1u8, 3, 5][..]));
        assert_eq!(kept.annotation("sites"), Some(&list(&["a", "c", "e"])));
        assert_eq!(kept.annotation("tags"), Some(&list(&["x", "y"])));
    }

    #[test]
    fn test_case_fold_keeps_annotations() {
        let lower = annotated().to_lowercase();
        assert_eq!(lower.residues_str(), "acgta");
        assert_eq!(lower.letter_annotation(PHRED_QUALITY).map(|q| q.len()), Some(5));
    }

    #[test]
    fn test_replaced_residues_drop_positional_data() {
        let protein = annotated().with_replaced_residues(b"T".to_vec());
        assert!(protein.letter_annotation(PHRED_QUALITY).is_none());
        assert!(protein.annotation("sites").is_none());
        assert!(protein.annotation("source").is_some());
        assert_eq!(protein.annotation("tags"), Some(&list(&["x", "y"])));
    }
}
