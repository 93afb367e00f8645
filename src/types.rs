use crate::error::{Error, Result};
use std::fmt;
use std::path::Path;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
    #[value(name = "fasta")]
    Fasta,
    #[value(name = "fastq")]
    Fastq,
}

/// Formats people commonly ask for that this build has no parser for.
const KNOWN_UNSUPPORTED: &[&str] = &[
    "genbank", "gb", "embl", "clustal", "nexus", "phylip", "phylip-relaxed", "stockholm", "sff",
    "swiss", "tab", "qual", "ig", "pir", "seqxml",
];

const COMPRESSION_EXTENSIONS: &[&str] = &["gz", "bz2", "xz", "zst"];

impl FileFormat {
    pub fn from_name(name: &str) -> Result<Self> {
        let lowered = name.trim_start_matches('.').to_ascii_lowercase();
        match lowered.as_str() {
            "fasta" | "fa" | "fas" | "fna" | "faa" | "ffn" | "mpfa" | "afa" | "afasta" | "aln" => {
                Ok(FileFormat::Fasta)
            }
            "fastq" | "fq" => Ok(FileFormat::Fastq),
            other if KNOWN_UNSUPPORTED.contains(&other) => Err(Error::Format(format!(
                "the '{other}' format is not supported"
            ))),
            other => Err(Error::Format(format!("unrecognized format '{other}'"))),
        }
    }

    /// Guess the format from a file name, looking through compression suffixes.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut stem = path.to_path_buf();
        loop {
            let ext = stem
                .extension()
                .and_then(|ext| ext.to_str())
                .map(str::to_ascii_lowercase)
                .ok_or_else(|| {
                    Error::Format(format!(
                        "cannot determine the format of '{}' from its extension",
                        path.display()
                    ))
                })?;
            if COMPRESSION_EXTENSIONS.contains(&ext.as_str()) {
                stem = stem.with_extension("");
                continue;
            }
            return Self::from_name(&ext);
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FileFormat::Fasta => "fasta",
            FileFormat::Fastq => "fastq",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    #[value(name = "length-asc")]
    LengthAscending,
    #[value(name = "length-desc")]
    LengthDescending,
    #[value(name = "name-asc")]
    NameAscending,
    #[value(name = "name-desc")]
    NameDescending,
}

impl SortOrder {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::LengthDescending | SortOrder::NameDescending)
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    #[value(name = "upper")]
    Upper,
    #[value(name = "lower")]
    Lower,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transcription {
    #[value(name = "dna2rna")]
    DnaToRna,
    #[value(name = "rna2dna")]
    RnaToDna,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Translation {
    #[value(name = "dna2protein")]
    DnaToProtein,
    #[value(name = "dna2proteinstop")]
    DnaToProteinStop,
    #[value(name = "rna2protein")]
    RnaToProtein,
    #[value(name = "rna2proteinstop")]
    RnaToProteinStop,
}

impl Translation {
    pub fn stops_at_first_stop(&self) -> bool {
        matches!(
            self,
            Translation::DnaToProteinStop | Translation::RnaToProteinStop
        )
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    #[value(name = "tab")]
    Tab,
    #[value(name = "csv")]
    Csv,
    #[value(name = "align")]
    Align,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            FileFormat::from_path(&PathBuf::from("reads.fq")).unwrap(),
            FileFormat::Fastq
        );
        assert_eq!(
            FileFormat::from_path(&PathBuf::from("aln.afasta.gz")).unwrap(),
            FileFormat::Fasta
        );
    }

    #[test]
    fn test_unsupported_and_unknown_formats() {
        match FileFormat::from_name("genbank") {
            Err(Error::Format(msg)) => assert!(msg.contains("not supported")),
            other => panic!("expected format error, got {:?}", other),
        }
        match FileFormat::from_path(&PathBuf::from("notes.docx")) {
            Err(Error::Format(msg)) => assert!(msg.contains("unrecognized")),
            other => panic!("expected format error, got {:?}", other),
        }
        assert!(FileFormat::from_path(&PathBuf::from("no_extension")).is_err());
    }
}
