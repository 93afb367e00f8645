use crate::error::{Error, Result};
use crate::sequence_processor::core::{SequenceRecord, PHRED_QUALITY};
use crate::sequence_processor::readers::encode_qualities;
use crate::types::FileFormat;
use bio::io::{fasta, fastq};
use std::io::{BufWriter, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    pub format: FileFormat,
    /// Residues per line for FASTA output; `None` or `Some(0)` writes each
    /// sequence on one line.
    pub line_wrap: Option<usize>,
}

impl WriteOptions {
    pub fn new(format: FileFormat) -> Self {
        Self {
            format,
            line_wrap: None,
        }
    }

    pub fn with_line_wrap(mut self, line_wrap: Option<usize>) -> Self {
        self.line_wrap = line_wrap;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.line_wrap.is_some() && self.format != FileFormat::Fasta {
            return Err(Error::UnsupportedOperation(format!(
                "line wrapping is only available for fasta output, not {}",
                self.format
            )));
        }
        Ok(())
    }
}

enum Inner<W: Write> {
    Fasta(fasta::Writer<W>),
    WrappedFasta { writer: BufWriter<W>, width: usize },
    Fastq(fastq::Writer<W>),
}

/// Serialises records to a sink in one format.
pub struct RecordWriter<W: Write> {
    inner: Inner<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(sink: W, options: &WriteOptions) -> Result<Self> {
        options.validate()?;
        let inner = match (options.format, options.line_wrap) {
            (FileFormat::Fasta, Some(width)) if width > 0 => Inner::WrappedFasta {
                writer: BufWriter::new(sink),
                width,
            },
            (FileFormat::Fasta, _) => Inner::Fasta(fasta::Writer::new(sink)),
            (FileFormat::Fastq, _) => Inner::Fastq(fastq::Writer::new(sink)),
        };
        Ok(Self { inner })
    }

    pub fn write(&mut self, record: &SequenceRecord) -> Result<()> {
        let desc = if record.description.is_empty() {
            None
        } else {
            Some(record.description.as_str())
        };

        match &mut self.inner {
            Inner::Fasta(writer) => writer.write(&record.id, desc, record.residues())?,
            Inner::WrappedFasta { writer, width } => {
                match desc {
                    Some(desc) => writeln!(writer, ">{} {}", record.id, desc)?,
                    None => writeln!(writer, ">{}", record.id)?,
                }
                for line in record.residues().chunks(*width) {
                    writer.write_all(line)?;
                    writer.write_all(b"\n")?;
                }
            }
            Inner::Fastq(writer) => {
                let phred = record
                    .letter_annotation(PHRED_QUALITY)
                    .filter(|q| q.len() == record.len())
                    .ok_or_else(|| {
                        Error::UnsupportedOperation(format!(
                            "record '{}' has no base qualities; fastq output needs them",
                            record.id
                        ))
                    })?;
                writer.write(&record.id, desc, record.residues(), &encode_qualities(phred))?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match &mut self.inner {
            Inner::Fasta(writer) => writer.flush()?,
            Inner::WrappedFasta { writer, .. } => writer.flush()?,
            Inner::Fastq(writer) => writer.flush()?,
        }
        Ok(())
    }
}

/// Write every record from `records` to `sink`, stopping at the first error.
/// Returns the number of records written.
pub fn write_records<W, I>(records: I, sink: W, options: &WriteOptions) -> Result<u64>
where
    W: Write,
    I: IntoIterator<Item = Result<SequenceRecord>>,
{
    let mut writer = RecordWriter::new(sink, options)?;
    let mut written = 0;
    for record in records {
        writer.write(&record?)?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}
