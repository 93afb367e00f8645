use crate::error::{Error, Result};
use crate::sequence_processor::core::{RecordLookup, SequenceRecord};
use crate::types::FileFormat;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Byte offsets of every record header in an uncompressed sequence file.
///
/// Building the index is one scan over the file; a lookup seeks to the
/// stored offset and parses exactly one record.
#[derive(Debug)]
pub struct FileIndex {
    path: PathBuf,
    format: FileFormat,
    file: File,
    offsets: HashMap<String, u64>,
}

impl FileIndex {
    pub fn build(path: &Path, format: FileFormat) -> Result<Self> {
        let header_id = match format {
            FileFormat::Fasta => super::fasta::header_id,
            FileFormat::Fastq => super::fastq::header_id,
        };

        let mut reader = BufReader::new(File::open(path)?);
        let mut offsets = HashMap::new();
        let mut line = Vec::new();
        let mut offset = 0u64;
        let mut line_number = 0u64;

        loop {
            line.clear();
            let read = reader.read_until(b'\n', &mut line)?;
            if read == 0 {
                break;
            }
            if let Some(id) = header_id(&line, line_number) {
                if offsets.insert(id.clone(), offset).is_some() {
                    return Err(Error::data_shape(
                        "index",
                        format!("duplicate record id '{}' in '{}'", id, path.display()),
                    ));
                }
            }
            offset += read as u64;
            line_number += 1;
        }

        debug!("Indexed {} records in {}", offsets.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            format,
            file: File::open(path)?,
            offsets,
        })
    }
}

impl RecordLookup for FileIndex {
    fn len(&self) -> usize {
        self.offsets.len()
    }

    fn fetch(&mut self, id: &str) -> Result<SequenceRecord> {
        let offset = *self.offsets.get(id).ok_or_else(|| {
            Error::malformed(id, format!("not present in '{}'", self.path.display()))
        })?;
        self.file.seek(SeekFrom::Start(offset))?;
        let record = match self.format {
            FileFormat::Fasta => super::fasta::read_one(&mut self.file)?,
            FileFormat::Fastq => super::fastq::read_one(&mut self.file)?,
        };
        record.ok_or_else(|| {
            Error::malformed(id, format!("no record at byte {} of '{}'", offset, self.path.display()))
        })
    }
}
