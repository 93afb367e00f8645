use super::index::FileIndex;
use crate::error::{Error, Result};
use crate::sequence_processor::core::{RecordLookup, RecordSource, RecordStream};
use crate::types::FileFormat;
use niffler::compression;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A sequence file on disk. Every `open` re-reads the file from the start,
/// decompressing transparently.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
    format: FileFormat,
    compression: compression::Format,
}

impl FileSource {
    /// Open `path`, guessing the format from its extension when none is given.
    pub fn new(path: &Path, format: Option<FileFormat>) -> Result<Self> {
        let format = match format {
            Some(format) => format,
            None => FileFormat::from_path(path)?,
        };
        let (_, compression) = decompressed(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            name: path.display().to_string(),
            format,
            compression,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_compressed(&self) -> bool {
        self.compression != compression::Format::No
    }

    /// Compression detected from the file's leading bytes.
    pub fn compression(&self) -> compression::Format {
        self.compression
    }
}

/// Compression implied by a file name's last extension.
pub fn compression_from_path(path: &Path) -> compression::Format {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("gz") => compression::Format::Gzip,
        Some("bz2") => compression::Format::Bzip,
        Some("xz") => compression::Format::Lzma,
        Some("zst") => compression::Format::Zstd,
        _ => compression::Format::No,
    }
}

/// Open `path` through niffler. Files too short to carry a compression
/// header, including empty ones, are read as plain text.
fn decompressed(path: &Path) -> Result<(Box<dyn Read>, compression::Format)> {
    let file = File::open(path)?;
    match niffler::get_reader(Box::new(file)) {
        Ok(opened) => Ok(opened),
        Err(niffler::Error::FileTooShort) => {
            Ok((Box::new(File::open(path)?), compression::Format::No))
        }
        Err(e) => Err(Error::Format(format!(
            "cannot read '{}': {}",
            path.display(),
            e
        ))),
    }
}

impl RecordSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn format(&self) -> FileFormat {
        self.format
    }

    fn open(&self) -> Result<RecordStream> {
        let (reader, _) = decompressed(&self.path)?;
        Ok(super::parse(reader, self.format))
    }

    fn is_indexable(&self) -> bool {
        !self.is_compressed()
    }

    fn index(&self) -> Result<Box<dyn RecordLookup>> {
        if self.is_compressed() {
            return Err(Error::UnsupportedOperation(format!(
                "'{}' is compressed and cannot be randomly accessed",
                self.name
            )));
        }
        Ok(Box::new(FileIndex::build(&self.path, self.format)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_and_tiny_files_read_as_plain() {
        let dir = tempdir().unwrap();
        let empty = dir.path().join("empty.fasta");
        std::fs::write(&empty, "").unwrap();
        let source = FileSource::new(&empty, None).unwrap();
        assert!(!source.is_compressed());
        assert_eq!(source.open().unwrap().count(), 0);

        let tiny = dir.path().join("tiny.fa");
        std::fs::write(&tiny, ">a\nA\n").unwrap();
        let source = FileSource::new(&tiny, None).unwrap();
        assert!(source.is_indexable());
        assert_eq!(source.index().unwrap().fetch("a").unwrap().residues_str(), "A");
    }

    #[test]
    fn test_compression_from_extension() {
        assert_eq!(compression_from_path(Path::new("a.fasta.gz")), compression::Format::Gzip);
        assert_eq!(compression_from_path(Path::new("a.fq.ZST")), compression::Format::Zstd);
        assert_eq!(compression_from_path(Path::new("a.fasta")), compression::Format::No);
    }
}
