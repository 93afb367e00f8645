mod fasta;
mod fastq;
mod file;
mod index;
mod memory;
mod stream;

pub use file::{compression_from_path, FileSource};
pub use index::FileIndex;
pub use memory::MemorySource;
pub use stream::OneShotSource;

pub(crate) use fastq::encode_qualities;

use crate::error::{Error, Result};
use crate::sequence_processor::core::RecordStream;
use crate::types::FileFormat;
use std::io::Read;

const READ_BUFFER: usize = 1024 * 1024;

/// Parse `reader` as `format`, lazily.
pub fn parse<R: Read + 'static>(reader: R, format: FileFormat) -> RecordStream {
    match format {
        FileFormat::Fasta => fasta::parse(reader),
        FileFormat::Fastq => fastq::parse(reader),
    }
}

/// Residues must be printable, non-space ASCII. Anything else is treated as
/// a corrupt record rather than silently carried through.
pub(crate) fn validate_residues(id: &str, residues: &[u8]) -> Result<()> {
    match residues.iter().position(|b| !b.is_ascii_graphic()) {
        Some(pos) => Err(Error::malformed(
            id,
            format!(
                "unexpected byte 0x{:02x} at position {}",
                residues[pos],
                pos + 1
            ),
        )),
        None => Ok(()),
    }
}
