use super::{validate_residues, READ_BUFFER};
use crate::error::{Error, Result};
use crate::sequence_processor::core::{RecordStream, SequenceRecord};
use bio::io::fasta::{self, FastaRead};
use std::io::{BufReader, Read};

fn parse_error(e: impl ToString) -> Error {
    Error::Parse {
        format: "fasta",
        message: e.to_string(),
    }
}

pub(crate) fn parse<R: Read + 'static>(reader: R) -> RecordStream {
    let records = fasta::Reader::new(BufReader::with_capacity(READ_BUFFER, reader)).records();
    Box::new(records.map(|result| {
        let record = result.map_err(parse_error)?;
        create_sequence_from_record(&record)
    }))
}

/// Parse the single record starting at the reader's current position.
pub(crate) fn read_one<R: Read>(reader: R) -> Result<Option<SequenceRecord>> {
    let mut reader = fasta::Reader::new(reader);
    let mut record = fasta::Record::new();
    reader.read(&mut record).map_err(parse_error)?;
    if record.is_empty() {
        return Ok(None);
    }
    create_sequence_from_record(&record).map(Some)
}

fn create_sequence_from_record(record: &fasta::Record) -> Result<SequenceRecord> {
    validate_residues(record.id(), record.seq())?;
    Ok(SequenceRecord::new(
        record.id(),
        record.desc().unwrap_or(""),
        record.seq().to_vec(),
    ))
}

/// Header line id for the offset index, or None for sequence lines.
pub(crate) fn header_id(line: &[u8], _line_number: u64) -> Option<String> {
    let header = line.strip_prefix(b">")?;
    let text = String::from_utf8_lossy(header);
    // Same split as bio's header parser, so ids agree with parsed records.
    let id = text.trim_end().splitn(2, char::is_whitespace).next();
    Some(id.unwrap_or("").to_string())
}
