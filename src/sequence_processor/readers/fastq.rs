use super::{validate_residues, READ_BUFFER};
use crate::error::{Error, Result};
use crate::sequence_processor::core::{RecordStream, SequenceRecord, PHRED_QUALITY};
use bio::io::fastq::{self, FastqRead};
use std::io::{BufReader, Read};

const PHRED_OFFSET: u8 = 33;

fn parse_error(e: impl ToString) -> Error {
    Error::Parse {
        format: "fastq",
        message: e.to_string(),
    }
}

pub(crate) fn parse<R: Read + 'static>(reader: R) -> RecordStream {
    let records = fastq::Reader::new(BufReader::with_capacity(READ_BUFFER, reader)).records();
    Box::new(records.map(|result| {
        let record = result.map_err(parse_error)?;
        create_sequence_from_record(&record)
    }))
}

pub(crate) fn read_one<R: Read>(reader: R) -> Result<Option<SequenceRecord>> {
    let mut reader = fastq::Reader::new(reader);
    let mut record = fastq::Record::new();
    reader.read(&mut record).map_err(parse_error)?;
    if record.is_empty() {
        return Ok(None);
    }
    create_sequence_from_record(&record).map(Some)
}

fn create_sequence_from_record(record: &fastq::Record) -> Result<SequenceRecord> {
    validate_residues(record.id(), record.seq())?;
    if record.qual().len() != record.seq().len() {
        return Err(Error::malformed(
            record.id(),
            format!(
                "{} quality values for {} residues",
                record.qual().len(),
                record.seq().len()
            ),
        ));
    }
    let qualities = record
        .qual()
        .iter()
        .map(|&q| {
            q.checked_sub(PHRED_OFFSET)
                .ok_or_else(|| Error::malformed(record.id(), format!("invalid quality byte {q}")))
        })
        .collect::<Result<Vec<u8>>>()?;

    Ok(SequenceRecord::new(
        record.id(),
        record.desc().unwrap_or(""),
        record.seq().to_vec(),
    )
    .with_letter_annotation(PHRED_QUALITY, qualities))
}

pub(crate) fn encode_qualities(phred: &[u8]) -> Vec<u8> {
    phred.iter().map(|&q| q.saturating_add(PHRED_OFFSET)).collect()
}

/// FASTQ records are four lines; headers sit on every fourth line.
pub(crate) fn header_id(line: &[u8], line_number: u64) -> Option<String> {
    if line_number % 4 != 0 {
        return None;
    }
    let header = line.strip_prefix(b"@")?;
    let text = String::from_utf8_lossy(header);
    // bio splits FASTQ headers on spaces only.
    let id = text.trim_end().splitn(2, ' ').next();
    Some(id.unwrap_or("").to_string())
}
