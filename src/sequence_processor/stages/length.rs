use crate::error::Result;
use crate::sequence_processor::core::{RecordStage, SequenceRecord};
use tracing::trace;

/// Drops records longer than `max_length`.
pub struct MaxLengthDiscard {
    pub max_length: usize,
}

impl RecordStage for MaxLengthDiscard {
    fn name(&self) -> &'static str {
        "max-length"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        if record.len() > self.max_length {
            trace!("discarding long sequence: {} length={}", record.id, record.len());
            return Ok(None);
        }
        Ok(Some(record))
    }
}

/// Drops records shorter than `min_length`.
pub struct MinLengthDiscard {
    pub min_length: usize,
}

impl RecordStage for MinLengthDiscard {
    fn name(&self) -> &'static str {
        "min-length"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        if record.len() < self.min_length {
            trace!("discarding short sequence: {} length={}", record.id, record.len());
            return Ok(None);
        }
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        let mut max = MaxLengthDiscard { max_length: 4 };
        let mut min = MinLengthDiscard { min_length: 4 };
        let four = SequenceRecord::new("a", "", b"ACGT".to_vec());
        let five = SequenceRecord::new("b", "", b"ACGTA".to_vec());
        let three = SequenceRecord::new("c", "", b"ACG".to_vec());

        assert!(max.process(four.clone()).unwrap().is_some());
        assert!(max.process(five).unwrap().is_none());
        assert!(min.process(four).unwrap().is_some());
        assert!(min.process(three).unwrap().is_none());
    }
}
