use crate::error::Result;
use crate::sequence_processor::core::{RecordStage, SequenceRecord};

/// Passes the first `limit` records, then reports itself finished so the
/// pipeline stops reading.
pub struct Head {
    limit: usize,
    emitted: usize,
}

impl Head {
    pub fn new(limit: usize) -> Self {
        Self { limit, emitted: 0 }
    }
}

impl RecordStage for Head {
    fn name(&self) -> &'static str {
        "head"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        if self.emitted < self.limit {
            self.emitted += 1;
            Ok(Some(record))
        } else {
            Ok(None)
        }
    }

    fn is_finished(&self) -> bool {
        self.emitted >= self.limit
    }
}

/// Passes the last `limit` of `total` records. `total` comes from a separate
/// counting pass over the source.
pub struct Tail {
    skip: u64,
    position: u64,
}

impl Tail {
    pub fn new(limit: usize, total: u64) -> Self {
        Self {
            skip: total.saturating_sub(limit as u64),
            position: 0,
        }
    }
}

impl RecordStage for Tail {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        if self.position < self.skip {
            self.position += 1;
            return Ok(None);
        }
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_finishes() {
        let mut head = Head::new(2);
        assert!(!head.is_finished());
        for i in 0..2 {
            let record = SequenceRecord::new(format!("r{i}"), "", b"A".to_vec());
            assert!(head.process(record).unwrap().is_some());
        }
        assert!(head.is_finished());
        assert!(Head::new(0).is_finished());
    }

    #[test]
    fn test_tail_skips_leading_records() {
        let mut tail = Tail::new(2, 5);
        let kept: Vec<_> = (0..5)
            .filter_map(|i| {
                tail.process(SequenceRecord::new(format!("r{i}"), "", b"A".to_vec()))
                    .unwrap()
            })
            .map(|r| r.id)
            .collect();
        assert_eq!(kept, vec!["r3", "r4"]);

        let mut everything = Tail::new(10, 3);
        assert!(everything
            .process(SequenceRecord::new("only", "", b"A".to_vec()))
            .unwrap()
            .is_some());
    }
}
