//! Building and running a chain of record stages.
//!
//! Stages are applied in a fixed order no matter which options are set:
//!
//! 1. max-length, min-length
//! 2. deduplicate-sequences
//! 3. deduplicate-taxa
//! 4. dash-gap
//! 5. first-name
//! 6. upper / lower
//! 7. prune-empty
//! 8. reverse, reverse-complement
//! 9. ungap
//! 10. name-prefix, name-suffix
//! 11. pattern-include, pattern-exclude
//! 12. pattern-replace
//! 13. head or tail
//! 14. strip-range
//! 15. transcribe, translate
//! 16. squeeze
//! 17. cut
//!
//! Sorting is not a stage: it replaces the record source, so every stage
//! sees sorted input.

use super::core::{ProcessingStats, RecordSource, RecordStage, RecordStream, SequenceRecord};
use super::options::TransformOptions;
use super::sort::sorted_records;
use super::stages::*;
use crate::error::{Error, Result};
use tracing::{debug, info};

/// A lazy, pull-based run of stages over a record stream.
///
/// Each call to `next` pulls source records until one makes it through every
/// stage. Iteration ends at the first error, when the source runs dry, or as
/// soon as any stage reports it is finished.
pub struct Pipeline {
    records: RecordStream,
    stages: Vec<Box<dyn RecordStage>>,
    stats: ProcessingStats,
    done: bool,
}

impl Pipeline {
    /// A pipeline with no stages; records pass through unchanged.
    pub fn new(records: RecordStream) -> Self {
        Self {
            records,
            stages: Vec::new(),
            stats: ProcessingStats::default(),
            done: false,
        }
    }

    pub fn push(&mut self, stage: Box<dyn RecordStage>) {
        debug!("Applying {} stage", stage.name());
        self.stages.push(stage);
    }

    pub fn with_stage(mut self, stage: impl RecordStage + 'static) -> Self {
        self.push(Box::new(stage));
        self
    }

    /// Stage names in application order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn stats(&self) -> ProcessingStats {
        self.stats
    }

    fn fail(&mut self, error: Error) -> Option<Result<SequenceRecord>> {
        self.done = true;
        Some(Err(error))
    }
}

impl Iterator for Pipeline {
    type Item = Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        'records: loop {
            if self.done || self.stages.iter().any(|stage| stage.is_finished()) {
                self.done = true;
                return None;
            }

            let mut record = match self.records.next() {
                None => {
                    self.done = true;
                    return None;
                }
                Some(Err(e)) => return self.fail(e),
                Some(Ok(record)) => record,
            };
            self.stats.read += 1;

            for stage in self.stages.iter_mut() {
                match stage.process(record) {
                    Ok(Some(next)) => record = next,
                    Ok(None) => {
                        self.stats.dropped += 1;
                        continue 'records;
                    }
                    Err(e) => {
                        self.done = true;
                        return Some(Err(e));
                    }
                }
            }

            self.stats.written += 1;
            return Some(Ok(record));
        }
    }
}

/// Number of records in `source`, from a dedicated counting pass.
pub fn count_records(source: &dyn RecordSource) -> Result<u64> {
    let mut count = 0;
    for record in source.open()? {
        record?;
        count += 1;
    }
    Ok(count)
}

/// Build the pipeline `options` describe over `source`.
///
/// Configuration problems, and sources that cannot support a requested
/// two-pass stage, are reported here before any record is produced. The
/// first passes of sort, tail and squeeze also run here.
pub fn compose(options: &TransformOptions, source: &dyn RecordSource) -> Result<Pipeline> {
    options.validate()?;
    if options.needs_reread() && !source.is_reiterable() {
        return Err(Error::UnsupportedOperation(format!(
            "sort, tail and squeeze need to read '{}' more than once",
            source.name()
        )));
    }

    let records = match options.sort {
        Some(order) => sorted_records(source, order)?,
        None => source.open()?,
    };
    let mut pipeline = Pipeline::new(records);

    if let Some(max_length) = options.max_length {
        pipeline.push(Box::new(MaxLengthDiscard { max_length }));
    }
    if let Some(min_length) = options.min_length {
        pipeline.push(Box::new(MinLengthDiscard { min_length }));
    }
    if options.deduplicate_sequences {
        pipeline.push(Box::new(DeduplicateSequences::default()));
    }
    if options.deduplicate_taxa {
        pipeline.push(Box::new(DeduplicateTaxa::default()));
    }
    if options.dash_gap {
        pipeline.push(Box::new(DashGap));
    }
    if options.first_name {
        pipeline.push(Box::new(FirstName));
    }
    if let Some(case) = options.case {
        pipeline.push(Box::new(CaseFold { case }));
    }
    if options.prune_empty {
        pipeline.push(Box::new(PruneEmpty));
    }
    if options.reverse {
        pipeline.push(Box::new(Reverse));
    }
    if options.reverse_complement {
        pipeline.push(Box::new(ReverseComplement));
    }
    if options.ungap {
        pipeline.push(Box::new(Ungap));
    }
    if let Some(prefix) = &options.name_prefix {
        pipeline.push(Box::new(NamePrefix {
            prefix: prefix.clone(),
        }));
    }
    if let Some(suffix) = &options.name_suffix {
        pipeline.push(Box::new(NameSuffix {
            suffix: suffix.clone(),
        }));
    }
    if let Some(pattern) = &options.include_pattern {
        pipeline.push(Box::new(PatternFilter::include(pattern)?));
    }
    if let Some(pattern) = &options.exclude_pattern {
        pipeline.push(Box::new(PatternFilter::exclude(pattern)?));
    }
    if let Some((search, replacement)) = &options.pattern_replace {
        pipeline.push(Box::new(PatternReplace::new(search, replacement)?));
    }
    if let Some(limit) = options.head {
        pipeline.push(Box::new(Head::new(limit)));
    }
    if let Some(limit) = options.tail {
        info!("Counting records of {} for tail", source.name());
        let total = count_records(source)?;
        pipeline.push(Box::new(Tail::new(limit, total)));
    }
    if options.strip_range {
        pipeline.push(Box::new(StripRange));
    }
    if let Some(direction) = options.transcribe {
        pipeline.push(Box::new(Transcribe { direction }));
    }
    if let Some(translation) = options.translate {
        pipeline.push(Box::new(Translate::new(translation)));
    }
    if options.squeeze {
        info!("Scanning {} for all-gap columns", source.name());
        let mut mask = gap_columns(source.open()?)?;
        // The mask comes from raw records; complementing keeps gaps in place.
        if options.reverse != options.reverse_complement {
            mask.reverse();
        }
        pipeline.push(Box::new(Squeeze::new(&mask)));
    }
    if let Some((start, end)) = options.cut {
        pipeline.push(Box::new(Cut { start, end }));
    }

    Ok(pipeline)
}
