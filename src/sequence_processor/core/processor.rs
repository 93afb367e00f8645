use super::sequence::SequenceRecord;
use crate::error::Result;

/// One named step of a transform pipeline.
///
/// A stage sees each record once, in order, and either hands back a record
/// for the next stage or drops it. Stages never look ahead; any global
/// knowledge they need (record counts, gap masks, sort order) is gathered
/// before the pipeline starts pulling.
pub trait RecordStage {
    fn name(&self) -> &'static str;

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>>;

    /// True once the stage will never emit another record, which lets the
    /// pipeline stop pulling from its source early.
    fn is_finished(&self) -> bool {
        false
    }
}
