//! The record stages a pipeline can be built from, one per transform.

mod dedup;
mod length;
mod naming;
mod residues;
mod squeeze;
mod window;

pub use dedup::{content_checksum, DeduplicateSequences, DeduplicateTaxa, TaxonKey};
pub use length::{MaxLengthDiscard, MinLengthDiscard};
pub use naming::{FirstName, NamePrefix, NameSuffix, PatternFilter, PatternReplace, StripRange};
pub use residues::{
    complement, CaseFold, Cut, DashGap, PruneEmpty, Reverse, ReverseComplement, Transcribe,
    Translate, Ungap,
};
pub use squeeze::{gap_columns, Squeeze};
pub use window::{Head, Tail};
