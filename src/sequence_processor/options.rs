use crate::error::{Error, Result};
use crate::types::{Case, SortOrder, Transcription, Translation};
use regex::{Regex, RegexBuilder};

/// Which transforms to run. Built once per invocation and only read by the
/// pipeline composer; the order of application is fixed by the composer, not
/// by the order options were set in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformOptions {
    pub sort: Option<SortOrder>,
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
    pub deduplicate_sequences: bool,
    pub deduplicate_taxa: bool,
    pub dash_gap: bool,
    pub first_name: bool,
    pub case: Option<Case>,
    pub prune_empty: bool,
    pub reverse: bool,
    pub reverse_complement: bool,
    pub ungap: bool,
    pub name_prefix: Option<String>,
    pub name_suffix: Option<String>,
    pub include_pattern: Option<String>,
    pub exclude_pattern: Option<String>,
    pub pattern_replace: Option<(String, String)>,
    pub head: Option<usize>,
    pub tail: Option<usize>,
    pub strip_range: bool,
    pub transcribe: Option<Transcription>,
    pub translate: Option<Translation>,
    pub squeeze: bool,
    /// 1-based, inclusive residue range.
    pub cut: Option<(usize, usize)>,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject option combinations that cannot run, before any record is read.
    pub fn validate(&self) -> Result<()> {
        if self.head.is_some() && self.tail.is_some() {
            return Err(Error::Configuration(
                "head and tail are mutually exclusive".to_string(),
            ));
        }
        if let Some((start, end)) = self.cut {
            if start == 0 || end < start {
                return Err(Error::Configuration(format!(
                    "cut range {}:{} must be 1-based with start <= end",
                    start, end
                )));
            }
        }
        if let Some(pattern) = &self.include_pattern {
            compile_pattern("include pattern", pattern)?;
        }
        if let Some(pattern) = &self.exclude_pattern {
            compile_pattern("exclude pattern", pattern)?;
        }
        if let Some((search, _)) = &self.pattern_replace {
            compile_pattern("pattern replace", search)?;
        }
        Ok(())
    }

    /// True when the run needs more than one pass over its source.
    pub fn needs_reread(&self) -> bool {
        self.sort.is_some() || self.tail.is_some() || self.squeeze
    }
}

/// Case-insensitive search pattern for id filters and replacement.
pub(crate) fn compile_pattern(option: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| Error::Configuration(format!("invalid {} '{}': {}", option, pattern, e)))
}

/// Parse a `start:end` cut range as given on the command line.
pub fn parse_cut_range(text: &str) -> std::result::Result<(usize, usize), String> {
    let (start, end) = text
        .split_once(':')
        .ok_or_else(|| format!("expected start:end, got '{}'", text))?;
    let start = start
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid start '{}': {}", start, e))?;
    let end = end
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid end '{}': {}", end, e))?;
    Ok((start, end))
}
