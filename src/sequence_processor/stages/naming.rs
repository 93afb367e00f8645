use crate::error::Result;
use crate::sequence_processor::core::{RecordStage, SequenceRecord};
use crate::sequence_processor::options::compile_pattern;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Keeps only the first word of the header, i.e. clears the description.
pub struct FirstName;

impl RecordStage for FirstName {
    fn name(&self) -> &'static str {
        "first-name"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        if record.description.is_empty() {
            return Ok(Some(record));
        }
        let id = record.id.clone();
        Ok(Some(record.renamed(id, "")))
    }
}

pub struct NamePrefix {
    pub prefix: String,
}

impl RecordStage for NamePrefix {
    fn name(&self) -> &'static str {
        "name-prefix"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        let id = format!("{}{}", self.prefix, record.id);
        let description = record.description.clone();
        Ok(Some(record.renamed(id, description)))
    }
}

pub struct NameSuffix {
    pub suffix: String,
}

impl RecordStage for NameSuffix {
    fn name(&self) -> &'static str {
        "name-suffix"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        let id = format!("{}{}", record.id, self.suffix);
        let description = record.description.clone();
        Ok(Some(record.renamed(id, description)))
    }
}

/// Keeps (or, with `exclude`, drops) records whose id contains a match.
pub struct PatternFilter {
    regex: Regex,
    exclude: bool,
}

impl PatternFilter {
    pub fn include(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: compile_pattern("include pattern", pattern)?,
            exclude: false,
        })
    }

    pub fn exclude(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: compile_pattern("exclude pattern", pattern)?,
            exclude: true,
        })
    }
}

impl RecordStage for PatternFilter {
    fn name(&self) -> &'static str {
        if self.exclude {
            "pattern-exclude"
        } else {
            "pattern-include"
        }
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        if self.regex.is_match(&record.id) == self.exclude {
            trace!("discarding by id pattern: {}", record.id);
            return Ok(None);
        }
        Ok(Some(record))
    }
}

/// Replaces every match in both id and description. The replacement may
/// refer to capture groups as `$1` or `${name}`. `$1_x` names a group
/// `1_x`, so a group followed by a word character must be written `${1}_x`.
pub struct PatternReplace {
    regex: Regex,
    replacement: String,
}

impl PatternReplace {
    pub fn new(search: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            regex: compile_pattern("pattern replace", search)?,
            replacement: replacement.to_string(),
        })
    }
}

impl RecordStage for PatternReplace {
    fn name(&self) -> &'static str {
        "pattern-replace"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        let id = self
            .regex
            .replace_all(&record.id, self.replacement.as_str())
            .into_owned();
        let description = self
            .regex
            .replace_all(&record.description, self.replacement.as_str())
            .into_owned();
        Ok(Some(record.renamed(id, description)))
    }
}

static RANGE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<id>.*)/(?P<start>\d+)-(?P<stop>\d+)$").expect("range suffix pattern is valid")
});

/// Strips a trailing `/<start>-<stop>` range from ids when the range is
/// 1-based and ordered. The description is cleared on every record, whether
/// or not the id carried a range.
pub struct StripRange;

impl StripRange {
    fn stripped_id(id: &str) -> Option<&str> {
        let captures = RANGE_SUFFIX.captures(id)?;
        let start = captures["start"].parse::<u64>().ok()?;
        let stop = captures["stop"].parse::<u64>().ok()?;
        if start > 0 && start <= stop {
            captures.name("id").map(|m| m.as_str())
        } else {
            None
        }
    }
}

impl RecordStage for StripRange {
    fn name(&self) -> &'static str {
        "strip-range"
    }

    fn process(&mut self, record: SequenceRecord) -> Result<Option<SequenceRecord>> {
        let id = Self::stripped_id(&record.id)
            .unwrap_or(&record.id)
            .to_string();
        Ok(Some(record.renamed(id, "")))
    }
}
