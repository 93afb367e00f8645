use crate::error::{Error, Result};
use crate::sequence_processor::core::{RecordSource, RecordStream};
use crate::types::FileFormat;
use std::cell::RefCell;
use std::io::Read;

/// A source that can be read exactly once, such as standard input.
pub struct OneShotSource {
    name: String,
    format: FileFormat,
    reader: RefCell<Option<Box<dyn Read>>>,
}

impl OneShotSource {
    pub fn new(name: impl Into<String>, format: FileFormat, reader: Box<dyn Read>) -> Self {
        Self {
            name: name.into(),
            format,
            reader: RefCell::new(Some(reader)),
        }
    }

    pub fn stdin(format: FileFormat) -> Self {
        Self::new("<stdin>", format, Box::new(std::io::stdin()))
    }
}

impl RecordSource for OneShotSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn format(&self) -> FileFormat {
        self.format
    }

    fn open(&self) -> Result<RecordStream> {
        let reader = self.reader.borrow_mut().take().ok_or_else(|| {
            Error::UnsupportedOperation(format!("'{}' can only be read once", self.name))
        })?;
        Ok(super::parse(reader, self.format))
    }

    fn is_reiterable(&self) -> bool {
        false
    }
}
