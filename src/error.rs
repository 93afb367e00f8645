use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a transform or describe run.
///
/// Configuration problems are raised before any record is read. Data-shape
/// and record problems surface at the first offending record and end the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("format error: {0}")]
    Format(String),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("{stage}: {message}")]
    DataShape {
        stage: &'static str,
        message: String,
    },

    #[error("malformed record '{id}': {message}")]
    MalformedRecord { id: String, message: String },

    #[error("failed to parse {format} input: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn data_shape(stage: &'static str, message: impl Into<String>) -> Self {
        Error::DataShape {
            stage,
            message: message.into(),
        }
    }

    pub(crate) fn malformed(id: impl Into<String>, message: impl Into<String>) -> Self {
        Error::MalformedRecord {
            id: id.into(),
            message: message.into(),
        }
    }
}
