use std::num::ParseIntError;
use thiserror::Error;

/// Failures that abort parsing a week file. An unrecognised day range is not
/// an error; the column is dropped.
#[derive(Error, Debug)]
pub enum WeekError {
    /// A day or day-range cell is not a base-10 integer.
    #[error("invalid literal for integer with base 10: '{literal}'")]
    MalformedValue {
        column: String,
        literal: String,
        #[source]
        source: ParseIntError,
    },

    /// The input file could not be opened or read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed CSV text, such as invalid UTF-8. Read failures from the
    /// underlying file are reported as `Io`.
    #[error("CSV error: {0}")]
    Csv(csv::Error),
}

impl From<csv::Error> for WeekError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return WeekError::Csv(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(e) => WeekError::Io(e),
            kind => WeekError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("{:?}", kind),
            )),
        }
    }
}

pub type Result<T> = std::result::Result<T, WeekError>;
