//! Error types shared across the crate.

use thiserror::Error as ThisError;

/// Errors produced while loading data, building models, or solving.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The input data file is structurally malformed.
    #[error("'{path}' contains bad data format: {detail}")]
    DataFormat {
        /// Path of the offending file.
        path: String,
        /// What was found where something else was expected.
        detail: String,
    },
    /// The MILP engine reported failure (infeasible, unbounded, internal).
    #[error("solver failure: {0}")]
    Solver(#[from] microlp::Error),
    /// File open/read/write failure for data, result, or log files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds a data-format error for the given file.
    pub fn data_format(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::DataFormat {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// Short category label used by the error-log writer.
    pub fn category(&self) -> &'static str {
        match self {
            Self::DataFormat { .. } => "Data Error",
            Self::Solver(_) => "Solver Error",
            Self::Io(_) => "IO Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_format_message_names_the_file() {
        let err = Error::data_format("Data.dat", "expected '[', found 'x'");
        assert_eq!(err.category(), "Data Error");
        assert!(err.to_string().contains("Data.dat"));
        assert!(err.to_string().contains("expected '['"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert_eq!(err.category(), "IO Error");
    }
}
