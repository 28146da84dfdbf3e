use std::path::PathBuf;
use thiserror::Error;

/// Reasons a line of catalog input does not produce a course record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The line had no characters at all.
    #[error("empty line")]
    EmptyLine,

    /// The line split into fewer than the two mandatory fields.
    #[error("expected at least 2 fields, found {found}")]
    TooFewFields { found: usize },
}

/// Failures of the catalog load operation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source file could not be opened; the store was left untouched.
    #[error("could not open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading failed part-way through an opened file.
    #[error("failed reading {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rejected menu input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    /// The input is not an integer.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// A number outside the accepted menu codes.
    #[error("{0} is not a valid option")]
    Unrecognized(i32),
}
