use thiserror::Error;

/// Errors from reading or writing the palette text format
#[derive(Debug, Error)]
pub enum FormatError {
    /// A line did not match the expected encoding
    #[error("Could not parse line {line}: {message}")]
    Parse {
        /// 1-based line number inside the file
        line: usize,
        /// What was wrong with it
        message: String,
    },
    /// The name cannot be written as a metadata line and read back
    #[error("{0:?} is not a valid record name")]
    InvalidName(String),
    /// The underlying stream failed
    #[error("Could not read palette data: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatError {
    pub(crate) fn parse<M: Into<String>>(line: usize, message: M) -> Self {
        FormatError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Errors that can occur while working with a [`RecordStore`](crate::RecordStore)
#[derive(Debug, Error)]
pub enum StoreError {
    /// The index file is missing or could not be opened
    #[error("Index file {file} could not be opened: {source}")]
    IndexUnavailable {
        #[allow(missing_docs)]
        file: String,
        #[allow(missing_docs)]
        source: std::io::Error,
    },
    /// The index file failed part way through reading it
    #[error("Error reading list of names from index file {file} after {read} names: {source}")]
    IndexRead {
        #[allow(missing_docs)]
        file: String,
        /// How many names had been collected before the failure
        read: usize,
        #[allow(missing_docs)]
        source: std::io::Error,
    },
    /// The file of a record does not exist
    #[error("Record file {0} not found")]
    RecordNotFound(String),
    /// The file of a record exists but could not be read or parsed
    #[error("Record file {file} could not be read: {source}")]
    RecordRead {
        #[allow(missing_docs)]
        file: String,
        #[allow(missing_docs)]
        source: FormatError,
    },
    /// A save was requested for a record which is not in memory
    #[error("Record {0} is not loaded")]
    RecordNotLoaded(String),
    /// A record file could not be written
    #[error("Record file {file} could not be saved: {source}")]
    RecordWrite {
        #[allow(missing_docs)]
        file: String,
        #[allow(missing_docs)]
        source: std::io::Error,
    },
    /// The index was not read completely, so it cannot be rewritten safely
    #[error("Index file {0} was not read completely, refusing to rewrite it")]
    IndexIncomplete(String),
    /// The index file could not be rewritten
    #[error("Index file {file} could not be written: {source}")]
    IndexWrite {
        #[allow(missing_docs)]
        file: String,
        #[allow(missing_docs)]
        source: std::io::Error,
    },
    /// A record was read but its name is not part of the index
    #[error("Record {0} is not part of the index")]
    UnknownRecord(String),
    /// The name is already part of the index
    #[error("Record {0} already exists in the index")]
    DuplicateName(String),
    /// The name cannot be used as a record name
    #[error("{0:?} is not a valid record name")]
    InvalidName(String),
    /// The value given to a color lookup is not a hex color
    #[error("{0:?} is not a hex color")]
    InvalidColor(String),
}

/// A result with a [`StoreError`] error
pub type StoreResult<T> = Result<T, StoreError>;
