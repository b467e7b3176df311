use thiserror::Error;

/// Errors raised while decoding input or resolving paths against a document.
///
/// Every variant aborts the operation that produced it; no partial report is
/// ever returned alongside an error.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid JSON data")]
    MalformedInput(#[source] serde_json::Error),
    #[error("Please enter JSON data in the params input field.")]
    MissingInput,
    #[error("Please enter at least one variable to extract.")]
    MissingVariableSpec,
    #[error("Invalid variable: {0}")]
    InvalidPath(String),
    #[error("List not found: {0}")]
    ListNotFound(String),
    #[error("{0} is not an array")]
    NotAnArray(String),
}

/// Coarse classification of an [`ExtractError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    /// The document decoded to `null`, `false`, `0` or `""`.
    MissingInput,
    MissingVariableSpec,
    InvalidPath,
    /// The list path is missing, or resolves to something other than an array.
    ListNotFound,
}

impl ExtractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput(_) => ErrorKind::MalformedInput,
            Self::MissingInput => ErrorKind::MissingInput,
            Self::MissingVariableSpec => ErrorKind::MissingVariableSpec,
            Self::InvalidPath(_) => ErrorKind::InvalidPath,
            Self::ListNotFound(_) | Self::NotAnArray(_) => ErrorKind::ListNotFound,
        }
    }
}
