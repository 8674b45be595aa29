use thiserror::Error;

/// Errors raised when analyzing untyped input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    /// The input was not a string (e.g. a JSON number, array or null).
    #[error("invalid input: expected a string, got {0}")]
    InvalidInput(&'static str),
}

/// Errors raised by [`crate::StringFilter::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("min_length ({min}) cannot be greater than max_length ({max})")]
    LengthRange { min: usize, max: usize },
}

/// Errors raised by [`crate::parse_natural_language`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NaturalLanguageError {
    #[error("query is empty")]
    Empty,

    #[error("unable to parse natural language query")]
    Unrecognized,

    #[error("parsed filters conflict: {0}")]
    Conflicting(FilterError),
}
