//! Search provider error types.

/// Kinds of search errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SearchErrorKind {
    /// Search credentials are missing or incomplete
    #[display("Missing search credentials: {}", _0)]
    MissingCredentials(String),
    /// The search API returned an error response
    #[display("Search API error: {}", _0)]
    Api(String),
    /// The search response could not be parsed
    #[display("Search response parsing failed: {}", _0)]
    ResponseParsing(String),
}

/// Search error with location tracking.
///
/// # Examples
///
/// ```
/// use caddie_error::{SearchError, SearchErrorKind};
///
/// let err = SearchError::new(SearchErrorKind::Api("quota exceeded".to_string()));
/// assert!(format!("{}", err).contains("quota"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Search Error: {} at line {} in {}", kind, line, file)]
pub struct SearchError {
    /// The kind of error that occurred
    pub kind: SearchErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SearchError {
    /// Create a new search error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SearchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
