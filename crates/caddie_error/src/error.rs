//! Top-level error wrapper types.

use crate::{ConfigError, HttpError, JsonError, SearchError, StorageError};

/// This is the foundation error enum covering every concern in the
/// workspace: HTTP transport, JSON validation, configuration, document
/// storage, and the search provider.
///
/// # Examples
///
/// ```
/// use caddie_error::{CaddieError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: CaddieError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CaddieErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Document storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Search provider error
    #[from(SearchError)]
    Search(SearchError),
}

/// Caddie error with kind discrimination.
///
/// # Examples
///
/// ```
/// use caddie_error::{CaddieResult, ConfigError};
///
/// fn might_fail() -> CaddieResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Caddie Error: {}", _0)]
pub struct CaddieError(Box<CaddieErrorKind>);

impl CaddieError {
    /// Create a new error from a kind.
    pub fn new(kind: CaddieErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CaddieErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to CaddieErrorKind
impl<T> From<T> for CaddieError
where
    T: Into<CaddieErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Caddie operations.
///
/// # Examples
///
/// ```
/// use caddie_error::{CaddieResult, HttpError};
///
/// fn fetch_scoreboard() -> CaddieResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type CaddieResult<T> = std::result::Result<T, CaddieError>;
