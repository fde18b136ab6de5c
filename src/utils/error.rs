use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for tocer operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for tocer operations
#[derive(Debug)]
pub enum TocerError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error (malformed settings, bad heading-field specifier)
    Config(String),
    /// Field rendering error reported by a content source
    Render(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for TocerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocerError::Io(err) => write!(f, "IO error: {}", err),
            TocerError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TocerError::Render(msg) => write!(f, "Render error: {}", msg),
            TocerError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for TocerError {}

impl From<io::Error> for TocerError {
    fn from(err: io::Error) -> Self {
        TocerError::Io(err)
    }
}

impl From<String> for TocerError {
    fn from(msg: String) -> Self {
        TocerError::Generic(msg)
    }
}

impl From<&str> for TocerError {
    fn from(msg: &str) -> Self {
        TocerError::Generic(msg.to_string())
    }
}
