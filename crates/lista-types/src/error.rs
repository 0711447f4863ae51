use std::fmt;

/// Result type for lista-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A status tag string did not match any known status
    UnknownStatus(String),

    /// A status filter string did not match the sentinel or any status
    UnknownFilter(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownStatus(s) => write!(f, "Unknown status: '{}'", s),
            Error::UnknownFilter(s) => write!(f, "Unknown status filter: '{}'", s),
        }
    }
}

impl std::error::Error for Error {}
