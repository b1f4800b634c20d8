// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    Clipboard(String),
}

/// Reasons a catalog file can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The TOML document could not be parsed into artwork records.
    Parse(String),

    /// A record's `date` is not a valid `YYYY-MM-DD` calendar date.
    InvalidDate { id: String, value: String },

    /// Two records share the same `id`.
    DuplicateId(String),
}

impl CatalogError {
    /// Returns the i18n message key used when reporting this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Parse(_) => "notification-catalog-parse-error",
            CatalogError::InvalidDate { .. } => "notification-catalog-date-error",
            CatalogError::DuplicateId(_) => "notification-catalog-duplicate-error",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "invalid catalog: {}", msg),
            CatalogError::InvalidDate { id, value } => {
                write!(f, "artwork '{}' has invalid date '{}'", id, value)
            }
            CatalogError::DuplicateId(id) => write!(f, "duplicate artwork id '{}'", id),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Clipboard(e) => write!(f, "Clipboard Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
