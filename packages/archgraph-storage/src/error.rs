//! Error types for archgraph-storage

use std::fmt;
use thiserror::Error;

use archgraph_core::ArchGraphError;

/// Storage error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed graph file
    Parse,
    /// Serialization/deserialization errors
    Serialization,
    /// File extension without a known format
    UnsupportedFormat,
    /// I/O errors
    IO,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse",
            ErrorKind::Serialization => "serialization",
            ErrorKind::UnsupportedFormat => "unsupported_format",
            ErrorKind::IO => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct StorageError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl StorageError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, format!("line {}: {}", line, message.into()))
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    pub fn unsupported_format(path: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::UnsupportedFormat,
            format!("Unsupported graph format: {}", path),
        )
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::new(ErrorKind::IO, format!("I/O error: {}", err)).with_source(err)
    }
}

// JSON error conversions
impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::serialization(format!("JSON error: {}", err)).with_source(err)
    }
}

impl From<StorageError> for ArchGraphError {
    fn from(err: StorageError) -> Self {
        ArchGraphError::store(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, StorageError>;
