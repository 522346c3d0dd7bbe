//! Error types for structgen
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for structgen
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Top-level JSON value must be an object, got {found}")]
    NonObjectRoot { found: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Inference Errors
    // ============================================================================
    #[error("Duplicate record name: {name}")]
    NameCollision { name: String },

    #[error("Cannot derive an identifier from an empty JSON key")]
    EmptyKey,

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a non-object-root error
    pub fn non_object_root(found: impl Into<String>) -> Self {
        Self::NonObjectRoot {
            found: found.into(),
        }
    }

    /// Create a file-not-found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a name-collision error
    pub fn collision(name: impl Into<String>) -> Self {
        Self::NameCollision { name: name.into() }
    }
}

/// Result type alias for structgen
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::non_object_root("array");
        assert_eq!(
            err.to_string(),
            "Top-level JSON value must be an object, got array"
        );

        let err = Error::collision("Info");
        assert_eq!(err.to_string(), "Duplicate record name: Info");

        let err = Error::file_not_found("input.json");
        assert_eq!(err.to_string(), "File not found: input.json");
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::EmptyKey);
        let with_context = result.context("while inferring");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("while inferring: Cannot derive an identifier"));
    }
}
