//! Error types for the NDF toolchain.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Recoverable parse problems are not errors; they travel as diagnostics
//! next to the parsed document. `Error` is reserved for conditions that stop
//! an operation outright.

use std::fmt;

use thiserror::Error;

/// Result alias used across the NDF crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for NDF operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: u32, column: u32, context: String) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            line,
            column,
            context,
        })
    }

    /// Creates a cancellation error.
    #[must_use]
    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Cancelled)
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IoError(message.into()))
    }

    /// Returns true if this error reports a cancelled operation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancelled)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Parse error in NDF source, raised only by strict parsing.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// Input bytes are not valid UTF-8.
    #[error("invalid UTF-8 in input after byte {valid_up_to}")]
    InvalidEncoding {
        /// Length of the valid prefix.
        valid_up_to: usize,
    },

    /// The operation was cancelled through a cancellation flag.
    #[error("operation cancelled")]
    Cancelled,

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_parse_display() {
        let err = Error::parse("expected ')'", 3, 7, "Foo( bar".to_string());
        assert!(matches!(err.kind, ErrorKind::ParseError { line: 3, .. }));
        let msg = format!("{err}");
        assert!(msg.contains("3:7"));
        assert!(msg.contains("expected ')'"));
    }

    #[test]
    fn error_with_context() {
        let err = Error::io("disk on fire").with_context(
            ErrorContext::new()
                .with_source("units.ndf")
                .with_position(10, 5),
        );

        assert!(err.context.is_some());
        let ctx = err.context.unwrap();
        assert_eq!(ctx.source, Some("units.ndf".to_string()));
        assert_eq!(ctx.line, Some(10));
        assert_eq!(ctx.column, Some(5));
        assert_eq!(format!("{ctx}"), "at units.ndf:10:5");
    }

    #[test]
    fn error_cancelled() {
        let err = Error::cancelled();
        assert!(err.is_cancelled());
        assert_eq!(format!("{err}"), "operation cancelled");
    }

    #[test]
    fn error_invalid_encoding_display() {
        let err = Error::new(ErrorKind::InvalidEncoding { valid_up_to: 12 });
        assert!(format!("{err}").contains("12"));
        assert!(!err.is_cancelled());
    }

    #[test]
    fn context_without_source_is_empty() {
        let ctx = ErrorContext::new().with_position(1, 1);
        assert_eq!(format!("{ctx}"), "");
    }
}
