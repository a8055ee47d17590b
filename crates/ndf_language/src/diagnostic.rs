//! Parse diagnostics.
//!
//! The scanner and parser never fail on malformed input. They record a
//! [`Diagnostic`] and keep going, so one broken declaration does not hide
//! the rest of the file.

use std::fmt;

use thiserror::Error;

use crate::span::Span;

/// Category of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticKind {
    /// `/* ...` or `(* ...` without a closer.
    UnterminatedComment,
    /// String literal without its closing quote on the same line.
    UnterminatedString,
    /// `{ ...` comment or guid payload without the matching `}`.
    UnterminatedBraceBody,
    /// A specific token was required and something else was found.
    UnexpectedToken,
    /// No grammar form can start at this position.
    UnrecoverableFragment,
}

impl DiagnosticKind {
    /// Returns the kebab-case name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnterminatedComment => "unterminated-comment",
            Self::UnterminatedString => "unterminated-string",
            Self::UnterminatedBraceBody => "unterminated-brace-body",
            Self::UnexpectedToken => "unexpected-token",
            Self::UnrecoverableFragment => "unrecoverable-fragment",
        }
    }

    /// Returns true for problems found by the scanner.
    #[must_use]
    pub const fn is_lexical(self) -> bool {
        matches!(
            self,
            Self::UnterminatedComment | Self::UnterminatedString | Self::UnterminatedBraceBody
        )
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem found while parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} at {}:{}: {message}", .span.line, .span.column)]
pub struct Diagnostic {
    /// Where the problem is.
    pub span: Span,
    /// Human-readable description.
    pub message: String,
    /// Category.
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            kind,
        }
    }
}

/// Returns the full source line containing the start of `span`, without
/// its line terminator.
#[must_use]
pub fn source_line(source: &str, span: Span) -> &str {
    let start = span.start.min(source.len());
    let before = source.get(..start).unwrap_or_default();
    let after = source.get(start..).unwrap_or_default();
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line_end = after.find('\n').map_or(source.len(), |i| start + i);
    source
        .get(line_start..line_end)
        .unwrap_or_default()
        .trim_end_matches('\r')
}
