//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use ndf_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_parse() {
    let err = Error::parse("expected ')'", 4, 9, "Foo( bar".to_string());
    let ErrorKind::ParseError {
        message,
        line,
        column,
        context,
    } = &err.kind
    else {
        panic!("expected ParseError");
    };
    assert_eq!(message, "expected ')'");
    assert_eq!((*line, *column), (4, 9));
    assert_eq!(context, "Foo( bar");
}

#[test]
fn error_io() {
    let err = Error::io("no such file");
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
    assert!(err.context.is_none());
}

#[test]
fn error_invalid_encoding() {
    let err = Error::new(ErrorKind::InvalidEncoding { valid_up_to: 7 });
    assert!(!err.is_cancelled());
    assert!(format!("{err}").contains('7'));
}

// =============================================================================
// Error Display
// =============================================================================

#[test]
fn error_display_parse() {
    let err = Error::parse("unexpected-token: expected ']', found ')'", 2, 6, String::new());
    assert_eq!(
        format!("{err}"),
        "parse error at 2:6: unexpected-token: expected ']', found ')'"
    );
}

#[test]
fn error_display_serialization() {
    let err = Error::new(ErrorKind::SerializationError("bad marker".to_string()));
    assert_eq!(format!("{err}"), "serialization error: bad marker");
}

#[test]
fn error_display_cancelled() {
    assert_eq!(format!("{}", Error::cancelled()), "operation cancelled");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_display_with_source_only() {
    let ctx = ErrorContext::new().with_source("units.ndf");
    assert_eq!(format!("{ctx}"), "at units.ndf");
}

#[test]
fn context_survives_attachment() {
    let err = Error::io("gone").with_context(
        ErrorContext::new()
            .with_source("weapons.ndf")
            .with_position(3, 14),
    );
    let ctx = err.context.as_ref().unwrap();
    assert_eq!(format!("{ctx}"), "at weapons.ndf:3:14");
    // Context does not change the primary message.
    assert_eq!(format!("{err}"), "I/O error: gone");
}
