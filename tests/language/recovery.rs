//! Integration tests for error recovery
//!
//! Tests that malformed input yields a complete tree plus diagnostics.

use ndf_foundation::ErrorKind;
use ndf_language::visitor::count_error_nodes;
use ndf_language::{DiagnosticKind, Item, parse, parse_bytes, parse_strict};

#[test]
fn unterminated_object_is_one_error_node() {
    let parse = parse("Foo( bar ");
    assert_eq!(parse.document.items.len(), 1);
    assert!(parse.document.items[0].is_error());
    assert_eq!(count_error_nodes(&parse.document), 1);
    assert_eq!(parse.diagnostics.len(), 1);
}

#[test]
fn broken_member_does_not_hide_neighbours() {
    let parse = parse("A is 1\nB is TFoo( X = )\nC is 3");
    assert_eq!(parse.document.items.len(), 3);
    assert!(
        parse
            .document
            .items
            .iter()
            .all(|item| matches!(item, Item::Assignment(_)))
    );
    assert_eq!(parse.diagnostics.len(), 1);
    assert_eq!(count_error_nodes(&parse.document), 1);
}

#[test]
fn unterminated_string_position() {
    let parse = parse("A is 1\nB is 'oops\nC is 3");
    assert_eq!(parse.document.items.len(), 3);
    assert_eq!(parse.diagnostics.len(), 1);
    let diag = &parse.diagnostics[0];
    assert_eq!(diag.kind, DiagnosticKind::UnterminatedString);
    assert_eq!((diag.span.line, diag.span.column), (2, 6));
}

#[test]
fn diagnostics_are_in_source_order() {
    let parse = parse("A is )\nB is ]\nC is ,\n/* open");
    assert!(parse.diagnostics.len() >= 4);
    assert!(
        parse
            .diagnostics
            .windows(2)
            .all(|w| w[0].span.start <= w[1].span.start)
    );
    assert!(
        parse
            .diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::UnterminatedComment)
    );
}

#[test]
fn every_input_yields_a_document() {
    for source in ["(", ")", "[[[", "A is", "template T [", "'", "guid:{", "~/", "<"] {
        let parse = parse(source);
        assert!(parse.has_errors(), "{source:?} should be diagnosed");
        assert_eq!(parse.document.span.end, source.len());
    }
}

#[test]
fn strict_parse_fails_on_first_diagnostic() {
    let err = parse_strict("A is 1\nB is TFoo(\nC is ]").unwrap_err();
    let ErrorKind::ParseError { line, .. } = err.kind else {
        panic!("expected parse error");
    };
    assert!(line >= 2);
    assert!(parse_strict("A is TFoo(X = 1)").is_ok());
}

#[test]
fn byte_input_must_be_utf8() {
    let err = parse_bytes(b"A is 'caf\xe9'").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidEncoding { valid_up_to: 9 }
    ));
    assert!(parse_bytes("A is 'café'".as_bytes()).is_ok());
}
