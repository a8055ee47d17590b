//! Integration tests for syntax tree export
//!
//! Tests that exported parses load back unchanged.

use ndf_foundation::ErrorKind;
use ndf_language::parse;
use ndf_runtime::{check_file, from_bytes, load_from_file, save_to_file, to_bytes};

#[test]
fn checked_file_exports_and_loads() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("scene.ndf");
    let target = dir.path().join("scene.msgpack");
    std::fs::write(
        &source,
        "unnamed TScene(Units = MAP[('a', ~/A), ('b', $/B.C[2])])\nBroken is [1, 2",
    )
    .unwrap();

    let report = check_file(&source).unwrap();
    save_to_file(&report.parse, &target).unwrap();
    let loaded = load_from_file(&target).unwrap();

    assert_eq!(loaded, report.parse);
    assert!(loaded.has_errors());
}

#[test]
fn export_keeps_field_names() {
    let bytes = to_bytes(&parse("A is 1")).unwrap();
    let needle = b"diagnostics";
    assert!(bytes.windows(needle.len()).any(|w| w == needle));
}

#[test]
fn truncated_export_fails() {
    let bytes = to_bytes(&parse("A is TFoo(X = [1, 2, 3])")).unwrap();
    let err = from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
}
