//! Integration tests for checking files
//!
//! Tests reading files from disk and reporting on them.

use std::fs;

use ndf_foundation::ErrorKind;
use ndf_runtime::{check_file, render_diagnostic};

const WEAPONS: &str = "\
export Weapon_Rifle is TWeaponDescriptor
(
    Ammunition = ~/Ammo_Rifle
    Salvos = [4, 4,]
    Range = $/Ranges/Default.Long * 2
)
";

#[test]
fn clean_file_summary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weapons.ndf");
    fs::write(&path, WEAPONS).unwrap();

    let report = check_file(&path).unwrap();
    assert!(!report.has_errors());
    assert_eq!(report.render(), "");
    assert!(
        report
            .summary()
            .ends_with("weapons.ndf: 1 items, 2 references, 0 errors"),
        "{}",
        report.summary()
    );
}

#[test]
fn broken_file_renders_every_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ndf");
    fs::write(&path, "A is 'open\nB is TFoo(\n").unwrap();

    let report = check_file(&path).unwrap();
    assert_eq!(report.error_count(), 2);
    let rendered = report.render();
    assert!(rendered.contains("broken.ndf:1:6: error[unterminated-string]"), "{rendered}");
    assert!(rendered.contains("error[unexpected-token]"), "{rendered}");
    assert!(report.summary().ends_with("2 errors"));
}

#[test]
fn byte_order_mark_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bom.ndf");
    fs::write(&path, b"\xef\xbb\xbfA is 1\n").unwrap();

    let report = check_file(&path).unwrap();
    assert!(!report.has_errors());
    assert_eq!(report.parse.document.items.len(), 1);
}

#[test]
fn missing_file_names_the_path() {
    let err = check_file("/nonexistent/dir/units.ndf").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IoError(_)));
    let ctx = err.context.unwrap();
    assert_eq!(ctx.source.as_deref(), Some("/nonexistent/dir/units.ndf"));
}

#[test]
fn rendered_caret_spans_the_token() {
    let source = "A is TFoo(X = 1)\nB is ]";
    let parse = ndf_language::parse(source);
    let rendered = render_diagnostic("a.ndf", source, &parse.diagnostics[0]);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("a.ndf:2:6: "), "{rendered}");
    assert_eq!(lines[1], "    B is ]");
    assert_eq!(lines[2], "         ^");
}
