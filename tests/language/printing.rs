//! Integration tests for canonical printing and tree dumps
//!
//! Tests that printing preserves structure and is stable.

use ndf_language::pretty::{PrettyConfig, pretty_print, pretty_print_with_config};
use ndf_language::sexp::to_sexp;
use ndf_language::parse;

use crate::UNIT;

fn assert_stable(source: &str) {
    let first = parse(source);
    assert!(!first.has_errors(), "{:?}", first.diagnostics);
    let printed = pretty_print(&first.document);
    let second = parse(&printed);
    assert!(!second.has_errors(), "reparse of {printed:?}: {:?}", second.diagnostics);
    assert_eq!(to_sexp(&first.document), to_sexp(&second.document));
    assert_eq!(pretty_print(&second.document), printed);
}

#[test]
fn unit_descriptor_is_stable() {
    assert_stable(UNIT);
}

#[test]
fn mixed_declarations_are_stable() {
    assert_stable(
        "template TUnit\n[\n    Speed : int = 3,\n    Name : string,\n]\nis TBase\n(\n    Speed = <Speed>\n    Label = <Name>\n)\n\
         unnamed TScene(Units = MAP[('a', ~/A), ('b', $/B.C[2])])\n\
         private Cost is -(X + 1) * 2 div 3\n\
         Flag is A == B ? !C : D | E & F",
    );
}

#[test]
fn comments_are_dropped() {
    let printed = pretty_print(&parse("// header\nA is 1 (* note *) { brace }").document);
    assert_eq!(printed, "A is 1\n");
}

#[test]
fn compact_config() {
    let parse = parse("A is TFoo(X = 1)\nB is 2");
    let printed = pretty_print_with_config(
        &parse.document,
        PrettyConfig::default()
            .with_indent_width(2)
            .with_blank_line_between_items(false),
    );
    assert_eq!(printed, "A is TFoo\n(\n  X = 1\n)\nB is 2\n");
}

#[test]
fn tree_dump_distinguishes_adjacency() {
    assert_ne!(
        to_sexp(&parse("Foo[0]").document),
        to_sexp(&parse("Foo [0]").document)
    );
    assert_eq!(
        to_sexp(&parse("guid:{0xFF}").document),
        "(source_file (guid {0xFF}))"
    );
}
