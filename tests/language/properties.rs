//! Property tests for whole-document parsing
//!
//! Tests that arbitrary input always yields a well-formed result.

use ndf_language::pretty::pretty_print;
use ndf_language::{DiagnosticKind, Item, parse};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,6}".prop_map(String::from),
        "'[a-z ]{0,8}'".prop_map(String::from),
        "~/[A-Z][a-z]{0,5}".prop_map(String::from),
        Just("nil".to_string()),
        Just("true".to_string()),
    ]
}

fn value() -> impl Strategy<Value = String> {
    scalar().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(|v| format!("[{}]", v.join(", "))),
            prop::collection::vec(inner, 0..3).prop_map(|v| {
                let members: Vec<String> = v
                    .iter()
                    .enumerate()
                    .map(|(i, value)| format!("M{i} = {value}"))
                    .collect();
                format!("TObj({})", members.join(" "))
            }),
        ]
    })
}

proptest! {
    #[test]
    fn document_covers_any_input(input in ".{0,200}") {
        let parse = parse(&input);
        prop_assert_eq!(parse.document.span.start, 0);
        prop_assert_eq!(parse.document.span.end, input.len());
        for diagnostic in &parse.diagnostics {
            prop_assert!(diagnostic.span.end <= input.len(), "{diagnostic:?}");
        }
        for item in &parse.document.items {
            if let Item::Error(node) = item {
                prop_assert_eq!(&input[node.span.start..node.span.end], node.text.as_str());
            }
        }
    }

    #[test]
    fn deep_lists_cost_at_most_one_diagnostic(depth in 1..400usize) {
        let input = format!("A is {}1{}\nB is 2", "[".repeat(depth), "]".repeat(depth));
        let parse = parse(&input);
        prop_assert_eq!(parse.document.items.len(), 2);
        prop_assert!(parse.diagnostics.len() <= 1, "{:?}", parse.diagnostics);
        for diagnostic in &parse.diagnostics {
            prop_assert_eq!(diagnostic.kind, DiagnosticKind::UnrecoverableFragment);
        }
    }

    #[test]
    fn printed_values_reparse_cleanly(value in value()) {
        let first = parse(&format!("A is {value}"));
        prop_assert!(!first.has_errors(), "{value}: {:?}", first.diagnostics);
        let printed = pretty_print(&first.document);
        let second = parse(&printed);
        prop_assert!(!second.has_errors(), "{printed}: {:?}", second.diagnostics);
        prop_assert_eq!(pretty_print(&second.document), printed);
    }
}
