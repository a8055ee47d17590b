//! Integration tests for the REPL
//!
//! Drives the REPL with a scripted editor instead of a terminal.

use std::collections::VecDeque;

use ndf_foundation::Result;
use ndf_runtime::{LineEditor, ReadResult, Repl};

/// Replays a fixed list of lines, then reports end of input.
#[derive(Default)]
struct Script {
    lines: VecDeque<String>,
}

impl Script {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(ToString::to_string).collect(),
        }
    }
}

impl LineEditor for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self
            .lines
            .pop_front()
            .map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}
}

#[test]
fn multi_line_input_becomes_one_parse() {
    let mut repl = Repl::with_editor(Script::new(&["A is TFoo(", "    X = 1", ")"]))
        .without_banner();
    repl.run().unwrap();

    let last = repl.last().unwrap();
    assert!(!last.has_errors());
    assert_eq!(last.document.items.len(), 1);
}

#[test]
fn eval_describes_items() {
    let mut repl = Repl::with_editor(Script::default()).without_banner();
    let out = repl
        .eval("export A is TFoo(X = 1)\nB is ~/C\ntemplate T [P] is TBase()")
        .unwrap();
    assert_eq!(
        out,
        "export A is object TFoo\nB is reference ~/C\ntemplate T (1 params)\n"
    );
}

#[test]
fn commands_use_last_input() {
    let mut repl = Repl::with_editor(Script::default()).without_banner();
    repl.eval("A is [~/B, C/D.E]").unwrap();
    assert_eq!(repl.eval(":refs").unwrap(), "~/B\nC/D.E");
    assert_eq!(repl.eval(":fmt").unwrap(), "A is [~/B, C/D.E]\n");
    assert!(repl.eval(":tree").unwrap().starts_with("(source_file (assignment"));
}

#[test]
fn commands_accept_inline_source() {
    let mut repl = Repl::with_editor(Script::default()).without_banner();
    assert_eq!(repl.eval(":refs X is Y").unwrap(), "Y");
    assert!(repl.last().is_none());
}

#[test]
fn load_and_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("a.ndf");
    let target = dir.path().join("a.msgpack");
    std::fs::write(&source, "A is 1\nB is 2\n").unwrap();

    let mut repl = Repl::with_editor(Script::default()).without_banner();
    let out = repl.eval(&format!(":load {}", source.display())).unwrap();
    assert!(out.ends_with("2 items, 0 references, 0 errors"), "{out}");

    let out = repl.eval(&format!(":save {}", target.display())).unwrap();
    assert!(out.starts_with("saved 2 items"), "{out}");
    let loaded = ndf_runtime::load_from_file(&target).unwrap();
    assert_eq!(Some(&loaded), repl.last());
}

#[test]
fn command_errors() {
    let mut repl = Repl::with_editor(Script::default()).without_banner();
    assert!(repl.eval(":tree").is_err());
    assert!(repl.eval(":bogus").is_err());
    assert!(repl.eval(":load").is_err());
}
