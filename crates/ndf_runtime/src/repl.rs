//! The interactive REPL.
//!
//! Each input is parsed as an NDF fragment; the REPL reports diagnostics and
//! a one-line description of every top-level item. Commands start with `:`.

use std::io::{self, Write};
use std::path::Path;

use ndf_foundation::{Error, ErrorKind, Result};
use ndf_language::ast::{Declaration, Expr, Item};
use ndf_language::pretty::pretty_print;
use ndf_language::sexp::to_sexp;
use ndf_language::visitor::collect_references;
use ndf_language::Parse;

use crate::check::{check_file, check_source, render_diagnostic};
use crate::editor::{LineEditor, ReadResult, RustylineEditor, is_complete};
use crate::serialize::save_to_file;

const HELP: &str = "\
Enter NDF source to parse it. Commands:
    :tree [source]   Print the syntax tree of source, or of the last input
    :fmt [source]    Print the canonical form
    :refs [source]   List every reference path
    :load PATH       Check a file and make it the last input
    :save PATH       Export the last input as MessagePack
    :help            Show this help
    :quit            Exit (or Ctrl+D)";

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The most recent parse, used by commands without an argument.
    last: Option<Parse>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for multi-line input).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            last: None,
            show_banner: true,
            prompt: "ndf> ".to_string(),
            continuation_prompt: "...  ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the most recent parse.
    #[must_use]
    pub const fn last(&self) -> Option<&Parse> {
        self.last.as_ref()
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.print_error(&e),
            }
        }

        println!();
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let Some(input) = self.read_input()? else {
            return Ok(false);
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        if matches!(trimmed, ":quit" | ":q") {
            return Ok(false);
        }

        match self.eval(&input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{}", output.trim_end());
                }
            }
            Err(e) => self.print_error(&e),
        }
        Ok(true)
    }

    /// Reads a potentially multi-line input.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let prompt = if first_line {
                &self.prompt
            } else {
                &self.continuation_prompt
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    if !first_line {
                        input.push('\n');
                    }
                    input.push_str(&line);
                    if is_complete(&input) {
                        return Ok(Some(input));
                    }
                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    return Err(Error::new(ErrorKind::Internal(
                        "unexpected EOF in multi-line input".to_string(),
                    )));
                }
            }
        }
    }

    /// Evaluates one input and returns the text to print.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands, commands that need a previous
    /// input when there is none, and file errors from `:load` and `:save`.
    pub fn eval(&mut self, input: &str) -> Result<String> {
        let trimmed = input.trim();
        let Some(command) = trimmed.strip_prefix(':') else {
            return Ok(self.eval_source(input));
        };

        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, rest)| (name, rest.trim()));

        match name {
            "help" | "h" => Ok(HELP.to_string()),
            "tree" => Ok(to_sexp(&self.target(arg)?.document)),
            "fmt" => Ok(pretty_print(&self.target(arg)?.document)),
            "refs" => {
                let parse = self.target(arg)?;
                let paths: Vec<String> = collect_references(&parse.document)
                    .iter()
                    .map(|r| r.path())
                    .collect();
                Ok(paths.join("\n"))
            }
            "load" => self.load(arg),
            "save" => self.save(arg),
            _ => Err(Error::new(ErrorKind::Internal(format!(
                "unknown command ':{name}', try :help"
            )))),
        }
    }

    /// Parses source, remembers it, and describes what was found.
    fn eval_source(&mut self, source: &str) -> String {
        let parse = check_source(source);
        let mut out = String::new();
        for diagnostic in &parse.diagnostics {
            out.push_str(&render_diagnostic("<input>", source, diagnostic));
        }
        for item in &parse.document.items {
            out.push_str(&describe_item(item));
            out.push('\n');
        }
        self.last = Some(parse);
        out
    }

    /// Parses `arg` if given, otherwise returns the last parse.
    fn target(&self, arg: &str) -> Result<Parse> {
        if !arg.is_empty() {
            return Ok(check_source(arg));
        }
        self.last
            .clone()
            .ok_or_else(|| Error::new(ErrorKind::Internal("nothing parsed yet".to_string())))
    }

    fn load(&mut self, arg: &str) -> Result<String> {
        if arg.is_empty() {
            return Err(Error::new(ErrorKind::Internal(
                ":load needs a path".to_string(),
            )));
        }
        let report = check_file(arg)?;
        let mut out = report.render();
        out.push_str(&report.summary());
        self.last = Some(report.parse);
        Ok(out)
    }

    fn save(&self, arg: &str) -> Result<String> {
        if arg.is_empty() {
            return Err(Error::new(ErrorKind::Internal(
                ":save needs a path".to_string(),
            )));
        }
        let parse = self.target("")?;
        save_to_file(&parse, Path::new(arg))?;
        Ok(format!(
            "saved {} items to {arg}",
            parse.document.items.len()
        ))
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("NDF REPL v{}", env!("CARGO_PKG_VERSION"));
        println!("Type NDF source to parse it, :help for commands, Ctrl+D to exit.\n");
        let _ = io::stdout().flush();
    }
}

fn describe_expr(expr: &Expr) -> String {
    match expr {
        Expr::Object(o) => format!("object {}", o.type_name.text),
        Expr::Reference(r) => format!("reference {}", r.path()),
        other => other.type_name().to_string(),
    }
}

/// One-line description of a top-level item.
fn describe_item(item: &Item) -> String {
    match item {
        Item::Assignment(a) => format!("{} is {}", a.name.text, describe_expr(&a.value)),
        Item::Visibility(v) => match &v.declaration {
            Declaration::Assignment(a) => format!(
                "{} {} is {}",
                v.modifier.as_str(),
                a.name.text,
                describe_expr(&a.value)
            ),
            Declaration::Template(t) => format!(
                "{} template {} ({} params)",
                v.modifier.as_str(),
                t.name.text,
                t.params.len()
            ),
        },
        Item::Template(t) => format!("template {} ({} params)", t.name.text, t.params.len()),
        Item::Unnamed(u) => format!("unnamed object {}", u.object.type_name.text),
        Item::Member(m) => format!("member {}", m.name.text),
        Item::Expr(e) => describe_expr(e),
        Item::Error(e) => format!("error {:?}", e.text),
    }
}
