//! Line editor abstraction for the REPL.
//!
//! The REPL talks to a [`LineEditor`]; [`RustylineEditor`] is the terminal
//! implementation, and tests substitute a scripted one.

use std::borrow::Cow;

use ndf_foundation::{Error, ErrorKind, Result};
use ndf_language::{DiagnosticKind, parse};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Completer, Config, Context, Editor, Helper, Hinter, Validator as RLValidator};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Read a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Helper for rustyline that provides completion, hints, and validation.
#[derive(Helper, Completer, Hinter, RLValidator)]
struct NdfHelper {
    #[rustyline(Completer)]
    completer: NdfCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    #[rustyline(Validator)]
    validator: BracketValidator,
}

impl Highlighter for NdfHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Words offered by tab completion.
pub const COMPLETIONS: &[&str] = &[
    // Declarations
    "export", "private", "public", "template", "unnamed", "is",
    // Literals and operators
    "nil", "true", "false", "div", "GUID:{",
    // Types
    "bool", "string", "int", "float", "TGuid", "int2", "int3", "int4", "float2", "float3",
    "float4", "RGBA", "Vector", "IFTE", "Pair", "MAP",
    // REPL commands
    ":help", ":tree", ":fmt", ":refs", ":load", ":save", ":quit",
];

/// Completer for NDF keywords, built-in type names, and REPL commands.
struct NdfCompleter;

impl NdfCompleter {
    fn candidates(word: &str) -> Vec<Pair> {
        COMPLETIONS
            .iter()
            .filter(|kw| !word.is_empty() && kw.starts_with(word))
            .map(|kw| Pair {
                display: (*kw).to_string(),
                replacement: (*kw).to_string(),
            })
            .collect()
    }
}

impl Completer for NdfCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = line[..pos]
            .rfind(|c: char| c.is_whitespace() || "()[]<>,=".contains(c))
            .map_or(0, |i| i + 1);
        Ok((start, Self::candidates(&line[start..pos])))
    }
}

/// Returns true unless the parser ran out of input inside a construct, in
/// which case more lines may complete it. For `:command source` only the
/// source part is checked.
#[must_use]
pub fn is_complete(input: &str) -> bool {
    let source = match input.trim_start().strip_prefix(':') {
        Some(command) => command
            .split_once(char::is_whitespace)
            .map_or("", |(_, rest)| rest),
        None => input,
    };
    let end = source.trim_end().len();
    !parse(source).diagnostics.iter().any(|d| match d.kind {
        DiagnosticKind::UnterminatedComment | DiagnosticKind::UnterminatedBraceBody => true,
        DiagnosticKind::UnexpectedToken => d.span.start >= end,
        _ => false,
    })
}

/// Validator for bracket matching (enables multi-line input).
#[derive(Default)]
struct BracketValidator;

impl Validator for BracketValidator {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if is_complete(ctx.input()) {
            Ok(ValidationResult::Valid(None))
        } else {
            Ok(ValidationResult::Incomplete)
        }
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<NdfHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?
            .build();

        let helper = NdfHelper {
            completer: NdfCompleter,
            hinter: HistoryHinter::new(),
            validator: BracketValidator,
        };

        let mut editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Internal(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
