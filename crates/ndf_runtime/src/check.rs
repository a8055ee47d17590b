//! Checking NDF files and rendering their diagnostics.
//!
//! A check parses one source unit and keeps everything needed to report on
//! it afterwards: the source text, the tree, and the diagnostics.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use ndf_foundation::{Error, ErrorContext, Result};
use ndf_language::diagnostic::source_line;
use ndf_language::visitor::{collect_references, count_error_nodes};
use ndf_language::{Diagnostic, Parse, parse, parse_bytes};
use tracing::{debug, info};

/// Outcome of checking one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Path the source was read from.
    pub path: PathBuf,
    /// The decoded source text.
    pub source: String,
    /// The parse result.
    pub parse: Parse,
}

impl FileReport {
    /// Returns true if the file has any diagnostics.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.parse.has_errors()
    }

    /// Number of diagnostics.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.parse.diagnostics.len()
    }

    /// Renders every diagnostic, one block per diagnostic.
    #[must_use]
    pub fn render(&self) -> String {
        let name = self.path.display().to_string();
        self.parse
            .diagnostics
            .iter()
            .map(|d| render_diagnostic(&name, &self.source, d))
            .collect()
    }

    /// One-line summary, e.g. `units.ndf: 12 items, 30 references, 0 errors`.
    #[must_use]
    pub fn summary(&self) -> String {
        let errors = self.error_count();
        format!(
            "{}: {} items, {} references, {} {}",
            self.path.display(),
            self.parse.document.items.len(),
            collect_references(&self.parse.document).len(),
            errors,
            if errors == 1 { "error" } else { "errors" }
        )
    }
}

/// Parses source text.
#[must_use]
pub fn check_source(source: &str) -> Parse {
    let parse = parse(source);
    debug!(
        items = parse.document.items.len(),
        diagnostics = parse.diagnostics.len(),
        error_nodes = count_error_nodes(&parse.document),
        "checked source"
    );
    parse
}

/// Reads and parses a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn check_file(path: impl AsRef<Path>) -> Result<FileReport> {
    let path = path.as_ref();
    let context = ErrorContext::new().with_source(path.display().to_string());
    let bytes = fs::read(path).map_err(|e| {
        Error::io(format!("failed to read '{}': {e}", path.display()))
            .with_context(context.clone())
    })?;
    let parse = parse_bytes(&bytes).map_err(|e| e.with_context(context))?;
    let source = String::from_utf8(bytes)
        .map_err(|e| Error::io(format!("failed to decode '{}': {e}", path.display())))?;
    info!(
        path = %path.display(),
        diagnostics = parse.diagnostics.len(),
        "checked file"
    );
    Ok(FileReport {
        path: path.to_path_buf(),
        source,
        parse,
    })
}

/// Renders a diagnostic with its location, the offending source line, and a
/// caret underline.
///
/// ```text
/// units.ndf:2:12: error[unterminated-string]: unterminated string literal, expected '
///     Name = 'Tank
///            ^^^^^
/// ```
#[must_use]
pub fn render_diagnostic(name: &str, source: &str, diagnostic: &Diagnostic) -> String {
    let span = diagnostic.span;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{name}:{}:{}: error[{}]: {}",
        span.line, span.column, diagnostic.kind, diagnostic.message
    );

    let line = source_line(source, span);
    if line.is_empty() && span.start >= source.len() {
        return out;
    }
    let offset = (span.column as usize).saturating_sub(1);
    let covered = source
        .get(span.start.min(source.len())..span.end.min(source.len()))
        .unwrap_or_default();
    let on_line = covered.split('\n').next().unwrap_or_default();
    let width = on_line.chars().count().max(1);

    let _ = writeln!(out, "    {line}");
    let _ = writeln!(out, "    {}{}", " ".repeat(offset), "^".repeat(width));
    out
}
