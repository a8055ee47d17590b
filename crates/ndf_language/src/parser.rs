//! Parser for NDF.
//!
//! The parser converts the token stream into a [`Document`]. It is a
//! hand-written recursive descent parser with precedence climbing for
//! operators. All ambiguity between objects, vectors and reference chains is
//! settled with bounded lookahead over the token buffer and the `joined`
//! flag the lexer puts on every token.
//!
//! Malformed input never aborts the parse: the offending fragment becomes an
//! [`ErrorNode`], a [`Diagnostic`] is recorded, and parsing resumes at the
//! next plausible item or member boundary. Input nested deeper than
//! `MAX_NESTING` levels is handled the same way.

mod declaration;
mod expr;
mod reference;

use ndf_foundation::{CancellationFlag, Error, ErrorKind, Result};
use tracing::{debug, trace};

use crate::ast::{Document, ErrorNode, Expr, Item, Name};
use crate::diagnostic::{Diagnostic, DiagnosticKind, source_line};
use crate::keyword::{Keyword, WordClass};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Deepest expression or type-parameter nesting the parser descends into.
/// Anything nested deeper becomes a single error node.
pub(crate) const MAX_NESTING: usize = 32;

/// Settings for a parse.
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    /// Checked between top-level items.
    pub cancellation: Option<CancellationFlag>,
    /// Keep at most this many diagnostics.
    pub max_diagnostics: Option<usize>,
}

impl ParseOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cancellation flag.
    #[must_use]
    pub fn with_cancellation(mut self, flag: CancellationFlag) -> Self {
        self.cancellation = Some(flag);
        self
    }

    /// Caps the number of reported diagnostics.
    #[must_use]
    pub const fn with_max_diagnostics(mut self, max: usize) -> Self {
        self.max_diagnostics = Some(max);
        self
    }
}

/// Result of parsing one source unit.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parse {
    /// The syntax tree. Always present, possibly with error nodes.
    pub document: Document,
    /// Problems found, ordered by position.
    pub diagnostics: Vec<Diagnostic>,
}

impl Parse {
    /// Returns true if any diagnostic was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// A sub-parse failed. The diagnostic has already been recorded.
#[derive(Debug)]
struct Abort;

type PResult<T> = std::result::Result<T, Abort>;

/// Parser for NDF source code.
pub struct Parser<'src> {
    /// Source text (for error nodes).
    source: &'src str,
    /// Non-trivia tokens, always ending with `Eof`.
    tokens: Vec<Token>,
    /// Index of the current token.
    pos: usize,
    /// Parser diagnostics.
    diagnostics: Vec<Diagnostic>,
    /// Lexer diagnostics, merged at the end.
    lex_diagnostics: Vec<Diagnostic>,
    /// "Unexpected end of input" is reported only once.
    eof_reported: bool,
    /// Expressions and type parameters currently open.
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            if token.kind.is_trivia() {
                continue;
            }
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Self {
            source,
            tokens,
            pos: 0,
            diagnostics: Vec::new(),
            lex_diagnostics: lexer.take_diagnostics(),
            eof_reported: false,
            depth: 0,
        }
    }

    /// Parses the whole source.
    ///
    /// # Errors
    /// Returns [`ErrorKind::Cancelled`] if the options' cancellation flag is
    /// raised before the parse completes.
    pub fn parse_document(mut self, options: &ParseOptions) -> Result<Parse> {
        let cancelled = || {
            options
                .cancellation
                .as_ref()
                .is_some_and(CancellationFlag::is_cancelled)
        };
        let Some(items) = self.top_items(cancelled) else {
            debug!(position = self.pos, "parse cancelled");
            return Err(Error::cancelled());
        };
        Ok(self.finish(items, options.max_diagnostics))
    }

    /// Parses top-level items until end of input. Returns `None` if
    /// `cancelled` reports true between two items.
    fn top_items(&mut self, cancelled: impl Fn() -> bool) -> Option<Vec<Item>> {
        let mut items = Vec::new();
        while !self.at_eof() {
            if cancelled() {
                return None;
            }
            let start = self.pos;
            let item = match self.item() {
                Ok(Item::Expr(Expr::Error(node))) => Item::Error(node),
                Ok(item) => item,
                Err(Abort) => self.recover_item(start),
            };
            trace!(
                line = item.span().line,
                column = item.span().column,
                error = item.is_error(),
                "parsed top-level item"
            );
            items.push(item);
        }
        Some(items)
    }

    fn finish(self, items: Vec<Item>, max_diagnostics: Option<usize>) -> Parse {
        let mut diagnostics = self.lex_diagnostics;
        diagnostics.extend(self.diagnostics);
        diagnostics.sort_by_key(|d| d.span.start);
        if let Some(max) = max_diagnostics {
            diagnostics.truncate(max);
        }
        Parse {
            document: Document {
                items,
                span: Span::new(0, self.source.len(), 1, 1),
            },
            diagnostics,
        }
    }

    /// Turns a failed top-level item into an error node and skips ahead to
    /// the next item boundary.
    fn recover_item(&mut self, start: usize) -> Item {
        if self.pos == start {
            self.bump();
        }
        while !self.at_eof() && !self.at_item_start() {
            self.bump();
        }
        let node = self.error_node(start);
        debug!(
            line = node.span.line,
            column = node.span.column,
            len = node.span.len(),
            "recovered from malformed item"
        );
        Item::Error(node)
    }

    // =========================================================================
    // Token access
    // =========================================================================

    /// Returns the token `n` positions ahead, or `Eof` past the end.
    fn nth(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    /// Returns the current token.
    fn peek(&self) -> &Token {
        self.nth(0)
    }

    fn at(&self, kind: &TokenKind) -> bool {
        self.peek().kind == *kind
    }

    fn at_eof(&self) -> bool {
        self.at(&TokenKind::Eof)
    }

    /// Consumes and returns the current token. `Eof` is never consumed.
    fn bump(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it is `kind`.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes a token of `kind` or reports what was expected.
    fn expect(&mut self, kind: &TokenKind, expected: &str) -> PResult<Token> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn word_at(&self, n: usize) -> Option<WordClass> {
        self.nth(n).word().map(|(_, class)| class)
    }

    fn keyword_at(&self, n: usize) -> Option<Keyword> {
        self.word_at(n).and_then(WordClass::keyword)
    }

    fn is_keyword_at(&self, n: usize, keyword: Keyword) -> bool {
        self.keyword_at(n) == Some(keyword)
    }

    /// Consumes any word as a name. Keywords are plain names here.
    fn name(&mut self, expected: &str) -> PResult<Name> {
        if self.word_at(0).is_none() {
            return Err(self.unexpected(expected));
        }
        let token = self.bump();
        let text = token.word().map(|(text, _)| text.to_string()).unwrap_or_default();
        Ok(Name::new(text, token.span))
    }

    /// Span from the token at index `start` through the last consumed token.
    fn span_since(&self, start: usize) -> Span {
        let first = self.tokens[start.min(self.tokens.len() - 1)].span;
        if self.pos > start {
            first.to(self.tokens[self.pos - 1].span)
        } else {
            Span::new(first.start, first.start, first.line, first.column)
        }
    }

    /// Builds an error node over the tokens consumed since `start`.
    fn error_node(&self, start: usize) -> ErrorNode {
        let span = self.span_since(start);
        ErrorNode {
            span,
            text: span.text(self.source).to_string(),
        }
    }

    // =========================================================================
    // Lookahead predicates shared by the item, member and expression levels
    // =========================================================================

    /// `Name is ...`
    ///
    /// `export Is is 1` is a visibility wrapper, not an assignment to
    /// `export`, so a third `is` cancels the match.
    fn is_assignment_start(&self, n: usize) -> bool {
        self.word_at(n).is_some()
            && self.is_keyword_at(n + 1, Keyword::Is)
            && !self.is_keyword_at(n + 2, Keyword::Is)
    }

    /// `export|private|public` followed by an assignment or template.
    ///
    /// `A = Public` followed by `B = 2` keeps `Public` as a value.
    fn is_visibility_start(&self, n: usize) -> bool {
        self.is_modifier_at(n)
            && (self.is_assignment_start(n + 1) || self.is_template_start(n + 1))
    }

    fn is_modifier_at(&self, n: usize) -> bool {
        matches!(
            self.keyword_at(n),
            Some(Keyword::Export | Keyword::Private | Keyword::Public)
        )
    }

    /// `template Name`
    fn is_template_start(&self, n: usize) -> bool {
        self.is_keyword_at(n, Keyword::Template)
            && self.word_at(n + 1).is_some()
            && !self.is_assignment_start(n)
    }

    /// `unnamed Type(`
    fn is_unnamed_start(&self, n: usize) -> bool {
        self.is_keyword_at(n, Keyword::Unnamed)
            && self.word_at(n + 1).is_some()
            && self.nth(n + 2).kind == TokenKind::LParen
    }

    /// `Name =` or `Name :`, except the `guid:{...}` literal.
    fn is_member_start(&self, n: usize) -> bool {
        if self.word_at(n).is_none() {
            return false;
        }
        match self.nth(n + 1).kind {
            TokenKind::Eq => true,
            TokenKind::Colon => {
                !(self.is_keyword_at(n, Keyword::Guid)
                    && matches!(
                        self.nth(n + 2).kind,
                        TokenKind::GuidBody(_) | TokenKind::Error(_)
                    ))
            }
            _ => false,
        }
    }

    /// True where a new top-level item can plausibly begin.
    fn at_item_start(&self) -> bool {
        self.is_assignment_start(0)
            || self.is_visibility_start(0)
            || self.is_template_start(0)
            || self.is_unnamed_start(0)
    }

    // =========================================================================
    // Nesting
    // =========================================================================

    /// Runs `f` one nesting level deeper. Past [`MAX_NESTING`] the fragment
    /// at the current token is skipped and reported instead, and the caller
    /// recovers as from any other broken fragment.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if self.depth >= MAX_NESTING {
            self.too_deep()?;
            return Err(Abort);
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Like [`Parser::nested`], but a fragment nested too deep becomes an
    /// error expression so the enclosing construct still closes.
    fn nested_expr(&mut self, f: impl FnOnce(&mut Self) -> PResult<Expr>) -> PResult<Expr> {
        if self.depth >= MAX_NESTING {
            return self.too_deep().map(Expr::Error);
        }
        self.nested(f)
    }

    /// Skips and reports the fragment at the current token. Fails if there
    /// was nothing to skip.
    fn too_deep(&mut self) -> PResult<ErrorNode> {
        let start = self.pos;
        self.skip_fragment();
        let node = self.error_node(start);
        debug!(
            line = node.span.line,
            column = node.span.column,
            len = node.span.len(),
            "skipped fragment nested too deep"
        );
        self.report(
            DiagnosticKind::UnrecoverableFragment,
            node.span,
            format!("nesting deeper than {MAX_NESTING} levels"),
        );
        if self.pos == start { Err(Abort) } else { Ok(node) }
    }

    /// Skips one balanced fragment. Stops before a `,`, `)` or `]` that
    /// closes an enclosing construct, or after the group that opened here.
    fn skip_fragment(&mut self) {
        let mut level = 0usize;
        loop {
            match self.peek().kind {
                TokenKind::Eof => return,
                TokenKind::Comma | TokenKind::RParen | TokenKind::RBracket if level == 0 => {
                    return;
                }
                TokenKind::LParen | TokenKind::LBracket => level += 1,
                TokenKind::RParen | TokenKind::RBracket => {
                    level -= 1;
                    if level == 0 {
                        self.bump();
                        return;
                    }
                }
                _ => {}
            }
            self.bump();
        }
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    fn report(&mut self, kind: DiagnosticKind, span: Span, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(kind, span, message));
    }

    /// Reports a problem at the current token.
    ///
    /// End of input is reported once per parse, and tokens the lexer already
    /// reported are not reported again.
    fn report_here(&mut self, kind: DiagnosticKind, message: String) {
        let (is_eof, skip) = match &self.peek().kind {
            TokenKind::Eof => (true, self.eof_reported),
            TokenKind::Error(err) => (false, err.is_reported()),
            _ => (false, false),
        };
        if skip {
            return;
        }
        self.eof_reported |= is_eof;
        let span = self.peek().span;
        self.report(kind, span, message);
    }

    /// Reports that `expected` was required at the current token.
    fn unexpected(&mut self, expected: &str) -> Abort {
        let found = self.peek().kind.name();
        self.report_here(
            DiagnosticKind::UnexpectedToken,
            format!("expected {expected}, found {found}"),
        );
        Abort
    }
}

/// Parses NDF source into a document plus diagnostics.
///
/// Never fails: malformed input yields error nodes and diagnostics.
#[must_use]
pub fn parse(source: &str) -> Parse {
    let mut parser = Parser::new(source);
    let items = parser.top_items(|| false).unwrap_or_default();
    parser.finish(items, None)
}

/// Parses NDF source with explicit options.
///
/// # Errors
/// Returns [`ErrorKind::Cancelled`] if the cancellation flag is raised.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> Result<Parse> {
    Parser::new(source).parse_document(options)
}

/// Parses raw bytes, which must be UTF-8. A leading byte order mark is
/// skipped.
///
/// # Errors
/// Returns [`ErrorKind::InvalidEncoding`] for bytes that are not UTF-8.
pub fn parse_bytes(bytes: &[u8]) -> Result<Parse> {
    let source = std::str::from_utf8(bytes).map_err(|e| {
        Error::new(ErrorKind::InvalidEncoding {
            valid_up_to: e.valid_up_to(),
        })
    })?;
    Ok(parse(source))
}

/// Parses NDF source and fails on the first diagnostic.
///
/// # Errors
/// Returns [`ErrorKind::ParseError`] describing the earliest problem.
pub fn parse_strict(source: &str) -> Result<Document> {
    let parse = parse(source);
    match parse.diagnostics.first() {
        Some(diag) => Err(Error::parse(
            format!("{}: {}", diag.kind, diag.message),
            diag.span.line,
            diag.span.column,
            source_line(source, diag.span).to_string(),
        )),
        None => Ok(parse.document),
    }
}
