//! Lexer for NDF.
//!
//! The lexer converts source text into a stream of tokens. It owns
//! whitespace and comment skipping and the raw sub-scans for comment,
//! string, and guid bodies. It never drops bytes: characters no token can
//! start with become single-character [`LexError::UnexpectedChar`] tokens
//! for the parser to recover from.

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::keyword::{Keyword, WordClass, classify_word};
use crate::span::Span;
use crate::token::{CommentKind, LexError, NumberKind, QuoteKind, Token, TokenKind};

/// Progress towards a `guid : {` sequence, which turns the next `{` into a
/// payload instead of a comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GuidState {
    None,
    SawGuid,
    SawColon,
}

/// Lexer for NDF source code.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// Whether the previously returned token was a comment.
    after_trivia: bool,
    guid_state: GuidState,
    /// Lexical problems found so far.
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        // A leading byte order mark is not part of the text.
        let position = if source.starts_with('\u{feff}') { 3 } else { 0 };
        Self {
            source,
            rest: &source[position..],
            position,
            line: 1,
            column: 1,
            after_trivia: false,
            guid_state: GuidState::None,
            diagnostics: Vec::new(),
        }
    }

    /// Returns the lexical diagnostics recorded so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Takes ownership of the recorded diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Returns the next token from the source.
    ///
    /// Once the input is exhausted every call returns [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Token {
        let skipped = self.skip_whitespace();
        let joined = !skipped && !self.after_trivia;

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
                joined,
            );
        };

        let kind = match c {
            '(' if self.peek_char_n(1) == Some('*') => self.scan_round_comment(),
            '/' if self.peek_char_n(1) == Some('/') => self.scan_line_comment(),
            '/' if self.peek_char_n(1) == Some('*') => self.scan_block_comment(),
            '{' if self.guid_state == GuidState::SawColon => self.scan_guid_body(),
            '{' => self.scan_brace_comment(),
            '"' => self.scan_string(QuoteKind::Double),
            '\'' => self.scan_string(QuoteKind::Single),
            '.' if self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.scan_number()
            }
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_word_start(c) => self.scan_word(),
            c => self.scan_punct(c),
        };

        self.after_trivia = kind.is_trivia();
        if !kind.is_trivia() {
            self.guid_state = match (&kind, self.guid_state) {
                (TokenKind::Word(_, WordClass::Keyword(Keyword::Guid)), _) => GuidState::SawGuid,
                (TokenKind::Colon, GuidState::SawGuid) => GuidState::SawColon,
                _ => GuidState::None,
            };
        }

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
            joined,
        )
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// Comments are included in the output; the final token is always `Eof`.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks `n` characters ahead.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Advances while `pred` holds.
    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Skips whitespace characters. Returns true if anything was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.position;
        self.advance_while(char::is_whitespace);
        self.position != start
    }

    fn error(&mut self, kind: DiagnosticKind, start: usize, line: u32, column: u32, msg: &str) {
        self.diagnostics.push(Diagnostic::new(
            kind,
            Span::new(start, self.position, line, column),
            msg,
        ));
    }

    /// Scans `// ...` up to, not including, the line break.
    fn scan_line_comment(&mut self) -> TokenKind {
        self.advance_while(|c| c != '\n' && c != '\r');
        TokenKind::Comment(CommentKind::Line)
    }

    /// Scans `/* ... */`. The body ends at the first `*/`.
    fn scan_block_comment(&mut self) -> TokenKind {
        self.scan_delimited_comment("*/", CommentKind::Block)
    }

    /// Scans `(* ... *)`. The body ends at the first `*)`.
    fn scan_round_comment(&mut self) -> TokenKind {
        self.scan_delimited_comment("*)", CommentKind::Round)
    }

    fn scan_delimited_comment(&mut self, closer: &str, kind: CommentKind) -> TokenKind {
        let (start, line, column) = (self.position, self.line, self.column);
        self.advance();
        self.advance();
        while !self.rest.is_empty() {
            if self.rest.starts_with(closer) {
                self.advance();
                self.advance();
                return TokenKind::Comment(kind);
            }
            self.advance();
        }
        self.error(
            DiagnosticKind::UnterminatedComment,
            start,
            line,
            column,
            &format!("unterminated comment, expected '{closer}'"),
        );
        TokenKind::Comment(kind)
    }

    /// Scans a `{ ... }` comment.
    fn scan_brace_comment(&mut self) -> TokenKind {
        let (start, line, column) = (self.position, self.line, self.column);
        if self.scan_balanced_braces().is_none() {
            self.error(
                DiagnosticKind::UnterminatedBraceBody,
                start,
                line,
                column,
                "unterminated '{' comment, expected '}'",
            );
        }
        TokenKind::Comment(CommentKind::Brace)
    }

    /// Scans the `{ ... }` payload after `guid:`.
    fn scan_guid_body(&mut self) -> TokenKind {
        let (start, line, column) = (self.position, self.line, self.column);
        if let Some(body) = self.scan_balanced_braces() {
            TokenKind::GuidBody(body.to_string())
        } else {
            self.error(
                DiagnosticKind::UnterminatedBraceBody,
                start,
                line,
                column,
                "unterminated guid body, expected '}'",
            );
            TokenKind::Error(LexError::UnterminatedBrace)
        }
    }

    /// Raw scan of a brace body, shared by brace comments and guid payloads.
    ///
    /// Expects the cursor on `{`. Nested `{`/`}` pairs are counted and a
    /// backslash skips the following character. On success the cursor sits
    /// after the matching `}` and the text between the outer braces is
    /// returned verbatim. On failure the cursor is at end of input.
    fn scan_balanced_braces(&mut self) -> Option<&'src str> {
        let source = self.source;
        self.advance();
        let body_start = self.position;
        let mut depth = 1usize;
        while let Some(c) = self.peek_char() {
            match c {
                '\\' => self.advance(),
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        let body = &source[body_start..self.position];
                        self.advance();
                        return Some(body);
                    }
                }
                _ => {}
            }
            self.advance();
        }
        None
    }

    /// Scans a string literal. The body is kept raw, escapes included.
    fn scan_string(&mut self, quote: QuoteKind) -> TokenKind {
        let (start, line, column) = (self.position, self.line, self.column);
        let source = self.source;
        self.advance(); // consume opening quote
        let body_start = self.position;
        loop {
            match self.peek_char() {
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some(c) if c == quote.char() => {
                    let body = &source[body_start..self.position];
                    self.advance();
                    return TokenKind::String(quote, body.to_string());
                }
                Some('\n' | '\r') | None => {
                    self.error(
                        DiagnosticKind::UnterminatedString,
                        start,
                        line,
                        column,
                        &format!("unterminated string literal, expected {}", quote.char()),
                    );
                    return TokenKind::Error(LexError::UnterminatedString);
                }
                Some(_) => self.advance(),
            }
        }
    }

    /// Scans a number: decimal, `0x` hex, or float (`.5`, `5.`, `5.5`).
    fn scan_number(&mut self) -> TokenKind {
        let start = self.position;

        if self.peek_char() == Some('0') && matches!(self.peek_char_n(1), Some('x' | 'X')) {
            let (line, column) = (self.line, self.column);
            self.advance();
            self.advance();
            if !self.peek_char().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.error(
                    DiagnosticKind::UnexpectedToken,
                    start,
                    line,
                    column,
                    "expected hex digits after '0x'",
                );
                return TokenKind::Error(LexError::MissingHexDigits);
            }
            self.advance_while(|c| c.is_ascii_hexdigit());
            return TokenKind::Number(NumberKind::Hex, self.source[start..self.position].into());
        }

        self.advance_while(|c| c.is_ascii_digit());
        let kind = if self.peek_char() == Some('.') {
            self.advance();
            self.advance_while(|c| c.is_ascii_digit());
            NumberKind::Float
        } else {
            NumberKind::Decimal
        };
        TokenKind::Number(kind, self.source[start..self.position].into())
    }

    /// Scans an identifier and classifies it.
    fn scan_word(&mut self) -> TokenKind {
        let start = self.position;
        self.advance_while(is_word_char);
        let text = &self.source[start..self.position];
        TokenKind::Word(text.to_string(), classify_word(text))
    }

    /// Scans punctuation and operators.
    fn scan_punct(&mut self, c: char) -> TokenKind {
        self.advance();
        let followed_by_eq = self.peek_char() == Some('=');
        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '?' => TokenKind::Question,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '%' => TokenKind::Percent,
            '&' => TokenKind::Amp,
            '|' => TokenKind::Pipe,
            '/' => TokenKind::Slash,
            '.' => TokenKind::Dot,
            '~' => TokenKind::Tilde,
            '$' => TokenKind::Dollar,
            '=' if followed_by_eq => TokenKind::EqEq,
            '!' if followed_by_eq => TokenKind::NotEq,
            '<' if followed_by_eq => TokenKind::LtEq,
            '>' if followed_by_eq => TokenKind::GtEq,
            '=' => return TokenKind::Eq,
            '!' => return TokenKind::Bang,
            '<' => return TokenKind::Lt,
            '>' => return TokenKind::Gt,
            other => return TokenKind::Error(LexError::UnexpectedChar(other)),
        };
        if matches!(
            kind,
            TokenKind::EqEq | TokenKind::NotEq | TokenKind::LtEq | TokenKind::GtEq
        ) {
            self.advance();
        }
        kind
    }
}

/// Returns true if `c` can start a word.
fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can appear in a word after the first character.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
