//! Token types for NDF.
//!
//! Tokens are the output of the lexer and input to the parser.

use crate::keyword::WordClass;
use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
    /// True when no whitespace or comment separates this token from the
    /// previous one. Several grammar choices (`Name[`, `A/B`, `A.B`) hinge
    /// on this.
    pub joined: bool,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span, joined: bool) -> Self {
        Self { kind, span, joined }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns the word text and class if this token is a word.
    #[must_use]
    pub fn word(&self) -> Option<(&str, WordClass)> {
        match &self.kind {
            TokenKind::Word(text, class) => Some((text, *class)),
            _ => None,
        }
    }
}

/// Flavour of numeric literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberKind {
    /// `42`
    Decimal,
    /// `0x2A`
    Hex,
    /// `.5`, `5.` or `5.5`
    Float,
}

/// Quote character used by a string literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuoteKind {
    /// `"..."`
    Double,
    /// `'...'`
    Single,
}

impl QuoteKind {
    /// The delimiting character.
    #[must_use]
    pub const fn char(self) -> char {
        match self {
            Self::Double => '"',
            Self::Single => '\'',
        }
    }
}

/// Comment flavours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentKind {
    /// `// ...` to end of line
    Line,
    /// `/* ... */`
    Block,
    /// `(* ... *)`
    Round,
    /// `{ ... }`, nesting-aware
    Brace,
}

/// Lexical failures carried by [`TokenKind::Error`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexError {
    /// String literal without its closing quote on the same line.
    UnterminatedString,
    /// Guid payload without its matching `}`.
    UnterminatedBrace,
    /// `0x` with no hex digit after it.
    MissingHexDigits,
    /// A character no token can start with.
    UnexpectedChar(char),
}

impl LexError {
    /// Returns true if the lexer already reported this failure as a diagnostic.
    #[must_use]
    pub const fn is_reported(&self) -> bool {
        !matches!(self, Self::UnexpectedChar(_))
    }
}

/// Token types for NDF.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// `:`
    Colon,

    // Operators
    /// `=`
    Eq,
    /// `?`
    Question,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `!`
    Bang,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `%`
    Percent,
    /// `&`
    Amp,
    /// `|`
    Pipe,

    // Reference joiners and scope markers
    /// `/`
    Slash,
    /// `.`
    Dot,
    /// `~`
    Tilde,
    /// `$`
    Dollar,

    // Literals
    /// Identifier-shaped word with its classification.
    Word(String, WordClass),
    /// Numeric literal, kept as written.
    Number(NumberKind, String),
    /// String literal; the body is raw, escapes are not interpreted.
    String(QuoteKind, String),
    /// Raw payload of a `guid:{...}` body, without the braces.
    GuidBody(String),

    // Meta
    /// Comment (trivia).
    Comment(CommentKind),
    /// End of input
    Eof,
    /// Lexer error
    Error(LexError),
}

impl TokenKind {
    /// Returns true if this token kind should be ignored during parsing.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Comma => "','",
            Self::Colon => "':'",
            Self::Eq => "'='",
            Self::Question => "'?'",
            Self::Lt => "'<'",
            Self::Gt => "'>'",
            Self::LtEq => "'<='",
            Self::GtEq => "'>='",
            Self::EqEq => "'=='",
            Self::NotEq => "'!='",
            Self::Bang => "'!'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Percent => "'%'",
            Self::Amp => "'&'",
            Self::Pipe => "'|'",
            Self::Slash => "'/'",
            Self::Dot => "'.'",
            Self::Tilde => "'~'",
            Self::Dollar => "'$'",
            Self::Word(_, WordClass::Keyword(_)) => "keyword",
            Self::Word(..) => "identifier",
            Self::Number(..) => "number",
            Self::String(..) => "string",
            Self::GuidBody(_) => "guid body",
            Self::Comment(_) => "comment",
            Self::Eof => "end of input",
            Self::Error(_) => "invalid token",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::{Keyword, classify_word};

    #[test]
    fn token_text() {
        let source = "Unit is TUnit";
        let token = Token::new(
            TokenKind::Word("Unit".into(), WordClass::Name),
            Span::new(0, 4, 1, 1),
            true,
        );
        assert_eq!(token.text(source), "Unit");
        assert_eq!(token.word(), Some(("Unit", WordClass::Name)));
    }

    #[test]
    fn token_kind_name() {
        assert_eq!(TokenKind::LParen.name(), "'('");
        assert_eq!(
            TokenKind::Number(NumberKind::Hex, "0xFF".into()).name(),
            "number"
        );
        assert_eq!(
            TokenKind::Word("is".into(), classify_word("is")).name(),
            "keyword"
        );
        assert_eq!(
            TokenKind::Word("Foo".into(), WordClass::Name).name(),
            "identifier"
        );
    }

    #[test]
    fn token_kind_is_trivia() {
        assert!(TokenKind::Comment(CommentKind::Brace).is_trivia());
        assert!(!TokenKind::Word("x".into(), WordClass::Keyword(Keyword::Is)).is_trivia());
    }

    #[test]
    fn lex_error_reporting() {
        assert!(LexError::UnterminatedString.is_reported());
        assert!(LexError::MissingHexDigits.is_reported());
        assert!(!LexError::UnexpectedChar('@').is_reported());
    }

    #[test]
    fn quote_chars() {
        assert_eq!(QuoteKind::Double.char(), '"');
        assert_eq!(QuoteKind::Single.char(), '\'');
    }
}
