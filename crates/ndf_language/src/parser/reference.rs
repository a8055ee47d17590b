//! Word-led expressions and reference chains.
//!
//! A bare word can open an object (`Name(`), a vector (`Name[` with no
//! space), an indexed reference (same shape as a vector), a nested or member
//! reference (`Name/`, `Name.` with no space) or a plain terminal reference.
//! Objects and vectors are tried first. A one-item vector that is directly
//! followed by another path suffix is reread as an indexed reference.

use super::{PResult, Parser};
use crate::ast::{Expr, Name, Reference, Scope, Segment, SegmentKind, Vector, VectorType};
use crate::keyword::{BuiltinVectorType, Keyword, WordClass};
use crate::span::Span;
use crate::token::TokenKind;

/// A reference under construction.
struct Chain {
    scope: Scope,
    segments: Vec<Segment>,
    /// Index of the most recent name segment.
    last_name: usize,
}

impl Chain {
    fn new(scope: Scope, name: Name, kind: SegmentKind) -> Self {
        Self {
            scope,
            segments: vec![Segment::Name { name, kind }],
            last_name: 0,
        }
    }

    /// Appends `name` behind a `/` or `.` joiner. The previous name takes the
    /// joiner's kind as well.
    fn join(&mut self, kind: SegmentKind, name: Name) {
        if let Some(Segment::Name { kind: prev, .. }) = self.segments.get_mut(self.last_name) {
            *prev = kind;
        }
        self.last_name = self.segments.len();
        self.segments.push(Segment::Name { name, kind });
    }

    fn index(&mut self, index: Expr) {
        self.segments.push(Segment::Index(index));
    }

    fn finish(self, span: Span) -> Reference {
        Reference {
            scope: self.scope,
            segments: self.segments,
            span,
        }
    }
}

impl Parser<'_> {
    /// `.`, `~` or `$` directly followed by `/`.
    pub(super) fn is_scoped_reference_start(&self, n: usize) -> bool {
        matches!(
            self.nth(n).kind,
            TokenKind::Dot | TokenKind::Tilde | TokenKind::Dollar
        ) && self.nth(n + 1).kind == TokenKind::Slash
            && self.nth(n + 1).joined
    }

    /// True if the current token continues a reference chain.
    fn at_chain_suffix(&self) -> bool {
        let token = self.peek();
        if !token.joined {
            return false;
        }
        match token.kind {
            TokenKind::LBracket => true,
            TokenKind::Slash | TokenKind::Dot => {
                self.word_at(1).is_some() && self.nth(1).joined
            }
            _ => false,
        }
    }

    /// Dispatches an expression that starts with a word.
    pub(super) fn word_led(&mut self) -> PResult<Expr> {
        let Some(class) = self.word_at(0) else {
            return Err(self.unexpected("a name"));
        };

        if self.is_assignment_start(0) {
            return Ok(Expr::Assignment(Box::new(self.assignment()?)));
        }
        if self.is_visibility_start(0) {
            return Ok(Expr::Visibility(Box::new(self.visibility()?)));
        }

        let span = self.peek().span;
        let next = &self.nth(1).kind;
        let next_is_bracket = *next == TokenKind::LBracket;
        let next_is_paren = *next == TokenKind::LParen;
        let next_is_colon = *next == TokenKind::Colon;
        let next_joined = self.nth(1).joined;

        match class {
            WordClass::Keyword(Keyword::Nil) => {
                self.bump();
                return Ok(Expr::Nil(span));
            }
            WordClass::Keyword(Keyword::True) => {
                self.bump();
                return Ok(Expr::Bool(true, span));
            }
            WordClass::Keyword(Keyword::False) => {
                self.bump();
                return Ok(Expr::Bool(false, span));
            }
            WordClass::Keyword(Keyword::Guid) if next_is_colon => return self.guid(),
            WordClass::VectorType(BuiltinVectorType::Map) if next_is_bracket => {
                return self.map();
            }
            WordClass::VectorType(builtin) if next_is_bracket => {
                return Ok(Expr::Vector(self.vector(Some(builtin))?));
            }
            _ => {}
        }

        if next_is_paren {
            return Ok(Expr::Object(Box::new(self.object()?)));
        }
        if next_is_bracket && next_joined {
            return self.vector_or_indexed();
        }
        Ok(Expr::Reference(self.reference()?))
    }

    /// `Type[items]`
    fn vector(&mut self, builtin: Option<BuiltinVectorType>) -> PResult<Vector> {
        let start = self.pos;
        let name = self.name("a vector type")?;
        self.expect(&TokenKind::LBracket, "'['")?;
        let (items, stray_commas) = self.items()?;
        self.expect(&TokenKind::RBracket, "']'")?;
        Ok(Vector {
            ty: VectorType { name, builtin },
            items,
            stray_commas,
            span: self.span_since(start),
        })
    }

    /// `Name[...]` with no space before `[`.
    fn vector_or_indexed(&mut self) -> PResult<Expr> {
        let start = self.pos;
        let vector = self.vector(None)?;
        if vector.items.len() != 1 || vector.stray_commas != 0 || !self.at_chain_suffix() {
            return Ok(Expr::Vector(vector));
        }
        let Vector { ty, items, .. } = vector;
        let mut chain = Chain::new(Scope::None, ty.name, SegmentKind::Terminal);
        for index in items {
            chain.index(index);
        }
        self.extend_chain(&mut chain)?;
        Ok(Expr::Reference(chain.finish(self.span_since(start))))
    }

    /// A reference chain, optionally scoped.
    pub(super) fn reference(&mut self) -> PResult<Reference> {
        let start = self.pos;
        let scope = match self.peek().kind {
            TokenKind::Dot => Scope::Current,
            TokenKind::Tilde => Scope::Root,
            TokenKind::Dollar => Scope::Global,
            _ => Scope::None,
        };
        let first_kind = if scope == Scope::None {
            SegmentKind::Terminal
        } else {
            self.bump();
            if !(self.at(&TokenKind::Slash) && self.peek().joined) {
                return Err(self.unexpected("'/' directly after the scope marker"));
            }
            self.bump();
            if self.word_at(0).is_none() || !self.peek().joined {
                return Err(self.unexpected("a name directly after the scope"));
            }
            SegmentKind::Nested
        };
        let name = self.name("a reference name")?;
        let mut chain = Chain::new(scope, name, first_kind);
        self.extend_chain(&mut chain)?;
        Ok(chain.finish(self.span_since(start)))
    }

    /// Greedily appends directly adjacent `/name`, `.name` and `[expr]`.
    fn extend_chain(&mut self, chain: &mut Chain) -> PResult<()> {
        while self.at_chain_suffix() {
            match self.peek().kind {
                TokenKind::LBracket => {
                    self.bump();
                    let index = self.expr()?;
                    self.expect(&TokenKind::RBracket, "']'")?;
                    chain.index(index);
                }
                TokenKind::Slash => {
                    self.bump();
                    let name = self.name("a name")?;
                    chain.join(SegmentKind::Nested, name);
                }
                _ => {
                    self.bump();
                    let name = self.name("a name")?;
                    chain.join(SegmentKind::Member, name);
                }
            }
        }
        Ok(())
    }
}
