//! Value expressions: operators, literals, lists, maps, groups and generics.

use super::{Abort, PResult, Parser};
use crate::ast::{
    Binary, BinaryOp, ErrorNode, Expr, Generic, Group, Guid, List, Map, Number, Pair, StringLit,
    Ternary, Unary, UnaryOp,
};
use crate::diagnostic::DiagnosticKind;
use crate::keyword::{Keyword, WordClass};
use crate::token::{LexError, TokenKind};

/// Binding power of infix operators. Higher binds tighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    /// `?:`, right-associative
    Ternary = 1,
    /// `|`
    Or = 2,
    /// `&`
    And = 3,
    /// `== != < <= > >=`
    Comparative = 4,
    /// `+ -`
    Additive = 9,
    /// `* div %`
    Multiplicative = 10,
}

impl Precedence {
    /// The next tighter level, used for the right operand of a
    /// left-associative operator.
    const fn tighter(self) -> Option<Self> {
        match self {
            Self::Ternary => Some(Self::Or),
            Self::Or => Some(Self::And),
            Self::And => Some(Self::Comparative),
            Self::Comparative => Some(Self::Additive),
            Self::Additive => Some(Self::Multiplicative),
            Self::Multiplicative => None,
        }
    }
}

const fn precedence_of(op: BinaryOp) -> Precedence {
    match op {
        BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => Precedence::Multiplicative,
        BinaryOp::Add | BinaryOp::Sub => Precedence::Additive,
        BinaryOp::Eq
        | BinaryOp::NotEq
        | BinaryOp::Lt
        | BinaryOp::LtEq
        | BinaryOp::Gt
        | BinaryOp::GtEq => Precedence::Comparative,
        BinaryOp::And => Precedence::And,
        BinaryOp::Or => Precedence::Or,
    }
}

enum Infix {
    Binary(BinaryOp),
    Ternary,
}

impl Parser<'_> {
    /// Parses a full expression.
    pub(super) fn expr(&mut self) -> PResult<Expr> {
        self.nested_expr(|p| p.expr_bp(Precedence::Ternary))
    }

    /// Precedence climbing over operators binding at least as tight as `min`.
    fn expr_bp(&mut self, min: Precedence) -> PResult<Expr> {
        let start = self.pos;
        let mut lhs = self.unary()?;
        while let Some(infix) = self.infix() {
            match infix {
                Infix::Ternary => {
                    if min > Precedence::Ternary {
                        break;
                    }
                    self.bump();
                    let then = self.expr()?;
                    self.expect(&TokenKind::Colon, "':' in conditional expression")?;
                    let otherwise = self.expr()?;
                    lhs = Expr::Ternary(Box::new(Ternary {
                        cond: lhs,
                        then,
                        otherwise,
                        span: self.span_since(start),
                    }));
                }
                Infix::Binary(op) => {
                    let prec = precedence_of(op);
                    if prec < min {
                        break;
                    }
                    self.bump();
                    let right = match prec.tighter() {
                        Some(next) => self.expr_bp(next)?,
                        None => self.unary()?,
                    };
                    lhs = Expr::Binary(Box::new(Binary {
                        op,
                        left: lhs,
                        right,
                        span: self.span_since(start),
                    }));
                }
            }
        }
        Ok(lhs)
    }

    /// Returns the infix operator at the current token, if any.
    fn infix(&self) -> Option<Infix> {
        let op = match &self.peek().kind {
            TokenKind::Question => return Some(Infix::Ternary),
            TokenKind::Pipe => BinaryOp::Or,
            TokenKind::Amp => BinaryOp::And,
            TokenKind::EqEq => BinaryOp::Eq,
            TokenKind::NotEq => BinaryOp::NotEq,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::LtEq => BinaryOp::LtEq,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::GtEq => BinaryOp::GtEq,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Percent => BinaryOp::Rem,
            // `Div is 2` on the next line declares something named Div.
            TokenKind::Word(_, WordClass::Keyword(Keyword::Div))
                if !self.is_assignment_start(0) && !self.is_member_start(0) =>
            {
                BinaryOp::Div
            }
            _ => return None,
        };
        Some(Infix::Binary(op))
    }

    /// Prefix `-` and `!`. They bind tighter than every infix operator.
    fn unary(&mut self) -> PResult<Expr> {
        let op = match self.peek().kind {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Bang => UnaryOp::Not,
            _ => return self.primary(),
        };
        let start = self.pos;
        self.bump();
        let operand = self.nested_expr(Self::unary)?;
        Ok(Expr::Unary(Box::new(Unary {
            op,
            operand,
            span: self.span_since(start),
        })))
    }

    fn primary(&mut self) -> PResult<Expr> {
        let start = self.pos;
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Number(kind, text) => {
                self.bump();
                Ok(Expr::Number(Number {
                    kind,
                    text,
                    span: token.span,
                }))
            }
            TokenKind::String(quote, raw) => {
                self.bump();
                Ok(Expr::String(StringLit {
                    quote,
                    raw,
                    span: token.span,
                }))
            }
            TokenKind::LBracket => self.list(),
            TokenKind::LParen => self.paren(),
            TokenKind::Lt => self.generic(),
            TokenKind::Word(..) => self.word_led(),
            TokenKind::Dot | TokenKind::Tilde | TokenKind::Dollar
                if self.is_scoped_reference_start(0) =>
            {
                Ok(Expr::Reference(self.reference()?))
            }
            TokenKind::Error(err) => {
                self.bump();
                if let LexError::UnexpectedChar(c) = err {
                    self.report(
                        DiagnosticKind::UnexpectedToken,
                        token.span,
                        format!("unexpected character {c:?}"),
                    );
                }
                Ok(Expr::Error(self.error_node(start)))
            }
            TokenKind::Eof => Err(self.unexpected("an expression")),
            other => {
                self.report_here(
                    DiagnosticKind::UnrecoverableFragment,
                    format!("expected an expression, found {}", other.name()),
                );
                Err(Abort)
            }
        }
    }

    /// `[items]`
    fn list(&mut self) -> PResult<Expr> {
        let start = self.pos;
        self.expect(&TokenKind::LBracket, "'['")?;
        let (items, stray_commas) = self.items()?;
        self.expect(&TokenKind::RBracket, "']'")?;
        Ok(Expr::List(List {
            items,
            stray_commas,
            span: self.span_since(start),
        }))
    }

    /// Comma-separated items up to (not including) `]`.
    ///
    /// Leading, doubled and trailing commas are accepted and counted. A
    /// missing comma between two items is reported but does not stop the
    /// list.
    pub(super) fn items(&mut self) -> PResult<(Vec<Expr>, usize)> {
        let mut items = Vec::new();
        let mut commas = 0usize;
        let mut needs_separator = false;
        loop {
            match self.peek().kind {
                TokenKind::RBracket | TokenKind::Eof => break,
                TokenKind::Comma => {
                    self.bump();
                    commas += 1;
                    needs_separator = false;
                }
                _ => {
                    if needs_separator {
                        let token = self.peek();
                        let (span, found) = (token.span, token.kind.name());
                        self.report(
                            DiagnosticKind::UnexpectedToken,
                            span,
                            format!("expected ',' or ']', found {found}"),
                        );
                    }
                    let start = self.pos;
                    let item = match self.expr() {
                        Ok(item) => item,
                        Err(Abort) => self.recover_list_item(start)?,
                    };
                    items.push(item);
                    needs_separator = true;
                }
            }
        }
        let separators = items.len().saturating_sub(1);
        Ok((items, commas.saturating_sub(separators)))
    }

    /// Skips a broken list item up to the next `,` or `]`.
    fn recover_list_item(&mut self, start: usize) -> PResult<Expr> {
        if self.pos == start && !self.at(&TokenKind::RParen) {
            self.bump();
        }
        let mut depth = 0usize;
        loop {
            match self.peek().kind {
                TokenKind::Eof => return Err(Abort),
                TokenKind::Comma | TokenKind::RBracket if depth == 0 => break,
                TokenKind::RParen if depth == 0 => return Err(Abort),
                TokenKind::LParen | TokenKind::LBracket => depth += 1,
                TokenKind::RParen | TokenKind::RBracket => depth -= 1,
                _ => {}
            }
            self.bump();
        }
        Ok(Expr::Error(self.error_node(start)))
    }

    /// `()`, `(expr)` or `(left, right)`.
    fn paren(&mut self) -> PResult<Expr> {
        let start = self.pos;
        self.expect(&TokenKind::LParen, "'('")?;
        if self.eat(&TokenKind::RParen) {
            return Ok(Expr::Group(Group {
                inner: None,
                span: self.span_since(start),
            }));
        }
        let first = self.expr()?;
        if self.eat(&TokenKind::Comma) {
            let right = self.expr()?;
            self.expect(&TokenKind::RParen, "')'")?;
            return Ok(Expr::Pair(Box::new(Pair {
                left: first,
                right,
                span: self.span_since(start),
            })));
        }
        self.expect(&TokenKind::RParen, "',' or ')'")?;
        Ok(Expr::Group(Group {
            inner: Some(Box::new(first)),
            span: self.span_since(start),
        }))
    }

    /// `MAP[(k, v), ...]`. Whitespace before `[` is allowed.
    pub(super) fn map(&mut self) -> PResult<Expr> {
        let start = self.pos;
        let keyword = self.name("'MAP'")?;
        self.expect(&TokenKind::LBracket, "'['")?;
        let (items, _) = self.items()?;
        self.expect(&TokenKind::RBracket, "']'")?;
        let mut pairs = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Expr::Pair(_) | Expr::Error(_) => pairs.push(item),
                other => {
                    let span = other.span();
                    self.report(
                        DiagnosticKind::UnexpectedToken,
                        span,
                        format!("expected a (key, value) pair, found {}", other.type_name()),
                    );
                    pairs.push(Expr::Error(ErrorNode {
                        span,
                        text: span.text(self.source).to_string(),
                    }));
                }
            }
        }
        Ok(Expr::Map(Map {
            keyword,
            pairs,
            span: self.span_since(start),
        }))
    }

    /// `<Name>` with an optional `[index]`. Every part must be adjacent.
    fn generic(&mut self) -> PResult<Expr> {
        let start = self.pos;
        self.expect(&TokenKind::Lt, "'<'")?;
        if self.word_at(0).is_none() || !self.peek().joined {
            return Err(self.unexpected("a name directly after '<'"));
        }
        let name = self.name("a generic name")?;
        if !(self.at(&TokenKind::Gt) && self.peek().joined) {
            return Err(self.unexpected("'>' directly after the generic name"));
        }
        self.bump();
        let index = if self.at(&TokenKind::LBracket) && self.peek().joined {
            self.bump();
            let index = self.expr()?;
            self.expect(&TokenKind::RBracket, "']'")?;
            Some(Box::new(index))
        } else {
            None
        };
        Ok(Expr::Generic(Generic {
            name,
            index,
            span: self.span_since(start),
        }))
    }

    /// `guid:{payload}`. The caller has checked for `guid :`.
    pub(super) fn guid(&mut self) -> PResult<Expr> {
        let start = self.pos;
        self.bump();
        self.expect(&TokenKind::Colon, "':'")?;
        let token = self.peek().clone();
        match token.kind {
            TokenKind::GuidBody(raw) => {
                self.bump();
                Ok(Expr::Guid(Guid {
                    raw,
                    span: self.span_since(start),
                }))
            }
            // Unterminated payload, already reported by the lexer.
            TokenKind::Error(LexError::UnterminatedBrace) => {
                self.bump();
                Ok(Expr::Error(self.error_node(start)))
            }
            _ => Err(self.unexpected("'{' after 'guid:'")),
        }
    }
}
