//! Declarations: top-level items, objects, members and templates.

use tracing::debug;

use super::{Abort, PResult, Parser};
use crate::ast::{
    Assignment, Declaration, Item, Member, Modifier, Name, Object, ObjectEntry, Template,
    TypeRef, Unnamed, Visibility,
};
use crate::diagnostic::DiagnosticKind;
use crate::keyword::{Keyword, WordClass};
use crate::span::Span;
use crate::token::{Token, TokenKind};

impl Parser<'_> {
    /// Parses one top-level item.
    pub(super) fn item(&mut self) -> PResult<Item> {
        if self.is_assignment_start(0) {
            return Ok(Item::Assignment(self.assignment()?));
        }
        // At item level `export A = 1` is a broken declaration, not two items.
        if self.is_visibility_start(0) || (self.is_modifier_at(0) && self.word_at(1).is_some()) {
            return Ok(Item::Visibility(self.visibility()?));
        }
        if self.is_template_start(0) {
            return Ok(Item::Template(self.template()?));
        }
        if self.is_unnamed_start(0) {
            return Ok(Item::Unnamed(self.unnamed()?));
        }
        if self.is_member_start(0) {
            return Ok(Item::Member(self.member()?));
        }
        Ok(Item::Expr(self.expr()?))
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> PResult<()> {
        if self.is_keyword_at(0, keyword) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{keyword}'")))
        }
    }

    /// `Name is value`
    pub(super) fn assignment(&mut self) -> PResult<Assignment> {
        let start = self.pos;
        let name = self.name("a name")?;
        self.expect_keyword(Keyword::Is)?;
        let value = self.expr()?;
        Ok(Assignment {
            name,
            value,
            span: self.span_since(start),
        })
    }

    /// `export|private|public` followed by an assignment or template.
    pub(super) fn visibility(&mut self) -> PResult<Visibility> {
        let start = self.pos;
        let modifier = match self.keyword_at(0) {
            Some(Keyword::Export) => Modifier::Export,
            Some(Keyword::Private) => Modifier::Private,
            Some(Keyword::Public) => Modifier::Public,
            _ => return Err(self.unexpected("'export', 'private' or 'public'")),
        };
        let keyword = self.name("a visibility modifier")?;
        let declaration = if self.is_template_start(0) {
            Declaration::Template(self.template()?)
        } else {
            Declaration::Assignment(self.assignment()?)
        };
        Ok(Visibility {
            modifier,
            keyword,
            declaration,
            span: self.span_since(start),
        })
    }

    /// `template Name [params] is Type( ... )`
    pub(super) fn template(&mut self) -> PResult<Template> {
        let start = self.pos;
        self.expect_keyword(Keyword::Template)?;
        let name = self.name("a template name")?;
        self.expect(&TokenKind::LBracket, "'['")?;
        let mut params = Vec::new();
        loop {
            match self.peek().kind {
                TokenKind::RBracket | TokenKind::Eof => break,
                TokenKind::Comma => {
                    self.bump();
                }
                TokenKind::Word(..) => params.push(self.param()?),
                _ => return Err(self.unexpected("a parameter name or ']'")),
            }
        }
        self.expect(&TokenKind::RBracket, "']'")?;
        self.expect_keyword(Keyword::Is)?;
        let body = self.object()?;
        Ok(Template {
            name,
            params,
            body,
            span: self.span_since(start),
        })
    }

    /// `unnamed Type( ... )`
    fn unnamed(&mut self) -> PResult<Unnamed> {
        let start = self.pos;
        self.expect_keyword(Keyword::Unnamed)?;
        let object = self.object()?;
        Ok(Unnamed {
            object,
            span: self.span_since(start),
        })
    }

    /// A member: `n: T`, `n = v`, `n: T = v` or the legacy `n: = v`.
    fn member(&mut self) -> PResult<Member> {
        let start = self.pos;
        let name = self.name("a member name")?;
        if !matches!(self.peek().kind, TokenKind::Colon | TokenKind::Eq) {
            return Err(self.unexpected("':' or '='"));
        }
        self.member_tail(start, name)
    }

    /// A template parameter: any member form, or a bare name.
    fn param(&mut self) -> PResult<Member> {
        let start = self.pos;
        let name = self.name("a parameter name")?;
        if matches!(self.peek().kind, TokenKind::Colon | TokenKind::Eq) {
            return self.member_tail(start, name);
        }
        Ok(Member {
            name,
            ty: None,
            value: None,
            legacy_colon: false,
            span: self.span_since(start),
        })
    }

    fn member_tail(&mut self, start: usize, name: Name) -> PResult<Member> {
        let mut ty = None;
        let mut value = None;
        let mut legacy_colon = false;
        if self.eat(&TokenKind::Colon) {
            if self.eat(&TokenKind::Eq) {
                legacy_colon = true;
                value = Some(self.expr()?);
            } else {
                ty = Some(self.type_ref()?);
                if self.eat(&TokenKind::Eq) {
                    value = Some(self.expr()?);
                }
            }
        } else {
            self.expect(&TokenKind::Eq, "':' or '='")?;
            value = Some(self.expr()?);
        }
        Ok(Member {
            name,
            ty,
            value,
            legacy_colon,
            span: self.span_since(start),
        })
    }

    /// A type annotation with optional generic parameters: `MAP<K, V>`.
    fn type_ref(&mut self) -> PResult<TypeRef> {
        let start = self.pos;
        let class = self.word_at(0).unwrap_or(WordClass::Name);
        let name = self.name("a type name")?;
        let mut params = Vec::new();
        if self.at(&TokenKind::Lt) && self.peek().joined {
            self.bump();
            loop {
                params.push(self.nested(Self::type_ref)?);
                self.eat(&TokenKind::Comma);
                match self.peek().kind {
                    TokenKind::Gt => {
                        self.bump();
                        break;
                    }
                    TokenKind::GtEq => {
                        self.split_gt_eq();
                        self.bump();
                        break;
                    }
                    TokenKind::Word(..) => {}
                    _ => return Err(self.unexpected("'>' or a type name")),
                }
            }
        }
        Ok(TypeRef {
            name,
            class,
            params,
            span: self.span_since(start),
        })
    }

    /// Splits the current `>=` into `>` followed by `=`, so that
    /// `n: MAP<K, V>= x` closes the type and still sees the assignment.
    fn split_gt_eq(&mut self) {
        let token = &mut self.tokens[self.pos];
        let span = token.span;
        token.kind = TokenKind::Gt;
        token.span = Span::new(span.start, span.start + 1, span.line, span.column);
        let eq = Token::new(
            TokenKind::Eq,
            Span::new(span.start + 1, span.end, span.line, span.column + 1),
            true,
        );
        self.tokens.insert(self.pos + 1, eq);
    }

    /// `Type( entries )`. Whitespace between the type and `(` is allowed.
    pub(super) fn object(&mut self) -> PResult<Object> {
        let start = self.pos;
        let type_name = self.name("an object type name")?;
        self.expect(&TokenKind::LParen, "'('")?;
        let mut entries = Vec::new();
        loop {
            match self.peek().kind {
                TokenKind::RParen => {
                    self.bump();
                    break;
                }
                TokenKind::Eof => return Err(self.unexpected("')'")),
                TokenKind::Comma => {
                    let span = self.peek().span;
                    self.report(
                        DiagnosticKind::UnexpectedToken,
                        span,
                        "unexpected ',' between object members",
                    );
                    self.bump();
                }
                _ => {
                    let entry_start = self.pos;
                    let entry = match self.object_entry() {
                        Ok(entry) => entry,
                        Err(Abort) => self.recover_entry(entry_start)?,
                    };
                    entries.push(entry);
                }
            }
        }
        Ok(Object {
            type_name,
            entries,
            span: self.span_since(start),
        })
    }

    fn object_entry(&mut self) -> PResult<ObjectEntry> {
        if self.is_assignment_start(0) {
            return Ok(ObjectEntry::Assignment(self.assignment()?));
        }
        if self.is_visibility_start(0) {
            return Ok(ObjectEntry::Visibility(self.visibility()?));
        }
        if self.is_member_start(0) {
            return Ok(ObjectEntry::Member(self.member()?));
        }
        if self.word_at(0).is_some() || self.is_scoped_reference_start(0) {
            return Ok(ObjectEntry::Reference(self.reference()?));
        }
        let found = self.peek().kind.name();
        self.report_here(
            DiagnosticKind::UnrecoverableFragment,
            format!("expected an object member, found {found}"),
        );
        Err(Abort)
    }

    /// Skips a broken object entry up to the closing `)` or the next member.
    /// Fails if the object never closes.
    fn recover_entry(&mut self, start: usize) -> PResult<ObjectEntry> {
        if self.pos == start && !self.at(&TokenKind::RParen) {
            self.bump();
        }
        let mut depth = 0usize;
        loop {
            match self.peek().kind {
                TokenKind::Eof => return Err(Abort),
                TokenKind::RParen if depth == 0 => break,
                TokenKind::LParen | TokenKind::LBracket => depth += 1,
                TokenKind::RParen | TokenKind::RBracket => depth = depth.saturating_sub(1),
                _ if depth == 0
                    && (self.is_member_start(0)
                        || self.is_assignment_start(0)
                        || self.is_visibility_start(0)) =>
                {
                    break;
                }
                _ => {}
            }
            self.bump();
        }
        let node = self.error_node(start);
        debug!(
            line = node.span.line,
            column = node.span.column,
            len = node.span.len(),
            "recovered from malformed object entry"
        );
        Ok(ObjectEntry::Error(node))
    }
}
