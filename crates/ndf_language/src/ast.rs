//! Abstract Syntax Tree for NDF.
//!
//! Every node owns its children and records the span it was parsed from.
//! Literal text (numbers, strings, guid payloads, names) is stored exactly as
//! written; nothing is evaluated or normalized.

use crate::keyword::{BuiltinVectorType, WordClass};
use crate::span::Span;
use crate::token::{NumberKind, QuoteKind};

/// A whole parsed source unit.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Top-level items in source order.
    pub items: Vec<Item>,
    /// Span of the whole input.
    pub span: Span,
}

/// A top-level item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    /// `Name is value`
    Assignment(Assignment),
    /// `export Name is value`
    Visibility(Visibility),
    /// `template Name [params] is Type(...)`
    Template(Template),
    /// `unnamed Type(...)`
    Unnamed(Unnamed),
    /// A stand-alone member such as `Speed: int = 3`.
    Member(Member),
    /// A bare expression.
    Expr(Expr),
    /// A fragment that could not be parsed.
    Error(ErrorNode),
}

impl Item {
    /// Returns the source span of this item.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Assignment(a) => a.span,
            Self::Visibility(v) => v.span,
            Self::Template(t) => t.span,
            Self::Unnamed(u) => u.span,
            Self::Member(m) => m.span,
            Self::Expr(e) => e.span(),
            Self::Error(e) => e.span,
        }
    }

    /// Returns true if this item is an error node.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// An identifier with its original spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Name {
    /// Text as written.
    pub text: String,
    /// Location.
    pub span: Span,
}

impl Name {
    /// Creates a name.
    #[must_use]
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    /// Returns the text of this name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// `Name is value`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Declared name.
    pub name: Name,
    /// Assigned value.
    pub value: Expr,
    /// Location.
    pub span: Span,
}

/// Visibility modifier keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modifier {
    /// `export`
    Export,
    /// `private`
    Private,
    /// `public`
    Public,
}

impl Modifier {
    /// Canonical lower-case spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Export => "export",
            Self::Private => "private",
            Self::Public => "public",
        }
    }
}

/// The declaration a visibility modifier wraps.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Declaration {
    /// A wrapped assignment.
    Assignment(Assignment),
    /// A wrapped template.
    Template(Template),
}

impl Declaration {
    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &Name {
        match self {
            Self::Assignment(a) => &a.name,
            Self::Template(t) => &t.name,
        }
    }
}

/// `export|private|public` followed by an assignment or template.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visibility {
    /// The modifier.
    pub modifier: Modifier,
    /// The modifier keyword as written.
    pub keyword: Name,
    /// The wrapped declaration.
    pub declaration: Declaration,
    /// Location.
    pub span: Span,
}

/// `Type( entries )`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Object {
    /// Type name before the parenthesis.
    pub type_name: Name,
    /// Body entries in source order.
    pub entries: Vec<ObjectEntry>,
    /// Location.
    pub span: Span,
}

impl Object {
    /// Iterates over the plain members of this object.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.entries.iter().filter_map(|entry| match entry {
            ObjectEntry::Member(m) => Some(m),
            _ => None,
        })
    }

    /// Looks up a plain member by exact name.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members().find(|m| m.name.text == name)
    }
}

/// One entry in an object body.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectEntry {
    /// `Name = value`, `Name: Type`, ...
    Member(Member),
    /// Nested `Name is value`.
    Assignment(Assignment),
    /// Nested `export Name is value`.
    Visibility(Visibility),
    /// A bare reference such as `Foo/Bar`.
    Reference(Reference),
    /// An entry that could not be parsed.
    Error(ErrorNode),
}

impl ObjectEntry {
    /// Returns the source span of this entry.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Member(m) => m.span,
            Self::Assignment(a) => a.span,
            Self::Visibility(v) => v.span,
            Self::Reference(r) => r.span,
            Self::Error(e) => e.span,
        }
    }
}

/// An object member or template parameter.
///
/// In object bodies at least one of `ty` and `value` is present. Template
/// parameters also allow the bare-name shorthand, which leaves both empty.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Member {
    /// Member name.
    pub name: Name,
    /// Type after `:`.
    pub ty: Option<TypeRef>,
    /// Value after `=`.
    pub value: Option<Expr>,
    /// True for the historical `name: = value` form.
    pub legacy_colon: bool,
    /// Location.
    pub span: Span,
}

/// A type annotation such as `int`, `TFoo` or `MAP<string, int>`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeRef {
    /// Type name as written.
    pub name: Name,
    /// Classification of the name.
    pub class: WordClass,
    /// Generic parameters inside `<...>`.
    pub params: Vec<TypeRef>,
    /// Location.
    pub span: Span,
}

/// `template Name [params] is Type( ... )`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Template {
    /// Template name.
    pub name: Name,
    /// Parameters in source order.
    pub params: Vec<Member>,
    /// Object body.
    pub body: Object,
    /// Location.
    pub span: Span,
}

/// `unnamed Type( ... )`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unnamed {
    /// The anonymous object.
    pub object: Object,
    /// Location.
    pub span: Span,
}

/// Scope marker that may lead a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scope {
    /// No marker.
    #[default]
    None,
    /// `./`
    Current,
    /// `~/`
    Root,
    /// `$/`
    Global,
}

impl Scope {
    /// The marker character, if any.
    #[must_use]
    pub const fn marker(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Current => Some('.'),
            Self::Root => Some('~'),
            Self::Global => Some('$'),
        }
    }
}

/// How a named path segment is linked into its reference.
///
/// A name takes the kind of the path joiner (`/` or `.`) that follows it.
/// The last name has none following, so it takes the kind of the joiner
/// before it; a lone name is `Terminal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentKind {
    /// Not joined to any other name.
    Terminal,
    /// Joined with `/`.
    Nested,
    /// Joined with `.`.
    Member,
}

/// One step of a reference path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// A named step.
    Name {
        /// The name.
        name: Name,
        /// How it is joined.
        kind: SegmentKind,
    },
    /// An `[expr]` index applied to everything before it.
    Index(Expr),
}

/// Overall shape of a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// `Foo`
    Terminal,
    /// `Foo/Bar`
    Nested,
    /// `Foo.Bar`
    Member,
    /// `Foo[1]`
    Indexed,
    /// `~/Foo`, `./Foo`, `$/Foo`
    Scoped,
}

/// A path to another declaration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    /// Leading scope marker.
    pub scope: Scope,
    /// Path segments in order. The first segment is always a name.
    pub segments: Vec<Segment>,
    /// Location.
    pub span: Span,
}

impl Reference {
    /// Classifies the reference by its scope marker and its last link.
    #[must_use]
    pub fn kind(&self) -> ReferenceKind {
        if self.scope != Scope::None {
            return ReferenceKind::Scoped;
        }
        match self.segments.last() {
            Some(Segment::Index(_)) => ReferenceKind::Indexed,
            Some(Segment::Name {
                kind: SegmentKind::Nested,
                ..
            }) => ReferenceKind::Nested,
            Some(Segment::Name {
                kind: SegmentKind::Member,
                ..
            }) => ReferenceKind::Member,
            _ => ReferenceKind::Terminal,
        }
    }

    /// Iterates over the named segments.
    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Name { name, .. } => Some(name),
            Segment::Index(_) => None,
        })
    }

    /// The path without indexes, e.g. `~/A/B.C` for `~/A/B.C[1]`.
    #[must_use]
    pub fn path(&self) -> String {
        let mut out = String::new();
        if let Some(marker) = self.scope.marker() {
            out.push(marker);
            out.push('/');
        }
        let mut prev: Option<SegmentKind> = None;
        for seg in &self.segments {
            if let Segment::Name { name, kind } = seg {
                match prev {
                    Some(SegmentKind::Member) => out.push('.'),
                    Some(_) => out.push('/'),
                    None => {}
                }
                out.push_str(&name.text);
                prev = Some(*kind);
            }
        }
        out
    }
}

/// Unary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `!`
    Not,
}

impl UnaryOp {
    /// Operator text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
        }
    }
}

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    /// `*`
    Mul,
    /// `div`
    Div,
    /// `%`
    Rem,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `&`
    And,
    /// `|`
    Or,
}

impl BinaryOp {
    /// Operator text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "div",
            Self::Rem => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "&",
            Self::Or => "|",
        }
    }
}

/// Numeric literal, kept as written.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Number {
    /// Literal flavour.
    pub kind: NumberKind,
    /// Source text.
    pub text: String,
    /// Location.
    pub span: Span,
}

/// String literal with its raw body.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringLit {
    /// Quote character used.
    pub quote: QuoteKind,
    /// Body between the quotes, escapes untouched.
    pub raw: String,
    /// Location.
    pub span: Span,
}

/// The type token of a vector literal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorType {
    /// Type name as written.
    pub name: Name,
    /// Set when the name is a built-in vector type.
    pub builtin: Option<BuiltinVectorType>,
}

/// `Type[items]`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// Element type.
    pub ty: VectorType,
    /// Items in order.
    pub items: Vec<Expr>,
    /// Commas beyond those separating items.
    pub stray_commas: usize,
    /// Location.
    pub span: Span,
}

/// `[items]`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct List {
    /// Items in order.
    pub items: Vec<Expr>,
    /// Commas beyond those separating items: leading, doubled and trailing
    /// ones. `[1,,2,]` has two, `[,,]` has two.
    pub stray_commas: usize,
    /// Location.
    pub span: Span,
}

/// `MAP[(k, v), ...]`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Map {
    /// `MAP` keyword as written.
    pub keyword: Name,
    /// Entries; each is an [`Expr::Pair`] or, after a recovered error,
    /// an [`Expr::Error`].
    pub pairs: Vec<Expr>,
    /// Location.
    pub span: Span,
}

/// `(left, right)`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair {
    /// First element.
    pub left: Expr,
    /// Second element.
    pub right: Expr,
    /// Location.
    pub span: Span,
}

/// `-x`, `!x`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unary {
    /// Operator.
    pub op: UnaryOp,
    /// Operand.
    pub operand: Expr,
    /// Location.
    pub span: Span,
}

/// `left op right`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Binary {
    /// Operator.
    pub op: BinaryOp,
    /// Left operand.
    pub left: Expr,
    /// Right operand.
    pub right: Expr,
    /// Location.
    pub span: Span,
}

/// `cond ? then : otherwise`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ternary {
    /// Condition.
    pub cond: Expr,
    /// Value when true.
    pub then: Expr,
    /// Value when false.
    pub otherwise: Expr,
    /// Location.
    pub span: Span,
}

/// `(expr)` or `()`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    /// Parenthesized expression, absent for `()`.
    pub inner: Option<Box<Expr>>,
    /// Location.
    pub span: Span,
}

/// `<T>` or `<T>[index]`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Generic {
    /// Placeholder name.
    pub name: Name,
    /// Optional index.
    pub index: Option<Box<Expr>>,
    /// Location.
    pub span: Span,
}

/// `guid:{...}`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Guid {
    /// Payload between the braces, verbatim.
    pub raw: String,
    /// Location.
    pub span: Span,
}

/// A fragment the parser could not make sense of.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorNode {
    /// Covered source.
    pub span: Span,
    /// Source text of the fragment.
    pub text: String,
}

/// A value expression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// `nil`
    Nil(Span),
    /// `true` or `false`
    Bool(bool, Span),
    /// Numeric literal.
    Number(Number),
    /// String literal.
    String(StringLit),
    /// Object construction.
    Object(Box<Object>),
    /// Typed vector.
    Vector(Vector),
    /// Untyped list.
    List(List),
    /// `MAP[...]`
    Map(Map),
    /// `(a, b)`
    Pair(Box<Pair>),
    /// Prefix operator.
    Unary(Box<Unary>),
    /// Infix operator.
    Binary(Box<Binary>),
    /// Conditional.
    Ternary(Box<Ternary>),
    /// Parenthesized expression.
    Group(Group),
    /// Template type placeholder.
    Generic(Generic),
    /// Guid literal.
    Guid(Guid),
    /// Path to another declaration.
    Reference(Reference),
    /// Named value inside an expression.
    Assignment(Box<Assignment>),
    /// Visibility-wrapped declaration inside an expression.
    Visibility(Box<Visibility>),
    /// Unparseable fragment.
    Error(ErrorNode),
}

impl Expr {
    /// Returns the source span of this expression.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Nil(s) | Self::Bool(_, s) => *s,
            Self::Number(n) => n.span,
            Self::String(s) => s.span,
            Self::Object(o) => o.span,
            Self::Vector(v) => v.span,
            Self::List(l) => l.span,
            Self::Map(m) => m.span,
            Self::Pair(p) => p.span,
            Self::Unary(u) => u.span,
            Self::Binary(b) => b.span,
            Self::Ternary(t) => t.span,
            Self::Group(g) => g.span,
            Self::Generic(g) => g.span,
            Self::Guid(g) => g.span,
            Self::Reference(r) => r.span,
            Self::Assignment(a) => a.span,
            Self::Visibility(v) => v.span,
            Self::Error(e) => e.span,
        }
    }

    /// A short name for the node kind, as used in tree dumps.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil(_) => "nil",
            Self::Bool(..) => "bool",
            Self::Number(Number {
                kind: NumberKind::Decimal,
                ..
            }) => "number_dec",
            Self::Number(Number {
                kind: NumberKind::Hex,
                ..
            }) => "number_hex",
            Self::Number(Number {
                kind: NumberKind::Float,
                ..
            }) => "number_float",
            Self::String(_) => "string",
            Self::Object(_) => "object",
            Self::Vector(_) => "vector_type",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Pair(_) => "pair",
            Self::Unary(_) => "unary_expression",
            Self::Binary(_) => "binary_expression",
            Self::Ternary(_) => "ternary",
            Self::Group(_) => "group",
            Self::Generic(_) => "generic",
            Self::Guid(_) => "guid",
            Self::Reference(_) => "reference",
            Self::Assignment(_) => "assignment",
            Self::Visibility(_) => "visibility",
            Self::Error(_) => "ERROR",
        }
    }

    /// Returns true if this is an error node.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the reference, or None if this is not a reference.
    #[must_use]
    pub const fn as_reference(&self) -> Option<&Reference> {
        match self {
            Self::Reference(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the object, or None if this is not an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the literal text of a number, or None.
    #[must_use]
    pub fn as_number(&self) -> Option<&str> {
        match self {
            Self::Number(n) => Some(&n.text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(text: &str) -> Name {
        Name::new(text, Span::default())
    }

    fn seg(text: &str, kind: SegmentKind) -> Segment {
        Segment::Name {
            name: name(text),
            kind,
        }
    }

    fn number(text: &str) -> Expr {
        Expr::Number(Number {
            kind: NumberKind::Decimal,
            text: text.into(),
            span: Span::default(),
        })
    }

    #[test]
    fn reference_kinds() {
        let terminal = Reference {
            scope: Scope::None,
            segments: vec![seg("A", SegmentKind::Terminal)],
            span: Span::default(),
        };
        assert_eq!(terminal.kind(), ReferenceKind::Terminal);

        let member = Reference {
            scope: Scope::None,
            segments: vec![seg("A", SegmentKind::Member), seg("B", SegmentKind::Member)],
            span: Span::default(),
        };
        assert_eq!(member.kind(), ReferenceKind::Member);

        let indexed = Reference {
            scope: Scope::None,
            segments: vec![seg("A", SegmentKind::Terminal), Segment::Index(number("1"))],
            span: Span::default(),
        };
        assert_eq!(indexed.kind(), ReferenceKind::Indexed);

        let scoped = Reference {
            scope: Scope::Root,
            ..terminal
        };
        assert_eq!(scoped.kind(), ReferenceKind::Scoped);
    }

    #[test]
    fn reference_path() {
        let r = Reference {
            scope: Scope::Root,
            segments: vec![
                seg("A", SegmentKind::Nested),
                seg("B", SegmentKind::Member),
                seg("C", SegmentKind::Member),
                Segment::Index(number("1")),
            ],
            span: Span::default(),
        };
        assert_eq!(r.path(), "~/A/B.C");
        assert_eq!(r.names().count(), 3);
    }

    #[test]
    fn object_member_lookup() {
        let object = Object {
            type_name: name("TUnit"),
            entries: vec![ObjectEntry::Member(Member {
                name: name("Speed"),
                ty: None,
                value: Some(number("3")),
                legacy_colon: false,
                span: Span::default(),
            })],
            span: Span::default(),
        };
        assert!(object.member("Speed").is_some());
        assert!(object.member("speed").is_none());
    }

    #[test]
    fn expr_type_names() {
        assert_eq!(Expr::Nil(Span::default()).type_name(), "nil");
        assert_eq!(number("1").type_name(), "number_dec");
        assert_eq!(
            Expr::Error(ErrorNode {
                span: Span::default(),
                text: String::new()
            })
            .type_name(),
            "ERROR"
        );
    }

    #[test]
    fn expr_span() {
        let span = Span::new(5, 10, 2, 3);
        assert_eq!(Expr::Bool(true, span).span(), span);
    }
}
