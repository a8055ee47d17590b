//! Pretty-printer for NDF documents.
//!
//! Prints the canonical form of a tree: one item per block, object bodies
//! on their own lines with the opening parenthesis under the type name, and
//! lists inline unless they hold multi-line objects. Literal text is printed
//! exactly as parsed. Comments are not part of the tree and are not printed.
//!
//! # Example
//!
//! ```
//! use ndf_language::{parse, pretty::pretty_print};
//!
//! let parse = parse("Unit is TUnit(Speed=3)");
//! assert_eq!(
//!     pretty_print(&parse.document),
//!     "Unit is TUnit\n(\n    Speed = 3\n)\n"
//! );
//! ```

use crate::ast::{
    Assignment, Declaration, Document, Expr, Item, Member, Object, ObjectEntry, Reference,
    Segment, SegmentKind, Template, TypeRef, Visibility,
};

/// Configuration for pretty-printing.
#[derive(Debug, Clone)]
pub struct PrettyConfig {
    /// Number of spaces for each indentation level.
    pub indent_width: usize,
    /// Whether to separate top-level items with an empty line.
    pub blank_line_between_items: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            blank_line_between_items: true,
        }
    }
}

impl PrettyConfig {
    /// Sets the indentation width.
    #[must_use]
    pub const fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Sets whether items are separated by an empty line.
    #[must_use]
    pub const fn with_blank_line_between_items(mut self, blank: bool) -> Self {
        self.blank_line_between_items = blank;
        self
    }
}

/// Pretty-print a document to a string.
#[must_use]
pub fn pretty_print(document: &Document) -> String {
    pretty_print_with_config(document, PrettyConfig::default())
}

/// Pretty-print a document with custom configuration.
#[must_use]
pub fn pretty_print_with_config(document: &Document, config: PrettyConfig) -> String {
    let separator = if config.blank_line_between_items {
        "\n\n"
    } else {
        "\n"
    };
    let mut printer = PrettyPrinter::new(config);
    for (i, item) in document.items.iter().enumerate() {
        if i > 0 {
            printer.output.push_str(separator);
        }
        printer.print_item(item);
    }
    if !document.items.is_empty() {
        printer.output.push('\n');
    }
    printer.output
}

/// Pretty-print a single expression.
#[must_use]
pub fn pretty_print_expr(expr: &Expr) -> String {
    let mut printer = PrettyPrinter::new(PrettyConfig::default());
    printer.print_expr(expr);
    printer.output
}

/// Pretty-printer state.
struct PrettyPrinter {
    config: PrettyConfig,
    output: String,
    indent_level: usize,
}

impl PrettyPrinter {
    fn new(config: PrettyConfig) -> Self {
        Self {
            config,
            output: String::new(),
            indent_level: 0,
        }
    }

    fn print_item(&mut self, item: &Item) {
        match item {
            Item::Assignment(a) => self.print_assignment(a),
            Item::Visibility(v) => self.print_visibility(v),
            Item::Template(t) => self.print_template(t),
            Item::Unnamed(u) => {
                self.output.push_str("unnamed ");
                self.print_object(&u.object);
            }
            Item::Member(m) => self.print_member(m),
            Item::Expr(e) => self.print_expr(e),
            Item::Error(e) => self.output.push_str(&e.text),
        }
    }

    fn print_assignment(&mut self, a: &Assignment) {
        self.output.push_str(&a.name.text);
        self.output.push_str(" is ");
        self.print_expr(&a.value);
    }

    fn print_visibility(&mut self, v: &Visibility) {
        self.output.push_str(&v.keyword.text);
        self.output.push(' ');
        match &v.declaration {
            Declaration::Assignment(a) => self.print_assignment(a),
            Declaration::Template(t) => self.print_template(t),
        }
    }

    fn print_template(&mut self, t: &Template) {
        self.output.push_str("template ");
        self.output.push_str(&t.name.text);
        if t.params.is_empty() {
            self.output.push_str(" []");
        } else {
            self.newline();
            self.output.push('[');
            self.push_indent();
            for (i, param) in t.params.iter().enumerate() {
                self.newline();
                self.print_member(param);
                if i + 1 < t.params.len() {
                    self.output.push(',');
                }
            }
            self.pop_indent();
            self.newline();
            self.output.push(']');
        }
        self.newline();
        self.output.push_str("is ");
        self.print_object(&t.body);
    }

    fn print_member(&mut self, m: &Member) {
        self.output.push_str(&m.name.text);
        if m.legacy_colon {
            self.output.push_str(" : =");
        } else if let Some(ty) = &m.ty {
            self.output.push_str(" : ");
            self.print_type(ty);
            if m.value.is_some() {
                self.output.push_str(" =");
            }
        } else if m.value.is_some() {
            self.output.push_str(" =");
        }
        if let Some(value) = &m.value {
            self.output.push(' ');
            self.print_expr(value);
        }
    }

    fn print_type(&mut self, ty: &TypeRef) {
        self.output.push_str(&ty.name.text);
        if !ty.params.is_empty() {
            self.output.push('<');
            for (i, param) in ty.params.iter().enumerate() {
                if i > 0 {
                    self.output.push_str(", ");
                }
                self.print_type(param);
            }
            self.output.push('>');
        }
    }

    fn print_object(&mut self, o: &Object) {
        self.output.push_str(&o.type_name.text);
        if o.entries.is_empty() {
            self.output.push_str("()");
            return;
        }
        self.newline();
        self.output.push('(');
        self.push_indent();
        for entry in &o.entries {
            self.newline();
            match entry {
                ObjectEntry::Member(m) => self.print_member(m),
                ObjectEntry::Assignment(a) => self.print_assignment(a),
                ObjectEntry::Visibility(v) => self.print_visibility(v),
                ObjectEntry::Reference(r) => self.print_reference(r),
                ObjectEntry::Error(e) => self.output.push_str(&e.text),
            }
        }
        self.pop_indent();
        self.newline();
        self.output.push(')');
    }

    fn print_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Nil(_) => self.output.push_str("nil"),
            Expr::Bool(true, _) => self.output.push_str("true"),
            Expr::Bool(false, _) => self.output.push_str("false"),
            Expr::Number(n) => self.output.push_str(&n.text),
            Expr::String(s) => {
                let quote = s.quote.char();
                self.output.push(quote);
                self.output.push_str(&s.raw);
                self.output.push(quote);
            }
            Expr::Object(o) => self.print_object(o),
            Expr::Vector(v) => {
                self.output.push_str(&v.ty.name.text);
                self.print_items(&v.items);
            }
            Expr::List(l) => self.print_items(&l.items),
            Expr::Map(m) => {
                self.output.push_str(&m.keyword.text);
                self.print_items(&m.pairs);
            }
            Expr::Pair(p) => {
                self.output.push('(');
                self.print_expr(&p.left);
                self.output.push_str(", ");
                self.print_expr(&p.right);
                self.output.push(')');
            }
            Expr::Unary(u) => {
                self.output.push_str(u.op.as_str());
                self.print_expr(&u.operand);
            }
            Expr::Binary(b) => {
                self.print_expr(&b.left);
                self.output.push(' ');
                self.output.push_str(b.op.as_str());
                self.output.push(' ');
                self.print_expr(&b.right);
            }
            Expr::Ternary(t) => {
                self.print_expr(&t.cond);
                self.output.push_str(" ? ");
                self.print_expr(&t.then);
                self.output.push_str(" : ");
                self.print_expr(&t.otherwise);
            }
            Expr::Group(g) => {
                self.output.push('(');
                if let Some(inner) = &g.inner {
                    self.print_expr(inner);
                }
                self.output.push(')');
            }
            Expr::Generic(g) => {
                self.output.push('<');
                self.output.push_str(&g.name.text);
                self.output.push('>');
                if let Some(index) = &g.index {
                    self.output.push('[');
                    self.print_expr(index);
                    self.output.push(']');
                }
            }
            Expr::Guid(g) => {
                self.output.push_str("GUID:{");
                self.output.push_str(&g.raw);
                self.output.push('}');
            }
            Expr::Reference(r) => self.print_reference(r),
            Expr::Assignment(a) => self.print_assignment(a),
            Expr::Visibility(v) => self.print_visibility(v),
            Expr::Error(e) => self.output.push_str(&e.text),
        }
    }

    fn print_reference(&mut self, r: &Reference) {
        if let Some(marker) = r.scope.marker() {
            self.output.push(marker);
            self.output.push('/');
        }
        let mut prev: Option<SegmentKind> = None;
        for segment in &r.segments {
            match segment {
                Segment::Name { name, kind } => {
                    match prev {
                        Some(SegmentKind::Member) => self.output.push('.'),
                        Some(_) => self.output.push('/'),
                        None => {}
                    }
                    self.output.push_str(&name.text);
                    prev = Some(*kind);
                }
                Segment::Index(index) => {
                    self.output.push('[');
                    self.print_expr(index);
                    self.output.push(']');
                }
            }
        }
    }

    /// `[a, b]`, or one item per line when any item spans lines.
    fn print_items(&mut self, items: &[Expr]) {
        if !items.iter().any(is_block) {
            self.output.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    self.output.push_str(", ");
                }
                self.print_expr(item);
            }
            self.output.push(']');
            return;
        }
        self.output.push('[');
        self.push_indent();
        for (i, item) in items.iter().enumerate() {
            self.newline();
            self.print_expr(item);
            if i + 1 < items.len() {
                self.output.push(',');
            }
        }
        self.pop_indent();
        self.newline();
        self.output.push(']');
    }

    fn newline(&mut self) {
        self.output.push('\n');
        let width = self.indent_level * self.config.indent_width;
        self.output.extend(std::iter::repeat_n(' ', width));
    }

    fn push_indent(&mut self) {
        self.indent_level += 1;
    }

    fn pop_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }
}

/// True if printing `expr` produces more than one line.
fn is_block(expr: &Expr) -> bool {
    match expr {
        Expr::Object(o) => !o.entries.is_empty(),
        Expr::Vector(v) => v.items.iter().any(is_block),
        Expr::List(l) => l.items.iter().any(is_block),
        Expr::Map(m) => m.pairs.iter().any(is_block),
        Expr::Pair(p) => is_block(&p.left) || is_block(&p.right),
        Expr::Unary(u) => is_block(&u.operand),
        Expr::Binary(b) => is_block(&b.left) || is_block(&b.right),
        Expr::Ternary(t) => is_block(&t.cond) || is_block(&t.then) || is_block(&t.otherwise),
        Expr::Group(g) => g.inner.as_deref().is_some_and(is_block),
        Expr::Assignment(a) => is_block(&a.value),
        Expr::Visibility(_) => true,
        Expr::Error(e) => e.text.contains('\n'),
        Expr::Nil(_)
        | Expr::Bool(..)
        | Expr::Number(_)
        | Expr::String(_)
        | Expr::Generic(_)
        | Expr::Guid(_)
        | Expr::Reference(_) => false,
    }
}
