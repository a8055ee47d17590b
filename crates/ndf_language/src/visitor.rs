//! Read-only traversal of NDF syntax trees.
//!
//! Implement the `visit_*`, `enter_*` and `leave_*` methods of [`Visitor`]
//! you care about and drive it with [`walk_document`].
//!
//! # Example
//!
//! ```
//! use ndf_language::ast::Member;
//! use ndf_language::parse;
//! use ndf_language::visitor::{Visitor, walk_document};
//!
//! struct MemberCounter(usize);
//!
//! impl<'ast> Visitor<'ast> for MemberCounter {
//!     fn visit_member(&mut self, _member: &'ast Member) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let parse = parse("A is TFoo(X = 1 Y = TBar(Z = 2))");
//! let mut counter = MemberCounter(0);
//! walk_document(&mut counter, &parse.document);
//! assert_eq!(counter.0, 3);
//! ```

use crate::ast::{
    Assignment, Declaration, Document, ErrorNode, Expr, Item, Member, Object, ObjectEntry,
    Reference, Segment, Template, Visibility,
};

// =============================================================================
// Visitor
// =============================================================================

/// Trait for read-only tree visitors.
///
/// The `'ast` lifetime lets implementations keep references to the nodes
/// they see. All methods default to doing nothing.
#[allow(unused_variables)]
pub trait Visitor<'ast> {
    /// Called before a top-level item's children.
    fn enter_item(&mut self, item: &'ast Item) {}

    /// Called after a top-level item's children.
    fn leave_item(&mut self, item: &'ast Item) {}

    /// Called before an expression's children.
    fn enter_expr(&mut self, expr: &'ast Expr) {}

    /// Called after an expression's children.
    fn leave_expr(&mut self, expr: &'ast Expr) {}

    /// Visit a named declaration, before its value.
    fn visit_assignment(&mut self, assignment: &'ast Assignment) {}

    /// Visit a visibility wrapper, before its declaration.
    fn visit_visibility(&mut self, visibility: &'ast Visibility) {}

    /// Visit a template, before its parameters and body.
    fn visit_template(&mut self, template: &'ast Template) {}

    /// Called before an object's entries.
    fn enter_object(&mut self, object: &'ast Object) {}

    /// Called after an object's entries.
    fn leave_object(&mut self, object: &'ast Object) {}

    /// Visit a member or template parameter, before its value.
    fn visit_member(&mut self, member: &'ast Member) {}

    /// Visit a reference, before its index expressions.
    fn visit_reference(&mut self, reference: &'ast Reference) {}

    /// Visit an error node.
    fn visit_error(&mut self, error: &'ast ErrorNode) {}
}

/// Walks every item of a document depth-first.
pub fn walk_document<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, document: &'ast Document) {
    for item in &document.items {
        walk_item(visitor, item);
    }
}

/// Walks one top-level item.
pub fn walk_item<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, item: &'ast Item) {
    visitor.enter_item(item);
    match item {
        Item::Assignment(a) => walk_assignment(visitor, a),
        Item::Visibility(v) => walk_visibility(visitor, v),
        Item::Template(t) => walk_template(visitor, t),
        Item::Unnamed(u) => walk_object(visitor, &u.object),
        Item::Member(m) => walk_member(visitor, m),
        Item::Expr(e) => walk_expr(visitor, e),
        Item::Error(e) => visitor.visit_error(e),
    }
    visitor.leave_item(item);
}

fn walk_assignment<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, a: &'ast Assignment) {
    visitor.visit_assignment(a);
    walk_expr(visitor, &a.value);
}

fn walk_visibility<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, v: &'ast Visibility) {
    visitor.visit_visibility(v);
    match &v.declaration {
        Declaration::Assignment(a) => walk_assignment(visitor, a),
        Declaration::Template(t) => walk_template(visitor, t),
    }
}

fn walk_template<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, t: &'ast Template) {
    visitor.visit_template(t);
    for param in &t.params {
        walk_member(visitor, param);
    }
    walk_object(visitor, &t.body);
}

/// Walks an object's entries.
pub fn walk_object<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, object: &'ast Object) {
    visitor.enter_object(object);
    for entry in &object.entries {
        match entry {
            ObjectEntry::Member(m) => walk_member(visitor, m),
            ObjectEntry::Assignment(a) => walk_assignment(visitor, a),
            ObjectEntry::Visibility(v) => walk_visibility(visitor, v),
            ObjectEntry::Reference(r) => walk_reference(visitor, r),
            ObjectEntry::Error(e) => visitor.visit_error(e),
        }
    }
    visitor.leave_object(object);
}

/// Walks a member and its value.
pub fn walk_member<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, member: &'ast Member) {
    visitor.visit_member(member);
    if let Some(value) = &member.value {
        walk_expr(visitor, value);
    }
}

fn walk_reference<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, reference: &'ast Reference) {
    visitor.visit_reference(reference);
    for segment in &reference.segments {
        if let Segment::Index(index) = segment {
            walk_expr(visitor, index);
        }
    }
}

/// Walks an expression and everything nested in it.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    visitor.enter_expr(expr);
    match expr {
        Expr::Nil(_)
        | Expr::Bool(..)
        | Expr::Number(_)
        | Expr::String(_)
        | Expr::Guid(_) => {}
        Expr::Object(o) => walk_object(visitor, o),
        Expr::Vector(v) => walk_exprs(visitor, &v.items),
        Expr::List(l) => walk_exprs(visitor, &l.items),
        Expr::Map(m) => walk_exprs(visitor, &m.pairs),
        Expr::Pair(p) => {
            walk_expr(visitor, &p.left);
            walk_expr(visitor, &p.right);
        }
        Expr::Unary(u) => walk_expr(visitor, &u.operand),
        Expr::Binary(b) => {
            walk_expr(visitor, &b.left);
            walk_expr(visitor, &b.right);
        }
        Expr::Ternary(t) => {
            walk_expr(visitor, &t.cond);
            walk_expr(visitor, &t.then);
            walk_expr(visitor, &t.otherwise);
        }
        Expr::Group(g) => {
            if let Some(inner) = &g.inner {
                walk_expr(visitor, inner);
            }
        }
        Expr::Generic(g) => {
            if let Some(index) = &g.index {
                walk_expr(visitor, index);
            }
        }
        Expr::Reference(r) => walk_reference(visitor, r),
        Expr::Assignment(a) => walk_assignment(visitor, a),
        Expr::Visibility(v) => walk_visibility(visitor, v),
        Expr::Error(e) => visitor.visit_error(e),
    }
    visitor.leave_expr(expr);
}

fn walk_exprs<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, exprs: &'ast [Expr]) {
    for expr in exprs {
        walk_expr(visitor, expr);
    }
}

// =============================================================================
// Utility Visitors
// =============================================================================

/// Collects every reference in source order.
#[derive(Debug, Default)]
pub struct ReferenceCollector<'ast> {
    /// References seen so far.
    pub references: Vec<&'ast Reference>,
}

impl<'ast> Visitor<'ast> for ReferenceCollector<'ast> {
    fn visit_reference(&mut self, reference: &'ast Reference) {
        self.references.push(reference);
    }
}

/// Returns every reference in the document, including ones used as indexes
/// of other references.
#[must_use]
pub fn collect_references(document: &Document) -> Vec<&Reference> {
    let mut collector = ReferenceCollector::default();
    walk_document(&mut collector, document);
    collector.references
}

/// Collects the names bound by assignments and templates, at any depth.
#[derive(Debug, Default)]
pub struct DeclarationCollector<'ast> {
    /// Declared names, in source order.
    pub names: Vec<&'ast str>,
}

impl<'ast> Visitor<'ast> for DeclarationCollector<'ast> {
    fn visit_assignment(&mut self, assignment: &'ast Assignment) {
        self.names.push(assignment.name.as_str());
    }

    fn visit_template(&mut self, template: &'ast Template) {
        self.names.push(template.name.as_str());
    }
}

/// Counts error nodes.
#[derive(Debug, Default)]
pub struct ErrorCounter(pub usize);

impl<'ast> Visitor<'ast> for ErrorCounter {
    fn visit_error(&mut self, _error: &'ast ErrorNode) {
        self.0 += 1;
    }
}

/// Returns the number of error nodes in the document.
#[must_use]
pub fn count_error_nodes(document: &Document) -> usize {
    let mut counter = ErrorCounter::default();
    walk_document(&mut counter, document);
    counter.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ReferenceKind, Scope};
    use crate::parse;

    #[test]
    fn collects_references_everywhere() {
        let parse = parse(
            "A is TFoo(X = B Y = [C/D, ~/E] Z = MAP[(F, 1)])\n\
             template T [P = G.H] is TBase(Q = I[J].K)",
        );
        assert!(parse.diagnostics.is_empty(), "{:?}", parse.diagnostics);
        let paths: Vec<String> = collect_references(&parse.document)
            .iter()
            .map(|r| r.path())
            .collect();
        assert_eq!(paths, ["B", "C/D", "~/E", "F", "G.H", "I.K", "J"]);
    }

    #[test]
    fn reference_kinds_are_available() {
        let parse = parse("A is $/X.Y\nB is Z");
        let refs = collect_references(&parse.document);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].scope, Scope::Global);
        assert_eq!(refs[1].kind(), ReferenceKind::Terminal);
    }

    #[test]
    fn collects_nested_declarations() {
        let parse = parse(
            "export A is TFoo(private B is 1)\ntemplate T [] is TBase()\n[C is 2]",
        );
        let mut collector = DeclarationCollector::default();
        walk_document(&mut collector, &parse.document);
        assert_eq!(collector.names, ["A", "B", "T", "C"]);
    }

    #[test]
    fn counts_error_nodes() {
        assert_eq!(count_error_nodes(&parse("A is 1").document), 0);
        assert!(count_error_nodes(&parse("Foo( bar ").document) >= 1);
    }

    #[test]
    fn enter_and_leave_are_balanced() {
        #[derive(Default)]
        struct Depth {
            current: usize,
            max: usize,
        }
        impl<'ast> Visitor<'ast> for Depth {
            fn enter_expr(&mut self, _expr: &'ast Expr) {
                self.current += 1;
                self.max = self.max.max(self.current);
            }
            fn leave_expr(&mut self, _expr: &'ast Expr) {
                self.current -= 1;
            }
        }

        let parse = parse("A is [[[1]]]");
        let mut depth = Depth::default();
        walk_document(&mut depth, &parse.document);
        assert_eq!(depth.current, 0);
        assert_eq!(depth.max, 4);
    }
}
