//! S-expression tree dumps.
//!
//! [`to_sexp`] renders a document in the style of tree-sitter's test corpus:
//! node names in parentheses, leaf text inline, no spans. Two parses with the
//! same structure produce the same dump regardless of whitespace and comments.

use std::fmt::Write;

use crate::ast::{
    Assignment, Declaration, Document, Expr, Item, Member, Object, ObjectEntry, Reference, Scope,
    Segment, SegmentKind, Template, TypeRef, Visibility,
};

/// Renders a document as a single-line S-expression.
#[must_use]
pub fn to_sexp(document: &Document) -> String {
    let mut out = String::from("(source_file");
    for item in &document.items {
        out.push(' ');
        item_sexp(&mut out, item);
    }
    out.push(')');
    out
}

/// Renders a single expression.
#[must_use]
pub fn expr_to_sexp(expr: &Expr) -> String {
    let mut out = String::new();
    expr_sexp(&mut out, expr);
    out
}

fn item_sexp(out: &mut String, item: &Item) {
    match item {
        Item::Assignment(a) => assignment_sexp(out, a),
        Item::Visibility(v) => visibility_sexp(out, v),
        Item::Template(t) => template_sexp(out, t),
        Item::Unnamed(u) => {
            out.push_str("(unnamed ");
            object_sexp(out, &u.object);
            out.push(')');
        }
        Item::Member(m) => member_sexp(out, m),
        Item::Expr(e) => expr_sexp(out, e),
        Item::Error(e) => error_sexp(out, &e.text),
    }
}

fn assignment_sexp(out: &mut String, a: &Assignment) {
    let _ = write!(out, "(assignment (name {}) ", a.name.text);
    expr_sexp(out, &a.value);
    out.push(')');
}

fn visibility_sexp(out: &mut String, v: &Visibility) {
    let _ = write!(out, "(visibility {} ", v.modifier.as_str());
    match &v.declaration {
        Declaration::Assignment(a) => assignment_sexp(out, a),
        Declaration::Template(t) => template_sexp(out, t),
    }
    out.push(')');
}

fn template_sexp(out: &mut String, t: &Template) {
    let _ = write!(out, "(template (name {}) (params", t.name.text);
    for param in &t.params {
        out.push(' ');
        member_sexp(out, param);
    }
    out.push_str(") ");
    object_sexp(out, &t.body);
    out.push(')');
}

fn member_sexp(out: &mut String, m: &Member) {
    let _ = write!(out, "(member (name {})", m.name.text);
    if let Some(ty) = &m.ty {
        out.push(' ');
        type_sexp(out, ty);
    }
    if m.legacy_colon {
        out.push_str(" legacy");
    }
    if let Some(value) = &m.value {
        out.push(' ');
        expr_sexp(out, value);
    }
    out.push(')');
}

fn type_sexp(out: &mut String, ty: &TypeRef) {
    let _ = write!(out, "(type {}", ty.name.text);
    for param in &ty.params {
        out.push(' ');
        type_sexp(out, param);
    }
    out.push(')');
}

fn object_sexp(out: &mut String, o: &Object) {
    let _ = write!(out, "(object (type_name {})", o.type_name.text);
    for entry in &o.entries {
        out.push(' ');
        match entry {
            ObjectEntry::Member(m) => member_sexp(out, m),
            ObjectEntry::Assignment(a) => assignment_sexp(out, a),
            ObjectEntry::Visibility(v) => visibility_sexp(out, v),
            ObjectEntry::Reference(r) => reference_sexp(out, r),
            ObjectEntry::Error(e) => error_sexp(out, &e.text),
        }
    }
    out.push(')');
}

fn reference_sexp(out: &mut String, r: &Reference) {
    out.push_str("(reference");
    match r.scope {
        Scope::None => {}
        Scope::Current => out.push_str(" current"),
        Scope::Root => out.push_str(" root"),
        Scope::Global => out.push_str(" global"),
    }
    for segment in &r.segments {
        match segment {
            Segment::Name { name, kind } => {
                let kind = match kind {
                    SegmentKind::Terminal => "terminal",
                    SegmentKind::Nested => "nested",
                    SegmentKind::Member => "member",
                };
                let _ = write!(out, " ({kind} {})", name.text);
            }
            Segment::Index(index) => {
                out.push_str(" (index ");
                expr_sexp(out, index);
                out.push(')');
            }
        }
    }
    out.push(')');
}

fn items_sexp(out: &mut String, items: &[Expr], stray_commas: usize) {
    for item in items {
        out.push(' ');
        expr_sexp(out, item);
    }
    if stray_commas > 0 {
        let _ = write!(out, " (stray_commas {stray_commas})");
    }
}

fn error_sexp(out: &mut String, text: &str) {
    let _ = write!(out, "(ERROR {text:?})");
}

fn expr_sexp(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Nil(_) => out.push_str("(nil)"),
        Expr::Bool(value, _) => {
            let _ = write!(out, "(bool {value})");
        }
        Expr::Number(n) => {
            let _ = write!(out, "({} {})", expr.type_name(), n.text);
        }
        Expr::String(s) => {
            let q = s.quote.char();
            let _ = write!(out, "(string {q}{}{q})", s.raw);
        }
        Expr::Object(o) => object_sexp(out, o),
        Expr::Vector(v) => {
            let _ = write!(out, "(vector_type (name {})", v.ty.name.text);
            items_sexp(out, &v.items, v.stray_commas);
            out.push(')');
        }
        Expr::List(l) => {
            out.push_str("(list");
            items_sexp(out, &l.items, l.stray_commas);
            out.push(')');
        }
        Expr::Map(m) => {
            out.push_str("(map");
            items_sexp(out, &m.pairs, 0);
            out.push(')');
        }
        Expr::Pair(p) => {
            out.push_str("(pair ");
            expr_sexp(out, &p.left);
            out.push(' ');
            expr_sexp(out, &p.right);
            out.push(')');
        }
        Expr::Unary(u) => {
            let _ = write!(out, "(unary_expression {} ", u.op.as_str());
            expr_sexp(out, &u.operand);
            out.push(')');
        }
        Expr::Binary(b) => {
            out.push_str("(binary_expression ");
            expr_sexp(out, &b.left);
            let _ = write!(out, " {} ", b.op.as_str());
            expr_sexp(out, &b.right);
            out.push(')');
        }
        Expr::Ternary(t) => {
            out.push_str("(ternary ");
            expr_sexp(out, &t.cond);
            out.push(' ');
            expr_sexp(out, &t.then);
            out.push(' ');
            expr_sexp(out, &t.otherwise);
            out.push(')');
        }
        Expr::Group(g) => {
            out.push_str("(group");
            if let Some(inner) = &g.inner {
                out.push(' ');
                expr_sexp(out, inner);
            }
            out.push(')');
        }
        Expr::Generic(g) => {
            let _ = write!(out, "(generic (name {})", g.name.text);
            if let Some(index) = &g.index {
                out.push(' ');
                expr_sexp(out, index);
            }
            out.push(')');
        }
        Expr::Guid(g) => {
            let _ = write!(out, "(guid {{{}}})", g.raw);
        }
        Expr::Reference(r) => reference_sexp(out, r),
        Expr::Assignment(a) => assignment_sexp(out, a),
        Expr::Visibility(v) => visibility_sexp(out, v),
        Expr::Error(e) => error_sexp(out, &e.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn sexp(source: &str) -> String {
        to_sexp(&parse(source).document)
    }

    #[test]
    fn empty_document() {
        assert_eq!(sexp(""), "(source_file)");
        assert_eq!(sexp("// only a comment\n"), "(source_file)");
    }

    #[test]
    fn assignment_with_object() {
        assert_eq!(
            sexp("A is TFoo(X = 1 Y : int)"),
            "(source_file (assignment (name A) (object (type_name TFoo) \
             (member (name X) (number_dec 1)) (member (name Y) (type int)))))"
        );
    }

    #[test]
    fn scoped_reference() {
        assert_eq!(
            sexp("~/A/B.C[1]"),
            "(source_file (reference root (nested A) (member B) (member C) \
             (index (number_dec 1))))"
        );
    }

    #[test]
    fn ternary_nests_right() {
        assert_eq!(
            sexp("A?B:C?D:E"),
            "(source_file (ternary (reference (terminal A)) (reference (terminal B)) \
             (ternary (reference (terminal C)) (reference (terminal D)) \
             (reference (terminal E)))))"
        );
    }

    #[test]
    fn list_records_stray_commas() {
        assert_eq!(
            sexp("[1,,2,]"),
            "(source_file (list (number_dec 1) (number_dec 2) (stray_commas 2)))"
        );
    }

    #[test]
    fn legacy_member_and_visibility() {
        assert_eq!(
            sexp("N : = 5"),
            "(source_file (member (name N) legacy (number_dec 5)))"
        );
        assert_eq!(
            sexp("Export A is 'x'"),
            "(source_file (visibility export (assignment (name A) (string 'x'))))"
        );
    }

    #[test]
    fn leaves_and_operators() {
        assert_eq!(
            sexp("-1 + 0x10 * .5"),
            "(source_file (binary_expression (unary_expression - (number_dec 1)) + \
             (binary_expression (number_hex 0x10) * (number_float .5))))"
        );
        assert_eq!(
            sexp("guid:{ab-12}"),
            "(source_file (guid {ab-12}))"
        );
        assert_eq!(
            sexp("<T>[nil]"),
            "(source_file (generic (name T) (nil)))"
        );
    }

    #[test]
    fn whitespace_and_comments_do_not_matter() {
        assert_eq!(
            sexp("A is TFoo(X=1)"),
            sexp("A  is /* c */ TFoo\n(\n  X = 1 // trailing\n)")
        );
    }

    #[test]
    fn errors_are_visible() {
        let dump = sexp("Foo( bar ");
        assert!(dump.starts_with("(source_file (ERROR"), "{dump}");
    }
}
