//! Integration tests for parsing complete documents
//!
//! Tests the tree shape of realistic declarations end to end.

use ndf_language::ast::{Declaration, Modifier, ReferenceKind, Scope};
use ndf_language::keyword::BuiltinVectorType;
use ndf_language::visitor::{DeclarationCollector, collect_references, walk_document};
use ndf_language::{Document, Expr, Item, parse};

use crate::UNIT;

fn clean(source: &str) -> Document {
    let parse = parse(source);
    assert!(
        parse.diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        parse.diagnostics
    );
    parse.document
}

// =============================================================================
// Declarations
// =============================================================================

#[test]
fn unit_descriptor_shape() {
    let document = clean(UNIT);
    assert_eq!(document.items.len(), 1);

    let Item::Visibility(v) = &document.items[0] else {
        panic!("expected exported declaration");
    };
    assert_eq!(v.modifier, Modifier::Export);
    let Declaration::Assignment(a) = &v.declaration else {
        panic!("expected assignment");
    };
    assert_eq!(a.name.text, "Descriptor_Unit_Rifles");

    let unit = a.value.as_object().unwrap();
    assert_eq!(unit.type_name.text, "TEntityDescriptor");
    assert_eq!(unit.members().count(), 3);

    let id = unit.member("DescriptorId").and_then(|m| m.value.as_ref());
    assert!(matches!(id, Some(Expr::Guid(g)) if g.raw == "4ab1f3c0-1c2d-4e5f-8a9b-0c1d2e3f4a5b"));

    let Some(Expr::List(modules)) = unit.member("ModulesDescriptors").and_then(|m| m.value.as_ref())
    else {
        panic!("expected module list");
    };
    assert_eq!(modules.items.len(), 4);
    assert_eq!(modules.stray_commas, 0);
    assert!(matches!(modules.items[1], Expr::Reference(_)));
}

#[test]
fn nested_object_members() {
    let document = clean(UNIT);
    let Item::Visibility(v) = &document.items[0] else {
        panic!("expected exported declaration");
    };
    let Declaration::Assignment(a) = &v.declaration else {
        panic!("expected assignment");
    };
    let unit = a.value.as_object().unwrap();
    let Some(Expr::List(modules)) = unit.member("ModulesDescriptors").and_then(|m| m.value.as_ref())
    else {
        panic!("expected module list");
    };

    let visual = modules.items[3].as_object().unwrap();
    let Some(Expr::Vector(color)) = visual.member("Color").and_then(|m| m.value.as_ref()) else {
        panic!("expected RGBA vector");
    };
    assert_eq!(color.ty.builtin, Some(BuiltinVectorType::Rgba));
    assert_eq!(color.items.len(), 4);

    let damage = modules.items[2].as_object().unwrap();
    let ratio = damage
        .member("SuppressDamagesRegenRatio")
        .and_then(|m| m.value.as_ref());
    let Some(Expr::List(ratio)) = ratio else {
        panic!("expected pair list");
    };
    assert!(ratio.items.iter().all(|e| matches!(e, Expr::Pair(_))));
}

#[test]
fn member_forms() {
    let document = clean("TFoo( A : int  B = 1  C : int = 1  D : = 1 )");
    let Item::Expr(Expr::Object(object)) = &document.items[0] else {
        panic!("expected object");
    };
    let forms: Vec<(bool, bool, bool)> = object
        .members()
        .map(|m| (m.ty.is_some(), m.value.is_some(), m.legacy_colon))
        .collect();
    assert_eq!(
        forms,
        [
            (true, false, false),
            (false, true, false),
            (true, true, false),
            (false, true, true),
        ]
    );
}

#[test]
fn declared_names_at_every_depth() {
    let document = clean(
        "export A is TFoo(private B is 1)\n\
         template TUnit [Speed : int = 3] is TBase(Speed = <Speed>)\n\
         C is [D is TBar(), 2]",
    );
    let mut collector = DeclarationCollector::default();
    walk_document(&mut collector, &document);
    assert_eq!(collector.names, ["A", "B", "TUnit", "C", "D"]);
}

// =============================================================================
// References
// =============================================================================

#[test]
fn references_in_source_order() {
    let document = clean(UNIT);
    let paths: Vec<String> = collect_references(&document)
        .iter()
        .map(|r| r.path())
        .collect();
    assert_eq!(paths, ["~/InfantryPositionModule", "$/GFX/Scales.Default"]);
}

#[test]
fn scoped_path_with_index() {
    let document = clean("A is ~/A/B.C[1]");
    let refs = collect_references(&document);
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].scope, Scope::Root);
    assert_eq!(refs[0].kind(), ReferenceKind::Scoped);
    assert_eq!(refs[0].path(), "~/A/B.C");
    assert_eq!(refs[0].segments.len(), 4);
}

#[test]
fn adjacency_decides_vector_or_list() {
    let joined = clean("Foo[0]");
    assert_eq!(joined.items.len(), 1);
    assert!(matches!(joined.items[0], Item::Expr(Expr::Vector(_))));

    let spaced = clean("Foo [0]");
    assert_eq!(spaced.items.len(), 2);
    assert!(matches!(spaced.items[0], Item::Expr(Expr::Reference(_))));
    assert!(matches!(spaced.items[1], Item::Expr(Expr::List(_))));
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn ternary_nests_to_the_right() {
    let document = clean("A is X ? 1 : Y ? 2 : 3");
    let Item::Assignment(a) = &document.items[0] else {
        panic!("expected assignment");
    };
    let Expr::Ternary(outer) = &a.value else {
        panic!("expected ternary");
    };
    assert!(matches!(outer.then, Expr::Number(_)));
    assert!(matches!(outer.otherwise, Expr::Ternary(_)));
}

#[test]
fn lenient_list_commas() {
    let document = clean("A is [1,,2,]");
    let Item::Assignment(a) = &document.items[0] else {
        panic!("expected assignment");
    };
    let Expr::List(list) = &a.value else {
        panic!("expected list");
    };
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.stray_commas, 2);
}

#[test]
fn literal_text_is_kept_verbatim() {
    let document = clean("A is [0x1F, .5, 'it\\'s', GUID:{0xFF}]");
    let Item::Assignment(a) = &document.items[0] else {
        panic!("expected assignment");
    };
    let Expr::List(list) = &a.value else {
        panic!("expected list");
    };
    assert_eq!(list.items[0].as_number(), Some("0x1F"));
    assert_eq!(list.items[1].as_number(), Some(".5"));
    assert!(matches!(&list.items[2], Expr::String(s) if s.raw == "it\\'s"));
    assert!(matches!(&list.items[3], Expr::Guid(g) if g.raw == "0xFF"));
}
