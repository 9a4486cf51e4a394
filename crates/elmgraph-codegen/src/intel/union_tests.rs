use elmgraph_core::query::{QueryOutputItem, TypeCategory};

use crate::test_utils::{non_null, output_item, output_root, plain_options, query};

use super::error::IntelError;
use super::ir::{DecodeItem, Intel, ItemKind};
use super::query_to_intel;

fn fragmented(
    id: usize,
    name: &str,
    order: u32,
    children: &[usize],
    on_interface: bool,
    has_all: bool,
) -> QueryOutputItem {
    let category = if on_interface {
        TypeCategory::Interface
    } else {
        TypeCategory::Object
    };
    let mut item = output_item(id, name, Some(non_null("Character", category)), order, 1, children);
    item.is_fragmented = true;
    item.is_fragmented_on = on_interface;
    item.has_all_possible_fragment_types = has_all;
    item
}

fn human_fragment(id: usize, order: u32, field: usize) -> QueryOutputItem {
    output_item(id, "Human", Some(non_null("Human", TypeCategory::Object)), order, 2, &[field])
}

fn droid_fragment(id: usize, order: u32, field: usize) -> QueryOutputItem {
    output_item(id, "Droid", Some(non_null("Droid", TypeCategory::Object)), order, 2, &[field])
}

fn name_field(id: usize, order: u32) -> QueryOutputItem {
    output_item(id, "name", Some(non_null("String", TypeCategory::Scalar)), order, 3, &[])
}

fn function_field(id: usize, order: u32) -> QueryOutputItem {
    output_item(
        id,
        "primaryFunction",
        Some(non_null("String", TypeCategory::Scalar)),
        order,
        3,
        &[],
    )
}

fn item(intel: &Intel, id: usize) -> &DecodeItem {
    intel
        .decode
        .items
        .iter()
        .find(|item| item.info.id == id)
        .unwrap()
}

#[test]
fn interface_fragmentation_builds_a_union_on() {
    let tree = query(
        vec![],
        vec![
            output_root(&[1]),
            fragmented(1, "hero", 0, &[2, 4], true, false),
            human_fragment(2, 0, 3),
            name_field(3, 0),
            droid_fragment(4, 1, 5),
            function_field(5, 1),
        ],
    );

    let intel = query_to_intel(&tree, &plain_options()).unwrap();

    let hero = item(&intel, 1);
    assert_eq!(hero.kind, ItemKind::UnionOn);
    assert_eq!(hero.type_name, "OnCharacter");
    assert_eq!(hero.decoder, "onCharacterDecoder");
    assert_eq!(hero.info.children.len(), 3);

    assert_eq!(item(&intel, 2).type_name, "Human");
    assert_eq!(item(&intel, 2).union_constructor, "OnHuman");
    assert_eq!(item(&intel, 4).type_name, "Droid");
    assert_eq!(item(&intel, 4).union_constructor, "OnDroid");
}

#[test]
fn missing_coverage_synthesizes_a_catch_all_member() {
    let tree = query(
        vec![],
        vec![
            output_root(&[1]),
            fragmented(1, "hero", 0, &[2, 4], true, false),
            human_fragment(2, 0, 3),
            name_field(3, 0),
            droid_fragment(4, 1, 5),
            function_field(5, 1),
        ],
    );

    let intel = query_to_intel(&tree, &plain_options()).unwrap();

    // six source items plus exactly one synthesized member
    assert_eq!(intel.decode.items.len(), 7);

    let other = intel
        .decode
        .items
        .iter()
        .find(|item| item.kind == ItemKind::Empty)
        .unwrap();
    assert_eq!(other.type_name, "OtherCharacter");
    assert_eq!(other.decoder, "Json.Decode.succeed");
    assert_eq!(other.union_constructor, "OnOtherCharacter");
    // fresh id above every source-derived one, ordered after the members
    assert!(other.info.id > 5);
    assert_eq!(other.info.order, 1.5);
    assert_eq!(item(&intel, 1).info.children.last(), Some(&other.info.id));
}

#[test]
fn full_coverage_needs_no_catch_all() {
    let tree = query(
        vec![],
        vec![
            output_root(&[1]),
            fragmented(1, "hero", 0, &[2, 4], true, true),
            human_fragment(2, 0, 3),
            name_field(3, 0),
            droid_fragment(4, 1, 5),
            function_field(5, 1),
        ],
    );

    let intel = query_to_intel(&tree, &plain_options()).unwrap();

    assert_eq!(intel.decode.items.len(), 6);
    assert_eq!(item(&intel, 1).info.children.len(), 2);
    assert!(intel.decode.items.iter().all(|item| item.kind != ItemKind::Empty));
}

#[test]
fn inline_fragmentation_builds_a_plain_union() {
    let tree = query(
        vec![],
        vec![
            output_root(&[1]),
            fragmented(1, "hero", 0, &[2, 4], false, false),
            human_fragment(2, 0, 3),
            name_field(3, 0),
            droid_fragment(4, 1, 5),
            function_field(5, 1),
        ],
    );

    let intel = query_to_intel(&tree, &plain_options()).unwrap();

    let hero = item(&intel, 1);
    assert_eq!(hero.kind, ItemKind::Union);
    assert_eq!(hero.type_name, "Character");

    let other = intel
        .decode
        .items
        .iter()
        .find(|item| item.kind == ItemKind::Empty)
        .unwrap();
    // an unknown inline fragment still has to be a well-formed object
    assert_eq!(other.decoder, "ElmGraph.Decode.emptyObject");
    assert_eq!(other.type_name, "OtherCharacter");
}

#[test]
fn ambiguous_member_shapes_are_rejected() {
    let tree = query(
        vec![],
        vec![
            output_root(&[1]),
            fragmented(1, "hero", 0, &[2, 4], true, false),
            human_fragment(2, 0, 3),
            name_field(3, 0),
            droid_fragment(4, 1, 5),
            name_field(5, 1),
        ],
    );

    let err = query_to_intel(&tree, &plain_options()).unwrap_err();

    assert!(matches!(err, IntelError::AmbiguousUnionSignature(_)));
    assert!(err.to_string().contains("name : String"));
}

#[test]
fn identical_unions_share_type_decoder_and_constructors() {
    let tree = query(
        vec![],
        vec![
            output_root(&[1, 8]),
            fragmented(1, "hero", 0, &[2, 4], true, false),
            human_fragment(2, 0, 3),
            name_field(3, 0),
            droid_fragment(4, 1, 5),
            function_field(5, 1),
            fragmented(8, "companion", 1, &[6, 7], true, false),
            human_fragment(6, 2, 9),
            name_field(9, 2),
            droid_fragment(7, 3, 10),
            function_field(10, 3),
        ],
    );

    let intel = query_to_intel(&tree, &plain_options()).unwrap();

    let hero = item(&intel, 1);
    let companion = item(&intel, 8);
    assert_eq!(hero.type_name, "OnCharacter");
    assert_eq!(companion.type_name, "OnCharacter");
    assert_eq!(hero.decoder, companion.decoder);

    // deduplicated members share generated types and constructors
    assert_eq!(item(&intel, 2).type_name, item(&intel, 6).type_name);
    assert_eq!(item(&intel, 2).union_constructor, item(&intel, 6).union_constructor);
    assert_eq!(item(&intel, 4).union_constructor, "OnDroid");
    assert_eq!(item(&intel, 7).union_constructor, "OnDroid");

    // each union still gets its own catch-all item
    let others: Vec<&DecodeItem> = intel
        .decode
        .items
        .iter()
        .filter(|item| item.kind == ItemKind::Empty)
        .collect();
    assert_eq!(others.len(), 2);
    assert_eq!(others[0].type_name, "OtherCharacter");
    assert_eq!(others[1].type_name, "OtherCharacter");
    assert!(others[0].info.id != others[1].info.id);
    assert!(others[0].info.id > 10);
    assert!(others[1].info.id > 10);
}
