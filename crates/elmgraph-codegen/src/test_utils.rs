//! Shared fixture builders for intel tests.

use elmgraph_core::options::{FinalOptions, Options};
use elmgraph_core::query::{
    ItemId, QueryInputItem, QueryIntel, QueryOutputItem, TypeCategory, TypeRef,
};

pub fn named(name: &str, category: TypeCategory) -> TypeRef {
    TypeRef::Named {
        name: name.to_string(),
        category,
        non_null: false,
    }
}

pub fn non_null(name: &str, category: TypeCategory) -> TypeRef {
    TypeRef::Named {
        name: name.to_string(),
        category,
        non_null: true,
    }
}

pub fn list_of(of: TypeRef) -> TypeRef {
    TypeRef::List {
        of: Box::new(of),
        non_null: false,
    }
}

pub fn input_item(
    id: ItemId,
    name: &str,
    ty: Option<TypeRef>,
    order: u32,
    depth: u32,
    children: &[ItemId],
) -> QueryInputItem {
    QueryInputItem {
        id,
        name: name.to_string(),
        ty,
        order,
        depth,
        children: children.to_vec(),
    }
}

pub fn output_item(
    id: ItemId,
    name: &str,
    ty: Option<TypeRef>,
    order: u32,
    depth: u32,
    children: &[ItemId],
) -> QueryOutputItem {
    QueryOutputItem {
        id,
        name: name.to_string(),
        ty,
        order,
        depth,
        children: children.to_vec(),
        is_valid: true,
        with_directive: false,
        is_fragmented: false,
        is_fragmented_on: false,
        has_all_possible_fragment_types: false,
    }
}

/// Output root (`Data`) over the given children.
pub fn output_root(children: &[ItemId]) -> QueryOutputItem {
    output_item(
        0,
        "",
        Some(non_null("Query", TypeCategory::Object)),
        0,
        0,
        children,
    )
}

/// Input root (`Variables`) over the given children.
pub fn input_root(children: &[ItemId]) -> QueryInputItem {
    input_item(0, "", None, 0, 0, children)
}

pub fn query(inputs: Vec<QueryInputItem>, outputs: Vec<QueryOutputItem>) -> QueryIntel {
    QueryIntel {
        src: None,
        query: "query".to_string(),
        inputs,
        outputs,
    }
}

pub fn plain_options() -> FinalOptions {
    Options::new().finalize()
}
