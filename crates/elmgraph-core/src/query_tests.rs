use crate::query::{TypeCategory, TypeRef, parse_query_intel};

const SAMPLE_JSON: &str = r#"{
    "src": "queries/hero.graphql",
    "query": "query Hero { hero { name } }",
    "inputs": [
        { "id": 0, "order": 0, "depth": 0, "children": [1] },
        {
            "id": 1,
            "name": "episode",
            "type": { "kind": "named", "name": "Episode", "category": "enum" },
            "order": 0,
            "depth": 1
        }
    ],
    "outputs": [
        {
            "id": 0,
            "type": { "kind": "named", "name": "Query", "category": "object", "nonNull": true },
            "order": 0,
            "depth": 0,
            "children": [1]
        },
        {
            "id": 1,
            "name": "hero",
            "type": {
                "kind": "list",
                "of": { "kind": "named", "name": "Character", "category": "interface", "nonNull": true },
                "nonNull": true
            },
            "order": 0,
            "depth": 1,
            "withDirective": true
        }
    ]
}"#;

#[test]
fn parse_sample_tree() {
    let intel = parse_query_intel(SAMPLE_JSON).unwrap();

    assert_eq!(intel.src.as_deref().unwrap().to_str(), Some("queries/hero.graphql"));
    assert_eq!(intel.inputs.len(), 2);
    assert_eq!(intel.outputs.len(), 2);

    let root = &intel.inputs[0];
    assert_eq!(root.name, "");
    assert!(root.ty.is_none());
    assert_eq!(root.children, vec![1]);

    let hero = &intel.outputs[1];
    assert!(hero.is_valid);
    assert!(hero.with_directive);
    assert!(!hero.is_fragmented);
    assert_eq!(hero.ty.as_ref().unwrap().name(), "Character");
}

#[test]
fn type_ref_nullability() {
    let nullable = TypeRef::Named {
        name: "Int".to_string(),
        category: TypeCategory::Scalar,
        non_null: false,
    };
    assert!(nullable.is_nullable());
    assert!(!nullable.is_list());

    let required = TypeRef::Named {
        name: "Int".to_string(),
        category: TypeCategory::Scalar,
        non_null: true,
    };
    assert!(!required.is_nullable());
}

#[test]
fn type_ref_list_wrapping() {
    let list = TypeRef::List {
        of: Box::new(TypeRef::Named {
            name: "Int".to_string(),
            category: TypeCategory::Scalar,
            non_null: false,
        }),
        non_null: true,
    };
    assert!(list.is_list());
    assert!(!list.is_nullable());
    assert!(list.is_list_of_nullables());
    assert_eq!(list.name(), "Int");
    assert_eq!(list.category(), TypeCategory::Scalar);

    let strict = TypeRef::List {
        of: Box::new(TypeRef::Named {
            name: "Int".to_string(),
            category: TypeCategory::Scalar,
            non_null: true,
        }),
        non_null: false,
    };
    assert!(strict.is_nullable());
    assert!(!strict.is_list_of_nullables());
}

#[test]
fn type_ref_display_uses_graphql_syntax() {
    let ty = TypeRef::List {
        of: Box::new(TypeRef::Named {
            name: "Int".to_string(),
            category: TypeCategory::Scalar,
            non_null: true,
        }),
        non_null: true,
    };
    assert_eq!(ty.to_string(), "[Int!]!");
}

#[test]
fn composite_categories() {
    assert!(TypeCategory::Object.is_composite());
    assert!(TypeCategory::Interface.is_composite());
    assert!(TypeCategory::Union.is_composite());
    assert!(!TypeCategory::Scalar.is_composite());
    assert!(!TypeCategory::Enum.is_composite());
    assert!(!TypeCategory::InputObject.is_composite());
}

#[test]
fn output_items_default_to_valid() {
    let intel = parse_query_intel(r#"{ "query": "", "outputs": [{ "id": 0 }] }"#).unwrap();
    assert!(intel.outputs[0].is_valid);
    assert!(!intel.outputs[0].has_all_possible_fragment_types);
}
