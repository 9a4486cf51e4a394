//! Query intel tree consumed from the schema/query parsing front end.
//!
//! One `QueryItem` per field, argument subtree, or fragment selection.
//! The tree arrives fully resolved against the schema type system; this
//! module only models it, for the codegen pass to fold over.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Identifier of one item within a query intel tree section.
pub type ItemId = usize;

/// Category of a GraphQL named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeCategory {
    Scalar,
    Enum,
    Object,
    InputObject,
    Interface,
    Union,
}

impl TypeCategory {
    /// Object, interface and union types carry selection sets.
    pub fn is_composite(self) -> bool {
        matches!(self, Self::Object | Self::Interface | Self::Union)
    }
}

/// Resolved GraphQL type reference: a named type with nullability and
/// list wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TypeRef {
    Named {
        name: String,
        category: TypeCategory,
        #[serde(default)]
        non_null: bool,
    },
    List {
        of: Box<TypeRef>,
        #[serde(default)]
        non_null: bool,
    },
}

impl TypeRef {
    /// Name of the underlying named type, stripping all wrapping.
    pub fn name(&self) -> &str {
        match self {
            Self::Named { name, .. } => name,
            Self::List { of, .. } => of.name(),
        }
    }

    /// Category of the underlying named type.
    pub fn category(&self) -> TypeCategory {
        match self {
            Self::Named { category, .. } => *category,
            Self::List { of, .. } => of.category(),
        }
    }

    /// The outermost wrapper is not non-null.
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Named { non_null, .. } | Self::List { non_null, .. } => !*non_null,
        }
    }

    /// The outermost type (nullability aside) is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    /// The outermost type is a list with nullable elements.
    pub fn is_list_of_nullables(&self) -> bool {
        match self {
            Self::List { of, .. } => of.is_nullable(),
            Self::Named { .. } => false,
        }
    }
}

impl fmt::Display for TypeRef {
    /// GraphQL syntax, e.g. `[Int!]!`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let non_null = match self {
            Self::Named { name, non_null, .. } => {
                write!(f, "{name}")?;
                *non_null
            }
            Self::List { of, non_null } => {
                write!(f, "[{of}]")?;
                *non_null
            }
        };
        if non_null {
            write!(f, "!")?;
        }
        Ok(())
    }
}

/// One node of the query input (argument) tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryInputItem {
    pub id: ItemId,
    /// Source field name; empty on the variables root.
    #[serde(default)]
    pub name: String,
    /// Resolved type; absent on the variables root.
    #[serde(rename = "type", default)]
    pub ty: Option<TypeRef>,
    /// Sibling sequence number.
    #[serde(default)]
    pub order: u32,
    /// Distance from the root (root = 0).
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub children: Vec<ItemId>,
}

/// One node of the query output (selection) tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOutputItem {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: Option<TypeRef>,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub children: Vec<ItemId>,
    /// Items dropped by the query parse (e.g. unreachable directives)
    /// are flagged invalid and skipped.
    #[serde(default = "default_true")]
    pub is_valid: bool,
    /// Field is conditionally included, so its value may be absent.
    #[serde(default)]
    pub with_directive: bool,
    /// Node is a union of fragment selections.
    #[serde(default)]
    pub is_fragmented: bool,
    /// Fragmentation is on an interface/union rather than inline on the
    /// node's own type.
    #[serde(default)]
    pub is_fragmented_on: bool,
    /// The listed fragments cover every schema-possible concrete type.
    #[serde(default)]
    pub has_all_possible_fragment_types: bool,
}

fn default_true() -> bool {
    true
}

/// A parsed query with its resolved input and output trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryIntel {
    /// Source file the query came from, if any. Used only for
    /// destination naming.
    #[serde(default)]
    pub src: Option<PathBuf>,
    /// Original query text.
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub inputs: Vec<QueryInputItem>,
    #[serde(default)]
    pub outputs: Vec<QueryOutputItem>,
}

/// Parse a query intel tree from its JSON interchange form.
pub fn parse_query_intel(json: &str) -> Result<QueryIntel, serde_json::Error> {
    serde_json::from_str(json)
}
