//! Collision-free Elm identifier allocation.

use std::collections::BTreeSet;

use serde::Serialize;

use elmgraph_core::utils::{valid_constructor_name, valid_field_name, valid_type_name};

use super::error::{IntelError, Result};
use super::ir::{GeneratedItem, find_item_mut};
use elmgraph_core::query::ItemId;

/// Names a generated artifact must never shadow.
pub const RESERVED_NAMES: [&str; 10] = [
    "Int",
    "Float",
    "Bool",
    "String",
    "List",
    "Variables",
    "Data",
    "query",
    "encodeVariables",
    "decoder",
];

/// A set of taken names with collision-free allocation.
///
/// Type, encoder, decoder and constructor names share one per-query
/// scope seeded with [`RESERVED_NAMES`]; record field names use a fresh
/// scope per sibling set, so unrelated records may reuse a field name.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct NameScope {
    used: BTreeSet<String>,
}

impl NameScope {
    /// Empty scope, for per-record field names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-query scope with the reserved names already taken.
    pub fn with_reserved() -> Self {
        Self {
            used: RESERVED_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Next free Elm type name for `candidate`.
    pub fn type_name(&mut self, candidate: &str) -> String {
        self.next(valid_type_name(candidate))
    }

    /// Next free lower-first field or variable name for `candidate`.
    pub fn value_name(&mut self, candidate: &str) -> String {
        self.next(valid_field_name(candidate))
    }

    /// Next free data-constructor name for `candidate`.
    pub fn constructor_name(&mut self, candidate: &str) -> String {
        self.next(valid_constructor_name(candidate))
    }

    /// Whether `name` is already taken in this scope.
    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Record `base` (or `base2`, `base3`, ...) as taken and return it.
    fn next(&mut self, base: String) -> String {
        if self.used.insert(base.clone()) {
            return base;
        }
        let mut counter = 2u32;
        loop {
            let name = format!("{base}{counter}");
            if self.used.insert(name.clone()) {
                return name;
            }
            counter += 1;
        }
    }
}

/// Resolve the field names of one record's children, in a fresh scope.
///
/// Children must already be classified; a child without a source name
/// cannot become a record field.
pub(super) fn set_record_field_names<I: GeneratedItem>(
    children: &[ItemId],
    items: &mut [I],
) -> Result<()> {
    let mut scope = NameScope::new();
    for &id in children {
        let item = find_item_mut(items, id)?;
        let name = item.info().name.clone();
        if name.is_empty() {
            return Err(IntelError::MissingName {
                type_name: item.type_name().to_string(),
            });
        }
        item.info_mut().field_name = scope.value_name(&name);
    }
    Ok(())
}
