//! Structural signatures and the shape deduplication cache.
//!
//! A signature is a canonical string uniquely determined by a type's
//! shape. The first item with a given signature mints a generated name,
//! every later item with the same signature reuses it; this is the
//! single deduplication mechanism of the whole pass.

use indexmap::IndexMap;
use serde::Serialize;

use elmgraph_core::query::ItemId;

use super::error::{IntelError, Result};
use super::ir::{DecodeItem, GeneratedItem, ItemInfo, ItemKind, find_item};
use super::naming::NameScope;

/// Maps a canonical signature to the name minted for it.
///
/// Used for record types, union types, encoder names, decoder names and
/// union constructor names; the caller chooses the key, the cache only
/// guarantees one name per key. Owned by the assembler and passed
/// explicitly; its lifetime is exactly one query's processing.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SignatureCache {
    names: IndexMap<String, String>,
}

impl SignatureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached name for `signature`, or mint one and cache it.
    pub fn obtain_or_create<F>(&mut self, signature: &str, names: &mut NameScope, mint: F) -> String
    where
        F: FnOnce(&mut NameScope) -> String,
    {
        if let Some(name) = self.names.get(signature) {
            return name.clone();
        }
        let name = mint(names);
        self.names.insert(signature.to_string(), name.clone());
        name
    }

    /// Register a fixed name under `signature`, bypassing the naming
    /// resolver. Used for the reserved root artifacts.
    pub fn insert(&mut self, signature: impl Into<String>, name: impl Into<String>) {
        self.names.insert(signature.into(), name.into());
    }

    pub fn get(&self, signature: &str) -> Option<&str> {
        self.names.get(signature).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Elm type expression for an item as it appears inside a record
/// signature: the generated type wrapped with `Optional`/`Maybe` and
/// `List` according to the item's shape flags.
pub(super) fn wrapped_type(info: &ItemInfo, type_name: &str) -> String {
    let mut ty = type_name.to_string();
    if info.is_list_of_optionals {
        ty = format!("Optional {}", parenthesize(&ty));
    } else if info.is_list_of_nullables {
        ty = format!("Maybe {}", parenthesize(&ty));
    }
    if info.is_list {
        ty = format!("List {}", parenthesize(&ty));
    }
    if info.is_optional {
        ty = format!("Optional {}", parenthesize(&ty));
    } else if info.is_nullable {
        ty = format!("Maybe {}", parenthesize(&ty));
    }
    ty
}

fn parenthesize(ty: &str) -> String {
    if ty.contains(' ') {
        format!("({ty})")
    } else {
        ty.to_string()
    }
}

/// Structural signature of a record: the named type plus the sorted
/// `field : wrappedType` pairs of its children.
///
/// A field literally named `__typename` contributes the parent's own
/// type name as its value type, since its runtime value is fixed by the
/// parent.
pub(super) fn record_signature<I: GeneratedItem>(
    query_typename: &str,
    children: &[ItemId],
    items: &[I],
) -> Result<String> {
    let mut fields = Vec::with_capacity(children.len());
    for &id in children {
        let child = find_item(items, id)?;
        if child.info().field_name.is_empty() {
            return Err(IntelError::MissingFieldName {
                type_name: child.type_name().to_string(),
            });
        }
        let wrapped = wrapped_type(child.info(), child.type_name());
        let field = if child.info().name == "__typename" {
            format!("{} : {} {}", child.info().field_name, wrapped, query_typename)
        } else {
            format!("{} : {}", child.info().field_name, wrapped)
        };
        fields.push(field);
    }
    fields.sort();
    Ok(format!("{}: {}", query_typename, fields.join(", ")))
}

/// JSON shape signature of a decode item's fields, over raw field and
/// type names. Used to check that union members are distinguishable
/// from response data alone.
pub(super) fn json_fields_signature(item: &DecodeItem, items: &[DecodeItem]) -> Result<String> {
    let mut fields = Vec::with_capacity(item.info.children.len());
    for &id in &item.info.children {
        let child = find_item(items, id)?;
        fields.push(json_field_signature(child, item, items)?);
    }
    fields.sort();
    Ok(fields.join(", "))
}

fn json_field_signature(
    item: &DecodeItem,
    parent: &DecodeItem,
    items: &[DecodeItem],
) -> Result<String> {
    if item.info.name.is_empty() {
        return Err(IntelError::MissingName {
            type_name: item.type_name.clone(),
        });
    }

    let mut signature = if item.kind == ItemKind::Record {
        format!("{{{}}}", json_fields_signature(item, items)?)
    } else if item.info.name == "__typename" {
        parent.type_name.clone()
    } else {
        item.type_name.clone()
    };

    if item.info.is_list {
        signature = format!("[{signature}]");
    }

    Ok(format!("{} : {}", item.info.name, signature))
}
