//! The intermediate representation handed to the Elm renderer.
//!
//! Built once per query by [`super::query_to_intel`], then read-only:
//! the renderer must treat `children` ids as opaque references that
//! resolve only within their own section.

use std::path::PathBuf;

use serde::Serialize;

use elmgraph_core::query::ItemId;

use super::error::{IntelError, Result};
use super::naming::NameScope;
use super::signature::SignatureCache;

/// What an item generates on the Elm side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    Record,
    Scalar,
    Enum,
    Union,
    UnionOn,
    Empty,
}

/// Shape metadata shared by encode and decode items.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInfo {
    /// Inherited from the source query item; synthesized items get
    /// fresh ids above every source-derived one.
    pub id: ItemId,
    /// Source field name, empty for roots and synthesized items.
    pub name: String,
    /// Name of the underlying GraphQL named type.
    pub query_typename: String,
    /// Resolved Elm record-field name, unique among siblings.
    pub field_name: String,
    /// Sibling sort key. Fractional for synthesized catch-all members,
    /// which sort directly after the members they cover for.
    pub order: f64,
    pub children: Vec<ItemId>,
    pub is_optional: bool,
    pub is_nullable: bool,
    pub is_list: bool,
    pub is_list_of_optionals: bool,
    pub is_list_of_nullables: bool,
}

/// Argument-encoding item of the encode section.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeItem {
    #[serde(flatten)]
    pub info: ItemInfo,
    pub kind: ItemKind,
    /// Generated Elm type name.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Generated Elm encoder name.
    pub encoder: String,
}

/// Response-decoding item of the decode section.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeItem {
    #[serde(flatten)]
    pub info: ItemInfo,
    pub kind: ItemKind,
    /// Generated Elm type name.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Generated Elm decoder name.
    pub decoder: String,
    /// Constructor wrapping this item inside its parent union; empty
    /// for non-members.
    pub union_constructor: String,
}

/// Common view over the items of both sections.
pub trait GeneratedItem {
    fn info(&self) -> &ItemInfo;
    fn info_mut(&mut self) -> &mut ItemInfo;
    fn type_name(&self) -> &str;
}

impl GeneratedItem for EncodeItem {
    fn info(&self) -> &ItemInfo {
        &self.info
    }
    fn info_mut(&mut self) -> &mut ItemInfo {
        &mut self.info
    }
    fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl GeneratedItem for DecodeItem {
    fn info(&self) -> &ItemInfo {
        &self.info
    }
    fn info_mut(&mut self) -> &mut ItemInfo {
        &mut self.info
    }
    fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Look up an item by id within one section's items.
pub(crate) fn find_item<I: GeneratedItem>(items: &[I], id: ItemId) -> Result<&I> {
    items
        .iter()
        .find(|item| item.info().id == id)
        .ok_or(IntelError::UnknownItem(id))
}

/// Mutable variant of [`find_item`].
pub(crate) fn find_item_mut<I: GeneratedItem>(items: &mut [I], id: ItemId) -> Result<&mut I> {
    items
        .iter_mut()
        .find(|item| item.info().id == id)
        .ok_or(IntelError::UnknownItem(id))
}

/// Encode (request variables) half of the representation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeSection {
    /// Generated items, children before parents.
    pub items: Vec<EncodeItem>,
    /// Generated type name to encoder name.
    pub encoders_by_type: SignatureCache,
}

/// Decode (response parsing) half of the representation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeSection {
    /// Generated items, children before parents.
    pub items: Vec<DecodeItem>,
    /// Generated type name to decoder name.
    pub decoders_by_type: SignatureCache,
}

/// Everything the Elm renderer needs for one query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Intel {
    /// Destination path of the generated Elm module.
    pub dest: PathBuf,
    /// Dotted Elm module name.
    pub module: String,
    /// Original query text, embedded verbatim by the renderer.
    pub query: String,
    /// Every name taken during this query's processing, reserved seed
    /// included.
    pub used_names: NameScope,
    /// Structural signature to generated type name.
    pub types_by_signature: SignatureCache,
    pub encode: EncodeSection,
    pub decode: DecodeSection,
}
