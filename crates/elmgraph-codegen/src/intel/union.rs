//! Fragmented composites: union construction and catch-all synthesis.

use elmgraph_core::query::{ItemId, QueryOutputItem, TypeRef};

use super::assemble::Assembler;
use super::error::{IntelError, Result};
use super::ir::{DecodeItem, ItemInfo, ItemKind, find_item, find_item_mut};
use super::signature::json_fields_signature;

/// Decoder for a catch-all member of an interface fragmentation: the
/// payload may be any value, nothing is extracted.
const SUCCEED_DECODER: &str = "Json.Decode.succeed";

/// Decoder for a catch-all member of an inline fragmentation: the
/// payload must at least be a well-formed object.
const EMPTY_OBJECT_DECODER: &str = "ElmGraph.Decode.emptyObject";

impl Assembler<'_> {
    /// Build the union item for a fragmented composite output.
    ///
    /// The fragment members are already classified (they are deeper in
    /// the tree); this validates that their shapes are distinguishable,
    /// mints the union type, synthesizes a catch-all member when the
    /// fragments do not cover every schema-possible concrete type, and
    /// assigns constructor names to every member.
    pub(super) fn add_union_item(
        &mut self,
        query_item: &QueryOutputItem,
        info: ItemInfo,
        ty: &TypeRef,
    ) -> Result<DecodeItem> {
        self.check_union_child_signatures(&info.children)?;

        let prefix = if query_item.is_fragmented_on { "On" } else { "" };
        let base = format!("{prefix}{}", ty.name());
        let type_name = self.new_union_type(&base, &info.children)?;

        let mut item = DecodeItem {
            info,
            kind: if query_item.is_fragmented_on {
                ItemKind::UnionOn
            } else {
                ItemKind::Union
            },
            decoder: self.new_decoder_name(&type_name),
            type_name,
            union_constructor: String::new(),
        };

        if !query_item.has_all_possible_fragment_types {
            let order = self.max_child_order(&item.info.children)? + 0.5;
            let other = DecodeItem {
                info: ItemInfo {
                    id: self.next_decode_id(),
                    order,
                    ..ItemInfo::default()
                },
                kind: ItemKind::Empty,
                type_name: format!("Other{}", ty.name()),
                decoder: if query_item.is_fragmented_on {
                    SUCCEED_DECODER.to_string()
                } else {
                    EMPTY_OBJECT_DECODER.to_string()
                },
                union_constructor: String::new(),
            };
            item.info.children.push(other.info.id);
            self.decode.items.push(other);
        }

        self.set_union_constructor_names(&item)?;

        Ok(item)
    }

    /// Every fragment member must have a distinct JSON shape, or
    /// response data cannot be attributed to one of them.
    fn check_union_child_signatures(&self, children: &[ItemId]) -> Result<()> {
        let mut seen: Vec<String> = Vec::with_capacity(children.len());
        for &id in children {
            let child = find_item(&self.decode.items, id)?;
            let signature = json_fields_signature(child, &self.decode.items)?;
            if seen.contains(&signature) {
                return Err(IntelError::AmbiguousUnionSignature(signature));
            }
            seen.push(signature);
        }
        Ok(())
    }

    /// Union type over the members' generated types, deduplicated by
    /// the member list.
    fn new_union_type(&mut self, base: &str, children: &[ItemId]) -> Result<String> {
        let mut member_types = Vec::with_capacity(children.len());
        for &id in children {
            member_types.push(find_item(&self.decode.items, id)?.type_name.clone());
        }
        let signature = format!("{base}: {}", member_types.join(", "));
        Ok(self
            .types_by_signature
            .obtain_or_create(&signature, &mut self.names, |names| names.type_name(base)))
    }

    fn max_child_order(&self, children: &[ItemId]) -> Result<f64> {
        let mut max = 0.0_f64;
        for &id in children {
            let child = find_item(&self.decode.items, id)?;
            if child.info.order > max {
                max = child.info.order;
            }
        }
        Ok(max)
    }

    /// Constructor names for every member, keyed by the (union, member)
    /// type pair so a type appearing in several unions gets one
    /// constructor per union.
    fn set_union_constructor_names(&mut self, item: &DecodeItem) -> Result<()> {
        for &id in &item.info.children {
            let member_type = find_item(&self.decode.items, id)?.type_name.clone();
            let key = format!("{} On{}", item.type_name, member_type);
            let constructor =
                self.types_by_signature
                    .obtain_or_create(&key, &mut self.names, |names| {
                        names.constructor_name(&format!("On{member_type}"))
                    });
            find_item_mut(&mut self.decode.items, id)?.union_constructor = constructor;
        }
        Ok(())
    }
}
