//! Per-item kind dispatch: record, scalar and enum classification.

use elmgraph_core::options::TypeMapping;
use elmgraph_core::query::{ItemId, QueryInputItem, QueryOutputItem, TypeCategory, TypeRef};
use elmgraph_core::utils::upper_first;

use super::assemble::Assembler;
use super::error::{IntelError, Result, Section};
use super::ir::{DecodeItem, EncodeItem, ItemInfo, ItemKind};
use super::naming::set_record_field_names;
use super::signature::record_signature;

/// Built-in encoders for the GraphQL built-in scalars. Consulted only
/// when the user tables have no entry.
fn default_scalar_encoder(name: &str) -> Option<TypeMapping> {
    let mapping = match name {
        "Int" => TypeMapping::new("Int", "Json.Encode.int"),
        "Float" => TypeMapping::new("Float", "Json.Encode.float"),
        "Boolean" => TypeMapping::new("Bool", "Json.Encode.bool"),
        "String" | "ID" => TypeMapping::new("String", "Json.Encode.string"),
        _ => return None,
    };
    Some(mapping)
}

/// Built-in decoders for the GraphQL built-in scalars.
fn default_scalar_decoder(name: &str) -> Option<TypeMapping> {
    let mapping = match name {
        "Int" => TypeMapping::new("Int", "Json.Decode.int"),
        "Float" => TypeMapping::new("Float", "Json.Decode.float"),
        "Boolean" => TypeMapping::new("Bool", "Json.Decode.bool"),
        "String" | "ID" => TypeMapping::new("String", "Json.Decode.string"),
        _ => return None,
    };
    Some(mapping)
}

/// Shape metadata shared by every classification branch.
fn item_info(id: ItemId, name: &str, ty: Option<&TypeRef>, order: u32, children: &[ItemId]) -> ItemInfo {
    ItemInfo {
        id,
        name: name.to_string(),
        query_typename: ty.map(|ty| ty.name().to_string()).unwrap_or_default(),
        field_name: String::new(),
        order: f64::from(order),
        children: children.to_vec(),
        is_optional: false,
        is_nullable: ty.is_none_or(TypeRef::is_nullable),
        is_list: ty.is_some_and(TypeRef::is_list),
        is_list_of_optionals: false,
        is_list_of_nullables: ty.is_some_and(TypeRef::is_list_of_nullables),
    }
}

/// Encode-side shape metadata: a nullable argument is an optional one.
fn encode_info(item: &QueryInputItem) -> ItemInfo {
    let mut info = item_info(item.id, &item.name, item.ty.as_ref(), item.order, &item.children);
    info.is_optional = info.is_nullable;
    info.is_list_of_optionals = info.is_list_of_nullables;
    info
}

/// Decode-side shape metadata: a directive-guarded field is optional.
fn decode_info(item: &QueryOutputItem) -> ItemInfo {
    let mut info = item_info(item.id, &item.name, item.ty.as_ref(), item.order, &item.children);
    info.is_optional = item.with_directive;
    info
}

impl Assembler<'_> {
    /// Classify one input item and append it to the encode section.
    pub(super) fn add_encode_item(&mut self, query_item: &QueryInputItem) -> Result<()> {
        let info = encode_info(query_item);

        let item = if info.id == 0 {
            // The variables root is the fixed, reserved record.
            set_record_field_names(&info.children, &mut self.encode.items)?;
            EncodeItem {
                info: ItemInfo {
                    is_optional: false,
                    is_nullable: false,
                    is_list: false,
                    ..info
                },
                kind: ItemKind::Record,
                type_name: "Variables".to_string(),
                encoder: "encodeVariables".to_string(),
            }
        } else {
            let Some(ty) = &query_item.ty else {
                return Err(IntelError::UnhandledType {
                    ty: "<missing>".to_string(),
                    section: Section::Encode,
                });
            };
            match ty.category() {
                TypeCategory::InputObject => {
                    set_record_field_names(&info.children, &mut self.encode.items)?;
                    let type_name = self.new_encode_record_type(&info)?;
                    let encoder = self.new_encoder_name(&type_name);
                    EncodeItem {
                        info,
                        kind: ItemKind::Record,
                        type_name,
                        encoder,
                    }
                }
                TypeCategory::Scalar => {
                    let mapping = self
                        .options
                        .scalar_encoders
                        .get(ty.name())
                        .cloned()
                        .or_else(|| default_scalar_encoder(ty.name()))
                        .ok_or_else(|| IntelError::UnhandledScalar {
                            ty: ty.to_string(),
                            section: Section::Encode,
                        })?;
                    EncodeItem {
                        info,
                        kind: ItemKind::Scalar,
                        type_name: mapping.target_type,
                        encoder: mapping.function_name,
                    }
                }
                TypeCategory::Enum => {
                    let mapping = self
                        .options
                        .enum_encoders
                        .get(ty.name())
                        .cloned()
                        .ok_or_else(|| IntelError::UnhandledEnum {
                            ty: ty.to_string(),
                            section: Section::Encode,
                        })?;
                    EncodeItem {
                        info,
                        kind: ItemKind::Enum,
                        type_name: mapping.target_type,
                        encoder: mapping.function_name,
                    }
                }
                TypeCategory::Object | TypeCategory::Interface | TypeCategory::Union => {
                    return Err(IntelError::UnhandledType {
                        ty: ty.to_string(),
                        section: Section::Encode,
                    });
                }
            }
        };

        self.encode.items.push(item);
        Ok(())
    }

    /// Classify one output item and append it to the decode section.
    /// Items flagged invalid by the query parse are dropped.
    pub(super) fn add_decode_item(&mut self, query_item: &QueryOutputItem) -> Result<()> {
        if !query_item.is_valid {
            return Ok(());
        }

        let info = decode_info(query_item);

        let Some(ty) = &query_item.ty else {
            return Err(IntelError::UnhandledType {
                ty: "<missing>".to_string(),
                section: Section::Decode,
            });
        };

        let item = if ty.category().is_composite() {
            if info.id == 0 {
                // The response root is the fixed, reserved record.
                set_record_field_names(&info.children, &mut self.decode.items)?;
                let item = DecodeItem {
                    info,
                    kind: ItemKind::Record,
                    type_name: "Data".to_string(),
                    decoder: "decoder".to_string(),
                    union_constructor: String::new(),
                };
                self.types_by_signature.insert("", item.type_name.clone());
                self.decode
                    .decoders_by_type
                    .insert(item.type_name.clone(), item.decoder.clone());
                item
            } else if query_item.is_fragmented {
                self.add_union_item(query_item, info, ty)?
            } else {
                set_record_field_names(&info.children, &mut self.decode.items)?;
                let type_name = self.new_decode_record_type(&info)?;
                let decoder = self.new_decoder_name(&type_name);
                DecodeItem {
                    info,
                    kind: ItemKind::Record,
                    type_name,
                    decoder,
                    union_constructor: String::new(),
                }
            }
        } else {
            match ty.category() {
                TypeCategory::Scalar => {
                    let mapping = self
                        .options
                        .scalar_decoders
                        .get(ty.name())
                        .cloned()
                        .or_else(|| default_scalar_decoder(ty.name()))
                        .ok_or_else(|| IntelError::UnhandledScalar {
                            ty: ty.to_string(),
                            section: Section::Decode,
                        })?;
                    DecodeItem {
                        info,
                        kind: ItemKind::Scalar,
                        type_name: mapping.target_type,
                        decoder: mapping.function_name,
                        union_constructor: String::new(),
                    }
                }
                TypeCategory::Enum => {
                    let mapping = self
                        .options
                        .enum_decoders
                        .get(ty.name())
                        .cloned()
                        .ok_or_else(|| IntelError::UnhandledEnum {
                            ty: ty.to_string(),
                            section: Section::Decode,
                        })?;
                    DecodeItem {
                        info,
                        kind: ItemKind::Enum,
                        type_name: mapping.target_type,
                        decoder: mapping.function_name,
                        union_constructor: String::new(),
                    }
                }
                TypeCategory::Object
                | TypeCategory::InputObject
                | TypeCategory::Interface
                | TypeCategory::Union => {
                    return Err(IntelError::UnhandledType {
                        ty: ty.to_string(),
                        section: Section::Decode,
                    });
                }
            }
        };

        self.decode.items.push(item);
        Ok(())
    }

    /// Record type for an encode item, deduplicated by signature.
    fn new_encode_record_type(&mut self, info: &ItemInfo) -> Result<String> {
        let signature = record_signature(&info.query_typename, &info.children, &self.encode.items)?;
        Ok(self
            .types_by_signature
            .obtain_or_create(&signature, &mut self.names, |names| {
                names.type_name(&info.query_typename)
            }))
    }

    /// Record type for a decode item, deduplicated by signature.
    pub(super) fn new_decode_record_type(&mut self, info: &ItemInfo) -> Result<String> {
        let signature = record_signature(&info.query_typename, &info.children, &self.decode.items)?;
        Ok(self
            .types_by_signature
            .obtain_or_create(&signature, &mut self.names, |names| {
                names.type_name(&info.query_typename)
            }))
    }

    /// Encoder name for a generated type, deduplicated by type.
    fn new_encoder_name(&mut self, type_name: &str) -> String {
        self.encode
            .encoders_by_type
            .obtain_or_create(type_name, &mut self.names, |names| {
                names.value_name(&format!("encode{}", upper_first(type_name)))
            })
    }

    /// Decoder name for a generated type, deduplicated by type.
    pub(super) fn new_decoder_name(&mut self, type_name: &str) -> String {
        self.decode
            .decoders_by_type
            .obtain_or_create(type_name, &mut self.names, |names| {
                names.value_name(&format!("{type_name}Decoder"))
            })
    }
}
