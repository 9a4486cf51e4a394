//! Traversal order, destination naming and section folding.

use std::path::{Component, PathBuf};

use elmgraph_core::options::FinalOptions;
use elmgraph_core::query::{ItemId, QueryIntel, QueryOutputItem};
use elmgraph_core::utils::valid_module_name;

use super::error::Result;
use super::ir::{DecodeSection, EncodeSection, Intel};
use super::naming::NameScope;
use super::signature::SignatureCache;

/// Build the intermediate representation for one parsed query.
///
/// Pure and synchronous: all mutable state (name scope, signature
/// cache, id counter) lives for exactly this call, so independent
/// queries may be processed in parallel.
pub fn query_to_intel(query: &QueryIntel, options: &FinalOptions) -> Result<Intel> {
    let (dest, module) = destination(query, options);

    let mut assembler = Assembler {
        options,
        names: NameScope::with_reserved(),
        types_by_signature: SignatureCache::new(),
        encode: EncodeSection::default(),
        decode: DecodeSection::default(),
        next_decode_id: next_id_seed(&query.outputs),
    };

    // Children before parents: a parent's signature and field names
    // depend on its children being fully classified and named.
    for item in sorted(&query.inputs, |item| (item.depth, item.order)) {
        assembler.add_encode_item(item)?;
    }
    for item in sorted(&query.outputs, |item| (item.depth, item.order)) {
        assembler.add_decode_item(item)?;
    }

    Ok(Intel {
        dest,
        module,
        query: query.query.clone(),
        used_names: assembler.names,
        types_by_signature: assembler.types_by_signature,
        encode: assembler.encode,
        decode: assembler.decode,
    })
}

/// Items sorted by descending depth, then ascending sibling order.
fn sorted<T, F>(items: &[T], key: F) -> Vec<&T>
where
    F: Fn(&&T) -> (u32, u32),
{
    let mut refs: Vec<&T> = items.iter().collect();
    refs.sort_by(|a, b| {
        let (depth_a, order_a) = key(a);
        let (depth_b, order_b) = key(b);
        depth_b.cmp(&depth_a).then(order_a.cmp(&order_b))
    });
    refs
}

/// Auxiliary ids start above every source-derived output id.
fn next_id_seed(outputs: &[QueryOutputItem]) -> ItemId {
    outputs
        .iter()
        .map(|item| item.id)
        .max()
        .unwrap_or(0)
        .max(outputs.len())
}

/// Destination path and Elm module name for a query source file.
///
/// `hero/details.graphql` under the source root becomes module
/// `Hero.Details` at `<dest>/Hero/Details.elm`. A query with no known
/// source file falls back to module `Query` at `./Query.elm`.
fn destination(query: &QueryIntel, options: &FinalOptions) -> (PathBuf, String) {
    let Some(src) = &query.src else {
        return (PathBuf::from("./Query.elm"), "Query".to_string());
    };

    let relative = src.strip_prefix(&options.src).unwrap_or(src);

    let mut parts: Vec<String> = Vec::new();
    if let Some(dir) = relative.parent() {
        for component in dir.components() {
            if let Component::Normal(segment) = component {
                parts.push(valid_module_name(&segment.to_string_lossy()));
            }
        }
    }
    let stem = relative
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    parts.push(valid_module_name(&stem));

    let mut dest = options.dest.clone();
    for part in &parts {
        dest.push(part);
    }
    dest.set_extension("elm");

    (dest, parts.join("."))
}

/// Working state of one `query_to_intel` call.
pub(super) struct Assembler<'a> {
    pub(super) options: &'a FinalOptions,
    pub(super) names: NameScope,
    pub(super) types_by_signature: SignatureCache,
    pub(super) encode: EncodeSection,
    pub(super) decode: DecodeSection,
    next_decode_id: ItemId,
}

impl Assembler<'_> {
    /// Fresh id for a synthesized decode item.
    pub(super) fn next_decode_id(&mut self) -> ItemId {
        self.next_decode_id += 1;
        self.next_decode_id
    }
}
