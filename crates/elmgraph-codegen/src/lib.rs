#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Elmgraph codegen: query intel construction for Elm code generation.
//!
//! This crate turns a resolved GraphQL query tree into the intermediate
//! representation the Elm renderer consumes: which record types, union
//! types, encoders and decoders to generate, with every name collision
//! resolved and every structurally identical type deduplicated.
//!
//! # Example
//!
//! ```
//! use elmgraph_codegen::query_to_intel;
//! use elmgraph_core::{Options, parse_query_intel};
//!
//! let tree = parse_query_intel(r#"{ "query": "{ __typename }" }"#).unwrap();
//! let intel = query_to_intel(&tree, &Options::new().finalize()).unwrap();
//! assert_eq!(intel.module, "Query");
//! ```

pub mod intel;

#[cfg(test)]
mod test_utils;

pub use intel::{
    DecodeItem, DecodeSection, EncodeItem, EncodeSection, Intel, IntelError, ItemInfo, ItemKind,
    NameScope, Result, Section, SignatureCache, query_to_intel,
};
