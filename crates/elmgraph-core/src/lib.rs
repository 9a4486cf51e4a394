#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data model for elmgraph.
//!
//! Two layers:
//! - **Query layer** (`query`): the resolved query intel tree produced by
//!   the schema/query parsing front end, consumed read-only by the
//!   codegen pass
//! - **Configuration layer** (`options`): user options and their
//!   finalized defaults, plus Elm identifier casing rules (`utils`)

pub mod options;
pub mod query;
pub mod utils;

#[cfg(test)]
mod query_tests;

pub use options::{FinalOptions, Options, TypeMapping, TypeMappings};
pub use query::{
    ItemId, QueryInputItem, QueryIntel, QueryOutputItem, TypeCategory, TypeRef, parse_query_intel,
};
