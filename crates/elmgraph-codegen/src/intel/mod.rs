//! Intel construction: from a resolved query tree to an Elm generation
//! plan.
//!
//! The pass folds the pre-sorted query items into an immutable
//! [`Intel`] value, minting collision-free Elm names as it goes and
//! collapsing structurally identical shapes onto one generated type.
//!
//! # Module Organization
//!
//! - `assemble`: traversal order, destination naming, section folding
//! - `classify`: per-item kind dispatch (record, scalar, enum)
//! - `union`: fragmented composites and catch-all synthesis
//! - `naming`: collision-free Elm identifier allocation
//! - `signature`: structural signatures and the deduplication cache
//! - `ir`: the produced intermediate representation

mod assemble;
mod classify;
mod error;
mod ir;
mod naming;
mod signature;
mod union;

#[cfg(test)]
mod union_tests;

pub use assemble::query_to_intel;
pub use error::{IntelError, Result, Section};
pub use ir::{
    DecodeItem, DecodeSection, EncodeItem, EncodeSection, GeneratedItem, Intel, ItemInfo, ItemKind,
};
pub use naming::{NameScope, RESERVED_NAMES};
pub use signature::SignatureCache;
