//! User options and their finalized defaults.
//!
//! `Options` is what callers build up; [`Options::finalize`] applies the
//! defaults and produces the `FinalOptions` the codegen pass consumes.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Target Elm type plus the function that (de)serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMapping {
    /// Elm type the GraphQL type maps to.
    pub target_type: String,
    /// Fully qualified Elm encoder or decoder for that type.
    pub function_name: String,
}

impl TypeMapping {
    pub fn new(target_type: impl Into<String>, function_name: impl Into<String>) -> Self {
        Self {
            target_type: target_type.into(),
            function_name: function_name.into(),
        }
    }
}

/// Mapping from GraphQL scalar/enum type name to its Elm counterpart.
pub type TypeMappings = IndexMap<String, TypeMapping>;

/// User-facing options. Every field is optional; see
/// [`Options::finalize`] for the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    pub scalar_encoders: TypeMappings,
    pub scalar_decoders: TypeMappings,
    pub enum_encoders: TypeMappings,
    pub enum_decoders: TypeMappings,
    /// Source root the query file paths are taken relative to.
    pub src: Option<PathBuf>,
    /// Output root the generated Elm modules are placed under.
    pub dest: Option<PathBuf>,
}

impl Options {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an encoder for a custom scalar type.
    pub fn scalar_encoder(mut self, graphql_type: impl Into<String>, mapping: TypeMapping) -> Self {
        self.scalar_encoders.insert(graphql_type.into(), mapping);
        self
    }

    /// Register a decoder for a custom scalar type.
    pub fn scalar_decoder(mut self, graphql_type: impl Into<String>, mapping: TypeMapping) -> Self {
        self.scalar_decoders.insert(graphql_type.into(), mapping);
        self
    }

    /// Register an encoder for an enum type.
    pub fn enum_encoder(mut self, graphql_type: impl Into<String>, mapping: TypeMapping) -> Self {
        self.enum_encoders.insert(graphql_type.into(), mapping);
        self
    }

    /// Register a decoder for an enum type.
    pub fn enum_decoder(mut self, graphql_type: impl Into<String>, mapping: TypeMapping) -> Self {
        self.enum_decoders.insert(graphql_type.into(), mapping);
        self
    }

    /// Set the source root.
    pub fn src(mut self, path: impl Into<PathBuf>) -> Self {
        self.src = Some(path.into());
        self
    }

    /// Set the output root.
    pub fn dest(mut self, path: impl Into<PathBuf>) -> Self {
        self.dest = Some(path.into());
        self
    }

    /// Apply defaults: `src` falls back to `"."`, `dest` to `src`.
    pub fn finalize(self) -> FinalOptions {
        let src = self.src.unwrap_or_else(|| PathBuf::from("."));
        let dest = self.dest.unwrap_or_else(|| src.clone());
        FinalOptions {
            scalar_encoders: self.scalar_encoders,
            scalar_decoders: self.scalar_decoders,
            enum_encoders: self.enum_encoders,
            enum_decoders: self.enum_decoders,
            src,
            dest,
        }
    }
}

/// Options with every default applied. Consumed by the codegen pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalOptions {
    pub scalar_encoders: TypeMappings,
    pub scalar_decoders: TypeMappings,
    pub enum_encoders: TypeMappings,
    pub enum_decoders: TypeMappings,
    pub src: PathBuf,
    pub dest: PathBuf,
}
