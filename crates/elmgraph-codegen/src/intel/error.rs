//! Errors raised while building intel.
//!
//! Every failure is synchronous, fatal to the single query being
//! processed, and non-retryable: it signals a configuration gap or a
//! schema/query mismatch, never a transient condition.

use elmgraph_core::query::ItemId;

/// Which half of the representation an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Argument serialization (request variables).
    Encode,
    /// Response parsing.
    Decode,
}

impl Section {
    /// `encoder` or `decoder`.
    pub fn artifact(self) -> &'static str {
        match self {
            Self::Encode => "encoder",
            Self::Decode => "decoder",
        }
    }

    /// `input` or `output`, the query tree this section folds.
    pub fn tree(self) -> &'static str {
        match self {
            Self::Encode => "input",
            Self::Decode => "output",
        }
    }

    /// Options table holding scalar mappings for this section.
    pub fn scalar_table(self) -> &'static str {
        match self {
            Self::Encode => "scalar_encoders",
            Self::Decode => "scalar_decoders",
        }
    }

    /// Options table holding enum mappings for this section.
    pub fn enum_table(self) -> &'static str {
        match self {
            Self::Encode => "enum_encoders",
            Self::Decode => "enum_decoders",
        }
    }
}

/// Error while building intel for one query.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IntelError {
    /// A scalar type appeared with no user-supplied or built-in
    /// (de)serializer.
    #[error(
        "no {} defined for scalar type: {ty}. Please add one to options.{}",
        .section.artifact(),
        .section.scalar_table()
    )]
    UnhandledScalar { ty: String, section: Section },

    /// An enum type appeared with no user-supplied (de)serializer.
    #[error(
        "no {} defined for enum type: {ty}. Please add one to options.{}",
        .section.artifact(),
        .section.enum_table()
    )]
    UnhandledEnum { ty: String, section: Section },

    /// A named type that is neither scalar, enum nor composite reached
    /// classification. Unreachable given a valid GraphQL type system.
    #[error("unhandled query {} type: {ty}", .section.tree())]
    UnhandledType { ty: String, section: Section },

    /// Two fragment members of one union share an identical JSON shape,
    /// so response data cannot be attributed to either.
    #[error("multiple union children with the same json signature: {0}")]
    AmbiguousUnionSignature(String),

    /// A child item had no name when its parent needed a signature.
    /// Indicates an upstream ordering or input-validity bug.
    #[error("intel field item {type_name} does not have a name")]
    MissingName { type_name: String },

    /// A child item had no resolved field name when its parent needed a
    /// signature. Same class of bug as [`IntelError::MissingName`].
    #[error("intel field item {type_name} does not have a fieldName")]
    MissingFieldName { type_name: String },

    /// A children reference did not resolve within its section.
    #[error("unknown intel item id: {0}")]
    UnknownItem(ItemId),
}

/// Result type for intel construction.
pub type Result<T> = std::result::Result<T, IntelError>;
