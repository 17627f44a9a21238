//! Catalog construction errors.
//!
//! Lookups at runtime never fail: unknown keys resolve to the "coming soon"
//! placeholder. Only building a [`SkillCatalog`] validates its input.
//!
//! [`SkillCatalog`]: crate::catalog::SkillCatalog

use alloc::string::String;

/// Reasons a skill catalog cannot be assembled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two chips share the same display label.
    #[error("duplicate chip label: {0}")]
    DuplicateChip(String),
    /// The same group key was inserted twice into the evidence index.
    #[error("duplicate evidence group: {0}")]
    DuplicateGroup(String),
    /// A group was inserted with no records; omit the group instead.
    #[error("evidence group has no records: {0}")]
    EmptyGroup(String),
    /// Two records within one group share a title.
    #[error("duplicate evidence title {title:?} in group {group:?}")]
    DuplicateEvidence {
        /// Group the records belong to.
        group: String,
        /// The repeated title.
        title: String,
    },
    /// A framework label was given two notes.
    #[error("duplicate framework note: {0}")]
    DuplicateFrameworkNote(String),
    /// A serialized manifest carries a version this build does not understand.
    #[error("unsupported catalog manifest version {0}")]
    UnsupportedVersion(u16),
}
