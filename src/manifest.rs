//! Catalog manifest: a serializable form of a [`SkillCatalog`] for authoring
//! content as JSON (or any serde format) instead of Rust.
//!
//! ```text
//! {
//!   "version": 1,
//!   "groups":     [ { "key": "...", "evidence": [ { "title", "link", "proof" } ] } ],
//!   "categories": [ { "title": "...", "chips": [ { "label", "kind", "group_key"? } ] } ],
//!   "framework_notes": [ { "label": "...", "note": "..." } ]
//! }
//! ```
//!
//! Every sequence keeps catalog order, so a manifest taken from a catalog and
//! loaded back yields the same display order. Loading goes through the same
//! validation as [`SkillCatalogBuilder::build`].
//!
//! This module requires the `serde` feature.
//!
//! [`SkillCatalogBuilder::build`]: crate::catalog::SkillCatalogBuilder::build

use alloc::string::String;
use alloc::vec::Vec;

use crate::catalog::SkillCatalog;
use crate::chips::DisplayChip;
use crate::error::CatalogError;
use crate::evidence::EvidenceRecord;

/// Current manifest format version.
pub const MANIFEST_VERSION: u16 = 1;

/// Serializable catalog.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct CatalogManifest {
    /// Format version; [`MANIFEST_VERSION`] for manifests written by this build.
    pub version: u16,
    /// Evidence groups in index order.
    pub groups: Vec<GroupEntry>,
    /// Category cards in display order.
    pub categories: Vec<CategoryEntry>,
    /// Framework notes in insertion order.
    #[serde(default)]
    pub framework_notes: Vec<NoteEntry>,
}

/// One evidence group.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct GroupEntry {
    /// Group key referenced by chips.
    pub key: String,
    /// Records in display order.
    pub evidence: Vec<EvidenceRecord>,
}

/// One category card.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct CategoryEntry {
    /// Card heading.
    pub title: String,
    /// Chips in display order.
    pub chips: Vec<DisplayChip>,
}

/// One framework note.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct NoteEntry {
    /// Framework chip label.
    pub label: String,
    /// One-line rationale.
    pub note: String,
}

impl CatalogManifest {
    /// Capture a catalog.
    pub fn from_catalog(catalog: &SkillCatalog) -> Self {
        let groups = catalog
            .evidence()
            .iter()
            .map(|(key, records)| GroupEntry {
                key: key.into(),
                evidence: records.to_vec(),
            })
            .collect();

        let chips = catalog.chips();
        let categories = chips
            .categories()
            .iter()
            .map(|category| CategoryEntry {
                title: category.title.clone(),
                chips: category
                    .chips
                    .iter()
                    .filter_map(|&id| chips.get(id).cloned())
                    .collect(),
            })
            .collect();

        let framework_notes = catalog
            .notes()
            .iter()
            .map(|(label, note)| NoteEntry {
                label: label.into(),
                note: note.into(),
            })
            .collect();

        Self {
            version: MANIFEST_VERSION,
            groups,
            categories,
            framework_notes,
        }
    }

    /// Validate and build the catalog this manifest describes.
    pub fn into_catalog(self) -> Result<SkillCatalog, CatalogError> {
        if self.version != MANIFEST_VERSION {
            return Err(CatalogError::UnsupportedVersion(self.version));
        }
        let mut builder = SkillCatalog::builder();
        for group in self.groups {
            builder = builder.evidence(group.key, group.evidence);
        }
        for category in self.categories {
            builder = builder.category(category.title, category.chips);
        }
        for entry in self.framework_notes {
            builder = builder.framework_note(entry.label, entry.note);
        }
        builder.build()
    }

    /// Number of chips across all categories.
    pub fn chip_count(&self) -> usize {
        self.categories.iter().map(|c| c.chips.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chips::ChipKind;

    #[test]
    fn test_manifest_keeps_catalog_order() {
        let catalog = crate::reference::catalog().unwrap();
        let manifest = CatalogManifest::from_catalog(&catalog);
        assert_eq!(manifest.version, MANIFEST_VERSION);
        assert_eq!(manifest.chip_count(), catalog.chips().len());
        assert_eq!(manifest.categories[1].title, "Frameworks & Standards");
        assert_eq!(manifest.categories[1].chips[0].kind, ChipKind::Framework);
        assert_eq!(manifest.groups.len(), catalog.evidence().len());
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let mut manifest = CatalogManifest::from_catalog(&crate::reference::catalog().unwrap());
        manifest.version = 7;
        assert_eq!(manifest.into_catalog().unwrap_err(), CatalogError::UnsupportedVersion(7));
    }
}
