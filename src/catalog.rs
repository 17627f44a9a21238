//! The skill catalog: evidence index, chip registry and framework notes bundled
//! into one read-only value.
//!
//! A catalog is assembled once with [`SkillCatalogBuilder`] and never mutated
//! afterwards. It is `Send + Sync` by construction, so any number of sections
//! can read it without synchronisation.
//!
//! ```rust
//! use skillmap_core::catalog::{EvidenceSource, SkillCatalog};
//! use skillmap_core::chips::DisplayChip;
//! use skillmap_core::evidence::EvidenceRecord;
//!
//! let catalog = SkillCatalog::builder()
//!     .evidence("SIEM & Log Analysis", vec![EvidenceRecord::new(
//!         "30-Day SOC Challenge – ELK Stack",
//!         "https://example.com/elk",
//!         "Monitored Windows/Linux telemetry in Elastic.",
//!     )])
//!     .category("Core Cybersecurity Concepts", vec![
//!         DisplayChip::core("SIEM & Log Analysis", "SIEM & Log Analysis"),
//!     ])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(catalog.lookup_evidence("SIEM & Log Analysis").len(), 1);
//! assert!(catalog.lookup_evidence("unknown").is_empty());
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::chips::{ChipId, ChipRegistry, DisplayChip, FrameworkNoteIndex};
use crate::error::CatalogError;
use crate::evidence::{EvidenceIndex, EvidenceRecord};

/// Read-only query surface consumed by the tooltip engine.
///
/// Implemented by [`SkillCatalog`]; a host may supply its own source.
pub trait EvidenceSource {
    /// Ordered evidence for `group_key`, empty if the key is unknown.
    fn lookup_evidence(&self, group_key: &str) -> &[EvidenceRecord];

    /// One-line note for a framework chip's `label`, if one exists.
    fn lookup_framework_note(&self, label: &str) -> Option<&str>;
}

/// Evidence, chips and framework notes for one Skills section.
#[derive(Clone, Debug, Default)]
pub struct SkillCatalog {
    evidence: EvidenceIndex,
    chips: ChipRegistry,
    notes: FrameworkNoteIndex,
}

impl SkillCatalog {
    /// Start assembling a catalog.
    pub fn builder() -> SkillCatalogBuilder {
        SkillCatalogBuilder::default()
    }

    /// Bundle already-validated parts.
    pub fn from_parts(
        evidence: EvidenceIndex,
        chips: ChipRegistry,
        notes: FrameworkNoteIndex,
    ) -> Self {
        let catalog = Self { evidence, chips, notes };
        catalog.audit();
        catalog
    }

    /// The evidence index.
    pub fn evidence(&self) -> &EvidenceIndex {
        &self.evidence
    }

    /// The chip registry.
    pub fn chips(&self) -> &ChipRegistry {
        &self.chips
    }

    /// The framework note index.
    pub fn notes(&self) -> &FrameworkNoteIndex {
        &self.notes
    }

    /// The chip with this id, if any.
    pub fn chip(&self, id: ChipId) -> Option<&DisplayChip> {
        self.chips.get(id)
    }

    /// Find a chip id by label.
    pub fn chip_by_label(&self, label: &str) -> Option<ChipId> {
        self.chips.find(label)
    }

    /// Log chips that will always render the placeholder. Not an error:
    /// chips may be published before their evidence is written.
    fn audit(&self) {
        for (id, chip) in self.chips.iter() {
            match (chip.kind.uses_evidence(), chip.group_key.as_deref()) {
                (true, None) => {
                    tracing::debug!(chip = id.0, label = %chip.label, "chip has no group key; evidence coming soon");
                }
                (true, Some(key)) if !self.evidence.contains(key) => {
                    tracing::debug!(chip = id.0, label = %chip.label, group = key, "group key not in evidence index; evidence coming soon");
                }
                (false, Some(key)) => {
                    tracing::warn!(chip = id.0, label = %chip.label, group = key, "framework chip carries a group key; it is ignored");
                }
                (false, None) if self.notes.get(&chip.label).is_none() => {
                    tracing::debug!(chip = id.0, label = %chip.label, "framework chip has no note; evidence coming soon");
                }
                _ => {}
            }
        }
        tracing::info!(
            chips = self.chips.len(),
            categories = self.chips.categories().len(),
            groups = self.evidence.len(),
            notes = self.notes.len(),
            "skill catalog built"
        );
    }
}

impl EvidenceSource for SkillCatalog {
    fn lookup_evidence(&self, group_key: &str) -> &[EvidenceRecord] {
        self.evidence.lookup(group_key)
    }

    fn lookup_framework_note(&self, label: &str) -> Option<&str> {
        self.notes.get(label)
    }
}

/// Accumulates catalog parts; validation happens in [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct SkillCatalogBuilder {
    groups: Vec<(String, Vec<EvidenceRecord>)>,
    categories: Vec<(String, Vec<DisplayChip>)>,
    notes: Vec<(String, String)>,
}

impl SkillCatalogBuilder {
    /// Add an evidence group. Records keep the given order.
    pub fn evidence(mut self, group_key: impl Into<String>, records: Vec<EvidenceRecord>) -> Self {
        self.groups.push((group_key.into(), records));
        self
    }

    /// Add a category card of chips.
    pub fn category(mut self, title: impl Into<String>, chips: Vec<DisplayChip>) -> Self {
        self.categories.push((title.into(), chips));
        self
    }

    /// Add a framework note.
    pub fn framework_note(mut self, label: impl Into<String>, note: impl Into<String>) -> Self {
        self.notes.push((label.into(), note.into()));
        self
    }

    /// Validate and freeze the catalog.
    pub fn build(self) -> Result<SkillCatalog, CatalogError> {
        let evidence = EvidenceIndex::from_groups(self.groups)?;
        let notes = FrameworkNoteIndex::from_notes(self.notes)?;
        let mut chips = ChipRegistry::new();
        for (title, members) in self.categories {
            chips.push_category(title, members)?;
        }
        Ok(SkillCatalog::from_parts(evidence, chips, notes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chips::ChipKind;

    fn record(title: &str) -> EvidenceRecord {
        EvidenceRecord::new(title, "https://example.com", "proof")
    }

    #[test]
    fn test_builder_assembles_all_parts() {
        let catalog = SkillCatalog::builder()
            .evidence("g", vec![record("one"), record("two")])
            .category("Core", vec![DisplayChip::core("Chip", "g")])
            .category("Frameworks", vec![DisplayChip::framework("MITRE ATT&CK")])
            .framework_note("MITRE ATT&CK", "note")
            .build()
            .unwrap();

        assert_eq!(catalog.lookup_evidence("g").len(), 2);
        assert_eq!(catalog.lookup_framework_note("MITRE ATT&CK"), Some("note"));
        assert_eq!(catalog.chips().categories().len(), 2);
        let id = catalog.chip_by_label("MITRE ATT&CK").unwrap();
        assert_eq!(catalog.chip(id).unwrap().kind, ChipKind::Framework);
    }

    #[test]
    fn test_builder_surfaces_first_error() {
        let err = SkillCatalog::builder()
            .evidence("g", Vec::new())
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::EmptyGroup("g".into()));

        let err = SkillCatalog::builder()
            .category("A", vec![DisplayChip::framework("X")])
            .category("B", vec![DisplayChip::framework("X")])
            .build()
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateChip("X".into()));
    }

    #[test]
    fn test_unmapped_group_key_is_allowed() {
        let catalog = SkillCatalog::builder()
            .category("Core", vec![DisplayChip::core("Unknown Skill", "nonexistent-key")])
            .build();
        assert!(catalog.is_ok());
    }

    #[test]
    fn test_catalog_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SkillCatalog>();
    }
}
