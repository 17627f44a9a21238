//! Evidence records and the read-only evidence index.
//!
//! - [`EvidenceRecord`]: one project substantiating a skill (title, link, proof).
//! - [`EvidenceIndex`]: group key → ordered records, built once, never mutated.
//!
//! # Invariants
//!
//! - Insertion order of records within a group is display order.
//! - A group present in the index is never empty. Absence is the only way to
//!   express "no evidence yet", and it renders as the placeholder.
//! - Lookups of unknown keys return an empty slice, never an error.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::error::CatalogError;

/// A project reference plus the proof text that ties it to a skill.
///
/// Identity is the `title` within its group; the same project may appear in
/// several groups with different proof text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvidenceRecord {
    /// Project title as shown in the tooltip.
    pub title: String,
    /// Absolute URL of the write-up.
    pub link: String,
    /// One or two sentences explaining what the project proves.
    pub proof: String,
}

impl EvidenceRecord {
    /// Construct a record.
    pub fn new(title: impl Into<String>, link: impl Into<String>, proof: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            proof: proof.into(),
        }
    }
}

/// Group key → ordered evidence records.
#[derive(Clone, Debug, Default)]
pub struct EvidenceIndex {
    groups: HashMap<String, Vec<EvidenceRecord>>,
    /// Group keys in insertion order, for deterministic iteration.
    order: Vec<String>,
}

impl EvidenceIndex {
    /// An index with no groups. Every lookup resolves to the empty slice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from `(group_key, records)` pairs.
    ///
    /// Fails on a repeated group key, an empty group, or a title repeated
    /// within one group.
    pub fn from_groups<I, K>(groups: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, Vec<EvidenceRecord>)>,
        K: Into<String>,
    {
        let mut index = Self::new();
        for (key, records) in groups {
            index.insert_group(key.into(), records)?;
        }
        Ok(index)
    }

    pub(crate) fn insert_group(
        &mut self,
        key: String,
        records: Vec<EvidenceRecord>,
    ) -> Result<(), CatalogError> {
        if self.groups.contains_key(&key) {
            return Err(CatalogError::DuplicateGroup(key));
        }
        if records.is_empty() {
            return Err(CatalogError::EmptyGroup(key));
        }
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.title == record.title) {
                return Err(CatalogError::DuplicateEvidence {
                    group: key,
                    title: record.title.clone(),
                });
            }
        }
        self.order.push(key.clone());
        self.groups.insert(key, records);
        Ok(())
    }

    /// Ordered evidence for `group_key`; empty if the key is unknown.
    pub fn lookup(&self, group_key: &str) -> &[EvidenceRecord] {
        self.groups.get(group_key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `true` if `group_key` has at least one record.
    pub fn contains(&self, group_key: &str) -> bool {
        self.groups.contains_key(group_key)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` if the index has no groups.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(group_key, records)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[EvidenceRecord])> {
        self.order
            .iter()
            .map(move |k| (k.as_str(), self.lookup(k)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soar_records() -> Vec<EvidenceRecord> {
        vec![
            EvidenceRecord::new(
                "Wazuh+TheHive+Shuffle",
                "https://example.com/soc-automation",
                "Automated triage with VirusTotal enrichment.",
            ),
            EvidenceRecord::new(
                "SOAR-EDR",
                "https://example.com/soar-edr",
                "Host isolation on Lazagne detections.",
            ),
        ]
    }

    #[test]
    fn test_lookup_preserves_insertion_order() {
        let index =
            EvidenceIndex::from_groups([("SOAR & Automation Workflows", soar_records())]).unwrap();
        let titles: Vec<&str> = index
            .lookup("SOAR & Automation Workflows")
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, ["Wazuh+TheHive+Shuffle", "SOAR-EDR"]);
    }

    #[test]
    fn test_unknown_key_is_empty_not_error() {
        let index = EvidenceIndex::from_groups([("a", soar_records())]).unwrap();
        assert!(index.lookup("nonexistent-key").is_empty());
        assert!(!index.contains("nonexistent-key"));
        assert!(EvidenceIndex::new().lookup("a").is_empty());
    }

    #[test]
    fn test_empty_group_rejected() {
        let err = EvidenceIndex::from_groups([("a", Vec::new())]).unwrap_err();
        assert_eq!(err, CatalogError::EmptyGroup("a".into()));
    }

    #[test]
    fn test_duplicate_group_rejected() {
        let err =
            EvidenceIndex::from_groups([("a", soar_records()), ("a", soar_records())]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateGroup("a".into()));
    }

    #[test]
    fn test_duplicate_title_within_group_rejected() {
        let mut records = soar_records();
        records.push(records[0].clone());
        let err = EvidenceIndex::from_groups([("a", records)]).unwrap_err();
        assert!(
            matches!(err, CatalogError::DuplicateEvidence { ref title, .. } if title == "Wazuh+TheHive+Shuffle"),
            "got {:?}",
            err
        );
    }

    #[test]
    fn test_same_title_allowed_across_groups() {
        let index = EvidenceIndex::from_groups([("a", soar_records()), ("b", soar_records())]);
        assert!(index.is_ok());
    }

    #[test]
    fn test_iter_in_insertion_order() {
        let index = EvidenceIndex::from_groups([
            ("zeta", soar_records()),
            ("alpha", soar_records()),
            ("mid", soar_records()),
        ])
        .unwrap();
        let keys: Vec<&str> = index.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert_eq!(index.len(), 3);
    }
}
