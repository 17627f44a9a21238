//! Display chips, their categories, and the framework note index.
//!
//! - [`DisplayChip`]: one interactive skill/tool/framework tag.
//! - [`ChipRegistry`]: chips in display order, grouped into [`ChipCategory`] cards.
//! - [`FrameworkNoteIndex`]: label → one-line rationale for framework chips.
//!
//! # Invariants
//!
//! - Chip labels are unique across the whole registry.
//! - A [`ChipId`] is the chip's position in global display order and stays
//!   valid for the registry's lifetime; nothing is ever removed.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::error::CatalogError;

/// Stable handle for a chip: its index in global display order.
///
/// Host UI events carry a `ChipId` as their target identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChipId(pub usize);

/// Classification of a chip, which decides how its tooltip content resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChipKind {
    /// A core competency, backed by an evidence group.
    Core,
    /// A framework or standard, backed by a one-line note instead of evidence.
    Framework,
    /// A tool or platform, backed by an evidence group.
    Tool,
}

impl ChipKind {
    /// `true` for kinds whose tooltip shows an evidence list.
    pub fn uses_evidence(self) -> bool {
        !matches!(self, ChipKind::Framework)
    }
}

/// A small interactive tag for one skill, tool, or framework.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayChip {
    /// Display text, unique within a registry.
    pub label: String,
    /// How this chip's tooltip content is resolved.
    pub kind: ChipKind,
    /// Evidence group for `Core`/`Tool` chips. Normally `None` for frameworks.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub group_key: Option<String>,
}

impl DisplayChip {
    /// Construct a chip of any kind.
    pub fn new(label: impl Into<String>, kind: ChipKind, group_key: Option<String>) -> Self {
        Self {
            label: label.into(),
            kind,
            group_key,
        }
    }

    /// A `Core` chip reading evidence from `group_key`.
    pub fn core(label: impl Into<String>, group_key: impl Into<String>) -> Self {
        Self::new(label, ChipKind::Core, Some(group_key.into()))
    }

    /// A `Tool` chip reading evidence from `group_key`.
    pub fn tool(label: impl Into<String>, group_key: impl Into<String>) -> Self {
        Self::new(label, ChipKind::Tool, Some(group_key.into()))
    }

    /// A `Framework` chip; its tooltip is the framework note for `label`.
    pub fn framework(label: impl Into<String>) -> Self {
        Self::new(label, ChipKind::Framework, None)
    }
}

/// One card of chips sharing a heading, e.g. "Tools & Platforms".
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChipCategory {
    /// Card heading.
    pub title: String,
    /// Chips on this card, in display order.
    pub chips: Vec<ChipId>,
}

/// All chips in display order, with label lookup and category grouping.
#[derive(Clone, Debug, Default)]
pub struct ChipRegistry {
    chips: Vec<DisplayChip>,
    by_label: HashMap<String, ChipId>,
    categories: Vec<ChipCategory>,
}

impl ChipRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category card and its chips. Chip ids continue the global order.
    ///
    /// Fails without modifying the registry if any label is already taken,
    /// including a label repeated within `chips` itself.
    pub fn push_category(
        &mut self,
        title: impl Into<String>,
        chips: Vec<DisplayChip>,
    ) -> Result<&ChipCategory, CatalogError> {
        for (i, chip) in chips.iter().enumerate() {
            let repeated = chips[..i].iter().any(|c| c.label == chip.label);
            if repeated || self.by_label.contains_key(&chip.label) {
                return Err(CatalogError::DuplicateChip(chip.label.clone()));
            }
        }

        let mut ids = Vec::with_capacity(chips.len());
        for chip in chips {
            let id = ChipId(self.chips.len());
            self.by_label.insert(chip.label.clone(), id);
            self.chips.push(chip);
            ids.push(id);
        }
        self.categories.push(ChipCategory {
            title: title.into(),
            chips: ids,
        });
        Ok(&self.categories[self.categories.len() - 1])
    }

    /// The chip with this id, if any.
    pub fn get(&self, id: ChipId) -> Option<&DisplayChip> {
        self.chips.get(id.0)
    }

    /// Find a chip by its display label.
    pub fn find(&self, label: &str) -> Option<ChipId> {
        self.by_label.get(label).copied()
    }

    /// `true` if `id` names a chip in this registry.
    pub fn contains(&self, id: ChipId) -> bool {
        id.0 < self.chips.len()
    }

    /// Number of chips.
    pub fn len(&self) -> usize {
        self.chips.len()
    }

    /// `true` if no chips are registered.
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    /// Iterate chips in global display order.
    pub fn iter(&self) -> impl Iterator<Item = (ChipId, &DisplayChip)> {
        self.chips.iter().enumerate().map(|(i, c)| (ChipId(i), c))
    }

    /// Category cards in display order.
    pub fn categories(&self) -> &[ChipCategory] {
        &self.categories
    }
}

/// Framework label → one-line rationale.
///
/// Disjoint in purpose from the evidence index: frameworks are explained,
/// not evidenced.
#[derive(Clone, Debug, Default)]
pub struct FrameworkNoteIndex {
    notes: HashMap<String, String>,
    order: Vec<String>,
}

impl FrameworkNoteIndex {
    /// An index with no notes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(label, note)` pairs; a repeated label is an error.
    pub fn from_notes<I, L, N>(notes: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (L, N)>,
        L: Into<String>,
        N: Into<String>,
    {
        let mut index = Self::new();
        for (label, note) in notes {
            index.insert(label.into(), note.into())?;
        }
        Ok(index)
    }

    pub(crate) fn insert(&mut self, label: String, note: String) -> Result<(), CatalogError> {
        if self.notes.contains_key(&label) {
            return Err(CatalogError::DuplicateFrameworkNote(label));
        }
        self.order.push(label.clone());
        self.notes.insert(label, note);
        Ok(())
    }

    /// The note for `label`, if one was written.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.notes.get(label).map(String::as_str)
    }

    /// Number of notes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` if no notes are present.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(label, note)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .filter_map(move |l| self.get(l).map(|n| (l.as_str(), n)))
    }
}
