//! # skillmap-core
//!
//! Headless state for a portfolio page's Skills section: which skill chip is
//! hovered or focused, what evidence its tooltip shows, and when each section
//! slides into view.
//!
//! ---
//!
//! ## Two engines
//!
//! **Skill-evidence tooltips.** Every skill chip points at a group of projects
//! that prove it. Hovering or focusing a chip shows those projects, a one-line
//! note for frameworks, or an honest "Evidence coming soon." when nothing has
//! been written yet. One tooltip at a time, keyboard and pointer alike.
//!
//! **Viewport reveals.** Each section latches visible the first time it
//! scrolls into view and stays visible. Its children derive staggered
//! fade/slide transitions from that single boolean.
//!
//! Everything is synchronous and allocation-light. The host (a wasm front end,
//! a server-side renderer, a test) feeds events and layout samples in and
//! renders the descriptors that come out.
//!
//! ## The pipeline
//!
//! ```text
//! pointer / keyboard ──▶ TooltipEngine ──▶ TooltipDescriptor
//!                             │
//!                     SkillCatalog (EvidenceIndex, ChipRegistry, FrameworkNoteIndex)
//!
//! layout samples ──▶ SectionRegistry ──▶ visible? ──▶ reveal() ──▶ TransitionDescriptor
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`evidence`] | [`EvidenceRecord`], [`EvidenceIndex`] | Group key → ordered project evidence |
//! | [`chips`] | [`DisplayChip`], [`ChipRegistry`], [`FrameworkNoteIndex`] | Chips, category cards, framework notes |
//! | [`catalog`] | [`SkillCatalog`], [`EvidenceSource`] | Validated read-only bundle of the above |
//! | [`tooltip`] | [`TooltipEngine`], [`TooltipState`], [`TooltipDescriptor`] | Idle/Active state machine and content resolution |
//! | [`visibility`] | [`VisibilityLatch`], [`VisibilityDetector`], [`SectionRegistry`] | One-way viewport latch per section |
//! | [`reveal`](mod@reveal) | [`RevealConfig`], [`TransitionDescriptor`] | Staggered entrance transitions |
//! | [`progress`] | [`ScrollProgress`] | Spring-smoothed scroll progress bar |
//! | [`geometry`] | [`Point`], [`Rect`], [`Viewport`] | Viewport-space geometry |
//! | [`reference`] | [`reference::catalog`] | The portfolio's own catalog |
//! | [`manifest`] | [`manifest::CatalogManifest`] | JSON-authorable catalog (requires `serde` feature) |
//!
//! ## `no_std`
//!
//! The crate is `#![no_std]` with `alloc` by default. Enable `std` for the
//! lazily built [`reference::shared`] catalog. Enable `serde` for
//! serialisation of every data type and the [`manifest`] module.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod geometry;
pub mod error;
pub mod evidence;
pub mod chips;
pub mod catalog;
pub mod tooltip;
pub mod visibility;
pub mod reveal;
pub mod progress;
pub mod reference;
#[cfg(feature = "serde")]
pub mod manifest;

pub use catalog::{EvidenceSource, SkillCatalog, SkillCatalogBuilder};
pub use chips::{ChipCategory, ChipId, ChipKind, ChipRegistry, DisplayChip, FrameworkNoteIndex};
pub use error::CatalogError;
pub use evidence::{EvidenceIndex, EvidenceRecord};
pub use geometry::{Point, Rect, Viewport};
pub use progress::{ScrollProgress, SpringConfig};
pub use reveal::{reveal, MotionPreference, RevealConfig, TransitionDescriptor};
pub use tooltip::{
    resolve_content, TooltipConfig, TooltipContent, TooltipDescriptor, TooltipEngine,
    TooltipEvent, TooltipState, COMING_SOON,
};
pub use visibility::{
    ObserverSupport, SectionId, SectionRegistry, VisibilityDetector, VisibilityLatch,
    VisibilityOptions,
};
