//! Tooltip engine: which chip is active, where the tooltip sits, and what it shows.
//!
//! - [`TooltipState`]: `Idle` or `Active { chip, position }`.
//! - [`TooltipEvent`]: pointer/keyboard events from the host, keyed by [`ChipId`].
//! - [`TooltipEngine`]: owns the state for one Skills section and produces a
//!   render-ready [`TooltipDescriptor`].
//! - [`resolve_content`]: pure chip → [`TooltipContent`] resolution.
//!
//! # State machine
//!
//! ```text
//!            enter(c,p) / focus(c,r)
//!   Idle ───────────────────────────────▶ Active(c, p)
//!    ▲                                      │  │  move(c,p')      → Active(c, p')
//!    │        leave(c) / blur(c)            │  │  enter/focus(c2) → Active(c2, p2)
//!    └──────────────────────────────────────┘  ▼
//! ```
//!
//! # Invariants
//!
//! - At most one chip is active. A second chip gaining hover or focus supersedes
//!   the first directly, with no Idle step in between.
//! - A leave/blur naming a chip that is not active is stale and ignored, so a
//!   late `leave(A)` arriving after `enter(B)` cannot clear B.
//! - Focus exposes exactly the content hover does; blur clears exactly like leave.
//! - Positions are last-write-wins; there is no timeout-based dismissal.

use core::fmt;

use crate::catalog::{EvidenceSource, SkillCatalog};
use crate::chips::{ChipId, ChipKind, ChipRegistry, DisplayChip};
use crate::evidence::EvidenceRecord;
use crate::geometry::{Point, Rect};

/// Message shown when a chip has no evidence or note yet.
pub const COMING_SOON: &str = "Evidence coming soon.";

// ─── Configuration ───────────────────────────────────────────────────────────

/// Placement of the tooltip relative to its anchor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TooltipConfig {
    /// Horizontal distance from the anchor to the tooltip's left edge.
    pub offset_x: f32,
    /// Vertical distance from the anchor to the tooltip's top edge.
    pub offset_y: f32,
    /// Gap below a focused chip's bounding box used to synthesize the anchor
    /// when no pointer coordinates exist.
    pub focus_gap: f32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: 14.0,
            offset_y: 18.0,
            focus_gap: 8.0,
        }
    }
}

// ─── Events and state ────────────────────────────────────────────────────────

/// An input event from the host UI, targeted at one chip.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TooltipEvent {
    /// Pointer entered the chip at `at`.
    PointerEnter {
        /// Target chip.
        chip: ChipId,
        /// Pointer position.
        at: Point,
    },
    /// Pointer moved within the chip.
    PointerMove {
        /// Target chip.
        chip: ChipId,
        /// Pointer position.
        at: Point,
    },
    /// Pointer left the chip.
    PointerLeave {
        /// Target chip.
        chip: ChipId,
    },
    /// The chip received keyboard focus. There are no pointer coordinates, so
    /// the anchor is derived from the chip's bounding box.
    Focus {
        /// Target chip.
        chip: ChipId,
        /// The chip's bounding box.
        bounds: Rect,
    },
    /// The chip lost keyboard focus.
    Blur {
        /// Target chip.
        chip: ChipId,
    },
}

impl TooltipEvent {
    /// The chip this event targets.
    pub fn chip(&self) -> ChipId {
        match *self {
            TooltipEvent::PointerEnter { chip, .. }
            | TooltipEvent::PointerMove { chip, .. }
            | TooltipEvent::PointerLeave { chip }
            | TooltipEvent::Focus { chip, .. }
            | TooltipEvent::Blur { chip } => chip,
        }
    }
}

/// Tooltip state for one Skills section.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TooltipState {
    /// No chip active; nothing rendered.
    #[default]
    Idle,
    /// `chip` is hovered or focused; `position` is the latest anchor.
    Active {
        /// The active chip.
        chip: ChipId,
        /// Anchor in viewport space (pointer or synthesized focus position).
        position: Point,
    },
}

impl TooltipState {
    /// The active chip, if any.
    pub fn active_chip(&self) -> Option<ChipId> {
        match *self {
            TooltipState::Idle => None,
            TooltipState::Active { chip, .. } => Some(chip),
        }
    }

    /// `true` when nothing is active.
    pub fn is_idle(&self) -> bool {
        matches!(self, TooltipState::Idle)
    }

    /// Apply one event. Pure: the next state depends only on `self`, `event`
    /// and `config`.
    ///
    /// A move over a chip that is not active activates it, which covers hosts
    /// that drop the enter event during fast pointer sweeps.
    pub fn transition(self, event: TooltipEvent, config: &TooltipConfig) -> TooltipState {
        match event {
            TooltipEvent::PointerEnter { chip, at } | TooltipEvent::PointerMove { chip, at } => {
                TooltipState::Active { chip, position: at }
            }
            TooltipEvent::Focus { chip, bounds } => TooltipState::Active {
                chip,
                position: bounds.bottom_left().offset(0.0, config.focus_gap),
            },
            TooltipEvent::PointerLeave { chip } | TooltipEvent::Blur { chip } => {
                if self.active_chip() == Some(chip) {
                    TooltipState::Idle
                } else {
                    self
                }
            }
        }
    }
}

impl fmt::Display for TooltipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TooltipState::Idle => f.write_str("idle"),
            TooltipState::Active { chip, .. } => write!(f, "active({})", chip.0),
        }
    }
}

// ─── Content resolution ──────────────────────────────────────────────────────

/// What the tooltip body shows.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value", rename_all = "snake_case"))]
pub enum TooltipContent<'a> {
    /// Evidence records in stored order; never empty.
    Evidence(&'a [EvidenceRecord]),
    /// One-line framework rationale.
    FrameworkNote(&'a str),
    /// Nothing written yet; render [`COMING_SOON`].
    ComingSoon,
}

impl<'a> TooltipContent<'a> {
    /// The evidence list, if this content is one.
    pub fn evidence(&self) -> Option<&'a [EvidenceRecord]> {
        match *self {
            TooltipContent::Evidence(records) => Some(records),
            _ => None,
        }
    }

    /// Single-line text for note and placeholder content.
    pub fn text(&self) -> Option<&'a str> {
        match *self {
            TooltipContent::FrameworkNote(note) => Some(note),
            TooltipContent::ComingSoon => Some(COMING_SOON),
            TooltipContent::Evidence(_) => None,
        }
    }
}

/// Resolve what a chip's tooltip shows.
///
/// - `Framework` → its note from `source`, or the placeholder. The evidence
///   index is never consulted, even if the chip carries a group key.
/// - `Core`/`Tool` with a group key → the evidence list, or the placeholder if
///   the key is unmapped.
/// - `Core`/`Tool` without a group key → the placeholder.
pub fn resolve_content<'a, S>(chip: &DisplayChip, source: &'a S) -> TooltipContent<'a>
where
    S: EvidenceSource + ?Sized,
{
    match chip.kind {
        ChipKind::Framework => source
            .lookup_framework_note(&chip.label)
            .map_or(TooltipContent::ComingSoon, TooltipContent::FrameworkNote),
        ChipKind::Core | ChipKind::Tool => match chip.group_key.as_deref() {
            Some(key) => {
                let records = source.lookup_evidence(key);
                if records.is_empty() {
                    TooltipContent::ComingSoon
                } else {
                    TooltipContent::Evidence(records)
                }
            }
            None => TooltipContent::ComingSoon,
        },
    }
}

// ─── Descriptor ──────────────────────────────────────────────────────────────

/// Everything a host needs to draw the tooltip.
///
/// The overlay itself must not capture pointer events (`pointer-events: none`)
/// so chips underneath stay hoverable; only the evidence links inside it are
/// interactive (`pointer-events: auto` on the anchors).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TooltipDescriptor<'a> {
    /// The active chip.
    pub chip: ChipId,
    /// Its display label, used as the tooltip heading.
    pub label: &'a str,
    /// Its kind.
    pub kind: ChipKind,
    /// Left edge of the tooltip in viewport space.
    pub left: f32,
    /// Top edge of the tooltip in viewport space.
    pub top: f32,
    /// Body content.
    pub content: TooltipContent<'a>,
}

impl TooltipDescriptor<'_> {
    /// `true` if the body contains clickable links.
    pub fn has_links(&self) -> bool {
        matches!(self.content, TooltipContent::Evidence(_))
    }
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Owned tooltip state for one Skills section instance.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TooltipEngine {
    state: TooltipState,
    config: TooltipConfig,
}

impl TooltipEngine {
    /// An idle engine with default placement.
    pub fn new() -> Self {
        Self::default()
    }

    /// An idle engine with custom placement.
    pub fn with_config(config: TooltipConfig) -> Self {
        Self {
            state: TooltipState::Idle,
            config,
        }
    }

    /// Current state.
    pub fn state(&self) -> TooltipState {
        self.state
    }

    /// Placement configuration.
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Feed one host event. Events naming a chip outside `chips` are dropped.
    pub fn handle(&mut self, event: TooltipEvent, chips: &ChipRegistry) -> TooltipState {
        if !chips.contains(event.chip()) {
            tracing::warn!(chip = event.chip().0, "tooltip event for unknown chip ignored");
            return self.state;
        }
        let prev = self.state;
        self.state = prev.transition(event, &self.config);
        if prev.active_chip() != self.state.active_chip() {
            tracing::debug!(from = %prev, to = %self.state, "tooltip transition");
        }
        self.state
    }

    /// Force the engine back to `Idle`, e.g. when the section unmounts.
    pub fn reset(&mut self) {
        self.state = TooltipState::Idle;
    }

    /// The render-ready tooltip, or `None` when idle.
    pub fn descriptor<'a>(&self, catalog: &'a SkillCatalog) -> Option<TooltipDescriptor<'a>> {
        self.descriptor_from(catalog.chips(), catalog)
    }

    /// Like [`descriptor`](Self::descriptor), resolving content through a
    /// host-supplied source instead of a built catalog.
    pub fn descriptor_from<'a, S>(
        &self,
        chips: &'a ChipRegistry,
        source: &'a S,
    ) -> Option<TooltipDescriptor<'a>>
    where
        S: EvidenceSource + ?Sized,
    {
        let TooltipState::Active { chip, position } = self.state else {
            return None;
        };
        let display = chips.get(chip)?;
        Some(TooltipDescriptor {
            chip,
            label: &display.label,
            kind: display.kind,
            left: position.x + self.config.offset_x,
            top: position.y + self.config.offset_y,
            content: resolve_content(display, source),
        })
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
