//! Viewport visibility detection with a one-way latch.
//!
//! - [`VisibilityLatch`]: `NotTriggered` → `Triggered`, never back.
//! - [`VisibilityOptions`]: root margin and intersection threshold.
//! - [`VisibilityDetector`]: one section's latch, fed with layout samples.
//! - [`SectionRegistry`]: one detector per section, the `register → signal`
//!   surface every section subscribes through.
//!
//! # Invariants
//!
//! - A latch that has triggered stays triggered for the detector's lifetime,
//!   even if the element leaves and re-enters the viewport.
//! - If the host cannot observe intersections the detector fails open: it
//!   starts triggered so content is shown, unanimated, instead of staying hidden.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::geometry::{Point, Rect, Viewport};

// ─── Latch ───────────────────────────────────────────────────────────────────

/// Monotonic visibility state for one section instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibilityLatch {
    /// The section has not yet crossed the threshold.
    #[default]
    NotTriggered,
    /// The section has been seen; terminal.
    Triggered,
}

impl VisibilityLatch {
    /// Advance the latch. `Triggered` absorbs every input.
    pub fn observe(self, intersecting: bool) -> Self {
        match self {
            VisibilityLatch::Triggered => VisibilityLatch::Triggered,
            VisibilityLatch::NotTriggered if intersecting => VisibilityLatch::Triggered,
            VisibilityLatch::NotTriggered => VisibilityLatch::NotTriggered,
        }
    }

    /// The boolean signal sections read.
    pub fn is_visible(self) -> bool {
        matches!(self, VisibilityLatch::Triggered)
    }
}

// ─── Options ─────────────────────────────────────────────────────────────────

/// Intersection settings, analogous to `IntersectionObserver`'s `rootMargin`
/// and `threshold`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityOptions {
    /// Grows (positive) or shrinks (negative) the viewport on every side
    /// before testing intersection. The default −80 px makes a section
    /// trigger once it is 80 px inside the viewport.
    pub root_margin_px: f32,
    /// Fraction of the element's area that must intersect, in [0.0, 1.0].
    /// `0.0` means any overlap.
    pub threshold: f32,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            root_margin_px: -80.0,
            threshold: 0.0,
        }
    }
}

impl VisibilityOptions {
    /// Fraction of `element` inside the margin-adjusted viewport, in [0.0, 1.0].
    ///
    /// A zero-area element counts as fully inside when its origin lies
    /// within the root, and fully outside otherwise.
    pub fn intersection_ratio(&self, element: Rect, viewport: Viewport) -> f32 {
        let root = viewport.bounds().inflate(self.root_margin_px);
        if root.area() <= 0.0 {
            return 0.0;
        }
        let area = element.area();
        if area <= 0.0 {
            return if root.contains(Point::new(element.x, element.y)) {
                1.0
            } else {
                0.0
            };
        }
        element
            .intersection(&root)
            .map_or(0.0, |overlap| (overlap.area() / area).clamp(0.0, 1.0))
    }

    /// `true` if `element` crosses the threshold.
    pub fn is_intersecting(&self, element: Rect, viewport: Viewport) -> bool {
        let ratio = self.intersection_ratio(element, viewport);
        if self.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold.min(1.0)
        }
    }
}

/// Whether the host can observe element intersections at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObserverSupport {
    /// Intersection samples will be delivered.
    #[default]
    Available,
    /// No observation primitive (headless or constrained renderer).
    Unavailable,
}

// ─── Detector ────────────────────────────────────────────────────────────────

/// Visibility latch for one mounted section.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityDetector {
    latch: VisibilityLatch,
    options: VisibilityOptions,
}

impl VisibilityDetector {
    /// A detector waiting for its first intersection.
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            latch: VisibilityLatch::NotTriggered,
            options,
        }
    }

    /// A detector for a host with the given observation support. Without
    /// support the detector is born triggered.
    pub fn with_support(options: VisibilityOptions, support: ObserverSupport) -> Self {
        let mut detector = Self::new(options);
        if support == ObserverSupport::Unavailable {
            tracing::debug!("intersection observation unavailable; failing open to visible");
            detector.latch = VisibilityLatch::Triggered;
        }
        detector
    }

    /// Feed one layout sample. Returns the (possibly just latched) signal.
    pub fn observe(&mut self, element: Rect, viewport: Viewport) -> bool {
        if self.latch.is_visible() {
            return true;
        }
        let intersecting = self.options.is_intersecting(element, viewport);
        self.latch = self.latch.observe(intersecting);
        self.latch.is_visible()
    }

    /// Current signal.
    pub fn is_visible(&self) -> bool {
        self.latch.is_visible()
    }

    /// Current latch state.
    pub fn latch(&self) -> VisibilityLatch {
        self.latch
    }

    /// The options this detector tests against.
    pub fn options(&self) -> &VisibilityOptions {
        &self.options
    }
}

// ─── Section registry ────────────────────────────────────────────────────────

/// Handle returned by [`SectionRegistry::register`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionId(pub usize);

/// One visibility detector per page section.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    support: ObserverSupport,
    sections: Vec<(String, VisibilityDetector)>,
    by_name: HashMap<String, SectionId>,
}

impl SectionRegistry {
    /// A registry for a host with the given observation support.
    pub fn new(support: ObserverSupport) -> Self {
        Self {
            support,
            sections: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Subscribe a section. Registering a name twice returns the existing
    /// handle and leaves its latch untouched.
    pub fn register(&mut self, name: impl Into<String>, options: VisibilityOptions) -> SectionId {
        let name = name.into();
        if let Some(&id) = self.by_name.get(&name) {
            return id;
        }
        let id = SectionId(self.sections.len());
        self.by_name.insert(name.clone(), id);
        self.sections
            .push((name, VisibilityDetector::with_support(options, self.support)));
        id
    }

    /// Look up a section by name.
    pub fn find(&self, name: &str) -> Option<SectionId> {
        self.by_name.get(name).copied()
    }

    /// The name a section was registered under.
    pub fn name(&self, id: SectionId) -> Option<&str> {
        self.sections.get(id.0).map(|(n, _)| n.as_str())
    }

    /// Feed one section's layout sample. Unknown ids read as not visible.
    pub fn observe(&mut self, id: SectionId, element: Rect, viewport: Viewport) -> bool {
        let Some((name, detector)) = self.sections.get_mut(id.0) else {
            return false;
        };
        let was_visible = detector.is_visible();
        let visible = detector.observe(element, viewport);
        if visible && !was_visible {
            tracing::debug!(section = %name, "section revealed");
        }
        visible
    }

    /// Feed a frame: `measure` returns each section's bounding box, or `None`
    /// if it is not mounted. Returns the ids that latched during this frame.
    pub fn observe_all<F>(&mut self, viewport: Viewport, mut measure: F) -> Vec<SectionId>
    where
        F: FnMut(SectionId, &str) -> Option<Rect>,
    {
        let mut revealed = Vec::new();
        for i in 0..self.sections.len() {
            let id = SectionId(i);
            if self.sections[i].1.is_visible() {
                continue;
            }
            let Some(rect) = measure(id, &self.sections[i].0) else {
                continue;
            };
            if self.observe(id, rect, viewport) {
                revealed.push(id);
            }
        }
        revealed
    }

    /// The live boolean signal for a section.
    pub fn is_visible(&self, id: SectionId) -> bool {
        self.signal(id).is_some_and(VisibilityLatch::is_visible)
    }

    /// The latch for a section, if registered.
    pub fn signal(&self, id: SectionId) -> Option<VisibilityLatch> {
        self.sections.get(id.0).map(|(_, d)| d.latch())
    }

    /// Number of registered sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
