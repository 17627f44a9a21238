//! Integration tests for viewport-triggered reveals: the visibility latch
//! driving staggered transitions across a simulated page scroll.

use skillmap_core::geometry::{Rect, Viewport};
use skillmap_core::reveal::{reveal, MotionPreference, RevealConfig};
use skillmap_core::visibility::{
    ObserverSupport, SectionId, SectionRegistry, VisibilityLatch, VisibilityOptions,
};

// ─── helpers ─────────────────────────────────────────────────────────────────

const VIEWPORT: Viewport = Viewport::new(1440.0, 900.0);

/// Page layout: (section, document top, height).
const PAGE: [(&str, f32, f32); 4] = [
    ("about", 0.0, 900.0),
    ("skills", 900.0, 900.0),
    ("projects", 1800.0, 1200.0),
    ("contact", 3000.0, 700.0),
];

fn register_page(support: ObserverSupport) -> (SectionRegistry, Vec<SectionId>) {
    let mut registry = SectionRegistry::new(support);
    let ids: Vec<SectionId> = PAGE
        .iter()
        .map(|(name, _, _)| registry.register(*name, VisibilityOptions::default()))
        .collect();
    (registry, ids)
}

fn scroll_to(registry: &mut SectionRegistry, scroll_y: f32) -> Vec<SectionId> {
    registry.observe_all(VIEWPORT, |_, name| {
        PAGE.iter()
            .find(|(n, _, _)| *n == name)
            .map(|&(_, top, height)| Rect::new(0.0, top - scroll_y, VIEWPORT.width, height))
    })
}

// ─── latch ───────────────────────────────────────────────────────────────────

#[test]
fn test_visibility_is_monotonic_across_scroll_back() {
    let (mut registry, ids) = register_page(ObserverSupport::Available);
    let skills = ids[1];

    let mut history = Vec::new();
    for scroll_y in [0.0, 400.0, 900.0, 0.0, 2500.0, 0.0] {
        scroll_to(&mut registry, scroll_y);
        history.push(registry.signal(skills).unwrap());
    }

    assert_eq!(history[0], VisibilityLatch::NotTriggered, "skills starts below the fold");
    let first = history
        .iter()
        .position(|l| *l == VisibilityLatch::Triggered)
        .expect("skills triggers once scrolled to");
    assert!(
        history[first..].iter().all(|l| *l == VisibilityLatch::Triggered),
        "latch must never revert: {:?}",
        history
    );
}

#[test]
fn test_each_section_reveals_once() {
    let (mut registry, ids) = register_page(ObserverSupport::Available);
    let mut reveals = Vec::new();
    for scroll_y in (0..=30).map(|i| i as f32 * 100.0).chain([0.0, 1500.0]) {
        reveals.extend(scroll_to(&mut registry, scroll_y));
    }
    assert_eq!(reveals, ids, "every section reported exactly once, in page order");
}

#[test]
fn test_headless_host_fails_open() {
    let (registry, ids) = register_page(ObserverSupport::Unavailable);
    for id in ids {
        assert!(registry.is_visible(id));
        let d = reveal(registry.is_visible(id), 0, &RevealConfig::default(), MotionPreference::Full);
        assert_eq!(d.opacity, 1.0, "content must never stay hidden");
    }
}

// ─── reveal driven by the latch ──────────────────────────────────────────────

#[test]
fn test_skill_cards_stagger_after_section_latches() {
    let (mut registry, ids) = register_page(ObserverSupport::Available);
    let skills = ids[1];

    let before: Vec<_> = (0..3)
        .map(|i| reveal(registry.is_visible(skills), i, &RevealConfig::skill_card(), MotionPreference::Full))
        .collect();
    assert!(before.iter().all(|d| d.opacity == 0.0));

    scroll_to(&mut registry, 600.0);
    assert!(registry.is_visible(skills));

    let after: Vec<u32> = (0..3)
        .map(|i| reveal(registry.is_visible(skills), i, &RevealConfig::skill_card(), MotionPreference::Full))
        .map(|d| d.delay_ms)
        .collect();
    assert_eq!(after, [0, 120, 240]);
}

#[test]
fn test_skill_items_follow_their_card() {
    let delays: Vec<Vec<u32>> = (0..3)
        .map(|card| {
            (0..4)
                .map(|item| {
                    reveal(true, item, &RevealConfig::skill_item(card), MotionPreference::Full)
                        .delay_ms
                })
                .collect()
        })
        .collect();
    assert_eq!(delays[0], [0, 60, 120, 180]);
    assert_eq!(delays[1], [120, 180, 240, 300]);
    assert_eq!(delays[2], [240, 300, 360, 420]);
}

#[test]
fn test_reveal_is_deterministic() {
    let cfg = RevealConfig::project_item();
    for index in 0..6 {
        for visible in [false, true] {
            assert_eq!(
                reveal(visible, index, &cfg, MotionPreference::Full),
                reveal(visible, index, &cfg, MotionPreference::Full)
            );
        }
    }
}
