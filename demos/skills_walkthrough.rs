//! # Skills section walkthrough
//!
//! Drives the reference catalog through a visitor session: scrolling the page
//! until the Skills section latches visible, printing the staggered card
//! transitions, sweeping the pointer across chips, then tabbing through them
//! with the keyboard. Run with:
//!
//! ```bash
//! RUST_LOG=debug cargo run --example skills_walkthrough --features std
//! ```

use skillmap_core::geometry::{Point, Rect, Viewport};
use skillmap_core::progress::{ScrollProgress, SpringConfig};
use skillmap_core::reference;
use skillmap_core::reveal::{reveal, MotionPreference, RevealConfig};
use skillmap_core::tooltip::{TooltipContent, TooltipDescriptor, TooltipEngine, TooltipEvent};
use skillmap_core::visibility::{ObserverSupport, SectionRegistry, VisibilityOptions};

// ── Layout ───────────────────────────────────────────────────────────────────

const VIEWPORT: Viewport = Viewport::new(1440.0, 900.0);
const DOCUMENT_HEIGHT: f32 = 5200.0;

const SECTIONS: [(&str, f32, f32); 5] = [
    ("hero", 0.0, 900.0),
    ("about", 900.0, 800.0),
    ("skills", 1700.0, 900.0),
    ("projects", 2600.0, 1400.0),
    ("contact", 4000.0, 1200.0),
];

/// Chip bounding box on the three-card grid, relative to the viewport when the
/// Skills section's top sits at `section_top`.
fn chip_bounds(card: usize, row: usize, section_top: f32) -> Rect {
    Rect::new(120.0 + card as f32 * 420.0, section_top + 220.0 + row as f32 * 44.0, 360.0, 32.0)
}

fn print_descriptor(d: &TooltipDescriptor<'_>) {
    println!("  ┌ {} @ ({:.0}, {:.0})", d.label, d.left, d.top);
    match d.content {
        TooltipContent::Evidence(records) => {
            for r in records {
                println!("  │ • {} — {}", r.title, r.proof);
                println!("  │   {}", r.link);
            }
        }
        other => println!("  │ {}", other.text().unwrap_or_default()),
    }
    println!("  └");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let catalog = reference::shared();

    println!("\n══ Scroll ══════════════════════════════════════════════════════");
    let mut registry = SectionRegistry::new(ObserverSupport::Available);
    for (name, _, _) in SECTIONS {
        registry.register(name, VisibilityOptions::default());
    }
    let skills = registry.find("skills").expect("registered above");
    let mut bar = ScrollProgress::new(SpringConfig::default());

    for scroll_y in [0.0_f32, 600.0, 1100.0, 1500.0] {
        let revealed = registry.observe_all(VIEWPORT, |_, name| {
            SECTIONS
                .iter()
                .find(|(n, _, _)| *n == name)
                .map(|&(_, top, h)| Rect::new(0.0, top - scroll_y, VIEWPORT.width, h))
        });
        bar.set_target(scroll_y, DOCUMENT_HEIGHT, VIEWPORT.height);
        for _ in 0..6 {
            bar.step(1.0 / 60.0);
        }
        println!(
            "scroll {:>5.0}px  progress {:.3} (target {:.3})  newly visible: {:?}",
            scroll_y,
            bar.scale_x(),
            bar.target(),
            revealed
        );
    }

    println!("\n══ Reveal ══════════════════════════════════════════════════════");
    let visible = registry.is_visible(skills);
    for (card_index, category) in catalog.chips().categories().iter().enumerate() {
        let card = reveal(visible, card_index as u32, &RevealConfig::skill_card(), MotionPreference::Full);
        println!("{:<30} {}", category.title, card.to_inline_style());
        let items = RevealConfig::skill_item(card_index as u32);
        for (i, id) in category.chips.iter().enumerate() {
            let t = reveal(visible, i as u32, &items, MotionPreference::Full);
            let label = &catalog.chip(*id).expect("category chips exist").label;
            println!("    +{:>4}ms  {}", t.delay_ms, label);
        }
    }

    let section_top = 1700.0 - 1500.0;

    println!("\n══ Pointer sweep ═══════════════════════════════════════════════");
    let mut engine = TooltipEngine::new();
    for (card_index, category) in catalog.chips().categories().iter().enumerate() {
        for (row, &chip) in category.chips.iter().enumerate().take(2) {
            let b = chip_bounds(card_index, row, section_top);
            engine.handle(TooltipEvent::PointerEnter { chip, at: Point::new(b.x + 20.0, b.y + 10.0) }, catalog.chips());
            engine.handle(TooltipEvent::PointerMove { chip, at: Point::new(b.x + 60.0, b.y + 12.0) }, catalog.chips());
            if let Some(d) = engine.descriptor(catalog) {
                print_descriptor(&d);
            }
        }
    }
    if let Some(chip) = engine.state().active_chip() {
        engine.handle(TooltipEvent::PointerLeave { chip }, catalog.chips());
    }
    println!("after leaving: {}", engine.state());

    println!("\n══ Keyboard ════════════════════════════════════════════════════");
    let mut previous = None;
    for (card_index, category) in catalog.chips().categories().iter().enumerate() {
        for (row, &chip) in category.chips.iter().enumerate() {
            if let Some(prev) = previous.replace(chip) {
                engine.handle(TooltipEvent::Blur { chip: prev }, catalog.chips());
            }
            let bounds = chip_bounds(card_index, row, section_top);
            engine.handle(TooltipEvent::Focus { chip, bounds }, catalog.chips());
            if let Some(d) = engine.descriptor(catalog) {
                if !matches!(d.content, TooltipContent::Evidence(_)) {
                    print_descriptor(&d);
                }
            }
        }
    }
    if let Some(prev) = previous {
        engine.handle(TooltipEvent::Blur { chip: prev }, catalog.chips());
    }
    println!("after tabbing out: {}", engine.state());
}
