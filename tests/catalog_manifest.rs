//! Catalog manifest integration tests.
//!
//! Run with: `cargo test --features serde`
//!
//! Verifies that the reference catalog survives a trip through JSON with its
//! display order intact, that hand-written JSON manifests load through the
//! same validation as the builder, and that tooltip descriptors serialize in
//! the shape a wasm host consumes.

#![cfg(feature = "serde")]

use skillmap_core::catalog::EvidenceSource;
use skillmap_core::chips::{ChipId, ChipKind};
use skillmap_core::error::CatalogError;
use skillmap_core::geometry::Point;
use skillmap_core::manifest::{CatalogManifest, MANIFEST_VERSION};
use skillmap_core::reference;
use skillmap_core::tooltip::{TooltipEngine, TooltipEvent, TooltipState};
use skillmap_core::visibility::{ObserverSupport, SectionId, SectionRegistry, VisibilityOptions};

// ─── helpers ─────────────────────────────────────────────────────────────────

fn reference_json() -> String {
    let catalog = reference::catalog().expect("reference catalog builds");
    serde_json::to_string_pretty(&CatalogManifest::from_catalog(&catalog)).expect("serializes")
}

const HAND_WRITTEN: &str = r#"{
    "version": 1,
    "groups": [
        { "key": "SOAR & Automation Workflows", "evidence": [
            { "title": "Wazuh+TheHive+Shuffle", "link": "https://example.com/a", "proof": "Automated triage..." },
            { "title": "SOAR-EDR...", "link": "https://example.com/b", "proof": "Host isolation..." }
        ] }
    ],
    "categories": [
        { "title": "Core", "chips": [
            { "label": "SOAR & Automation Workflows", "kind": "Core", "group_key": "SOAR & Automation Workflows" }
        ] },
        { "title": "Frameworks", "chips": [
            { "label": "MITRE ATT&CK", "kind": "Framework" }
        ] }
    ],
    "framework_notes": [
        { "label": "MITRE ATT&CK", "note": "Used to design & validate detections across adversary TTPs." }
    ]
}"#;

// ─── tests ───────────────────────────────────────────────────────────────────

#[test]
fn test_reference_manifest_round_trip_preserves_order() {
    let original = reference::catalog().unwrap();
    let manifest: CatalogManifest = serde_json::from_str(&reference_json()).unwrap();
    assert_eq!(manifest.version, MANIFEST_VERSION);

    let restored = manifest.into_catalog().expect("valid manifest");
    let labels = |c: &skillmap_core::SkillCatalog| -> Vec<String> {
        c.chips().iter().map(|(_, chip)| chip.label.clone()).collect()
    };
    assert_eq!(labels(&original), labels(&restored));

    for (key, records) in original.evidence().iter() {
        assert_eq!(restored.lookup_evidence(key), records, "group {:?}", key);
    }
    for (label, note) in original.notes().iter() {
        assert_eq!(restored.lookup_framework_note(label), Some(note));
    }
}

#[test]
fn test_hand_written_manifest_loads() {
    let manifest: CatalogManifest = serde_json::from_str(HAND_WRITTEN).unwrap();
    let catalog = manifest.into_catalog().unwrap();

    let mitre = catalog.chip_by_label("MITRE ATT&CK").unwrap();
    let chip = catalog.chip(mitre).unwrap();
    assert_eq!(chip.kind, ChipKind::Framework);
    assert_eq!(chip.group_key, None, "missing group_key defaults to None");
    assert_eq!(catalog.lookup_evidence("SOAR & Automation Workflows").len(), 2);
}

#[test]
fn test_manifest_with_empty_group_is_rejected() {
    let json = r#"{ "version": 1,
        "groups": [ { "key": "empty", "evidence": [] } ],
        "categories": [] }"#;
    let manifest: CatalogManifest = serde_json::from_str(json).unwrap();
    assert!(manifest.framework_notes.is_empty(), "framework_notes defaults to empty");
    assert_eq!(
        manifest.into_catalog().unwrap_err(),
        CatalogError::EmptyGroup("empty".into())
    );
}

#[test]
fn test_descriptor_serializes_for_host() {
    let manifest: CatalogManifest = serde_json::from_str(HAND_WRITTEN).unwrap();
    let catalog = manifest.into_catalog().unwrap();
    let mut engine = TooltipEngine::new();

    engine.handle(
        TooltipEvent::PointerEnter { chip: ChipId(1), at: Point::new(100.0, 100.0) },
        catalog.chips(),
    );
    let d = engine.descriptor(&catalog).unwrap();
    let value = serde_json::to_value(d).unwrap();
    assert_eq!(value["label"], "MITRE ATT&CK");
    assert_eq!(value["kind"], "Framework");
    assert_eq!(value["content"]["type"], "framework_note");
    assert_eq!(
        value["content"]["value"],
        "Used to design & validate detections across adversary TTPs."
    );

    engine.handle(
        TooltipEvent::PointerEnter { chip: ChipId(0), at: Point::new(100.0, 100.0) },
        catalog.chips(),
    );
    let value = serde_json::to_value(engine.descriptor(&catalog).unwrap()).unwrap();
    assert_eq!(value["content"]["type"], "evidence");
    assert_eq!(value["content"]["value"][1]["title"], "SOAR-EDR...");
}

#[test]
fn test_host_events_deserialize_from_json() {
    let catalog = reference::catalog().unwrap();
    let events: Vec<TooltipEvent> = serde_json::from_str(
        r#"[
            { "PointerEnter": { "chip": 2, "at": { "x": 40.0, "y": 60.0 } } },
            { "Focus": { "chip": 7, "bounds": { "x": 10.0, "y": 20.0, "width": 100.0, "height": 30.0 } } },
            { "Blur": { "chip": 7 } }
        ]"#,
    )
    .unwrap();
    assert_eq!(events[2], TooltipEvent::Blur { chip: ChipId(7) });

    let mut engine = TooltipEngine::new();
    engine.handle(events[0], catalog.chips());
    assert_eq!(engine.state().active_chip(), Some(ChipId(2)));
    engine.handle(events[1], catalog.chips());
    assert_eq!(engine.state().active_chip(), Some(ChipId(7)));
    assert!(engine.handle(events[2], catalog.chips()).is_idle());
}

#[test]
fn test_tooltip_state_and_events_round_trip() {
    let states = [
        TooltipState::Idle,
        TooltipState::Active { chip: ChipId(3), position: Point::new(12.5, 80.0) },
    ];
    for state in states {
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<TooltipState>(&json).unwrap(), state, "{}", json);
    }

    let blur: TooltipEvent = serde_json::from_str(r#"{"Blur":{"chip":0}}"#).unwrap();
    assert_eq!(blur, TooltipEvent::Blur { chip: ChipId(0) });
    let leave = TooltipEvent::PointerLeave { chip: ChipId(4) };
    let json = serde_json::to_string(&leave).unwrap();
    assert_eq!(json, r#"{"PointerLeave":{"chip":4}}"#);
}

#[test]
fn test_section_handles_and_support_serialize() {
    let mut registry = SectionRegistry::new(ObserverSupport::Available);
    let skills = registry.register("skills", VisibilityOptions::default());
    let json = serde_json::to_string(&skills).unwrap();
    assert_eq!(serde_json::from_str::<SectionId>(&json).unwrap(), skills);

    let support: ObserverSupport = serde_json::from_str(r#""Unavailable""#).unwrap();
    assert_eq!(support, ObserverSupport::Unavailable);
}
