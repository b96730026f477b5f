//! Smoke tests for the builtin catalog through the public registry API.

use pf_core::{LiquidId, Rotation};
use pf_parts::edge::{IO_ANCHOR, LEFT, RIGHT};
use pf_parts::{
    InletSettings, PartCatalog, PartKind, PartSettings, PersistentPart, PumpSettings, StatePart,
};

fn part(id: &str, kind: PartKind, settings: PartSettings) -> StatePart {
    StatePart::new(PersistentPart {
        id: id.into(),
        kind,
        x: 0,
        y: 0,
        rotation: Rotation::R0,
        flipped: false,
        settings,
    })
}

#[test]
fn every_builtin_kind_produces_transitions() {
    let registry = PartCatalog::builtin();
    for kind in [
        PartKind::StraightTube,
        PartKind::ElbowTube,
        PartKind::TeeTube,
        PartKind::CrossTube,
        PartKind::BridgeTube,
        PartKind::CheckValve,
        PartKind::Pump,
        PartKind::Inlet,
        PartKind::Kettle,
        PartKind::DipTube,
    ] {
        let transitions = registry
            .transitions(&part("p", kind, PartSettings::None))
            .unwrap();
        assert!(!transitions.is_empty(), "{kind:?} has no transitions");
    }
}

#[test]
fn default_sizes_are_single_cell_except_kettle() {
    let registry = PartCatalog::builtin();
    assert_eq!(
        registry
            .size(&part("t", PartKind::StraightTube, PartSettings::None))
            .unwrap(),
        (1, 1)
    );
    assert_eq!(
        registry
            .size(&part("k", PartKind::Kettle, PartSettings::None))
            .unwrap(),
        (4, 6)
    );
}

#[test]
fn inlet_source_route_reflects_settings() {
    let registry = PartCatalog::builtin();
    let water = LiquidId::new("#4AA0EF");
    let inlet = part(
        "in",
        PartKind::Inlet,
        PartSettings::Inlet(InletSettings {
            enabled: true,
            pressure: 14.0,
            liquids: vec![water.clone()],
        }),
    );
    let transitions = registry.transitions(&inlet).unwrap();
    let source = &transitions[&IO_ANCHOR][0];
    assert_eq!(source.out, RIGHT);
    assert_eq!(source.pressure, Some(14.0));
    assert_eq!(source.liquids, vec![water]);
}

#[test]
fn disabled_pump_still_passes_liquid() {
    let registry = PartCatalog::builtin();
    let pump = part(
        "pump",
        PartKind::Pump,
        PartSettings::Pump(PumpSettings {
            enabled: false,
            pressure: 12.0,
        }),
    );
    let transitions = registry.transitions(&pump).unwrap();
    assert_eq!(transitions[&LEFT][0].out, RIGHT);
    assert_eq!(transitions[&RIGHT][0].pressure, Some(0.0));
}

#[test]
fn layouts_round_trip_through_json() {
    let layout = vec![
        part(
            "in",
            PartKind::Inlet,
            PartSettings::Inlet(InletSettings {
                enabled: true,
                pressure: 6.0,
                liquids: vec![LiquidId::new("#DB0023")],
            }),
        ),
        part("t", PartKind::StraightTube, PartSettings::None),
    ];
    let json = serde_json::to_string_pretty(&layout).unwrap();
    let back: Vec<StatePart> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, layout);
}
