//! Property tests for the flow pipeline.

use pf_core::{LiquidId, Rotation, Tolerances, nearly_equal};
use pf_parts::{
    InletSettings, KettleSettings, PartCatalog, PartKind, PartSettings, PersistentPart,
    PumpSettings, StatePart,
};
use pf_solver::{FlowPart, build_flow_parts, solve, superpose};
use proptest::prelude::*;

fn water() -> LiquidId {
    LiquidId::new("#4AA0EF")
}

fn beer() -> LiquidId {
    LiquidId::new("#E1AC00")
}

fn part(
    id: &str,
    kind: PartKind,
    x: i32,
    y: i32,
    rotation: Rotation,
    settings: PartSettings,
) -> StatePart {
    StatePart::new(PersistentPart {
        id: id.into(),
        kind,
        x,
        y,
        rotation,
        flipped: false,
        settings,
    })
}

fn inlet(id: &str, x: i32, y: i32, rotation: Rotation, enabled: bool, pressure: f64, liquid: LiquidId) -> StatePart {
    part(
        id,
        PartKind::Inlet,
        x,
        y,
        rotation,
        PartSettings::Inlet(InletSettings {
            enabled,
            pressure,
            liquids: vec![liquid],
        }),
    )
}

/// Straight run of `tubes` unit-friction tubes between a source and a
/// drain.
fn chain(tubes: usize, source_pressure: f64, source_enabled: bool, drain_enabled: bool, drain_pressure: f64) -> Vec<StatePart> {
    let mut parts = vec![inlet("in-a", 1, 2, Rotation::R0, source_enabled, source_pressure, water())];
    for i in 0..tubes {
        parts.push(part(
            &format!("t{i}"),
            PartKind::StraightTube,
            2 + i as i32,
            2,
            Rotation::R0,
            PartSettings::None,
        ));
    }
    parts.push(inlet(
        "in-b",
        2 + tubes as i32,
        2,
        Rotation::R180,
        drain_enabled,
        drain_pressure,
        beer(),
    ));
    parts
}

fn tol() -> Tolerances {
    Tolerances {
        abs: 1e-9,
        rel: 1e-9,
    }
}

proptest! {
    /// Along a single-source chain every part carries |flow| = p/f at both
    /// of its edges with opposite signs, and each part's signed
    /// contributions sum to zero.
    #[test]
    fn conservation_on_chains(tubes in 0_usize..5, pressure in 0.5_f64..50.0) {
        let registry = PartCatalog::builtin();
        let parts = chain(tubes, pressure, true, false, 0.0);
        let solved = solve(&parts, &registry).unwrap();

        let friction = tubes as f64 + 2.0;
        let magnitude = pressure / friction;
        let w = water();

        for flow_part in &solved {
            let mut signed_sum = 0.0;
            for liquid_flows in flow_part.flows.values() {
                let flow = liquid_flows[&w];
                prop_assert!(
                    nearly_equal(flow.abs(), magnitude, tol()),
                    "part {} carries {flow}, expected |{magnitude}|",
                    flow_part.part.id()
                );
                signed_sum += flow;
            }
            prop_assert_eq!(flow_part.flows.len(), 2);
            prop_assert!(nearly_equal(signed_sum, 0.0, tol()));
        }
    }

    /// Two independent sources superpose additively: the combined run
    /// equals the per-coordinate sum of each source running alone.
    #[test]
    fn superposition_is_additive(tubes in 0_usize..4, pa in 0.5_f64..30.0, pb in 0.5_f64..30.0) {
        let registry = PartCatalog::builtin();
        let run = |a_on: bool, b_on: bool| -> Vec<FlowPart> {
            let parts = chain(tubes, pa, a_on, b_on, pb);
            superpose(build_flow_parts(&parts, &registry).unwrap())
        };

        let combined = run(true, true);
        let only_a = run(true, false);
        let only_b = run(false, true);

        for (part_idx, flow_part) in combined.iter().enumerate() {
            for (coord, liquid_flows) in &flow_part.flows {
                for (liquid, flow) in liquid_flows {
                    let a = only_a[part_idx]
                        .flows
                        .get(coord)
                        .and_then(|f| f.get(liquid))
                        .copied()
                        .unwrap_or(0.0);
                    let b = only_b[part_idx]
                        .flows
                        .get(coord)
                        .and_then(|f| f.get(liquid))
                        .copied()
                        .unwrap_or(0.0);
                    prop_assert!(
                        nearly_equal(*flow, a + b, tol()),
                        "at {coord}/{liquid}: combined {flow} vs {a} + {b}"
                    );
                }
            }
        }
    }

    /// The reserved acceleration liquid never appears in reconciled
    /// output, whatever the pump does.
    #[test]
    fn acceleration_never_leaks(
        source_pressure in 0.5_f64..40.0,
        pump_pressure in 0.0_f64..40.0,
        pump_on in any::<bool>(),
    ) {
        let registry = PartCatalog::builtin();
        let parts = vec![
            inlet("in", 3, 2, Rotation::R180, true, source_pressure, water()),
            part(
                "pump",
                PartKind::Pump,
                2,
                2,
                Rotation::R0,
                PartSettings::Pump(PumpSettings { enabled: pump_on, pressure: pump_pressure }),
            ),
            part("out", PartKind::Inlet, 1, 2, Rotation::R0, PartSettings::None),
        ];
        let solved = solve(&parts, &registry).unwrap();
        for flow_part in &solved {
            for liquid_flows in flow_part.flows.values() {
                prop_assert!(liquid_flows.keys().all(|l| !l.is_accelerate()));
            }
        }
    }

    /// The two axes of a bridge crossing never exchange liquid.
    #[test]
    fn bridge_axes_do_not_mix(ph in 0.5_f64..40.0, pv in 0.5_f64..40.0) {
        let registry = PartCatalog::builtin();
        let parts = vec![
            inlet("in-h", 1, 1, Rotation::R0, true, ph, water()),
            part("bridge", PartKind::BridgeTube, 2, 1, Rotation::R0, PartSettings::None),
            part("out-h", PartKind::Inlet, 3, 1, Rotation::R180, PartSettings::None),
            inlet("in-v", 2, 0, Rotation::R90, true, pv, beer()),
            part("out-v", PartKind::Inlet, 2, 2, Rotation::R270, PartSettings::None),
        ];
        let solved = solve(&parts, &registry).unwrap();
        let (w, b) = (water(), beer());

        for flow_part in &solved {
            let id = flow_part.part.id().as_str();
            for (coord, liquid_flows) in &flow_part.flows {
                match id {
                    "in-h" | "out-h" => prop_assert!(
                        !liquid_flows.contains_key(&b),
                        "beer crossed into the horizontal run at {coord}"
                    ),
                    "in-v" | "out-v" => prop_assert!(
                        !liquid_flows.contains_key(&w),
                        "water crossed into the vertical run at {coord}"
                    ),
                    _ => {}
                }
            }
        }

        // both runs flow at their own p/3
        let horizontal = solved.iter().find(|p| p.part.id().as_str() == "in-h").unwrap();
        let flow = horizontal.flows.values().flat_map(|f| f.values()).map(|v| v.abs()).fold(0.0_f64, f64::max);
        prop_assert!(nearly_equal(flow, ph / 3.0, tol()));
    }

    /// Solving twice is byte-for-byte identical: the pipeline owns no
    /// hidden state.
    #[test]
    fn solve_is_pure(pressure in 0.5_f64..40.0, tubes in 0_usize..4) {
        let registry = PartCatalog::builtin();
        let parts = chain(tubes, pressure, true, false, 0.0);
        let first = solve(&parts, &registry).unwrap();
        let second = solve(&parts, &registry).unwrap();
        prop_assert_eq!(first, second);
    }
}

/// The kettle loop keeps conserving flow for arbitrary pump pressures.
#[test]
fn kettle_loop_conserves_for_any_pressure() {
    let registry = PartCatalog::builtin();
    for pump_pressure in [0.0, 2.5, 10.0, 33.0] {
        let parts = vec![
            part(
                "kettle",
                PartKind::Kettle,
                1,
                1,
                Rotation::R0,
                PartSettings::Kettle(KettleSettings {
                    liquid: Some(LiquidId::new("#ff0000")),
                    width: 2,
                    height: 3,
                }),
            ),
            part("dip-a", PartKind::DipTube, 2, 1, Rotation::R0, PartSettings::None),
            part("ne", PartKind::ElbowTube, 3, 1, Rotation::R180, PartSettings::None),
            part(
                "pump",
                PartKind::Pump,
                3,
                2,
                Rotation::R90,
                PartSettings::Pump(PumpSettings {
                    enabled: true,
                    pressure: pump_pressure,
                }),
            ),
            part("se", PartKind::ElbowTube, 3, 3, Rotation::R270, PartSettings::None),
            part("dip-b", PartKind::DipTube, 2, 3, Rotation::R0, PartSettings::None),
        ];
        let solved = solve(&parts, &registry).unwrap();
        let expected = pump_pressure / 5.0;
        for flow_part in &solved {
            let mut signed = 0.0;
            for liquid_flows in flow_part.flows.values() {
                for (liquid, flow) in liquid_flows {
                    assert!(!liquid.is_accelerate());
                    assert!(
                        nearly_equal(flow.abs(), expected, tol())
                            || nearly_equal(*flow, 0.0, tol()),
                        "unexpected flow {flow} at part {}",
                        flow_part.part.id()
                    );
                    signed += flow;
                }
            }
            assert!(nearly_equal(signed, 0.0, tol()));
        }
    }
}
