//! Placing parts into grid space: the flow-graph builder.

use pf_core::Rotation;
use pf_geom::Coordinate;
use pf_parts::{FlowMap, FlowRoute, PartCatalog, StatePart, Transitions};
use serde::{Deserialize, Serialize};

use crate::error::SolveResult;

/// A part with globally addressed connectivity and a signed flow
/// accumulator. This is what the pipeline stages pass between each other
/// and what the caller gets back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowPart {
    #[serde(flatten)]
    pub part: StatePart,
    pub transitions: Transitions,
    #[serde(default)]
    pub flows: FlowMap,
}

/// Convert positioned parts into flow parts by placing every local
/// transition coordinate into grid space.
///
/// The transform order is fixed: **flip** about the part's own shape,
/// then **translate** to the grid position, then **rotate** about the
/// now-global anchor. A part kind missing from the registry is a fatal
/// configuration error.
pub fn build_flow_parts(parts: &[StatePart], registry: &PartCatalog) -> SolveResult<Vec<FlowPart>> {
    parts
        .iter()
        .map(|part| {
            let spec = registry.spec(part)?;
            let size = spec.size(part)?;
            let local = spec.transitions(part)?;
            Ok(FlowPart {
                part: part.clone(),
                transitions: place_transitions(&local, part, size),
                flows: FlowMap::default(),
            })
        })
        .collect()
}

fn place(coord: Coordinate, part: &StatePart, size: (u32, u32)) -> Coordinate {
    coord
        .flip_shape_edge(part.part.flipped, Rotation::R0, size)
        .translate_units(part.part.x, part.part.y)
        .rotate_shape_edge(part.part.rotation, Rotation::R0, size, part.anchor())
}

fn place_transitions(local: &Transitions, part: &StatePart, size: (u32, u32)) -> Transitions {
    local
        .iter()
        .map(|(in_coord, routes)| {
            let placed_routes = routes
                .iter()
                .map(|route| FlowRoute {
                    out: place(route.out, part, size),
                    ..route.clone()
                })
                .collect();
            (place(*in_coord, part, size), placed_routes)
        })
        .collect()
}

/// Rewrite a part's accumulated flow keys back to part-local coordinates
/// for a renderer that draws the part unrotated and rotates the whole
/// image afterwards.
pub fn normalize_flows(part: &FlowPart, size: (u32, u32)) -> FlowMap {
    part.flows
        .iter()
        .map(|(coord, liquid_flows)| {
            let local = coord
                .translate_units(-part.part.part.x, -part.part.part.y)
                .flip_shape_edge(part.part.part.flipped, part.part.part.rotation, size);
            (local, liquid_flows.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_parts::edge::{IO_ANCHOR, LEFT, RIGHT};
    use pf_parts::{PartKind, PartSettings, PersistentPart};

    fn tube_at(x: i32, y: i32, rotation: Rotation) -> StatePart {
        StatePart::new(PersistentPart {
            id: pf_parts::PartId::new(format!("tube-{x}-{y}")),
            kind: PartKind::StraightTube,
            x,
            y,
            rotation,
            flipped: false,
            settings: PartSettings::None,
        })
    }

    #[test]
    fn translates_unrotated_parts() {
        let registry = PartCatalog::builtin();
        let placed = build_flow_parts(&[tube_at(2, 2, Rotation::R0)], &registry).unwrap();
        let transitions = &placed[0].transitions;
        assert_eq!(
            transitions.keys().map(|c| c.to_string()).collect::<Vec<_>>(),
            vec!["2,2.5,0", "3,2.5,0"]
        );
        assert_eq!(transitions[&Coordinate::new(2.0, 2.5, 0.0)][0].out.to_string(), "3,2.5,0");
    }

    #[test]
    fn rotates_about_the_anchor() {
        let registry = PartCatalog::builtin();
        let placed = build_flow_parts(&[tube_at(3, 2, Rotation::R180)], &registry).unwrap();
        let transitions = &placed[0].transitions;
        // LEFT and RIGHT swap ends under a half turn
        assert!(transitions.contains_key(&Coordinate::new(4.0, 2.5, 0.0)));
        assert!(transitions.contains_key(&Coordinate::new(3.0, 2.5, 0.0)));
        assert_eq!(
            transitions[&Coordinate::new(4.0, 2.5, 0.0)][0].out,
            Coordinate::new(3.0, 2.5, 0.0)
        );
    }

    #[test]
    fn virtual_anchors_stay_put() {
        let registry = PartCatalog::builtin();
        let inlet = StatePart::new(PersistentPart {
            id: "io".into(),
            kind: PartKind::Inlet,
            x: 7,
            y: 5,
            rotation: Rotation::R90,
            flipped: true,
            settings: PartSettings::None,
        });
        let placed = build_flow_parts(&[inlet], &registry).unwrap();
        assert!(placed[0].transitions.contains_key(&IO_ANCHOR));
    }

    #[test]
    fn unknown_kind_fails_fast() {
        let registry = PartCatalog::empty();
        assert!(build_flow_parts(&[tube_at(0, 0, Rotation::R0)], &registry).is_err());
    }

    #[test]
    fn normalize_inverts_placement_for_flows() {
        let registry = PartCatalog::builtin();
        let mut placed = build_flow_parts(&[tube_at(2, 2, Rotation::R0)], &registry).unwrap();
        placed[0]
            .flows
            .entry(Coordinate::new(2.0, 2.5, 0.0))
            .or_default()
            .insert("#4AA0EF".into(), 2.0);
        let normalized = normalize_flows(&placed[0], (1, 1));
        assert!(normalized.contains_key(&LEFT));
        assert!(!normalized.contains_key(&RIGHT));
    }
}
