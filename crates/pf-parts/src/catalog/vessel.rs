//! Vessels: the kettle and the dip tube that reaches into it.

use indexmap::IndexMap;
use pf_geom::Coordinate;

use crate::catalog::settings_mismatch;
use crate::edge::{CENTER, IO_ANCHOR, RIGHT, cell_center};
use crate::error::PartResult;
use crate::part::StatePart;
use crate::route::{FlowRoute, Transitions};
use crate::settings::{KettleSettings, PartSettings};
use crate::spec::PartSpec;

/// Open vessel spanning several grid cells.
///
/// The held liquid is exposed at every cell center, and every center
/// connects to every other at zero friction, so a trace may pass through
/// the vessel between any two dip points without re-entering the kettle
/// through the edge it just left. The boundary anchor closes the loop for
/// traces that start or end in the vessel; only the first anchor route
/// carries the source marker so the vessel is traced exactly once.
pub struct Kettle;

impl Kettle {
    fn settings(part: &StatePart) -> PartResult<KettleSettings> {
        match &part.part.settings {
            PartSettings::Kettle(s) => Ok(s.clone()),
            PartSettings::None => Ok(KettleSettings::default()),
            _ => Err(settings_mismatch(part)),
        }
    }
}

impl PartSpec for Kettle {
    fn size(&self, part: &StatePart) -> PartResult<(u32, u32)> {
        let settings = Self::settings(part)?;
        Ok((settings.width, settings.height))
    }

    fn blocked_coordinates(&self, part: &StatePart) -> PartResult<Vec<Coordinate>> {
        let (w, h) = self.size(part)?;
        let mut blocked = Vec::with_capacity((w * h) as usize);
        for row in 0..h {
            for col in 0..w {
                blocked.push(Coordinate::from_millis(col as i32 * 1000, row as i32 * 1000, 0));
            }
        }
        Ok(blocked)
    }

    fn transitions(&self, part: &StatePart) -> PartResult<Transitions> {
        let settings = Self::settings(part)?;
        let liquids = settings.liquid.clone().into_iter().collect::<Vec<_>>();
        let centers: Vec<Coordinate> = (0..settings.height)
            .flat_map(|row| (0..settings.width).map(move |col| cell_center(col, row)))
            .collect();

        let mut transitions = Transitions::new();
        transitions.insert(
            IO_ANCHOR,
            centers
                .iter()
                .enumerate()
                .map(|(i, center)| {
                    let route = FlowRoute::to(*center).with_friction(0.0);
                    if i == 0 {
                        route.with_pressure(0.0).with_liquids(liquids.clone())
                    } else {
                        route
                    }
                })
                .collect(),
        );
        for center in &centers {
            let mut routes = vec![FlowRoute::to(IO_ANCHOR).with_friction(0.0)];
            routes.extend(
                centers
                    .iter()
                    .filter(|other| *other != center)
                    .map(|other| FlowRoute::to(*other).with_friction(0.0)),
            );
            transitions.insert(*center, routes);
        }
        Ok(transitions)
    }
}

/// Tube dipping into a vessel cell: connects the cell's liquid surface to
/// the part's right edge.
pub struct DipTube;

impl PartSpec for DipTube {
    fn transitions(&self, _part: &StatePart) -> PartResult<Transitions> {
        Ok(IndexMap::from([
            (CENTER, vec![FlowRoute::to(RIGHT)]),
            (RIGHT, vec![FlowRoute::to(CENTER)]),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::LiquidId;

    use crate::part::{PartKind, PersistentPart};

    fn kettle(settings: KettleSettings) -> StatePart {
        StatePart::new(PersistentPart {
            id: "k".into(),
            kind: PartKind::Kettle,
            x: 0,
            y: 0,
            rotation: Default::default(),
            flipped: false,
            settings: PartSettings::Kettle(settings),
        })
    }

    fn small_red_kettle() -> StatePart {
        kettle(KettleSettings {
            liquid: Some(LiquidId::new("#ff0000")),
            width: 2,
            height: 3,
        })
    }

    #[test]
    fn size_follows_settings() {
        assert_eq!(Kettle.size(&small_red_kettle()).unwrap(), (2, 3));
    }

    #[test]
    fn blocks_every_cell() {
        assert_eq!(Kettle.blocked_coordinates(&small_red_kettle()).unwrap().len(), 6);
    }

    #[test]
    fn anchor_reaches_every_cell_and_sources_once() {
        let t = Kettle.transitions(&small_red_kettle()).unwrap();
        let anchor_routes = &t[&IO_ANCHOR];
        assert_eq!(anchor_routes.len(), 6);
        let sources: Vec<_> = anchor_routes.iter().filter(|r| r.is_source()).collect();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].pressure, Some(0.0));
        assert_eq!(sources[0].liquids, vec![LiquidId::new("#ff0000")]);
    }

    #[test]
    fn cells_mesh_at_zero_friction() {
        let t = Kettle.transitions(&small_red_kettle()).unwrap();
        let routes = &t[&cell_center(1, 2)];
        // back to the anchor plus every other cell
        assert_eq!(routes.len(), 6);
        assert!(routes.iter().all(|r| r.friction == Some(0.0)));
        assert_eq!(routes[0].out, IO_ANCHOR);
    }

    #[test]
    fn empty_kettle_sources_nothing() {
        let t = Kettle
            .transitions(&kettle(KettleSettings {
                liquid: None,
                width: 2,
                height: 2,
            }))
            .unwrap();
        assert!(t[&IO_ANCHOR].iter().all(|r| !r.is_source()));
    }
}
