//! Plain tube fittings: straight, elbow, tee, cross.

use indexmap::IndexMap;

use crate::edge::{DOWN, LEFT, RIGHT, UP};
use crate::error::PartResult;
use crate::part::StatePart;
use crate::route::{FlowRoute, Transitions};
use crate::spec::PartSpec;

/// Left-right tube.
pub struct StraightTube;

impl PartSpec for StraightTube {
    fn transitions(&self, _part: &StatePart) -> PartResult<Transitions> {
        Ok(IndexMap::from([
            (LEFT, vec![FlowRoute::to(RIGHT)]),
            (RIGHT, vec![FlowRoute::to(LEFT)]),
        ]))
    }
}

/// Quarter bend connecting the top and right edges.
pub struct ElbowTube;

impl PartSpec for ElbowTube {
    fn transitions(&self, _part: &StatePart) -> PartResult<Transitions> {
        Ok(IndexMap::from([
            (UP, vec![FlowRoute::to(RIGHT)]),
            (RIGHT, vec![FlowRoute::to(UP)]),
        ]))
    }
}

/// T-junction with openings up, left, and right; each inbound edge routes
/// to the other two.
pub struct TeeTube;

impl PartSpec for TeeTube {
    fn transitions(&self, _part: &StatePart) -> PartResult<Transitions> {
        Ok(IndexMap::from([
            (UP, vec![FlowRoute::to(LEFT), FlowRoute::to(RIGHT)]),
            (LEFT, vec![FlowRoute::to(UP), FlowRoute::to(RIGHT)]),
            (RIGHT, vec![FlowRoute::to(UP), FlowRoute::to(LEFT)]),
        ]))
    }
}

/// Four-way junction; each inbound edge routes to the other three.
pub struct CrossTube;

impl PartSpec for CrossTube {
    fn transitions(&self, _part: &StatePart) -> PartResult<Transitions> {
        let openings = [UP, RIGHT, DOWN, LEFT];
        Ok(openings
            .iter()
            .map(|edge| {
                let routes = openings
                    .iter()
                    .copied()
                    .filter(|other| other != edge)
                    .map(FlowRoute::to)
                    .collect();
                (*edge, routes)
            })
            .collect())
    }
}
