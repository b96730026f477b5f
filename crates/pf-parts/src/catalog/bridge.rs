//! Bridge crossing: two pass-throughs sharing one cell without connecting.

use indexmap::IndexMap;

use crate::edge::{DOWN, LEFT, RIGHT, UP};
use crate::error::PartResult;
use crate::part::StatePart;
use crate::route::{FlowRoute, Transitions};
use crate::spec::PartSpec;

/// Left-right and up-down tubes crossing in one cell. The two axes are
/// independent: liquid on one never enters the other.
pub struct BridgeTube;

impl PartSpec for BridgeTube {
    fn transitions(&self, _part: &StatePart) -> PartResult<Transitions> {
        Ok(IndexMap::from([
            (LEFT, vec![FlowRoute::to(RIGHT)]),
            (RIGHT, vec![FlowRoute::to(LEFT)]),
            (UP, vec![FlowRoute::to(DOWN)]),
            (DOWN, vec![FlowRoute::to(UP)]),
        ]))
    }
}
