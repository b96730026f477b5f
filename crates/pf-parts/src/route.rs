use indexmap::IndexMap;
use pf_core::LiquidId;
use pf_geom::Coordinate;
use serde::{Deserialize, Serialize};

/// Friction of a route that does not specify one.
pub const DEFAULT_FRICTION: f64 = 1.0;

/// One way a liquid may leave a part, given the edge it entered through.
///
/// `pressure` plus a non-empty liquid list marks a source edge: the
/// superposition driver starts a trace there. An explicit `Some(0.0)`
/// pressure is a currently unpressurized source (a disabled pump, an idle
/// vessel) and is still traced so the liquid occupying the reachable edges
/// is known; `None` means the route is not a source at all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlowRoute {
    pub out: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub liquids: Vec<LiquidId>,
}

impl FlowRoute {
    /// A plain route with default friction and no source role.
    pub fn to(out: Coordinate) -> Self {
        Self {
            out,
            friction: None,
            pressure: None,
            liquids: Vec::new(),
        }
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = Some(friction);
        self
    }

    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }

    pub fn with_liquids(mut self, liquids: Vec<LiquidId>) -> Self {
        self.liquids = liquids;
        self
    }

    pub fn friction_value(&self) -> f64 {
        self.friction.unwrap_or(DEFAULT_FRICTION)
    }

    pub fn pressure_value(&self) -> f64 {
        self.pressure.unwrap_or(0.0)
    }

    /// True when the superposition driver should trace from this route.
    pub fn is_source(&self) -> bool {
        self.pressure.is_some() && !self.liquids.is_empty()
    }
}

/// Local or global connectivity: inbound edge -> ordered outbound routes.
pub type Transitions = IndexMap<Coordinate, Vec<FlowRoute>>;

/// Signed flow per liquid.
pub type LiquidFlows = IndexMap<LiquidId, f64>;

/// Signed flow per edge coordinate per liquid.
pub type FlowMap = IndexMap<Coordinate, LiquidFlows>;
