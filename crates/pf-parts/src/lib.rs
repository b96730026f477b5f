//! pf-parts: the part model and specification registry for pipeflow.
//!
//! A layout is a list of positioned parts. Each part kind has a
//! specification describing its footprint and, crucially, its local
//! connectivity: for every inbound edge, the routes a liquid may take out
//! of the part. The solver consumes only this `Transitions`/`FlowRoute`
//! contract and never inspects part settings directly.
//!
//! The builtin catalog mirrors the standard parts of the surrounding
//! application (tubes, valves, pumps, boundary inlets, vessels); callers
//! may register their own specifications instead.

pub mod catalog;
pub mod edge;
pub mod error;
pub mod part;
pub mod route;
pub mod settings;
pub mod spec;

pub use error::{PartError, PartResult};
pub use part::{PartId, PartKind, PartState, PersistentPart, StatePart};
pub use route::{DEFAULT_FRICTION, FlowMap, FlowRoute, LiquidFlows, Transitions};
pub use settings::{
    DEFAULT_IO_PRESSURE, DEFAULT_PUMP_PRESSURE, InletSettings, KettleSettings, PartSettings,
    PumpSettings, ValveSettings,
};
pub use spec::{PartCatalog, PartSpec};
