use core::fmt;

use pf_core::Rotation;
use pf_geom::Coordinate;
use serde::{Deserialize, Serialize};

use crate::settings::PartSettings;

/// Stable identifier of a part within a layout. Owned by the caller.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(String);

impl PartId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PartId({})", self.0)
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PartId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// The builtin part kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartKind {
    StraightTube,
    ElbowTube,
    TeeTube,
    CrossTube,
    BridgeTube,
    Valve,
    CheckValve,
    Pump,
    Inlet,
    Kettle,
    DipTube,
}

/// A positioned part as the caller stores it. Read-only to the solver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistentPart {
    pub id: PartId,
    pub kind: PartKind,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub flipped: bool,
    #[serde(default)]
    pub settings: PartSettings,
}

/// Runtime values supplied alongside the persisted part.
///
/// `powered` is an actuator override: when present it wins over the stored
/// enabled/open setting of pumps and valves (the surrounding application
/// drives it from linked hardware state).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powered: Option<bool>,
}

/// A persistent part plus its runtime state: the solver's input unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatePart {
    #[serde(flatten)]
    pub part: PersistentPart,
    #[serde(default)]
    pub state: PartState,
}

impl StatePart {
    pub fn new(part: PersistentPart) -> Self {
        Self {
            part,
            state: PartState::default(),
        }
    }

    pub fn with_state(part: PersistentPart, state: PartState) -> Self {
        Self { part, state }
    }

    pub fn id(&self) -> &PartId {
        &self.part.id
    }

    pub fn kind(&self) -> PartKind {
        self.part.kind
    }

    /// Grid position of the part's shape anchor.
    pub fn anchor(&self) -> Coordinate {
        Coordinate::from_millis(self.part.x * 1000, self.part.y * 1000, 0)
    }
}
