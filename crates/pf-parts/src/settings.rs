use pf_core::LiquidId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PUMP_PRESSURE: f64 = 30.0;
pub const DEFAULT_IO_PRESSURE: f64 = 30.0;

const DEFAULT_KETTLE_WIDTH: u32 = 4;
const DEFAULT_KETTLE_HEIGHT: u32 = 6;

/// Per-part configuration, as a closed tagged union.
///
/// Each configurable part family gets its own variant; plain fittings carry
/// `None`. The catalog resolves these at the specification boundary; the
/// solver itself never looks inside.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PartSettings {
    #[default]
    None,
    Inlet(InletSettings),
    Pump(PumpSettings),
    Valve(ValveSettings),
    Kettle(KettleSettings),
}

impl PartSettings {
    /// Variant name, for configuration-error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::None => "no",
            Self::Inlet(_) => "inlet",
            Self::Pump(_) => "pump",
            Self::Valve(_) => "valve",
            Self::Kettle(_) => "kettle",
        }
    }
}

/// Boundary inlet/outlet configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InletSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_io_pressure")]
    pub pressure: f64,
    /// Liquids this inlet feeds into the system. Empty means the part only
    /// accepts outflow.
    #[serde(default)]
    pub liquids: Vec<LiquidId>,
}

impl Default for InletSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            pressure: DEFAULT_IO_PRESSURE,
            liquids: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PumpSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_pump_pressure")]
    pub pressure: f64,
}

impl Default for PumpSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            pressure: DEFAULT_PUMP_PRESSURE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValveSettings {
    #[serde(default)]
    pub open: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KettleSettings {
    /// Liquid the vessel holds; `None` renders an empty vessel that
    /// sources nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquid: Option<LiquidId>,
    #[serde(default = "default_kettle_width")]
    pub width: u32,
    #[serde(default = "default_kettle_height")]
    pub height: u32,
}

impl Default for KettleSettings {
    fn default() -> Self {
        Self {
            liquid: None,
            width: DEFAULT_KETTLE_WIDTH,
            height: DEFAULT_KETTLE_HEIGHT,
        }
    }
}

fn default_io_pressure() -> f64 {
    DEFAULT_IO_PRESSURE
}

fn default_pump_pressure() -> f64 {
    DEFAULT_PUMP_PRESSURE
}

fn default_kettle_width() -> u32 {
    DEFAULT_KETTLE_WIDTH
}

fn default_kettle_height() -> u32 {
    DEFAULT_KETTLE_HEIGHT
}
