use core::fmt;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a liquid (the rendering layer uses a color code).
///
/// Two identifiers are reserved:
/// - [`LiquidId::mixed`] stands in for "several liquids" when a display
///   needs a single merged value.
/// - [`LiquidId::accelerate`] tracks a pump's pressure contribution as a
///   pseudo-liquid during superposition. Reconciliation folds it into the
///   real liquids; it never appears in solver output.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LiquidId(String);

const MIXED: &str = "<mixed>";
const ACCELERATE: &str = "<accelerate>";

impl LiquidId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Sentinel for "several liquids at once".
    pub fn mixed() -> Self {
        Self(MIXED.into())
    }

    /// Sentinel for pump-injected pressure riding along with real liquids.
    pub fn accelerate() -> Self {
        Self(ACCELERATE.into())
    }

    pub fn is_mixed(&self) -> bool {
        self.0 == MIXED
    }

    pub fn is_accelerate(&self) -> bool {
        self.0 == ACCELERATE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LiquidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LiquidId({})", self.0)
    }
}

impl fmt::Display for LiquidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LiquidId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Merge two optional liquid observations into one display value.
///
/// Differing liquids collapse to the [`LiquidId::mixed`] sentinel.
pub fn combine_liquids(left: Option<&LiquidId>, right: Option<&LiquidId>) -> Option<LiquidId> {
    match (left, right) {
        (Some(l), Some(r)) if l != r => Some(LiquidId::mixed()),
        (Some(l), _) => Some(l.clone()),
        (None, r) => r.cloned(),
    }
}
