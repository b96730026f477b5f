use std::collections::HashMap;

use pf_geom::Coordinate;

use crate::catalog;
use crate::error::{PartError, PartResult};
use crate::part::{PartKind, StatePart};
use crate::route::Transitions;

/// Specification of one part kind.
///
/// `transitions` returns the part's local connectivity, anchor-relative:
/// for every inbound edge, the ordered routes out. The graph builder
/// transforms these into grid space; everything downstream operates on the
/// transformed contract alone.
pub trait PartSpec: Send + Sync {
    /// Footprint in grid cells, before rotation.
    fn size(&self, part: &StatePart) -> PartResult<(u32, u32)> {
        let _ = part;
        Ok((1, 1))
    }

    /// Cells this part makes unavailable for placement, anchor-relative.
    fn blocked_coordinates(&self, part: &StatePart) -> PartResult<Vec<Coordinate>> {
        let _ = part;
        Ok(Vec::new())
    }

    /// Local connectivity for the part in its current settings/state.
    fn transitions(&self, part: &StatePart) -> PartResult<Transitions>;
}

/// Registry mapping part kinds to their specifications.
pub struct PartCatalog {
    specs: HashMap<PartKind, Box<dyn PartSpec>>,
}

impl PartCatalog {
    /// An empty registry; callers supply every specification themselves.
    pub fn empty() -> Self {
        Self {
            specs: HashMap::new(),
        }
    }

    /// The standard part set.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        catalog::register_builtin(&mut registry);
        registry
    }

    /// Register (or replace) the specification for a kind.
    pub fn register(&mut self, kind: PartKind, spec: Box<dyn PartSpec>) {
        self.specs.insert(kind, spec);
    }

    /// Look up a part's specification. A missing kind is a configuration
    /// error, not a recoverable condition.
    pub fn spec(&self, part: &StatePart) -> PartResult<&dyn PartSpec> {
        self.specs
            .get(&part.kind())
            .map(|spec| spec.as_ref())
            .ok_or_else(|| PartError::UnknownKind {
                id: part.id().clone(),
                kind: part.kind(),
            })
    }

    pub fn size(&self, part: &StatePart) -> PartResult<(u32, u32)> {
        self.spec(part)?.size(part)
    }

    pub fn blocked_coordinates(&self, part: &StatePart) -> PartResult<Vec<Coordinate>> {
        self.spec(part)?.blocked_coordinates(part)
    }

    pub fn transitions(&self, part: &StatePart) -> PartResult<Transitions> {
        self.spec(part)?.transitions(part)
    }
}

impl Default for PartCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
