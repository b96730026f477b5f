//! pf-geom: grid geometry for pipeflow layouts.
//!
//! Shapes are placed on a square grid. A shape is always rectangular, one or
//! more 1x1 squares, anchored at its top-left corner (lowest x/y). Square
//! corners have integer coordinates; edge points may be fractional in both
//! axes. Coordinates with a negative z component are virtual boundary
//! anchors (e.g. "outside the system") and are never moved by any transform.
//!
//! All coordinate components are stored as integer thousandths, so the
//! 3-decimal rounding contract of the map keys is exact and quarter-turn
//! rotations are plain integer arithmetic.

mod coordinate;

pub use coordinate::{Coordinate, GeomError, GeomResult, rotated_size};
