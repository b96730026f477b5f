use core::fmt;
use core::str::FromStr;

use pf_core::Rotation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub type GeomResult<T> = Result<T, GeomError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeomError {
    #[error("'{input}' could not be parsed as a coordinate")]
    Parse { input: String },
}

/// Scale factor between grid units and the stored integer representation.
const SCALE: i64 = 1000;
const HALF: i32 = 500;

/// Width/height of a shape after rotating it.
pub fn rotated_size(rotation: Rotation, size: (u32, u32)) -> (u32, u32) {
    if rotation.swaps_axes() {
        (size.1, size.0)
    } else {
        size
    }
}

/// A point on the grid identifying a part edge or anchor.
///
/// Components are kept as integer thousandths of a grid unit, which makes
/// equality, hashing, and ordering structural and keeps the 3-decimal
/// rounding of map keys exact. A negative z marks a virtual anchor that is
/// immune to every transform.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    x: i32,
    y: i32,
    z: i32,
}

impl Coordinate {
    /// Build from grid units, rounding each component to 3 decimals.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: round_millis(x),
            y: round_millis(y),
            z: round_millis(z),
        }
    }

    /// Build directly from integer thousandths of a grid unit.
    pub const fn from_millis(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x as f64 / SCALE as f64
    }

    pub fn y(&self) -> f64 {
        self.y as f64 / SCALE as f64
    }

    pub fn z(&self) -> f64 {
        self.z as f64 / SCALE as f64
    }

    pub fn values(&self) -> (f64, f64, f64) {
        (self.x(), self.y(), self.z())
    }

    /// Virtual anchors sit outside the grid and never move.
    pub fn is_virtual(&self) -> bool {
        self.z < 0
    }

    pub fn translate(&self, offset: Coordinate) -> Coordinate {
        if self.is_virtual() {
            return *self;
        }
        Coordinate {
            x: self.x + offset.x,
            y: self.y + offset.y,
            z: self.z,
        }
    }

    /// Translate by whole grid units.
    pub fn translate_units(&self, dx: i32, dy: i32) -> Coordinate {
        self.translate(Coordinate::from_millis(
            dx * SCALE as i32,
            dy * SCALE as i32,
            0,
        ))
    }

    /// Rotate around a pivot point. Quarter turns only, so the arithmetic
    /// is exact; the pivot's z component is ignored.
    pub fn rotate(&self, rotation: Rotation, pivot: Coordinate) -> Coordinate {
        if self.is_virtual() || rotation == Rotation::R0 {
            return *self;
        }
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        let (x, y) = match rotation {
            Rotation::R0 => (self.x, self.y),
            Rotation::R90 => (pivot.x - dy, pivot.y + dx),
            Rotation::R180 => (pivot.x - dx, pivot.y - dy),
            Rotation::R270 => (pivot.x + dy, pivot.y - dx),
        };
        Coordinate { x, y, z: self.z }
    }

    /// Rotate a square anchor within a shape.
    ///
    /// The shape anchor keeps its global position: the square is rotated
    /// around the shape anchor and the result shifted (always in the
    /// positive direction) until the rotated shape's anchor coincides with
    /// the old one. `shape_rotation` is the rotation the shape already has,
    /// which determines its current width/height.
    pub fn rotate_shape_square(
        &self,
        rotation: Rotation,
        shape_rotation: Rotation,
        size: (u32, u32),
        anchor: Coordinate,
    ) -> Coordinate {
        if self.is_virtual() || rotation == Rotation::R0 {
            return *self;
        }

        let (new_w, new_h) = rotated_size(rotation + shape_rotation, size);

        // square anchor -> square center, rotate around the shape anchor
        let center = self
            .translate(Coordinate::from_millis(HALF, HALF, 0))
            .rotate(rotation, anchor);

        // shift until the new shape anchor matches the old anchor position
        let shifted = center.translate(Coordinate::from_millis(
            if center.x < anchor.x {
                new_w as i32 * SCALE as i32
            } else {
                0
            },
            if center.y < anchor.y {
                new_h as i32 * SCALE as i32
            } else {
                0
            },
            0,
        ));

        // back from square center to square anchor
        shifted.translate(Coordinate::from_millis(-HALF, -HALF, 0))
    }

    /// Rotate an edge point within a shape.
    ///
    /// The edge is resolved to its owning square, the square is rotated as
    /// in [`rotate_shape_square`], and the intra-square offset is restored
    /// and rotated around the new square center.
    pub fn rotate_shape_edge(
        &self,
        rotation: Rotation,
        shape_rotation: Rotation,
        size: (u32, u32),
        anchor: Coordinate,
    ) -> Coordinate {
        if self.is_virtual() || rotation == Rotation::R0 {
            return *self;
        }

        let square = Coordinate {
            x: floor_millis(self.x),
            y: floor_millis(self.y),
            z: 0,
        };
        let shift_x = square.x - self.x;
        let shift_y = square.y - self.y;

        let rotated_square = square.rotate_shape_square(rotation, shape_rotation, size, anchor);

        rotated_square
            .translate(Coordinate::from_millis(-shift_x, -shift_y, 0))
            .rotate(
                rotation,
                rotated_square.translate(Coordinate::from_millis(HALF, HALF, 0)),
            )
    }

    /// Mirror an edge point across the shape's vertical midline.
    ///
    /// `flip` allows chained syntax with optional flips; `shape_rotation`
    /// determines the shape's current width. The shape is anchored at the
    /// origin, matching local (pre-placement) transition coordinates.
    pub fn flip_shape_edge(&self, flip: bool, shape_rotation: Rotation, size: (u32, u32)) -> Coordinate {
        if self.is_virtual() || !flip {
            return *self;
        }
        let (w, _) = rotated_size(shape_rotation, size);
        let shift_x = (w as i32 * HALF - self.x) * 2;
        self.translate(Coordinate::from_millis(shift_x, 0, 0))
    }
}

fn round_millis(v: f64) -> i32 {
    (v * SCALE as f64).round() as i32
}

fn floor_millis(v: i32) -> i32 {
    v.div_euclid(SCALE as i32) * SCALE as i32
}

fn fmt_component(f: &mut fmt::Formatter<'_>, millis: i32) -> fmt::Result {
    if millis % SCALE as i32 == 0 {
        write!(f, "{}", millis / SCALE as i32)
    } else {
        write!(f, "{}", millis as f64 / SCALE as f64)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_component(f, self.x)?;
        f.write_str(",")?;
        fmt_component(f, self.y)?;
        f.write_str(",")?;
        fmt_component(f, self.z)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({self})")
    }
}

impl FromStr for Coordinate {
    type Err = GeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || GeomError::Parse {
            input: s.to_owned(),
        };
        let mut components = s.split(',').map(|c| c.trim().parse::<f64>());
        let mut next = || -> GeomResult<f64> {
            match components.next() {
                Some(Ok(v)) if v.is_finite() => Ok(v),
                _ => Err(err()),
            }
        };
        let x = next()?;
        let y = next()?;
        let z = next()?;
        Ok(Self::new(x, y, z))
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
