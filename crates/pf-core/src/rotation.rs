use core::fmt;
use core::ops::Add;
use serde::{Deserialize, Serialize};

/// Grid rotation, restricted to quarter turns.
///
/// Parts sit on a square grid, so the smallest meaningful rotation is 90
/// degrees. Arbitrary degree inputs are clamped into this domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Clamp an arbitrary degree value to the nearest lower quarter turn,
    /// normalized into `[0, 360)`.
    pub fn from_degrees(degrees: i32) -> Self {
        match degrees.rem_euclid(360) / 90 {
            0 => Self::R0,
            1 => Self::R90,
            2 => Self::R180,
            _ => Self::R270,
        }
    }

    pub fn degrees(self) -> i32 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    /// Number of quarter turns (0..=3).
    pub fn quarter_turns(self) -> u8 {
        (self.degrees() / 90) as u8
    }

    /// True when the rotation swaps a shape's width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::R90 | Self::R270)
    }
}

impl Add for Rotation {
    type Output = Rotation;

    fn add(self, other: Rotation) -> Rotation {
        Rotation::from_degrees(self.degrees() + other.degrees())
    }
}

impl From<Rotation> for i32 {
    fn from(r: Rotation) -> i32 {
        r.degrees()
    }
}

impl TryFrom<i32> for Rotation {
    type Error = String;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        if degrees % 90 == 0 {
            Ok(Self::from_degrees(degrees))
        } else {
            Err(format!("{degrees} is not a quarter-turn rotation"))
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
