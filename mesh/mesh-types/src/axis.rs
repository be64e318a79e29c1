//! Coordinate axes used as mirror planes.

use std::fmt;
use std::str::FromStr;

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ParseAxisError;

/// A coordinate axis.
///
/// Mirroring "across X" negates the X coordinate, i.e. reflects through the
/// YZ plane.
///
/// # Example
///
/// ```
/// use mesh_types::Axis;
///
/// let axis: Axis = "y".parse().unwrap();
/// assert_eq!(axis, Axis::Y);
/// assert_eq!(axis.index(), 1);
/// assert!("w".parse::<Axis>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// The X axis (width).
    X,
    /// The Y axis (depth).
    Y,
    /// The Z axis (height).
    Z,
}

impl Axis {
    /// All three axes in X, Y, Z order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Component index of this axis within an `[x, y, z]` triple.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Lowercase name of the axis.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }

    /// Reflect a point across the plane orthogonal to this axis.
    ///
    /// ```
    /// use mesh_types::{Axis, Point3};
    ///
    /// let p = Axis::Z.reflect(&Point3::new(1.0, 2.0, 3.0));
    /// assert_eq!(p, Point3::new(1.0, 2.0, -3.0));
    /// ```
    #[inline]
    #[must_use]
    pub fn reflect(self, point: &Point3<f32>) -> Point3<f32> {
        let mut out = *point;
        out[self.index()] = -out[self.index()];
        out
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            _ => Err(ParseAxisError::new(s)),
        }
    }
}

impl TryFrom<char> for Axis {
    type Error = ParseAxisError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'x' => Ok(Self::X),
            'y' => Ok(Self::Y),
            'z' => Ok(Self::Z),
            _ => Err(ParseAxisError::new(c)),
        }
    }
}
