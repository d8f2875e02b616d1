use std::fmt;

use crate::math::Vector3;

/// A point in 3D Cartesian space.
///
/// A plain immutable value: constructed once from its coordinates and read
/// thereafter. The default point is the origin. The `Display` form is one
/// coordinate per line and is part of the report contract:
///
/// ```text
/// x: <x>
/// y:<y>
/// z:<z>
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coords: Vector3,
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            coords: Vector3::new(x, y, z),
        }
    }

    /// The point at (0, 0, 0).
    #[must_use]
    pub fn origin() -> Self {
        Self::default()
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Returns the z coordinate.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.coords.z
    }

    /// Returns the coordinates as a vector, for vector arithmetic.
    #[must_use]
    pub fn coords(&self) -> Vector3 {
        self.coords
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "x: {}", self.coords.x)?;
        writeln!(f, "y:{}", self.coords.y)?;
        writeln!(f, "z:{}", self.coords.z)
    }
}
