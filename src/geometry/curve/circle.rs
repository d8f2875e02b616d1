use crate::error::{CurveError, Result};
use crate::geometry::Point;

use super::{check_parameter, Curve};

/// A circle in the z = 0 plane, centered at the origin.
///
/// `P(t) = (r * cos(t), r * sin(t), 0)` for `t` in `[0, 2*pi]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// A zero radius is legal and degenerates to the origin; the default
    /// circle is that degenerate case.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NegativeParameter`] if the radius is negative.
    pub fn new(radius: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(CurveError::NegativeParameter {
                parameter: "radius",
                value: radius,
            });
        }
        Ok(Self { radius })
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Curve for Circle {
    fn position(&self, t: f64) -> Result<Point> {
        check_parameter(t)?;
        Ok(Point::new(self.radius * t.cos(), self.radius * t.sin(), 0.0))
    }

    fn tangent(&self, t: f64) -> Result<Point> {
        check_parameter(t)?;
        Ok(Point::new(-self.radius * t.sin(), self.radius * t.cos(), 0.0))
    }
}
