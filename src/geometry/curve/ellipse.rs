use crate::error::{CurveError, Result};
use crate::geometry::Point;

use super::{check_parameter, Curve};

/// An axis-aligned ellipse in the z = 0 plane, centered at the origin.
///
/// `P(t) = (a * cos(t), b * sin(t), 0)` where `a` and `b` are the radii
/// along the x and y axes, for `t` in `[0, 2*pi]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ellipse {
    x_radius: f64,
    y_radius: f64,
}

impl Ellipse {
    /// Creates a new ellipse.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NegativeParameter`] if either radius is
    /// negative. Zero radii are legal and flatten the ellipse onto the
    /// corresponding axis.
    pub fn new(x_radius: f64, y_radius: f64) -> Result<Self> {
        if x_radius < 0.0 {
            return Err(CurveError::NegativeParameter {
                parameter: "x_radius",
                value: x_radius,
            });
        }
        if y_radius < 0.0 {
            return Err(CurveError::NegativeParameter {
                parameter: "y_radius",
                value: y_radius,
            });
        }
        Ok(Self { x_radius, y_radius })
    }

    /// Returns the radius along the x axis.
    #[must_use]
    pub fn x_radius(&self) -> f64 {
        self.x_radius
    }

    /// Returns the radius along the y axis.
    #[must_use]
    pub fn y_radius(&self) -> f64 {
        self.y_radius
    }
}

impl Curve for Ellipse {
    fn position(&self, t: f64) -> Result<Point> {
        check_parameter(t)?;
        Ok(Point::new(
            self.x_radius * t.cos(),
            self.y_radius * t.sin(),
            0.0,
        ))
    }

    fn tangent(&self, t: f64) -> Result<Point> {
        check_parameter(t)?;
        Ok(Point::new(
            -self.x_radius * t.sin(),
            self.y_radius * t.cos(),
            0.0,
        ))
    }
}
