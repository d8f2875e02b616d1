use std::f64::consts::TAU;

use crate::error::{CurveError, Result};
use crate::geometry::Point;

use super::{check_parameter, Curve};

/// A circular helix around the z axis, starting on the x axis.
///
/// `P(t) = (r * cos(t), r * sin(t), h * t / (2*pi))` where `h` is the step:
/// the height gained over one full revolution, so `P(2*pi).z == h`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Helix {
    radius: f64,
    step: f64,
}

impl Helix {
    /// Creates a new helix.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NegativeParameter`] if the radius or the step
    /// is negative. A zero step flattens the helix into a circle.
    pub fn new(radius: f64, step: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(CurveError::NegativeParameter {
                parameter: "radius",
                value: radius,
            });
        }
        if step < 0.0 {
            return Err(CurveError::NegativeParameter {
                parameter: "step",
                value: step,
            });
        }
        Ok(Self { radius, step })
    }

    /// Returns the radius of the helix.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the step, the height gained per revolution.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Curve for Helix {
    fn position(&self, t: f64) -> Result<Point> {
        check_parameter(t)?;
        Ok(Point::new(
            self.radius * t.cos(),
            self.radius * t.sin(),
            self.step * t / TAU,
        ))
    }

    fn tangent(&self, t: f64) -> Result<Point> {
        check_parameter(t)?;
        Ok(Point::new(
            -self.radius * t.sin(),
            self.radius * t.cos(),
            self.step / TAU,
        ))
    }
}
