mod circle;
mod ellipse;
mod helix;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;

use std::f64::consts::TAU;
use std::sync::Arc;

use crate::error::{CurveError, Result};
use crate::geometry::Point;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// The full-revolution domain `[0, 2*pi]`, inclusive at both ends.
    #[must_use]
    pub fn full_revolution() -> Self {
        Self {
            t_min: 0.0,
            t_max: TAU,
        }
    }
}

/// Validates `t` against the full-revolution domain.
///
/// Every variant reuses this single check; out-of-range parameters are
/// rejected, never clamped or wrapped.
pub(crate) fn check_parameter(t: f64) -> Result<()> {
    let domain = CurveDomain::full_revolution();
    if t >= domain.t_min && t <= domain.t_max {
        Ok(())
    } else {
        Err(CurveError::ParameterOutOfRange {
            value: t,
            min: domain.t_min,
            max: domain.t_max,
        })
    }
}

/// Trait for parametric curves in 3D space.
///
/// Both operations are pure functions of the parameter `t`, interpreted as
/// an angle in radians over one full revolution.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::ParameterOutOfRange`] if `t` is outside
    /// `[0, 2*pi]`.
    fn position(&self, t: f64) -> Result<Point>;

    /// Computes the first derivative of the position with respect to `t`,
    /// the instantaneous direction of travel along the curve.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::ParameterOutOfRange`] if `t` is outside
    /// `[0, 2*pi]`.
    fn tangent(&self, t: f64) -> Result<Point>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain {
        CurveDomain::full_revolution()
    }
}

/// A curve of any variant, sharing ownership of the underlying instance.
///
/// The variant set is closed, so the heterogeneous collection holds an enum
/// rather than a trait object. Each variant wraps an `Arc`, which lets the
/// circle filter hand out the same instance instead of a copy.
#[derive(Debug, Clone)]
pub enum AnyCurve {
    Circle(Arc<Circle>),
    Ellipse(Arc<Ellipse>),
    Helix(Arc<Helix>),
}

impl AnyCurve {
    /// Returns a co-owning handle to the circle if this curve is one.
    #[must_use]
    pub fn as_circle(&self) -> Option<Arc<Circle>> {
        match self {
            Self::Circle(circle) => Some(Arc::clone(circle)),
            Self::Ellipse(_) | Self::Helix(_) => None,
        }
    }
}

impl Curve for AnyCurve {
    fn position(&self, t: f64) -> Result<Point> {
        match self {
            Self::Circle(circle) => circle.position(t),
            Self::Ellipse(ellipse) => ellipse.position(t),
            Self::Helix(helix) => helix.position(t),
        }
    }

    fn tangent(&self, t: f64) -> Result<Point> {
        match self {
            Self::Circle(circle) => circle.tangent(t),
            Self::Ellipse(ellipse) => ellipse.tangent(t),
            Self::Helix(helix) => helix.tangent(t),
        }
    }
}

impl From<Circle> for AnyCurve {
    fn from(circle: Circle) -> Self {
        Self::Circle(Arc::new(circle))
    }
}

impl From<Ellipse> for AnyCurve {
    fn from(ellipse: Ellipse) -> Self {
        Self::Ellipse(Arc::new(ellipse))
    }
}

impl From<Helix> for AnyCurve {
    fn from(helix: Helix) -> Self {
        Self::Helix(Arc::new(helix))
    }
}
