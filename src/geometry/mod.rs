pub mod curve;
mod point;

pub use curve::{AnyCurve, Circle, Curve, CurveDomain, Ellipse, Helix};
pub use point::Point;
