pub mod error;
pub mod geometry;
pub mod math;
pub mod pipeline;

pub use error::{CurveError, Result};
