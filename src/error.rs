use thiserror::Error;

/// Errors produced by curve construction and evaluation.
#[derive(Debug, Error, PartialEq)]
pub enum CurveError {
    /// A shape parameter (radius, axis length, step) was negative.
    #[error("invalid value of the parameter {parameter}: {value} is negative")]
    NegativeParameter {
        parameter: &'static str,
        value: f64,
    },

    /// The curve parameter `t` lies outside the curve's domain.
    #[error("parameter t = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange { value: f64, min: f64, max: f64 },
}

/// Convenience type alias for results using [`CurveError`].
pub type Result<T> = std::result::Result<T, CurveError>;
