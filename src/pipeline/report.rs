use std::io::{self, Write};

use crate::geometry::{AnyCurve, Curve};

const SEPARATOR: &str = "--------------------------------";

/// Writes the position/derivative report for every curve at parameter `t`,
/// in collection order.
///
/// A domain error for one curve is written to `err` as `Error: <message>`
/// and does not stop the remaining curves; the position and derivative of
/// each curve are evaluated independently, so one failing does not skip
/// the other.
///
/// # Errors
///
/// Returns an error only if writing to either sink fails.
pub fn write_report<W, E>(out: &mut W, err: &mut E, curves: &[AnyCurve], t: f64) -> io::Result<()>
where
    W: Write,
    E: Write,
{
    writeln!(
        out,
        "Coordinates of points and derivatives of all curves in the container at t = {t}"
    )?;
    writeln!(out, "{SEPARATOR}")?;

    for (i, curve) in curves.iter().enumerate() {
        writeln!(out, "Curve {}: ", i + 1)?;

        match curve.position(t) {
            Ok(point) => writeln!(out, "Point:\n{point}")?,
            Err(e) => writeln!(err, "Error: {e}")?,
        }

        match curve.tangent(t) {
            Ok(derivative) => writeln!(out, "Derivative:\n{derivative}")?,
            Err(e) => writeln!(err, "Error: {e}")?,
        }

        writeln!(out, "{SEPARATOR}")?;
    }

    Ok(())
}
