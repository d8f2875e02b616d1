use rand::Rng;

use crate::geometry::{AnyCurve, Circle, Ellipse, Helix};

use super::PipelineConfig;

/// Draws a uniform value from `[min, max]`. A reversed range is treated as
/// the swapped range rather than an error.
fn sample_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if min > max {
        rng.gen_range(max..=min)
    } else {
        rng.gen_range(min..=max)
    }
}

/// Generates `config.curve_count` curves, each of a variant chosen
/// uniformly at random with parameters drawn uniformly from the configured
/// ranges.
///
/// A construction failure discards the attempt and resamples, so the
/// returned collection always holds exactly `curve_count` curves with no
/// holes. Failures cannot occur with the non-negative default ranges, but
/// the retry loop tolerates ranges that dip below zero.
pub fn generate_curves<R: Rng>(rng: &mut R, config: &PipelineConfig) -> Vec<AnyCurve> {
    let radius_min = *config.radius_range.start();
    let radius_max = *config.radius_range.end();
    let mut curves = Vec::with_capacity(config.curve_count);

    while curves.len() < config.curve_count {
        let radius = sample_range(rng, radius_min, radius_max);
        let attempt = match rng.gen_range(0..3) {
            0 => Circle::new(radius).map(AnyCurve::from),
            1 => {
                let y_radius = sample_range(rng, radius_min, radius_max);
                Ellipse::new(radius, y_radius).map(AnyCurve::from)
            }
            _ => {
                let step = sample_range(rng, *config.step_range.start(), *config.step_range.end());
                Helix::new(radius, step).map(AnyCurve::from)
            }
        };
        match attempt {
            Ok(curve) => curves.push(curve),
            Err(err) => eprintln!("Error: {err}"),
        }
    }

    curves
}
