mod generate;
mod reduce;
mod report;

pub use generate::generate_curves;
pub use reduce::{sum_of_radii, sum_of_radii_serial, sum_of_radii_with_workers};
pub use report::write_report;

use std::f64::consts::FRAC_PI_4;
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::geometry::{AnyCurve, Circle};

/// Configuration for one pipeline run.
///
/// The defaults mirror the demo driver: 15 curves, radii and axis lengths
/// in `[0, 100]`, helix steps in `[0, 5]`, reporting at `t = pi/4`, and an
/// 8-worker pool for the reduction.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of curves to generate.
    pub curve_count: usize,
    /// Sampling range for radii and axis lengths.
    pub radius_range: RangeInclusive<f64>,
    /// Sampling range for the helix step.
    pub step_range: RangeInclusive<f64>,
    /// Parameter value at which every curve is reported.
    pub sample_t: f64,
    /// Worker threads for the parallel reduction.
    pub workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            curve_count: 15,
            radius_range: 0.0..=100.0,
            step_range: 0.0..=5.0,
            sample_t: FRAC_PI_4,
            workers: 8,
        }
    }
}

/// Extracts the circle-variant elements of `curves`, preserving their
/// relative order.
///
/// The returned collection co-owns the underlying circles with the input
/// collection; no circle state is copied.
#[must_use]
pub fn filter_circles(curves: &[AnyCurve]) -> Vec<Arc<Circle>> {
    curves.iter().filter_map(AnyCurve::as_circle).collect()
}

/// Sorts circles ascending by radius.
///
/// The sort is stable, so circles of equal radius keep their input order.
pub fn sort_by_radius(circles: &mut [Arc<Circle>]) {
    circles.sort_by(|a, b| a.radius().total_cmp(&b.radius()));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Curve, Ellipse, Helix, Point};
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    fn mixed_curves() -> Vec<AnyCurve> {
        vec![
            AnyCurve::from(Circle::new(5.0).unwrap()),
            AnyCurve::from(Ellipse::new(3.0, 4.0).unwrap()),
            AnyCurve::from(Circle::new(1.0).unwrap()),
            AnyCurve::from(Helix::new(1.0, 2.0).unwrap()),
            AnyCurve::from(Circle::new(3.0).unwrap()),
        ]
    }

    #[test]
    fn filter_keeps_only_circles_in_order() {
        let curves = mixed_curves();
        let circles = filter_circles(&curves);
        let radii: Vec<f64> = circles.iter().map(|c| c.radius()).collect();
        assert_eq!(radii, vec![5.0, 1.0, 3.0]);
    }

    #[test]
    fn filtered_circles_share_ownership() {
        let curves = mixed_curves();
        let circles = filter_circles(&curves);
        let AnyCurve::Circle(first) = &curves[0] else {
            unreachable!()
        };
        assert!(Arc::ptr_eq(first, &circles[0]));
        // Two owners: the original collection and the filtered one.
        assert_eq!(Arc::strong_count(first), 2);
    }

    #[test]
    fn sort_orders_by_ascending_radius() {
        let curves = mixed_curves();
        let mut circles = filter_circles(&curves);
        sort_by_radius(&mut circles);
        let radii: Vec<f64> = circles.iter().map(|c| c.radius()).collect();
        assert_eq!(radii, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn sort_is_stable_for_equal_radii() {
        let first = Arc::new(Circle::new(2.0).unwrap());
        let second = Arc::new(Circle::new(2.0).unwrap());
        let mut circles = vec![
            Arc::new(Circle::new(9.0).unwrap()),
            Arc::clone(&first),
            Arc::clone(&second),
        ];
        sort_by_radius(&mut circles);
        assert!(Arc::ptr_eq(&circles[0], &first));
        assert!(Arc::ptr_eq(&circles[1], &second));
    }

    #[test]
    fn end_to_end_with_deterministic_input() {
        let curves = vec![
            AnyCurve::from(Circle::new(2.0).unwrap()),
            AnyCurve::from(Ellipse::new(3.0, 4.0).unwrap()),
            AnyCurve::from(Helix::new(1.0, 2.0).unwrap()),
        ];
        let t = FRAC_PI_4;

        let expect = |p: Point, x: f64, y: f64, z: f64| {
            assert_relative_eq!(p.x(), x, epsilon = TOLERANCE);
            assert_relative_eq!(p.y(), y, epsilon = TOLERANCE);
            assert_relative_eq!(p.z(), z, epsilon = TOLERANCE);
        };

        expect(
            curves[0].position(t).unwrap(),
            2.0 * t.cos(),
            2.0 * t.sin(),
            0.0,
        );
        expect(
            curves[0].tangent(t).unwrap(),
            -2.0 * t.sin(),
            2.0 * t.cos(),
            0.0,
        );
        expect(
            curves[1].position(t).unwrap(),
            3.0 * t.cos(),
            4.0 * t.sin(),
            0.0,
        );
        expect(
            curves[1].tangent(t).unwrap(),
            -3.0 * t.sin(),
            4.0 * t.cos(),
            0.0,
        );
        expect(
            curves[2].position(t).unwrap(),
            t.cos(),
            t.sin(),
            2.0 * t / std::f64::consts::TAU,
        );
        expect(
            curves[2].tangent(t).unwrap(),
            -t.sin(),
            t.cos(),
            2.0 / std::f64::consts::TAU,
        );

        let mut circles = filter_circles(&curves);
        sort_by_radius(&mut circles);
        assert_relative_eq!(sum_of_radii_serial(&circles), 2.0, epsilon = TOLERANCE);
        assert_relative_eq!(sum_of_radii(&circles), 2.0, epsilon = TOLERANCE);
    }
}
