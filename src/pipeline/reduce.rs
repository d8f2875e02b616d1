use std::sync::Arc;

use rayon::prelude::*;

use crate::geometry::Circle;

/// Sums circle radii sequentially, in slice order.
#[must_use]
pub fn sum_of_radii_serial(circles: &[Arc<Circle>]) -> f64 {
    circles.iter().map(|circle| circle.radius()).sum()
}

/// Sums circle radii with a data-parallel reduction on the global pool.
///
/// Partial sums combine in no fixed order, so the result may differ from
/// the serial sum in the least-significant bits; callers compare against a
/// tolerance, not for bit equality.
#[must_use]
pub fn sum_of_radii(circles: &[Arc<Circle>]) -> f64 {
    circles.par_iter().map(|circle| circle.radius()).sum()
}

/// Sums circle radii on a dedicated pool of `workers` threads.
///
/// Falls back to the serial sum if the pool cannot be built; the value is
/// the same either way, within floating-point tolerance.
#[must_use]
pub fn sum_of_radii_with_workers(circles: &[Arc<Circle>], workers: usize) -> f64 {
    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(|| sum_of_radii(circles)),
        Err(_) => sum_of_radii_serial(circles),
    }
}
