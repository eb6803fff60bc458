use crate::error::{Error, Result};
use crate::models::Point;
use rand::Rng;
use std::collections::HashSet;

/// Generates `n` unique points with both coordinates drawn from `[0, n]`
///
/// The grid holds `(n + 1)^2` cells, so `n` distinct points always exist.
/// Points are returned in the order they were first drawn, which keeps the
/// output reproducible for a seeded generator.
///
/// # Errors
/// [`Error::TooManyPoints`] when `n` does not fit an `i32` coordinate.
pub fn generate_points<R: Rng>(n: usize, rng: &mut R) -> Result<Vec<Point>> {
    let bound = crate::conv_num!(i32, n, -1);
    if bound < 0 {
        return Err(Error::TooManyPoints(n));
    }

    let mut seen = HashSet::with_capacity(n);
    let mut points = Vec::with_capacity(n);

    while points.len() < n {
        let candidate = Point::new(rng.random_range(0..=bound), rng.random_range(0..=bound));
        if seen.insert(candidate) {
            points.push(candidate);
        }
    }

    log::debug!("Generated {} unique points in [0, {}]^2", points.len(), bound);
    Ok(points)
}
