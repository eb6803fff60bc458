use crate::models::Point;

/// Sum of the absolute coordinate differences between `a` and `b`
///
/// Computed in `i64` so any two `i32` points fit: each difference is at
/// most `2^32` and the sum at most `2^33`.
pub fn manhattan_distance(a: Point, b: Point) -> u64 {
    let dx = i64::from(a.x) - i64::from(b.x);
    let dy = i64::from(a.y) - i64::from(b.y);
    dx.unsigned_abs() + dy.unsigned_abs()
}
