//! Implementations for structs within `models.rs`

use crate::error::Error;
use crate::models::{Pair, Point, Selection};
use crate::utils::geometry::manhattan_distance;
use std::fmt;
use std::str::FromStr;

impl Point {
    /// Creates a new point with the given coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = Error;

    /// Parses `(x,y)`, `(x, y)` or a bare `x,y`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPoint(s.to_owned());
        let trimmed = s.trim();

        let inner = match trimmed.strip_prefix('(') {
            Some(rest) => rest.strip_suffix(')').ok_or_else(invalid)?,
            None => trimmed,
        };

        let (x, y) = inner.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;

        Ok(Self::new(x, y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Pair {
    /// Creates a pair with an already known distance
    pub const fn new(distance: u64, first: Point, second: Point) -> Self {
        Self {
            distance,
            first,
            second,
        }
    }

    /// Scores `first` and `second` and keeps them in the given order
    pub fn between(first: Point, second: Point) -> Self {
        Self::new(manhattan_distance(first, second), first, second)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.distance, self.first, self.second)
    }
}

impl Selection {
    /// Number of pairs that were kept
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_display_has_no_spaces() {
        assert_eq!(Point::new(3, -4).to_string(), "(3,-4)");
    }

    #[test]
    fn point_parses_common_forms() {
        assert_eq!("(1,2)".parse::<Point>().unwrap(), Point::new(1, 2));
        assert_eq!("  ( -7 , 12 )\n".parse::<Point>().unwrap(), Point::new(-7, 12));
        assert_eq!("5,6".parse::<Point>().unwrap(), Point::new(5, 6));
    }

    #[test]
    fn point_rejects_garbage() {
        for bad in ["", "()", "(1)", "(1,2", "(a,b)", "1;2", "(1,2,3)"] {
            assert!(
                matches!(bad.parse::<Point>(), Err(Error::InvalidPoint(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn pair_display_matches_output_format() {
        let pair = Pair::between(Point::new(0, 0), Point::new(1, 1));
        assert_eq!(pair.to_string(), "2, (0,0), (1,1)");
    }

    #[test]
    fn pair_equality_is_structural_and_ordered() {
        let a = Point::new(0, 0);
        let b = Point::new(2, 1);
        assert_eq!(Pair::between(a, b), Pair::new(3, a, b));
        assert_ne!(Pair::between(a, b), Pair::between(b, a));
    }
}
