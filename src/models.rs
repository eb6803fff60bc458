//! Data structures for `closest-pairs`

/// A point with x and y coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// The X coordinate of the point
    pub x: i32,
    /// The Y coordinate of the point
    pub y: i32,
}

/// Two points and the Manhattan distance between them
///
/// `first` is always the point that came earlier in the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    /// The Manhattan distance between `first` and `second`
    pub distance: u64,
    /// The point with the smaller input index
    pub first: Point,
    /// The point with the larger input index
    pub second: Point,
}

/// The outcome of one closest-pairs run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    /// The closest pairs, sorted ascending by distance
    pub pairs: Vec<Pair>,
    /// How many pairs were scored, always `n * (n - 1) / 2`
    pub evaluated_pairs: u64,
    /// How many buffer entries were displaced to make room for insertions
    pub insertion_shifts: u64,
}
