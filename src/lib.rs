//! Finds the `m` closest pairs among a set of 2D integer points
//!
//! Every unordered pair is scored by Manhattan distance and folded into a
//! sorted buffer that never grows past `m` entries, instead of sorting all
//! `n * (n - 1) / 2` pairs.
//!
//! ```
//! use closest_pairs::{closest_pairs, Point};
//!
//! let points = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0), Point::new(3, 0)];
//! let selection = closest_pairs(&points, 2);
//!
//! assert_eq!(selection.pairs[0].to_string(), "1, (0,0), (1,0)");
//! assert_eq!(selection.pairs[1].to_string(), "1, (1,0), (2,0)");
//! ```

pub mod app;
pub mod choices;
pub mod config;
pub mod error;
mod impls;
pub mod models;
pub mod points_io;
pub mod progress;
pub mod selection;
pub mod trace;
pub mod utils;

pub use crate::error::{Error, Result};
pub use crate::models::{Pair, Point, Selection};
pub use crate::selection::{closest_pairs, ClosestPairs, SelectionObserver};
pub use crate::utils::geometry::manhattan_distance;
