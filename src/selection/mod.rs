//! The closest-pairs selector and the pieces it is built from

pub use self::buffer::{BoundedBuffer, Insertion};
pub use self::observer::SelectionObserver;
pub use self::selector::{closest_pairs, total_pairs, ClosestPairs};

pub(crate) mod buffer;
pub(crate) mod observer;
pub(crate) mod selector;
