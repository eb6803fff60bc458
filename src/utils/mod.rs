//! Small helpers shared across the crate

pub mod convert;
pub mod geometry;
