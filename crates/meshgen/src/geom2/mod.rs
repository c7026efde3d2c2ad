//! 2D geometry primitives for mesh construction.
//!
//! Purpose
//! - Provide the point type, the approximate-equality predicate, and the
//!   segment-crossing test that the intersection oracle is built on.
//! - Keep the predicates numerically explicit: one absolute tolerance, passed
//!   in or defaulted from `cfg::PROXIMITY_EPS`.

pub mod cfg;
mod predicates;

pub use cfg::PROXIMITY_EPS;
pub use predicates::{is_near, segments_intersect, segments_intersect_eps};

/// A point in the plane.
pub type Point = nalgebra::Vector2<f64>;

#[cfg(test)]
mod tests;
