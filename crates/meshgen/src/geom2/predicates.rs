//! Segment predicates on raw `f64` coordinates.
//!
//! The crossing test is half-open on both segments: touching the start point
//! of either segment is not a crossing, touching the end point is. The
//! intersection oracle visits each undirected edge from its lower id only, and
//! relies on this asymmetry so that a shared vertex is counted once.

use super::{cfg::PROXIMITY_EPS, Point};

/// `|a - b| < eps`.
#[inline]
pub fn is_near(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

/// Does segment `ab` cross segment `cd`? Uses the default tolerance.
///
/// See [`segments_intersect_eps`].
#[inline]
pub fn segments_intersect(
    a: Point,
    b: Point,
    c: Point,
    d: Point,
    ignore_endpoint_proximity: bool,
) -> bool {
    segments_intersect_eps(a, b, c, d, ignore_endpoint_proximity, PROXIMITY_EPS)
}

/// Does segment `ab` cross segment `cd`?
///
/// - Parallel lines (exactly zero determinant) never cross, collinear overlap
///   included.
/// - `m` is the position of the line intersection along `ab`, `n` along `cd`;
///   a crossing requires `0 < m <= 1` and `0 < n <= 1`.
/// - With `ignore_endpoint_proximity`, intersections within `eps` of either
///   segment's endpoints are not reported.
pub fn segments_intersect_eps(
    a: Point,
    b: Point,
    c: Point,
    d: Point,
    ignore_endpoint_proximity: bool,
    eps: f64,
) -> bool {
    let denominator = (a.x - b.x) * (c.y - d.y) - (a.y - b.y) * (c.x - d.x);
    if denominator == 0.0 {
        return false;
    }

    let ab_cross = a.x * b.y - a.y * b.x;
    let cd_cross = c.x * d.y - c.y * d.x;
    let p = Point::new(
        (ab_cross * (c.x - d.x) - (a.x - b.x) * cd_cross) / denominator,
        (ab_cross * (c.y - d.y) - (a.y - b.y) * cd_cross) / denominator,
    );

    let m = param_along(a, b, p, eps);
    let n = param_along(c, d, p, eps);

    if !(0.0 < m && m <= 1.0 && 0.0 < n && n <= 1.0) {
        return false;
    }
    if ignore_endpoint_proximity {
        let near_end = |t: f64| is_near(t, 0.0, eps) || is_near(t, 1.0, eps);
        if near_end(m) || near_end(n) {
            return false;
        }
    }
    true
}

/// Position of `p` along `from -> to`, assuming `p` lies on that line.
/// Divides by the x displacement unless it is near zero.
#[inline]
fn param_along(from: Point, to: Point, p: Point, eps: f64) -> f64 {
    let dir = to - from;
    let rel = p - from;
    if is_near(dir.x, 0.0, eps) {
        rel.y / dir.y
    } else {
        rel.x / dir.x
    }
}
