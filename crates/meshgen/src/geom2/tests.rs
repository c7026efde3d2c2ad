use super::*;
use nalgebra::vector;

#[test]
fn is_near_is_strict() {
    assert!(is_near(1.0, 1.0 + 1e-10, PROXIMITY_EPS));
    assert!(!is_near(1.0, 1.0 + 1e-8, PROXIMITY_EPS));
    assert!(!is_near(0.0, 0.5, 0.5));
    assert!(is_near(-0.25, -0.25, 1e-12));
}

#[test]
fn proper_crossing_detected() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 1.0];
    let c = vector![0.0, 1.0];
    let d = vector![1.0, 0.0];
    assert!(segments_intersect(a, b, c, d, false));
    assert!(segments_intersect(a, b, c, d, true));
    // Order of the two segments does not matter for an interior crossing.
    assert!(segments_intersect(c, d, a, b, false));
}

#[test]
fn disjoint_segments_do_not_cross() {
    // Lines meet at (2, 2), outside both segments.
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 1.0];
    let c = vector![4.0, 0.0];
    let d = vector![3.0, 1.0];
    assert!(!segments_intersect(a, b, c, d, false));
}

#[test]
fn parallel_and_collinear_are_not_crossings() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    assert!(!segments_intersect(a, b, vector![0.0, 1.0], vector![1.0, 1.0], false));
    // Collinear overlap falls in the zero-denominator branch.
    assert!(!segments_intersect(a, b, vector![0.5, 0.0], vector![2.0, 0.0], false));
}

#[test]
fn half_open_interval_at_endpoints() {
    // ab ends exactly on the interior of cd: m == 1 counts.
    let a = vector![0.0, 0.0];
    let b = vector![0.5, 0.5];
    let c = vector![0.0, 1.0];
    let d = vector![1.0, 0.0];
    assert!(segments_intersect(a, b, c, d, false));
    // Reversed, the touch point is ab's start: m == 0 does not count.
    assert!(!segments_intersect(b, a, c, d, false));
    // Endpoint proximity ignored: neither orientation is a crossing.
    assert!(!segments_intersect(a, b, c, d, true));
}

#[test]
fn touching_at_start_of_other_segment() {
    // The intersection is c itself (n == 0) for cd, d itself (n == 1) for dc.
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    let c = vector![0.5, 0.0];
    let d = vector![0.5, 1.0];
    assert!(!segments_intersect(a, b, c, d, false));
    assert!(segments_intersect(a, b, d, c, false));
}

#[test]
fn vertical_segment_uses_y_axis() {
    // ab is vertical, so m must come from the y displacement.
    let a = vector![0.5, 0.0];
    let b = vector![0.5, 1.0];
    let c = vector![0.0, 0.25];
    let d = vector![1.0, 0.75];
    assert!(segments_intersect(a, b, c, d, false));
    // Crossing lies beyond the end of a short vertical segment.
    let b_short = vector![0.5, 0.3];
    assert!(!segments_intersect(a, b_short, c, d, false));
}

#[test]
fn zero_length_segment_never_crosses() {
    let p = vector![0.3, 0.3];
    assert!(!segments_intersect(p, p, vector![0.0, 0.0], vector![1.0, 1.0], false));
    assert!(!segments_intersect(p, p, vector![0.0, 1.0], vector![1.0, 0.0], false));
}

#[test]
fn explicit_eps_widens_endpoint_band() {
    // Crossing at m = 0.95 on ab.
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    let c = vector![0.95, -1.0];
    let d = vector![0.95, 1.0];
    assert!(segments_intersect_eps(a, b, c, d, true, 1e-9));
    assert!(!segments_intersect_eps(a, b, c, d, true, 0.1));
}
