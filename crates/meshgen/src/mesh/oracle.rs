//! Intersection oracle: does a candidate segment cross any edge of the graph?

use crate::geom2::segments_intersect_eps;

use super::types::Graph;

/// True iff the segment between vertices `a` and `b` crosses an existing edge.
///
/// Edges are visited once each, from their lower endpoint. Edges sharing an
/// endpoint with `a–b` are skipped. Cost is O(E); this dominates the run time
/// of the whole pipeline.
pub fn segment_intersects_any(graph: &Graph, a: usize, b: usize, eps: f64) -> bool {
    let (pa, pb) = (graph.point(a), graph.point(b));
    for c in 0..graph.num_points() {
        for &d in graph.neighbors(c) {
            if d < c {
                continue;
            }
            if a == c || a == d || b == c || b == d {
                continue;
            }
            if segments_intersect_eps(pa, pb, graph.point(c), graph.point(d), false, eps) {
                return true;
            }
        }
    }
    false
}
