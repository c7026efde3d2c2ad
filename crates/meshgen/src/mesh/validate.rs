//! Structural checks on a finished mesh.
//!
//! Each check returns the offending edges (empty when the property holds), so
//! tests and the CLI can report what is wrong rather than a bare flag.

use crate::geom2::{segments_intersect_eps, Point};

use super::types::{Graph, Mesh};

/// Undirected edge as `(lower, higher)`.
pub type Edge = (usize, usize);

/// `(a, b)` with `b ∈ N(a)` but `a ∉ N(b)`.
pub fn asymmetric_pairs(graph: &Graph) -> Vec<Edge> {
    let mut out = Vec::new();
    for a in 0..graph.num_points() {
        for &b in graph.neighbors(a) {
            if b >= graph.num_points() || !graph.neighbors(b).contains(&a) {
                out.push((a, b));
            }
        }
    }
    out
}

/// Boundary edges of registered polygons that are absent from the graph.
pub fn missing_boundary_edges(mesh: &Mesh) -> Vec<Edge> {
    mesh.polygons
        .iter()
        .flat_map(|r| r.boundary_edges())
        .filter(|&(a, b)| !mesh.graph.has_edge(a, b))
        .collect()
}

/// Edges joining two vertices of one polygon that are not its boundary.
pub fn intra_polygon_diagonals(mesh: &Mesh) -> Vec<Edge> {
    mesh.graph
        .edges()
        .filter(|&(a, b)| {
            mesh.polygons
                .iter()
                .any(|r| r.contains(a) && r.contains(b) && !r.is_boundary_edge(a, b))
        })
        .collect()
}

/// Pairs of edges that cross away from their endpoints.
///
/// Pairs sharing a vertex are skipped; near-endpoint touches are ignored.
pub fn crossing_edges(graph: &Graph, eps: f64) -> Vec<(Edge, Edge)> {
    let edges: Vec<Edge> = graph.edges().collect();
    let mut out = Vec::new();
    for (i, &(a, b)) in edges.iter().enumerate() {
        for &(c, d) in &edges[i + 1..] {
            if a == c || a == d || b == c || b == d {
                continue;
            }
            let hit = segments_intersect_eps(
                graph.point(a),
                graph.point(b),
                graph.point(c),
                graph.point(d),
                true,
                eps,
            );
            if hit {
                out.push(((a, b), (c, d)));
            }
        }
    }
    out
}

/// Edges bordered by fewer triangles than a triangulated free space needs.
///
/// A triangle is a common neighbor `c` of both endpoints, placed on the left
/// or right of `a -> b` by the sign of `orient(a, b, c)`; collinear neighbors
/// and triangles whose vertices all belong to one polygon do not count.
/// Polygon boundary edges need a triangle on one side (the free one), all
/// other edges a triangle on each side.
pub fn open_edges(mesh: &Mesh) -> Vec<Edge> {
    let g = &mesh.graph;
    let same_polygon = |u: usize, v: usize, w: usize| {
        mesh.polygons
            .iter()
            .any(|r| r.contains(u) && r.contains(v) && r.contains(w))
    };
    g.edges()
        .filter(|&(a, b)| {
            let (pa, pb) = (g.point(a), g.point(b));
            let (mut left, mut right) = (false, false);
            for &c in g.neighbors(a).intersection(g.neighbors(b)) {
                if same_polygon(a, b, c) {
                    continue;
                }
                let side = orient(pa, pb, g.point(c));
                left |= side > 0.0;
                right |= side < 0.0;
            }
            if mesh.polygons.iter().any(|r| r.is_boundary_edge(a, b)) {
                !(left || right)
            } else {
                !(left && right)
            }
        })
        .collect()
}

/// Twice the signed area of `(a, b, c)`; positive when `c` lies left of `a -> b`.
fn orient(a: Point, b: Point, c: Point) -> f64 {
    let (u, v) = (b - a, c - a);
    u.x * v.y - u.y * v.x
}

/// Summary of every structural check.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    pub asymmetric: Vec<Edge>,
    pub missing_boundary: Vec<Edge>,
    pub intra_polygon: Vec<Edge>,
    pub crossings: Vec<(Edge, Edge)>,
    pub open: Vec<Edge>,
}

impl ValidationReport {
    /// Symmetric, planar, with every boundary and no polygon diagonal.
    /// Open edges are reported but do not make a mesh invalid.
    pub fn is_valid(&self) -> bool {
        self.asymmetric.is_empty()
            && self.missing_boundary.is_empty()
            && self.intra_polygon.is_empty()
            && self.crossings.is_empty()
    }
}

impl Mesh {
    /// Run all checks. The planarity check is O(E²).
    pub fn validate(&self, eps: f64) -> ValidationReport {
        ValidationReport {
            asymmetric: asymmetric_pairs(&self.graph),
            missing_boundary: missing_boundary_edges(self),
            intra_polygon: intra_polygon_diagonals(self),
            crossings: crossing_edges(&self.graph, eps),
            open: open_edges(self),
        }
    }
}
