//! Mesh construction: polygon registration, visibility edges, and the
//! end-to-end pipeline.

use tracing::{debug, debug_span, warn};

use crate::geom2::Point;
use crate::polygons::{regular_polygons, RegularPolygonCfg};

use super::complete::TriangleCompleter;
use super::oracle::segment_intersects_any;
use super::types::{Graph, Mesh, MeshCfg, MeshError, PolygonRange};
use super::validate::open_edges;

/// Ids of the bounding-square corners; the square is always registered first.
pub const SQUARE_CORNERS: std::ops::Range<usize> = 0..4;

/// Unit bounding square, in registration order.
pub fn bounding_square() -> [Point; 4] {
    [
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 0.0),
    ]
}

/// Append `polygon` to the graph, record its id range, and wire its cyclic
/// boundary.
pub fn register_polygon(
    graph: &mut Graph,
    ranges: &mut Vec<PolygonRange>,
    polygon: &[Point],
) -> Result<PolygonRange, MeshError> {
    if polygon.len() < 3 {
        return Err(MeshError::invalid(format!(
            "polygon needs at least 3 vertices (got {})",
            polygon.len()
        )));
    }
    Ok(push_polygon(graph, ranges, polygon))
}

fn push_polygon(
    graph: &mut Graph,
    ranges: &mut Vec<PolygonRange>,
    polygon: &[Point],
) -> PolygonRange {
    let first = graph.num_points();
    for &p in polygon {
        graph.push_point(p);
    }
    let range = PolygonRange {
        first,
        last: first + polygon.len() - 1,
    };
    ranges.push(range);
    for (a, b) in range.boundary_edges() {
        graph.connect(a, b);
    }
    range
}

/// Connect every square corner to every obstacle vertex it sees.
///
/// Corners are processed in id order and obstacle vertices ascending, so
/// later candidates are tested against earlier accepted edges. Returns the
/// number of edges added.
pub fn connect_visibility(graph: &mut Graph, eps: f64) -> usize {
    let mut added = 0;
    for corner in SQUARE_CORNERS {
        for v in SQUARE_CORNERS.end..graph.num_points() {
            if segment_intersects_any(graph, corner, v, eps) {
                continue;
            }
            if graph.connect(corner, v) {
                added += 1;
            }
        }
    }
    added
}

/// Stage-by-stage construction.
///
/// `build_mesh` runs all stages in order; callers that want to inspect the
/// graph between stages drive the builder directly.
#[derive(Clone, Debug)]
pub struct MeshBuilder {
    graph: Graph,
    polygons: Vec<PolygonRange>,
    cfg: MeshCfg,
    visibility_edges: usize,
}

impl MeshBuilder {
    /// Start from the registered bounding square.
    pub fn new(cfg: MeshCfg) -> Self {
        let mut graph = Graph::new();
        let mut polygons = Vec::new();
        push_polygon(&mut graph, &mut polygons, &bounding_square());
        Self {
            graph,
            polygons,
            cfg,
            visibility_edges: 0,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn polygons(&self) -> &[PolygonRange] {
        &self.polygons
    }

    /// Register obstacle rings after the square (and after earlier obstacles).
    pub fn register_obstacles(&mut self, rings: &[Vec<Point>]) -> Result<&mut Self, MeshError> {
        for ring in rings {
            register_polygon(&mut self.graph, &mut self.polygons, ring)?;
        }
        debug!(
            obstacles = rings.len(),
            points = self.graph.num_points(),
            "registered obstacles"
        );
        Ok(self)
    }

    /// Corner-to-obstacle visibility edges.
    pub fn connect_visibility(&mut self) -> &mut Self {
        let added = connect_visibility(&mut self.graph, self.cfg.eps);
        self.visibility_edges += added;
        debug!(added, edges = self.graph.num_edges(), "visibility edges");
        self
    }

    /// Completion state object borrowing this builder's graph.
    pub fn completer(&mut self) -> TriangleCompleter<'_> {
        TriangleCompleter::new(&mut self.graph, &self.polygons, self.cfg)
    }

    /// Run completion to its fixed point and audit the result.
    pub fn finish(mut self) -> Mesh {
        let completion = self.completer().run();
        let mut mesh = Mesh {
            graph: self.graph,
            polygons: self.polygons,
            visibility_edges: self.visibility_edges,
            completion,
            open_edges: Vec::new(),
        };
        mesh.open_edges = open_edges(&mesh);
        if !completion.converged() {
            warn!(
                passes = completion.passes,
                "triangulation completion stopped at the pass limit"
            );
        }
        if !mesh.open_edges.is_empty() {
            warn!(
                open = mesh.open_edges.len(),
                "mesh leaves edges without enough adjacent triangles"
            );
        }
        mesh
    }
}

/// Build the mesh for obstacles at `centers`.
pub fn build_mesh(
    centers: &[Point],
    poly_cfg: &RegularPolygonCfg,
    cfg: MeshCfg,
) -> Result<Mesh, MeshError> {
    let _span = debug_span!("build_mesh", obstacles = centers.len()).entered();
    if !(cfg.eps.is_finite() && cfg.eps > 0.0) {
        return Err(MeshError::invalid(format!(
            "eps must be finite and > 0 (got {})",
            cfg.eps
        )));
    }
    let rings = regular_polygons(centers, poly_cfg)?;
    let mut builder = MeshBuilder::new(cfg);
    builder.register_obstacles(&rings)?.connect_visibility();
    let mesh = builder.finish();
    debug!(
        points = mesh.graph.num_points(),
        edges = mesh.graph.num_edges(),
        passes = mesh.completion.passes,
        "mesh built"
    );
    Ok(mesh)
}

/// Convenience: default tolerances and pass limit.
pub fn generate_mesh(centers: &[Point], radius: f64, vertex_count: u8) -> Result<Mesh, MeshError> {
    build_mesh(
        centers,
        &RegularPolygonCfg {
            radius,
            vertex_count,
        },
        MeshCfg::default(),
    )
}
