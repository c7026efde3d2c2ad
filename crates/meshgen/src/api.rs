//! Curated surface for drivers and bindings.
//!
//! Groups the entry points a caller needs to build, inspect and check a mesh,
//! so the CLI and benches import from one place.

// 2D primitives
pub use crate::geom2::{is_near, segments_intersect, segments_intersect_eps, Point, PROXIMITY_EPS};
// Obstacle rings and center placement
pub use crate::polygons::{
    regular_polygon, regular_polygons, scatter_centers, RegularPolygonCfg, ReplayToken,
    ScatterCfg,
};
// Construction
pub use crate::mesh::{
    bounding_square, build_mesh, connect_visibility, generate_mesh, register_polygon,
    segment_intersects_any, CompletionReport, Graph, Mesh, MeshBuilder, MeshCfg, MeshError, Pass,
    PolygonRange, Termination, TriangleCompleter,
};
// Checks
pub use crate::mesh::validate::{
    asymmetric_pairs, crossing_edges, intra_polygon_diagonals, missing_boundary_edges, open_edges,
    ValidationReport,
};

/// Mesh with the default polygon shape (radius 0.1, hexagons) and tolerances.
pub fn mesh_with_defaults(centers: &[Point]) -> Result<Mesh, MeshError> {
    build_mesh(centers, &RegularPolygonCfg::default(), MeshCfg::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn defaults_build_hexagons() {
        let mesh = mesh_with_defaults(&[vector![0.6, 0.8]]).unwrap();
        assert_eq!(mesh.graph.num_points(), 10);
        assert_eq!(mesh.obstacles().len(), 1);
        assert_eq!(mesh.polygon_of(7), Some(1));
        assert_eq!(mesh.polygon_of(2), Some(0));
        assert_eq!(mesh.polygon_of(10), None);
    }
}
