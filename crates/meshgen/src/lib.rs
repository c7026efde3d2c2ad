//! Planar mesh generation around regular-polygon obstacles.
//!
//! The unit square is the outer boundary; obstacles are regular polygons at
//! given centers. Construction registers every polygon as a contiguous id
//! range, links square corners to the obstacle vertices they see, then closes
//! open triangles greedily until a fixed point. The result is a graph whose
//! straight-line edges never cross.
//!
//! The crate prints nothing. It emits `tracing` events that stay silent
//! unless the caller installs a subscriber.

pub mod api;
pub mod geom2;
pub mod mesh;
pub mod polygons;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::Point;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{is_near, segments_intersect, Point, PROXIMITY_EPS};
    pub use crate::mesh::{
        build_mesh, generate_mesh, Graph, Mesh, MeshBuilder, MeshCfg, MeshError, PolygonRange,
    };
    pub use crate::polygons::{RegularPolygonCfg, ReplayToken, ScatterCfg};
}
