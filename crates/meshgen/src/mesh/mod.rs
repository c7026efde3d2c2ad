//! Obstacle mesh: graph store, intersection oracle, visibility edges, and
//! triangulation completion.
//!
//! Purpose
//! - Register the unit bounding square and the obstacle polygons as
//!   contiguous id ranges with cyclic boundary edges.
//! - Connect square corners to every obstacle vertex they see, then close
//!   open triangles greedily until a full pass accepts nothing.
//! - Never draw an edge across an existing edge or between two vertices of
//!   the same polygon.
//!
//! Layout
//! - `types.rs` (graph, ranges, config, reports), `oracle.rs` (crossing
//!   oracle), `build.rs` (registration, visibility, pipeline), `complete.rs`
//!   (completion state object), `validate.rs` (structural checks).

mod build;
mod complete;
mod oracle;
mod types;
pub mod validate;

pub use build::{
    bounding_square, build_mesh, connect_visibility, generate_mesh, register_polygon, MeshBuilder,
    SQUARE_CORNERS,
};
pub use complete::{Pass, TriangleCompleter};
pub use oracle::segment_intersects_any;
pub use types::{
    CompletionReport, Graph, Mesh, MeshCfg, MeshError, PolygonRange, Termination,
};
pub use validate::ValidationReport;
