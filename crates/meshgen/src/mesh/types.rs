//! Data types for the mesh graph and construction results.
//!
//! Kept small and explicit to make `build`, `oracle` and `complete` easy to read.

use std::collections::BTreeSet;
use std::fmt;

use crate::geom2::{Point, PROXIMITY_EPS};

/// Error type shared by the generator and the construction pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    InvalidParams { reason: String },
    UnknownVertex { id: usize },
}

impl MeshError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid mesh params: {reason}"),
            Self::UnknownVertex { id } => write!(f, "vertex id {id} is not in the graph"),
        }
    }
}

impl std::error::Error for MeshError {}

/// Points indexed by vertex id plus symmetric adjacency.
///
/// Neighbor sets are ordered so that iteration is deterministic and the
/// "skip lower neighbor" walk in the oracle visits each edge once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    points: Vec<Point>,
    adj: Vec<BTreeSet<usize>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point; its id is the previous point count.
    pub fn push_point(&mut self, p: Point) -> usize {
        self.points.push(p);
        self.adj.push(BTreeSet::new());
        self.points.len() - 1
    }

    /// Add the undirected edge `a–b`. Returns false if it already existed.
    ///
    /// Panics if either id is out of range; see [`Graph::try_connect`].
    pub fn connect(&mut self, a: usize, b: usize) -> bool {
        let fresh = self.adj[a].insert(b);
        self.adj[b].insert(a);
        fresh
    }

    /// Checked form of [`Graph::connect`].
    pub fn try_connect(&mut self, a: usize, b: usize) -> Result<bool, MeshError> {
        if a == b {
            return Err(MeshError::invalid(format!("self-loop on vertex {a}")));
        }
        for id in [a, b] {
            if id >= self.points.len() {
                return Err(MeshError::UnknownVertex { id });
            }
        }
        Ok(self.connect(a, b))
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_edges(&self) -> usize {
        self.adj.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn point(&self, id: usize) -> Point {
        self.points[id]
    }

    #[inline]
    pub fn neighbors(&self, id: usize) -> &BTreeSet<usize> {
        &self.adj[id]
    }

    #[inline]
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.adj.get(a).is_some_and(|n| n.contains(&b))
    }

    /// Each undirected edge once, as `(lower, higher)`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(c, ns)| ns.range(c + 1..).map(move |&d| (c, d)))
    }
}

/// Contiguous block of vertex ids owned by one registered polygon (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PolygonRange {
    pub first: usize,
    pub last: usize,
}

impl PolygonRange {
    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        self.first <= id && id <= self.last
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.last - self.first + 1
    }

    /// Cyclic boundary edges in registration order.
    pub fn boundary_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.vertex_count();
        (0..n).map(move |k| (self.first + k, self.first + (k + 1) % n))
    }

    /// Is `a–b` one of this polygon's boundary edges (either direction)?
    pub fn is_boundary_edge(&self, a: usize, b: usize) -> bool {
        if !(self.contains(a) && self.contains(b)) || a == b {
            return false;
        }
        let n = self.vertex_count();
        let (ka, kb) = (a - self.first, b - self.first);
        (ka + 1) % n == kb || (kb + 1) % n == ka
    }
}

/// Construction configuration.
#[derive(Clone, Copy, Debug)]
pub struct MeshCfg {
    /// Absolute tolerance handed to the segment predicates.
    pub eps: f64,
    /// Cap on completion passes. `None` derives `n(n-1)/2 + 1` from the
    /// vertex count, which no terminating run can exceed.
    pub max_passes: Option<usize>,
}

impl Default for MeshCfg {
    fn default() -> Self {
        Self {
            eps: PROXIMITY_EPS,
            max_passes: None,
        }
    }
}

/// Why the completion loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// A full pass accepted no edge.
    Converged,
    /// The pass cap was reached first.
    PassLimit,
}

/// Counters from the triangulation-completion phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionReport {
    pub passes: usize,
    pub edges_added: usize,
    pub termination: Termination,
}

impl CompletionReport {
    #[inline]
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Finished mesh: graph, polygon ranges (bounding square first) and run summary.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub graph: Graph,
    pub polygons: Vec<PolygonRange>,
    pub visibility_edges: usize,
    pub completion: CompletionReport,
    /// Edges bordered by fewer triangles than a triangulated free space needs.
    pub open_edges: Vec<(usize, usize)>,
}

impl Mesh {
    /// True when completion converged and no edge is left open.
    pub fn is_fully_triangulated(&self) -> bool {
        self.completion.converged() && self.open_edges.is_empty()
    }

    /// Polygon range owning `id`, if any.
    pub fn polygon_of(&self, id: usize) -> Option<usize> {
        self.polygons.iter().position(|r| r.contains(id))
    }

    /// Obstacle polygons only (the bounding square is range 0).
    pub fn obstacles(&self) -> &[PolygonRange] {
        self.polygons.get(1..).unwrap_or(&[])
    }
}
