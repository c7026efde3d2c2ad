//! Serializable mesh document (JSON output and `check` input).

use anyhow::{bail, Context, Result};
use meshgen::api::{CompletionReport, Graph, Mesh, PolygonRange, Termination};
use meshgen::Point;
use serde::{Deserialize, Serialize};

/// Construction parameters echoed into outputs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Params {
    pub centers: Vec<[f64; 2]>,
    pub radius: f64,
    pub vertex_count: u8,
    pub eps: f64,
    pub max_passes: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CompletionDoc {
    pub passes: usize,
    pub edges_added: usize,
    pub converged: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MeshDoc {
    pub version: String,
    pub params: Params,
    pub points: Vec<[f64; 2]>,
    pub edges: Vec<[usize; 2]>,
    /// Inclusive `[first, last]` id ranges; the bounding square comes first.
    pub polygons: Vec<[usize; 2]>,
    pub visibility_edges: usize,
    pub completion: CompletionDoc,
    pub open_edges: Vec<[usize; 2]>,
}

impl MeshDoc {
    pub fn from_mesh(mesh: &Mesh, params: Params) -> Self {
        Self {
            version: meshgen::VERSION.to_string(),
            params,
            points: mesh.graph.points().iter().map(|p| [p.x, p.y]).collect(),
            edges: mesh.graph.edges().map(|(a, b)| [a, b]).collect(),
            polygons: mesh.polygons.iter().map(|r| [r.first, r.last]).collect(),
            visibility_edges: mesh.visibility_edges,
            completion: CompletionDoc {
                passes: mesh.completion.passes,
                edges_added: mesh.completion.edges_added,
                converged: mesh.completion.converged(),
            },
            open_edges: mesh.open_edges.iter().map(|&(a, b)| [a, b]).collect(),
        }
    }

    /// Rebuild the mesh. Edge ids and polygon ranges are checked against the
    /// point list; ranges must tile it from id 0 in registration order.
    pub fn to_mesh(&self) -> Result<Mesh> {
        let mut graph = Graph::new();
        for &[x, y] in &self.points {
            graph.push_point(Point::new(x, y));
        }
        for &[a, b] in &self.edges {
            graph
                .try_connect(a, b)
                .with_context(|| format!("edge [{a}, {b}]"))?;
        }
        let mut polygons = Vec::with_capacity(self.polygons.len());
        let mut next = 0;
        for &[first, last] in &self.polygons {
            if first > last || last >= graph.num_points() {
                bail!("polygon range [{first}, {last}] outside 0..{}", graph.num_points());
            }
            if first != next {
                bail!("polygon range [{first}, {last}] must start at {next}");
            }
            polygons.push(PolygonRange { first, last });
            next = last + 1;
        }
        let termination = if self.completion.converged {
            Termination::Converged
        } else {
            Termination::PassLimit
        };
        Ok(Mesh {
            graph,
            polygons,
            visibility_edges: self.visibility_edges,
            completion: CompletionReport {
                passes: self.completion.passes,
                edges_added: self.completion.edges_added,
                termination,
            },
            open_edges: self.open_edges.iter().map(|&[a, b]| (a, b)).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshgen::api::generate_mesh;

    fn params() -> Params {
        Params {
            centers: vec![[0.6, 0.8]],
            radius: 0.1,
            vertex_count: 6,
            eps: 1e-9,
            max_passes: None,
            seed: None,
        }
    }

    #[test]
    fn document_rebuilds_same_graph() {
        let mesh = generate_mesh(&[Point::new(0.6, 0.8)], 0.1, 6).unwrap();
        let doc = MeshDoc::from_mesh(&mesh, params());
        assert_eq!(doc.points.len(), 10);
        assert_eq!(doc.polygons, vec![[0, 3], [4, 9]]);
        let text = serde_json::to_string(&doc).unwrap();
        let back: MeshDoc = serde_json::from_str(&text).unwrap();
        let rebuilt = back.to_mesh().unwrap();
        assert_eq!(rebuilt.graph, mesh.graph);
        assert_eq!(rebuilt.completion, mesh.completion);
    }

    #[test]
    fn dangling_edge_is_rejected() {
        let mesh = generate_mesh(&[], 0.1, 6).unwrap();
        let mut doc = MeshDoc::from_mesh(&mesh, params());
        doc.edges.push([0, 17]);
        assert!(doc.to_mesh().is_err());
        let mut doc = MeshDoc::from_mesh(&mesh, params());
        doc.polygons.push([2, 9]);
        assert!(doc.to_mesh().is_err());
    }

    #[test]
    fn self_loop_is_rejected() {
        let mesh = generate_mesh(&[], 0.1, 6).unwrap();
        let mut doc = MeshDoc::from_mesh(&mesh, params());
        doc.edges.push([2, 2]);
        let err = doc.to_mesh().unwrap_err();
        assert!(format!("{err:#}").contains("self-loop"), "{err:#}");
    }

    #[test]
    fn polygon_ranges_must_be_contiguous() {
        let mesh = generate_mesh(&[Point::new(0.6, 0.8)], 0.1, 6).unwrap();
        let doc = MeshDoc::from_mesh(&mesh, params());
        assert_eq!(doc.polygons, vec![[0, 3], [4, 9]]);
        assert!(doc.to_mesh().is_ok());

        let mut overlapping = doc.clone();
        overlapping.polygons = vec![[0, 3], [3, 9]];
        assert!(overlapping.to_mesh().is_err());

        let mut reordered = doc.clone();
        reordered.polygons = vec![[4, 9], [0, 3]];
        assert!(reordered.to_mesh().is_err());

        let mut gapped = doc.clone();
        gapped.polygons = vec![[0, 3], [5, 9]];
        assert!(gapped.to_mesh().is_err());
    }
}
