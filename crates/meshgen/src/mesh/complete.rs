//! Triangulation completion: greedy fixed-point closing of open triangles.
//!
//! A pass scans vertices `a` upward from the cursor. For each neighbor `b` of
//! `a`, the candidates are `N(a) \ N(b) \ {b}`: vertices that would close the
//! triangle `a-b-c` once `b–c` exists. The first candidate that is not in
//! `b`'s polygon and whose segments `a–c` and `b–c` cross nothing is
//! connected to `b`, and the pass ends with the cursor left at `a`. A pass
//! that accepts nothing is the fixed point.

use tracing::trace;

use super::oracle::segment_intersects_any;
use super::types::{CompletionReport, Graph, MeshCfg, PolygonRange, Termination};

/// Outcome of one scan pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pass {
    /// Edge `b–c` was added; the next pass resumes at `resume_at`.
    Added { b: usize, c: usize, resume_at: usize },
    /// No acceptable edge remained.
    Done,
}

/// Resumable completion state over a mutably borrowed graph.
#[derive(Debug)]
pub struct TriangleCompleter<'a> {
    graph: &'a mut Graph,
    polygons: &'a [PolygonRange],
    cfg: MeshCfg,
    start: usize,
    passes: usize,
    edges_added: usize,
    done: bool,
}

impl<'a> TriangleCompleter<'a> {
    pub fn new(graph: &'a mut Graph, polygons: &'a [PolygonRange], cfg: MeshCfg) -> Self {
        Self {
            graph,
            polygons,
            cfg,
            start: 0,
            passes: 0,
            edges_added: 0,
            done: false,
        }
    }

    /// Vertex id the next pass starts from.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn passes(&self) -> usize {
        self.passes
    }

    #[inline]
    pub fn edges_added(&self) -> usize {
        self.edges_added
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &*self.graph
    }

    /// Pass cap in effect for `run`.
    pub fn pass_limit(&self) -> usize {
        self.cfg.max_passes.unwrap_or_else(|| {
            let n = self.graph.num_points();
            n * n.saturating_sub(1) / 2 + 1
        })
    }

    /// Run one scan pass. Once `Done` has been reported, further calls
    /// return `Done` without scanning.
    pub fn step(&mut self) -> Pass {
        if self.done {
            return Pass::Done;
        }
        self.passes += 1;
        for a in self.start..self.graph.num_points() {
            if let Some((b, c)) = self.find_closing_edge(a) {
                self.graph.connect(b, c);
                self.edges_added += 1;
                self.start = a;
                trace!(a, b, c, pass = self.passes, "closing edge");
                return Pass::Added { b, c, resume_at: a };
            }
        }
        self.done = true;
        Pass::Done
    }

    /// Repeat passes until the fixed point or the pass cap.
    pub fn run(&mut self) -> CompletionReport {
        let limit = self.pass_limit();
        let termination = loop {
            if self.done {
                break Termination::Converged;
            }
            if self.passes >= limit {
                break Termination::PassLimit;
            }
            self.step();
        };
        CompletionReport {
            passes: self.passes,
            edges_added: self.edges_added,
            termination,
        }
    }

    /// First acceptable `(b, c)` for vertex `a`, in neighbor order.
    fn find_closing_edge(&self, a: usize) -> Option<(usize, usize)> {
        let g = &*self.graph;
        let eps = self.cfg.eps;
        let n_a = g.neighbors(a);
        for &b in n_a {
            let n_b = g.neighbors(b);
            for &c in n_a.difference(n_b) {
                if c == b {
                    continue;
                }
                if self.same_polygon(b, c) {
                    continue;
                }
                if segment_intersects_any(g, a, c, eps) || segment_intersects_any(g, b, c, eps) {
                    continue;
                }
                return Some((b, c));
            }
        }
        None
    }

    fn same_polygon(&self, u: usize, v: usize) -> bool {
        self.polygons
            .iter()
            .any(|r| r.contains(u) && r.contains(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    /// Unit square corners joined by a fan from vertex 0, no polygons.
    fn fan() -> Graph {
        let mut g = Graph::new();
        g.push_point(vector![0.0, 0.0]);
        g.push_point(vector![1.0, 0.0]);
        g.push_point(vector![1.0, 1.0]);
        g.push_point(vector![0.0, 1.0]);
        g.connect(0, 1);
        g.connect(0, 2);
        g.connect(0, 3);
        g
    }

    #[test]
    fn closes_fan_into_triangles() {
        let mut g = fan();
        let report = TriangleCompleter::new(&mut g, &[], MeshCfg::default()).run();
        assert!(report.converged());
        assert_eq!(report.edges_added, 2);
        // Passes: one per added edge plus the final empty pass.
        assert_eq!(report.passes, 3);
        assert!(g.has_edge(1, 2));
        assert!(g.has_edge(2, 3));
        // 1–3 would cross 0–2.
        assert!(!g.has_edge(1, 3));
    }

    #[test]
    fn step_reports_edges_and_cursor() {
        let mut g = fan();
        let mut comp = TriangleCompleter::new(&mut g, &[], MeshCfg::default());
        assert_eq!(comp.cursor(), 0);
        // a = 0, b = 1: candidates {2, 3}; 2 is accepted first.
        assert_eq!(
            comp.step(),
            Pass::Added {
                b: 1,
                c: 2,
                resume_at: 0
            }
        );
        assert_eq!(comp.cursor(), 0);
        // a = 0, b = 1: 3 blocked by 0–2; b = 2: candidate 3 accepted.
        assert_eq!(
            comp.step(),
            Pass::Added {
                b: 2,
                c: 3,
                resume_at: 0
            }
        );
        assert_eq!(comp.step(), Pass::Done);
        assert!(comp.is_done());
        assert_eq!(comp.passes(), 3);
        // Idempotent once done.
        assert_eq!(comp.step(), Pass::Done);
        assert_eq!(comp.passes(), 3);
        assert_eq!(comp.edges_added(), 2);
    }

    #[test]
    fn same_polygon_candidates_rejected() {
        let mut g = fan();
        let ranges = [PolygonRange { first: 1, last: 3 }];
        let report = TriangleCompleter::new(&mut g, &ranges, MeshCfg::default()).run();
        assert!(report.converged());
        assert_eq!(report.edges_added, 0);
        assert_eq!(report.passes, 1);
    }

    #[test]
    fn pass_limit_stops_early() {
        let mut g = fan();
        let cfg = MeshCfg {
            max_passes: Some(1),
            ..MeshCfg::default()
        };
        let report = TriangleCompleter::new(&mut g, &[], cfg).run();
        assert_eq!(report.termination, Termination::PassLimit);
        assert_eq!(report.passes, 1);
        assert_eq!(report.edges_added, 1);
        assert!(!report.converged());
    }

    #[test]
    fn derived_pass_limit_from_vertex_count() {
        let mut g = fan();
        let comp = TriangleCompleter::new(&mut g, &[], MeshCfg::default());
        assert_eq!(comp.pass_limit(), 4 * 3 / 2 + 1);
        let mut empty = Graph::new();
        let comp = TriangleCompleter::new(&mut empty, &[], MeshCfg::default());
        assert_eq!(comp.pass_limit(), 1);
    }

    #[test]
    fn empty_graph_converges_immediately() {
        let mut g = Graph::new();
        let report = TriangleCompleter::new(&mut g, &[], MeshCfg::default()).run();
        assert!(report.converged());
        assert_eq!(report.passes, 1);
    }
}
