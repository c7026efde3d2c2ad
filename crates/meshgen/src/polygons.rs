//! Regular obstacle polygons and reproducible center placement.
//!
//! Model
//! - Every obstacle is a regular polygon: vertex `k` sits at angle
//!   `k·2π/vertex_count` on a circle of the shared radius around its center.
//! - Rings are returned unregistered; `mesh::build` assigns ids.
//! - `scatter_centers` draws non-overlapping centers inside the unit square.
//!   Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::Point;
use crate::mesh::MeshError;

/// Shared shape of all obstacle polygons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegularPolygonCfg {
    pub radius: f64,
    pub vertex_count: u8,
}

impl Default for RegularPolygonCfg {
    fn default() -> Self {
        Self {
            radius: 0.1,
            vertex_count: 6,
        }
    }
}

impl RegularPolygonCfg {
    pub fn validate(&self) -> Result<(), MeshError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MeshError::invalid(format!(
                "radius must be finite and > 0 (got {})",
                self.radius
            )));
        }
        if self.vertex_count < 3 {
            return Err(MeshError::invalid(format!(
                "vertex_count must be >= 3 (got {})",
                self.vertex_count
            )));
        }
        Ok(())
    }
}

/// One vertex ring around `center`.
pub fn regular_polygon(center: Point, cfg: &RegularPolygonCfg) -> Vec<Point> {
    let n = cfg.vertex_count as usize;
    (0..n)
        .map(|k| {
            let angle = (k as f64) * 2.0 * std::f64::consts::PI / (n as f64);
            Point::new(
                center.x + cfg.radius * angle.cos(),
                center.y + cfg.radius * angle.sin(),
            )
        })
        .collect()
}

/// One independent vertex ring per center, in input order.
pub fn regular_polygons(
    centers: &[Point],
    cfg: &RegularPolygonCfg,
) -> Result<Vec<Vec<Point>>, MeshError> {
    cfg.validate()?;
    if let Some(bad) = centers.iter().position(|c| !(c.x.is_finite() && c.y.is_finite())) {
        return Err(MeshError::invalid(format!("center {bad} is not finite")));
    }
    Ok(centers.iter().map(|&c| regular_polygon(c, cfg)).collect())
}

/// Replay token to make center draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Rejection-sampling configuration for `scatter_centers`.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    /// Obstacle radius the centers are spaced for.
    pub radius: f64,
    /// Extra clearance between neighboring polygons and to the square.
    pub gap: f64,
    /// Draws per center before giving up.
    pub max_attempts: usize,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 4,
            radius: 0.1,
            gap: 0.02,
            max_attempts: 1000,
        }
    }
}

/// Draw `count` centers whose circles (radius + gap) stay inside the unit
/// square and pairwise apart.
pub fn scatter_centers(cfg: ScatterCfg, tok: ReplayToken) -> Result<Vec<Point>, MeshError> {
    if !(cfg.radius.is_finite() && cfg.radius > 0.0 && cfg.gap.is_finite() && cfg.gap >= 0.0) {
        return Err(MeshError::invalid("scatter radius must be > 0 and gap >= 0"));
    }
    let lo = cfg.radius + cfg.gap;
    let hi = 1.0 - lo;
    if lo >= hi {
        return Err(MeshError::invalid(format!(
            "radius {} with gap {} does not fit the unit square",
            cfg.radius, cfg.gap
        )));
    }
    let min_dist = 2.0 * cfg.radius + cfg.gap;
    let mut rng = tok.to_std_rng();
    let mut centers: Vec<Point> = Vec::with_capacity(cfg.count);
    for i in 0..cfg.count {
        let placed = (0..cfg.max_attempts).find_map(|_| {
            let p = Point::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi));
            centers
                .iter()
                .all(|q| (p - q).norm() > min_dist)
                .then_some(p)
        });
        match placed {
            Some(p) => centers.push(p),
            None => {
                return Err(MeshError::invalid(format!(
                    "could not place center {i} of {} after {} attempts",
                    cfg.count, cfg.max_attempts
                )))
            }
        }
    }
    Ok(centers)
}
