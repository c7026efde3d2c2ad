//! Tolerance defaults for 2D predicates.
//!
//! Policy
//! - One fixed absolute tolerance, sized for coordinates normalized to roughly
//!   `[0, 1]`. Callers working at other scales pass their own value through
//!   `MeshCfg::eps` instead of changing this constant.

/// Proximity threshold for `is_near`: axis selection in the parametric
/// solve and the endpoint-proximity check both use it.
pub const PROXIMITY_EPS: f64 = 1e-9;
