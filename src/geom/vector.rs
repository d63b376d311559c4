//! 2D vector type and the orientation predicate
//!
//! Everything in the geometry core works in `f64` world units, so the
//! vector type is glam's double-precision `DVec2`.

use glam::DVec2;
use robust::Coord;

/// A 2D point or displacement in world units
pub type Vector2D = DVec2;

/// Shorthand constructor
#[inline]
pub fn vec2(x: f64, y: f64) -> Vector2D {
    DVec2::new(x, y)
}

/// Counter-clockwise test for the triplet `p, q, r`
///
/// Returns true iff `(r.y - p.y) * (q.x - p.x) > (q.y - p.y) * (r.x - p.x)`,
/// with the sign of the determinant computed exactly. The comparison is
/// strict: collinear triplets are "not counter-clockwise". Any NaN or
/// infinite coordinate makes the result false.
#[inline]
pub fn ccw(p: Vector2D, q: Vector2D, r: Vector2D) -> bool {
    if !(p.is_finite() && q.is_finite() && r.is_finite()) {
        return false;
    }
    robust::orient2d(coord(p), coord(q), coord(r)) > 0.0
}

#[inline]
fn coord(v: Vector2D) -> Coord<f64> {
    Coord { x: v.x, y: v.y }
}
