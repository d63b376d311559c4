//! Segment crossing test
//!
//! Rope and worm segments meet at shared nodes. A plain orientation test
//! would flag every joint as a crossing, so both segments are pulled a little
//! toward their midpoints before testing.

use serde::{Deserialize, Serialize};

use super::vector::{Vector2D, ccw};
use crate::consts::SHORTEN_FACTOR;

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Vector2D,
    pub end: Vector2D,
}

impl LineSegment {
    pub fn new(start: Vector2D, end: Vector2D) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2D {
        (self.start + self.end) * 0.5
    }

    /// Whether either endpoint of `self` equals either endpoint of `other`
    pub fn shares_endpoint(&self, other: &LineSegment) -> bool {
        self.start == other.start
            || self.start == other.end
            || self.end == other.start
            || self.end == other.end
    }

    /// Scale both endpoints toward the midpoint by `factor`
    ///
    /// `factor = 1.0` returns the segment unchanged; `0.99` moves each
    /// endpoint 1% of the way to the center.
    pub fn shortened(&self, factor: f64) -> Self {
        let mid = self.midpoint();
        Self {
            start: mid + (self.start - mid) * factor,
            end: mid + (self.end - mid) * factor,
        }
    }
}

/// Check whether two segments cross, ignoring contact at shared endpoints
///
/// Symmetric in its arguments. Collinear and NaN inputs report no crossing.
#[inline]
pub fn intersects(a: &LineSegment, b: &LineSegment) -> bool {
    intersects_with_factor(a, b, SHORTEN_FACTOR)
}

/// Crossing test with an explicit shortening factor
pub fn intersects_with_factor(a: &LineSegment, b: &LineSegment, factor: f64) -> bool {
    // Two segments through a common endpoint can only meet at that point,
    // and shortening removes it from both. Decide here rather than trust
    // the rounded shortened endpoints to stay on their lines.
    if factor < 1.0 && a.shares_endpoint(b) {
        return false;
    }
    let a = a.shortened(factor);
    let b = b.shortened(factor);
    crosses(a.start, a.end, b.start, b.end)
}

/// Orientation-based crossing test on raw endpoints `ab` and `cd`
#[inline]
fn crosses(a: Vector2D, b: Vector2D, c: Vector2D, d: Vector2D) -> bool {
    ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::vector::vec2;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
        LineSegment::new(vec2(x1, y1), vec2(x2, y2))
    }

    #[test]
    fn test_shortened_moves_one_percent() {
        let s = seg(0.0, 0.0, 10.0, 0.0).shortened(0.99);
        assert!((s.start.x - 0.05).abs() < 1e-12);
        assert!((s.end.x - 9.95).abs() < 1e-12);
        assert_eq!(s.midpoint(), vec2(5.0, 0.0));
    }

    #[test]
    fn test_crossing_diagonals() {
        let a = seg(0.0, 0.0, 10.0, 10.0);
        let b = seg(0.0, 10.0, 10.0, 0.0);
        assert!(intersects(&a, &b));
        assert!(intersects(&b, &a));
    }

    #[test]
    fn test_shared_endpoint_is_not_a_crossing() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(10.0, 0.0, 10.0, 10.0);
        assert!(!intersects(&a, &b));
        assert!(!intersects(&b, &a));
    }

    #[test]
    fn test_shared_endpoint_sharp_fold() {
        // Two rope links folding back on each other at the shared node
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(10.0, 0.0, 0.0, 1.0);
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_collinear_shared_endpoint_is_symmetric() {
        // Both lie on y = 0.6 - x/7 and start at the same node
        let a = seg(0.0, 0.6, 3.5, 0.1);
        let b = seg(0.0, 0.6, 4.2, 0.0);
        assert!(!intersects(&a, &b));
        assert!(!intersects(&b, &a));
    }

    #[test]
    fn test_straight_continuation_is_not_a_crossing() {
        let a = seg(0.0, 0.6, 3.5, 0.1);
        let b = seg(3.5, 0.1, 7.0, -0.4);
        assert!(!intersects(&a, &b));
        assert!(!intersects(&b, &a));
    }

    #[test]
    fn test_near_collinear_grid_is_symmetric() {
        let coords: Vec<f64> = (0..5).map(|i| i as f64 * 0.3).collect();
        let mut segs = Vec::new();
        for &x1 in &coords {
            for &y1 in &coords {
                for &x2 in &coords {
                    segs.push(seg(x1, y1, x2, y1 * 0.7 + x2 * 0.1));
                }
            }
        }
        for a in &segs {
            for b in &segs {
                assert_eq!(intersects(a, b), intersects(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_shares_endpoint() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        assert!(a.shares_endpoint(&seg(10.0, 0.0, 5.0, 5.0)));
        assert!(a.shares_endpoint(&seg(5.0, 5.0, 0.0, 0.0)));
        assert!(!a.shares_endpoint(&seg(1.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_parallel_segments() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(0.0, 5.0, 10.0, 5.0);
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_collinear_overlap_is_not_reported() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(5.0, 0.0, 15.0, 0.0);
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_t_junction_near_end() {
        // b's endpoint sits on a's interior; shortening pulls it off
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(5.0, 0.0, 5.0, 10.0);
        assert!(!intersects(&a, &b));

        // Pushed through, it crosses
        let b = seg(5.0, -1.0, 5.0, 10.0);
        assert!(intersects(&a, &b));
    }

    #[test]
    fn test_unshortened_factor_flags_shared_joint() {
        let a = seg(0.0, 0.0, 10.0, 0.0);
        let b = seg(10.0, 0.0, 10.0, 10.0);
        assert!(intersects_with_factor(&a, &b, 1.0));
        assert!(!intersects_with_factor(&a, &b, SHORTEN_FACTOR));
    }

    #[test]
    fn test_degenerate_point_segment() {
        let a = seg(5.0, 5.0, 5.0, 5.0);
        let b = seg(0.0, 0.0, 10.0, 10.0);
        assert!(!intersects(&a, &b));
        assert!(!intersects(&b, &a));
    }

    #[test]
    fn test_nan_reports_no_crossing() {
        let a = seg(f64::NAN, 0.0, 10.0, 10.0);
        let b = seg(0.0, 10.0, 10.0, 0.0);
        assert!(!intersects(&a, &b));
        assert!(!intersects(&b, &a));
    }
}
