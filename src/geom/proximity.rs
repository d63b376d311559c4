//! Circular touch tests
//!
//! Squared distances only: these run per entity, per frame.

use serde::{Deserialize, Serialize};

use super::vector::Vector2D;

/// A wiggling creature with a circular touch radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wiggler {
    pub position: Vector2D,
    /// Touch radius
    pub size: f64,
}

impl Wiggler {
    pub fn new(position: Vector2D, size: f64) -> Self {
        Self { position, size }
    }
}

/// A ring-toss target region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub pos: Vector2D,
    pub radius: f64,
}

impl Ring {
    pub fn new(pos: Vector2D, radius: f64) -> Self {
        Self { pos, radius }
    }

    /// Whether `point` is within the ring (edge inclusive)
    #[inline]
    pub fn contains(&self, point: Vector2D) -> bool {
        within_radius(point, self.pos, self.radius)
    }
}

/// Whether `(x, y)` is within `wiggler.size` of its position (inclusive)
#[inline]
pub fn is_touching(x: f64, y: f64, wiggler: &Wiggler) -> bool {
    within_radius(Vector2D::new(x, y), wiggler.position, wiggler.size)
}

#[inline]
fn within_radius(point: Vector2D, center: Vector2D, radius: f64) -> bool {
    point.distance_squared(center) <= radius * radius
}
