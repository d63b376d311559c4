//! Axis-aligned point-in-rectangle collision
//!
//! The ring-toss game asks "is the ring's landing point inside this prize box?"
//! every frame. Fast boxes can skip past a point between two frames, so the
//! test can be run against where the box was last frame instead of where it
//! is now. That reduces tunneling; it is not a swept-volume test.

use serde::{Deserialize, Serialize};

use super::vector::Vector2D;

/// RGBA color carried for the renderer; the predicates never read it
pub type Color = [f32; 4];

/// An axis-aligned box entity owned by the host simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    /// Top-left corner this frame
    pub pos: Vector2D,
    /// Top-left corner last frame (host keeps this current)
    pub previous_pos: Vector2D,
    pub width: f64,
    pub height: f64,
    /// Orientation in radians. Not used by `collides`, which stays axis-aligned.
    #[serde(default)]
    pub angle: f64,
    #[serde(default = "default_color")]
    pub color: Color,
    #[serde(default)]
    pub speed: f64,
}

fn default_color() -> Color {
    [1.0, 1.0, 1.0, 1.0]
}

impl Hitbox {
    /// A stationary box (previous position equals current)
    pub fn new(pos: Vector2D, width: f64, height: f64) -> Self {
        Self {
            pos,
            previous_pos: pos,
            width,
            height,
            angle: 0.0,
            color: default_color(),
            speed: 0.0,
        }
    }

    /// Top-left corner for the requested frame
    #[inline]
    pub fn corner(&self, use_previous: bool) -> Vector2D {
        if use_previous {
            self.previous_pos
        } else {
            self.pos
        }
    }

    /// Record a new position, shifting the current one into history
    ///
    /// Call once per frame before testing with `use_previous = true`.
    pub fn step_to(&mut self, new_pos: Vector2D) {
        self.previous_pos = self.pos;
        self.pos = new_pos;
    }
}

/// Check whether `point` lies inside `hitbox` (bounds inclusive)
///
/// With `use_previous` the box is placed at `previous_pos`; `pos` is then not
/// consulted at all. Zero width or height degenerates to a line or point test.
pub fn collides(point: Vector2D, hitbox: &Hitbox, use_previous: bool) -> bool {
    let corner = hitbox.corner(use_previous);

    point.x >= corner.x
        && point.x <= corner.x + hitbox.width
        && point.y >= corner.y
        && point.y <= corner.y + hitbox.height
}

/// Check against both the current and the previous frame
pub fn collides_either(point: Vector2D, hitbox: &Hitbox) -> bool {
    collides(point, hitbox, false) || collides(point, hitbox, true)
}
