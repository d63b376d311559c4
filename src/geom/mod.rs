//! Geometry and collision predicates
//!
//! Pure functions over value snapshots. Nothing here holds state between
//! calls, reads a clock, or mutates its inputs:
//! - Inclusive bounds on all containment tests
//! - Strict orientation test for crossings
//! - NaN input resolves to "no hit", never a panic

pub mod collision;
pub mod pairs;
pub mod proximity;
pub mod segment;
pub mod target;
pub mod vector;

pub use collision::{Color, Hitbox, collides, collides_either};
pub use pairs::{find_pair, for_each_pair, for_each_pair_indexed, pair_count};
pub use proximity::{Ring, Wiggler, is_touching};
pub use segment::{LineSegment, intersects, intersects_with_factor};
pub use target::{Target, first_hit, first_hit_with};
pub use vector::{Vector2D, ccw, vec2};
