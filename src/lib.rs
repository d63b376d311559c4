//! Tangle Geom - collision predicates for physics-style mini-games
//!
//! Core modules:
//! - `geom`: Pure geometry predicates (boxes, rings, wigglers, segment crossings)
//! - `rope`: Index-based connection graph with tangle scanning
//! - `settings`: Data-driven collision tuning
//! - `bindings`: WASM exports for browser hosts

#[cfg(target_arch = "wasm32")]
pub mod bindings;
pub mod geom;
pub mod rope;
pub mod settings;

pub use geom::{
    Hitbox, LineSegment, Ring, Target, Vector2D, Wiggler, collides, for_each_pair, intersects,
    is_touching,
};
pub use rope::{Connection, NodeId, Rope, RopeError};
pub use settings::{HistoryMode, Settings, SettingsError};

/// Collision constants
pub mod consts {
    /// Segments are scaled toward their midpoint by this factor before crossing tests
    pub const SHORTEN_FACTOR: f64 = 0.99;

    /// Nominal host frame step (60 Hz display refresh)
    pub const SIM_DT: f64 = 1.0 / 60.0;

    /// Demo rope defaults
    pub const DEMO_NODES: usize = 12;
    pub const DEMO_LINK_LENGTH: f64 = 20.0;
    pub const DEMO_FRAMES: u32 = 120;
    /// Max per-frame node jitter in the demo, world units per second
    pub const DEMO_JITTER_SPEED: f64 = 240.0;
}
