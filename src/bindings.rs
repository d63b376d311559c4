//! WASM exports for browser game loops
//!
//! Flat `f64` arguments so JS can call these every animation frame without
//! allocating wrapper objects.

use wasm_bindgen::prelude::*;

use crate::geom::{Hitbox, LineSegment, Wiggler, collides, intersects, is_touching, vec2};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("tangle-geom loaded");
}

/// Point-in-box test; `(x, y)` is the box's top-left corner
#[wasm_bindgen]
pub fn collides_rect(px: f64, py: f64, x: f64, y: f64, width: f64, height: f64) -> bool {
    collides(vec2(px, py), &Hitbox::new(vec2(x, y), width, height), false)
}

/// Crossing test for segments `(x1,y1)-(x2,y2)` and `(x3,y3)-(x4,y4)`
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn segments_intersect(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
) -> bool {
    intersects(
        &LineSegment::new(vec2(x1, y1), vec2(x2, y2)),
        &LineSegment::new(vec2(x3, y3), vec2(x4, y4)),
    )
}

#[wasm_bindgen]
pub fn is_touching_circle(x: f64, y: f64, cx: f64, cy: f64, size: f64) -> bool {
    is_touching(x, y, &Wiggler::new(vec2(cx, cy), size))
}
