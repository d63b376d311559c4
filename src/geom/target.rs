//! Hit-testable target kinds
//!
//! Games mix rectangular prizes, round pegs, and wigglers on the same field.
//! `Target` keeps them in one list and dispatches to the right predicate.

use serde::{Deserialize, Serialize};

use super::collision::{Hitbox, collides};
use super::proximity::{Ring, Wiggler, is_touching};
use super::vector::Vector2D;
use crate::settings::Settings;

/// A region a point can land on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    Box(Hitbox),
    Ring(Ring),
    Wiggler(Wiggler),
}

impl Target {
    /// Whether `point` hits this target
    ///
    /// `use_previous` selects last frame's corner for boxes; rings and
    /// wigglers carry no history and ignore it.
    pub fn hit(&self, point: Vector2D, use_previous: bool) -> bool {
        match self {
            Target::Box(hitbox) => collides(point, hitbox, use_previous),
            Target::Ring(ring) => ring.contains(point),
            Target::Wiggler(wiggler) => is_touching(point.x, point.y, wiggler),
        }
    }
}

/// Index of the first target in `targets` hit by `point`
pub fn first_hit(point: Vector2D, targets: &[Target], use_previous: bool) -> Option<usize> {
    targets.iter().position(|t| t.hit(point, use_previous))
}

/// First target hit this frame, or last frame if `settings` allows it
///
/// Every target is tried against the current frame before any is tried
/// against the previous one.
pub fn first_hit_with(point: Vector2D, targets: &[Target], settings: &Settings) -> Option<usize> {
    first_hit(point, targets, false).or_else(|| {
        if settings.check_previous_frame() {
            first_hit(point, targets, true)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::vector::vec2;

    fn field() -> Vec<Target> {
        vec![
            Target::Box(Hitbox::new(vec2(0.0, 0.0), 10.0, 10.0)),
            Target::Ring(Ring::new(vec2(50.0, 0.0), 5.0)),
            Target::Wiggler(Wiggler::new(vec2(100.0, 0.0), 3.0)),
        ]
    }

    #[test]
    fn test_dispatch_by_kind() {
        let targets = field();
        assert_eq!(first_hit(vec2(5.0, 5.0), &targets, false), Some(0));
        assert_eq!(first_hit(vec2(53.0, 4.0), &targets, false), Some(1));
        assert_eq!(first_hit(vec2(100.0, 3.0), &targets, false), Some(2));
        assert_eq!(first_hit(vec2(75.0, 0.0), &targets, false), None);
    }

    #[test]
    fn test_first_hit_prefers_slice_order() {
        let targets = vec![
            Target::Ring(Ring::new(vec2(5.0, 5.0), 20.0)),
            Target::Box(Hitbox::new(vec2(0.0, 0.0), 10.0, 10.0)),
        ];
        assert_eq!(first_hit(vec2(5.0, 5.0), &targets, false), Some(0));
    }

    #[test]
    fn test_previous_frame_only_affects_boxes() {
        let mut hitbox = Hitbox::new(vec2(0.0, 0.0), 10.0, 10.0);
        hitbox.step_to(vec2(30.0, 0.0));
        let boxed = Target::Box(hitbox);
        assert!(!boxed.hit(vec2(5.0, 5.0), false));
        assert!(boxed.hit(vec2(5.0, 5.0), true));

        let ring = Target::Ring(Ring::new(vec2(0.0, 0.0), 1.0));
        assert_eq!(
            ring.hit(vec2(0.5, 0.5), false),
            ring.hit(vec2(0.5, 0.5), true)
        );
    }

    #[test]
    fn test_first_hit_with_history_mode() {
        use crate::settings::HistoryMode;

        let mut hitbox = Hitbox::new(vec2(0.0, 0.0), 10.0, 10.0);
        hitbox.step_to(vec2(40.0, 0.0));
        let targets = vec![
            Target::Box(hitbox),
            Target::Ring(Ring::new(vec2(0.0, 20.0), 2.0)),
        ];
        let point = vec2(5.0, 5.0);

        assert_eq!(first_hit_with(point, &targets, &Settings::default()), Some(0));

        let strict = Settings {
            history: HistoryMode::Current,
            ..Settings::default()
        };
        assert_eq!(first_hit_with(point, &targets, &strict), None);
    }

    #[test]
    fn test_json_tagging() {
        let json = r#"{"kind":"wiggler","position":[1.0,2.0],"size":4.0}"#;
        let target: Target = serde_json::from_str(json).unwrap();
        assert_eq!(target, Target::Wiggler(Wiggler::new(vec2(1.0, 2.0), 4.0)));
    }
}
