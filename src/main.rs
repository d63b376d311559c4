//! Tangle Geom demo entry point
//!
//! Drives a jittering rope and a sliding prize box with a fixed timestep,
//! logging tangles and ring landings. Usage:
//!
//! ```text
//! RUST_LOG=info tangle-geom [seed] [settings.json] [current|previous]
//! ```

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), tangle_geom::SettingsError> {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use tangle_geom::consts::*;
    use tangle_geom::geom::{Hitbox, Ring, Target, first_hit_with, vec2};
    use tangle_geom::{HistoryMode, Rope, Settings};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42_u64);
    let mut settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(mode) = args.next() {
        match HistoryMode::from_str(&mode) {
            Some(history) => settings.history = history,
            None => log::warn!(
                "Unknown history mode {:?}, keeping {}",
                mode,
                settings.history.as_str()
            ),
        }
    }
    log::info!("Tangle Geom (native) starting with seed: {}", seed);
    log::info!(
        "shorten_factor={} history={}",
        settings.shorten_factor,
        settings.history.as_str()
    );

    let mut rng = Pcg32::seed_from_u64(seed);

    let start: Vec<_> = (0..DEMO_NODES)
        .map(|i| vec2(i as f64 * DEMO_LINK_LENGTH, 0.0))
        .collect();
    let mut rope = Rope::chain(&start);

    let mut prize = Hitbox::new(vec2(0.0, 40.0), 30.0, 30.0);
    prize.speed = 600.0;
    let peg = Ring::new(vec2(200.0, 55.0), 12.0);
    let toss = vec2(90.0, 55.0);

    let mut last_crossings = 0;
    let mut frames_tangled = 0;
    let mut landed = None;

    for frame in 0..DEMO_FRAMES {
        let step = DEMO_JITTER_SPEED * SIM_DT;
        for node in rope.nodes_mut() {
            node.x += rng.random_range(-step..=step);
            node.y += rng.random_range(-step..=step);
        }

        let crossings = rope.crossings_with(&settings);
        if crossings.len() != last_crossings {
            log::info!("frame {}: {} crossing(s) {:?}", frame, crossings.len(), crossings);
            last_crossings = crossings.len();
        }
        if !crossings.is_empty() {
            frames_tangled += 1;
        }

        // Prize slides right; history lets a fast box still catch the toss
        prize.step_to(prize.pos + vec2(prize.speed * SIM_DT, 0.0));
        if landed.is_none() {
            let targets = [Target::Box(prize), Target::Ring(peg)];
            if let Some(hit) = first_hit_with(toss, &targets, &settings) {
                log::info!("frame {}: toss landed on target {}", frame, hit);
                landed = Some(frame);
            }
        }
    }

    log::info!(
        "done: {} of {} frames tangled, toss landed: {:?}",
        frames_tangled,
        DEMO_FRAMES,
        landed
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is bindings::start, this is just to satisfy the compiler
}
