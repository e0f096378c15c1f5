//! Headless match: a scripted hand plays one full round against the core
//! simulation, with the render tick and the detector on separate cadences.

mod bot;

use anyhow::Context;
use gallery_core::{
    Camera, GameConfig, GameEngine, GameEvent, GestureConfig, GestureInterpreter, ScreenSize,
    ShelfLayout, ShotOutcome, World,
};
use rand::prelude::*;
use std::time::{Duration, Instant};

const RENDER_DT_SEC: f32 = 1.0 / 60.0;
const DETECT_INTERVAL_SEC: f32 = 1.0 / 24.0;
const SCREEN: ScreenSize = ScreenSize::new(1280.0, 720.0);

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let realtime = std::env::args().any(|a| a == "--realtime");
    let seed = std::env::args()
        .skip_while(|a| a != "--seed")
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("--seed expects an integer")?
        .unwrap_or(7);

    let config = GameConfig::default();
    config.validate()?;
    let gesture_config = GestureConfig::default();
    gesture_config.validate()?;

    let world = World::build(&ShelfLayout::default(), &config)?;
    let mut camera = Camera::default();
    camera.set_viewport(SCREEN.width, SCREEN.height);
    let caster = world.caster(camera.clone());
    let mut engine = GameEngine::new(config, world.targets.clone());
    let mut gestures = GestureInterpreter::new(gesture_config);
    let mut hand = bot::ScriptedHand::new(&world, camera, SCREEN, seed);
    let mut rng = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);

    let mut events = Vec::new();
    engine.start(&mut events);

    let mut shots = 0u32;
    let mut hits = 0u32;
    let mut until_detect = 0.0_f32;
    let wall_start = Instant::now();

    while engine.is_playing() {
        // Render tick.
        engine.update(RENDER_DT_SEC, &mut events);
        gestures.tick(RENDER_DT_SEC);

        // Detector callback, on its own jittery cadence.
        until_detect -= RENDER_DT_SEC;
        if until_detect <= 0.0 {
            let interval = DETECT_INTERVAL_SEC * rng.gen_range(0.7..1.3);
            until_detect += interval;
            let frame_hand = hand.next_frame(interval, engine.targets());
            let frame = gestures.observe(frame_hand.as_ref(), hand.screen());
            if let Some(aim) = frame.fire {
                shots += 1;
                let outcome = engine.shoot(aim.to_ndc(SCREEN), &caster, &mut events);
                if let ShotOutcome::Hit { .. } = outcome {
                    hits += 1;
                }
            }
        }

        for ev in events.drain(..) {
            match ev {
                GameEvent::MatchEnded { final_score } => {
                    log::info!("[native] final score {}", final_score)
                }
                other => log::trace!("[native] {:?}", other),
            }
        }

        if realtime {
            std::thread::sleep(Duration::from_secs_f32(RENDER_DT_SEC));
        }
    }

    let standing = engine.targets().iter().filter(|t| t.is_standing()).count();
    log::info!(
        "[native] shots={} hits={} standing={} score={} wall={:.2?}",
        shots,
        hits,
        standing,
        engine.state().score,
        wall_start.elapsed()
    );
    Ok(())
}
