// Match lifecycle and hit resolution against the real shelf world.

use gallery_core::*;
use glam::{Vec2, Vec3};

fn setup() -> (GameEngine, ShelfCaster) {
    let config = GameConfig::default();
    let world = World::build(&ShelfLayout::default(), &config).unwrap();
    let caster = world.caster(Camera::default());
    (GameEngine::new(config, world.targets), caster)
}

/// NDC position of a point on a figure, as seen by the caster's camera.
fn ndc_of(caster: &ShelfCaster, world_pos: Vec3) -> Vec2 {
    let cam = &caster.camera;
    let clip = cam.projection_matrix() * cam.view_matrix() * world_pos.extend(1.0);
    Vec2::new(clip.x / clip.w, clip.y / clip.w)
}

fn figure_center(caster: &ShelfCaster, id: TargetId) -> Vec3 {
    let hb = caster.hit_box(id).unwrap();
    hb.pivot + hb.center_offset
}

fn count_ended(events: &[GameEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, GameEvent::MatchEnded { .. }))
        .count()
}

#[test]
fn timer_runs_out_exactly_once() {
    let (mut engine, _) = setup();
    let mut events = Vec::new();
    engine.start(&mut events);
    for _ in 0..400 {
        engine.update(0.1, &mut events);
    }
    assert_eq!(engine.state().time_left, 0.0);
    assert!(!engine.is_playing());
    assert_eq!(engine.state().phase, MatchPhase::Ended);
    assert_eq!(count_ended(&events), 1);
}

/// Step `steps` frames of `dt`; the match must still run on the last-but-one
/// frame and end on the last, with `MatchEnded` emitted exactly once.
fn assert_ends_on_final_frame(dt: f32, steps: usize) {
    let (mut engine, _) = setup();
    let mut events = Vec::new();
    engine.start(&mut events);
    for _ in 0..steps - 1 {
        engine.update(dt, &mut events);
    }
    assert!(engine.is_playing(), "dt={dt} ended early");
    engine.update(dt, &mut events);
    assert_eq!(engine.state().time_left, 0.0, "dt={dt}");
    assert!(!engine.is_playing(), "dt={dt} still playing");
    assert_eq!(count_ended(&events), 1);
    engine.update(dt, &mut events);
    assert_eq!(count_ended(&events), 1);
}

#[test]
fn timer_ends_after_exactly_thirty_seconds_of_frames() {
    assert_ends_on_final_frame(1.0 / 60.0, 1800);
    assert_ends_on_final_frame(1.0 / 30.0, 900);
    assert_ends_on_final_frame(0.05, 600);
    assert_ends_on_final_frame(1.0 / 144.0, 4320);
    assert_ends_on_final_frame(0.1, 300);
}

#[test]
fn one_big_step_ends_the_match() {
    let (mut engine, _) = setup();
    let mut events = Vec::new();
    engine.start(&mut events);
    engine.update(1000.0, &mut events);
    assert_eq!(engine.state().time_left, 0.0);
    assert_eq!(count_ended(&events), 1);
    engine.update(1.0, &mut events);
    assert_eq!(count_ended(&events), 1);
}

#[test]
fn shooting_the_middle_shelf_scores_twenty() {
    let (mut engine, caster) = setup();
    let mut events = Vec::new();
    engine.start(&mut events);
    assert_eq!(engine.state().time_left, 30.0);
    assert_eq!(engine.state().score, 0);

    engine.update(1.0, &mut events);
    let middle = engine
        .targets()
        .iter()
        .find(|t| t.row == 1)
        .map(|t| t.id)
        .unwrap();
    let ndc = ndc_of(&caster, figure_center(&caster, middle));
    let outcome = engine.shoot(ndc, &caster, &mut events);
    assert_eq!(
        outcome,
        ShotOutcome::Hit {
            id: middle,
            points: 20
        }
    );
    assert_eq!(engine.state().score, 20);
    assert!((engine.state().time_left - 29.0).abs() < 1e-4);

    for _ in 0..29 {
        engine.update(1.0, &mut events);
    }
    assert!(!engine.is_playing());
    assert_eq!(engine.state().time_left, 0.0);
    assert_eq!(engine.state().score, 20);
}

#[test]
fn second_shot_at_falling_target_adds_nothing() {
    let (mut engine, caster) = setup();
    let mut events = Vec::new();
    engine.start(&mut events);
    let id = engine.targets()[0].id;
    let ndc = ndc_of(&caster, figure_center(&caster, id));

    assert!(engine.shoot(ndc, &caster, &mut events).is_hit());
    let score = engine.state().score;
    assert_eq!(engine.target(id).unwrap().state(), TargetState::Falling);

    // Still upright enough to intersect, but no longer standing.
    let again = engine.shoot(ndc, &caster, &mut events);
    assert_eq!(again, ShotOutcome::Miss);
    assert_eq!(engine.state().score, score);
}

#[test]
fn shooting_the_sky_misses() {
    let (mut engine, caster) = setup();
    let mut events = Vec::new();
    engine.start(&mut events);
    events.clear();
    let outcome = engine.shoot(Vec2::new(0.0, 0.98), &caster, &mut events);
    assert_eq!(outcome, ShotOutcome::Miss);
    assert_eq!(events, vec![GameEvent::ShotMissed]);
}

#[test]
fn shots_after_game_over_change_nothing() {
    let (mut engine, caster) = setup();
    let mut events = Vec::new();
    engine.start(&mut events);
    engine.update(31.0, &mut events);
    let id = engine.targets()[3].id;
    let ndc = ndc_of(&caster, figure_center(&caster, id));
    events.clear();
    assert_eq!(
        engine.shoot(ndc, &caster, &mut events),
        ShotOutcome::NotPlaying
    );
    assert!(events.is_empty());
    assert_eq!(engine.state().score, 0);
    assert!(engine.targets().iter().all(|t| t.is_standing()));
}

#[test]
fn fall_rotation_is_monotonic_then_frozen() {
    let (mut engine, caster) = setup();
    let mut events = Vec::new();
    engine.start(&mut events);
    let id = engine.targets()[2].id;
    let ndc = ndc_of(&caster, figure_center(&caster, id));
    assert!(engine.shoot(ndc, &caster, &mut events).is_hit());

    let mut last = engine.target(id).unwrap().rotation();
    let mut fallen_at = None;
    for step in 0..40 {
        engine.update(1.0 / 60.0, &mut events);
        let t = engine.target(id).unwrap();
        assert!(t.rotation() <= last);
        if t.state() == TargetState::Fallen && fallen_at.is_none() {
            fallen_at = Some(step);
            assert_eq!(t.rotation(), -std::f32::consts::FRAC_PI_2);
        }
        if fallen_at.is_some() {
            assert_eq!(t.rotation(), -std::f32::consts::FRAC_PI_2);
        }
        last = t.rotation();
    }
    // pi/2 at 5 rad/s takes ~0.31s, i.e. about 19 frames.
    assert!(matches!(fallen_at, Some(17..=19)));
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::TargetFallen { .. }))
            .count(),
        1
    );
}

#[test]
fn restart_resets_everything() {
    let (mut engine, caster) = setup();
    let mut events = Vec::new();
    engine.start(&mut events);
    for i in [0usize, 6, 12] {
        let id = engine.targets()[i].id;
        let ndc = ndc_of(&caster, figure_center(&caster, id));
        engine.shoot(ndc, &caster, &mut events);
    }
    engine.update(0.2, &mut events);
    engine.update(40.0, &mut events);
    assert!(engine.state().score > 0);
    assert!(engine.targets().iter().any(|t| !t.is_standing()));

    engine.start(&mut events);
    assert!(engine.is_playing());
    assert_eq!(engine.state().score, 0);
    assert_eq!(engine.state().time_left, engine.config.match_duration_sec);
    assert!(engine
        .targets()
        .iter()
        .all(|t| t.is_standing() && t.rotation() == 0.0));
    assert_eq!(engine.hud().overlay, Overlay::Hidden);
}

#[test]
fn hud_reports_game_over_score() {
    let (mut engine, caster) = setup();
    let mut events = Vec::new();
    engine.start(&mut events);
    let top = engine.targets().iter().find(|t| t.row == 2).map(|t| t.id).unwrap();
    let ndc = ndc_of(&caster, figure_center(&caster, top));
    engine.shoot(ndc, &caster, &mut events);
    engine.update(30.0, &mut events);
    let hud = engine.hud();
    assert_eq!(hud.score, 30);
    assert_eq!(hud.time_fraction, 0.0);
    assert_eq!(hud.overlay, Overlay::GameOver { final_score: 30 });
}
