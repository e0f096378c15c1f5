use crate::config::GameConfig;
use crate::hud::{Hud, Overlay};
use crate::picking::{RayCaster, RayHit};
use crate::target::{Target, TargetId, TargetState};
use fnv::FnvHashMap;
use glam::Vec2;

/// Remaining time below this counts as zero, so frame sums that land on
/// the match length within rounding still end the match.
const TIME_EPSILON_SEC: f64 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    Idle,
    Playing,
    Ended,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatchState {
    pub score: u32,
    pub time_left: f32,
    pub phase: MatchPhase,
}

impl MatchState {
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.phase == MatchPhase::Playing
    }
}

/// State changes for the presentation layer (HUD, audio, overlays).
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    MatchStarted { duration_sec: f32 },
    TargetHit { id: TargetId, points: u32 },
    ScoreChanged { score: u32 },
    ShotMissed,
    TargetFallen { id: TargetId },
    MatchEnded { final_score: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShotOutcome {
    Hit { id: TargetId, points: u32 },
    Miss,
    /// No match in progress; nothing was evaluated.
    NotPlaying,
}

impl ShotOutcome {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit { .. })
    }
}

pub struct GameEngine {
    pub config: GameConfig,
    targets: Vec<Target>,
    index: FnvHashMap<TargetId, usize>,
    state: MatchState,
    /// Match clock, accumulated in f64; `state.time_left` is derived from it.
    elapsed_sec: f64,
}

impl GameEngine {
    pub fn new(config: GameConfig, targets: Vec<Target>) -> Self {
        let index = targets
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id, i))
            .collect();
        let state = MatchState {
            score: 0,
            time_left: config.match_duration_sec,
            phase: MatchPhase::Idle,
        };
        Self {
            config,
            targets,
            index,
            state,
            elapsed_sec: 0.0,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn target(&self, id: TargetId) -> Option<&Target> {
        self.index.get(&id).map(|&i| &self.targets[i])
    }

    /// Remaining time as a 0..1 fraction of the match length.
    pub fn time_fraction(&self) -> f32 {
        (self.state.time_left / self.config.match_duration_sec).clamp(0.0, 1.0)
    }

    pub fn hud(&self) -> Hud {
        let overlay = match self.state.phase {
            MatchPhase::Idle => Overlay::Start,
            MatchPhase::Playing => Overlay::Hidden,
            MatchPhase::Ended => Overlay::GameOver {
                final_score: self.state.score,
            },
        };
        Hud {
            score: self.state.score,
            time_fraction: self.time_fraction(),
            overlay,
        }
    }

    /// Begin a fresh match. Safe to call at first launch, mid-match or after game over.
    pub fn start(&mut self, out_events: &mut Vec<GameEvent>) {
        self.state = MatchState {
            score: 0,
            time_left: self.config.match_duration_sec,
            phase: MatchPhase::Playing,
        };
        self.elapsed_sec = 0.0;
        for t in &mut self.targets {
            t.reset();
        }
        log::info!(
            "[match] start: {} targets, {:.0}s",
            self.targets.len(),
            self.config.match_duration_sec
        );
        out_events.push(GameEvent::MatchStarted {
            duration_sec: self.config.match_duration_sec,
        });
        out_events.push(GameEvent::ScoreChanged { score: 0 });
    }

    /// Advance the countdown and fall animations by one render tick.
    pub fn update(&mut self, dt_sec: f32, out_events: &mut Vec<GameEvent>) {
        if !self.state.is_playing() {
            return;
        }
        let dt_sec = dt_sec.max(0.0);

        for t in &mut self.targets {
            if t.advance_fall(
                dt_sec,
                self.config.fall_speed_rad_per_sec,
                self.config.fall_end_angle_rad,
            ) {
                log::debug!("[match] target {} fallen", t.id.0);
                out_events.push(GameEvent::TargetFallen { id: t.id });
            }
        }

        self.elapsed_sec += f64::from(dt_sec);
        let remaining = f64::from(self.config.match_duration_sec) - self.elapsed_sec;
        if remaining > TIME_EPSILON_SEC {
            self.state.time_left = remaining as f32;
        } else {
            self.state.time_left = 0.0;
            self.state.phase = MatchPhase::Ended;
            log::info!("[match] over: score={}", self.state.score);
            out_events.push(GameEvent::MatchEnded {
                final_score: self.state.score,
            });
        }
    }

    /// Fire through an NDC aim point using `caster` for the intersection query.
    pub fn shoot<C: RayCaster + ?Sized>(
        &mut self,
        ndc: Vec2,
        caster: &C,
        out_events: &mut Vec<GameEvent>,
    ) -> ShotOutcome {
        if !self.state.is_playing() {
            return ShotOutcome::NotPlaying;
        }
        let hits = caster.cast(ndc, &self.targets);
        self.resolve_hits(&hits, out_events)
    }

    /// Credit the nearest hit if that target is still standing.
    ///
    /// `hits` must be sorted nearest-first. A non-standing nearest target
    /// shields anything behind it.
    pub fn resolve_hits(&mut self, hits: &[RayHit], out_events: &mut Vec<GameEvent>) -> ShotOutcome {
        if !self.state.is_playing() {
            return ShotOutcome::NotPlaying;
        }
        let nearest = hits
            .first()
            .and_then(|h| self.index.get(&h.id).copied());
        let outcome = match nearest {
            Some(i) if self.targets[i].state() == TargetState::Standing => {
                let target = &mut self.targets[i];
                target.knock_over();
                self.state.score += target.points;
                ShotOutcome::Hit {
                    id: target.id,
                    points: target.points,
                }
            }
            _ => ShotOutcome::Miss,
        };

        match outcome {
            ShotOutcome::Hit { id, points } => {
                log::info!(
                    "[shot] hit target {} +{} -> {}",
                    id.0,
                    points,
                    self.state.score
                );
                out_events.push(GameEvent::TargetHit { id, points });
                out_events.push(GameEvent::ScoreChanged {
                    score: self.state.score,
                });
            }
            _ => {
                log::info!("[shot] miss");
                out_events.push(GameEvent::ShotMissed);
            }
        }
        outcome
    }

    /// Pivot rotations in target order, for the renderer.
    pub fn rotations(&self) -> impl Iterator<Item = f32> + '_ {
        self.targets.iter().map(|t| t.rotation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picking::RayHits;
    use glam::Vec3;
    use smallvec::smallvec;

    /// Caster that returns a scripted hit list regardless of aim.
    struct Scripted(Vec<RayHit>);

    impl RayCaster for Scripted {
        fn cast(&self, _ndc: Vec2, _targets: &[Target]) -> RayHits {
            self.0.iter().copied().collect()
        }
    }

    fn hit(id: u32, distance: f32) -> RayHit {
        RayHit {
            id: TargetId(id),
            distance,
        }
    }

    fn engine() -> GameEngine {
        let cfg = GameConfig::default();
        let targets = (0..3)
            .map(|i| Target::new(TargetId(i), Vec3::ZERO, i as usize, cfg.points_for_row(i as usize)))
            .collect();
        GameEngine::new(cfg, targets)
    }

    #[test]
    fn starts_idle() {
        let e = engine();
        assert_eq!(e.state().phase, MatchPhase::Idle);
        assert_eq!(e.hud().overlay, Overlay::Start);
    }

    #[test]
    fn nearest_standing_target_scores() {
        let mut e = engine();
        let mut ev = Vec::new();
        e.start(&mut ev);
        ev.clear();
        let hits: RayHits = smallvec![hit(2, 3.0), hit(1, 5.0)];
        let out = e.resolve_hits(&hits, &mut ev);
        assert_eq!(
            out,
            ShotOutcome::Hit {
                id: TargetId(2),
                points: 30
            }
        );
        assert_eq!(e.state().score, 30);
        assert_eq!(e.target(TargetId(1)).unwrap().state(), TargetState::Standing);
        assert_eq!(
            ev,
            vec![
                GameEvent::TargetHit {
                    id: TargetId(2),
                    points: 30
                },
                GameEvent::ScoreChanged { score: 30 }
            ]
        );
    }

    #[test]
    fn falling_target_in_front_blocks_shot() {
        let mut e = engine();
        let mut ev = Vec::new();
        e.start(&mut ev);
        e.resolve_hits(&[hit(0, 1.0)], &mut ev);
        let out = e.resolve_hits(&[hit(0, 1.0), hit(1, 2.0)], &mut ev);
        assert_eq!(out, ShotOutcome::Miss);
        assert_eq!(e.state().score, 10);
        assert_eq!(e.target(TargetId(1)).unwrap().state(), TargetState::Standing);
    }

    #[test]
    fn empty_hits_is_a_miss() {
        let mut e = engine();
        let mut ev = Vec::new();
        e.start(&mut ev);
        ev.clear();
        assert_eq!(e.shoot(Vec2::ZERO, &Scripted(vec![]), &mut ev), ShotOutcome::Miss);
        assert_eq!(ev, vec![GameEvent::ShotMissed]);
    }

    #[test]
    fn shoot_before_start_is_ignored() {
        let mut e = engine();
        let mut ev = Vec::new();
        let out = e.shoot(Vec2::ZERO, &Scripted(vec![hit(0, 1.0)]), &mut ev);
        assert_eq!(out, ShotOutcome::NotPlaying);
        assert!(ev.is_empty());
        assert_eq!(e.state().score, 0);
        assert!(e.targets().iter().all(|t| t.is_standing()));
    }

    #[test]
    fn update_is_noop_when_idle() {
        let mut e = engine();
        let mut ev = Vec::new();
        e.update(5.0, &mut ev);
        assert_eq!(e.state().time_left, e.config.match_duration_sec);
        assert!(ev.is_empty());
    }

    #[test]
    fn time_fraction_tracks_countdown() {
        let mut e = engine();
        let mut ev = Vec::new();
        e.start(&mut ev);
        assert_eq!(e.time_fraction(), 1.0);
        e.update(15.0, &mut ev);
        assert!((e.time_fraction() - 0.5).abs() < 1e-6);
        assert_eq!(e.hud().overlay, Overlay::Hidden);
    }

    #[test]
    fn negative_dt_does_not_rewind() {
        let mut e = engine();
        let mut ev = Vec::new();
        e.start(&mut ev);
        e.update(-3.0, &mut ev);
        assert_eq!(e.state().time_left, e.config.match_duration_sec);
    }

    #[test]
    fn restart_restarts_the_clock() {
        let mut e = engine();
        let mut ev = Vec::new();
        e.start(&mut ev);
        e.update(40.0, &mut ev);
        assert!(!e.is_playing());
        e.start(&mut ev);
        e.update(10.0, &mut ev);
        assert!(e.is_playing());
        assert!((e.state().time_left - 20.0).abs() < 1e-5);
    }
}
