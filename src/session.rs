use gallery_core::{
    AimPoint, Camera, Figure, GameConfig, GameEngine, GameEvent, GestureConfig,
    GestureInterpreter, HandLandmarks, ScreenSize, ShelfCaster, ShelfLayout, ShotOutcome, World,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything the render tick and the detector callback share.
///
/// Both run on the single wasm thread; the detector writes the aim and fires
/// shots, the render tick advances time and drains `events`.
pub struct Session {
    pub engine: GameEngine,
    pub gestures: GestureInterpreter,
    pub caster: ShelfCaster,
    pub figures: Vec<Figure>,
    pub screen: ScreenSize,
    pub events: Vec<GameEvent>,
    /// Set when a shot was taken since the last render tick.
    pub fired: bool,
}

thread_local! {
    static SESSION: RefCell<Option<Rc<RefCell<Session>>>> = const { RefCell::new(None) };
}

/// Make the session reachable from `#[wasm_bindgen]` entry points.
pub fn install(session: Rc<RefCell<Session>>) {
    SESSION.with(|s| *s.borrow_mut() = Some(session));
}

/// Run `f` on the installed session; `None` before init finished.
pub fn with_session<R>(f: impl FnOnce(&mut Session) -> R) -> Option<R> {
    let session = SESSION.with(|s| s.borrow().clone())?;
    let mut guard = session.try_borrow_mut().ok()?;
    Some(f(&mut guard))
}

impl Session {
    pub fn new(screen: ScreenSize) -> anyhow::Result<Self> {
        let config = GameConfig::default();
        config.validate()?;
        let gesture_config = GestureConfig::default();
        gesture_config.validate()?;

        let world = World::build(&ShelfLayout::default(), &config)?;
        let mut camera = Camera::default();
        camera.set_viewport(screen.width, screen.height);
        let caster = world.caster(camera);
        Ok(Self {
            engine: GameEngine::new(config, world.targets),
            gestures: GestureInterpreter::new(gesture_config),
            caster,
            figures: world.figures,
            screen,
            events: Vec::new(),
            fired: false,
        })
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        if self.screen.width != width || self.screen.height != height {
            self.screen = ScreenSize::new(width, height);
            self.caster.camera.set_viewport(width, height);
            log::debug!("[session] viewport {}x{}", width, height);
        }
    }

    pub fn start_match(&mut self) {
        self.engine.start(&mut self.events);
    }

    /// Render tick: advance the match and decay the fire cooldown.
    pub fn tick(&mut self, dt_sec: f32) {
        self.engine.update(dt_sec, &mut self.events);
        self.gestures.tick(dt_sec);
    }

    /// Detector callback with at most one hand.
    pub fn on_hand(&mut self, hand: Option<&HandLandmarks>) {
        let frame = self.gestures.observe(hand, self.screen);
        if let Some(aim) = frame.fire {
            self.fire_at(aim);
        }
    }

    pub fn fire_at(&mut self, aim: AimPoint) -> ShotOutcome {
        let ndc = aim.to_ndc(self.screen);
        let outcome = self.engine.shoot(ndc, &self.caster, &mut self.events);
        if outcome != ShotOutcome::NotPlaying {
            self.fired = true;
        }
        outcome
    }

    /// Keyboard or pointer shot, rate-limited by the pinch cooldown.
    ///
    /// `None` when the cooldown swallowed the shot.
    pub fn fire_fallback(&mut self, aim: AimPoint) -> Option<ShotOutcome> {
        if self.engine.is_playing() && !self.gestures.trigger() {
            return None;
        }
        Some(self.fire_at(aim))
    }

    /// Aim for keyboard fire: the tracked fingertip, else screen center.
    pub fn fallback_aim(&self) -> AimPoint {
        self.gestures.aim().unwrap_or(AimPoint {
            x: self.screen.width * 0.5,
            y: self.screen.height * 0.5,
        })
    }
}
