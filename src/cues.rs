use gallery_core::GameEvent;

/// Fire-and-forget sound effects requested by the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Hit,
    Miss,
    MatchStart,
    MatchEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CueWave {
    Sine,
    Square,
    Triangle,
}

/// Oscillator sweep with a linear attack and exponential-ish release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CueParams {
    pub wave: CueWave,
    pub start_hz: f32,
    pub end_hz: f32,
    pub peak_gain: f32,
    pub duration_sec: f64,
}

impl Cue {
    pub fn params(self) -> CueParams {
        match self {
            // short bright blip rising in pitch
            Cue::Hit => CueParams {
                wave: CueWave::Square,
                start_hz: 660.0,
                end_hz: 1320.0,
                peak_gain: 0.35,
                duration_sec: 0.12,
            },
            // low dull thud
            Cue::Miss => CueParams {
                wave: CueWave::Sine,
                start_hz: 180.0,
                end_hz: 70.0,
                peak_gain: 0.5,
                duration_sec: 0.18,
            },
            Cue::MatchStart => CueParams {
                wave: CueWave::Triangle,
                start_hz: 440.0,
                end_hz: 880.0,
                peak_gain: 0.3,
                duration_sec: 0.35,
            },
            Cue::MatchEnd => CueParams {
                wave: CueWave::Triangle,
                start_hz: 660.0,
                end_hz: 220.0,
                peak_gain: 0.35,
                duration_sec: 0.6,
            },
        }
    }

    /// Which cue, if any, a game event should sound.
    pub fn for_event(event: &GameEvent) -> Option<Cue> {
        match event {
            GameEvent::TargetHit { .. } => Some(Cue::Hit),
            GameEvent::ShotMissed => Some(Cue::Miss),
            GameEvent::MatchStarted { .. } => Some(Cue::MatchStart),
            GameEvent::MatchEnded { .. } => Some(Cue::MatchEnd),
            GameEvent::ScoreChanged { .. } | GameEvent::TargetFallen { .. } => None,
        }
    }
}
