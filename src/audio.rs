use crate::constants::{CUE_ATTACK_SEC, CUE_SCHEDULE_AHEAD_SEC, MASTER_GAIN};
use crate::cues::{Cue, CueWave};
use web_sys as web;

/// Synthesizes hit/miss cues on a shared WebAudio graph.
///
/// Audio is optional: if the context cannot be created or is blocked by the
/// browser's autoplay policy, cues are dropped and the game carries on.
pub struct CuePlayer {
    ctx: web::AudioContext,
    master_gain: web::GainNode,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

impl CuePlayer {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let master_gain = create_gain(&ctx, MASTER_GAIN, "Master")?;
        master_gain
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow::anyhow!("connect master: {:?}", e))?;
        Ok(Self { ctx, master_gain })
    }

    /// Must be called from a user gesture before the first cue is audible.
    pub fn resume(&self) {
        _ = self.ctx.resume();
    }

    pub fn play(&self, cue: Cue) {
        if let Err(e) = self.try_play(cue) {
            log::warn!("[audio] {:?} cue dropped: {:?}", cue, e);
        }
    }

    fn try_play(&self, cue: Cue) -> anyhow::Result<()> {
        let p = cue.params();
        let src = web::OscillatorNode::new(&self.ctx).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        src.set_type(match p.wave {
            CueWave::Sine => web::OscillatorType::Sine,
            CueWave::Square => web::OscillatorType::Square,
            CueWave::Triangle => web::OscillatorType::Triangle,
        });
        let t0 = self.ctx.current_time() + CUE_SCHEDULE_AHEAD_SEC;
        let t_end = t0 + p.duration_sec;
        _ = src.frequency().set_value_at_time(p.start_hz, t0);
        _ = src
            .frequency()
            .exponential_ramp_to_value_at_time(p.end_hz, t_end);

        let env = create_gain(&self.ctx, 0.0, "Cue envelope")?;
        _ = env
            .gain()
            .linear_ramp_to_value_at_time(p.peak_gain, t0 + CUE_ATTACK_SEC);
        _ = env.gain().exponential_ramp_to_value_at_time(0.001, t_end);

        src.connect_with_audio_node(&env)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        env.connect_with_audio_node(&self.master_gain)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = src.start_with_when(t0);
        _ = src.stop_with_when(t_end + 0.05);
        Ok(())
    }
}
