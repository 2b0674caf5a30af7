use crate::constants::*;
use crate::envelope::{self, Breakpoint, Ramp};
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
fn js<T>(r: Result<T, JsValue>) -> anyhow::Result<T> {
    r.map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn create_gain(ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(ctx).map_err(|e| anyhow::anyhow!("{} GainNode: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

fn apply_envelope(param: &web::AudioParam, points: &[Breakpoint]) -> anyhow::Result<()> {
    for p in points {
        match p.ramp {
            Ramp::Set => js(param.set_value_at_time(p.value, p.time))?,
            Ramp::Linear => js(param.linear_ramp_to_value_at_time(p.value, p.time))?,
            Ramp::Exponential => js(param.exponential_ramp_to_value_at_time(p.value, p.time))?,
        };
    }
    Ok(())
}

fn create_filter(
    ctx: &web::AudioContext,
    kind: web::BiquadFilterType,
    hz: f32,
) -> anyhow::Result<web::BiquadFilterNode> {
    let f = js(web::BiquadFilterNode::new(ctx))?;
    f.set_type(kind);
    f.frequency().set_value(hz);
    Ok(f)
}

/// Gain that opens instantly at `t` and decays exponentially over `decay`.
fn decaying_gain(
    ctx: &web::AudioContext,
    peak: f32,
    t: f64,
    decay: f64,
) -> anyhow::Result<web::GainNode> {
    let g = create_gain(ctx, 0.0, "envelope")?;
    js(g.gain().set_value_at_time(peak, t))?;
    js(g.gain().exponential_ramp_to_value_at_time(ENV_FLOOR, t + decay))?;
    Ok(g)
}

// Deterministic white noise (xorshift32) shared by every drum voice.
fn build_noise(ctx: &web::AudioContext) -> anyhow::Result<web::AudioBuffer> {
    let sr = ctx.sample_rate();
    let len = (sr * NOISE_SECONDS) as u32;
    let buffer = js(ctx.create_buffer(1, len, sr))?;
    let mut seed = NOISE_SEED;
    let mut samples: Vec<f32> = Vec::with_capacity(len as usize);
    for _ in 0..len {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        samples.push((seed as f32 / u32::MAX as f32) * 2.0 - 1.0);
    }
    js(buffer.copy_to_channel(&mut samples, 0))?;
    Ok(buffer)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrumVoice {
    Kick,
    Snare,
    Hat,
    Clap,
}

impl DrumVoice {
    /// Drum rows map upward from the drum root: kick, snare, hat, clap.
    pub fn from_row(index: usize) -> Option<Self> {
        match index {
            0 => Some(DrumVoice::Kick),
            1 => Some(DrumVoice::Snare),
            2 => Some(DrumVoice::Hat),
            3 => Some(DrumVoice::Clap),
            _ => None,
        }
    }
}

/// Per-play buses. Disconnecting the gate silences anything already booked.
struct Session {
    gate: web::GainNode,
    lead: web::GainNode,
    drums: web::GainNode,
}

/// WebAudio graph: session buses -> out -> destination.
pub struct AudioEngine {
    ctx: web::AudioContext,
    out: web::GainNode,
    noise: web::AudioBuffer,
    session: Option<Session>,
}

impl AudioEngine {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = js(web::AudioContext::new())?;
        let out = create_gain(&ctx, MIX_OUT_LEVEL, "out")?;
        js(out.connect_with_audio_node(&ctx.destination()))?;
        let noise = build_noise(&ctx)?;
        log::info!("[audio] context ready at {} Hz", ctx.sample_rate());
        Ok(Self {
            ctx,
            out,
            noise,
            session: None,
        })
    }

    /// Audio clock in seconds.
    #[inline]
    pub fn now(&self) -> f64 {
        self.ctx.current_time()
    }

    pub fn resume(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }

    pub fn start_session(&mut self) -> anyhow::Result<()> {
        self.stop_session();
        let gate = create_gain(&self.ctx, 1.0, "gate")?;
        let lead = create_gain(&self.ctx, MIX_LEAD_LEVEL, "lead")?;
        let drums = create_gain(&self.ctx, MIX_DRUM_LEVEL * MIX_DRUM_SCALE, "drums")?;
        js(lead.connect_with_audio_node(&gate))?;
        js(drums.connect_with_audio_node(&gate))?;
        js(gate.connect_with_audio_node(&self.out))?;
        self.session = Some(Session { gate, lead, drums });
        Ok(())
    }

    pub fn stop_session(&mut self) {
        if let Some(s) = self.session.take() {
            s.gate.gain().set_value(0.0);
            _ = s.gate.disconnect();
        }
    }

    /// Two detuned squares through an enveloped low-pass.
    pub fn play_lead(&self, freq_hz: f32, t: f64) -> anyhow::Result<()> {
        let Some(session) = &self.session else {
            return Ok(());
        };
        let ctx = &self.ctx;
        let end = envelope::lead_end(t);

        let filter = create_filter(ctx, web::BiquadFilterType::Lowpass, LEAD_FILTER_PEAK_HZ)?;
        filter.q().set_value(LEAD_FILTER_Q);
        apply_envelope(&filter.frequency(), &envelope::lead_filter(t))?;

        let amp = create_gain(ctx, 0.0, "lead amp")?;
        apply_envelope(&amp.gain(), &envelope::lead_amp(t))?;

        for detune in [LEAD_DETUNE_A_CENTS, LEAD_DETUNE_B_CENTS] {
            let osc = js(web::OscillatorNode::new(ctx))?;
            osc.set_type(web::OscillatorType::Square);
            osc.frequency().set_value(freq_hz);
            osc.detune().set_value(detune);
            js(osc.connect_with_audio_node(&filter))?;
            js(osc.start_with_when(t))?;
            js(osc.stop_with_when(end))?;
        }
        js(filter.connect_with_audio_node(&amp))?;
        js(amp.connect_with_audio_node(&session.lead))?;
        Ok(())
    }

    pub fn play_drum(&self, voice: DrumVoice, t: f64) -> anyhow::Result<()> {
        let Some(session) = &self.session else {
            return Ok(());
        };
        let bus = &session.drums;
        match voice {
            DrumVoice::Kick => self.kick(bus, t),
            DrumVoice::Snare => {
                self.tone(bus, SNARE_TONE_HZ, t, SNARE_DECAY_SEC * 0.5)?;
                self.noise_hit(bus, web::BiquadFilterType::Highpass, SNARE_HIGHPASS_HZ, t, SNARE_DECAY_SEC)
            }
            DrumVoice::Hat => {
                self.noise_hit(bus, web::BiquadFilterType::Highpass, HAT_HIGHPASS_HZ, t, HAT_DECAY_SEC)
            }
            DrumVoice::Clap => {
                self.noise_hit(bus, web::BiquadFilterType::Bandpass, CLAP_BANDPASS_HZ, t, CLAP_DECAY_SEC)
            }
        }
    }

    fn kick(&self, bus: &web::GainNode, t: f64) -> anyhow::Result<()> {
        let osc = js(web::OscillatorNode::new(&self.ctx))?;
        osc.set_type(web::OscillatorType::Sine);
        js(osc.frequency().set_value_at_time(KICK_START_HZ, t))?;
        js(osc
            .frequency()
            .exponential_ramp_to_value_at_time(KICK_END_HZ, t + KICK_SWEEP_SEC))?;
        let env = decaying_gain(&self.ctx, 1.0, t, KICK_DECAY_SEC)?;
        js(osc.connect_with_audio_node(&env))?;
        js(env.connect_with_audio_node(bus))?;
        js(osc.start_with_when(t))?;
        js(osc.stop_with_when(t + KICK_DECAY_SEC))?;
        Ok(())
    }

    fn tone(&self, bus: &web::GainNode, hz: f32, t: f64, decay: f64) -> anyhow::Result<()> {
        let osc = js(web::OscillatorNode::new(&self.ctx))?;
        osc.set_type(web::OscillatorType::Triangle);
        osc.frequency().set_value(hz);
        let env = decaying_gain(&self.ctx, 0.7, t, decay)?;
        js(osc.connect_with_audio_node(&env))?;
        js(env.connect_with_audio_node(bus))?;
        js(osc.start_with_when(t))?;
        js(osc.stop_with_when(t + decay))?;
        Ok(())
    }

    fn noise_hit(
        &self,
        bus: &web::GainNode,
        kind: web::BiquadFilterType,
        hz: f32,
        t: f64,
        decay: f64,
    ) -> anyhow::Result<()> {
        let src = js(web::AudioBufferSourceNode::new(&self.ctx))?;
        src.set_buffer(Some(&self.noise));
        let filter = create_filter(&self.ctx, kind, hz)?;
        let env = decaying_gain(&self.ctx, 1.0, t, decay)?;
        js(src.connect_with_audio_node(&filter))?;
        js(filter.connect_with_audio_node(&env))?;
        js(env.connect_with_audio_node(bus))?;
        js(src.start_with_when(t))?;
        js(src.stop_with_when(t + decay))?;
        Ok(())
    }
}
