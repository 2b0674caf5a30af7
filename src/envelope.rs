// Lead voice envelope breakpoints. Kept free of web-sys so host tests can
// include this file directly.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ramp {
    Set,
    Linear,
    Exponential,
}

/// Value reached at an absolute audio-clock time, and how to get there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub value: f32,
    pub time: f64,
    pub ramp: Ramp,
}

impl Breakpoint {
    const fn new(value: f32, time: f64, ramp: Ramp) -> Self {
        Self { value, time, ramp }
    }
}

/// Amp envelope for a note struck at `t`: a short attack to the voice
/// level, then straight down to the floor. No sustain, no release, so note
/// length does not stretch the voice.
pub fn lead_amp(t: f64) -> [Breakpoint; 3] {
    let peak = t + LEAD_ATTACK_SEC;
    [
        Breakpoint::new(0.0, t, Ramp::Set),
        Breakpoint::new(LEAD_VOICE_LEVEL, peak, Ramp::Linear),
        Breakpoint::new(ENV_FLOOR, peak + LEAD_AMP_DECAY_SEC, Ramp::Exponential),
    ]
}

/// Filter cutoff sweep from the peak down to the floor.
pub fn lead_filter(t: f64) -> [Breakpoint; 2] {
    [
        Breakpoint::new(LEAD_FILTER_PEAK_HZ, t, Ramp::Set),
        Breakpoint::new(
            LEAD_FILTER_FLOOR_HZ,
            t + LEAD_FILTER_DECAY_SEC,
            Ramp::Exponential,
        ),
    ]
}

/// When the lead voice has decayed to silence and its oscillators can stop.
pub fn lead_end(t: f64) -> f64 {
    lead_amp(t)[2].time
}
