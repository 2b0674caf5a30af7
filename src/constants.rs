// Web front-end tuning constants.
//
// Element ids, timer periods and the audio patch live here so the wiring
// code stays free of magic numbers. Grid geometry lives in the core crate.

// DOM
pub const CANVAS_ID: &str = "app-canvas";

// Timers (milliseconds)
pub const REDRAW_INTERVAL_MS: u32 = 100; // playhead redraw while playing
pub const PUMP_INTERVAL_MS: u32 = 25; // audio scheduling pump

// Audio scheduling (seconds)
pub const SCHEDULE_LOOKAHEAD_SEC: f64 = 0.1; // how far ahead the pump books notes
pub const START_DELAY_SEC: f64 = 0.05; // headroom before the first downbeat

// Mixer levels
pub const MIX_LEAD_LEVEL: f32 = 0.5;
pub const MIX_DRUM_LEVEL: f32 = 2.0;
pub const MIX_DRUM_SCALE: f32 = 0.25; // drums are hot; scale the bus down
pub const MIX_OUT_LEVEL: f32 = 0.7;

// Lead patch
pub const LEAD_DETUNE_A_CENTS: f32 = -1195.0;
pub const LEAD_DETUNE_B_CENTS: f32 = -1205.0;
pub const LEAD_ATTACK_SEC: f64 = 0.005;
pub const LEAD_AMP_DECAY_SEC: f64 = 0.1;
pub const LEAD_FILTER_DECAY_SEC: f64 = 0.2;
pub const LEAD_FILTER_PEAK_HZ: f32 = 4000.0;
pub const LEAD_FILTER_FLOOR_HZ: f32 = 400.0;
pub const LEAD_FILTER_Q: f32 = 6.0;
pub const LEAD_VOICE_LEVEL: f32 = 0.3;

// Envelope floor for exponential ramps (must stay > 0)
pub const ENV_FLOOR: f32 = 0.001;

// Drum voicing
pub const NOISE_SECONDS: f32 = 1.0; // shared noise buffer length
pub const NOISE_SEED: u32 = 0x1234ABCD;

pub const KICK_START_HZ: f32 = 150.0;
pub const KICK_END_HZ: f32 = 45.0;
pub const KICK_SWEEP_SEC: f64 = 0.12;
pub const KICK_DECAY_SEC: f64 = 0.3;

pub const SNARE_TONE_HZ: f32 = 180.0;
pub const SNARE_HIGHPASS_HZ: f32 = 1500.0;
pub const SNARE_DECAY_SEC: f64 = 0.18;

pub const HAT_HIGHPASS_HZ: f32 = 7000.0;
pub const HAT_DECAY_SEC: f64 = 0.05;

pub const CLAP_BANDPASS_HZ: f32 = 1200.0;
pub const CLAP_DECAY_SEC: f64 = 0.15;
