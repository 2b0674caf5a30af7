// Host-side tests for the web front-end's tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timers_fit_the_lookahead() {
    // The pump must run several times per lookahead window or notes arrive late.
    assert!(PUMP_INTERVAL_MS > 0);
    assert!((PUMP_INTERVAL_MS as f64) / 1000.0 < SCHEDULE_LOOKAHEAD_SEC);
    assert!(REDRAW_INTERVAL_MS >= PUMP_INTERVAL_MS);
    assert!(START_DELAY_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mixer_levels_are_positive() {
    assert!(MIX_LEAD_LEVEL > 0.0);
    assert!(MIX_DRUM_LEVEL * MIX_DRUM_SCALE > 0.0);
    assert!(MIX_OUT_LEVEL > 0.0 && MIX_OUT_LEVEL <= 1.0);
    assert!(LEAD_VOICE_LEVEL > 0.0 && LEAD_VOICE_LEVEL <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lead_patch_is_an_octave_down() {
    // Both oscillators sit near -1200 cents, one sharp and one flat.
    assert!(LEAD_DETUNE_A_CENTS > -1200.0 && LEAD_DETUNE_B_CENTS < -1200.0);
    assert!(LEAD_FILTER_PEAK_HZ > LEAD_FILTER_FLOOR_HZ);
    assert!(LEAD_FILTER_DECAY_SEC > LEAD_AMP_DECAY_SEC);
    assert!(LEAD_ATTACK_SEC < LEAD_AMP_DECAY_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn envelopes_can_ramp_exponentially() {
    // exponentialRampToValueAtTime rejects a target of zero
    assert!(ENV_FLOOR > 0.0);
    assert!(KICK_START_HZ > KICK_END_HZ && KICK_END_HZ > 0.0);
    assert!(KICK_SWEEP_SEC < KICK_DECAY_SEC);
    assert!(HAT_DECAY_SEC < SNARE_DECAY_SEC);
    assert!(HAT_HIGHPASS_HZ > SNARE_HIGHPASS_HZ);
    assert!(NOISE_SECONDS as f64 >= KICK_DECAY_SEC.max(SNARE_DECAY_SEC).max(CLAP_DECAY_SEC));
}

#[test]
fn canvas_id_has_no_hash() {
    assert!(!CANVAS_ID.starts_with('#'));
    assert!(!CANVAS_ID.is_empty());
}
