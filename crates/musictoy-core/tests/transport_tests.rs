// Host-side tests for the play/stop transport and its timer slots.

use musictoy_core::{Repeating, Timer, TimerError, Transport};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Counts {
    started: usize,
    live: usize,
    max_live: usize,
}

#[derive(Clone)]
struct FakeTimer {
    counts: Rc<RefCell<Counts>>,
    fail: bool,
}

impl FakeTimer {
    fn new() -> Self {
        Self {
            counts: Rc::default(),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    fn live(&self) -> usize {
        self.counts.borrow().live
    }
}

impl Timer for FakeTimer {
    type Handle = usize;

    fn start(&mut self, _period_ms: u32) -> Result<usize, TimerError> {
        if self.fail {
            return Err(TimerError("no timers here".into()));
        }
        let mut c = self.counts.borrow_mut();
        c.started += 1;
        c.live += 1;
        c.max_live = c.max_live.max(c.live);
        Ok(c.started)
    }

    fn cancel(&mut self, _handle: usize) {
        self.counts.borrow_mut().live -= 1;
    }
}

fn transport() -> (Transport<FakeTimer>, FakeTimer, FakeTimer) {
    let redraw = FakeTimer::new();
    let pump = FakeTimer::new();
    let t = Transport::new(
        Repeating::new(redraw.clone(), 100),
        Repeating::new(pump.clone(), 25),
    );
    (t, redraw, pump)
}

#[test]
fn repeated_play_keeps_one_live_timer_each() {
    let (mut t, redraw, pump) = transport();
    for i in 0..5 {
        t.play(i as f64).unwrap();
    }
    assert!(t.is_playing());
    assert_eq!(redraw.live(), 1);
    assert_eq!(pump.live(), 1);
    assert_eq!(redraw.counts.borrow().max_live, 1);
    assert_eq!(pump.counts.borrow().started, 5);
}

#[test]
fn stop_cancels_everything_and_is_idempotent() {
    let (mut t, redraw, pump) = transport();
    t.play(1.0).unwrap();
    t.stop();
    t.stop();
    assert!(!t.is_playing());
    assert_eq!(redraw.live(), 0);
    assert_eq!(pump.live(), 0);
    assert!(!t.redraw().is_live());
    assert!(!t.pump().is_live());
}

#[test]
fn play_time_wraps_at_loop_length() {
    let (mut t, _, _) = transport();
    assert_eq!(t.play_time(10.0, 4.0), 0.0);
    assert_eq!(t.elapsed(10.0), None);

    t.play(10.0).unwrap();
    assert_eq!(t.started_at(), Some(10.0));
    assert!((t.play_time(11.5, 4.0) - 1.5).abs() < 1e-12);
    assert!((t.play_time(15.0, 4.0) - 1.0).abs() < 1e-12);
    // clock running backwards clamps to the start
    assert_eq!(t.play_time(9.0, 4.0), 0.0);
}

#[test]
fn restart_resets_the_start_time() {
    let (mut t, _, _) = transport();
    t.play(2.0).unwrap();
    t.play(7.0).unwrap();
    assert_eq!(t.elapsed(8.0), Some(1.0));
}

#[test]
fn failing_pump_leaves_transport_stopped() {
    let redraw = FakeTimer::new();
    let mut t = Transport::new(
        Repeating::new(redraw.clone(), 100),
        Repeating::new(FakeTimer::failing(), 25),
    );
    assert!(t.play(0.0).is_err());
    assert!(!t.is_playing());
    assert_eq!(redraw.live(), 0);
}
