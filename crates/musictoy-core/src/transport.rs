use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to start timer: {0}")]
pub struct TimerError(pub String);

/// Host facility for a repeating callback (e.g. `setInterval`). The callback
/// itself is bound when the host builds the timer.
pub trait Timer {
    type Handle;
    fn start(&mut self, period_ms: u32) -> Result<Self::Handle, TimerError>;
    fn cancel(&mut self, handle: Self::Handle);
}

/// A timer slot with at most one live handle.
pub struct Repeating<T: Timer> {
    timer: T,
    period_ms: u32,
    handle: Option<T::Handle>,
}

impl<T: Timer> Repeating<T> {
    pub fn new(timer: T, period_ms: u32) -> Self {
        Self {
            timer,
            period_ms,
            handle: None,
        }
    }

    /// Cancel any live handle, then start a fresh one.
    pub fn restart(&mut self) -> Result<(), TimerError> {
        self.cancel();
        self.handle = Some(self.timer.start(self.period_ms)?);
        Ok(())
    }

    pub fn cancel(&mut self) {
        if let Some(h) = self.handle.take() {
            self.timer.cancel(h);
        }
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }
}

/// Playback state plus the two periodic jobs that run while playing: a
/// redraw tick that only reads, and an audio scheduling pump.
pub struct Transport<T: Timer> {
    redraw: Repeating<T>,
    pump: Repeating<T>,
    started_at: Option<f64>,
}

impl<T: Timer> Transport<T> {
    pub fn new(redraw: Repeating<T>, pump: Repeating<T>) -> Self {
        Self {
            redraw,
            pump,
            started_at: None,
        }
    }

    /// Start (or restart) playback at host time `now_sec`.
    pub fn play(&mut self, now_sec: f64) -> Result<(), TimerError> {
        self.stop();
        self.redraw.restart()?;
        if let Err(e) = self.pump.restart() {
            self.redraw.cancel();
            return Err(e);
        }
        self.started_at = Some(now_sec);
        log::info!("[transport] play at {:.3}s", now_sec);
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.started_at.take().is_some() {
            log::info!("[transport] stop");
        }
        self.redraw.cancel();
        self.pump.cancel();
    }

    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn started_at(&self) -> Option<f64> {
        self.started_at
    }

    /// Seconds since playback started, or `None` when stopped.
    pub fn elapsed(&self, now_sec: f64) -> Option<f64> {
        self.started_at.map(|t0| (now_sec - t0).max(0.0))
    }

    /// Position within the loop in seconds; 0 while stopped.
    pub fn play_time(&self, now_sec: f64, loop_time: f64) -> f64 {
        match self.elapsed(now_sec) {
            Some(t) if loop_time > 0.0 => t % loop_time,
            Some(t) => t,
            None => 0.0,
        }
    }

    pub fn redraw(&self) -> &Repeating<T> {
        &self.redraw
    }

    pub fn pump(&self) -> &Repeating<T> {
        &self.pump
    }
}
