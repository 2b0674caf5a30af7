use crate::audio::{AudioEngine, DrumVoice};
use crate::canvas::Canvas2d;
use crate::constants::*;
use crate::dom::{self, LocationHash};
use crate::timer::IntervalTimer;
use glam::Vec2;
use musictoy_core::{
    toy_piece, ClickOutcome, Instrument, Note, Repeating, Sequencer, SequencerConfig, Transport,
    TransportAction,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

pub type SharedApp = Rc<RefCell<App>>;

/// Everything the page owns: the sequencer, its canvas and hash store,
/// the transport timers and, once Play has been pressed, the audio graph.
pub struct App {
    canvas: web::HtmlCanvasElement,
    surface: Canvas2d,
    store: LocationHash,
    seq: Sequencer,
    transport: Transport<IntervalTimer>,
    audio: Option<AudioEngine>,
    // Transport time up to which notes have been handed to WebAudio.
    scheduled_until: f64,
}

// Timer callbacks hold a weak handle so the app can be dropped.
fn tick(app: Weak<RefCell<App>>, f: fn(&mut App)) -> impl FnMut() + 'static {
    move || {
        if let Some(app) = app.upgrade() {
            if let Ok(mut app) = app.try_borrow_mut() {
                f(&mut app);
            }
        }
    }
}

impl App {
    pub fn create(window: &web::Window, canvas: web::HtmlCanvasElement) -> anyhow::Result<SharedApp> {
        dom::sync_canvas_backing_size(&canvas);
        let surface = Canvas2d::from_canvas(&canvas)?;

        let config = SequencerConfig::default();
        let (piece, tracks) = toy_piece(config.tempo);
        let mut seq = Sequencer::new(
            piece,
            tracks.lead,
            tracks.drums,
            &config,
            dom::canvas_size(&canvas),
        )?;
        seq.add_transport_buttons();

        let mut store = LocationHash::new(window);
        match seq.restore(&mut store) {
            Ok(true) => log::info!("[hash] restored grid from URL"),
            Ok(false) => {}
            Err(e) => log::warn!("[hash] ignoring malformed hash: {}", e),
        }

        let app = Rc::new_cyclic(|weak: &Weak<RefCell<App>>| {
            let redraw = IntervalTimer::new(tick(weak.clone(), App::on_redraw));
            let pump = IntervalTimer::new(tick(weak.clone(), App::on_pump));
            RefCell::new(App {
                canvas,
                surface,
                store,
                seq,
                transport: Transport::new(
                    Repeating::new(redraw, REDRAW_INTERVAL_MS),
                    Repeating::new(pump, PUMP_INTERVAL_MS),
                ),
                audio: None,
                scheduled_until: 0.0,
            })
        });
        app.borrow_mut().draw();
        Ok(app)
    }

    /// Seconds on the audio clock, or wall time before audio exists.
    fn now(&self) -> f64 {
        match &self.audio {
            Some(audio) => audio.now(),
            None => js_sys::Date::now() / 1000.0,
        }
    }

    pub fn draw(&mut self) {
        let play_time = self
            .transport
            .play_time(self.now(), self.seq.loop_time());
        self.seq.draw(&mut self.surface, play_time);
    }

    pub fn click(&mut self, p: Vec2) {
        log::info!("[input] click at ({:.1}, {:.1})", p.x, p.y);
        match self.seq.click(p, &mut self.store) {
            Some(ClickOutcome::Transport(action)) => self.run(action),
            Some(ClickOutcome::Toggled { .. }) => self.draw(),
            None => {}
        }
    }

    fn run(&mut self, action: TransportAction) {
        match action {
            TransportAction::Play => self.play(),
            TransportAction::Stop => self.stop(),
            TransportAction::Clear => {
                self.stop();
                self.store.reset_and_reload();
            }
        }
    }

    pub fn play(&mut self) {
        if self.audio.is_none() {
            match AudioEngine::new() {
                Ok(audio) => self.audio = Some(audio),
                Err(e) => log::error!("[audio] init failed: {:?}", e),
            }
        }
        if let Some(audio) = &mut self.audio {
            audio.resume();
            if let Err(e) = audio.start_session() {
                log::error!("[audio] session failed: {:?}", e);
            }
        }

        self.scheduled_until = 0.0;
        let start = self.now() + START_DELAY_SEC;
        if let Err(e) = self.transport.play(start) {
            log::error!("[transport] {}", e);
            self.stop();
            return;
        }
        self.on_pump();
        self.draw();
    }

    pub fn stop(&mut self) {
        if let Some(audio) = &mut self.audio {
            audio.stop_session();
        }
        self.transport.stop();
        self.draw();
    }

    pub fn toggle_play(&mut self) {
        if self.transport.is_playing() {
            self.stop();
        } else {
            self.play();
        }
    }

    pub fn toggle_layout(&mut self) {
        let mode = self.seq.layout_mode().toggled();
        log::info!("[input] layout {:?}", mode);
        self.seq.set_layout_mode(mode);
        self.draw();
    }

    pub fn resize(&mut self) {
        dom::sync_canvas_backing_size(&self.canvas);
        self.seq.resize(dom::canvas_size(&self.canvas));
        self.draw();
    }

    fn on_redraw(&mut self) {
        self.draw();
    }

    /// Hand every note up to the lookahead horizon to WebAudio.
    fn on_pump(&mut self) {
        let (Some(audio), Some(t0)) = (&self.audio, self.transport.started_at()) else {
            return;
        };
        let horizon = (audio.now() + SCHEDULE_LOOKAHEAD_SEC - t0).max(0.0);
        if horizon <= self.scheduled_until {
            return;
        }
        let notes = self
            .seq
            .piece()
            .notes_in_window(self.scheduled_until, horizon);
        self.scheduled_until = horizon;

        for n in notes {
            let when = t0 + n.time_sec;
            let result = match n.instrument {
                Instrument::Drums => match drum_voice(self.seq.drum_notes(), n.note) {
                    Some(voice) => audio.play_drum(voice, when),
                    None => Ok(()),
                },
                Instrument::Lead | Instrument::Bass => audio.play_lead(n.note.frequency_hz(), when),
            };
            if let Err(e) = result {
                log::warn!("[audio] could not schedule {}: {:?}", n.note, e);
            }
        }
    }
}

fn drum_voice(drum_notes: &[Note], note: Note) -> Option<DrumVoice> {
    drum_notes
        .iter()
        .position(|d| *d == note)
        .and_then(DrumVoice::from_row)
}
