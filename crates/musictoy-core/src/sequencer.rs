use crate::button::{
    Button, ButtonKind, ButtonRegistry, StepButton, TransportAction, TransportButton,
};
use crate::codec::{self, CodecError};
use crate::constants::*;
use crate::geometry::{Color, Quad};
use crate::layout::{GridLayout, LayoutMode};
use crate::music::{gen_scale, Note, ScaleKind};
use crate::piece::{Instrument, Piece, PieceError, Tempo, Track, TrackId};
use crate::state::StateStore;
use crate::surface::DrawSurface;
use glam::Vec2;

/// Grid contents and tempo for a sequencer.
///
/// - `lead_root`/`lead_scale`/`num_octaves` pick the lead rows
/// - `drum_root`/`num_drums` pick the drum rows, one semitone apart
#[derive(Clone, Debug)]
pub struct SequencerConfig {
    pub lead_root: Note,
    pub drum_root: Note,
    pub lead_scale: ScaleKind,
    pub num_octaves: usize,
    pub num_drums: usize,
    pub layout: LayoutMode,
    pub tempo: Tempo,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            lead_root: Note::from_midi(67), // G4
            drum_root: Note::from_midi(60), // C4
            lead_scale: ScaleKind::MinorPentatonic,
            num_octaves: 2,
            num_drums: 4,
            layout: LayoutMode::Radial,
            tempo: Tempo::default(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ToyTracks {
    pub bass: TrackId,
    pub lead: TrackId,
    pub drums: TrackId,
}

/// Piece with bass, lead and drum tracks and a loop of `NUM_BEATS` beats.
pub fn toy_piece(tempo: Tempo) -> (Piece, ToyTracks) {
    let mut piece = Piece::new(tempo);
    let tracks = ToyTracks {
        bass: piece.add_track(Track::new(Instrument::Bass)),
        lead: piece.add_track(Track::new(Instrument::Lead)),
        drums: piece.add_track(Track::new(Instrument::Drums)),
    };
    piece.loop_time = piece.beat_time(NUM_BEATS as f64);
    (piece, tracks)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A step was toggled and the piece re-rendered.
    Toggled { index: usize, on: bool },
    /// A transport button was hit; the host carries out the action.
    Transport(TransportAction),
}

pub struct Sequencer {
    piece: Piece,
    lead_track: TrackId,
    drum_track: TrackId,
    lead_notes: Vec<Note>,
    drum_notes: Vec<Note>,
    layout: GridLayout,
    mode: LayoutMode,
    buttons: ButtonRegistry,
}

impl Sequencer {
    pub fn new(
        piece: Piece,
        lead_track: TrackId,
        drum_track: TrackId,
        config: &SequencerConfig,
        canvas: Vec2,
    ) -> Result<Self, PieceError> {
        piece.track(lead_track)?;
        piece.track(drum_track)?;

        let lead_notes = gen_scale(config.lead_root, config.lead_scale, config.num_octaves);
        let drum_notes: Vec<Note> = (0..config.num_drums)
            .map(|i| config.drum_root.offset(i as i32))
            .collect();

        let rows = lead_notes.len() + drum_notes.len();
        let mut seq = Self {
            piece,
            lead_track,
            drum_track,
            lead_notes,
            drum_notes,
            layout: GridLayout::new(canvas, rows),
            mode: config.layout,
            buttons: ButtonRegistry::default(),
        };
        seq.build_grid();
        log::info!(
            "[seq] grid {}x{} ({} lead, {} drum rows)",
            seq.num_rows(),
            NUM_COLS,
            seq.lead_notes.len(),
            seq.drum_notes.len()
        );
        Ok(seq)
    }

    fn build_grid(&mut self) {
        let lead_len = self.lead_notes.len();
        for row in 0..self.num_rows() {
            // Highest lead note on the top row; drums below, ascending.
            let (track, note, color) = if row < lead_len {
                (self.lead_track, self.lead_notes[lead_len - 1 - row], Color::RED)
            } else {
                (self.drum_track, self.drum_notes[row - lead_len], Color::ORANGE)
            };
            for col in 0..NUM_COLS {
                self.buttons.push(Button {
                    rect: self.layout.cell_rect(row, col),
                    corners: Some(self.layout.cell_corners(row, col)),
                    kind: ButtonKind::Step(StepButton {
                        on: false,
                        track,
                        note,
                        row,
                        col,
                        color,
                    }),
                });
            }
        }
    }

    /// Register Play, Stop and Clear along the bottom edge.
    pub fn add_transport_buttons(&mut self) {
        for action in TransportAction::ALL {
            self.buttons.push(Button {
                rect: self.layout.transport_rect(action),
                corners: None,
                kind: ButtonKind::Transport(TransportButton { action }),
            });
        }
    }

    pub fn num_rows(&self) -> usize {
        self.lead_notes.len() + self.drum_notes.len()
    }

    pub fn lead_notes(&self) -> &[Note] {
        &self.lead_notes
    }

    pub fn drum_notes(&self) -> &[Note] {
        &self.drum_notes
    }

    pub fn lead_track(&self) -> TrackId {
        self.lead_track
    }

    pub fn drum_track(&self) -> TrackId {
        self.drum_track
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn buttons(&self) -> &ButtonRegistry {
        &self.buttons
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        self.mode = mode;
    }

    /// Loop length in seconds.
    pub fn loop_time(&self) -> f64 {
        self.piece.beat_time(NUM_BEATS as f64)
    }

    /// Index of the step button at `(row, col)`.
    pub fn step_index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.num_rows() && col < NUM_COLS).then_some(row * NUM_COLS + col)
    }

    /// Route a click to the first button under `p`.
    pub fn click<S: StateStore>(&mut self, p: Vec2, store: &mut S) -> Option<ClickOutcome> {
        let index = self.buttons.hit_test(p, self.mode)?;
        let kind = self.buttons.get(index)?.kind;
        match kind {
            ButtonKind::Transport(t) => Some(ClickOutcome::Transport(t.action)),
            ButtonKind::Step(_) => {
                let on = self.buttons.toggle(index)?;
                self.render(store);
                Some(ClickOutcome::Toggled { index, on })
            }
        }
    }

    /// Rebuild lead and drum notes from the grid, then publish the encoded
    /// grid to `store`. Returns the encoded grid.
    pub fn render<S: StateStore>(&mut self, store: &mut S) -> String {
        log::info!("[seq] rendering sequencer grid");
        if let Err(e) = self.compose() {
            log::error!("[seq] render failed: {}", e);
        }
        let hash = self.gen_hash();
        store.save(&hash);
        hash
    }

    fn compose(&mut self) -> Result<(), PieceError> {
        self.piece.clear_track(self.lead_track)?;
        self.piece.clear_track(self.drum_track)?;
        let step_len = 1.0 / STEPS_PER_BEAT as f64;
        let active: Vec<StepButton> = self.buttons.steps().filter(|s| s.on).copied().collect();
        for step in active {
            let beat = step.col as f64 / STEPS_PER_BEAT as f64;
            log::debug!("[seq] note {} at beat {}", step.note, beat);
            self.piece.make_note(step.track, beat, step.note, step_len)?;
        }
        Ok(())
    }

    pub fn gen_hash(&self) -> String {
        codec::encode_bits(self.buttons.step_states())
    }

    /// Load step states from an encoded grid. Nothing changes on error.
    /// Returns the number of steps written.
    pub fn parse_hash(&mut self, encoded: &str) -> Result<usize, CodecError> {
        log::info!("[hash] parsing hash string ({} chars)", encoded.len());
        let bits = codec::decode_for(encoded, self.buttons.step_count())?;
        self.buttons.apply_step_states(&bits);
        Ok(bits.len())
    }

    /// Restore the grid from `store` and render it. An empty store leaves
    /// the grid off and the piece untouched. Returns whether state was loaded.
    pub fn restore<S: StateStore>(&mut self, store: &mut S) -> Result<bool, CodecError> {
        let encoded = store.load();
        if encoded.is_empty() {
            return Ok(false);
        }
        self.parse_hash(&encoded)?;
        self.render(store);
        Ok(true)
    }

    /// Rescale stored geometry to a new canvas size.
    pub fn resize(&mut self, canvas: Vec2) {
        let old = self.layout.canvas();
        if canvas.cmple(Vec2::ZERO).any() || old.cmple(Vec2::ZERO).any() {
            log::warn!("[seq] ignoring resize {:?} -> {:?}", old, canvas);
            return;
        }
        self.buttons.rescale(old, canvas);
        self.layout.resize(canvas);
        log::info!("[seq] resized {:?} -> {:?}", old, canvas);
    }

    /// Clear the canvas, draw every button and, while playing, the cursor.
    pub fn draw<D: DrawSurface>(&self, surface: &mut D, play_time: f64) {
        surface.clear(self.layout.canvas());
        for button in self.buttons.iter() {
            match &button.kind {
                ButtonKind::Step(step) => self.draw_step(surface, button, step),
                ButtonKind::Transport(t) => draw_transport(surface, button, t.action),
            }
        }

        let total = self.loop_time();
        let play_pos = if total > 0.0 { play_time / total } else { 0.0 };
        if play_pos != 0.0 {
            let (a, b) = self.layout.cursor(self.mode, play_pos as f32);
            surface.set_stroke_color(Color::WHITE);
            surface.begin_path();
            surface.move_to(a);
            surface.line_to(b);
            surface.close_path();
            surface.stroke();
        }
    }

    fn draw_step<D: DrawSurface>(&self, surface: &mut D, button: &Button, step: &StepButton) {
        match (self.mode, &button.corners) {
            (LayoutMode::Radial, Some(quad)) => {
                surface.set_stroke_color(Color::RED);
                surface.set_line_width(STROKE_WIDTH);
                trace_quad(surface, quad);
                surface.set_fill_color(if step.on { step.color } else { Color::BLACK });
                surface.stroke();
                surface.fill();
            }
            _ => {
                surface.set_fill_color(step.color);
                surface.fill_rect(button.rect.inset(SQR_OUTER_TRIM));
                if !step.on {
                    surface.set_fill_color(Color::BLACK);
                    surface.fill_rect(button.rect.inset(SQR_INNER_TRIM));
                }
            }
        }
    }
}

fn trace_quad<D: DrawSurface>(surface: &mut D, quad: &Quad) {
    let [c0, c1, c2, c3] = *quad.corners();
    surface.begin_path();
    surface.move_to(c0);
    surface.line_to(c1);
    surface.line_to(c2);
    surface.line_to(c3);
    surface.line_to(c0);
}

fn draw_transport<D: DrawSurface>(surface: &mut D, button: &Button, action: TransportAction) {
    let color = action.color();
    surface.set_stroke_color(color);
    surface.set_line_width(STROKE_WIDTH);
    surface.stroke_rect(button.rect);
    surface.set_fill_color(color);
    let anchor = Vec2::new(button.rect.min.x + button.rect.size.x / 2.0, button.rect.min.y);
    surface.fill_text_centered(action.label(), anchor, TRANSPORT_FONT);
}
