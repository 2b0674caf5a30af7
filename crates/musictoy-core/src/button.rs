use crate::constants::STROKE_WIDTH;
use crate::geometry::{Color, Quad, Rect};
use crate::layout::LayoutMode;
use crate::music::Note;
use crate::piece::TrackId;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportAction {
    Play,
    Stop,
    Clear,
}

impl TransportAction {
    pub const ALL: [TransportAction; 3] = [
        TransportAction::Play,
        TransportAction::Stop,
        TransportAction::Clear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TransportAction::Play => "Play",
            TransportAction::Stop => "Stop",
            TransportAction::Clear => "Clear",
        }
    }

    pub fn color(self) -> Color {
        match self {
            TransportAction::Clear => Color::RED,
            _ => Color::WHITE,
        }
    }
}

/// One toggleable grid cell: `note` plays on `track` at column `col`.
#[derive(Clone, Copy, Debug)]
pub struct StepButton {
    pub on: bool,
    pub track: TrackId,
    pub note: Note,
    pub row: usize,
    pub col: usize,
    pub color: Color,
}

#[derive(Clone, Copy, Debug)]
pub struct TransportButton {
    pub action: TransportAction,
}

#[derive(Clone, Copy, Debug)]
pub enum ButtonKind {
    Transport(TransportButton),
    Step(StepButton),
}

/// Clickable region. `rect` is always set; `corners` replaces it for hit
/// testing and drawing in the radial layout.
#[derive(Clone, Copy, Debug)]
pub struct Button {
    pub rect: Rect,
    pub corners: Option<Quad>,
    pub kind: ButtonKind,
}

impl Button {
    pub fn step(&self) -> Option<&StepButton> {
        match &self.kind {
            ButtonKind::Step(s) => Some(s),
            ButtonKind::Transport(_) => None,
        }
    }

    pub fn hit(&self, p: Vec2, mode: LayoutMode) -> bool {
        match (mode, &self.corners) {
            (LayoutMode::Radial, Some(quad)) => quad.contains(p, STROKE_WIDTH * 0.5),
            _ => self.rect.contains(p),
        }
    }

    fn rescale(&mut self, k: Vec2) {
        self.rect = self.rect.scaled(k);
        if let Some(quad) = &mut self.corners {
            *quad = quad.scaled(k);
        }
    }
}

/// Buttons in registration order. Step buttons are registered before
/// transport buttons and keep that order for the life of the grid.
#[derive(Clone, Debug, Default)]
pub struct ButtonRegistry {
    buttons: Vec<Button>,
}

impl ButtonRegistry {
    pub fn push(&mut self, button: Button) -> usize {
        self.buttons.push(button);
        self.buttons.len() - 1
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Button> {
        self.buttons.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter()
    }

    pub fn steps(&self) -> impl Iterator<Item = &StepButton> {
        self.buttons.iter().filter_map(Button::step)
    }

    pub fn steps_mut(&mut self) -> impl Iterator<Item = &mut StepButton> {
        self.buttons.iter_mut().filter_map(|b| match &mut b.kind {
            ButtonKind::Step(s) => Some(s),
            ButtonKind::Transport(_) => None,
        })
    }

    pub fn step_count(&self) -> usize {
        self.steps().count()
    }

    /// On/off bits of every step button, in registration order.
    pub fn step_states(&self) -> impl Iterator<Item = bool> + '_ {
        self.steps().map(|s| s.on)
    }

    /// Overwrite step states in order; extra steps keep their state.
    pub fn apply_step_states(&mut self, bits: &[bool]) {
        for (step, &bit) in self.steps_mut().zip(bits) {
            step.on = bit;
        }
    }

    /// First button under `p` in registration order.
    pub fn hit_test(&self, p: Vec2, mode: LayoutMode) -> Option<usize> {
        self.buttons.iter().position(|b| b.hit(p, mode))
    }

    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        match &mut self.buttons.get_mut(index)?.kind {
            ButtonKind::Step(s) => {
                s.on = !s.on;
                Some(s.on)
            }
            ButtonKind::Transport(_) => None,
        }
    }

    /// Scale all stored geometry by `new / old` per axis.
    pub fn rescale(&mut self, old: Vec2, new: Vec2) {
        if old.cmple(Vec2::ZERO).any() || new.cmple(Vec2::ZERO).any() {
            return;
        }
        let k = new / old;
        for b in &mut self.buttons {
            b.rescale(k);
        }
    }
}
