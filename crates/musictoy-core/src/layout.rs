use crate::constants::*;
use crate::geometry::{Quad, Rect};
use crate::button::TransportAction;
use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LayoutMode {
    Rectangular,
    #[default]
    Radial,
}

impl LayoutMode {
    pub fn toggled(self) -> Self {
        match self {
            LayoutMode::Rectangular => LayoutMode::Radial,
            LayoutMode::Radial => LayoutMode::Rectangular,
        }
    }
}

/// Point on an ellipse centred at `centre` with semi-axes `radii`.
/// Angle 0 points down the +y axis and increases toward +x.
#[inline]
pub fn ellipse_point_at(centre: Vec2, radii: Vec2, angle: f32) -> Vec2 {
    centre + radii * Vec2::new(angle.sin(), angle.cos())
}

/// Screen geometry of the grid for a given canvas size.
///
/// The ellipse follows the canvas. Cells are placed by their fraction of the
/// logical grid (`NUM_COLS` x `rows` cells), so column 31 always closes the
/// ring and the last row always reaches the outer band, whatever the canvas
/// size. `scale` tracks how far stored rectangles have been stretched by
/// resizes since the grid was built.
#[derive(Clone, Copy, Debug)]
pub struct GridLayout {
    canvas: Vec2,
    centre: Vec2,
    axes: Vec2,
    rows: usize,
    scale: Vec2,
}

impl GridLayout {
    pub fn new(canvas: Vec2, rows: usize) -> Self {
        let mut layout = Self {
            canvas,
            centre: Vec2::ZERO,
            axes: Vec2::ZERO,
            rows,
            scale: Vec2::ONE,
        };
        layout.fit(canvas);
        layout
    }

    /// Follow a new canvas size. Degenerate sizes are ignored.
    pub fn resize(&mut self, canvas: Vec2) {
        if canvas.cmple(Vec2::ZERO).any() || self.canvas.cmple(Vec2::ZERO).any() {
            return;
        }
        self.scale *= canvas / self.canvas;
        self.fit(canvas);
    }

    fn fit(&mut self, canvas: Vec2) {
        self.canvas = canvas;
        self.centre = canvas * 0.5;
        self.axes = canvas / ELLIPSE_AXIS_DIVISOR;
    }

    pub fn canvas(&self) -> Vec2 {
        self.canvas
    }

    pub fn centre(&self) -> Vec2 {
        self.centre
    }

    /// Semi-axes (major along x, minor along y) of the full-size ellipse.
    pub fn axes(&self) -> Vec2 {
        self.axes
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Unscaled size of the rectangular grid in pixels.
    pub fn logical_extent(&self) -> Vec2 {
        Vec2::new(
            SQR_WIDTH * NUM_COLS as f32,
            SQR_HEIGHT * self.rows.max(1) as f32,
        )
    }

    /// Size of the rectangular grid on the current canvas.
    pub fn grid_extent(&self) -> Vec2 {
        self.logical_extent() * self.scale
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        Rect::new(
            SQR_WIDTH * col as f32,
            SQR_HEIGHT * row as f32,
            SQR_WIDTH,
            SQR_HEIGHT,
        )
        .scaled(self.scale)
    }

    /// Ring segment for a cell: columns map to angle around the full
    /// circle, rows to a band between the inner and outer rings.
    pub fn cell_corners(&self, row: usize, col: usize) -> Quad {
        let extent = self.logical_extent();
        let x = SQR_WIDTH * col as f32;
        let y = SQR_HEIGHT * row as f32;
        let ratio_x0 = x / extent.x;
        let ratio_x1 = (x + SQR_WIDTH) / extent.x;
        let ratio_y0 = band_ratio(y / extent.y);
        let ratio_y1 = band_ratio((y + SQR_HEIGHT) / extent.y);
        Quad([
            self.ring_point(ratio_y0, ratio_x0),
            self.ring_point(ratio_y0, ratio_x1),
            self.ring_point(ratio_y1, ratio_x1),
            self.ring_point(ratio_y1, ratio_x0),
        ])
    }

    #[inline]
    fn ring_point(&self, radius_ratio: f32, turn: f32) -> Vec2 {
        ellipse_point_at(self.centre, self.axes * radius_ratio, TAU * turn)
    }

    /// Playhead segment for a loop position in `[0, 1)`.
    pub fn cursor(&self, mode: LayoutMode, play_pos: f32) -> (Vec2, Vec2) {
        match mode {
            LayoutMode::Rectangular => {
                let extent = self.grid_extent();
                let x = play_pos * extent.x;
                (Vec2::new(x, 0.0), Vec2::new(x, extent.y))
            }
            LayoutMode::Radial => {
                let angle = play_pos * TAU;
                (
                    ellipse_point_at(self.centre, self.axes * ELLIPSE_BOTTOM, angle),
                    ellipse_point_at(self.centre, self.axes * ELLIPSE_TOP, angle),
                )
            }
        }
    }

    pub fn transport_rect(&self, action: TransportAction) -> Rect {
        let (w, h) = (self.canvas.x, self.canvas.y);
        let y = h - TRANSPORT_BOTTOM_MARGIN;
        let x = match action {
            TransportAction::Play => w / 2.0 - TRANSPORT_WIDTH - TRANSPORT_GAP,
            TransportAction::Stop => w / 2.0 + TRANSPORT_GAP,
            TransportAction::Clear => w - TRANSPORT_WIDTH - TRANSPORT_GAP,
        };
        Rect::new(x, y, TRANSPORT_WIDTH, TRANSPORT_HEIGHT)
    }
}

// Fraction of the grid height mapped onto the band between the rings.
#[inline]
fn band_ratio(fraction: f32) -> f32 {
    ELLIPSE_BOTTOM + fraction * (ELLIPSE_TOP - ELLIPSE_BOTTOM)
}
