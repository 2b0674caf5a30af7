use crate::geometry::{Color, Rect};
use glam::Vec2;

/// Immediate-mode 2D drawing target, shaped after the canvas 2D context.
///
/// Paths follow canvas semantics: `begin_path` starts a new path and
/// `stroke`/`fill` paint the current one with the current styles.
pub trait DrawSurface {
    fn clear(&mut self, size: Vec2);
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn fill_rect(&mut self, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2);
    fn line_to(&mut self, p: Vec2);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);
    /// Text centred horizontally on `anchor.x` with its top at `anchor.y`.
    fn fill_text_centered(&mut self, text: &str, anchor: Vec2, font: &str);
}
