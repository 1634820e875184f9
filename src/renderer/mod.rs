//! Immediate-mode rendering
//!
//! The game draws through the `Renderer` trait every frame. `ShapeBatch`
//! tessellates the calls into colored triangles on the CPU; `RenderState`
//! uploads a finished batch to WebGPU and presents it.

pub mod batch;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::Color;
use crate::sim::Rect;

pub use batch::{ShapeBatch, TextLabel};
pub use pipeline::RenderState;
pub use scene::draw_match;
pub use vertex::Vertex;

/// Where a text label is pinned
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    /// Text starts at this point
    TopLeft(Vec2),
    /// Text ends at this point
    TopRight(Vec2),
}

/// Draw-command sink for one frame
pub trait Renderer {
    /// Clear the frame
    fn fill_background(&mut self, color: Color);
    /// Filled rect, or an inward outline of the given width
    fn draw_rect(&mut self, rect: Rect, color: Color, outline: Option<f32>);
    /// Filled circle, or a ring of the given width
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, outline: Option<f32>);
    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, width: f32);
    fn draw_text(&mut self, text: &str, anchor: TextAnchor, color: Color);
    /// Finish the frame
    fn present(&mut self);
}
