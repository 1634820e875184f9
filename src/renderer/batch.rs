//! CPU-side draw batch
//!
//! Collects one frame of draw calls as triangles plus text labels. Text is
//! not tessellated; the platform layer places labels (DOM on the web).

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use super::{Renderer, TextAnchor};
use crate::Color;
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub anchor: TextAnchor,
    pub color: Color,
}

#[derive(Debug, Clone, Default)]
pub struct ShapeBatch {
    pub clear_color: Color,
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
    /// Frames finished with `present`
    pub frames_presented: u64,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label_texts(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.text.as_str())
    }
}

impl Renderer for ShapeBatch {
    fn fill_background(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
        self.labels.clear();
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, outline: Option<f32>) {
        let v = match outline {
            Some(width) => shapes::rect_outline(rect, width, color),
            None => shapes::rect(rect, color),
        };
        self.vertices.extend(v);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, outline: Option<f32>) {
        let segments = shapes::circle_segments(radius);
        let v = match outline {
            Some(width) => shapes::ring(center, (radius - width).max(0.0), radius, color, segments),
            None => shapes::circle(center, radius, color, segments),
        };
        self.vertices.extend(v);
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, width: f32) {
        self.vertices.extend(shapes::line(start, end, width, color));
    }

    fn draw_text(&mut self, text: &str, anchor: TextAnchor, color: Color) {
        self.labels.push(TextLabel {
            text: text.to_string(),
            anchor,
            color,
        });
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_starts_new_frame() {
        let mut batch = ShapeBatch::new();
        batch.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), [1.0; 4], None);
        batch.draw_text("hi", TextAnchor::TopLeft(Vec2::ZERO), [1.0; 4]);
        assert_eq!(batch.vertices.len(), 6);
        assert_eq!(batch.labels.len(), 1);

        batch.fill_background([0.0, 0.5, 0.0, 1.0]);
        assert!(batch.vertices.is_empty());
        assert!(batch.labels.is_empty());
        assert_eq!(batch.clear_color, [0.0, 0.5, 0.0, 1.0]);
    }

    #[test]
    fn test_present_counts_frames() {
        let mut batch = ShapeBatch::new();
        batch.present();
        batch.present();
        assert_eq!(batch.frames_presented, 2);
    }
}
