//! Shape generation for 2D primitives
//!
//! All functions emit triangle lists in field coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Segments used for circles of this radius
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 0.75) as u32).clamp(12, 96)
}

/// Two triangles covering the quad a-b-c-d (in winding order)
fn quad(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));

    out.push(Vertex::new(c.x, c.y, color));
    out.push(Vertex::new(d.x, d.y, color));
    out.push(Vertex::new(a.x, a.y, color));
}

/// Generate vertices for a filled rect
pub fn rect(r: Rect, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    quad(
        &mut vertices,
        Vec2::new(r.x, r.y),
        Vec2::new(r.right(), r.y),
        Vec2::new(r.right(), r.bottom()),
        Vec2::new(r.x, r.bottom()),
        color,
    );
    vertices
}

/// Generate vertices for a rect border drawn inward from the edges
pub fn rect_outline(r: Rect, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let w = width.min(r.w / 2.0).min(r.h / 2.0);
    if w <= 0.0 {
        return Vec::new();
    }
    let bands = [
        Rect::new(r.x, r.y, r.w, w),
        Rect::new(r.x, r.bottom() - w, r.w, w),
        Rect::new(r.x, r.y + w, w, r.h - 2.0 * w),
        Rect::new(r.right() - w, r.y + w, w, r.h - 2.0 * w),
    ];
    bands.into_iter().flat_map(|band| rect(band, color)).collect()
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);
    let at = |r: f32, theta: f32| center + Vec2::new(r * theta.cos(), r * theta.sin());

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        quad(
            &mut vertices,
            at(inner_radius, theta1),
            at(outer_radius, theta1),
            at(outer_radius, theta2),
            at(inner_radius, theta2),
            color,
        );
    }

    vertices
}

/// Generate vertices for a thick line segment
pub fn line(start: Vec2, end: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (end - start).normalize_or_zero();
    if dir == Vec2::ZERO || width <= 0.0 {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let mut vertices = Vec::with_capacity(6);
    quad(
        &mut vertices,
        start + perp,
        end + perp,
        end - perp,
        start - perp,
        color,
    );
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    fn bounds(vertices: &[Vertex]) -> (Vec2, Vec2) {
        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        for v in vertices {
            let p = Vec2::from(v.position);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }

    #[test]
    fn test_rect_covers_box() {
        let v = rect(Rect::new(10.0, 20.0, 50.0, 100.0), WHITE);
        assert_eq!(v.len(), 6);
        assert_eq!(bounds(&v), (Vec2::new(10.0, 20.0), Vec2::new(60.0, 120.0)));
    }

    #[test]
    fn test_rect_outline_stays_inside() {
        let r = Rect::new(50.0, 50.0, 900.0, 500.0);
        let v = rect_outline(r, 5.0, WHITE);
        assert_eq!(v.len(), 24);
        assert_eq!(bounds(&v), (Vec2::new(50.0, 50.0), Vec2::new(950.0, 550.0)));
    }

    #[test]
    fn test_circle_within_radius() {
        let center = Vec2::new(100.0, 100.0);
        let v = circle(center, 15.0, WHITE, 16);
        assert_eq!(v.len(), 48);
        assert!(v.iter().all(|p| (Vec2::from(p.position) - center).length() <= 15.0 + 1e-3));
    }

    #[test]
    fn test_ring_between_radii() {
        let center = Vec2::new(500.0, 300.0);
        let v = ring(center, 70.0, 75.0, WHITE, 32);
        assert_eq!(v.len(), 32 * 6);
        for p in &v {
            let d = (Vec2::from(p.position) - center).length();
            assert!((70.0 - 1e-3..=75.0 + 1e-3).contains(&d));
        }
    }

    #[test]
    fn test_line_width() {
        let v = line(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), 2.0, WHITE);
        assert_eq!(bounds(&v), (Vec2::new(0.0, -1.0), Vec2::new(100.0, 1.0)));
        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, WHITE).is_empty());
    }
}
