//! Shape generation for 2D primitives
//!
//! Vertices are produced in surface pixels (origin top-left, y down); the
//! pipeline maps them to clip space.

use glam::Vec2;

use super::frame::{FillRect, Frame};
use super::vertex::Vertex;

/// Two triangles covering an axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let max = min + size;
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

fn fill_rect(fill: &FillRect) -> [Vertex; 6] {
    rect(fill.min, fill.size, fill.color)
}

/// Vertices for every rectangle in the frame, in paint order
pub fn frame_vertices(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(frame.rects.len() * 6);
    for fill in &frame.rects {
        vertices.extend_from_slice(&fill_rect(fill));
    }
    vertices
}

/// Map a surface pixel position to normalized device coordinates
#[inline]
pub fn pixel_to_ndc(pos: [f32; 2], surface: Vec2) -> [f32; 2] {
    [pos[0] / surface.x * 2.0 - 1.0, 1.0 - pos[1] / surface.y * 2.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_SURFACE;
    use crate::renderer::frame::build_frame;
    use crate::sim::GameState;

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), [1.0; 4]);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_frame_vertices_count() {
        let state = GameState::new(DEFAULT_SURFACE);
        let frame = build_frame(&state);
        assert_eq!(frame_vertices(&frame).len(), frame.rects.len() * 6);
    }

    #[test]
    fn test_pixel_to_ndc() {
        let surface = Vec2::new(500.0, 400.0);
        assert_eq!(pixel_to_ndc([0.0, 0.0], surface), [-1.0, 1.0]);
        assert_eq!(pixel_to_ndc([500.0, 400.0], surface), [1.0, -1.0]);
        assert_eq!(pixel_to_ndc([250.0, 200.0], surface), [0.0, 0.0]);
    }
}
