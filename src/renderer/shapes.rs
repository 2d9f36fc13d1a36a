//! Shape generation for 2D primitives
//!
//! Turns a draw list into a flat triangle list in CSS pixel space.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::consts::CIRCLE_SEGMENTS;
use crate::polar_to_cartesian;
use crate::scene::{Color, DrawCommand, palette};

/// Arc tessellation density
const SEGMENTS_PER_RADIAN: f32 = CIRCLE_SEGMENTS as f32 / TAU;

/// Tessellated frame: clear color plus triangles, back to front
#[derive(Debug, Clone)]
pub struct Tessellation {
    pub clear: Color,
    pub vertices: Vec<Vertex>,
}

/// Tessellate a draw list. The last `Clear` wins and drops everything
/// drawn before it.
pub fn tessellate(commands: &[DrawCommand]) -> Tessellation {
    let mut clear = palette::BACKGROUND;
    let mut vertices = Vec::with_capacity(commands.len() * CIRCLE_SEGMENTS as usize * 3);

    for cmd in commands {
        match *cmd {
            DrawCommand::Clear(color) => {
                clear = color;
                vertices.clear();
            }
            DrawCommand::Rect {
                origin,
                size,
                color,
            } => vertices.extend(rect(origin, size, color)),
            DrawCommand::Ellipse {
                center,
                diameter,
                fill,
                stroke,
            } => {
                let radius = diameter / 2.0;
                if let Some(color) = fill {
                    vertices.extend(circle(center, radius, color, CIRCLE_SEGMENTS));
                }
                if let Some(stroke) = stroke {
                    // Stroke straddles the edge
                    let half = stroke.weight / 2.0;
                    vertices.extend(ring(
                        center,
                        (radius - half).max(0.0),
                        radius + half,
                        stroke.color,
                        CIRCLE_SEGMENTS,
                    ));
                }
            }
            DrawCommand::Arc {
                center,
                radius,
                thickness,
                start,
                end,
                color,
            } => vertices.extend(arc_band(center, radius, thickness, start, end, color)),
        }
    }

    Tessellation { clear, vertices }
}

/// Generate vertices for an axis-aligned rectangle
pub fn rect(origin: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    let min = origin;
    let max = origin + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;
        let p1 = center + polar_to_cartesian(radius, theta1);
        let p2 = center + polar_to_cartesian(radius, theta2);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: Color,
    segments: u32,
) -> Vec<Vertex> {
    band(center, inner_radius, outer_radius, 0.0, TAU, color, segments)
}

/// Generate vertices for a thick arc from `start` to `end` (radians)
pub fn arc_band(
    center: Vec2,
    radius: f32,
    thickness: f32,
    start: f32,
    end: f32,
    color: Color,
) -> Vec<Vertex> {
    let span = (end - start).abs();
    let segments = ((span * SEGMENTS_PER_RADIAN) as u32).max(4);
    let half = thickness / 2.0;
    band(
        center,
        (radius - half).max(0.0),
        radius + half,
        start,
        end,
        color,
        segments,
    )
}

fn band(
    center: Vec2,
    inner_r: f32,
    outer_r: f32,
    start: f32,
    end: f32,
    color: Color,
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);
    let span = end - start;

    for i in 0..segments {
        let theta1 = start + span * (i as f32 / segments as f32);
        let theta2 = start + span * ((i + 1) as f32 / segments as f32);

        let inner1 = center + polar_to_cartesian(inner_r, theta1);
        let outer1 = center + polar_to_cartesian(outer_r, theta1);
        let inner2 = center + polar_to_cartesian(inner_r, theta2);
        let outer2 = center + polar_to_cartesian(outer_r, theta2);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{FrameInput, Layout, Stroke, render_frame};
    use crate::settings::Settings;

    #[test]
    fn test_rect_corners() {
        let verts = rect(Vec2::new(10.0, 0.0), Vec2::new(20.0, 4.0), palette::RED);
        assert_eq!(verts.len(), 6);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 30.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 4.0);
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(50.0, 50.0);
        let verts = circle(center, 12.0, palette::PUPIL, 32);
        assert_eq!(verts.len(), 96);
        for v in verts {
            let p = Vec2::from(v.position);
            assert!((p - center).length() <= 12.0 + 1e-3);
        }
    }

    #[test]
    fn test_ring_between_radii() {
        let verts = ring(Vec2::ZERO, 23.0, 27.0, palette::RED, 16);
        assert_eq!(verts.len(), 96);
        for v in verts {
            let r = Vec2::from(v.position).length();
            assert!(r >= 23.0 - 1e-3 && r <= 27.0 + 1e-3);
        }
    }

    #[test]
    fn test_arc_has_minimum_segments() {
        let verts = arc_band(Vec2::ZERO, 10.0, 2.0, 0.0, 0.01, palette::BLUE);
        assert_eq!(verts.len(), 4 * 6);
    }

    #[test]
    fn test_stroked_ellipse_fill_then_ring() {
        let cmd = DrawCommand::Ellipse {
            center: Vec2::ZERO,
            diameter: 50.0,
            fill: Some(palette::EYE),
            stroke: Some(Stroke {
                color: palette::RED,
                weight: 4.0,
            }),
        };
        let tess = tessellate(&[cmd]);
        let fill_len = CIRCLE_SEGMENTS as usize * 3;
        assert_eq!(tess.vertices.len(), fill_len + CIRCLE_SEGMENTS as usize * 6);
        assert!(tess.vertices[..fill_len].iter().all(|v| v.color == palette::EYE));
        assert!(tess.vertices[fill_len..].iter().all(|v| v.color == palette::RED));
    }

    #[test]
    fn test_clear_resets_and_sets_color() {
        let tess = tessellate(&[
            DrawCommand::disc(Vec2::ZERO, 10.0, palette::PUPIL),
            DrawCommand::Clear(palette::YELLOW),
        ]);
        assert_eq!(tess.clear, palette::YELLOW);
        assert!(tess.vertices.is_empty());
    }

    #[test]
    fn test_full_frame_tessellates() {
        let layout = Layout::new(1280.0, 720.0);
        let input = FrameInput {
            layout: &layout,
            pointer: Vec2::new(640.0, 360.0),
            time: 0.0,
        };
        let tess = tessellate(&render_frame(&input, &Settings::default()));
        assert_eq!(tess.clear, palette::BACKGROUND);
        assert_eq!(tess.vertices.len() % 3, 0);
        assert!(!tess.vertices.is_empty());
    }
}
