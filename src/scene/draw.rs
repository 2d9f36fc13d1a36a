//! Draw list vocabulary
//!
//! A frame is an ordered list of these commands in CSS pixel space
//! (origin top-left, y down). Later commands paint over earlier ones.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) sRGB color, components in 0..=1
pub type Color = [f32; 4];

/// Build an opaque color from 8-bit channels
pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    rgba8(r, g, b, 255)
}

/// Build a color from 8-bit channels including alpha
pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

/// Page colors
pub mod palette {
    use super::{Color, rgb8, rgba8};

    pub const BACKGROUND: Color = rgb8(255, 255, 255);
    pub const EYE: Color = rgb8(255, 255, 255);
    pub const PUPIL: Color = rgb8(0, 0, 0);
    pub const HIGHLIGHT: Color = rgba8(255, 255, 255, 200);

    pub const BLUE: Color = rgb8(66, 133, 244);
    pub const RED: Color = rgb8(219, 68, 55);
    pub const YELLOW: Color = rgb8(244, 180, 0);
    pub const GREEN: Color = rgb8(15, 157, 88);
}

/// Outline drawn centered on a shape's edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub weight: f32,
}

/// A single drawing command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole surface
    Clear(Color),
    /// Axis-aligned filled rectangle
    Rect { origin: Vec2, size: Vec2, color: Color },
    /// Circle with optional fill and outline
    Ellipse {
        center: Vec2,
        diameter: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    /// Thick arc band. Angles in radians, y down, so positive sweeps clockwise on screen
    Arc {
        center: Vec2,
        radius: f32,
        thickness: f32,
        start: f32,
        end: f32,
        color: Color,
    },
}

impl DrawCommand {
    /// Filled circle without outline
    pub fn disc(center: Vec2, diameter: f32, color: Color) -> Self {
        DrawCommand::Ellipse {
            center,
            diameter,
            fill: Some(color),
            stroke: None,
        }
    }

    /// Translate the command by `delta` (no-op for `Clear`)
    pub fn translated(self, delta: Vec2) -> Self {
        match self {
            DrawCommand::Clear(c) => DrawCommand::Clear(c),
            DrawCommand::Rect {
                origin,
                size,
                color,
            } => DrawCommand::Rect {
                origin: origin + delta,
                size,
                color,
            },
            DrawCommand::Ellipse {
                center,
                diameter,
                fill,
                stroke,
            } => DrawCommand::Ellipse {
                center: center + delta,
                diameter,
                fill,
                stroke,
            },
            DrawCommand::Arc {
                center,
                radius,
                thickness,
                start,
                end,
                color,
            } => DrawCommand::Arc {
                center: center + delta,
                radius,
                thickness,
                start,
                end,
                color,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb8_normalizes() {
        let c = rgb8(255, 0, 51);
        assert_eq!(c, [1.0, 0.0, 0.2, 1.0]);
    }

    #[test]
    fn test_highlight_alpha() {
        assert!((palette::HIGHLIGHT[3] - 200.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_translated_moves_shapes_not_clear() {
        let delta = Vec2::new(10.0, -5.0);
        let disc = DrawCommand::disc(Vec2::new(1.0, 2.0), 4.0, palette::PUPIL).translated(delta);
        assert_eq!(disc, DrawCommand::disc(Vec2::new(11.0, -3.0), 4.0, palette::PUPIL));
        assert_eq!(
            DrawCommand::Clear(palette::BACKGROUND).translated(delta),
            DrawCommand::Clear(palette::BACKGROUND)
        );
    }
}
