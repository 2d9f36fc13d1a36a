//! Logo layout
//!
//! All positions are derived from the surface size and the constants in
//! `crate::consts`. A `Layout` is rebuilt whenever the window is resized
//! and handed to every frame; nothing else about the page is cached.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::draw::{Color, palette};
use super::glyph::Glyph;
use crate::consts::*;

/// One of the two "o" letters drawn as an eye
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eye {
    pub center: Vec2,
    pub color: Color,
    pub diameter: f32,
}

/// Layout scalars for the current surface size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    /// Vertical center of the logo
    pub logo_y: f32,
    /// Left edge of the centered logo
    pub start_x: f32,
    pub first_eye_x: f32,
    pub second_eye_x: f32,
    pub g_x: f32,
    pub l_x: f32,
    pub e_x: f32,
}

/// Total width of the six-letter logo
pub const LOGO_WIDTH: f32 = LOGO_SIZE * 3.0 + EYE_DISTANCE + LOGO_SPACING * 5.0;

impl Layout {
    pub fn new(width: f32, height: f32) -> Self {
        let start_x = (width - LOGO_WIDTH) / 2.0;
        let first_eye_x = start_x + LOGO_SIZE * 0.9 + LOGO_SPACING;
        let second_eye_x = first_eye_x + EYE_SIZE + EYE_DISTANCE / 4.0;
        let tail_x = second_eye_x + EYE_SIZE / 1.6 + LOGO_SPACING;

        Self {
            width,
            height,
            logo_y: height / LOGO_Y_DIVISOR,
            start_x,
            first_eye_x,
            second_eye_x,
            g_x: tail_x + LOGO_SIZE * 0.4,
            l_x: tail_x + LOGO_SIZE * 0.8,
            e_x: tail_x + LOGO_SIZE * 1.3,
        }
    }

    /// Rebuild for a new surface size
    pub fn resize(&mut self, width: f32, height: f32) {
        *self = Self::new(width, height);
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Both eyes, left to right
    pub fn eyes(&self) -> [Eye; 2] {
        [
            Eye {
                center: Vec2::new(self.first_eye_x, self.logo_y),
                color: palette::RED,
                diameter: EYE_SIZE,
            },
            Eye {
                center: Vec2::new(self.second_eye_x, self.logo_y),
                color: palette::YELLOW,
                diameter: EYE_SIZE,
            },
        ]
    }

    /// Non-eye letters with their centers and colors, left to right
    pub fn letters(&self) -> [(Glyph, Vec2, Color); 4] {
        [
            (Glyph::CapitalG, Vec2::new(self.start_x, self.logo_y), palette::BLUE),
            (Glyph::SmallG, Vec2::new(self.g_x, self.logo_y), palette::BLUE),
            (Glyph::SmallL, Vec2::new(self.l_x, self.logo_y), palette::GREEN),
            (Glyph::SmallE, Vec2::new(self.e_x, self.logo_y), palette::RED),
        ]
    }
}
