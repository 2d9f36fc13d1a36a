//! Logo letterforms built from strokes
//!
//! The renderer has no font rasterizer, so the four non-eye letters are
//! spelled out as arcs and bars. Proportions are fractions of `LOGO_SIZE`
//! and every glyph is centered on its anchor point, like centered text.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use super::draw::{Color, DrawCommand};
use crate::consts::LOGO_SIZE;

/// A logo letter that is not an eye
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    CapitalG,
    SmallG,
    SmallL,
    SmallE,
}

// Capital bowl
const CAP_RADIUS: f32 = LOGO_SIZE * 0.33;
const CAP_STROKE: f32 = LOGO_SIZE * 0.12;
// Lowercase bowls sit a little below the anchor (x-height)
const BOWL_DROP: f32 = LOGO_SIZE * 0.05;
const BOWL_RADIUS: f32 = LOGO_SIZE * 0.2;
const BOWL_STROKE: f32 = LOGO_SIZE * 0.1;
const DESCENDER: f32 = LOGO_SIZE * 0.3;
const STEM_WIDTH: f32 = LOGO_SIZE * 0.11;
const ASCENDER_TOP: f32 = LOGO_SIZE * 0.36;
const BASELINE: f32 = LOGO_SIZE * 0.33;
const E_BAR: f32 = LOGO_SIZE * 0.08;

impl Glyph {
    /// Draw commands for this glyph centered at `anchor`
    pub fn strokes(&self, anchor: Vec2, color: Color) -> Vec<DrawCommand> {
        self.local_strokes(color)
            .into_iter()
            .map(|cmd| cmd.translated(anchor))
            .collect()
    }

    fn local_strokes(&self, color: Color) -> Vec<DrawCommand> {
        match self {
            Glyph::CapitalG => {
                // Open at the upper right, crossbar back to the middle
                let bar_start = LOGO_SIZE * 0.02;
                vec![
                    DrawCommand::Arc {
                        center: Vec2::ZERO,
                        radius: CAP_RADIUS,
                        thickness: CAP_STROKE,
                        start: 0.0,
                        end: TAU - PI / 4.0,
                        color,
                    },
                    DrawCommand::Rect {
                        origin: Vec2::new(bar_start, -CAP_STROKE / 2.0),
                        size: Vec2::new(CAP_RADIUS + CAP_STROKE / 2.0 - bar_start, CAP_STROKE),
                        color,
                    },
                ]
            }
            Glyph::SmallG => {
                let bowl = Vec2::new(0.0, BOWL_DROP);
                let stem_x = BOWL_RADIUS - BOWL_STROKE / 2.0;
                let stem_top = bowl.y - BOWL_RADIUS - BOWL_STROKE / 2.0;
                let hook = Vec2::new(0.0, bowl.y + DESCENDER);
                vec![
                    DrawCommand::Arc {
                        center: bowl,
                        radius: BOWL_RADIUS,
                        thickness: BOWL_STROKE,
                        start: 0.0,
                        end: TAU,
                        color,
                    },
                    DrawCommand::Rect {
                        origin: Vec2::new(stem_x, stem_top),
                        size: Vec2::new(BOWL_STROKE, hook.y - stem_top),
                        color,
                    },
                    DrawCommand::Arc {
                        center: hook,
                        radius: BOWL_RADIUS,
                        thickness: BOWL_STROKE,
                        start: 0.0,
                        end: PI * 0.85,
                        color,
                    },
                ]
            }
            Glyph::SmallL => vec![DrawCommand::Rect {
                origin: Vec2::new(-STEM_WIDTH / 2.0, -ASCENDER_TOP),
                size: Vec2::new(STEM_WIDTH, ASCENDER_TOP + BASELINE),
                color,
            }],
            Glyph::SmallE => {
                // Open at the lower right, bar through the middle
                let bowl = Vec2::new(0.0, BOWL_DROP);
                vec![
                    DrawCommand::Arc {
                        center: bowl,
                        radius: BOWL_RADIUS,
                        thickness: BOWL_STROKE,
                        start: PI / 4.0,
                        end: TAU,
                        color,
                    },
                    DrawCommand::Rect {
                        origin: Vec2::new(-BOWL_RADIUS, bowl.y - E_BAR / 2.0),
                        size: Vec2::new(BOWL_RADIUS * 2.0, E_BAR),
                        color,
                    },
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::palette;

    const ALL: [Glyph; 4] = [Glyph::CapitalG, Glyph::SmallG, Glyph::SmallL, Glyph::SmallE];

    /// Loose bounding box of a command (arcs use their full circle)
    fn extent(cmd: &DrawCommand) -> (Vec2, Vec2) {
        match *cmd {
            DrawCommand::Rect { origin, size, .. } => (origin, origin + size),
            DrawCommand::Arc {
                center,
                radius,
                thickness,
                ..
            } => {
                let r = Vec2::splat(radius + thickness / 2.0);
                (center - r, center + r)
            }
            DrawCommand::Ellipse {
                center, diameter, ..
            } => {
                let r = Vec2::splat(diameter / 2.0);
                (center - r, center + r)
            }
            DrawCommand::Clear(_) => (Vec2::ZERO, Vec2::ZERO),
        }
    }

    #[test]
    fn test_glyphs_fit_letter_cell() {
        let limit = LOGO_SIZE * 0.65;
        for glyph in ALL {
            for cmd in glyph.strokes(Vec2::ZERO, palette::BLUE) {
                let (min, max) = extent(&cmd);
                assert!(min.x >= -limit && min.y >= -limit, "{:?} {:?}", glyph, cmd);
                assert!(max.x <= limit && max.y <= limit, "{:?} {:?}", glyph, cmd);
            }
        }
    }

    #[test]
    fn test_strokes_follow_anchor_and_color() {
        let anchor = Vec2::new(300.0, 120.0);
        for glyph in ALL {
            let local = glyph.strokes(Vec2::ZERO, palette::GREEN);
            let placed = glyph.strokes(anchor, palette::GREEN);
            assert_eq!(local.len(), placed.len());
            for (a, b) in local.into_iter().zip(placed) {
                assert_eq!(a.translated(anchor), b);
            }
        }
    }

    #[test]
    fn test_capital_g_opening() {
        let strokes = Glyph::CapitalG.strokes(Vec2::ZERO, palette::BLUE);
        match strokes[0] {
            DrawCommand::Arc { start, end, .. } => {
                assert!(end - start < TAU);
                assert!(end - start > PI);
            }
            ref other => panic!("expected arc, got {:?}", other),
        }
    }
}
