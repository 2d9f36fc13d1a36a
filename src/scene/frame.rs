//! Per-frame draw list
//!
//! `render_frame` is called once per display refresh with an immutable
//! snapshot of the surface layout and pointer, and returns everything that
//! should be painted, back to front.

use glam::Vec2;

use super::draw::{Color, DrawCommand, Stroke, palette};
use super::layout::{Eye, Layout};
use super::tracker::TrackerParams;
use crate::consts::*;
use crate::settings::Settings;

/// Snapshot handed to the render loop each frame
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub layout: &'a Layout,
    /// Last pointer position seen by the host, in CSS pixels
    pub pointer: Vec2,
    /// Host timestamp in milliseconds
    pub time: f64,
}

/// Build the draw list for one frame
pub fn render_frame(input: &FrameInput<'_>, settings: &Settings) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(32);

    commands.push(DrawCommand::Clear(palette::BACKGROUND));

    commands.extend(border_segments(input.layout.width, settings.border.palette()));

    for (glyph, anchor, color) in input.layout.letters() {
        commands.extend(glyph.strokes(anchor, color));
    }

    for eye in input.layout.eyes() {
        draw_eye(&mut commands, &eye, input.pointer, &settings.tracker);
    }

    commands
}

/// Top border: one fixed-height segment per palette color, left to right,
/// together spanning `[0, width)`
pub fn border_segments(width: f32, colors: &[Color]) -> Vec<DrawCommand> {
    if colors.is_empty() {
        return Vec::new();
    }
    let n = colors.len() as f32;
    colors
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            // Edges computed independently so neighbours share exact boundaries
            let left = i as f32 * width / n;
            let right = (i + 1) as f32 * width / n;
            DrawCommand::Rect {
                origin: Vec2::new(left, 0.0),
                size: Vec2::new(right - left, BORDER_HEIGHT),
                color,
            }
        })
        .collect()
}

fn draw_eye(commands: &mut Vec<DrawCommand>, eye: &Eye, pointer: Vec2, tracker: &TrackerParams) {
    commands.push(DrawCommand::Ellipse {
        center: eye.center,
        diameter: eye.diameter,
        fill: Some(palette::EYE),
        stroke: Some(Stroke {
            color: eye.color,
            weight: EYE_STROKE,
        }),
    });

    let offset = tracker.offset(eye.center, pointer);
    let pupil = eye.center + offset;
    commands.push(DrawCommand::disc(pupil, PUPIL_SIZE, palette::PUPIL));

    let highlight = pupil + offset * HIGHLIGHT_FOLLOW - Vec2::splat(HIGHLIGHT_SHIFT);
    commands.push(DrawCommand::disc(highlight, HIGHLIGHT_SIZE, palette::HIGHLIGHT));
}
