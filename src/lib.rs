//! Eyes Tracker - a logo whose eyes follow the cursor
//!
//! Core modules:
//! - `scene`: Pure per-frame logic (pupil tracking, layout, draw list)
//! - `renderer`: WebGPU tessellation and render pipeline
//! - `platform`: Host input cells and frame timing
//! - `chrome`: Static page chrome (search bar, buttons, footer)
//! - `settings`: Per-page configuration

pub mod chrome;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;

pub use settings::{BorderVariant, Settings};

use glam::Vec2;

/// Page and layout constants
pub mod consts {
    /// Eye (the "o" letters) outer diameter
    pub const EYE_SIZE: f32 = 50.0;
    /// Stroke weight of the colored eye outline
    pub const EYE_STROKE: f32 = 4.0;
    /// Pupil diameter
    pub const PUPIL_SIZE: f32 = 24.0;
    /// Highlight diameter
    pub const HIGHLIGHT_SIZE: f32 = PUPIL_SIZE / 3.0;
    /// Fixed up-left shift of the highlight inside the pupil
    pub const HIGHLIGHT_SHIFT: f32 = PUPIL_SIZE / 5.0;
    /// Fraction of the pupil offset the highlight travels on top of it
    pub const HIGHLIGHT_FOLLOW: f32 = 0.2;

    /// How far pupils can move from the eye center
    pub const PUPIL_MAX_OFFSET: f32 = 12.0;
    /// Pointer distance at which the pupil offset saturates
    pub const FALLOFF_RADIUS: f32 = 100.0;

    /// Logo letter size (nominal font size)
    pub const LOGO_SIZE: f32 = 72.0;
    /// Slightly negative spacing for tight letter placement
    pub const LOGO_SPACING: f32 = -5.0;
    /// Distance between the two eyes
    pub const EYE_DISTANCE: f32 = 50.0;
    /// Logo baseline sits at height / LOGO_Y_DIVISOR
    pub const LOGO_Y_DIVISOR: f32 = 3.3;

    /// Top border strip height
    pub const BORDER_HEIGHT: f32 = 4.0;

    /// Footer height (page chrome)
    pub const FOOTER_HEIGHT: f32 = 100.0;

    /// Segments used when tessellating circles and rings
    pub const CIRCLE_SEGMENTS: u32 = 48;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
