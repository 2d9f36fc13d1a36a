//! Per-frame scene module
//!
//! Everything that decides what a frame looks like lives here. This module
//! must stay pure:
//! - No rendering or platform dependencies
//! - No state carried between frames except the `Layout`
//! - Same inputs, same draw list

pub mod draw;
pub mod frame;
pub mod glyph;
pub mod layout;
pub mod tracker;

pub use draw::{Color, DrawCommand, Stroke, palette};
pub use frame::{FrameInput, border_segments, render_frame};
pub use glyph::Glyph;
pub use layout::{Eye, Layout};
pub use tracker::{TrackerParams, pupil_offset};
