//! Platform abstraction layer
//!
//! Host-facing state the render loop reads once per frame:
//! - Pointer position (last event wins)
//! - Viewport size and device pixel ratio
//! - Frame timing (delta time, rolling FPS)

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{PointerState, Viewport};
