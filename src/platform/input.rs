//! Pointer and viewport cells
//!
//! Both are written only by host events and read by the render loop at the
//! start of each frame. There is no buffering: a newer event simply
//! replaces the older value.

use glam::Vec2;

/// Last known pointer position in CSS pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Record a new pointer position, replacing the previous one
    #[inline]
    pub fn update(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Viewport size in CSS pixels plus the device pixel ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            pixel_ratio: if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 },
        }
    }

    /// Backing-store size in physical pixels
    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_defaults_to_origin() {
        assert_eq!(PointerState::default().position(), Vec2::ZERO);
    }

    #[test]
    fn test_pointer_last_event_wins() {
        let mut pointer = PointerState::default();
        pointer.update(10.0, 20.0);
        pointer.update(30.0, 5.0);
        assert_eq!(pointer.position(), Vec2::new(30.0, 5.0));
    }

    #[test]
    fn test_physical_size_scales_by_ratio() {
        let viewport = Viewport::new(800.0, 600.0, 2.0);
        assert_eq!(viewport.physical_size(), (1600, 1200));
    }

    #[test]
    fn test_bad_ratio_and_negative_size_clamped() {
        let viewport = Viewport::new(-5.0, 100.0, 0.0);
        assert_eq!(viewport.width, 0.0);
        assert_eq!(viewport.pixel_ratio, 1.0);
        assert_eq!(viewport.physical_size(), (0, 100));
    }
}
