//! Frame timing
//!
//! Tracks the last 60 frame timestamps to derive delta time and a rolling
//! frames-per-second value.

/// Number of frames in the rolling FPS window
pub const FPS_WINDOW: usize = 60;

/// Delta time used for the very first frame (seconds)
pub const FIRST_FRAME_DT: f32 = 1.0 / 60.0;

/// Frames slower than this (seconds) are reported as stalls
pub const LONG_FRAME_DT: f32 = 0.25;

/// Rolling frame clock driven by host timestamps (milliseconds)
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    last_time: f64,
    last_report: f64,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            last_time: 0.0,
            last_report: 0.0,
            fps: 0,
        }
    }

    /// Record a frame at `time` and return the delta since the previous one
    /// in seconds
    pub fn tick(&mut self, time: f64) -> f32 {
        let dt = if self.last_time > 0.0 {
            ((time - self.last_time) / 1000.0) as f32
        } else {
            FIRST_FRAME_DT
        };
        self.last_time = time;

        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest entry is the one about to be overwritten
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = time - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }

        dt
    }

    /// True when `dt` is long enough to be a visible stall
    pub fn is_long_frame(dt: f32) -> bool {
        dt > LONG_FRAME_DT
    }

    /// Rolling frames per second, 0 until the window has filled once
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// True at most once per second of host time
    pub fn should_report(&mut self, time: f64) -> bool {
        if time - self.last_report >= 1000.0 {
            self.last_report = time;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_uses_default_dt() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(1234.0), FIRST_FRAME_DT);
        assert!((clock.tick(1250.0) - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_long_frame_detection() {
        let mut clock = FrameClock::new();
        assert!(!FrameClock::is_long_frame(clock.tick(1000.0)));
        assert!(!FrameClock::is_long_frame(clock.tick(1016.0)));
        // Tab was hidden for half a second
        let dt = clock.tick(1516.0);
        assert!((dt - 0.5).abs() < 1e-6);
        assert!(FrameClock::is_long_frame(dt));
    }

    #[test]
    fn test_fps_at_steady_60hz() {
        let mut clock = FrameClock::new();
        let step = 1000.0 / 60.0;
        for i in 1..=200 {
            clock.tick(i as f64 * step);
        }
        assert_eq!(clock.fps(), 60);
    }

    #[test]
    fn test_fps_zero_before_window_fills() {
        let mut clock = FrameClock::new();
        for i in 1..10 {
            clock.tick(i as f64 * 16.0);
        }
        assert_eq!(clock.fps(), 0);
    }

    #[test]
    fn test_report_once_per_second() {
        let mut clock = FrameClock::new();
        assert!(clock.should_report(1000.0));
        assert!(!clock.should_report(1500.0));
        assert!(clock.should_report(2000.0));
    }
}
