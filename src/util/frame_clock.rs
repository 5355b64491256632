use web_time::{Duration, Instant};

use crate::options::TimingOptions;

/// Frame pacing: a fixed integration tick plus an optional frame limiter.
///
/// Camera and scene motion advance by [`tick_ms`](Self::tick_ms) once per
/// rendered frame, never by measured wall-clock time. The limiter keeps the
/// frame rate near `target_fps` so the fixed tick maps to a stable speed.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Milliseconds each frame advances the simulation by.
    tick_ms: u32,
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    frames: u64,
}

impl FrameClock {
    /// Create a clock with the given tick and FPS target (0 = unlimited).
    #[must_use]
    pub fn new(tick_ms: u32, target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            tick_ms,
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Clock configured from the `[timing]` options.
    #[must_use]
    pub fn from_options(timing: &TimingOptions) -> Self {
        Self::new(timing.tick_ms, timing.target_fps)
    }

    /// Fixed simulation step per frame, in milliseconds.
    #[must_use]
    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Whether enough time has passed since the last frame to render.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Call after rendering to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frames += 1;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames completed since construction.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_clock_always_renders() {
        let clock = FrameClock::new(16, 0);
        assert!(clock.should_render());
        assert_eq!(clock.tick_ms(), 16);
    }

    #[test]
    fn limiter_blocks_immediately_after_a_frame() {
        let mut clock = FrameClock::new(16, 1);
        clock.end_frame();
        assert!(!clock.should_render());
        assert_eq!(clock.frames(), 1);
    }

    #[test]
    fn options_feed_the_clock() {
        let timing = TimingOptions {
            tick_ms: 10,
            target_fps: 0,
        };
        let clock = FrameClock::from_options(&timing);
        assert_eq!(clock.tick_ms(), 10);
        assert!(clock.should_render());
        assert!(clock.fps() > 0.0);
    }
}
