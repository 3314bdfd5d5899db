//! Frame pacing and FPS measurement for the host render loop.

use web_time::{Duration, Instant};

/// Frame pacing for hosts that drive [`frame`](crate::WalkthroughEngine::frame)
/// from a polling loop: optional FPS cap plus a smoothed FPS readout.
pub struct FrameTiming {
    /// Minimum frame duration based on target FPS (zero = unlimited)
    min_frame_duration: Duration,
    /// Start of the last rendered frame
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Weight of the newest sample (0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to render
    /// another one at `now`.
    #[must_use]
    pub fn should_render(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_frame)
            >= self.min_frame_duration
    }

    /// Record a rendered frame at `now`.
    pub fn end_frame(&mut self, now: Instant) {
        let frame_time =
            now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

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
}
