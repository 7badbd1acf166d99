//! Frame clock for the tick loop.

use std::time::{Duration, Instant};

/// Tracks elapsed and per-frame time for the simulation tick.
///
/// Two driving modes share the same state: `update` samples the wall clock
/// (interactive hosts), `advance` steps by an explicit duration (headless
/// runs and tests). Both keep `elapsed` monotonic.
#[derive(Debug)]
pub struct Time {
    /// Wall-clock instant of the last `update`.
    last_frame: Instant,
    /// Duration of the last frame.
    delta: Duration,
    /// Total elapsed time since start.
    elapsed: Duration,
    /// Frame count since start.
    frame_count: u64,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// Create a new clock at zero elapsed time.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Update timing at the start of a new frame from the wall clock.
    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.step(delta);
    }

    /// Advance by a fixed amount instead of sampling the wall clock.
    pub fn advance(&mut self, delta: Duration) {
        self.last_frame = Instant::now();
        self.step(delta);
    }

    /// Advance by one frame of a fixed rate in Hz. Non-positive rates are ignored.
    pub fn advance_fixed(&mut self, hz: f64) {
        if hz > 0.0 {
            self.advance(Duration::from_secs_f64(1.0 / hz));
        }
    }

    fn step(&mut self, delta: Duration) {
        self.delta = delta;
        self.elapsed += delta;
        self.frame_count += 1;
    }

    /// Get the delta time in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get the delta time as a Duration.
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Get total elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Get total elapsed time as Duration.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the current FPS (averaged over last frame).
    pub fn fps(&self) -> f32 {
        if self.delta.as_secs_f32() > 0.0 {
            1.0 / self.delta.as_secs_f32()
        } else {
            0.0
        }
    }
}
