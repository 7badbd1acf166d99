//! Scan sweep progress for the targeted body.

/// Repeating sweep value fed to the scan material.
///
/// While scanning, progress grows by `delta * rate` and wraps at `wrap`. It
/// drops to zero as soon as scanning stops or another body becomes the target.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSweep {
    rate: f32,
    wrap: f32,
    progress: f32,
    body: Option<usize>,
}

impl Default for ScanSweep {
    fn default() -> Self {
        Self::new(0.1, 2.0)
    }
}

impl ScanSweep {
    pub fn new(rate: f32, wrap: f32) -> Self {
        Self {
            rate,
            wrap,
            progress: 0.0,
            body: None,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Body the current progress belongs to, if a sweep is running.
    pub fn body(&self) -> Option<usize> {
        self.body
    }

    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.body = None;
    }

    pub fn tick(&mut self, scanning: bool, target: usize, delta_seconds: f32) {
        if !scanning {
            self.reset();
            return;
        }
        if self.body != Some(target) {
            self.progress = 0.0;
            self.body = Some(target);
        }
        self.progress = (self.progress + delta_seconds.max(0.0) * self.rate) % self.wrap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_ticks_accumulate() {
        let mut sweep = ScanSweep::default();
        for _ in 0..10 {
            sweep.tick(true, 0, 0.1);
        }
        assert!((sweep.progress() - 0.1).abs() < 1e-6);
        sweep.tick(false, 0, 0.1);
        assert_eq!(sweep.progress(), 0.0);
        assert_eq!(sweep.body(), None);
    }

    #[test]
    fn progress_wraps() {
        let mut sweep = ScanSweep::default();
        // 25 s at rate 0.1 is 2.5, wrapped at 2.0.
        for _ in 0..250 {
            sweep.tick(true, 2, 0.1);
        }
        assert!((sweep.progress() - 0.5).abs() < 1e-3);
        assert!(sweep.progress() < 2.0);
    }

    #[test]
    fn retarget_restarts_the_sweep() {
        let mut sweep = ScanSweep::default();
        for _ in 0..20 {
            sweep.tick(true, 0, 0.1);
        }
        sweep.tick(true, 1, 0.1);
        assert_eq!(sweep.body(), Some(1));
        assert!((sweep.progress() - 0.01).abs() < 1e-6);
    }
}
