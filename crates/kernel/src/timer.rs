/// Fixed-step accumulator.
///
/// Frame time is added with [`StepTimer::accumulate`]. Once the total passes
/// the interval, [`StepTimer::consume`] reports one step and resets the total
/// to zero. Surplus time is dropped rather than carried, so a single long
/// frame produces at most one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepTimer {
    interval: f64,
    elapsed: f64,
}

impl StepTimer {
    /// Starts primed at one full interval, so the first frame with any
    /// positive `dt` steps immediately.
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            elapsed: interval,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn accumulate(&mut self, dt: f64) {
        self.elapsed += dt;
    }

    /// Returns `true` and resets when the interval has been exceeded.
    pub fn consume(&mut self) -> bool {
        if self.elapsed > self.interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    /// Overwrite the accumulated time with `factor` intervals.
    pub fn set_intervals(&mut self, factor: f64) {
        self.elapsed = self.interval * factor;
    }
}
