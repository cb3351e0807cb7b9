//! Randomized frame timing.

use wopr_core::{ElapsedTimer, Entropy};

/// Decides when the next animation frame fires.
///
/// The scheduler never sleeps: the host loop polls it with the current
/// timestamp and it answers fire or no-fire. After every fired frame the
/// delay until the next one is redrawn uniformly from the configured
/// closed interval.
pub struct FrameScheduler {
    timer: ElapsedTimer,
    next_interval_ms: u32,
    min_interval_ms: u32,
    max_interval_ms: u32,
}

impl FrameScheduler {
    /// Creates a scheduler with the first interval already drawn.
    ///
    /// # Panics
    ///
    /// If `min_interval_ms > max_interval_ms`.
    pub fn new<R: Entropy>(
        now_ms: u32,
        min_interval_ms: u32,
        max_interval_ms: u32,
        rng: &mut R,
    ) -> Self {
        assert!(min_interval_ms <= max_interval_ms);

        let mut scheduler = Self {
            timer: ElapsedTimer::new(now_ms),
            next_interval_ms: 0,
            min_interval_ms,
            max_interval_ms,
        };
        scheduler.redraw_interval(rng);
        scheduler
    }

    /// Returns true when the next frame is due. Pure decision; repeated
    /// polling never mutates the scheduler.
    pub fn frame_due(&self, now_ms: u32) -> bool {
        self.timer.elapsed(now_ms) >= self.next_interval_ms
    }

    /// Records a fired frame and draws the delay until the next one.
    pub fn frame_fired<R: Entropy>(&mut self, now_ms: u32, rng: &mut R) {
        self.timer.restart(now_ms);
        self.redraw_interval(rng);
    }

    /// The currently scheduled inter-frame delay.
    pub fn next_interval_ms(&self) -> u32 {
        self.next_interval_ms
    }

    fn redraw_interval<R: Entropy>(&mut self, rng: &mut R) {
        let range = self.max_interval_ms - self.min_interval_ms;
        self.next_interval_ms = self.min_interval_ms + rng.next_u32() % (range + 1);
    }
}
