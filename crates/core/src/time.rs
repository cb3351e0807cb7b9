//! Millisecond clock capability and a wraparound-safe elapsed timer.

/// A free-running monotonic millisecond counter.
///
/// The counter is allowed to wrap; all arithmetic on its values has to go
/// through unsigned difference (see [`ElapsedTimer`]) to stay correct
/// across the wraparound.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        T::now_ms(self)
    }
}

/// Measures time elapsed since a recorded timestamp.
#[derive(Debug, Clone, Copy)]
pub struct ElapsedTimer {
    started: u32,
}

impl ElapsedTimer {
    pub fn new(now_ms: u32) -> Self {
        Self { started: now_ms }
    }

    /// Restarts measuring from the given timestamp.
    pub fn restart(&mut self, now_ms: u32) {
        self.started = now_ms;
    }

    /// Returns the milliseconds elapsed since the timer was (re)started.
    ///
    /// Wrapping subtraction keeps the result correct when the counter has
    /// wrapped between the two timestamps.
    pub fn elapsed(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.started)
    }
}

#[cfg(test)]
mod tests {
    use super::ElapsedTimer;

    #[test]
    fn elapsed_simple() {
        let timer = ElapsedTimer::new(1_000);
        assert_eq!(timer.elapsed(1_000), 0);
        assert_eq!(timer.elapsed(1_499), 499);
    }

    #[test]
    fn elapsed_across_wraparound() {
        let timer = ElapsedTimer::new(u32::MAX - 100);
        assert_eq!(timer.elapsed(100), 201);
    }

    #[test]
    fn restart_resets_origin() {
        let mut timer = ElapsedTimer::new(0);
        timer.restart(5_000);
        assert_eq!(timer.elapsed(5_250), 250);
    }
}
