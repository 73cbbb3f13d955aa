use web_time::Duration;

/// Solve timer, advanced by the same clock that drives animations.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SolveTimer {
    elapsed: Duration,
    running: bool,
}
impl SolveTimer {
    /// Stops the timer and sets it back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
    /// Starts the timer if it is not already running.
    pub fn start(&mut self) {
        self.running = true;
    }
    /// Stops the timer, keeping its value.
    pub fn stop(&mut self) {
        self.running = false;
    }
    /// Adds `delta` if the timer is running.
    pub fn advance(&mut self, delta: Duration) {
        if self.running {
            self.elapsed += delta;
        }
    }

    /// Returns whether the timer is counting.
    pub fn is_running(&self) -> bool {
        self.running
    }
    /// Returns the exact elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
    /// Returns whole elapsed seconds.
    pub fn seconds(&self) -> u64 {
        self.elapsed.as_secs()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_timer() {
        let mut timer = SolveTimer::default();
        timer.advance(Duration::from_secs(5));
        assert_eq!(timer.seconds(), 0);

        timer.start();
        timer.advance(Duration::from_millis(1999));
        assert_eq!(timer.seconds(), 1);
        timer.stop();
        timer.advance(Duration::from_secs(5));
        assert_eq!(timer.elapsed(), Duration::from_millis(1999));

        timer.start();
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.seconds(), 0);
    }
}
