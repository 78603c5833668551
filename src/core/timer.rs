//! Resettable stopwatch driven by host frame deltas.
//!
//! The core never reads a wall clock; the host measures each frame's delta and
//! feeds it in through `advance`. Gated actions compare `elapsed_ms` against a
//! threshold and call `reset` when they fire.

/// Accumulating millisecond timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timer {
    elapsed_ms: u64,
}

impl Timer {
    pub fn new() -> Self {
        Self { elapsed_ms: 0 }
    }

    /// Milliseconds accumulated since creation or the last `reset`.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Accumulate one frame's delta.
    pub fn advance(&mut self, dt_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms as u64);
    }

    /// Zero the reference point.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }

    /// True when at least `threshold_ms` has accumulated.
    pub fn expired(&self, threshold_ms: u32) -> bool {
        self.elapsed_ms >= threshold_ms as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_starts_at_zero() {
        let timer = Timer::new();
        assert_eq!(timer.elapsed_ms(), 0);
        assert!(timer.expired(0));
        assert!(!timer.expired(1));
    }

    #[test]
    fn test_timer_accumulates_and_resets() {
        let mut timer = Timer::new();
        timer.advance(16);
        timer.advance(16);
        assert_eq!(timer.elapsed_ms(), 32);
        assert!(timer.expired(32));

        timer.reset();
        assert_eq!(timer.elapsed_ms(), 0);
    }

    #[test]
    fn test_timer_never_wraps() {
        let mut timer = Timer::new();
        timer.elapsed_ms = u64::MAX - 1;
        timer.advance(1000);
        assert_eq!(timer.elapsed_ms(), u64::MAX);
    }
}
