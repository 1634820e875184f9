//! Frame clocks
//!
//! The simulation never reads the elapsed time; clocks only pace the loop.

use std::time::Duration;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

use super::FrameClock;

/// Sleeps so that ticks happen at most `target_fps` times per second
#[cfg(not(target_arch = "wasm32"))]
pub struct SleepClock {
    last: Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for SleepClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SleepClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl FrameClock for SleepClock {
    fn tick(&mut self, target_fps: u32) -> Duration {
        let budget = frame_budget(target_fps);
        let spent = self.last.elapsed();
        if spent < budget {
            std::thread::sleep(budget - spent);
        }
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        elapsed
    }
}

/// Unpaced clock: returns the nominal frame length without waiting
#[derive(Debug, Default)]
pub struct ManualClock {
    pub ticks: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for ManualClock {
    fn tick(&mut self, target_fps: u32) -> Duration {
        self.ticks += 1;
        frame_budget(target_fps)
    }
}

/// Length of one frame at `fps` (zero means unpaced)
pub fn frame_budget(fps: u32) -> Duration {
    if fps == 0 {
        return Duration::ZERO;
    }
    Duration::from_secs(1) / fps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget() {
        assert_eq!(frame_budget(0), Duration::ZERO);
        assert_eq!(frame_budget(50), Duration::from_millis(20));
        let at_60 = frame_budget(60);
        assert!(at_60 > Duration::from_millis(16) && at_60 < Duration::from_millis(17));
    }

    #[test]
    fn test_manual_clock_counts_without_waiting() {
        let mut clock = ManualClock::new();
        assert_eq!(clock.tick(50), Duration::from_millis(20));
        clock.tick(50);
        assert_eq!(clock.ticks, 2);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_sleep_clock_paces() {
        let mut clock = SleepClock::new();
        clock.tick(100);
        let elapsed = clock.tick(100);
        assert!(elapsed >= Duration::from_millis(10));
    }
}
