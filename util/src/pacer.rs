//! Cycle pacing utilities
//!
//! The exec runs a fixed-period cycle loop. `Pacer` owns that period and
//! sleeps out the remainder of each cycle through an injected [`Clock`], so
//! loop timing can be exercised in tests (and by the replay binary) without
//! real-time delay.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// Source of elapsed time and sleeping for a cycle loop.
pub trait Clock {
    /// Time elapsed since the clock was created.
    fn elapsed(&self) -> Duration;

    /// Suspend for the given duration.
    fn sleep(&mut self, dur: Duration);
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Clock backed by the operating system.
pub struct WallClock {
    epoch: Instant,
}

/// Simulated clock which only advances when slept or stepped.
pub struct SimClock {
    now: Duration,
}

/// Fixed-period cycle pacer.
pub struct Pacer<C> {
    period: Duration,
    cycle_start: Duration,
    clock: C,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Outcome of one cycle's pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleResult {
    /// The cycle finished within the period and the remainder was slept.
    Nominal(Duration),
    /// The cycle exceeded the period by the given amount, no sleep was
    /// performed.
    Overrun(Duration),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl WallClock {
    pub fn new() -> Self {
        WallClock {
            epoch: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn elapsed(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn sleep(&mut self, dur: Duration) {
        std::thread::sleep(dur)
    }
}

impl SimClock {
    pub fn new() -> Self {
        SimClock {
            now: Duration::from_secs(0),
        }
    }

    /// Advance the clock without sleeping, simulating work taking `dur`.
    pub fn step(&mut self, dur: Duration) {
        self.now += dur;
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SimClock {
    fn elapsed(&self) -> Duration {
        self.now
    }

    fn sleep(&mut self, dur: Duration) {
        self.now += dur;
    }
}

impl<C: Clock> Pacer<C> {
    /// Create a new pacer with the given cycle period.
    pub fn new(period: Duration, clock: C) -> Self {
        let cycle_start = clock.elapsed();

        Pacer {
            period,
            cycle_start,
            clock,
        }
    }

    /// Mark the start of a cycle.
    pub fn start_cycle(&mut self) {
        self.cycle_start = self.clock.elapsed();
    }

    /// Sleep out the remainder of the cycle.
    ///
    /// If the cycle has already exceeded the period no sleep is performed
    /// and the overrun is reported instead.
    pub fn end_cycle(&mut self) -> CycleResult {
        let cycle_dur = self.clock.elapsed() - self.cycle_start;

        match self.period.checked_sub(cycle_dur) {
            Some(d) => {
                self.clock.sleep(d);
                CycleResult::Nominal(d)
            }
            None => CycleResult::Overrun(cycle_dur - self.period),
        }
    }

    /// Seconds elapsed on the underlying clock.
    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.elapsed().as_secs_f64()
    }

    /// Access the underlying clock.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    /// The loop never ends on its own accord: pace out 1000 cycles and
    /// check every one of them consumed exactly one period.
    #[test]
    fn test_nominal_cycles() {
        let period = Duration::from_millis(20);
        let work = Duration::from_millis(5);

        let mut pacer = Pacer::new(period, SimClock::new());

        for _ in 0..1000 {
            pacer.start_cycle();
            pacer.clock_mut().step(work);

            assert_eq!(
                pacer.end_cycle(),
                CycleResult::Nominal(Duration::from_millis(15))
            );
        }

        assert_eq!(pacer.elapsed_seconds(), 20.0);
    }

    #[test]
    fn test_overrun_skips_sleep() {
        let period = Duration::from_millis(20);

        let mut pacer = Pacer::new(period, SimClock::new());

        pacer.start_cycle();
        pacer.clock_mut().step(Duration::from_millis(25));

        assert_eq!(
            pacer.end_cycle(),
            CycleResult::Overrun(Duration::from_millis(5))
        );

        // No sleep happened, the clock shows only the work time
        assert_eq!(pacer.elapsed_seconds(), 0.025);
    }

    #[test]
    fn test_idle_cycle_sleeps_full_period() {
        let period = Duration::from_millis(20);

        let mut pacer = Pacer::new(period, SimClock::new());

        pacer.start_cycle();

        assert_eq!(pacer.end_cycle(), CycleResult::Nominal(period));
    }
}
