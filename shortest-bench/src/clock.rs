use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{Duration, Instant},
};

/// A monotonic time source. Readings are offsets from an arbitrary fixed origin.
pub trait Clock: Sync {
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> SystemClock {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock that advances by `tick` every time it is read.
///
/// Timing a single operation reads it twice, so every measurement comes out as exactly one tick.
/// Ticks and readings saturate at `u64::MAX` nanoseconds.
#[derive(Debug)]
pub struct StepClock {
    tick_nanos: u64,
    reads: AtomicU64,
}

impl StepClock {
    pub fn new(tick: Duration) -> StepClock {
        StepClock {
            tick_nanos: u64::try_from(tick.as_nanos()).unwrap_or(u64::MAX),
            reads: AtomicU64::new(0),
        }
    }
}

impl Clock for StepClock {
    fn now(&self) -> Duration {
        let n = self.reads.fetch_add(1, Ordering::Relaxed);
        Duration::from_nanos(n.saturating_mul(self.tick_nanos))
    }
}

/// Runs `op` once and returns how long it took on `clock` along with its output.
pub fn time<C: Clock + ?Sized, R>(clock: &C, op: impl FnOnce() -> R) -> (Duration, R) {
    let start = clock.now();
    let out = op();
    let end = clock.now();
    (end.saturating_sub(start), out)
}
