//! Clock Module
//!
//! Time sources for entry expiry. The store never reads the system time
//! directly; it asks an injected [`Clock`] for "now" in Unix milliseconds.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;

use crate::error::{CacheError, Result};

// == Clock Trait ==
/// Millisecond-resolution time source.
pub trait Clock: Send + Sync + Debug {
    /// Returns the current time as Unix milliseconds.
    fn now_ms(&self) -> u64;
}

// == System Clock ==
/// Wall-clock anchored at construction, then advanced monotonically.
///
/// The wall-clock reading happens once in [`SystemClock::new`]; afterwards
/// time is derived from an [`Instant`], so later system clock adjustments
/// cannot move expiry backwards.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin_ms: u64,
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock anchored at the current wall-clock time.
    ///
    /// # Errors
    /// Returns `CacheError::ClockUnavailable` when the system time is before
    /// the Unix epoch. This is fatal at startup.
    pub fn new() -> Result<Self> {
        let millis = Utc::now().timestamp_millis();
        let origin_ms = u64::try_from(millis).map_err(|_| {
            CacheError::ClockUnavailable(format!(
                "system time {}ms is before the Unix epoch",
                millis
            ))
        })?;

        Ok(Self {
            origin_ms,
            origin: Instant::now(),
        })
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        let elapsed = u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.origin_ms.saturating_add(elapsed)
    }
}

// == Manual Clock ==
/// Clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can keep one handle and
/// give another to the store.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock reading `start_ms`.
    pub fn new(start_ms: u64) -> Self {
        Self {
            now_ms: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        let by_ms = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.now_ms.fetch_add(by_ms, Ordering::SeqCst);
    }

    /// Sets the clock to an absolute Unix millisecond value.
    pub fn set_ms(&self, now_ms: u64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_system_clock_tracks_wall_time() {
        let clock = SystemClock::new().unwrap();
        let wall = Utc::now().timestamp_millis() as u64;

        let now = clock.now_ms();
        assert!(now.abs_diff(wall) < 1_000);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new().unwrap();
        let first = clock.now_ms();
        sleep(Duration::from_millis(20));
        let second = clock.now_ms();

        assert!(second >= first + 20);
    }

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new(1_000);
        clock.advance(Duration::from_secs(2));
        assert_eq!(clock.now_ms(), 3_000);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new(0);
        let handle = clock.clone();

        handle.set_ms(42);
        assert_eq!(clock.now_ms(), 42);
    }
}
