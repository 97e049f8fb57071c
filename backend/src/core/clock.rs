//! Time sources for admission timestamps
//!
//! The dispatcher never reads the wall clock directly. It asks a [`Clock`],
//! which lets tests and demos pin admission times.
//!
//! Timestamps are display data only. Arrival order is carried by the
//! dispatcher's own sequence counter, so two admissions in the same instant
//! are still totally ordered.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Mutex;

/// Source of "now" for admission timestamps
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock
///
/// # Example
/// ```
/// use clinic_queue_core::core::clock::{Clock, ManualClock};
///
/// let clock = ManualClock::at_hm(9, 0);
/// let start = clock.now();
///
/// clock.advance_minutes(15);
/// assert_eq!((clock.now() - start).num_minutes(), 15);
/// ```
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Create a clock frozen at `hour:minute` on 2024-01-01 UTC
    ///
    /// # Panics
    /// Panics if `hour` or `minute` is out of range.
    pub fn at_hm(hour: u32, minute: u32) -> Self {
        let start = Utc
            .with_ymd_and_hms(2024, 1, 1, hour, minute, 0)
            .single()
            .expect("hour and minute must be a valid time of day");
        Self::new(start)
    }

    /// Move the clock forward
    pub fn advance_minutes(&self, minutes: i64) {
        let mut current = self.lock();
        *current += Duration::minutes(minutes);
    }

    /// Pin the clock to a specific instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.lock() = instant;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        // A DateTime is always valid, so a poisoned guard is still usable
        self.current
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.lock()
    }
}
