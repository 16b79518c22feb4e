//! Clock abstraction for id generation
//!
//! Ticks are derived from Unix milliseconds minus the configured base time

use chrono::Utc;

/// A source of wall-clock time in Unix milliseconds.
///
/// The generator reads the clock on every call, so tests can drive
/// rollback and frozen-clock scenarios by plugging in their own source.
pub trait Clock {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> i64;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn current_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline(always)]
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}

/// Ticks elapsed between `base_time` and the clock's current reading
#[inline(always)]
pub fn time_since_base<C: Clock>(clock: &C, base_time: i64) -> i64 {
    clock.current_millis() - base_time
}
