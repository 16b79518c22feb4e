//! Waiting for real time to pass a borrowed tick
//!
//! A short spin with periodic yields, then sleeps with exponential backoff

use std::thread;
use std::time::Duration;

use crate::config::IdGeneratorOptions;

/// Maximum backoff duration in milliseconds
pub const MAX_BACKOFF_MS: u64 = 100;

/// Poll the clock in a bounded spin loop.
///
/// Returns Some(new_tick) once the tick passes `from_tick`, None if the spin
/// budget ran out first.
#[inline]
pub fn spin_wait<F>(from_tick: i64, options: &IdGeneratorOptions, get_tick: F) -> Option<i64>
where
    F: Fn() -> i64,
{
    if !options.spin_enabled() || options.spin_loops() == 0 {
        return None;
    }

    let yield_every = options.spin_yield_every();

    for i in 0..options.spin_loops() {
        let tick = get_tick();
        if tick > from_tick {
            return Some(tick);
        }

        std::hint::spin_loop();

        if yield_every != 0 && i % yield_every == yield_every - 1 {
            thread::yield_now();
        }
    }

    None
}

/// Sleep with exponential backoff, returning the new tick once it passes `from_tick`
pub fn sleep_until_next_tick<F>(from_tick: i64, mut backoff_ms: u64, get_tick: F) -> i64
where
    F: Fn() -> i64,
{
    loop {
        thread::sleep(Duration::from_millis(backoff_ms));
        let tick = get_tick();
        if tick > from_tick {
            return tick;
        }
        backoff_ms = next_backoff(backoff_ms);
    }
}

/// Calculate next backoff duration with exponential growth capped at MAX_BACKOFF_MS
#[inline(always)]
pub const fn next_backoff(current: u64) -> u64 {
    let next = current.saturating_mul(2);
    if next > MAX_BACKOFF_MS {
        MAX_BACKOFF_MS
    } else {
        next
    }
}
