//! Core id generator implementation
//!
//! Split into modules for testability:
//! - `state` - Mutable generation state and mode
//! - `time` - Clock abstraction
//! - `wait` - Spin and backoff while the drift budget is exhausted
//! - `generate` - Normal, over-cost and turn-back paths
//! - `temp` - Provisional (negated) ids
//! - `shared` - Mutex-guarded handle for multi-threaded callers

mod generate;
mod shared;
mod state;
mod temp;
mod time;
mod wait;

use tracing::debug;

use crate::config::IdGeneratorOptions;
use crate::error::ConfigError;
use crate::extractor::IdExtractor;

pub use shared::SharedIdGenerator;
pub use state::Mode;
pub use temp::{confirmed_id, is_temp_id};
pub use time::{Clock, SystemClock};

use state::State;
use time::time_since_base;
use wait::{sleep_until_next_tick, spin_wait};

/// Snowflake-style id generator for a single worker.
///
/// Not internally synchronized: `next_id` takes `&mut self`. Share one
/// instance across threads through [`SharedIdGenerator`].
#[derive(Debug)]
pub struct IdGenerator<C: Clock = SystemClock> {
    state: State,
    worker_prefix: i64,
    clock: C,

    options: IdGeneratorOptions,
    pub extract: IdExtractor,
}

impl IdGenerator<SystemClock> {
    /// Create with default configuration
    pub fn new(worker_id: u16) -> Result<Self, ConfigError> {
        let options = IdGeneratorOptions::builder().worker_id(worker_id).build()?;
        Self::with_options(options)
    }

    /// Create with custom configuration, reading the system clock
    pub fn with_options(options: IdGeneratorOptions) -> Result<Self, ConfigError> {
        Self::with_clock(options, SystemClock)
    }
}

impl<C: Clock> IdGenerator<C> {
    /// Create with custom configuration and clock.
    ///
    /// Fails if the base time lies ahead of the clock's current reading.
    pub fn with_clock(options: IdGeneratorOptions, clock: C) -> Result<Self, ConfigError> {
        let now = clock.current_millis();
        if options.base_time() > now {
            return Err(ConfigError::BaseTimeInFuture {
                base_time: options.base_time(),
                now,
            });
        }

        debug!(
            worker_id = options.worker_id(),
            method = %options.method(),
            worker_id_bit_length = options.worker_id_bit_length(),
            seq_bit_length = options.seq_bit_length(),
            "id generator ready"
        );

        Ok(Self {
            state: State::new(options.min_seq_number()),
            worker_prefix: (options.worker_id() as i64) << options.worker_shift(),
            clock,
            options,
            extract: IdExtractor::new(options),
        })
    }

    #[inline(always)]
    pub fn options(&self) -> &IdGeneratorOptions {
        &self.options
    }

    /// Branch the next call will take
    #[inline]
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Most recent tick ids were issued against, real or borrowed
    #[inline]
    pub fn last_time_tick(&self) -> i64 {
        self.state.last_time_tick
    }

    #[inline(always)]
    pub(crate) fn now_tick(&self) -> i64 {
        time_since_base(&self.clock, self.options.base_time())
    }

    /// Block until the clock's tick is strictly greater than `from_tick`
    pub(crate) fn wait_next_tick(&self, from_tick: i64) -> i64 {
        let get_tick = || self.now_tick();
        if let Some(tick) = spin_wait(from_tick, &self.options, get_tick) {
            return tick;
        }
        sleep_until_next_tick(from_tick, 1, get_tick)
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, tick: i64, sequence: u32) -> i64 {
        (tick << self.options.timestamp_shift()) | self.worker_prefix | sequence as i64
    }
}
