//! IdGeneratorOptions builder for constructing configuration

use chrono::{DateTime, Utc};

use super::{IdGeneratorOptions, Method};
use crate::error::ConfigError;

/// Default configuration values
pub(super) const DEFAULT_BASE_TIME: i64 = 1577836800000; // January 1, 2020 UTC
pub(super) const DEFAULT_WORKER_ID_BIT_LENGTH: u8 = 6;
pub(super) const DEFAULT_SEQ_BIT_LENGTH: u8 = 6;
pub(super) const DEFAULT_MIN_SEQ_NUMBER: u32 = 5;
pub(super) const DEFAULT_TOP_OVER_COST_COUNT: u32 = 2000;
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Upper bound for worker bits + sequence bits
pub(crate) const MAX_TOTAL_BITS: u8 = 22;
/// Sequence values below this are reserved for turn-back indexes
pub(crate) const MIN_SEQ_FLOOR: u32 = 5;

/// Builder for IdGeneratorOptions
#[derive(Debug, Clone)]
pub struct IdGeneratorOptionsBuilder {
    pub(super) method: Method,
    pub(super) base_time: i64,
    pub(super) worker_id: Option<u16>,
    pub(super) worker_id_bit_length: u8,
    pub(super) seq_bit_length: u8,
    pub(super) max_seq_number: Option<u32>,
    pub(super) min_seq_number: u32,
    pub(super) top_over_cost_count: u32,
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
}

impl IdGeneratorOptionsBuilder {
    /// Create a new builder with default values and no worker id
    pub fn new() -> Self {
        Self {
            method: Method::Drift,
            base_time: DEFAULT_BASE_TIME,
            worker_id: None,
            worker_id_bit_length: DEFAULT_WORKER_ID_BIT_LENGTH,
            seq_bit_length: DEFAULT_SEQ_BIT_LENGTH,
            max_seq_number: None,
            min_seq_number: DEFAULT_MIN_SEQ_NUMBER,
            top_over_cost_count: DEFAULT_TOP_OVER_COST_COUNT,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    pub const fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the epoch offset in Unix milliseconds
    pub const fn base_time(mut self, base_time: i64) -> Self {
        self.base_time = base_time;
        self
    }

    /// Set the epoch offset from a UTC timestamp
    pub fn base_time_datetime(mut self, base_time: DateTime<Utc>) -> Self {
        self.base_time = base_time.timestamp_millis();
        self
    }

    /// Set the node identifier embedded in every id. Required.
    pub const fn worker_id(mut self, worker_id: u16) -> Self {
        self.worker_id = Some(worker_id);
        self
    }

    /// Set the number of bits for the worker id (1-15)
    pub const fn worker_id_bit_length(mut self, bits: u8) -> Self {
        self.worker_id_bit_length = bits;
        self
    }

    /// Set the number of bits for the per-tick sequence (3-21)
    pub const fn seq_bit_length(mut self, bits: u8) -> Self {
        self.seq_bit_length = bits;
        self
    }

    /// Set the inclusive sequence upper bound. 0 means `2^seq_bits - 1`.
    pub const fn max_seq_number(mut self, value: u32) -> Self {
        self.max_seq_number = Some(value);
        self
    }

    /// Set the inclusive sequence lower bound (at least 5)
    pub const fn min_seq_number(mut self, value: u32) -> Self {
        self.min_seq_number = value;
        self
    }

    /// Set how many future ticks may be borrowed before callers block
    pub const fn top_over_cost_count(mut self, value: u32) -> Self {
        self.top_over_cost_count = value;
        self
    }

    /// Enable or disable micro spin before sleeping while waiting on the clock
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Validate and build the final IdGeneratorOptions
    pub fn build(self) -> Result<IdGeneratorOptions, ConfigError> {
        IdGeneratorOptions::from_builder(self)
    }
}

impl Default for IdGeneratorOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
