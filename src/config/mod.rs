//! Configuration for the ID generator

mod builder;

use std::fmt;

pub use builder::IdGeneratorOptionsBuilder;
pub(crate) use builder::{MAX_TOTAL_BITS, MIN_SEQ_FLOOR};

use crate::error::ConfigError;

/// Strategy used to resolve sequence exhaustion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Method {
    /// Borrow future ticks when a millisecond runs out of sequence numbers
    #[default]
    Drift = 1,
    /// Reserved. Rejected at build time.
    Traditional = 2,
}

impl TryFrom<u8> for Method {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Method::Drift),
            2 => Ok(Method::Traditional),
            method => Err(ConfigError::UnsupportedMethod { method }),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Drift => f.write_str("drift"),
            Method::Traditional => f.write_str("traditional"),
        }
    }
}

/// Validated, immutable generator configuration.
///
/// Only obtainable through [`IdGeneratorOptions::builder`], so every value
/// held here has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdGeneratorOptions {
    method: Method,
    base_time: i64,
    worker_id: u16,
    worker_id_bit_length: u8,
    seq_bit_length: u8,
    max_seq_number: u32,
    min_seq_number: u32,
    top_over_cost_count: u32,
    timestamp_shift: u8,
    worker_mask: u16,
    sequence_mask: u32,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
}

impl IdGeneratorOptions {
    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> u32 {
        (1u32 << bits) - 1
    }

    pub(crate) fn from_builder(b: IdGeneratorOptionsBuilder) -> Result<Self, ConfigError> {
        let worker_id = b.worker_id.ok_or(ConfigError::MissingWorkerId)?;

        if b.method == Method::Traditional {
            return Err(ConfigError::UnsupportedMethod {
                method: b.method as u8,
            });
        }
        if b.base_time < 0 {
            return Err(ConfigError::InvalidBaseTime {
                base_time: b.base_time,
            });
        }
        if !(1..=15).contains(&b.worker_id_bit_length) {
            return Err(ConfigError::InvalidWorkerIdBitLength {
                bits: b.worker_id_bit_length,
            });
        }
        if !(3..=21).contains(&b.seq_bit_length) {
            return Err(ConfigError::InvalidSeqBitLength {
                bits: b.seq_bit_length,
            });
        }
        if b.worker_id_bit_length + b.seq_bit_length > MAX_TOTAL_BITS {
            return Err(ConfigError::BitLengthOverflow {
                worker_bits: b.worker_id_bit_length,
                seq_bits: b.seq_bit_length,
            });
        }

        let worker_mask = Self::calculate_mask(b.worker_id_bit_length) as u16;
        if worker_id > worker_mask {
            return Err(ConfigError::InvalidWorkerId {
                worker_id,
                max: worker_mask,
            });
        }

        let sequence_mask = Self::calculate_mask(b.seq_bit_length);
        let max_seq_number = match b.max_seq_number {
            None | Some(0) => sequence_mask,
            Some(value) if value > sequence_mask => {
                return Err(ConfigError::InvalidMaxSeqNumber {
                    value,
                    max: sequence_mask,
                });
            }
            Some(value) => value,
        };
        if b.min_seq_number < MIN_SEQ_FLOOR || b.min_seq_number > max_seq_number {
            return Err(ConfigError::InvalidMinSeqNumber {
                value: b.min_seq_number,
                max: max_seq_number,
            });
        }

        if b.top_over_cost_count > 10_000 {
            return Err(ConfigError::InvalidTopOverCostCount {
                value: b.top_over_cost_count,
            });
        }

        Ok(Self {
            method: b.method,
            base_time: b.base_time,
            worker_id,
            worker_id_bit_length: b.worker_id_bit_length,
            seq_bit_length: b.seq_bit_length,
            max_seq_number,
            min_seq_number: b.min_seq_number,
            top_over_cost_count: b.top_over_cost_count,
            timestamp_shift: b.worker_id_bit_length + b.seq_bit_length,
            worker_mask,
            sequence_mask,
            spin_enabled: b.spin_enabled,
            spin_loops: b.spin_loops,
            spin_yield_every: b.spin_yield_every,
        })
    }

    /// Create a new configuration builder
    pub fn builder() -> IdGeneratorOptionsBuilder {
        IdGeneratorOptionsBuilder::new()
    }

    #[inline(always)]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Epoch offset in Unix milliseconds
    #[inline(always)]
    pub const fn base_time(&self) -> i64 {
        self.base_time
    }

    #[inline(always)]
    pub const fn worker_id(&self) -> u16 {
        self.worker_id
    }

    #[inline(always)]
    pub const fn worker_id_bit_length(&self) -> u8 {
        self.worker_id_bit_length
    }

    #[inline(always)]
    pub const fn seq_bit_length(&self) -> u8 {
        self.seq_bit_length
    }

    #[inline(always)]
    pub const fn max_seq_number(&self) -> u32 {
        self.max_seq_number
    }

    #[inline(always)]
    pub const fn min_seq_number(&self) -> u32 {
        self.min_seq_number
    }

    #[inline(always)]
    pub const fn top_over_cost_count(&self) -> u32 {
        self.top_over_cost_count
    }

    #[inline(always)]
    pub const fn max_worker_id(&self) -> u16 {
        self.worker_mask
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub(crate) const fn timestamp_shift(&self) -> u8 {
        self.timestamp_shift
    }

    #[inline(always)]
    pub(crate) const fn worker_shift(&self) -> u8 {
        self.seq_bit_length
    }

    #[inline(always)]
    pub(crate) const fn worker_mask(&self) -> u16 {
        self.worker_mask
    }

    #[inline(always)]
    pub(crate) const fn sequence_mask(&self) -> u32 {
        self.sequence_mask
    }
}
