use thiserror::Error;

/// Errors raised while validating generator configuration.
///
/// Generation itself never fails; every variant here is reported at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The worker id was never set on the builder
    #[error("Worker ID is required")]
    MissingWorkerId,
    /// Worker id does not fit in the configured bit length
    #[error("Worker ID {worker_id} is invalid. Maximum allowed value is {max}")]
    InvalidWorkerId { worker_id: u16, max: u16 },
    #[error("Worker ID bit length {bits} must be between 1 and 15")]
    InvalidWorkerIdBitLength { bits: u8 },
    #[error("Sequence bit length {bits} must be between 3 and 21")]
    InvalidSeqBitLength { bits: u8 },
    /// Worker and sequence bits together leave too few bits for the tick
    #[error("Worker ID bits ({worker_bits}) plus sequence bits ({seq_bits}) must not exceed 22")]
    BitLengthOverflow { worker_bits: u8, seq_bits: u8 },
    #[error("Max sequence number {value} is invalid. Maximum allowed value is {max}")]
    InvalidMaxSeqNumber { value: u32, max: u32 },
    /// Values below 5 are reserved for the turn-back index
    #[error("Min sequence number {value} must be between 5 and {max}")]
    InvalidMinSeqNumber { value: u32, max: u32 },
    #[error("Top over-cost count {value} must not exceed 10000")]
    InvalidTopOverCostCount { value: u32 },
    #[error("Generation method {method} is not supported")]
    UnsupportedMethod { method: u8 },
    #[error("Base time {base_time} must not be negative")]
    InvalidBaseTime { base_time: i64 },
    /// Base time lies ahead of the generator's clock
    #[error("Base time {base_time} is later than the current time {now}")]
    BaseTimeInFuture { base_time: i64, now: i64 },
}
