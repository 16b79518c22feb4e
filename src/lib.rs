//! # driftflake
//!
//! A Snowflake-style 64-bit id generator for a single worker node.
//!
//! Ids are laid out as `tick | worker id | sequence` and are:
//! - 📈 Time-ordered while the clock moves forward
//! - 🚀 Never rejected under bursts: a full millisecond borrows the next one
//! - ⏪ Unique across backward clock jumps
//! - 🔒 Shareable across threads through [`SharedIdGenerator`]

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;

#[cfg(test)]
pub mod tests;

pub use config::{IdGeneratorOptions, IdGeneratorOptionsBuilder, Method};
pub use error::ConfigError;
pub use extractor::IdExtractor;
pub use generator::{
    confirmed_id, is_temp_id, Clock, IdGenerator, Mode, SharedIdGenerator, SystemClock,
};
