use chrono::{DateTime, Utc};

use crate::config::IdGeneratorOptions;

/// Id component extractor.
///
/// Decodes by magnitude, so a temporary (negated) id yields the same parts
/// as the id it was derived from. For ids issued during a clock rollback the
/// sequence field holds the turn-back index.
#[derive(Debug, Copy, Clone)]
pub struct IdExtractor {
    options: IdGeneratorOptions,
}

impl IdExtractor {
    pub(crate) fn new(options: IdGeneratorOptions) -> Self {
        Self { options }
    }

    /// Extract the tick (milliseconds since base time)
    #[inline(always)]
    pub fn tick(&self, id: i64) -> i64 {
        (id.unsigned_abs() >> self.options.timestamp_shift()) as i64
    }

    /// Extract the worker id
    #[inline(always)]
    pub fn worker_id(&self, id: i64) -> u16 {
        ((id.unsigned_abs() >> self.options.worker_shift()) & self.options.worker_mask() as u64)
            as u16
    }

    /// Extract the sequence number (or turn-back index)
    #[inline(always)]
    pub fn sequence(&self, id: i64) -> u32 {
        (id.unsigned_abs() & self.options.sequence_mask() as u64) as u32
    }

    /// Decompose an id into its components: tick, worker id, and sequence
    #[inline]
    pub fn decompose(&self, id: i64) -> (i64, u16, u32) {
        (self.tick(id), self.worker_id(id), self.sequence(id))
    }

    /// Unix milliseconds the id's tick corresponds to
    #[inline]
    pub fn unix_millis(&self, id: i64) -> i64 {
        self.tick(id) + self.options.base_time()
    }

    /// Wall-clock time the id's tick corresponds to
    pub fn datetime(&self, id: i64) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.unix_millis(id))
    }
}
