//! Provisional ids for entities that are not yet confirmed
//!
//! A temp id is the negation of a regular id, so the two spaces never overlap

use super::time::Clock;
use super::IdGenerator;

impl<C: Clock> IdGenerator<C> {
    /// Generate a new provisional (negative) id
    #[inline]
    pub fn next_temp_id(&mut self) -> i64 {
        -self.next_id()
    }
}

/// Whether `id` belongs to the provisional id space
#[inline(always)]
pub const fn is_temp_id(id: i64) -> bool {
    id < 0
}

/// The confirmed (positive) form of an id
#[inline(always)]
pub const fn confirmed_id(id: i64) -> i64 {
    id.wrapping_abs()
}
