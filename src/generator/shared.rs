//! Thread-safe handle around a single generator
//!
//! Every call takes the lock, so state updates are serialized

use std::sync::Arc;

use parking_lot::Mutex;

use super::time::{Clock, SystemClock};
use super::IdGenerator;
use crate::config::IdGeneratorOptions;
use crate::extractor::IdExtractor;

/// A cloneable, lock-based wrapper that lets many threads draw ids from one
/// [`IdGenerator`].
///
/// A caller blocked on an exhausted drift budget holds the lock, which
/// throttles every other caller until the clock catches up.
#[derive(Debug)]
pub struct SharedIdGenerator<C: Clock = SystemClock> {
    inner: Arc<Mutex<IdGenerator<C>>>,
}

impl<C: Clock> SharedIdGenerator<C> {
    pub fn new(generator: IdGenerator<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }

    #[inline]
    pub fn next_id(&self) -> i64 {
        self.inner.lock().next_id()
    }

    #[inline]
    pub fn next_temp_id(&self) -> i64 {
        self.inner.lock().next_temp_id()
    }

    pub fn options(&self) -> IdGeneratorOptions {
        *self.inner.lock().options()
    }

    pub fn extractor(&self) -> IdExtractor {
        self.inner.lock().extract
    }
}

impl<C: Clock> Clone for SharedIdGenerator<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> From<IdGenerator<C>> for SharedIdGenerator<C> {
    fn from(generator: IdGenerator<C>) -> Self {
        Self::new(generator)
    }
}
