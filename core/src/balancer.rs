//! # Round-Robin Balancer
//!
//! The consumption discipline for a backend pool: hand out targets in
//! generation order, wrapping around forever. This is the selection step
//! a relay performs per proxied request, kept free of any networking so
//! it can be exercised as plain arithmetic.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::pool::BackendPool;

/// Cycles through a fixed target list.
///
/// Selection goes through `&self`, so one balancer can be shared across
/// threads: the only mutable state is an atomic cursor, and every
/// successful draw consumes exactly one cursor value.
#[derive(Debug)]
pub struct RoundRobinBalancer {
    counter: AtomicU64,
    targets: Vec<String>,
}

impl RoundRobinBalancer {
    /// Builds a balancer over `targets`, which may be empty.
    pub fn new(targets: Vec<String>) -> Self {
        Self {
            counter: AtomicU64::new(0),
            targets,
        }
    }

    /// Hands out the next target in cycle order.
    ///
    /// Returns `None` when the target list is empty, on this call and on
    /// every later one.
    pub fn next(&self) -> Option<&str> {
        if self.targets.is_empty() {
            return None;
        }

        loop {
            let current = self.counter.load(Ordering::Relaxed);
            let mut next = current.wrapping_add(1);
            if next == u64::MAX {
                // The cursor never holds the all-ones value.
                next = 0;
            }
            if self
                .counter
                .compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed)
                .is_ok()
            {
                let idx = (current % self.targets.len() as u64) as usize;
                return Some(&self.targets[idx]);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl From<BackendPool> for RoundRobinBalancer {
    fn from(pool: BackendPool) -> Self {
        Self::new(pool.into_urls())
    }
}
