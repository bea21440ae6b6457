//! Time-boxed in-memory cache
//!
//! Holds a single value with an expiry instant. The time source is injected
//! through the [`Clock`] trait so expiry can be driven deterministically in
//! tests, and every cache is an explicitly constructed value: two clients
//! never share cached state.

use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: std::sync::Arc<std::sync::Mutex<Instant>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: std::sync::Arc::new(std::sync::Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

#[derive(Debug)]
struct Entry<V> {
    value: V,
    /// `None` when `now + ttl` is past what `Instant` can represent.
    expires_at: Option<Instant>,
}

/// Single-slot cache whose value expires `ttl` after it was stored.
///
/// A zero `ttl` disables the cache: `put` is a no-op and `get` always misses.
#[derive(Debug)]
pub struct TtlCache<V, C: Clock = SystemClock> {
    ttl: Duration,
    clock: C,
    entry: Option<Entry<V>>,
}

impl<V, C: Clock> TtlCache<V, C> {
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            ttl,
            clock,
            entry: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The cached value, if one is stored and has not yet expired.
    pub fn get(&self) -> Option<&V> {
        let entry = self.entry.as_ref()?;
        match entry.expires_at {
            Some(expires_at) if self.clock.now() >= expires_at => None,
            _ => Some(&entry.value),
        }
    }

    /// Store `value` and reset the expiry to `now + ttl`. A ttl too large to
    /// add to the current instant never expires.
    pub fn put(&mut self, value: V) {
        if !self.is_enabled() {
            return;
        }
        self.entry = Some(Entry {
            value,
            expires_at: self.clock.now().checked_add(self.ttl),
        });
    }
}
