use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// In-memory sliding-window rate limiter keyed by caller-supplied strings.
///
/// Each instance owns a ledger of recent attempt timestamps and a fixed
/// admission policy: at most `max_attempts` within the trailing `window`.
/// Keys are arbitrary (a hashed IP, a form id, a session tag). State lives
/// only as long as the process; the booking backend keeps the
/// authoritative limits.
pub struct RateLimiter {
    entries: Mutex<HashMap<String, Vec<Instant>>>,
    max_attempts: usize,
    window: Duration,
}

impl RateLimiter {
    /// Create a limiter admitting at most `max_attempts` per `window`.
    /// Both values must be non-zero.
    pub fn new(max_attempts: usize, window: Duration) -> Self {
        assert!(max_attempts >= 1, "max_attempts must be at least 1");
        assert!(!window.is_zero(), "window must be non-zero");
        RateLimiter {
            entries: Mutex::new(HashMap::new()),
            max_attempts,
            window,
        }
    }

    /// Check whether a new attempt under `key` may proceed right now.
    ///
    /// Prunes the key's expired timestamps as a side effect but records
    /// nothing: callers that proceed must follow up with
    /// [`record_attempt`](Self::record_attempt). Call sites that may run
    /// concurrently should use [`check_and_record`](Self::check_and_record)
    /// instead, which does both steps under one lock.
    pub fn is_allowed(&self, key: &str) -> bool {
        let mut map = self.entries.lock().unwrap();
        let now = Instant::now();

        let attempts = map.entry(key.to_string()).or_default();
        prune(attempts, now, self.window);

        attempts.len() < self.max_attempts
    }

    /// Record an attempt under `key` at the current time. Does not prune
    /// and does not enforce the limit.
    pub fn record_attempt(&self, key: &str) {
        let mut map = self.entries.lock().unwrap();
        map.entry(key.to_string()).or_default().push(Instant::now());
    }

    /// Check and record in one step: prune, compare against the limit, and
    /// append only if admitted. Returns true if the attempt was admitted.
    ///
    /// The whole read-prune-compare-append sequence holds the ledger lock,
    /// so concurrent callers cannot slip past the limit between the check
    /// and the record.
    pub fn check_and_record(&self, key: &str) -> bool {
        let mut map = self.entries.lock().unwrap();
        let now = Instant::now();

        let attempts = map.entry(key.to_string()).or_default();
        prune(attempts, now, self.window);

        if attempts.len() < self.max_attempts {
            attempts.push(now);
            true
        } else {
            false
        }
    }

    /// Remaining attempts for `key` in the current window, without
    /// recording a new one.
    pub fn remaining(&self, key: &str) -> usize {
        let mut map = self.entries.lock().unwrap();
        let now = Instant::now();

        let attempts = map.entry(key.to_string()).or_default();
        prune(attempts, now, self.window);

        // record_attempt does not enforce the limit, so len can exceed max
        self.max_attempts.saturating_sub(attempts.len())
    }

    /// Time until the oldest recorded attempt for `key` ages out of the
    /// window, i.e. when the next ledger slot frees up. Zero for unknown
    /// or fully-expired keys.
    ///
    /// This is when capacity next *changes*, not necessarily when a new
    /// attempt will be admitted; good enough for a retry-after message.
    pub fn time_until_reset(&self, key: &str) -> Duration {
        let map = self.entries.lock().unwrap();
        let now = Instant::now();

        match map.get(key).and_then(|attempts| attempts.iter().min()) {
            Some(&oldest) => self.window.saturating_sub(now.duration_since(oldest)),
            None => Duration::ZERO,
        }
    }

    /// Drop expired timestamps for every key and evict keys with none
    /// left. Returns the number of evicted keys. Idempotent; admission
    /// decisions for keys with live attempts are unaffected.
    pub fn cleanup(&self) -> usize {
        let mut map = self.entries.lock().unwrap();
        let now = Instant::now();

        let before = map.len();
        map.retain(|_, attempts| {
            prune(attempts, now, self.window);
            !attempts.is_empty()
        });
        before - map.len()
    }

    /// Number of keys currently held in the ledger.
    pub fn tracked_keys(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

/// Keep only attempts younger than the window. An attempt exactly one
/// window old is expired.
fn prune(attempts: &mut Vec<Instant>, now: Instant, window: Duration) {
    attempts.retain(|&t| now.duration_since(t) < window);
}
