use std::time::Duration;

use crate::config::ThrottleConfig;
use crate::rate_limit::RateLimiter;

/// The limiter profiles used by the booking funnel, one per action
/// class. Each holds its own ledger; a key throttled in one has no
/// bearing on the same key in the other.
///
/// Construct once at startup and share via `Arc`; tests build their
/// own so runs stay isolated.
pub struct Limiters {
    /// Appointment booking requests: tight, short window.
    pub appointments: RateLimiter,
    /// Generic form submissions (contact, testimonial): looser, longer window.
    pub forms: RateLimiter,
}

impl Limiters {
    /// The stock profiles: 3 appointment attempts per minute, 5 form
    /// submissions per 5 minutes.
    pub fn new() -> Self {
        Self::from_config(&ThrottleConfig::default())
    }

    pub fn from_config(config: &ThrottleConfig) -> Self {
        Limiters {
            appointments: RateLimiter::new(
                config.appointments.max_attempts,
                Duration::from_secs(config.appointments.window_secs),
            ),
            forms: RateLimiter::new(
                config.forms.max_attempts,
                Duration::from_secs(config.forms.window_secs),
            ),
        }
    }

    /// Sweep every limiter's ledger. Returns the total number of
    /// evicted keys.
    pub fn cleanup_all(&self) -> usize {
        self.appointments.cleanup() + self.forms.cleanup()
    }
}

impl Default for Limiters {
    fn default() -> Self {
        Self::new()
    }
}
