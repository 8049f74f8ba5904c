//! Client-side throttling and booking-form checks for the boutique's
//! appointment funnel.
//!
//! The core is a sliding-window admission limiter ([`RateLimiter`]) that
//! gates repeated form submissions before they reach the booking
//! backend. Two named profiles ([`Limiters`]) cover appointment requests
//! and generic form posts; a background sweep ([`tasks`]) keeps the
//! ledgers bounded. Opening-hours arithmetic ([`business_hours`]) and
//! input validation ([`validators`]) round out the funnel-side checks.
//!
//! Throttling here is a UX measure, not a security boundary: the booking
//! backend applies its own authoritative limits and conflict checks.

pub mod business_hours;
pub mod config;
pub mod limiters;
pub mod rate_limit;
pub mod tasks;
pub mod validators;


pub use config::{LimiterConfig, ThrottleConfig};
pub use limiters::Limiters;
pub use rate_limit::RateLimiter;
pub use tasks::{start_sweep, SweepTask};
