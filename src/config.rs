//! Throttle configuration, read from a TOML file at startup.
//!
//! Missing files and missing sections fall back to the built-in
//! profiles so the funnel never launches without limits.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Admission policy for a single limiter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimiterConfig {
    pub max_attempts: usize,
    pub window_secs: u64,
}

/// Top-level throttle settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    /// Gate for appointment booking requests.
    pub appointments: LimiterConfig,
    /// Gate for generic form submissions.
    pub forms: LimiterConfig,
    /// How often the background sweep prunes stale ledger entries.
    pub cleanup_interval_secs: u64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        ThrottleConfig {
            appointments: LimiterConfig {
                max_attempts: 3,
                window_secs: 60,
            },
            forms: LimiterConfig {
                max_attempts: 5,
                window_secs: 5 * 60,
            },
            cleanup_interval_secs: 5 * 60,
        }
    }
}

impl ThrottleConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, String> {
        let config: ThrottleConfig = toml::from_str(text).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. A missing or invalid file logs a warning and
    /// yields the defaults rather than aborting startup.
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match Self::from_toml(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!(
                        "Invalid throttle config {}: {} (using defaults)",
                        path.display(),
                        e
                    );
                    ThrottleConfig::default()
                }
            },
            Err(_) => ThrottleConfig::default(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        for (name, limiter) in [
            ("appointments", &self.appointments),
            ("forms", &self.forms),
        ] {
            if limiter.max_attempts == 0 {
                return Err(format!("{}: max_attempts must be at least 1", name));
            }
            if limiter.window_secs == 0 {
                return Err(format!("{}: window_secs must be at least 1", name));
            }
        }
        if self.cleanup_interval_secs == 0 {
            return Err("cleanup_interval_secs must be at least 1".to_string());
        }
        Ok(())
    }
}
