//! Configuration Module
//!
//! Handles loading server configuration from environment variables and
//! resolving the auction expiration duration.

use std::env;
use std::time::Duration;

use tracing::{debug, warn};

/// Environment variable holding the auction expiration duration string
/// (e.g. "5m", "30s", "2h").
pub const AUCTION_INTERVAL_ENV: &str = "AUCTION_INTERVAL";

/// Fallback expiration when the configured value is absent or malformed.
pub const DEFAULT_EXPIRATION: Duration = Duration::from_secs(5 * 60);

/// Default seconds between expiration sweeps.
const DEFAULT_TICK_SECS: u64 = 60;

// == Config ==
/// Daemon configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interval between expiration sweeps
    pub tick_period: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MONITOR_TICK_SECS` - Seconds between sweeps (default: 60)
    pub fn from_env() -> Self {
        Self {
            tick_period: env::var("MONITOR_TICK_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(DEFAULT_TICK_SECS)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_secs(DEFAULT_TICK_SECS),
        }
    }
}

// == Duration Resolver ==
/// Resolves the configured expiration duration.
///
/// Re-reads `AUCTION_INTERVAL` on every call so operators can change the
/// window without restarting the process. Resolution never fails: a
/// missing or unparsable value falls back to 5 minutes.
pub fn resolve_expiration_duration() -> Duration {
    match env::var(AUCTION_INTERVAL_ENV) {
        Ok(raw) => match humantime::parse_duration(&raw) {
            Ok(duration) => duration,
            Err(err) => {
                warn!(
                    "Invalid {} value {:?} ({}), using default of 5 minutes",
                    AUCTION_INTERVAL_ENV, raw, err
                );
                DEFAULT_EXPIRATION
            }
        },
        Err(_) => {
            debug!(
                "{} not set, using default of 5 minutes",
                AUCTION_INTERVAL_ENV
            );
            DEFAULT_EXPIRATION
        }
    }
}
