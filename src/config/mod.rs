//! Configuration APIs for dictuple containers
//!
//! Container tuning knobs live in plain, serializable structs that share the
//! [`Config`] trait: validation, environment initialization and presets.
//!
//! # Presets
//!
//! ```rust
//! use dictuple::config::{Config, OrderedMapConfig};
//!
//! let config = OrderedMapConfig::performance_preset();
//! assert!(config.validate().is_ok());
//!
//! let config = OrderedMapConfig::realtime_preset();
//! assert!(!config.enable_auto_compaction);
//! ```
//!
//! # Environment Initialization
//!
//! ```rust
//! use dictuple::config::{Config, OrderedMapConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads DICTUPLE_ORDERED_MAP_* variables, falling back to defaults
//! let config = OrderedMapConfig::from_env()?;
//!
//! // Or with a custom prefix
//! let config = OrderedMapConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;

pub mod ordered_map;


pub use ordered_map::OrderedMapConfig;

/// Default prefix for environment variables
pub const ENV_PREFIX: &str = "DICTUPLE_";

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is valid, `Err` with details if invalid.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `DICTUPLE_{COMPONENT}_{FIELD}`,
    /// e.g. `DICTUPLE_ORDERED_MAP_LOAD_FACTOR=0.8`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The environment variable prefix to use
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset tuned for throughput at the cost of memory.
    fn performance_preset() -> Self;

    /// Preset tuned for a small footprint.
    fn memory_preset() -> Self;

    /// Preset that avoids unpredictable pauses.
    fn realtime_preset() -> Self;

    /// Preset balancing speed and memory; the default.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Serialize the configuration to a JSON string.
    fn to_json(&self) -> Result<String>;

    /// Parse and validate a configuration from a JSON string.
    fn from_json(json: &str) -> Result<Self>;
}

/// Utility function to parse environment variable with fallback to default.
///
/// # Arguments
///
/// * `var_name` - The environment variable name
/// * `default` - The default value if the environment variable is not set
///
/// # Returns
///
/// The parsed value or the default value.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Utility function to parse boolean environment variable.
///
/// Accepts: "true", "1", "yes", "on" (case-insensitive) as true,
/// everything else as false.
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .map(|s| {
            let s = s.to_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes" | "on")
        })
        .unwrap_or(default)
}
