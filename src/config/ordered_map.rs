//! OrderedMap configuration.

use super::{parse_env_bool, parse_env_var, Config};
use crate::error::{DictupleError, Result};
use serde::{Deserialize, Serialize};

/// Tuning parameters for [`OrderedMap`](crate::OrderedMap).
///
/// Removing a key leaves a tombstone in the slot vector so the remaining
/// entries keep their positions. Compaction squeezes tombstones out (without
/// reordering) once there are at least `min_compaction_tombstones` of them and
/// they outnumber `compaction_ratio` times the live entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedMapConfig {
    /// Number of entries to allocate for up front
    pub initial_capacity: usize,
    /// Maximum live entries per bucket before the bucket array doubles, in
    /// `[MIN_LOAD_FACTOR, 1.0]`
    pub load_factor: f32,
    /// Compact automatically after removals
    pub enable_auto_compaction: bool,
    /// Tombstone to live entry ratio that triggers automatic compaction
    pub compaction_ratio: f32,
    /// Tombstones required before automatic compaction is considered
    pub min_compaction_tombstones: usize,
}

impl Default for OrderedMapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 8,
            load_factor: 0.75,
            enable_auto_compaction: true,
            compaction_ratio: 0.5,
            min_compaction_tombstones: 16,
        }
    }
}

impl OrderedMapConfig {
    /// Smallest accepted `load_factor`
    pub const MIN_LOAD_FACTOR: f32 = 0.05;

    /// Largest bucket array the map will build
    pub const MAX_BUCKETS: usize = (isize::MAX as usize >> 4) + 1;

    /// Largest accepted `initial_capacity`
    pub const MAX_INITIAL_CAPACITY: usize = isize::MAX as usize >> 12;

    /// Default configuration with a different initial capacity
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    /// Bucket count able to hold `entries` live entries without growing,
    /// capped at [`Self::MAX_BUCKETS`]
    pub(crate) fn buckets_for(&self, entries: usize) -> usize {
        self.checked_buckets_for(entries).unwrap_or(Self::MAX_BUCKETS)
    }

    fn checked_buckets_for(&self, entries: usize) -> Option<usize> {
        let needed = (entries as f64 / self.load_factor as f64).ceil();
        // Also rejects NaN
        if !(needed <= Self::MAX_BUCKETS as f64) {
            return None;
        }
        (needed as usize)
            .max(1)
            .checked_next_power_of_two()
            .filter(|&buckets| buckets <= Self::MAX_BUCKETS)
    }

    /// Largest live entry count `buckets` buckets may hold
    pub(crate) fn max_load(&self, buckets: usize) -> usize {
        ((buckets as f64 * self.load_factor as f64) as usize).max(1)
    }

    /// Whether `tombstones` dead slots next to `live` entries warrant compaction
    pub(crate) fn should_compact(&self, tombstones: usize, live: usize) -> bool {
        self.enable_auto_compaction
            && tombstones >= self.min_compaction_tombstones
            && tombstones as f64 > live as f64 * self.compaction_ratio as f64
    }
}

impl Config for OrderedMapConfig {
    fn validate(&self) -> Result<()> {
        if !self.load_factor.is_finite()
            || self.load_factor < Self::MIN_LOAD_FACTOR
            || self.load_factor > 1.0
        {
            return Err(DictupleError::configuration(format!(
                "load_factor must be in [{}, 1.0], got {}",
                Self::MIN_LOAD_FACTOR,
                self.load_factor
            )));
        }
        if !self.compaction_ratio.is_finite() || self.compaction_ratio < 0.0 {
            return Err(DictupleError::configuration(format!(
                "compaction_ratio must be a non-negative number, got {}",
                self.compaction_ratio
            )));
        }
        if self.initial_capacity > Self::MAX_INITIAL_CAPACITY
            || self.checked_buckets_for(self.initial_capacity).is_none()
        {
            return Err(DictupleError::configuration(format!(
                "initial_capacity {} is too large",
                self.initial_capacity
            )));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.initial_capacity = parse_env_var(
            &format!("{}ORDERED_MAP_INITIAL_CAPACITY", prefix),
            config.initial_capacity,
        );
        config.load_factor =
            parse_env_var(&format!("{}ORDERED_MAP_LOAD_FACTOR", prefix), config.load_factor);
        config.enable_auto_compaction = parse_env_bool(
            &format!("{}ORDERED_MAP_AUTO_COMPACTION", prefix),
            config.enable_auto_compaction,
        );
        config.compaction_ratio = parse_env_var(
            &format!("{}ORDERED_MAP_COMPACTION_RATIO", prefix),
            config.compaction_ratio,
        );
        config.min_compaction_tombstones = parse_env_var(
            &format!("{}ORDERED_MAP_MIN_COMPACTION_TOMBSTONES", prefix),
            config.min_compaction_tombstones,
        );
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            initial_capacity: 64,
            load_factor: 0.5,
            enable_auto_compaction: true,
            compaction_ratio: 1.0,
            min_compaction_tombstones: 64,
        }
    }

    fn memory_preset() -> Self {
        Self {
            initial_capacity: 0,
            load_factor: 1.0,
            enable_auto_compaction: true,
            compaction_ratio: 0.25,
            min_compaction_tombstones: 4,
        }
    }

    fn realtime_preset() -> Self {
        // Compaction is O(n); leave it to the caller.
        Self {
            initial_capacity: 32,
            load_factor: 0.75,
            enable_auto_compaction: false,
            compaction_ratio: 0.5,
            min_compaction_tombstones: 16,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DictupleError::configuration(format!("Failed to serialize ordered map config: {}", e))
        })
    }

    fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            DictupleError::configuration(format!("Failed to parse ordered map config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
