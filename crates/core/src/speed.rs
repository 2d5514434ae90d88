//! Speed module - gravity interval by level
//!
//! Levels start at 1. Levels past [`MAX_SPEED_LEVEL`] keep the last interval
//! so difficulty never goes back down.

use crate::error::{ConfigError, Result};
use crate::types::{MAX_SPEED_LEVEL, MIN_LEVEL};

/// Drop intervals in milliseconds; index 0 = level 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedTable(pub [u32; MAX_SPEED_LEVEL as usize]);

impl SpeedTable {
    /// Drop interval for `level`, clamped to the last entry above the table
    pub fn interval_ms(&self, level: u32) -> Result<u32> {
        if level < MIN_LEVEL {
            return Err(ConfigError::LevelBelowMinimum(level));
        }
        if level > MAX_SPEED_LEVEL {
            log::trace!("level {} clamped to {}", level, MAX_SPEED_LEVEL);
        }
        Ok(self.interval_clamped(level))
    }

    fn interval_clamped(&self, level: u32) -> u32 {
        let idx = level.clamp(MIN_LEVEL, MAX_SPEED_LEVEL) - MIN_LEVEL;
        self.0[idx as usize]
    }

    /// `(level, interval_ms)` pairs in level order
    pub fn entries(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &ms)| (i as u32 + MIN_LEVEL, ms))
    }

    /// Intervals must be positive and non-increasing
    pub fn validate(&self) -> Result<()> {
        if let Some((level, _)) = self.entries().find(|&(_, ms)| ms == 0) {
            return Err(ConfigError::InvalidTable(format!(
                "level {} has a zero drop interval",
                level
            )));
        }
        for (i, pair) in self.0.windows(2).enumerate() {
            if pair[1] > pair[0] {
                return Err(ConfigError::InvalidTable(format!(
                    "level {} is slower than level {} ({}ms > {}ms)",
                    i as u32 + MIN_LEVEL + 1,
                    i as u32 + MIN_LEVEL,
                    pair[1],
                    pair[0]
                )));
            }
        }
        log::debug!("speed table ok: {} levels", self.0.len());
        Ok(())
    }
}

pub(crate) const STANDARD_SPEEDS: SpeedTable =
    SpeedTable([1000, 850, 700, 600, 500, 400, 300, 250, 200, 150]);

/// Get drop interval for a level (in milliseconds)
pub fn drop_interval_ms(level: u32) -> Result<u32> {
    crate::config::GameConfig::standard()
        .speeds
        .interval_ms(level)
}

/// Level reached after clearing `total_lines` lines (level 1 at zero lines,
/// one level per `LINES_PER_LEVEL`)
pub fn level_for_lines(total_lines: u32) -> u32 {
    crate::config::GameConfig::standard().level_for_lines(total_lines)
}

/// Drop interval for a running line total
pub fn drop_interval_for_lines(total_lines: u32) -> u32 {
    crate::config::GameConfig::standard()
        .speeds
        .interval_clamped(level_for_lines(total_lines))
}
