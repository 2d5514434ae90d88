//! Scoring module - line-clear tiers and per-cell drop bonuses
//!
//! Line clears pay a flat amount per tier with no level multiplier. Drop
//! bonuses are paid per cell travelled.

use crate::error::{ConfigError, Result};
use crate::types::ScoringEvent;

/// Point value for every scoring event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsTable {
    pub single: u32,
    pub double: u32,
    pub triple: u32,
    pub tetris: u32,
    /// Per cell
    pub soft_drop: u32,
    /// Per cell
    pub hard_drop: u32,
}

impl PointsTable {
    pub const fn get(&self, event: ScoringEvent) -> u32 {
        match event {
            ScoringEvent::Single => self.single,
            ScoringEvent::Double => self.double,
            ScoringEvent::Triple => self.triple,
            ScoringEvent::Tetris => self.tetris,
            ScoringEvent::SoftDrop => self.soft_drop,
            ScoringEvent::HardDrop => self.hard_drop,
        }
    }

    /// Points for a placement clearing 1-4 lines
    ///
    /// A zero-line placement should short-circuit before calling this.
    pub fn points_for(&self, lines_cleared: u32) -> Result<u32> {
        ScoringEvent::for_lines(lines_cleared)
            .map(|event| self.get(event))
            .ok_or(ConfigError::LinesClearedOutOfRange(lines_cleared))
    }

    pub fn soft_drop_bonus(&self, cells: u32) -> u32 {
        cells.saturating_mul(self.soft_drop)
    }

    pub fn hard_drop_bonus(&self, cells: u32) -> u32 {
        cells.saturating_mul(self.hard_drop)
    }

    /// Tiers must be positive and strictly increasing; drop multipliers positive
    pub fn validate(&self) -> Result<()> {
        let tiers = [self.single, self.double, self.triple, self.tetris];
        if tiers[0] == 0 {
            return Err(ConfigError::InvalidTable("SINGLE pays no points".into()));
        }
        for (i, pair) in tiers.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ConfigError::InvalidTable(format!(
                    "clearing {} lines pays no more than clearing {} ({} <= {})",
                    i + 2,
                    i + 1,
                    pair[1],
                    pair[0]
                )));
            }
        }
        if self.soft_drop == 0 || self.hard_drop == 0 {
            return Err(ConfigError::InvalidTable(
                "drop multipliers must be positive".into(),
            ));
        }
        log::debug!("points table ok");
        Ok(())
    }
}

pub(crate) const STANDARD_POINTS: PointsTable = PointsTable {
    single: 100,
    double: 300,
    triple: 500,
    tetris: 800,
    soft_drop: 1,
    hard_drop: 2,
};

fn standard() -> &'static PointsTable {
    &crate::config::GameConfig::standard().points
}

/// Point value of a named event
pub fn points(event: ScoringEvent) -> u32 {
    standard().get(event)
}

/// Calculate line clear score
/// lines_cleared: number of lines cleared (1-4)
pub fn points_for(lines_cleared: u32) -> Result<u32> {
    standard().points_for(lines_cleared)
}

/// soft drop: +1 per cell
pub fn soft_drop_bonus(cells: u32) -> u32 {
    standard().soft_drop_bonus(cells)
}

/// hard drop: +2 per cell
pub fn hard_drop_bonus(cells: u32) -> u32 {
    standard().hard_drop_bonus(cells)
}

/// Calculate drop score for either drop kind
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        hard_drop_bonus(cells)
    } else {
        soft_drop_bonus(cells)
    }
}
