//! Game configuration - the complete immutable table
//!
//! [`GameConfig::standard`] hands out the process-wide instance. It lives in
//! a `static`, so it is built at compile time, never mutated, and can be read
//! from any thread without synchronization.

use crate::error::{ConfigError, Result};
use crate::pieces::{ShapeDefinition, ShapeTable, SPAWN_POSITION, STANDARD_SHAPES};
use crate::scoring::{PointsTable, STANDARD_POINTS};
use crate::speed::{SpeedTable, STANDARD_SPEEDS};
use crate::types::{PieceKind, PieceShape, Rotation, ScoringEvent, LINES_PER_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub shapes: ShapeTable,
    pub spawn: (i8, i8),
    pub speeds: SpeedTable,
    pub points: PointsTable,
    pub lines_per_level: u32,
}

static STANDARD: GameConfig = GameConfig {
    shapes: STANDARD_SHAPES,
    spawn: SPAWN_POSITION,
    speeds: STANDARD_SPEEDS,
    points: STANDARD_POINTS,
    lines_per_level: LINES_PER_LEVEL,
};

impl GameConfig {
    /// The shipped configuration
    pub fn standard() -> &'static GameConfig {
        &STANDARD
    }

    pub fn shape_of(&self, kind: PieceKind) -> &ShapeDefinition {
        self.shapes.shape_of(kind)
    }

    pub fn get_shape(&self, kind: PieceKind, rotation: Rotation) -> PieceShape {
        self.shapes.get_shape(kind, rotation)
    }

    pub fn rotation_state(&self, kind: PieceKind, index: usize) -> Result<PieceShape> {
        self.shapes.rotation_state(kind, index)
    }

    pub fn spawn_position(&self) -> (i8, i8) {
        self.spawn
    }

    pub fn drop_interval_ms(&self, level: u32) -> Result<u32> {
        self.speeds.interval_ms(level)
    }

    pub fn points_for(&self, lines_cleared: u32) -> Result<u32> {
        self.points.points_for(lines_cleared)
    }

    pub fn points(&self, event: ScoringEvent) -> u32 {
        self.points.get(event)
    }

    pub fn soft_drop_bonus(&self, cells: u32) -> u32 {
        self.points.soft_drop_bonus(cells)
    }

    pub fn hard_drop_bonus(&self, cells: u32) -> u32 {
        self.points.hard_drop_bonus(cells)
    }

    /// Level after `total_lines` cleared lines, using this table's threshold
    pub fn level_for_lines(&self, total_lines: u32) -> u32 {
        match total_lines.checked_div(self.lines_per_level) {
            Some(advances) => crate::types::MIN_LEVEL.saturating_add(advances),
            None => crate::types::MIN_LEVEL,
        }
    }

    /// Re-check every table invariant
    pub fn validate(&self) -> Result<()> {
        self.shapes.validate()?;
        self.speeds.validate()?;
        self.points.validate()?;
        if self.lines_per_level == 0 {
            return Err(ConfigError::InvalidTable(
                "lines per level must be positive".into(),
            ));
        }
        log::debug!(
            "configuration ok (spawn {:?}, {} lines per level)",
            self.spawn,
            self.lines_per_level
        );
        Ok(())
    }
}
