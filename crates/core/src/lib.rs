//! Game configuration tables - pure, immutable, compile-time data
//!
//! This crate holds the declarative tables a falling-block engine consumes:
//! piece shapes and colors, the spawn position, drop speed by level and the
//! points table. It has no game loop, board or input handling; those belong to
//! the consuming engine.
//!
//! # Module Structure
//!
//! - [`pieces`]: Tetromino rotation states, colors and spawn position
//! - [`speed`]: Drop interval per level, clamped above level 10
//! - [`scoring`]: Line-clear tiers and per-cell drop bonuses
//! - [`config`]: [`GameConfig`], the aggregate table and its validation
//! - [`snapshot`]: Serializable view for JSON export
//! - [`error`]: [`ConfigError`] for out-of-domain lookups
//!
//! # Lookups
//!
//! Every lookup is a plain read of `static` data. Out-of-domain inputs
//! (level 0, a rotation index of 4 or more, a line count outside 1-4) return
//! [`ConfigError`] instead of a default value. Two inputs are deliberately
//! lenient: levels above 10 reuse the level 10 interval, and rotation wrapping
//! is left to the caller via [`Rotation::from_index_wrapping`](types::Rotation::from_index_wrapping).
//!
//! # Example
//!
//! ```
//! use blockfall_core::{drop_interval_ms, get_shape, points_for, spawn_position};
//! use blockfall_core::types::{PieceKind, Rotation};
//!
//! assert_eq!(spawn_position(), (4, 1));
//! assert_eq!(get_shape(PieceKind::O, Rotation::East), [(0, 0), (1, 0), (0, 1), (1, 1)]);
//! assert_eq!(drop_interval_ms(12).unwrap(), 150);
//! assert_eq!(points_for(4).unwrap(), 800);
//! assert!(points_for(0).is_err());
//! ```

pub mod config;
pub mod error;
pub mod pieces;
pub mod scoring;
pub mod snapshot;
pub mod speed;

pub use blockfall_types as types;

// Re-export commonly used items for convenience
pub use config::GameConfig;
pub use error::ConfigError;
pub use pieces::{
    cells_at, get_shape, get_spawn_shape, rotation_state, shape_of, spawn_cells, spawn_position,
    ShapeDefinition, SPAWN_POSITION,
};
pub use scoring::{
    calculate_drop_score, hard_drop_bonus, points, points_for, soft_drop_bonus, PointsTable,
};
pub use snapshot::ConfigSnapshot;
pub use speed::{drop_interval_for_lines, drop_interval_ms, level_for_lines, SpeedTable};

/// Parse a piece kind, reporting unknown names as [`ConfigError::UnknownPiece`]
pub fn parse_piece(s: &str) -> Result<types::PieceKind, ConfigError> {
    types::PieceKind::from_str(s).ok_or_else(|| ConfigError::UnknownPiece(s.to_string()))
}

/// Parse a rotation name or index, reporting failures as [`ConfigError::UnknownRotation`]
pub fn parse_rotation(s: &str) -> Result<types::Rotation, ConfigError> {
    types::Rotation::from_str(s).ok_or_else(|| ConfigError::UnknownRotation(s.to_string()))
}
