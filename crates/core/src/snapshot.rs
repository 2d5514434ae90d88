//! Serializable view of a [`GameConfig`], for engines that load the table as JSON

use serde::Serialize;

use crate::config::GameConfig;
use crate::types::{PieceKind, Rotation, CELLS_PER_PIECE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceSnapshot {
    pub kind: &'static str,
    pub color: u8,
    /// Rotation states 0-3, each as four `[x, y]` pairs
    pub rotations: Vec<[[i8; 2]; CELLS_PER_PIECE]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpawnSnapshot {
    pub x: i8,
    pub y: i8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpeedSnapshot {
    pub level: u32,
    pub interval_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointsSnapshot {
    pub single: u32,
    pub double: u32,
    pub triple: u32,
    pub tetris: u32,
    pub soft_drop: u32,
    pub hard_drop: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSnapshot {
    pub pieces: Vec<PieceSnapshot>,
    pub spawn: SpawnSnapshot,
    pub speeds: Vec<SpeedSnapshot>,
    pub points: PointsSnapshot,
    pub lines_per_level: u32,
}

impl ConfigSnapshot {
    pub fn standard() -> Self {
        Self::from(GameConfig::standard())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&GameConfig> for ConfigSnapshot {
    fn from(cfg: &GameConfig) -> Self {
        let pieces = PieceKind::ALL
            .iter()
            .map(|&kind| {
                let def = cfg.shape_of(kind);
                PieceSnapshot {
                    kind: kind.as_str(),
                    color: def.color,
                    rotations: Rotation::ALL
                        .iter()
                        .map(|&r| def.cells(r).map(|(x, y)| [x, y]))
                        .collect(),
                }
            })
            .collect();

        let (x, y) = cfg.spawn;
        let points = &cfg.points;

        Self {
            pieces,
            spawn: SpawnSnapshot { x, y },
            speeds: cfg
                .speeds
                .entries()
                .map(|(level, interval_ms)| SpeedSnapshot { level, interval_ms })
                .collect(),
            points: PointsSnapshot {
                single: points.single,
                double: points.double,
                triple: points.triple,
                tetris: points.tetris,
                soft_drop: points.soft_drop,
                hard_drop: points.hard_drop,
            },
            lines_per_level: cfg.lines_per_level,
        }
    }
}
