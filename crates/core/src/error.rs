use thiserror::Error;

/// Out-of-domain lookups and table invariant violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown piece kind: {0:?} (expected one of I, O, T, S, Z, J, L)")]
    UnknownPiece(String),

    #[error("unknown rotation: {0:?}")]
    UnknownRotation(String),

    #[error("rotation index {0} out of range 0..4 (callers wrap rotation themselves)")]
    RotationOutOfRange(usize),

    #[error("level {0} is below the minimum level 1")]
    LevelBelowMinimum(u32),

    #[error("lines cleared {0} out of range 1..=4")]
    LinesClearedOutOfRange(u32),

    #[error("invalid configuration table: {0}")]
    InvalidTable(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
