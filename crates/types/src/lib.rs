//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary used by the configuration tables:
//! piece kinds, rotation indices, scoring events and the handful of scalar
//! constants that do not belong to any particular table. It has no external
//! dependencies so it can be pulled into any consumer (engine, renderer, bot).
//!
//! # Coordinates
//!
//! Piece cells are `(x, y)` offsets from a pivot cell at `(0, 0)`.
//! `x` grows to the right and `y` grows downwards, so a negative `y` sits
//! above the pivot.
//!
//! # Levels
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_LEVEL` | 1 | First playable level |
//! | `MAX_SPEED_LEVEL` | 10 | Last level with its own drop interval |
//! | `LINES_PER_LEVEL` | 10 | Lines cleared per level advance |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, Rotation, LINES_PER_LEVEL};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.color(), 3);
//!
//! // Callers own rotation wrapping.
//! assert_eq!(Rotation::from_index_wrapping(5), Rotation::East);
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//!
//! assert_eq!(LINES_PER_LEVEL, 10);
//! ```

/// Lines that must be cleared to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Lowest valid level
pub const MIN_LEVEL: u32 = 1;

/// Highest level with a dedicated drop interval; later levels reuse it
pub const MAX_SPEED_LEVEL: u32 = 10;

/// Number of rotation states every piece carries
pub const ROTATION_COUNT: usize = 4;

/// Number of cells in a tetromino
pub const CELLS_PER_PIECE: usize = 4;

/// Offset of a single mino relative to the piece pivot
pub type MinoOffset = (i8, i8);

/// Shape of a piece in one rotation state - 4 mino offsets from the pivot
pub type PieceShape = [MinoOffset; CELLS_PER_PIECE];

/// Absolute board cell; wide enough that any `i8` origin plus any offset fits
pub type BoardCell = (i16, i16);

/// Color identifier handed to renderers (1-7, one per piece kind)
pub type ColorId = u8;

/// The seven tetromino piece kinds
///
/// Declaration order matches the color identifiers: I=1 through L=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "I" => Some(PieceKind::I),
            "O" => Some(PieceKind::O),
            "T" => Some(PieceKind::T),
            "S" => Some(PieceKind::S),
            "Z" => Some(PieceKind::Z),
            "J" => Some(PieceKind::J),
            "L" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to the uppercase table key
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Position of this kind in [`PieceKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color identifier used by renderers
    pub const fn color(self) -> ColorId {
        self as ColorId + 1
    }
}

/// Rotation states, indexed 0-3
///
/// - **North**: state 0 (0°)
/// - **East**: state 1 (90°)
/// - **South**: state 2 (180°)
/// - **West**: state 3 (270°)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; ROTATION_COUNT] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Rotation state index (0-3)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Exact index lookup; `None` for anything outside 0-3
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(2), Some(Rotation::South));
    /// assert_eq!(Rotation::from_index(4), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Index lookup modulo 4, for callers that keep a running rotation counter
    pub fn from_index_wrapping(index: usize) -> Self {
        Self::ALL[index % ROTATION_COUNT]
    }

    /// Parse rotation from string
    ///
    /// Accepts full names, single letters or the state index
    /// (case-insensitive): "north" | "n" | "0", "east" | "e" | "1",
    /// "south" | "s" | "2", "west" | "w" | "3"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "north" | "n" | "0" => Some(Rotation::North),
            "east" | "e" | "1" => Some(Rotation::East),
            "south" | "s" | "2" => Some(Rotation::South),
            "west" | "w" | "3" => Some(Rotation::West),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Named scoring events
///
/// The first four are line-clear tiers paid once per placement. The drop
/// events are per-cell multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringEvent {
    Single,
    Double,
    Triple,
    Tetris,
    SoftDrop,
    HardDrop,
}

impl ScoringEvent {
    pub const ALL: [ScoringEvent; 6] = [
        ScoringEvent::Single,
        ScoringEvent::Double,
        ScoringEvent::Triple,
        ScoringEvent::Tetris,
        ScoringEvent::SoftDrop,
        ScoringEvent::HardDrop,
    ];

    /// Line-clear tier for a placement that cleared `lines` rows
    ///
    /// ```
    /// use blockfall_types::ScoringEvent;
    ///
    /// assert_eq!(ScoringEvent::for_lines(4), Some(ScoringEvent::Tetris));
    /// assert_eq!(ScoringEvent::for_lines(0), None);
    /// ```
    pub fn for_lines(lines: u32) -> Option<Self> {
        match lines {
            1 => Some(ScoringEvent::Single),
            2 => Some(ScoringEvent::Double),
            3 => Some(ScoringEvent::Triple),
            4 => Some(ScoringEvent::Tetris),
            _ => None,
        }
    }

    /// Whether the event is paid per cell dropped rather than per placement
    pub fn is_per_cell(&self) -> bool {
        matches!(self, ScoringEvent::SoftDrop | ScoringEvent::HardDrop)
    }

    /// Table key, as used in the points table
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringEvent::Single => "SINGLE",
            ScoringEvent::Double => "DOUBLE",
            ScoringEvent::Triple => "TRIPLE",
            ScoringEvent::Tetris => "TETRIS",
            ScoringEvent::SoftDrop => "SOFT_DROP",
            ScoringEvent::HardDrop => "HARD_DROP",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "SINGLE" => Some(ScoringEvent::Single),
            "DOUBLE" => Some(ScoringEvent::Double),
            "TRIPLE" => Some(ScoringEvent::Triple),
            "TETRIS" => Some(ScoringEvent::Tetris),
            "SOFT_DROP" => Some(ScoringEvent::SoftDrop),
            "HARD_DROP" => Some(ScoringEvent::HardDrop),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_constants() {
        assert_eq!(LINES_PER_LEVEL, 10);
        assert_eq!(MIN_LEVEL, 1);
        assert_eq!(MAX_SPEED_LEVEL, 10);
    }

    #[test]
    fn piece_colors_follow_declaration_order() {
        let colors: Vec<ColorId> = PieceKind::ALL.iter().map(|k| k.color()).collect();
        assert_eq!(colors, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn piece_kind_string_round_trip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_str(" z "), Some(PieceKind::Z));
        assert_eq!(PieceKind::from_str(""), None);
        assert_eq!(PieceKind::from_str("II"), None);
    }

    #[test]
    fn rotation_cycles() {
        for r in Rotation::ALL {
            assert_eq!(r.rotate_cw().rotate_ccw(), r);
            assert_eq!(r.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), r);
        }
        assert_eq!(Rotation::North.rotate_cw().index(), 1);
        assert_eq!(Rotation::North.rotate_ccw().index(), 3);
    }

    #[test]
    fn rotation_index_lookup() {
        assert_eq!(Rotation::from_index(0), Some(Rotation::North));
        assert_eq!(Rotation::from_index(3), Some(Rotation::West));
        assert_eq!(Rotation::from_index(4), None);
        assert_eq!(Rotation::from_index_wrapping(4), Rotation::North);
        assert_eq!(Rotation::from_index_wrapping(7), Rotation::West);
        assert_eq!(Rotation::from_str("S"), Some(Rotation::South));
        assert_eq!(Rotation::from_str("3"), Some(Rotation::West));
        assert_eq!(Rotation::from_str("up"), None);
    }

    #[test]
    fn scoring_event_tiers() {
        assert_eq!(ScoringEvent::for_lines(1), Some(ScoringEvent::Single));
        assert_eq!(ScoringEvent::for_lines(2), Some(ScoringEvent::Double));
        assert_eq!(ScoringEvent::for_lines(3), Some(ScoringEvent::Triple));
        assert_eq!(ScoringEvent::for_lines(5), None);
        assert!(ScoringEvent::HardDrop.is_per_cell());
        assert!(!ScoringEvent::Tetris.is_per_cell());
        assert_eq!(
            ScoringEvent::from_str("soft-drop"),
            Some(ScoringEvent::SoftDrop)
        );
        assert_eq!(ScoringEvent::Double.as_str(), "DOUBLE");
    }
}
