//! Pieces module - tetromino shapes, rotation states and spawn position
//!
//! Each rotation state is stored the way the table is authored: a flat run of
//! 8 integers read as 4 `(x, y)` pairs around a pivot at `(0, 0)`. I, S and Z
//! alternate between two orientations and O repeats a single one; this is a
//! simplified rotation model with no wall-kick data.

use crate::error::{ConfigError, Result};
use crate::types::{
    BoardCell, ColorId, PieceKind, PieceShape, Rotation, CELLS_PER_PIECE, ROTATION_COUNT,
};

/// One rotation state as authored: `[x0, y0, x1, y1, x2, y2, x3, y3]`
pub type RawRotation = [i8; CELLS_PER_PIECE * 2];

/// Rotation states and color for one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDefinition {
    pub rotations: [RawRotation; ROTATION_COUNT],
    pub color: ColorId,
}

impl ShapeDefinition {
    /// Cells of the given rotation state as offset pairs
    pub const fn cells(&self, rotation: Rotation) -> PieceShape {
        decode(&self.rotations[rotation.index()])
    }

    /// All four rotation states decoded, in index order
    pub fn all_cells(&self) -> [PieceShape; ROTATION_COUNT] {
        Rotation::ALL.map(|r| self.cells(r))
    }
}

const fn decode(raw: &RawRotation) -> PieceShape {
    [
        (raw[0], raw[1]),
        (raw[2], raw[3]),
        (raw[4], raw[5]),
        (raw[6], raw[7]),
    ]
}

/// Shape definitions for all seven kinds, indexed by [`PieceKind::index`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTable(pub [ShapeDefinition; 7]);

impl ShapeTable {
    pub fn shape_of(&self, kind: PieceKind) -> &ShapeDefinition {
        &self.0[kind.index()]
    }

    pub fn get_shape(&self, kind: PieceKind, rotation: Rotation) -> PieceShape {
        self.shape_of(kind).cells(rotation)
    }

    /// Cells for a raw rotation index. Indices outside 0-3 are rejected, not wrapped.
    pub fn rotation_state(&self, kind: PieceKind, index: usize) -> Result<PieceShape> {
        let rotation = Rotation::from_index(index).ok_or(ConfigError::RotationOutOfRange(index))?;
        Ok(self.get_shape(kind, rotation))
    }

    /// Check cell counts, pivot presence, cell overlap and color uniqueness
    pub fn validate(&self) -> Result<()> {
        let mut seen_colors = [false; 7];

        for kind in PieceKind::ALL {
            let def = self.shape_of(kind);

            for rotation in Rotation::ALL {
                let cells = def.cells(rotation);

                if !cells.contains(&(0, 0)) {
                    return Err(ConfigError::InvalidTable(format!(
                        "{} state {} does not occupy the pivot cell",
                        kind.as_str(),
                        rotation.index()
                    )));
                }

                for (i, a) in cells.iter().enumerate() {
                    if cells[i + 1..].contains(a) {
                        return Err(ConfigError::InvalidTable(format!(
                            "{} state {} repeats cell {:?}",
                            kind.as_str(),
                            rotation.index(),
                            a
                        )));
                    }
                }
            }

            let slot = match def.color {
                1..=7 => (def.color - 1) as usize,
                other => {
                    return Err(ConfigError::InvalidTable(format!(
                        "{} has color {} outside 1-7",
                        kind.as_str(),
                        other
                    )))
                }
            };
            if seen_colors[slot] {
                return Err(ConfigError::InvalidTable(format!(
                    "{} reuses color {}",
                    kind.as_str(),
                    def.color
                )));
            }
            seen_colors[slot] = true;
        }

        log::debug!("shape table ok: {} kinds x 4 states", PieceKind::ALL.len());
        Ok(())
    }
}

pub(crate) const STANDARD_SHAPES: ShapeTable = ShapeTable([
    // I: vertical / horizontal
    ShapeDefinition {
        rotations: [
            [0, -1, 0, 0, 0, 1, 0, 2],
            [-1, 0, 0, 0, 1, 0, 2, 0],
            [0, -1, 0, 0, 0, 1, 0, 2],
            [-1, 0, 0, 0, 1, 0, 2, 0],
        ],
        color: 1,
    },
    // O: same square in every state
    ShapeDefinition {
        rotations: [
            [0, 0, 1, 0, 0, 1, 1, 1],
            [0, 0, 1, 0, 0, 1, 1, 1],
            [0, 0, 1, 0, 0, 1, 1, 1],
            [0, 0, 1, 0, 0, 1, 1, 1],
        ],
        color: 2,
    },
    // T: down, left, up, right
    ShapeDefinition {
        rotations: [
            [0, 0, -1, 0, 1, 0, 0, 1],
            [0, 0, 0, -1, 0, 1, -1, 0],
            [0, 0, -1, 0, 1, 0, 0, -1],
            [0, 0, 0, -1, 0, 1, 1, 0],
        ],
        color: 3,
    },
    // S: horizontal / vertical
    ShapeDefinition {
        rotations: [
            [0, 0, 0, -1, 1, -1, -1, 0],
            [0, 0, 0, -1, 1, 0, 1, 1],
            [0, 0, 0, -1, 1, -1, -1, 0],
            [0, 0, 0, -1, 1, 0, 1, 1],
        ],
        color: 4,
    },
    // Z: horizontal / vertical
    ShapeDefinition {
        rotations: [
            [0, 0, 0, -1, -1, -1, 1, 0],
            [0, 0, 0, -1, 1, -1, 1, 0],
            [0, 0, 0, -1, -1, -1, 1, 0],
            [0, 0, 0, -1, 1, -1, 1, 0],
        ],
        color: 5,
    },
    // J: up, left, down, right
    ShapeDefinition {
        rotations: [
            [0, 0, -1, 0, 1, 0, -1, -1],
            [0, 0, 0, -1, 0, 1, -1, 1],
            [0, 0, -1, 0, 1, 0, 1, 1],
            [0, 0, 0, -1, 0, 1, 1, -1],
        ],
        color: 6,
    },
    // L: up, right, down, left
    ShapeDefinition {
        rotations: [
            [0, 0, -1, 0, 1, 0, 1, -1],
            [0, 0, 0, -1, 0, 1, 1, 1],
            [0, 0, -1, 0, 1, 0, -1, 1],
            [0, 0, 0, -1, 0, 1, -1, -1],
        ],
        color: 7,
    },
]);

/// Spawn position for new pieces (x, y), shared by every kind
pub const SPAWN_POSITION: (i8, i8) = (4, 1);

/// Shape definition for a piece kind
pub fn shape_of(kind: PieceKind) -> &'static ShapeDefinition {
    crate::config::GameConfig::standard().shapes.shape_of(kind)
}

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    shape_of(kind).cells(rotation)
}

/// Get the shape for a raw rotation index (0-3)
pub fn rotation_state(kind: PieceKind, index: usize) -> Result<PieceShape> {
    crate::config::GameConfig::standard()
        .shapes
        .rotation_state(kind, index)
}

pub fn spawn_position() -> (i8, i8) {
    SPAWN_POSITION
}

/// Get initial shape for a new piece
pub fn get_spawn_shape(kind: PieceKind) -> PieceShape {
    get_shape(kind, Rotation::North)
}

/// Board cells covered by a piece whose pivot sits at `(x, y)`
pub fn cells_at(
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
) -> [BoardCell; CELLS_PER_PIECE] {
    let (x, y) = (i16::from(x), i16::from(y));
    get_shape(kind, rotation).map(|(dx, dy)| (x + i16::from(dx), y + i16::from(dy)))
}

/// Board cells covered by a freshly spawned piece
pub fn spawn_cells(kind: PieceKind) -> [BoardCell; CELLS_PER_PIECE] {
    let (x, y) = SPAWN_POSITION;
    cells_at(kind, Rotation::North, x, y)
}
