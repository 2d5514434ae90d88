//! Pieces table tests - rotation states, colors, spawn

use blockfall::core::pieces::{
    cells_at, get_shape, get_spawn_shape, rotation_state, shape_of, spawn_cells, spawn_position,
    SPAWN_POSITION,
};
use blockfall::core::ConfigError;
use blockfall::types::{PieceKind, Rotation};

// ============== Table Shape ==============

#[test]
fn test_every_kind_has_four_states_of_four_distinct_cells() {
    for kind in PieceKind::ALL {
        let def = shape_of(kind);
        assert_eq!(def.rotations.len(), 4);
        for (i, cells) in def.all_cells().iter().enumerate() {
            for a in 0..4 {
                for b in (a + 1)..4 {
                    assert_ne!(cells[a], cells[b], "{:?} state {} overlaps", kind, i);
                }
            }
            assert!(cells.contains(&(0, 0)), "{:?} state {} misses pivot", kind, i);
        }
    }
}

#[test]
fn test_colors_unique_one_to_seven() {
    let mut colors: Vec<u8> = PieceKind::ALL.iter().map(|&k| shape_of(k).color).collect();
    colors.sort_unstable();
    assert_eq!(colors, vec![1, 2, 3, 4, 5, 6, 7]);

    assert_eq!(shape_of(PieceKind::I).color, 1);
    assert_eq!(shape_of(PieceKind::L).color, 7);
}

// ============== Shape Values ==============

#[test]
fn test_o_piece_shapes() {
    // O piece is the same for all rotations
    let north = get_shape(PieceKind::O, Rotation::North);
    assert_eq!(north, [(0, 0), (1, 0), (0, 1), (1, 1)]);
    for rotation in Rotation::ALL {
        assert_eq!(get_shape(PieceKind::O, rotation), north);
    }
}

#[test]
fn test_i_piece_alternates_two_orientations() {
    let vertical = get_shape(PieceKind::I, Rotation::North);
    let horizontal = get_shape(PieceKind::I, Rotation::East);
    assert_eq!(vertical, [(0, -1), (0, 0), (0, 1), (0, 2)]);
    assert_eq!(horizontal, [(-1, 0), (0, 0), (1, 0), (2, 0)]);
    assert_eq!(get_shape(PieceKind::I, Rotation::South), vertical);
    assert_eq!(get_shape(PieceKind::I, Rotation::West), horizontal);
}

#[test]
fn test_t_piece_shapes() {
    assert_eq!(
        get_shape(PieceKind::T, Rotation::North),
        [(0, 0), (-1, 0), (1, 0), (0, 1)]
    );
    assert_eq!(
        get_shape(PieceKind::T, Rotation::East),
        [(0, 0), (0, -1), (0, 1), (-1, 0)]
    );
    assert_eq!(
        get_shape(PieceKind::T, Rotation::South),
        [(0, 0), (-1, 0), (1, 0), (0, -1)]
    );
    assert_eq!(
        get_shape(PieceKind::T, Rotation::West),
        [(0, 0), (0, -1), (0, 1), (1, 0)]
    );
}

#[test]
fn test_s_and_z_alternate() {
    for kind in [PieceKind::S, PieceKind::Z] {
        assert_eq!(
            get_shape(kind, Rotation::North),
            get_shape(kind, Rotation::South)
        );
        assert_eq!(
            get_shape(kind, Rotation::East),
            get_shape(kind, Rotation::West)
        );
        assert_ne!(
            get_shape(kind, Rotation::North),
            get_shape(kind, Rotation::East)
        );
    }
    assert_eq!(
        get_shape(PieceKind::S, Rotation::North),
        [(0, 0), (0, -1), (1, -1), (-1, 0)]
    );
    assert_eq!(
        get_shape(PieceKind::Z, Rotation::East),
        [(0, 0), (0, -1), (1, -1), (1, 0)]
    );
}

#[test]
fn test_j_and_l_have_four_distinct_states() {
    for kind in [PieceKind::J, PieceKind::L] {
        let states = shape_of(kind).all_cells();
        for a in 0..4 {
            for b in (a + 1)..4 {
                assert_ne!(states[a], states[b], "{:?} states {} and {}", kind, a, b);
            }
        }
    }
    assert_eq!(
        get_shape(PieceKind::J, Rotation::North),
        [(0, 0), (-1, 0), (1, 0), (-1, -1)]
    );
    assert_eq!(
        get_shape(PieceKind::L, Rotation::South),
        [(0, 0), (-1, 0), (1, 0), (-1, 1)]
    );
}

// ============== Rotation Index ==============

#[test]
fn test_rotation_state_matches_typed_lookup() {
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            assert_eq!(
                rotation_state(kind, rotation.index()),
                Ok(get_shape(kind, rotation))
            );
        }
    }
}

#[test]
fn test_rotation_state_rejects_unwrapped_index() {
    assert_eq!(
        rotation_state(PieceKind::J, 4),
        Err(ConfigError::RotationOutOfRange(4))
    );
    // Callers wrap first
    let wrapped = Rotation::from_index_wrapping(4);
    assert_eq!(
        rotation_state(PieceKind::J, wrapped.index()),
        rotation_state(PieceKind::J, 0)
    );
}

// ============== Spawn ==============

#[test]
fn test_spawn_position() {
    assert_eq!(spawn_position(), (4, 1));
    assert_eq!(SPAWN_POSITION, (4, 1));
}

#[test]
fn test_spawn_shape_is_state_zero() {
    for kind in PieceKind::ALL {
        assert_eq!(get_spawn_shape(kind), get_shape(kind, Rotation::North));
    }
}

#[test]
fn test_spawn_cells_stay_on_board() {
    for kind in PieceKind::ALL {
        for (x, y) in spawn_cells(kind) {
            assert!((0..10).contains(&x), "{:?} spawns at x={}", kind, x);
            assert!(y >= 0, "{:?} spawns above the board at y={}", kind, y);
        }
    }
}

#[test]
fn test_cells_at_translates_offsets() {
    assert_eq!(
        cells_at(PieceKind::T, Rotation::South, 2, 5),
        [(2, 5), (1, 5), (3, 5), (2, 4)]
    );
}

#[test]
fn test_cells_at_origin_at_coordinate_limits() {
    assert_eq!(
        cells_at(PieceKind::I, Rotation::East, i8::MAX, 0),
        [(126, 0), (127, 0), (128, 0), (129, 0)]
    );
    assert_eq!(
        cells_at(PieceKind::I, Rotation::North, 0, i8::MIN),
        [(0, -129), (0, -128), (0, -127), (0, -126)]
    );
    assert_eq!(
        cells_at(PieceKind::O, Rotation::North, i8::MAX, i8::MAX),
        [(127, 127), (128, 127), (127, 128), (128, 128)]
    );
}
