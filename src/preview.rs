//! ASCII grids for eyeballing rotation states.
//!
//! `@` marks the pivot, `#` the other cells, `.` empty space. All states of a
//! piece share one bounding box so they line up side by side.

use crate::core::ShapeDefinition;
use crate::types::{PieceShape, Rotation};

const PIVOT: char = '@';
const FILLED: char = '#';
const EMPTY: char = '.';

/// Inclusive `(min_x, max_x, min_y, max_y)` over the given shapes and the pivot
fn bounds<'a>(shapes: impl IntoIterator<Item = &'a PieceShape>) -> (i8, i8, i8, i8) {
    let mut b = (0, 0, 0, 0);
    for &(x, y) in shapes.into_iter().flatten() {
        b.0 = b.0.min(x);
        b.1 = b.1.max(x);
        b.2 = b.2.min(y);
        b.3 = b.3.max(y);
    }
    b
}

fn render_in(shape: &PieceShape, (min_x, max_x, min_y, max_y): (i8, i8, i8, i8)) -> Vec<String> {
    (min_y..=max_y)
        .map(|y| {
            (min_x..=max_x)
                .map(|x| match (x, y) {
                    _ if !shape.contains(&(x, y)) => EMPTY,
                    (0, 0) => PIVOT,
                    _ => FILLED,
                })
                .collect::<String>()
        })
        .collect()
}

/// One rotation state as grid rows, top row first
pub fn render_shape(shape: &PieceShape) -> Vec<String> {
    render_in(shape, bounds([shape]))
}

/// All four rotation states side by side, separated by `gap` spaces
pub fn render_rotations(def: &ShapeDefinition, gap: usize) -> Vec<String> {
    let shapes = def.all_cells();
    let b = bounds(&shapes);
    let grids: Vec<Vec<String>> = shapes.iter().map(|s| render_in(s, b)).collect();
    let sep = " ".repeat(gap);

    (0..grids[0].len())
        .map(|row| {
            grids
                .iter()
                .map(|g| g[row].as_str())
                .collect::<Vec<_>>()
                .join(&sep)
        })
        .collect()
}

/// Header labels matching [`render_rotations`] column widths
pub fn rotation_labels(def: &ShapeDefinition, gap: usize) -> String {
    let shapes = def.all_cells();
    let (min_x, max_x, _, _) = bounds(&shapes);
    let width = (max_x - min_x + 1) as usize;
    let sep = " ".repeat(gap);

    Rotation::ALL
        .iter()
        .map(|r| {
            let label = r.index().to_string();
            format!("{:<width$}", label, width = width)
        })
        .collect::<Vec<_>>()
        .join(&sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shape_of;
    use crate::types::PieceKind;

    #[test]
    fn t_pointing_down() {
        let shape = crate::core::get_shape(PieceKind::T, Rotation::North);
        assert_eq!(render_shape(&shape), vec!["#@#", ".#."]);
    }

    #[test]
    fn o_square() {
        let shape = crate::core::get_shape(PieceKind::O, Rotation::North);
        assert_eq!(render_shape(&shape), vec!["@#", "##"]);
    }

    #[test]
    fn i_rotations_share_a_box() {
        let rows = render_rotations(shape_of(PieceKind::I), 2);
        assert_eq!(
            rows,
            vec![
                ".#..  ....  .#..  ....",
                ".@..  #@##  .@..  #@##",
                ".#..  ....  .#..  ....",
                ".#..  ....  .#..  ....",
            ]
        );
        assert_eq!(rotation_labels(shape_of(PieceKind::I), 2), "0     1     2     3   ");
    }
}
