//! Flat wall-segment numbering for a `w x h` grid: all vertical segments
//! first (`w + 1` per row, row-major), then all horizontal segments (`w` per
//! row boundary, row-major).

use crate::*;

pub const fn cell_count(size: Coord2) -> usize {
    size.0 as usize * size.1 as usize
}

/// Number of vertical wall segments; horizontal segments start at this index.
pub const fn vertical_wall_count(size: Coord2) -> usize {
    (size.0 as usize + 1) * size.1 as usize
}

pub const fn wall_count(size: Coord2) -> usize {
    let (w, h) = (size.0 as usize, size.1 as usize);
    (w + 1) * h + w * (h + 1)
}

/// Index of the wall segment on the `dir` side of `cell`.
///
/// `cell` must be in bounds; out-of-range input is a caller error.
pub fn cell_to_wall(cell: usize, size: Coord2, dir: Direction) -> usize {
    let (w, h) = (usize::from(size.0), usize::from(size.1));
    debug_assert!(cell < cell_count(size));
    let x = cell % w;
    let y = cell / w;
    match dir {
        Direction::Left => (w + 1) * y + x,
        Direction::Right => (w + 1) * y + x + 1,
        Direction::Up => (w + 1) * h + w * y + x,
        Direction::Down => (w + 1) * h + w * y + x + w,
    }
}

/// Index of the cell whose `dir` wall is `wall`, or `None` when that side of
/// the wall lies outside the grid (a boundary wall) or `dir` runs along the
/// wrong axis for this segment.
///
/// Inverse of [`cell_to_wall`]: `wall_to_cell(cell_to_wall(c, d), size, d)`
/// is `Some(c)` for every in-bounds `(c, d)`. `wall` must be in bounds;
/// out-of-range input is a caller error.
pub fn wall_to_cell(wall: usize, size: Coord2, dir: Direction) -> Option<usize> {
    let (w, h) = (usize::from(size.0), usize::from(size.1));
    debug_assert!(wall < wall_count(size));
    let vs = vertical_wall_count(size);
    if wall < vs {
        let x = wall % (w + 1);
        let y = wall / (w + 1);
        match dir {
            Direction::Right if x > 0 => Some(y * w + x - 1),
            Direction::Left if x < w => Some(y * w + x),
            _ => None,
        }
    } else {
        let x = (wall - vs) % w;
        let y = (wall - vs) / w;
        match dir {
            Direction::Down if y > 0 => Some((y - 1) * w + x),
            Direction::Up if y < h => Some(y * w + x),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_count_matches_formula() {
        assert_eq!(wall_count((2, 2)), 12);
        assert_eq!(wall_count((5, 4)), 5 * 6 + 6 * 4);
        assert_eq!(vertical_wall_count((5, 4)), 24);
    }

    #[test]
    fn cell_to_wall_and_back_are_mutual_inverses() {
        for size in [(2, 2), (5, 4), (3, 7)] {
            for cell in 0..cell_count(size) {
                for dir in Direction::ALL {
                    let wall = cell_to_wall(cell, size, dir);
                    assert!(wall < wall_count(size));
                    assert_eq!(wall_to_cell(wall, size, dir), Some(cell));
                }
            }
        }
    }

    #[test]
    fn adjacent_cells_share_one_wall() {
        let size = (4, 3);
        let w = usize::from(size.0);
        for cell in 0..cell_count(size) {
            if cell % w + 1 < w {
                assert_eq!(
                    cell_to_wall(cell, size, Direction::Right),
                    cell_to_wall(cell + 1, size, Direction::Left)
                );
            }
            if cell / w + 1 < usize::from(size.1) {
                assert_eq!(
                    cell_to_wall(cell, size, Direction::Down),
                    cell_to_wall(cell + w, size, Direction::Up)
                );
            }
        }
    }

    #[test]
    fn crossing_the_boundary_yields_no_cell() {
        let size = (3, 3);
        // Left wall of the top-left cell has no cell on its outer side.
        let wall = cell_to_wall(0, size, Direction::Left);
        assert_eq!(wall_to_cell(wall, size, Direction::Right), None);
        // Bottom wall of the last cell, likewise.
        let last = cell_count(size) - 1;
        let wall = cell_to_wall(last, size, Direction::Down);
        assert_eq!(wall_to_cell(wall, size, Direction::Down), Some(last));
        assert_eq!(wall_to_cell(wall, size, Direction::Up), None);
    }

    #[test]
    fn axis_mismatch_yields_no_cell() {
        let size = (3, 3);
        let vertical = cell_to_wall(4, size, Direction::Left);
        assert_eq!(wall_to_cell(vertical, size, Direction::Up), None);
        assert_eq!(wall_to_cell(vertical, size, Direction::Down), None);
        let horizontal = cell_to_wall(4, size, Direction::Up);
        assert_eq!(wall_to_cell(horizontal, size, Direction::Left), None);
        assert_eq!(wall_to_cell(horizontal, size, Direction::Right), None);
    }
}
