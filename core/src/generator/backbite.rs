use alloc::vec;
use alloc::vec::Vec;
use rand::prelude::*;

use crate::*;

/// Builds puzzles by folding a random self-avoiding walk until it covers the
/// whole grid, then pruning walls down to a minimal uniquely solvable clue
/// set. Reproducible: the same seed and configuration yield the same puzzle.
///
/// The folding phase has no hard iteration bound; callers that need bounded
/// latency should impose an external limit and retry with a fresh seed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BackbiteGenerator {
    seed: u64,
}

impl BackbiteGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl PuzzleGenerator for BackbiteGenerator {
    fn generate(self, config: PuzzleConfig) -> GeneratedPuzzle {
        let size = config.size;
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let path = FoldingPath::generate(size, &mut rng);
        let mut walls = path.to_walls();
        minimize_clues(size, &mut walls, &mut rng);

        let descriptor = encode_walls(&walls);
        let layout = WallLayout::new_unchecked(config, walls);
        GeneratedPuzzle { layout, descriptor }
    }
}

fn random_direction(rng: &mut SmallRng) -> Direction {
    Direction::ALL[rng.random_range(0..Direction::ALL.len())]
}

/// Greedily clears present walls in a shuffled order, keeping each removal
/// only while the remaining clues still solve uniquely. Single pass; the
/// result is minimal for the chosen order, not globally.
fn minimize_clues(size: Coord2, walls: &mut [bool], rng: &mut SmallRng) {
    let mut candidates: Vec<usize> = (0..walls.len()).filter(|&wall| walls[wall]).collect();
    candidates.shuffle(rng);

    let total = candidates.len();
    let mut removed = 0;
    for wall in candidates {
        walls[wall] = false;
        if solve(size, walls).verdict.is_solvable() {
            removed += 1;
        } else {
            walls[wall] = true;
        }
    }
    log::debug!("clue minimization kept {} of {} walls", total - removed, total);
}

/// Self-avoiding walk over the grid, grown and folded one backbite move at a
/// time. Stored as a flat coordinate sequence; growing the head reverses the
/// walk first so that both ends append at the back.
struct FoldingPath {
    size: Coord2,
    cells: Vec<(i32, i32)>,
}

impl FoldingPath {
    /// Folds a random walk until it visits every cell once, then keeps
    /// folding each end until both endpoints sit on the grid boundary.
    fn generate(size: Coord2, rng: &mut SmallRng) -> Self {
        let (w, h) = (i32::from(size.0), i32::from(size.1));
        let total = cell_count(size);

        let start = (rng.random_range(0..w), rng.random_range(0..h));
        let mut cells = Vec::with_capacity(total);
        cells.push(start);
        let mut path = Self { size, cells };

        let mut steps = 0u64;
        while path.cells.len() < total {
            if rng.random_range(0..2) == 0 {
                path.backbite_head(random_direction(rng));
            } else {
                path.backbite_tail(random_direction(rng));
            }
            steps += 1;
        }
        while !path.on_boundary(path.cells[0]) {
            path.backbite_head(random_direction(rng));
            steps += 1;
        }
        while !path.on_boundary(path.cells[path.cells.len() - 1]) {
            path.backbite_tail(random_direction(rng));
            steps += 1;
        }
        log::debug!(
            "hamiltonian path covered {}x{} after {} backbite steps",
            w,
            h,
            steps
        );
        path
    }

    /// One backbite move at the head. Stepping into a cell already on the
    /// walk folds the leading segment back; stepping onto a fresh cell
    /// extends the walk. Off-grid steps do nothing.
    fn backbite_head(&mut self, step: Direction) {
        let (dx, dy) = step.delta();
        let (hx, hy) = self.cells[0];
        let next = (hx + dx, hy + dy);
        if !self.in_bounds(next) {
            return;
        }
        // The walk alternates cell parity, so a revisited neighbor of the
        // head can only sit at an odd offset from it.
        let n = self.cells.len();
        if let Some(fold) = (1..n).step_by(2).find(|&i| self.cells[i] == next) {
            self.cells[..fold].reverse();
        } else {
            self.cells.reverse();
            self.cells.push(next);
        }
    }

    /// One backbite move at the tail; mirror image of [`Self::backbite_head`].
    fn backbite_tail(&mut self, step: Direction) {
        let (dx, dy) = step.delta();
        let n = self.cells.len();
        let (tx, ty) = self.cells[n - 1];
        let next = (tx + dx, ty + dy);
        if !self.in_bounds(next) {
            return;
        }
        if let Some(fold) = (0..n - 1).rev().step_by(2).find(|&i| self.cells[i] == next) {
            self.cells[fold + 1..].reverse();
        } else {
            self.cells.push(next);
        }
    }

    fn in_bounds(&self, (x, y): (i32, i32)) -> bool {
        x >= 0 && x < i32::from(self.size.0) && y >= 0 && y < i32::from(self.size.1)
    }

    fn on_boundary(&self, (x, y): (i32, i32)) -> bool {
        x == 0 || x == i32::from(self.size.0) - 1 || y == 0 || y == i32::from(self.size.1) - 1
    }

    /// Derives the full wall layout: every segment present except the ones
    /// between consecutive walk cells and the two boundary exits.
    fn to_walls(&self) -> Vec<bool> {
        let size = self.size;
        let w = usize::from(size.0);
        let mut walls = vec![true; wall_count(size)];

        for (n, &(x, y)) in self.cells.iter().enumerate() {
            let cell = y as usize * w + x as usize;

            if let Some(&(nx, ny)) = self.cells.get(n + 1) {
                let step = if nx - x == 1 {
                    Direction::Right
                } else if nx - x == -1 {
                    Direction::Left
                } else if ny - y == 1 {
                    Direction::Down
                } else {
                    Direction::Up
                };
                walls[cell_to_wall(cell, size, step)] = false;
            }

            if n == 0 || n == self.cells.len() - 1 {
                let exit = if x == 0 {
                    Some(Direction::Left)
                } else if x == i32::from(size.0) - 1 {
                    Some(Direction::Right)
                } else if y == 0 {
                    Some(Direction::Up)
                } else if y == i32::from(size.1) - 1 {
                    Some(Direction::Down)
                } else {
                    None
                };
                if let Some(exit) = exit {
                    walls[cell_to_wall(cell, size, exit)] = false;
                }
            }
        }
        walls
    }
}
