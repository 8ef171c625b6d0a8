use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    NoChange,
    Changed,
    Solved,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Mutable player view of one puzzle. The clue layout is immutable and
/// shared; cloning a `PlayState` snapshots the mutable arrays while keeping
/// the same clue handle, which is what undo/redo stacks rely on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayState {
    clues: Arc<WallLayout>,
    lines: Vec<DirSet>,
    walls: Vec<bool>,
    errors: Vec<DirSet>,
    completed: bool,
    used_solve: bool,
}

impl PlayState {
    pub fn new(clues: Arc<WallLayout>) -> Self {
        let wh = clues.cell_count();
        let walls = clues.fixed_walls().to_vec();
        Self {
            clues,
            lines: vec![DirSet::empty(); wh],
            walls,
            errors: vec![DirSet::empty(); wh],
            completed: false,
            used_solve: false,
        }
    }

    pub fn clues(&self) -> &Arc<WallLayout> {
        &self.clues
    }

    pub fn config(&self) -> PuzzleConfig {
        self.clues.config()
    }

    pub fn size(&self) -> Coord2 {
        self.clues.size()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn used_solve(&self) -> bool {
        self.used_solve
    }

    pub fn line_at(&self, cell: usize) -> DirSet {
        self.lines[cell]
    }

    pub fn wall_at(&self, wall: usize) -> bool {
        self.walls[wall]
    }

    /// Line bits of `cell` that currently cross a present wall.
    pub fn errors_at(&self, cell: usize) -> DirSet {
        self.errors[cell]
    }

    /// Adds or removes a player wall. Fixed clue walls refuse.
    pub fn toggle_wall(&mut self, wall: usize) -> Result<MoveOutcome> {
        if wall >= self.clues.wall_count() {
            return Err(PuzzleError::InvalidCoords);
        }
        if self.clues.is_fixed(wall) {
            return Err(PuzzleError::FixedWall);
        }
        self.walls[wall] = !self.walls[wall];
        self.refresh();
        Ok(self.move_outcome())
    }

    /// Toggles the line leaving `cell` towards `dir`, mirroring the opposite
    /// bit onto the neighbor cell when there is one. Drawing through a
    /// present wall is refused as a no-op.
    pub fn toggle_line(&mut self, cell: usize, dir: Direction) -> Result<MoveOutcome> {
        if cell >= self.clues.cell_count() {
            return Err(PuzzleError::InvalidCoords);
        }
        let size = self.size();
        let wall = cell_to_wall(cell, size, dir);
        if self.walls[wall] {
            return Ok(MoveOutcome::NoChange);
        }
        self.lines[cell] ^= dir.mask();
        if let Some(neighbor) = wall_to_cell(wall, size, dir.opposite()) {
            self.lines[neighbor] ^= dir.opposite().mask();
        }
        self.refresh();
        Ok(self.move_outcome())
    }

    /// Replaces the player lines with the solver's solution for the clue
    /// walls. Leaves the state untouched when the clues do not solve.
    pub fn apply_solution(&mut self) -> Verdict {
        let out = self.clues.solve();
        if out.verdict.is_solvable() {
            self.lines = out.lines;
            self.used_solve = true;
            self.refresh();
        }
        out.verdict
    }

    /// Renders the board as ASCII art: `-` and `|` for walls, `*` for lines.
    pub fn text_diagram(&self) -> String {
        let (w, h) = (usize::from(self.size().0), usize::from(self.size().1));
        let vs = vertical_wall_count(self.size());
        let mut out = String::new();

        for y in 0..h {
            for x in 0..w {
                let is_wall = self.walls[vs + y * w + x];
                let is_line = self.lines[y * w + x].contains(DirSet::U);
                out.push('+');
                out.push(if is_wall { '-' } else { ' ' });
                out.push(if is_line {
                    '*'
                } else if is_wall {
                    '-'
                } else {
                    ' '
                });
                out.push(if is_wall { '-' } else { ' ' });
            }
            out.push('+');
            out.push('\n');

            for x in 0..w {
                let cell = y * w + x;
                let is_wall = self.walls[y * (w + 1) + x];
                let left = self.lines[cell].contains(DirSet::L);
                let right = self.lines[cell].contains(DirSet::R);
                out.push(if left {
                    '*'
                } else if is_wall {
                    '|'
                } else {
                    ' '
                });
                out.push(if left { '*' } else { ' ' });
                out.push(if self.lines[cell].is_empty() { ' ' } else { '*' });
                out.push(if right { '*' } else { ' ' });
            }
            let is_wall = self.walls[y * (w + 1) + w];
            let right = self.lines[y * w + w - 1].contains(DirSet::R);
            out.push(if right {
                '*'
            } else if is_wall {
                '|'
            } else {
                ' '
            });
            out.push('\n');
        }

        for x in 0..w {
            let is_wall = self.walls[vs + w * h + x];
            let is_line = self.lines[(h - 1) * w + x].contains(DirSet::D);
            out.push('+');
            out.push(if is_wall { '-' } else { ' ' });
            out.push(if is_line {
                '*'
            } else if is_wall {
                '-'
            } else {
                ' '
            });
            out.push(if is_wall { '-' } else { ' ' });
        }
        out.push('+');
        out.push('\n');
        out
    }

    fn move_outcome(&self) -> MoveOutcome {
        if self.completed {
            MoveOutcome::Solved
        } else {
            MoveOutcome::Changed
        }
    }

    fn refresh(&mut self) {
        self.update_errors();
        self.completed = self.errors.iter().all(|conflict| conflict.is_empty())
            && check_assignment(self.size(), &self.lines).is_solvable();
    }

    fn update_errors(&mut self) {
        let size = self.size();
        for cell in 0..self.clues.cell_count() {
            let mut conflict = DirSet::empty();
            for dir in Direction::ALL {
                if self.lines[cell].contains(dir.mask())
                    && self.walls[cell_to_wall(cell, size, dir)]
                {
                    conflict |= dir.mask();
                }
            }
            self.errors[cell] = conflict;
        }
    }
}
