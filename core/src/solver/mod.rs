use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

pub use connectivity::*;

mod connectivity;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Solvable,
    Unsolvable,
    Ambiguous,
}

impl Verdict {
    pub const fn is_solvable(self) -> bool {
        matches!(self, Self::Solvable)
    }
}

/// Tri-state propagation value carried per wall segment while solving.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WallState {
    /// No wall; the path crosses here or exits the grid here.
    Connected,
    /// Wall present; the path never crosses here.
    Disconnected,
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolveOutput {
    pub verdict: Verdict,
    /// Per-cell candidate masks after propagation; exactly two bits each
    /// when the verdict is [`Verdict::Solvable`].
    pub lines: Vec<DirSet>,
}

/// Runs constraint propagation to a fixpoint over the given wall layout and
/// judges the outcome. `walls[i]` marks segment `i` as a present wall.
///
/// Propagation is purely local; a configuration whose solution requires
/// global case-splitting comes back [`Verdict::Ambiguous`].
pub fn solve(size: Coord2, walls: &[bool]) -> SolveOutput {
    use WallState::*;

    debug_assert_eq!(walls.len(), wall_count(size));
    let wh = cell_count(size);

    let mut lines = vec![DirSet::all(); wh];
    let mut states: Vec<WallState> = walls
        .iter()
        .map(|&present| if present { Disconnected } else { Unknown })
        .collect();

    let mut sweeps = 0u32;
    loop {
        let mut changed = false;
        for cell in 0..wh {
            let wall_at = |dir: Direction| cell_to_wall(cell, size, dir);

            // A severed wall rules its direction out of the cell.
            for dir in Direction::ALL {
                if states[wall_at(dir)] == Disconnected && lines[cell].contains(dir.mask()) {
                    lines[cell] -= dir.mask();
                    changed = true;
                }
            }

            // A direction ruled out severs its wall.
            for dir in Direction::ALL {
                let wall = wall_at(dir);
                if states[wall] == Unknown && !lines[cell].contains(dir.mask()) {
                    states[wall] = Disconnected;
                    changed = true;
                }
            }

            // A mask collapsed to one pair forces all four walls.
            for pair in LINE_PAIRS {
                let mask = pair[0].mask() | pair[1].mask();
                if lines[cell] != mask {
                    continue;
                }
                for dir in Direction::ALL {
                    let wall = wall_at(dir);
                    let want = if mask.contains(dir.mask()) {
                        Connected
                    } else {
                        Disconnected
                    };
                    if states[wall] != want {
                        states[wall] = want;
                        changed = true;
                    }
                }
            }

            // Two connected walls force the cell onto that pair.
            for pair in LINE_PAIRS {
                let mask = pair[0].mask() | pair[1].mask();
                if states[wall_at(pair[0])] == Connected
                    && states[wall_at(pair[1])] == Connected
                    && lines[cell] != mask
                {
                    lines[cell] = mask;
                    changed = true;
                }
            }
        }
        sweeps += 1;
        if !changed {
            break;
        }
    }
    log::trace!("propagation reached a fixpoint after {} sweeps", sweeps);

    let verdict = assess(size, &lines);
    SolveOutput { verdict, lines }
}

/// Judges the post-fixpoint masks in cell order: an empty or one-bit mask is
/// a contradiction, an underdetermined mask leaves the puzzle ambiguous, and
/// fully collapsed masks are handed to the connectivity check.
fn assess(size: Coord2, lines: &[DirSet]) -> Verdict {
    for &mask in lines {
        match mask.count() {
            2 => {}
            0 | 1 => return Verdict::Unsolvable,
            _ => return Verdict::Ambiguous,
        }
    }
    check_assignment(size, lines)
}
