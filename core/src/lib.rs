#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use descriptor::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use solver::*;
pub use types::*;

mod descriptor;
mod engine;
mod error;
mod generator;
mod grid;
mod solver;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub size: Coord2,
    pub difficulty: Difficulty,
}

impl PuzzleConfig {
    pub const PRESETS: [PuzzleConfig; 2] = [
        Self::new_unchecked((5, 4), Difficulty::Easy),
        Self::new_unchecked((4, 5), Difficulty::Easy),
    ];

    pub const fn new_unchecked(size: Coord2, difficulty: Difficulty) -> Self {
        Self { size, difficulty }
    }

    pub fn new((size_x, size_y): Coord2, difficulty: Difficulty) -> Self {
        let size_x = size_x.clamp(2, Coord::MAX);
        let size_y = size_y.clamp(2, Coord::MAX);
        Self::new_unchecked((size_x, size_y), difficulty)
    }

    pub const fn cell_count(&self) -> usize {
        grid::cell_count(self.size)
    }

    pub const fn wall_count(&self) -> usize {
        grid::wall_count(self.size)
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::PRESETS[0]
    }
}

impl fmt::Display for PuzzleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}d{}",
            self.size.0,
            self.size.1,
            self.difficulty.key()
        )
    }
}

/// Parses the textual parameter format `<w>[x<h>][d<difficulty>]`, e.g.
/// `"5x4dt"`. A missing height copies the width; an unknown difficulty key
/// falls back to easy.
impl FromStr for PuzzleConfig {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        fn number(bytes: &[u8], pos: &mut usize) -> Option<Coord> {
            let start = *pos;
            let mut value = 0usize;
            while let Some(c) = bytes.get(*pos).filter(|c| c.is_ascii_digit()) {
                value = value
                    .saturating_mul(10)
                    .saturating_add(usize::from(c - b'0'));
                *pos += 1;
            }
            (*pos > start).then(|| value.min(usize::from(Coord::MAX)) as Coord)
        }

        let bytes = s.as_bytes();
        let mut pos = 0;
        let Some(size_x) = number(bytes, &mut pos) else {
            return Err(PuzzleError::InvalidSize);
        };
        let mut size_y = size_x;
        if bytes.get(pos) == Some(&b'x') {
            pos += 1;
            let Some(parsed) = number(bytes, &mut pos) else {
                return Err(PuzzleError::InvalidSize);
            };
            size_y = parsed;
        }
        let mut difficulty = Difficulty::Easy;
        if bytes.get(pos) == Some(&b'd') {
            pos += 1;
            if let Some(&key) = bytes.get(pos) {
                if let Some(parsed) = Difficulty::from_key(key as char) {
                    difficulty = parsed;
                }
            }
        }
        if size_x < 2 || size_y < 2 {
            return Err(PuzzleError::InvalidSize);
        }
        Ok(Self::new_unchecked((size_x, size_y), difficulty))
    }
}

/// Immutable clue set of one puzzle: dimensions plus the fixed wall
/// segments. Shared across player-state snapshots behind a refcounted
/// handle; see [`PlayState`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallLayout {
    config: PuzzleConfig,
    fixed: Vec<bool>,
}

impl WallLayout {
    pub fn from_fixed_walls(config: PuzzleConfig, fixed: Vec<bool>) -> Result<Self> {
        if fixed.len() != config.wall_count() {
            return Err(PuzzleError::InvalidWallCount);
        }
        Ok(Self { config, fixed })
    }

    pub fn from_descriptor(config: PuzzleConfig, desc: &str) -> Result<Self> {
        let fixed = decode_walls(desc, config.wall_count())?;
        Ok(Self { config, fixed })
    }

    pub(crate) fn new_unchecked(config: PuzzleConfig, fixed: Vec<bool>) -> Self {
        Self { config, fixed }
    }

    pub fn descriptor(&self) -> String {
        encode_walls(&self.fixed)
    }

    pub fn config(&self) -> PuzzleConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn cell_count(&self) -> usize {
        self.config.cell_count()
    }

    pub fn wall_count(&self) -> usize {
        self.config.wall_count()
    }

    pub fn is_fixed(&self, wall: usize) -> bool {
        self.fixed[wall]
    }

    pub fn fixed_walls(&self) -> &[bool] {
        &self.fixed
    }

    pub fn solve(&self) -> SolveOutput {
        solve(self.size(), &self.fixed)
    }
}

impl Index<usize> for WallLayout {
    type Output = bool;

    fn index(&self, wall: usize) -> &Self::Output {
        &self.fixed[wall]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn parameter_string_round_trips() {
        let config: PuzzleConfig = "5x4dt".parse().unwrap();
        assert_eq!(config.size, (5, 4));
        assert_eq!(config.difficulty, Difficulty::Tricky);
        assert_eq!(config.to_string(), "5x4dt");
        assert_eq!(config.to_string().parse(), Ok(config));
    }

    #[test]
    fn missing_parts_fall_back_to_defaults() {
        let square: PuzzleConfig = "6".parse().unwrap();
        assert_eq!(square.size, (6, 6));
        assert_eq!(square.difficulty, Difficulty::Easy);

        let unknown_key: PuzzleConfig = "4x5dq".parse().unwrap();
        assert_eq!(unknown_key.difficulty, Difficulty::Easy);
    }

    #[test]
    fn undersized_grids_are_rejected() {
        assert_eq!(
            "1x5".parse::<PuzzleConfig>(),
            Err(PuzzleError::InvalidSize)
        );
        assert_eq!("x".parse::<PuzzleConfig>(), Err(PuzzleError::InvalidSize));
        assert_eq!(
            PuzzleConfig::new((0, 9), Difficulty::Hard).size,
            (2, 9)
        );
    }

    #[test]
    fn default_config_is_the_first_preset() {
        assert_eq!(PuzzleConfig::default(), PuzzleConfig::PRESETS[0]);
        assert_eq!(PuzzleConfig::default().wall_count(), 5 * 6 + 6 * 4);
    }

    #[test]
    fn config_survives_json() {
        let config = PuzzleConfig::new((7, 3), Difficulty::Hard);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<PuzzleConfig>(&json).unwrap(), config);
    }

    #[test]
    fn layout_rejects_mismatched_wall_arrays() {
        let config = PuzzleConfig::new((2, 2), Difficulty::Easy);
        assert_eq!(
            WallLayout::from_fixed_walls(config, vec![true; 5]),
            Err(PuzzleError::InvalidWallCount)
        );
    }

    #[test]
    fn layout_round_trips_through_its_descriptor() {
        let config = PuzzleConfig::new((2, 2), Difficulty::Easy);
        let mut fixed = vec![true; config.wall_count()];
        for open in [0, 1, 3, 4, 9] {
            fixed[open] = false;
        }
        let layout = WallLayout::from_fixed_walls(config, fixed).unwrap();
        let restored = WallLayout::from_descriptor(config, &layout.descriptor()).unwrap();
        assert_eq!(restored, layout);
    }
}
