use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

pub use backbite::*;

mod backbite;

/// Strategy for producing a puzzle from a configuration.
pub trait PuzzleGenerator {
    fn generate(self, config: PuzzleConfig) -> GeneratedPuzzle;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    pub layout: WallLayout,
    pub descriptor: String,
}
