//! Run-length wall codec. A decimal run counts consecutive present walls; a
//! letter `a`-`z` is a run of `letter - 'a' + 1` absent walls, and every
//! letter below `z` additionally stands for one present wall after its run.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::*;

/// Checks that `desc` is well formed and decodes to exactly `wall_count`
/// wall states.
///
/// A trailing letter below `z` has no wall left to stand for; the overcount
/// of one is forgiven only in that position.
pub fn validate_descriptor(desc: &str, wall_count: usize) -> Result<()> {
    let bytes = desc.as_bytes();
    let mut decoded = 0usize;
    let mut pos = 0;
    while pos < bytes.len() {
        let c = bytes[pos];
        if c.is_ascii_digit() {
            let mut run = 0usize;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                run = run
                    .saturating_mul(10)
                    .saturating_add(usize::from(bytes[pos] - b'0'));
                pos += 1;
            }
            decoded = decoded.saturating_add(run);
        } else if c.is_ascii_lowercase() {
            decoded = decoded
                .saturating_add(usize::from(c - b'a') + 1)
                .saturating_add(usize::from(c != b'z'));
            pos += 1;
            if pos == bytes.len() && decoded == wall_count + 1 {
                decoded -= 1;
            }
        } else {
            return Err(PuzzleError::FaultyDescriptor);
        }
    }
    if decoded < wall_count {
        return Err(PuzzleError::TooFewWalls);
    }
    if decoded > wall_count {
        return Err(PuzzleError::TooManyWalls);
    }
    Ok(())
}

/// Decodes `desc` into per-segment present flags of length `wall_count`.
pub fn decode_walls(desc: &str, wall_count: usize) -> Result<Vec<bool>> {
    validate_descriptor(desc, wall_count)?;

    let bytes = desc.as_bytes();
    let mut walls = vec![false; wall_count];
    let mut next = 0usize;
    let mut pos = 0;
    while pos < bytes.len() {
        let c = bytes[pos];
        if c.is_ascii_digit() {
            let mut run = 0usize;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                run = run
                    .saturating_mul(10)
                    .saturating_add(usize::from(bytes[pos] - b'0'));
                pos += 1;
            }
            for _ in 0..run {
                walls[next] = true;
                next += 1;
            }
        } else {
            for _ in 0..usize::from(c - b'a') + 1 {
                walls[next] = false;
                next += 1;
            }
            if c != b'z' && next < wall_count {
                walls[next] = true;
                next += 1;
            }
            pos += 1;
        }
    }
    debug_assert_eq!(next, wall_count);
    Ok(walls)
}

/// Encodes per-segment present flags into a descriptor string.
pub fn encode_walls(walls: &[bool]) -> String {
    let mut desc = String::new();
    let mut wrun: i32 = 0;
    let mut erun: i32 = 0;
    for &present in walls {
        if !present && wrun > 0 {
            desc.push_str(&wrun.to_string());
            wrun = 0;
            erun = 0;
        } else if present && erun > 0 {
            while erun >= 26 {
                desc.push('z');
                erun -= 26;
            }
            if erun == 0 {
                wrun = 0;
            } else {
                desc.push((b'a' + erun as u8 - 1) as char);
                erun = 0;
                // the present wall that ends the run is implied by the letter
                wrun = -1;
            }
        }
        if present {
            wrun += 1;
        } else {
            erun += 1;
        }
    }
    if wrun > 0 {
        desc.push_str(&wrun.to_string());
    }
    while erun >= 26 {
        desc.push('z');
        erun -= 26;
    }
    if erun > 0 {
        desc.push((b'a' + erun as u8 - 1) as char);
    }
    desc
}
