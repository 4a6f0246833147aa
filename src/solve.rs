use serde::{Deserialize, Serialize};

use crate::engine::layered_frames;
use crate::frame::Frame;
use crate::pattern::PatternIndex;
use crate::reconstruct::shortest_paths;

/// Outcome classification for one solver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    /// The end word was reached; `paths` holds every shortest ladder.
    Found,
    /// The frontier drained without reaching the end word.
    NoPath,
    /// Begin and end words differ in length; no frames were produced.
    LengthMismatch,
}

/// Complete result of one solver run over a fixed input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub status: SolveStatus,
    pub frames: Vec<Frame>,
    pub paths: Vec<Vec<String>>,
}

/// Solve the word ladder for `begin` -> `end` over `words`.
///
/// Pure function of its inputs: the pattern index, frame sequence and
/// path list are rebuilt from scratch on every call, so a host reacts to
/// any input change by calling again and dropping the old result. Paths
/// are materialized only when the final frame reports the end word.
pub fn solve<I, S>(begin: &str, end: &str, words: I) -> Solution
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if begin.chars().count() != end.chars().count() {
        return Solution {
            status: SolveStatus::LengthMismatch,
            frames: Vec::new(),
            paths: Vec::new(),
        };
    }

    let index = PatternIndex::build(begin, words);
    let frames = layered_frames(begin, end, &index);
    let (status, paths) = match frames.last() {
        Some(last) if last.found => (SolveStatus::Found, shortest_paths(&last.parents, begin, end)),
        _ => (SolveStatus::NoPath, Vec::new()),
    };

    Solution { status, frames, paths }
}
