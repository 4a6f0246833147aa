mod engine;
mod error;
mod frame;
mod layout;
mod normalize;
mod pattern;
mod reconstruct;
mod solve;

pub use engine::layered_frames;
pub use error::{LadderError, Result};
pub use frame::Frame;
pub use layout::{ladder_layout, LadderLayout, LayoutEdge, LayoutNode};
pub use normalize::{normalize_input, LadderInput};
pub use pattern::{PatternIndex, WILDCARD};
pub use reconstruct::shortest_paths;
pub use solve::{solve, Solution, SolveStatus};

use std::{fs, path::Path};

/// Read a word-list file into raw text suitable for `normalize_input`.
/// Rejects files with no usable content so hosts fail early instead of
/// solving over an empty dictionary.
pub fn load_word_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let text = fs::read_to_string(path.as_ref())?;
    if text.trim().is_empty() {
        return Err(LadderError::InvalidInput("word list is empty"));
    }
    Ok(text)
}
