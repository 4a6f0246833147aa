use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of the BFS engine after fully expanding one level.
///
/// Frames form an append-only sequence; a consumer may replay them in any
/// order or jump to an arbitrary index without touching engine state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    /// 0-based level of the frontier expanded in this frame.
    pub level: usize,
    /// Words expanded at this level, sorted.
    pub frontier: Vec<String>,
    /// Words first discovered at this level, sorted.
    pub next: Vec<String>,
    /// Every word discovered through this level, `next` included.
    pub visited: FxHashSet<String>,
    /// Cumulative child -> parents mapping as of this level. Each frame
    /// holds its own deep copy; later levels never show through an
    /// earlier snapshot.
    pub parents: FxHashMap<String, Vec<String>>,
    /// True when `next` contains the end word.
    pub found: bool,
}
