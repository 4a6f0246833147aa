use rustc_hash::{FxHashMap, FxHashSet};

use crate::frame::Frame;
use crate::pattern::PatternIndex;

/// Level-synchronous BFS from `begin` toward `end`, emitting one frame
/// per expanded level.
///
/// Visited membership is tested against the set as it stood at the start
/// of the level, and newly discovered words are marked visited only after
/// the whole frontier has been processed. That keeps the layering strict:
/// a word's parents always sit exactly one level above it, and every such
/// parent is captured, which is what makes all-shortest-paths
/// reconstruction possible.
///
/// A begin/end character-length mismatch yields an empty sequence; no
/// ladder can exist and nothing is computed.
pub fn layered_frames(begin: &str, end: &str, index: &PatternIndex) -> Vec<Frame> {
    if begin.chars().count() != end.chars().count() {
        return Vec::new();
    }

    let mut frames: Vec<Frame> = Vec::new();
    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut parents: FxHashMap<String, Vec<String>> = FxHashMap::default();
    visited.insert(begin.to_string());

    let mut frontier = vec![begin.to_string()];
    let mut level = 0usize;

    while !frontier.is_empty() {
        let mut discovered: FxHashSet<String> = FxHashSet::default();
        for word in &frontier {
            for neighbor in index.neighbors(word) {
                // Start-of-level snapshot: a word discovered earlier in
                // this same level is not yet visited, so every same-level
                // co-discoverer registers as a parent.
                if visited.contains(&neighbor) {
                    continue;
                }
                parents.entry(neighbor.clone()).or_default().push(word.clone());
                discovered.insert(neighbor);
            }
        }
        // Deferred marking: only now does the new layer become visible.
        for w in &discovered {
            visited.insert(w.clone());
        }

        let mut next: Vec<String> = discovered.into_iter().collect();
        next.sort();
        let found = next.iter().any(|w| w == end);

        frames.push(Frame {
            level,
            frontier: frontier.clone(),
            next: next.clone(),
            visited: visited.clone(),
            parents: parents.clone(),
            found,
        });

        if found {
            break;
        }
        frontier = next;
        level += 1;
    }

    frames
}
