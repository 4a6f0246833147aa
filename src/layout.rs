use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// A word placed in the level grid. `level` is the BFS depth (column).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutNode {
    pub word: String,
    pub level: usize,
    /// Whether the word lies on at least one shortest path.
    pub on_path: bool,
}

/// A parent -> child discovery edge between adjacent levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutEdge {
    pub from: String,
    pub to: String,
    /// Level of the child endpoint.
    pub level: usize,
    /// Whether the edge is part of at least one shortest path.
    pub on_path: bool,
}

/// Render-ready view of a finished run: one column of words per BFS level
/// plus every discovery edge, derived purely from the frame sequence and
/// path list. A playback consumer shows the state after frame `k` by
/// keeping nodes and edges with `level <= k + 1`; the frames themselves
/// are never touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderLayout {
    pub columns: Vec<Vec<String>>,
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

/// Derive the level-grid layout from a frame sequence and its paths.
pub fn ladder_layout(frames: &[Frame], paths: &[Vec<String>]) -> LadderLayout {
    let mut columns: Vec<Vec<String>> = Vec::new();
    if let Some(first) = frames.first() {
        columns.push(first.frontier.clone());
    }
    for frame in frames {
        if !frame.next.is_empty() {
            columns.push(frame.next.clone());
        }
    }

    let mut path_words: FxHashSet<&str> = FxHashSet::default();
    let mut path_edges: FxHashSet<(&str, &str)> = FxHashSet::default();
    for path in paths {
        for word in path {
            path_words.insert(word.as_str());
        }
        for pair in path.windows(2) {
            path_edges.insert((pair[0].as_str(), pair[1].as_str()));
        }
    }

    let mut level_of: FxHashMap<&str, usize> = FxHashMap::default();
    let mut nodes: Vec<LayoutNode> = Vec::new();
    for (level, column) in columns.iter().enumerate() {
        for word in column {
            level_of.insert(word.as_str(), level);
            nodes.push(LayoutNode {
                word: word.clone(),
                level,
                on_path: path_words.contains(word.as_str()),
            });
        }
    }

    let mut edges: Vec<LayoutEdge> = Vec::new();
    if let Some(last) = frames.last() {
        for (child, ps) in &last.parents {
            // Every discovered child sits in some column; skip anything
            // else defensively.
            if let Some(&level) = level_of.get(child.as_str()) {
                for p in ps {
                    edges.push(LayoutEdge {
                        from: p.clone(),
                        to: child.clone(),
                        level,
                        on_path: path_edges.contains(&(p.as_str(), child.as_str())),
                    });
                }
            }
        }
    }
    edges.sort_by(|a, b| (a.level, &a.from, &a.to).cmp(&(b.level, &b.from, &b.to)));

    LadderLayout { columns, nodes, edges }
}
