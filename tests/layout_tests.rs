mod common;

use common::{path, solve_words};
use rungs::ladder_layout;

#[test]
fn columns_follow_bfs_levels() {
    let sol = solve_words("hit", "cog", &["hot", "dot", "dog", "lot", "log", "cog"]);
    let layout = ladder_layout(&sol.frames, &sol.paths);
    assert_eq!(
        layout.columns,
        vec![
            path(&["hit"]),
            path(&["hot"]),
            path(&["dot", "lot"]),
            path(&["dog", "log"]),
            path(&["cog"]),
        ]
    );
    // One node per placed word, each at its column's level.
    assert_eq!(layout.nodes.len(), 7);
    for node in &layout.nodes {
        assert!(layout.columns[node.level].contains(&node.word));
    }
}

#[test]
fn off_path_words_and_edges_are_flagged() {
    // "dob" is discovered from "dot" but leads nowhere near "cog".
    let sol = solve_words(
        "hit",
        "cog",
        &["hot", "dot", "dog", "lot", "log", "cog", "dob"],
    );
    let layout = ladder_layout(&sol.frames, &sol.paths);

    let dob = layout.nodes.iter().find(|n| n.word == "dob").unwrap();
    assert!(!dob.on_path);
    assert_eq!(dob.level, 3);
    assert!(layout
        .nodes
        .iter()
        .filter(|n| n.word != "dob")
        .all(|n| n.on_path));

    let dead_edge = layout
        .edges
        .iter()
        .find(|e| e.from == "dot" && e.to == "dob")
        .unwrap();
    assert!(!dead_edge.on_path);
    assert!(layout
        .edges
        .iter()
        .filter(|e| e.to != "dob")
        .all(|e| e.on_path));
}

#[test]
fn edges_connect_adjacent_columns_in_sorted_order() {
    let sol = solve_words("hit", "cog", &["hot", "dot", "dog", "lot", "log", "cog"]);
    let layout = ladder_layout(&sol.frames, &sol.paths);

    let pairs: Vec<(&str, &str, usize)> = layout
        .edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str(), e.level))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("hit", "hot", 1),
            ("hot", "dot", 2),
            ("hot", "lot", 2),
            ("dot", "dog", 3),
            ("lot", "log", 3),
            ("dog", "cog", 4),
            ("log", "cog", 4),
        ]
    );
}

#[test]
fn empty_frames_produce_an_empty_layout() {
    let sol = solve_words("hit", "cogs", &["hot", "cogs"]);
    let layout = ladder_layout(&sol.frames, &sol.paths);
    assert!(layout.columns.is_empty());
    assert!(layout.nodes.is_empty());
    assert!(layout.edges.is_empty());
}
