mod common;

use common::path;
use rustc_hash::FxHashMap;
use rungs::shortest_paths;

fn parent_map(entries: &[(&str, &[&str])]) -> FxHashMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(child, parents)| (child.to_string(), path(parents)))
        .collect()
}

#[test]
fn enumerates_every_branch_of_the_parent_map() {
    let parents = parent_map(&[
        ("hot", &["hit"]),
        ("dot", &["hot"]),
        ("lot", &["hot"]),
        ("dog", &["dot"]),
        ("log", &["lot"]),
        ("cog", &["dog", "log"]),
    ]);
    let paths = shortest_paths(&parents, "hit", "cog");
    assert_eq!(
        paths,
        vec![
            path(&["hit", "hot", "dot", "dog", "cog"]),
            path(&["hit", "hot", "lot", "log", "cog"]),
        ]
    );
}

#[test]
fn output_is_sorted_regardless_of_parent_order() {
    // Same map with every parent list reversed: identical output.
    let parents = parent_map(&[
        ("hot", &["hit"]),
        ("dot", &["hot"]),
        ("lot", &["hot"]),
        ("dog", &["dot"]),
        ("log", &["lot"]),
        ("cog", &["log", "dog"]),
    ]);
    let paths = shortest_paths(&parents, "hit", "cog");
    assert_eq!(
        paths,
        vec![
            path(&["hit", "hot", "dot", "dog", "cog"]),
            path(&["hit", "hot", "lot", "log", "cog"]),
        ]
    );
}

#[test]
fn undiscovered_end_word_yields_no_paths() {
    let parents = parent_map(&[("hot", &["hit"])]);
    assert!(shortest_paths(&parents, "hit", "cog").is_empty());
    assert!(shortest_paths(&FxHashMap::default(), "hit", "cog").is_empty());
}

#[test]
fn begin_equals_end_is_the_trivial_path() {
    let paths = shortest_paths(&FxHashMap::default(), "hit", "hit");
    assert_eq!(paths, vec![path(&["hit"])]);
}

#[test]
fn cycle_in_a_degenerate_parent_map_terminates() {
    // A layered engine never produces this; the visiting-set guard must
    // still terminate the recursion and report nothing.
    let parents = parent_map(&[("cog", &["aaa"]), ("aaa", &["bbb"]), ("bbb", &["aaa"])]);
    assert!(shortest_paths(&parents, "hit", "cog").is_empty());
}

#[test]
fn branch_that_never_reaches_begin_is_dropped() {
    // "fog" dangles: its ancestry stops short of the begin word.
    let parents = parent_map(&[
        ("hot", &["hit"]),
        ("dot", &["hot"]),
        ("dog", &["dot"]),
        ("fog", &["bog"]),
        ("cog", &["dog", "fog"]),
    ]);
    let paths = shortest_paths(&parents, "hit", "cog");
    assert_eq!(paths, vec![path(&["hit", "hot", "dot", "dog", "cog"])]);
}
