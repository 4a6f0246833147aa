mod common;

use common::{path, solve_words};
use rungs::{normalize_input, solve, SolveStatus};

#[test]
fn two_shortest_ladders_hit_to_cog() {
    let sol = solve_words("hit", "cog", &["hot", "dot", "dog", "lot", "log", "cog"]);
    assert_eq!(sol.status, SolveStatus::Found);
    assert_eq!(
        sol.paths,
        vec![
            path(&["hit", "hot", "dot", "dog", "cog"]),
            path(&["hit", "hot", "lot", "log", "cog"]),
        ]
    );
    for p in &sol.paths {
        assert_eq!(p.len(), 5);
    }
}

#[test]
fn single_ladder_cat_to_dog() {
    let sol = solve_words("cat", "dog", &["cat", "cot", "cog", "dog"]);
    assert_eq!(sol.status, SolveStatus::Found);
    assert_eq!(sol.paths, vec![path(&["cat", "cot", "cog", "dog"])]);
}

#[test]
fn unreachable_end_word() {
    let sol = solve_words("dog", "cat", &["dog", "cot", "cat"]);
    assert_eq!(sol.status, SolveStatus::NoPath);
    assert!(sol.paths.is_empty());
    // The run still leaves a trace: a last frame with found=false.
    let last = sol.frames.last().unwrap();
    assert!(!last.found);
    assert_eq!(last.frontier, path(&["dog"]));
    assert!(last.next.is_empty());
}

#[test]
fn mismatched_lengths_produce_nothing() {
    let sol = solve_words("hit", "cogs", &["hot", "dot", "cogs"]);
    assert_eq!(sol.status, SolveStatus::LengthMismatch);
    assert!(sol.frames.is_empty());
    assert!(sol.paths.is_empty());
}

#[test]
fn end_word_missing_from_dictionary_is_inserted_upstream() {
    // The normalizer guarantees the end word is present before the
    // engine ever sees the input.
    let norm = normalize_input("hit", "cog", "hot dot dog lot log");
    assert!(norm.words.iter().any(|w| w == "cog"));

    let sol = solve(&norm.begin, &norm.end, &norm.words);
    assert_eq!(sol.status, SolveStatus::Found);
    assert_eq!(sol.paths.len(), 2);
}
