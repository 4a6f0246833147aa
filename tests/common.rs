use rungs::{solve, Solution};

/// Run the solver over a literal word list.
#[allow(dead_code)]
pub fn solve_words(begin: &str, end: &str, words: &[&str]) -> Solution {
    solve(begin, end, words.iter().copied())
}

/// Build an owned path from string literals.
#[allow(dead_code)]
pub fn path(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}
