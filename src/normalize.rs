use regex::Regex;
use rustc_hash::FxHashSet;

/// Normalized solver input: lowercase begin/end words and a deduplicated
/// dictionary guaranteed to contain the end word.
#[derive(Debug, Clone)]
pub struct LadderInput {
    pub begin: String,
    pub end: String,
    pub words: Vec<String>,
}

/// Normalize raw user input for the solver.
///
/// Lowercases and trims the begin/end words, tokenizes the dictionary
/// text on runs of whitespace and commas, drops empty or non-alphabetic
/// tokens, dedupes while preserving first-seen order, and appends the
/// end word when the dictionary lacks it. Downstream code may therefore
/// assume well-formed lowercase words.
pub fn normalize_input(begin: &str, end: &str, dictionary: &str) -> LadderInput {
    let begin = begin.trim().to_lowercase();
    let end = end.trim().to_lowercase();

    let sep = Regex::new(r"[\s,]+").unwrap();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut words: Vec<String> = Vec::new();
    for token in sep.split(dictionary) {
        let token = token.trim().to_lowercase();
        if token.is_empty() || !token.chars().all(|c| c.is_alphabetic()) {
            continue;
        }
        if seen.insert(token.clone()) {
            words.push(token);
        }
    }
    if !end.is_empty() && seen.insert(end.clone()) {
        words.push(end.clone());
    }

    LadderInput { begin, end, words }
}
