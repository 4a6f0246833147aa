use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// Placeholder character used in bucket keys.
pub const WILDCARD: char = '*';

/// Wildcard-pattern bucket index over a fixed-length word list.
///
/// Every word of the configured length lands in one bucket per character
/// position, keyed by the word with that position replaced by `'*'`, so a
/// word of length L appears in exactly L buckets. Two words are neighbors
/// (one substitution apart) iff they share a bucket, which makes a
/// neighbor query L probes plus a union instead of a scan of the whole
/// dictionary.
pub struct PatternIndex {
    buckets: FxHashMap<String, Vec<String>>,
    word_len: usize,
}

impl PatternIndex {
    /// Build the bucket map over `words` plus `begin`, for words of
    /// `begin`'s character length. Words of any other length are ignored
    /// entirely. One pass, O(N * L).
    pub fn build<I, S>(begin: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let word_len = begin.chars().count();
        let mut pool: FxHashSet<String> = FxHashSet::default();
        for w in words {
            let w = w.as_ref();
            if w.chars().count() == word_len {
                pool.insert(w.to_string());
            }
        }
        // The begin word participates even when the dictionary lacks it.
        pool.insert(begin.to_string());

        let mut sorted: Vec<String> = pool.into_iter().collect();
        sorted.sort();

        let mut buckets: FxHashMap<String, Vec<String>> = FxHashMap::default();
        for word in sorted {
            for pat in patterns_of(&word) {
                buckets.entry(pat).or_default().push(word.clone());
            }
        }
        PatternIndex { buckets, word_len }
    }

    /// All words one substitution away from `word`, sorted, excluding
    /// `word` itself. A query word whose length does not match the
    /// indexed length has no neighbors (the dictionary is pre-filtered,
    /// the query word may not be).
    pub fn neighbors(&self, word: &str) -> Vec<String> {
        if word.chars().count() != self.word_len {
            return Vec::new();
        }
        let mut union: FxHashSet<&str> = FxHashSet::default();
        for pat in patterns_of(word) {
            if let Some(bucket) = self.buckets.get(&pat) {
                for w in bucket {
                    if w != word {
                        union.insert(w.as_str());
                    }
                }
            }
        }
        let mut out: Vec<String> = union.into_iter().map(str::to_string).collect();
        out.sort();
        out
    }

    /// Character length this index was built for.
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of distinct wildcard buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Words bucketed under `pattern`, sorted, if the bucket exists.
    pub fn bucket(&self, pattern: &str) -> Option<&[String]> {
        self.buckets.get(pattern).map(Vec::as_slice)
    }

    /// Iterate over every (pattern, bucket) pair.
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.buckets.iter().map(|(p, b)| (p.as_str(), b.as_slice()))
    }
}

/// The L wildcard patterns of a word, one per character position.
fn patterns_of(word: &str) -> SmallVec<[String; 8]> {
    let chars: SmallVec<[char; 16]> = word.chars().collect();
    let mut out = SmallVec::new();
    for i in 0..chars.len() {
        let mut pat = String::with_capacity(word.len());
        for (j, &c) in chars.iter().enumerate() {
            pat.push(if j == i { WILDCARD } else { c });
        }
        out.push(pat);
    }
    out
}
