use rustc_hash::{FxHashMap, FxHashSet};

/// Enumerate every shortest path from `begin` to `end` by walking parent
/// edges backwards from `end`.
///
/// Returns the paths sorted; ladder words all share one length, so
/// elementwise ordering coincides with ordering by the concatenated
/// words, independent of parent-set iteration order. An `end` with no
/// parent entry (target never discovered) yields an empty list.
pub fn shortest_paths(
    parents: &FxHashMap<String, Vec<String>>,
    begin: &str,
    end: &str,
) -> Vec<Vec<String>> {
    let mut paths: Vec<Vec<String>> = Vec::new();
    if end != begin && !parents.contains_key(end) {
        return paths;
    }

    let mut trail = vec![end.to_string()];
    let mut visiting: FxHashSet<String> = FxHashSet::default();
    visiting.insert(end.to_string());
    backtrack(parents, begin, end, &mut trail, &mut visiting, &mut paths);

    paths.sort();
    paths
}

fn backtrack(
    parents: &FxHashMap<String, Vec<String>>,
    begin: &str,
    current: &str,
    trail: &mut Vec<String>,
    visiting: &mut FxHashSet<String>,
    out: &mut Vec<Vec<String>>,
) {
    if current == begin {
        let mut path = trail.clone();
        path.reverse();
        out.push(path);
        return;
    }
    if let Some(ps) = parents.get(current) {
        for p in ps {
            // Cycle guard. A correctly layered parent map cannot loop,
            // since parents sit strictly one level up, but the recursion
            // must not depend on that.
            if visiting.contains(p.as_str()) {
                continue;
            }
            trail.push(p.clone());
            visiting.insert(p.clone());
            backtrack(parents, begin, p, trail, visiting, out);
            trail.pop();
            visiting.remove(p.as_str());
        }
    }
}
