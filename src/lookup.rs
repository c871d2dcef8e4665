use std::collections::{HashSet, VecDeque};

use crate::dictionary::{Dictionary, Language};
use crate::distance::damerau_levenshtein;
use crate::edits::single_deletes;

/// One ranked correction: a term, its distance to the query, and its
/// observed count. Carried through the compound corrector too (spec §9,
/// "duck-typed suggestion list") so `min(counts)` can approximate the
/// weakest link of a multi-token correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestItem {
    pub term: String,
    pub distance: i64,
    pub count: i64,
}

impl SuggestItem {
    pub fn new(term: impl Into<String>, distance: i64, count: i64) -> Self {
        SuggestItem { term: term.into(), distance, count }
    }
}

fn sort_suggestions(suggestions: &mut [SuggestItem]) {
    // Ascending distance, tie-broken on descending count. The verbosity==2
    // source uses an arithmetic combination of three-valued compares; a
    // plain lexicographic comparator is equivalent and clearer (spec §9).
    suggestions.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| b.count.cmp(&a.count)));
}

impl Dictionary {
    /// BFS over deletes of `input`, intersected with the index, producing a
    /// ranked list of suggestions within edit distance `k` (spec §4.5).
    pub fn lookup(&self, input: &str, language: impl Into<Language>, k: usize) -> Vec<SuggestItem> {
        let language = language.into();
        let cache_key = format!("{language}\u{1}{input}\u{1}{k}");
        if let Some(cached) = self.cached_lookup(&cache_key) {
            return cached;
        }

        let result = self.lookup_uncached(input, &language, k);
        self.store_lookup(cache_key, result.clone());
        result
    }

    fn lookup_uncached(&self, input: &str, language: &Language, k: usize) -> Vec<SuggestItem> {
        let input_len = input.chars().count() as i64;

        if input_len - k as i64 > self.maxlength() as i64 {
            return Vec::new();
        }

        let verbosity = self.config().verbosity;
        let mut candidates: VecDeque<String> = VecDeque::new();
        candidates.push_back(input.to_string());
        let mut candidate_seen: HashSet<String> = HashSet::new();
        candidate_seen.insert(input.to_string());
        let mut suggestion_seen: HashSet<String> = HashSet::new();
        let mut best: Vec<SuggestItem> = Vec::new();

        'bfs: while let Some(c) = candidates.pop_front() {
            let c_len = c.chars().count() as i64;

            // 1. Length pruning: no shorter candidate can beat the best
            // distance already found.
            if verbosity < 2 && !best.is_empty() && input_len - c_len > best[0].distance {
                break 'bfs;
            }

            if let Some((count, suggestions)) = self.resolve(language, &c) {
                // 2. Direct hit.
                if !suggestion_seen.contains(&c) && self.config().passes_noise_filter(count, c.chars().count()) {
                    let distance = input_len - c_len;
                    if verbosity < 2 {
                        if let Some(top) = best.first() {
                            if top.distance > distance {
                                best.clear();
                            }
                        }
                    }
                    best.push(SuggestItem::new(c.clone(), distance, count));
                    suggestion_seen.insert(c.clone());

                    if verbosity < 2 && distance == 0 {
                        break 'bfs;
                    }
                }

                // 3. Cross suggestions.
                for &s in &suggestions {
                    let w = self.wordlist().get(s).to_string();
                    if suggestion_seen.contains(&w) {
                        continue;
                    }
                    let w_len = w.chars().count() as i64;

                    let distance = if w_len == c_len {
                        input_len - c_len
                    } else if input_len == c_len {
                        w_len - c_len
                    } else {
                        damerau_levenshtein(&w, input) as i64
                    };

                    if verbosity < 2 {
                        if let Some(top) = best.first() {
                            if distance > top.distance {
                                continue;
                            }
                        }
                    }

                    if distance <= k as i64 {
                        if let Some((w_count, _)) = self.resolve(language, &w) {
                            if self.config().passes_noise_filter(w_count, w.chars().count()) {
                                if verbosity < 2 {
                                    if let Some(top) = best.first() {
                                        if top.distance > distance {
                                            best.clear();
                                        }
                                    }
                                }
                                best.push(SuggestItem::new(w.clone(), distance, w_count));
                                suggestion_seen.insert(w.clone());
                            }
                        }
                    }
                }
            }

            // 4. Expand.
            let delete_distance = input_len - c_len;
            let may_expand = verbosity >= 2
                || best.is_empty()
                || delete_distance < best[0].distance;
            if delete_distance < k as i64 && may_expand {
                for d in single_deletes(&c) {
                    if candidate_seen.insert(d.clone()) {
                        candidates.push_back(d);
                    }
                }
            }
        }

        sort_suggestions(&mut best);
        if verbosity == 0 {
            best.truncate(1);
        }
        best
    }
}
