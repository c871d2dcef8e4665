use crate::dictionary::{Dictionary, Language};
use crate::distance::damerau_levenshtein;
use crate::lookup::SuggestItem;
use crate::tokenizer::tokenize_query;

impl Dictionary {
    /// Tokenizes `input` and builds a corrected string left-to-right,
    /// choosing among keep-as-correction, merge-with-previous, and
    /// split-into-two at every token (spec §4.6).
    pub fn lookup_compound(&self, input: &str, language: impl Into<Language>, k: usize) -> SuggestItem {
        let language = language.into();
        let tokens = tokenize_query(input);
        if tokens.is_empty() {
            return SuggestItem::new("", 0, 0);
        }

        let placeholder = |term: &str| SuggestItem::new(term, k as i64 + 1, 0);

        let mut parts: Vec<SuggestItem> = Vec::new();
        let mut combined_last_step = false;

        for (i, token) in tokens.iter().enumerate() {
            let s_i = self.lookup(token, language.clone(), k);

            // 1. Combine with the previous token, unless we just combined.
            if i >= 1 && !combined_last_step {
                let merged = format!("{}{}", tokens[i - 1], token);
                let combined = self.lookup(&merged, language.clone(), k);
                if let Some(best_combined) = combined.first() {
                    let b1 = parts.last().expect("a previous part exists when i >= 1");
                    let b2 = s_i.first().cloned().unwrap_or_else(|| placeholder(token));
                    let charged = best_combined.distance + 1;
                    let separate = damerau_levenshtein(
                        &format!("{} {}", tokens[i - 1], token),
                        &format!("{} {}", b1.term, b2.term),
                    ) as i64;
                    if charged < separate {
                        let mut merged_item = best_combined.clone();
                        merged_item.distance += 1;
                        *parts.last_mut().unwrap() = merged_item;
                        combined_last_step = true;
                        continue;
                    }
                }
            }

            // 2. Accept the whole-token correction outright.
            if let Some(first) = s_i.first() {
                if first.distance == 0 || token.chars().count() == 1 {
                    parts.push(first.clone());
                    combined_last_step = false;
                    continue;
                }
            }

            // 3. Search for a missing-space split.
            let chars: Vec<char> = token.chars().collect();
            let mut proposals: Vec<SuggestItem> = s_i.first().cloned().into_iter().collect();
            let mut abandoned = false;

            for j in 1..chars.len() {
                let a: String = chars[..j].iter().collect();
                let b: String = chars[j..].iter().collect();

                let a_res = self.lookup(&a, language.clone(), k);
                let Some(a_best) = a_res.first() else { continue };
                let b_res = self.lookup(&b, language.clone(), k);

                if let Some(s0) = s_i.first() {
                    let b_matches = b_res.first().is_some_and(|b0| b0.term == s0.term);
                    if a_best.term == s0.term || b_matches {
                        abandoned = true;
                        break;
                    }
                }

                if let Some(b_best) = b_res.first() {
                    let joined = format!("{} {}", a_best.term, b_best.term);
                    let distance = damerau_levenshtein(token, &joined) as i64;
                    let count = a_best.count.min(b_best.count);
                    let early_terminate = distance == 1;
                    proposals.push(SuggestItem::new(joined, distance, count));
                    if early_terminate {
                        break;
                    }
                }
            }

            if abandoned {
                parts.push(s_i.first().cloned().unwrap_or_else(|| placeholder(token)));
                combined_last_step = false;
                continue;
            }

            if proposals.is_empty() {
                parts.push(placeholder(token));
                combined_last_step = false;
                continue;
            }

            proposals.sort_by(|x, y| x.distance.cmp(&y.distance).then_with(|| y.count.cmp(&x.count)));
            parts.push(proposals.into_iter().next().unwrap());
            combined_last_step = false;
        }

        let joined = parts.iter().map(|p| p.term.as_str()).collect::<Vec<_>>().join(" ");
        let count = parts.iter().map(|p| p.count).min().unwrap_or(0);
        let distance = damerau_levenshtein(&joined, input) as i64;
        SuggestItem::new(joined, distance, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpellCheckConfig;

    fn dict_with(words: &[(&str, i64)]) -> Dictionary {
        let mut config = SpellCheckConfig::default();
        config.verbosity = 0;
        let mut d = Dictionary::new(config);
        for (w, c) in words {
            d.insert(w, "en", *c);
        }
        d
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let d = Dictionary::default();
        let result = d.lookup_compound("", "en", 2);
        assert_eq!(result.term, "");
        assert_eq!(result.distance, 0);
    }

    #[test]
    fn rejoins_a_spuriously_split_word() {
        let d = dict_with(&[("to", 10000), ("together", 10000)]);
        let result = d.lookup_compound("to gether", "en", 2);
        assert_eq!(result.term, "together");
    }

    #[test]
    fn splits_a_spuriously_joined_pair() {
        let d = dict_with(&[("the", 10000), ("love", 10000)]);
        let result = d.lookup_compound("thelove", "en", 2);
        assert_eq!(result.term, "the love");
    }

    #[test]
    fn idempotent_on_already_correct_input() {
        let d = dict_with(&[("the", 10000), ("cat", 10000), ("sat", 10000)]);
        let result = d.lookup_compound("the cat sat", "en", 2);
        assert_eq!(result.term, "the cat sat");
        assert_eq!(result.distance, 0);
    }

    #[test]
    fn monotonicity_bound_holds() {
        let d = dict_with(&[("the", 10000), ("cat", 10000)]);
        let input = "The  Cat";
        let result = d.lookup_compound(input, "en", 2);
        let n = tokenize_query(input).len() as i64;
        let bound = damerau_levenshtein(input, &input.to_lowercase()) as i64 + n;
        assert!(result.distance <= bound);
    }

    #[test]
    fn single_character_tokens_are_never_split() {
        let d = dict_with(&[("a", 10000)]);
        // "x" is not a dictionary term, but being a single character it must
        // be accepted as a whole-token correction rather than sent through
        // the (impossible, length-1) split search.
        let result = d.lookup_compound("x", "en", 2);
        assert_eq!(result.term, "a");
    }
}
