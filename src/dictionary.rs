use std::collections::HashMap;
use std::fs;
use std::path::Path;

use cachers::{Cache, LFUCache};

use crate::config::SpellCheckConfig;
use crate::edits::edits_set;
use crate::error::SpellcheckError;
use crate::lookup::SuggestItem;
use crate::term::{TermId, Wordlist};
use crate::tokenizer::tokenize_corpus;

/// Suggestion lists are cached by (language, input, k), mirroring the
/// teacher crate's `LFUCache` over `suggest_single_word_corrections`. Sized
/// the same as the teacher's default.
const LOOKUP_CACHE_CAPACITY: usize = 10_000;

/// Thin wrapper around a language tag. The spec never enumerates a fixed
/// set of languages, so this stays an open string rather than an enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language(pub String);

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        Language(s.to_string())
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        Language(s)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One (language, key) dictionary entry. A `Single` delete pointer is
/// promoted to `Multi` the moment a second distinct piece of information
/// must attach to the same key (spec §3/§9 — replaces the reference
/// implementation's sign-bit-encoded integer slot with an explicit tagged
/// variant).
#[derive(Debug, Clone)]
pub enum IndexEntry {
    Single(TermId),
    Multi(MultiEntry),
}

/// `count` is the term's own observed frequency (0 when the key is only a
/// delete of other terms). `suggestions` is insertion-ordered and holds the
/// ids of every term whose 1..k delete closure contains this key.
#[derive(Debug, Clone, Default)]
pub struct MultiEntry {
    pub count: i64,
    pub suggestions: Vec<TermId>,
}

fn clamp_add(a: i64, b: i64, context: &str) -> i64 {
    match a.checked_add(b) {
        Some(v) => v,
        None => {
            log::warn!("count accumulation overflowed for {context}, clamping to i64::MAX");
            i64::MAX
        }
    }
}

/// The symmetric-delete index plus its term arena. Built and mutated only
/// during ingestion; read-only and freely shareable across threads once
/// ingestion has finished, since every query method takes `&self`.
pub struct Dictionary {
    config: SpellCheckConfig,
    index: HashMap<(Language, String), IndexEntry>,
    wordlist: Wordlist,
    maxlength: usize,
    lookup_cache: LFUCache<String, Vec<SuggestItem>>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::new(SpellCheckConfig::default())
    }
}

impl Dictionary {
    pub fn new(config: SpellCheckConfig) -> Self {
        Dictionary {
            config,
            index: HashMap::new(),
            wordlist: Wordlist::new(),
            maxlength: 0,
            lookup_cache: LFUCache::new(LOOKUP_CACHE_CAPACITY),
        }
    }

    pub(crate) fn cached_lookup(&self, key: &str) -> Option<Vec<SuggestItem>> {
        self.lookup_cache.get(&key.to_string())
    }

    pub(crate) fn store_lookup(&self, key: String, value: Vec<SuggestItem>) {
        self.lookup_cache.set(key, value);
    }

    pub fn config(&self) -> &SpellCheckConfig {
        &self.config
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    pub fn maxlength(&self) -> usize {
        self.maxlength
    }

    pub(crate) fn entry(&self, language: &Language, key: &str) -> Option<&IndexEntry> {
        self.index.get(&(language.clone(), key.to_string()))
    }

    /// Resolves an entry to the uniform `Multi` shape the lookup BFS wants:
    /// a `Single(t)` delete pointer is seen as a one-element suggestion list
    /// with no own count (spec §4.5).
    pub(crate) fn resolve(&self, language: &Language, key: &str) -> Option<(i64, Vec<TermId>)> {
        match self.entry(language, key)? {
            IndexEntry::Single(t) => Some((0, vec![*t])),
            IndexEntry::Multi(m) => Some((m.count, m.suggestions.clone())),
        }
    }

    /// Explicit incremental insert: records one more occurrence (or adds a
    /// count) of `term` under `language`, minting a term id and installing
    /// its delete closure exactly once the count crosses the threshold.
    pub fn insert(&mut self, term: &str, language: impl Into<Language>, count: i64) {
        self.create_dictionary_entry(term, &language.into(), count);
    }

    /// Ingests a free-text corpus: tokenizes, drops stray single-character
    /// tokens (outside the whitelist), and records one occurrence per
    /// surviving token (spec §4.1/§6).
    pub fn ingest_corpus(&mut self, text: &str, language: impl Into<Language>) {
        let language = language.into();
        for token in tokenize_corpus(text) {
            self.create_dictionary_entry(&token, &language, 0);
        }
    }

    /// Loads a whitespace-delimited frequency dictionary file. Lines with
    /// fewer than two fields, or an unparseable count, are silently skipped
    /// (spec §6/§7); a missing file is logged and yields an unchanged
    /// (possibly empty) dictionary, returned as `Err` so a caller that wants
    /// the process to continue can choose to do so explicitly.
    pub fn load_frequency_file(
        &mut self,
        path: impl AsRef<Path>,
        term_column: usize,
        count_column: usize,
        language: impl Into<Language>,
    ) -> Result<(), SpellcheckError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| {
            log::error!("missing frequency dictionary file: {}", path.display());
            SpellcheckError::DictionaryFileMissing {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let language = language.into();
        let needed = term_column.max(count_column) + 1;
        let mut skipped = 0usize;
        for line in content.lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < needed.max(2) {
                skipped += 1;
                continue;
            }
            let term = fields[term_column];
            let count: i64 = match fields[count_column].parse() {
                Ok(c) => c,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            self.create_dictionary_entry(&term.to_lowercase(), &language, count);
        }
        if skipped > 0 {
            log::debug!("skipped {skipped} malformed line(s) in {}", path.display());
        }
        Ok(())
    }

    fn create_dictionary_entry(&mut self, key: &str, language: &Language, count: i64) {
        let delta = if count == 0 { 1 } else { count };
        let dkey = (language.clone(), key.to_string());

        let (before, after) = match self.index.get_mut(&dkey) {
            None => {
                let c = delta.max(0);
                self.index
                    .insert(dkey.clone(), IndexEntry::Multi(MultiEntry { count: c, suggestions: Vec::new() }));
                self.maxlength = self.maxlength.max(key.chars().count());
                (0, c)
            }
            Some(IndexEntry::Single(t)) => {
                let t = *t;
                let c = clamp_add(0, delta, key);
                self.index
                    .insert(dkey.clone(), IndexEntry::Multi(MultiEntry { count: c, suggestions: vec![t] }));
                (0, c)
            }
            Some(IndexEntry::Multi(entry)) => {
                let before = entry.count;
                entry.count = clamp_add(entry.count, delta, key);
                (before, entry.count)
            }
        };

        if before < self.config.count_threshold && after >= self.config.count_threshold {
            self.mint_term(key, language);
            // A newly minted term can appear in suggestion lists that were
            // already cached, so the whole cache invalidates (matches the
            // teacher crate's clear-on-mutation policy in
            // `add_word_to_dictionary`).
            self.lookup_cache.clear();
        }
    }

    fn mint_term(&mut self, key: &str, language: &Language) {
        let t = self.wordlist.push(key.to_string());
        let k = self.config.edit_distance_max;
        let verbosity = self.config.verbosity;

        // `edits_set` only yields proper deletions of `key`, never `key`
        // itself, so the entry at the term's own key needs its own id added
        // separately (spec §3: every indexed term's own entry suggests itself).
        let own_key = (language.clone(), key.to_string());
        if let Some(IndexEntry::Multi(entry)) = self.index.get_mut(&own_key) {
            if !entry.suggestions.contains(&t) {
                entry.suggestions.push(t);
            }
        }

        for d in edits_set(key, k) {
            let dkey = (language.clone(), d.clone());
            match self.index.get_mut(&dkey) {
                None => {
                    self.index.insert(dkey, IndexEntry::Single(t));
                }
                Some(IndexEntry::Single(t_prime)) => {
                    let t_prime = *t_prime;
                    if t_prime != t {
                        let mut entry = MultiEntry { count: 0, suggestions: vec![t_prime] };
                        Self::add_lowest_distance(&mut entry, &self.wordlist, verbosity, key, t, &d);
                        self.index.insert(dkey, IndexEntry::Multi(entry));
                    }
                }
                Some(IndexEntry::Multi(entry)) => {
                    if !entry.suggestions.contains(&t) {
                        Self::add_lowest_distance(entry, &self.wordlist, verbosity, key, t, &d);
                    }
                }
            }
        }
    }

    /// Enforces the verbosity-dependent best-only policy for delete-derived
    /// suggestion lists (spec §4.4). `suggestion_term` is the term being
    /// inserted, `d` the delete key it is being attached to; their length
    /// difference (surplus) is a fast proxy for true edit distance.
    fn add_lowest_distance(
        entry: &mut MultiEntry,
        wordlist: &Wordlist,
        verbosity: u8,
        suggestion_term: &str,
        t: TermId,
        d: &str,
    ) {
        if verbosity >= 2 {
            entry.suggestions.push(t);
            return;
        }

        let d_len = d.chars().count() as i64;
        let surplus = suggestion_term.chars().count() as i64 - d_len;

        let current_min = entry
            .suggestions
            .iter()
            .map(|&id| wordlist.get(id).chars().count() as i64 - d_len)
            .min();

        match current_min {
            None => entry.suggestions.push(t),
            Some(min_surplus) if surplus < min_surplus => {
                entry.suggestions.clear();
                entry.suggestions.push(t);
            }
            Some(min_surplus) if surplus == min_surplus => entry.suggestions.push(t),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict_with(words: &[(&str, i64)]) -> Dictionary {
        let mut d = Dictionary::default();
        for (w, c) in words {
            d.insert(w, "en", *c);
        }
        d
    }

    #[test]
    fn single_insert_mints_term_and_deletes() {
        let d = dict_with(&[("hello", 1)]);
        assert_eq!(d.wordlist().len(), 1);
        assert_eq!(d.wordlist().get(TermId(0)), "hello");
        // "helo" is a 1-delete of "hello".
        let (_, sugg) = d.resolve(&Language::from("en"), "helo").unwrap();
        assert_eq!(sugg, vec![TermId(0)]);
    }

    #[test]
    fn count_accumulates_until_threshold() {
        let mut config = SpellCheckConfig::default();
        config.count_threshold = 3;
        let mut d = Dictionary::new(config);
        d.insert("cat", "en", 0);
        d.insert("cat", "en", 0);
        assert!(d.wordlist().is_empty());
        d.insert("cat", "en", 0);
        assert_eq!(d.wordlist().len(), 1);
    }

    #[test]
    fn maxlength_tracks_longest_term() {
        let d = dict_with(&[("a", 1), ("abcdef", 1)]);
        assert_eq!(d.maxlength(), 6);
    }

    #[test]
    fn own_key_resolves_to_self() {
        let d = dict_with(&[("hello", 1)]);
        let (count, sugg) = d.resolve(&Language::from("en"), "hello").unwrap();
        assert_eq!(count, 1);
        assert!(sugg.contains(&TermId(0)));
    }

    #[test]
    fn index_completeness_every_delete_points_back() {
        let d = dict_with(&[("spelling", 1)]);
        let lang = Language::from("en");
        for del in edits_set("spelling", d.config().edit_distance_max) {
            let (_, sugg) = d.resolve(&lang, &del).unwrap_or((0, vec![]));
            assert!(sugg.contains(&TermId(0)), "missing pointer for delete {del}");
        }
    }

    #[test]
    fn overflow_clamps_instead_of_panicking() {
        let mut d = Dictionary::default();
        d.insert("cat", "en", i64::MAX);
        d.insert("cat", "en", 10);
        let (count, _) = d.resolve(&Language::from("en"), "cat").unwrap();
        assert_eq!(count, i64::MAX);
    }
}
