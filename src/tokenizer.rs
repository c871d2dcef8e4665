use once_cell::sync::Lazy;
use regex::Regex;

/// English single-letter words that survive the corpus single-character
/// filter (spec §4.1). Other single-character tokens picked up from
/// free text are almost always typos or stray punctuation remnants.
const SINGLE_CHAR_WHITELIST: &[&str] = &["a", "i"];

/// Maximal runs of alphanumeric-or-apostrophe characters, underscore
/// excluded. Covers the ASCII apostrophe and the typographic right single
/// quote (U+2019) so "couldn't" and "couldn’t" tokenize identically.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{Alphabetic}\p{Number}'\u{2019}]+").unwrap());

fn extract(input: &str) -> Vec<String> {
    let lowered = input.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Tokenizes a free-text corpus line, dropping single-character tokens
/// other than the whitelisted single-letter words. Used only for corpus
/// ingestion; the caller has not yet curated a vocabulary.
pub fn tokenize_corpus(input: &str) -> Vec<String> {
    extract(input)
        .into_iter()
        .filter(|tok| tok.chars().count() > 1 || SINGLE_CHAR_WHITELIST.contains(&tok.as_str()))
        .collect()
}

/// Tokenizes a query string at correction time. No single-character filter:
/// the caller is asking about exactly these tokens.
pub fn tokenize_query(input: &str) -> Vec<String> {
    extract(input)
}
