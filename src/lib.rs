//! Compound-aware automatic spelling correction.
//!
//! The core is two tightly coupled subsystems: a symmetric-delete index
//! ([`dictionary::Dictionary`]) that retrieves candidates within a bounded
//! edit distance with sublinear cost, and a compound segmentation engine
//! ([`Dictionary::lookup_compound`]) that decides, per input token, among
//! keeping a whole-token correction, merging with the previous token, or
//! splitting the token in two.
//!
//! The interactive loop, console formatting, and localization of the
//! tokenizer's character classes are deliberately left to callers — see
//! `demos/repl.rs` for a minimal line-oriented driver.

pub mod compound;
pub mod config;
pub mod dictionary;
pub mod distance;
pub mod edits;
pub mod error;
pub mod lookup;
pub mod term;
pub mod tokenizer;

pub use config::SpellCheckConfig;
pub use dictionary::{Dictionary, IndexEntry, Language, MultiEntry};
pub use error::SpellcheckError;
pub use lookup::SuggestItem;
pub use term::{TermId, Wordlist};
