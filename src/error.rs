use std::path::PathBuf;

/// Errors surfaced at the boundaries named in the external-interfaces
/// contract: frequency-file loading and configuration validation.
///
/// Nothing inside [`crate::dictionary::Dictionary::lookup`] or
/// `lookup_compound` ever returns this type — a miss within the edit-distance
/// bound is a non-error and yields an empty or best-effort suggestion list.
#[derive(Debug, thiserror::Error)]
pub enum SpellcheckError {
    #[error("could not open frequency dictionary file {path}: {source}")]
    DictionaryFileMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
