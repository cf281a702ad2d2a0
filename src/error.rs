//! Errors returned by WordTrie operations.

/// Result type alias used by fallible WordTrie operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Things which can go wrong when interacting with a WordTrie.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No terminal node exists for the supplied key. Carries the key
    /// exactly as the caller supplied it.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// The operation was invoked through a trie reference which does
    /// not exist.
    #[error("null reference: trie does not exist")]
    NullReference,
}

impl Error {
    pub(crate) fn not_found(key: &str) -> Self {
        tracing::trace!(key, "key not found");
        Error::KeyNotFound(key.to_owned())
    }
}
