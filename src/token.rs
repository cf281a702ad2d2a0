//! Splits keys into the tokens a WordTrie is indexed by.
//!
//! A token is a maximal run of non-whitespace characters, lowercased.
//! Whitespace is anything with the Unicode `White_Space` property, so tabs,
//! newlines and no-break spaces separate tokens just like ASCII spaces.
//!
//! ```
//! use wordtrie::token::{normalize, tokenize};
//!
//! assert_eq!(tokenize("  Spirit\tof\nTRUTH "), vec!["spirit", "of", "truth"]);
//! assert_eq!(normalize("  Spirit\tof\nTRUTH "), "spirit of truth");
//! assert!(tokenize(" \t ").is_empty());
//! ```

/// Separator used when tokens are joined back together.
pub const SEPARATOR: &str = " ";

/// Lazily produce the tokens of a key. Each call starts afresh.
///
/// Characters are lowercased one at a time, so a capital letter folds the
/// same way wherever it sits in a word (a final `Σ` becomes `σ`, not `ς`).
pub fn tokens(key: &str) -> impl Iterator<Item = String> + '_ {
    key.split_whitespace()
        .map(|word| word.chars().flat_map(char::to_lowercase).collect())
}

/// Collect the tokens of a key.
pub fn tokenize(key: &str) -> Vec<String> {
    tokens(key).collect()
}

/// The normalized form of a key: its tokens joined with single spaces.
/// Keys without any tokens normalize to the empty string.
pub fn normalize(key: &str) -> String {
    tokenize(key).join(SEPARATOR)
}

/// Is the key free of tokens (empty or whitespace only)?
pub fn is_blank(key: &str) -> bool {
    key.split_whitespace().next().is_none()
}
