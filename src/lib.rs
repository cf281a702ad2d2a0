//! Provides a Trie which indexes multi-word string keys by their
//! whitespace-delimited words rather than by their characters. Each
//! complete key has an associated value and remembers the normalized
//! term under which it was stored.
//!
//! Keys are split into tokens by [`crate::token::tokens`]: any run of
//! Unicode whitespace separates two tokens and every token is lowercased.
//! This means that `"Spirit of Truth"`, `"  spirit   OF truth "` and
//! `"spirit\tof\ntruth"` all name the same entry.
//!
//! The main type is [`crate::trie::WordTrie`]. Every level of the trie maps
//! a single token to a [`crate::trie::Node`] and every node owns the
//! [`crate::trie::WordTrie`] holding the keys which continue past it. A
//! subtree can be borrowed and queried on its own with
//! [`crate::trie::WordTrie::subtree`].
//!
//! Examples:
//! * trie : [`crate::trie`]
//! * iterator : [`crate::iterator`]
//! * traverse : [`crate::traverse`]
//!
//! Typical usages for this data structure:
//!  - Glossaries and phrase dictionaries
//!  - Canonicalising user supplied phrases
//!  - Scoping lookups to every phrase which starts with a given phrase
//!  - ...

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod error;

pub mod iterator;

pub mod token;

pub mod traverse;

pub mod trie;

pub use error::{Error, Result};
pub use trie::{Node, TrieMut, TrieRef, WordTrie};
