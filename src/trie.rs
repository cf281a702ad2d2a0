//! Provides a Trie for storing multi-word string keys. The key is split
//! into lowercase tokens (see [`crate::token`]) and each token becomes one
//! level of the trie. A key has an associated value and records the
//! normalized term it was stored under.
//!
//! Every level is a map from token to [`Node`] and every node owns the
//! [`WordTrie`] which holds the keys continuing past it, so a key can be
//! stored at a node which is also an interior step of a longer key.
//!
//! Example 1
//! ```
//! use wordtrie::{Error, WordTrie};
//!
//! let mut trie = WordTrie::new();
//! trie.insert("Spirit", "This is spirit");
//! trie.insert("Spirit of Truth", "This is Spirit of Truth");
//!
//! // Case and whitespace don't matter
//! assert_eq!(trie.value("  SPIRIT "), Ok(&"This is spirit"));
//! assert_eq!(
//!     trie.term_value("spirit\tOF truth"),
//!     Ok(("spirit of truth", &"This is Spirit of Truth"))
//! );
//!
//! // "spirit of" is only a step on the way to "spirit of truth"
//! assert_eq!(
//!     trie.value("Spirit of"),
//!     Err(Error::KeyNotFound("Spirit of".to_string()))
//! );
//! ```
//!
//! Example 2
//! ```
//! use wordtrie::WordTrie;
//!
//! let mut trie = WordTrie::new();
//! trie.insert("Spirit of Truth", 1);
//! trie.insert("Spirit of Wisdom", 2);
//!
//! // Lookups can be scoped to everything below a prefix
//! let of = trie.subtree("spirit of").unwrap();
//! assert_eq!(of.value("wisdom"), Ok(&2));
//! assert_eq!(of.len(), 2);
//! ```
//!
//! Keys without any tokens (`""`, `" "`, `"\t\n"`, ...) are stored under a
//! reserved sentinel at the root. The empty string lives on the sentinel
//! itself and every other blank key is kept under its exact whitespace run,
//! so distinct blank keys never collide.
//!
//! Example 3
//! ```
//! use wordtrie::WordTrie;
//!
//! let mut trie = WordTrie::new();
//! trie.insert("", "Null Key");
//! trie.insert(" ", "Space");
//! trie.insert("  ", "Multiple Spaces");
//!
//! assert_eq!(trie.value(""), Ok(&"Null Key"));
//! assert_eq!(trie.value(" "), Ok(&"Space"));
//! assert_eq!(trie.value("  "), Ok(&"Multiple Spaces"));
//! ```

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::token::{self, SEPARATOR};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

// Tokens are never empty, so the empty string can't clash with a real key.
const SENTINEL: &str = "";

/// One token position of some stored key.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Node<V> {
    pub(crate) residual: String,
    pub(crate) term: String,
    pub(crate) value: Option<V>,
    pub(crate) child: WordTrie<V>,
}

/// Stores multi-word keys, one token per level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct WordTrie<V> {
    pub(crate) nodes: HashMap<String, Node<V>>,
}

impl<V> Default for WordTrie<V> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }
}

impl<V> Node<V> {
    fn new(residual: String) -> Self {
        Self {
            residual,
            term: String::new(),
            value: None,
            child: WordTrie::new(),
        }
    }

    /// The tokens which followed this node's token in the key which
    /// created it. Purely informational, lookups never consult it.
    pub fn residual(&self) -> &str {
        &self.residual
    }

    /// The normalized key this node is terminal for. Interior nodes have an
    /// empty term, but so does the node holding the empty key; use
    /// [`Node::is_terminal`] to tell them apart.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The value stored at this node, if a key ends here.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Does a stored key end at this node?
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// The trie holding every key which continues past this node.
    pub fn child(&self) -> &WordTrie<V> {
        &self.child
    }

    fn store(&mut self, term: String, value: V) -> Option<V> {
        let previous = self.value.replace(value);
        if previous.is_some() {
            debug!(term = %term, "overwriting stored value");
        }
        self.term = term;
        previous
    }
}

impl<V> WordTrie<V> {
    /// Create a new WordTrie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the WordTrie.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Is the WordTrie empty?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// How many keys does the WordTrie contain?
    ///
    /// This walks the whole trie.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Does the WordTrie contain the supplied key?
    pub fn contains(&self, key: &str) -> bool {
        self.value(key).is_ok()
    }

    /// Insert the key and value into the WordTrie. If the normalized key is
    /// already present, its value is replaced and the previous value is
    /// returned. Nodes below the key are left alone.
    pub fn insert<K: AsRef<str>>(&mut self, key: K, value: V) -> Option<V> {
        let key = key.as_ref();
        let tokens = token::tokenize(key);
        let Some((last, init)) = tokens.split_last() else {
            return self.insert_blank(key, value);
        };
        let term = tokens.join(SEPARATOR);

        let mut trie = self;
        for (idx, atom) in init.iter().enumerate() {
            let node = trie.node_entry(atom, &tokens[idx + 1..]);
            trie = &mut node.child;
        }
        trie.node_entry(last, &[]).store(term, value)
    }

    /// Get a reference to a key's associated value.
    pub fn value(&self, key: &str) -> Result<&V> {
        self.term_value(key).map(|(_term, value)| value)
    }

    /// Get the normalized term a key was stored under along with its value.
    pub fn term_value(&self, key: &str) -> Result<(&str, &V)> {
        let node = self.find(key)?;
        match &node.value {
            Some(value) => Ok((node.term.as_str(), value)),
            None => Err(Error::not_found(key)),
        }
    }

    /// Get the WordTrie holding every key which extends the supplied key.
    /// The key itself need not be stored, it only has to be a path through
    /// the trie. Keys without tokens have no subtree.
    pub fn subtree(&self, key: &str) -> Result<&WordTrie<V>> {
        if token::is_blank(key) {
            return Err(Error::not_found(key));
        }
        self.find(key).map(|node| &node.child)
    }

    /// Get the node reached by following the supplied key, whether or not
    /// a key ends there.
    pub fn get_node(&self, key: &str) -> Result<&Node<V>> {
        self.find(key)
    }

    fn node_entry(&mut self, atom: &str, rest: &[String]) -> &mut Node<V> {
        self.nodes.entry(atom.to_owned()).or_insert_with(|| {
            let residual = rest.join(SEPARATOR);
            debug!(token = atom, residual = %residual, "creating node");
            Node::new(residual)
        })
    }

    fn insert_blank(&mut self, key: &str, value: V) -> Option<V> {
        let sentinel = self.node_entry(SENTINEL, &[]);
        if key.is_empty() {
            sentinel.store(String::new(), value)
        } else {
            sentinel
                .child
                .node_entry(key, &[])
                .store(key.to_owned(), value)
        }
    }

    fn find(&self, key: &str) -> Result<&Node<V>> {
        let mut trie = self;
        let mut found = None;
        for atom in token::tokens(key) {
            let node = trie.nodes.get(&atom).ok_or_else(|| Error::not_found(key))?;
            trie = &node.child;
            found = Some(node);
        }
        match found {
            Some(node) => Ok(node),
            None => self.find_blank(key),
        }
    }

    fn find_blank(&self, key: &str) -> Result<&Node<V>> {
        let sentinel = self.nodes.get(SENTINEL);
        let node = if key.is_empty() {
            sentinel
        } else {
            sentinel.and_then(|s| s.child.nodes.get(key))
        };
        node.ok_or_else(|| Error::not_found(key))
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for WordTrie<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for WordTrie<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = WordTrie::new();
        trie.extend(iter);
        trie
    }
}

/// Read access through a trie reference which may not exist.
///
/// ```
/// use wordtrie::{Error, TrieRef, WordTrie};
///
/// let missing: Option<&WordTrie<u8>> = None;
/// assert_eq!(missing.value("spirit"), Err(Error::NullReference));
/// ```
pub trait TrieRef<'a, V: 'a>: Sized {
    /// Resolve to the trie, or fail with [`Error::NullReference`].
    fn resolve(self) -> Result<&'a WordTrie<V>>;

    /// See [`WordTrie::value`].
    fn value(self, key: &str) -> Result<&'a V> {
        self.resolve()?.value(key)
    }

    /// See [`WordTrie::term_value`].
    fn term_value(self, key: &str) -> Result<(&'a str, &'a V)> {
        self.resolve()?.term_value(key)
    }

    /// See [`WordTrie::subtree`].
    fn subtree(self, key: &str) -> Result<&'a WordTrie<V>> {
        self.resolve()?.subtree(key)
    }
}

impl<'a, V: 'a> TrieRef<'a, V> for Option<&'a WordTrie<V>> {
    fn resolve(self) -> Result<&'a WordTrie<V>> {
        self.ok_or(Error::NullReference)
    }
}

/// Write access through a trie reference which may not exist.
pub trait TrieMut<'a, V: 'a>: Sized {
    /// Resolve to the trie, or fail with [`Error::NullReference`].
    fn resolve_mut(self) -> Result<&'a mut WordTrie<V>>;

    /// See [`WordTrie::insert`]. Nothing is stored on failure.
    fn try_insert<K: AsRef<str>>(self, key: K, value: V) -> Result<Option<V>> {
        Ok(self.resolve_mut()?.insert(key, value))
    }
}

impl<'a, V: 'a> TrieMut<'a, V> for Option<&'a mut WordTrie<V>> {
    fn resolve_mut(self) -> Result<&'a mut WordTrie<V>> {
        self.ok_or(Error::NullReference)
    }
}
