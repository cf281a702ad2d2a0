//! Provides WordTrie iterators.
//!
//! Iteration is depth-first and yields one item per stored key. Sibling
//! tokens are visited in map order, which is unspecified and may differ
//! between runs. Use [`WordTrie::iter_sorted`] when a stable order is
//! needed.
//!
//! ```
//! use wordtrie::WordTrie;
//!
//! let mut trie = WordTrie::new();
//! trie.insert("Spirit", 1);
//! trie.insert("Spirit of Truth", 2);
//!
//! let terms: Vec<&str> = trie.iter_sorted().map(|entry| entry.term).collect();
//! assert_eq!(terms, vec!["spirit", "spirit of truth"]);
//! ```
use std::collections::hash_map;

use crate::trie::{Node, WordTrie};

/// Iterator Item
#[derive(Debug)]
pub struct Entry<V> {
    pub term: String,
    pub value: V,
}

/// Iterator Item
#[derive(Debug)]
pub struct EntryRef<'a, V> {
    /// Zero for keys of one token (and the empty key).
    pub depth: usize,
    /// The last token of the key.
    pub token: &'a str,
    pub term: &'a str,
    pub value: &'a V,
}

/// Iterator over a WordTrie.
#[derive(Debug)]
pub struct Iter<'a, V> {
    stack: Vec<(usize, hash_map::Iter<'a, String, Node<V>>)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = EntryRef<'a, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, siblings)) = self.stack.last_mut() {
            let depth = *depth;
            match siblings.next() {
                Some((token, node)) => {
                    self.stack.push((depth + 1, node.child.nodes.iter()));
                    if let Some(value) = &node.value {
                        return Some(EntryRef {
                            depth,
                            token,
                            term: &node.term,
                            value,
                        });
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Consuming iterator over a WordTrie.
#[derive(Debug)]
pub struct IntoIter<V> {
    stack: Vec<hash_map::IntoIter<String, Node<V>>>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(siblings) = self.stack.last_mut() {
            match siblings.next() {
                Some((_token, node)) => {
                    self.stack.push(node.child.nodes.into_iter());
                    if let Some(value) = node.value {
                        return Some(Entry {
                            term: node.term,
                            value,
                        });
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl<V> IntoIterator for WordTrie<V> {
    type Item = Entry<V>;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            stack: vec![self.nodes.into_iter()],
        }
    }
}

impl<'a, V> IntoIterator for &'a WordTrie<V> {
    type Item = EntryRef<'a, V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            stack: vec![(0, self.nodes.iter())],
        }
    }
}

impl<V> WordTrie<V> {
    /// Create an iterator over the WordTrie.
    pub fn iter(&self) -> Iter<'_, V> {
        self.into_iter()
    }

    /// Create an iterator over the WordTrie, ordered by term.
    pub fn iter_sorted(&self) -> impl Iterator<Item = EntryRef<'_, V>> {
        let mut v = self.iter().collect::<Vec<EntryRef<'_, V>>>();
        v.sort_by(|a, b| a.term.cmp(b.term));
        v.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{distributions::Alphanumeric, thread_rng, Rng};
    use std::collections::HashSet;

    fn populated() -> WordTrie<usize> {
        let mut trie = WordTrie::new();
        for (idx, key) in [
            "",
            " ",
            "spirit",
            "spirit of truth",
            "spirit of wisdom",
            "spirit of wisdom is great",
            "spiritual",
        ]
        .iter()
        .enumerate()
        {
            trie.insert(key, idx);
        }
        trie
    }

    #[test]
    fn it_iterates_over_empty_trie() {
        let trie: WordTrie<usize> = WordTrie::new();
        assert_eq!(trie.iter().count(), 0);
        assert_eq!(trie.into_iter().count(), 0);
    }

    #[test]
    fn it_visits_every_terminal_once() {
        let trie = populated();
        // Sibling order is not deterministic, compare as sets
        let seen: HashSet<(&str, usize)> = trie.iter().map(|e| (e.term, *e.value)).collect();
        let expected: HashSet<(&str, usize)> = [
            ("", 0),
            (" ", 1),
            ("spirit", 2),
            ("spirit of truth", 3),
            ("spirit of wisdom", 4),
            ("spirit of wisdom is great", 5),
            ("spiritual", 6),
        ]
        .into_iter()
        .collect();
        assert_eq!(trie.iter().count(), 7);
        assert_eq!(seen, expected);
    }

    #[test]
    fn it_reports_depth_and_token() {
        let trie = populated();
        for entry in trie.iter().filter(|e| !e.term.trim().is_empty()) {
            assert_eq!(entry.depth, entry.term.split(' ').count() - 1);
            assert_eq!(Some(entry.token), entry.term.split(' ').last());
        }
    }

    #[test]
    fn it_iterates_over_owned_populated_trie() {
        let trie = populated();
        let expected = trie
            .iter()
            .map(|e| (e.term.to_string(), *e.value))
            .sorted()
            .collect::<Vec<_>>();
        let owned = trie
            .into_iter()
            .map(|e| (e.term, e.value))
            .sorted()
            .collect::<Vec<_>>();
        assert_eq!(owned, expected);
    }

    #[test]
    fn it_can_iter_sorted() {
        let trie = populated();
        let terms: Vec<&str> = trie.iter_sorted().map(|e| e.term).collect();
        assert_eq!(
            terms,
            vec![
                "",
                " ",
                "spirit",
                "spirit of truth",
                "spirit of wisdom",
                "spirit of wisdom is great",
                "spiritual",
            ]
        );
    }

    #[test]
    fn it_finds_in_populated_trie() {
        static POPULATION_SIZE: usize = 500;
        static WORDS: usize = 6;
        let mut trie: WordTrie<usize> = WordTrie::new();
        let mut searches: HashSet<String> = HashSet::new();
        for _i in 0..POPULATION_SIZE {
            let words = thread_rng().gen_range(1..=WORDS);
            let entry = (0..words)
                .map(|_| {
                    thread_rng()
                        .sample_iter(&Alphanumeric)
                        .take(thread_rng().gen_range(1..=3))
                        .map(char::from)
                        .collect::<String>()
                })
                .join(" ");
            let len = entry.len();
            trie.insert(&entry, len);
            searches.insert(entry.to_lowercase());
        }
        assert_eq!(trie.iter().count(), searches.len());
        for entry in trie.iter() {
            assert!(searches.contains(entry.term));
        }
    }
}
