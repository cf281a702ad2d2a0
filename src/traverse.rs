//! Dumps the structure of a WordTrie.
//!
//! Every node is written on its own line as `[token] = [value]`, with
//! interior nodes showing an empty value. Each level of the trie is
//! indented by one more copy of [`TraverseOptions::indent`], starting from
//! [`TraverseOptions::prefix`]. Siblings appear in unspecified order.
//!
//! ```
//! use wordtrie::{traverse::TraverseOptions, WordTrie};
//!
//! let mut trie = WordTrie::new();
//! trie.insert("Spirit of Truth", "This is Spirit of Truth");
//!
//! let options = TraverseOptions::default().with_indent("..");
//! assert_eq!(
//!     trie.dump(&options).to_string(),
//!     "[spirit] = []\n..[of] = []\n....[truth] = [This is Spirit of Truth]\n"
//! );
//! ```

use std::fmt;
use std::io;

use crate::trie::WordTrie;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Controls the layout of a dump.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", default)
)]
pub struct TraverseOptions {
    /// Written before every top level line.
    pub prefix: String,
    /// Appended to the prefix for every level below the top.
    pub indent: String,
}

impl Default for TraverseOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            indent: "\t".to_string(),
        }
    }
}

impl TraverseOptions {
    pub fn new<P: Into<String>, I: Into<String>>(prefix: P, indent: I) -> Self {
        Self {
            prefix: prefix.into(),
            indent: indent.into(),
        }
    }

    pub fn with_prefix<P: Into<String>>(mut self, prefix: P) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_indent<I: Into<String>>(mut self, indent: I) -> Self {
        self.indent = indent.into();
        self
    }
}

/// Displays a WordTrie using some [`TraverseOptions`].
#[derive(Debug)]
pub struct Dump<'a, V> {
    trie: &'a WordTrie<V>,
    options: &'a TraverseOptions,
}

impl<V: fmt::Display> Dump<'_, V> {
    fn write_level(
        f: &mut fmt::Formatter<'_>,
        trie: &WordTrie<V>,
        prefix: &str,
        indent: &str,
    ) -> fmt::Result {
        let nested = format!("{prefix}{indent}");
        for (token, node) in &trie.nodes {
            match &node.value {
                Some(value) => writeln!(f, "{prefix}[{token}] = [{value}]")?,
                None => writeln!(f, "{prefix}[{token}] = []")?,
            }
            Self::write_level(f, &node.child, &nested, indent)?;
        }
        Ok(())
    }
}

impl<V: fmt::Display> fmt::Display for Dump<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_level(f, self.trie, &self.options.prefix, &self.options.indent)
    }
}

impl<V: fmt::Display> WordTrie<V> {
    /// Lazily format every node of the WordTrie.
    pub fn dump<'a>(&'a self, options: &'a TraverseOptions) -> Dump<'a, V> {
        Dump {
            trie: self,
            options,
        }
    }

    /// Write every node of the WordTrie to `out`.
    pub fn traverse<W: io::Write>(&self, out: &mut W, options: &TraverseOptions) -> io::Result<()> {
        write!(out, "{}", self.dump(options))
    }
}

impl<V: fmt::Display> fmt::Display for WordTrie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.dump(&TraverseOptions::default()), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn lines(dump: &str) -> HashSet<&str> {
        dump.lines().collect()
    }

    #[test]
    fn it_dumps_an_empty_trie() {
        let trie: WordTrie<usize> = WordTrie::new();
        assert_eq!(trie.to_string(), "");
    }

    #[test]
    fn it_dumps_every_node_with_indentation() {
        let mut trie = WordTrie::new();
        trie.insert("Spirit", "This is spirit");
        trie.insert("Spirit of Truth", "This is Spirit of Truth");
        trie.insert("Spirit of Wisdom", "This is Spirit of Wisdom");
        trie.insert("Spiritual", "Spiritual values");

        let options = TraverseOptions::new("\t", "........");
        let out = trie.dump(&options).to_string();
        assert_eq!(out.lines().count(), 5);
        // Siblings come out in map order, so only the set of lines is fixed
        assert_eq!(
            lines(&out),
            [
                "\t[spirit] = [This is spirit]",
                "\t........[of] = []",
                "\t................[truth] = [This is Spirit of Truth]",
                "\t................[wisdom] = [This is Spirit of Wisdom]",
                "\t[spiritual] = [Spiritual values]",
            ]
            .into_iter()
            .collect()
        );
    }

    #[test]
    fn it_nests_children_below_parents() {
        let mut trie = WordTrie::new();
        trie.insert("a b c", 1);
        let options = TraverseOptions::default().with_prefix(">").with_indent("-");
        assert_eq!(
            trie.dump(&options).to_string(),
            ">[a] = []\n>-[b] = []\n>--[c] = [1]\n"
        );
    }

    #[test]
    fn it_shows_blank_keys_under_the_sentinel() {
        let mut trie = WordTrie::new();
        trie.insert("", "Null Key");
        trie.insert(" ", "Space");
        assert_eq!(trie.to_string(), "[] = [Null Key]\n\t[ ] = [Space]\n");
    }

    #[test]
    fn it_writes_to_a_sink_repeatedly() {
        let mut trie = WordTrie::new();
        trie.insert("spirit of truth", 3);
        trie.insert("spirit", 1);
        let options = TraverseOptions::default();
        let mut first = Vec::new();
        let mut second = Vec::new();
        trie.traverse(&mut first, &options).expect("writing");
        trie.traverse(&mut second, &options).expect("writing");
        assert_eq!(
            String::from_utf8(first.clone()).expect("utf8"),
            "[spirit] = [1]\n\t[of] = []\n\t\t[truth] = [3]\n"
        );
        assert_eq!(first, second);
    }

    #[test]
    fn it_uses_default_options() {
        let options = TraverseOptions::default();
        assert_eq!(options.prefix, "");
        assert_eq!(options.indent, "\t");
    }

    #[test]
    fn it_deserializes_partial_options() {
        let options: TraverseOptions =
            serde_json::from_str(r#"{"indent":"  "}"#).expect("deserializing");
        assert_eq!(options, TraverseOptions::default().with_indent("  "));
    }
}
