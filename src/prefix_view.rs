//! Prefix view into a trie.
//!
//! This module provides the `PrefixView` type, a borrowed view of the subtree
//! below a resolved prefix, and `PrefixViewIter`, the depth-first walk that
//! every enumerating operation on [`Trie`](crate::Trie) is built on.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::ChildOrder;
use crate::node::TrieNode;

/// A stored word together with the number of successful searches for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Suggestion {
    pub word: String,
    pub hits: u64,
}

impl Suggestion {
    pub fn new(word: impl Into<String>, hits: u64) -> Self {
        Suggestion {
            word: word.into(),
            hits,
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}--->{}", self.word, self.hits)
    }
}

/// A lightweight view into the subtree below a key prefix.
///
/// Views borrow the trie, so the trie cannot be mutated while one is alive.
///
/// # Examples
///
/// ```
/// use autocomplete_trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("hello");
/// trie.insert("help");
/// trie.insert("world");
///
/// let view = trie.view_subtrie("hel");
/// assert!(view.exists());
/// assert_eq!(view.len(), 2);
///
/// let words: Vec<String> = view.iter().map(|s| s.word).collect();
/// assert_eq!(words, vec!["hello", "help"]);
/// ```
#[derive(Clone)]
pub struct PrefixView<'a> {
    /// The text every yielded word starts with
    prefix: String,

    /// The subtree root at the prefix, if the prefix resolved
    node: Option<&'a TrieNode>,

    order: ChildOrder,
}

/// An iterator over the words of a `PrefixView`.
///
/// Walks the subtree depth-first with an explicit stack. Children are pushed
/// in descending visitation order so they pop in ascending order, and a node
/// is yielded before its descendants; under [`ChildOrder::CodePoint`] the
/// output is therefore sorted.
pub struct PrefixViewIter<'a> {
    stack: Vec<(&'a TrieNode, String)>,
    order: ChildOrder,
}

impl<'a> PrefixView<'a> {
    pub(crate) fn new(prefix: String, node: Option<&'a TrieNode>, order: ChildOrder) -> Self {
        PrefixView { prefix, node, order }
    }

    /// Returns the prefix for this view.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns whether the prefix resolved to a path in the trie.
    pub fn exists(&self) -> bool {
        self.node.is_some()
    }

    /// Returns the number of words in this view.
    pub fn len(&self) -> usize {
        self.node.map_or(0, TrieNode::subtree_words)
    }

    /// Returns whether this view holds no words.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the view contains a word.
    ///
    /// Only returns true if the word starts with the prefix and is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.hits(word).is_some()
    }

    /// Gets the search-hit count of a word in this view.
    pub fn hits(&self, word: &str) -> Option<u64> {
        let rest = word.strip_prefix(self.prefix.as_str())?;

        let mut current = self.node?;
        for ch in rest.chars() {
            current = current.child(ch)?;
        }

        if current.is_word {
            Some(current.hits)
        } else {
            None
        }
    }

    /// Returns an iterator over the words in the view, in visitation order.
    pub fn iter(&self) -> PrefixViewIter<'a> {
        let mut stack = Vec::new();
        if let Some(node) = self.node {
            stack.push((node, self.prefix.clone()));
        }

        PrefixViewIter {
            stack,
            order: self.order,
        }
    }

    /// Returns the longest word in the view, ties going to the smallest.
    ///
    /// Returns `None` when the view holds no words.
    pub fn longest(&self) -> Option<String> {
        self.iter()
            .map(|suggestion| suggestion.word)
            .fold(None, |best, word| match best {
                Some(current) if !is_better(&word, &current) => Some(current),
                _ => Some(word),
            })
    }
}

/// Longest-word ranking: more characters wins, then the smaller string.
pub(crate) fn is_better(candidate: &str, best: &str) -> bool {
    let (candidate_len, best_len) = (candidate.chars().count(), best.chars().count());
    candidate_len > best_len || (candidate_len == best_len && candidate < best)
}

impl fmt::Debug for PrefixView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("exists", &self.exists())
            .field("order", &self.order)
            .finish()
    }
}

impl<'a> IntoIterator for &PrefixView<'a> {
    type Item = Suggestion;
    type IntoIter = PrefixViewIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for PrefixViewIter<'a> {
    type Item = Suggestion;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path)) = self.stack.pop() {
            for (ch, child) in node.children(self.order).into_iter().rev() {
                let mut child_path = String::with_capacity(path.len() + ch.len_utf8());
                child_path.push_str(&path);
                child_path.push(ch);
                self.stack.push((child, child_path));
            }

            if node.is_word {
                return Some(Suggestion {
                    word: path,
                    hits: node.hits,
                });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(words: &[&str]) -> TrieNode {
        let mut root = TrieNode::new();
        for word in words {
            let mut node = &mut root;
            for ch in word.chars() {
                node = node.child_or_insert(ch);
            }
            node.is_word = true;
        }
        root
    }

    #[test]
    fn test_missing_view() {
        let view = PrefixView::new("zz".to_string(), None, ChildOrder::DenseFirst);

        assert!(!view.exists());
        assert_eq!(view.len(), 0);
        assert!(view.is_empty());
        assert_eq!(view.iter().count(), 0);
        assert_eq!(view.longest(), None);
    }

    #[test]
    fn test_iter_prefixes_words() {
        let root = build(&["cab", "car", "cart"]);
        let node = root.child('c').and_then(|n| n.child('a'));
        let view = PrefixView::new("Ca".to_string(), node, ChildOrder::DenseFirst);

        let words: Vec<String> = view.iter().map(|s| s.word).collect();
        assert_eq!(words, vec!["Cab", "Car", "Cart"]);
    }

    #[test]
    fn test_iter_order_dense_first() {
        let root = build(&["b", "B", "a", "_"]);
        let view = PrefixView::new(String::new(), Some(&root), ChildOrder::DenseFirst);

        let words: Vec<String> = (&view).into_iter().map(|s| s.word).collect();
        assert_eq!(words, vec!["a", "b", "B", "_"]);
    }

    #[test]
    fn test_iter_order_code_point() {
        let root = build(&["b", "B", "a", "_", "ab"]);
        let view = PrefixView::new(String::new(), Some(&root), ChildOrder::CodePoint);

        let words: Vec<String> = view.iter().map(|s| s.word).collect();
        assert_eq!(words, vec!["B", "_", "a", "ab", "b"]);
    }

    #[test]
    fn test_longest_tie_break() {
        let root = build(&["ba", "ab", "c"]);
        let view = PrefixView::new(String::new(), Some(&root), ChildOrder::DenseFirst);
        assert_eq!(view.longest(), Some("ab".to_string()));
    }

    #[test]
    fn test_is_better_counts_chars() {
        // two chars, four bytes
        assert!(!is_better("éé", "abc"));
        assert!(is_better("abc", "éé"));
        assert!(is_better("aa", "ab"));
        assert!(!is_better("ab", "ab"));
    }

    #[test]
    fn test_suggestion_display() {
        assert_eq!(Suggestion::new("apple", 3).to_string(), "apple--->3");
    }
}
