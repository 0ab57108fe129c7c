//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for
//! inserting, querying and deleting words.

use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::TrieConfig;
use crate::node::TrieNode;
use crate::prefix_view::{is_better, PrefixView, Suggestion};
use crate::util::dense_fallback;
use crate::Error;

/// Outcome of [`Trie::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Insertion {
    /// The word was not stored before.
    Unique,
    /// The word was already stored; only its insertion count changed.
    Duplicate,
}

impl Insertion {
    pub fn is_unique(self) -> bool {
        self == Insertion::Unique
    }
}

/// A mutable prefix tree over arbitrary characters.
///
/// Lowercase Latin letters are routed through a dense per-node table, every
/// other character through a sparse map. Each stored word carries an insertion
/// count and a search-hit count; the latter ranks autocomplete results.
///
/// The engine is single-threaded. Wrap it in a mutex to share it.
///
/// # Examples
///
/// ```
/// use autocomplete_trie::{Insertion, Trie};
///
/// let mut trie = Trie::new();
/// assert_eq!(trie.insert("apple"), Insertion::Unique);
/// assert_eq!(trie.insert("apple"), Insertion::Duplicate);
/// trie.insert("apply");
///
/// assert!(trie.search("apple"));
/// assert_eq!(trie.frequency("apple"), 2);
///
/// let ranked: Vec<String> = trie.autocomplete("app").into_iter().map(|s| s.word).collect();
/// assert_eq!(ranked, vec!["apple", "apply"]);
/// ```
#[derive(Debug)]
pub struct Trie {
    /// The root node, standing for the empty prefix; never a word end
    root: TrieNode,

    /// The number of words stored in the trie
    size: usize,

    config: TrieConfig,
}

impl Trie {
    /// Creates a new, empty trie with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use autocomplete_trie::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new, empty trie with the given configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Trie {
            root: TrieNode::new(),
            size: 0,
            config,
        }
    }

    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Returns the number of words stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use autocomplete_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("hello");
    /// trie.insert("hello");
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of live nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.root.subtree_nodes()
    }

    /// Inserts a word, creating any missing nodes on its path.
    ///
    /// Every call bumps the word's insertion count. The empty string marks
    /// nothing: the root never becomes a word end, so inserting `""` only
    /// reports a duplicate.
    pub fn insert(&mut self, word: &str) -> Insertion {
        if word.is_empty() {
            trace!("ignoring empty word");
            return Insertion::Duplicate;
        }

        let mut current = &mut self.root;
        for ch in word.chars() {
            current = current.child_or_insert(ch);
        }

        current.inserts += 1;
        let outcome = if current.is_word {
            Insertion::Duplicate
        } else {
            current.is_word = true;
            self.size += 1;
            Insertion::Unique
        };

        trace!(word, ?outcome, inserts = current.inserts, "inserted word");
        outcome
    }

    /// Looks up a word exactly, counting a hit if it is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use autocomplete_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("Hello");
    ///
    /// assert!(trie.search("Hello"));
    /// assert!(!trie.search("hello"));
    /// assert!(!trie.search(""));
    /// ```
    pub fn search(&mut self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        match Self::descend_mut(&mut self.root, &chars) {
            Some(node) if node.is_word => {
                node.hits += 1;
                trace!(word, hits = node.hits, "search hit");
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if `word` is stored. Unlike [`Trie::search`] this
    /// records nothing.
    pub fn contains(&self, word: &str) -> bool {
        self.resolve(word).map_or(false, |node| node.is_word)
    }

    /// Returns `true` if some stored word starts with `prefix`.
    ///
    /// The empty prefix always resolves.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.resolve(prefix).is_some()
    }

    /// Returns the net insertion count of a stored word, or 0 if absent.
    pub fn frequency(&self, word: &str) -> u64 {
        match self.resolve(word) {
            Some(node) if node.is_word => u64::try_from(node.inserts).unwrap_or(0),
            _ => 0,
        }
    }

    /// Returns every word under `prefix`, most-searched first.
    ///
    /// Each prefix character is matched exactly first and, failing that, in
    /// lowercase against the letter table, so `"APP"` finds words stored as
    /// `"app..."`. Returned words start with `prefix` as given. Equal hit
    /// counts keep their depth-first discovery order.
    ///
    /// # Examples
    ///
    /// ```
    /// use autocomplete_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("grape");
    /// trie.insert("grapefruit");
    /// trie.search("grapefruit");
    ///
    /// let words: Vec<String> = trie.autocomplete("GR").into_iter().map(|s| s.word).collect();
    /// assert_eq!(words, vec!["GRapefruit", "GRape"]);
    /// assert!(trie.autocomplete("x").is_empty());
    /// ```
    pub fn autocomplete(&self, prefix: &str) -> Vec<Suggestion> {
        let mut suggestions: Vec<Suggestion> = self.completions(prefix).iter().collect();
        suggestions.sort_by(|a, b| b.hits.cmp(&a.hits));
        suggestions
    }

    /// Returns every stored word with its hit count, in visitation order.
    ///
    /// Under [`ChildOrder::DenseFirst`](crate::ChildOrder::DenseFirst) the
    /// output is sorted among purely lowercase words only; under
    /// [`ChildOrder::CodePoint`](crate::ChildOrder::CodePoint) it is fully
    /// sorted.
    pub fn lexicographical(&self) -> Vec<Suggestion> {
        self.view(String::new(), Some(&self.root)).iter().collect()
    }

    /// Counts stored words by walking the whole tree.
    pub fn count_words(&self) -> usize {
        self.root.subtree_words()
    }

    /// Counts stored words starting with `prefix`, matched exactly.
    pub fn prefix_count(&self, prefix: &str) -> usize {
        self.view_subtrie(prefix).len()
    }

    /// Returns the longest stored word, ties going to the smallest.
    ///
    /// Returns an empty string when the trie is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use autocomplete_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("ba");
    /// trie.insert("ab");
    /// assert_eq!(trie.longest_word(), "ab");
    /// ```
    pub fn longest_word(&self) -> String {
        let mut best = String::new();
        let mut stack: Vec<(&TrieNode, String)> = vec![(&self.root, String::new())];

        while let Some((node, path)) = stack.pop() {
            if node.is_word && is_better(&path, &best) {
                best = path.clone();
            }

            for (ch, child) in node.children(self.config.child_order).into_iter().rev() {
                let mut child_path = path.clone();
                child_path.push(ch);
                stack.push((child, child_path));
            }
        }

        best
    }

    /// Returns the longest word [`Trie::autocomplete`] would offer for
    /// `prefix`, ties going to the smallest, or an empty string.
    pub fn longest_with_prefix(&self, prefix: &str) -> String {
        self.completions(prefix).longest().unwrap_or_default()
    }

    /// Returns the longest stored word that is a prefix of `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use autocomplete_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// for word in ["a", "do", "dog"] {
    ///     trie.insert(word);
    /// }
    /// assert_eq!(trie.longest_prefix_match("doghouse"), "dog");
    /// assert_eq!(trie.longest_prefix_match("cat"), "");
    /// ```
    pub fn longest_prefix_match(&self, target: &str) -> String {
        let mut current = &self.root;
        let mut matched = 0;

        for (offset, ch) in target.char_indices() {
            match current.child(ch) {
                Some(child) => current = child,
                None => break,
            }
            if current.is_word {
                matched = offset + ch.len_utf8();
            }
        }

        target[..matched].to_string()
    }

    /// Removes a stored word, pruning nodes that no longer lead anywhere.
    ///
    /// Returns `true` iff a word was removed. See [`Trie::try_delete_word`].
    pub fn delete_word(&mut self, word: &str) -> bool {
        self.try_delete_word(word).is_ok()
    }

    /// Removes a stored word, reporting why nothing was removed.
    ///
    /// The existence check goes through [`Trie::search`] when
    /// [`TrieConfig::delete_records_hit`] is set, through [`Trie::contains`]
    /// otherwise. The word's insertion count is decremented and its end mark
    /// cleared; every node left with no children and no word is unlinked.
    /// The root is never removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use autocomplete_trie::{Error, Trie};
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("apple");
    /// trie.insert("application");
    ///
    /// assert_eq!(trie.try_delete_word("apple"), Ok(()));
    /// assert_eq!(trie.try_delete_word("apple"), Err(Error::NotFound("apple".to_string())));
    /// assert_eq!(trie.try_delete_word(""), Err(Error::EmptyWord));
    /// assert!(trie.contains("application"));
    /// ```
    pub fn try_delete_word(&mut self, word: &str) -> Result<(), Error> {
        if word.is_empty() {
            return Err(Error::EmptyWord);
        }

        let found = if self.config.delete_records_hit {
            self.search(word)
        } else {
            self.contains(word)
        };
        if !found {
            debug!(word, "delete skipped, word not stored");
            return Err(Error::NotFound(word.to_string()));
        }

        let chars: Vec<char> = word.chars().collect();
        let pruned = self.unlink(&chars).ok_or_else(|| Error::NotFound(word.to_string()))?;
        self.size -= 1;

        debug!(word, pruned, "deleted word");
        Ok(())
    }

    // Clears the word at `chars` and returns how many nodes were dropped.
    // Everything prunable lies below the deepest ancestor that is a word end
    // or a branch point; that ancestor's child on the path is unlinked.
    fn unlink(&mut self, chars: &[char]) -> Option<usize> {
        let mut keep = 0;
        let mut current = &self.root;
        for (depth, &ch) in chars.iter().enumerate() {
            if current.is_word || current.child_count() > 1 {
                keep = depth;
            }
            current = current.child(ch)?;
        }

        let terminal = Self::descend_mut(&mut self.root, chars)?;
        terminal.is_word = false;
        terminal.inserts -= 1;
        if !terminal.is_prunable() {
            return Some(0);
        }

        let anchor = Self::descend_mut(&mut self.root, &chars[..keep])?;
        anchor.remove_child(chars[keep]);
        Some(chars.len() - keep)
    }

    fn descend_mut<'a>(root: &'a mut TrieNode, chars: &[char]) -> Option<&'a mut TrieNode> {
        let mut current = root;
        for &ch in chars {
            current = current.child_mut(ch)?;
        }
        Some(current)
    }

    /// Drops every node and leaves an empty, usable trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use autocomplete_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("x");
    /// trie.clear();
    /// assert_eq!(trie.count_words(), 0);
    ///
    /// trie.insert("x");
    /// assert!(trie.search("x"));
    /// ```
    pub fn clear(&mut self) {
        debug!(words = self.size, "clearing trie");
        self.root = TrieNode::new();
        self.size = 0;
    }

    /// Creates a view of the subtree at `prefix`, matched exactly.
    pub fn view_subtrie(&self, prefix: &str) -> PrefixView<'_> {
        self.view(prefix.to_string(), self.resolve(prefix))
    }

    fn view<'a>(&self, prefix: String, node: Option<&'a TrieNode>) -> PrefixView<'a> {
        PrefixView::new(prefix, node, self.config.child_order)
    }

    // Autocomplete's subtree: case-insensitive fallback resolution.
    fn completions(&self, prefix: &str) -> PrefixView<'_> {
        self.view(prefix.to_string(), self.resolve_folded(prefix))
    }

    fn resolve(&self, prefix: &str) -> Option<&TrieNode> {
        let mut current = &self.root;
        for ch in prefix.chars() {
            current = current.child(ch)?;
        }
        Some(current)
    }

    fn resolve_folded(&self, prefix: &str) -> Option<&TrieNode> {
        let mut current = &self.root;
        for ch in prefix.chars() {
            current = match current.sparse_child(ch) {
                Some(child) => child,
                None => current.dense_child(dense_fallback(ch)?)?,
            };
        }
        Some(current)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
