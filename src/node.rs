//! Internal node implementation for the trie.
//!
//! This module contains the `TrieNode` structure that forms the backbone of the
//! engine. Each node owns its children outright and the tree has no back
//! references.

use std::collections::BTreeMap;
use std::mem;

use crate::config::ChildOrder;
use crate::util::{dense_char, Slot, DENSE_WIDTH};

/// Internal node type for the trie.
///
/// Children are addressed through two disjoint schemes: a fixed table for the
/// lowercase letters `a..=z` and a sparse map for every other character.
/// Callers go through [`TrieNode::child`] and friends and never branch on the
/// scheme themselves.
#[derive(Debug)]
pub(crate) struct TrieNode {
    /// Whether some stored word terminates here
    pub is_word: bool,

    /// Number of successful exact searches for the word ending here
    pub hits: u64,

    /// Inserts minus deletes of the word ending here; never floored at zero
    pub inserts: i64,

    dense: [Option<Box<TrieNode>>; DENSE_WIDTH],

    sparse: BTreeMap<char, Box<TrieNode>>,
}

impl TrieNode {
    /// Creates a new empty node
    pub fn new() -> Self {
        TrieNode {
            is_word: false,
            hits: 0,
            inserts: 0,
            dense: Default::default(),
            sparse: BTreeMap::new(),
        }
    }

    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        match Slot::of(ch) {
            Slot::Dense(index) => self.dense[index].as_deref(),
            Slot::Sparse(key) => self.sparse.get(&key).map(|child| &**child),
        }
    }

    pub fn child_mut(&mut self, ch: char) -> Option<&mut TrieNode> {
        match Slot::of(ch) {
            Slot::Dense(index) => self.dense[index].as_deref_mut(),
            Slot::Sparse(key) => self.sparse.get_mut(&key).map(|child| &mut **child),
        }
    }

    /// Looks up a dense-table child directly by index.
    pub fn dense_child(&self, index: usize) -> Option<&TrieNode> {
        self.dense.get(index).and_then(|slot| slot.as_deref())
    }

    /// Looks up a sparse child by exact code point, without routing.
    pub fn sparse_child(&self, ch: char) -> Option<&TrieNode> {
        self.sparse.get(&ch).map(|child| &**child)
    }

    /// Returns the child for `ch`, creating an empty one if absent.
    pub fn child_or_insert(&mut self, ch: char) -> &mut TrieNode {
        let child = match Slot::of(ch) {
            Slot::Dense(index) => self.dense[index].get_or_insert_with(|| Box::new(TrieNode::new())),
            Slot::Sparse(key) => self
                .sparse
                .entry(key)
                .or_insert_with(|| Box::new(TrieNode::new())),
        };
        &mut **child
    }

    /// Unlinks and drops the child for `ch`, returning whether one existed.
    pub fn remove_child(&mut self, ch: char) -> bool {
        match Slot::of(ch) {
            Slot::Dense(index) => self.dense[index].take().is_some(),
            Slot::Sparse(key) => self.sparse.remove(&key).is_some(),
        }
    }

    pub fn child_count(&self) -> usize {
        self.sparse.len() + self.dense.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn has_children(&self) -> bool {
        !self.sparse.is_empty() || self.dense.iter().any(Option::is_some)
    }

    /// A node that is neither a word end nor a branch point carries no
    /// information and must not stay reachable.
    pub fn is_prunable(&self) -> bool {
        !self.is_word && !self.has_children()
    }

    /// Returns the children in ascending visitation order for `order`.
    pub fn children(&self, order: ChildOrder) -> Vec<(char, &TrieNode)> {
        let mut children: Vec<(char, &TrieNode)> = self
            .dense
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_deref().map(|child| (dense_char(index), child)))
            .collect();
        children.extend(self.sparse.iter().map(|(&ch, child)| (ch, &**child)));

        if order == ChildOrder::CodePoint {
            children.sort_by_key(|&(ch, _)| ch);
        }

        children
    }

    /// Returns the number of words stored in this subtree
    pub fn subtree_words(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.is_word {
                count += 1;
            }
            stack.extend(node.children(ChildOrder::DenseFirst).into_iter().map(|(_, child)| child));
        }

        count
    }

    /// Returns the number of nodes in this subtree, including this one
    pub fn subtree_nodes(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children(ChildOrder::DenseFirst).into_iter().map(|(_, child)| child));
        }

        count
    }

    fn take_children(&mut self) -> Vec<Box<TrieNode>> {
        let mut taken: Vec<Box<TrieNode>> = self.dense.iter_mut().filter_map(Option::take).collect();
        taken.extend(mem::take(&mut self.sparse).into_values());
        taken
    }
}

// Unlinks descendants onto a heap stack before they drop, so teardown depth
// does not depend on tree depth.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack = self.take_children();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_children());
        }
    }
}
