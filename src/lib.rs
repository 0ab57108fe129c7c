//! # Autocomplete Trie
//!
//! A mutable prefix tree for predictive text entry, symbol tables and
//! prefix-based routing.
//!
//! Words of any characters can be stored. Lowercase Latin letters take a fast
//! per-node table, everything else a sparse map. Each word tracks how often it
//! was inserted and how often it was found by [`Trie::search`]; the latter
//! ranks [`Trie::autocomplete`] results.
//!
//! ## Features
//!
//! - **Ranked autocomplete**: Completions ordered by search hits
//! - **Pruning deletes**: Removing a word drops every node that no longer leads anywhere
//! - **Longest matches**: Longest stored word, longest completion, and greedy longest-prefix match
//! - **Prefix Views**: Borrowed views of the words below a prefix
//!
//! ## Example
//!
//! ```rust
//! use autocomplete_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("apple");
//! trie.insert("application");
//! trie.insert("appetizer");
//!
//! assert!(trie.search("application"));
//! assert_eq!(trie.prefix_count("app"), 3);
//! assert_eq!(trie.autocomplete("app")[0].word, "application");
//!
//! assert!(trie.delete_word("apple"));
//! assert_eq!(trie.prefix_count("app"), 2);
//! ```
//!
//! The engine holds no locks. Callers sharing one across threads must
//! serialize every call, reads included, since `search` records hits.

mod config;
mod node;
mod prefix_view;
mod trie;
mod util;

// Re-export public types
pub use crate::config::{ChildOrder, TrieConfig};
pub use crate::prefix_view::{PrefixView, PrefixViewIter, Suggestion};
pub use crate::trie::{Insertion, Trie};

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The empty word is never stored
    #[error("cannot delete the empty word")]
    EmptyWord,
    /// The word is not stored in the trie
    #[error("word not found: {0:?}")]
    NotFound(String),
}
