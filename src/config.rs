//! Engine options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order in which a node's children are visited during enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChildOrder {
    /// Dense `a..=z` children first, then sparse children by code point.
    ///
    /// Listing is ordered among purely lowercase words only; a word such as
    /// `"Zoo"` sorts after every lowercase sibling.
    #[default]
    DenseFirst,
    /// Both child classes merged into one ascending code-point order, which
    /// makes listing agree with `str` ordering for every word.
    CodePoint,
}

/// Options controlling a [`Trie`](crate::Trie).
///
/// The default reproduces the canonical engine behavior.
///
/// ```rust
/// use autocomplete_trie::{ChildOrder, Trie, TrieConfig};
///
/// let config = TrieConfig::new()
///     .with_child_order(ChildOrder::CodePoint)
///     .with_delete_records_hit(false);
/// let trie = Trie::with_config(config);
/// assert_eq!(trie.config().child_order, ChildOrder::CodePoint);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrieConfig {
    /// Whether `delete_word` checks existence through `search`, which counts
    /// as a hit on the word being deleted.
    pub delete_records_hit: bool,
    /// Child visitation order for enumeration.
    pub child_order: ChildOrder,
}

impl TrieConfig {
    pub fn new() -> Self {
        TrieConfig {
            delete_records_hit: true,
            child_order: ChildOrder::DenseFirst,
        }
    }

    pub fn with_delete_records_hit(mut self, records_hit: bool) -> Self {
        self.delete_records_hit = records_hit;
        self
    }

    pub fn with_child_order(mut self, order: ChildOrder) -> Self {
        self.child_order = order;
        self
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_canonical() {
        let config = TrieConfig::default();
        assert!(config.delete_records_hit);
        assert_eq!(config.child_order, ChildOrder::DenseFirst);
    }

    #[test]
    fn test_builder() {
        let config = TrieConfig::new()
            .with_delete_records_hit(false)
            .with_child_order(ChildOrder::CodePoint);
        assert!(!config.delete_records_hit);
        assert_eq!(config.child_order, ChildOrder::CodePoint);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_tokens() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &TrieConfig::new().with_child_order(ChildOrder::CodePoint),
            &[
                Token::Struct { name: "TrieConfig", len: 2 },
                Token::Str("delete_records_hit"),
                Token::Bool(true),
                Token::Str("child_order"),
                Token::UnitVariant { name: "ChildOrder", variant: "CodePoint" },
                Token::StructEnd,
            ],
        );
    }
}
