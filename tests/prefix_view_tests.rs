use autocomplete_trie::{ChildOrder, Suggestion, Trie, TrieConfig};
use std::collections::HashSet;

fn fruit_trie() -> Trie {
    let mut trie = Trie::new();
    trie.extend(["hello", "help", "world"]);
    trie
}

#[test]
fn test_prefix_view_creation() {
    let trie = fruit_trie();

    // Create a view with a prefix that exists
    let view = trie.view_subtrie("hel");

    // Basic properties
    assert!(view.exists());
    assert_eq!(view.prefix(), "hel");
    assert_eq!(view.len(), 2);
    assert!(!view.is_empty());
}

#[test]
fn test_prefix_view_lexicographic_iteration() {
    // Keys deliberately not in lexicographic order
    let trie: Trie = [
        "zebra",
        "apple",
        "banana",
        "cherry",
        "date",
        "apricot",
        "blueberry",
        "blackberry",
    ]
    .iter()
    .collect();

    let a_words: Vec<String> = trie.view_subtrie("a").iter().map(|s| s.word).collect();
    assert_eq!(a_words, vec!["apple", "apricot"]);

    let b_words: Vec<String> = trie.view_subtrie("b").iter().map(|s| s.word).collect();
    assert_eq!(b_words, vec!["banana", "blackberry", "blueberry"]);

    // A multi-character prefix that includes part of some keys
    let complex: Trie = ["abcd", "abce", "abcf", "abcg", "abd"].iter().collect();

    let mut abc_words = Vec::new();
    for suggestion in &complex.view_subtrie("abc") {
        abc_words.push(suggestion.word);
    }
    assert_eq!(abc_words, vec!["abcd", "abce", "abcf", "abcg"]);
}

#[test]
fn test_prefix_view_nonexistent() {
    let trie = fruit_trie();

    let view = trie.view_subtrie("xyz");

    assert!(!view.exists());
    assert_eq!(view.len(), 0);
    assert!(view.is_empty());
    assert!(!view.contains("hello"));
    assert_eq!(view.longest(), None);
}

#[test]
fn test_prefix_view_is_case_sensitive() {
    let trie = fruit_trie();

    // Unlike autocomplete, views never fold case
    assert!(!trie.view_subtrie("HEL").exists());
    assert_eq!(trie.autocomplete("HEL").len(), 2);
}

#[test]
fn test_prefix_view_contains() {
    let trie = fruit_trie();
    let view = trie.view_subtrie("hel");

    assert!(view.contains("hello"));
    assert!(view.contains("help"));

    // Outside the prefix, or not a stored word
    assert!(!view.contains("world"));
    assert!(!view.contains("he"));
    assert!(!view.contains("hel"));
}

#[test]
fn test_prefix_view_hits() {
    let mut trie = fruit_trie();
    trie.search("help");
    trie.search("help");

    let view = trie.view_subtrie("hel");

    assert_eq!(view.hits("help"), Some(2));
    assert_eq!(view.hits("hello"), Some(0));
    assert_eq!(view.hits("world"), None);
    assert_eq!(view.hits("he"), None);
}

#[test]
fn test_prefix_view_iter() {
    let mut trie = fruit_trie();
    trie.search("hello");

    let results: HashSet<Suggestion> = trie.view_subtrie("hel").iter().collect();

    let expected: HashSet<Suggestion> = vec![Suggestion::new("hello", 1), Suggestion::new("help", 0)]
        .into_iter()
        .collect();

    assert_eq!(results, expected);
}

#[test]
fn test_prefix_view_partial_prefix() {
    let trie: Trie = ["hello", "help"].iter().collect();

    // Prefix is a partial match of "hello"
    let view = trie.view_subtrie("he");

    // The prefix exists, but is not a word itself
    assert!(view.exists());
    assert_eq!(view.len(), 2);
    assert!(!view.contains("he"));

    assert!(view.contains("hello"));
    assert!(view.contains("help"));
}

#[test]
fn test_prefix_view_nested() {
    let trie: Trie = ["a", "ab", "abc", "abcd"].iter().collect();

    let view_a = trie.view_subtrie("a");
    let view_ab = trie.view_subtrie("ab");
    let view_abc = trie.view_subtrie("abc");

    assert_eq!(view_a.len(), 4);
    assert_eq!(view_ab.len(), 3);
    assert_eq!(view_abc.len(), 2);

    assert!(view_a.contains("a"));
    assert!(view_a.contains("abc"));

    assert!(!view_ab.contains("a"));
    assert!(view_ab.contains("ab"));
    assert!(view_ab.contains("abc"));

    assert!(!view_abc.contains("ab"));
    assert!(view_abc.contains("abc"));
    assert!(view_abc.contains("abcd"));

    assert_eq!(view_a.longest(), Some("abcd".to_string()));
}

#[test]
fn test_prefix_view_empty_prefix() {
    let trie = fruit_trie();

    // Empty prefix should match the entire trie
    let view = trie.view_subtrie("");

    assert!(view.exists());
    assert_eq!(view.len(), 3);
    assert!(view.contains("hello"));
    assert!(view.contains("world"));
}

#[test]
fn test_prefix_view_mixed_characters() {
    let trie: Trie = ["a-b", "a_b", "aB", "ab"].iter().collect();

    let dense_first: Vec<String> = trie.view_subtrie("a").iter().map(|s| s.word).collect();
    assert_eq!(dense_first, vec!["ab", "a-b", "aB", "a_b"]);

    let mut sorted = Trie::with_config(TrieConfig::new().with_child_order(ChildOrder::CodePoint));
    sorted.extend(["a-b", "a_b", "aB", "ab"]);
    let code_point: Vec<String> = sorted.view_subtrie("a").iter().map(|s| s.word).collect();
    assert_eq!(code_point, vec!["a-b", "aB", "a_b", "ab"]);
}

#[test]
fn test_prefix_view_cloning() {
    let trie = fruit_trie();

    let view = trie.view_subtrie("hel");
    let view_clone = view.clone();

    assert_eq!(view.len(), view_clone.len());
    assert!(view_clone.contains("hello"));
    assert_eq!(view.hits("hello"), view_clone.hits("hello"));
    assert_eq!(
        view.iter().collect::<Vec<_>>(),
        view_clone.iter().collect::<Vec<_>>()
    );
}
