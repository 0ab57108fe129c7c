//! Walkthrough of the trie operations
use autocomplete_trie::Trie;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut trie = Trie::new();

    for word in ["apple", "banana", "orange", "grape", "kiwi", "apple"] {
        let outcome = trie.insert(word);
        println!("Inserted: {} ({:?})", word, outcome);
    }

    for word in ["apple", "kiwi", "apple", "grape", "app"] {
        let found = trie.search(word);
        println!("Search '{}': {}", word, if found { "FOUND" } else { "NOT FOUND" });
    }

    for word in ["application", "appetizer", "application", "banister", "bandana"] {
        trie.insert(word);
    }

    for prefix in ["app", "ban", "ORA", "x"] {
        let suggestions: Vec<String> = trie.autocomplete(prefix).iter().map(ToString::to_string).collect();
        if suggestions.is_empty() {
            println!("Autocomplete for '{}': No suggestions found", prefix);
        } else {
            println!("Autocomplete for '{}': {}", prefix, suggestions.join(", "));
        }
    }

    println!("Words with prefix 'app': {}", trie.prefix_count("app"));
    println!("Longest word: {}", trie.longest_word());
    println!("Longest word under 'ban': {}", trie.longest_with_prefix("ban"));
    println!("Frequency of 'application': {}", trie.frequency("application"));

    println!("Deleted 'apple': {}", trie.delete_word("apple"));
    println!("Words with prefix 'app': {}", trie.prefix_count("app"));

    for suggestion in trie.lexicographical() {
        println!("  {}", suggestion);
    }

    trie.clear();
    println!("After clear: {} words", trie.count_words());
}
