//! Longest-prefix routing over URL paths
use autocomplete_trie::Trie;
use url::Url;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Route table keyed by path prefix
    let routes: Trie = ["/", "/blog", "/blog/", "/blog/archive", "/api/v1/", "/api/v2/"]
        .iter()
        .collect();

    let requests = [
        "https://example.com/",
        "https://example.com/about",
        "https://example.com/blog",
        "https://example.com/blog/first-post",
        "https://example.com/blog/archive/2023",
        "https://example.com/api/v1/users?page=2",
        "https://example.com/api/v3/users",
    ];

    println!("Routing requests:");
    for request in requests.iter() {
        let url = Url::parse(request)?;
        let route = routes.longest_prefix_match(url.path());
        println!("  {} → {}", url.path(), route);
    }

    println!("\nRoutes under /blog:");
    for suggestion in &routes.view_subtrie("/blog") {
        println!("  {}", suggestion.word);
    }

    Ok(())
}
