use tracing_subscriber::EnvFilter;
use wordtrie::{traverse::TraverseOptions, WordTrie};

fn main() -> std::io::Result<()> {
    // RUST_LOG=wordtrie=debug shows node creation
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Create our trie
    let mut trie = WordTrie::new();

    // Blank keys are keys too
    trie.insert("", "Null Key");
    trie.insert(" ", "Space");
    trie.insert("  ", "Multiple Spaces");

    trie.insert("Spirit", "This is spirit");
    trie.insert("Spirit of Truth", "This is Spirit of Truth");
    trie.insert("Spirit of Wisdom", "This is Spirit of Wisdom");
    trie.insert(
        "Spirit of Wisdom is great",
        "This is Spirit of Wisdom is great",
    );
    trie.insert("Spiritual", "Spiritual values");

    println!("Values inserted successfully");

    trie.traverse(&mut std::io::stdout(), &TraverseOptions::new("\t", "........"))?;

    let keys = [
        "",
        " ",
        "  ",
        "Spirit",
        "Spirit of Truth",
        "Spirit of",
        "Spirit of Wisdom is Great",
    ];
    for k in keys {
        match trie.term_value(k) {
            Ok((term, v)) => println!("[{k}] -> [{term}] : [{v}]"),
            Err(e) => println!("[{k}] : {e}"),
        }
    }
    Ok(())
}
