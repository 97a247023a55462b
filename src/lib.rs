//! Domain Trie - label-reversed domain matching for rule lists
//!
//! This library provides a domain pattern index with support for:
//! - Exact domains (`example.com`)
//! - Single-label wildcards (`*.example.com`, `sub.*.example.com`)
//! - Subdomain-only wildcards (`.example.com`)
//! - Domain plus all subdomains (`+.example.com`)
//! - Priority lookup: literal label > `*` > rest-of-domain
//! - Minimal pattern dumps that drop entries covered by a shorter pattern
//! - Parsing of community domain lists (`full:`, `domain:`, `include:`, `@tag`)
//!
//! # Example
//!
//! ```rust
//! use domain_trie::{BuildOptions, DomainTrie, RuleSet};
//!
//! let mut trie = DomainTrie::new();
//! trie.insert("a.com", "X").unwrap();
//! trie.insert("+.b.com", "Y").unwrap();
//! trie.insert("*.c.com", "Z").unwrap();
//!
//! assert_eq!(trie.get("a.com").unwrap(), Some(&"X"));
//! assert_eq!(trie.get("y.x.b.com").unwrap(), Some(&"Y"));
//! assert_eq!(trie.get("y.x.c.com").unwrap(), None);
//!
//! // Domain list text
//! let rules = RuleSet::parse("
//! google.com        # and every subdomain
//! full:www.example.org
//! keyword:ads       # unsupported, skipped
//! ").unwrap();
//!
//! let trie = rules.build_trie((), &BuildOptions::new()).unwrap();
//! assert!(trie.search("mail.google.com").unwrap().is_some());
//! assert_eq!(trie.dump_sorted(), vec!["google.com", "www.example.org"]);
//! ```
//!
//! # Pattern Syntax
//!
//! | Pattern | Matches |
//! |---------|---------|
//! | `example.com` | `example.com` only |
//! | `*.example.com` | `a.example.com`, not `a.b.example.com` or `example.com` |
//! | `.example.com` | any subdomain of `example.com` |
//! | `+.example.com` | `example.com` and any subdomain |
//!
//! Trailing dots, empty labels and the empty string are rejected with
//! [`TrieError::InvalidPattern`].

pub mod error;
pub mod rule;
pub mod ruleset;
pub mod trie;

// Re-export commonly used items
pub use error::{Result, TrieError};
pub use rule::{parse_rules, Rule, RuleKind};
pub use ruleset::{BuildOptions, RuleSet};
pub use trie::{split_domain, DomainTrie, Label, Node};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let text = r#"
# Streaming
netflix.com
nflxvideo.net @cdn
full:fast.com

# Nested list, resolved by the caller
include:netflix-ads
regexp:^nflx.*$
"#;

        let mut set = RuleSet::parse(text).unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(set.includes().collect::<Vec<_>>(), vec!["netflix-ads"]);

        set.extend(RuleSet::parse("full:ads.netflix.com @ads").unwrap());

        let trie = set.build_trie("PROXY", &BuildOptions::new()).unwrap();

        assert_eq!(trie.get("netflix.com").unwrap(), Some(&"PROXY"));
        assert_eq!(trie.get("www.netflix.com").unwrap(), Some(&"PROXY"));
        assert_eq!(trie.get("ipv4.nflxvideo.net").unwrap(), Some(&"PROXY"));
        assert_eq!(trie.get("fast.com").unwrap(), Some(&"PROXY"));
        assert_eq!(trie.get("www.fast.com").unwrap(), None);

        // ads.netflix.com sits under the marked netflix.com node
        assert_eq!(
            trie.dump_shorthand_sorted(),
            vec!["+.netflix.com", "+.nflxvideo.net", "fast.com"]
        );
    }
}
