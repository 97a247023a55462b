//! Domain matching trie.
//!
//! Patterns are stored label by label in reverse order (top-level domain
//! nearest the root) so that entries sharing a suffix share structure.
//!
//! Supported pattern forms:
//! - `www.example.com` - exact domain
//! - `*.example.com` - exactly one label in place of `*`
//! - `sub.*.example.com` - wildcard in the middle
//! - `.example.com` - every subdomain of `example.com`, but not itself
//! - `+.example.com` - `example.com` and every subdomain
//!
//! Lookups prefer a literal label over `*`, and `*` over the rest-of-domain
//! form, trying the literal branch to full depth before falling back.

mod node;
mod pattern;

pub use node::Node;
pub use pattern::{split_domain, Label};

use tracing::warn;

use crate::error::{Result, TrieError};
use pattern::{COMPLEX_WILDCARD, DOMAIN_STEP, REST_WILDCARD};

/// Domain trie mapping patterns to markers.
///
/// Build it with [`insert`](Self::insert) from a single owner, then share it
/// read-only (e.g. behind an `Arc`) for concurrent lookups.
#[derive(Debug, Clone)]
pub struct DomainTrie<T> {
    root: Node<T>,
    len: usize,
}

impl<T> Default for DomainTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DomainTrie<T> {
    pub fn new() -> Self {
        DomainTrie {
            root: Node::new(),
            len: 0,
        }
    }

    /// True when nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of terminal (marked) nodes. A `+.` pattern accounts for two.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Find the highest-priority marked node matching `domain`.
    ///
    /// `domain` must be concrete: it is validated like a pattern and
    /// additionally may not start with an empty label.
    pub fn search(&self, domain: &str) -> Result<Option<&Node<T>>> {
        let parts = split_domain(domain)?;
        if parts[0].is_empty() {
            return Err(TrieError::InvalidPattern(domain.to_string()));
        }

        Ok(Self::search_inner(&self.root, &parts))
    }

    /// Marker of the best match for `domain`.
    pub fn get(&self, domain: &str) -> Result<Option<&T>> {
        Ok(self.search(domain)?.and_then(Node::marker))
    }

    fn search_inner<'a>(node: &'a Node<T>, parts: &[&str]) -> Option<&'a Node<T>> {
        let Some((last, rest)) = parts.split_last() else {
            return node.is_marked().then_some(node);
        };

        if let Some(n) = node.child(last).and_then(|c| Self::search_inner(c, rest)) {
            return Some(n);
        }

        if let Some(n) = node.wildcard().and_then(|c| Self::search_inner(c, rest)) {
            return Some(n);
        }

        node.rest().filter(|c| c.is_marked())
    }

    /// Minimal pattern list covering every marked node.
    ///
    /// Subtrees below a marked node are not visited, so patterns made
    /// redundant by a shorter one are dropped. A rest-of-domain entry comes
    /// out in its leading-dot form (`.example.com`). Order is unspecified.
    pub fn dump(&self) -> Vec<String> {
        self.dump_with(false)
    }

    /// Like [`dump`](Self::dump), but a marked node whose rest-of-domain
    /// child is also marked comes out as one `+.` entry.
    ///
    /// Re-inserting the output gives a trie with the same accept set.
    pub fn dump_shorthand(&self) -> Vec<String> {
        self.dump_with(true)
    }

    fn dump_with(&self, shorthand: bool) -> Vec<String> {
        let mut result = Vec::new();
        let mut path = Vec::new();
        Self::dump_inner(&self.root, shorthand, &mut path, &mut result);
        result
    }

    /// [`dump`](Self::dump) in lexicographic order.
    pub fn dump_sorted(&self) -> Vec<String> {
        let mut result = self.dump();
        result.sort_unstable();
        result
    }

    /// [`dump_shorthand`](Self::dump_shorthand) in lexicographic order.
    pub fn dump_shorthand_sorted(&self) -> Vec<String> {
        let mut result = self.dump_shorthand();
        result.sort_unstable();
        result
    }

    fn dump_inner<'a>(
        node: &'a Node<T>,
        shorthand: bool,
        path: &mut Vec<&'a str>,
        out: &mut Vec<String>,
    ) {
        if node.is_marked() {
            let pattern = join_reversed(path);
            if shorthand && node.rest().is_some_and(Node::is_marked) {
                out.push(format!("{}{}{}", COMPLEX_WILDCARD, DOMAIN_STEP, pattern));
            } else {
                out.push(pattern);
            }
            return;
        }

        if node.is_leaf() {
            // Only an empty root may be an unmarked leaf.
            if !path.is_empty() {
                warn!(
                    pattern = %join_reversed(path),
                    "unmarked leaf in domain trie, skipping"
                );
            }
            return;
        }

        for (label, child) in node.labeled_children() {
            path.push(label.as_str());
            Self::dump_inner(child, shorthand, path, out);
            path.pop();
        }
    }
}

impl<T: Clone> DomainTrie<T> {
    /// Insert `pattern` with `marker`, replacing any marker already stored
    /// for the same pattern.
    ///
    /// `+.example.com` is stored as both `example.com` and `.example.com`.
    /// Validation happens before any write, so a failed insert leaves the
    /// trie untouched.
    pub fn insert(&mut self, pattern: &str, marker: T) -> Result<()> {
        let mut parts = split_domain(pattern)?;

        if parts[0] == COMPLEX_WILDCARD {
            if parts.len() == 1 {
                return Err(TrieError::InvalidPattern(pattern.to_string()));
            }
            self.insert_parts(&parts[1..], marker.clone());
            parts[0] = REST_WILDCARD;
        }

        self.insert_parts(&parts, marker);
        Ok(())
    }

    fn insert_parts(&mut self, parts: &[&str], marker: T) {
        let mut node = &mut self.root;
        for part in parts.iter().rev() {
            node = node.child_or_insert(Label::from_part(part));
        }
        if node.set_marker(marker).is_none() {
            self.len += 1;
        }
    }
}

/// Turn a root-to-node label path back into a domain pattern.
fn join_reversed(path: &[&str]) -> String {
    let mut out = String::with_capacity(path.iter().map(|p| p.len() + 1).sum());
    for (i, label) in path.iter().rev().enumerate() {
        if i > 0 {
            out.push(DOMAIN_STEP);
        }
        out.push_str(label);
    }
    out
}
