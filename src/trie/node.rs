use std::collections::HashMap;

use super::pattern::Label;

/// A trie vertex for one label position.
///
/// A node carrying a marker terminates a pattern; a node without one only
/// routes to its descendants.
#[derive(Debug, Clone)]
pub struct Node<T> {
    marker: Option<T>,
    children: HashMap<String, Node<T>>,
    wildcard: Option<Box<Node<T>>>,
    rest: Option<Box<Node<T>>>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    pub fn new() -> Self {
        Node {
            marker: None,
            children: HashMap::new(),
            wildcard: None,
            rest: None,
        }
    }

    pub fn marker(&self) -> Option<&T> {
        self.marker.as_ref()
    }

    pub fn is_marked(&self) -> bool {
        self.marker.is_some()
    }

    /// Literal child keyed by `label`.
    pub fn child(&self, label: &str) -> Option<&Self> {
        self.children.get(label)
    }

    /// Child reached through a single-level wildcard.
    pub fn wildcard(&self) -> Option<&Self> {
        self.wildcard.as_deref()
    }

    /// Child reached through a rest-of-domain wildcard.
    pub fn rest(&self) -> Option<&Self> {
        self.rest.as_deref()
    }

    pub fn child_count(&self) -> usize {
        self.children.len() + self.wildcard.is_some() as usize + self.rest.is_some() as usize
    }

    pub fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }

    /// Store `marker`, returning the one it replaced.
    pub(crate) fn set_marker(&mut self, marker: T) -> Option<T> {
        self.marker.replace(marker)
    }

    /// Get the child for `label`, creating an unmarked one if missing.
    pub(crate) fn child_or_insert(&mut self, label: Label<'_>) -> &mut Self {
        match label {
            Label::Literal(s) => self.children.entry(s.to_string()).or_default(),
            Label::Wildcard => self.wildcard.get_or_insert_with(Box::default).as_mut(),
            Label::Rest => self.rest.get_or_insert_with(Box::default).as_mut(),
        }
    }

    /// Iterate children together with their label, literals first.
    pub(crate) fn labeled_children(&self) -> impl Iterator<Item = (Label<'_>, &Self)> {
        self.children
            .iter()
            .map(|(k, v)| (Label::Literal(k.as_str()), v))
            .chain(self.wildcard.as_deref().map(|n| (Label::Wildcard, n)))
            .chain(self.rest.as_deref().map(|n| (Label::Rest, n)))
    }

    /// Number of marked nodes in this subtree, including this one.
    #[cfg(test)]
    pub(crate) fn marked_count(&self) -> usize {
        self.is_marked() as usize
            + self
                .labeled_children()
                .map(|(_, c)| c.marked_count())
                .sum::<usize>()
    }
}
