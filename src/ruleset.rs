//! Feeding parsed domain lists into a [`DomainTrie`].

use tracing::{debug, warn};

use crate::error::{Result, TrieError};
use crate::rule::{parse_rules, Rule, RuleKind};
use crate::trie::DomainTrie;

/// Options controlling how a [`RuleSet`] is inserted.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Abort on the first invalid pattern instead of logging and skipping it
    pub strict: bool,
    /// Only rules carrying every one of these tags are inserted
    pub required_tags: Vec<String>,
}

impl BuildOptions {
    /// Create default build options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Require a tag on every inserted rule.
    pub fn with_required_tag(mut self, tag: impl Into<String>) -> Self {
        self.required_tags.push(tag.into());
        self
    }

    fn accepts(&self, rule: &Rule) -> bool {
        self.required_tags.iter().all(|t| rule.has_tag(t))
    }
}

/// An ordered collection of domain list rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parse a domain list into a rule set.
    pub fn parse(text: &str) -> Result<Self> {
        parse_rules(text).map(Self::new)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Names of the lists referenced by `include:` rules.
    pub fn includes(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .filter(|r| r.kind == RuleKind::Include)
            .map(|r| r.payload.as_str())
    }

    /// Append rules, typically those of a resolved include.
    pub fn extend(&mut self, other: RuleSet) {
        self.rules.extend(other.rules);
    }

    /// Insert every accepted rule into `trie` with `marker`.
    ///
    /// Suffix rules become `+.` patterns, full rules are inserted as-is and
    /// includes are skipped. Returns the number of rules inserted.
    pub fn insert_into<T: Clone>(
        &self,
        trie: &mut DomainTrie<T>,
        marker: T,
        opts: &BuildOptions,
    ) -> Result<usize> {
        let mut inserted = 0;

        for rule in &self.rules {
            if !opts.accepts(rule) {
                continue;
            }

            let pattern = match rule.kind {
                RuleKind::Suffix => format!("+.{}", rule.payload),
                RuleKind::Full => rule.payload.clone(),
                RuleKind::Include => {
                    debug!(line = rule.line_num, include = %rule.payload, "unresolved include, skipping");
                    continue;
                }
            };

            match trie.insert(&pattern, marker.clone()) {
                Ok(()) => inserted += 1,
                Err(e) if opts.strict => {
                    return Err(TrieError::InvalidRule {
                        line: rule.line_num,
                        source: Box::new(e),
                    })
                }
                Err(e) => warn!(line = rule.line_num, error = %e, "skipping invalid rule"),
            }
        }

        debug!(inserted, total = self.rules.len(), "rules inserted into domain trie");
        Ok(inserted)
    }

    /// Build a fresh trie from this rule set.
    pub fn build_trie<T: Clone>(&self, marker: T, opts: &BuildOptions) -> Result<DomainTrie<T>> {
        let mut trie = DomainTrie::new();
        self.insert_into(&mut trie, marker, opts)?;
        Ok(trie)
    }
}
