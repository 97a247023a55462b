use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::error::{Result, TrieError};

/// Regex for a prefixed rule head
/// Format: kind:payload
static RULE_KIND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^:]*):(.*)$").expect("RULE_KIND: hardcoded regex is invalid")
});

/// Kind of a domain list rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Domain and all of its subdomains (`example.com`, `domain:example.com`)
    Suffix,
    /// Exact domain only (`full:example.com`)
    Full,
    /// Reference to another list (`include:name`), resolved by the caller
    Include,
}

/// A parsed domain list line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub kind: RuleKind,
    /// Domain (lowercased) or, for includes, the list name
    pub payload: String,
    /// Tags from `@tag` fields, without the `@`
    pub tags: Vec<String>,
    /// Line number in the original text (for error reporting)
    pub line_num: usize,
}

impl Rule {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Parse a domain list.
///
/// Lines with an unsupported kind (`regexp:`, `keyword:` ...) are logged and
/// skipped.
pub fn parse_rules(text: &str) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1;

        let line = match line.find('#') {
            Some(comment_pos) => &line[..comment_pos],
            None => line,
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(rule) = parse_single_rule(line, line_num)? {
            rules.push(rule);
        }
    }

    Ok(rules)
}

fn parse_single_rule(line: &str, line_num: usize) -> Result<Option<Rule>> {
    let mut fields = line.split_whitespace();
    let Some(head) = fields.next() else {
        return Ok(None);
    };

    let (kind, payload) = match RULE_KIND.captures(head) {
        None => (RuleKind::Suffix, head),
        Some(captures) => {
            let payload = captures.get(2).map_or("", |m| m.as_str());
            let kind = captures.get(1).map_or("", |m| m.as_str());
            match kind.to_ascii_lowercase().as_str() {
                "domain" => (RuleKind::Suffix, payload),
                "full" => (RuleKind::Full, payload),
                "include" => (RuleKind::Include, payload),
                _ => {
                    warn!(line = line_num, kind, "unsupported rule, skipping: {}", line);
                    return Ok(None);
                }
            }
        }
    };

    if payload.is_empty() {
        return Err(TrieError::ParseErrorAtLine {
            line: line_num,
            message: format!("Empty payload: {}", line),
        });
    }

    let payload = match kind {
        RuleKind::Include => payload.to_string(),
        RuleKind::Suffix | RuleKind::Full => payload.to_lowercase(),
    };

    let tags = fields
        .filter_map(|f| f.strip_prefix('@'))
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();

    Ok(Some(Rule {
        kind,
        payload,
        tags,
        line_num,
    }))
}
