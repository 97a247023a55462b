use crate::error::{Result, TrieError};

pub(crate) const DOMAIN_STEP: char = '.';
pub(crate) const WILDCARD: &str = "*";
pub(crate) const REST_WILDCARD: &str = "";
pub(crate) const COMPLEX_WILDCARD: &str = "+";

/// One position in a stored pattern.
///
/// Wildcards are tags rather than reserved keys, so a literal label can never
/// collide with them inside the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label<'a> {
    /// Exact match on the label text
    Literal(&'a str),
    /// Matches exactly one arbitrary label (`*`)
    Wildcard,
    /// Matches every remaining label (the empty leading segment)
    Rest,
}

impl<'a> Label<'a> {
    /// Classify a pattern part produced by [`split_domain`].
    pub fn from_part(part: &'a str) -> Self {
        match part {
            WILDCARD => Label::Wildcard,
            REST_WILDCARD => Label::Rest,
            literal => Label::Literal(literal),
        }
    }

    /// Text used when a label is written back out by a dump.
    pub fn as_str(&self) -> &'a str {
        match self {
            Label::Literal(s) => s,
            Label::Wildcard => WILDCARD,
            Label::Rest => REST_WILDCARD,
        }
    }
}

/// Split a domain or pattern into labels, most significant last.
///
/// Rejects a trailing delimiter, the empty string, and any empty label other
/// than the first one.
pub fn split_domain(domain: &str) -> Result<Vec<&str>> {
    if domain.ends_with(DOMAIN_STEP) {
        return Err(TrieError::InvalidPattern(domain.to_string()));
    }

    let parts: Vec<&str> = domain.split(DOMAIN_STEP).collect();
    if parts.len() == 1 {
        if parts[0].is_empty() {
            return Err(TrieError::InvalidPattern(domain.to_string()));
        }
        return Ok(parts);
    }

    if parts.iter().skip(1).any(|p| p.is_empty()) {
        return Err(TrieError::InvalidPattern(domain.to_string()));
    }

    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain() {
        assert_eq!(
            split_domain("www.example.com").unwrap(),
            vec!["www", "example", "com"]
        );
        assert_eq!(split_domain("localhost").unwrap(), vec!["localhost"]);
    }

    #[test]
    fn test_split_leading_empty_label() {
        assert_eq!(split_domain(".example.com").unwrap(), vec!["", "example", "com"]);
        assert_eq!(split_domain("+.example.com").unwrap(), vec!["+", "example", "com"]);
    }

    #[test]
    fn test_split_rejects_trailing_delimiter() {
        assert!(split_domain("example.com.").is_err());
        assert!(split_domain(".").is_err());
        assert!(split_domain("+.").is_err());
    }

    #[test]
    fn test_split_rejects_empty() {
        let err = split_domain("").unwrap_err();
        assert_eq!(err, TrieError::InvalidPattern(String::new()));
    }

    #[test]
    fn test_split_rejects_inner_empty_label() {
        assert!(split_domain("a..com").is_err());
        assert!(split_domain("..com").is_err());
    }

    #[test]
    fn test_label_classification() {
        assert_eq!(Label::from_part("*"), Label::Wildcard);
        assert_eq!(Label::from_part(""), Label::Rest);
        assert_eq!(Label::from_part("com"), Label::Literal("com"));
        // only meaningful in first position, stored literally otherwise
        assert_eq!(Label::from_part("+"), Label::Literal("+"));
        assert_eq!(Label::Wildcard.as_str(), "*");
        assert_eq!(Label::Rest.as_str(), "");
    }
}
