use thiserror::Error;

/// Domain trie error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// Pattern or domain failed label validation. Carries the offending input.
    #[error("Invalid pattern: {0:?}")]
    InvalidPattern(String),

    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Invalid rule at line {line}: {source}")]
    InvalidRule {
        line: usize,
        #[source]
        source: Box<TrieError>,
    },
}

impl TrieError {
    /// The pattern text that failed validation, if this error carries one.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            TrieError::InvalidPattern(p) => Some(p),
            TrieError::InvalidRule { source, .. } => source.pattern(),
            TrieError::ParseErrorAtLine { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrieError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display_includes_pattern() {
        let err = TrieError::InvalidPattern("example.com.".into());
        let display = format!("{}", err);
        assert!(display.contains("example.com."), "got: {}", display);
    }

    #[test]
    fn test_invalid_rule_exposes_inner_pattern() {
        let err = TrieError::InvalidRule {
            line: 7,
            source: Box::new(TrieError::InvalidPattern("a..b".into())),
        };
        assert_eq!(err.pattern(), Some("a..b"));
        assert!(format!("{}", err).contains("line 7"));
    }

    #[test]
    fn test_parse_error_has_no_pattern() {
        let err = TrieError::ParseErrorAtLine {
            line: 3,
            message: "Empty payload".into(),
        };
        assert!(err.pattern().is_none());
        assert!(matches!(err, TrieError::ParseErrorAtLine { line: 3, .. }));
    }
}
