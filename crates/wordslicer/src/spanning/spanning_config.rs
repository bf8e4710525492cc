//! # Text Spanning Configuration

use crate::regex::{ConstRegexPattern, RegexPattern};

/// The default delimiter pattern.
///
/// Splits on comma, period, colon, semicolon, question mark, underscore,
/// exclamation mark, parentheses, apostrophe, double-hyphen, and whitespace.
pub const DEFAULT_DELIMITER_PATTERN: ConstRegexPattern =
    ConstRegexPattern::Basic(r"([,.:;?_!()']|--|\s)");

/// [`DEFAULT_DELIMITER_PATTERN`], with the double quote added.
///
/// Useful for corpora with quoted dialogue, where `"It` would otherwise be a span.
pub const QUOTED_DELIMITER_PATTERN: ConstRegexPattern =
    ConstRegexPattern::Basic(r#"([,.:;?_!"()']|--|\s)"#);

/// Description of text spanning configuration.
///
/// A vocabulary carries the configuration it was built with,
/// so that encoding splits text exactly as building did.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpanningConfig {
    /// Delimiter pattern; each match is retained as a candidate span.
    pub pattern: RegexPattern,
}

impl Default for SpanningConfig {
    fn default() -> Self {
        Self::from_pattern(DEFAULT_DELIMITER_PATTERN)
    }
}

impl SpanningConfig {
    /// Build a new [`SpanningConfig`] from a delimiter pattern.
    pub fn from_pattern<P: Into<RegexPattern>>(pattern: P) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Replace the delimiter pattern.
    pub fn with_pattern<P: Into<RegexPattern>>(
        self,
        pattern: P,
    ) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Get the delimiter pattern.
    pub fn pattern(&self) -> &RegexPattern {
        &self.pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = SpanningConfig::default();
        assert_eq!(config.pattern().as_str(), DEFAULT_DELIMITER_PATTERN.as_str());
        assert!(config.pattern().compile().unwrap().is_basic());
    }

    #[test]
    fn test_with_pattern() {
        let config = SpanningConfig::default().with_pattern(QUOTED_DELIMITER_PATTERN);
        assert_eq!(config.pattern().as_str(), QUOTED_DELIMITER_PATTERN.as_str());

        let config = SpanningConfig::from_pattern(r"(\s)");
        assert_eq!(config.pattern, RegexPattern::Adaptive(r"(\s)".to_string()));
    }
}
