//! # Text Spanner

use crate::{WSResult, regex::RegexWrapper, spanning::SpanningConfig};

/// Delimiter-based text spanner.
///
/// Splits text around every delimiter match, keeping the matches themselves;
/// strips surrounding whitespace from each piece, and drops empty pieces.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpanner {
    delimiter_re: RegexWrapper,
}

impl TextSpanner {
    /// Build a new [`TextSpanner`] from a [`SpanningConfig`].
    ///
    /// ## Returns
    /// An error if the delimiter pattern does not compile.
    pub fn from_config(config: &SpanningConfig) -> WSResult<Self> {
        Ok(Self::new(config.pattern().compile()?))
    }

    /// Build a new [`TextSpanner`] from a compiled delimiter regex.
    pub fn new(delimiter_re: RegexWrapper) -> Self {
        Self { delimiter_re }
    }

    /// Get the delimiter regex.
    pub fn delimiter_regex(&self) -> &RegexWrapper {
        &self.delimiter_re
    }

    /// Visit every span of `text`, in order.
    ///
    /// # Arguments
    /// * `text` - the text to split.
    /// * `f` - called once per stripped, non-empty span.
    pub fn try_for_each_span<'a, F>(
        &self,
        text: &'a str,
        mut f: F,
    ) -> WSResult<()>
    where
        F: FnMut(&'a str),
    {
        let mut emit = |piece: &'a str| {
            let piece = piece.trim();
            if !piece.is_empty() {
                f(piece);
            }
        };

        let mut last = 0;
        self.delimiter_re.try_for_each_match(text, |m| {
            emit(&text[last..m.start]);
            emit(&text[m.start..m.end]);
            last = m.end;
        })?;
        emit(&text[last..]);

        Ok(())
    }

    /// Split `text` into spans.
    ///
    /// ## Returns
    /// The stripped, non-empty spans, in text order.
    pub fn split_spans<'a>(
        &self,
        text: &'a str,
    ) -> WSResult<Vec<&'a str>> {
        let mut spans = Vec::new();
        self.try_for_each_span(text, |span| spans.push(span))?;
        Ok(spans)
    }
}
