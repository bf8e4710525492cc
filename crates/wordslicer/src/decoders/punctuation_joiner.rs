//! # Punctuation-Aware Span Joiner

use crate::{WSResult, regex::ErrorWrapper};

/// Punctuation which attaches to the preceding word by default.
pub const DEFAULT_ATTACH_PUNCTUATION: &str = ",.?!)'";

/// Joins decoded spans with single spaces, then removes the whitespace
/// before each attaching punctuation mark.
///
/// `["word", ","]` joins to `"word,"`; nothing else is normalized.
#[derive(Debug, Clone)]
pub struct PunctuationJoiner {
    attach_re: Option<::regex::Regex>,
}

impl PunctuationJoiner {
    /// Build a joiner for the given set of attaching characters.
    ///
    /// An empty set disables attachment; spans are only space-joined.
    pub fn new(attach: &str) -> WSResult<Self> {
        if attach.is_empty() {
            return Ok(Self { attach_re: None });
        }

        let class: String = attach
            .chars()
            .map(|c| ::regex::escape(c.encode_utf8(&mut [0; 4])))
            .collect();
        let attach_re = ::regex::Regex::new(&format!(r"\s+([{class}])"))
            .map_err(ErrorWrapper::from)?;

        Ok(Self {
            attach_re: Some(attach_re),
        })
    }

    /// Join spans into text.
    pub fn join<S: AsRef<str>>(
        &self,
        spans: &[S],
    ) -> String {
        let joined = spans
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");

        match &self.attach_re {
            None => joined,
            Some(re) => re.replace_all(&joined, "$1").into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_join() {
        let joiner = PunctuationJoiner::new(DEFAULT_ATTACH_PUNCTUATION).unwrap();

        assert_eq!(joiner.join(&["Hi", ",", "Bob", "."]), "Hi, Bob.");
        assert_eq!(
            joiner.join(&["Really", "?", "Yes", "!", "(", "ok", ")"]),
            "Really? Yes! ( ok)"
        );
        assert_eq!(joiner.join(&["it", "'", "s"]), "it' s");
        assert_eq!(joiner.join(&["a", ":", "b", ";", "c", "--", "d"]), "a : b ; c -- d");
        assert_eq!(joiner.join::<&str>(&[]), "");
        assert_eq!(joiner.join(&[","]), ",");
    }

    #[test]
    fn test_custom_attach() {
        let joiner = PunctuationJoiner::new(":-]").unwrap();
        assert_eq!(joiner.join(&["a", ":", "b", "-", "c", "]", ","]), "a: b- c] ,");
    }

    #[test]
    fn test_no_attach() {
        let joiner = PunctuationJoiner::new("").unwrap();
        assert_eq!(joiner.join(&["Hi", ",", "Bob", "."]), "Hi , Bob .");
    }
}
