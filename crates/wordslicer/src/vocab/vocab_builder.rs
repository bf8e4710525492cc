//! # Vocabulary Builder

use std::collections::BTreeSet;

use crate::{
    WSResult,
    spanning::{SpanningConfig, TextSpanner},
    types::TokenType,
    vocab::Vocabulary,
};

/// How many leading entries are logged at debug level after a build.
const DEBUG_PREVIEW_ENTRIES: usize = 51;

/// The leading `(id, token)` entries of a vocabulary, in id order.
fn preview_entries<T: TokenType>(vocab: &Vocabulary<T>) -> Vec<(T, &str)> {
    let mut entries = vocab.tokens_by_id();
    entries.truncate(DEBUG_PREVIEW_ENTRIES);
    entries
}

/// Builds a [`Vocabulary`] from corpus text.
///
/// Every distinct span of the corpus becomes a token;
/// tokens are sorted, and numbered from 0 in sorted order.
#[derive(Debug, Clone)]
pub struct VocabBuilder {
    spanning: SpanningConfig,
    spanner: TextSpanner,
}

impl VocabBuilder {
    /// Create a builder for the given spanning configuration.
    ///
    /// ## Returns
    /// An error if the delimiter pattern does not compile.
    pub fn new(spanning: SpanningConfig) -> WSResult<Self> {
        let spanner = TextSpanner::from_config(&spanning)?;
        Ok(Self { spanning, spanner })
    }

    /// Get the spanning configuration.
    pub fn spanning(&self) -> &SpanningConfig {
        &self.spanning
    }

    /// Build a vocabulary from one corpus.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, corpus)))]
    pub fn build<T: TokenType>(
        &self,
        corpus: &str,
    ) -> WSResult<Vocabulary<T>> {
        self.build_from_corpora([corpus])
    }

    /// Build a vocabulary over the union of several corpora.
    pub fn build_from_corpora<'a, T, I>(
        &self,
        corpora: I,
    ) -> WSResult<Vocabulary<T>>
    where
        T: TokenType,
        I: IntoIterator<Item = &'a str>,
    {
        let mut chars = 0;
        let mut spans = 0;
        let mut tokens: BTreeSet<&str> = BTreeSet::new();

        for corpus in corpora {
            chars += corpus.chars().count();
            self.spanner.try_for_each_span(corpus, |span| {
                spans += 1;
                tokens.insert(span);
            })?;
        }

        log::info!("Corpus characters: {chars}");
        log::info!("Corpus spans: {spans}");
        log::info!("Vocab size: {}", tokens.len());

        let vocab = Vocabulary::from_token_set(self.spanning.clone(), tokens)?;

        if log::log_enabled!(log::Level::Debug) {
            for (id, token) in preview_entries(&vocab) {
                log::debug!("({token:?}, {id})");
            }
        }

        Ok(vocab)
    }
}

/// Build a vocabulary from a corpus, with the default [`SpanningConfig`].
///
/// ## Example
/// ```rust
/// use wordslicer::build_vocabulary;
///
/// let vocab = build_vocabulary("Hi, Bob.").unwrap();
/// assert_eq!(vocab.get_id(","), Some(0));
/// assert_eq!(vocab.get_id("."), Some(1));
/// assert_eq!(vocab.get_id("Bob"), Some(2));
/// assert_eq!(vocab.get_id("Hi"), Some(3));
/// ```
pub fn build_vocabulary(corpus: &str) -> WSResult<Vocabulary<u32>> {
    VocabBuilder::new(SpanningConfig::default())?.build(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spanning::QUOTED_DELIMITER_PATTERN;

    #[test]
    fn test_build_vocabulary() {
        let vocab = build_vocabulary("Hi, Bob.").unwrap();
        assert_eq!(
            vocab.tokens_by_id(),
            vec![(0, ","), (1, "."), (2, "Bob"), (3, "Hi")]
        );
        assert_eq!(vocab.spanning(), &SpanningConfig::default());
    }

    #[test]
    fn test_empty_corpus() {
        assert!(build_vocabulary("").unwrap().is_empty());
        assert!(build_vocabulary("  \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_case_sensitive_and_distinct() {
        let vocab = build_vocabulary("The the THE the, the.").unwrap();
        assert_eq!(
            vocab.tokens_by_id(),
            vec![(0, ","), (1, "."), (2, "THE"), (3, "The"), (4, "the")]
        );
    }

    #[test]
    fn test_preview_entries() {
        let corpus: String = (0..60).map(|i| format!("w{i:02} ")).collect();
        let vocab = build_vocabulary(&corpus).unwrap();

        let preview = preview_entries(&vocab);
        assert_eq!(preview.len(), 51);
        assert_eq!(preview[0], (0, "w00"));
        assert_eq!(preview[50], (50, "w50"));

        assert_eq!(preview_entries(&build_vocabulary("b a").unwrap()).len(), 2);
    }

    #[test]
    fn test_build_from_corpora() {
        let builder = VocabBuilder::new(SpanningConfig::default()).unwrap();
        let vocab: Vocabulary<u16> = builder.build_from_corpora(["b a", "c; a"]).unwrap();
        assert_eq!(
            vocab.tokens_by_id(),
            vec![(0, ";"), (1, "a"), (2, "b"), (3, "c")]
        );
    }

    #[test]
    fn test_custom_spanning() {
        let builder =
            VocabBuilder::new(SpanningConfig::from_pattern(QUOTED_DELIMITER_PATTERN)).unwrap();
        let vocab: Vocabulary<u32> = builder.build(r#""Yes," she said."#).unwrap();
        assert_eq!(
            vocab.tokens_by_id(),
            vec![(0, "\""), (1, ","), (2, "."), (3, "Yes"), (4, "said"), (5, "she")]
        );
        assert_eq!(builder.spanning(), vocab.spanning());
    }
}
