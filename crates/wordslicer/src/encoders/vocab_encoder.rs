//! # Vocabulary Lookup Encoder

use std::sync::Arc;

use crate::{
    WSResult,
    encoders::TokenEncoder,
    spanning::TextSpanner,
    types::TokenType,
    vocab::Vocabulary,
};

/// A [`TokenEncoder`] which maps each span through a [`Vocabulary`].
#[derive(Debug, Clone)]
pub struct VocabEncoder<T: TokenType> {
    vocab: Arc<Vocabulary<T>>,
    spanner: TextSpanner,
}

impl<T: TokenType> VocabEncoder<T> {
    /// Build an encoder, splitting text with the vocabulary's own spanning config.
    pub fn from_vocab<V>(vocab: V) -> WSResult<Self>
    where
        V: Into<Arc<Vocabulary<T>>>,
    {
        let vocab = vocab.into();
        let spanner = TextSpanner::from_config(vocab.spanning())?;
        Ok(Self::new(vocab, spanner))
    }

    /// Build an encoder from a vocabulary and an already-compiled spanner.
    pub fn new(
        vocab: Arc<Vocabulary<T>>,
        spanner: TextSpanner,
    ) -> Self {
        Self { vocab, spanner }
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.vocab
    }
}

impl<T: TokenType> TokenEncoder<T> for VocabEncoder<T> {
    fn spanner(&self) -> &TextSpanner {
        &self.spanner
    }

    fn lookup_span(
        &self,
        span: &str,
    ) -> Option<T> {
        self.vocab.get_id(span)
    }
}
