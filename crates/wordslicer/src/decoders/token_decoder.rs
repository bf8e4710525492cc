//! # Token Decoder Trait

use std::sync::Arc;

use crate::{WSResult, WordslicerError, decoders::PunctuationJoiner, types::TokenType};

/// Build the [`WordslicerError::UnknownId`] error for a token.
pub fn unknown_id_error<T: TokenType>(token: T) -> WordslicerError {
    match token.to_u64() {
        Some(id) => WordslicerError::UnknownId(id),
        None => WordslicerError::TokenOutOfRange,
    }
}

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Look up the span for a single token.
    fn lookup_token(
        &self,
        token: T,
    ) -> Option<&str>;

    /// Return the attached span joiner.
    fn joiner(&self) -> &PunctuationJoiner;

    /// Decodes tokens into their spans.
    ///
    /// ## Returns
    /// [`WordslicerError::UnknownId`] naming the first unknown token.
    fn try_decode_to_spans(
        &self,
        tokens: &[T],
    ) -> WSResult<Vec<&str>> {
        tokens
            .iter()
            .map(|&t| self.lookup_token(t).ok_or_else(|| unknown_id_error(t)))
            .collect()
    }

    /// Decodes tokens into a string.
    ///
    /// Spans are joined with single spaces, and attaching punctuation
    /// is pulled onto the preceding span.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> WSResult<String> {
        let spans = self.try_decode_to_spans(tokens)?;
        Ok(self.joiner().join(&spans))
    }

    /// Decodes a batch of tokens.
    ///
    /// ## Returns
    /// The per-item strings; or the first error in the batch.
    fn try_decode_batch_to_strings<B: AsRef<[T]> + Sync>(
        &self,
        batch: &[B],
    ) -> WSResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens.as_ref()))
            .collect()
    }
}

impl<T: TokenType, D: TokenDecoder<T>> TokenDecoder<T> for Arc<D> {
    fn lookup_token(
        &self,
        token: T,
    ) -> Option<&str> {
        self.as_ref().lookup_token(token)
    }

    fn joiner(&self) -> &PunctuationJoiner {
        self.as_ref().joiner()
    }
}
