//! # Token Encoder Trait

use std::sync::Arc;

use crate::{WSResult, WordslicerError, spanning::TextSpanner, types::TokenType};

/// A trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Return the attached text spanner.
    fn spanner(&self) -> &TextSpanner;

    /// Look up the id of a single span.
    fn lookup_span(
        &self,
        span: &str,
    ) -> Option<T>;

    /// Encode text, appending to a target buffer.
    ///
    /// On failure the buffer is restored to its original length.
    ///
    /// ## Arguments
    /// * `text` - The string slice to encode.
    /// * `tokens` - The target token buffer to append to.
    ///
    /// ## Returns
    /// [`WordslicerError::UnknownToken`] naming the first span
    /// missing from the vocabulary.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> WSResult<()> {
        let start = tokens.len();
        let mut missing: Option<&str> = None;

        self.spanner().try_for_each_span(text, |span| {
            if missing.is_some() {
                return;
            }
            match self.lookup_span(span) {
                Some(token) => tokens.push(token),
                None => missing = Some(span),
            }
        })?;

        if let Some(span) = missing {
            tokens.truncate(start);
            return Err(WordslicerError::UnknownToken(span.to_string()));
        }
        Ok(())
    }

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// The token ids, one per span, in text order.
    fn try_encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> WSResult<Vec<T>> {
        let mut tokens = Vec::new();
        self.try_encode_append(text.as_ref(), &mut tokens)?;
        Ok(tokens)
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Returns
    /// The per-item tokens; or the first error in the batch.
    fn try_encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> WSResult<Vec<Vec<T>>> {
        batch.iter().map(|text| self.try_encode(text)).collect()
    }
}

impl<T: TokenType, E: TokenEncoder<T>> TokenEncoder<T> for Arc<E> {
    fn spanner(&self) -> &TextSpanner {
        self.as_ref().spanner()
    }

    fn lookup_span(
        &self,
        span: &str,
    ) -> Option<T> {
        self.as_ref().lookup_span(span)
    }
}
