//! # Parallel Decoder

use std::marker::PhantomData;

use rayon::prelude::*;

use crate::{
    WSResult,
    decoders::{PunctuationJoiner, TokenDecoder},
    types::TokenType,
};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches.
#[derive(Debug, Clone)]
pub struct ParallelRayonDecoder<T: TokenType, D: TokenDecoder<T>> {
    /// Inner decoder.
    pub inner: D,

    _marker: PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Create a new parallel decoder.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, D> TokenDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    fn lookup_token(
        &self,
        token: T,
    ) -> Option<&str> {
        self.inner.lookup_token(token)
    }

    fn joiner(&self) -> &PunctuationJoiner {
        self.inner.joiner()
    }

    fn try_decode_batch_to_strings<B: AsRef<[T]> + Sync>(
        &self,
        batch: &[B],
    ) -> WSResult<Vec<String>> {
        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_string(tokens.as_ref()))
            .collect()
    }
}
