//! # Parallel Encoder

use std::marker::PhantomData;

use rayon::prelude::*;

use crate::{WSResult, encoders::TokenEncoder, spanning::TextSpanner, types::TokenType};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches.
#[derive(Debug, Clone)]
pub struct ParallelRayonEncoder<T: TokenType, E: TokenEncoder<T>> {
    /// Inner encoder.
    pub inner: E,

    _marker: PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, E> TokenEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    fn spanner(&self) -> &TextSpanner {
        self.inner.spanner()
    }

    fn lookup_span(
        &self,
        span: &str,
    ) -> Option<T> {
        self.inner.lookup_span(span)
    }

    fn try_encode_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> WSResult<Vec<Vec<T>>> {
        batch
            .par_iter()
            .map(|text| self.inner.try_encode(text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        WordslicerError,
        encoders::VocabEncoder,
        types::{check_is_send, check_is_sync},
        vocab::build_vocabulary,
    };

    #[test]
    fn test_encoder() {
        let samples = vec![
            "hello world",
            "hello san francisco",
            "it's not the heat, it's the salt",
        ];
        let vocab = build_vocabulary(&samples.join("\n")).unwrap();

        let inner = VocabEncoder::from_vocab(vocab).unwrap();
        let encoder = ParallelRayonEncoder::new(inner.clone());
        check_is_send(&encoder);
        check_is_sync(&encoder);

        let batch = encoder.try_encode_batch(&samples).unwrap();
        assert_eq!(batch, inner.try_encode_batch(&samples).unwrap());
        assert_eq!(batch[0], inner.try_encode(samples[0]).unwrap());

        let res = encoder.try_encode_batch(&["hello world", "goodbye world"]);
        assert!(matches!(res, Err(WordslicerError::UnknownToken(ref t)) if t == "goodbye"));
    }
}
