use std::sync::Arc;

use crate::{
    WSResult,
    decoders::{DecoderOptions, DictionaryDecoder, PunctuationJoiner, TokenDecoder},
    encoders::{TokenEncoder, VocabEncoder},
    spanning::TextSpanner,
    types::TokenType,
    vocab::Vocabulary,
};

/// Unified Tokenizer.
///
/// Combines a [`VocabEncoder`] and a [`DictionaryDecoder`] over one [`Vocabulary`].
/// Implements both [`TokenEncoder`] and [`TokenDecoder`].
///
/// A tokenizer is immutable once built, and may be shared between threads.
#[derive(Debug, Clone)]
pub struct Tokenizer<T: TokenType> {
    vocab: Arc<Vocabulary<T>>,
    encoder: VocabEncoder<T>,
    decoder: DictionaryDecoder<T>,
}

impl<T: TokenType> Tokenizer<T> {
    /// Build a tokenizer over a vocabulary, with default decoder options.
    ///
    /// ## Returns
    /// [`crate::WordslicerError::VocabConflict`] if the vocabulary is not a bijection;
    /// [`crate::WordslicerError::Pattern`] if its delimiter pattern does not compile.
    pub fn new<V>(vocab: V) -> WSResult<Self>
    where
        V: Into<Arc<Vocabulary<T>>>,
    {
        Self::with_options(vocab, &DecoderOptions::default())
    }

    /// Build a tokenizer over a vocabulary.
    pub fn with_options<V>(
        vocab: V,
        decoder_options: &DecoderOptions,
    ) -> WSResult<Self>
    where
        V: Into<Arc<Vocabulary<T>>>,
    {
        let vocab = vocab.into();
        let decoder = decoder_options.build(&vocab)?;
        let encoder = VocabEncoder::from_vocab(vocab.clone())?;

        log::debug!("Tokenizer ready: {} tokens", vocab.len());

        Ok(Self {
            vocab,
            encoder,
            decoder,
        })
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.vocab
    }

    /// Get the encoder.
    pub fn encoder(&self) -> &VocabEncoder<T> {
        &self.encoder
    }

    /// Get the decoder.
    pub fn decoder(&self) -> &DictionaryDecoder<T> {
        &self.decoder
    }

    /// Encode text into token ids.
    ///
    /// See [`TokenEncoder::try_encode`].
    pub fn encode(
        &self,
        text: &str,
    ) -> WSResult<Vec<T>> {
        self.encoder.try_encode(text)
    }

    /// Decode token ids into text.
    ///
    /// See [`TokenDecoder::try_decode_to_string`].
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> WSResult<String> {
        self.decoder.try_decode_to_string(tokens)
    }
}

impl<T: TokenType> TokenEncoder<T> for Tokenizer<T> {
    fn spanner(&self) -> &TextSpanner {
        self.encoder.spanner()
    }

    fn lookup_span(
        &self,
        span: &str,
    ) -> Option<T> {
        self.encoder.lookup_span(span)
    }
}

impl<T: TokenType> TokenDecoder<T> for Tokenizer<T> {
    fn lookup_token(
        &self,
        token: T,
    ) -> Option<&str> {
        self.decoder.lookup_token(token)
    }

    fn joiner(&self) -> &PunctuationJoiner {
        self.decoder.joiner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        WordslicerError,
        spanning::SpanningConfig,
        types::{check_is_send, check_is_sync},
        vocab::{TokenIdMap, build_vocabulary},
    };

    #[test]
    fn test_round_trip() {
        let tokenizer = Tokenizer::new(build_vocabulary("Hi, Bob.").unwrap()).unwrap();
        check_is_send(tokenizer.clone());
        check_is_sync(tokenizer.clone());

        let ids = tokenizer.encode("Hi, Bob.").unwrap();
        assert_eq!(ids, vec![3, 0, 2, 1]);
        assert_eq!(tokenizer.decode(&ids).unwrap(), "Hi, Bob.");

        // whitespace runs collapse.
        let ids = tokenizer.encode("Hi   ,\n\tBob .").unwrap();
        assert_eq!(tokenizer.decode(&ids).unwrap(), "Hi, Bob.");
    }

    #[test]
    fn test_errors() {
        let tokenizer = Tokenizer::new(build_vocabulary("Hi, Bob.").unwrap()).unwrap();

        assert!(matches!(
            tokenizer.encode("Hello"),
            Err(WordslicerError::UnknownToken(ref t)) if t == "Hello"
        ));
        assert!(matches!(
            tokenizer.decode(&[0, 4]),
            Err(WordslicerError::UnknownId(4))
        ));
    }

    #[test]
    fn test_conflicting_vocab() {
        let mut token_map: TokenIdMap<u16> = Default::default();
        token_map.insert("a".to_string(), 0);
        token_map.insert("b".to_string(), 1);
        token_map.insert("c".to_string(), 1);
        let vocab = Vocabulary::from_token_map(SpanningConfig::default(), token_map);

        assert!(matches!(
            Tokenizer::new(vocab),
            Err(WordslicerError::VocabConflict { id: 1, .. })
        ));
    }

    #[test]
    fn test_shared_vocab() {
        let vocab: Arc<Vocabulary<u32>> = build_vocabulary("a b c").unwrap().into();
        let tokenizer = Tokenizer::new(vocab.clone()).unwrap();

        assert!(Arc::ptr_eq(tokenizer.vocab(), &vocab));
        assert!(Arc::ptr_eq(tokenizer.encoder().vocab(), &vocab));
        assert_eq!(tokenizer.decoder().id_map.len(), 3);
    }

    #[test]
    fn test_trait_access() {
        let tokenizer = Tokenizer::new(build_vocabulary("x y z").unwrap()).unwrap();

        assert_eq!(tokenizer.try_encode("z y").unwrap(), vec![2, 1]);
        assert_eq!(tokenizer.try_decode_to_string(&[2, 1]).unwrap(), "z y");
    }

    #[test]
    fn test_concurrent_use() {
        let vocab = build_vocabulary("one two, three.").unwrap();
        let tokenizer = Arc::new(Tokenizer::new(vocab).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let tokenizer = tokenizer.clone();
                std::thread::spawn(move || {
                    let ids = tokenizer.encode("three, two one.").unwrap();
                    tokenizer.decode(&ids).unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "three, two one.");
        }
    }
}
