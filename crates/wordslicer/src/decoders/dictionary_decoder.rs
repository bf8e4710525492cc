//! # Dictionary ``{ T -> String }`` Token Decoder

use crate::{
    WSResult,
    decoders::{DecoderOptions, PunctuationJoiner, TokenDecoder},
    types::TokenType,
    vocab::{IdTokenMap, Vocabulary},
};

/// A token dictionary [`TokenDecoder<T>`].
#[derive(Debug, Clone)]
pub struct DictionaryDecoder<T: TokenType> {
    /// Token to span mapping.
    pub id_map: IdTokenMap<T>,

    joiner: PunctuationJoiner,
}

impl<T: TokenType> DictionaryDecoder<T> {
    /// Build a [`DictionaryDecoder`] by inverting a [`Vocabulary`].
    ///
    /// ## Returns
    /// [`crate::WordslicerError::VocabConflict`] if the vocabulary is not a bijection.
    pub fn from_vocab(
        vocab: &Vocabulary<T>,
        options: &DecoderOptions,
    ) -> WSResult<Self> {
        Ok(Self::new(vocab.try_id_map()?, options.joiner()?))
    }

    /// Creates a new Decoder.
    pub fn new(
        id_map: IdTokenMap<T>,
        joiner: PunctuationJoiner,
    ) -> Self {
        Self { id_map, joiner }
    }
}

impl<T: TokenType> TokenDecoder<T> for DictionaryDecoder<T> {
    fn lookup_token(
        &self,
        token: T,
    ) -> Option<&str> {
        self.id_map.get(&token).map(String::as_str)
    }

    fn joiner(&self) -> &PunctuationJoiner {
        &self.joiner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        WordslicerError,
        spanning::SpanningConfig,
        vocab::{TokenIdMap, build_vocabulary},
    };

    fn sample_decoder() -> DictionaryDecoder<u32> {
        DictionaryDecoder::from_vocab(
            &build_vocabulary("Hi, Bob.").unwrap(),
            &DecoderOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_decode() {
        let decoder = sample_decoder();

        assert_eq!(decoder.try_decode_to_string(&[3, 0, 2, 1]).unwrap(), "Hi, Bob.");
        assert_eq!(
            decoder.try_decode_to_spans(&[3, 0, 2, 1]).unwrap(),
            vec!["Hi", ",", "Bob", "."]
        );
        assert_eq!(decoder.try_decode_to_string(&[]).unwrap(), "");
        assert_eq!(decoder.try_decode_to_string(&[1, 1, 3]).unwrap(), ".. Hi");
    }

    #[test]
    fn test_unknown_id() {
        let decoder = sample_decoder();

        match decoder.try_decode_to_string(&[3, 4]) {
            Err(WordslicerError::UnknownId(id)) => assert_eq!(id, 4),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_decode_batch() {
        let decoder = sample_decoder();

        let batch: Vec<Vec<u32>> = vec![vec![3, 0], vec![2, 1]];
        assert_eq!(
            decoder.try_decode_batch_to_strings(&batch).unwrap(),
            vec!["Hi,".to_string(), "Bob.".to_string()]
        );

        let batch: Vec<Vec<u32>> = vec![vec![3], vec![99]];
        assert!(decoder.try_decode_batch_to_strings(&batch).is_err());
    }

    #[test]
    fn test_conflicting_vocab() {
        let mut token_map: TokenIdMap<u32> = Default::default();
        token_map.insert("x".to_string(), 0);
        token_map.insert("y".to_string(), 0);
        let vocab = Vocabulary::from_token_map(SpanningConfig::default(), token_map);

        let res = DictionaryDecoder::from_vocab(&vocab, &DecoderOptions::default());
        assert!(matches!(res, Err(WordslicerError::VocabConflict { id: 0, .. })));
    }
}
