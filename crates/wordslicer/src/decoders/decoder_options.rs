//! # Decoder Options

use crate::{
    WSResult,
    decoders::{DEFAULT_ATTACH_PUNCTUATION, DictionaryDecoder, PunctuationJoiner},
    types::TokenType,
    vocab::Vocabulary,
};

/// Options for building a [`DictionaryDecoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Characters which attach to the preceding span on decode.
    pub attach_punctuation: String,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            attach_punctuation: DEFAULT_ATTACH_PUNCTUATION.to_string(),
        }
    }
}

impl DecoderOptions {
    /// Sets the attaching punctuation characters.
    pub fn with_attach_punctuation<S: Into<String>>(
        self,
        attach_punctuation: S,
    ) -> Self {
        Self {
            attach_punctuation: attach_punctuation.into(),
        }
    }

    /// Build the [`PunctuationJoiner`] for these options.
    pub fn joiner(&self) -> WSResult<PunctuationJoiner> {
        PunctuationJoiner::new(&self.attach_punctuation)
    }

    /// Build a [`DictionaryDecoder`] for the given vocab.
    pub fn build<T: TokenType>(
        &self,
        vocab: &Vocabulary<T>,
    ) -> WSResult<DictionaryDecoder<T>> {
        DictionaryDecoder::from_vocab(vocab, self)
    }
}
