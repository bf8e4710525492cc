use std::sync::Arc;

use crate::{
    TokenType,
    Tokenizer,
    Vocabulary,
    WSResult,
    decoders::DecoderOptions,
};

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenizerOptions {
    /// Decoder options.
    pub decoder: DecoderOptions,
}

impl TokenizerOptions {
    /// Sets the decoder options.
    pub fn with_decoder(
        self,
        decoder: DecoderOptions,
    ) -> Self {
        Self { decoder }
    }

    /// Build a [`Tokenizer`] for the given vocab.
    pub fn build<T: TokenType>(
        &self,
        vocab: Arc<Vocabulary<T>>,
    ) -> WSResult<Arc<Tokenizer<T>>> {
        Tokenizer::with_options(vocab, &self.decoder).map(Arc::new)
    }
}
