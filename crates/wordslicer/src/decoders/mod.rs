//! # Token Decoders
//!
//! * [`TokenDecoder`] - the decoder trait; token ids to text.
//! * [`DictionaryDecoder`] - reverse-vocabulary lookup.
//! * [`PunctuationJoiner`] - joins decoded spans back into text.
//!
//! ## Example
//!
//! ```rust
//! use wordslicer::build_vocabulary;
//! use wordslicer::decoders::{DecoderOptions, TokenDecoder};
//!
//! let vocab = build_vocabulary("Hi, Bob.").unwrap();
//! let decoder = DecoderOptions::default().build(&vocab).unwrap();
//!
//! assert_eq!(decoder.try_decode_to_string(&[3, 0, 2, 1]).unwrap(), "Hi, Bob.");
//! ```

mod decoder_options;
mod dictionary_decoder;
mod punctuation_joiner;
mod token_decoder;

#[doc(inline)]
pub use decoder_options::*;
#[doc(inline)]
pub use dictionary_decoder::*;
#[doc(inline)]
pub use punctuation_joiner::*;
#[doc(inline)]
pub use token_decoder::*;
