//! # Token Encoders
//!
//! * [`TokenEncoder`] - the encoder trait; text to token ids.
//! * [`VocabEncoder`] - span-by-span vocabulary lookup.
//!
//! ## Example
//!
//! ```rust
//! use wordslicer::build_vocabulary;
//! use wordslicer::encoders::{TokenEncoder, VocabEncoder};
//!
//! let vocab = build_vocabulary("Hi, Bob.").unwrap();
//! let encoder = VocabEncoder::from_vocab(vocab).unwrap();
//!
//! assert_eq!(encoder.try_encode("Hi, Bob.").unwrap(), vec![3, 0, 2, 1]);
//! assert!(encoder.try_encode("Hello").is_err());
//! ```

mod token_encoder;
mod vocab_encoder;

#[doc(inline)]
pub use token_encoder::*;
#[doc(inline)]
pub use vocab_encoder::*;
