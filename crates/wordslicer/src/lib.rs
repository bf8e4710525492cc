//! # `wordslicer` Word Tokenizer
//!
//! A small word-level tokenizer: text is split on a fixed set of punctuation
//! and whitespace delimiters, and every distinct span of a training corpus
//! becomes a token, numbered in sorted order.
//!
//! See:
//! * [`vocab`] to build, save, and load a [`Vocabulary`].
//! * [`encoders`] to encode text into token ids.
//! * [`decoders`] to decode token ids into text.
//! * [`Tokenizer`] to do both over one vocabulary.
//! * [`spanning`] to configure the delimiter pattern.
//!
//! ## Example
//!
//! ```rust
//! use wordslicer::{Tokenizer, build_vocabulary};
//!
//! let vocab = build_vocabulary("Hi, Bob.")?;
//! let tokenizer = Tokenizer::new(vocab)?;
//!
//! let ids = tokenizer.encode("Hi, Bob.")?;
//! assert_eq!(ids, vec![3, 0, 2, 1]);
//! assert_eq!(tokenizer.decode(&ids)?, "Hi, Bob.");
//!
//! // spans outside the vocabulary are a hard failure.
//! assert!(tokenizer.encode("Hello").is_err());
//! # Ok::<(), wordslicer::WordslicerError>(())
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod regex;
pub mod spanning;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::TokenDecoder;
#[doc(inline)]
pub use encoders::TokenEncoder;
#[doc(inline)]
pub use errors::{WSResult, WordslicerError};
#[doc(inline)]
pub use tokenizer::{Tokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{VocabBuilder, Vocabulary, build_vocabulary};
