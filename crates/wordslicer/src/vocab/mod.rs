//! # Vocabulary
//!
//! This module provides the vocabulary, its builder, and related io mechanisms.
//!
//! * [`Vocabulary`] - a ``{ String -> T }`` vocabulary, with its [`crate::spanning::SpanningConfig`].
//! * [`VocabBuilder`] - builds a sorted, contiguous vocabulary from corpus text.
//! * [`io`] - line-oriented vocabulary persistence.

pub mod io;

mod vocab_builder;
mod vocab_types;
mod vocabulary;

#[doc(inline)]
pub use vocab_builder::*;
#[doc(inline)]
pub use vocab_types::*;
#[doc(inline)]
pub use vocabulary::*;
