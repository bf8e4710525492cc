//! # Rayon Batch Parallelism
//!
//! Wrappers which override the batch methods of
//! [`crate::encoders::TokenEncoder`] and [`crate::decoders::TokenDecoder`]
//! to fan out over the ``rayon`` thread pool.

mod rayon_decoder;
mod rayon_encoder;

#[doc(inline)]
pub use rayon_decoder::*;
#[doc(inline)]
pub use rayon_encoder::*;
