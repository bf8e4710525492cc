//! # Text Spanning
//!
//! This module factors out delimiter splitting, shared by vocabulary
//! building and encoding.
//!
//! [`SpanningConfig`] describes the declarative needs of a tokenizer:
//! * `pattern` - the delimiter pattern; every match is kept as a span.
//!
//! [`TextSpanner`] is the compiled form, and produces the stripped,
//! non-empty spans of a text.

mod spanning_config;
mod text_spanner;

#[doc(inline)]
pub use spanning_config::*;
#[doc(inline)]
pub use text_spanner::*;
