//! # Regex Utilities
//!
//! This module provides mechanisms to mix `regex` and `fancy_regex` types,
//! so a delimiter pattern which needs look-around still works.

mod regex_pattern;
mod regex_wrapper;

#[doc(inline)]
pub use regex_pattern::*;
#[doc(inline)]
pub use regex_wrapper::*;
