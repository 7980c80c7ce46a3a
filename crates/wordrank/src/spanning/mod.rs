//! # Text Spanning
//!
//! Pre-tokenization: splitting text into chunks which are encoded independently.
//!
//! The split pattern is a [`RegexPattern`], compiled to a [`RegexWrapper`]
//! over either `regex` or `fancy_regex`; see [`TextSpanner`].

pub mod pattern_tools;
mod regex_wrapper;
mod text_spanner;

#[doc(inline)]
pub use regex_wrapper::*;
#[doc(inline)]
pub use text_spanner::*;
