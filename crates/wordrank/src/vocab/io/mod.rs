//! # Vocabulary IO
//!
//! The `o200k_base` ranking source is distributed in the `tiktoken` format;
//! one base64 span and its decimal rank per line.

pub mod tiktoken_io;

#[doc(inline)]
pub use tiktoken_io::*;
