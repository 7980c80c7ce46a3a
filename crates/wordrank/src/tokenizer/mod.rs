//! # Combined Tokenizer

mod tokenizer_cell;
mod tokenizer_impl;
mod tokenizer_options;

#[doc(inline)]
pub use tokenizer_cell::*;
#[doc(inline)]
pub use tokenizer_impl::*;
#[doc(inline)]
pub use tokenizer_options::*;
