//! # Token Decoders
//!
//! A [`TokenDecoder`] expands tokens back into bytes, and interprets
//! them as text under a [`Utf8Policy`].
//!
//! Decoders are built from [`TokenDecoderOptions`].

mod decoder_options;
mod dictionary_decoder;
mod token_decoder;

#[doc(inline)]
pub use decoder_options::*;
#[doc(inline)]
pub use dictionary_decoder::*;
#[doc(inline)]
pub use token_decoder::*;
