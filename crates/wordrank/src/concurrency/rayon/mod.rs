//! # Rayon Batch Wrappers

mod rayon_decoder;
mod rayon_encoder;

#[doc(inline)]
pub use rayon_decoder::*;
#[doc(inline)]
pub use rayon_encoder::*;
