//! # Token Encoders
//!
//! A [`TokenEncoder`] splits text with a [`TextSpanner`](crate::spanning::TextSpanner),
//! and encodes each chunk independently with a [`SpanEncoder`].
//!
//! Encoders are built from [`TokenEncoderOptions`].

mod encoder_options;
pub mod span_encoders;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
mod token_encoder;
mod token_span_encoder;

#[doc(inline)]
pub use encoder_options::*;
#[doc(inline)]
pub use span_encoders::{SpanEncoder, SpanEncoderSelector};
#[doc(inline)]
pub use token_encoder::*;
#[doc(inline)]
pub use token_span_encoder::*;
