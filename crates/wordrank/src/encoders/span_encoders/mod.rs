//! # [`SpanEncoder`] Implementations

mod merge_scan_encoder;
mod priority_merge_encoder;
mod span_encoder;
mod span_encoder_selector;

#[doc(inline)]
pub use merge_scan_encoder::*;
#[doc(inline)]
pub use priority_merge_encoder::*;
#[doc(inline)]
pub use span_encoder::*;
#[doc(inline)]
pub use span_encoder_selector::*;
