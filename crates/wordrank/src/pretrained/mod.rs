//! # Pretrained Vocabularies
//!
//! The `o200k_base` split pattern, its public ranking resource, and loaders.

pub mod o200k;
pub mod resources;

#[doc(inline)]
pub use o200k::*;
#[doc(inline)]
pub use resources::ConstUrlResource;
