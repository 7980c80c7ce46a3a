//! # `wordrank` o200k BPE Tokenizer
//!
//! This is a byte-pair-encoding tokenizer for the `o200k_base` vocabulary.
//!
//! `wordrank` produces the same token ids as `tiktoken` for `o200k_base`,
//! from an independently implemented rank table and merge engine.
//!
//! See:
//! * [`vocab`] for the [`RankVocab`] rank table, and tiktoken vocab io.
//! * [`spanning`] for the pre-tokenizer which splits text into chunks.
//! * [`encoders`] for the merge engines, which encode chunks into tokens.
//! * [`decoders`] to decode tokens into bytes and text.
//! * [`tokenizer`] for the [`Tokenizer`] facade which combines them.
//! * [`pretrained`] for the `o200k_base` pattern, resource, and loaders.
//!
//! ## Crate Features
//!
#![doc = document_features::document_features!()]
//!
//! ## Loading the o200k Tokenizer
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use wordrank::{
//!     RankVocab,
//!     TokenDecoder,
//!     TokenEncoder,
//!     TokenizerOptions,
//!     disk_cache::WordrankDiskCache,
//!     pretrained::load_o200k_base_vocab,
//! };
//!
//! let mut disk_cache = WordrankDiskCache::default();
//! let vocab: Arc<RankVocab<u32>> = load_o200k_base_vocab(&mut disk_cache)?.into();
//!
//! let tokenizer = TokenizerOptions::default().build(vocab)?;
//!
//! let tokens = tokenizer.try_encode("hello world")?;
//! assert_eq!(tokenizer.try_decode_to_string(&tokens)?, "hello world");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![warn(missing_docs, unused)]

pub mod concurrency;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod pretrained;
pub mod spanning;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[cfg(feature = "download")]
#[doc(inline)]
pub use wordrank_disk_cache as disk_cache;

#[doc(inline)]
pub use decoders::{TokenDecoder, TokenDecoderOptions, Utf8Policy};
#[doc(inline)]
pub use encoders::{SpanEncoderSelector, TokenEncoder, TokenEncoderOptions};
#[doc(inline)]
pub use errors::{VocabError, WRError, WRResult};
#[doc(inline)]
pub use tokenizer::{Tokenizer, TokenizerCell, TokenizerOptions};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::RankVocab;
