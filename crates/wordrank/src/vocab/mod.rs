//! # Vocabulary
//!
//! This module provides the rank table and related io mechanisms.
//!
//! ## Rank Table
//!
//! The primary vocabulary is [`RankVocab`], which contains:
//! * a ``{ Vec<u8> -> T }`` span map, used as the merge table;
//! * a ``{ T -> Vec<u8> }`` rank-indexed table, used for decoding;
//! * a [`ByteMapVocab`] ``{ u8 -> T }`` table.
//!
//! ## Byte Vocabulary
//!
//! Vocabularies in the community do not rank bytes by ordinal value,
//! so we explicitly map between byte values and token ranks with:
//! * [`ByteMapVocab`].
pub mod byte_vocab;
pub mod io;
pub mod rank_vocab;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod vocab_types;

#[doc(inline)]
pub use byte_vocab::ByteMapVocab;
#[doc(inline)]
pub use rank_vocab::RankVocab;
#[doc(inline)]
pub use vocab_types::{ByteTokenArray, SpanTokenMap};
