//! # Byte/Token Mapping Table

use core::fmt::Debug;

use crate::{
    errors::VocabError,
    types::TokenType,
    vocab::{ByteTokenArray, SpanTokenMap},
};

/// ``0..=255`` Byte to Rank Table.
///
/// This will always have 256 entries, one for each byte value.
/// The token values are not required to be dense, or in the range ``0..=255``;
/// `o200k_base`, for example, does not rank bytes by ordinal.
#[derive(Clone, PartialEq)]
pub struct ByteMapVocab<T: TokenType> {
    /// Table mapping from byte ordinal (position) to token.
    byte_tokens: ByteTokenArray<T>,
}

impl<T: TokenType> Debug for ByteMapVocab<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ByteMapVocab")
            .field("first", &self.byte_tokens[0])
            .field("last", &self.byte_tokens[255])
            .finish()
    }
}

impl<T: TokenType> ByteMapVocab<T> {
    /// Read the single-byte entries out of a ``{ Vec<u8> -> T }`` map.
    ///
    /// ## Returns
    /// [`VocabError::MissingByte`] for the first byte without an entry.
    pub fn try_from_span_map(span_map: &SpanTokenMap<T>) -> Result<Self, VocabError> {
        let mut byte_tokens: ByteTokenArray<T> = [T::zero(); 256];
        for (idx, slot) in byte_tokens.iter_mut().enumerate() {
            let byte = idx as u8;
            *slot = *span_map
                .get([byte].as_slice())
                .ok_or(VocabError::MissingByte { byte })?;
        }
        Ok(Self { byte_tokens })
    }

    /// Get the byte-ord => token mapping table.
    pub fn byte_tokens(&self) -> &ByteTokenArray<T> {
        &self.byte_tokens
    }

    /// Get the token corresponding to a given byte.
    #[inline(always)]
    pub fn get_token(
        &self,
        byte: u8,
    ) -> T {
        self.byte_tokens[byte as usize]
    }

    /// Append the translated byte tokens to a target buffer.
    ///
    /// ## Arguments
    /// * `bytes` - The slice of bytes to translate and append.
    /// * `tokens` - The target token buffer.
    #[inline(always)]
    pub fn append_tokens(
        &self,
        bytes: &[u8],
        tokens: &mut Vec<T>,
    ) {
        tokens.extend(bytes.iter().map(|&b| self.get_token(b)));
    }
}
