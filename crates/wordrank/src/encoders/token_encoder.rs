//! # Token Encoder Trait

use std::sync::Arc;

use crate::{errors::WRResult, spanning::TextSpanner, types::TokenType};

/// Expected average bytes per token; used for capacity hints.
pub const EXPECTED_BYTES_PER_TOKEN: f64 = 4.0;

/// A trait for token encoders.
///
/// Encoding is a pure function of the text and the vocabulary;
/// the same text always encodes to the same tokens.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Return the attached text spanner.
    fn spanner(&self) -> &TextSpanner;

    /// Encode text, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - The string slice to encode.
    /// * `tokens` - The target token buffer to append to.
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> WRResult<()>;

    /// Encode text into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// A vector of tokens; empty for empty text.
    fn try_encode(
        &self,
        text: &str,
    ) -> WRResult<Vec<T>> {
        let capacity = text.len() as f64 / EXPECTED_BYTES_PER_TOKEN;
        let mut tokens = Vec::with_capacity(capacity as usize);

        self.try_encode_append(text, &mut tokens)?;
        Ok(tokens)
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Arguments
    /// * `batch` - A slice of strings to encode.
    ///
    /// ## Returns
    /// A vector of token vectors, in batch order.
    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> WRResult<Vec<Vec<T>>> {
        batch.iter().map(|s| self.try_encode(s)).collect()
    }

    /// Count the tokens `text` encodes to.
    fn count_tokens(
        &self,
        text: &str,
    ) -> WRResult<usize> {
        Ok(self.try_encode(text)?.len())
    }
}

impl<T, E> TokenEncoder<T> for Arc<E>
where
    T: TokenType,
    E: TokenEncoder<T> + ?Sized,
{
    fn spanner(&self) -> &TextSpanner {
        (**self).spanner()
    }

    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> WRResult<()> {
        (**self).try_encode_append(text, tokens)
    }

    fn try_encode(
        &self,
        text: &str,
    ) -> WRResult<Vec<T>> {
        (**self).try_encode(text)
    }

    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> WRResult<Vec<Vec<T>>> {
        (**self).try_encode_batch(batch)
    }

    fn count_tokens(
        &self,
        text: &str,
    ) -> WRResult<usize> {
        (**self).count_tokens(text)
    }
}
