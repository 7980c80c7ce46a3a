//! # Token Decoder Trait

use std::sync::Arc;

use crate::{
    errors::{WRError, WRResult},
    types::TokenType,
};

/// How decoded bytes are interpreted as text.
///
/// Unknown tokens are an error under every policy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Utf8Policy {
    /// Invalid UTF-8 is an error; see [`WRError::DecodeUtf8`].
    #[default]
    Strict,

    /// Invalid UTF-8 sequences are replaced with `U+FFFD`.
    Lossy,
}

impl Utf8Policy {
    /// Interpret bytes as text under this policy.
    pub fn bytes_to_string(
        &self,
        bytes: Vec<u8>,
    ) -> WRResult<String> {
        match self {
            Utf8Policy::Strict => String::from_utf8(bytes).map_err(|err| WRError::DecodeUtf8 {
                valid_up_to: err.utf8_error().valid_up_to(),
            }),
            Utf8Policy::Lossy => Ok(match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
            }),
        }
    }
}

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// The [`Utf8Policy`] used by [`try_decode_to_string`](Self::try_decode_to_string).
    fn utf8_policy(&self) -> Utf8Policy;

    /// Decode tokens, appending their bytes to a target buffer.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    /// * `buf` - The target byte buffer.
    ///
    /// ## Errors
    /// [`WRError::UnknownToken`] for the first token with no entry;
    /// `buf` may hold a partial result.
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> WRResult<()>;

    /// Decodes tokens into bytes.
    ///
    /// The result is the exact concatenation of each token's bytes,
    /// whether or not it is valid UTF-8.
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> WRResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(tokens.len() * 4);
        self.try_decode_append(tokens, &mut buf)?;
        Ok(buf)
    }

    /// Decodes a batch of tokens into bytes.
    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> WRResult<Vec<Vec<u8>>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_bytes(tokens))
            .collect()
    }

    /// Decodes tokens into a string, under [`utf8_policy`](Self::utf8_policy).
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> WRResult<String> {
        self.utf8_policy()
            .bytes_to_string(self.try_decode_to_bytes(tokens)?)
    }

    /// Decodes a batch of tokens into strings.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> WRResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}

impl<T, D> TokenDecoder<T> for Arc<D>
where
    T: TokenType,
    D: TokenDecoder<T> + ?Sized,
{
    fn utf8_policy(&self) -> Utf8Policy {
        (**self).utf8_policy()
    }

    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> WRResult<()> {
        (**self).try_decode_append(tokens, buf)
    }

    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> WRResult<Vec<u8>> {
        (**self).try_decode_to_bytes(tokens)
    }

    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> WRResult<Vec<Vec<u8>>> {
        (**self).try_decode_batch_to_bytes(batch)
    }

    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> WRResult<String> {
        (**self).try_decode_to_string(tokens)
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> WRResult<Vec<String>> {
        (**self).try_decode_batch_to_strings(batch)
    }
}
