//! # Tokenizer

use std::sync::Arc;

use crate::{
    decoders::{TokenDecoder, Utf8Policy},
    encoders::TokenEncoder,
    errors::WRResult,
    spanning::TextSpanner,
    types::TokenType,
    vocab::RankVocab,
};

/// Unified Tokenizer.
///
/// Combines:
///  * [`RankVocab`],
///  * [`TokenEncoder`], and
///  * [`TokenDecoder`] wrappers.
///
/// A [`Tokenizer`] is immutable, `Send` and `Sync`;
/// share one behind an [`Arc`] across threads.
#[derive(Clone)]
pub struct Tokenizer<T: TokenType> {
    vocab: Arc<RankVocab<T>>,
    encoder: Arc<dyn TokenEncoder<T>>,
    decoder: Arc<dyn TokenDecoder<T>>,
}

impl<T: TokenType> core::fmt::Debug for Tokenizer<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("vocab", &self.vocab)
            .field("pattern", &self.spanner().word_regex().as_str())
            .field("utf8_policy", &self.utf8_policy())
            .finish()
    }
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a new tokenizer.
    pub fn new(
        vocab: Arc<RankVocab<T>>,
        encoder: Arc<dyn TokenEncoder<T>>,
        decoder: Arc<dyn TokenDecoder<T>>,
    ) -> Self {
        Self {
            vocab,
            encoder,
            decoder,
        }
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<RankVocab<T>> {
        &self.vocab
    }

    /// Get the underlying encoder.
    pub fn encoder(&self) -> &Arc<dyn TokenEncoder<T>> {
        &self.encoder
    }

    /// Get the underlying decoder.
    pub fn decoder(&self) -> &Arc<dyn TokenDecoder<T>> {
        &self.decoder
    }
}

impl<T: TokenType> TokenEncoder<T> for Tokenizer<T> {
    fn spanner(&self) -> &TextSpanner {
        self.encoder.spanner()
    }

    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> WRResult<()> {
        self.encoder.try_encode_append(text, tokens)
    }

    fn try_encode(
        &self,
        text: &str,
    ) -> WRResult<Vec<T>> {
        self.encoder.try_encode(text)
    }

    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> WRResult<Vec<Vec<T>>> {
        self.encoder.try_encode_batch(batch)
    }
}

impl<T: TokenType> TokenDecoder<T> for Tokenizer<T> {
    fn utf8_policy(&self) -> Utf8Policy {
        self.decoder.utf8_policy()
    }

    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> WRResult<()> {
        self.decoder.try_decode_append(tokens, buf)
    }

    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> WRResult<Vec<u8>> {
        self.decoder.try_decode_to_bytes(tokens)
    }

    fn try_decode_batch_to_bytes(
        &self,
        batch: &[&[T]],
    ) -> WRResult<Vec<Vec<u8>>> {
        self.decoder.try_decode_batch_to_bytes(batch)
    }

    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> WRResult<String> {
        self.decoder.try_decode_to_string(tokens)
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> WRResult<Vec<String>> {
        self.decoder.try_decode_batch_to_strings(batch)
    }
}
