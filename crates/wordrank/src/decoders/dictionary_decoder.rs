//! # Dictionary ``T -> Vec<u8>`` Token Decoder

use std::sync::Arc;

use crate::{
    decoders::{TokenDecoder, Utf8Policy},
    errors::{WRError, WRResult},
    types::TokenType,
    vocab::RankVocab,
};

/// A [`TokenDecoder`] which looks each token up in a [`RankVocab`].
#[derive(Clone, Debug)]
pub struct DictionaryDecoder<T: TokenType> {
    vocab: Arc<RankVocab<T>>,
    utf8_policy: Utf8Policy,
}

impl<T: TokenType> DictionaryDecoder<T> {
    /// Build a decoder over a vocabulary.
    ///
    /// ## Arguments
    /// * `vocab` - the vocabulary.
    /// * `utf8_policy` - the string decoding policy.
    pub fn new(
        vocab: Arc<RankVocab<T>>,
        utf8_policy: Utf8Policy,
    ) -> Self {
        Self { vocab, utf8_policy }
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<RankVocab<T>> {
        &self.vocab
    }
}

impl<T: TokenType> TokenDecoder<T> for DictionaryDecoder<T> {
    fn utf8_policy(&self) -> Utf8Policy {
        self.utf8_policy
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, tokens, buf))
    )]
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> WRResult<()> {
        for (index, &token) in tokens.iter().enumerate() {
            match self.vocab.lookup_bytes(token) {
                Some(span) => buf.extend_from_slice(span),
                None => {
                    return Err(WRError::UnknownToken {
                        token: token.to_u64().unwrap_or(u64::MAX),
                        index,
                    });
                }
            }
        }
        Ok(())
    }
}
