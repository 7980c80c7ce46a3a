use std::sync::{Arc, Mutex};

use crate::{
    concurrency::PoolToy,
    encoders::{
        TokenEncoder,
        span_encoders::{SpanEncoder, SpanEncoderBuilder, SpanEncoderSelector},
    },
    errors::WRResult,
    spanning::TextSpanner,
    types::TokenType,
    vocab::RankVocab,
};

/// A [`TokenEncoder`] that composes a [`TextSpanner`] with a [`SpanEncoder`].
///
/// Every chunk, matched or gap, is encoded; merges never cross chunks.
///
/// [`SpanEncoder`]s hold scratch buffers, so each is guarded by a
/// [`Mutex`]; the pool slot is selected by thread id.
pub struct TokenSpanEncoder<T>
where
    T: TokenType,
{
    /// The reference vocabulary.
    vocab: Arc<RankVocab<T>>,

    /// Text Spanner.
    spanner: Arc<TextSpanner>,

    se_pool: PoolToy<Mutex<Box<dyn SpanEncoder<T>>>>,
}

impl<T: TokenType> core::fmt::Debug for TokenSpanEncoder<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("TokenSpanEncoder")
            .field("vocab", &self.vocab)
            .field("pattern", &self.spanner.word_regex().as_str())
            .field("pool", &self.se_pool.len())
            .finish()
    }
}

impl<T: TokenType> TokenSpanEncoder<T> {
    /// Create a new encoder using the selected [`SpanEncoder`].
    pub fn new_with_selector(
        spanner: Arc<TextSpanner>,
        vocab: Arc<RankVocab<T>>,
        selector: SpanEncoderSelector,
        max_pool: Option<core::num::NonZeroUsize>,
    ) -> Self {
        Self::new_with_builder(
            spanner,
            vocab,
            selector.span_encoder_builder(),
            max_pool,
        )
    }

    /// Create a new encoder.
    pub fn new_with_builder(
        spanner: Arc<TextSpanner>,
        vocab: Arc<RankVocab<T>>,
        se_builder: SpanEncoderBuilder<T>,
        max_pool: Option<core::num::NonZeroUsize>,
    ) -> Self {
        let se_pool = PoolToy::from_builder(max_pool, || Mutex::new(se_builder()));

        Self {
            vocab,
            spanner,
            se_pool,
        }
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<RankVocab<T>> {
        &self.vocab
    }
}

impl<T: TokenType> TokenEncoder<T> for TokenSpanEncoder<T> {
    fn spanner(&self) -> &TextSpanner {
        &self.spanner
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, text, tokens))
    )]
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> WRResult<()> {
        // Scratch state is reset per span; a poisoned lock is still usable.
        let mut se = self
            .se_pool
            .get()
            .lock()
            .unwrap_or_else(|e| e.into_inner());

        for span_ref in self.spanner.spans(text) {
            let span = text[core::ops::Range::from(span_ref)].as_bytes();
            se.encode_append_span(&self.vocab, span, tokens);
        }

        Ok(())
    }
}
