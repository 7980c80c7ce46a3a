//! Token Encoder Options
//!
//! Options for building a [`TokenEncoder`].

use core::num::NonZeroUsize;
use std::sync::Arc;

use crate::{
    encoders::{SpanEncoderSelector, TokenEncoder, TokenSpanEncoder},
    spanning::TextSpanner,
    types::TokenType,
    vocab::RankVocab,
};

/// Options for configuring a [`TokenEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenEncoderOptions {
    /// The [`SpanEncoderSelector`] to use.
    pub span_encoder: SpanEncoderSelector,

    /// Should batch encoding be threaded?
    pub parallel: bool,

    /// Maximum size of the per-thread [`SpanEncoder`](crate::encoders::SpanEncoder) pool.
    ///
    /// When `None`, the system parallelism is used.
    pub max_pool: Option<NonZeroUsize>,
}

impl TokenEncoderOptions {
    /// Get the configured [`SpanEncoderSelector`].
    pub fn span_encoder(&self) -> SpanEncoderSelector {
        self.span_encoder
    }

    /// Set the configured [`SpanEncoderSelector`].
    pub fn set_span_encoder(
        &mut self,
        span_encoder: SpanEncoderSelector,
    ) {
        self.span_encoder = span_encoder;
    }

    /// Set the configured [`SpanEncoderSelector`] and return the builder.
    pub fn with_span_encoder(
        mut self,
        span_encoder: SpanEncoderSelector,
    ) -> Self {
        self.set_span_encoder(span_encoder);
        self
    }

    /// Gets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded batch implementations;
    /// this requires the `rayon` feature, and is otherwise ignored.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    ///
    /// See: [`parallel`](Self::parallel)
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    ///
    /// See: [`parallel`](Self::parallel)
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Gets the configured max pool size.
    pub fn max_pool(&self) -> Option<NonZeroUsize> {
        self.max_pool
    }

    /// Sets the configured max pool size.
    pub fn set_max_pool(
        &mut self,
        max_pool: Option<NonZeroUsize>,
    ) {
        self.max_pool = max_pool;
    }

    /// Sets the configured max pool size.
    pub fn with_max_pool(
        mut self,
        max_pool: Option<NonZeroUsize>,
    ) -> Self {
        self.set_max_pool(max_pool);
        self
    }

    /// Build a [`TokenEncoder`] for the given vocab and spanner.
    pub fn build<T: TokenType>(
        &self,
        vocab: Arc<RankVocab<T>>,
        spanner: Arc<TextSpanner>,
    ) -> Arc<dyn TokenEncoder<T>> {
        #[allow(unused_mut)]
        let mut enc: Arc<dyn TokenEncoder<T>> = Arc::new(TokenSpanEncoder::<T>::new_with_selector(
            spanner,
            vocab,
            self.span_encoder,
            self.max_pool,
        ));

        #[cfg(feature = "rayon")]
        if self.parallel() {
            enc = Arc::new(crate::concurrency::rayon::ParallelRayonEncoder::new(enc));
        }

        enc
    }
}
