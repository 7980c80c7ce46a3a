use std::sync::Arc;

use crate::{
    decoders::{TokenDecoderOptions, Utf8Policy},
    encoders::{SpanEncoderSelector, TokenEncoderOptions},
    errors::WRResult,
    pretrained::O200K_BASE_PATTERN,
    spanning::{RegexPattern, TextSpanner},
    tokenizer::Tokenizer,
    types::TokenType,
    vocab::RankVocab,
};

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizerOptions {
    /// Encoder options.
    pub encoder: TokenEncoderOptions,

    /// Decoder options.
    pub decoder: TokenDecoderOptions,

    /// The word split pattern; `o200k_base` by default.
    pub pattern: RegexPattern,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            encoder: Default::default(),
            decoder: Default::default(),
            pattern: O200K_BASE_PATTERN.to_pattern(),
        }
    }
}

impl TokenizerOptions {
    /// Gets the configured [`SpanEncoderSelector`].
    pub fn span_encoder(&self) -> SpanEncoderSelector {
        self.encoder.span_encoder()
    }

    /// Sets the configured [`SpanEncoderSelector`].
    pub fn set_span_encoder(
        &mut self,
        span_encoder: SpanEncoderSelector,
    ) {
        self.encoder.set_span_encoder(span_encoder);
    }

    /// Sets the configured [`SpanEncoderSelector`].
    pub fn with_span_encoder(
        mut self,
        span_encoder: SpanEncoderSelector,
    ) -> Self {
        self.set_span_encoder(span_encoder);
        self
    }

    /// Gets the configured [`Utf8Policy`].
    pub fn utf8_policy(&self) -> Utf8Policy {
        self.decoder.utf8_policy()
    }

    /// Sets the configured [`Utf8Policy`].
    pub fn set_utf8_policy(
        &mut self,
        utf8_policy: Utf8Policy,
    ) {
        self.decoder.set_utf8_policy(utf8_policy);
    }

    /// Sets the configured [`Utf8Policy`].
    pub fn with_utf8_policy(
        mut self,
        utf8_policy: Utf8Policy,
    ) -> Self {
        self.set_utf8_policy(utf8_policy);
        self
    }

    /// Gets the configured parallelism value.
    ///
    /// Returns true if either encoder or decoder are configured for parallelism.
    ///
    /// Enabling parallelism will request threaded batch implementations.
    pub fn parallel(&self) -> bool {
        self.encoder.parallel() || self.decoder.parallel()
    }

    /// Sets the configured parallelism value on both encoder and decoder.
    ///
    /// Enabling parallelism will request threaded batch implementations.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.encoder.set_parallel(parallel);
        self.decoder.set_parallel(parallel);
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded batch implementations.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Gets the configured word split pattern.
    pub fn pattern(&self) -> &RegexPattern {
        &self.pattern
    }

    /// Sets the configured word split pattern.
    pub fn set_pattern<P: Into<RegexPattern>>(
        &mut self,
        pattern: P,
    ) {
        self.pattern = pattern.into();
    }

    /// Sets the configured word split pattern.
    pub fn with_pattern<P: Into<RegexPattern>>(
        mut self,
        pattern: P,
    ) -> Self {
        self.set_pattern(pattern);
        self
    }

    /// Build a [`Tokenizer`] for the given vocab.
    ///
    /// ## Returns
    /// The tokenizer; or [`WRError::Pattern`](crate::WRError::Pattern)
    /// if the split pattern does not compile.
    pub fn build<T: TokenType>(
        &self,
        vocab: Arc<RankVocab<T>>,
    ) -> WRResult<Arc<Tokenizer<T>>> {
        let spanner = Arc::new(TextSpanner::from_pattern(
            self.pattern.clone(),
            self.encoder.max_pool(),
        )?);

        Ok(Tokenizer::new(
            vocab.clone(),
            self.encoder.build(vocab.clone(), spanner),
            self.decoder.build(vocab),
        )
        .into())
    }
}
