//! Token Decoder Options
//!
//! Options for building a [`TokenDecoder`].

use std::sync::Arc;

use crate::{
    decoders::{DictionaryDecoder, TokenDecoder, Utf8Policy},
    types::TokenType,
    vocab::RankVocab,
};

/// Options for configuring a [`TokenDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenDecoderOptions {
    /// How decoded bytes are interpreted as text.
    pub utf8_policy: Utf8Policy,

    /// Should batch decoding be threaded?
    pub parallel: bool,
}

impl TokenDecoderOptions {
    /// Gets the configured [`Utf8Policy`].
    pub fn utf8_policy(&self) -> Utf8Policy {
        self.utf8_policy
    }

    /// Sets the configured [`Utf8Policy`].
    pub fn set_utf8_policy(
        &mut self,
        utf8_policy: Utf8Policy,
    ) {
        self.utf8_policy = utf8_policy;
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
    /// Enabling parallelism will request a threaded batch implementation;
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

    /// Build a [`TokenDecoder`] for the given vocab.
    pub fn build<T: TokenType>(
        &self,
        vocab: Arc<RankVocab<T>>,
    ) -> Arc<dyn TokenDecoder<T>> {
        #[allow(unused_mut)]
        let mut dec: Arc<dyn TokenDecoder<T>> =
            Arc::new(DictionaryDecoder::new(vocab, self.utf8_policy));

        #[cfg(feature = "rayon")]
        if self.parallel {
            use crate::concurrency::rayon::ParallelRayonDecoder;
            dec = Arc::new(ParallelRayonDecoder::new(dec));
        }

        dec
    }
}
