//! # Span Encoder Selector

use std::sync::Arc;

use crate::{
    encoders::span_encoders::{MergeScanSpanEncoder, PriorityMergeSpanEncoder, SpanEncoder},
    types::TokenType,
};

/// Builder closure type for [`SpanEncoder`]s.
pub type SpanEncoderBuilder<T> = Arc<dyn Fn() -> Box<dyn SpanEncoder<T>> + Send + Sync>;

/// Policy enum for selecting a [`SpanEncoder`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SpanEncoderSelector {
    /// The canonical best Default encoder.
    ///
    /// Users should, in general, prefer to use this encoder.
    ///
    /// This is currently an alias for: [`PriorityMerge`](`Self::PriorityMerge`)
    #[default]
    Default,

    /// The canonical reference encoder.
    ///
    /// This encoder is meant to be used as a reference implementation for testing and comparison.
    ///
    /// This is currently an alias for: [`MergeScan`](`Self::MergeScan`)
    Reference,

    /// Use the [`PriorityMergeSpanEncoder`] encoder.
    PriorityMerge,

    /// Use the [`MergeScanSpanEncoder`] encoder.
    MergeScan,
}

impl SpanEncoderSelector {
    /// All selectors.
    pub const ALL: [SpanEncoderSelector; 4] = [
        SpanEncoderSelector::Default,
        SpanEncoderSelector::Reference,
        SpanEncoderSelector::PriorityMerge,
        SpanEncoderSelector::MergeScan,
    ];

    /// Resolve aliases to a concrete encoder selector.
    pub fn resolve(&self) -> SpanEncoderSelector {
        use SpanEncoderSelector::*;
        match self {
            Default | PriorityMerge => PriorityMerge,
            Reference | MergeScan => MergeScan,
        }
    }

    /// Get a builder for the configured [`SpanEncoder`].
    pub fn span_encoder_builder<T: TokenType>(&self) -> SpanEncoderBuilder<T> {
        use SpanEncoderSelector::*;
        match self.resolve() {
            MergeScan => Arc::new(|| Box::new(MergeScanSpanEncoder::<T>::default())),
            _ => Arc::new(|| Box::new(PriorityMergeSpanEncoder::<T>::default())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        use SpanEncoderSelector::*;
        assert_eq!(SpanEncoderSelector::default(), Default);
        assert_eq!(Default.resolve(), PriorityMerge);
        assert_eq!(Reference.resolve(), MergeScan);

        for selector in SpanEncoderSelector::ALL {
            assert_eq!(selector.resolve().resolve(), selector.resolve());
            let _ = selector.span_encoder_builder::<u32>()();
        }
    }
}
