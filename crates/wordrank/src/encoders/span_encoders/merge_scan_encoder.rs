//! # Merge-scan [`SpanEncoder`].

use crate::{encoders::span_encoders::SpanEncoder, types::TokenType, vocab::RankVocab};

/// The reference [`SpanEncoder`].
///
/// Rescans every adjacent pair after each merge; O(n^2) per span.
/// The code is as simple as possible, and is used to check
/// the faster encoders.
pub struct MergeScanSpanEncoder<T: TokenType> {
    /// Part boundaries; part ``i`` is ``span[bounds[i]..bounds[i + 1]]``.
    bounds: Vec<usize>,

    _marker: core::marker::PhantomData<fn() -> T>,
}

impl<T: TokenType> Default for MergeScanSpanEncoder<T> {
    fn default() -> Self {
        Self {
            bounds: Vec::new(),
            _marker: core::marker::PhantomData,
        }
    }
}

impl<T: TokenType> Clone for MergeScanSpanEncoder<T> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<T: TokenType> core::fmt::Debug for MergeScanSpanEncoder<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("MergeScanSpanEncoder").finish()
    }
}

impl<T: TokenType> SpanEncoder<T> for MergeScanSpanEncoder<T> {
    fn encode_append_compound_span(
        &mut self,
        vocab: &RankVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        let bounds = &mut self.bounds;
        bounds.clear();
        bounds.extend(0..=span.len());

        loop {
            // Lowest rank; leftmost on ties.
            let mut best: Option<(T, usize)> = None;
            for i in 0..bounds.len().saturating_sub(2) {
                if let Some(rank) = vocab.lookup_rank(&span[bounds[i]..bounds[i + 2]])
                    && best.is_none_or(|(r, _)| rank < r)
                {
                    best = Some((rank, i));
                }
            }

            match best {
                Some((_, i)) => {
                    bounds.remove(i + 1);
                }
                None => break,
            }
        }

        for w in bounds.windows(2) {
            let part = &span[w[0]..w[1]];
            match vocab.lookup_rank(part) {
                Some(token) => tokens.push(token),
                None => panic!("merged part {part:?} has no rank"),
            }
        }
    }
}
