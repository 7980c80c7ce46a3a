//! # Priority-merge [`SpanEncoder`].
//!
//! Uses a binary min-heap over a doubly-linked list for O(n log n) BPE merging,
//! replacing the O(n^2) rescan of [`super::MergeScanSpanEncoder`].

use core::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{encoders::span_encoders::SpanEncoder, types::TokenType, vocab::RankVocab};

const NONE: usize = usize::MAX;

/// A live symbol; covers ``span[idx..end]`` where `idx` is its own index.
struct Node<T> {
    token: T,
    end: usize,
    prev: usize,
    next: usize,
}

/// Heap entry representing a potential merge.
///
/// Ordered by (rank, `left_idx`) so the lowest-rank, leftmost pair is popped first.
/// The merged bytes are ``span[left_idx..right_end]``; an entry is stale
/// once the node at `left_idx` no longer neighbors a node ending at `right_end`.
#[derive(Eq)]
struct MergeEntry<T: Ord> {
    rank: T,
    left_idx: usize,
    right_end: usize,
}

impl<T: Ord> PartialEq for MergeEntry<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.rank == other.rank && self.left_idx == other.left_idx
    }
}

impl<T: Ord> Ord for MergeEntry<T> {
    fn cmp(
        &self,
        other: &Self,
    ) -> core::cmp::Ordering {
        self.rank
            .cmp(&other.rank)
            .then(self.left_idx.cmp(&other.left_idx))
    }
}

impl<T: Ord> PartialOrd for MergeEntry<T> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A [`SpanEncoder`] using a binary min-heap with a doubly-linked list.
///
/// Processes BPE merges in O(n log n) time per span.
/// The node and heap buffers are reused across calls.
pub struct PriorityMergeSpanEncoder<T: TokenType> {
    nodes: Vec<Node<T>>,
    heap: BinaryHeap<Reverse<MergeEntry<T>>>,
}

impl<T: TokenType> Default for PriorityMergeSpanEncoder<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            heap: BinaryHeap::new(),
        }
    }
}

impl<T: TokenType> core::fmt::Debug for PriorityMergeSpanEncoder<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("PriorityMergeSpanEncoder").finish()
    }
}

impl<T: TokenType> Clone for PriorityMergeSpanEncoder<T> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<T: TokenType> PriorityMergeSpanEncoder<T> {
    fn push_candidate(
        &mut self,
        vocab: &RankVocab<T>,
        span: &[u8],
        left_idx: usize,
        right_end: usize,
    ) {
        if let Some(rank) = vocab.lookup_rank(&span[left_idx..right_end]) {
            self.heap.push(Reverse(MergeEntry {
                rank,
                left_idx,
                right_end,
            }));
        }
    }
}

impl<T: TokenType> SpanEncoder<T> for PriorityMergeSpanEncoder<T> {
    fn encode_append_compound_span(
        &mut self,
        vocab: &RankVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        let n = span.len();
        let byte_vocab = vocab.byte_vocab();

        if n < 2 {
            byte_vocab.append_tokens(span, tokens);
            return;
        }

        // Build doubly-linked list of byte tokens.
        self.nodes.clear();
        self.nodes.reserve(n);
        for (i, &byte) in span.iter().enumerate() {
            self.nodes.push(Node {
                token: byte_vocab.get_token(byte),
                end: i + 1,
                prev: if i == 0 { NONE } else { i - 1 },
                next: if i + 1 < n { i + 1 } else { NONE },
            });
        }

        // Seed the heap with all initially-mergeable adjacent pairs.
        self.heap.clear();
        for i in 0..(n - 1) {
            self.push_candidate(vocab, span, i, i + 2);
        }

        // Process merges in priority order (lowest rank first).
        while let Some(Reverse(entry)) = self.heap.pop() {
            let li = entry.left_idx;

            let ri = self.nodes[li].next;
            if ri == NONE {
                continue;
            }

            // A dead left node is no longer its neighbor's `prev`;
            // a grown right node has moved its `end`.
            if self.nodes[ri].prev != entry.left_idx || self.nodes[ri].end != entry.right_end {
                continue;
            }

            // Merge: left absorbs right.
            let right_next = self.nodes[ri].next;
            {
                let left = &mut self.nodes[li];
                left.token = entry.rank;
                left.end = entry.right_end;
                left.next = right_next;
            }
            if right_next != NONE {
                self.nodes[right_next].prev = entry.left_idx;
            }

            // Enqueue new neighbor pairs.
            let left_prev = self.nodes[li].prev;
            if left_prev != NONE {
                self.push_candidate(vocab, span, left_prev, entry.right_end);
            }
            if right_next != NONE {
                let next_end = self.nodes[right_next].end;
                self.push_candidate(vocab, span, entry.left_idx, next_end);
            }
        }

        // Collect final tokens by walking the linked list.
        let mut idx = 0;
        while idx != NONE {
            let node = &self.nodes[idx];
            tokens.push(node.token);
            idx = node.next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        encoders::{
            span_encoders::SpanEncoderSelector,
            testing::{common_encoder_tests, test_encoder_for},
        },
        vocab::testing::{build_test_shift_vocab, build_test_vocab},
    };

    fn test_encoder<T: TokenType>() {
        let (vocab, encoder) = test_encoder_for::<T>(SpanEncoderSelector::PriorityMerge);
        common_encoder_tests(vocab, encoder.as_ref())
    }

    #[test]
    fn test_encoder_u16() {
        test_encoder::<u16>();
    }

    #[test]
    fn test_encoder_u32() {
        test_encoder::<u32>();
    }

    #[test]
    fn test_compound_spans() {
        type T = u32;
        let vocab = build_test_vocab::<T>();
        let mut se = PriorityMergeSpanEncoder::<T>::default();

        let mut encode = |span: &[u8]| {
            let mut tokens = vec![];
            se.encode_append_compound_span(&vocab, span, &mut tokens);
            tokens
        };

        let r = |s: &str| vocab.lookup_rank(s.as_bytes()).unwrap();

        assert_eq!(encode(b""), Vec::<T>::new());
        assert_eq!(encode(b"x"), vec![b'x' as T]);
        assert_eq!(encode(b"hello"), vec![r("hello")]);
        assert_eq!(encode(b" world"), vec![r(" world")]);
        assert_eq!(encode(b"hellothe"), vec![r("hello"), r("the")]);
        assert_eq!(encode(b"zzat"), vec![b'z' as T, b'z' as T, r("at")]);

        // Reuses its buffers.
        assert_eq!(encode(b"all"), vec![r("all")]);
    }

    #[test]
    fn test_single_byte_spans() {
        type T = u32;
        let vocab = build_test_shift_vocab::<T>(7);

        for selector in SpanEncoderSelector::ALL {
            let mut se = selector.span_encoder_builder::<T>()();
            for b in 0..=255u8 {
                let mut tokens = vec![];
                se.encode_append_span(&vocab, &[b], &mut tokens);
                assert_eq!(tokens, vec![vocab.byte_token(b)], "{selector:?} byte {b}");
            }
        }
    }

    #[test]
    fn test_long_span() {
        type T = u32;
        let vocab = build_test_vocab::<T>();
        let hello = vocab.lookup_rank(b"hello").unwrap();
        let mut se = PriorityMergeSpanEncoder::<T>::default();

        let span = b"hello".repeat(50_000);
        let mut tokens = vec![];
        se.encode_append_compound_span(&vocab, &span, &mut tokens);
        assert_eq!(tokens, vec![hello; 50_000]);
    }
}
