//! # Rank Table ``{ Vec<u8> <-> T }`` Vocabulary

use crate::{
    errors::VocabError,
    types::TokenType,
    vocab::{ByteMapVocab, SpanTokenMap},
};

/// Immutable BPE rank table.
///
/// Holds the bijection between byte spans and ranks:
/// * ``{ Vec<u8> -> T }`` as a hash map, for merge lookups;
/// * ``{ T -> Vec<u8> }`` as a rank-indexed table, for decoding;
/// * ``{ u8 -> T }`` as a fixed [`ByteMapVocab`], for initial merge symbols.
///
/// The rank of an entry is both its token id and its merge priority;
/// lower ranks merge first.
///
/// Construction validates that:
/// * no span is empty, and no span repeats;
/// * ranks are exactly ``0..len``;
/// * all 256 single-byte spans are present.
///
/// After construction, lookups never fail except by returning `None`.
#[derive(Clone, PartialEq)]
pub struct RankVocab<T: TokenType> {
    byte_vocab: ByteMapVocab<T>,
    span_map: SpanTokenMap<T>,
    token_spans: Vec<Vec<u8>>,
}

impl<T: TokenType> core::fmt::Debug for RankVocab<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("RankVocab")
            .field("len", &self.len())
            .finish()
    }
}

impl<T: TokenType> TryFrom<SpanTokenMap<T>> for RankVocab<T> {
    type Error = VocabError;

    fn try_from(span_map: SpanTokenMap<T>) -> Result<Self, Self::Error> {
        Self::try_from_pairs(span_map)
    }
}

impl<T: TokenType> RankVocab<T> {
    /// Build a [`RankVocab`] from ``(span, rank)`` pairs.
    ///
    /// ## Arguments
    /// * `pairs` - the vocabulary entries, in any order.
    ///
    /// ## Returns
    /// The validated vocabulary, or the first [`VocabError`] found.
    pub fn try_from_pairs<I, S>(pairs: I) -> Result<Self, VocabError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<Vec<u8>>,
    {
        let pairs: Vec<(Vec<u8>, T)> = pairs
            .into_iter()
            .map(|(span, token)| (span.into(), token))
            .collect();
        let size = pairs.len();

        if size > 0 && T::from_usize(size - 1).is_none() {
            return Err(VocabError::VocabSizeOverflow { size });
        }

        let mut slots: Vec<Option<Vec<u8>>> = vec![None; size];
        let mut span_map: SpanTokenMap<T> = Default::default();
        span_map.reserve(size);

        for (span, token) in pairs {
            let rank = token.to_u64().unwrap_or(u64::MAX);
            if span.is_empty() {
                return Err(VocabError::EmptySpan { rank });
            }

            if span_map.insert(span.clone(), token).is_some() {
                return Err(VocabError::DuplicateSpan { span });
            }

            // Out of range ranks leave a hole, reported below.
            if let Some(slot) = token.to_usize().and_then(|idx| slots.get_mut(idx)) {
                if slot.is_some() {
                    return Err(VocabError::DuplicateRank { rank });
                }
                *slot = Some(span);
            }
        }

        let mut token_spans = Vec::with_capacity(size);
        for (idx, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(span) => token_spans.push(span),
                None => {
                    return Err(VocabError::NonContiguousRanks {
                        rank: idx as u64,
                        size,
                    });
                }
            }
        }

        let byte_vocab = ByteMapVocab::try_from_span_map(&span_map)?;

        span_map.shrink_to_fit();

        log::debug!("built rank vocab with {size} entries");

        Ok(Self {
            byte_vocab,
            span_map,
            token_spans,
        })
    }

    /// The number of entries in the vocabulary.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.token_spans.len()
    }

    /// The largest rank in the vocabulary.
    pub fn max_token(&self) -> T {
        // Construction guarantees at least 256 entries, each fitting in `T`.
        T::from_usize(self.len() - 1).unwrap_or_else(T::max_value)
    }

    /// Get the byte/token table.
    pub fn byte_vocab(&self) -> &ByteMapVocab<T> {
        &self.byte_vocab
    }

    /// The rank of a single byte.
    #[inline(always)]
    pub fn byte_token(
        &self,
        byte: u8,
    ) -> T {
        self.byte_vocab.get_token(byte)
    }

    /// Get the ``{ Vec<u8> -> T }`` map.
    pub fn span_map(&self) -> &SpanTokenMap<T> {
        &self.span_map
    }

    /// Return the rank of a byte span, if any.
    ///
    /// ## Arguments
    /// * `span` - The byte slice to look up.
    #[inline(always)]
    pub fn lookup_rank(
        &self,
        span: &[u8],
    ) -> Option<T> {
        if let [byte] = span {
            Some(self.byte_token(*byte))
        } else {
            self.span_map.get(span).copied()
        }
    }

    /// Return the byte span of a rank, if any.
    ///
    /// ## Arguments
    /// * `token` - The rank to look up.
    #[inline(always)]
    pub fn lookup_bytes(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        token
            .to_usize()
            .and_then(|idx| self.token_spans.get(idx))
            .map(|span| span.as_slice())
    }

    /// Iterate over ``(token, span)`` entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &[u8])> + '_ {
        self.token_spans
            .iter()
            .enumerate()
            .filter_map(|(idx, span)| T::from_usize(idx).map(|t| (t, span.as_slice())))
    }
}
