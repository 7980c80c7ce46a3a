use crate::{types::TokenType, vocab::RankVocab};

/// A trait for encoding a single chunk of text into tokens.
///
/// Implementations may hold scratch buffers between calls;
/// hence `&mut self`, and `Send` but not `Sync`.
pub trait SpanEncoder<T: TokenType>: Send {
    /// Encodes a byte span by BPE merging, from single byte tokens.
    ///
    /// ## Arguments
    /// * `vocab` - The reference vocabulary.
    /// * `span` - The byte span.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_compound_span(
        &mut self,
        vocab: &RankVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    );

    /// Encodes a byte span.
    ///
    /// A span which is itself a vocabulary entry is emitted as that one token.
    ///
    /// ## Arguments
    /// * `vocab` - The reference vocabulary.
    /// * `span` - The byte span.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_span(
        &mut self,
        vocab: &RankVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        match vocab.lookup_rank(span) {
            Some(token) => tokens.push(token),
            None => self.encode_append_compound_span(vocab, span, tokens),
        }
    }
}
