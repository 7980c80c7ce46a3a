//! # Vocab Testing Tools

use crate::{types::TokenType, vocab::RankVocab};

/// Words layered over the byte ranks of the test vocabularies, in rank order.
pub const TEST_WORDS: &[&str] = &[
    "at", "ate", "th", "the", "he", "ll", "hell", "hello", "wo", "ld", "rld", "world", " w",
    " world", "fo", "for", "all", ", ", ". ", "12", "123",
];

/// ``(vec![b], b)`` for every byte; the identity byte ranks.
pub fn ordinal_byte_pairs<T: TokenType>() -> impl Iterator<Item = (Vec<u8>, T)> {
    (0..256usize).map(|b| (vec![b as u8], T::from_usize(b).unwrap()))
}

/// ``(vec![b], (b + shift) % 256)`` for every byte; a rotated permutation of byte ranks.
pub fn shifted_byte_pairs<T: TokenType>(shift: usize) -> impl Iterator<Item = (Vec<u8>, T)> {
    (0..256usize).map(move |b| (vec![b as u8], T::from_usize((b + shift) % 256).unwrap()))
}

fn with_test_words<T: TokenType>(
    byte_pairs: impl Iterator<Item = (Vec<u8>, T)>
) -> RankVocab<T> {
    let words = TEST_WORDS
        .iter()
        .enumerate()
        .map(|(idx, w)| (w.as_bytes().to_vec(), T::from_usize(256 + idx).unwrap()));

    RankVocab::try_from_pairs(byte_pairs.chain(words)).unwrap()
}

/// Create a test [`RankVocab`] with ordinal byte ranks and [`TEST_WORDS`].
pub fn build_test_vocab<T: TokenType>() -> RankVocab<T> {
    with_test_words(ordinal_byte_pairs())
}

/// Create a test [`RankVocab`] with rotated byte ranks and [`TEST_WORDS`].
pub fn build_test_shift_vocab<T: TokenType>(shift: usize) -> RankVocab<T> {
    with_test_words(shifted_byte_pairs(shift))
}
