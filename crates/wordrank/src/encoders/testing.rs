//! # Encoder Testing Tools

use core::num::NonZeroUsize;
use std::sync::Arc;

use crate::{
    encoders::{SpanEncoderSelector, TokenEncoder, TokenEncoderOptions},
    pretrained::o200k::O200K_BASE_PATTERN,
    spanning::TextSpanner,
    types::TokenType,
    vocab::{RankVocab, testing::build_test_shift_vocab},
};

/// Sample texts for encoder tests.
pub const COMMON_SAMPLES: &[&str] = &[
    "",
    "hello",
    "hello world",
    "the cat ate all the hello world",
    "at 123 12345, for all. the",
    "  leading and trailing  ",
    "line\n\nbreaks\r\n",
    "I'm \u{1F600} 😀 ok",
    "日本語のテキスト",
];

/// Build the test vocab, and an o200k-pattern encoder over it.
pub fn test_encoder_for<T: TokenType>(
    selector: SpanEncoderSelector
) -> (Arc<RankVocab<T>>, Arc<dyn TokenEncoder<T>>) {
    let vocab: Arc<RankVocab<T>> = build_test_shift_vocab(10).into();
    let spanner: Arc<TextSpanner> = TextSpanner::from_pattern(O200K_BASE_PATTERN, NonZeroUsize::new(2))
        .unwrap()
        .into();

    let encoder = TokenEncoderOptions::default()
        .with_span_encoder(selector)
        .build(vocab.clone(), spanner);

    (vocab, encoder)
}

/// Check an encoder against [`COMMON_SAMPLES`].
///
/// Checks round-trips through the vocab, determinism,
/// chunk boundaries, and the batch and count interfaces.
pub fn common_encoder_tests<T: TokenType>(
    vocab: Arc<RankVocab<T>>,
    encoder: &dyn TokenEncoder<T>,
) {
    let expand = |tokens: &[T]| -> Vec<u8> {
        tokens
            .iter()
            .flat_map(|&t| vocab.lookup_bytes(t).unwrap().to_vec())
            .collect()
    };

    for &sample in COMMON_SAMPLES {
        let tokens = encoder.try_encode(sample).unwrap();
        assert_eq!(expand(&tokens), sample.as_bytes(), "{sample:?}");
        assert_eq!(encoder.try_encode(sample).unwrap(), tokens);
        assert_eq!(encoder.count_tokens(sample).unwrap(), tokens.len());
    }

    assert!(encoder.try_encode("").unwrap().is_empty());

    let hello = vocab.lookup_rank(b"hello").unwrap();
    let world = vocab.lookup_rank(b" world").unwrap();
    assert_eq!(encoder.try_encode("hello world").unwrap(), vec![hello, world]);

    // ", " is an entry, but "," and " b" are separate chunks.
    let byte = |b: u8| vocab.byte_vocab().get_token(b);
    assert_eq!(
        encoder.try_encode("a, b").unwrap(),
        vec![byte(b'a'), byte(b','), byte(b' '), byte(b'b')]
    );

    let batch = encoder.try_encode_batch(COMMON_SAMPLES).unwrap();
    assert_eq!(batch.len(), COMMON_SAMPLES.len());
    for (tokens, &sample) in batch.iter().zip(COMMON_SAMPLES) {
        assert_eq!(tokens, &encoder.try_encode(sample).unwrap());
    }
}
