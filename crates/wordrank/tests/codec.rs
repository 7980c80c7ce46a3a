#![allow(missing_docs)]

use std::sync::Arc;

use proptest::prelude::*;
use wordrank::{
    RankVocab,
    SpanEncoderSelector,
    TokenDecoder,
    TokenEncoder,
    Tokenizer,
    TokenizerOptions,
    Utf8Policy,
    WRError,
};

const WORDS: &[&str] = &[
    "he", "ll", "hell", "hello", " w", "or", " wor", "ld", " world", "ca", "cat", "cats", " cats",
    "12", "123", "!!", "\n\n",
];

/// Ordinal byte ranks, then `words` from rank 256.
fn build_vocab_with(words: &[&str]) -> Arc<RankVocab<u32>> {
    let bytes = (0..256u32).map(|b| (vec![b as u8], b));
    let words = words
        .iter()
        .enumerate()
        .map(|(idx, w)| (w.as_bytes().to_vec(), 256 + idx as u32));

    Arc::new(RankVocab::try_from_pairs(bytes.chain(words)).unwrap())
}

fn build_vocab() -> Arc<RankVocab<u32>> {
    build_vocab_with(WORDS)
}

fn build_tokenizer(options: TokenizerOptions) -> Arc<Tokenizer<u32>> {
    options.build(build_vocab()).unwrap()
}

fn rank(word: &str) -> u32 {
    256 + WORDS.iter().position(|w| *w == word).unwrap() as u32
}

#[test]
fn test_empty() {
    let tokenizer = build_tokenizer(TokenizerOptions::default());
    assert!(tokenizer.try_encode("").unwrap().is_empty());
    assert_eq!(tokenizer.try_decode_to_string(&[]).unwrap(), "");
    assert!(tokenizer.try_decode_to_bytes(&[]).unwrap().is_empty());
}

#[test]
fn test_hello() {
    let tokenizer = build_tokenizer(TokenizerOptions::default());

    let tokens = tokenizer.try_encode("hello").unwrap();
    assert_eq!(tokens, vec![rank("hello")]);
    assert_eq!(tokenizer.try_decode_to_string(&tokens).unwrap(), "hello");
}

#[test]
fn test_split_at_space() {
    let tokenizer = build_tokenizer(TokenizerOptions::default());

    let tokens = tokenizer.try_encode("hello world").unwrap();
    assert_eq!(tokens, vec![rank("hello"), rank(" world")]);
    assert_eq!(tokenizer.count_tokens("hello world").unwrap(), 2);
}

#[test]
fn test_merges_within_chunks() {
    let tokenizer = build_tokenizer(TokenizerOptions::default());

    // "12345" chunks as "123", "45"; merges never cross the boundary.
    let tokens = tokenizer.try_encode("12345 cats!!\n\n").unwrap();
    assert_eq!(
        tokens,
        vec![
            rank("123"),
            b'4' as u32,
            b'5' as u32,
            rank(" cats"),
            rank("!!"),
            rank("\n\n"),
        ]
    );
}

#[test]
fn test_repeated_pair_merges_one_at_a_time() {
    // "aba" outranks "ab"; after the leftmost "ab" merges,
    // "aba" becomes the best pair and takes the second "a".
    let vocab = build_vocab_with(&["aba", "ab"]);

    for selector in SpanEncoderSelector::ALL {
        let tokenizer = TokenizerOptions::default()
            .with_span_encoder(selector)
            .build(vocab.clone())
            .unwrap();

        assert_eq!(tokenizer.try_encode("abab").unwrap(), vec![256, b'b' as u32]);
        assert_eq!(tokenizer.try_encode("ab").unwrap(), vec![257]);
    }
}

#[test]
fn test_whole_chunk_entry() {
    // "abc" is reachable only as a whole chunk; no pair merges lead to it.
    let vocab = build_vocab_with(&["abc"]);

    for selector in SpanEncoderSelector::ALL {
        let tokenizer = TokenizerOptions::default()
            .with_span_encoder(selector)
            .build(vocab.clone())
            .unwrap();

        assert_eq!(tokenizer.try_encode("abc").unwrap(), vec![256]);
        assert_eq!(tokenizer.try_encode("abcd").unwrap(), vec![97, 98, 99, 100]);
        assert_eq!(tokenizer.try_encode("abc abc").unwrap(), vec![256, 32, 97, 98, 99]);
    }
}

#[test]
fn test_raw_bytes() {
    let tokenizer = build_tokenizer(TokenizerOptions::default());
    assert_eq!(tokenizer.try_decode_to_bytes(&[0, 1, 2]).unwrap(), vec![0, 1, 2]);
    assert_eq!(tokenizer.try_decode_to_string(&[0, 1, 2]).unwrap(), "\u{0}\u{1}\u{2}");
}

#[test]
fn test_emoji_round_trip() {
    let tokenizer = build_tokenizer(TokenizerOptions::default());

    let text = "cats 🐈‍⬛ say hello 👋 to the world!!";
    let tokens = tokenizer.try_encode(text).unwrap();
    assert_eq!(tokenizer.try_decode_to_string(&tokens).unwrap(), text);
}

#[test]
fn test_unknown_token() {
    let tokenizer = build_tokenizer(TokenizerOptions::default());

    let err = tokenizer.try_decode_to_string(&[999999999]).unwrap_err();
    assert!(matches!(
        err,
        WRError::UnknownToken {
            token: 999999999,
            index: 0
        }
    ));

    let err = tokenizer
        .try_decode_to_bytes(&[rank("hello"), 999999999])
        .unwrap_err();
    assert!(matches!(err, WRError::UnknownToken { index: 1, .. }));

    // Unknown tokens are an error under every policy.
    let lossy = build_tokenizer(TokenizerOptions::default().with_utf8_policy(Utf8Policy::Lossy));
    assert!(lossy.try_decode_to_string(&[999999999]).is_err());
}

#[test]
fn test_utf8_policy() {
    // The leading byte of "é".
    let split: Vec<u32> = vec![0xC3];

    let strict = build_tokenizer(TokenizerOptions::default());
    assert!(matches!(
        strict.try_decode_to_string(&split),
        Err(WRError::DecodeUtf8 { valid_up_to: 0 })
    ));
    assert_eq!(strict.try_decode_to_bytes(&split).unwrap(), vec![0xC3]);

    let lossy = build_tokenizer(TokenizerOptions::default().with_utf8_policy(Utf8Policy::Lossy));
    assert_eq!(lossy.try_decode_to_string(&split).unwrap(), "\u{FFFD}");
}

proptest! {
    #[test]
    fn test_round_trip(text in "\\PC{0,64}") {
        let tokenizer = build_tokenizer(TokenizerOptions::default());

        let tokens = tokenizer.try_encode(&text).unwrap();
        prop_assert!(tokens.iter().all(|&t| (t as usize) < tokenizer.vocab().len()));
        prop_assert_eq!(tokenizer.try_decode_to_string(&tokens).unwrap(), text);
    }

    #[test]
    fn test_engines_agree(text in "[a-z !\\n0-9]{0,48}") {
        let default = build_tokenizer(TokenizerOptions::default());
        let reference = build_tokenizer(
            TokenizerOptions::default().with_span_encoder(SpanEncoderSelector::Reference),
        );

        prop_assert_eq!(
            default.try_encode(&text).unwrap(),
            reference.try_encode(&text).unwrap()
        );
    }
}
