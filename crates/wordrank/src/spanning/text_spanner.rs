//! # Text Spanner

use core::{num::NonZeroUsize, ops::Range};

use crate::{
    concurrency::PoolToy,
    errors::WRResult,
    spanning::{MatchesWrapper, RegexPattern, RegexWrapper},
};

/// Expected average bytes per chunk; used for capacity hints.
pub const EXPECTED_BYTES_PER_SPAN: f32 = 4.0;

/// Span Label/Range Reference for [`TextSpanner`].
///
/// Ranges are byte offsets into the source text,
/// and always fall on `char` boundaries.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpanRef {
    /// A span matched by the split pattern.
    Word(Range<usize>),

    /// A span of text the split pattern did not match.
    Gap(Range<usize>),
}

impl SpanRef {
    /// The byte range of the span.
    pub fn range(&self) -> Range<usize> {
        match self {
            SpanRef::Word(range) => range.clone(),
            SpanRef::Gap(range) => range.clone(),
        }
    }
}

impl From<SpanRef> for Range<usize> {
    fn from(span: SpanRef) -> Self {
        match span {
            SpanRef::Word(range) => range,
            SpanRef::Gap(range) => range,
        }
    }
}

/// Pattern-based text splitter.
///
/// Splits text into chunks which concatenate, in order, to the source text:
/// * each match of the split pattern is a [`SpanRef::Word`];
/// * any unmatched text between matches is a [`SpanRef::Gap`].
///
/// If the pattern fails at match time (a `fancy_regex` backtrack limit),
/// the failure is logged and the rest of the text is emitted as one gap.
///
/// Compiled regex are pooled per-thread; see [`PoolToy`].
#[derive(Clone, Debug)]
pub struct TextSpanner {
    /// Regex for splitting words.
    word_re: PoolToy<RegexWrapper>,
}

impl TextSpanner {
    /// Build a new [`TextSpanner`] from a pattern.
    ///
    /// ## Arguments
    /// * `pattern` - The word split pattern.
    /// * `max_pool` - The maximum size of the regex pool; if None, lib defaults are used.
    pub fn from_pattern<P>(
        pattern: P,
        max_pool: Option<NonZeroUsize>,
    ) -> WRResult<Self>
    where
        P: Into<RegexPattern>,
    {
        let word_re = pattern.into().compile()?;
        Ok(Self::new(word_re, max_pool))
    }

    /// Build a new [`TextSpanner`] from a compiled regex.
    ///
    /// ## Arguments
    /// * `word_re` - The regex for word splitting.
    /// * `max_pool` - The maximum size of the regex pool; if None, lib defaults are used.
    pub fn new(
        word_re: RegexWrapper,
        max_pool: Option<NonZeroUsize>,
    ) -> Self {
        Self {
            word_re: PoolToy::init(word_re, max_pool),
        }
    }

    /// Get the span split regex.
    pub fn word_regex(&self) -> &RegexWrapper {
        self.word_re.get()
    }

    /// Lazily iterate over the [`SpanRef`]s of the text.
    ///
    /// ## Arguments
    /// * `text` - the text to split.
    pub fn spans<'s, 'h>(
        &'s self,
        text: &'h str,
    ) -> SpanIter<'s, 'h> {
        SpanIter {
            text_len: text.len(),
            matches: Some(self.word_regex().find_iter(text)),
            last: 0,
            pending: None,
        }
    }

    /// Iterate over all split [`SpanRef`]s in the text.
    ///
    /// # Arguments
    /// * `text` - the text to split.
    /// * `f` - the function to apply to each span;
    ///   halts when the function returns `false`.
    ///
    /// Note: a span is consumed *only if* the function returns `true`.
    ///
    /// # Returns
    /// ``(completed, consumed)`` where:
    /// - `consumed` is the number of bytes covered by spans accepted by `f`;
    /// - `completed` is if all spans were accepted.
    pub fn for_each_split_span<F>(
        &self,
        text: &str,
        f: &mut F,
    ) -> (bool, usize)
    where
        F: FnMut(SpanRef) -> bool,
    {
        let mut consumed = 0;
        for span_ref in self.spans(text) {
            let end = span_ref.range().end;
            if !f(span_ref) {
                return (false, consumed);
            }
            consumed = end;
        }
        (true, consumed)
    }

    /// Split text into spans.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    ///
    /// ## Returns
    /// A vector of `SpanRef` items.
    pub fn split_spans(
        &self,
        text: &str,
    ) -> Vec<SpanRef> {
        let capacity = text.len() as f32 / EXPECTED_BYTES_PER_SPAN;
        let mut spans = Vec::with_capacity(capacity as usize);
        spans.extend(self.spans(text));
        spans
    }

    /// Split text into chunk slices.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    pub fn split_chunks<'h>(
        &self,
        text: &'h str,
    ) -> Vec<&'h str> {
        self.spans(text)
            .map(|span_ref| &text[Range::from(span_ref)])
            .collect()
    }
}

/// Lazy [`SpanRef`] iterator; see [`TextSpanner::spans`].
pub struct SpanIter<'r, 'h> {
    text_len: usize,
    matches: Option<MatchesWrapper<'r, 'h>>,

    /// End of the last emitted span.
    last: usize,

    /// A word held back while the gap before it is emitted.
    pending: Option<Range<usize>>,
}

impl Iterator for SpanIter<'_, '_> {
    type Item = SpanRef;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(range) = self.pending.take() {
            self.last = range.end;
            return Some(SpanRef::Word(range));
        }

        while let Some(matches) = self.matches.as_mut() {
            match matches.next() {
                Some(Ok(range)) if range.is_empty() => continue,
                Some(Ok(range)) => {
                    if self.last < range.start {
                        let gap = self.last..range.start;
                        self.last = range.start;
                        self.pending = Some(range);
                        return Some(SpanRef::Gap(gap));
                    }
                    self.last = range.end;
                    return Some(SpanRef::Word(range));
                }
                Some(Err(err)) => {
                    log::warn!(
                        "split pattern failed at byte {}; emitting remaining text as one gap: {err}",
                        self.last
                    );
                    self.matches = None;
                }
                None => self.matches = None,
            }
        }

        if self.last < self.text_len {
            let gap = self.last..self.text_len;
            self.last = self.text_len;
            return Some(SpanRef::Gap(gap));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::pretrained::o200k::O200K_BASE_PATTERN;

    fn o200k_spanner() -> TextSpanner {
        TextSpanner::from_pattern(O200K_BASE_PATTERN, NonZeroUsize::new(1)).unwrap()
    }

    #[test]
    fn test_for_each_split_span() {
        use SpanRef::*;

        let spanner = TextSpanner::from_pattern(r"\w+", NonZeroUsize::new(1)).unwrap();
        assert!(spanner.word_regex().is_basic());

        let source = "abc 1 def  ghi   ";

        let mut spans: Vec<SpanRef> = Vec::new();
        let (completed, consumed) = spanner.for_each_split_span(source, &mut |span_ref| {
            spans.push(span_ref);
            true
        });
        assert!(completed);
        assert_eq!(consumed, source.len());
        assert_eq!(
            spans,
            vec![
                Word(0..3),
                Gap(3..4),
                Word(4..5),
                Gap(5..6),
                Word(6..9),
                Gap(9..11),
                Word(11..14),
                Gap(14..17),
            ]
        );

        // Word Exit
        let mut spans: Vec<SpanRef> = Vec::new();
        let res = spanner.for_each_split_span("   abc", &mut |span_ref| match span_ref {
            Word(_) => false,
            _ => {
                spans.push(span_ref);
                true
            }
        });
        assert_eq!(res, (false, 3));
        assert_eq!(spans, vec![Gap(0..3)]);

        // Leading Gap Exit
        let mut spans: Vec<SpanRef> = Vec::new();
        let res = spanner.for_each_split_span("abc  def", &mut |span_ref| match span_ref {
            Gap(_) => false,
            _ => {
                spans.push(span_ref);
                true
            }
        });
        assert_eq!(res, (false, 3));
        assert_eq!(spans, vec![Word(0..3)]);

        // Trailing Gap Exit
        let res = spanner.for_each_split_span("foo  ", &mut |span_ref| matches!(span_ref, Word(_)));
        assert_eq!(res, (false, 3));
    }

    #[test]
    fn test_empty_text() {
        let spanner = o200k_spanner();
        assert!(spanner.split_spans("").is_empty());
        assert_eq!(spanner.spans("").next(), None);
        assert_eq!(spanner.for_each_split_span("", &mut |_| false), (true, 0));
    }

    #[test]
    fn test_o200k_chunks() {
        let spanner = o200k_spanner();
        assert!(spanner.word_regex().is_fancy());

        assert_eq!(spanner.split_chunks("hello world"), vec!["hello", " world"]);

        assert_eq!(
            spanner.split_chunks("I'm 12345 cats!!\n\n  ok"),
            vec!["I'm", " ", "123", "45", " cats", "!!\n\n", " ", " ok"]
        );

        assert_eq!(spanner.split_chunks("hi  "), vec!["hi", "  "]);

        assert_eq!(
            spanner.split_spans("hello world"),
            vec![SpanRef::Word(0..5), SpanRef::Word(5..11)]
        );
    }

    proptest! {
        #[test]
        fn test_chunks_cover_text(text in any::<String>()) {
            let spanner = o200k_spanner();

            let chunks = spanner.split_chunks(&text);
            prop_assert_eq!(chunks.concat(), text.clone());
            prop_assert!(chunks.iter().all(|c| !c.is_empty()));

            // Deterministic.
            prop_assert_eq!(spanner.split_chunks(&text), chunks);
        }

        #[test]
        fn test_gappy_pattern_covers_text(text in "[a-c ]{0,32}") {
            let spanner = TextSpanner::from_pattern("b+", NonZeroUsize::new(1)).unwrap();

            let mut next = 0;
            for span_ref in spanner.spans(&text) {
                let range = span_ref.range();
                prop_assert_eq!(range.start, next);
                prop_assert!(range.start < range.end);
                next = range.end;
            }
            prop_assert_eq!(next, text.len());
        }
    }
}
