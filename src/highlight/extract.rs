//! Plain text to typed segments.
//!
//! Mentions come from a fixed pattern (`@` then an alphanumeric, then any run
//! of alphanumerics, `_` or `-`). URLs come from the injected [`UrlRule`].
//! Candidates are sorted by start and scanned once; overlaps keep the earlier
//! candidate except that a mention always displaces a URL. Whatever lies
//! between accepted candidates becomes text.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::segment::{Segment, SegmentKind};
use super::url::{RegexUrlRule, UrlRule};
use crate::unicode::{char_before, char_len};

const MENTION_PATTERN: &str = r"@[A-Za-z0-9][A-Za-z0-9_-]*";

static MENTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MENTION_PATTERN).expect("mention pattern compiles"));

static DEFAULT_EXTRACTOR: LazyLock<SegmentExtractor> = LazyLock::new(SegmentExtractor::default);

/// Extract segments with the default URL rule.
#[must_use]
pub fn extract(text: &str) -> Vec<Segment> {
    DEFAULT_EXTRACTOR.extract(text)
}

/// A mention or URL candidate in byte offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Candidate {
    kind: SegmentKind,
    start: usize,
    end: usize,
}

impl Candidate {
    fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Segment extractor with an injected URL rule.
pub struct SegmentExtractor {
    mention: Regex,
    url_rule: Box<dyn UrlRule>,
}

impl SegmentExtractor {
    /// Create an extractor using `url_rule` for URL recognition.
    #[must_use]
    pub fn new(url_rule: impl UrlRule + 'static) -> Self {
        Self::with_boxed_rule(Box::new(url_rule))
    }

    /// Create an extractor from an already boxed rule.
    #[must_use]
    pub fn with_boxed_rule(url_rule: Box<dyn UrlRule>) -> Self {
        Self {
            mention: MENTION_REGEX.clone(),
            url_rule,
        }
    }

    /// The URL rule in use.
    #[must_use]
    pub fn url_rule(&self) -> &dyn UrlRule {
        self.url_rule.as_ref()
    }

    /// Split `text` into ordered, non-overlapping segments whose contents
    /// concatenate back to `text`. Empty input yields no segments.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<Segment> {
        if text.is_empty() {
            return Vec::new();
        }

        let accepted = resolve_overlaps(self.candidates(text));
        let mut segments = Vec::with_capacity(accepted.len() * 2 + 1);
        let mut char_pos = 0usize;
        let mut byte_pos = 0usize;

        for candidate in &accepted {
            if candidate.start > byte_pos {
                push_segment(
                    &mut segments,
                    &mut char_pos,
                    SegmentKind::Text,
                    &text[byte_pos..candidate.start],
                );
            }
            push_segment(
                &mut segments,
                &mut char_pos,
                candidate.kind,
                &text[candidate.start..candidate.end],
            );
            byte_pos = candidate.end;
        }
        if byte_pos < text.len() {
            push_segment(&mut segments, &mut char_pos, SegmentKind::Text, &text[byte_pos..]);
        }

        tracing::trace!(
            rule = self.url_rule.name(),
            segments = segments.len(),
            styled = accepted.len(),
            "extracted segments"
        );
        segments
    }

    /// Mentioned names (without `@`) in order of first appearance.
    #[must_use]
    pub fn mentions(&self, text: &str) -> Vec<String> {
        self.styled_contents(text, SegmentKind::Mention, |content| {
            content.trim_start_matches('@').to_string()
        })
    }

    /// Recognised URLs in order of first appearance.
    #[must_use]
    pub fn urls(&self, text: &str) -> Vec<String> {
        self.styled_contents(text, SegmentKind::Url, str::to_string)
    }

    fn styled_contents(
        &self,
        text: &str,
        kind: SegmentKind,
        map: impl Fn(&str) -> String,
    ) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for segment in self.extract(text) {
            if segment.kind != kind {
                continue;
            }
            let value = map(&segment.content);
            if !out.contains(&value) {
                out.push(value);
            }
        }
        out
    }

    fn candidates(&self, text: &str) -> Vec<Candidate> {
        let mut out: Vec<Candidate> = self
            .mention
            .find_iter(text)
            .map(|m| Candidate {
                kind: SegmentKind::Mention,
                start: m.start(),
                end: m.end(),
            })
            .collect();

        for found in self.url_rule.find_urls(text) {
            if char_before(text, found.matched.start) == Some('@') {
                tracing::trace!(start = found.matched.start, "url candidate follows '@', dropped");
                continue;
            }
            let url = found.url;
            let valid = url.start < url.end
                && url.end <= text.len()
                && text.is_char_boundary(url.start)
                && text.is_char_boundary(url.end);
            if !valid {
                tracing::debug!(?url, rule = self.url_rule.name(), "url rule produced invalid span");
                continue;
            }
            out.push(Candidate {
                kind: SegmentKind::Url,
                start: url.start,
                end: url.end,
            });
        }

        // Stable: on equal starts mentions stay ahead of URLs.
        out.sort_by_key(|c| c.start);
        out
    }
}

impl Default for SegmentExtractor {
    fn default() -> Self {
        Self::new(RegexUrlRule::default())
    }
}

impl fmt::Debug for SegmentExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentExtractor")
            .field("mention", &self.mention.as_str())
            .field("url_rule", &self.url_rule.name())
            .finish()
    }
}

/// Scan candidates sorted by start, keeping the earlier of two overlapping
/// candidates unless a mention overlaps accepted URLs.
///
/// Accepted candidates never overlap and every one starts at or before the
/// incoming candidate, so only the last accepted one can overlap it.
fn resolve_overlaps(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut accepted: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let Some(first) = accepted.iter().position(|a| a.overlaps(&candidate)) else {
            accepted.push(candidate);
            continue;
        };
        let displaces = candidate.kind == SegmentKind::Mention
            && accepted[first..].iter().all(|a| a.kind == SegmentKind::Url);
        if displaces {
            accepted.truncate(first);
            accepted.push(candidate);
        }
    }
    accepted
}

fn push_segment(segments: &mut Vec<Segment>, char_pos: &mut usize, kind: SegmentKind, content: &str) {
    let len = char_len(content);
    segments.push(Segment::new(kind, *char_pos, *char_pos + len, content));
    *char_pos += len;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::segment::reconstruct;
    use crate::highlight::url::UrlMatch;

    fn kinds(segments: &[Segment]) -> Vec<(SegmentKind, &str)> {
        segments
            .iter()
            .map(|s| (s.kind, s.content.as_str()))
            .collect()
    }

    #[test]
    fn empty_text_has_no_segments() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn fresh_extractors_reuse_the_mention_pattern() {
        let extractor = SegmentExtractor::default();
        assert_eq!(extractor.mention.as_str(), MENTION_PATTERN);
        assert_eq!(extractor.extract("hi @ann"), extract("hi @ann"));
    }

    #[test]
    fn plain_text_is_one_segment() {
        let segments = extract("just words");
        assert_eq!(segments, vec![Segment::new(SegmentKind::Text, 0, 10, "just words")]);
    }

    #[test]
    fn mention_and_url_in_sentence() {
        let segments = extract("Hello @john check http://x.com");
        assert_eq!(kinds(&segments), vec![
            (SegmentKind::Text, "Hello "),
            (SegmentKind::Mention, "@john"),
            (SegmentKind::Text, " check "),
            (SegmentKind::Url, "http://x.com"),
        ]);
        assert_eq!(segments[3].start, 18);
        assert_eq!(segments[3].end, 30);
    }

    #[test]
    fn mention_beats_url() {
        let segments = extract("@foo.com");
        assert_eq!(kinds(&segments), vec![
            (SegmentKind::Mention, "@foo"),
            (SegmentKind::Text, ".com"),
        ]);
    }

    #[test]
    fn mention_requires_alphanumeric_first() {
        assert_eq!(kinds(&extract("@_x @-y @")), vec![(SegmentKind::Text, "@_x @-y @")]);
        assert_eq!(kinds(&extract("@a_b-c!")), vec![
            (SegmentKind::Mention, "@a_b-c"),
            (SegmentKind::Text, "!"),
        ]);
    }

    #[test]
    fn email_url_suppressed_but_later_url_kept() {
        let segments = extract("email@x.com and http://y.com");
        assert_eq!(kinds(&segments), vec![
            (SegmentKind::Text, "email"),
            (SegmentKind::Mention, "@x"),
            (SegmentKind::Text, ".com and "),
            (SegmentKind::Url, "http://y.com"),
        ]);
    }

    #[test]
    fn offsets_count_scalar_values() {
        let segments = extract("日本 @ユーザ @bob");
        // Non-ASCII names are not mentions; offsets are in chars, not bytes.
        assert_eq!(kinds(&segments), vec![
            (SegmentKind::Text, "日本 @ユーザ "),
            (SegmentKind::Mention, "@bob"),
        ]);
        assert_eq!(segments[1].start, 8);
        assert_eq!(segments[1].end, 12);
    }

    #[test]
    fn overlapping_urls_keep_first() {
        let rule = |_: &str| vec![UrlMatch::exact(0..6), UrlMatch::exact(3..9)];
        let extractor = SegmentExtractor::new(rule);
        let segments = extractor.extract("abcdefghij");
        assert_eq!(kinds(&segments), vec![
            (SegmentKind::Url, "abcdef"),
            (SegmentKind::Text, "ghij"),
        ]);
    }

    #[test]
    fn mention_displaces_enclosing_url() {
        let rule = |_: &str| vec![UrlMatch::exact(0..10)];
        let extractor = SegmentExtractor::new(rule);
        let segments = extractor.extract("see @bob x");
        assert_eq!(kinds(&segments), vec![
            (SegmentKind::Text, "see "),
            (SegmentKind::Mention, "@bob"),
            (SegmentKind::Text, " x"),
        ]);
    }

    #[test]
    fn url_overlapping_displacing_mention_is_dropped() {
        let rule = |_: &str| vec![UrlMatch::exact(0..5), UrlMatch::exact(6..11)];
        let extractor = SegmentExtractor::new(rule);
        let segments = extractor.extract("aaaa@bb-cc dd");
        assert_eq!(kinds(&segments), vec![
            (SegmentKind::Text, "aaaa"),
            (SegmentKind::Mention, "@bb-cc"),
            (SegmentKind::Text, " dd"),
        ]);
    }

    #[test]
    fn invalid_rule_spans_are_ignored() {
        let rule = |_: &str| vec![UrlMatch::exact(1..2), UrlMatch::exact(4..99)];
        let extractor = SegmentExtractor::new(rule);
        // Byte 1..2 is inside 'é'; 4..99 runs past the end.
        let segments = extractor.extract("éabc");
        assert_eq!(kinds(&segments), vec![(SegmentKind::Text, "éabc")]);
    }

    #[test]
    fn segments_reconstruct_text() {
        for text in ["", "a", "@a", "x.com", "@a.b.com www.z.io @c", "  @@x @y- http://q.co/@z"] {
            assert_eq!(reconstruct(&extract(text)), text);
        }
    }

    #[test]
    fn mentions_and_urls_queries() {
        let extractor = SegmentExtractor::default();
        let text = "@ann meet @bob at maps.example.com, cc @ann";
        assert_eq!(extractor.mentions(text), vec!["ann", "bob"]);
        assert_eq!(extractor.urls(text), vec!["maps.example.com"]);
    }
}
