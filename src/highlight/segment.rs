//! Typed segments of plain text.

use std::ops::Range;

/// What a segment of plain text renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Unstyled text.
    Text,
    /// An `@name` mention.
    Mention,
    /// A recognised URL.
    Url,
}

impl SegmentKind {
    /// Whether this kind renders as a styled inline node.
    #[must_use]
    pub const fn is_styled(self) -> bool {
        !matches!(self, Self::Text)
    }
}

/// A typed slice of plain text.
///
/// `start` and `end` are half-open offsets counted in scalar values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: usize,
    pub end: usize,
    pub content: String,
}

impl Segment {
    #[must_use]
    pub fn new(kind: SegmentKind, start: usize, end: usize, content: impl Into<String>) -> Self {
        debug_assert!(start <= end, "segment range must be start <= end");
        Self {
            kind,
            start,
            end,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check if this segment contains an insertion point.
    ///
    /// The end offset counts as inside, so a caret right after a mention is
    /// reported as being in it.
    #[must_use]
    pub fn touches(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// Concatenate segment contents back into plain text.
#[must_use]
pub fn reconstruct(segments: &[Segment]) -> String {
    let mut out = String::with_capacity(segments.iter().map(|s| s.content.len()).sum());
    for segment in segments {
        out.push_str(&segment.content);
    }
    out
}

/// The segment an insertion point falls in.
///
/// At a boundary between two segments the earlier one wins, matching the way
/// carets are placed at the end of the preceding node.
#[must_use]
pub fn segment_at(segments: &[Segment], offset: usize) -> Option<&Segment> {
    segments.iter().find(|segment| segment.touches(offset))
}
