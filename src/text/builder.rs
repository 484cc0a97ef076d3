//! Rebuild a surface's visual tree from segments.

use crate::highlight::{Segment, SegmentKind};
use crate::style::{MentionColor, SpanClass};
use crate::surface::EditableSurface;

/// Replace all children of the surface root with one node per segment.
///
/// Text segments become plain text nodes; mentions and URLs become styled
/// inline nodes. An empty segment list leaves the root with no children at
/// all, the state a placeholder overlay relies on.
pub fn build<S: EditableSurface + ?Sized>(surface: &mut S, segments: &[Segment], color: MentionColor) {
    surface.clear();
    for segment in segments {
        if segment.content.is_empty() {
            continue;
        }
        match segment.kind {
            SegmentKind::Text => {
                surface.append_text(&segment.content);
            }
            kind => {
                surface.append_span(&segment.content, SpanClass::new(kind, color));
            }
        }
    }
    tracing::trace!(nodes = segments.len(), ?color, "rebuilt visual tree");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::extract;
    use crate::surface::MemorySurface;

    #[test]
    fn builds_one_node_per_segment() {
        let mut surface = MemorySurface::new();
        build(&mut surface, &extract("Hello @john check http://x.com"), MentionColor::White);
        let runs = surface.runs();
        assert_eq!(runs.len(), 4);
        assert_eq!(runs[0], (None, "Hello ".to_string()));
        assert_eq!(
            runs[1],
            (
                Some(SpanClass::new(SegmentKind::Mention, MentionColor::White)),
                "@john".to_string()
            )
        );
        assert_eq!(runs[2], (None, " check ".to_string()));
        assert_eq!(
            runs[3].0,
            Some(SpanClass::new(SegmentKind::Url, MentionColor::White))
        );
        assert_eq!(surface.text_content(), "Hello @john check http://x.com");
    }

    #[test]
    fn empty_segments_leave_no_children() {
        let mut surface = MemorySurface::new();
        build(&mut surface, &extract("abc"), MentionColor::Blue);
        build(&mut surface, &extract(""), MentionColor::Blue);
        assert!(surface.children(surface.root()).is_empty());
        assert_eq!(surface.text_content(), "");
    }

    #[test]
    fn rebuild_replaces_previous_tree() {
        let mut surface = MemorySurface::new();
        build(&mut surface, &extract("@a"), MentionColor::Blue);
        let old = surface.children(surface.root());
        build(&mut surface, &extract("@a"), MentionColor::Blue);
        let new = surface.children(surface.root());
        assert_eq!(old.len(), 1);
        assert_eq!(new.len(), 1);
        assert_ne!(old[0], new[0]);
        assert!(surface.node_kind(old[0]).is_none());
    }
}
