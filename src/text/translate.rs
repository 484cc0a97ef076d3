//! Native selection to plain-text offset and back.
//!
//! Both directions walk the surface's text nodes in document order with a
//! running start offset, so for an unchanged plain text the round trip
//! `to_offset(from_offset(o)) == o` holds for every `o` in `[0, len]`, even
//! when the tree was torn down and rebuilt in between.
//!
//! # Examples
//!
//! ```
//! use mention_editor::surface::{EditableSurface, MemorySurface};
//! use mention_editor::text::{build, from_offset, to_offset};
//! use mention_editor::highlight::extract;
//! use mention_editor::MentionColor;
//!
//! let mut surface = MemorySurface::new();
//! build(&mut surface, &extract("hi @ann!"), MentionColor::Blue);
//! from_offset(&mut surface, 5);
//! assert_eq!(to_offset(&surface), 5);
//! ```

use crate::surface::{EditableSurface, NativeSelection, NodeId, NodeKind, NodePoint};
use crate::unicode::char_len;

/// How a requested offset ended up being applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaretPlacement {
    /// Precise placement inside text nodes.
    Exact(NativeSelection),
    /// The surface has no text; the caret sits at the root's empty position.
    Root,
    /// Placement failed; the surface was focused without moving the caret.
    FocusOnly,
}

impl CaretPlacement {
    #[must_use]
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

/// Text nodes in document order with their lengths in scalar values.
#[must_use]
pub fn text_nodes<S: EditableSurface + ?Sized>(surface: &S) -> Vec<(NodeId, usize)> {
    let mut nodes = Vec::new();
    crate::surface::walk_text(surface, |node, text| nodes.push((node, char_len(text))));
    nodes
}

/// Total plain-text length of the surface in scalar values.
#[must_use]
pub fn text_len<S: EditableSurface + ?Sized>(surface: &S) -> usize {
    text_nodes(surface).iter().map(|&(_, len)| len).sum()
}

/// Plain-text offset of the current selection's anchor.
///
/// With no active selection, or one whose anchor is no longer in the tree,
/// the caret is treated as sitting at the end.
#[must_use]
pub fn to_offset<S: EditableSurface + ?Sized>(surface: &S) -> usize {
    let Some(selection) = surface.selection() else {
        return text_len(surface);
    };
    offset_of_point(surface, selection.anchor).unwrap_or_else(|| {
        tracing::debug!("selection anchor not in tree, treating caret as at end");
        text_len(surface)
    })
}

/// Plain-text offsets of the current selection as `(start, end)`, ordered.
#[must_use]
pub fn to_range<S: EditableSurface + ?Sized>(surface: &S) -> Option<(usize, usize)> {
    let selection = surface.selection()?;
    let anchor = offset_of_point(surface, selection.anchor)?;
    let focus = offset_of_point(surface, selection.focus)?;
    Some((anchor.min(focus), anchor.max(focus)))
}

/// Plain-text offset of a point, or `None` if its node is not in the tree.
///
/// Text points add their in-node offset to the length of all earlier text.
/// Element points `(element, k)` resolve to the boundary before child `k`.
#[must_use]
pub fn offset_of_point<S: EditableSurface + ?Sized>(surface: &S, point: NodePoint) -> Option<usize> {
    let mut acc = 0;
    seek(surface, surface.root(), point, &mut acc).then_some(acc)
}

fn seek<S: EditableSurface + ?Sized>(
    surface: &S,
    node: NodeId,
    point: NodePoint,
    acc: &mut usize,
) -> bool {
    match surface.node_kind(node) {
        Some(NodeKind::Text) => {
            let len = surface.text(node).map_or(0, char_len);
            if node == point.node {
                *acc += point.offset.min(len);
                return true;
            }
            *acc += len;
            false
        }
        Some(NodeKind::Element) => {
            for (idx, child) in surface.children(node).into_iter().enumerate() {
                if node == point.node && idx == point.offset {
                    return true;
                }
                if seek(surface, child, point, acc) {
                    return true;
                }
            }
            node == point.node
        }
        None => false,
    }
}

/// The text point an offset maps to: the first node whose end reaches it,
/// so boundaries land at the end of the earlier node. Offsets past the end
/// clamp to the end of the last node. `None` when there is no text node.
#[must_use]
pub fn point_at<S: EditableSurface + ?Sized>(surface: &S, offset: usize) -> Option<NodePoint> {
    locate(&text_nodes(surface), offset)
}

fn locate(nodes: &[(NodeId, usize)], offset: usize) -> Option<NodePoint> {
    let mut start = 0;
    for &(node, len) in nodes {
        if start + len >= offset {
            return Some(NodePoint::new(node, offset - start));
        }
        start += len;
    }
    nodes.last().map(|&(node, len)| NodePoint::new(node, len))
}

/// Place a caret at plain-text `offset`.
pub fn from_offset<S: EditableSurface + ?Sized>(surface: &mut S, offset: usize) -> CaretPlacement {
    from_range(surface, offset, offset)
}

/// Select the plain-text range `start..end` (anchor at `start`).
///
/// Never fails: an empty surface gets a caret at its root, and a host that
/// refuses the selection gets focus without a precise caret.
pub fn from_range<S: EditableSurface + ?Sized>(
    surface: &mut S,
    start: usize,
    end: usize,
) -> CaretPlacement {
    let nodes = text_nodes(surface);
    let (Some(anchor), Some(focus)) = (locate(&nodes, start), locate(&nodes, end)) else {
        return place_at_root(surface);
    };
    let selection = NativeSelection { anchor, focus };
    match surface.set_selection(selection) {
        Ok(()) => CaretPlacement::Exact(selection),
        Err(err) => {
            tracing::debug!(%err, start, end, "selection refused, focusing without caret");
            focus_only(surface)
        }
    }
}

fn place_at_root<S: EditableSurface + ?Sized>(surface: &mut S) -> CaretPlacement {
    let root = NodePoint::new(surface.root(), 0);
    match surface.set_selection(NativeSelection::collapsed(root)) {
        Ok(()) => CaretPlacement::Root,
        Err(err) => {
            tracing::debug!(%err, "root caret refused, focusing without caret");
            focus_only(surface)
        }
    }
}

fn focus_only<S: EditableSurface + ?Sized>(surface: &mut S) -> CaretPlacement {
    surface.focus();
    CaretPlacement::FocusOnly
}
