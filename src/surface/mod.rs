//! The host-provided editable surface.
//!
//! A host toolkit stores editable content as a tree of visual nodes and
//! reports the caret as a `(node, in-node offset)` pair. [`EditableSurface`]
//! is the minimal contract the editor needs from such a toolkit:
//!
//! - Tree inspection: root, node kinds, children, text of text nodes
//! - Tree mutation: clear the root, append plain or styled inline nodes
//! - Native selection query/set in node terms
//! - Focus, layout height and a mutable style block
//!
//! [`MemorySurface`] is a complete in-memory implementation, used by headless
//! hosts and by the test suites.
//!
//! Offsets inside text nodes count scalar values. Offsets on element nodes are
//! child indices, so `(element, k)` is the boundary before child `k`.

mod memory;

pub use memory::MemorySurface;

use crate::error::Result;
use crate::style::SpanClass;

slotmap::new_key_type! {
    /// Reference to a node of a surface tree.
    pub struct NodeId;
}

/// Node classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Container node (the root or a styled inline span).
    Element,
    /// Leaf node holding text.
    Text,
}

/// A position inside the surface tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodePoint {
    pub node: NodeId,
    pub offset: usize,
}

impl NodePoint {
    #[must_use]
    pub const fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// The host's own selection: an anchor where it started and a focus where it
/// ends. Both are equal for a plain caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NativeSelection {
    pub anchor: NodePoint,
    pub focus: NodePoint,
}

impl NativeSelection {
    /// A caret at `point`.
    #[must_use]
    pub const fn collapsed(point: NodePoint) -> Self {
        Self {
            anchor: point,
            focus: point,
        }
    }

    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }
}

/// Visual parameters of the surface.
///
/// The editor only reads these to mirror metrics onto the placeholder overlay
/// and to auto-size; hosts may interpret them however they like.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceStyle {
    /// Uniform inner padding.
    pub padding: f32,
    pub font_size: f32,
    pub line_height: f32,
    /// Explicit height; `None` lets content decide.
    pub height: Option<f32>,
    /// Opaque host properties (`name`, `value`).
    pub extra: Vec<(String, String)>,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            padding: 12.0,
            font_size: 16.0,
            line_height: 22.0,
            height: None,
            extra: Vec::new(),
        }
    }
}

/// Editable surface primitive supplied by the host toolkit.
pub trait EditableSurface {
    /// The container whose children hold the content.
    fn root(&self) -> NodeId;

    /// Kind of `node`, or `None` if it is not (or no longer) in the tree.
    fn node_kind(&self, node: NodeId) -> Option<NodeKind>;

    /// Children of an element in document order. Empty for text nodes.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Text of a text node.
    fn text(&self, node: NodeId) -> Option<&str>;

    /// Remove every child of the root.
    fn clear(&mut self);

    /// Append a plain text node to the root.
    fn append_text(&mut self, text: &str) -> NodeId;

    /// Append a styled inline node holding `text` to the root.
    fn append_span(&mut self, text: &str, class: SpanClass) -> NodeId;

    /// The active selection, if any.
    fn selection(&self) -> Option<NativeSelection>;

    /// Replace the active selection.
    fn set_selection(&mut self, selection: NativeSelection) -> Result<()>;

    fn focus(&mut self);

    fn blur(&mut self);

    fn is_focused(&self) -> bool;

    /// Full content height, independent of any explicit height.
    fn scroll_height(&self) -> f32;

    fn style(&self) -> &SurfaceStyle;

    fn style_mut(&mut self) -> &mut SurfaceStyle;

    /// Concatenated text of all text nodes in document order.
    fn text_content(&self) -> String {
        let mut out = String::new();
        walk_text(self, |_, text| out.push_str(text));
        out
    }
}

/// Visit every text node under the root in document order.
pub fn walk_text<S, F>(surface: &S, visit: F)
where
    S: EditableSurface + ?Sized,
    F: FnMut(NodeId, &str),
{
    walk_text_from(surface, surface.root(), visit);
}

/// Visit every text node under `start` (inclusive) in document order.
pub fn walk_text_from<S, F>(surface: &S, start: NodeId, mut visit: F)
where
    S: EditableSurface + ?Sized,
    F: FnMut(NodeId, &str),
{
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        match surface.node_kind(node) {
            Some(NodeKind::Text) => {
                if let Some(text) = surface.text(node) {
                    visit(node, text);
                }
            }
            Some(NodeKind::Element) => {
                stack.extend(surface.children(node).into_iter().rev());
            }
            None => {}
        }
    }
}
