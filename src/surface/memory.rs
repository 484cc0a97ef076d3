//! In-memory retained node tree.
//!
//! [`MemorySurface`] behaves like a browser-style editable element: nodes live
//! in an arena keyed by generational ids, so removing a subtree leaves any
//! outstanding [`NodeId`] detached rather than dangling. It also performs the
//! host's own "native" editing (typing and deleting at the selection), which is
//! what the editor reacts to.

use slotmap::SlotMap;

use super::{EditableSurface, NativeSelection, NodeId, NodeKind, NodePoint, SurfaceStyle};
use crate::error::{Error, Result};
use crate::style::SpanClass;
use crate::text::translate::{offset_of_point, text_nodes};
use crate::unicode::{WidthMethod, char_len, char_to_byte, wrapped_line_count};

/// Default wrap width in columns.
const DEFAULT_COLUMNS: usize = 40;

#[derive(Clone, Debug)]
enum NodeData {
    Element {
        class: Option<SpanClass>,
        children: Vec<NodeId>,
    },
    Text(String),
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    data: NodeData,
}

/// Headless editable surface.
#[derive(Clone, Debug)]
pub struct MemorySurface {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    selection: Option<NativeSelection>,
    focused: bool,
    style: SurfaceStyle,
    columns: usize,
    width_method: WidthMethod,
    reject_selection: bool,
    rebuilds: u64,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node {
            parent: None,
            data: NodeData::Element {
                class: None,
                children: Vec::new(),
            },
        });
        Self {
            nodes,
            root,
            selection: None,
            focused: false,
            style: SurfaceStyle::default(),
            columns: DEFAULT_COLUMNS,
            width_method: WidthMethod::default(),
            reject_selection: false,
            rebuilds: 0,
        }
    }

    /// Set the wrap width used for layout measurement.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the width method used for layout measurement.
    pub fn set_width_method(&mut self, method: WidthMethod) {
        self.width_method = method;
    }

    /// Make every selection change fail, like an engine that refuses to
    /// select inside a node it is still laying out.
    pub fn set_rejecting_selection(&mut self, reject: bool) {
        self.reject_selection = reject;
    }

    /// Number of times the root was cleared.
    #[must_use]
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// The root's children as `(span class, text)` pairs.
    #[must_use]
    pub fn runs(&self) -> Vec<(Option<SpanClass>, String)> {
        self.children(self.root)
            .into_iter()
            .filter_map(|child| match &self.nodes.get(child)?.data {
                NodeData::Text(text) => Some((None, text.clone())),
                NodeData::Element { class, .. } => {
                    let mut text = String::new();
                    super::walk_text_from(self, child, |_, t| text.push_str(t));
                    Some((*class, text))
                }
            })
            .collect()
    }

    /// Type `text` at the selection, replacing any selected range.
    ///
    /// Insertion goes into the text node holding the caret (styled or not),
    /// exactly as a native editable would; without a selection it goes at
    /// the end.
    pub fn insert_text(&mut self, text: &str) {
        let (start, end) = self.selected_offsets();
        self.delete_offsets(start, end);
        if text.is_empty() {
            self.collapse_at(start);
            return;
        }

        let target = crate::text::translate::point_at(self, start);
        let point = match target {
            Some(point) => {
                if let Some(Node {
                    data: NodeData::Text(existing),
                    ..
                }) = self.nodes.get_mut(point.node)
                {
                    let at = char_to_byte(existing, point.offset);
                    existing.insert_str(at, text);
                }
                NodePoint::new(point.node, point.offset + char_len(text))
            }
            None => {
                let node = self.append_text(text);
                NodePoint::new(node, char_len(text))
            }
        };
        self.selection = Some(NativeSelection::collapsed(point));
    }

    /// Delete the selected range, or the character before a caret.
    pub fn delete_backward(&mut self) {
        let (start, end) = self.selected_offsets();
        let start = if start == end {
            start.saturating_sub(1)
        } else {
            start
        };
        self.delete_offsets(start, end);
        self.collapse_at(start);
    }

    fn selected_offsets(&self) -> (usize, usize) {
        let len = crate::text::translate::text_len(self);
        let Some(selection) = self.selection else {
            return (len, len);
        };
        let anchor = offset_of_point(self, selection.anchor).unwrap_or(len);
        let focus = offset_of_point(self, selection.focus).unwrap_or(len);
        (anchor.min(focus), anchor.max(focus))
    }

    fn delete_offsets(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let mut node_start = 0;
        for (node, len) in text_nodes(self) {
            let node_end = node_start + len;
            let from = start.max(node_start);
            let to = end.min(node_end);
            if from < to {
                if let Some(Node {
                    data: NodeData::Text(text),
                    ..
                }) = self.nodes.get_mut(node)
                {
                    let a = char_to_byte(text, from - node_start);
                    let b = char_to_byte(text, to - node_start);
                    text.replace_range(a..b, "");
                }
            }
            node_start = node_end;
        }
    }

    fn collapse_at(&mut self, offset: usize) {
        let point = crate::text::translate::point_at(self, offset)
            .unwrap_or_else(|| NodePoint::new(self.root, 0));
        self.selection = Some(NativeSelection::collapsed(point));
    }

    fn remove_subtree(&mut self, node: NodeId) {
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(removed) = self.nodes.remove(id) {
                if let NodeData::Element { children, .. } = removed.data {
                    stack.extend(children);
                }
            }
        }
    }

    fn push_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = self.nodes.insert(Node {
            parent: Some(parent),
            data,
        });
        if let Some(Node {
            data: NodeData::Element { children, .. },
            ..
        }) = self.nodes.get_mut(parent)
        {
            children.push(id);
        }
        id
    }

    fn check_point(&self, point: NodePoint) -> Result<()> {
        let node = self.nodes.get(point.node).ok_or(Error::DetachedNode)?;
        let len = match &node.data {
            NodeData::Text(text) => char_len(text),
            NodeData::Element { children, .. } => children.len(),
        };
        if point.offset > len {
            return Err(Error::InvalidOffset {
                offset: point.offset,
                len,
            });
        }
        Ok(())
    }
}

impl EditableSurface for MemorySurface {
    fn root(&self) -> NodeId {
        self.root
    }

    fn node_kind(&self, node: NodeId) -> Option<NodeKind> {
        self.nodes.get(node).map(|n| match n.data {
            NodeData::Element { .. } => NodeKind::Element,
            NodeData::Text(_) => NodeKind::Text,
        })
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        match self.nodes.get(node).map(|n| &n.data) {
            Some(NodeData::Element { children, .. }) => children.clone(),
            _ => Vec::new(),
        }
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        match &self.nodes.get(node)?.data {
            NodeData::Text(text) => Some(text),
            NodeData::Element { .. } => None,
        }
    }

    fn clear(&mut self) {
        let children = match self.nodes.get_mut(self.root).map(|n| &mut n.data) {
            Some(NodeData::Element { children, .. }) => std::mem::take(children),
            _ => Vec::new(),
        };
        for child in children {
            self.remove_subtree(child);
        }
        // Like a browser, a selection inside removed nodes collapses onto
        // the parent at the removal point.
        if self.selection.is_some() {
            self.selection = Some(NativeSelection::collapsed(NodePoint::new(self.root, 0)));
        }
        self.rebuilds += 1;
    }

    fn append_text(&mut self, text: &str) -> NodeId {
        self.push_child(self.root, NodeData::Text(text.to_string()))
    }

    fn append_span(&mut self, text: &str, class: SpanClass) -> NodeId {
        let span = self.push_child(
            self.root,
            NodeData::Element {
                class: Some(class),
                children: Vec::new(),
            },
        );
        self.push_child(span, NodeData::Text(text.to_string()));
        span
    }

    fn selection(&self) -> Option<NativeSelection> {
        self.selection
    }

    fn set_selection(&mut self, selection: NativeSelection) -> Result<()> {
        if self.reject_selection {
            return Err(Error::SelectionRejected("surface is not accepting selection".into()));
        }
        self.check_point(selection.anchor)?;
        self.check_point(selection.focus)?;
        self.selection = Some(selection);
        Ok(())
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn scroll_height(&self) -> f32 {
        let lines = wrapped_line_count(&self.text_content(), self.columns, self.width_method);
        self.style.padding.mul_add(2.0, lines as f32 * self.style.line_height)
    }

    fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut SurfaceStyle {
        &mut self.style
    }
}

impl MemorySurface {
    /// Parent of `node`, if attached and not the root.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node)?.parent
    }
}
