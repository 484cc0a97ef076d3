//! Editor event types.

/// An event delivered by the host to the editor.
///
/// Native editing has already happened when these arrive: the surface's text
/// nodes hold whatever the user typed, pasted or composed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    /// Content changed (typing, deletion, paste, drop).
    Input,
    /// An input-method composition session opened.
    CompositionStart,
    /// The composition's preedit text changed.
    CompositionUpdate(String),
    /// The composition session closed and its text is final.
    CompositionEnd,
    /// The surface gained focus.
    Focus,
    /// The surface lost focus.
    Blur,
}
