//! The controlled mention editor.
//!
//! [`MentionEditor`] keeps three things consistent: the plain-text value the
//! owner holds, the styled visual tree on the surface, and the user's caret.
//!
//! Every cycle runs the same pipeline:
//!
//! 1. Read the plain text back from the surface
//! 2. Capture the caret as a plain-text offset
//! 3. Enforce `max_length` (truncate silently)
//! 4. Extract segments and rebuild the tree wholesale
//! 5. Notify the owner
//! 6. Restore the caret on the next animation frame
//!
//! Step 6 is deferred because selection APIs are only reliable once the host
//! has committed the node mutations; the host calls
//! [`on_animation_frame`](MentionEditor::on_animation_frame) whenever
//! [`needs_frame`](MentionEditor::needs_frame) is true.
//!
//! While an input-method composition is open the pipeline does not run at
//! all; the host edits natively until the composition ends.
//!
//! # Examples
//!
//! ```
//! use mention_editor::{EditorEvent, EditorOptions, MentionEditor};
//! use mention_editor::surface::MemorySurface;
//!
//! let mut editor = MentionEditor::new(MemorySurface::new(), "", EditorOptions::default());
//! editor.surface_mut().insert_text("hi @ann");
//! editor.handle_event(EditorEvent::Input);
//! editor.on_animation_frame();
//!
//! assert_eq!(editor.value(), "hi @ann");
//! assert_eq!(editor.mentions(), vec!["ann"]);
//! assert_eq!(editor.caret(), 7);
//! ```

mod options;
mod placeholder;

pub use options::{DEFAULT_MAX_LENGTH, EditorOptions};
pub use placeholder::PlaceholderOverlay;

use std::fmt;

use crate::highlight::{Segment, SegmentExtractor};
use crate::input::EditorEvent;
use crate::style::MentionColor;
use crate::surface::{EditableSurface, SurfaceStyle};
use crate::text::{CaretPlacement, build, from_range, to_offset, to_range};
use crate::unicode::{char_len, char_slice, is_blank, truncate_chars};

type ChangeCallback = Box<dyn FnMut(&str)>;
type FocusCallback = Box<dyn FnMut()>;

/// Controller state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Idle,
    /// An IME composition session is open.
    Composing,
    /// Inside one input cycle, while an over-long value is being cut.
    Truncating,
}

/// A caret restoration waiting for the next frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingCaret {
    start: usize,
    end: usize,
}

/// Controlled rich-text editor over a host surface.
pub struct MentionEditor<S: EditableSurface> {
    surface: S,
    extractor: SegmentExtractor,
    options: EditorOptions,
    value: String,
    segments: Vec<Segment>,
    state: EditorState,
    pending: Option<PendingCaret>,
    on_change: Option<ChangeCallback>,
    on_focus: Option<FocusCallback>,
    on_blur: Option<FocusCallback>,
}

impl<S: EditableSurface> MentionEditor<S> {
    /// Mount the editor on `surface` showing `value`.
    pub fn new(surface: S, value: &str, options: EditorOptions) -> Self {
        Self::with_extractor(surface, value, options, SegmentExtractor::default())
    }

    /// Mount with a custom extractor (for a host-specific URL rule).
    pub fn with_extractor(
        surface: S,
        value: &str,
        options: EditorOptions,
        extractor: SegmentExtractor,
    ) -> Self {
        let mut editor = Self {
            surface,
            extractor,
            options,
            value: value.to_string(),
            segments: Vec::new(),
            state: EditorState::Idle,
            pending: None,
            on_change: None,
            on_focus: None,
            on_blur: None,
        };
        editor.render(value);
        if editor.options.auto_focus {
            editor.surface.focus();
            editor.schedule_caret(char_len(value));
        }
        tracing::debug!(
            len = char_len(value),
            auto_focus = editor.options.auto_focus,
            "editor mounted"
        );
        editor
    }

    /// Register the owner's change callback.
    pub fn set_on_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn set_on_focus(&mut self, callback: impl FnMut() + 'static) {
        self.on_focus = Some(Box::new(callback));
    }

    pub fn set_on_blur(&mut self, callback: impl FnMut() + 'static) {
        self.on_blur = Some(Box::new(callback));
    }

    /// Dispatch a host event.
    pub fn handle_event(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::CompositionStart => {
                tracing::trace!("composition started");
                self.state = EditorState::Composing;
            }
            EditorEvent::CompositionUpdate(preedit) => {
                tracing::trace!(preedit = %preedit, "composition updated");
            }
            EditorEvent::CompositionEnd => {
                if self.state != EditorState::Composing {
                    tracing::debug!("composition end without start, handling as input");
                }
                self.state = EditorState::Idle;
                self.input_cycle();
            }
            EditorEvent::Input => {
                if self.state == EditorState::Composing {
                    tracing::trace!("input during composition left to the host");
                } else {
                    self.input_cycle();
                }
            }
            EditorEvent::Focus => {
                if let Some(callback) = self.on_focus.as_mut() {
                    callback();
                }
            }
            EditorEvent::Blur => {
                if let Some(callback) = self.on_blur.as_mut() {
                    callback();
                }
            }
        }
    }

    fn input_cycle(&mut self) {
        let text = self.surface.text_content();
        let caret = to_offset(&self.surface);
        let len = char_len(&text);
        let max = self.options.max_length;

        if len > max {
            self.state = EditorState::Truncating;
            let truncated = truncate_chars(&text, max).to_string();
            tracing::debug!(len, max, caret, "value over max length, truncating");
            self.render(&truncated);
            self.commit(truncated);
            self.schedule_caret(caret.min(max));
            self.state = EditorState::Idle;
        } else {
            tracing::debug!(len, caret, "input cycle");
            self.render(&text);
            self.commit(text);
            self.schedule_caret(caret);
        }
    }

    /// Apply a value supplied by the owner.
    ///
    /// A value equal to what the surface already shows (typically the echo
    /// of this editor's own notification) is a no-op. Otherwise the tree is
    /// rebuilt and the caret offset (the text length when nothing is
    /// selected) is restored on the next frame if it still fits in the new
    /// text. A programmatic replacement also ends any open composition.
    pub fn set_value(&mut self, value: &str) {
        if value == self.surface.text_content() {
            self.value = value.to_string();
            return;
        }
        if self.state == EditorState::Composing {
            tracing::debug!("external value replaces an open composition");
            self.state = EditorState::Idle;
        }

        let caret = to_offset(&self.surface);
        let new_len = char_len(value);
        tracing::debug!(new_len, caret, "external value sync");
        self.render(value);
        self.value = value.to_string();
        if caret <= new_len {
            self.schedule_caret(caret);
        } else {
            self.pending = None;
        }
    }

    /// Restore the deferred caret, if any. Call once per redraw tick.
    pub fn on_animation_frame(&mut self) -> Option<CaretPlacement> {
        let pending = self.pending.take()?;
        let placement = from_range(&mut self.surface, pending.start, pending.end);
        if !placement.is_exact() {
            tracing::debug!(?placement, offset = pending.start, "caret restored imprecisely");
        }
        Some(placement)
    }

    /// Whether a caret restoration is waiting for the next frame.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Focus the surface.
    pub fn focus(&mut self) {
        self.surface.focus();
    }

    /// Blur the surface.
    pub fn blur(&mut self) {
        self.surface.blur();
    }

    /// Select `start..end` immediately, discarding any deferred restoration.
    pub fn set_selection_range(&mut self, start: usize, end: usize) -> CaretPlacement {
        self.pending = None;
        from_range(&mut self.surface, start, end)
    }

    /// Current caret as a plain-text offset.
    #[must_use]
    pub fn caret(&self) -> usize {
        to_offset(&self.surface)
    }

    /// Text covered by the current selection, empty for a caret.
    #[must_use]
    pub fn selected_text(&self) -> &str {
        to_range(&self.surface).map_or("", |(start, end)| char_slice(&self.value, start, end))
    }

    #[must_use]
    pub fn scroll_height(&self) -> f32 {
        self.surface.scroll_height()
    }

    #[must_use]
    pub fn style(&self) -> &SurfaceStyle {
        self.surface.style()
    }

    pub fn style_mut(&mut self) -> &mut SurfaceStyle {
        self.surface.style_mut()
    }

    /// Size the surface to its content within `[min, max]` and return the
    /// height chosen.
    pub fn auto_size(&mut self, min: f32, max: f32) -> f32 {
        self.surface.style_mut().height = None;
        let height = self.surface.scroll_height().max(min).min(max);
        self.surface.style_mut().height = Some(height);
        height
    }

    /// Whether the placeholder overlay should show.
    #[must_use]
    pub fn placeholder_visible(&self) -> bool {
        is_blank(&self.value)
    }

    /// The placeholder overlay to draw, when visible.
    #[must_use]
    pub fn placeholder(&self) -> Option<PlaceholderOverlay> {
        self.placeholder_visible()
            .then(|| PlaceholderOverlay::new(&self.options.placeholder, self.surface.style()))
    }

    /// Switch mention color, rebuilding in place.
    ///
    /// During a composition only the option changes; the input cycle that
    /// closes the composition applies it.
    pub fn set_mention_color(&mut self, color: MentionColor) {
        if self.options.mention_color == color {
            return;
        }
        self.options.mention_color = color;
        if self.state == EditorState::Composing {
            tracing::debug!(?color, "mention color deferred until composition ends");
            return;
        }
        let caret = to_offset(&self.surface);
        let text = self.surface.text_content();
        self.render(&text);
        self.schedule_caret(caret);
    }

    /// Change the length cap. Applies from the next input cycle.
    pub fn set_max_length(&mut self, max_length: usize) {
        self.options.max_length = max_length;
    }

    /// The value last notified to or received from the owner.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Segments of the current tree.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Mentioned names in the current value.
    #[must_use]
    pub fn mentions(&self) -> Vec<String> {
        self.extractor.mentions(&self.value)
    }

    /// URLs in the current value.
    #[must_use]
    pub fn urls(&self) -> Vec<String> {
        self.extractor.urls(&self.value)
    }

    #[must_use]
    pub fn state(&self) -> EditorState {
        self.state
    }

    #[must_use]
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access, for the host's native editing.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Unmount, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn render(&mut self, text: &str) {
        self.segments = self.extractor.extract(text);
        build(&mut self.surface, &self.segments, self.options.mention_color);
    }

    fn commit(&mut self, value: String) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&value);
        }
        self.value = value;
    }

    fn schedule_caret(&mut self, offset: usize) {
        self.pending = Some(PendingCaret {
            start: offset,
            end: offset,
        });
    }
}

impl<S: EditableSurface + fmt::Debug> fmt::Debug for MentionEditor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MentionEditor")
            .field("surface", &self.surface)
            .field("options", &self.options)
            .field("value", &self.value)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
