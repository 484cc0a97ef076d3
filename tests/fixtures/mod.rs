//! Test fixtures and helpers for editor tests.
//!
//! - [`Harness`] - An editor over a [`MemorySurface`] that records every
//!   change notification
//! - [`render_segments`] - Compact text rendering of segments for snapshots
//! - [`samples`] - Sample texts
//! - [`setup_test_logging`] - Route editor tracing output to the test writer

#![allow(clippy::nursery)] // Test fixtures prioritize clarity over pedantry
#![allow(clippy::pedantic)] // Test fixtures prioritize clarity over pedantry
#![allow(dead_code)] // Not every test binary uses every helper

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;
use std::sync::Once;

use mention_editor::{EditorEvent, EditorOptions, MemorySurface, MentionEditor, Segment};

pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// An editor plus the log of values it notified.
pub struct Harness {
    pub editor: MentionEditor<MemorySurface>,
    pub changes: Rc<RefCell<Vec<String>>>,
}

impl Harness {
    pub fn new(value: &str, options: EditorOptions) -> Self {
        let mut editor = MentionEditor::new(MemorySurface::new(), value, options);
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        editor.set_on_change(move |value| sink.borrow_mut().push(value.to_string()));
        Self { editor, changes }
    }

    /// Type at the caret, run the input cycle and flush the caret frame.
    pub fn type_text(&mut self, text: &str) {
        self.editor.surface_mut().insert_text(text);
        self.editor.handle_event(EditorEvent::Input);
        self.editor.on_animation_frame();
    }

    /// Backspace once, then the same cycle as typing.
    pub fn backspace(&mut self) {
        self.editor.surface_mut().delete_backward();
        self.editor.handle_event(EditorEvent::Input);
        self.editor.on_animation_frame();
    }

    /// Values notified so far.
    pub fn changes(&self) -> Vec<String> {
        self.changes.borrow().clone()
    }

    /// The most recent notified value.
    pub fn last_change(&self) -> Option<String> {
        self.changes.borrow().last().cloned()
    }
}

/// One line per segment: `Kind start..end "content"`.
pub fn render_segments(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        let _ = writeln!(
            out,
            "{:?} {}..{} {:?}",
            segment.kind, segment.start, segment.end, segment.content
        );
    }
    out
}

/// Sample texts.
pub mod samples {
    pub const GREETING: &str = "Hello @john check http://x.com";
    pub const EMAIL: &str = "email@x.com and http://y.com";
    pub const MIXED_SCRIPT: &str = "日本 @yuki は example.jp にいます";

    /// `len` characters of filler ending in a mention.
    pub fn long_caption(len: usize) -> String {
        let tail = " @end";
        let mut text: String = "abcdefghij".chars().cycle().take(len - tail.len()).collect();
        text.push_str(tail);
        text
    }
}
