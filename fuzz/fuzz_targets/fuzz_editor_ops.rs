//! Fuzz target for editor operation sequences.
//!
//! Arbitrary typing, deleting, caret moves, compositions and owner resets
//! must never panic. Values notified by the editor respect the length cap.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::cell::Cell;
use std::rc::Rc;

use mention_editor::{EditableSurface, EditorEvent, EditorOptions, MemorySurface, MentionEditor};

#[derive(Arbitrary, Debug)]
enum Op {
    Type(String),
    Backspace,
    Select(u8, u8),
    CompositionStart,
    CompositionEnd,
    Reset(String),
    Frame,
}

#[derive(Arbitrary, Debug)]
struct Input {
    max_length: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let max = usize::from(input.max_length).max(1);
    let options = EditorOptions::default().with_max_length(max);
    let mut editor = MentionEditor::new(MemorySurface::new(), "", options);
    let longest = Rc::new(Cell::new(0));
    let sink = Rc::clone(&longest);
    editor.set_on_change(move |value| sink.set(sink.get().max(value.chars().count())));

    for op in input.ops {
        match op {
            Op::Type(text) => {
                editor.surface_mut().insert_text(&text);
                editor.handle_event(EditorEvent::Input);
            }
            Op::Backspace => {
                editor.surface_mut().delete_backward();
                editor.handle_event(EditorEvent::Input);
            }
            Op::Select(a, b) => {
                editor.set_selection_range(usize::from(a), usize::from(b));
            }
            Op::CompositionStart => editor.handle_event(EditorEvent::CompositionStart),
            Op::CompositionEnd => editor.handle_event(EditorEvent::CompositionEnd),
            Op::Reset(value) => editor.set_value(&value),
            Op::Frame => {
                editor.on_animation_frame();
            }
        }
        assert!(editor.caret() <= editor.surface().text_content().chars().count());
    }
    assert!(longest.get() <= max);
});
