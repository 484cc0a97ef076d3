//! Property-based tests for caret translation and the input cycle.

mod fixtures;

use fixtures::Harness;
use mention_editor::highlight::extract;
use mention_editor::text::{build, from_offset, to_offset};
use mention_editor::{EditableSurface, EditorOptions, MemorySurface, MentionColor};
use proptest::prelude::*;

/// Words, mentions, URLs and multi-byte text separated by spaces.
fn caption() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "hello", "@ann", "@b-9", "x.com", "http://q.io/a", "日本語", "café", "🎉", "@", ".",
        ]),
        0..12,
    )
    .prop_map(|words| words.join(" "))
}

fn small_alphabet(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', ' ', '@', '.', 'é', '日']), 0..max)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_caret_round_trip(text in caption()) {
        let mut surface = MemorySurface::new();
        build(&mut surface, &extract(&text), MentionColor::Blue);
        for offset in 0..=text.chars().count() {
            from_offset(&mut surface, offset);
            prop_assert_eq!(to_offset(&surface), offset);
        }
    }

    #[test]
    fn prop_caret_round_trip_across_rebuild(text in caption(), pick in any::<prop::sample::Index>()) {
        let len = text.chars().count();
        let offset = pick.index(len + 1);
        let mut surface = MemorySurface::new();
        build(&mut surface, &extract(&text), MentionColor::Blue);
        from_offset(&mut surface, offset);

        let captured = to_offset(&surface);
        build(&mut surface, &extract(&text), MentionColor::White);
        from_offset(&mut surface, captured);
        prop_assert_eq!(to_offset(&surface), offset);
    }

    #[test]
    fn prop_truncation_bound(max in 1usize..40, text in small_alphabet(80)) {
        let len = text.chars().count();
        prop_assume!(len > max);
        let mut harness = Harness::new("", EditorOptions::default().with_max_length(max));
        harness.type_text(&text);

        let notified = harness.last_change().expect("notified");
        prop_assert_eq!(notified.chars().count(), max);
        prop_assert!(text.starts_with(&notified));
        prop_assert_eq!(harness.editor.caret(), max);
    }

    #[test]
    fn prop_input_within_bound_is_unchanged(text in small_alphabet(40)) {
        let mut harness = Harness::new("", EditorOptions::default().with_max_length(40));
        harness.type_text(&text);
        prop_assert_eq!(harness.editor.value(), text.as_str());
        prop_assert_eq!(harness.editor.caret(), text.chars().count());
    }

    #[test]
    fn prop_empty_state_is_idempotent(text in caption()) {
        let mut harness = Harness::new(&text, EditorOptions::default());
        harness.editor.set_value("");
        harness.editor.set_value("");

        prop_assert!(harness.editor.segments().is_empty());
        let surface = harness.editor.surface();
        prop_assert!(surface.children(surface.root()).is_empty());
        prop_assert!(harness.editor.placeholder_visible());
    }
}
