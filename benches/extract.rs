//! Segmentation and rebuild-cycle benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use mention_editor::highlight::extract;
use mention_editor::text::{build, from_offset, to_offset};
use mention_editor::{EditorEvent, EditorOptions, MemorySurface, MentionColor, MentionEditor};
use std::hint::black_box;

const SAMPLE_CAPTIONS: [&str; 4] = [
    "Hello @john check http://x.com",
    "sunset at the pier with @ann and @b_o-b, photos on maps.example.com/p/42",
    "no highlights in this one at all, just a plain sentence",
    "日本 @yuki は example.jp にいます 🎉",
];

fn build_caption(words: usize) -> String {
    let pattern = ["walk", "@ann", "by", "the", "x.com/trail", "river"];
    pattern.iter().cycle().take(words).copied().collect::<Vec<_>>().join(" ")
}

fn bench_extract_caption(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_caption");
    for (idx, caption) in SAMPLE_CAPTIONS.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("caption", idx), caption, |b, input| {
            b.iter(|| extract(black_box(input)));
        });
    }
    group.finish();
}

fn bench_extract_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_length");
    for words in [10usize, 100, 1_000] {
        let text = build_caption(words);
        group.bench_with_input(BenchmarkId::from_parameter(words), &text, |b, input| {
            b.iter(|| extract(black_box(input)));
        });
    }
    group.finish();
}

fn bench_rebuild_round_trip(c: &mut Criterion) {
    let text = build_caption(100);
    let segments = extract(&text);
    let mid = text.chars().count() / 2;
    let mut surface = MemorySurface::new();
    build(&mut surface, &segments, MentionColor::Blue);
    from_offset(&mut surface, mid);

    c.bench_function("rebuild_round_trip", |b| {
        b.iter(|| {
            let caret = to_offset(&surface);
            build(&mut surface, &segments, MentionColor::Blue);
            from_offset(&mut surface, black_box(caret));
        });
    });
}

fn bench_input_cycle(c: &mut Criterion) {
    let text = build_caption(80);
    c.bench_function("input_cycle_keystroke", |b| {
        b.iter_batched(
            || MentionEditor::new(MemorySurface::new(), &text, EditorOptions::default()),
            |mut editor| {
                editor.surface_mut().insert_text("a");
                editor.handle_event(EditorEvent::Input);
                editor.on_animation_frame();
                editor
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_extract_caption,
    bench_extract_length,
    bench_rebuild_round_trip,
    bench_input_cycle
);
criterion_main!(benches);
