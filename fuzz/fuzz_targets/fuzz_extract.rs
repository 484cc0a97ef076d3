//! Fuzz target for segment extraction.
//!
//! Segments must always reconstruct the input exactly.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mention_editor::highlight::{extract, reconstruct};

fuzz_target!(|data: &str| {
    let segments = extract(data);
    assert_eq!(reconstruct(&segments), data);

    let mut expected = 0;
    for segment in &segments {
        assert_eq!(segment.start, expected);
        assert!(segment.end > segment.start);
        expected = segment.end;
    }
});
