//! Display width and soft wrapping for layout measurement.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Display width of a string in columns.
#[must_use]
pub fn display_width(s: &str, method: WidthMethod) -> usize {
    match method {
        WidthMethod::WcWidth => UnicodeWidthStr::width(s),
        WidthMethod::Unicode => UnicodeWidthStr::width_cjk(s),
    }
}

/// Number of visual lines `text` occupies when soft-wrapped at `columns`.
///
/// Hard line breaks always start a new line. Wrapping happens between grapheme
/// clusters so a cluster is never split. Empty text still occupies one line,
/// as does a `columns` of zero (no wrapping).
#[must_use]
pub fn wrapped_line_count(text: &str, columns: usize, method: WidthMethod) -> usize {
    text.split('\n')
        .map(|line| wrap_line(line.trim_end_matches('\r'), columns, method))
        .sum()
}

fn wrap_line(line: &str, columns: usize, method: WidthMethod) -> usize {
    if columns == 0 {
        return 1;
    }
    let mut lines = 1;
    let mut col = 0;
    for grapheme in line.graphemes(true) {
        let width = display_width(grapheme, method);
        if col + width > columns && col > 0 {
            lines += 1;
            col = 0;
        }
        col += width;
    }
    lines
}
