//! Unicode utilities for scalar-value offsets and display width.

mod chars;
mod width;

pub use chars::{char_before, char_len, char_slice, char_to_byte, is_blank, truncate_chars};
pub use width::{WidthMethod, display_width, wrapped_line_count};
