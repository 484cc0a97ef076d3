//! Visual tree building and cursor translation.
//!
//! Key pieces:
//!
//! - [`build`]: Tear down and rebuild a surface from segments
//! - [`to_offset`] / [`from_offset`]: Native selection to plain-text offset
//!   and back, with graceful fallback when the host refuses a selection
//!
//! The two are always used together: capture the offset, rebuild, restore.
//!
//! ```
//! use mention_editor::surface::MemorySurface;
//! use mention_editor::text::{build, from_offset, to_offset};
//! use mention_editor::highlight::extract;
//! use mention_editor::MentionColor;
//!
//! let mut surface = MemorySurface::new();
//! build(&mut surface, &extract("see @ann"), MentionColor::Blue);
//! from_offset(&mut surface, 6);
//!
//! let caret = to_offset(&surface);
//! build(&mut surface, &extract("see @ann"), MentionColor::Blue);
//! from_offset(&mut surface, caret);
//! assert_eq!(to_offset(&surface), 6);
//! ```

mod builder;
pub mod translate;

pub use builder::build;
pub use translate::{
    CaretPlacement, from_offset, from_range, offset_of_point, point_at, text_len, text_nodes,
    to_offset, to_range,
};
