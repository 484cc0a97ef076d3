//! `mention_editor` - controlled rich-text editor core
//!
//! Keeps a plain-text value, a styled visual tree of mention and URL spans,
//! and the user's caret consistent across every keystroke, paste and IME
//! composition. The host supplies the node tree through
//! [`EditableSurface`]; [`MemorySurface`] is a headless implementation.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_precision_loss)] // Line counts to pixel heights
#![allow(clippy::cast_possible_truncation)] // Intentional color channel casts
#![allow(clippy::cast_sign_loss)] // Intentional color channel casts
#![allow(clippy::module_name_repetitions)] // Allow editor::EditorOptions etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod color;
pub mod editor;
pub mod error;
pub mod highlight;
pub mod input;
pub mod style;
pub mod surface;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use color::Rgba;
pub use editor::{EditorOptions, EditorState, MentionEditor, PlaceholderOverlay};
pub use error::{Error, Result};
pub use highlight::{Segment, SegmentExtractor, SegmentKind, extract};
pub use input::EditorEvent;
pub use style::{MentionColor, SpanClass, Style, TextAttributes};
pub use surface::{EditableSurface, MemorySurface, NativeSelection, NodeId, NodePoint};
pub use text::CaretPlacement;
pub use unicode::WidthMethod;
