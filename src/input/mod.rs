//! Input events from the host surface.

mod event;

pub use event::EditorEvent;
