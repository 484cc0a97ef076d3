//! Editor configuration.

use crate::style::MentionColor;

/// Default cap on plain-text length, in scalar values.
pub const DEFAULT_MAX_LENGTH: usize = 500;

/// Owner-supplied editor properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorOptions {
    /// Text shown while the value is blank.
    pub placeholder: String,
    /// Longest value the owner will ever be notified with.
    pub max_length: usize,
    /// Color variant for mentions and URLs.
    pub mention_color: MentionColor,
    /// Focus the surface (caret at end) on mount.
    pub auto_focus: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            max_length: DEFAULT_MAX_LENGTH,
            mention_color: MentionColor::default(),
            auto_focus: false,
        }
    }
}

impl EditorOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub fn with_mention_color(mut self, color: MentionColor) -> Self {
        self.mention_color = color;
        self
    }

    #[must_use]
    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }
}
