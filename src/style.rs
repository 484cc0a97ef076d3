//! Inline span styling for highlighted segments.
//!
//! - [`TextAttributes`]: Bitflags for bold and underline
//! - [`Style`]: Colors plus attributes for a styled inline node
//! - [`MentionColor`]: The two color variants a host can pick
//! - [`SpanClass`]: What the visual tree builder hands the surface for each
//!   mention or URL node
//!
//! # Examples
//!
//! ```
//! use mention_editor::style::{MentionColor, SpanClass, TextAttributes};
//! use mention_editor::highlight::SegmentKind;
//!
//! let class = SpanClass::new(SegmentKind::Url, MentionColor::White);
//! assert_eq!(class.class_name(), "url url--white");
//! assert!(class.style().attributes.contains(TextAttributes::UNDERLINE));
//! ```

use crate::color::Rgba;
use crate::highlight::SegmentKind;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Increased weight.
        const BOLD      = 0x01;
        /// Underlined text.
        const UNDERLINE = 0x02;
    }
}

/// Complete span style: optional foreground plus attributes.
///
/// A `None` color inherits from the surrounding surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Style {
    /// Foreground color (None = inherit).
    pub fg: Option<Rgba>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Empty style with no color or attributes.
    pub const NONE: Self = Self {
        fg: None,
        attributes: TextAttributes::empty(),
    };

    /// Create a style with only a foreground color.
    #[must_use]
    pub const fn fg(color: Rgba) -> Self {
        Self {
            fg: Some(color),
            attributes: TextAttributes::empty(),
        }
    }

    /// Return a new style with the bold attribute added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::BOLD),
            ..self
        }
    }

    /// Return a new style with the underline attribute added.
    #[must_use]
    pub const fn with_underline(self) -> Self {
        Self {
            attributes: self.attributes.union(TextAttributes::UNDERLINE),
            ..self
        }
    }

    /// Check if this style has any non-default properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.attributes.is_empty()
    }
}

/// Color variant for highlighted mentions and URLs.
///
/// Purely a rendering parameter; segmentation never depends on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MentionColor {
    /// Accent blue, for light backgrounds.
    #[default]
    Blue,
    /// White, for dark or photo backgrounds.
    White,
}

impl MentionColor {
    /// Foreground color of highlighted spans.
    #[must_use]
    pub fn foreground(self) -> Rgba {
        match self {
            Self::Blue => Rgba::from_rgb_u8(0x1D, 0x9B, 0xF0),
            Self::White => Rgba::WHITE,
        }
    }

    /// Class-name suffix used by hosts that style with class lists.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::White => "white",
        }
    }
}

/// Styling handed to the surface for one highlighted inline node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpanClass {
    pub kind: SegmentKind,
    pub color: MentionColor,
}

impl SpanClass {
    #[must_use]
    pub const fn new(kind: SegmentKind, color: MentionColor) -> Self {
        Self { kind, color }
    }

    /// Class list for hosts that style by class name.
    #[must_use]
    pub fn class_name(self) -> String {
        let base = match self.kind {
            SegmentKind::Text => "text",
            SegmentKind::Mention => "mention",
            SegmentKind::Url => "url",
        };
        format!("{base} {base}--{}", self.color.suffix())
    }

    /// Resolved style for hosts that style directly.
    ///
    /// Mentions are bold; URLs are underlined.
    #[must_use]
    pub fn style(self) -> Style {
        let style = Style::fg(self.color.foreground());
        match self.kind {
            SegmentKind::Text => Style::NONE,
            SegmentKind::Mention => style.with_bold(),
            SegmentKind::Url => style.with_underline(),
        }
    }
}
