//! Placeholder overlay description.

use crate::surface::SurfaceStyle;

/// An overlay drawn on top of (never inside) a blank surface.
///
/// Metrics are copied from the surface so the placeholder text sits exactly
/// where typed text would, and `pass_through` tells the host to route pointer
/// input to the surface underneath.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceholderOverlay {
    pub text: String,
    pub padding: f32,
    pub font_size: f32,
    pub line_height: f32,
    pub pass_through: bool,
}

impl PlaceholderOverlay {
    #[must_use]
    pub fn new(text: &str, style: &SurfaceStyle) -> Self {
        Self {
            text: text.to_string(),
            padding: style.padding,
            font_size: style.font_size,
            line_height: style.line_height,
            pass_through: true,
        }
    }
}
