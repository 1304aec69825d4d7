// File: crates/linechart-core/src/text.rs
// Summary: Explicit text styles and Skia-backed text measurement.

use skia_safe as skia;
use tracing::warn;

/// A complete text style for one measurement or draw call.
///
/// Every call that touches text takes one of these explicitly; nothing about
/// the previously used font survives between calls.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub family: String,
    pub size: f32,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(family: impl Into<String>, size: f32, bold: bool) -> Self {
        Self { family: family.into(), size, bold }
    }

    /// Regular 11pt, used for tick labels.
    pub fn tick_default() -> Self {
        Self::new("Sans", 11.0, false)
    }

    /// Bold 11pt, used for axis names.
    pub fn axis_label_default() -> Self {
        Self::new("Sans", 11.0, true)
    }

    /// Bold 13pt, used for the chart title.
    pub fn title_default() -> Self {
        Self::new("Sans", 13.0, true)
    }
}

/// Resolves styles to concrete fonts and measures text extents.
///
/// Holds only the font manager; it has no notion of a "current" font.
pub struct TextMeasurer {
    font_mgr: skia::FontMgr,
}

impl TextMeasurer {
    pub fn new() -> Self {
        Self { font_mgr: skia::FontMgr::default() }
    }

    /// Resolve `style` to a Skia font, falling back to the default typeface
    /// when the family is unavailable. The fallback is logged, not fatal;
    /// measurements against a substitute face may be slightly off.
    pub fn resolve(&self, style: &TextStyle) -> skia::Font {
        let font_style = if style.bold {
            skia::FontStyle::bold()
        } else {
            skia::FontStyle::normal()
        };
        match self.font_mgr.match_family_style(&style.family, font_style) {
            Some(typeface) => skia::Font::from_typeface(typeface, style.size),
            None => {
                warn!(family = %style.family, "font family unavailable, using default typeface");
                let mut font = skia::Font::default();
                font.set_size(style.size);
                font
            }
        }
    }

    /// Width and height of the rendered bounding box of `text` in `style`.
    pub fn measure(&self, style: &TextStyle, text: &str) -> (f64, f64) {
        let font = self.resolve(style);
        let (_advance, bounds) = font.measure_str(text, None);
        (bounds.width() as f64, bounds.height() as f64)
    }
}

impl Default for TextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}
