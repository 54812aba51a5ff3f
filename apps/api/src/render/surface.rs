//! The VisualSurface — the fully laid-out visual representation of a document
//! prior to pagination.
//!
//! A surface is produced at a fixed virtual page width corresponding to A4
//! portrait at 96 dpi. It is pagination-agnostic: height grows with content
//! (never below one page) and splitting into discrete pages is the export
//! pipeline's job. All coordinates are virtual px, absolute on the surface.

use serde::Serialize;

use crate::models::resume::TemplateId;
use crate::render::metrics::{get_metrics, FontClass};

/// A4 portrait at 96 dpi: 210mm × 297mm.
pub const PAGE_WIDTH_PX: f32 = 794.0;
pub const PAGE_MIN_HEIGHT_PX: f32 = 1123.0;

/// Default inner padding (32px gutters on every region edge).
pub const DEFAULT_PADDING_PX: f32 = 32.0;

// ────────────────────────────────────────────────────────────────────────────
// Surface data
// ────────────────────────────────────────────────────────────────────────────

/// Background tone of a region (and ink tone of chips). The concrete palette
/// is template styling and out of scope; the surface only records tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shade {
    White,
    Light,
    Accent,
    Dark,
}

/// Text roles a line can play; each maps to a fixed size and line height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    Name,
    Heading,
    Title,
    Subtitle,
    Meta,
    Body,
    Chip,
}

impl TextStyle {
    pub fn font_size(self) -> f32 {
        match self {
            TextStyle::Name => 28.0,
            TextStyle::Heading => 14.0,
            TextStyle::Title => 12.0,
            TextStyle::Subtitle => 11.0,
            TextStyle::Meta => 9.5,
            TextStyle::Body => 10.5,
            TextStyle::Chip => 9.5,
        }
    }

    /// Vertical advance for one line of this style.
    pub fn line_height(self) -> f32 {
        self.font_size() * 1.45
    }
}

/// One positioned line of text. `width` is the measured ink width, used by
/// the rasterizer to draw a proportional tone band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub text: String,
    pub style: TextStyle,
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

/// A vertical band of the surface (a full-width column, a sidebar, or a
/// header strip) with its own background and content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    /// Content height including padding.
    pub height: f32,
    pub background: Shade,
    /// When true the background extends to the bottom of the surface
    /// (sidebar columns); otherwise it covers only the content height.
    pub fill_to_bottom: bool,
    pub lines: Vec<Line>,
}

/// The laid-out document. Deterministic for an unchanged `Resume`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualSurface {
    pub template: TemplateId,
    pub width: f32,
    pub height: f32,
    pub regions: Vec<Region>,
}

// ────────────────────────────────────────────────────────────────────────────
// Region builder
// ────────────────────────────────────────────────────────────────────────────

/// Cursor-based builder the template strategies share. Blank text is skipped
/// silently so strategies can feed optional fields straight through — empty
/// sub-sections render nothing rather than placeholders.
pub struct RegionBuilder {
    x: f32,
    y: f32,
    width: f32,
    padding: f32,
    background: Shade,
    fill_to_bottom: bool,
    font: FontClass,
    cursor: f32,
    lines: Vec<Line>,
}

impl RegionBuilder {
    pub fn new(x: f32, y: f32, width: f32, font: FontClass) -> Self {
        RegionBuilder {
            x,
            y,
            width,
            padding: DEFAULT_PADDING_PX,
            background: Shade::White,
            fill_to_bottom: false,
            font,
            cursor: DEFAULT_PADDING_PX,
            lines: Vec::new(),
        }
    }

    pub fn background(mut self, shade: Shade) -> Self {
        self.background = shade;
        self
    }

    pub fn fill_to_bottom(mut self) -> Self {
        self.fill_to_bottom = true;
        self
    }

    /// Usable text width inside the padding gutters.
    pub fn text_width(&self) -> f32 {
        self.width - 2.0 * self.padding
    }

    /// Emits one line without wrapping. Blank input is a no-op.
    pub fn line(&mut self, text: &str, style: TextStyle) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let metrics = get_metrics(self.font);
        let width = metrics
            .width_px(text, style.font_size())
            .min(self.text_width());
        self.lines.push(Line {
            text: text.to_string(),
            style,
            x: self.x + self.padding,
            y: self.y + self.cursor,
            width,
        });
        self.cursor += style.line_height();
    }

    /// Emits word-wrapped text; embedded newlines are hard breaks. Blank
    /// input is a no-op.
    pub fn wrapped(&mut self, text: &str, style: TextStyle) {
        let metrics = get_metrics(self.font);
        for line in metrics.wrap_paragraphs(text, style.font_size(), self.text_width()) {
            self.line(&line, style);
        }
    }

    /// Vertical whitespace between blocks.
    pub fn gap(&mut self, px: f32) {
        self.cursor += px;
    }

    pub fn finish(self) -> Region {
        Region {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.cursor + self.padding,
            background: self.background,
            fill_to_bottom: self.fill_to_bottom,
            lines: self.lines,
        }
    }
}

/// Assembles the final surface: height is the tallest region clamped to at
/// least one page.
pub fn assemble(template: TemplateId, regions: Vec<Region>) -> VisualSurface {
    let content_bottom = regions
        .iter()
        .map(|r| r.y + r.height)
        .fold(0.0_f32, f32::max);
    VisualSurface {
        template,
        width: PAGE_WIDTH_PX,
        height: content_bottom.max(PAGE_MIN_HEIGHT_PX),
        regions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_skips_blank_lines() {
        let mut builder = RegionBuilder::new(0.0, 0.0, PAGE_WIDTH_PX, FontClass::Sans);
        builder.line("", TextStyle::Body);
        builder.line("   ", TextStyle::Body);
        builder.wrapped("", TextStyle::Body);
        let region = builder.finish();
        assert!(region.lines.is_empty());
    }

    #[test]
    fn test_builder_advances_cursor_per_line() {
        let mut builder = RegionBuilder::new(0.0, 0.0, PAGE_WIDTH_PX, FontClass::Sans);
        builder.line("First", TextStyle::Body);
        builder.line("Second", TextStyle::Body);
        let region = builder.finish();
        assert_eq!(region.lines.len(), 2);
        assert!(region.lines[1].y > region.lines[0].y);
        let advance = region.lines[1].y - region.lines[0].y;
        assert!((advance - TextStyle::Body.line_height()).abs() < 1e-3);
    }

    #[test]
    fn test_builder_offsets_lines_by_region_origin() {
        let mut builder = RegionBuilder::new(100.0, 50.0, 300.0, FontClass::Sans);
        builder.line("Sidebar", TextStyle::Heading);
        let region = builder.finish();
        assert_eq!(region.lines[0].x, 100.0 + DEFAULT_PADDING_PX);
        assert_eq!(region.lines[0].y, 50.0 + DEFAULT_PADDING_PX);
    }

    #[test]
    fn test_wrapped_splits_long_text() {
        let mut builder = RegionBuilder::new(0.0, 0.0, 200.0, FontClass::Sans);
        builder.wrapped(&"word ".repeat(30), TextStyle::Body);
        let region = builder.finish();
        assert!(region.lines.len() > 1);
    }

    #[test]
    fn test_assemble_clamps_to_one_page_minimum() {
        let mut builder = RegionBuilder::new(0.0, 0.0, PAGE_WIDTH_PX, FontClass::Sans);
        builder.line("Tiny", TextStyle::Body);
        let surface = assemble(TemplateId::Modern, vec![builder.finish()]);
        assert_eq!(surface.height, PAGE_MIN_HEIGHT_PX);
        assert_eq!(surface.width, PAGE_WIDTH_PX);
    }

    #[test]
    fn test_assemble_grows_past_one_page() {
        let mut builder = RegionBuilder::new(0.0, 0.0, PAGE_WIDTH_PX, FontClass::Sans);
        for _ in 0..120 {
            builder.line("Content line", TextStyle::Body);
        }
        let surface = assemble(TemplateId::Minimalist, vec![builder.finish()]);
        assert!(surface.height > PAGE_MIN_HEIGHT_PX);
    }
}
