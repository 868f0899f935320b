//! Bitmap rasterization of the journal document.
//!
//! The pipeline only depends on the [`Rasterizer`] trait; the shipped
//! implementation lays the document out as wrapped text lines and paints
//! glyphs with `ab_glyph` over a TTF loaded from the configured font path.
//! Tests substitute fakes.

use std::path::Path;

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use async_trait::async_trait;

use super::document::{BlockKind, DocumentView};
use crate::error::{JournalError, Result};

/// Row-major RGB8 bitmap, white background
#[derive(Debug, Clone)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0xff; (width as usize) * (height as usize) * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB8 pixel data
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    /// Darken one pixel by glyph coverage, ignoring out-of-bounds writes
    pub fn blend(&mut self, x: i32, y: i32, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        for channel in &mut self.pixels[idx..idx + 3] {
            let lit = f32::from(*channel) * (1.0 - coverage);
            *channel = lit.round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Renders a document subtree into a bitmap.
///
/// The single suspension point of the system; an export awaits it while the
/// busy flag holds off duplicates.
#[async_trait]
pub trait Rasterizer {
    async fn rasterize(&self, doc: &DocumentView) -> Result<Bitmap>;
}

// Layout constants in CSS-like px, multiplied by the supersample factor.
const BASE_WIDTH: f32 = 794.0; // A4 width at 96 dpi
const MARGIN: f32 = 48.0;
const ANSWER_INDENT: f32 = 16.0;

fn font_size(kind: BlockKind) -> f32 {
    match kind {
        BlockKind::Title => 30.0,
        BlockKind::Subtitle => 17.0,
        BlockKind::SectionHeader => 20.0,
        BlockKind::Prompt => 13.0,
        BlockKind::Answer | BlockKind::Control => 13.0,
        BlockKind::Spacer => 10.0,
    }
}

fn space_after(kind: BlockKind) -> f32 {
    match kind {
        BlockKind::Title => 6.0,
        BlockKind::Subtitle => 18.0,
        BlockKind::SectionHeader => 10.0,
        BlockKind::Prompt => 4.0,
        BlockKind::Answer => 14.0,
        BlockKind::Spacer => 8.0,
        BlockKind::Control => 0.0,
    }
}

struct Line {
    text: String,
    size: f32,
    indent: f32,
    advance: f32,
}

/// Glyph rasterizer over a single TTF
pub struct FontRasterizer {
    font: FontVec,
    supersample: f32,
}

impl FontRasterizer {
    /// Load the font from disk. A missing or unparsable font is an export
    /// failure the user sees, not a panic.
    pub fn from_file<P: AsRef<Path>>(path: P, supersample: f32) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| JournalError::FontUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let font = FontVec::try_from_vec(data).map_err(|e| JournalError::FontUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self { font, supersample })
    }

    fn wrap(&self, text: &str, size: f32, max_width: f32) -> Vec<String> {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut lines = Vec::new();
        for raw_line in text.split('\n') {
            let mut current = String::new();
            let mut current_width = 0.0f32;
            for word in raw_line.split_whitespace() {
                let sep = if current.is_empty() { "" } else { " " };
                let addition: f32 = format!("{sep}{word}")
                    .chars()
                    .map(|c| scaled.h_advance(self.font.glyph_id(c)))
                    .sum();
                if !current.is_empty() && current_width + addition > max_width {
                    lines.push(std::mem::take(&mut current));
                    current_width = word
                        .chars()
                        .map(|c| scaled.h_advance(self.font.glyph_id(c)))
                        .sum();
                    current.push_str(word);
                } else {
                    current.push_str(sep);
                    current.push_str(word);
                    current_width += addition;
                }
            }
            lines.push(current);
        }
        lines
    }

    fn layout(&self, doc: &DocumentView) -> (Vec<Line>, f32) {
        let scale = self.supersample;
        let content_width = (BASE_WIDTH - 2.0 * MARGIN) * scale;
        let mut lines = Vec::new();
        let mut height = MARGIN * scale;

        for block in doc.visible_blocks() {
            let size = font_size(block.kind) * scale;
            let indent = match block.kind {
                BlockKind::Answer => ANSWER_INDENT * scale,
                _ => 0.0,
            };
            if block.kind == BlockKind::Spacer {
                height += space_after(block.kind) * scale;
                continue;
            }
            for text in self.wrap(&block.text, size, content_width - indent) {
                let advance = size * 1.35;
                lines.push(Line {
                    text,
                    size,
                    indent,
                    advance,
                });
                height += advance;
            }
            height += space_after(block.kind) * scale;
        }

        height += MARGIN * scale;
        (lines, height)
    }

    fn draw_line(&self, bitmap: &mut Bitmap, line: &Line, baseline: f32) {
        let scaled = self.font.as_scaled(PxScale::from(line.size));
        let mut x = MARGIN * self.supersample + line.indent;
        for ch in line.text.chars() {
            let id = self.font.glyph_id(ch);
            let glyph = id.with_scale_and_position(PxScale::from(line.size), point(x, baseline));
            if let Some(outline) = self.font.outline_glyph(glyph) {
                let bounds = outline.px_bounds();
                outline.draw(|gx, gy, coverage| {
                    bitmap.blend(
                        bounds.min.x as i32 + gx as i32,
                        bounds.min.y as i32 + gy as i32,
                        coverage,
                    );
                });
            }
            x += scaled.h_advance(id);
        }
    }
}

#[async_trait]
impl Rasterizer for FontRasterizer {
    async fn rasterize(&self, doc: &DocumentView) -> Result<Bitmap> {
        let (lines, height) = self.layout(doc);
        let width = (BASE_WIDTH * self.supersample).ceil() as u32;
        let height = height.ceil().max(1.0) as u32;
        let mut bitmap = Bitmap::new(width, height);

        let mut y = MARGIN * self.supersample;
        for line in &lines {
            let scaled = self.font.as_scaled(PxScale::from(line.size));
            self.draw_line(&mut bitmap, line, y + scaled.ascent());
            y += line.advance;
        }

        Ok(bitmap)
    }
}
