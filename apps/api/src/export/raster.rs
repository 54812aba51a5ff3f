//! Rasterization port: turns a laid-out surface into an RGB bitmap that the
//! PDF emitter embeds. The default adapter paints region backgrounds and a
//! proportional tone band per text line; glyph-accurate text drawing is a
//! styling concern outside this pipeline.

use thiserror::Error;

use crate::render::surface::{Shade, VisualSurface};

/// Hard cap on output pixels. Mirrors the canvas limits of browser capture
/// engines: a long document at capture scale can exceed it, in which case the
/// pipeline retries at base scale.
pub const MAX_BITMAP_PIXELS: u64 = 4096 * 4096;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("bitmap would be {width}x{height}, over the pixel budget")]
    Oversized { width: u32, height: u32 },
    #[error("surface has no drawable area")]
    EmptySurface,
    #[error("rasterizer failed: {0}")]
    Backend(String),
}

/// Capture options, one set per export attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    /// Supersampling factor applied to both axes.
    pub scale: f32,
    /// Whether externally hosted content may be drawn. The degraded retry
    /// turns this off.
    pub allow_cross_origin: bool,
    /// Page background, RGB.
    pub background: [u8; 3],
}

impl RasterOptions {
    /// First-attempt capture: supersampled, permissive.
    pub fn capture() -> Self {
        RasterOptions {
            scale: 1.5,
            allow_cross_origin: true,
            background: [0xff, 0xff, 0xff],
        }
    }

    /// Degraded retry: base scale, strict same-origin.
    pub fn degraded() -> Self {
        RasterOptions {
            scale: 1.0,
            allow_cross_origin: false,
            background: [0xff, 0xff, 0xff],
        }
    }
}

/// Packed RGB8 pixels, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Bitmap {
    fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..(width as u64 * height as u64) {
            data.extend_from_slice(&rgb);
        }
        Bitmap {
            width,
            height,
            data,
        }
    }

    fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, rgb: [u8; 3]) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let i = (y as usize * self.width as usize + x as usize) * 3;
                self.data[i..i + 3].copy_from_slice(&rgb);
            }
        }
    }
}

pub trait Rasterizer: Send + Sync {
    fn rasterize(
        &self,
        surface: &VisualSurface,
        options: &RasterOptions,
    ) -> Result<Bitmap, RasterError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Default adapter
// ────────────────────────────────────────────────────────────────────────────

fn shade_rgb(shade: Shade) -> [u8; 3] {
    match shade {
        Shade::White => [0xff, 0xff, 0xff],
        Shade::Light => [0xf3, 0xf4, 0xf6],
        Shade::Accent => [0x1e, 0x3a, 0x5f],
        Shade::Dark => [0x11, 0x18, 0x27],
    }
}

/// Ink tone for text bands: dark on light backgrounds, light on dark ones.
fn ink_rgb(background: Shade) -> [u8; 3] {
    match background {
        Shade::White | Shade::Light => [0x37, 0x41, 0x51],
        Shade::Accent | Shade::Dark => [0xe5, 0xe7, 0xeb],
    }
}

/// Scales and rounds a virtual-px coordinate.
fn px(value: f32, scale: f32) -> u32 {
    (value * scale).round().max(0.0) as u32
}

pub struct BandRasterizer;

impl Rasterizer for BandRasterizer {
    fn rasterize(
        &self,
        surface: &VisualSurface,
        options: &RasterOptions,
    ) -> Result<Bitmap, RasterError> {
        if surface.width <= 0.0 || surface.height <= 0.0 {
            return Err(RasterError::EmptySurface);
        }
        let width = px(surface.width, options.scale);
        let height = px(surface.height, options.scale);
        if width as u64 * height as u64 > MAX_BITMAP_PIXELS {
            return Err(RasterError::Oversized { width, height });
        }

        let mut bitmap = Bitmap::filled(width, height, options.background);

        for region in &surface.regions {
            if region.background != Shade::White {
                let bottom = if region.fill_to_bottom {
                    surface.height
                } else {
                    region.y + region.height
                };
                bitmap.fill_rect(
                    px(region.x, options.scale),
                    px(region.y, options.scale),
                    px(region.x + region.width, options.scale),
                    px(bottom, options.scale),
                    shade_rgb(region.background),
                );
            }
            let ink = ink_rgb(region.background);
            for line in &region.lines {
                // One band per line, proportional to measured ink width.
                let band_height = line.style.font_size() * 0.7;
                bitmap.fill_rect(
                    px(line.x, options.scale),
                    px(line.y, options.scale),
                    px(line.x + line.width, options.scale),
                    px(line.y + band_height, options.scale),
                    ink,
                );
            }
        }

        Ok(bitmap)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::TemplateId;
    use crate::render::surface::{Line, Region, TextStyle};

    fn small_surface() -> VisualSurface {
        VisualSurface {
            template: TemplateId::Modern,
            width: 100.0,
            height: 80.0,
            regions: vec![Region {
                x: 0.0,
                y: 0.0,
                width: 40.0,
                height: 80.0,
                background: Shade::Dark,
                fill_to_bottom: false,
                lines: vec![Line {
                    text: "Name".to_string(),
                    style: TextStyle::Body,
                    x: 4.0,
                    y: 4.0,
                    width: 30.0,
                }],
            }],
        }
    }

    #[test]
    fn test_scale_multiplies_dimensions() {
        let surface = small_surface();
        let base = BandRasterizer
            .rasterize(&surface, &RasterOptions::degraded())
            .unwrap();
        let scaled = BandRasterizer
            .rasterize(&surface, &RasterOptions::capture())
            .unwrap();
        assert_eq!((base.width, base.height), (100, 80));
        assert_eq!((scaled.width, scaled.height), (150, 120));
        assert_eq!(scaled.data.len(), 150 * 120 * 3);
    }

    #[test]
    fn test_region_background_and_ink_are_painted() {
        let bitmap = BandRasterizer
            .rasterize(&small_surface(), &RasterOptions::degraded())
            .unwrap();
        let at = |x: usize, y: usize| {
            let i = (y * bitmap.width as usize + x) * 3;
            [bitmap.data[i], bitmap.data[i + 1], bitmap.data[i + 2]]
        };
        // Inside the dark region but off the text band.
        assert_eq!(at(2, 60), shade_rgb(Shade::Dark));
        // On the text band: light ink over the dark background.
        assert_eq!(at(10, 5), ink_rgb(Shade::Dark));
        // Outside every region: page background.
        assert_eq!(at(90, 60), [0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_oversized_surface_is_rejected() {
        let mut surface = small_surface();
        surface.width = 8000.0;
        surface.height = 8000.0;
        let err = BandRasterizer
            .rasterize(&surface, &RasterOptions::capture())
            .unwrap_err();
        assert!(matches!(err, RasterError::Oversized { .. }));
        // The same surface fits at base scale? Still too big here, but a
        // merely-long document does fit.
        surface.width = 794.0;
        surface.height = 20000.0;
        assert!(BandRasterizer
            .rasterize(&surface, &RasterOptions::capture())
            .is_err());
        assert!(BandRasterizer
            .rasterize(&surface, &RasterOptions::degraded())
            .is_ok());
    }

    #[test]
    fn test_empty_surface_is_rejected() {
        let mut surface = small_surface();
        surface.height = 0.0;
        assert!(matches!(
            BandRasterizer.rasterize(&surface, &RasterOptions::capture()),
            Err(RasterError::EmptySurface)
        ));
    }
}
