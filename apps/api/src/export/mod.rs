//! PDF export pipeline: rasterize the laid-out surface, retry once in
//! degraded mode, embed the bitmap in an A4 document.

pub mod raster;

use printpdf::{ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument, Px};
use thiserror::Error;
use tracing::warn;

use crate::render::surface::VisualSurface;
use raster::{Bitmap, RasterError, RasterOptions, Rasterizer};

/// A4 portrait, mm.
const A4_WIDTH_MM: f32 = 210.0;
const A4_HEIGHT_MM: f32 = 297.0;

const DEFAULT_FILENAME: &str = "resume.pdf";
const CERTIFICATE_FILENAME: &str = "completion-certificate.pdf";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("rasterization failed after degraded retry: {0}")]
    Raster(#[from] RasterError),
    #[error("pdf emit failed: {0}")]
    Pdf(String),
}

/// A finished download: filename plus the complete PDF bytes. Nothing is
/// ever returned for a failed export.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Rasterizes with the capture options, falling back once to the degraded
/// options. The second failure is terminal.
fn rasterize_with_retry(
    surface: &VisualSurface,
    rasterizer: &dyn Rasterizer,
) -> Result<Bitmap, RasterError> {
    match rasterizer.rasterize(surface, &RasterOptions::capture()) {
        Ok(bitmap) => Ok(bitmap),
        Err(err) => {
            warn!(error = %err, "capture rasterization failed, retrying degraded");
            rasterizer.rasterize(surface, &RasterOptions::degraded())
        }
    }
}

fn image_from_bitmap(bitmap: Bitmap) -> Image {
    Image::from(ImageXObject {
        width: Px(bitmap.width as usize),
        height: Px(bitmap.height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: bitmap.data,
        image_filter: None,
        smask: None,
        clipping_bbox: None,
    })
}

/// Emits a single-page PDF with the bitmap scaled to the page width and
/// anchored to the top edge. Content taller than one page height runs off
/// the bottom, matching the paginate-by-clipping behavior of the preview.
fn emit_pdf(
    bitmap: Bitmap,
    page_width_mm: f32,
    page_height_mm: f32,
    stretch_to_page: bool,
    title: &str,
) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(title, Mm(page_width_mm), Mm(page_height_mm), "Page");

    // Placing at this dpi makes the image exactly page_width_mm wide.
    let dpi = bitmap.width as f32 * 25.4 / page_width_mm;
    let natural_height_mm = bitmap.height as f32 * 25.4 / dpi;
    let (scale_y, image_height_mm) = if stretch_to_page {
        (page_height_mm / natural_height_mm, page_height_mm)
    } else {
        (1.0, natural_height_mm)
    };

    let image = image_from_bitmap(bitmap);
    image.add_to_layer(
        doc.get_page(page).get_layer(layer),
        ImageTransform {
            translate_x: Some(Mm(0.0)),
            // PDF origin is bottom-left; anchor the image top to the page top.
            translate_y: Some(Mm(page_height_mm - image_height_mm)),
            scale_y: Some(scale_y),
            dpi: Some(dpi),
            ..ImageTransform::default()
        },
    );

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

/// Builds `"<title>.pdf"`, falling back for blank titles.
fn resume_filename(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        DEFAULT_FILENAME.to_string()
    } else {
        format!("{title}.pdf")
    }
}

/// Exports a resume surface as an A4 portrait PDF.
pub fn export_resume_pdf(
    surface: &VisualSurface,
    rasterizer: &dyn Rasterizer,
    title: &str,
) -> Result<ExportedDocument, ExportError> {
    let bitmap = rasterize_with_retry(surface, rasterizer)?;
    let filename = resume_filename(title);
    let bytes = emit_pdf(bitmap, A4_WIDTH_MM, A4_HEIGHT_MM, false, title.trim())?;
    Ok(ExportedDocument { filename, bytes })
}

/// Exports the completion certificate as an A4 landscape PDF, image stretched
/// full-bleed.
pub fn export_certificate_pdf(
    surface: &VisualSurface,
    rasterizer: &dyn Rasterizer,
) -> Result<ExportedDocument, ExportError> {
    let bitmap = rasterize_with_retry(surface, rasterizer)?;
    let bytes = emit_pdf(
        bitmap,
        A4_HEIGHT_MM,
        A4_WIDTH_MM,
        true,
        "Certificate of Completion",
    )?;
    Ok(ExportedDocument {
        filename: CERTIFICATE_FILENAME.to_string(),
        bytes,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Resume;
    use crate::render;
    use std::sync::Mutex;

    /// Fails the first `failures` calls, recording the scale of each attempt.
    struct FlakyRasterizer {
        failures: usize,
        attempts: Mutex<Vec<f32>>,
    }

    impl FlakyRasterizer {
        fn new(failures: usize) -> Self {
            FlakyRasterizer {
                failures,
                attempts: Mutex::new(Vec::new()),
            }
        }
    }

    impl Rasterizer for FlakyRasterizer {
        fn rasterize(
            &self,
            surface: &VisualSurface,
            options: &RasterOptions,
        ) -> Result<Bitmap, RasterError> {
            let mut attempts = self.attempts.lock().unwrap();
            attempts.push(options.scale);
            if attempts.len() <= self.failures {
                return Err(RasterError::Oversized {
                    width: 9999,
                    height: 9999,
                });
            }
            raster::BandRasterizer.rasterize(surface, options)
        }
    }

    fn sample_surface() -> VisualSurface {
        render::render(&Resume::new("Sample"))
    }

    #[test]
    fn test_export_happy_path_is_single_attempt() {
        let rasterizer = FlakyRasterizer::new(0);
        let doc = export_resume_pdf(&sample_surface(), &rasterizer, "My Resume").unwrap();
        assert_eq!(doc.filename, "My Resume.pdf");
        assert!(doc.bytes.starts_with(b"%PDF"));
        assert_eq!(*rasterizer.attempts.lock().unwrap(), vec![1.5]);
    }

    #[test]
    fn test_export_retries_once_degraded() {
        let rasterizer = FlakyRasterizer::new(1);
        let doc = export_resume_pdf(&sample_surface(), &rasterizer, "Retry").unwrap();
        assert!(doc.bytes.starts_with(b"%PDF"));
        assert_eq!(*rasterizer.attempts.lock().unwrap(), vec![1.5, 1.0]);
    }

    #[test]
    fn test_second_failure_is_terminal() {
        let rasterizer = FlakyRasterizer::new(2);
        let err = export_resume_pdf(&sample_surface(), &rasterizer, "Fails").unwrap_err();
        assert!(matches!(err, ExportError::Raster(_)));
        // Exactly two attempts, never a third.
        assert_eq!(*rasterizer.attempts.lock().unwrap(), vec![1.5, 1.0]);
    }

    #[test]
    fn test_blank_title_falls_back_to_default_filename() {
        let rasterizer = FlakyRasterizer::new(0);
        let doc = export_resume_pdf(&sample_surface(), &rasterizer, "   ").unwrap();
        assert_eq!(doc.filename, "resume.pdf");
    }

    #[test]
    fn test_certificate_export_uses_fixed_filename() {
        let surface = render::certificate::certificate_surface("Ada Lovelace");
        let doc = export_certificate_pdf(&surface, &raster::BandRasterizer).unwrap();
        assert_eq!(doc.filename, "completion-certificate.pdf");
        assert!(doc.bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_degraded_options_drop_cross_origin() {
        assert!(RasterOptions::capture().allow_cross_origin);
        assert!(!RasterOptions::degraded().allow_cross_origin);
        assert_eq!(RasterOptions::capture().scale, 1.5);
        assert_eq!(RasterOptions::degraded().scale, 1.0);
    }
}
