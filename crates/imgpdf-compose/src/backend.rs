//! Real image decoding (`image`) and PDF output (`printpdf`)

use crate::compose::{ImageProbe, PageCanvas};
use crate::layout::{PageSize, Placement};
use crate::types::DecodeError;
use ::image::{DynamicImage, ImageReader, RgbImage};
use printpdf::*;
use std::path::Path;

/// Reads only as much of the file as needed to learn its size
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFileProbe;

impl ImageProbe for ImageFileProbe {
    fn probe_dimensions(&self, path: &Path) -> std::result::Result<(u32, u32), DecodeError> {
        let dimensions = ImageReader::open(path)?
            .with_guessed_format()?
            .into_dimensions()?;
        Ok(dimensions)
    }
}

/// A printpdf document being filled one image page at a time
pub struct PdfCanvas {
    doc: PdfDocument,
    page: PageSize,
}

impl PdfCanvas {
    pub fn new(title: &str, page: PageSize) -> Self {
        Self {
            doc: PdfDocument::new(title),
            page,
        }
    }

    pub fn page_count(&self) -> usize {
        self.doc.pages.len()
    }

    /// Serialize the document. Called once, after every page is drawn.
    pub fn finish(self) -> Vec<u8> {
        let mut warnings = Vec::new();
        let bytes = self.doc.save(&PdfSaveOptions::default(), &mut warnings);
        for warning in &warnings {
            log::debug!("PDF save: {:?}", warning);
        }
        bytes
    }

    fn page_rect(&self) -> Rect {
        Rect {
            x: Pt(0.0),
            y: Pt(0.0),
            width: Pt(self.page.width_pt),
            height: Pt(self.page.height_pt),
        }
    }
}

impl PageCanvas for PdfCanvas {
    fn draw_page(
        &mut self,
        path: &Path,
        placement: &Placement,
    ) -> std::result::Result<(), DecodeError> {
        let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        let rgb = flatten_onto_white(decoded);
        let (width_px, height_px) = rgb.dimensions();
        if width_px == 0 || height_px == 0 {
            return Err(DecodeError::EmptyImage {
                width: width_px,
                height: height_px,
            });
        }

        let raw = RawImage {
            pixels: RawImageData::U8(rgb.into_raw()),
            width: width_px as usize,
            height: height_px as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let image_id = self.doc.add_image(&raw);

        // At 72 dpi one pixel is one point, so the scale is the draw size in pixels
        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(placement.x)),
                translate_y: Some(Pt(placement.y)),
                scale_x: Some(placement.width / width_px as f32),
                scale_y: Some(placement.height / height_px as f32),
                dpi: Some(72.0),
                ..Default::default()
            },
        }];

        self.doc.pages.push(PdfPage {
            media_box: self.page_rect(),
            trim_box: self.page_rect(),
            crop_box: self.page_rect(),
            ops,
        });

        Ok(())
    }
}

/// Drop any alpha channel by compositing over a white background
fn flatten_onto_white(image: DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut rgb = RgbImage::new(width, height);
    for (src, dst) in rgba.pixels().zip(rgb.pixels_mut()) {
        let alpha = src[3] as u32;
        for channel in 0..3 {
            let color = src[channel] as u32;
            dst[channel] = ((color * alpha + 255 * (255 - alpha)) / 255) as u8;
        }
    }
    rgb
}
