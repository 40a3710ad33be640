//! Page geometry
//!
//! Every output page has the same fixed size. Each image is scaled to the
//! largest size that fits the page without changing its aspect ratio, then
//! centered. Coordinates are PDF user space: points, origin bottom-left.

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageSize {
    /// ISO A4, 210mm x 297mm
    pub const A4: PageSize = PageSize {
        width_pt: 595.2756,
        height_pt: 841.8898,
    };
}

/// Where an image lands on its page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Scale an image of `width_px` x `height_px` to fit `page` and center it.
///
/// Both dimensions must be non-zero.
pub fn fit_to_page(width_px: u32, height_px: u32, page: PageSize) -> Placement {
    debug_assert!(width_px > 0 && height_px > 0);

    let (page_w, page_h) = (page.width_pt, page.height_pt);
    let aspect = height_px as f32 / width_px as f32;

    let (width, height) = if aspect > 1.0 {
        // Portrait
        let width = page_w.min(page_h / aspect);
        (width, width * aspect)
    } else {
        // Landscape or square
        let height = page_h.min(page_w * aspect);
        (height / aspect, height)
    };

    Placement {
        x: (page_w - width) / 2.0,
        y: (page_h - height) / 2.0,
        width,
        height,
    }
}
