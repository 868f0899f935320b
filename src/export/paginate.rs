//! Page layout math for the export.
//!
//! The captured bitmap is scaled to the printable page width preserving
//! aspect ratio; if the scaled height exceeds one page, the same full image
//! is drawn on successive pages shifted upward by one page height each, so
//! every page exposes the next vertical slice.

/// A4 portrait, fixed
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const MM_PER_INCH: f32 = 25.4;

/// Scaled image geometry and per-page upward shifts
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    /// Image width after scaling; always the full page width
    pub image_width_mm: f32,
    /// Image height after scaling, may exceed one page
    pub image_height_mm: f32,
    /// Dots per inch that realize the scaling when the image is placed
    pub dpi: f32,
    /// Upward shift of the image per page, `0, H, 2H, ...`
    pub offsets_mm: Vec<f32>,
}

/// Compute the page layout for a bitmap of the given pixel size
pub fn paginate(width_px: u32, height_px: u32) -> Pagination {
    let aspect = height_px as f32 / width_px.max(1) as f32;
    let image_height_mm = PAGE_WIDTH_MM * aspect;
    let dpi = width_px as f32 / (PAGE_WIDTH_MM / MM_PER_INCH);

    let mut offsets_mm = vec![0.0];
    let mut remaining = image_height_mm - PAGE_HEIGHT_MM;
    while remaining > 0.0 {
        offsets_mm.push(offsets_mm.len() as f32 * PAGE_HEIGHT_MM);
        remaining -= PAGE_HEIGHT_MM;
    }

    Pagination {
        image_width_mm: PAGE_WIDTH_MM,
        image_height_mm,
        dpi,
        offsets_mm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_image_fits_on_one_page() {
        // Square bitmap: 210mm tall once scaled, under one page
        let p = paginate(1000, 1000);
        assert_eq!(p.offsets_mm, vec![0.0]);
        assert!((p.image_height_mm - 210.0).abs() < 0.01);
    }

    #[test]
    fn tall_image_steps_one_page_height_per_page() {
        // 2.5 pages tall once scaled to page width
        let height = (2.5 * PAGE_HEIGHT_MM / PAGE_WIDTH_MM * 1000.0) as u32;
        let p = paginate(1000, height);
        assert_eq!(p.offsets_mm.len(), 3);
        assert_eq!(p.offsets_mm[0], 0.0);
        assert!((p.offsets_mm[1] - PAGE_HEIGHT_MM).abs() < f32::EPSILON);
        assert!((p.offsets_mm[2] - 2.0 * PAGE_HEIGHT_MM).abs() < f32::EPSILON);
    }

    #[test]
    fn exact_page_height_needs_exactly_one_page() {
        let height = (PAGE_HEIGHT_MM / PAGE_WIDTH_MM * 1000.0).floor() as u32;
        let p = paginate(1000, height);
        assert_eq!(p.offsets_mm.len(), 1);
    }

    #[test]
    fn dpi_realizes_the_page_width() {
        let p = paginate(1588, 100);
        // width_px / dpi inches == 210mm
        let width_mm = p.image_width_mm;
        assert!(((1588.0 / p.dpi) * MM_PER_INCH - width_mm).abs() < 0.01);
    }
}
