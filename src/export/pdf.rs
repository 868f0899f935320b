//! PDF assembly via `printpdf`.
//!
//! One A4 portrait page per pagination offset; every page embeds the full
//! captured bitmap, translated so the page shows its slice.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument, Px};

use super::paginate::{Pagination, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use super::raster::Bitmap;
use crate::error::{JournalError, Result};

/// Fixed artifact name
pub const EXPORT_FILENAME: &str = "Floortime_Reflection_Journal.pdf";

const DOCUMENT_TITLE: &str = "Home Floortime Reflection Journal";

fn image_xobject(bitmap: &Bitmap) -> ImageXObject {
    ImageXObject {
        width: Px(bitmap.width() as usize),
        height: Px(bitmap.height() as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: bitmap.data().to_vec(),
        image_filter: None,
        smask: None,
        clipping_bbox: None,
    }
}

/// Write the paginated document into `out_dir` and return the artifact path
pub fn assemble(bitmap: &Bitmap, pagination: &Pagination, out_dir: &Path) -> Result<PathBuf> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "journal",
    );

    for (index, offset_mm) in pagination.offsets_mm.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "journal");
            doc.get_page(page).get_layer(layer)
        };

        // printpdf places images from the bottom-left corner; shift the
        // image bottom up by one page height per page index.
        let translate_y = PAGE_HEIGHT_MM - pagination.image_height_mm + offset_mm;
        Image::from(image_xobject(bitmap)).add_to_layer(
            layer,
            ImageTransform {
                translate_x: Some(Mm(0.0)),
                translate_y: Some(Mm(translate_y)),
                dpi: Some(pagination.dpi),
                ..Default::default()
            },
        );
    }

    let path = out_dir.join(EXPORT_FILENAME);
    let file = File::create(&path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| JournalError::Assembly(e.to_string()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::paginate::paginate;

    #[test]
    fn assemble_writes_a_pdf_file() {
        let dir = tempfile::tempdir().unwrap();
        let bitmap = Bitmap::new(80, 200);
        let pagination = paginate(bitmap.width(), bitmap.height());

        let path = assemble(&bitmap, &pagination, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILENAME);
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn multi_page_layout_produces_larger_documents() {
        let dir = tempfile::tempdir().unwrap();
        let short = Bitmap::new(100, 100);
        let tall = Bitmap::new(100, 600);

        let one = assemble(&short, &paginate(100, 100), dir.path()).unwrap();
        let one_len = std::fs::metadata(&one).unwrap().len();
        let many = assemble(&tall, &paginate(100, 600), dir.path()).unwrap();
        let many_len = std::fs::metadata(&many).unwrap().len();
        assert!(many_len > one_len);
    }
}
