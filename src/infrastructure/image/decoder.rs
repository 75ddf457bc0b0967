//! Off-thread decoding of fetched images into previews.

use image::DynamicImage;
use image::imageops::FilterType;

use crate::domain::entities::ImageBlob;

/// Widest preview kept in memory; wider images are scaled down.
pub const MAX_PREVIEW_WIDTH: u32 = 400;
const MAX_PREVIEW_HEIGHT: u32 = 300;

/// Decodes a blob, shrinking it when wider than [`MAX_PREVIEW_WIDTH`].
///
/// # Errors
/// Returns error if the bytes are not a supported image format.
pub fn decode_preview(blob: &ImageBlob) -> Result<DynamicImage, image::ImageError> {
    let img = image::load_from_memory(blob.as_bytes())?;

    if img.width() > MAX_PREVIEW_WIDTH {
        Ok(img.resize(MAX_PREVIEW_WIDTH, MAX_PREVIEW_HEIGHT, FilterType::Lanczos3))
    } else {
        Ok(img)
    }
}

#[cfg(test)]
pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::new_rgb8(width, height);
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("png encode");
    out.into_inner()
}
