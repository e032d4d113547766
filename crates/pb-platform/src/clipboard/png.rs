use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};
use pb_core::clipboard::NativeImage;
use pb_core::ports::ClipboardError;

pub(crate) const IMAGE_PNG: &str = "image/png";

/// Encode a native RGBA frame as PNG for hosts that exchange encoded images.
pub(crate) fn encode_png(image: &NativeImage) -> Result<Vec<u8>, ClipboardError> {
    let buffer = RgbaImage::from_raw(image.width(), image.height(), image.rgba().to_vec())
        .ok_or_else(|| ClipboardError::Image("pixel buffer does not match dimensions".into()))?;

    let mut png = Vec::new();
    DynamicImage::ImageRgba8(buffer)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| ClipboardError::Image(e.to_string()))?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_signature() {
        let image = NativeImage::new(1, 1, vec![255, 0, 0, 255]).unwrap();
        let png = encode_png(&image).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
