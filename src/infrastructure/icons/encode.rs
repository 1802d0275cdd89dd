//! PNG and multi-resolution ICO encoding

use std::io::Cursor;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, ImageFormat, RgbaImage};

use crate::domain::entities::ICO_MAX_SIZE;
use crate::error::{AssetError, AssetResult};

/// Encode one image as PNG bytes
pub fn encode_png(img: &RgbaImage) -> AssetResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Bundle frames into one ICO container (PNG-compressed frames)
pub fn encode_ico(frames: &[&RgbaImage]) -> AssetResult<Vec<u8>> {
    if frames.is_empty() {
        return Err(AssetError::InvalidIconSpec("ICO needs at least one frame".into()));
    }
    if let Some(big) = frames
        .iter()
        .find(|f| f.width() > ICO_MAX_SIZE || f.height() > ICO_MAX_SIZE)
    {
        return Err(AssetError::InvalidIconSpec(format!(
            "ICO frame {}x{} exceeds {}",
            big.width(),
            big.height(),
            ICO_MAX_SIZE
        )));
    }

    let frames = frames
        .iter()
        .map(|img| {
            IcoFrame::as_png(
                img.as_raw(),
                img.width(),
                img.height(),
                ExtendedColorType::Rgba8,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut buf = Vec::new();
    IcoEncoder::new(&mut buf).encode_images(&frames)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba([20, 20, 20, 255]))
    }

    #[test]
    fn png_round_trips_dimensions() {
        let bytes = encode_png(&solid(32)).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 32));
    }

    #[test]
    fn ico_header_lists_every_frame() {
        let a = solid(16);
        let b = solid(32);
        let c = solid(256);
        let bytes = encode_ico(&[&a, &b, &c]).unwrap();

        // ICONDIR: reserved=0, type=1, count
        assert_eq!(&bytes[0..4], &[0, 0, 1, 0]);
        assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), 3);
        // first ICONDIRENTRY width/height; 256 is stored as 0
        assert_eq!(bytes[6], 16);
        assert_eq!(bytes[6 + 32], 0);
    }

    #[test]
    fn ico_rejects_large_frames() {
        let big = solid(512);
        assert!(matches!(
            encode_ico(&[&big]),
            Err(AssetError::InvalidIconSpec(_))
        ));
    }
}
