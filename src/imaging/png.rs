use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::{IconError, Result};

/// Encodes as 8-bit RGBA. No time chunk is written, so equal pixels give equal bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut bytes, CompressionType::Default, FilterType::Adaptive);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Overwrites `path`. Parent directories must already exist.
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<()> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes).map_err(|source| IconError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {} ({}x{})", path.display(), image.width(), image.height());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn sample() -> RgbaImage {
        let mut img = RgbaImage::from_pixel(8, 8, Rgba([64, 224, 208, 255]));
        img.put_pixel(3, 4, Rgba([0, 0, 0, 255]));
        img
    }

    #[test]
    fn output_is_rgba_png() {
        let bytes = encode_png(&sample()).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
        assert_eq!(decoded.to_rgba8(), sample());
    }

    #[test]
    fn fully_opaque_image_still_has_alpha_channel() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
        let decoded = image::load_from_memory(&encode_png(&img).unwrap()).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
    }

    #[test]
    fn encoding_is_deterministic() {
        assert_eq!(encode_png(&sample()).unwrap(), encode_png(&sample()).unwrap());
    }

    #[test]
    fn write_overwrites_existing_file() {
        let path = std::env::temp_dir().join(format!("glyph-icons-png-{}.png", std::process::id()));
        std::fs::write(&path, b"stale").unwrap();
        write_png(&path, &sample()).unwrap();
        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk, encode_png(&sample()).unwrap());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let path = std::env::temp_dir()
            .join("glyph-icons-no-such-dir")
            .join("mipmap-xxxhdpi")
            .join("ic_launcher.png");
        match write_png(&path, &sample()) {
            Err(IconError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Unexpected result: {other:?}"),
        }
    }
}
