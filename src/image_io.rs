//! 画像ファイル → 画素バッファ変換
//!
//! 色抽出は縮小画像で十分なため、最大辺 `max_size` に収まるよう縮小してから RGBA8 に変換する。

use crate::error::{GarmentAiError, Result};
use garment_ai_common::color::PixelBuffer;
use image::DynamicImage;
use std::path::Path;

pub fn load_pixel_buffer(path: &Path, max_size: u32) -> Result<PixelBuffer> {
    if !path.exists() {
        return Err(GarmentAiError::FileNotFound(path.display().to_string()));
    }

    let img = image::open(path)
        .map_err(|e| GarmentAiError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    to_pixel_buffer(&img, max_size)
}

pub fn to_pixel_buffer(img: &DynamicImage, max_size: u32) -> Result<PixelBuffer> {
    let resized = if max_size > 0 && (img.width() > max_size || img.height() > max_size) {
        img.thumbnail(max_size, max_size)
    } else {
        img.clone()
    };

    let rgba = resized.to_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(width, height, "image decoded for color sampling");

    Ok(PixelBuffer::new(width, height, rgba.into_raw())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_to_pixel_buffer_downscales() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(400, 100, Rgba([200, 30, 30, 255])));
        let buffer = to_pixel_buffer(&img, 200).unwrap();
        assert_eq!(buffer.width(), 200);
        assert_eq!(buffer.height(), 50);
    }

    #[test]
    fn test_to_pixel_buffer_keeps_small_images() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 20, Rgba([0, 0, 0, 255])));
        let buffer = to_pixel_buffer(&img, 200).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (10, 20));
        assert_eq!(buffer.pixel_count(), 200);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_pixel_buffer(Path::new("/nonexistent/look.png"), 200);
        assert!(matches!(result, Err(GarmentAiError::FileNotFound(_))));
    }
}
