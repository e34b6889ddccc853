use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Placeholder fill shown when the feed can't be reached.
pub const PLACEHOLDER_COLOR: [u8; 4] = [0, 0, 255, 255];

/// One still frame plus the size it had when it came off the feed.
///
/// Pixels are normalized to RGBA8 on construction so every frame serializes
/// to the same PNG layout no matter what encoding the feed actually sent.
pub struct StillFrame {
    image: DynamicImage,
    original_size: (u32, u32),
}

impl StillFrame {
    pub fn new(image: DynamicImage) -> Self {
        let image = DynamicImage::ImageRgba8(image.to_rgba8());
        let original_size = (image.width(), image.height());
        Self {
            image,
            original_size,
        }
    }

    /// Solid-color stand-in of the given size.
    pub fn placeholder(size: (u32, u32)) -> Self {
        let (w, h) = size;
        let fill = Rgba(PLACEHOLDER_COLOR);
        Self::new(DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, fill)))
    }

    pub fn size(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    pub fn original_size(&self) -> (u32, u32) {
        self.original_size
    }

    /// Scale to `target` unless the frame is already that size.
    pub fn resize(&mut self, target: (u32, u32)) {
        if self.size() != target {
            let (w, h) = target;
            self.image = self.image.resize_exact(w, h, FilterType::CatmullRom);
        }
    }

    /// The "other" of the two display sizes: corrected while the frame is
    /// still at its feed size, back to native once it has been corrected.
    pub fn toggled_size(&self, native: (u32, u32), corrected: (u32, u32)) -> (u32, u32) {
        if self.size() == self.original_size {
            corrected
        } else {
            native
        }
    }

    /// Current image encoded as PNG.
    pub fn png_bytes(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut out = Cursor::new(Vec::new());
        self.image.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Raw RGBA pixels, row-major, for texture upload.
    pub fn rgba_bytes(&self) -> Vec<u8> {
        self.image.to_rgba8().into_raw()
    }
}
