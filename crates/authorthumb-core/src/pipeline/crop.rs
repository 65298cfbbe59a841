//! Centered square crop.

use image::{DynamicImage, GenericImageView};
use serde::Serialize;

/// A square region inside an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub side: u32,
}

impl CropRect {
    /// The largest square centered in a `width` x `height` image.
    ///
    /// Odd leftovers are floored, so the extra pixel stays on the right/bottom.
    pub fn centered(width: u32, height: u32) -> Self {
        let side = width.min(height);
        Self {
            left: (width - side) / 2,
            top: (height - side) / 2,
            side,
        }
    }
}

/// Crop `image` to its centered square, returning the new image and the region used.
pub fn center_square(image: &DynamicImage) -> (DynamicImage, CropRect) {
    let (width, height) = image.dimensions();
    let rect = CropRect::centered(width, height);
    let square = image.crop_imm(rect.left, rect.top, rect.side, rect.side);
    (square, rect)
}
