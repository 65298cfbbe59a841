//! EXIF orientation lookup and correction.

use exif::{In, Reader, Tag, Value};
use image::metadata::Orientation;
use image::DynamicImage;
use std::io::Cursor;

/// Reads EXIF orientation and rotates pixels to match it.
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Read the raw EXIF orientation value (1-8) from an encoded image.
    ///
    /// Returns `None` if the container has no EXIF block, the tag is absent,
    /// or the EXIF data cannot be parsed.
    pub fn orientation(bytes: &[u8]) -> Option<u32> {
        let exif = Reader::new()
            .read_from_container(&mut Cursor::new(bytes))
            .ok()?;
        exif.get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|f| match &f.value {
                Value::Short(v) => v.first().map(|&x| x as u32),
                Value::Long(v) => v.first().copied(),
                _ => None,
            })
    }

    /// Rotate/flip `image` so its pixels match the intended display orientation.
    ///
    /// Unknown or missing values leave the image untouched.
    pub fn apply_orientation(image: &mut DynamicImage, orientation: Option<u32>) {
        let Some(value) = orientation else {
            return;
        };
        match u8::try_from(value).ok().and_then(Orientation::from_exif) {
            Some(Orientation::NoTransforms) => {}
            Some(o) => {
                tracing::trace!("  Applying EXIF orientation {value}");
                image.apply_orientation(o);
            }
            None => tracing::debug!("Ignoring unknown EXIF orientation {value}"),
        }
    }
}
