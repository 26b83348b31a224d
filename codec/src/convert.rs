use image::{imageops, imageops::FilterType, DynamicImage, ImageReader};
use log::debug;
use std::path::Path;

use crate::error::Error;
use crate::format::format_c_array;
use crate::options::ConvertOptions;
use crate::rgb565::pack_image;
use crate::{OUTPUT_HEIGHT, OUTPUT_WIDTH};

/// Result of one conversion run
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Packed RGB565 bytes, row-major, two bytes per pixel
    pub data: Vec<u8>,
    /// Formatted C array source text
    pub text: String,
}

/// Decode a source image from disk.
///
/// Format detection is delegated to the image crate; an unreadable path or
/// unrecognized format surfaces as [`Error::Decode`] with no partial state.
pub fn load_image(path: &Path) -> Result<DynamicImage, Error> {
    let img = ImageReader::open(path)
        .map_err(image::ImageError::IoError)?
        .decode()?;
    Ok(img)
}

/// Run the full conversion pipeline on a decoded image.
///
/// The source is resampled to exactly 240×240 (aspect ratio is not
/// preserved), coerced to 3-channel RGB, optionally color-inverted, packed
/// to RGB565 in the configured byte order and rendered as a C array literal.
/// Options are validated up front; no pixel work happens on invalid config.
pub fn convert(image: &DynamicImage, options: &ConvertOptions) -> Result<Conversion, Error> {
    options.validate()?;

    let resized = image.resize_exact(OUTPUT_WIDTH, OUTPUT_HEIGHT, FilterType::Lanczos3);
    let mut rgb = resized.to_rgb8();
    debug!(
        "resampled {}x{} -> {}x{}",
        image.width(),
        image.height(),
        OUTPUT_WIDTH,
        OUTPUT_HEIGHT
    );

    if options.invert_colors {
        imageops::invert(&mut rgb);
    }

    let data = pack_image(&rgb, options.byte_order);
    debug!("packed {} bytes", data.len());

    let text = format_c_array(
        &data,
        options.array_name(),
        options.bytes_per_line,
        OUTPUT_WIDTH,
        OUTPUT_HEIGHT,
    );
    Ok(Conversion { data, text })
}
