//! Image to RGB565 C-array codec
//!
//! Converts a decoded raster image into a fixed 240×240 RGB565 byte buffer
//! (byte-swapped per a selectable endianness) and renders it as a C source
//! array literal. The pipeline is a single synchronous pass:
//! resample → optional color inversion → pack → format.

mod convert;
mod error;
mod format;
mod options;
mod output;
mod rgb565;

pub use convert::{convert, load_image, Conversion};
pub use error::Error;
pub use format::format_c_array;
pub use options::{parse_bytes_per_line, ByteOrder, ConvertOptions};
pub use output::write_output;
pub use rgb565::{pack_image, pack_rgb565, unpack_rgb565};

/// Fixed output width in pixels
pub const OUTPUT_WIDTH: u32 = 240;

/// Fixed output height in pixels
pub const OUTPUT_HEIGHT: u32 = 240;

/// Bytes per packed RGB565 pixel
pub const BYTES_PER_PIXEL: usize = 2;

/// Total packed output size in bytes, independent of the source image
pub const OUTPUT_DATA_SIZE: usize = (OUTPUT_WIDTH * OUTPUT_HEIGHT) as usize * BYTES_PER_PIXEL;

/// Default number of byte literals per generated source line
pub const DEFAULT_BYTES_PER_LINE: usize = 12;

/// Default name of the generated array
pub const DEFAULT_ARRAY_NAME: &str = "picture_data";
