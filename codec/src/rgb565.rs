use image::RgbImage;

use crate::options::ByteOrder;
use crate::BYTES_PER_PIXEL;

/// Pack one RGB888 pixel into a 16-bit RGB565 value.
///
/// Red is truncated to its top 5 bits, green to its top 6, blue to its top 5,
/// with red in the most significant bits.
#[inline]
pub fn pack_rgb565(r: u8, g: u8, b: u8) -> u16 {
    ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3)
}

/// Expand a packed RGB565 value back to RGB888. The truncated low bits come
/// back as zero, so the round trip is lossy.
#[inline]
pub fn unpack_rgb565(value: u16) -> (u8, u8, u8) {
    let r = ((value >> 11) & 0x1F) as u8;
    let g = ((value >> 5) & 0x3F) as u8;
    let b = (value & 0x1F) as u8;
    (r << 3, g << 2, b << 3)
}

/// Pack a full RGB image into a byte buffer, two bytes per pixel in the
/// given byte order. Pixels are visited in row-major order, so the output
/// length is always `2 * width * height`.
pub fn pack_image(img: &RgbImage, byte_order: ByteOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity(img.width() as usize * img.height() as usize * BYTES_PER_PIXEL);
    for pixel in img.pixels() {
        let value = pack_rgb565(pixel[0], pixel[1], pixel[2]);
        let bytes = match byte_order {
            ByteOrder::Big => value.to_be_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
        };
        out.extend_from_slice(&bytes);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_pack_primaries() {
        assert_eq!(pack_rgb565(0, 0, 0), 0x0000);
        assert_eq!(pack_rgb565(255, 255, 255), 0xFFFF);
        assert_eq!(pack_rgb565(255, 0, 0), 0xF800);
        assert_eq!(pack_rgb565(0, 255, 0), 0x07E0);
        assert_eq!(pack_rgb565(0, 0, 255), 0x001F);
    }

    #[test]
    fn test_pack_truncates_low_bits() {
        // Values below one quantization step collapse to zero
        assert_eq!(pack_rgb565(7, 3, 7), 0x0000);
        // One step above collapses to the same value as the step itself
        assert_eq!(pack_rgb565(8, 4, 8), pack_rgb565(15, 7, 15));
    }

    #[test]
    fn test_pack_image_row_major() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 255, 0]));
        img.put_pixel(0, 1, Rgb([0, 0, 255]));
        img.put_pixel(1, 1, Rgb([255, 255, 255]));

        let bytes = pack_image(&img, ByteOrder::Big);
        assert_eq!(
            bytes,
            vec![0xF8, 0x00, 0x07, 0xE0, 0x00, 0x1F, 0xFF, 0xFF]
        );
    }

    #[test]
    fn test_byte_order_swaps_pairs() {
        let mut img = RgbImage::new(1, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));

        let be = pack_image(&img, ByteOrder::Big);
        let le = pack_image(&img, ByteOrder::Little);
        assert_eq!(be, vec![0xF8, 0x00]);
        assert_eq!(le, vec![0x00, 0xF8]);
    }
}
