use image::RgbImage;
use proptest::prelude::*;

use rgb565_codec::{format_c_array, pack_image, pack_rgb565, unpack_rgb565, ByteOrder};

fn arb_rgb_image() -> impl Strategy<Value = RgbImage> {
    (1u32..=8, 1u32..=8)
        .prop_flat_map(|(w, h)| {
            let len = (w * h * 3) as usize;
            (Just(w), Just(h), prop::collection::vec(any::<u8>(), len))
        })
        .prop_map(|(w, h, raw)| RgbImage::from_raw(w, h, raw).unwrap())
}

proptest! {
    #[test]
    fn pack_is_deterministic(r: u8, g: u8, b: u8) {
        prop_assert_eq!(pack_rgb565(r, g, b), pack_rgb565(r, g, b));
    }

    #[test]
    fn quantization_error_is_bounded(r: u8, g: u8, b: u8) {
        let (r2, g2, b2) = unpack_rgb565(pack_rgb565(r, g, b));
        // Truncation only ever rounds down
        prop_assert!(r2 <= r && r - r2 <= 7);
        prop_assert!(g2 <= g && g - g2 <= 3);
        prop_assert!(b2 <= b && b - b2 <= 7);
    }

    #[test]
    fn packed_value_survives_a_second_pass(r: u8, g: u8, b: u8) {
        // Quantized channels are fixed points of the pack/unpack pair
        let value = pack_rgb565(r, g, b);
        let (r2, g2, b2) = unpack_rgb565(value);
        prop_assert_eq!(pack_rgb565(r2, g2, b2), value);
    }

    #[test]
    fn byte_orders_are_pairwise_swapped(img in arb_rgb_image()) {
        let be = pack_image(&img, ByteOrder::Big);
        let le = pack_image(&img, ByteOrder::Little);
        prop_assert_eq!(be.len(), le.len());
        prop_assert_eq!(be.len(), img.width() as usize * img.height() as usize * 2);
        for (pair_be, pair_le) in be.chunks(2).zip(le.chunks(2)) {
            prop_assert_eq!(pair_be[0], pair_le[1]);
            prop_assert_eq!(pair_be[1], pair_le[0]);
        }
    }

    #[test]
    fn double_inversion_is_identity(img in arb_rgb_image()) {
        let mut twice = img.clone();
        image::imageops::invert(&mut twice);
        image::imageops::invert(&mut twice);
        prop_assert_eq!(
            pack_image(&twice, ByteOrder::Big),
            pack_image(&img, ByteOrder::Big)
        );
    }

    #[test]
    fn formatted_values_round_trip(
        data in prop::collection::vec(any::<u8>(), 1..200),
        bytes_per_line in 1usize..32,
    ) {
        let text = format_c_array(&data, "t", bytes_per_line, 240, 240);

        let open = text.find('{').unwrap();
        let close = text.find('}').unwrap();
        let parsed: Vec<u8> = text[open + 1..close]
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().unwrap())
            .collect();

        prop_assert_eq!(parsed, data.clone());
        prop_assert!(
            text.ends_with(&format!("// Data size: {} bytes\n", data.len())),
            "data size trailer mismatch"
        );
    }
}
