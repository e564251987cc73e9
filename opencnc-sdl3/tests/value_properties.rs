//! Property-based tests for the value types.
//!
//! - Packed formats decode back to the fields they were built from
//! - Colorspace components survive packing
//! - Integer and float rects agree on interior points

use opencnc_sdl3::*;
use proptest::prelude::*;
use proptest::sample::select;

mod pixel_format_properties {
    use super::*;

    proptest! {
        #[test]
        fn packed_formats_decode(
            pixel_type in select(vec![PixelType::Packed8, PixelType::Packed16, PixelType::Packed32]),
            order in select(PackedOrder::ALL.to_vec()),
            layout in select(PackedLayout::ALL.to_vec()),
            bytes in 1u8..=4,
        ) {
            let f = PixelFormat::define(pixel_type, order.raw(), layout, bytes * 8, bytes);
            prop_assert!(!f.is_fourcc());
            prop_assert_eq!(f.pixel_type(), Some(pixel_type));
            prop_assert_eq!(f.packed_order(), Some(order));
            prop_assert_eq!(f.layout(), Some(layout));
            prop_assert_eq!(f.array_order(), None);
            prop_assert_eq!(f.bits_per_pixel(), bytes * 8);
        }

        #[test]
        fn alpha_follows_packed_order(order in select(PackedOrder::ALL.to_vec())) {
            let f = PixelFormat::define(PixelType::Packed32, order.raw(), PackedLayout::Layout8888, 32, 4);
            let expected = matches!(order, PackedOrder::Argb | PackedOrder::Rgba | PackedOrder::Abgr | PackedOrder::Bgra);
            prop_assert_eq!(f.has_alpha(), expected);
        }
    }
}

mod colorspace_properties {
    use super::*;

    proptest! {
        #[test]
        fn components_survive_packing(
            color_type in select(ColorType::ALL.to_vec()),
            range in select(ColorRange::ALL.to_vec()),
            primaries in select(ColorPrimaries::ALL.to_vec()),
            transfer in select(TransferCharacteristics::ALL.to_vec()),
            matrix in select(MatrixCoefficients::ALL.to_vec()),
            chroma in select(ChromaLocation::ALL.to_vec()),
        ) {
            let cs = Colorspace::define(color_type, range, primaries, transfer, matrix, chroma);
            prop_assert_eq!(cs.color_type(), Some(color_type));
            prop_assert_eq!(cs.range(), Some(range));
            prop_assert_eq!(cs.primaries(), Some(primaries));
            prop_assert_eq!(cs.transfer(), Some(transfer));
            prop_assert_eq!(cs.matrix(), Some(matrix));
            prop_assert_eq!(cs.chroma(), Some(chroma));
            prop_assert_eq!(cs.is_full_range(), range == ColorRange::Full);
            prop_assert_eq!(cs.is_limited_range(), !cs.is_full_range());
        }
    }
}

mod rect_properties {
    use super::*;

    proptest! {
        #[test]
        fn interior_points_agree(
            x in -1000i32..1000,
            y in -1000i32..1000,
            w in 1i32..500,
            h in 1i32..500,
            px in -1500i32..1500,
            py in -1500i32..1500,
        ) {
            let rect = Rect::new(x, y, w, h);
            let inside = rect.contains_point(Point::new(px, py));
            // Float rects also accept the far edges, so only interior hits must match.
            if inside {
                prop_assert!(rect.to_frect().contains_point(FPoint::new(px as f32, py as f32)));
            }
            let strictly_inside = px > x && px < x + w - 1 && py > y && py < y + h - 1;
            if strictly_inside {
                prop_assert!(inside);
            }
            prop_assert!(!rect.is_empty());
        }
    }
}
