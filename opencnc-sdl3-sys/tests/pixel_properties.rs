//! Property-based tests for the header macros.
//!
//! - Packed pixel formats never look like FOURCC codes
//! - Colorspace fields survive packing as long as they fit their bit width
//! - Header rect predicates agree with each other

use opencnc_sdl3_sys::*;
use proptest::prelude::*;

mod pixel_format_properties {
    use super::*;

    proptest! {
        #[test]
        fn defined_formats_are_never_fourcc(
            pixel_type in 0u32..=12,
            order in 0u32..=8,
            layout in 0u32..=8,
            bits in any::<u8>(),
            bytes in any::<u8>(),
        ) {
            let f = SDL_DEFINE_PIXELFORMAT(pixel_type, order, layout, bits, bytes);
            prop_assert!(!SDL_ISPIXELFORMAT_FOURCC(f));
            prop_assert_eq!(SDL_PIXELTYPE(f), pixel_type);
            prop_assert_eq!(SDL_PIXELORDER(f), order);
            prop_assert_eq!(SDL_PIXELLAYOUT(f), layout);
            prop_assert_eq!(SDL_BITSPERPIXEL(f), bits);
            prop_assert_eq!(SDL_BYTESPERPIXEL(f), bytes);
        }

        #[test]
        fn fourcc_with_high_nibble_other_than_one(a in 0x20u8..0x7f, b in 0x20u8..0x7f, c in 0x20u8..0x7f, d in 0x20u8..0x7f) {
            let f = SDL_DEFINE_PIXELFOURCC(a, b, c, d);
            prop_assume!(SDL_PIXELFLAG(f) != 1);
            prop_assert!(SDL_ISPIXELFORMAT_FOURCC(f));
            prop_assert_eq!(SDL_BITSPERPIXEL(f), 0);
            prop_assert!(!SDL_ISPIXELFORMAT_INDEXED(f));
            prop_assert!(!SDL_ISPIXELFORMAT_ALPHA(f));
        }
    }
}

mod colorspace_properties {
    use super::*;

    proptest! {
        #[test]
        fn fields_survive_packing(
            color_type in 0u32..16,
            range in 0u32..16,
            primaries in 0u32..32,
            transfer in 0u32..32,
            matrix in 0u32..32,
            chroma in 0u32..16,
        ) {
            let cs = SDL_DEFINE_COLORSPACE(color_type, range, primaries, transfer, matrix, chroma);
            prop_assert_eq!(SDL_COLORSPACETYPE(cs), color_type);
            prop_assert_eq!(SDL_COLORSPACERANGE(cs), range);
            prop_assert_eq!(SDL_COLORSPACEPRIMARIES(cs), primaries);
            prop_assert_eq!(SDL_COLORSPACETRANSFER(cs), transfer);
            prop_assert_eq!(SDL_COLORSPACEMATRIX(cs), matrix);
            prop_assert_eq!(SDL_COLORSPACECHROMA(cs), chroma);
            prop_assert_ne!(SDL_ISCOLORSPACE_FULL_RANGE(cs), SDL_ISCOLORSPACE_LIMITED_RANGE(cs));
        }
    }
}

mod rect_properties {
    use super::*;

    proptest! {
        #[test]
        fn empty_rects_contain_no_points(
            x in -100i32..100, y in -100i32..100,
            w in -10i32..=0, h in -10i32..10,
            px in -200i32..200, py in -200i32..200,
        ) {
            let r = SDL_Rect { x, y, w, h };
            let p = SDL_Point { x: px, y: py };
            prop_assert!(SDL_RectEmpty(&r));
            prop_assert!(!SDL_PointInRect(&p, &r));
        }

        #[test]
        fn origin_is_inside_non_empty_rect(x in -100i32..100, y in -100i32..100, w in 1i32..100, h in 1i32..100) {
            let r = SDL_Rect { x, y, w, h };
            let origin = SDL_Point { x, y };
            let past_right = SDL_Point { x: x + w, y };
            prop_assert!(SDL_PointInRect(&origin, &r));
            prop_assert!(!SDL_PointInRect(&past_right, &r));
        }
    }
}
