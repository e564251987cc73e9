use opencnc_sdl3_sys::*;

// ── Packing ─────────────────────────────────────────────────────

#[test]
fn define_pixelformat_matches_header_constants() {
    assert_eq!(
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED32, SDL_PACKEDORDER_RGBA, SDL_PACKEDLAYOUT_8888, 32, 4),
        SDL_PIXELFORMAT_RGBA8888
    );
    assert_eq!(
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_PACKED16, SDL_PACKEDORDER_XRGB, SDL_PACKEDLAYOUT_565, 16, 2),
        SDL_PIXELFORMAT_RGB565
    );
    assert_eq!(
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_INDEX8, 0, 0, 8, 1),
        SDL_PIXELFORMAT_INDEX8
    );
    assert_eq!(
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_ARRAYU8, SDL_ARRAYORDER_RGB, 0, 24, 3),
        SDL_PIXELFORMAT_RGB24
    );
    assert_eq!(
        SDL_DEFINE_PIXELFORMAT(SDL_PIXELTYPE_ARRAYF32, SDL_ARRAYORDER_ABGR, 0, 128, 16),
        SDL_PIXELFORMAT_ABGR128_FLOAT
    );
}

#[test]
fn fourcc_codes() {
    assert_eq!(SDL_DEFINE_PIXELFOURCC(b'Y', b'V', b'1', b'2'), SDL_PIXELFORMAT_YV12);
    assert_eq!(SDL_DEFINE_PIXELFOURCC(b'I', b'Y', b'U', b'V'), SDL_PIXELFORMAT_IYUV);
    assert_eq!(SDL_DEFINE_PIXELFOURCC(b'N', b'V', b'1', b'2'), SDL_PIXELFORMAT_NV12);
    assert_eq!(SDL_DEFINE_PIXELFOURCC(b'P', b'0', b'1', b'0'), SDL_PIXELFORMAT_P010);
    assert_eq!(SDL_DEFINE_PIXELFOURCC(b'O', b'E', b'S', b' '), SDL_PIXELFORMAT_EXTERNAL_OES);
}

// ── Extraction ──────────────────────────────────────────────────

#[test]
fn extract_fields_from_argb8888() {
    let f = SDL_PIXELFORMAT_ARGB8888;
    assert_eq!(SDL_PIXELFLAG(f), 1);
    assert_eq!(SDL_PIXELTYPE(f), SDL_PIXELTYPE_PACKED32);
    assert_eq!(SDL_PIXELORDER(f), SDL_PACKEDORDER_ARGB);
    assert_eq!(SDL_PIXELLAYOUT(f), SDL_PACKEDLAYOUT_8888);
    assert_eq!(SDL_BITSPERPIXEL(f), 32);
    assert_eq!(SDL_BYTESPERPIXEL(f), 4);
}

#[test]
fn fourcc_formats_report_zero_bits() {
    for f in [SDL_PIXELFORMAT_YV12, SDL_PIXELFORMAT_NV12, SDL_PIXELFORMAT_YUY2] {
        assert!(SDL_ISPIXELFORMAT_FOURCC(f));
        assert_eq!(SDL_BITSPERPIXEL(f), 0);
    }
}

#[test]
fn fourcc_bytes_per_pixel() {
    assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_YUY2), 2);
    assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_UYVY), 2);
    assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_YVYU), 2);
    assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_P010), 2);
    assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_YV12), 1);
    assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_NV21), 1);
}

#[test]
fn unknown_is_not_fourcc() {
    assert!(!SDL_ISPIXELFORMAT_FOURCC(SDL_PIXELFORMAT_UNKNOWN));
    assert_eq!(SDL_BYTESPERPIXEL(SDL_PIXELFORMAT_UNKNOWN), 0);
}

// ── Classification ──────────────────────────────────────────────

#[test]
fn indexed_formats() {
    for f in [
        SDL_PIXELFORMAT_INDEX1LSB,
        SDL_PIXELFORMAT_INDEX2MSB,
        SDL_PIXELFORMAT_INDEX4LSB,
        SDL_PIXELFORMAT_INDEX8,
    ] {
        assert!(SDL_ISPIXELFORMAT_INDEXED(f), "{f:#x}");
        assert!(!SDL_ISPIXELFORMAT_PACKED(f));
        assert!(!SDL_ISPIXELFORMAT_ALPHA(f));
    }
}

#[test]
fn alpha_formats() {
    assert!(SDL_ISPIXELFORMAT_ALPHA(SDL_PIXELFORMAT_RGBA8888));
    assert!(SDL_ISPIXELFORMAT_ALPHA(SDL_PIXELFORMAT_ARGB2101010));
    assert!(SDL_ISPIXELFORMAT_ALPHA(SDL_PIXELFORMAT_RGBA64_FLOAT));
    assert!(!SDL_ISPIXELFORMAT_ALPHA(SDL_PIXELFORMAT_XRGB8888));
    assert!(!SDL_ISPIXELFORMAT_ALPHA(SDL_PIXELFORMAT_RGB24));
    assert!(!SDL_ISPIXELFORMAT_ALPHA(SDL_PIXELFORMAT_NV12));
}

#[test]
fn ten_bit_and_float_formats() {
    assert!(SDL_ISPIXELFORMAT_10BIT(SDL_PIXELFORMAT_XRGB2101010));
    assert!(!SDL_ISPIXELFORMAT_10BIT(SDL_PIXELFORMAT_XRGB8888));
    assert!(SDL_ISPIXELFORMAT_FLOAT(SDL_PIXELFORMAT_RGB96_FLOAT));
    assert!(SDL_ISPIXELFORMAT_FLOAT(SDL_PIXELFORMAT_ABGR64_FLOAT));
    assert!(!SDL_ISPIXELFORMAT_FLOAT(SDL_PIXELFORMAT_RGBA64));
    assert!(SDL_ISPIXELFORMAT_ARRAY(SDL_PIXELFORMAT_RGBA64));
}

#[test]
fn byte_order_aliases_are_byte_arrays() {
    // On either endianness RGBA32 resolves to the packed format whose bytes in
    // memory are R, G, B, A.
    if cfg!(target_endian = "little") {
        assert_eq!(SDL_PIXELFORMAT_RGBA32, SDL_PIXELFORMAT_ABGR8888);
        assert_eq!(SDL_PIXELFORMAT_XRGB32, SDL_PIXELFORMAT_BGRX8888);
    } else {
        assert_eq!(SDL_PIXELFORMAT_RGBA32, SDL_PIXELFORMAT_RGBA8888);
        assert_eq!(SDL_PIXELFORMAT_XRGB32, SDL_PIXELFORMAT_XRGB8888);
    }
}

// ── Colorspace ──────────────────────────────────────────────────

#[test]
fn define_colorspace_matches_constants() {
    assert_eq!(
        SDL_DEFINE_COLORSPACE(
            SDL_COLOR_TYPE_RGB,
            SDL_COLOR_RANGE_FULL,
            SDL_COLOR_PRIMARIES_BT709,
            SDL_TRANSFER_CHARACTERISTICS_SRGB,
            SDL_MATRIX_COEFFICIENTS_IDENTITY,
            SDL_CHROMA_LOCATION_NONE,
        ),
        SDL_COLORSPACE_SRGB
    );
    assert_eq!(
        SDL_DEFINE_COLORSPACE(
            SDL_COLOR_TYPE_YCBCR,
            SDL_COLOR_RANGE_LIMITED,
            SDL_COLOR_PRIMARIES_BT2020,
            SDL_TRANSFER_CHARACTERISTICS_PQ,
            SDL_MATRIX_COEFFICIENTS_BT2020_NCL,
            SDL_CHROMA_LOCATION_LEFT,
        ),
        SDL_COLORSPACE_BT2020_LIMITED
    );
    assert_eq!(
        SDL_DEFINE_COLORSPACE(
            SDL_COLOR_TYPE_YCBCR,
            SDL_COLOR_RANGE_FULL,
            SDL_COLOR_PRIMARIES_BT709,
            SDL_TRANSFER_CHARACTERISTICS_BT601,
            SDL_MATRIX_COEFFICIENTS_BT601,
            SDL_CHROMA_LOCATION_NONE,
        ),
        SDL_COLORSPACE_JPEG
    );
}

#[test]
fn colorspace_extractors() {
    let cs = SDL_COLORSPACE_BT709_LIMITED;
    assert_eq!(SDL_COLORSPACETYPE(cs), SDL_COLOR_TYPE_YCBCR);
    assert_eq!(SDL_COLORSPACERANGE(cs), SDL_COLOR_RANGE_LIMITED);
    assert_eq!(SDL_COLORSPACECHROMA(cs), SDL_CHROMA_LOCATION_LEFT);
    assert_eq!(SDL_COLORSPACEPRIMARIES(cs), SDL_COLOR_PRIMARIES_BT709);
    assert_eq!(SDL_COLORSPACETRANSFER(cs), SDL_TRANSFER_CHARACTERISTICS_BT709);
    assert_eq!(SDL_COLORSPACEMATRIX(cs), SDL_MATRIX_COEFFICIENTS_BT709);
}

#[test]
fn colorspace_predicates() {
    assert!(SDL_ISCOLORSPACE_MATRIX_BT601(SDL_COLORSPACE_BT601_FULL));
    assert!(SDL_ISCOLORSPACE_MATRIX_BT601(SDL_COLORSPACE_JPEG));
    assert!(SDL_ISCOLORSPACE_MATRIX_BT709(SDL_COLORSPACE_BT709_FULL));
    assert!(SDL_ISCOLORSPACE_MATRIX_BT2020_NCL(SDL_COLORSPACE_BT2020_FULL));
    assert!(SDL_ISCOLORSPACE_LIMITED_RANGE(SDL_COLORSPACE_BT601_LIMITED));
    assert!(SDL_ISCOLORSPACE_FULL_RANGE(SDL_COLORSPACE_SRGB));
    assert!(!SDL_ISCOLORSPACE_FULL_RANGE(SDL_COLORSPACE_BT2020_LIMITED));
}
