//! Pixel format and colorspace codes plus the header macros that pack and
//! unpack them.

use crate::types::{SDL_Colorspace, SDL_PixelFormat};

pub const SDL_ALPHA_OPAQUE: u8 = 255;
pub const SDL_ALPHA_OPAQUE_FLOAT: f32 = 1.0;
pub const SDL_ALPHA_TRANSPARENT: u8 = 0;
pub const SDL_ALPHA_TRANSPARENT_FLOAT: f32 = 0.0;

// ── Pixel type ──────────────────────────────────────────────────

pub const SDL_PIXELTYPE_UNKNOWN: u32 = 0;
pub const SDL_PIXELTYPE_INDEX1: u32 = 1;
pub const SDL_PIXELTYPE_INDEX4: u32 = 2;
pub const SDL_PIXELTYPE_INDEX8: u32 = 3;
pub const SDL_PIXELTYPE_PACKED8: u32 = 4;
pub const SDL_PIXELTYPE_PACKED16: u32 = 5;
pub const SDL_PIXELTYPE_PACKED32: u32 = 6;
pub const SDL_PIXELTYPE_ARRAYU8: u32 = 7;
pub const SDL_PIXELTYPE_ARRAYU16: u32 = 8;
pub const SDL_PIXELTYPE_ARRAYU32: u32 = 9;
pub const SDL_PIXELTYPE_ARRAYF16: u32 = 10;
pub const SDL_PIXELTYPE_ARRAYF32: u32 = 11;
pub const SDL_PIXELTYPE_INDEX2: u32 = 12;

pub const SDL_BITMAPORDER_NONE: u32 = 0;
pub const SDL_BITMAPORDER_4321: u32 = 1;
pub const SDL_BITMAPORDER_1234: u32 = 2;

pub const SDL_PACKEDORDER_NONE: u32 = 0;
pub const SDL_PACKEDORDER_XRGB: u32 = 1;
pub const SDL_PACKEDORDER_RGBX: u32 = 2;
pub const SDL_PACKEDORDER_ARGB: u32 = 3;
pub const SDL_PACKEDORDER_RGBA: u32 = 4;
pub const SDL_PACKEDORDER_XBGR: u32 = 5;
pub const SDL_PACKEDORDER_BGRX: u32 = 6;
pub const SDL_PACKEDORDER_ABGR: u32 = 7;
pub const SDL_PACKEDORDER_BGRA: u32 = 8;

pub const SDL_ARRAYORDER_NONE: u32 = 0;
pub const SDL_ARRAYORDER_RGB: u32 = 1;
pub const SDL_ARRAYORDER_RGBA: u32 = 2;
pub const SDL_ARRAYORDER_ARGB: u32 = 3;
pub const SDL_ARRAYORDER_BGR: u32 = 4;
pub const SDL_ARRAYORDER_BGRA: u32 = 5;
pub const SDL_ARRAYORDER_ABGR: u32 = 6;

pub const SDL_PACKEDLAYOUT_NONE: u32 = 0;
pub const SDL_PACKEDLAYOUT_332: u32 = 1;
pub const SDL_PACKEDLAYOUT_4444: u32 = 2;
pub const SDL_PACKEDLAYOUT_1555: u32 = 3;
pub const SDL_PACKEDLAYOUT_5551: u32 = 4;
pub const SDL_PACKEDLAYOUT_565: u32 = 5;
pub const SDL_PACKEDLAYOUT_8888: u32 = 6;
pub const SDL_PACKEDLAYOUT_2101010: u32 = 7;
pub const SDL_PACKEDLAYOUT_1010102: u32 = 8;

// ── Pixel formats ───────────────────────────────────────────────

pub const SDL_PIXELFORMAT_UNKNOWN: SDL_PixelFormat = 0;
pub const SDL_PIXELFORMAT_INDEX1LSB: SDL_PixelFormat = 0x1110_0100;
pub const SDL_PIXELFORMAT_INDEX1MSB: SDL_PixelFormat = 0x1120_0100;
pub const SDL_PIXELFORMAT_INDEX2LSB: SDL_PixelFormat = 0x1c10_0200;
pub const SDL_PIXELFORMAT_INDEX2MSB: SDL_PixelFormat = 0x1c20_0200;
pub const SDL_PIXELFORMAT_INDEX4LSB: SDL_PixelFormat = 0x1210_0400;
pub const SDL_PIXELFORMAT_INDEX4MSB: SDL_PixelFormat = 0x1220_0400;
pub const SDL_PIXELFORMAT_INDEX8: SDL_PixelFormat = 0x1300_0801;
pub const SDL_PIXELFORMAT_RGB332: SDL_PixelFormat = 0x1411_0801;
pub const SDL_PIXELFORMAT_XRGB4444: SDL_PixelFormat = 0x1512_0c02;
pub const SDL_PIXELFORMAT_XBGR4444: SDL_PixelFormat = 0x1552_0c02;
pub const SDL_PIXELFORMAT_XRGB1555: SDL_PixelFormat = 0x1513_0f02;
pub const SDL_PIXELFORMAT_XBGR1555: SDL_PixelFormat = 0x1553_0f02;
pub const SDL_PIXELFORMAT_ARGB4444: SDL_PixelFormat = 0x1532_1002;
pub const SDL_PIXELFORMAT_RGBA4444: SDL_PixelFormat = 0x1542_1002;
pub const SDL_PIXELFORMAT_ABGR4444: SDL_PixelFormat = 0x1572_1002;
pub const SDL_PIXELFORMAT_BGRA4444: SDL_PixelFormat = 0x1582_1002;
pub const SDL_PIXELFORMAT_ARGB1555: SDL_PixelFormat = 0x1533_1002;
pub const SDL_PIXELFORMAT_RGBA5551: SDL_PixelFormat = 0x1544_1002;
pub const SDL_PIXELFORMAT_ABGR1555: SDL_PixelFormat = 0x1573_1002;
pub const SDL_PIXELFORMAT_BGRA5551: SDL_PixelFormat = 0x1584_1002;
pub const SDL_PIXELFORMAT_RGB565: SDL_PixelFormat = 0x1515_1002;
pub const SDL_PIXELFORMAT_BGR565: SDL_PixelFormat = 0x1555_1002;
pub const SDL_PIXELFORMAT_RGB24: SDL_PixelFormat = 0x1710_1803;
pub const SDL_PIXELFORMAT_BGR24: SDL_PixelFormat = 0x1740_1803;
pub const SDL_PIXELFORMAT_XRGB8888: SDL_PixelFormat = 0x1616_1804;
pub const SDL_PIXELFORMAT_RGBX8888: SDL_PixelFormat = 0x1626_1804;
pub const SDL_PIXELFORMAT_XBGR8888: SDL_PixelFormat = 0x1656_1804;
pub const SDL_PIXELFORMAT_BGRX8888: SDL_PixelFormat = 0x1666_1804;
pub const SDL_PIXELFORMAT_ARGB8888: SDL_PixelFormat = 0x1636_2004;
pub const SDL_PIXELFORMAT_RGBA8888: SDL_PixelFormat = 0x1646_2004;
pub const SDL_PIXELFORMAT_ABGR8888: SDL_PixelFormat = 0x1676_2004;
pub const SDL_PIXELFORMAT_BGRA8888: SDL_PixelFormat = 0x1686_2004;
pub const SDL_PIXELFORMAT_XRGB2101010: SDL_PixelFormat = 0x1617_2004;
pub const SDL_PIXELFORMAT_XBGR2101010: SDL_PixelFormat = 0x1657_2004;
pub const SDL_PIXELFORMAT_ARGB2101010: SDL_PixelFormat = 0x1637_2004;
pub const SDL_PIXELFORMAT_ABGR2101010: SDL_PixelFormat = 0x1677_2004;
pub const SDL_PIXELFORMAT_RGB48: SDL_PixelFormat = 0x1810_3006;
pub const SDL_PIXELFORMAT_BGR48: SDL_PixelFormat = 0x1840_3006;
pub const SDL_PIXELFORMAT_RGBA64: SDL_PixelFormat = 0x1820_4008;
pub const SDL_PIXELFORMAT_ARGB64: SDL_PixelFormat = 0x1830_4008;
pub const SDL_PIXELFORMAT_BGRA64: SDL_PixelFormat = 0x1850_4008;
pub const SDL_PIXELFORMAT_ABGR64: SDL_PixelFormat = 0x1860_4008;
pub const SDL_PIXELFORMAT_RGB48_FLOAT: SDL_PixelFormat = 0x1a10_3006;
pub const SDL_PIXELFORMAT_BGR48_FLOAT: SDL_PixelFormat = 0x1a40_3006;
pub const SDL_PIXELFORMAT_RGBA64_FLOAT: SDL_PixelFormat = 0x1a20_4008;
pub const SDL_PIXELFORMAT_ARGB64_FLOAT: SDL_PixelFormat = 0x1a30_4008;
pub const SDL_PIXELFORMAT_BGRA64_FLOAT: SDL_PixelFormat = 0x1a50_4008;
pub const SDL_PIXELFORMAT_ABGR64_FLOAT: SDL_PixelFormat = 0x1a60_4008;
pub const SDL_PIXELFORMAT_RGB96_FLOAT: SDL_PixelFormat = 0x1b10_600c;
pub const SDL_PIXELFORMAT_BGR96_FLOAT: SDL_PixelFormat = 0x1b40_600c;
pub const SDL_PIXELFORMAT_RGBA128_FLOAT: SDL_PixelFormat = 0x1b20_8010;
pub const SDL_PIXELFORMAT_ARGB128_FLOAT: SDL_PixelFormat = 0x1b30_8010;
pub const SDL_PIXELFORMAT_BGRA128_FLOAT: SDL_PixelFormat = 0x1b50_8010;
pub const SDL_PIXELFORMAT_ABGR128_FLOAT: SDL_PixelFormat = 0x1b60_8010;
pub const SDL_PIXELFORMAT_YV12: SDL_PixelFormat = 0x3231_5659;
pub const SDL_PIXELFORMAT_IYUV: SDL_PixelFormat = 0x5655_5949;
pub const SDL_PIXELFORMAT_YUY2: SDL_PixelFormat = 0x3259_5559;
pub const SDL_PIXELFORMAT_UYVY: SDL_PixelFormat = 0x5956_5955;
pub const SDL_PIXELFORMAT_YVYU: SDL_PixelFormat = 0x5559_5659;
pub const SDL_PIXELFORMAT_NV12: SDL_PixelFormat = 0x3231_564e;
pub const SDL_PIXELFORMAT_NV21: SDL_PixelFormat = 0x3132_564e;
pub const SDL_PIXELFORMAT_P010: SDL_PixelFormat = 0x3031_3050;
pub const SDL_PIXELFORMAT_EXTERNAL_OES: SDL_PixelFormat = 0x2053_454f;

#[cfg(target_endian = "big")]
mod byte_order {
    use super::*;
    pub const SDL_PIXELFORMAT_RGBA32: SDL_PixelFormat = SDL_PIXELFORMAT_RGBA8888;
    pub const SDL_PIXELFORMAT_ARGB32: SDL_PixelFormat = SDL_PIXELFORMAT_ARGB8888;
    pub const SDL_PIXELFORMAT_BGRA32: SDL_PixelFormat = SDL_PIXELFORMAT_BGRA8888;
    pub const SDL_PIXELFORMAT_ABGR32: SDL_PixelFormat = SDL_PIXELFORMAT_ABGR8888;
    pub const SDL_PIXELFORMAT_RGBX32: SDL_PixelFormat = SDL_PIXELFORMAT_RGBX8888;
    pub const SDL_PIXELFORMAT_XRGB32: SDL_PixelFormat = SDL_PIXELFORMAT_XRGB8888;
    pub const SDL_PIXELFORMAT_BGRX32: SDL_PixelFormat = SDL_PIXELFORMAT_BGRX8888;
    pub const SDL_PIXELFORMAT_XBGR32: SDL_PixelFormat = SDL_PIXELFORMAT_XBGR8888;
}

#[cfg(target_endian = "little")]
mod byte_order {
    use super::*;
    pub const SDL_PIXELFORMAT_RGBA32: SDL_PixelFormat = SDL_PIXELFORMAT_ABGR8888;
    pub const SDL_PIXELFORMAT_ARGB32: SDL_PixelFormat = SDL_PIXELFORMAT_BGRA8888;
    pub const SDL_PIXELFORMAT_BGRA32: SDL_PixelFormat = SDL_PIXELFORMAT_ARGB8888;
    pub const SDL_PIXELFORMAT_ABGR32: SDL_PixelFormat = SDL_PIXELFORMAT_RGBA8888;
    pub const SDL_PIXELFORMAT_RGBX32: SDL_PixelFormat = SDL_PIXELFORMAT_XBGR8888;
    pub const SDL_PIXELFORMAT_XRGB32: SDL_PixelFormat = SDL_PIXELFORMAT_BGRX8888;
    pub const SDL_PIXELFORMAT_BGRX32: SDL_PixelFormat = SDL_PIXELFORMAT_XRGB8888;
    pub const SDL_PIXELFORMAT_XBGR32: SDL_PixelFormat = SDL_PIXELFORMAT_RGBX8888;
}

pub use byte_order::*;

// ── Colorspace components ───────────────────────────────────────

pub const SDL_COLOR_TYPE_UNKNOWN: u32 = 0;
pub const SDL_COLOR_TYPE_RGB: u32 = 1;
pub const SDL_COLOR_TYPE_YCBCR: u32 = 2;

pub const SDL_COLOR_RANGE_UNKNOWN: u32 = 0;
pub const SDL_COLOR_RANGE_LIMITED: u32 = 1;
pub const SDL_COLOR_RANGE_FULL: u32 = 2;

pub const SDL_COLOR_PRIMARIES_UNKNOWN: u32 = 0;
pub const SDL_COLOR_PRIMARIES_BT709: u32 = 1;
pub const SDL_COLOR_PRIMARIES_UNSPECIFIED: u32 = 2;
pub const SDL_COLOR_PRIMARIES_BT470M: u32 = 4;
pub const SDL_COLOR_PRIMARIES_BT470BG: u32 = 5;
pub const SDL_COLOR_PRIMARIES_BT601: u32 = 6;
pub const SDL_COLOR_PRIMARIES_SMPTE240: u32 = 7;
pub const SDL_COLOR_PRIMARIES_GENERIC_FILM: u32 = 8;
pub const SDL_COLOR_PRIMARIES_BT2020: u32 = 9;
pub const SDL_COLOR_PRIMARIES_XYZ: u32 = 10;
pub const SDL_COLOR_PRIMARIES_SMPTE431: u32 = 11;
pub const SDL_COLOR_PRIMARIES_SMPTE432: u32 = 12;
pub const SDL_COLOR_PRIMARIES_EBU3213: u32 = 22;
pub const SDL_COLOR_PRIMARIES_CUSTOM: u32 = 31;

pub const SDL_TRANSFER_CHARACTERISTICS_UNKNOWN: u32 = 0;
pub const SDL_TRANSFER_CHARACTERISTICS_BT709: u32 = 1;
pub const SDL_TRANSFER_CHARACTERISTICS_UNSPECIFIED: u32 = 2;
pub const SDL_TRANSFER_CHARACTERISTICS_GAMMA22: u32 = 4;
pub const SDL_TRANSFER_CHARACTERISTICS_GAMMA28: u32 = 5;
pub const SDL_TRANSFER_CHARACTERISTICS_BT601: u32 = 6;
pub const SDL_TRANSFER_CHARACTERISTICS_SMPTE240: u32 = 7;
pub const SDL_TRANSFER_CHARACTERISTICS_LINEAR: u32 = 8;
pub const SDL_TRANSFER_CHARACTERISTICS_LOG100: u32 = 9;
pub const SDL_TRANSFER_CHARACTERISTICS_LOG100_SQRT10: u32 = 10;
pub const SDL_TRANSFER_CHARACTERISTICS_IEC61966: u32 = 11;
pub const SDL_TRANSFER_CHARACTERISTICS_BT1361: u32 = 12;
pub const SDL_TRANSFER_CHARACTERISTICS_SRGB: u32 = 13;
pub const SDL_TRANSFER_CHARACTERISTICS_BT2020_10BIT: u32 = 14;
pub const SDL_TRANSFER_CHARACTERISTICS_BT2020_12BIT: u32 = 15;
pub const SDL_TRANSFER_CHARACTERISTICS_PQ: u32 = 16;
pub const SDL_TRANSFER_CHARACTERISTICS_SMPTE428: u32 = 17;
pub const SDL_TRANSFER_CHARACTERISTICS_HLG: u32 = 18;
pub const SDL_TRANSFER_CHARACTERISTICS_CUSTOM: u32 = 31;

pub const SDL_MATRIX_COEFFICIENTS_IDENTITY: u32 = 0;
pub const SDL_MATRIX_COEFFICIENTS_BT709: u32 = 1;
pub const SDL_MATRIX_COEFFICIENTS_UNSPECIFIED: u32 = 2;
pub const SDL_MATRIX_COEFFICIENTS_FCC: u32 = 4;
pub const SDL_MATRIX_COEFFICIENTS_BT470BG: u32 = 5;
pub const SDL_MATRIX_COEFFICIENTS_BT601: u32 = 6;
pub const SDL_MATRIX_COEFFICIENTS_SMPTE240: u32 = 7;
pub const SDL_MATRIX_COEFFICIENTS_YCGCO: u32 = 8;
pub const SDL_MATRIX_COEFFICIENTS_BT2020_NCL: u32 = 9;
pub const SDL_MATRIX_COEFFICIENTS_BT2020_CL: u32 = 10;
pub const SDL_MATRIX_COEFFICIENTS_SMPTE2085: u32 = 11;
pub const SDL_MATRIX_COEFFICIENTS_CHROMA_DERIVED_NCL: u32 = 12;
pub const SDL_MATRIX_COEFFICIENTS_CHROMA_DERIVED_CL: u32 = 13;
pub const SDL_MATRIX_COEFFICIENTS_ICTCP: u32 = 14;
pub const SDL_MATRIX_COEFFICIENTS_CUSTOM: u32 = 31;

pub const SDL_CHROMA_LOCATION_NONE: u32 = 0;
pub const SDL_CHROMA_LOCATION_LEFT: u32 = 1;
pub const SDL_CHROMA_LOCATION_CENTER: u32 = 2;
pub const SDL_CHROMA_LOCATION_TOPLEFT: u32 = 3;

// ── Colorspaces ─────────────────────────────────────────────────

pub const SDL_COLORSPACE_UNKNOWN: SDL_Colorspace = 0;
pub const SDL_COLORSPACE_SRGB: SDL_Colorspace = 0x1200_05a0;
pub const SDL_COLORSPACE_SRGB_LINEAR: SDL_Colorspace = 0x1200_0500;
pub const SDL_COLORSPACE_HDR10: SDL_Colorspace = 0x1200_2600;
pub const SDL_COLORSPACE_JPEG: SDL_Colorspace = 0x2200_04c6;
pub const SDL_COLORSPACE_BT601_LIMITED: SDL_Colorspace = 0x2110_18c6;
pub const SDL_COLORSPACE_BT601_FULL: SDL_Colorspace = 0x2210_18c6;
pub const SDL_COLORSPACE_BT709_LIMITED: SDL_Colorspace = 0x2110_0421;
pub const SDL_COLORSPACE_BT709_FULL: SDL_Colorspace = 0x2210_0421;
pub const SDL_COLORSPACE_BT2020_LIMITED: SDL_Colorspace = 0x2110_2609;
pub const SDL_COLORSPACE_BT2020_FULL: SDL_Colorspace = 0x2210_2609;
pub const SDL_COLORSPACE_RGB_DEFAULT: SDL_Colorspace = SDL_COLORSPACE_SRGB;
pub const SDL_COLORSPACE_YUV_DEFAULT: SDL_Colorspace = SDL_COLORSPACE_JPEG;

// ── Header macros ───────────────────────────────────────────────

/// Packs four ASCII bytes into a little-endian code.
#[must_use]
pub const fn SDL_FOURCC(a: u8, b: u8, c: u8, d: u8) -> u32 {
    (a as u32) | (b as u32) << 8 | (c as u32) << 16 | (d as u32) << 24
}

#[must_use]
pub const fn SDL_DEFINE_PIXELFOURCC(a: u8, b: u8, c: u8, d: u8) -> SDL_PixelFormat {
    SDL_FOURCC(a, b, c, d)
}

#[must_use]
pub const fn SDL_DEFINE_PIXELFORMAT(
    pixel_type: u32,
    order: u32,
    layout: u32,
    bits: u8,
    bytes: u8,
) -> SDL_PixelFormat {
    1 << 28 | pixel_type << 24 | order << 20 | layout << 16 | (bits as u32) << 8 | bytes as u32
}

#[must_use]
pub const fn SDL_PIXELFLAG(format: SDL_PixelFormat) -> u32 {
    (format >> 28) & 0x0f
}

#[must_use]
pub const fn SDL_PIXELTYPE(format: SDL_PixelFormat) -> u32 {
    (format >> 24) & 0x0f
}

#[must_use]
pub const fn SDL_PIXELORDER(format: SDL_PixelFormat) -> u32 {
    (format >> 20) & 0x0f
}

#[must_use]
pub const fn SDL_PIXELLAYOUT(format: SDL_PixelFormat) -> u32 {
    (format >> 16) & 0x0f
}

#[must_use]
pub const fn SDL_ISPIXELFORMAT_FOURCC(format: SDL_PixelFormat) -> bool {
    format != 0 && SDL_PIXELFLAG(format) != 1
}

#[must_use]
pub const fn SDL_BITSPERPIXEL(format: SDL_PixelFormat) -> u8 {
    if SDL_ISPIXELFORMAT_FOURCC(format) {
        0
    } else {
        ((format >> 8) & 0xff) as u8
    }
}

#[must_use]
pub const fn SDL_BYTESPERPIXEL(format: SDL_PixelFormat) -> u8 {
    if SDL_ISPIXELFORMAT_FOURCC(format) {
        match format {
            SDL_PIXELFORMAT_YUY2 | SDL_PIXELFORMAT_UYVY | SDL_PIXELFORMAT_YVYU
            | SDL_PIXELFORMAT_P010 => 2,
            _ => 1,
        }
    } else {
        (format & 0xff) as u8
    }
}

#[must_use]
pub const fn SDL_ISPIXELFORMAT_INDEXED(format: SDL_PixelFormat) -> bool {
    !SDL_ISPIXELFORMAT_FOURCC(format)
        && matches!(
            SDL_PIXELTYPE(format),
            SDL_PIXELTYPE_INDEX1 | SDL_PIXELTYPE_INDEX2 | SDL_PIXELTYPE_INDEX4 | SDL_PIXELTYPE_INDEX8
        )
}

#[must_use]
pub const fn SDL_ISPIXELFORMAT_PACKED(format: SDL_PixelFormat) -> bool {
    !SDL_ISPIXELFORMAT_FOURCC(format)
        && matches!(
            SDL_PIXELTYPE(format),
            SDL_PIXELTYPE_PACKED8 | SDL_PIXELTYPE_PACKED16 | SDL_PIXELTYPE_PACKED32
        )
}

#[must_use]
pub const fn SDL_ISPIXELFORMAT_ARRAY(format: SDL_PixelFormat) -> bool {
    !SDL_ISPIXELFORMAT_FOURCC(format)
        && matches!(
            SDL_PIXELTYPE(format),
            SDL_PIXELTYPE_ARRAYU8
                | SDL_PIXELTYPE_ARRAYU16
                | SDL_PIXELTYPE_ARRAYU32
                | SDL_PIXELTYPE_ARRAYF16
                | SDL_PIXELTYPE_ARRAYF32
        )
}

#[must_use]
pub const fn SDL_ISPIXELFORMAT_10BIT(format: SDL_PixelFormat) -> bool {
    !SDL_ISPIXELFORMAT_FOURCC(format)
        && SDL_PIXELTYPE(format) == SDL_PIXELTYPE_PACKED32
        && SDL_PIXELLAYOUT(format) == SDL_PACKEDLAYOUT_2101010
}

#[must_use]
pub const fn SDL_ISPIXELFORMAT_FLOAT(format: SDL_PixelFormat) -> bool {
    !SDL_ISPIXELFORMAT_FOURCC(format)
        && matches!(
            SDL_PIXELTYPE(format),
            SDL_PIXELTYPE_ARRAYF16 | SDL_PIXELTYPE_ARRAYF32
        )
}

#[must_use]
pub const fn SDL_ISPIXELFORMAT_ALPHA(format: SDL_PixelFormat) -> bool {
    (SDL_ISPIXELFORMAT_PACKED(format)
        && matches!(
            SDL_PIXELORDER(format),
            SDL_PACKEDORDER_ARGB | SDL_PACKEDORDER_RGBA | SDL_PACKEDORDER_ABGR | SDL_PACKEDORDER_BGRA
        ))
        || (SDL_ISPIXELFORMAT_ARRAY(format)
            && matches!(
                SDL_PIXELORDER(format),
                SDL_ARRAYORDER_ARGB | SDL_ARRAYORDER_RGBA | SDL_ARRAYORDER_ABGR | SDL_ARRAYORDER_BGRA
            ))
}

#[must_use]
pub const fn SDL_DEFINE_COLORSPACE(
    color_type: u32,
    range: u32,
    primaries: u32,
    transfer: u32,
    matrix: u32,
    chroma: u32,
) -> SDL_Colorspace {
    color_type << 28 | range << 24 | chroma << 20 | primaries << 10 | transfer << 5 | matrix
}

#[must_use]
pub const fn SDL_COLORSPACETYPE(cspace: SDL_Colorspace) -> u32 {
    (cspace >> 28) & 0x0f
}

#[must_use]
pub const fn SDL_COLORSPACERANGE(cspace: SDL_Colorspace) -> u32 {
    (cspace >> 24) & 0x0f
}

#[must_use]
pub const fn SDL_COLORSPACECHROMA(cspace: SDL_Colorspace) -> u32 {
    (cspace >> 20) & 0x0f
}

#[must_use]
pub const fn SDL_COLORSPACEPRIMARIES(cspace: SDL_Colorspace) -> u32 {
    (cspace >> 10) & 0x1f
}

#[must_use]
pub const fn SDL_COLORSPACETRANSFER(cspace: SDL_Colorspace) -> u32 {
    (cspace >> 5) & 0x1f
}

#[must_use]
pub const fn SDL_COLORSPACEMATRIX(cspace: SDL_Colorspace) -> u32 {
    cspace & 0x1f
}

#[must_use]
pub const fn SDL_ISCOLORSPACE_MATRIX_BT601(cspace: SDL_Colorspace) -> bool {
    matches!(
        SDL_COLORSPACEMATRIX(cspace),
        SDL_MATRIX_COEFFICIENTS_BT601 | SDL_MATRIX_COEFFICIENTS_BT470BG
    )
}

#[must_use]
pub const fn SDL_ISCOLORSPACE_MATRIX_BT709(cspace: SDL_Colorspace) -> bool {
    SDL_COLORSPACEMATRIX(cspace) == SDL_MATRIX_COEFFICIENTS_BT709
}

#[must_use]
pub const fn SDL_ISCOLORSPACE_MATRIX_BT2020_NCL(cspace: SDL_Colorspace) -> bool {
    SDL_COLORSPACEMATRIX(cspace) == SDL_MATRIX_COEFFICIENTS_BT2020_NCL
}

#[must_use]
pub const fn SDL_ISCOLORSPACE_LIMITED_RANGE(cspace: SDL_Colorspace) -> bool {
    SDL_COLORSPACERANGE(cspace) != SDL_COLOR_RANGE_FULL
}

#[must_use]
pub const fn SDL_ISCOLORSPACE_FULL_RANGE(cspace: SDL_Colorspace) -> bool {
    SDL_COLORSPACERANGE(cspace) == SDL_COLOR_RANGE_FULL
}
