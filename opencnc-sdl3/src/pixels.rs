//! Pixel formats, colorspaces, colors and palettes.
//!
//! [`PixelFormat`] and [`Colorspace`] wrap the packed 32-bit codes SDL uses.
//! Their field accessors decode the bit layout in Rust; naming, mask lookup and
//! RGB mapping go through SDL.

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use opencnc_sdl3_sys as sys;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Sdl3Error, Sdl3Result, check, last_error};
use crate::macros::native_enum;
use crate::native::{api, borrowed_string, to_c_int};

pub const ALPHA_OPAQUE: u8 = sys::SDL_ALPHA_OPAQUE;
pub const ALPHA_OPAQUE_FLOAT: f32 = sys::SDL_ALPHA_OPAQUE_FLOAT;
pub const ALPHA_TRANSPARENT: u8 = sys::SDL_ALPHA_TRANSPARENT;
pub const ALPHA_TRANSPARENT_FLOAT: f32 = sys::SDL_ALPHA_TRANSPARENT_FLOAT;

native_enum! {
    pub enum PixelType: u32 {
        Unknown = sys::SDL_PIXELTYPE_UNKNOWN,
        Index1 = sys::SDL_PIXELTYPE_INDEX1,
        Index4 = sys::SDL_PIXELTYPE_INDEX4,
        Index8 = sys::SDL_PIXELTYPE_INDEX8,
        Packed8 = sys::SDL_PIXELTYPE_PACKED8,
        Packed16 = sys::SDL_PIXELTYPE_PACKED16,
        Packed32 = sys::SDL_PIXELTYPE_PACKED32,
        ArrayU8 = sys::SDL_PIXELTYPE_ARRAYU8,
        ArrayU16 = sys::SDL_PIXELTYPE_ARRAYU16,
        ArrayU32 = sys::SDL_PIXELTYPE_ARRAYU32,
        ArrayF16 = sys::SDL_PIXELTYPE_ARRAYF16,
        ArrayF32 = sys::SDL_PIXELTYPE_ARRAYF32,
        Index2 = sys::SDL_PIXELTYPE_INDEX2,
    }
}

native_enum! {
    /// Bit order of indexed formats.
    pub enum BitmapOrder: u32 {
        None = sys::SDL_BITMAPORDER_NONE,
        Order4321 = sys::SDL_BITMAPORDER_4321,
        Order1234 = sys::SDL_BITMAPORDER_1234,
    }
}

native_enum! {
    /// Channel order of packed formats.
    pub enum PackedOrder: u32 {
        None = sys::SDL_PACKEDORDER_NONE,
        Xrgb = sys::SDL_PACKEDORDER_XRGB,
        Rgbx = sys::SDL_PACKEDORDER_RGBX,
        Argb = sys::SDL_PACKEDORDER_ARGB,
        Rgba = sys::SDL_PACKEDORDER_RGBA,
        Xbgr = sys::SDL_PACKEDORDER_XBGR,
        Bgrx = sys::SDL_PACKEDORDER_BGRX,
        Abgr = sys::SDL_PACKEDORDER_ABGR,
        Bgra = sys::SDL_PACKEDORDER_BGRA,
    }
}

native_enum! {
    /// Channel order of array formats.
    pub enum ArrayOrder: u32 {
        None = sys::SDL_ARRAYORDER_NONE,
        Rgb = sys::SDL_ARRAYORDER_RGB,
        Rgba = sys::SDL_ARRAYORDER_RGBA,
        Argb = sys::SDL_ARRAYORDER_ARGB,
        Bgr = sys::SDL_ARRAYORDER_BGR,
        Bgra = sys::SDL_ARRAYORDER_BGRA,
        Abgr = sys::SDL_ARRAYORDER_ABGR,
    }
}

native_enum! {
    /// Bit widths of the channels of packed formats.
    pub enum PackedLayout: u32 {
        None = sys::SDL_PACKEDLAYOUT_NONE,
        Layout332 = sys::SDL_PACKEDLAYOUT_332,
        Layout4444 = sys::SDL_PACKEDLAYOUT_4444,
        Layout1555 = sys::SDL_PACKEDLAYOUT_1555,
        Layout5551 = sys::SDL_PACKEDLAYOUT_5551,
        Layout565 = sys::SDL_PACKEDLAYOUT_565,
        Layout8888 = sys::SDL_PACKEDLAYOUT_8888,
        Layout2101010 = sys::SDL_PACKEDLAYOUT_2101010,
        Layout1010102 = sys::SDL_PACKEDLAYOUT_1010102,
    }
}

// ── PixelFormat ─────────────────────────────────────────────────

/// A packed pixel format code.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelFormat(pub u32);

impl PixelFormat {
    pub const UNKNOWN: Self = Self(sys::SDL_PIXELFORMAT_UNKNOWN);
    pub const INDEX1LSB: Self = Self(sys::SDL_PIXELFORMAT_INDEX1LSB);
    pub const INDEX1MSB: Self = Self(sys::SDL_PIXELFORMAT_INDEX1MSB);
    pub const INDEX2LSB: Self = Self(sys::SDL_PIXELFORMAT_INDEX2LSB);
    pub const INDEX2MSB: Self = Self(sys::SDL_PIXELFORMAT_INDEX2MSB);
    pub const INDEX4LSB: Self = Self(sys::SDL_PIXELFORMAT_INDEX4LSB);
    pub const INDEX4MSB: Self = Self(sys::SDL_PIXELFORMAT_INDEX4MSB);
    pub const INDEX8: Self = Self(sys::SDL_PIXELFORMAT_INDEX8);
    pub const RGB332: Self = Self(sys::SDL_PIXELFORMAT_RGB332);
    pub const XRGB4444: Self = Self(sys::SDL_PIXELFORMAT_XRGB4444);
    pub const XBGR4444: Self = Self(sys::SDL_PIXELFORMAT_XBGR4444);
    pub const XRGB1555: Self = Self(sys::SDL_PIXELFORMAT_XRGB1555);
    pub const XBGR1555: Self = Self(sys::SDL_PIXELFORMAT_XBGR1555);
    pub const ARGB4444: Self = Self(sys::SDL_PIXELFORMAT_ARGB4444);
    pub const RGBA4444: Self = Self(sys::SDL_PIXELFORMAT_RGBA4444);
    pub const ABGR4444: Self = Self(sys::SDL_PIXELFORMAT_ABGR4444);
    pub const BGRA4444: Self = Self(sys::SDL_PIXELFORMAT_BGRA4444);
    pub const ARGB1555: Self = Self(sys::SDL_PIXELFORMAT_ARGB1555);
    pub const RGBA5551: Self = Self(sys::SDL_PIXELFORMAT_RGBA5551);
    pub const ABGR1555: Self = Self(sys::SDL_PIXELFORMAT_ABGR1555);
    pub const BGRA5551: Self = Self(sys::SDL_PIXELFORMAT_BGRA5551);
    pub const RGB565: Self = Self(sys::SDL_PIXELFORMAT_RGB565);
    pub const BGR565: Self = Self(sys::SDL_PIXELFORMAT_BGR565);
    pub const RGB24: Self = Self(sys::SDL_PIXELFORMAT_RGB24);
    pub const BGR24: Self = Self(sys::SDL_PIXELFORMAT_BGR24);
    pub const XRGB8888: Self = Self(sys::SDL_PIXELFORMAT_XRGB8888);
    pub const RGBX8888: Self = Self(sys::SDL_PIXELFORMAT_RGBX8888);
    pub const XBGR8888: Self = Self(sys::SDL_PIXELFORMAT_XBGR8888);
    pub const BGRX8888: Self = Self(sys::SDL_PIXELFORMAT_BGRX8888);
    pub const ARGB8888: Self = Self(sys::SDL_PIXELFORMAT_ARGB8888);
    pub const RGBA8888: Self = Self(sys::SDL_PIXELFORMAT_RGBA8888);
    pub const ABGR8888: Self = Self(sys::SDL_PIXELFORMAT_ABGR8888);
    pub const BGRA8888: Self = Self(sys::SDL_PIXELFORMAT_BGRA8888);
    pub const XRGB2101010: Self = Self(sys::SDL_PIXELFORMAT_XRGB2101010);
    pub const XBGR2101010: Self = Self(sys::SDL_PIXELFORMAT_XBGR2101010);
    pub const ARGB2101010: Self = Self(sys::SDL_PIXELFORMAT_ARGB2101010);
    pub const ABGR2101010: Self = Self(sys::SDL_PIXELFORMAT_ABGR2101010);
    pub const RGB48: Self = Self(sys::SDL_PIXELFORMAT_RGB48);
    pub const BGR48: Self = Self(sys::SDL_PIXELFORMAT_BGR48);
    pub const RGBA64: Self = Self(sys::SDL_PIXELFORMAT_RGBA64);
    pub const ARGB64: Self = Self(sys::SDL_PIXELFORMAT_ARGB64);
    pub const BGRA64: Self = Self(sys::SDL_PIXELFORMAT_BGRA64);
    pub const ABGR64: Self = Self(sys::SDL_PIXELFORMAT_ABGR64);
    pub const RGB48_FLOAT: Self = Self(sys::SDL_PIXELFORMAT_RGB48_FLOAT);
    pub const BGR48_FLOAT: Self = Self(sys::SDL_PIXELFORMAT_BGR48_FLOAT);
    pub const RGBA64_FLOAT: Self = Self(sys::SDL_PIXELFORMAT_RGBA64_FLOAT);
    pub const ARGB64_FLOAT: Self = Self(sys::SDL_PIXELFORMAT_ARGB64_FLOAT);
    pub const BGRA64_FLOAT: Self = Self(sys::SDL_PIXELFORMAT_BGRA64_FLOAT);
    pub const ABGR64_FLOAT: Self = Self(sys::SDL_PIXELFORMAT_ABGR64_FLOAT);
    pub const RGB96_FLOAT: Self = Self(sys::SDL_PIXELFORMAT_RGB96_FLOAT);
    pub const BGR96_FLOAT: Self = Self(sys::SDL_PIXELFORMAT_BGR96_FLOAT);
    pub const RGBA128_FLOAT: Self = Self(sys::SDL_PIXELFORMAT_RGBA128_FLOAT);
    pub const ARGB128_FLOAT: Self = Self(sys::SDL_PIXELFORMAT_ARGB128_FLOAT);
    pub const BGRA128_FLOAT: Self = Self(sys::SDL_PIXELFORMAT_BGRA128_FLOAT);
    pub const ABGR128_FLOAT: Self = Self(sys::SDL_PIXELFORMAT_ABGR128_FLOAT);
    pub const YV12: Self = Self(sys::SDL_PIXELFORMAT_YV12);
    pub const IYUV: Self = Self(sys::SDL_PIXELFORMAT_IYUV);
    pub const YUY2: Self = Self(sys::SDL_PIXELFORMAT_YUY2);
    pub const UYVY: Self = Self(sys::SDL_PIXELFORMAT_UYVY);
    pub const YVYU: Self = Self(sys::SDL_PIXELFORMAT_YVYU);
    pub const NV12: Self = Self(sys::SDL_PIXELFORMAT_NV12);
    pub const NV21: Self = Self(sys::SDL_PIXELFORMAT_NV21);
    pub const P010: Self = Self(sys::SDL_PIXELFORMAT_P010);
    pub const EXTERNAL_OES: Self = Self(sys::SDL_PIXELFORMAT_EXTERNAL_OES);
    pub const RGBA32: Self = Self(sys::SDL_PIXELFORMAT_RGBA32);
    pub const ARGB32: Self = Self(sys::SDL_PIXELFORMAT_ARGB32);
    pub const BGRA32: Self = Self(sys::SDL_PIXELFORMAT_BGRA32);
    pub const ABGR32: Self = Self(sys::SDL_PIXELFORMAT_ABGR32);
    pub const RGBX32: Self = Self(sys::SDL_PIXELFORMAT_RGBX32);
    pub const XRGB32: Self = Self(sys::SDL_PIXELFORMAT_XRGB32);
    pub const BGRX32: Self = Self(sys::SDL_PIXELFORMAT_BGRX32);
    pub const XBGR32: Self = Self(sys::SDL_PIXELFORMAT_XBGR32);

    /// Every distinct format code, without the byte-order aliases.
    pub const KNOWN: &'static [Self] = &[
        Self::UNKNOWN, Self::INDEX1LSB, Self::INDEX1MSB, Self::INDEX2LSB, Self::INDEX2MSB,
        Self::INDEX4LSB, Self::INDEX4MSB, Self::INDEX8, Self::RGB332, Self::XRGB4444,
        Self::XBGR4444, Self::XRGB1555, Self::XBGR1555, Self::ARGB4444, Self::RGBA4444,
        Self::ABGR4444, Self::BGRA4444, Self::ARGB1555, Self::RGBA5551, Self::ABGR1555,
        Self::BGRA5551, Self::RGB565, Self::BGR565, Self::RGB24, Self::BGR24, Self::XRGB8888,
        Self::RGBX8888, Self::XBGR8888, Self::BGRX8888, Self::ARGB8888, Self::RGBA8888,
        Self::ABGR8888, Self::BGRA8888, Self::XRGB2101010, Self::XBGR2101010, Self::ARGB2101010,
        Self::ABGR2101010, Self::RGB48, Self::BGR48, Self::RGBA64, Self::ARGB64, Self::BGRA64,
        Self::ABGR64, Self::RGB48_FLOAT, Self::BGR48_FLOAT, Self::RGBA64_FLOAT,
        Self::ARGB64_FLOAT, Self::BGRA64_FLOAT, Self::ABGR64_FLOAT, Self::RGB96_FLOAT,
        Self::BGR96_FLOAT, Self::RGBA128_FLOAT, Self::ARGB128_FLOAT, Self::BGRA128_FLOAT,
        Self::ABGR128_FLOAT, Self::YV12, Self::IYUV, Self::YUY2, Self::UYVY, Self::YVYU,
        Self::NV12, Self::NV21, Self::P010, Self::EXTERNAL_OES,
    ];

    /// Packs a non-FOURCC format code.
    #[must_use]
    pub const fn define(pixel_type: PixelType, order: u32, layout: PackedLayout, bits: u8, bytes: u8) -> Self {
        Self(sys::SDL_DEFINE_PIXELFORMAT(pixel_type as u32, order, layout as u32, bits, bytes))
    }

    /// A FOURCC format code such as `YV12`.
    #[must_use]
    pub const fn fourcc(code: [u8; 4]) -> Self {
        Self(sys::SDL_DEFINE_PIXELFOURCC(code[0], code[1], code[2], code[3]))
    }

    #[must_use]
    pub const fn flag(self) -> u32 {
        sys::SDL_PIXELFLAG(self.0)
    }

    /// The pixel type, or `None` for FOURCC and unrecognised codes.
    #[must_use]
    pub fn pixel_type(self) -> Option<PixelType> {
        if self.is_fourcc() {
            return None;
        }
        PixelType::from_raw(sys::SDL_PIXELTYPE(self.0))
    }

    /// The raw 4-bit order field; its meaning depends on the pixel type.
    #[must_use]
    pub const fn order(self) -> u32 {
        sys::SDL_PIXELORDER(self.0)
    }

    #[must_use]
    pub fn bitmap_order(self) -> Option<BitmapOrder> {
        self.is_indexed().then(|| BitmapOrder::from_raw(self.order())).flatten()
    }

    #[must_use]
    pub fn packed_order(self) -> Option<PackedOrder> {
        self.is_packed().then(|| PackedOrder::from_raw(self.order())).flatten()
    }

    #[must_use]
    pub fn array_order(self) -> Option<ArrayOrder> {
        self.is_array().then(|| ArrayOrder::from_raw(self.order())).flatten()
    }

    #[must_use]
    pub fn layout(self) -> Option<PackedLayout> {
        if self.is_fourcc() {
            return None;
        }
        PackedLayout::from_raw(sys::SDL_PIXELLAYOUT(self.0))
    }

    /// Bits per pixel; zero for FOURCC formats.
    #[must_use]
    pub const fn bits_per_pixel(self) -> u8 {
        sys::SDL_BITSPERPIXEL(self.0)
    }

    /// Bytes per pixel. Planar FOURCC formats report the size of one sample
    /// of the first plane.
    #[must_use]
    pub const fn bytes_per_pixel(self) -> u8 {
        sys::SDL_BYTESPERPIXEL(self.0)
    }

    #[must_use]
    pub const fn is_indexed(self) -> bool {
        sys::SDL_ISPIXELFORMAT_INDEXED(self.0)
    }

    #[must_use]
    pub const fn is_packed(self) -> bool {
        sys::SDL_ISPIXELFORMAT_PACKED(self.0)
    }

    #[must_use]
    pub const fn is_array(self) -> bool {
        sys::SDL_ISPIXELFORMAT_ARRAY(self.0)
    }

    #[must_use]
    pub const fn is_10bit(self) -> bool {
        sys::SDL_ISPIXELFORMAT_10BIT(self.0)
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        sys::SDL_ISPIXELFORMAT_FLOAT(self.0)
    }

    #[must_use]
    pub const fn has_alpha(self) -> bool {
        sys::SDL_ISPIXELFORMAT_ALPHA(self.0)
    }

    #[must_use]
    pub const fn is_fourcc(self) -> bool {
        sys::SDL_ISPIXELFORMAT_FOURCC(self.0)
    }

    /// SDL's name for the format, e.g. `SDL_PIXELFORMAT_RGBA8888`.
    pub fn name(self) -> Sdl3Result<String> {
        let api = api()?;
        // SAFETY: SDL returns a static string for every code.
        let name = unsafe { borrowed_string((api.SDL_GetPixelFormatName)(self.0)) };
        Ok(name.unwrap_or_else(|| "SDL_PIXELFORMAT_UNKNOWN".to_string()))
    }

    /// Bit depth and channel masks.
    pub fn masks(self) -> Sdl3Result<PixelMasks> {
        let api = api()?;
        let mut masks = PixelMasks::default();
        // SAFETY: every out-pointer references a field of `masks`.
        let ok = unsafe {
            (api.SDL_GetMasksForPixelFormat)(
                self.0,
                &mut masks.bpp,
                &mut masks.r,
                &mut masks.g,
                &mut masks.b,
                &mut masks.a,
            )
        };
        check(api, ok, Sdl3Error::Pixels)?;
        Ok(masks)
    }

    /// The format matching a bit depth and masks, or `None` if SDL has none.
    pub fn from_masks(masks: &PixelMasks) -> Sdl3Result<Option<Self>> {
        let api = api()?;
        // SAFETY: plain value arguments.
        let format = unsafe {
            (api.SDL_GetPixelFormatForMasks)(masks.bpp, masks.r, masks.g, masks.b, masks.a)
        };
        Ok((format != sys::SDL_PIXELFORMAT_UNKNOWN).then_some(Self(format)))
    }

    /// A copy of SDL's channel layout description.
    pub fn details(self) -> Sdl3Result<PixelFormatDetails> {
        let api = api()?;
        // SAFETY: the returned pointer was checked for null and points at a
        // table SDL keeps for the life of the process.
        let raw = unsafe { &*raw_details(api, self)?.as_ptr() };
        Ok(PixelFormatDetails::from(raw))
    }

    /// Maps an opaque color to a pixel value of this format.
    pub fn map_rgb(self, palette: Option<&Palette<'_>>, r: u8, g: u8, b: u8) -> Sdl3Result<u32> {
        let api = api()?;
        let details = raw_details(api, self)?;
        // SAFETY: `details` comes from SDL; the palette pointer is null or live.
        Ok(unsafe { (api.SDL_MapRGB)(details.as_ptr(), palette_ptr(palette), r, g, b) })
    }

    /// Maps a color with alpha to a pixel value of this format.
    pub fn map_rgba(self, palette: Option<&Palette<'_>>, color: Color) -> Sdl3Result<u32> {
        let api = api()?;
        let details = raw_details(api, self)?;
        // SAFETY: as in `map_rgb`.
        Ok(unsafe {
            (api.SDL_MapRGBA)(details.as_ptr(), palette_ptr(palette), color.r, color.g, color.b, color.a)
        })
    }

    /// Decodes a pixel value into opaque RGB components.
    pub fn get_rgb(self, pixel: u32, palette: Option<&Palette<'_>>) -> Sdl3Result<(u8, u8, u8)> {
        let api = api()?;
        let details = raw_details(api, self)?;
        let (mut r, mut g, mut b) = (0, 0, 0);
        // SAFETY: out-pointers reference live locals.
        unsafe {
            (api.SDL_GetRGB)(pixel, details.as_ptr(), palette_ptr(palette), &mut r, &mut g, &mut b);
        }
        Ok((r, g, b))
    }

    /// Decodes a pixel value into RGBA components. Formats without alpha
    /// report [`ALPHA_OPAQUE`].
    pub fn get_rgba(self, pixel: u32, palette: Option<&Palette<'_>>) -> Sdl3Result<Color> {
        let api = api()?;
        let details = raw_details(api, self)?;
        let mut c = Color::default();
        // SAFETY: out-pointers reference fields of `c`.
        unsafe {
            (api.SDL_GetRGBA)(
                pixel,
                details.as_ptr(),
                palette_ptr(palette),
                &mut c.r,
                &mut c.g,
                &mut c.b,
                &mut c.a,
            );
        }
        Ok(c)
    }
}

impl From<u32> for PixelFormat {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

fn raw_details(
    api: &sys::Sdl3Api,
    format: PixelFormat,
) -> Sdl3Result<NonNull<sys::SDL_PixelFormatDetails>> {
    // SAFETY: plain value argument.
    let raw = unsafe { (api.SDL_GetPixelFormatDetails)(format.0) };
    NonNull::new(raw.cast_mut()).ok_or_else(|| Sdl3Error::Pixels(last_error(api)))
}

fn palette_ptr(palette: Option<&Palette<'_>>) -> *const sys::SDL_Palette {
    palette.map_or(std::ptr::null(), |p| p.as_ptr().cast_const())
}

/// Bit depth and channel masks of a format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelMasks {
    pub bpp: i32,
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
}

/// Channel layout of a pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelFormatDetails {
    pub format: PixelFormat,
    pub bits_per_pixel: u8,
    pub bytes_per_pixel: u8,
    pub r_mask: u32,
    pub g_mask: u32,
    pub b_mask: u32,
    pub a_mask: u32,
    pub r_bits: u8,
    pub g_bits: u8,
    pub b_bits: u8,
    pub a_bits: u8,
    pub r_shift: u8,
    pub g_shift: u8,
    pub b_shift: u8,
    pub a_shift: u8,
}

impl From<&sys::SDL_PixelFormatDetails> for PixelFormatDetails {
    fn from(d: &sys::SDL_PixelFormatDetails) -> Self {
        Self {
            format: PixelFormat(d.format),
            bits_per_pixel: d.bits_per_pixel,
            bytes_per_pixel: d.bytes_per_pixel,
            r_mask: d.Rmask,
            g_mask: d.Gmask,
            b_mask: d.Bmask,
            a_mask: d.Amask,
            r_bits: d.Rbits,
            g_bits: d.Gbits,
            b_bits: d.Bbits,
            a_bits: d.Abits,
            r_shift: d.Rshift,
            g_shift: d.Gshift,
            b_shift: d.Bshift,
            a_shift: d.Ashift,
        }
    }
}

// ── Colorspace ──────────────────────────────────────────────────

native_enum! {
    pub enum ColorType: u32 {
        Unknown = sys::SDL_COLOR_TYPE_UNKNOWN,
        Rgb = sys::SDL_COLOR_TYPE_RGB,
        YCbCr = sys::SDL_COLOR_TYPE_YCBCR,
    }
}

native_enum! {
    pub enum ColorRange: u32 {
        Unknown = sys::SDL_COLOR_RANGE_UNKNOWN,
        /// Narrow range, e.g. 16-235 for 8-bit RGB and luma.
        Limited = sys::SDL_COLOR_RANGE_LIMITED,
        Full = sys::SDL_COLOR_RANGE_FULL,
    }
}

native_enum! {
    /// Color primaries as defined by ITU-T H.273.
    pub enum ColorPrimaries: u32 {
        Unknown = sys::SDL_COLOR_PRIMARIES_UNKNOWN,
        Bt709 = sys::SDL_COLOR_PRIMARIES_BT709,
        Unspecified = sys::SDL_COLOR_PRIMARIES_UNSPECIFIED,
        Bt470m = sys::SDL_COLOR_PRIMARIES_BT470M,
        Bt470bg = sys::SDL_COLOR_PRIMARIES_BT470BG,
        Bt601 = sys::SDL_COLOR_PRIMARIES_BT601,
        Smpte240 = sys::SDL_COLOR_PRIMARIES_SMPTE240,
        GenericFilm = sys::SDL_COLOR_PRIMARIES_GENERIC_FILM,
        Bt2020 = sys::SDL_COLOR_PRIMARIES_BT2020,
        Xyz = sys::SDL_COLOR_PRIMARIES_XYZ,
        Smpte431 = sys::SDL_COLOR_PRIMARIES_SMPTE431,
        Smpte432 = sys::SDL_COLOR_PRIMARIES_SMPTE432,
        Ebu3213 = sys::SDL_COLOR_PRIMARIES_EBU3213,
        Custom = sys::SDL_COLOR_PRIMARIES_CUSTOM,
    }
}

native_enum! {
    /// Transfer characteristics as defined by ITU-T H.273.
    pub enum TransferCharacteristics: u32 {
        Unknown = sys::SDL_TRANSFER_CHARACTERISTICS_UNKNOWN,
        Bt709 = sys::SDL_TRANSFER_CHARACTERISTICS_BT709,
        Unspecified = sys::SDL_TRANSFER_CHARACTERISTICS_UNSPECIFIED,
        Gamma22 = sys::SDL_TRANSFER_CHARACTERISTICS_GAMMA22,
        Gamma28 = sys::SDL_TRANSFER_CHARACTERISTICS_GAMMA28,
        Bt601 = sys::SDL_TRANSFER_CHARACTERISTICS_BT601,
        Smpte240 = sys::SDL_TRANSFER_CHARACTERISTICS_SMPTE240,
        Linear = sys::SDL_TRANSFER_CHARACTERISTICS_LINEAR,
        Log100 = sys::SDL_TRANSFER_CHARACTERISTICS_LOG100,
        Log100Sqrt10 = sys::SDL_TRANSFER_CHARACTERISTICS_LOG100_SQRT10,
        Iec61966 = sys::SDL_TRANSFER_CHARACTERISTICS_IEC61966,
        Bt1361 = sys::SDL_TRANSFER_CHARACTERISTICS_BT1361,
        Srgb = sys::SDL_TRANSFER_CHARACTERISTICS_SRGB,
        Bt2020TenBit = sys::SDL_TRANSFER_CHARACTERISTICS_BT2020_10BIT,
        Bt2020TwelveBit = sys::SDL_TRANSFER_CHARACTERISTICS_BT2020_12BIT,
        /// SMPTE ST 2084 (HDR10).
        Pq = sys::SDL_TRANSFER_CHARACTERISTICS_PQ,
        Smpte428 = sys::SDL_TRANSFER_CHARACTERISTICS_SMPTE428,
        /// ARIB STD-B67, hybrid log-gamma.
        Hlg = sys::SDL_TRANSFER_CHARACTERISTICS_HLG,
        Custom = sys::SDL_TRANSFER_CHARACTERISTICS_CUSTOM,
    }
}

native_enum! {
    /// Matrix coefficients as defined by ITU-T H.273.
    pub enum MatrixCoefficients: u32 {
        Identity = sys::SDL_MATRIX_COEFFICIENTS_IDENTITY,
        Bt709 = sys::SDL_MATRIX_COEFFICIENTS_BT709,
        Unspecified = sys::SDL_MATRIX_COEFFICIENTS_UNSPECIFIED,
        Fcc = sys::SDL_MATRIX_COEFFICIENTS_FCC,
        Bt470bg = sys::SDL_MATRIX_COEFFICIENTS_BT470BG,
        Bt601 = sys::SDL_MATRIX_COEFFICIENTS_BT601,
        Smpte240 = sys::SDL_MATRIX_COEFFICIENTS_SMPTE240,
        YCgCo = sys::SDL_MATRIX_COEFFICIENTS_YCGCO,
        Bt2020Ncl = sys::SDL_MATRIX_COEFFICIENTS_BT2020_NCL,
        Bt2020Cl = sys::SDL_MATRIX_COEFFICIENTS_BT2020_CL,
        Smpte2085 = sys::SDL_MATRIX_COEFFICIENTS_SMPTE2085,
        ChromaDerivedNcl = sys::SDL_MATRIX_COEFFICIENTS_CHROMA_DERIVED_NCL,
        ChromaDerivedCl = sys::SDL_MATRIX_COEFFICIENTS_CHROMA_DERIVED_CL,
        ICtCp = sys::SDL_MATRIX_COEFFICIENTS_ICTCP,
        Custom = sys::SDL_MATRIX_COEFFICIENTS_CUSTOM,
    }
}

native_enum! {
    /// Siting of chroma samples relative to luma.
    pub enum ChromaLocation: u32 {
        None = sys::SDL_CHROMA_LOCATION_NONE,
        /// MPEG-2 / MPEG-4 / H.264 siting.
        Left = sys::SDL_CHROMA_LOCATION_LEFT,
        /// JPEG / MPEG-1 siting.
        Center = sys::SDL_CHROMA_LOCATION_CENTER,
        TopLeft = sys::SDL_CHROMA_LOCATION_TOPLEFT,
    }
}

/// A packed colorspace code.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colorspace(pub u32);

impl Colorspace {
    pub const UNKNOWN: Self = Self(sys::SDL_COLORSPACE_UNKNOWN);
    pub const SRGB: Self = Self(sys::SDL_COLORSPACE_SRGB);
    pub const SRGB_LINEAR: Self = Self(sys::SDL_COLORSPACE_SRGB_LINEAR);
    pub const HDR10: Self = Self(sys::SDL_COLORSPACE_HDR10);
    pub const JPEG: Self = Self(sys::SDL_COLORSPACE_JPEG);
    pub const BT601_LIMITED: Self = Self(sys::SDL_COLORSPACE_BT601_LIMITED);
    pub const BT601_FULL: Self = Self(sys::SDL_COLORSPACE_BT601_FULL);
    pub const BT709_LIMITED: Self = Self(sys::SDL_COLORSPACE_BT709_LIMITED);
    pub const BT709_FULL: Self = Self(sys::SDL_COLORSPACE_BT709_FULL);
    pub const BT2020_LIMITED: Self = Self(sys::SDL_COLORSPACE_BT2020_LIMITED);
    pub const BT2020_FULL: Self = Self(sys::SDL_COLORSPACE_BT2020_FULL);
    pub const RGB_DEFAULT: Self = Self(sys::SDL_COLORSPACE_RGB_DEFAULT);
    pub const YUV_DEFAULT: Self = Self(sys::SDL_COLORSPACE_YUV_DEFAULT);

    #[must_use]
    pub const fn define(
        color_type: ColorType,
        range: ColorRange,
        primaries: ColorPrimaries,
        transfer: TransferCharacteristics,
        matrix: MatrixCoefficients,
        chroma: ChromaLocation,
    ) -> Self {
        Self(sys::SDL_DEFINE_COLORSPACE(
            color_type as u32,
            range as u32,
            primaries as u32,
            transfer as u32,
            matrix as u32,
            chroma as u32,
        ))
    }

    #[must_use]
    pub fn color_type(self) -> Option<ColorType> {
        ColorType::from_raw(sys::SDL_COLORSPACETYPE(self.0))
    }

    #[must_use]
    pub fn range(self) -> Option<ColorRange> {
        ColorRange::from_raw(sys::SDL_COLORSPACERANGE(self.0))
    }

    #[must_use]
    pub fn chroma(self) -> Option<ChromaLocation> {
        ChromaLocation::from_raw(sys::SDL_COLORSPACECHROMA(self.0))
    }

    #[must_use]
    pub fn primaries(self) -> Option<ColorPrimaries> {
        ColorPrimaries::from_raw(sys::SDL_COLORSPACEPRIMARIES(self.0))
    }

    #[must_use]
    pub fn transfer(self) -> Option<TransferCharacteristics> {
        TransferCharacteristics::from_raw(sys::SDL_COLORSPACETRANSFER(self.0))
    }

    #[must_use]
    pub fn matrix(self) -> Option<MatrixCoefficients> {
        MatrixCoefficients::from_raw(sys::SDL_COLORSPACEMATRIX(self.0))
    }

    #[must_use]
    pub const fn is_matrix_bt601(self) -> bool {
        sys::SDL_ISCOLORSPACE_MATRIX_BT601(self.0)
    }

    #[must_use]
    pub const fn is_matrix_bt709(self) -> bool {
        sys::SDL_ISCOLORSPACE_MATRIX_BT709(self.0)
    }

    #[must_use]
    pub const fn is_matrix_bt2020_ncl(self) -> bool {
        sys::SDL_ISCOLORSPACE_MATRIX_BT2020_NCL(self.0)
    }

    #[must_use]
    pub const fn is_limited_range(self) -> bool {
        sys::SDL_ISCOLORSPACE_LIMITED_RANGE(self.0)
    }

    #[must_use]
    pub const fn is_full_range(self) -> bool {
        sys::SDL_ISCOLORSPACE_FULL_RANGE(self.0)
    }
}

// ── Colors ──────────────────────────────────────────────────────

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: ALPHA_OPAQUE }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for sys::SDL_Color {
    fn from(c: Color) -> Self {
        Self { r: c.r, g: c.g, b: c.b, a: c.a }
    }
}

impl From<sys::SDL_Color> for Color {
    fn from(c: sys::SDL_Color) -> Self {
        Self { r: c.r, g: c.g, b: c.b, a: c.a }
    }
}

/// A floating-point RGBA color, nominally in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl FColor {
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<FColor> for sys::SDL_FColor {
    fn from(c: FColor) -> Self {
        Self { r: c.r, g: c.g, b: c.b, a: c.a }
    }
}

impl From<sys::SDL_FColor> for FColor {
    fn from(c: sys::SDL_FColor) -> Self {
        Self { r: c.r, g: c.g, b: c.b, a: c.a }
    }
}

// ── Palette ─────────────────────────────────────────────────────

/// A native palette.
///
/// Palettes created with [`Palette::new`] are owned and released on drop.
/// Palettes obtained from a surface borrow it (`'a`) and are left to SDL.
pub struct Palette<'a> {
    raw: NonNull<sys::SDL_Palette>,
    owned: bool,
    _marker: PhantomData<&'a ()>,
}

impl Palette<'static> {
    /// Allocates a palette of `ncolors` entries, all initialised to white.
    pub fn new(ncolors: usize) -> Sdl3Result<Self> {
        let api = api()?;
        let count = to_c_int(ncolors, "palette size").map_err(Sdl3Error::Palette)?;
        // SAFETY: plain value argument.
        let raw = unsafe { (api.SDL_CreatePalette)(count) };
        let raw = NonNull::new(raw).ok_or_else(|| Sdl3Error::Palette(last_error(api)))?;
        Ok(Self {
            raw,
            owned: true,
            _marker: PhantomData,
        })
    }
}

impl<'a> Palette<'a> {
    /// Wraps a palette owned by something else.
    pub(crate) fn borrowed(raw: NonNull<sys::SDL_Palette>) -> Self {
        Self {
            raw,
            owned: false,
            _marker: PhantomData,
        }
    }

    pub(crate) fn as_ptr(&self) -> *mut sys::SDL_Palette {
        self.raw.as_ptr()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        // SAFETY: `raw` points at a live palette for the life of `self`.
        let n = unsafe { self.raw.as_ref() }.ncolors;
        usize::try_from(n).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bumped by SDL every time the colors change.
    #[must_use]
    pub fn version(&self) -> u32 {
        // SAFETY: see `len`.
        unsafe { self.raw.as_ref() }.version
    }

    #[must_use]
    pub fn refcount(&self) -> i32 {
        // SAFETY: see `len`.
        unsafe { self.raw.as_ref() }.refcount
    }

    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.owned
    }

    /// A copy of the current entries.
    #[must_use]
    pub fn colors(&self) -> Vec<Color> {
        // SAFETY: see `len`.
        let raw = unsafe { self.raw.as_ref() };
        if raw.colors.is_null() {
            return Vec::new();
        }
        // SAFETY: SDL allocates `ncolors` entries behind `colors`.
        unsafe { std::slice::from_raw_parts(raw.colors, self.len()) }
            .iter()
            .copied()
            .map(Color::from)
            .collect()
    }

    /// Overwrites entries starting at `first`. Every color must fit inside
    /// the palette.
    pub fn set_colors(&mut self, colors: &[Color], first: usize) -> Sdl3Result<()> {
        if first.saturating_add(colors.len()) > self.len() {
            return Err(Sdl3Error::Palette(format!(
                "{} colors from index {first} exceed a palette of {}",
                colors.len(),
                self.len()
            )));
        }
        let api = api()?;
        let first = to_c_int(first, "first color").map_err(Sdl3Error::Palette)?;
        let count = to_c_int(colors.len(), "color count").map_err(Sdl3Error::Palette)?;
        let native: Vec<sys::SDL_Color> = colors.iter().copied().map(Into::into).collect();
        // SAFETY: `native` holds `count` colors; the palette is live.
        let ok = unsafe { (api.SDL_SetPaletteColors)(self.as_ptr(), native.as_ptr(), first, count) };
        check(api, ok, Sdl3Error::Palette)
    }
}

impl Drop for Palette<'_> {
    fn drop(&mut self) {
        if !self.owned {
            return;
        }
        match api() {
            // SAFETY: owned palettes were created by SDL_CreatePalette and are
            // destroyed exactly once here.
            Ok(api) => unsafe { (api.SDL_DestroyPalette)(self.raw.as_ptr()) },
            Err(e) => debug!("Palette leaked, SDL3 unavailable: {}", e),
        }
    }
}

impl fmt::Debug for Palette<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("ncolors", &self.len())
            .field("version", &self.version())
            .field("owned", &self.owned)
            .finish()
    }
}
