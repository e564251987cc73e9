//! Software surfaces.
//!
//! A [`Surface`] is a rectangle of pixels in system memory with a pixel
//! format, optional palette, color key, modulation and blend state. Surfaces
//! created over caller memory borrow it for `'a`; everything else is
//! `Surface<'static>`.

use std::ffi::c_void;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::path::Path;
use std::ptr::NonNull;

use bitflags::bitflags;
use opencnc_sdl3_sys::{self as sys, Sdl3Api};

use crate::blend::BlendMode;
use crate::error::{Sdl3Error, Sdl3Result, check, last_error};
use crate::geometry::Rect;
use crate::iostream::IoStream;
use crate::macros::native_enum;
use crate::native::{api, path_cstring, to_c_int};
use crate::pixels::{Color, Colorspace, FColor, Palette, PixelFormat};
use crate::properties::PropertiesId;

/// Names of the properties SDL reads from a surface.
pub mod props {
    pub const SDR_WHITE_POINT_FLOAT: &str = "SDL.surface.SDR_white_point";
    pub const HDR_HEADROOM_FLOAT: &str = "SDL.surface.HDR_headroom";
    pub const TONEMAP_OPERATOR_STRING: &str = "SDL.surface.tonemap";
    pub const HOTSPOT_X_NUMBER: &str = "SDL.surface.hotspot.x";
    pub const HOTSPOT_Y_NUMBER: &str = "SDL.surface.hotspot.y";
}

bitflags! {
    /// Read-only state bits SDL keeps on a surface.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SurfaceFlags: u32 {
        /// Pixels were supplied by the caller.
        const PREALLOCATED = sys::SDL_SURFACE_PREALLOCATED;
        /// Pixels must be locked before direct access.
        const LOCK_NEEDED = sys::SDL_SURFACE_LOCK_NEEDED;
        const LOCKED = sys::SDL_SURFACE_LOCKED;
        const SIMD_ALIGNED = sys::SDL_SURFACE_SIMD_ALIGNED;
    }
}

native_enum! {
    pub enum ScaleMode: i32 {
        Nearest = sys::SDL_SCALEMODE_NEAREST,
        Linear = sys::SDL_SCALEMODE_LINEAR,
    }
}

native_enum! {
    pub enum FlipMode: i32 {
        None = sys::SDL_FLIP_NONE,
        Horizontal = sys::SDL_FLIP_HORIZONTAL,
        Vertical = sys::SDL_FLIP_VERTICAL,
    }
}

/// Corner sizes for [`Surface::blit_9grid`]. The corners are copied
/// unscaled, the edges stretched along one axis and the center along both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridInsets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

fn rect_ptr(rect: &Option<sys::SDL_Rect>) -> *const sys::SDL_Rect {
    rect.as_ref().map_or(std::ptr::null(), |r| r as *const _)
}

/// A native surface.
pub struct Surface<'a> {
    raw: NonNull<sys::SDL_Surface>,
    api: &'static Sdl3Api,
    owned: bool,
    _marker: PhantomData<&'a mut [u8]>,
}

impl Surface<'static> {
    /// Allocates a surface with SDL-owned pixels, cleared to zero.
    pub fn new(width: i32, height: i32, format: PixelFormat) -> Sdl3Result<Self> {
        let api = api()?;
        // SAFETY: plain value arguments.
        let raw = unsafe { (api.SDL_CreateSurface)(width, height, format.0) };
        Self::owned(api, raw)
    }

    /// Loads a BMP image from disk.
    pub fn load_bmp(path: impl AsRef<Path>) -> Sdl3Result<Self> {
        let api = api()?;
        let file = path_cstring(path.as_ref())?;
        // SAFETY: `file` outlives the call.
        let raw = unsafe { (api.SDL_LoadBMP)(file.as_ptr()) };
        Self::owned(api, raw)
    }

    /// Loads a BMP image from the stream's cursor. The stream stays open.
    pub fn load_bmp_io(stream: &mut IoStream<'_>) -> Sdl3Result<Self> {
        let api = api()?;
        // SAFETY: the stream is open and SDL does not close it.
        let raw = unsafe { (api.SDL_LoadBMP_IO)(stream.as_ptr(), false) };
        Self::owned(api, raw)
    }
}

impl<'a> Surface<'a> {
    /// Wraps caller pixels without copying them.
    ///
    /// `pixels` must hold at least `height * pitch` bytes.
    pub fn from_pixels(
        width: i32,
        height: i32,
        format: PixelFormat,
        pixels: &'a mut [u8],
        pitch: usize,
    ) -> Sdl3Result<Self> {
        check_buffer(pixels.len(), required_len(format, width, height, pitch)?)?;
        let pitch = to_c_int(pitch, "pitch").map_err(Sdl3Error::Surface)?;
        let api = api()?;
        // SAFETY: the buffer was size-checked and outlives the surface via `'a`.
        let raw = unsafe {
            (api.SDL_CreateSurfaceFrom)(width, height, format.0, pixels.as_mut_ptr().cast::<c_void>(), pitch)
        };
        Self::owned(api, raw)
    }

    fn owned(api: &'static Sdl3Api, raw: *mut sys::SDL_Surface) -> Sdl3Result<Self> {
        let raw = NonNull::new(raw).ok_or_else(|| Sdl3Error::Surface(last_error(api)))?;
        Ok(Self {
            raw,
            api,
            owned: true,
            _marker: PhantomData,
        })
    }

    pub(crate) fn as_ptr(&self) -> *mut sys::SDL_Surface {
        self.raw.as_ptr()
    }

    fn header(&self) -> &sys::SDL_Surface {
        // SAFETY: the surface is live for the life of `self`.
        unsafe { self.raw.as_ref() }
    }

    fn ok(&self, ok: bool) -> Sdl3Result<()> {
        check(self.api, ok, Sdl3Error::Surface)
    }

    // ── Header ──────────────────────────────────────────────────

    #[must_use]
    pub fn width(&self) -> i32 {
        self.header().w
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.header().h
    }

    /// Bytes between the starts of consecutive rows.
    #[must_use]
    pub fn pitch(&self) -> i32 {
        self.header().pitch
    }

    #[must_use]
    pub fn format(&self) -> PixelFormat {
        PixelFormat(self.header().format)
    }

    #[must_use]
    pub fn flags(&self) -> SurfaceFlags {
        SurfaceFlags::from_bits_retain(self.header().flags)
    }

    /// Whether [`lock`](Self::lock) is required before touching pixels.
    #[must_use]
    pub fn must_lock(&self) -> bool {
        self.flags().contains(SurfaceFlags::LOCK_NEEDED)
    }

    /// Whether dropping this handle destroys the native surface.
    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.owned
    }

    pub fn properties(&self) -> Sdl3Result<PropertiesId> {
        // SAFETY: the surface is live.
        let id = unsafe { (self.api.SDL_GetSurfaceProperties)(self.as_ptr()) };
        if id == 0 {
            Err(Sdl3Error::Surface(last_error(self.api)))
        } else {
            Ok(PropertiesId(id))
        }
    }

    // ── Colorspace and palette ──────────────────────────────────

    pub fn set_colorspace(&mut self, colorspace: Colorspace) -> Sdl3Result<()> {
        // SAFETY: the surface is live.
        let ok = unsafe { (self.api.SDL_SetSurfaceColorspace)(self.as_ptr(), colorspace.0) };
        self.ok(ok)
    }

    #[must_use]
    pub fn colorspace(&self) -> Colorspace {
        // SAFETY: the surface is live.
        Colorspace(unsafe { (self.api.SDL_GetSurfaceColorspace)(self.as_ptr()) })
    }

    /// Gives an indexed surface a fresh palette owned by the surface.
    pub fn create_palette(&mut self) -> Sdl3Result<Palette<'_>> {
        // SAFETY: the surface is live.
        let raw = unsafe { (self.api.SDL_CreateSurfacePalette)(self.as_ptr()) };
        let raw = NonNull::new(raw).ok_or_else(|| Sdl3Error::Surface(last_error(self.api)))?;
        Ok(Palette::borrowed(raw))
    }

    /// Shares `palette` with the surface. SDL keeps its own reference, so the
    /// caller's handle may be dropped afterwards.
    pub fn set_palette(&mut self, palette: &Palette<'_>) -> Sdl3Result<()> {
        // SAFETY: both handles are live; SDL bumps the palette refcount.
        let ok = unsafe { (self.api.SDL_SetSurfacePalette)(self.as_ptr(), palette.as_ptr()) };
        self.ok(ok)
    }

    /// The surface's palette, borrowed from it.
    #[must_use]
    pub fn palette(&self) -> Option<Palette<'_>> {
        // SAFETY: the surface is live.
        let raw = unsafe { (self.api.SDL_GetSurfacePalette)(self.as_ptr()) };
        NonNull::new(raw).map(Palette::borrowed)
    }

    // ── Alternate images ────────────────────────────────────────

    /// Attaches a higher-density version of this image. The surface takes
    /// over `image`, whose pixels must live as long as this surface's.
    pub fn add_alternate_image(&mut self, image: Surface<'a>) -> Sdl3Result<()> {
        // SAFETY: both surfaces are live; SDL takes its own reference before
        // `image` releases ours on drop.
        let ok = unsafe { (self.api.SDL_AddSurfaceAlternateImage)(self.as_ptr(), image.as_ptr()) };
        self.ok(ok)
    }

    #[must_use]
    pub fn has_alternate_images(&self) -> bool {
        // SAFETY: the surface is live.
        unsafe { (self.api.SDL_SurfaceHasAlternateImages)(self.as_ptr()) }
    }

    /// This surface followed by its alternate images, as read-only views.
    pub fn images(&self) -> Sdl3Result<Vec<SurfaceImage<'_>>> {
        let mut count = 0;
        // SAFETY: the surface is live; `count` is a live local.
        let list = unsafe { (self.api.SDL_GetSurfaceImages)(self.as_ptr(), &mut count) };
        if list.is_null() {
            return Err(Sdl3Error::Surface(last_error(self.api)));
        }
        let len = usize::try_from(count).unwrap_or(0);
        // SAFETY: SDL returned an array of `count` surface pointers.
        let images = unsafe { std::slice::from_raw_parts(list, len) }
            .iter()
            .filter_map(|&p| NonNull::new(p))
            .map(|raw| SurfaceImage {
                surface: Surface {
                    raw,
                    api: self.api,
                    owned: false,
                    _marker: PhantomData,
                },
            })
            .collect();
        // SAFETY: the array itself belongs to the caller; the surfaces do not.
        unsafe { (self.api.SDL_free)(list.cast::<c_void>()) };
        Ok(images)
    }

    pub fn remove_alternate_images(&mut self) {
        // SAFETY: the surface is live.
        unsafe { (self.api.SDL_RemoveSurfaceAlternateImages)(self.as_ptr()) };
    }

    // ── Pixel access ────────────────────────────────────────────

    /// Locks the pixels for direct access until the guard is dropped.
    pub fn lock(&mut self) -> Sdl3Result<SurfaceLock<'_>> {
        // SAFETY: the surface is live.
        let ok = unsafe { (self.api.SDL_LockSurface)(self.as_ptr()) };
        self.ok(ok)?;
        Ok(SurfaceLock {
            raw: self.raw,
            api: self.api,
            _marker: PhantomData,
        })
    }

    /// Writes the surface as BMP.
    pub fn save_bmp(&self, path: impl AsRef<Path>) -> Sdl3Result<()> {
        let file = path_cstring(path.as_ref())?;
        // SAFETY: the surface is live; `file` outlives the call.
        let ok = unsafe { (self.api.SDL_SaveBMP)(self.as_ptr(), file.as_ptr()) };
        self.ok(ok)
    }

    /// Writes the surface as BMP at the stream's cursor. The stream stays open.
    pub fn save_bmp_io(&self, stream: &mut IoStream<'_>) -> Sdl3Result<()> {
        // SAFETY: both handles are live; SDL does not close the stream.
        let ok = unsafe { (self.api.SDL_SaveBMP_IO)(self.as_ptr(), stream.as_ptr(), false) };
        self.ok(ok)
    }

    // ── Blit state ──────────────────────────────────────────────

    /// Enables run-length acceleration; the surface then needs locking.
    pub fn set_rle(&mut self, enabled: bool) -> Sdl3Result<()> {
        // SAFETY: the surface is live.
        let ok = unsafe { (self.api.SDL_SetSurfaceRLE)(self.as_ptr(), enabled) };
        self.ok(ok)
    }

    #[must_use]
    pub fn has_rle(&self) -> bool {
        // SAFETY: the surface is live.
        unsafe { (self.api.SDL_SurfaceHasRLE)(self.as_ptr()) }
    }

    /// Sets the transparent pixel value, or disables the key with `None`.
    pub fn set_color_key(&mut self, key: Option<u32>) -> Sdl3Result<()> {
        // SAFETY: the surface is live.
        let ok = unsafe { (self.api.SDL_SetSurfaceColorKey)(self.as_ptr(), key.is_some(), key.unwrap_or(0)) };
        self.ok(ok)
    }

    #[must_use]
    pub fn has_color_key(&self) -> bool {
        // SAFETY: the surface is live.
        unsafe { (self.api.SDL_SurfaceHasColorKey)(self.as_ptr()) }
    }

    #[must_use]
    pub fn color_key(&self) -> Option<u32> {
        let mut key = 0;
        // SAFETY: the surface is live; `key` is a live local.
        let ok = unsafe { (self.api.SDL_GetSurfaceColorKey)(self.as_ptr(), &mut key) };
        ok.then_some(key)
    }

    pub fn set_color_mod(&mut self, r: u8, g: u8, b: u8) -> Sdl3Result<()> {
        // SAFETY: the surface is live.
        let ok = unsafe { (self.api.SDL_SetSurfaceColorMod)(self.as_ptr(), r, g, b) };
        self.ok(ok)
    }

    pub fn color_mod(&self) -> Sdl3Result<(u8, u8, u8)> {
        let (mut r, mut g, mut b) = (0, 0, 0);
        // SAFETY: out-pointers reference live locals.
        let ok = unsafe { (self.api.SDL_GetSurfaceColorMod)(self.as_ptr(), &mut r, &mut g, &mut b) };
        self.ok(ok)?;
        Ok((r, g, b))
    }

    pub fn set_alpha_mod(&mut self, alpha: u8) -> Sdl3Result<()> {
        // SAFETY: the surface is live.
        let ok = unsafe { (self.api.SDL_SetSurfaceAlphaMod)(self.as_ptr(), alpha) };
        self.ok(ok)
    }

    pub fn alpha_mod(&self) -> Sdl3Result<u8> {
        let mut alpha = 0;
        // SAFETY: the out-pointer references a live local.
        let ok = unsafe { (self.api.SDL_GetSurfaceAlphaMod)(self.as_ptr(), &mut alpha) };
        self.ok(ok)?;
        Ok(alpha)
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) -> Sdl3Result<()> {
        // SAFETY: the surface is live.
        let ok = unsafe { (self.api.SDL_SetSurfaceBlendMode)(self.as_ptr(), mode.0) };
        self.ok(ok)
    }

    pub fn blend_mode(&self) -> Sdl3Result<BlendMode> {
        let mut mode = 0;
        // SAFETY: the out-pointer references a live local.
        let ok = unsafe { (self.api.SDL_GetSurfaceBlendMode)(self.as_ptr(), &mut mode) };
        self.ok(ok)?;
        Ok(BlendMode(mode))
    }

    /// Restricts blits into this surface to `rect`, or to the whole surface
    /// with `None`. Returns whether the clip rectangle is non-empty.
    pub fn set_clip_rect(&mut self, rect: Option<Rect>) -> bool {
        let rect: Option<sys::SDL_Rect> = rect.map(Into::into);
        // SAFETY: the rect pointer is null or a live local.
        unsafe { (self.api.SDL_SetSurfaceClipRect)(self.as_ptr(), rect_ptr(&rect)) }
    }

    pub fn clip_rect(&self) -> Sdl3Result<Rect> {
        let mut rect = sys::SDL_Rect::default();
        // SAFETY: the out-pointer references a live local.
        let ok = unsafe { (self.api.SDL_GetSurfaceClipRect)(self.as_ptr(), &mut rect) };
        self.ok(ok)?;
        Ok(rect.into())
    }

    // ── Transforms ──────────────────────────────────────────────

    pub fn flip(&mut self, mode: FlipMode) -> Sdl3Result<()> {
        // SAFETY: the surface is live.
        let ok = unsafe { (self.api.SDL_FlipSurface)(self.as_ptr(), mode.raw()) };
        self.ok(ok)
    }

    /// A deep copy, including alternate images.
    pub fn duplicate(&self) -> Sdl3Result<Surface<'static>> {
        // SAFETY: the surface is live.
        let raw = unsafe { (self.api.SDL_DuplicateSurface)(self.as_ptr()) };
        Surface::owned(self.api, raw)
    }

    pub fn scale(&self, width: i32, height: i32, mode: ScaleMode) -> Sdl3Result<Surface<'static>> {
        // SAFETY: the surface is live.
        let raw = unsafe { (self.api.SDL_ScaleSurface)(self.as_ptr(), width, height, mode.raw()) };
        Surface::owned(self.api, raw)
    }

    pub fn convert(&self, format: PixelFormat) -> Sdl3Result<Surface<'static>> {
        // SAFETY: the surface is live.
        let raw = unsafe { (self.api.SDL_ConvertSurface)(self.as_ptr(), format.0) };
        Surface::owned(self.api, raw)
    }

    /// Converts to another format and colorspace. `palette` is used for
    /// indexed targets; `props` carries extra colorspace parameters.
    pub fn convert_with_colorspace(
        &self,
        format: PixelFormat,
        palette: Option<&Palette<'_>>,
        colorspace: Colorspace,
        props: PropertiesId,
    ) -> Sdl3Result<Surface<'static>> {
        let palette = palette.map_or(std::ptr::null_mut(), Palette::as_ptr);
        // SAFETY: the surface is live; the palette pointer is null or live.
        let raw = unsafe {
            (self.api.SDL_ConvertSurfaceAndColorspace)(self.as_ptr(), format.0, palette, colorspace.0, props.0)
        };
        Surface::owned(self.api, raw)
    }

    /// Multiplies color channels by alpha in place.
    pub fn premultiply_alpha(&mut self, linear: bool) -> Sdl3Result<()> {
        // SAFETY: the surface is live.
        let ok = unsafe { (self.api.SDL_PremultiplySurfaceAlpha)(self.as_ptr(), linear) };
        self.ok(ok)
    }

    // ── Fill ────────────────────────────────────────────────────

    /// Fills the whole surface, ignoring the clip rectangle.
    pub fn clear(&mut self, color: FColor) -> Sdl3Result<()> {
        // SAFETY: the surface is live.
        let ok = unsafe { (self.api.SDL_ClearSurface)(self.as_ptr(), color.r, color.g, color.b, color.a) };
        self.ok(ok)
    }

    /// Fills `rect`, or the clip rectangle with `None`, with a mapped pixel.
    pub fn fill_rect(&mut self, rect: Option<Rect>, color: u32) -> Sdl3Result<()> {
        let rect: Option<sys::SDL_Rect> = rect.map(Into::into);
        // SAFETY: the rect pointer is null or a live local.
        let ok = unsafe { (self.api.SDL_FillSurfaceRect)(self.as_ptr(), rect_ptr(&rect), color) };
        self.ok(ok)
    }

    pub fn fill_rects(&mut self, rects: &[Rect], color: u32) -> Sdl3Result<()> {
        let count = to_c_int(rects.len(), "rect count").map_err(Sdl3Error::Surface)?;
        let native: Vec<sys::SDL_Rect> = rects.iter().copied().map(Into::into).collect();
        // SAFETY: `native` holds `count` rects.
        let ok = unsafe { (self.api.SDL_FillSurfaceRects)(self.as_ptr(), native.as_ptr(), count, color) };
        self.ok(ok)
    }

    // ── Blits ───────────────────────────────────────────────────

    /// Copies `src_rect` (or all of `self`) to `dst` at the position of
    /// `dst_rect` (or the origin). Only the position of `dst_rect` is used.
    pub fn blit(&self, src_rect: Option<Rect>, dst: &mut Surface<'_>, dst_rect: Option<Rect>) -> Sdl3Result<()> {
        let (s, d): (Option<sys::SDL_Rect>, Option<sys::SDL_Rect>) = (src_rect.map(Into::into), dst_rect.map(Into::into));
        // SAFETY: both surfaces are live and distinct; rect pointers are null or live.
        let ok = unsafe { (self.api.SDL_BlitSurface)(self.as_ptr(), rect_ptr(&s), dst.as_ptr(), rect_ptr(&d)) };
        self.ok(ok)
    }

    /// Blit without clipping or validation.
    ///
    /// # Safety
    /// Both rectangles must lie inside their surfaces and have equal sizes,
    /// and neither surface may be locked.
    pub unsafe fn blit_unchecked(&self, src_rect: Rect, dst: &mut Surface<'_>, dst_rect: Rect) -> Sdl3Result<()> {
        let (s, d): (sys::SDL_Rect, sys::SDL_Rect) = (src_rect.into(), dst_rect.into());
        // SAFETY: the caller guarantees the rectangles are in bounds.
        let ok = unsafe { (self.api.SDL_BlitSurfaceUnchecked)(self.as_ptr(), &s, dst.as_ptr(), &d) };
        self.ok(ok)
    }

    /// Scaled blit; `dst_rect` of `None` fills the whole destination.
    pub fn blit_scaled(
        &self,
        src_rect: Option<Rect>,
        dst: &mut Surface<'_>,
        dst_rect: Option<Rect>,
        mode: ScaleMode,
    ) -> Sdl3Result<()> {
        let (s, d): (Option<sys::SDL_Rect>, Option<sys::SDL_Rect>) = (src_rect.map(Into::into), dst_rect.map(Into::into));
        // SAFETY: both surfaces are live; rect pointers are null or live.
        let ok = unsafe {
            (self.api.SDL_BlitSurfaceScaled)(self.as_ptr(), rect_ptr(&s), dst.as_ptr(), rect_ptr(&d), mode.raw())
        };
        self.ok(ok)
    }

    /// Scaled blit without clipping or validation.
    ///
    /// # Safety
    /// Same contract as [`blit_unchecked`](Self::blit_unchecked), except the
    /// rectangle sizes may differ.
    pub unsafe fn blit_unchecked_scaled(
        &self,
        src_rect: Rect,
        dst: &mut Surface<'_>,
        dst_rect: Rect,
        mode: ScaleMode,
    ) -> Sdl3Result<()> {
        let (s, d): (sys::SDL_Rect, sys::SDL_Rect) = (src_rect.into(), dst_rect.into());
        // SAFETY: the caller guarantees the rectangles are in bounds.
        let ok = unsafe { (self.api.SDL_BlitSurfaceUncheckedScaled)(self.as_ptr(), &s, dst.as_ptr(), &d, mode.raw()) };
        self.ok(ok)
    }

    /// Scaled copy between surfaces of the same format, ignoring blend state.
    pub fn stretch(
        &self,
        src_rect: Option<Rect>,
        dst: &mut Surface<'_>,
        dst_rect: Option<Rect>,
        mode: ScaleMode,
    ) -> Sdl3Result<()> {
        let (s, d): (Option<sys::SDL_Rect>, Option<sys::SDL_Rect>) = (src_rect.map(Into::into), dst_rect.map(Into::into));
        // SAFETY: both surfaces are live; rect pointers are null or live.
        let ok = unsafe {
            (self.api.SDL_StretchSurface)(self.as_ptr(), rect_ptr(&s), dst.as_ptr(), rect_ptr(&d), mode.raw())
        };
        self.ok(ok)
    }

    /// Repeats `src_rect` across `dst_rect` without scaling.
    pub fn blit_tiled(&self, src_rect: Option<Rect>, dst: &mut Surface<'_>, dst_rect: Option<Rect>) -> Sdl3Result<()> {
        let (s, d): (Option<sys::SDL_Rect>, Option<sys::SDL_Rect>) = (src_rect.map(Into::into), dst_rect.map(Into::into));
        // SAFETY: both surfaces are live; rect pointers are null or live.
        let ok = unsafe { (self.api.SDL_BlitSurfaceTiled)(self.as_ptr(), rect_ptr(&s), dst.as_ptr(), rect_ptr(&d)) };
        self.ok(ok)
    }

    /// Repeats `src_rect`, scaled by `scale`, across `dst_rect`.
    pub fn blit_tiled_with_scale(
        &self,
        src_rect: Option<Rect>,
        scale: f32,
        mode: ScaleMode,
        dst: &mut Surface<'_>,
        dst_rect: Option<Rect>,
    ) -> Sdl3Result<()> {
        let (s, d): (Option<sys::SDL_Rect>, Option<sys::SDL_Rect>) = (src_rect.map(Into::into), dst_rect.map(Into::into));
        // SAFETY: both surfaces are live; rect pointers are null or live.
        let ok = unsafe {
            (self.api.SDL_BlitSurfaceTiledWithScale)(
                self.as_ptr(),
                rect_ptr(&s),
                scale,
                mode.raw(),
                dst.as_ptr(),
                rect_ptr(&d),
            )
        };
        self.ok(ok)
    }

    /// Nine-slice blit of `src_rect` into `dst_rect`.
    pub fn blit_9grid(
        &self,
        src_rect: Option<Rect>,
        insets: GridInsets,
        scale: f32,
        mode: ScaleMode,
        dst: &mut Surface<'_>,
        dst_rect: Option<Rect>,
    ) -> Sdl3Result<()> {
        let (s, d): (Option<sys::SDL_Rect>, Option<sys::SDL_Rect>) = (src_rect.map(Into::into), dst_rect.map(Into::into));
        // SAFETY: both surfaces are live; rect pointers are null or live.
        let ok = unsafe {
            (self.api.SDL_BlitSurface9Grid)(
                self.as_ptr(),
                rect_ptr(&s),
                insets.left,
                insets.right,
                insets.top,
                insets.bottom,
                scale,
                mode.raw(),
                dst.as_ptr(),
                rect_ptr(&d),
            )
        };
        self.ok(ok)
    }

    // ── Pixels ──────────────────────────────────────────────────

    /// Maps an opaque color using this surface's format and palette.
    #[must_use]
    pub fn map_rgb(&self, r: u8, g: u8, b: u8) -> u32 {
        // SAFETY: the surface is live.
        unsafe { (self.api.SDL_MapSurfaceRGB)(self.as_ptr(), r, g, b) }
    }

    #[must_use]
    pub fn map_rgba(&self, color: Color) -> u32 {
        // SAFETY: the surface is live.
        unsafe { (self.api.SDL_MapSurfaceRGBA)(self.as_ptr(), color.r, color.g, color.b, color.a) }
    }

    pub fn read_pixel(&self, x: i32, y: i32) -> Sdl3Result<Color> {
        let mut c = Color::default();
        // SAFETY: out-pointers reference fields of `c`.
        let ok = unsafe {
            (self.api.SDL_ReadSurfacePixel)(self.as_ptr(), x, y, &mut c.r, &mut c.g, &mut c.b, &mut c.a)
        };
        self.ok(ok)?;
        Ok(c)
    }

    pub fn read_pixel_float(&self, x: i32, y: i32) -> Sdl3Result<FColor> {
        let mut c = FColor::default();
        // SAFETY: out-pointers reference fields of `c`.
        let ok = unsafe {
            (self.api.SDL_ReadSurfacePixelFloat)(self.as_ptr(), x, y, &mut c.r, &mut c.g, &mut c.b, &mut c.a)
        };
        self.ok(ok)?;
        Ok(c)
    }

    pub fn write_pixel(&mut self, x: i32, y: i32, color: Color) -> Sdl3Result<()> {
        // SAFETY: the surface is live.
        let ok = unsafe {
            (self.api.SDL_WriteSurfacePixel)(self.as_ptr(), x, y, color.r, color.g, color.b, color.a)
        };
        self.ok(ok)
    }

    pub fn write_pixel_float(&mut self, x: i32, y: i32, color: FColor) -> Sdl3Result<()> {
        // SAFETY: the surface is live.
        let ok = unsafe {
            (self.api.SDL_WriteSurfacePixelFloat)(self.as_ptr(), x, y, color.r, color.g, color.b, color.a)
        };
        self.ok(ok)
    }
}

impl Drop for Surface<'_> {
    fn drop(&mut self) {
        if self.owned {
            // SAFETY: owned surfaces are released exactly once here. SDL
            // decrements the refcount, so shared alternates stay valid.
            unsafe { (self.api.SDL_DestroySurface)(self.as_ptr()) };
        }
    }
}

impl fmt::Debug for Surface<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("pitch", &self.pitch())
            .field("format", &self.format())
            .field("flags", &self.flags())
            .field("owned", &self.owned)
            .finish()
    }
}

/// One entry of [`Surface::images`]. Only the `&self` half of the surface
/// API is reachable, since the same pixels may be listed more than once.
#[derive(Debug)]
pub struct SurfaceImage<'s> {
    surface: Surface<'s>,
}

impl<'s> Deref for SurfaceImage<'s> {
    type Target = Surface<'s>;

    fn deref(&self) -> &Surface<'s> {
        &self.surface
    }
}

/// A locked surface; unlocks on drop.
#[must_use = "the surface is unlocked as soon as the guard is dropped"]
pub struct SurfaceLock<'s> {
    raw: NonNull<sys::SDL_Surface>,
    api: &'static Sdl3Api,
    _marker: PhantomData<&'s mut ()>,
}

impl SurfaceLock<'_> {
    fn header(&self) -> &sys::SDL_Surface {
        // SAFETY: the guard mutably borrows a live surface.
        unsafe { self.raw.as_ref() }
    }

    fn byte_len(&self) -> usize {
        let h = self.header();
        usize::try_from(h.h).unwrap_or(0) * usize::try_from(h.pitch).unwrap_or(0)
    }

    #[must_use]
    pub fn pitch(&self) -> usize {
        usize::try_from(self.header().pitch).unwrap_or(0)
    }

    /// All rows, `height * pitch` bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        let ptr = self.header().pixels;
        if ptr.is_null() {
            return &[];
        }
        // SAFETY: a locked surface exposes `h * pitch` bytes at `pixels`.
        unsafe { std::slice::from_raw_parts(ptr.cast::<u8>(), self.byte_len()) }
    }

    #[must_use]
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        let ptr = self.header().pixels;
        if ptr.is_null() {
            return &mut [];
        }
        let len = self.byte_len();
        // SAFETY: as in `pixels`; the guard is borrowed mutably.
        unsafe { std::slice::from_raw_parts_mut(ptr.cast::<u8>(), len) }
    }

    /// One row of pixel bytes, or `None` past the last row.
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let pitch = self.pitch();
        let start = y.checked_mul(pitch)?;
        self.pixels().get(start..start.checked_add(pitch)?)
    }
}

impl Drop for SurfaceLock<'_> {
    fn drop(&mut self) {
        // SAFETY: the surface was locked by `Surface::lock`.
        unsafe { (self.api.SDL_UnlockSurface)(self.raw.as_ptr()) };
    }
}

// ── Buffer conversion ───────────────────────────────────────────

/// Caller pixels read by the conversion functions.
#[derive(Debug, Clone, Copy)]
pub struct PixelSource<'a> {
    pub format: PixelFormat,
    pub pitch: usize,
    pub data: &'a [u8],
}

/// Caller pixels written by the conversion functions.
#[derive(Debug)]
pub struct PixelTarget<'a> {
    pub format: PixelFormat,
    pub pitch: usize,
    pub data: &'a mut [u8],
}

/// Colorspace of one side of a conversion plus optional extra parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorspaceInfo {
    pub colorspace: Colorspace,
    pub properties: PropertiesId,
}

/// Bytes SDL touches for a `width` by `height` block in `format` with rows
/// `pitch` bytes apart, counting the chroma planes of planar YUV formats.
fn required_len(format: PixelFormat, width: i32, height: i32, pitch: usize) -> Sdl3Result<usize> {
    let w = usize::try_from(width).map_err(|_| Sdl3Error::Surface(format!("invalid width {width}")))?;
    let h = usize::try_from(height).map_err(|_| Sdl3Error::Surface(format!("invalid height {height}")))?;
    let overflow = || Sdl3Error::Surface(format!("{w}x{h} pixels with pitch {pitch} overflow"));

    let (min_pitch, chroma_rows) = match format {
        PixelFormat::YV12 | PixelFormat::IYUV | PixelFormat::NV12 | PixelFormat::NV21 => {
            (w, h.div_ceil(2))
        }
        // 16-bit samples; the interleaved chroma row covers whole pairs.
        PixelFormat::P010 => (w.div_ceil(2).checked_mul(4).ok_or_else(overflow)?, h.div_ceil(2)),
        PixelFormat::YUY2 | PixelFormat::UYVY | PixelFormat::YVYU => {
            (w.div_ceil(2).checked_mul(4).ok_or_else(overflow)?, 0)
        }
        other if other.is_fourcc() => {
            return Err(Sdl3Error::Surface(format!("no known buffer layout for format {other}")));
        }
        other => {
            let by_bytes = w.checked_mul(usize::from(other.bytes_per_pixel()));
            let by_bits = w
                .checked_mul(usize::from(other.bits_per_pixel()))
                .map(|bits| bits.div_ceil(8));
            let row = by_bytes.zip(by_bits).map(|(a, b)| a.max(b)).ok_or_else(overflow)?;
            (row, 0)
        }
    };
    if pitch < min_pitch {
        return Err(Sdl3Error::Surface(format!(
            "pitch of {pitch} bytes is narrower than a row of {min_pitch} bytes"
        )));
    }
    // Chroma rows use the luma pitch rounded up to an even byte count.
    let chroma_pitch = pitch.checked_add(pitch % 2).ok_or_else(overflow)?;
    h.checked_mul(pitch)
        .zip(chroma_rows.checked_mul(chroma_pitch))
        .and_then(|(luma, chroma)| luma.checked_add(chroma))
        .ok_or_else(overflow)
}

fn check_buffer(len: usize, needed: usize) -> Sdl3Result<()> {
    if len < needed {
        return Err(Sdl3Error::Surface(format!(
            "buffer of {len} bytes is smaller than the {needed} bytes required"
        )));
    }
    Ok(())
}

struct Checked {
    src_pitch: i32,
    dst_pitch: i32,
}

fn check_conversion(
    width: i32,
    height: i32,
    src: &PixelSource<'_>,
    dst: &PixelTarget<'_>,
) -> Sdl3Result<Checked> {
    check_buffer(src.data.len(), required_len(src.format, width, height, src.pitch)?)?;
    check_buffer(dst.data.len(), required_len(dst.format, width, height, dst.pitch)?)?;
    Ok(Checked {
        src_pitch: to_c_int(src.pitch, "source pitch").map_err(Sdl3Error::Surface)?,
        dst_pitch: to_c_int(dst.pitch, "destination pitch").map_err(Sdl3Error::Surface)?,
    })
}

/// Converts a block of pixels between formats.
pub fn convert_pixels(width: i32, height: i32, src: &PixelSource<'_>, dst: &mut PixelTarget<'_>) -> Sdl3Result<()> {
    let pitches = check_conversion(width, height, src, dst)?;
    let api = api()?;
    // SAFETY: both buffers were checked against the full layout of their format.
    let ok = unsafe {
        (api.SDL_ConvertPixels)(
            width,
            height,
            src.format.0,
            src.data.as_ptr().cast::<c_void>(),
            pitches.src_pitch,
            dst.format.0,
            dst.data.as_mut_ptr().cast::<c_void>(),
            pitches.dst_pitch,
        )
    };
    check(api, ok, Sdl3Error::Surface)
}

/// Converts a block of pixels between formats and colorspaces.
pub fn convert_pixels_and_colorspace(
    width: i32,
    height: i32,
    src: &PixelSource<'_>,
    src_space: ColorspaceInfo,
    dst: &mut PixelTarget<'_>,
    dst_space: ColorspaceInfo,
) -> Sdl3Result<()> {
    let pitches = check_conversion(width, height, src, dst)?;
    let api = api()?;
    // SAFETY: both buffers were checked against the full layout of their format.
    let ok = unsafe {
        (api.SDL_ConvertPixelsAndColorspace)(
            width,
            height,
            src.format.0,
            src_space.colorspace.0,
            src_space.properties.0,
            src.data.as_ptr().cast::<c_void>(),
            pitches.src_pitch,
            dst.format.0,
            dst_space.colorspace.0,
            dst_space.properties.0,
            dst.data.as_mut_ptr().cast::<c_void>(),
            pitches.dst_pitch,
        )
    };
    check(api, ok, Sdl3Error::Surface)
}

/// Premultiplies alpha while converting a block of pixels.
pub fn premultiply_alpha(
    width: i32,
    height: i32,
    src: &PixelSource<'_>,
    dst: &mut PixelTarget<'_>,
    linear: bool,
) -> Sdl3Result<()> {
    let pitches = check_conversion(width, height, src, dst)?;
    let api = api()?;
    // SAFETY: both buffers were checked against the full layout of their format.
    let ok = unsafe {
        (api.SDL_PremultiplyAlpha)(
            width,
            height,
            src.format.0,
            src.data.as_ptr().cast::<c_void>(),
            pitches.src_pitch,
            dst.format.0,
            dst.data.as_mut_ptr().cast::<c_void>(),
            pitches.dst_pitch,
            linear,
        )
    };
    check(api, ok, Sdl3Error::Surface)
}
