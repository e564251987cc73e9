//! The table of native entry points.
//!
//! Every field is a plain function pointer resolved by name when the library
//! is loaded. Variadic logging and printf entry points keep their C varargs
//! signature; callers pass a `"%s"` format and a single string argument.

use std::ffi::{c_char, c_int, c_void};

use libloading::Library;

use crate::error::LoadError;
use crate::types::*;

macro_rules! sdl3_api {
    ($( $name:ident : $fty:ty; )*) => {
        /// Function pointers resolved from a loaded SDL3 shared library.
        ///
        /// The library handle is stored alongside the pointers so they stay
        /// valid for as long as the table exists.
        #[allow(non_snake_case)]
        pub struct Sdl3Api {
            $( pub $name: $fty, )*
            _library: Library,
        }

        impl Sdl3Api {
            /// Resolves every entry point from an opened library.
            ///
            /// # Safety
            /// `library` must be an SDL3 build whose exports match the
            /// declared signatures.
            #[allow(non_snake_case)]
            pub(crate) unsafe fn from_library(
                library: Library,
                path: &str,
            ) -> Result<Self, LoadError> {
                $(
                    // SAFETY: the caller guarantees the exported symbol has this signature.
                    let $name: $fty = unsafe {
                        library.get::<$fty>(concat!(stringify!($name), "\0").as_bytes())
                    }
                    .map(|symbol| *symbol)
                    .map_err(|e| LoadError::MissingSymbol {
                        library: path.to_string(),
                        symbol: stringify!($name),
                        reason: e.to_string(),
                    })?;
                )*
                Ok(Self { $( $name, )* _library: library })
            }

            /// Names of every entry point the table binds.
            pub const SYMBOLS: &'static [&'static str] = &[$( stringify!($name), )*];
        }
    };
}

sdl3_api! {
    // stdinc / error / version
    SDL_free: unsafe extern "C" fn(mem: *mut c_void);
    SDL_GetError: unsafe extern "C" fn() -> *const c_char;
    SDL_ClearError: unsafe extern "C" fn() -> bool;
    SDL_GetVersion: unsafe extern "C" fn() -> c_int;
    SDL_GetRevision: unsafe extern "C" fn() -> *const c_char;

    // init
    SDL_Init: unsafe extern "C" fn(flags: SDL_InitFlags) -> bool;
    SDL_InitSubSystem: unsafe extern "C" fn(flags: SDL_InitFlags) -> bool;
    SDL_QuitSubSystem: unsafe extern "C" fn(flags: SDL_InitFlags);
    SDL_WasInit: unsafe extern "C" fn(flags: SDL_InitFlags) -> SDL_InitFlags;
    SDL_Quit: unsafe extern "C" fn();
    SDL_SetAppMetadata: unsafe extern "C" fn(
        appname: *const c_char,
        appversion: *const c_char,
        appidentifier: *const c_char,
    ) -> bool;
    SDL_SetAppMetadataProperty: unsafe extern "C" fn(name: *const c_char, value: *const c_char) -> bool;
    SDL_GetAppMetadataProperty: unsafe extern "C" fn(name: *const c_char) -> *const c_char;

    // properties
    SDL_GetGlobalProperties: unsafe extern "C" fn() -> SDL_PropertiesID;
    SDL_CreateProperties: unsafe extern "C" fn() -> SDL_PropertiesID;
    SDL_CopyProperties: unsafe extern "C" fn(src: SDL_PropertiesID, dst: SDL_PropertiesID) -> bool;
    SDL_LockProperties: unsafe extern "C" fn(props: SDL_PropertiesID) -> bool;
    SDL_UnlockProperties: unsafe extern "C" fn(props: SDL_PropertiesID);
    SDL_SetPointerPropertyWithCleanup: unsafe extern "C" fn(
        props: SDL_PropertiesID,
        name: *const c_char,
        value: *mut c_void,
        cleanup: SDL_CleanupPropertyCallback,
        userdata: *mut c_void,
    ) -> bool;
    SDL_SetPointerProperty: unsafe extern "C" fn(props: SDL_PropertiesID, name: *const c_char, value: *mut c_void) -> bool;
    SDL_SetStringProperty: unsafe extern "C" fn(props: SDL_PropertiesID, name: *const c_char, value: *const c_char) -> bool;
    SDL_SetNumberProperty: unsafe extern "C" fn(props: SDL_PropertiesID, name: *const c_char, value: i64) -> bool;
    SDL_SetFloatProperty: unsafe extern "C" fn(props: SDL_PropertiesID, name: *const c_char, value: f32) -> bool;
    SDL_SetBooleanProperty: unsafe extern "C" fn(props: SDL_PropertiesID, name: *const c_char, value: bool) -> bool;
    SDL_HasProperty: unsafe extern "C" fn(props: SDL_PropertiesID, name: *const c_char) -> bool;
    SDL_GetPropertyType: unsafe extern "C" fn(props: SDL_PropertiesID, name: *const c_char) -> SDL_PropertyType;
    SDL_GetPointerProperty: unsafe extern "C" fn(props: SDL_PropertiesID, name: *const c_char, default_value: *mut c_void) -> *mut c_void;
    SDL_GetStringProperty: unsafe extern "C" fn(props: SDL_PropertiesID, name: *const c_char, default_value: *const c_char) -> *const c_char;
    SDL_GetNumberProperty: unsafe extern "C" fn(props: SDL_PropertiesID, name: *const c_char, default_value: i64) -> i64;
    SDL_GetFloatProperty: unsafe extern "C" fn(props: SDL_PropertiesID, name: *const c_char, default_value: f32) -> f32;
    SDL_GetBooleanProperty: unsafe extern "C" fn(props: SDL_PropertiesID, name: *const c_char, default_value: bool) -> bool;
    SDL_ClearProperty: unsafe extern "C" fn(props: SDL_PropertiesID, name: *const c_char) -> bool;
    SDL_EnumerateProperties: unsafe extern "C" fn(
        props: SDL_PropertiesID,
        callback: SDL_EnumeratePropertiesCallback,
        userdata: *mut c_void,
    ) -> bool;
    SDL_DestroyProperties: unsafe extern "C" fn(props: SDL_PropertiesID);

    // rect
    SDL_HasRectIntersection: unsafe extern "C" fn(a: *const SDL_Rect, b: *const SDL_Rect) -> bool;
    SDL_GetRectIntersection: unsafe extern "C" fn(a: *const SDL_Rect, b: *const SDL_Rect, result: *mut SDL_Rect) -> bool;
    SDL_GetRectUnion: unsafe extern "C" fn(a: *const SDL_Rect, b: *const SDL_Rect, result: *mut SDL_Rect) -> bool;
    SDL_GetRectEnclosingPoints: unsafe extern "C" fn(
        points: *const SDL_Point,
        count: c_int,
        clip: *const SDL_Rect,
        result: *mut SDL_Rect,
    ) -> bool;
    SDL_GetRectAndLineIntersection: unsafe extern "C" fn(
        rect: *const SDL_Rect,
        x1: *mut c_int,
        y1: *mut c_int,
        x2: *mut c_int,
        y2: *mut c_int,
    ) -> bool;
    SDL_HasRectIntersectionFloat: unsafe extern "C" fn(a: *const SDL_FRect, b: *const SDL_FRect) -> bool;
    SDL_GetRectIntersectionFloat: unsafe extern "C" fn(a: *const SDL_FRect, b: *const SDL_FRect, result: *mut SDL_FRect) -> bool;
    SDL_GetRectUnionFloat: unsafe extern "C" fn(a: *const SDL_FRect, b: *const SDL_FRect, result: *mut SDL_FRect) -> bool;
    SDL_GetRectEnclosingPointsFloat: unsafe extern "C" fn(
        points: *const SDL_FPoint,
        count: c_int,
        clip: *const SDL_FRect,
        result: *mut SDL_FRect,
    ) -> bool;
    SDL_GetRectAndLineIntersectionFloat: unsafe extern "C" fn(
        rect: *const SDL_FRect,
        x1: *mut f32,
        y1: *mut f32,
        x2: *mut f32,
        y2: *mut f32,
    ) -> bool;

    // pixels
    SDL_GetPixelFormatName: unsafe extern "C" fn(format: SDL_PixelFormat) -> *const c_char;
    SDL_GetMasksForPixelFormat: unsafe extern "C" fn(
        format: SDL_PixelFormat,
        bpp: *mut c_int,
        rmask: *mut u32,
        gmask: *mut u32,
        bmask: *mut u32,
        amask: *mut u32,
    ) -> bool;
    SDL_GetPixelFormatForMasks: unsafe extern "C" fn(bpp: c_int, rmask: u32, gmask: u32, bmask: u32, amask: u32) -> SDL_PixelFormat;
    SDL_GetPixelFormatDetails: unsafe extern "C" fn(format: SDL_PixelFormat) -> *const SDL_PixelFormatDetails;
    SDL_CreatePalette: unsafe extern "C" fn(ncolors: c_int) -> *mut SDL_Palette;
    SDL_SetPaletteColors: unsafe extern "C" fn(
        palette: *mut SDL_Palette,
        colors: *const SDL_Color,
        firstcolor: c_int,
        ncolors: c_int,
    ) -> bool;
    SDL_DestroyPalette: unsafe extern "C" fn(palette: *mut SDL_Palette);
    SDL_MapRGB: unsafe extern "C" fn(
        format: *const SDL_PixelFormatDetails,
        palette: *const SDL_Palette,
        r: u8,
        g: u8,
        b: u8,
    ) -> u32;
    SDL_MapRGBA: unsafe extern "C" fn(
        format: *const SDL_PixelFormatDetails,
        palette: *const SDL_Palette,
        r: u8,
        g: u8,
        b: u8,
        a: u8,
    ) -> u32;
    SDL_GetRGB: unsafe extern "C" fn(
        pixel: u32,
        format: *const SDL_PixelFormatDetails,
        palette: *const SDL_Palette,
        r: *mut u8,
        g: *mut u8,
        b: *mut u8,
    );
    SDL_GetRGBA: unsafe extern "C" fn(
        pixel: u32,
        format: *const SDL_PixelFormatDetails,
        palette: *const SDL_Palette,
        r: *mut u8,
        g: *mut u8,
        b: *mut u8,
        a: *mut u8,
    );

    // blendmode
    SDL_ComposeCustomBlendMode: unsafe extern "C" fn(
        src_color_factor: SDL_BlendFactor,
        dst_color_factor: SDL_BlendFactor,
        color_operation: SDL_BlendOperation,
        src_alpha_factor: SDL_BlendFactor,
        dst_alpha_factor: SDL_BlendFactor,
        alpha_operation: SDL_BlendOperation,
    ) -> SDL_BlendMode;

    // surface
    SDL_CreateSurface: unsafe extern "C" fn(width: c_int, height: c_int, format: SDL_PixelFormat) -> *mut SDL_Surface;
    SDL_CreateSurfaceFrom: unsafe extern "C" fn(
        width: c_int,
        height: c_int,
        format: SDL_PixelFormat,
        pixels: *mut c_void,
        pitch: c_int,
    ) -> *mut SDL_Surface;
    SDL_DestroySurface: unsafe extern "C" fn(surface: *mut SDL_Surface);
    SDL_GetSurfaceProperties: unsafe extern "C" fn(surface: *mut SDL_Surface) -> SDL_PropertiesID;
    SDL_SetSurfaceColorspace: unsafe extern "C" fn(surface: *mut SDL_Surface, colorspace: SDL_Colorspace) -> bool;
    SDL_GetSurfaceColorspace: unsafe extern "C" fn(surface: *mut SDL_Surface) -> SDL_Colorspace;
    SDL_CreateSurfacePalette: unsafe extern "C" fn(surface: *mut SDL_Surface) -> *mut SDL_Palette;
    SDL_SetSurfacePalette: unsafe extern "C" fn(surface: *mut SDL_Surface, palette: *mut SDL_Palette) -> bool;
    SDL_GetSurfacePalette: unsafe extern "C" fn(surface: *mut SDL_Surface) -> *mut SDL_Palette;
    SDL_AddSurfaceAlternateImage: unsafe extern "C" fn(surface: *mut SDL_Surface, image: *mut SDL_Surface) -> bool;
    SDL_SurfaceHasAlternateImages: unsafe extern "C" fn(surface: *mut SDL_Surface) -> bool;
    SDL_GetSurfaceImages: unsafe extern "C" fn(surface: *mut SDL_Surface, count: *mut c_int) -> *mut *mut SDL_Surface;
    SDL_RemoveSurfaceAlternateImages: unsafe extern "C" fn(surface: *mut SDL_Surface);
    SDL_LockSurface: unsafe extern "C" fn(surface: *mut SDL_Surface) -> bool;
    SDL_UnlockSurface: unsafe extern "C" fn(surface: *mut SDL_Surface);
    SDL_LoadBMP_IO: unsafe extern "C" fn(src: *mut SDL_IOStream, closeio: bool) -> *mut SDL_Surface;
    SDL_LoadBMP: unsafe extern "C" fn(file: *const c_char) -> *mut SDL_Surface;
    SDL_SaveBMP_IO: unsafe extern "C" fn(surface: *mut SDL_Surface, dst: *mut SDL_IOStream, closeio: bool) -> bool;
    SDL_SaveBMP: unsafe extern "C" fn(surface: *mut SDL_Surface, file: *const c_char) -> bool;
    SDL_SetSurfaceRLE: unsafe extern "C" fn(surface: *mut SDL_Surface, enabled: bool) -> bool;
    SDL_SurfaceHasRLE: unsafe extern "C" fn(surface: *mut SDL_Surface) -> bool;
    SDL_SetSurfaceColorKey: unsafe extern "C" fn(surface: *mut SDL_Surface, enabled: bool, key: u32) -> bool;
    SDL_SurfaceHasColorKey: unsafe extern "C" fn(surface: *mut SDL_Surface) -> bool;
    SDL_GetSurfaceColorKey: unsafe extern "C" fn(surface: *mut SDL_Surface, key: *mut u32) -> bool;
    SDL_SetSurfaceColorMod: unsafe extern "C" fn(surface: *mut SDL_Surface, r: u8, g: u8, b: u8) -> bool;
    SDL_GetSurfaceColorMod: unsafe extern "C" fn(surface: *mut SDL_Surface, r: *mut u8, g: *mut u8, b: *mut u8) -> bool;
    SDL_SetSurfaceAlphaMod: unsafe extern "C" fn(surface: *mut SDL_Surface, alpha: u8) -> bool;
    SDL_GetSurfaceAlphaMod: unsafe extern "C" fn(surface: *mut SDL_Surface, alpha: *mut u8) -> bool;
    SDL_SetSurfaceBlendMode: unsafe extern "C" fn(surface: *mut SDL_Surface, blend_mode: SDL_BlendMode) -> bool;
    SDL_GetSurfaceBlendMode: unsafe extern "C" fn(surface: *mut SDL_Surface, blend_mode: *mut SDL_BlendMode) -> bool;
    SDL_SetSurfaceClipRect: unsafe extern "C" fn(surface: *mut SDL_Surface, rect: *const SDL_Rect) -> bool;
    SDL_GetSurfaceClipRect: unsafe extern "C" fn(surface: *mut SDL_Surface, rect: *mut SDL_Rect) -> bool;
    SDL_FlipSurface: unsafe extern "C" fn(surface: *mut SDL_Surface, flip: SDL_FlipMode) -> bool;
    SDL_DuplicateSurface: unsafe extern "C" fn(surface: *mut SDL_Surface) -> *mut SDL_Surface;
    SDL_ScaleSurface: unsafe extern "C" fn(
        surface: *mut SDL_Surface,
        width: c_int,
        height: c_int,
        scale_mode: SDL_ScaleMode,
    ) -> *mut SDL_Surface;
    SDL_ConvertSurface: unsafe extern "C" fn(surface: *mut SDL_Surface, format: SDL_PixelFormat) -> *mut SDL_Surface;
    SDL_ConvertSurfaceAndColorspace: unsafe extern "C" fn(
        surface: *mut SDL_Surface,
        format: SDL_PixelFormat,
        palette: *mut SDL_Palette,
        colorspace: SDL_Colorspace,
        props: SDL_PropertiesID,
    ) -> *mut SDL_Surface;
    SDL_ConvertPixels: unsafe extern "C" fn(
        width: c_int,
        height: c_int,
        src_format: SDL_PixelFormat,
        src: *const c_void,
        src_pitch: c_int,
        dst_format: SDL_PixelFormat,
        dst: *mut c_void,
        dst_pitch: c_int,
    ) -> bool;
    SDL_ConvertPixelsAndColorspace: unsafe extern "C" fn(
        width: c_int,
        height: c_int,
        src_format: SDL_PixelFormat,
        src_colorspace: SDL_Colorspace,
        src_properties: SDL_PropertiesID,
        src: *const c_void,
        src_pitch: c_int,
        dst_format: SDL_PixelFormat,
        dst_colorspace: SDL_Colorspace,
        dst_properties: SDL_PropertiesID,
        dst: *mut c_void,
        dst_pitch: c_int,
    ) -> bool;
    SDL_PremultiplyAlpha: unsafe extern "C" fn(
        width: c_int,
        height: c_int,
        src_format: SDL_PixelFormat,
        src: *const c_void,
        src_pitch: c_int,
        dst_format: SDL_PixelFormat,
        dst: *mut c_void,
        dst_pitch: c_int,
        linear: bool,
    ) -> bool;
    SDL_PremultiplySurfaceAlpha: unsafe extern "C" fn(surface: *mut SDL_Surface, linear: bool) -> bool;
    SDL_ClearSurface: unsafe extern "C" fn(surface: *mut SDL_Surface, r: f32, g: f32, b: f32, a: f32) -> bool;
    SDL_FillSurfaceRect: unsafe extern "C" fn(dst: *mut SDL_Surface, rect: *const SDL_Rect, color: u32) -> bool;
    SDL_FillSurfaceRects: unsafe extern "C" fn(dst: *mut SDL_Surface, rects: *const SDL_Rect, count: c_int, color: u32) -> bool;
    SDL_BlitSurface: unsafe extern "C" fn(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
    ) -> bool;
    SDL_BlitSurfaceUnchecked: unsafe extern "C" fn(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
    ) -> bool;
    SDL_BlitSurfaceScaled: unsafe extern "C" fn(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
        scale_mode: SDL_ScaleMode,
    ) -> bool;
    SDL_BlitSurfaceUncheckedScaled: unsafe extern "C" fn(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
        scale_mode: SDL_ScaleMode,
    ) -> bool;
    SDL_StretchSurface: unsafe extern "C" fn(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
        scale_mode: SDL_ScaleMode,
    ) -> bool;
    SDL_BlitSurfaceTiled: unsafe extern "C" fn(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
    ) -> bool;
    SDL_BlitSurfaceTiledWithScale: unsafe extern "C" fn(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        scale: f32,
        scale_mode: SDL_ScaleMode,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
    ) -> bool;
    SDL_BlitSurface9Grid: unsafe extern "C" fn(
        src: *mut SDL_Surface,
        srcrect: *const SDL_Rect,
        left_width: c_int,
        right_width: c_int,
        top_height: c_int,
        bottom_height: c_int,
        scale: f32,
        scale_mode: SDL_ScaleMode,
        dst: *mut SDL_Surface,
        dstrect: *const SDL_Rect,
    ) -> bool;
    SDL_MapSurfaceRGB: unsafe extern "C" fn(surface: *mut SDL_Surface, r: u8, g: u8, b: u8) -> u32;
    SDL_MapSurfaceRGBA: unsafe extern "C" fn(surface: *mut SDL_Surface, r: u8, g: u8, b: u8, a: u8) -> u32;
    SDL_ReadSurfacePixel: unsafe extern "C" fn(
        surface: *mut SDL_Surface,
        x: c_int,
        y: c_int,
        r: *mut u8,
        g: *mut u8,
        b: *mut u8,
        a: *mut u8,
    ) -> bool;
    SDL_ReadSurfacePixelFloat: unsafe extern "C" fn(
        surface: *mut SDL_Surface,
        x: c_int,
        y: c_int,
        r: *mut f32,
        g: *mut f32,
        b: *mut f32,
        a: *mut f32,
    ) -> bool;
    SDL_WriteSurfacePixel: unsafe extern "C" fn(surface: *mut SDL_Surface, x: c_int, y: c_int, r: u8, g: u8, b: u8, a: u8) -> bool;
    SDL_WriteSurfacePixelFloat: unsafe extern "C" fn(surface: *mut SDL_Surface, x: c_int, y: c_int, r: f32, g: f32, b: f32, a: f32) -> bool;

    // clipboard
    SDL_SetClipboardText: unsafe extern "C" fn(text: *const c_char) -> bool;
    SDL_GetClipboardText: unsafe extern "C" fn() -> *mut c_char;
    SDL_HasClipboardText: unsafe extern "C" fn() -> bool;
    SDL_SetPrimarySelectionText: unsafe extern "C" fn(text: *const c_char) -> bool;
    SDL_GetPrimarySelectionText: unsafe extern "C" fn() -> *mut c_char;
    SDL_HasPrimarySelectionText: unsafe extern "C" fn() -> bool;
    SDL_SetClipboardData: unsafe extern "C" fn(
        callback: SDL_ClipboardDataCallback,
        cleanup: SDL_ClipboardCleanupCallback,
        userdata: *mut c_void,
        mime_types: *mut *const c_char,
        num_mime_types: usize,
    ) -> bool;
    SDL_ClearClipboardData: unsafe extern "C" fn() -> bool;
    SDL_GetClipboardData: unsafe extern "C" fn(mime_type: *const c_char, size: *mut usize) -> *mut c_void;
    SDL_HasClipboardData: unsafe extern "C" fn(mime_type: *const c_char) -> bool;
    SDL_GetClipboardMimeTypes: unsafe extern "C" fn(num_mime_types: *mut usize) -> *mut *mut c_char;

    // log
    SDL_SetLogPriorities: unsafe extern "C" fn(priority: SDL_LogPriority);
    SDL_SetLogPriority: unsafe extern "C" fn(category: c_int, priority: SDL_LogPriority);
    SDL_GetLogPriority: unsafe extern "C" fn(category: c_int) -> SDL_LogPriority;
    SDL_ResetLogPriorities: unsafe extern "C" fn();
    SDL_SetLogPriorityPrefix: unsafe extern "C" fn(priority: SDL_LogPriority, prefix: *const c_char) -> bool;
    SDL_Log: unsafe extern "C" fn(fmt: *const c_char, ...);
    SDL_LogTrace: unsafe extern "C" fn(category: c_int, fmt: *const c_char, ...);
    SDL_LogVerbose: unsafe extern "C" fn(category: c_int, fmt: *const c_char, ...);
    SDL_LogDebug: unsafe extern "C" fn(category: c_int, fmt: *const c_char, ...);
    SDL_LogInfo: unsafe extern "C" fn(category: c_int, fmt: *const c_char, ...);
    SDL_LogWarn: unsafe extern "C" fn(category: c_int, fmt: *const c_char, ...);
    SDL_LogError: unsafe extern "C" fn(category: c_int, fmt: *const c_char, ...);
    SDL_LogCritical: unsafe extern "C" fn(category: c_int, fmt: *const c_char, ...);
    SDL_LogMessage: unsafe extern "C" fn(category: c_int, priority: SDL_LogPriority, fmt: *const c_char, ...);
    SDL_GetDefaultLogOutputFunction: unsafe extern "C" fn() -> SDL_LogOutputFunction;
    SDL_GetLogOutputFunction: unsafe extern "C" fn(callback: *mut SDL_LogOutputFunction, userdata: *mut *mut c_void);
    SDL_SetLogOutputFunction: unsafe extern "C" fn(callback: SDL_LogOutputFunction, userdata: *mut c_void);

    // power
    SDL_GetPowerInfo: unsafe extern "C" fn(seconds: *mut c_int, percent: *mut c_int) -> SDL_PowerState;

    // iostream
    SDL_IOFromFile: unsafe extern "C" fn(file: *const c_char, mode: *const c_char) -> *mut SDL_IOStream;
    SDL_IOFromMem: unsafe extern "C" fn(mem: *mut c_void, size: usize) -> *mut SDL_IOStream;
    SDL_IOFromConstMem: unsafe extern "C" fn(mem: *const c_void, size: usize) -> *mut SDL_IOStream;
    SDL_IOFromDynamicMem: unsafe extern "C" fn() -> *mut SDL_IOStream;
    SDL_CloseIO: unsafe extern "C" fn(context: *mut SDL_IOStream) -> bool;
    SDL_GetIOProperties: unsafe extern "C" fn(context: *mut SDL_IOStream) -> SDL_PropertiesID;
    SDL_GetIOStatus: unsafe extern "C" fn(context: *mut SDL_IOStream) -> SDL_IOStatus;
    SDL_GetIOSize: unsafe extern "C" fn(context: *mut SDL_IOStream) -> i64;
    SDL_SeekIO: unsafe extern "C" fn(context: *mut SDL_IOStream, offset: i64, whence: SDL_IOWhence) -> i64;
    SDL_TellIO: unsafe extern "C" fn(context: *mut SDL_IOStream) -> i64;
    SDL_ReadIO: unsafe extern "C" fn(context: *mut SDL_IOStream, ptr: *mut c_void, size: usize) -> usize;
    SDL_WriteIO: unsafe extern "C" fn(context: *mut SDL_IOStream, ptr: *const c_void, size: usize) -> usize;
    SDL_IOprintf: unsafe extern "C" fn(context: *mut SDL_IOStream, fmt: *const c_char, ...) -> usize;
    SDL_FlushIO: unsafe extern "C" fn(context: *mut SDL_IOStream) -> bool;
    SDL_LoadFile_IO: unsafe extern "C" fn(src: *mut SDL_IOStream, datasize: *mut usize, closeio: bool) -> *mut c_void;
    SDL_LoadFile: unsafe extern "C" fn(file: *const c_char, datasize: *mut usize) -> *mut c_void;
    SDL_SaveFile_IO: unsafe extern "C" fn(src: *mut SDL_IOStream, data: *const c_void, datasize: usize, closeio: bool) -> bool;
    SDL_SaveFile: unsafe extern "C" fn(file: *const c_char, data: *const c_void, datasize: usize) -> bool;
    SDL_ReadU8: unsafe extern "C" fn(src: *mut SDL_IOStream, value: *mut u8) -> bool;
    SDL_ReadS8: unsafe extern "C" fn(src: *mut SDL_IOStream, value: *mut i8) -> bool;
    SDL_ReadU16LE: unsafe extern "C" fn(src: *mut SDL_IOStream, value: *mut u16) -> bool;
    SDL_ReadS16LE: unsafe extern "C" fn(src: *mut SDL_IOStream, value: *mut i16) -> bool;
    SDL_ReadU16BE: unsafe extern "C" fn(src: *mut SDL_IOStream, value: *mut u16) -> bool;
    SDL_ReadS16BE: unsafe extern "C" fn(src: *mut SDL_IOStream, value: *mut i16) -> bool;
    SDL_ReadU32LE: unsafe extern "C" fn(src: *mut SDL_IOStream, value: *mut u32) -> bool;
    SDL_ReadS32LE: unsafe extern "C" fn(src: *mut SDL_IOStream, value: *mut i32) -> bool;
    SDL_ReadU32BE: unsafe extern "C" fn(src: *mut SDL_IOStream, value: *mut u32) -> bool;
    SDL_ReadS32BE: unsafe extern "C" fn(src: *mut SDL_IOStream, value: *mut i32) -> bool;
    SDL_ReadU64LE: unsafe extern "C" fn(src: *mut SDL_IOStream, value: *mut u64) -> bool;
    SDL_ReadS64LE: unsafe extern "C" fn(src: *mut SDL_IOStream, value: *mut i64) -> bool;
    SDL_ReadU64BE: unsafe extern "C" fn(src: *mut SDL_IOStream, value: *mut u64) -> bool;
    SDL_ReadS64BE: unsafe extern "C" fn(src: *mut SDL_IOStream, value: *mut i64) -> bool;
    SDL_WriteU8: unsafe extern "C" fn(dst: *mut SDL_IOStream, value: u8) -> bool;
    SDL_WriteS8: unsafe extern "C" fn(dst: *mut SDL_IOStream, value: i8) -> bool;
    SDL_WriteU16LE: unsafe extern "C" fn(dst: *mut SDL_IOStream, value: u16) -> bool;
    SDL_WriteS16LE: unsafe extern "C" fn(dst: *mut SDL_IOStream, value: i16) -> bool;
    SDL_WriteU16BE: unsafe extern "C" fn(dst: *mut SDL_IOStream, value: u16) -> bool;
    SDL_WriteS16BE: unsafe extern "C" fn(dst: *mut SDL_IOStream, value: i16) -> bool;
    SDL_WriteU32LE: unsafe extern "C" fn(dst: *mut SDL_IOStream, value: u32) -> bool;
    SDL_WriteS32LE: unsafe extern "C" fn(dst: *mut SDL_IOStream, value: i32) -> bool;
    SDL_WriteU32BE: unsafe extern "C" fn(dst: *mut SDL_IOStream, value: u32) -> bool;
    SDL_WriteS32BE: unsafe extern "C" fn(dst: *mut SDL_IOStream, value: i32) -> bool;
    SDL_WriteU64LE: unsafe extern "C" fn(dst: *mut SDL_IOStream, value: u64) -> bool;
    SDL_WriteS64LE: unsafe extern "C" fn(dst: *mut SDL_IOStream, value: i64) -> bool;
    SDL_WriteU64BE: unsafe extern "C" fn(dst: *mut SDL_IOStream, value: u64) -> bool;
    SDL_WriteS64BE: unsafe extern "C" fn(dst: *mut SDL_IOStream, value: i64) -> bool;
}
