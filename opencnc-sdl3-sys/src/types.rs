//! Native struct layouts, scalar typedefs and callback signatures.
//!
//! Layouts follow the SDL 3.2 public headers field for field.

use std::ffi::{c_char, c_int, c_void};
use std::marker::{PhantomData, PhantomPinned};

pub type SDL_PixelFormat = u32;
pub type SDL_Colorspace = u32;
pub type SDL_BlendMode = u32;
pub type SDL_PropertiesID = u32;
pub type SDL_InitFlags = u32;
pub type SDL_SurfaceFlags = u32;

pub type SDL_BlendOperation = c_int;
pub type SDL_BlendFactor = c_int;
pub type SDL_PropertyType = c_int;
pub type SDL_LogPriority = c_int;
pub type SDL_PowerState = c_int;
pub type SDL_IOStatus = c_int;
pub type SDL_IOWhence = c_int;
pub type SDL_ScaleMode = c_int;
pub type SDL_FlipMode = c_int;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_Point {
    pub x: c_int,
    pub y: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SDL_FPoint {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_Rect {
    pub x: c_int,
    pub y: c_int,
    pub w: c_int,
    pub h: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SDL_FRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SDL_Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SDL_FColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// A set of indexed colors. `colors` points at `ncolors` entries.
#[repr(C)]
#[derive(Debug)]
pub struct SDL_Palette {
    pub ncolors: c_int,
    pub colors: *mut SDL_Color,
    pub version: u32,
    pub refcount: c_int,
}

/// Channel layout of a pixel format, owned by SDL for the life of the process.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SDL_PixelFormatDetails {
    pub format: SDL_PixelFormat,
    pub bits_per_pixel: u8,
    pub bytes_per_pixel: u8,
    pub padding: [u8; 2],
    pub Rmask: u32,
    pub Gmask: u32,
    pub Bmask: u32,
    pub Amask: u32,
    pub Rbits: u8,
    pub Gbits: u8,
    pub Bbits: u8,
    pub Abits: u8,
    pub Rshift: u8,
    pub Gshift: u8,
    pub Bshift: u8,
    pub Ashift: u8,
}

#[repr(C)]
#[derive(Debug)]
pub struct SDL_Surface {
    pub flags: SDL_SurfaceFlags,
    pub format: SDL_PixelFormat,
    pub w: c_int,
    pub h: c_int,
    pub pitch: c_int,
    pub pixels: *mut c_void,
    pub refcount: c_int,
    pub reserved: *mut c_void,
}

/// Opaque I/O stream handle.
#[repr(C)]
pub struct SDL_IOStream {
    _data: [u8; 0],
    _marker: PhantomData<(*mut u8, PhantomPinned)>,
}

pub type SDL_CleanupPropertyCallback =
    Option<unsafe extern "C" fn(userdata: *mut c_void, value: *mut c_void)>;

pub type SDL_EnumeratePropertiesCallback = Option<
    unsafe extern "C" fn(userdata: *mut c_void, props: SDL_PropertiesID, name: *const c_char),
>;

pub type SDL_ClipboardDataCallback = Option<
    unsafe extern "C" fn(
        userdata: *mut c_void,
        mime_type: *const c_char,
        size: *mut usize,
    ) -> *const c_void,
>;

pub type SDL_ClipboardCleanupCallback = Option<unsafe extern "C" fn(userdata: *mut c_void)>;

pub type SDL_LogOutputFunction = Option<
    unsafe extern "C" fn(
        userdata: *mut c_void,
        category: c_int,
        priority: SDL_LogPriority,
        message: *const c_char,
    ),
>;
