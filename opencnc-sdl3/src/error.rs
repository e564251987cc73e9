//! Error types for the safe bindings.

use std::ffi::{CStr, NulError};

use opencnc_sdl3_sys::{LoadError, Sdl3Api};
use thiserror::Error;

/// Result type for SDL3 operations.
pub type Sdl3Result<T> = Result<T, Sdl3Error>;

/// Errors raised by the bindings.
///
/// Most variants carry the message SDL reported through `SDL_GetError()` at
/// the time of the failing call, tagged with the subsystem that made it.
#[derive(Debug, Error)]
pub enum Sdl3Error {
    /// The SDL3 shared library could not be loaded.
    #[error("sdl3 library unavailable: {0}")]
    Library(#[from] LoadError),

    /// Setting application metadata failed.
    #[error("app metadata error: {0}")]
    AppMetadata(String),

    /// A logging call failed.
    #[error("log error: {0}")]
    Log(String),

    /// Power status could not be determined.
    #[error("power error: {0}")]
    Power(String),

    /// A property store operation failed.
    #[error("properties error: {0}")]
    Properties(String),

    /// A clipboard operation failed.
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// The camera subsystem failed to initialize.
    #[error("camera subsystem error: {0}")]
    Camera(String),

    /// The video subsystem failed to initialize.
    #[error("video subsystem error: {0}")]
    Video(String),

    /// A surface operation failed.
    #[error("surface error: {0}")]
    Surface(String),

    /// A palette operation failed.
    #[error("palette error: {0}")]
    Palette(String),

    /// A pixel format query or conversion failed.
    #[error("pixel format error: {0}")]
    Pixels(String),

    /// An I/O stream operation failed.
    #[error("io stream error: {0}")]
    IoStream(String),

    /// A rectangle query was given invalid input.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// A string passed to SDL contained an interior NUL byte.
    #[error("string contains a nul byte: {0}")]
    InvalidString(#[from] NulError),

    /// Standard I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Sdl3Error {
    /// Name of the subsystem that produced the error.
    #[must_use]
    pub fn subsystem(&self) -> &'static str {
        match self {
            Self::Library(_) => "library",
            Self::AppMetadata(_) => "app-metadata",
            Self::Log(_) => "log",
            Self::Power(_) => "power",
            Self::Properties(_) => "properties",
            Self::Clipboard(_) => "clipboard",
            Self::Camera(_) => "camera",
            Self::Video(_) => "video",
            Self::Surface(_) => "surface",
            Self::Palette(_) => "palette",
            Self::Pixels(_) => "pixels",
            Self::IoStream(_) => "iostream",
            Self::Geometry(_) => "geometry",
            Self::InvalidString(_) | Self::Io(_) => "bindings",
        }
    }
}

/// Reads SDL's thread-local error message.
pub(crate) fn last_error(api: &Sdl3Api) -> String {
    // SAFETY: SDL_GetError never returns null and the string stays valid until
    // the next SDL call on this thread; it is copied out immediately.
    unsafe {
        let message = (api.SDL_GetError)();
        if message.is_null() {
            return String::new();
        }
        CStr::from_ptr(message).to_string_lossy().into_owned()
    }
}

/// Turns a native `bool` result into a `Result`, wrapping SDL's message with
/// the given variant on failure.
pub(crate) fn check(
    api: &Sdl3Api,
    ok: bool,
    variant: fn(String) -> Sdl3Error,
) -> Sdl3Result<()> {
    if ok {
        Ok(())
    } else {
        Err(variant(last_error(api)))
    }
}
