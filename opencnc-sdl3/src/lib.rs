//! Safe SDL3 bindings for opencnc.
//!
//! Wraps the raw table from `opencnc-sdl3-sys` in owned handles and checked
//! results:
//!
//! - **Surfaces**: creation, BMP I/O, blits, fills and pixel access, with
//!   [`Palette`] and [`PixelFormat`]/[`Colorspace`] helpers
//! - **Geometry**: [`Rect`]/[`FRect`] predicates and SDL's rect algorithms
//! - **Properties**: typed access to SDL property stores
//! - **Clipboard**: text, primary selection and lazily provided mime data
//! - **Logging**: SDL's log API, plus forwarding SDL output into `tracing`
//! - **I/O streams**: files and memory behind one handle, usable via
//!   `std::io`
//! - **Power, version and app metadata** queries
//!
//! Every call that reaches SDL returns [`Sdl3Result`]; if the shared library
//! cannot be loaded the error is [`Sdl3Error::Library`].

mod macros;

pub mod app_metadata;
mod blend;
mod clipboard;
mod error;
mod geometry;
pub mod iostream;
pub mod log;
mod native;
mod pixels;
mod power;
mod properties;
pub mod surface;
mod subsystem;
mod version;

pub use blend::{BlendFactor, BlendMode, BlendOperation};
pub use clipboard::{Clipboard, ClipboardData, ClipboardDataProvider};
pub use error::{Sdl3Error, Sdl3Result};
pub use geometry::{FPoint, FRect, Point, Rect};
pub use iostream::{IoStatus, IoStream, IoWhence, load_file, save_file};
pub use log::{LogCategory, LogOutputFunction, LogPriority};
pub use pixels::{
    ALPHA_OPAQUE, ALPHA_OPAQUE_FLOAT, ALPHA_TRANSPARENT, ALPHA_TRANSPARENT_FLOAT, ArrayOrder,
    BitmapOrder, ChromaLocation, Color, ColorPrimaries, ColorRange, ColorType, Colorspace, FColor,
    MatrixCoefficients, PackedLayout, PackedOrder, Palette, PixelFormat, PixelFormatDetails,
    PixelMasks, PixelType, TransferCharacteristics,
};
pub use power::{PowerInformation, PowerState, RemainingBattery};
pub use properties::{Properties, PropertiesId, PropertiesLock, PropertyType, PropertyValue};
pub use subsystem::{CameraSubsystem, InitFlags, VideoSubsystem, was_init};
pub use surface::{
    ColorspaceInfo, FlipMode, GridInsets, PixelSource, PixelTarget, ScaleMode, Surface, SurfaceFlags,
    SurfaceImage, SurfaceLock, convert_pixels, convert_pixels_and_colorspace, premultiply_alpha,
};
pub use version::{Version, revision, version};

pub use opencnc_sdl3_sys::{LIBRARY_PATH_ENV, LoadError, LoaderConfig};

/// Loads SDL3 from `config` rather than the default search. Must run before
/// any other call to take effect.
pub fn load_library(config: &LoaderConfig) -> Sdl3Result<()> {
    opencnc_sdl3_sys::init(config)?;
    Ok(())
}

/// Whether the SDL3 shared library can be loaded.
#[must_use]
pub fn is_available() -> bool {
    opencnc_sdl3_sys::is_available()
}
