//! Raw SDL3 ABI for the opencnc bindings.
//!
//! This crate provides:
//!
//! - `#[repr(C)]` layouts of the SDL 3.2 structs the bindings exchange
//! - Constants for pixel formats, colorspaces, blend modes, init flags,
//!   log priorities, I/O status codes and well-known property names
//! - The header-only macros (`SDL_DEFINE_PIXELFORMAT`, `SDL_RectEmpty`, ...)
//!   as `const fn`s
//! - [`Sdl3Api`], a table of function pointers resolved from the SDL3 shared
//!   library at runtime
//!
//! The library is opened on first call to [`api()`]. Set `SDL3_LIBRARY_PATH`
//! to point at a specific build; otherwise the platform's usual library names
//! are tried in order.

#![allow(non_camel_case_types, non_snake_case)]

mod api;
mod consts;
mod error;
mod loader;
mod pixels;
mod rect;
mod types;

pub use api::Sdl3Api;
pub use consts::*;
pub use error::{LoadError, LoadResult};
pub use loader::{LIBRARY_PATH_ENV, LoaderConfig, api, default_candidates, init, is_available};
pub use pixels::*;
pub use rect::*;
pub use types::*;
