//! Shared helpers for crossing the C boundary.

use std::ffi::{CStr, CString, c_char, c_void};
use std::path::Path;

use opencnc_sdl3_sys::Sdl3Api;

use crate::error::Sdl3Result;

/// The loaded function table, or [`crate::Sdl3Error::Library`].
pub(crate) fn api() -> Sdl3Result<&'static Sdl3Api> {
    Ok(opencnc_sdl3_sys::api()?)
}

pub(crate) fn cstring(value: &str) -> Sdl3Result<CString> {
    Ok(CString::new(value)?)
}

/// SDL expects UTF-8 paths on every platform; other bytes are replaced.
pub(crate) fn path_cstring(path: &Path) -> Sdl3Result<CString> {
    cstring(&path.to_string_lossy())
}

pub(crate) fn optional_cstring(value: Option<&str>) -> Sdl3Result<Option<CString>> {
    value.map(cstring).transpose()
}

pub(crate) fn ptr_or_null(value: &Option<CString>) -> *const c_char {
    value.as_ref().map_or(std::ptr::null(), |s| s.as_ptr())
}

/// Copies a borrowed, SDL-owned string.
///
/// # Safety
/// `ptr` must be null or point at a NUL-terminated string that outlives the call.
pub(crate) unsafe fn borrowed_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        // SAFETY: non-null and NUL-terminated per the caller's contract.
        Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
    }
}

/// Copies a string SDL allocated for the caller, then releases it.
///
/// # Safety
/// `ptr` must be null or a NUL-terminated string allocated by SDL.
pub(crate) unsafe fn owned_string(api: &Sdl3Api, ptr: *mut c_char) -> Option<String> {
    // SAFETY: forwarded from the caller.
    let copy = unsafe { borrowed_string(ptr) };
    if !ptr.is_null() {
        // SAFETY: the buffer came from SDL's allocator and is not used again.
        unsafe { (api.SDL_free)(ptr.cast::<c_void>()) };
    }
    copy
}

/// Copies `len` bytes SDL allocated for the caller, then releases them.
///
/// # Safety
/// `ptr` must be null or point at `len` readable bytes allocated by SDL.
pub(crate) unsafe fn owned_bytes(api: &Sdl3Api, ptr: *mut c_void, len: usize) -> Option<Vec<u8>> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: `ptr` is valid for `len` bytes per the caller's contract.
    let bytes = unsafe { std::slice::from_raw_parts(ptr.cast::<u8>(), len) }.to_vec();
    // SAFETY: allocated by SDL and not used after this point.
    unsafe { (api.SDL_free)(ptr) };
    Some(bytes)
}

pub(crate) fn to_c_int(value: usize, what: &str) -> Result<i32, String> {
    i32::try_from(value).map_err(|_| format!("{what} {value} exceeds the native int range"))
}
