//! System clipboard and primary selection.

use std::ffi::{CStr, CString, c_char, c_void};
use std::marker::PhantomData;
use std::ops::Deref;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::ptr::NonNull;

use opencnc_sdl3_sys::Sdl3Api;
use tracing::{debug, warn};

use crate::error::{Sdl3Error, Sdl3Result, check, last_error};
use crate::native::{cstring, owned_string};
use crate::subsystem::VideoSubsystem;

/// Supplies clipboard contents on demand.
///
/// SDL asks for data only when another application pastes, possibly from a
/// different thread. The provider is dropped when the clipboard is cleared or
/// replaced.
pub trait ClipboardDataProvider: Send + 'static {
    /// Bytes for `mime_type`, or `None` to offer nothing for it.
    fn data(&mut self, mime_type: &str) -> Option<Vec<u8>>;
}

impl<F> ClipboardDataProvider for F
where
    F: FnMut(&str) -> Option<Vec<u8>> + Send + 'static,
{
    fn data(&mut self, mime_type: &str) -> Option<Vec<u8>> {
        self(mime_type)
    }
}

struct ProviderState {
    provider: Box<dyn ClipboardDataProvider>,
    // SDL reads the returned pointer after the callback returns.
    last: Vec<u8>,
}

unsafe extern "C" fn data_trampoline(
    userdata: *mut c_void,
    mime_type: *const c_char,
    size: *mut usize,
) -> *const c_void {
    if userdata.is_null() || mime_type.is_null() || size.is_null() {
        return std::ptr::null();
    }
    // SAFETY: `userdata` is the `ProviderState` boxed by `set_data`, alive
    // until the cleanup trampoline runs.
    let state = unsafe { &mut *userdata.cast::<ProviderState>() };
    // SAFETY: SDL passes a NUL-terminated mime type.
    let mime = unsafe { CStr::from_ptr(mime_type) }.to_string_lossy();
    // Unwinding into C would abort the process.
    let provided = catch_unwind(AssertUnwindSafe(|| state.provider.data(&mime))).unwrap_or_else(|_| {
        warn!(mime_type = %mime, "Clipboard provider panicked");
        None
    });
    match provided {
        Some(bytes) => {
            state.last = bytes;
            // SAFETY: `size` is a valid out-pointer supplied by SDL.
            unsafe { *size = state.last.len() };
            state.last.as_ptr().cast::<c_void>()
        }
        None => {
            // SAFETY: as above.
            unsafe { *size = 0 };
            std::ptr::null()
        }
    }
}

unsafe extern "C" fn cleanup_trampoline(userdata: *mut c_void) {
    if userdata.is_null() {
        return;
    }
    // SAFETY: reclaims the box leaked by `set_data`; SDL calls this once.
    let state = unsafe { Box::from_raw(userdata.cast::<ProviderState>()) };
    if catch_unwind(AssertUnwindSafe(|| drop(state))).is_err() {
        warn!("Clipboard provider panicked while being dropped");
    }
}

/// Clipboard bytes owned by SDL, released on drop.
pub struct ClipboardData {
    ptr: NonNull<u8>,
    len: usize,
    api: &'static Sdl3Api,
}

impl Deref for ClipboardData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        // SAFETY: SDL returned `len` readable bytes at `ptr`.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl AsRef<[u8]> for ClipboardData {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl Drop for ClipboardData {
    fn drop(&mut self) {
        // SAFETY: allocated by SDL for the caller and released once.
        unsafe { (self.api.SDL_free)(self.ptr.as_ptr().cast::<c_void>()) };
    }
}

impl std::fmt::Debug for ClipboardData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipboardData").field("len", &self.len).finish()
    }
}

/// Access to the clipboard while the video subsystem is alive.
///
/// The last text set or read through this value is cached and available via
/// [`cached_text`](Self::cached_text).
pub struct Clipboard<'v> {
    api: &'static Sdl3Api,
    cached: Option<String>,
    _video: PhantomData<&'v VideoSubsystem>,
}

impl Clipboard<'_> {
    pub(crate) fn new(api: &'static Sdl3Api) -> Self {
        Self {
            api,
            cached: None,
            _video: PhantomData,
        }
    }

    #[must_use]
    pub fn cached_text(&self) -> Option<&str> {
        self.cached.as_deref()
    }

    pub fn set_text(&mut self, text: &str) -> Sdl3Result<()> {
        let c_text = cstring(text)?;
        // SAFETY: `c_text` outlives the call; SDL copies it.
        let ok = unsafe { (self.api.SDL_SetClipboardText)(c_text.as_ptr()) };
        check(self.api, ok, Sdl3Error::Clipboard)?;
        self.cached = Some(text.to_string());
        Ok(())
    }

    /// The clipboard text, or `None` when there is none.
    pub fn text(&mut self) -> Sdl3Result<Option<String>> {
        if !self.has_text() {
            return Ok(None);
        }
        // SAFETY: SDL returns a string allocated for the caller.
        let text = unsafe { owned_string(self.api, (self.api.SDL_GetClipboardText)()) }.unwrap_or_default();
        if text.is_empty() {
            return Err(Sdl3Error::Clipboard(last_error(self.api)));
        }
        self.cached = Some(text.clone());
        Ok(Some(text))
    }

    #[must_use]
    pub fn has_text(&self) -> bool {
        // SAFETY: no arguments.
        unsafe { (self.api.SDL_HasClipboardText)() }
    }

    pub fn set_primary_selection_text(&mut self, text: &str) -> Sdl3Result<()> {
        let text = cstring(text)?;
        // SAFETY: `text` outlives the call; SDL copies it.
        let ok = unsafe { (self.api.SDL_SetPrimarySelectionText)(text.as_ptr()) };
        check(self.api, ok, Sdl3Error::Clipboard)
    }

    /// The X11/Wayland primary selection, or `None` when empty or unsupported.
    pub fn primary_selection_text(&self) -> Sdl3Result<Option<String>> {
        if !self.has_primary_selection_text() {
            return Ok(None);
        }
        // SAFETY: SDL returns a string allocated for the caller.
        let text = unsafe { owned_string(self.api, (self.api.SDL_GetPrimarySelectionText)()) }.unwrap_or_default();
        if text.is_empty() {
            return Err(Sdl3Error::Clipboard(last_error(self.api)));
        }
        Ok(Some(text))
    }

    #[must_use]
    pub fn has_primary_selection_text(&self) -> bool {
        // SAFETY: no arguments.
        unsafe { (self.api.SDL_HasPrimarySelectionText)() }
    }

    /// Offers data in `mime_types`, produced lazily by `provider`.
    pub fn set_data<P>(&mut self, provider: P, mime_types: &[&str]) -> Sdl3Result<()>
    where
        P: ClipboardDataProvider,
    {
        if mime_types.is_empty() {
            return Err(Sdl3Error::Clipboard("no mime types offered".to_string()));
        }
        let owned: Vec<CString> = mime_types.iter().map(|m| cstring(m)).collect::<Sdl3Result<_>>()?;
        let mut pointers: Vec<*const c_char> = owned.iter().map(|m| m.as_ptr()).collect();
        let state = Box::new(ProviderState {
            provider: Box::new(provider),
            last: Vec::new(),
        });
        let userdata = Box::into_raw(state).cast::<c_void>();
        // SAFETY: the mime type strings outlive the call and SDL copies them.
        // Ownership of `userdata` passes to SDL, which releases it through the
        // cleanup trampoline.
        let ok = unsafe {
            (self.api.SDL_SetClipboardData)(
                Some(data_trampoline),
                Some(cleanup_trampoline),
                userdata,
                pointers.as_mut_ptr(),
                pointers.len(),
            )
        };
        if !ok {
            // SDL may already have run the cleanup, so the provider is not
            // reclaimed here.
            warn!("Clipboard provider not installed");
            return Err(Sdl3Error::Clipboard(last_error(self.api)));
        }
        self.cached = None;
        debug!(mime_types = ?mime_types, "Installed clipboard provider");
        Ok(())
    }

    pub fn clear_data(&mut self) -> Sdl3Result<()> {
        // SAFETY: no arguments.
        let ok = unsafe { (self.api.SDL_ClearClipboardData)() };
        check(self.api, ok, Sdl3Error::Clipboard)?;
        self.cached = None;
        Ok(())
    }

    /// Clipboard contents in `mime_type`, or `None` if not offered.
    pub fn data(&self, mime_type: &str) -> Sdl3Result<Option<ClipboardData>> {
        let mime = cstring(mime_type)?;
        let mut len = 0usize;
        // SAFETY: `mime` outlives the call; `len` is a live local.
        let ptr = unsafe { (self.api.SDL_GetClipboardData)(mime.as_ptr(), &mut len) };
        Ok(NonNull::new(ptr.cast::<u8>()).map(|ptr| ClipboardData { ptr, len, api: self.api }))
    }

    pub fn has_data(&self, mime_type: &str) -> Sdl3Result<bool> {
        let mime = cstring(mime_type)?;
        // SAFETY: `mime` outlives the call.
        Ok(unsafe { (self.api.SDL_HasClipboardData)(mime.as_ptr()) })
    }

    /// Mime types currently on offer.
    pub fn mime_types(&self) -> Sdl3Result<Vec<String>> {
        let mut count = 0usize;
        // SAFETY: `count` is a live local.
        let list = unsafe { (self.api.SDL_GetClipboardMimeTypes)(&mut count) };
        if list.is_null() {
            return Err(Sdl3Error::Clipboard(last_error(self.api)));
        }
        // SAFETY: SDL returned `count` string pointers in one allocation.
        let types = unsafe { std::slice::from_raw_parts(list, count) }
            .iter()
            .filter(|p| !p.is_null())
            // SAFETY: each entry is NUL-terminated.
            .map(|&p| unsafe { CStr::from_ptr(p) }.to_string_lossy().into_owned())
            .collect();
        // SAFETY: the array and its strings share one SDL allocation.
        unsafe { (self.api.SDL_free)(list.cast::<c_void>()) };
        Ok(types)
    }
}

impl std::fmt::Debug for Clipboard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clipboard").field("cached", &self.cached).finish()
    }
}
