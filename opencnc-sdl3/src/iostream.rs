//! SDL I/O streams.
//!
//! [`IoStream`] wraps files, caller memory and SDL-managed growable buffers
//! behind one handle. It also implements `std::io::{Read, Write, Seek}`.

use std::ffi::c_void;
use std::io;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::path::Path;
use std::ptr::NonNull;

use opencnc_sdl3_sys::{self as sys, Sdl3Api};
use tracing::warn;

use crate::error::{Sdl3Error, Sdl3Result, check, last_error};
use crate::macros::native_enum;
use crate::native::{api, cstring, owned_bytes, path_cstring};
use crate::properties::PropertiesId;

/// Names of the properties SDL attaches to a stream.
pub mod props {
    pub const WINDOWS_HANDLE_POINTER: &str = "SDL.iostream.windows.handle";
    pub const STDIO_FILE_POINTER: &str = "SDL.iostream.stdio.file";
    pub const FILE_DESCRIPTOR_NUMBER: &str = "SDL.iostream.file_descriptor";
    pub const ANDROID_AASSET_POINTER: &str = "SDL.iostream.android.aasset";
    pub const MEMORY_POINTER: &str = "SDL.iostream.memory.base";
    pub const MEMORY_SIZE_NUMBER: &str = "SDL.iostream.memory.size";
    pub const DYNAMIC_MEMORY_POINTER: &str = "SDL.iostream.dynamic.memory";
    pub const DYNAMIC_CHUNKSIZE_NUMBER: &str = "SDL.iostream.dynamic.chunksize";
}

native_enum! {
    /// State of a stream after its last operation.
    pub enum IoStatus: i32 {
        Ready = sys::SDL_IO_STATUS_READY,
        Error = sys::SDL_IO_STATUS_ERROR,
        Eof = sys::SDL_IO_STATUS_EOF,
        NotReady = sys::SDL_IO_STATUS_NOT_READY,
        ReadOnly = sys::SDL_IO_STATUS_READONLY,
        WriteOnly = sys::SDL_IO_STATUS_WRITEONLY,
    }
}

native_enum! {
    /// Origin of a seek.
    pub enum IoWhence: i32 {
        Set = sys::SDL_IO_SEEK_SET,
        Cur = sys::SDL_IO_SEEK_CUR,
        End = sys::SDL_IO_SEEK_END,
    }
}

/// An open SDL stream; closed on drop.
///
/// `'a` ties memory streams to the buffer they read from or write into.
pub struct IoStream<'a> {
    raw: NonNull<sys::SDL_IOStream>,
    api: &'static Sdl3Api,
    _marker: PhantomData<&'a mut [u8]>,
}

impl IoStream<'static> {
    /// Opens a file with a C `fopen` mode string such as `"rb"` or `"w+b"`.
    pub fn from_file(path: impl AsRef<Path>, mode: &str) -> Sdl3Result<Self> {
        let api = api()?;
        let file = path_cstring(path.as_ref())?;
        let mode = cstring(mode)?;
        // SAFETY: both strings outlive the call.
        let raw = unsafe { (api.SDL_IOFromFile)(file.as_ptr(), mode.as_ptr()) };
        Self::wrap(api, raw)
    }

    /// A growable in-memory stream owned by SDL.
    pub fn from_dynamic_mem() -> Sdl3Result<Self> {
        let api = api()?;
        // SAFETY: no arguments.
        let raw = unsafe { (api.SDL_IOFromDynamicMem)() };
        Self::wrap(api, raw)
    }
}

impl<'a> IoStream<'a> {
    /// A read-write stream over a caller buffer. Writes never grow it.
    pub fn from_mem(buffer: &'a mut [u8]) -> Sdl3Result<Self> {
        let api = api()?;
        // SAFETY: the buffer outlives the stream through `'a`.
        let raw = unsafe { (api.SDL_IOFromMem)(buffer.as_mut_ptr().cast::<c_void>(), buffer.len()) };
        Self::wrap(api, raw)
    }

    /// A read-only stream over a caller buffer.
    pub fn from_const_mem(buffer: &'a [u8]) -> Sdl3Result<Self> {
        let api = api()?;
        // SAFETY: the buffer outlives the stream through `'a`.
        let raw = unsafe { (api.SDL_IOFromConstMem)(buffer.as_ptr().cast::<c_void>(), buffer.len()) };
        Self::wrap(api, raw)
    }

    fn wrap(api: &'static Sdl3Api, raw: *mut sys::SDL_IOStream) -> Sdl3Result<Self> {
        let raw = NonNull::new(raw).ok_or_else(|| Sdl3Error::IoStream(last_error(api)))?;
        Ok(Self {
            raw,
            api,
            _marker: PhantomData,
        })
    }

    pub(crate) fn as_ptr(&self) -> *mut sys::SDL_IOStream {
        self.raw.as_ptr()
    }

    /// SDL's message for the last failure, or the stream status when SDL left
    /// none.
    fn failure(&self) -> Sdl3Error {
        let message = last_error(self.api);
        if message.is_empty() {
            Sdl3Error::IoStream(format!("stream status {:?}", self.status()))
        } else {
            Sdl3Error::IoStream(message)
        }
    }

    pub fn properties(&self) -> Sdl3Result<PropertiesId> {
        // SAFETY: the stream is open.
        let id = unsafe { (self.api.SDL_GetIOProperties)(self.as_ptr()) };
        if id == 0 {
            Err(Sdl3Error::IoStream(last_error(self.api)))
        } else {
            Ok(PropertiesId(id))
        }
    }

    #[must_use]
    pub fn status(&self) -> IoStatus {
        // SAFETY: the stream is open.
        let raw = unsafe { (self.api.SDL_GetIOStatus)(self.as_ptr()) };
        IoStatus::from_raw(raw).unwrap_or(IoStatus::Error)
    }

    /// Total size in bytes.
    pub fn size(&self) -> Sdl3Result<u64> {
        // SAFETY: the stream is open.
        let size = unsafe { (self.api.SDL_GetIOSize)(self.as_ptr()) };
        u64::try_from(size).map_err(|_| self.failure())
    }

    /// Moves the cursor and returns the new absolute offset.
    pub fn seek(&mut self, offset: i64, whence: IoWhence) -> Sdl3Result<u64> {
        // SAFETY: the stream is open.
        let pos = unsafe { (self.api.SDL_SeekIO)(self.as_ptr(), offset, whence.raw()) };
        u64::try_from(pos).map_err(|_| self.failure())
    }

    pub fn tell(&self) -> Sdl3Result<u64> {
        // SAFETY: the stream is open.
        let pos = unsafe { (self.api.SDL_TellIO)(self.as_ptr()) };
        u64::try_from(pos).map_err(|_| self.failure())
    }

    /// Reads up to `buf.len()` bytes. `Ok(0)` means end of stream or, for
    /// non-blocking sources, no data yet.
    pub fn read(&mut self, buf: &mut [u8]) -> Sdl3Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        // SAFETY: `buf` is writable for its full length.
        let n = unsafe { (self.api.SDL_ReadIO)(self.as_ptr(), buf.as_mut_ptr().cast::<c_void>(), buf.len()) };
        if n == 0 && self.status() == IoStatus::Error {
            return Err(self.failure());
        }
        Ok(n)
    }

    /// Writes `buf`, returning the number of bytes accepted.
    pub fn write(&mut self, buf: &[u8]) -> Sdl3Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        // SAFETY: `buf` is readable for its full length.
        let n = unsafe { (self.api.SDL_WriteIO)(self.as_ptr(), buf.as_ptr().cast::<c_void>(), buf.len()) };
        if n < buf.len() && self.status() == IoStatus::Error {
            return Err(self.failure());
        }
        Ok(n)
    }

    /// Writes `text` verbatim; it is never interpreted as a format string.
    pub fn print(&mut self, text: &str) -> Sdl3Result<usize> {
        let text = cstring(text)?;
        // SAFETY: "%s" consumes exactly the one string argument passed.
        let n = unsafe { (self.api.SDL_IOprintf)(self.as_ptr(), c"%s".as_ptr(), text.as_ptr()) };
        if n == 0 && !text.as_bytes().is_empty() {
            return Err(self.failure());
        }
        Ok(n)
    }

    pub fn flush(&mut self) -> Sdl3Result<()> {
        // SAFETY: the stream is open.
        let ok = unsafe { (self.api.SDL_FlushIO)(self.as_ptr()) };
        check(self.api, ok, Sdl3Error::IoStream)
    }

    /// Reads from the cursor to the end of the stream. The stream stays open.
    pub fn load_all(&mut self) -> Sdl3Result<Vec<u8>> {
        let mut size = 0usize;
        // SAFETY: the stream is open and is not closed by SDL.
        let data = unsafe { (self.api.SDL_LoadFile_IO)(self.as_ptr(), &mut size, false) };
        // SAFETY: SDL returns `size` bytes it allocated, or null.
        unsafe { owned_bytes(self.api, data, size) }.ok_or_else(|| self.failure())
    }

    /// Writes all of `data` at the cursor. The stream stays open.
    pub fn save_all(&mut self, data: &[u8]) -> Sdl3Result<()> {
        // SAFETY: `data` is readable for its full length.
        let ok = unsafe {
            (self.api.SDL_SaveFile_IO)(self.as_ptr(), data.as_ptr().cast::<c_void>(), data.len(), false)
        };
        check(self.api, ok, Sdl3Error::IoStream)
    }

    /// Closes the stream, reporting errors a drop would only log. Buffered
    /// writes that fail to flush surface here.
    pub fn close(self) -> Sdl3Result<()> {
        let this = ManuallyDrop::new(self);
        // SAFETY: the handle is not used again; `Drop` is suppressed.
        let ok = unsafe { (this.api.SDL_CloseIO)(this.as_ptr()) };
        check(this.api, ok, Sdl3Error::IoStream)
    }
}

macro_rules! typed_io {
    ($( $read:ident, $write:ident, $ty:ty => $native_read:ident, $native_write:ident; )*) => {
        impl IoStream<'_> {
            $(
                #[doc = concat!("Reads one `", stringify!($ty), "`.")]
                pub fn $read(&mut self) -> Sdl3Result<$ty> {
                    let mut value: $ty = 0;
                    // SAFETY: the out-pointer references a live local.
                    let ok = unsafe { (self.api.$native_read)(self.as_ptr(), &mut value) };
                    if !ok {
                        return Err(self.failure());
                    }
                    Ok(value)
                }

                #[doc = concat!("Writes one `", stringify!($ty), "`.")]
                pub fn $write(&mut self, value: $ty) -> Sdl3Result<()> {
                    // SAFETY: plain value argument on an open stream.
                    let ok = unsafe { (self.api.$native_write)(self.as_ptr(), value) };
                    if !ok {
                        return Err(self.failure());
                    }
                    Ok(())
                }
            )*
        }
    };
}

typed_io! {
    read_u8, write_u8, u8 => SDL_ReadU8, SDL_WriteU8;
    read_s8, write_s8, i8 => SDL_ReadS8, SDL_WriteS8;
    read_u16_le, write_u16_le, u16 => SDL_ReadU16LE, SDL_WriteU16LE;
    read_s16_le, write_s16_le, i16 => SDL_ReadS16LE, SDL_WriteS16LE;
    read_u16_be, write_u16_be, u16 => SDL_ReadU16BE, SDL_WriteU16BE;
    read_s16_be, write_s16_be, i16 => SDL_ReadS16BE, SDL_WriteS16BE;
    read_u32_le, write_u32_le, u32 => SDL_ReadU32LE, SDL_WriteU32LE;
    read_s32_le, write_s32_le, i32 => SDL_ReadS32LE, SDL_WriteS32LE;
    read_u32_be, write_u32_be, u32 => SDL_ReadU32BE, SDL_WriteU32BE;
    read_s32_be, write_s32_be, i32 => SDL_ReadS32BE, SDL_WriteS32BE;
    read_u64_le, write_u64_le, u64 => SDL_ReadU64LE, SDL_WriteU64LE;
    read_s64_le, write_s64_le, i64 => SDL_ReadS64LE, SDL_WriteS64LE;
    read_u64_be, write_u64_be, u64 => SDL_ReadU64BE, SDL_WriteU64BE;
    read_s64_be, write_s64_be, i64 => SDL_ReadS64BE, SDL_WriteS64BE;
}

impl Drop for IoStream<'_> {
    fn drop(&mut self) {
        // SAFETY: the stream is open and closed exactly once here.
        let ok = unsafe { (self.api.SDL_CloseIO)(self.as_ptr()) };
        if !ok {
            warn!("Failed to close SDL stream: {}", last_error(self.api));
        }
    }
}

impl std::fmt::Debug for IoStream<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IoStream")
            .field("raw", &self.raw)
            .field("status", &self.status())
            .finish()
    }
}

impl io::Read for IoStream<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        IoStream::read(self, buf).map_err(io::Error::other)
    }
}

impl io::Write for IoStream<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        IoStream::write(self, buf).map_err(io::Error::other)
    }

    fn flush(&mut self) -> io::Result<()> {
        IoStream::flush(self).map_err(io::Error::other)
    }
}

impl io::Seek for IoStream<'_> {
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        let (offset, whence) = match pos {
            io::SeekFrom::Start(n) => (
                i64::try_from(n).map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "seek offset out of range"))?,
                IoWhence::Set,
            ),
            io::SeekFrom::Current(n) => (n, IoWhence::Cur),
            io::SeekFrom::End(n) => (n, IoWhence::End),
        };
        IoStream::seek(self, offset, whence).map_err(io::Error::other)
    }
}

/// Reads a whole file through SDL.
pub fn load_file(path: impl AsRef<Path>) -> Sdl3Result<Vec<u8>> {
    let api = api()?;
    let file = path_cstring(path.as_ref())?;
    let mut size = 0usize;
    // SAFETY: `file` outlives the call; `size` is a live local.
    let data = unsafe { (api.SDL_LoadFile)(file.as_ptr(), &mut size) };
    // SAFETY: SDL returns `size` bytes it allocated, or null.
    unsafe { owned_bytes(api, data, size) }.ok_or_else(|| Sdl3Error::IoStream(last_error(api)))
}

/// Replaces the contents of a file through SDL.
pub fn save_file(path: impl AsRef<Path>, data: &[u8]) -> Sdl3Result<()> {
    let api = api()?;
    let file = path_cstring(path.as_ref())?;
    // SAFETY: `file` and `data` outlive the call.
    let ok = unsafe { (api.SDL_SaveFile)(file.as_ptr(), data.as_ptr().cast::<c_void>(), data.len()) };
    check(api, ok, Sdl3Error::IoStream)
}
