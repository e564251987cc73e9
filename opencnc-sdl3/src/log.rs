//! SDL's logging facility.
//!
//! Messages are handed to SDL as the argument of a `"%s"` format, so text
//! containing `%` is logged verbatim. [`forward_to_tracing`] routes SDL's own
//! log output into `tracing`.

use std::ffi::{CStr, c_char, c_int, c_void};
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, PoisonError};

use opencnc_sdl3_sys as sys;
use serde::{Deserialize, Serialize};

use crate::error::{Sdl3Error, Sdl3Result, check};
use crate::macros::native_enum;
use crate::native::{api, cstring, optional_cstring, ptr_or_null};

native_enum! {
    pub enum LogPriority: i32 {
        Invalid = sys::SDL_LOG_PRIORITY_INVALID,
        Trace = sys::SDL_LOG_PRIORITY_TRACE,
        Verbose = sys::SDL_LOG_PRIORITY_VERBOSE,
        Debug = sys::SDL_LOG_PRIORITY_DEBUG,
        Info = sys::SDL_LOG_PRIORITY_INFO,
        Warn = sys::SDL_LOG_PRIORITY_WARN,
        Error = sys::SDL_LOG_PRIORITY_ERROR,
        Critical = sys::SDL_LOG_PRIORITY_CRITICAL,
    }
}

/// A log category. Applications define their own from [`LogCategory::custom`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogCategory(pub i32);

impl LogCategory {
    pub const APPLICATION: Self = Self(sys::SDL_LOG_CATEGORY_APPLICATION);
    pub const ERROR: Self = Self(sys::SDL_LOG_CATEGORY_ERROR);
    pub const ASSERT: Self = Self(sys::SDL_LOG_CATEGORY_ASSERT);
    pub const SYSTEM: Self = Self(sys::SDL_LOG_CATEGORY_SYSTEM);
    pub const AUDIO: Self = Self(sys::SDL_LOG_CATEGORY_AUDIO);
    pub const VIDEO: Self = Self(sys::SDL_LOG_CATEGORY_VIDEO);
    pub const RENDER: Self = Self(sys::SDL_LOG_CATEGORY_RENDER);
    pub const INPUT: Self = Self(sys::SDL_LOG_CATEGORY_INPUT);
    pub const TEST: Self = Self(sys::SDL_LOG_CATEGORY_TEST);
    pub const GPU: Self = Self(sys::SDL_LOG_CATEGORY_GPU);
    /// First application-defined category.
    pub const CUSTOM: Self = Self(sys::SDL_LOG_CATEGORY_CUSTOM);

    /// The `offset`-th application category.
    #[must_use]
    pub const fn custom(offset: u16) -> Self {
        Self(sys::SDL_LOG_CATEGORY_CUSTOM + offset as i32)
    }

    #[must_use]
    pub const fn is_custom(self) -> bool {
        self.0 >= sys::SDL_LOG_CATEGORY_CUSTOM
    }
}

impl Default for LogCategory {
    fn default() -> Self {
        Self::APPLICATION
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::APPLICATION => "application",
            Self::ERROR => "error",
            Self::ASSERT => "assert",
            Self::SYSTEM => "system",
            Self::AUDIO => "audio",
            Self::VIDEO => "video",
            Self::RENDER => "render",
            Self::INPUT => "input",
            Self::TEST => "test",
            Self::GPU => "gpu",
            other => return write!(f, "category {}", other.0),
        };
        f.write_str(name)
    }
}

/// Sets every category to `priority`.
pub fn set_priorities(priority: LogPriority) -> Sdl3Result<()> {
    let api = api()?;
    // SAFETY: plain value argument.
    unsafe { (api.SDL_SetLogPriorities)(priority.raw()) };
    Ok(())
}

pub fn set_priority(category: LogCategory, priority: LogPriority) -> Sdl3Result<()> {
    let api = api()?;
    // SAFETY: plain value arguments.
    unsafe { (api.SDL_SetLogPriority)(category.0, priority.raw()) };
    Ok(())
}

pub fn priority(category: LogCategory) -> Sdl3Result<LogPriority> {
    let api = api()?;
    // SAFETY: plain value argument.
    let raw = unsafe { (api.SDL_GetLogPriority)(category.0) };
    LogPriority::from_raw(raw).ok_or_else(|| Sdl3Error::Log(format!("unknown log priority {raw}")))
}

/// Restores the default priorities, including those from `SDL_LOGGING`.
pub fn reset_priorities() -> Sdl3Result<()> {
    let api = api()?;
    // SAFETY: no arguments.
    unsafe { (api.SDL_ResetLogPriorities)() };
    Ok(())
}

/// Sets the text prepended to messages of `priority`; `None` removes it.
pub fn set_prefix(priority: LogPriority, prefix: Option<&str>) -> Sdl3Result<()> {
    let api = api()?;
    let prefix = optional_cstring(prefix)?;
    // SAFETY: the prefix is null or outlives the call; SDL copies it.
    let ok = unsafe { (api.SDL_SetLogPriorityPrefix)(priority.raw(), ptr_or_null(&prefix)) };
    check(api, ok, Sdl3Error::Log)
}

/// Logs at `Info` in the application category.
pub fn log(message: &str) -> Sdl3Result<()> {
    let api = api()?;
    let message = cstring(message)?;
    // SAFETY: "%s" consumes exactly the one string argument passed.
    unsafe { (api.SDL_Log)(c"%s".as_ptr(), message.as_ptr()) };
    Ok(())
}

macro_rules! log_at {
    ($( $(#[$meta:meta])* $name:ident => $native:ident; )*) => {
        $(
            $(#[$meta])*
            pub fn $name(category: LogCategory, message: &str) -> Sdl3Result<()> {
                let api = api()?;
                let message = cstring(message)?;
                // SAFETY: "%s" consumes exactly the one string argument passed.
                unsafe { (api.$native)(category.0, c"%s".as_ptr(), message.as_ptr()) };
                Ok(())
            }
        )*
    };
}

log_at! {
    trace => SDL_LogTrace;
    verbose => SDL_LogVerbose;
    debug => SDL_LogDebug;
    info => SDL_LogInfo;
    warn => SDL_LogWarn;
    error => SDL_LogError;
    /// Logs at the highest priority.
    critical => SDL_LogCritical;
}

pub fn message(category: LogCategory, priority: LogPriority, message: &str) -> Sdl3Result<()> {
    let api = api()?;
    let message = cstring(message)?;
    // SAFETY: "%s" consumes exactly the one string argument passed.
    unsafe { (api.SDL_LogMessage)(category.0, priority.raw(), c"%s".as_ptr(), message.as_ptr()) };
    Ok(())
}

// ── Output functions ────────────────────────────────────────────

type NativeOutput = unsafe extern "C" fn(*mut c_void, c_int, sys::SDL_LogPriority, *const c_char);

/// A native log output function together with its userdata.
#[derive(Clone, Copy)]
pub struct LogOutputFunction {
    callback: NativeOutput,
    userdata: *mut c_void,
}

impl LogOutputFunction {
    /// Writes one message through this output function, bypassing priority
    /// filtering.
    pub fn call(&self, category: LogCategory, priority: LogPriority, message: &str) -> Sdl3Result<()> {
        let message = cstring(message)?;
        // SAFETY: the pair came from SDL, which expects exactly these arguments.
        unsafe { (self.callback)(self.userdata, category.0, priority.raw(), message.as_ptr()) };
        Ok(())
    }

    /// Whether this is the trampoline installed by [`set_output_function`].
    #[must_use]
    pub fn is_rust_closure(&self) -> bool {
        std::ptr::fn_addr_eq(self.callback, output_trampoline as NativeOutput)
    }
}

impl fmt::Debug for LogOutputFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogOutputFunction")
            .field("callback", &(self.callback as *const ()))
            .field("userdata", &self.userdata)
            .finish()
    }
}

type OutputClosure = Arc<dyn Fn(LogCategory, LogPriority, &str) + Send + Sync>;

static OUTPUT: Mutex<Option<OutputClosure>> = Mutex::new(None);

unsafe extern "C" fn output_trampoline(
    _userdata: *mut c_void,
    category: c_int,
    priority: sys::SDL_LogPriority,
    message: *const c_char,
) {
    let closure = OUTPUT.lock().unwrap_or_else(PoisonError::into_inner).clone();
    let (Some(closure), false) = (closure, message.is_null()) else {
        return;
    };
    // SAFETY: SDL passes a NUL-terminated message valid for this call.
    let text = unsafe { CStr::from_ptr(message) }.to_string_lossy();
    let priority = LogPriority::from_raw(priority).unwrap_or(LogPriority::Invalid);
    // Unwinding into C would abort the process.
    let _ = catch_unwind(AssertUnwindSafe(|| closure(LogCategory(category), priority, &text)));
}

/// SDL's built-in output function.
pub fn default_output_function() -> Sdl3Result<LogOutputFunction> {
    let api = api()?;
    // SAFETY: no arguments.
    let callback = unsafe { (api.SDL_GetDefaultLogOutputFunction)() };
    callback
        .map(|callback| LogOutputFunction {
            callback,
            userdata: std::ptr::null_mut(),
        })
        .ok_or_else(|| Sdl3Error::Log("no default log output function".to_string()))
}

/// The output function currently installed, if any.
pub fn output_function() -> Sdl3Result<Option<LogOutputFunction>> {
    let api = api()?;
    let mut callback: sys::SDL_LogOutputFunction = None;
    let mut userdata = std::ptr::null_mut();
    // SAFETY: both out-pointers reference live locals.
    unsafe { (api.SDL_GetLogOutputFunction)(&mut callback, &mut userdata) };
    Ok(callback.map(|callback| LogOutputFunction { callback, userdata }))
}

/// Routes all SDL log output to `output`. The closure stays installed until
/// replaced or [`reset_output_function`] is called; it may run on any thread.
pub fn set_output_function<F>(output: F) -> Sdl3Result<()>
where
    F: Fn(LogCategory, LogPriority, &str) + Send + Sync + 'static,
{
    let api = api()?;
    *OUTPUT.lock().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(output));
    // SAFETY: the trampoline ignores userdata and reads the closure slot.
    unsafe { (api.SDL_SetLogOutputFunction)(Some(output_trampoline), std::ptr::null_mut()) };
    Ok(())
}

/// Reinstalls SDL's built-in output function and drops any Rust closure.
pub fn reset_output_function() -> Sdl3Result<()> {
    let api = api()?;
    let default = default_output_function()?;
    // SAFETY: restores SDL's own function with null userdata.
    unsafe { (api.SDL_SetLogOutputFunction)(Some(default.callback), std::ptr::null_mut()) };
    OUTPUT.lock().unwrap_or_else(PoisonError::into_inner).take();
    Ok(())
}

/// Re-emits SDL log messages as `tracing` events with the category as a field.
pub fn forward_to_tracing() -> Sdl3Result<()> {
    set_output_function(|category, priority, message| {
        let category = category.0;
        match priority {
            LogPriority::Trace | LogPriority::Verbose => {
                tracing::trace!(target: "sdl3", category, "{}", message);
            }
            LogPriority::Debug => tracing::debug!(target: "sdl3", category, "{}", message),
            LogPriority::Info | LogPriority::Invalid => {
                tracing::info!(target: "sdl3", category, "{}", message);
            }
            LogPriority::Warn => tracing::warn!(target: "sdl3", category, "{}", message),
            LogPriority::Error | LogPriority::Critical => {
                tracing::error!(target: "sdl3", category, "{}", message);
            }
        }
    })
}
