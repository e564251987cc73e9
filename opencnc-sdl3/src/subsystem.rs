//! Subsystem initialization.
//!
//! SDL reference-counts subsystems: every successful init must be balanced by
//! a quit. The guards here do that on drop, and shut SDL down entirely once
//! the last subsystem is gone.

use std::marker::PhantomData;

use bitflags::bitflags;
use opencnc_sdl3_sys::{self as sys, Sdl3Api};
use tracing::{debug, info};

use crate::clipboard::Clipboard;
use crate::error::{Sdl3Error, Sdl3Result, last_error};
use crate::native::api;

bitflags! {
    /// Subsystems that can be initialized independently.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InitFlags: u32 {
        /// Implies `EVENTS`.
        const AUDIO = sys::SDL_INIT_AUDIO;
        /// Implies `EVENTS`.
        const VIDEO = sys::SDL_INIT_VIDEO;
        /// Implies `EVENTS`.
        const JOYSTICK = sys::SDL_INIT_JOYSTICK;
        const HAPTIC = sys::SDL_INIT_HAPTIC;
        /// Implies `JOYSTICK`.
        const GAMEPAD = sys::SDL_INIT_GAMEPAD;
        const EVENTS = sys::SDL_INIT_EVENTS;
        /// Implies `EVENTS`.
        const SENSOR = sys::SDL_INIT_SENSOR;
        /// Implies `EVENTS`.
        const CAMERA = sys::SDL_INIT_CAMERA;
    }
}

/// Which of `flags` are currently initialized. An empty mask asks about every
/// subsystem.
pub fn was_init(flags: InitFlags) -> Sdl3Result<InitFlags> {
    let api = api()?;
    // SAFETY: plain value argument.
    let raw = unsafe { (api.SDL_WasInit)(flags.bits()) };
    Ok(InitFlags::from_bits_retain(raw))
}

/// One reference on one subsystem.
struct SubsystemRef {
    api: &'static Sdl3Api,
    flag: InitFlags,
    // Subsystem init and quit belong to the thread that made them.
    _not_send: PhantomData<*const ()>,
}

impl SubsystemRef {
    fn acquire(flag: InitFlags, variant: fn(String) -> Sdl3Error) -> Sdl3Result<Self> {
        let api = api()?;
        // SAFETY: plain value argument.
        if !unsafe { (api.SDL_InitSubSystem)(flag.bits()) } {
            return Err(variant(last_error(api)));
        }
        info!(subsystem = ?flag, "Initialized SDL subsystem");
        Ok(Self {
            api,
            flag,
            _not_send: PhantomData,
        })
    }
}

impl Drop for SubsystemRef {
    fn drop(&mut self) {
        // SAFETY: plain value arguments; the reference was taken by `acquire`.
        unsafe {
            if (self.api.SDL_WasInit)(self.flag.bits()) & self.flag.bits() != 0 {
                (self.api.SDL_QuitSubSystem)(self.flag.bits());
                debug!(subsystem = ?self.flag, "Released SDL subsystem");
            }
            if (self.api.SDL_WasInit)(0) == 0 {
                (self.api.SDL_Quit)();
                info!("SDL shut down");
            }
        }
    }
}

/// Keeps the video subsystem alive; required for the clipboard.
pub struct VideoSubsystem {
    inner: SubsystemRef,
}

impl VideoSubsystem {
    pub fn init() -> Sdl3Result<Self> {
        Ok(Self {
            inner: SubsystemRef::acquire(InitFlags::VIDEO, Sdl3Error::Video)?,
        })
    }

    /// The system clipboard. Its text cache lives on the returned value.
    #[must_use]
    pub fn clipboard(&self) -> Clipboard<'_> {
        Clipboard::new(self.inner.api)
    }
}

impl std::fmt::Debug for VideoSubsystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoSubsystem").finish_non_exhaustive()
    }
}

/// Keeps the camera subsystem alive.
pub struct CameraSubsystem {
    _inner: SubsystemRef,
}

impl CameraSubsystem {
    pub fn init() -> Sdl3Result<Self> {
        Ok(Self {
            _inner: SubsystemRef::acquire(InitFlags::CAMERA, Sdl3Error::Camera)?,
        })
    }
}

impl std::fmt::Debug for CameraSubsystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraSubsystem").finish_non_exhaustive()
    }
}
