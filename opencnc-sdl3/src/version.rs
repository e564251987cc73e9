//! Version of the loaded SDL library.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Sdl3Result;
use crate::native::{api, borrowed_string};

/// A decoded `SDL_VERSIONNUM` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl Version {
    /// Decodes `major * 1_000_000 + minor * 1_000 + micro`.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            major: raw / 1_000_000,
            minor: (raw / 1_000) % 1_000,
            micro: raw % 1_000,
        }
    }

    /// Re-encodes as `SDL_VERSIONNUM`, or `None` when a field does not fit.
    #[must_use]
    pub const fn raw(self) -> Option<u32> {
        if self.minor >= 1_000 || self.micro >= 1_000 {
            return None;
        }
        match self.major.checked_mul(1_000_000) {
            Some(major) => major.checked_add(self.minor * 1_000 + self.micro),
            None => None,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// Version of the library actually loaded, which may differ from the headers
/// these bindings were written against.
pub fn version() -> Sdl3Result<Version> {
    let api = api()?;
    // SAFETY: no arguments.
    let raw = unsafe { (api.SDL_GetVersion)() };
    Ok(Version::from_raw(raw.max(0).unsigned_abs()))
}

/// Source revision the library was built from, e.g. a git hash. Empty when
/// unavailable.
pub fn revision() -> Sdl3Result<String> {
    let api = api()?;
    // SAFETY: SDL returns a static string.
    Ok(unsafe { borrowed_string((api.SDL_GetRevision)()) }.unwrap_or_default())
}
