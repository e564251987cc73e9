//! Application metadata reported to the operating system.
//!
//! Metadata should be set before any subsystem is initialized; some platforms
//! read it only once.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Sdl3Error, Sdl3Result, check};
use crate::native::{api, borrowed_string, cstring, optional_cstring, ptr_or_null};

/// Metadata property names.
pub mod props {
    pub const NAME_STRING: &str = "SDL.app.metadata.name";
    pub const VERSION_STRING: &str = "SDL.app.metadata.version";
    pub const IDENTIFIER_STRING: &str = "SDL.app.metadata.identifier";
    pub const CREATOR_STRING: &str = "SDL.app.metadata.creator";
    pub const COPYRIGHT_STRING: &str = "SDL.app.metadata.copyright";
    pub const URL_STRING: &str = "SDL.app.metadata.url";
    pub const TYPE_STRING: &str = "SDL.app.metadata.type";
}

/// Kind of application, as understood by SDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppType {
    Game,
    MediaPlayer,
    Application,
}

impl AppType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::MediaPlayer => "mediaplayer",
            Self::Application => "application",
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sets the three basic fields at once.
pub fn set(name: &str, version: &str, identifier: &str) -> Sdl3Result<()> {
    let api = api()?;
    let (name, version, identifier) = (cstring(name)?, cstring(version)?, cstring(identifier)?);
    // SAFETY: all strings outlive the call; SDL copies them.
    let ok = unsafe { (api.SDL_SetAppMetadata)(name.as_ptr(), version.as_ptr(), identifier.as_ptr()) };
    check(api, ok, Sdl3Error::AppMetadata)?;
    debug!(name = ?name, version = ?version, "Set app metadata");
    Ok(())
}

/// Sets one property; `None` clears it.
pub fn set_property(name: &str, value: Option<&str>) -> Sdl3Result<()> {
    let api = api()?;
    let name = cstring(name)?;
    let value = optional_cstring(value)?;
    // SAFETY: `name` and `value` are null or outlive the call.
    let ok = unsafe { (api.SDL_SetAppMetadataProperty)(name.as_ptr(), ptr_or_null(&value)) };
    check(api, ok, Sdl3Error::AppMetadata)
}

/// The property's value, or `None` when unset and SDL has no default.
pub fn property(name: &str) -> Sdl3Result<Option<String>> {
    let api = api()?;
    let name = cstring(name)?;
    // SAFETY: `name` outlives the call; the result is copied immediately.
    Ok(unsafe { borrowed_string((api.SDL_GetAppMetadataProperty)(name.as_ptr())) })
}

macro_rules! metadata_field {
    ($( $get:ident, $set:ident => $key:ident; )*) => {
        $(
            pub fn $get() -> Sdl3Result<Option<String>> {
                property(props::$key)
            }

            pub fn $set(value: &str) -> Sdl3Result<()> {
                set_property(props::$key, Some(value))
            }
        )*
    };
}

metadata_field! {
    name, set_name => NAME_STRING;
    identifier, set_identifier => IDENTIFIER_STRING;
    creator, set_creator => CREATOR_STRING;
    copyright, set_copyright => COPYRIGHT_STRING;
    url, set_url => URL_STRING;
}

pub fn version() -> Sdl3Result<Option<String>> {
    property(props::VERSION_STRING)
}

/// Accepts anything printable, such as a `semver::Version`.
pub fn set_version(value: impl fmt::Display) -> Sdl3Result<()> {
    set_property(props::VERSION_STRING, Some(&value.to_string()))
}

/// SDL reports `"application"` when unset.
pub fn app_type() -> Sdl3Result<Option<String>> {
    property(props::TYPE_STRING)
}

pub fn set_app_type(value: AppType) -> Sdl3Result<()> {
    set_property(props::TYPE_STRING, Some(value.as_str()))
}
