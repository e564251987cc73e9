//! Locating and opening the SDL3 shared library.

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::OnceLock;

use libloading::Library;
use tracing::{debug, info, warn};

use crate::api::Sdl3Api;
use crate::error::{LoadError, LoadResult};

/// Environment variable naming an explicit SDL3 library file.
pub const LIBRARY_PATH_ENV: &str = "SDL3_LIBRARY_PATH";

/// Where to look for the SDL3 shared library.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Explicit library file, tried before any candidate.
    pub search_path: Option<PathBuf>,
    /// Library names handed to the platform loader, in order.
    pub candidates: Vec<String>,
}

impl LoaderConfig {
    /// Default candidates plus the `SDL3_LIBRARY_PATH` override, if set.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            search_path: std::env::var_os(LIBRARY_PATH_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            candidates: default_candidates(),
        }
    }

    /// Only the given file, with no fallback candidates.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            search_path: Some(path.into()),
            candidates: Vec::new(),
        }
    }

    /// Every name the loader will try, in order.
    #[must_use]
    pub fn attempts(&self) -> Vec<OsString> {
        self.search_path
            .iter()
            .map(|path| path.clone().into_os_string())
            .chain(self.candidates.iter().map(OsString::from))
            .collect()
    }
}

/// Platform library names for SDL3.
#[must_use]
pub fn default_candidates() -> Vec<String> {
    let names: &[&str] = if cfg!(target_os = "windows") {
        &["SDL3.dll", "libSDL3.dll"]
    } else if cfg!(target_vendor = "apple") {
        &["libSDL3.0.dylib", "libSDL3.dylib"]
    } else {
        &["libSDL3.so.0", "libSDL3.so"]
    };
    names.iter().map(|name| (*name).to_string()).collect()
}

impl Sdl3Api {
    /// Opens the first candidate that exports every required entry point.
    pub fn load(config: &LoaderConfig) -> LoadResult<Self> {
        let attempts = config.attempts();
        let mut failures = Vec::new();
        let mut missing = None;

        for candidate in &attempts {
            let name = candidate.to_string_lossy().into_owned();
            debug!(candidate = %name, "Trying SDL3 library");

            // SAFETY: opening SDL3 runs its library constructors, which have no preconditions.
            let library = match unsafe { Library::new(candidate) } {
                Ok(library) => library,
                Err(e) => {
                    failures.push(format!("{name}: {e}"));
                    continue;
                }
            };

            // SAFETY: the library was located under an SDL3 name; a build that
            // lacks an entry point is rejected before any pointer is used.
            match unsafe { Sdl3Api::from_library(library, &name) } {
                Ok(api) => {
                    info!(library = %name, "SDL3 library loaded");
                    return Ok(api);
                }
                Err(e) => {
                    warn!(library = %name, "Rejected SDL3 library: {}", e);
                    missing = Some(e);
                }
            }
        }

        if let Some(e) = missing {
            return Err(e);
        }

        let tried = attempts
            .iter()
            .map(|c| c.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        Err(LoadError::NotFound {
            tried,
            reason: if failures.is_empty() {
                "no candidates configured".to_string()
            } else {
                failures.join("; ")
            },
        })
    }
}

static API: OnceLock<LoadResult<Sdl3Api>> = OnceLock::new();

/// The process-wide function table, loaded on first use.
///
/// The outcome of the first load attempt is cached, failures included.
pub fn api() -> LoadResult<&'static Sdl3Api> {
    API.get_or_init(|| {
        let result = Sdl3Api::load(&LoaderConfig::from_env());
        if let Err(e) = &result {
            warn!("SDL3 unavailable: {}", e);
        }
        result
    })
    .as_ref()
    .map_err(Clone::clone)
}

/// Loads the process-wide table from `config` instead of the environment.
///
/// Only the first load in a process takes effect; later calls return the
/// cached outcome and ignore `config`.
pub fn init(config: &LoaderConfig) -> LoadResult<&'static Sdl3Api> {
    let mut used = false;
    let result = API.get_or_init(|| {
        used = true;
        Sdl3Api::load(config)
    });
    if !used {
        debug!("SDL3 library already loaded, ignoring loader configuration");
    }
    result.as_ref().map_err(Clone::clone)
}

/// Whether the process-wide table loaded successfully.
#[must_use]
pub fn is_available() -> bool {
    api().is_ok()
}
