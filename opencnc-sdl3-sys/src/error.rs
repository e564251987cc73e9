//! Error types for loading the native library.

use thiserror::Error;

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while locating and binding the SDL3 shared library.
///
/// The error is `Clone` so a failed process-wide load can be reported to
/// every caller that asks for the function table afterwards.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// No candidate library could be opened.
    #[error("sdl3 library not found (tried {tried}): {reason}")]
    NotFound { tried: String, reason: String },

    /// A library was opened but does not export a required entry point.
    #[error("symbol {symbol} missing from {library}: {reason}")]
    MissingSymbol {
        library: String,
        symbol: &'static str,
        reason: String,
    },
}
