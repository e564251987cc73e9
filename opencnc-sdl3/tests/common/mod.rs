#![allow(dead_code)]

/// Returns early from a test when the SDL3 library cannot be loaded, so the
/// suite still passes on machines without it.
macro_rules! require_sdl {
    () => {
        if !opencnc_sdl3::is_available() {
            eprintln!("SDL3 library not found, skipping");
            return;
        }
    };
}

pub(crate) use require_sdl;

/// Packs `color` into a native-endian RGBA8888 pixel.
pub fn rgba8888(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_be_bytes([r, g, b, a])
}
