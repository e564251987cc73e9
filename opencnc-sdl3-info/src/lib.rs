//! Report types and collection for `sdl3-info`.

use std::fmt::Write as _;

use opencnc_sdl3::{
    PixelFormat, PixelFormatDetails, PixelMasks, PowerInformation, Sdl3Result, Version,
    VideoSubsystem,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const FORMAT_PREFIX: &str = "SDL_PIXELFORMAT_";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Report {
    pub version: Version,
    pub revision: String,
    /// `None` when the platform could not report power status.
    pub power: Option<PowerInformation>,
    pub format: Option<FormatReport>,
    /// `None` when the video subsystem was not started.
    pub clipboard: Option<ClipboardReport>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FormatReport {
    pub name: String,
    pub code: u32,
    pub bits_per_pixel: u8,
    pub bytes_per_pixel: u8,
    pub has_alpha: bool,
    pub is_fourcc: bool,
    pub masks: Option<PixelMasks>,
    pub details: Option<PixelFormatDetails>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ClipboardReport {
    pub has_text: bool,
    pub mime_types: Vec<String>,
}

/// Parses a numeric format code, hex (`0x...`) or decimal.
#[must_use]
pub fn parse_format_code(input: &str) -> Option<PixelFormat> {
    let input = input.trim();
    let code = match input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => input.parse().ok()?,
    };
    Some(PixelFormat(code))
}

/// Normalises a format name to SDL's spelling, e.g. `rgba8888` to
/// `SDL_PIXELFORMAT_RGBA8888`.
#[must_use]
pub fn canonical_format_name(input: &str) -> String {
    let upper = input.trim().to_ascii_uppercase();
    if upper.starts_with(FORMAT_PREFIX) {
        upper
    } else {
        format!("{FORMAT_PREFIX}{upper}")
    }
}

/// Finds a format by code or by name.
pub fn resolve_format(input: &str) -> Sdl3Result<Option<PixelFormat>> {
    if let Some(format) = parse_format_code(input) {
        return Ok(Some(format));
    }
    let wanted = canonical_format_name(input);
    for &format in PixelFormat::KNOWN {
        if format.name()? == wanted {
            return Ok(Some(format));
        }
    }
    Ok(None)
}

pub fn describe_format(format: PixelFormat) -> Sdl3Result<FormatReport> {
    // FOURCC formats have no channel layout.
    let (masks, details) = if format.is_fourcc() {
        (None, None)
    } else {
        (format.masks().ok(), format.details().ok())
    };
    Ok(FormatReport {
        name: format.name()?,
        code: format.0,
        bits_per_pixel: format.bits_per_pixel(),
        bytes_per_pixel: format.bytes_per_pixel(),
        has_alpha: format.has_alpha(),
        is_fourcc: format.is_fourcc(),
        masks,
        details,
    })
}

fn describe_clipboard() -> Option<ClipboardReport> {
    let video = match VideoSubsystem::init() {
        Ok(video) => video,
        Err(e) => {
            warn!("Skipping clipboard: {}", e);
            return None;
        }
    };
    let clipboard = video.clipboard();
    let mime_types = clipboard.mime_types().unwrap_or_else(|e| {
        debug!("No clipboard mime types: {}", e);
        Vec::new()
    });
    Some(ClipboardReport {
        has_text: clipboard.has_text(),
        mime_types,
    })
}

/// Queries everything the report shows. Only a missing library is fatal.
pub fn collect(format: Option<PixelFormat>, with_clipboard: bool) -> Sdl3Result<Report> {
    let version = opencnc_sdl3::version()?;
    let revision = opencnc_sdl3::revision()?;
    let power = PowerInformation::query()
        .map_err(|e| warn!("Power status unavailable: {}", e))
        .ok();
    let format = format.map(describe_format).transpose()?;
    let clipboard = if with_clipboard { describe_clipboard() } else { None };
    Ok(Report {
        version,
        revision,
        power,
        format,
        clipboard,
    })
}

/// Human-readable rendering of a report.
#[must_use]
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "SDL {}", report.version);
    if !report.revision.is_empty() {
        let _ = writeln!(out, "  revision: {}", report.revision);
    }

    match &report.power {
        Some(power) => {
            let _ = writeln!(out, "Power: {:?}", power.state);
            if let Some(percent) = power.battery.percent {
                let _ = writeln!(out, "  battery: {percent}%");
            }
            if let Some(remaining) = power.battery.seconds {
                let _ = writeln!(out, "  remaining: {} min", remaining.as_secs() / 60);
            }
        }
        None => {
            let _ = writeln!(out, "Power: unavailable");
        }
    }

    if let Some(format) = &report.format {
        let _ = writeln!(out, "Format: {} ({:#010x})", format.name, format.code);
        let _ = writeln!(
            out,
            "  {} bits, {} bytes per pixel{}",
            format.bits_per_pixel,
            format.bytes_per_pixel,
            if format.has_alpha { ", alpha" } else { "" }
        );
        if let Some(m) = &format.masks {
            let _ = writeln!(
                out,
                "  masks: r={:#010x} g={:#010x} b={:#010x} a={:#010x}",
                m.r, m.g, m.b, m.a
            );
        }
    }

    if let Some(clipboard) = &report.clipboard {
        let _ = writeln!(
            out,
            "Clipboard: {}",
            if clipboard.has_text { "text available" } else { "no text" }
        );
        for mime in &clipboard.mime_types {
            let _ = writeln!(out, "  {mime}");
        }
    }
    out
}
