use std::time::Duration;

use opencnc_sdl3::{PixelFormat, PixelMasks, PowerInformation, PowerState, RemainingBattery, Version};
use opencnc_sdl3_info::{
    ClipboardReport, FormatReport, Report, canonical_format_name, parse_format_code, render_text,
};
use pretty_assertions::assert_eq;

fn sample_report() -> Report {
    Report {
        version: Version::from_raw(3_002_010),
        revision: "release-3.2.10-0-g0000000".to_string(),
        power: Some(PowerInformation {
            state: PowerState::OnBattery,
            battery: RemainingBattery {
                seconds: Some(Duration::from_secs(5400)),
                percent: Some(72),
            },
        }),
        format: Some(FormatReport {
            name: "SDL_PIXELFORMAT_RGBA8888".to_string(),
            code: PixelFormat::RGBA8888.0,
            bits_per_pixel: 32,
            bytes_per_pixel: 4,
            has_alpha: true,
            is_fourcc: false,
            masks: Some(PixelMasks {
                bpp: 32,
                r: 0xFF00_0000,
                g: 0x00FF_0000,
                b: 0x0000_FF00,
                a: 0x0000_00FF,
            }),
            details: None,
        }),
        clipboard: Some(ClipboardReport {
            has_text: true,
            mime_types: vec!["text/plain".to_string()],
        }),
    }
}

#[test]
fn parses_hex_and_decimal_codes() {
    assert_eq!(parse_format_code("0x16462004"), Some(PixelFormat::RGBA8888));
    assert_eq!(parse_format_code("0X16462004"), Some(PixelFormat::RGBA8888));
    assert_eq!(parse_format_code("373694468"), Some(PixelFormat::RGBA8888));
    assert_eq!(parse_format_code(" 0 "), Some(PixelFormat::UNKNOWN));
}

#[test]
fn names_are_not_codes() {
    assert_eq!(parse_format_code("RGBA8888"), None);
    assert_eq!(parse_format_code("0xZZ"), None);
    assert_eq!(parse_format_code(""), None);
}

#[test]
fn canonical_name_adds_prefix_once() {
    assert_eq!(canonical_format_name("rgba8888"), "SDL_PIXELFORMAT_RGBA8888");
    assert_eq!(
        canonical_format_name("SDL_PIXELFORMAT_ARGB8888"),
        "SDL_PIXELFORMAT_ARGB8888"
    );
    assert_eq!(canonical_format_name(" sdl_pixelformat_yv12"), "SDL_PIXELFORMAT_YV12");
}

#[test]
fn text_report_lists_every_section() {
    let text = render_text(&sample_report());
    assert!(text.starts_with("SDL 3.2.10\n"));
    assert!(text.contains("revision: release-3.2.10"));
    assert!(text.contains("Power: OnBattery"));
    assert!(text.contains("battery: 72%"));
    assert!(text.contains("remaining: 90 min"));
    assert!(text.contains("Format: SDL_PIXELFORMAT_RGBA8888 (0x16462004)"));
    assert!(text.contains("32 bits, 4 bytes per pixel, alpha"));
    assert!(text.contains("r=0xff000000"));
    assert!(text.contains("Clipboard: text available"));
    assert!(text.contains("  text/plain"));
}

#[test]
fn text_report_without_optional_sections() {
    let report = Report {
        power: None,
        format: None,
        clipboard: None,
        revision: String::new(),
        ..sample_report()
    };
    assert_eq!(render_text(&report), "SDL 3.2.10\nPower: unavailable\n");
}

#[test]
fn json_report_round_trips() {
    let report = sample_report();
    let json = serde_json::to_string(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["version"]["minor"], 2);
    assert_eq!(value["format"]["code"], PixelFormat::RGBA8888.0);
    assert_eq!(value["power"]["battery"]["percent"], 72);

    let back: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
