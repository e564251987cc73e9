//! Queries against the loaded library: geometry, pixel formats, power,
//! version, app metadata and subsystems. All serial, since dropping the last
//! subsystem shuts SDL down.

mod common;

use common::require_sdl;
use opencnc_sdl3::app_metadata::{self, AppType};
use opencnc_sdl3::*;
use pretty_assertions::assert_eq;
use serial_test::serial;

// ── Geometry ────────────────────────────────────────────────────

#[test]
#[serial]
fn rect_intersection_and_union() {
    require_sdl!();
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 5, 10, 10);
    assert!(a.has_intersection(&b).unwrap());
    assert_eq!(a.intersection(&b).unwrap(), Some(Rect::new(5, 5, 5, 5)));
    assert_eq!(a.intersection(&Rect::new(20, 20, 1, 1)).unwrap(), None);
    assert_eq!(
        Rect::new(0, 0, 2, 2).union(&Rect::new(4, 4, 2, 2)).unwrap(),
        Rect::new(0, 0, 6, 6)
    );
}

#[test]
#[serial]
fn union_with_empty_rect_is_the_other() {
    require_sdl!();
    let empty = Rect::new(3, 3, 0, 0);
    let r = Rect::new(1, 1, 2, 2);
    assert_eq!(empty.union(&r).unwrap(), r);
}

#[test]
#[serial]
fn line_clipping() {
    require_sdl!();
    let r = Rect::new(0, 0, 10, 10);
    assert_eq!(
        r.line_intersection((Point::new(-5, 5), Point::new(15, 5))).unwrap(),
        Some((Point::new(0, 5), Point::new(9, 5)))
    );
    assert_eq!(r.line_intersection((Point::new(-5, -5), Point::new(-1, -1))).unwrap(), None);
}

#[test]
#[serial]
fn enclosing_points_honours_clip() {
    require_sdl!();
    let points = [Point::new(1, 1), Point::new(4, 6)];
    assert_eq!(Rect::enclosing_points(&points, None).unwrap(), Some(Rect::new(1, 1, 4, 6)));
    assert_eq!(
        Rect::enclosing_points(&points, Some(Rect::new(100, 100, 5, 5))).unwrap(),
        None
    );
    assert_eq!(Rect::enclosing_points(&[], None).unwrap(), None);
}

#[test]
#[serial]
fn float_rect_operations() {
    require_sdl!();
    let a = FRect::new(0.0, 0.0, 4.0, 4.0);
    let b = FRect::new(2.0, 2.0, 4.0, 4.0);
    assert!(a.has_intersection(&b).unwrap());
    assert_eq!(a.intersection(&b).unwrap(), Some(FRect::new(2.0, 2.0, 2.0, 2.0)));
    assert_eq!(a.union(&b).unwrap(), FRect::new(0.0, 0.0, 6.0, 6.0));
    let points = [FPoint::new(0.5, 0.5), FPoint::new(2.5, 1.5)];
    let enclosing = FRect::enclosing_points(&points, None).unwrap().unwrap();
    assert!(enclosing.equals_epsilon(&FRect::new(0.5, 0.5, 2.0, 1.0), 0.01));
}

// ── Pixel formats ───────────────────────────────────────────────

#[test]
#[serial]
fn format_names() {
    require_sdl!();
    assert_eq!(PixelFormat::RGBA8888.name().unwrap(), "SDL_PIXELFORMAT_RGBA8888");
    assert_eq!(PixelFormat(0xdead_beef).name().unwrap(), "SDL_PIXELFORMAT_UNKNOWN");
}

#[test]
#[serial]
fn masks_round_trip_to_format() {
    require_sdl!();
    let masks = PixelFormat::RGBA8888.masks().unwrap();
    assert_eq!(
        masks,
        PixelMasks { bpp: 32, r: 0xff00_0000, g: 0x00ff_0000, b: 0x0000_ff00, a: 0x0000_00ff }
    );
    assert_eq!(PixelFormat::from_masks(&masks).unwrap(), Some(PixelFormat::RGBA8888));
}

#[test]
#[serial]
fn format_details() {
    require_sdl!();
    let d = PixelFormat::RGB565.details().unwrap();
    assert_eq!(d.format, PixelFormat::RGB565);
    assert_eq!((d.bits_per_pixel, d.bytes_per_pixel), (16, 2));
    assert_eq!((d.r_bits, d.g_bits, d.b_bits, d.a_bits), (5, 6, 5, 0));
    assert_eq!(d.r_shift, 11);
}

#[test]
#[serial]
fn map_and_get_rgba() {
    require_sdl!();
    let f = PixelFormat::ARGB8888;
    let pixel = f.map_rgba(None, Color::rgba(1, 2, 3, 4)).unwrap();
    assert_eq!(pixel, 0x0401_0203);
    assert_eq!(f.get_rgba(pixel, None).unwrap(), Color::rgba(1, 2, 3, 4));
    assert_eq!(f.get_rgb(pixel, None).unwrap(), (1, 2, 3));
    assert_eq!(f.map_rgb(None, 1, 2, 3).unwrap(), 0xff01_0203);
}

#[test]
#[serial]
fn indexed_mapping_uses_palette() {
    require_sdl!();
    let mut palette = Palette::new(4).unwrap();
    palette
        .set_colors(&[Color::rgb(0, 0, 0), Color::rgb(255, 0, 0), Color::rgb(0, 255, 0)], 0)
        .unwrap();
    let index = PixelFormat::INDEX8.map_rgb(Some(&palette), 0, 250, 0).unwrap();
    assert_eq!(index, 2);
    assert_eq!(PixelFormat::INDEX8.get_rgb(1, Some(&palette)).unwrap(), (255, 0, 0));
}

// ── Library ─────────────────────────────────────────────────────

#[test]
#[serial]
fn version_is_sdl3() {
    require_sdl!();
    let v = version().unwrap();
    assert_eq!(v.major, 3);
    assert!(revision().is_ok());
}

#[test]
#[serial]
fn power_query_is_consistent() {
    require_sdl!();
    match PowerInformation::query() {
        Ok(info) => {
            assert_ne!(info.state, PowerState::Error);
            if let Some(percent) = info.battery.percent {
                assert!(percent <= 100);
            }
        }
        Err(e) => assert_eq!(e.subsystem(), "power"),
    }
}

#[test]
#[serial]
fn app_metadata_fields() {
    require_sdl!();
    app_metadata::set("opencnc", "0.3.0", "org.opencnc.tests").unwrap();
    assert_eq!(app_metadata::name().unwrap().as_deref(), Some("opencnc"));
    assert_eq!(app_metadata::version().unwrap().as_deref(), Some("0.3.0"));
    assert_eq!(app_metadata::identifier().unwrap().as_deref(), Some("org.opencnc.tests"));

    app_metadata::set_creator("opencnc contributors").unwrap();
    assert_eq!(app_metadata::creator().unwrap().as_deref(), Some("opencnc contributors"));
    app_metadata::set_property(app_metadata::props::CREATOR_STRING, None).unwrap();
    assert_eq!(app_metadata::creator().unwrap(), None);

    app_metadata::set_app_type(AppType::MediaPlayer).unwrap();
    assert_eq!(app_metadata::app_type().unwrap().as_deref(), Some("mediaplayer"));
    app_metadata::set_version(Version::from_raw(1_002_003)).unwrap();
    assert_eq!(app_metadata::version().unwrap().as_deref(), Some("1.2.3"));
}

// ── Subsystems ──────────────────────────────────────────────────

fn video() -> Option<VideoSubsystem> {
    match VideoSubsystem::init() {
        Ok(video) => Some(video),
        Err(e) => {
            eprintln!("no video driver, skipping: {e}");
            None
        }
    }
}

#[test]
#[serial]
fn video_guard_balances_init() {
    require_sdl!();
    let Some(video) = video() else { return };
    assert!(was_init(InitFlags::VIDEO).unwrap().contains(InitFlags::VIDEO));
    drop(video);
    assert!(!was_init(InitFlags::VIDEO).unwrap().contains(InitFlags::VIDEO));
}

#[test]
#[serial]
fn clipboard_text_is_cached() {
    require_sdl!();
    let Some(video) = video() else { return };
    let mut clipboard = video.clipboard();
    assert_eq!(clipboard.cached_text(), None);
    clipboard.set_text("G21 G90").unwrap();
    assert_eq!(clipboard.cached_text(), Some("G21 G90"));
    assert!(clipboard.has_text());
    assert_eq!(clipboard.text().unwrap().as_deref(), Some("G21 G90"));
}

#[test]
#[serial]
fn clipboard_data_comes_from_provider() {
    require_sdl!();
    let Some(video) = video() else { return };
    let mut clipboard = video.clipboard();
    let mime = "application/x-opencnc-toolpath";
    clipboard
        .set_data(
            |requested: &str| (requested == "application/x-opencnc-toolpath").then(|| b"G0 X1".to_vec()),
            &[mime],
        )
        .unwrap();
    assert!(clipboard.has_data(mime).unwrap());
    assert!(clipboard.mime_types().unwrap().iter().any(|m| m == mime));
    let data = clipboard.data(mime).unwrap().unwrap();
    assert_eq!(&*data, b"G0 X1");

    clipboard.clear_data().unwrap();
    assert!(!clipboard.has_data(mime).unwrap());
}

#[test]
#[serial]
fn clipboard_rejects_empty_offer() {
    require_sdl!();
    let Some(video) = video() else { return };
    let mut clipboard = video.clipboard();
    let err = clipboard.set_data(|_: &str| -> Option<Vec<u8>> { None }, &[]).unwrap_err();
    assert_eq!(err.subsystem(), "clipboard");
}

#[test]
#[serial]
fn primary_selection_round_trip() {
    require_sdl!();
    let Some(video) = video() else { return };
    let mut clipboard = video.clipboard();
    clipboard.set_primary_selection_text("M3 S12000").unwrap();
    assert!(clipboard.has_primary_selection_text());
    assert_eq!(clipboard.primary_selection_text().unwrap().as_deref(), Some("M3 S12000"));
}

#[test]
#[serial]
fn clearing_data_forgets_cached_text() {
    require_sdl!();
    let Some(video) = video() else { return };
    let mut clipboard = video.clipboard();
    clipboard.set_text("G28").unwrap();
    assert_eq!(clipboard.cached_text(), Some("G28"));
    clipboard.clear_data().unwrap();
    assert_eq!(clipboard.cached_text(), None);
}

#[test]
#[serial]
fn panicking_provider_yields_no_data() {
    require_sdl!();
    let Some(video) = video() else { return };
    let mut clipboard = video.clipboard();
    let mime = "application/x-opencnc-macro";
    clipboard
        .set_data(|_: &str| -> Option<Vec<u8>> { panic!("provider failed") }, &[mime])
        .unwrap();
    let data = clipboard.data(mime).unwrap();
    assert!(data.is_none_or(|bytes| bytes.is_empty()));
    clipboard.clear_data().unwrap();
}
