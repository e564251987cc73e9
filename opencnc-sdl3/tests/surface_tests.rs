mod common;

use common::require_sdl;
use opencnc_sdl3::*;
use pretty_assertions::assert_eq;

const RED: Color = Color::rgb(255, 0, 0);
const BLUE: Color = Color::rgb(0, 0, 255);

fn filled(width: i32, height: i32, color: Color) -> Surface<'static> {
    let mut surface = Surface::new(width, height, PixelFormat::RGBA8888).unwrap();
    let pixel = surface.map_rgba(color);
    surface.fill_rect(None, pixel).unwrap();
    surface
}

// ── Creation ────────────────────────────────────────────────────

#[test]
fn new_surface_header() {
    require_sdl!();
    let surface = Surface::new(16, 8, PixelFormat::RGBA8888).unwrap();
    assert_eq!((surface.width(), surface.height()), (16, 8));
    assert!(surface.pitch() >= 64);
    assert_eq!(surface.format(), PixelFormat::RGBA8888);
    assert!(surface.is_owned());
    assert!(!surface.flags().contains(SurfaceFlags::PREALLOCATED));
}

#[test]
fn caller_pixels_are_shared() {
    require_sdl!();
    let mut pixels = vec![0u8; 2 * 2 * 4];
    {
        let mut surface = Surface::from_pixels(2, 2, PixelFormat::RGBA8888, &mut pixels, 8).unwrap();
        assert!(surface.flags().contains(SurfaceFlags::PREALLOCATED));
        surface.write_pixel(1, 0, Color::rgba(1, 2, 3, 4)).unwrap();
    }
    let expected = common::rgba8888(1, 2, 3, 4).to_ne_bytes();
    assert_eq!(&pixels[4..8], &expected);
}

#[test]
fn invalid_dimensions_fail() {
    require_sdl!();
    let err = Surface::new(-1, 4, PixelFormat::RGBA8888).unwrap_err();
    assert_eq!(err.subsystem(), "surface");
}

// ── Pixels ──────────────────────────────────────────────────────

#[test]
fn fill_and_read_back() {
    require_sdl!();
    let mut surface = filled(4, 4, RED);
    assert_eq!(surface.read_pixel(3, 3).unwrap(), RED);

    let blue = surface.map_rgba(BLUE);
    surface.fill_rects(&[Rect::new(0, 0, 1, 1), Rect::new(2, 2, 2, 2)], blue).unwrap();
    assert_eq!(surface.read_pixel(0, 0).unwrap(), BLUE);
    assert_eq!(surface.read_pixel(1, 1).unwrap(), RED);
    assert_eq!(surface.read_pixel(3, 3).unwrap(), BLUE);
}

#[test]
fn out_of_bounds_read_fails() {
    require_sdl!();
    let surface = filled(2, 2, RED);
    assert!(surface.read_pixel(2, 0).is_err());
}

#[test]
fn float_pixels() {
    require_sdl!();
    let mut surface = Surface::new(1, 1, PixelFormat::RGBA128_FLOAT).unwrap();
    surface.write_pixel_float(0, 0, FColor::rgba(0.25, 0.5, 0.75, 1.0)).unwrap();
    let c = surface.read_pixel_float(0, 0).unwrap();
    assert!((c.g - 0.5).abs() < 1e-3);
    surface.clear(FColor::rgba(0.0, 0.0, 0.0, 0.0)).unwrap();
    assert_eq!(surface.read_pixel_float(0, 0).unwrap().a, 0.0);
}

#[test]
fn lock_exposes_rows() {
    require_sdl!();
    let mut surface = filled(3, 2, RED);
    let pitch = usize::try_from(surface.pitch()).unwrap();
    {
        let mut lock = surface.lock().unwrap();
        assert_eq!(lock.pitch(), pitch);
        assert_eq!(lock.pixels().len(), pitch * 2);
        assert!(lock.row(2).is_none());
        assert!(lock.row(usize::MAX).is_none());
        let red = common::rgba8888(255, 0, 0, 255).to_ne_bytes();
        assert_eq!(&lock.row(1).unwrap()[..4], &red);
        lock.pixels_mut()[..4].copy_from_slice(&common::rgba8888(0, 0, 255, 255).to_ne_bytes());
    }
    assert_eq!(surface.read_pixel(0, 0).unwrap(), BLUE);
}

// ── Blits ───────────────────────────────────────────────────────

#[test]
fn blit_copies_region() {
    require_sdl!();
    let src = filled(2, 2, BLUE);
    let mut dst = filled(4, 4, RED);
    src.blit(None, &mut dst, Some(Rect::new(2, 2, 0, 0))).unwrap();
    assert_eq!(dst.read_pixel(1, 1).unwrap(), RED);
    assert_eq!(dst.read_pixel(2, 2).unwrap(), BLUE);
    assert_eq!(dst.read_pixel(3, 3).unwrap(), BLUE);
}

#[test]
fn blit_respects_clip_rect() {
    require_sdl!();
    let src = filled(4, 4, BLUE);
    let mut dst = filled(4, 4, RED);
    assert!(dst.set_clip_rect(Some(Rect::new(0, 0, 2, 4))));
    assert_eq!(dst.clip_rect().unwrap(), Rect::new(0, 0, 2, 4));
    src.blit(None, &mut dst, None).unwrap();
    assert_eq!(dst.read_pixel(1, 0).unwrap(), BLUE);
    assert_eq!(dst.read_pixel(2, 0).unwrap(), RED);

    assert!(!dst.set_clip_rect(Some(Rect::new(10, 10, 2, 2))));
    assert!(dst.set_clip_rect(None));
    assert_eq!(dst.clip_rect().unwrap(), Rect::new(0, 0, 4, 4));
}

#[test]
fn scaled_and_tiled_blits_cover_destination() {
    require_sdl!();
    let src = filled(1, 1, BLUE);
    let mut dst = filled(4, 4, RED);
    src.blit_scaled(None, &mut dst, None, ScaleMode::Nearest).unwrap();
    assert_eq!(dst.read_pixel(3, 3).unwrap(), BLUE);

    let mut dst = filled(4, 4, RED);
    src.blit_tiled(None, &mut dst, None).unwrap();
    assert_eq!(dst.read_pixel(2, 1).unwrap(), BLUE);

    let mut dst = filled(4, 4, RED);
    src.stretch(None, &mut dst, Some(Rect::new(0, 0, 2, 2)), ScaleMode::Nearest).unwrap();
    assert_eq!(dst.read_pixel(1, 1).unwrap(), BLUE);
    assert_eq!(dst.read_pixel(2, 2).unwrap(), RED);
}

#[test]
fn unchecked_blit_with_valid_rects() {
    require_sdl!();
    let src = filled(2, 2, BLUE);
    let mut dst = filled(2, 2, RED);
    // SAFETY: both rectangles cover exactly their surfaces.
    unsafe { src.blit_unchecked(Rect::new(0, 0, 2, 2), &mut dst, Rect::new(0, 0, 2, 2)) }.unwrap();
    assert_eq!(dst.read_pixel(1, 1).unwrap(), BLUE);
}

#[test]
fn nine_grid_fills_target() {
    require_sdl!();
    let src = filled(3, 3, BLUE);
    let mut dst = filled(9, 9, RED);
    let insets = GridInsets { left: 1, right: 1, top: 1, bottom: 1 };
    src.blit_9grid(None, insets, 0.0, ScaleMode::Nearest, &mut dst, None).unwrap();
    assert_eq!(dst.read_pixel(0, 0).unwrap(), BLUE);
    assert_eq!(dst.read_pixel(4, 4).unwrap(), BLUE);
}

// ── Blit state ──────────────────────────────────────────────────

#[test]
fn modulation_and_blend_state() {
    require_sdl!();
    let mut surface = filled(1, 1, RED);
    surface.set_color_mod(10, 20, 30).unwrap();
    assert_eq!(surface.color_mod().unwrap(), (10, 20, 30));
    surface.set_alpha_mod(128).unwrap();
    assert_eq!(surface.alpha_mod().unwrap(), 128);
    surface.set_blend_mode(BlendMode::ADD).unwrap();
    assert_eq!(surface.blend_mode().unwrap(), BlendMode::ADD);
}

#[test]
fn color_key_toggles() {
    require_sdl!();
    let mut surface = filled(1, 1, RED);
    assert_eq!(surface.color_key(), None);
    let key = surface.map_rgb(255, 0, 0);
    surface.set_color_key(Some(key)).unwrap();
    assert!(surface.has_color_key());
    assert_eq!(surface.color_key(), Some(key));
    surface.set_color_key(None).unwrap();
    assert!(!surface.has_color_key());
}

#[test]
fn rle_flag() {
    require_sdl!();
    let mut surface = filled(2, 2, RED);
    surface.set_rle(true).unwrap();
    assert!(surface.has_rle());
    assert!(surface.must_lock());
}

// ── Transforms ──────────────────────────────────────────────────

#[test]
fn flip_horizontal_moves_columns() {
    require_sdl!();
    let mut surface = filled(2, 1, RED);
    surface.write_pixel(0, 0, BLUE).unwrap();
    surface.flip(FlipMode::Horizontal).unwrap();
    assert_eq!(surface.read_pixel(1, 0).unwrap(), BLUE);
    assert_eq!(surface.read_pixel(0, 0).unwrap(), RED);
}

#[test]
fn duplicate_scale_and_convert() {
    require_sdl!();
    let surface = filled(2, 2, BLUE);

    let copy = surface.duplicate().unwrap();
    assert_eq!(copy.read_pixel(1, 1).unwrap(), BLUE);

    let bigger = surface.scale(6, 4, ScaleMode::Nearest).unwrap();
    assert_eq!((bigger.width(), bigger.height()), (6, 4));

    let converted = surface.convert(PixelFormat::ARGB8888).unwrap();
    assert_eq!(converted.format(), PixelFormat::ARGB8888);
    assert_eq!(converted.read_pixel(0, 0).unwrap(), BLUE);
}

#[test]
fn premultiply_scales_color_by_alpha() {
    require_sdl!();
    let mut surface = Surface::new(1, 1, PixelFormat::RGBA8888).unwrap();
    surface.write_pixel(0, 0, Color::rgba(200, 100, 0, 0)).unwrap();
    surface.premultiply_alpha(false).unwrap();
    assert_eq!(surface.read_pixel(0, 0).unwrap(), Color::rgba(0, 0, 0, 0));
}

#[test]
fn colorspace_defaults_and_updates() {
    require_sdl!();
    let mut surface = filled(1, 1, RED);
    assert_eq!(surface.colorspace(), Colorspace::SRGB);
    surface.set_colorspace(Colorspace::SRGB_LINEAR).unwrap();
    assert_eq!(surface.colorspace(), Colorspace::SRGB_LINEAR);
}

// ── Palettes ────────────────────────────────────────────────────

#[test]
fn indexed_surface_palette() {
    require_sdl!();
    let mut surface = Surface::new(2, 2, PixelFormat::INDEX8).unwrap();
    {
        let mut palette = surface.create_palette().unwrap();
        assert_eq!(palette.len(), 256);
        assert!(!palette.is_owned());
        palette.set_colors(&[RED, BLUE], 0).unwrap();
    }
    let palette = surface.palette().unwrap();
    assert_eq!(&palette.colors()[..2], &[RED, BLUE]);
    drop(palette);

    surface.fill_rect(None, 1).unwrap();
    assert_eq!(surface.read_pixel(0, 0).unwrap(), BLUE);
}

#[test]
fn shared_palette_outlives_handle() {
    require_sdl!();
    let mut surface = Surface::new(1, 1, PixelFormat::INDEX8).unwrap();
    let mut palette = Palette::new(2).unwrap();
    palette.set_colors(&[BLUE, RED], 0).unwrap();
    surface.set_palette(&palette).unwrap();
    drop(palette);
    assert_eq!(surface.palette().unwrap().colors(), vec![BLUE, RED]);
}

#[test]
fn palette_rejects_overflowing_colors() {
    require_sdl!();
    let mut palette = Palette::new(2).unwrap();
    assert!(palette.set_colors(&[RED, RED, RED], 0).is_err());
}

// ── Alternate images ────────────────────────────────────────────

#[test]
fn alternate_images_are_listed_after_base() {
    require_sdl!();
    let mut base = filled(2, 2, RED);
    let hidpi = filled(4, 4, BLUE);
    assert!(!base.has_alternate_images());
    base.add_alternate_image(hidpi).unwrap();
    assert!(base.has_alternate_images());

    let images = base.images().unwrap();
    assert_eq!(images.len(), 2);
    assert!(!images[0].is_owned());
    assert!(!images[1].is_owned());
    assert_eq!(images[1].width(), 4);
    assert_eq!(images[1].read_pixel(3, 3).unwrap(), BLUE);
    // Listing again while the first views are alive is fine: views are read-only.
    let again = base.images().unwrap();
    assert_eq!(again[0].width(), images[0].width());
    drop((images, again));

    base.remove_alternate_images();
    assert!(!base.has_alternate_images());
}

#[test]
fn alternate_image_over_caller_pixels_stays_readable() {
    require_sdl!();
    let mut hidpi_pixels = vec![0u8; 4 * 4 * 4];
    let mut base: Surface<'_> = filled(2, 2, RED);
    let mut hidpi = Surface::from_pixels(4, 4, PixelFormat::RGBA8888, &mut hidpi_pixels, 16).unwrap();
    let blue = hidpi.map_rgba(BLUE);
    hidpi.fill_rect(None, blue).unwrap();
    base.add_alternate_image(hidpi).unwrap();

    let images = base.images().unwrap();
    assert_eq!(images[1].read_pixel(0, 0).unwrap(), BLUE);
}

// ── BMP ─────────────────────────────────────────────────────────

#[test]
fn bmp_file_round_trip() {
    require_sdl!();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tool.bmp");
    let mut surface = filled(3, 2, RED);
    surface.write_pixel(2, 1, BLUE).unwrap();
    surface.save_bmp(&path).unwrap();

    let loaded = Surface::load_bmp(&path).unwrap();
    assert_eq!((loaded.width(), loaded.height()), (3, 2));
    assert_eq!(loaded.read_pixel(2, 1).unwrap(), BLUE);
    assert_eq!(loaded.read_pixel(0, 0).unwrap(), RED);
}

#[test]
fn bmp_stream_round_trip() {
    require_sdl!();
    let surface = filled(2, 2, BLUE);
    let mut stream = IoStream::from_dynamic_mem().unwrap();
    surface.save_bmp_io(&mut stream).unwrap();
    assert!(stream.size().unwrap() > 0);
    stream.seek(0, IoWhence::Set).unwrap();
    let loaded = Surface::load_bmp_io(&mut stream).unwrap();
    assert_eq!(loaded.read_pixel(1, 1).unwrap(), BLUE);
}

#[test]
fn loading_garbage_fails() {
    require_sdl!();
    let mut stream = IoStream::from_const_mem(b"not a bitmap").unwrap();
    assert!(Surface::load_bmp_io(&mut stream).is_err());
}

// ── Buffer conversion ───────────────────────────────────────────

#[test]
fn convert_pixels_swaps_channel_order() {
    require_sdl!();
    let src = common::rgba8888(1, 2, 3, 4).to_ne_bytes();
    let mut dst = [0u8; 4];
    convert_pixels(
        1,
        1,
        &PixelSource { format: PixelFormat::RGBA8888, pitch: 4, data: &src },
        &mut PixelTarget { format: PixelFormat::ABGR8888, pitch: 4, data: &mut dst },
    )
    .unwrap();
    assert_eq!(u32::from_ne_bytes(dst), u32::from_be_bytes([4, 3, 2, 1]));
}

#[test]
fn premultiply_buffer() {
    require_sdl!();
    let src = common::rgba8888(255, 255, 255, 0).to_ne_bytes();
    let mut dst = [0xffu8; 4];
    premultiply_alpha(
        1,
        1,
        &PixelSource { format: PixelFormat::RGBA8888, pitch: 4, data: &src },
        &mut PixelTarget { format: PixelFormat::RGBA8888, pitch: 4, data: &mut dst },
        false,
    )
    .unwrap();
    assert_eq!(dst, [0, 0, 0, 0]);
}
