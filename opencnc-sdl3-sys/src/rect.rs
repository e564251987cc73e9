//! Inline rectangle helpers from `SDL_rect.h`.
//!
//! These are header-only in C, so they are implemented here instead of being
//! resolved from the library.

use crate::types::{SDL_FPoint, SDL_FRect, SDL_Point, SDL_Rect};

/// Tolerance used by [`SDL_RectsEqualFloat`].
pub const SDL_FLT_EPSILON: f32 = f32::EPSILON;

/// The far edges are exclusive. Compared in `i64` so rects near the `i32`
/// limits cannot overflow.
#[must_use]
pub fn SDL_PointInRect(p: &SDL_Point, r: &SDL_Rect) -> bool {
    let (px, py) = (i64::from(p.x), i64::from(p.y));
    let (x, y) = (i64::from(r.x), i64::from(r.y));
    px >= x && px < x + i64::from(r.w) && py >= y && py < y + i64::from(r.h)
}

#[must_use]
pub fn SDL_RectEmpty(r: &SDL_Rect) -> bool {
    r.w <= 0 || r.h <= 0
}

#[must_use]
pub fn SDL_RectsEqual(a: &SDL_Rect, b: &SDL_Rect) -> bool {
    a == b
}

/// Float variant of [`SDL_PointInRect`]; the far edges are inclusive.
#[must_use]
pub fn SDL_PointInRectFloat(p: &SDL_FPoint, r: &SDL_FRect) -> bool {
    p.x >= r.x && p.x <= r.x + r.w && p.y >= r.y && p.y <= r.y + r.h
}

/// A float rect is empty when either extent is negative. Zero-sized float
/// rects still describe a point or a line.
#[must_use]
pub fn SDL_RectEmptyFloat(r: &SDL_FRect) -> bool {
    r.w < 0.0 || r.h < 0.0
}

#[must_use]
pub fn SDL_RectsEqualEpsilon(a: &SDL_FRect, b: &SDL_FRect, epsilon: f32) -> bool {
    a == b
        || ((a.x - b.x).abs() <= epsilon
            && (a.y - b.y).abs() <= epsilon
            && (a.w - b.w).abs() <= epsilon
            && (a.h - b.h).abs() <= epsilon)
}

#[must_use]
pub fn SDL_RectsEqualFloat(a: &SDL_FRect, b: &SDL_FRect) -> bool {
    SDL_RectsEqualEpsilon(a, b, SDL_FLT_EPSILON)
}
