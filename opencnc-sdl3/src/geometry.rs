//! Points and rectangles.
//!
//! The value types convert losslessly to and from their native layouts. Pure
//! predicates run in Rust; intersection, union, line clipping and point
//! enclosure are delegated to SDL.

use std::ffi::c_int;

use opencnc_sdl3_sys as sys;
use serde::{Deserialize, Serialize};

use crate::error::{Sdl3Error, Sdl3Result};
use crate::native::{api, to_c_int};

/// An integer point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A floating-point point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FPoint {
    pub x: f32,
    pub y: f32,
}

/// An integer rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// A floating-point rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl FPoint {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ── Marshalling ─────────────────────────────────────────────────

impl From<Point> for sys::SDL_Point {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<sys::SDL_Point> for Point {
    fn from(p: sys::SDL_Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<FPoint> for sys::SDL_FPoint {
    fn from(p: FPoint) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<sys::SDL_FPoint> for FPoint {
    fn from(p: sys::SDL_FPoint) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Rect> for sys::SDL_Rect {
    fn from(r: Rect) -> Self {
        Self { x: r.x, y: r.y, w: r.w, h: r.h }
    }
}

impl From<sys::SDL_Rect> for Rect {
    fn from(r: sys::SDL_Rect) -> Self {
        Self { x: r.x, y: r.y, w: r.w, h: r.h }
    }
}

impl From<FRect> for sys::SDL_FRect {
    fn from(r: FRect) -> Self {
        Self { x: r.x, y: r.y, w: r.w, h: r.h }
    }
}

impl From<sys::SDL_FRect> for FRect {
    fn from(r: sys::SDL_FRect) -> Self {
        Self { x: r.x, y: r.y, w: r.w, h: r.h }
    }
}

impl From<Rect> for FRect {
    fn from(r: Rect) -> Self {
        r.to_frect()
    }
}

// ── Rect ────────────────────────────────────────────────────────

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle with no area (width or height not positive).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        sys::SDL_RectEmpty(&(*self).into())
    }

    /// Whether `point` lies inside. The right and bottom edges are exclusive.
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        sys::SDL_PointInRect(&point.into(), &(*self).into())
    }

    #[must_use]
    pub fn to_frect(&self) -> FRect {
        FRect::new(self.x as f32, self.y as f32, self.w as f32, self.h as f32)
    }

    pub fn has_intersection(&self, other: &Rect) -> Sdl3Result<bool> {
        let api = api()?;
        let (a, b): (sys::SDL_Rect, sys::SDL_Rect) = ((*self).into(), (*other).into());
        // SAFETY: both pointers reference live stack values.
        Ok(unsafe { (api.SDL_HasRectIntersection)(&a, &b) })
    }

    /// The overlapping area, or `None` when the rectangles do not meet.
    pub fn intersection(&self, other: &Rect) -> Sdl3Result<Option<Rect>> {
        let api = api()?;
        let (a, b): (sys::SDL_Rect, sys::SDL_Rect) = ((*self).into(), (*other).into());
        let mut out = sys::SDL_Rect::default();
        // SAFETY: inputs and output reference live stack values.
        let hit = unsafe { (api.SDL_GetRectIntersection)(&a, &b, &mut out) };
        Ok(hit.then(|| out.into()))
    }

    /// The smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Sdl3Result<Rect> {
        let api = api()?;
        let (a, b): (sys::SDL_Rect, sys::SDL_Rect) = ((*self).into(), (*other).into());
        let mut out = sys::SDL_Rect::default();
        // SAFETY: inputs and output reference live stack values.
        let ok = unsafe { (api.SDL_GetRectUnion)(&a, &b, &mut out) };
        crate::error::check(api, ok, Sdl3Error::Geometry)?;
        Ok(out.into())
    }

    /// Clips the segment to this rectangle, or `None` if it misses entirely.
    pub fn line_intersection(&self, line: (Point, Point)) -> Sdl3Result<Option<(Point, Point)>> {
        let api = api()?;
        let rect: sys::SDL_Rect = (*self).into();
        let (mut x1, mut y1, mut x2, mut y2): (c_int, c_int, c_int, c_int) =
            (line.0.x, line.0.y, line.1.x, line.1.y);
        // SAFETY: every pointer references a live local.
        let hit = unsafe {
            (api.SDL_GetRectAndLineIntersection)(&rect, &mut x1, &mut y1, &mut x2, &mut y2)
        };
        Ok(hit.then(|| (Point::new(x1, y1), Point::new(x2, y2))))
    }

    /// The smallest rectangle enclosing `points`, considering only those
    /// inside `clip` when given. `None` when no point qualifies.
    pub fn enclosing_points(points: &[Point], clip: Option<Rect>) -> Sdl3Result<Option<Rect>> {
        if points.is_empty() {
            return Ok(None);
        }
        let api = api()?;
        let count = to_c_int(points.len(), "point count").map_err(Sdl3Error::Geometry)?;
        let native: Vec<sys::SDL_Point> = points.iter().copied().map(Into::into).collect();
        let clip: Option<sys::SDL_Rect> = clip.map(Into::into);
        let clip_ptr = clip.as_ref().map_or(std::ptr::null(), |c| c as *const _);
        let mut out = sys::SDL_Rect::default();
        // SAFETY: `native` holds `count` points; `clip_ptr` is null or a live local.
        let hit = unsafe { (api.SDL_GetRectEnclosingPoints)(native.as_ptr(), count, clip_ptr, &mut out) };
        Ok(hit.then(|| out.into()))
    }
}

// ── FRect ───────────────────────────────────────────────────────

impl FRect {
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle with no area (width or height not positive).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Whether `point` lies inside. All edges are inclusive.
    #[must_use]
    pub fn contains_point(&self, point: FPoint) -> bool {
        sys::SDL_PointInRectFloat(&point.into(), &(*self).into())
    }

    /// Component-wise equality within [`sys::SDL_FLT_EPSILON`].
    #[must_use]
    pub fn equals(&self, other: &FRect) -> bool {
        sys::SDL_RectsEqualFloat(&(*self).into(), &(*other).into())
    }

    /// Component-wise equality within `epsilon`.
    #[must_use]
    pub fn equals_epsilon(&self, other: &FRect, epsilon: f32) -> bool {
        sys::SDL_RectsEqualEpsilon(&(*self).into(), &(*other).into(), epsilon)
    }

    pub fn has_intersection(&self, other: &FRect) -> Sdl3Result<bool> {
        let api = api()?;
        let (a, b): (sys::SDL_FRect, sys::SDL_FRect) = ((*self).into(), (*other).into());
        // SAFETY: both pointers reference live stack values.
        Ok(unsafe { (api.SDL_HasRectIntersectionFloat)(&a, &b) })
    }

    pub fn intersection(&self, other: &FRect) -> Sdl3Result<Option<FRect>> {
        let api = api()?;
        let (a, b): (sys::SDL_FRect, sys::SDL_FRect) = ((*self).into(), (*other).into());
        let mut out = sys::SDL_FRect::default();
        // SAFETY: inputs and output reference live stack values.
        let hit = unsafe { (api.SDL_GetRectIntersectionFloat)(&a, &b, &mut out) };
        Ok(hit.then(|| out.into()))
    }

    pub fn union(&self, other: &FRect) -> Sdl3Result<FRect> {
        let api = api()?;
        let (a, b): (sys::SDL_FRect, sys::SDL_FRect) = ((*self).into(), (*other).into());
        let mut out = sys::SDL_FRect::default();
        // SAFETY: inputs and output reference live stack values.
        let ok = unsafe { (api.SDL_GetRectUnionFloat)(&a, &b, &mut out) };
        crate::error::check(api, ok, Sdl3Error::Geometry)?;
        Ok(out.into())
    }

    pub fn line_intersection(&self, line: (FPoint, FPoint)) -> Sdl3Result<Option<(FPoint, FPoint)>> {
        let api = api()?;
        let rect: sys::SDL_FRect = (*self).into();
        let (mut x1, mut y1, mut x2, mut y2) = (line.0.x, line.0.y, line.1.x, line.1.y);
        // SAFETY: every pointer references a live local.
        let hit = unsafe {
            (api.SDL_GetRectAndLineIntersectionFloat)(&rect, &mut x1, &mut y1, &mut x2, &mut y2)
        };
        Ok(hit.then(|| (FPoint::new(x1, y1), FPoint::new(x2, y2))))
    }

    pub fn enclosing_points(points: &[FPoint], clip: Option<FRect>) -> Sdl3Result<Option<FRect>> {
        if points.is_empty() {
            return Ok(None);
        }
        let api = api()?;
        let count = to_c_int(points.len(), "point count").map_err(Sdl3Error::Geometry)?;
        let native: Vec<sys::SDL_FPoint> = points.iter().copied().map(Into::into).collect();
        let clip: Option<sys::SDL_FRect> = clip.map(Into::into);
        let clip_ptr = clip.as_ref().map_or(std::ptr::null(), |c| c as *const _);
        let mut out = sys::SDL_FRect::default();
        // SAFETY: `native` holds `count` points; `clip_ptr` is null or a live local.
        let hit = unsafe {
            (api.SDL_GetRectEnclosingPointsFloat)(native.as_ptr(), count, clip_ptr, &mut out)
        };
        Ok(hit.then(|| out.into()))
    }
}
