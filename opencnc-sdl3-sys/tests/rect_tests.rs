use opencnc_sdl3_sys::*;

fn rect(x: i32, y: i32, w: i32, h: i32) -> SDL_Rect {
    SDL_Rect { x, y, w, h }
}

fn frect(x: f32, y: f32, w: f32, h: f32) -> SDL_FRect {
    SDL_FRect { x, y, w, h }
}

#[test]
fn point_in_rect_is_half_open() {
    let r = rect(0, 0, 10, 10);
    assert!(SDL_PointInRect(&SDL_Point { x: 0, y: 0 }, &r));
    assert!(SDL_PointInRect(&SDL_Point { x: 9, y: 9 }, &r));
    assert!(!SDL_PointInRect(&SDL_Point { x: 10, y: 5 }, &r));
    assert!(!SDL_PointInRect(&SDL_Point { x: 5, y: 10 }, &r));
    assert!(!SDL_PointInRect(&SDL_Point { x: -1, y: 0 }, &r));
}

#[test]
fn point_in_rect_near_integer_limits() {
    let r = rect(i32::MAX - 1, i32::MIN, 10, 10);
    assert!(SDL_PointInRect(&SDL_Point { x: i32::MAX, y: i32::MIN + 9 }, &r));
    assert!(!SDL_PointInRect(&SDL_Point { x: i32::MAX - 2, y: i32::MIN }, &r));
}

#[test]
fn point_in_float_rect_includes_far_edge() {
    let r = frect(0.0, 0.0, 10.0, 10.0);
    assert!(SDL_PointInRectFloat(&SDL_FPoint { x: 10.0, y: 10.0 }, &r));
    assert!(!SDL_PointInRectFloat(&SDL_FPoint { x: 10.5, y: 0.0 }, &r));
}

#[test]
fn rect_empty() {
    assert!(SDL_RectEmpty(&rect(0, 0, 0, 5)));
    assert!(SDL_RectEmpty(&rect(0, 0, 5, -1)));
    assert!(!SDL_RectEmpty(&rect(0, 0, 1, 1)));
}

#[test]
fn float_rect_empty_only_when_negative() {
    assert!(!SDL_RectEmptyFloat(&frect(0.0, 0.0, 0.0, 0.0)));
    assert!(SDL_RectEmptyFloat(&frect(0.0, 0.0, -0.5, 1.0)));
}

#[test]
fn rects_equal() {
    assert!(SDL_RectsEqual(&rect(1, 2, 3, 4), &rect(1, 2, 3, 4)));
    assert!(!SDL_RectsEqual(&rect(1, 2, 3, 4), &rect(1, 2, 3, 5)));
}

#[test]
fn rects_equal_epsilon() {
    let a = frect(1.0, 2.0, 3.0, 4.0);
    let b = frect(1.05, 2.0, 3.0, 4.0);
    assert!(SDL_RectsEqualEpsilon(&a, &b, 0.1));
    assert!(!SDL_RectsEqualEpsilon(&a, &b, 0.01));
    assert!(SDL_RectsEqualFloat(&a, &a));
    assert!(!SDL_RectsEqualFloat(&a, &b));
}
