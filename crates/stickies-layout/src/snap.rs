//! Edge snapping and visibility helpers against a work area.

use crate::geom::Rect;

/// Pull `rect` flush against any work area edge within `threshold` pixels.
///
/// Edges are checked in order left, right, top, bottom, each against the
/// rect as moved by the previous check. Size is never changed.
pub fn snap(rect: Rect, area: Rect, threshold: i32) -> Rect {
    let mut r = rect;
    if (r.left() - area.left()).abs() <= threshold {
        r.x = area.left();
    }
    if (r.right() - area.right()).abs() <= threshold {
        r.x = area.right() - r.w;
    }
    if (r.top() - area.top()).abs() <= threshold {
        r.y = area.top();
    }
    if (r.bottom() - area.bottom()).abs() <= threshold {
        r.y = area.bottom() - r.h;
    }
    r
}

/// Any part of `rect` lies inside `area`.
pub fn is_visible(rect: Rect, area: Rect) -> bool {
    rect.intersects(&area)
}

/// Move `rect` back inside `area`, keeping its size.
///
/// Right and bottom overflow are corrected before left and top, so a window
/// larger than the area ends up aligned to the area's top-left corner.
pub fn clamp_into(rect: Rect, area: Rect) -> Rect {
    let mut r = rect;
    if r.right() > area.right() {
        r.x = area.right() - r.w;
    }
    if r.left() < area.left() {
        r.x = area.left();
    }
    if r.bottom() > area.bottom() {
        r.y = area.bottom() - r.h;
    }
    if r.top() < area.top() {
        r.y = area.top();
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0, 0, 1000, 800)
    }

    #[test]
    fn near_corner_snaps_to_corner() {
        assert_eq!(
            snap(Rect::new(5, 5, 300, 200), area(), 20),
            Rect::new(0, 0, 300, 200)
        );
    }

    #[test]
    fn far_from_edges_is_unchanged() {
        let r = Rect::new(50, 50, 300, 200);
        assert_eq!(snap(r, area(), 20), r);
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(snap(Rect::new(20, 100, 300, 200), area(), 20).x, 0);
        assert_eq!(snap(Rect::new(21, 100, 300, 200), area(), 20).x, 21);
    }

    #[test]
    fn right_and_bottom_snap() {
        let r = snap(Rect::new(690, 585, 300, 200), area(), 20);
        assert_eq!(r, Rect::new(700, 600, 300, 200));
    }

    #[test]
    fn offset_work_area() {
        let a = Rect::new(0, 40, 1000, 760);
        assert_eq!(snap(Rect::new(3, 50, 300, 200), a, 20).origin().y, 40);
    }

    #[test]
    fn visibility_needs_positive_overlap() {
        assert!(is_visible(Rect::new(990, 790, 300, 200), area()));
        assert!(!is_visible(Rect::new(1000, 0, 300, 200), area()));
        assert!(!is_visible(Rect::new(-300, -200, 300, 200), area()));
    }

    #[test]
    fn clamp_pulls_windows_back() {
        assert_eq!(
            clamp_into(Rect::new(900, 700, 300, 200), area()),
            Rect::new(700, 600, 300, 200)
        );
        assert_eq!(
            clamp_into(Rect::new(-50, -10, 300, 200), area()),
            Rect::new(0, 0, 300, 200)
        );
        let inside = Rect::new(100, 100, 300, 200);
        assert_eq!(clamp_into(inside, area()), inside);
    }

    #[test]
    fn oversized_window_aligns_top_left() {
        assert_eq!(
            clamp_into(Rect::new(500, 500, 1200, 900), area()),
            Rect::new(0, 0, 1200, 900)
        );
    }
}
