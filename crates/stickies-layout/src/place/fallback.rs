use tracing::debug;

use crate::geom::{Point, Rect, Size};

/// Degraded placement used once the grid has no free cell.
///
/// Centers the window in `area` and pushes it diagonally by `step` pixels
/// per occupied rectangle, so repeated fallbacks do not stack exactly. The
/// result is not checked against the area: with many windows open it may
/// extend past the bottom-right edge.
pub(super) fn staggered_center(area: Rect, size: Size, occupied: usize, step: i32) -> Rect {
    let cx = area.x + (area.w - size.w).div_euclid(2);
    let cy = area.y + (area.h - size.h).div_euclid(2);
    let offset = step.saturating_mul(i32::try_from(occupied).unwrap_or(i32::MAX));
    let rect = Rect::from_parts(
        Point::new(cx.saturating_add(offset), cy.saturating_add(offset)),
        size,
    );
    if !area.contains(&rect) {
        debug!(%rect, %area, occupied, "fallback placement extends past the work area");
    }
    rect
}
