//! Bulk arrangement of every live note: grid and cascade.
//!
//! Both strategies assign frames directly from the window's index in the
//! list; they do not consult the occupancy ledger because the list already
//! is the complete live set. Plans are returned as one `Option<Rect>` per
//! input window, where `None` means "leave this window where it is".

use config::LayoutConfig;
use stickies_ids::NoteId;
use tracing::debug;

use crate::geom::{Point, Rect, Size};

/// A live window that bulk arrangement can move.
pub trait ArrangeTarget {
    /// Identity used for history updates, if the window has one.
    fn note_id(&self) -> Option<NoteId>;
    /// Current frame.
    fn frame(&self) -> Rect;
    /// Move/resize the window.
    fn set_frame(&mut self, rect: Rect);
}

/// Arrangement spacing derived from the layout config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrangement {
    /// Gap from the work area edge and between grid cells.
    margin: i32,
    /// Grid pitch: default note size plus margin.
    cell: Size,
    /// Diagonal offset between cascaded windows.
    cascade_step: i32,
}

impl Arrangement {
    /// Spacing from `cfg`.
    pub fn from_config(cfg: &LayoutConfig) -> Self {
        Self::new(
            cfg.margin,
            Size::new(cfg.default_width, cfg.default_height),
            cfg.cascade_step,
        )
    }

    /// Spacing with an explicit default window size.
    pub fn new(margin: i32, default_size: Size, cascade_step: i32) -> Self {
        Self {
            margin,
            cell: Size::new(
                (default_size.w + margin).max(1),
                (default_size.h + margin).max(1),
            ),
            cascade_step,
        }
    }

    /// Column count used when the caller does not specify one.
    pub fn auto_columns(&self, area: Rect) -> u32 {
        let ratio = f64::from(area.w.max(0)) / f64::from(self.cell.w);
        (ratio.sqrt().floor() as u32).max(1)
    }

    /// Row-major grid: window `i` goes to row `i / cols`, column `i % cols`.
    ///
    /// A window whose frame would leave the work area at its cell is skipped.
    pub fn grid(&self, area: Rect, frames: &[Rect], columns: Option<u32>) -> Vec<Option<Rect>> {
        let cols = columns
            .unwrap_or_else(|| self.auto_columns(area))
            .max(1) as usize;
        let origin = Point::new(area.x + self.margin, area.y + self.margin);
        frames
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                let (row, col) = ((i / cols) as i32, (i % cols) as i32);
                let at = Point::new(
                    origin.x + col * self.cell.w,
                    origin.y + row * self.cell.h,
                );
                let target = frame.with_origin(at);
                if area.contains(&target) {
                    Some(target)
                } else {
                    debug!(index = i, %target, %area, "grid arrangement skips window");
                    None
                }
            })
            .collect()
    }

    /// Diagonal cascade from the work area's top-left corner.
    ///
    /// Window `i` is offset by `cascade_step * i` on both axes. A window that
    /// would leave the work area at its offset goes to the start point
    /// instead.
    pub fn cascade(&self, area: Rect, frames: &[Rect]) -> Vec<Option<Rect>> {
        let start = Point::new(area.x + self.margin, area.y + self.margin);
        frames
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                let off = self.cascade_step * i as i32;
                let target = frame.with_origin(Point::new(start.x + off, start.y + off));
                if area.contains(&target) {
                    Some(target)
                } else {
                    debug!(index = i, %target, "cascade wraps to start");
                    Some(frame.with_origin(start))
                }
            })
            .collect()
    }
}

impl Default for Arrangement {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default())
    }
}
